use super::*;

#[test]
fn scan_defaults_match_project_layout() {
    let scan = ScanConfig::default();
    assert_eq!(scan.roots, vec!["src"]);
    assert_eq!(scan.extensions, vec!["h", "cpp"]);
    assert!(scan.skip_dirs.contains(&"godot-cpp".to_string()));
    assert!(scan.skip_suffixes.contains(&".gen.h".to_string()));
    assert!(scan.exclude.is_empty());
}

#[test]
fn rule_defaults_cover_the_assertion_macros() {
    let rules = RulesConfig::default();
    assert_eq!(rules.min_assertions, 2);
    assert_eq!(rules.min_function_body_lines, 8);
    assert!(rules.assertion_macros.contains(&"RT_ASSERT".to_string()));
    assert!(rules.assertion_macros.contains(&"RT_UNREACHABLE".to_string()));
    assert_eq!(rules.module_segment, "modules");
    assert!(
        rules
            .forbidden_module_includes
            .contains(&"raytracer_server.h".to_string())
    );
    assert!(!rules.owned_members.is_empty());
    assert!(!rules.scene_constants.is_empty());
}

#[test]
fn empty_document_deserializes_to_defaults() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn partial_section_keeps_sibling_defaults() {
    let config: Config = toml::from_str("[scan]\nroots = [\"modules\"]\n").unwrap();
    assert_eq!(config.scan.roots, vec!["modules"]);
    assert_eq!(config.scan.extensions, vec!["h", "cpp"]);
    assert_eq!(config.rules, RulesConfig::default());
}

#[test]
fn owned_member_table_roundtrips() {
    let doc = r#"
[rules]
owned_members = [
    { pattern = '\bfog_\w+', owner = "the WorldEnvironment fog settings" },
]
"#;
    let config: Config = toml::from_str(doc).unwrap();
    assert_eq!(config.rules.owned_members.len(), 1);
    assert_eq!(config.rules.owned_members[0].pattern, r"\bfog_\w+");
}
