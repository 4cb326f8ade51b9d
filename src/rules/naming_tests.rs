use super::*;

fn check(content: &str) -> Vec<crate::violation::Violation> {
    ClassPascal::new().check(&FileContext::new("src/core/types.h", content))
}

#[test]
fn pascal_case_struct_passes() {
    assert!(check("struct RayBatch {\n};\n").is_empty());
}

#[test]
fn lowercase_struct_fails() {
    let violations = check("struct ray_batch {\n};\n");
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].rule, "naming/class-pascal");
    assert_eq!(violations[0].line, 1);
    assert!(violations[0].message.contains("ray_batch"));
}

#[test]
fn class_with_inheritance_is_checked() {
    let violations = check("class bad_renderer : public Node {\n};\n");
    assert_eq!(violations.len(), 1);
}

#[test]
fn all_caps_names_are_skipped() {
    assert!(check("struct GPU_PACKED_V2 {\n};\n").is_empty());
}

#[test]
fn underscore_prefixed_names_are_skipped() {
    assert!(check("struct _InternalProbe {\n};\n").is_empty());
}

#[test]
fn interface_prefix_is_stripped_before_test() {
    assert!(check("class IRayService {\n};\n").is_empty());
}

#[test]
fn leading_i_with_lowercase_next_is_not_an_interface() {
    // 'Intersection' keeps its I; it is already PascalCase.
    assert!(check("struct Intersection {\n};\n").is_empty());
}

#[test]
fn lowercase_after_interface_prefix_fails() {
    // The prefix strip only happens for I + uppercase, so 'Iservice'
    // stays as-is and passes the uppercase-first test.
    assert!(check("class Iservice {\n};\n").is_empty());
}

#[test]
fn forward_declarations_are_not_matched() {
    // No brace or colon after the name.
    assert!(check("struct RayBatch;\n").is_empty());
}

#[test]
fn name_with_underscore_mid_word_fails() {
    let violations = check("struct Ray_Batch {\n};\n");
    assert_eq!(violations.len(), 1);
}
