use serde::{Deserialize, Serialize};

/// Top-level configuration, loaded from `.rt-lint.toml`.
///
/// Every field has a default matching the conventions this tool was built
/// for, so an empty (or absent) file yields a fully working setup.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,

    #[serde(default)]
    pub rules: RulesConfig,
}

/// File discovery policy: where to look and what to skip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ScanConfig {
    /// Root directories to scan, relative to the project root.
    #[serde(default = "default_roots")]
    pub roots: Vec<String>,

    /// File extensions to lint.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Exact file names to skip (generated registration boilerplate etc.).
    #[serde(default = "default_skip_files")]
    pub skip_files: Vec<String>,

    /// Directory segment names to skip anywhere in the path.
    #[serde(default = "default_skip_dirs")]
    pub skip_dirs: Vec<String>,

    /// File name suffixes identifying generated code.
    #[serde(default = "default_skip_suffixes")]
    pub skip_suffixes: Vec<String>,

    /// Additional exclude patterns (glob syntax).
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            roots: default_roots(),
            extensions: default_extensions(),
            skip_files: default_skip_files(),
            skip_dirs: default_skip_dirs(),
            skip_suffixes: default_skip_suffixes(),
            exclude: Vec::new(),
        }
    }
}

/// Rule parameters. These are data feeding the checks, not new code paths:
/// adding an assertion macro, a forbidden include or an owned-member
/// pattern is a config edit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RulesConfig {
    /// Minimum assertion count for non-trivial functions.
    #[serde(default = "default_min_assertions")]
    pub min_assertions: usize,

    /// Minimum significant body lines before a function counts as
    /// non-trivial.
    #[serde(default = "default_min_function_body_lines")]
    pub min_function_body_lines: usize,

    /// Assertion macro names recognized by the density check.
    #[serde(default = "default_assertion_macros")]
    pub assertion_macros: Vec<String>,

    /// Path segment marking module code subject to the boundary check.
    #[serde(default = "default_module_segment")]
    pub module_segment: String,

    /// Includes that module code must not reach into.
    #[serde(default = "default_forbidden_module_includes")]
    pub forbidden_module_includes: Vec<String>,

    /// What to include instead, appended to boundary messages.
    #[serde(default = "default_boundary_hint")]
    pub boundary_hint: String,

    /// Struct/class names exempt from the duplicate-state check
    /// (data-transfer carriers that snapshot externally-owned state).
    #[serde(default = "default_exempt_structs")]
    pub exempt_structs: Vec<String>,

    /// Member-name patterns whose value is already owned elsewhere.
    #[serde(default = "default_owned_members")]
    pub owned_members: Vec<OwnedMember>,

    /// Constant-name patterns for scene-owned concepts.
    #[serde(default = "default_scene_constants")]
    pub scene_constants: Vec<SceneConstant>,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            min_assertions: default_min_assertions(),
            min_function_body_lines: default_min_function_body_lines(),
            assertion_macros: default_assertion_macros(),
            module_segment: default_module_segment(),
            forbidden_module_includes: default_forbidden_module_includes(),
            boundary_hint: default_boundary_hint(),
            exempt_structs: default_exempt_structs(),
            owned_members: default_owned_members(),
            scene_constants: default_scene_constants(),
        }
    }
}

/// One (pattern, owner) entry of the duplicate-state table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct OwnedMember {
    /// Regex matched against member declaration lines.
    pub pattern: String,
    /// The external owner and how to read the value from it.
    pub owner: String,
}

/// One (pattern, concept) entry of the scene-constant table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SceneConstant {
    /// Regex matched against constant declaration lines.
    pub pattern: String,
    /// The scene-owned concept being hardcoded.
    pub concept: String,
}

fn default_roots() -> Vec<String> {
    vec!["src".to_string()]
}

fn default_extensions() -> Vec<String> {
    vec!["h".to_string(), "cpp".to_string()]
}

fn default_skip_files() -> Vec<String> {
    [
        "register_types.h",
        "register_types.cpp",
        "example_class.h",
        "example_class.cpp",
    ]
    .map(String::from)
    .to_vec()
}

fn default_skip_dirs() -> Vec<String> {
    ["gen", "__pycache__", "godot-cpp"].map(String::from).to_vec()
}

fn default_skip_suffixes() -> Vec<String> {
    [".gen.h", ".gen.cpp", ".obj"].map(String::from).to_vec()
}

const fn default_min_assertions() -> usize {
    2
}

const fn default_min_function_body_lines() -> usize {
    8
}

fn default_assertion_macros() -> Vec<String> {
    [
        "RT_ASSERT",
        "RT_VERIFY",
        "RT_SLOW_ASSERT",
        "RT_ASSERT_VALID_RAY",
        "RT_ASSERT_FINITE",
        "RT_ASSERT_NOT_NULL",
        "RT_ASSERT_BOUNDS",
        "RT_ASSERT_BOUNDS_U",
        "RT_ASSERT_POSITIVE",
        "RT_ASSERT_NORMALIZED",
        "RT_UNREACHABLE",
    ]
    .map(String::from)
    .to_vec()
}

fn default_module_segment() -> String {
    "modules".to_string()
}

fn default_forbidden_module_includes() -> Vec<String> {
    [
        "raytracer_server.h",
        "accel/bvh.h",
        "accel/mesh_blas.h",
        "accel/scene_tlas.h",
        "accel/blas_instance.h",
        "dispatch/ray_dispatcher.h",
        "dispatch/ray_sort.h",
        "gpu/gpu_ray_caster.h",
    ]
    .map(String::from)
    .to_vec()
}

fn default_boundary_hint() -> String {
    "use api/ray_service.h instead".to_string()
}

fn default_exempt_structs() -> Vec<String> {
    [
        "SceneShadeData",
        "SceneLightData",
        "EnvironmentData",
        "LightData",
        "TraceParams",
        "RaySceneSetup",
    ]
    .map(String::from)
    .to_vec()
}

fn default_owned_members() -> Vec<OwnedMember> {
    let table = [
        (
            r"\bsun_(?:dir|direction|color|energy)\w*",
            "the WorldEnvironment sun; read ShadePass::EnvironmentData via TraceParams::env",
        ),
        (
            r"\bsky_\w+",
            "the WorldEnvironment sky; read ShadePass::EnvironmentData via TraceParams::env",
        ),
        (
            r"\bambient_(?:color|energy|light)\w*",
            "the WorldEnvironment ambient term; read ShadePass::EnvironmentData via TraceParams::env",
        ),
        (
            r"\bcamera_(?:transform|basis|origin|fov|position)\w*",
            "RayCamera; call RayCamera::view() each frame",
        ),
    ];
    table
        .into_iter()
        .map(|(pattern, owner)| OwnedMember {
            pattern: pattern.to_string(),
            owner: owner.to_string(),
        })
        .collect()
}

fn default_scene_constants() -> Vec<SceneConstant> {
    let table = [
        (r"\bSUN_[A-Z0-9_]+", "sun lighting"),
        (r"\bSKY_[A-Z0-9_]+", "sky shading"),
        (r"\bAMBIENT_[A-Z0-9_]+", "ambient lighting"),
        (r"\bCAMERA_[A-Z0-9_]+", "camera parameters"),
    ];
    table
        .into_iter()
        .map(|(pattern, concept)| SceneConstant {
            pattern: pattern.to_string(),
            concept: concept.to_string(),
        })
        .collect()
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
