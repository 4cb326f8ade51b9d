use crate::config::RulesConfig;

use super::*;

fn check(path: &str, content: &str) -> Vec<crate::violation::Violation> {
    let boundary = ModuleBoundary::from_config(&RulesConfig::default());
    boundary.check(&FileContext::new(path, content))
}

#[test]
fn module_file_including_server_internal_fails() {
    let src = "#include \"accel/bvh.h\"\n";
    let violations = check("src/modules/graphics/ray_renderer.cpp", src);
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].rule, "module/boundary");
    assert_eq!(violations[0].line, 1);
    assert!(violations[0].message.contains("accel/bvh.h"));
    assert!(violations[0].message.contains("api/ray_service.h"));
}

#[test]
fn non_module_file_may_include_internals() {
    let src = "#include \"accel/bvh.h\"\n";
    assert!(check("src/dispatch/ray_dispatcher.cpp", src).is_empty());
}

#[test]
fn allowed_includes_pass() {
    let src = "\
#include \"api/ray_service.h\"
#include <vector>
";
    assert!(check("src/modules/graphics/ray_renderer.cpp", src).is_empty());
}

#[test]
fn angle_bracket_includes_are_matched() {
    let src = "#include <dispatch/ray_dispatcher.h>\n";
    let violations = check("src/modules/audio/echo.cpp", src);
    assert_eq!(violations.len(), 1);
}

#[test]
fn each_forbidden_include_is_its_own_violation() {
    let src = "\
#include \"accel/bvh.h\"
#include \"gpu/gpu_ray_caster.h\"
";
    let violations = check("src/modules/graphics/ray_renderer.cpp", src);
    assert_eq!(violations.len(), 2);
    assert_eq!(violations[1].line, 2);
}

#[test]
fn path_rooted_at_module_segment_is_covered() {
    let src = "#include \"raytracer_server.h\"\n";
    let violations = check("modules/graphics/ray_renderer.cpp", src);
    assert_eq!(violations.len(), 1);
}

#[test]
fn similar_but_distinct_include_passes() {
    // Suffix matching requires a path-segment boundary.
    let src = "#include \"my_raytracer_server.h\"\n";
    assert!(check("src/modules/graphics/ray_renderer.cpp", src).is_empty());
}
