//! Unit tests for artifact.rs

use super::*;

// ============================================================================
// ARTIFACT INVARIANT TESTS
// ============================================================================

#[test]
fn test_failed_artifact_has_no_instructions() {
    let artifact = CompiledProgramArtifact::failed("syntax error");
    assert!(!artifact.success);
    assert!(artifact.instructions.is_empty());
    assert_eq!(artifact.diagnostics, "syntax error");
    assert!(artifact.params.is_empty());
    assert!(artifact.vertex_input.is_none());
}

#[test]
fn test_failed_artifact_not_machine_specific() {
    let artifact = CompiledProgramArtifact::failed("");
    assert!(!artifact.machine_specific);
}

// ============================================================================
// PARAM TABLE TESTS
// ============================================================================

fn sample_param(name: &str, binding: u32) -> GpuParamDesc {
    GpuParamDesc {
        name: name.to_string(),
        set: 0,
        binding,
        param_type: GpuParamType::UniformBuffer,
        size: Some(64),
    }
}

#[test]
fn test_param_table_lookup_by_name() {
    let mut table = GpuParamTable::default();
    table.push(sample_param("globals", 0));
    table.push(sample_param("lights", 1));

    let found = table.param("lights").expect("lights should be present");
    assert_eq!(found.binding, 1);
    assert!(table.param("missing").is_none());
}

#[test]
fn test_param_table_len_and_iter() {
    let mut table = GpuParamTable::default();
    assert!(table.is_empty());

    table.push(sample_param("globals", 0));
    table.push(sample_param("lights", 1));

    assert_eq!(table.len(), 2);
    let names: Vec<&str> = table.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["globals", "lights"]);
}
