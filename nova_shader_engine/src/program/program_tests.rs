//! Unit tests for program.rs
//!
//! Validates the Uninitialized → Loading → {Loaded, Failed} state machine
//! and the guarded content accessors.

use std::sync::Arc;

use super::*;
use crate::program::mock_backend::MockBackend;
use crate::program::{DeviceFlags, GpuProgramDesc, ProgramBackend, ProgramKind};

fn vertex_desc(language: &str) -> GpuProgramDesc {
    GpuProgramDesc {
        language: language.to_string(),
        kind: ProgramKind::Vertex,
        source: "void main() {}".to_string(),
        entry_point: "main".to_string(),
    }
}

// ============================================================================
// Tests: Initial State
// ============================================================================

#[test]
fn test_new_program_is_uninitialized() {
    let backend = Arc::new(MockBackend::succeeding("glsl", vec![1, 2, 3]));
    let program = backend.create(vertex_desc("glsl"), DeviceFlags::default());

    assert_eq!(program.state(), ProgramState::Uninitialized);
    assert!(!program.is_loaded());
}

#[test]
fn test_queries_before_load_are_empty() {
    let backend = Arc::new(MockBackend::succeeding("glsl", vec![1, 2, 3]));
    let program = backend.create(vertex_desc("glsl"), DeviceFlags::default());

    assert!(program.artifact().is_none());
    assert!(program.instructions().is_empty());
    assert!(program.params().is_none());
    assert!(program.vertex_input().is_none());
    assert_eq!(program.diagnostics(), "");
}

// ============================================================================
// Tests: Load Transitions
// ============================================================================

#[test]
fn test_load_success_reaches_loaded() {
    let backend = Arc::new(MockBackend::succeeding("glsl", vec![7; 16]));
    let mut program = backend.clone().create(vertex_desc("glsl"), DeviceFlags::default());

    program.load();

    assert_eq!(program.state(), ProgramState::Loaded);
    assert!(program.is_loaded());
    assert_eq!(program.instructions().len(), 16);
    assert_eq!(backend.compile_count(), 1);
}

#[test]
fn test_load_failure_reaches_failed() {
    let backend = Arc::new(MockBackend::failing("glsl", "line 3: bad token"));
    let mut program = backend.create(vertex_desc("glsl"), DeviceFlags::default());

    program.load();

    assert_eq!(program.state(), ProgramState::Failed);
    assert!(!program.is_loaded());
    assert!(program.instructions().is_empty());
    assert_eq!(program.diagnostics(), "line 3: bad token");
}

// ============================================================================
// Tests: Terminal States
// ============================================================================

#[test]
fn test_load_is_a_no_op_once_loaded() {
    let backend = Arc::new(MockBackend::succeeding("glsl", vec![0xAB]));
    let mut program = backend.clone().create(vertex_desc("glsl"), DeviceFlags::default());

    program.load();
    program.load();
    program.load();

    assert_eq!(program.state(), ProgramState::Loaded);
    assert_eq!(backend.compile_count(), 1);
}

#[test]
fn test_failed_stays_failed() {
    let backend = Arc::new(MockBackend::failing("glsl", "nope"));
    let mut program = backend.clone().create(vertex_desc("glsl"), DeviceFlags::default());

    program.load();
    program.load();

    assert_eq!(program.state(), ProgramState::Failed);
    assert_eq!(backend.compile_count(), 1);
}

// ============================================================================
// Tests: Handle Metadata
// ============================================================================

#[test]
fn test_handle_keeps_descriptor_and_kind() {
    let backend = Arc::new(MockBackend::succeeding("glsl", vec![]));
    let program = backend.create(vertex_desc("glsl"), DeviceFlags::PRIMARY);

    assert_eq!(program.kind(), ProgramKind::Vertex);
    assert_eq!(program.descriptor().language, "glsl");
    assert_eq!(program.descriptor().entry_point, "main");
    assert_eq!(program.device_mask(), DeviceFlags::PRIMARY);
}

#[test]
fn test_mock_backend_programs_report_supported() {
    let backend = Arc::new(MockBackend::succeeding("glsl", vec![]));
    let program = backend.create_empty(ProgramKind::Compute, DeviceFlags::default());

    assert!(program.is_supported());
    assert_eq!(program.kind(), ProgramKind::Compute);
    assert!(program.descriptor().source.is_empty());
}
