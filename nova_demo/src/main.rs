//! Demo: register the GLSL backend, compile a shader pair, print reflection

use nova_shader_engine::engine_info;
use nova_shader_engine::nova::program::{
    DeviceFlags, GpuProgramDesc, ProgramKind, ProgramRegistry,
};
use nova_shader_engine_compiler_naga::GLSL_LANGUAGE;

const LOG_SOURCE: &str = "nova::demo";

const VERTEX_SOURCE: &str = r#"#version 450
layout(location = 0) in vec3 in_position;
layout(location = 1) in vec2 in_uv;
layout(location = 0) out vec2 out_uv;
layout(set = 0, binding = 0) uniform Globals {
    mat4 mvp;
} globals;
void main() {
    out_uv = in_uv;
    gl_Position = globals.mvp * vec4(in_position, 1.0);
}
"#;

const FRAGMENT_SOURCE: &str = r#"#version 450
layout(location = 0) in vec2 in_uv;
layout(location = 0) out vec4 out_color;
layout(set = 0, binding = 1) uniform Material {
    vec4 tint;
} material;
void main() {
    out_color = material.tint * vec4(in_uv, 0.0, 1.0);
}
"#;

const BROKEN_SOURCE: &str = "#version 450\nvoid main() {\n    gl_Position = oops;\n}\n";

fn describe(registry: &ProgramRegistry, kind: ProgramKind, source: &str) {
    let program = registry.create_program(
        GpuProgramDesc {
            language: GLSL_LANGUAGE.to_string(),
            kind,
            source: source.to_string(),
            entry_point: "main".to_string(),
        },
        DeviceFlags::default(),
    );

    if !program.is_loaded() {
        engine_info!(LOG_SOURCE, "{:?} program failed:\n{}", kind, program.diagnostics());
        return;
    }

    engine_info!(
        LOG_SOURCE,
        "{:?} program: {} bytes of SPIR-V",
        kind,
        program.instructions().len()
    );

    if let Some(params) = program.params() {
        for param in params.iter() {
            engine_info!(
                LOG_SOURCE,
                "  param '{}' set={} binding={} type={:?} size={:?}",
                param.name,
                param.set,
                param.binding,
                param.param_type,
                param.size
            );
        }
    }

    if let Some(layout) = program.vertex_input() {
        for attribute in &layout.attributes {
            engine_info!(
                LOG_SOURCE,
                "  input '{}' location={} format={:?}",
                attribute.name,
                attribute.location,
                attribute.format
            );
        }
    }
}

fn main() {
    let registry = ProgramRegistry::new();
    if let Err(error) = nova_shader_engine_compiler_naga::register(&registry) {
        engine_info!(LOG_SOURCE, "backend registration failed: {}", error);
        return;
    }

    describe(&registry, ProgramKind::Vertex, VERTEX_SOURCE);
    describe(&registry, ProgramKind::Fragment, FRAGMENT_SOURCE);

    // A deliberately broken shader to show diagnostics with line mapping
    describe(&registry, ProgramKind::Vertex, BROKEN_SOURCE);
}
