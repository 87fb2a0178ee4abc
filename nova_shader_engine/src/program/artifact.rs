/// Compiled program artifact and reflection data model

/// Type of a reflected shader parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpuParamType {
    /// Uniform/constant buffer
    UniformBuffer,
    /// Storage buffer
    StorageBuffer,
    /// Combined image + sampler
    CombinedImageSampler,
    /// Sampled image (no sampler)
    SampledImage,
    /// Standalone sampler
    Sampler,
    /// Storage image
    StorageImage,
    /// Push constant block
    PushConstant,
}

/// Description of a single reflected shader parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GpuParamDesc {
    /// Parameter name as it appears in the shader (may be empty when the
    /// binary was compiled without debug names)
    pub name: String,
    /// Descriptor set index
    pub set: u32,
    /// Binding index within the set
    pub binding: u32,
    /// Parameter type
    pub param_type: GpuParamType,
    /// Size in bytes, when the type has a known byte size
    pub size: Option<u32>,
}

/// Owned table of reflected shader parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GpuParamTable {
    params: Vec<GpuParamDesc>,
}

impl GpuParamTable {
    /// Add a parameter to the table
    pub fn push(&mut self, param: GpuParamDesc) {
        self.params.push(param);
    }

    /// Look up a parameter by name
    pub fn param(&self, name: &str) -> Option<&GpuParamDesc> {
        self.params.iter().find(|p| p.name == name)
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// True when the table holds no parameters
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Iterate over the parameters
    pub fn iter(&self) -> impl Iterator<Item = &GpuParamDesc> {
        self.params.iter()
    }
}

/// Format of a reflected vertex input element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexElementFormat {
    Float32,
    Float32x2,
    Float32x3,
    Float32x4,
    Sint32,
    Sint32x2,
    Sint32x3,
    Sint32x4,
    Uint32,
    Uint32x2,
    Uint32x3,
    Uint32x4,
}

/// A single reflected vertex input attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexInputAttribute {
    /// Attribute name (may be empty without debug names)
    pub name: String,
    /// Attribute location in the shader
    pub location: u32,
    /// Element format
    pub format: VertexElementFormat,
}

/// Vertex input signature reflected from a compiled vertex program
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VertexInputLayout {
    /// Attributes, sorted by location
    pub attributes: Vec<VertexInputAttribute>,
}

/// Result of compiling one GPU program
///
/// Created fresh per compile call; ownership moves to the caller.
/// Invariant: when `success` is false, `instructions` is empty.
#[derive(Debug, Clone)]
pub struct CompiledProgramArtifact {
    /// True when compilation produced usable instructions
    pub success: bool,
    /// Human-readable diagnostics (may be non-empty on success, e.g. warnings)
    pub diagnostics: String,
    /// Compiled instruction blob, owned by the artifact
    pub instructions: Vec<u8>,
    /// True when the blob is tied to the compiling machine's architecture
    pub machine_specific: bool,
    /// Reflected shader parameters
    pub params: GpuParamTable,
    /// Reflected vertex input signature (vertex programs only)
    pub vertex_input: Option<VertexInputLayout>,
}

impl CompiledProgramArtifact {
    /// Build a failed artifact with the given diagnostics
    ///
    /// Enforces the invariant that failed artifacts carry no instructions.
    pub fn failed(diagnostics: impl Into<String>) -> Self {
        Self {
            success: false,
            diagnostics: diagnostics.into(),
            instructions: Vec::new(),
            machine_specific: false,
            params: GpuParamTable::default(),
            vertex_input: None,
        }
    }
}

#[cfg(test)]
#[path = "artifact_tests.rs"]
mod tests;
