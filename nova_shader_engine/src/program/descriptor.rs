/// GPU program descriptor and program kinds

use bitflags::bitflags;

/// GPU program kind (shader stage)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProgramKind {
    /// Vertex program
    Vertex,
    /// Fragment/Pixel program
    Fragment,
    /// Geometry program
    Geometry,
    /// Hull (tessellation control) program
    Hull,
    /// Domain (tessellation evaluation) program
    Domain,
    /// Compute program
    Compute,
}

bitflags! {
    /// Mask selecting which GPU devices a program is created for
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct DeviceFlags: u32 {
        /// Primary device
        const PRIMARY = 0b0001;
    }
}

impl Default for DeviceFlags {
    fn default() -> Self {
        DeviceFlags::PRIMARY
    }
}

/// Descriptor for creating or compiling a GPU program
///
/// Immutable once handed to a backend; consumed by exactly one
/// create/compile call.
#[derive(Debug, Clone)]
pub struct GpuProgramDesc {
    /// Shading language id (e.g. "glsl")
    pub language: String,
    /// Program kind
    pub kind: ProgramKind,
    /// Shader source text
    pub source: String,
    /// Entry point function name
    pub entry_point: String,
}

impl GpuProgramDesc {
    /// Descriptor carrying only a program kind (used by `create_empty`)
    pub fn empty(kind: ProgramKind) -> Self {
        Self {
            language: String::new(),
            kind,
            source: String::new(),
            entry_point: String::new(),
        }
    }
}
