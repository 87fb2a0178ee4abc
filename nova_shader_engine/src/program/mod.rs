/// Program module - descriptors, compile artifacts, backends and the registry

// Module declarations
pub mod descriptor;
pub mod artifact;
pub mod backend;
pub mod program;
pub mod null_backend;
pub mod registry;

#[cfg(test)]
pub mod mock_backend;

// Re-export the program data model and registry
pub use descriptor::*;
pub use artifact::*;
pub use backend::*;
pub use program::*;
pub use null_backend::*;
pub use registry::*;
