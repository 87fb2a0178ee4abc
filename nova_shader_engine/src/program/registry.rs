/// ProgramRegistry - language id → compiler backend dispatch

use std::sync::{Arc, Mutex};

use rustc_hash::FxHashMap;

use crate::program::{
    CompiledProgramArtifact, DeviceFlags, GpuProgram, GpuProgramDesc, NullProgramBackend,
    ProgramBackend, ProgramKind, NULL_LANGUAGE,
};
use crate::error::{Error, Result};
use crate::{engine_info, engine_warn};

/// Registry mapping shading-language ids to compiler backends
///
/// Owns every registered backend plus a built-in null backend used as the
/// terminal fallback for unknown languages. All map accesses go through one
/// mutex; the lock is never held across a backend call — lookups clone the
/// backend `Arc` out and release the lock, so long compiles never block
/// registration.
pub struct ProgramRegistry {
    backends: Mutex<FxHashMap<String, Arc<dyn ProgramBackend>>>,
    // Held outside the map so resolve can always fall back without touching
    // map state; the reserved id is never a map key.
    null_backend: Arc<dyn ProgramBackend>,
}

impl ProgramRegistry {
    /// Create a registry with only the built-in null backend
    pub fn new() -> Self {
        Self {
            backends: Mutex::new(FxHashMap::default()),
            null_backend: Arc::new(NullProgramBackend),
        }
    }

    /// Install or replace the backend for a language id
    ///
    /// Last writer wins. The replaced backend (if any) is returned so the
    /// caller can dispose of it; the registry does not reference-count
    /// in-flight users. Registering under the reserved null id is refused.
    pub fn register(
        &self,
        language: &str,
        backend: Arc<dyn ProgramBackend>,
    ) -> Result<Option<Arc<dyn ProgramBackend>>> {
        if language == NULL_LANGUAGE {
            return Err(Error::ReservedLanguage(language.to_string()));
        }

        let replaced = self
            .backends
            .lock()
            .unwrap()
            .insert(language.to_string(), backend);

        engine_info!("nova::ProgramRegistry", "Registered '{}' backend", language);
        Ok(replaced)
    }

    /// Remove the backend for a language id
    ///
    /// Returns the removed backend; absent ids are a no-op. The reserved
    /// null id cannot be unregistered.
    pub fn unregister(&self, language: &str) -> Option<Arc<dyn ProgramBackend>> {
        if language == NULL_LANGUAGE {
            engine_warn!(
                "nova::ProgramRegistry",
                "Ignoring attempt to unregister the reserved '{}' backend",
                NULL_LANGUAGE
            );
            return None;
        }

        self.backends.lock().unwrap().remove(language)
    }

    /// Backend registered for the language id, or the null backend
    ///
    /// Never fails; unknown languages resolve to the built-in null backend,
    /// which is resolvable for the registry's entire lifetime.
    pub fn resolve(&self, language: &str) -> Arc<dyn ProgramBackend> {
        self.backends
            .lock()
            .unwrap()
            .get(language)
            .cloned()
            .unwrap_or_else(|| self.null_backend.clone())
    }

    /// True iff a backend is registered for exactly this id
    ///
    /// The null fallback does not count as supported.
    pub fn is_supported(&self, language: &str) -> bool {
        self.backends.lock().unwrap().contains_key(language)
    }

    /// Create a program handle and drive its load step
    ///
    /// The returned handle is never `Uninitialized`: it is `Loaded` on
    /// success, `Failed` otherwise (including the unknown-language case,
    /// where the null backend produces an unsupported, failed handle).
    pub fn create_program(&self, desc: GpuProgramDesc, device_mask: DeviceFlags) -> GpuProgram {
        let backend = self.resolve(&desc.language);
        let mut program = backend.create(desc, device_mask);
        program.load();
        program
    }

    /// Create an uninitialized program handle carrying only a kind
    ///
    /// The only registry path that returns a handle whose load step has not
    /// run; callers fill in the descriptor and load later.
    pub fn create_empty_program(
        &self,
        language: &str,
        kind: ProgramKind,
        device_mask: DeviceFlags,
    ) -> GpuProgram {
        let backend = self.resolve(language);
        backend.create_empty(kind, device_mask)
    }

    /// Compile a descriptor through the backend registered for its language
    ///
    /// Pure delegation; unknown languages yield the null backend's failed
    /// artifact.
    pub fn compile(&self, desc: &GpuProgramDesc) -> CompiledProgramArtifact {
        let backend = self.resolve(&desc.language);
        backend.compile(desc)
    }
}

impl Default for ProgramRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
