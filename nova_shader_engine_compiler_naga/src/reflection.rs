/// SPIR-V reflection via spirq

use nova_shader_engine::error::Result;
use nova_shader_engine::program::{
    GpuParamDesc, GpuParamTable, GpuParamType, ProgramKind, VertexElementFormat,
    VertexInputAttribute, VertexInputLayout,
};
use nova_shader_engine::{engine_bail, engine_err};

const LOG_SOURCE: &str = "nova::compiler_naga";

const SPIRV_MAGIC: u32 = 0x0723_0203;
// Header is 5 words: magic, version, generator, bound, schema
const SPIRV_HEADER_WORDS: usize = 5;

/// Extracts parameter and vertex-input metadata from a compiled binary
pub trait ReflectionParser: Send + Sync {
    /// Populate `params` (and `vertex_input` when given) from the binary
    fn parse(
        &self,
        binary: &[u8],
        kind: ProgramKind,
        params: &mut GpuParamTable,
        vertex_input: Option<&mut VertexInputLayout>,
    ) -> Result<()>;
}

/// SPIR-V reflector backed by spirq
pub struct SpirqReflector;

impl SpirqReflector {
    fn desc_type_to_param_type(desc_ty: &spirq::ty::DescriptorType) -> Result<GpuParamType> {
        use spirq::ty::DescriptorType;
        match desc_ty {
            DescriptorType::UniformBuffer() => Ok(GpuParamType::UniformBuffer),
            DescriptorType::StorageBuffer(..) => Ok(GpuParamType::StorageBuffer),
            DescriptorType::CombinedImageSampler() => Ok(GpuParamType::CombinedImageSampler),
            DescriptorType::SampledImage() => Ok(GpuParamType::SampledImage),
            DescriptorType::Sampler() => Ok(GpuParamType::Sampler),
            DescriptorType::StorageImage(..) => Ok(GpuParamType::StorageImage),
            other => {
                engine_bail!(LOG_SOURCE,
                    "Unsupported SPIR-V descriptor type: {:?}", other);
            }
        }
    }

    /// Map a spirq input type to a vertex element format
    ///
    /// Unrecognized types fall back to Float32 rather than failing: the
    /// attribute still exists at its location even if we cannot name its
    /// component layout.
    fn type_to_element_format(ty: &spirq::ty::Type) -> VertexElementFormat {
        use spirq::ty::{ScalarType, Type};
        match ty {
            Type::Scalar(s) => match s {
                ScalarType::Float { .. } => VertexElementFormat::Float32,
                ScalarType::Integer { is_signed: true, .. } => VertexElementFormat::Sint32,
                ScalarType::Integer { is_signed: false, .. } => VertexElementFormat::Uint32,
                _ => VertexElementFormat::Float32,
            },
            Type::Vector(v) => {
                let signed = matches!(
                    v.scalar_ty,
                    ScalarType::Integer { is_signed: true, .. }
                );
                let unsigned = matches!(
                    v.scalar_ty,
                    ScalarType::Integer { is_signed: false, .. }
                );
                match (v.nscalar, signed, unsigned) {
                    (2, true, _) => VertexElementFormat::Sint32x2,
                    (3, true, _) => VertexElementFormat::Sint32x3,
                    (4, true, _) => VertexElementFormat::Sint32x4,
                    (2, _, true) => VertexElementFormat::Uint32x2,
                    (3, _, true) => VertexElementFormat::Uint32x3,
                    (4, _, true) => VertexElementFormat::Uint32x4,
                    (2, _, _) => VertexElementFormat::Float32x2,
                    (3, _, _) => VertexElementFormat::Float32x3,
                    (4, _, _) => VertexElementFormat::Float32x4,
                    (_, true, _) => VertexElementFormat::Sint32,
                    (_, _, true) => VertexElementFormat::Uint32,
                    _ => VertexElementFormat::Float32,
                }
            }
            _ => VertexElementFormat::Float32,
        }
    }

    /// Convert bytes to SPIR-V words, validating the module header
    ///
    /// Malformed input must come back as an error, never reach the reflector.
    fn binary_to_words(binary: &[u8]) -> Result<Vec<u32>> {
        if binary.len() % 4 != 0 {
            engine_bail!(LOG_SOURCE,
                "SPIR-V binary length {} is not a multiple of 4", binary.len());
        }
        let words: Vec<u32> = binary
            .chunks_exact(4)
            .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
            .collect();
        if words.len() < SPIRV_HEADER_WORDS {
            engine_bail!(LOG_SOURCE,
                "SPIR-V binary is shorter than the module header ({} words)",
                words.len());
        }
        if words[0] != SPIRV_MAGIC {
            engine_bail!(LOG_SOURCE,
                "Not a SPIR-V binary: bad magic word {:#010x}", words[0]);
        }
        Ok(words)
    }
}

impl ReflectionParser for SpirqReflector {
    fn parse(
        &self,
        binary: &[u8],
        _kind: ProgramKind,
        params: &mut GpuParamTable,
        mut vertex_input: Option<&mut VertexInputLayout>,
    ) -> Result<()> {
        let words = Self::binary_to_words(binary)?;

        let entry_points = spirq::ReflectConfig::new()
            .spv(words.as_slice())
            .ref_all_rscs(true)
            .reflect()
            .map_err(|e| engine_err!(LOG_SOURCE,
                "SPIR-V reflection failed: {:?}", e))?;

        for entry_point in &entry_points {
            for var in entry_point.vars.iter() {
                match var {
                    spirq::var::Variable::Descriptor {
                        name, desc_bind, desc_ty, ty, ..
                    } => {
                        params.push(GpuParamDesc {
                            name: name.clone().unwrap_or_default(),
                            set: desc_bind.set(),
                            binding: desc_bind.bind(),
                            param_type: Self::desc_type_to_param_type(desc_ty)?,
                            size: ty.nbyte().map(|s| s as u32),
                        });
                    }
                    spirq::var::Variable::PushConstant { name, ty } => {
                        params.push(GpuParamDesc {
                            name: name.clone().unwrap_or_default(),
                            set: 0,
                            binding: 0,
                            param_type: GpuParamType::PushConstant,
                            size: ty.nbyte().map(|s| s as u32),
                        });
                    }
                    spirq::var::Variable::Input { name, location, ty } => {
                        if let Some(layout) = vertex_input.as_deref_mut() {
                            layout.attributes.push(VertexInputAttribute {
                                name: name.clone().unwrap_or_default(),
                                location: location.loc(),
                                format: Self::type_to_element_format(ty),
                            });
                        }
                    }
                    _ => {}
                }
            }
        }

        if let Some(layout) = vertex_input {
            layout.attributes.sort_by_key(|a| a.location);
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "reflection_tests.rs"]
mod tests;
