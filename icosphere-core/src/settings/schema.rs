use serde::{Deserialize, Serialize};

use crate::error::{check_params, IcosphereError, Result};
use crate::icosphere;
use crate::mesh::MeshBuffers;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IcosphereSettings {
    pub radius: f32,
    pub subdivision: u32,
    #[serde(alias = "hasUV")]
    pub has_uv: bool,
    pub limits: Limits,
}

impl Default for IcosphereSettings {
    fn default() -> Self {
        Self { radius: 1.0, subdivision: 2, has_uv: false, limits: Limits::default() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    // Triangle count grows as 20 * 4^(n-1)
    pub max_subdivision: u32,
}

impl Default for Limits {
    fn default() -> Self { Self { max_subdivision: 8 } }
}

impl IcosphereSettings {
    pub fn validate(&self) -> Result<()> {
        check_params(self.radius, self.subdivision)?;
        if self.subdivision > self.limits.max_subdivision {
            return Err(IcosphereError::SubdivisionLimit {
                level: self.subdivision,
                max: self.limits.max_subdivision,
            });
        }
        Ok(())
    }

    pub fn generate(&self) -> Result<MeshBuffers> {
        self.validate()?;
        icosphere::generate(self.radius, self.subdivision, self.has_uv)
    }
}
