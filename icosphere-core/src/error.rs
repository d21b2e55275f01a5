//! Parameter errors raised before any geometry is built.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum IcosphereError {
    #[error("radius must be greater than zero (got {0})")]
    InvalidRadius(f32),
    #[error("subdivision level must be at least 1 (got {0})")]
    InvalidSubdivision(u32),
    #[error("subdivision level {level} exceeds the configured limit of {max}")]
    SubdivisionLimit { level: u32, max: u32 },
}

pub type Result<T> = std::result::Result<T, IcosphereError>;

/// Reject parameters that would produce a degenerate or inverted mesh.
pub fn check_params(radius: f32, subdivision: u32) -> Result<()> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(IcosphereError::InvalidRadius(radius));
    }
    if subdivision < 1 {
        return Err(IcosphereError::InvalidSubdivision(subdivision));
    }
    Ok(())
}
