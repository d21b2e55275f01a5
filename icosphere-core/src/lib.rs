pub mod error;
pub mod icosphere;
pub mod mesh;
pub mod settings;

pub use error::IcosphereError;
pub use icosphere::{generate, Mode};
pub use mesh::{IndexFormat, MeshBuffers, MeshSummary};
pub use settings::IcosphereSettings;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
