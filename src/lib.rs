pub mod cursor;
pub mod error;
pub mod gl_prototypes;
pub mod shaders;
pub mod util;

pub use error::GenerateError;
