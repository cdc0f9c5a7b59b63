pub mod error;
pub mod registry;

pub use error::*;
pub use registry::*;
