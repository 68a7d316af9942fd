mod error;
pub use error::*;
mod field;
pub use field::*;
mod instance;
pub use instance::*;
mod matrix;
pub use matrix::*;
mod tour;
pub use tour::*;
