pub mod consts;
pub mod error;
pub mod footprint;
pub mod geometry;
pub mod layer;
pub mod parameters;
pub mod parser;
pub mod project;
pub mod steps;

pub use error::{Error, Result};
pub use footprint::{FootprintCalculator, ValidationError};
