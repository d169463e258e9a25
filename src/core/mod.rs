pub mod emit;
pub mod extract;
pub mod generator;
pub mod runner;
pub mod translate;

pub use crate::domain::model::{Declaration, FieldDescriptor, ModelDefinition};
pub use crate::domain::ports::{ModelCatalog, Storage};
pub use crate::utils::error::Result;
