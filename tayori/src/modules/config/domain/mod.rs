// Config Domain Layer

pub mod entities;
pub mod value_objects;

pub use entities::BackendProfile;
pub use value_objects::{BackendKind, BasePath};
