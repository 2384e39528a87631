pub mod identifiable;
pub mod value;
pub mod row;
pub mod entity;
pub mod country;

// Re-exports
pub use identifiable::*;
pub use value::*;
pub use row::*;
pub use entity::*;
pub use country::*;
