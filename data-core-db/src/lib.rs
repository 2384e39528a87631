pub mod dialect;
pub mod models;
pub mod query;
pub mod repository;
pub mod utils;

pub use dialect::*;
pub use models::*;
pub use query::*;
pub use repository::*;
