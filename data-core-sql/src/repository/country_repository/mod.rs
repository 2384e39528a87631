pub mod declarations;
pub mod find_by_name;

pub use declarations::*;
