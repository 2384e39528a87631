pub mod pagination;
pub mod find_by_id;
pub mod exists_by_id;
pub mod find_all;
pub mod count;
pub mod save;
pub mod save_all;
pub mod update;
pub mod delete_by_id;
pub mod delete_all;
pub mod find_page;
pub mod crud;
pub mod country_repository;

// Re-exports
pub use pagination::*;
pub use find_by_id::*;
pub use exists_by_id::*;
pub use find_all::*;
pub use count::*;
pub use save::*;
pub use save_all::*;
pub use update::*;
pub use delete_by_id::*;
pub use delete_all::*;
pub use find_page::*;
pub use crud::*;
pub use country_repository::*;
