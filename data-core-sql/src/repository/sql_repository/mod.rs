pub mod repo_impl;
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

pub use repo_impl::SqlRepository;
