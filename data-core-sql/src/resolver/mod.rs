pub mod declaration;
pub mod registry;
pub mod resolved;

pub use declaration::{RepositoryDeclaration, RepositoryDefinition};
pub use registry::RepositoryRegistry;
pub use resolved::ResolvedRepositories;
