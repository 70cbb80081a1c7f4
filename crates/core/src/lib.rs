pub mod columns;
pub mod config;
pub mod descriptor;
pub mod error;

// Re-export key types for convenience
pub use columns::{parse_columns, ColumnSpec};
pub use config::ProjectPaths;
pub use descriptor::ModuleDescriptor;
pub use error::ScaffoldError;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
