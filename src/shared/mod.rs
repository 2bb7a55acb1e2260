// Shared Kernel - Domain Driven Design
// Following Clean Architecture + Hexagonal Architecture patterns

pub mod application; // Shared application layer patterns
pub mod config; // Environment-driven configuration
pub mod domain; // Shared domain concepts (value objects, ports)
pub mod errors; // Shared error types
pub mod infrastructure; // Shared infrastructure (database)
pub mod utils; // Shared utilities

// Re-exports for convenience
pub use config::{AppConfig, StorageBackend};
pub use errors::{AppError, AppResult};
