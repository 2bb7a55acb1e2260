use crate::shared::errors::AppResult;
/// Base traits for command and query handlers following the CQRS pattern
///
/// Each handler owns its collaborators (repositories, clock, id generator)
/// behind `Arc<dyn Trait>` and exposes a single `execute` entry point.
///
/// # Example
///
/// ```ignore
/// struct CreateAttributeHandler {
///     repository: Arc<dyn AttributeRepository>,
/// }
///
/// #[async_trait]
/// impl UseCase<CreateAttributeCommand, Attribute> for CreateAttributeHandler {
///     async fn execute(&self, command: CreateAttributeCommand) -> AppResult<Attribute> {
///         // Use case logic here
///     }
/// }
/// ```
use async_trait::async_trait;

/// Base trait for use cases (command handlers)
#[async_trait]
pub trait UseCase<TCommand, TResult> {
    /// Execute the use case with the given command
    async fn execute(&self, command: TCommand) -> AppResult<TResult>;
}

/// Base trait for queries (query handlers)
#[async_trait]
pub trait Query<TQuery, TResult> {
    /// Execute the query
    async fn execute(&self, query: TQuery) -> AppResult<TResult>;
}
