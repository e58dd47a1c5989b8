#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ContextError {
    #[error("{consumer} must be rendered inside {provider}")]
    MissingProvider {
        consumer: &'static str,
        provider: &'static str,
    },
}

/// Turns an absent context into a configuration error instead of a default.
pub fn require_ctx<T>(
    ctx: Option<T>,
    consumer: &'static str,
    provider: &'static str,
) -> Result<T, ContextError> {
    ctx.ok_or(ContextError::MissingProvider { consumer, provider })
}
