use model_engine::EngineError;

/// Errors raised while building or forwarding model objects.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// An untyped list held an element of the wrong type.
    #[error("list element {index} is {actual}, expected {expected}")]
    ContractViolation {
        index: usize,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("engine error: {0}")]
    Engine(#[from] EngineError),

    #[error("invalid builder defaults: {0}")]
    InvalidDefaults(#[from] serde_json::Error),
}
