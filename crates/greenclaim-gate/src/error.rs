//! Gate error types

use greenclaim_domain::InputError;
use thiserror::Error;

/// Errors that can occur during an evaluation
///
/// Only the predictors can fail at evaluation time; the rule engine and the
/// override chain are pure. There is no partial verdict: any error aborts the
/// evaluation.
#[derive(Error, Debug)]
pub enum GateError {
    /// The submitted record is invalid
    #[error("Invalid input: {0}")]
    Input(#[from] InputError),

    /// The embedding provider failed to vectorize text
    #[error("Embedding error: {0}")]
    Embedding(String),

    /// A classifier failed or returned an unusable prediction
    #[error("Classifier error: {0}")]
    Classifier(String),

    /// Predictors or configuration do not fit together
    #[error("Configuration error: {0}")]
    Config(String),
}
