//! Errores del coordinador, clasificados por la etapa que los observa.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum OrchestratorError {
    #[error("validation: {0}")] Validation(String),
    #[error("simulation rejected: {0}")] Simulation(String),
    #[error("submission rejected: {0}")] Submission(String),
    #[error("confirmation failed: {0}")] Confirmation(String),
    #[error("workflow has failed (stop-on-failure invariant)")] WorkflowHasFailed,
    #[error("internal: {0}")] Internal(String),
}

impl OrchestratorError {
    /// Clave de catálogo del mensaje visible al usuario. La superficie de
    /// notificación recibe esta clave (más la razón como parámetro), nunca
    /// el texto `Display` crudo.
    pub fn message_key(&self) -> &'static str {
        match self {
            OrchestratorError::Validation(_) => "error.validation",
            OrchestratorError::Simulation(_) => "error.simulation",
            OrchestratorError::Submission(_) => "error.submission",
            OrchestratorError::Confirmation(_) => "error.confirmation",
            OrchestratorError::WorkflowHasFailed | OrchestratorError::Internal(_) => "error.internal",
        }
    }

    /// Razón subyacente, para interpolar como `{reason}`.
    pub fn reason(&self) -> String {
        match self {
            OrchestratorError::Validation(r)
            | OrchestratorError::Simulation(r)
            | OrchestratorError::Submission(r)
            | OrchestratorError::Confirmation(r)
            | OrchestratorError::Internal(r) => r.clone(),
            other => other.to_string(),
        }
    }
}
