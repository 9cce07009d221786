use serde_json::Value;

use crate::errors::OrchestratorError;

/// Resultado abstracto de ejecutar una operación de etapa.
#[derive(Debug)]
pub enum OperationOutcome {
    Success { output: Option<Value> },
    Failure { error: OrchestratorError },
}

impl OperationOutcome {
    pub fn success(output: Value) -> Self {
        OperationOutcome::Success { output: Some(output) }
    }

    pub fn success_empty() -> Self {
        OperationOutcome::Success { output: None }
    }

    pub fn failure(error: OrchestratorError) -> Self {
        OperationOutcome::Failure { error }
    }
}
