//! Lectura de un valor de contrato.
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::client::ChainClient;
use stake_core::{OperationContext, OperationOutcome, OrchestratorError, StageOperation};
use stake_domain::{ChainError, ContractCall};

/// Lee un valor de contrato; usada como etapa de verificación final (p. ej.
/// leer el registro del nodo tras confirmarse la transacción).
pub struct ReadOperation {
    client: Arc<dyn ChainClient>,
    call: ContractCall,
    id: String,
    label: String,
}

impl ReadOperation {
    pub fn new(id: &str, client: Arc<dyn ChainClient>, call: ContractCall) -> Self {
        Self { client, call, id: id.to_string(), label: format!("stage.{id}") }
    }
}

#[async_trait]
impl StageOperation for ReadOperation {
    fn id(&self) -> &str {
        &self.id
    }

    fn label_key(&self) -> &str {
        &self.label
    }

    fn params(&self) -> Value {
        json!({
            "contract": self.call.contract.to_string(),
            "function": self.call.function,
        })
    }

    async fn run(&self, _ctx: &OperationContext) -> OperationOutcome {
        match self.client.read_contract(&self.call).await {
            Ok(value) => OperationOutcome::success(value),
            Err(ChainError::Reverted(reason)) => OperationOutcome::failure(OrchestratorError::Confirmation(reason)),
            Err(e) => OperationOutcome::failure(OrchestratorError::Internal(e.to_string())),
        }
    }
}
