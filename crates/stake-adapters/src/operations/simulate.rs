//! Simulación (dry-run) de una escritura de contrato.
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::client::ChainClient;
use stake_core::{OperationContext, OperationOutcome, OrchestratorError, StageOperation};
use stake_domain::{Address, ChainError, ContractCall};

/// Dry-run de `call` por cuenta de `account`. Produce la `PreparedRequest`
/// que la etapa de envío consume.
pub struct SimulateOperation {
    client: Arc<dyn ChainClient>,
    call: ContractCall,
    account: Option<Address>,
    id: String,
    label: String,
}

impl SimulateOperation {
    pub fn new(client: Arc<dyn ChainClient>, call: ContractCall, account: Option<Address>) -> Self {
        Self::with_id("simulate", client, call, account)
    }

    /// Variante con id propio, para workflows con más de una simulación.
    /// La clave de etiqueta sigue al id (`stage.<id>`).
    pub fn with_id(id: &str, client: Arc<dyn ChainClient>, call: ContractCall, account: Option<Address>) -> Self {
        Self { client, call, account, id: id.to_string(), label: format!("stage.{id}") }
    }
}

#[async_trait]
impl StageOperation for SimulateOperation {
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
        let account = match self.account {
            Some(a) => a,
            None => return OperationOutcome::failure(OrchestratorError::Validation("account address is required".into())),
        };
        match self.client.simulate(&self.call, &account).await {
            Ok(request) => match serde_json::to_value(&request) {
                Ok(v) => OperationOutcome::success(v),
                Err(e) => OperationOutcome::failure(OrchestratorError::Internal(e.to_string())),
            },
            // Preferimos la razón de revert provista por la cadena.
            Err(ChainError::Reverted(reason)) => OperationOutcome::failure(OrchestratorError::Simulation(reason)),
            Err(e) => OperationOutcome::failure(OrchestratorError::Simulation(e.to_string())),
        }
    }
}
