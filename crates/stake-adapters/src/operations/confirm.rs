//! Espera de confirmación en cadena de una transacción enviada.
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

use super::required_input;
use crate::client::ChainClient;
use stake_core::{OperationContext, OperationOutcome, OrchestratorError, StageOperation};
use stake_domain::TxHash;

#[derive(Deserialize)]
struct SubmittedTx {
    tx_hash: String,
}

/// Espera el recibo de la transacción encadenada desde la etapa de envío.
/// Un recibo con `success == false` (revert en cadena) es un fallo de
/// confirmación, no un éxito con datos raros.
pub struct ConfirmOperation {
    client: Arc<dyn ChainClient>,
    id: String,
    label: String,
}

impl ConfirmOperation {
    pub fn new(client: Arc<dyn ChainClient>) -> Self {
        Self::with_id("transaction", client)
    }

    pub fn with_id(id: &str, client: Arc<dyn ChainClient>) -> Self {
        Self { client, id: id.to_string(), label: format!("stage.{id}") }
    }
}

#[async_trait]
impl StageOperation for ConfirmOperation {
    fn id(&self) -> &str {
        &self.id
    }

    fn label_key(&self) -> &str {
        &self.label
    }

    fn params(&self) -> Value {
        json!({})
    }

    async fn run(&self, ctx: &OperationContext) -> OperationOutcome {
        let submitted: SubmittedTx = match required_input(ctx, "tx hash") {
            Ok(s) => s,
            Err(e) => return OperationOutcome::failure(e),
        };
        let hash = match TxHash::from_hex(&submitted.tx_hash) {
            Ok(h) => h,
            Err(e) => return OperationOutcome::failure(OrchestratorError::Validation(e.to_string())),
        };
        match self.client.await_confirmation(&hash).await {
            Ok(receipt) if receipt.success => OperationOutcome::success(json!({
                                                  "tx_hash": receipt.tx_hash.to_string(),
                                                  "block_number": receipt.block_number,
                                              })),
            Ok(receipt) => OperationOutcome::failure(OrchestratorError::Confirmation(format!("transaction {} reverted on-chain",
                                                                                             receipt.tx_hash))),
            Err(e) => OperationOutcome::failure(OrchestratorError::Confirmation(e.to_string())),
        }
    }
}
