//! Envío de la transacción preparada por la simulación previa.
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;

use super::required_input;
use crate::client::ChainClient;
use stake_core::{OperationContext, OperationOutcome, OrchestratorError, StageOperation};
use stake_domain::PreparedRequest;

/// Envía la `PreparedRequest` encadenada desde la etapa anterior. Produce
/// `{"tx_hash": "0x..."}` para la etapa de confirmación.
pub struct SubmitOperation {
    client: Arc<dyn ChainClient>,
    id: String,
    label: String,
}

impl SubmitOperation {
    pub fn new(client: Arc<dyn ChainClient>) -> Self {
        Self::with_id("write", client)
    }

    pub fn with_id(id: &str, client: Arc<dyn ChainClient>) -> Self {
        Self { client, id: id.to_string(), label: format!("stage.{id}") }
    }
}

#[async_trait]
impl StageOperation for SubmitOperation {
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
        let request: PreparedRequest = match required_input(ctx, "prepared request") {
            Ok(r) => r,
            Err(e) => return OperationOutcome::failure(e),
        };
        match self.client.submit(&request).await {
            Ok(hash) => OperationOutcome::success(json!({ "tx_hash": hash.to_string() })),
            Err(e) => OperationOutcome::failure(OrchestratorError::Submission(e.to_string())),
        }
    }
}
