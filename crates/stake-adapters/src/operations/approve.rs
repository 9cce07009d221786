//! Aprobación de gasto de token.
//!
//! La aprobación es una escritura completa en sí misma (simular → enviar →
//! confirmar contra el contrato del token), colapsada en una sola etapa del
//! workflow: la etapa `Approve` es exitosa recién cuando la aprobación quedó
//! confirmada en cadena.
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::client::ChainClient;
use stake_core::{OperationContext, OperationOutcome, OrchestratorError, StageOperation};
use stake_domain::{Address, ChainError, ContractCall, TokenAmount};

pub struct ApproveOperation {
    client: Arc<dyn ChainClient>,
    token: Address,
    spender: Address,
    amount: TokenAmount,
    /// Dueño de los fondos. `None` = wallet sin conectar: error de
    /// validación sin llamada remota.
    owner: Option<Address>,
}

impl ApproveOperation {
    pub fn new(client: Arc<dyn ChainClient>,
               token: Address,
               spender: Address,
               amount: TokenAmount,
               owner: Option<Address>)
               -> Self {
        Self { client, token, spender, amount, owner }
    }

    fn approve_call(&self) -> ContractCall {
        ContractCall::new(self.token,
                          "approve",
                          vec![json!(self.spender.to_string()), json!(self.amount.0.to_string())])
    }
}

#[async_trait]
impl StageOperation for ApproveOperation {
    fn id(&self) -> &str {
        "approve"
    }

    fn label_key(&self) -> &str {
        "stage.approve"
    }

    fn params(&self) -> Value {
        json!({
            "token": self.token.to_string(),
            "spender": self.spender.to_string(),
            "amount": self.amount.0.to_string(),
        })
    }

    async fn run(&self, _ctx: &OperationContext) -> OperationOutcome {
        let owner = match self.owner {
            Some(o) => o,
            None => return OperationOutcome::failure(OrchestratorError::Validation("owner address is required".into())),
        };

        let call = self.approve_call();
        let request = match self.client.simulate(&call, &owner).await {
            Ok(r) => r,
            Err(ChainError::Reverted(reason)) => {
                return OperationOutcome::failure(OrchestratorError::Simulation(reason))
            }
            Err(e) => return OperationOutcome::failure(OrchestratorError::Simulation(e.to_string())),
        };
        let hash = match self.client.submit(&request).await {
            Ok(h) => h,
            Err(e) => return OperationOutcome::failure(OrchestratorError::Submission(e.to_string())),
        };
        match self.client.await_confirmation(&hash).await {
            Ok(receipt) if receipt.success => OperationOutcome::success(json!({
                                                  "approved_tx": receipt.tx_hash.to_string(),
                                                  "amount": self.amount.0.to_string(),
                                              })),
            Ok(receipt) => OperationOutcome::failure(OrchestratorError::Confirmation(format!("approval {} reverted on-chain",
                                                                                             receipt.tx_hash))),
            Err(e) => OperationOutcome::failure(OrchestratorError::Confirmation(e.to_string())),
        }
    }
}
