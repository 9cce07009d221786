//! Workflow de reclamo de recompensas: dos escrituras encadenadas
//! (actualizar balance y reclamar), cada una con simular → enviar →
//! confirmar.
//!
//! La derivación "primera etapa no exitosa" resuelve explícitamente el borde
//! entre ambas escrituras: mientras la confirmación de la actualización de
//! balance esté pendiente o fallida, la etapa derivada es
//! `TransactionUpdateBalance`; la simulación del reclamo nunca la adelanta.
use serde_json::json;
use std::sync::Arc;

use crate::orchestrator::Orchestrator;
use stake_adapters::{ChainClient, ConfirmOperation, FeeEstimator, SimulateOperation, SubmitOperation};
use stake_core::{build_workflow_definition, EventStore, Notifier, OperationStatus, OrchestratorError, StageList,
                 StageOperation, WorkflowEvent, WorkflowSnapshot};
use stake_domain::{Address, ChainError, ContractCall, FeeEstimate, StakingConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimStage {
    SimulateUpdateBalance,
    WriteUpdateBalance,
    TransactionUpdateBalance,
    SimulateClaim,
    WriteClaim,
    TransactionClaim,
}

impl StageList for ClaimStage {
    const ALL: &'static [Self] = &[ClaimStage::SimulateUpdateBalance,
                                   ClaimStage::WriteUpdateBalance,
                                   ClaimStage::TransactionUpdateBalance,
                                   ClaimStage::SimulateClaim,
                                   ClaimStage::WriteClaim,
                                   ClaimStage::TransactionClaim];
}

#[derive(Debug, Clone)]
pub struct ClaimParams {
    pub account: Option<Address>,
}

pub struct ClaimRewards<E: EventStore> {
    orchestrator: Orchestrator<ClaimStage, E>,
    client: Arc<dyn ChainClient>,
    claim_call: ContractCall,
    account: Option<Address>,
}

impl<E: EventStore> ClaimRewards<E> {
    pub fn new(client: Arc<dyn ChainClient>,
               config: &StakingConfig,
               params: ClaimParams,
               event_store: E,
               notifier: Box<dyn Notifier>)
               -> Self {
        let account_arg = params.account.map(|a| json!(a.to_string())).unwrap_or(json!(null));
        let update_call = ContractCall::new(config.staking_contract, "updateBalance", vec![account_arg.clone()]);
        let claim_call = ContractCall::new(config.staking_contract, "claimRewards", vec![account_arg]);

        let stages: Vec<Box<dyn StageOperation>> =
            vec![Box::new(SimulateOperation::with_id("simulate_update_balance",
                                                     client.clone(),
                                                     update_call,
                                                     params.account)),
                 Box::new(SubmitOperation::with_id("write_update_balance", client.clone())),
                 Box::new(ConfirmOperation::with_id("transaction_update_balance", client.clone())),
                 Box::new(SimulateOperation::with_id("simulate_claim", client.clone(), claim_call.clone(), params.account)),
                 Box::new(SubmitOperation::with_id("write_claim", client.clone())),
                 Box::new(ConfirmOperation::with_id("transaction_claim", client.clone()))];

        let definition = build_workflow_definition(stages).with_completion_key("workflow.claim.completed");
        Self { orchestrator: Orchestrator::new(definition, event_store, notifier),
               client,
               claim_call,
               account: params.account }
    }

    /// Entry trigger del reclamo completo (ambas escrituras).
    pub async fn claim_rewards(&mut self) -> Result<WorkflowSnapshot, OrchestratorError> {
        self.orchestrator.start().await
    }

    pub async fn estimate_fee(&self) -> Result<FeeEstimate, ChainError> {
        let account = self.account
                          .ok_or_else(|| ChainError::InvalidAddress("account address is required".into()))?;
        FeeEstimator::new(self.client.clone()).estimate(&self.claim_call, &account).await
    }

    pub fn stage(&self) -> (ClaimStage, OperationStatus) {
        self.orchestrator.stage()
    }

    pub fn error_for(&self, stage: ClaimStage) -> Option<&OrchestratorError> {
        self.orchestrator.error_for(stage)
    }

    pub fn reset(&mut self) {
        self.orchestrator.reset()
    }

    pub fn events(&self) -> Vec<WorkflowEvent> {
        self.orchestrator.events()
    }

    pub fn workflow_fingerprint(&self) -> Option<String> {
        self.orchestrator.workflow_fingerprint()
    }
}
