//! Workflow de registro de nodo: aprobar gasto → simular registro → enviar
//! → confirmar → verificar el alta (join).
use serde_json::json;
use std::sync::Arc;

use crate::orchestrator::Orchestrator;
use stake_adapters::{ApproveOperation, ChainClient, ConfirmOperation, FeeEstimator, ReadOperation, SimulateOperation,
                     SubmitOperation};
use stake_core::{build_workflow_definition, EventStore, Notifier, OperationStatus, OrchestratorError, StageList,
                 StageOperation, WorkflowEvent, WorkflowSnapshot};
use stake_domain::{Address, ChainError, ContractCall, FeeEstimate, StakingConfig, TokenAmount};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterStage {
    Approve,
    Simulate,
    Write,
    Transaction,
    Join,
}

impl StageList for RegisterStage {
    const ALL: &'static [Self] = &[RegisterStage::Approve,
                                   RegisterStage::Simulate,
                                   RegisterStage::Write,
                                   RegisterStage::Transaction,
                                   RegisterStage::Join];
}

/// Parámetros del registro. `operator: None` modela la wallet sin conectar;
/// la primera etapa falla con `Validation` sin tocar la cadena.
#[derive(Debug, Clone)]
pub struct RegisterParams {
    pub operator: Option<Address>,
    pub node_key: String,
    pub amount: TokenAmount,
}

/// Orquestador del registro de nodo. Una instancia por intento de registro;
/// no comparte estado con ninguna otra.
pub struct RegisterNode<E: EventStore> {
    orchestrator: Orchestrator<RegisterStage, E>,
    client: Arc<dyn ChainClient>,
    register_call: ContractCall,
    operator: Option<Address>,
}

impl<E: EventStore> RegisterNode<E> {
    pub fn new(client: Arc<dyn ChainClient>,
               config: &StakingConfig,
               params: RegisterParams,
               event_store: E,
               notifier: Box<dyn Notifier>)
               -> Self {
        let register_call = ContractCall::new(config.staking_contract,
                                              "registerNode",
                                              vec![json!(params.node_key), json!(params.amount.0.to_string())]);
        let join_call = ContractCall::new(config.staking_contract, "nodeRecord", vec![json!(params.node_key)]);

        let stages: Vec<Box<dyn StageOperation>> =
            vec![Box::new(ApproveOperation::new(client.clone(),
                                                config.token_contract,
                                                config.staking_contract,
                                                params.amount,
                                                params.operator)),
                 Box::new(SimulateOperation::new(client.clone(), register_call.clone(), params.operator)),
                 Box::new(SubmitOperation::new(client.clone())),
                 Box::new(ConfirmOperation::new(client.clone())),
                 Box::new(ReadOperation::new("join", client.clone(), join_call))];

        let definition = build_workflow_definition(stages).with_completion_key("workflow.register.completed");
        Self { orchestrator: Orchestrator::new(definition, event_store, notifier),
               client,
               register_call,
               operator: params.operator }
    }

    /// Entry trigger del workflow completo.
    pub async fn register_and_stake(&mut self) -> Result<WorkflowSnapshot, OrchestratorError> {
        self.orchestrator.start().await
    }

    /// Fee estimado del registro (informativo; no avanza nada).
    pub async fn estimate_fee(&self) -> Result<FeeEstimate, ChainError> {
        let operator = self.operator
                           .ok_or_else(|| ChainError::InvalidAddress("operator address is required".into()))?;
        FeeEstimator::new(self.client.clone()).estimate(&self.register_call, &operator).await
    }

    pub fn stage(&self) -> (RegisterStage, OperationStatus) {
        self.orchestrator.stage()
    }

    pub fn error_for(&self, stage: RegisterStage) -> Option<&OrchestratorError> {
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
