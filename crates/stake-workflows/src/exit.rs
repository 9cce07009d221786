//! Workflows de salida: pedir la salida del nodo y ejecutarla una vez
//! cumplido el período de espera. Ambos son la misma forma de tres etapas
//! (simular → enviar → confirmar) sobre funciones distintas del contrato.
use serde_json::json;
use std::sync::Arc;

use crate::orchestrator::Orchestrator;
use stake_adapters::{ChainClient, ConfirmOperation, FeeEstimator, SimulateOperation, SubmitOperation};
use stake_core::{build_workflow_definition, EventStore, Notifier, OperationStatus, OrchestratorError, StageList,
                 StageOperation, WorkflowEvent, WorkflowSnapshot};
use stake_domain::{Address, ChainError, ContractCall, FeeEstimate, StakingConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestExitStage {
    Simulate,
    Write,
    Transaction,
}

impl StageList for RequestExitStage {
    const ALL: &'static [Self] = &[RequestExitStage::Simulate, RequestExitStage::Write, RequestExitStage::Transaction];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStage {
    Simulate,
    Write,
    Transaction,
}

impl StageList for ExitStage {
    const ALL: &'static [Self] = &[ExitStage::Simulate, ExitStage::Write, ExitStage::Transaction];
}

#[derive(Debug, Clone)]
pub struct ExitParams {
    pub operator: Option<Address>,
    pub node_key: String,
}

fn exit_stages(client: &Arc<dyn ChainClient>, call: &ContractCall, operator: Option<Address>)
               -> Vec<Box<dyn StageOperation>> {
    vec![Box::new(SimulateOperation::new(client.clone(), call.clone(), operator)),
         Box::new(SubmitOperation::new(client.clone())),
         Box::new(ConfirmOperation::new(client.clone()))]
}

/// Pedido de salida: inicia el período de espera del nodo.
pub struct RequestExit<E: EventStore> {
    orchestrator: Orchestrator<RequestExitStage, E>,
    client: Arc<dyn ChainClient>,
    call: ContractCall,
    operator: Option<Address>,
}

impl<E: EventStore> RequestExit<E> {
    pub fn new(client: Arc<dyn ChainClient>,
               config: &StakingConfig,
               params: ExitParams,
               event_store: E,
               notifier: Box<dyn Notifier>)
               -> Self {
        let call = ContractCall::new(config.staking_contract, "requestExit", vec![json!(params.node_key)]);
        let stages = exit_stages(&client, &call, params.operator);
        let definition = build_workflow_definition(stages).with_completion_key("workflow.request_exit.completed");
        Self { orchestrator: Orchestrator::new(definition, event_store, notifier),
               client,
               call,
               operator: params.operator }
    }

    pub async fn request_exit(&mut self) -> Result<WorkflowSnapshot, OrchestratorError> {
        self.orchestrator.start().await
    }

    pub async fn estimate_fee(&self) -> Result<FeeEstimate, ChainError> {
        let operator = self.operator
                           .ok_or_else(|| ChainError::InvalidAddress("operator address is required".into()))?;
        FeeEstimator::new(self.client.clone()).estimate(&self.call, &operator).await
    }

    pub fn stage(&self) -> (RequestExitStage, OperationStatus) {
        self.orchestrator.stage()
    }

    pub fn error_for(&self, stage: RequestExitStage) -> Option<&OrchestratorError> {
        self.orchestrator.error_for(stage)
    }

    pub fn reset(&mut self) {
        self.orchestrator.reset()
    }

    pub fn events(&self) -> Vec<WorkflowEvent> {
        self.orchestrator.events()
    }
}

/// Salida efectiva: retira el stake una vez vencido el período de espera.
pub struct ExitNode<E: EventStore> {
    orchestrator: Orchestrator<ExitStage, E>,
    client: Arc<dyn ChainClient>,
    call: ContractCall,
    operator: Option<Address>,
}

impl<E: EventStore> ExitNode<E> {
    pub fn new(client: Arc<dyn ChainClient>,
               config: &StakingConfig,
               params: ExitParams,
               event_store: E,
               notifier: Box<dyn Notifier>)
               -> Self {
        let call = ContractCall::new(config.staking_contract, "exit", vec![json!(params.node_key)]);
        let stages = exit_stages(&client, &call, params.operator);
        let definition = build_workflow_definition(stages).with_completion_key("workflow.exit.completed");
        Self { orchestrator: Orchestrator::new(definition, event_store, notifier),
               client,
               call,
               operator: params.operator }
    }

    pub async fn exit(&mut self) -> Result<WorkflowSnapshot, OrchestratorError> {
        self.orchestrator.start().await
    }

    pub async fn estimate_fee(&self) -> Result<FeeEstimate, ChainError> {
        let operator = self.operator
                           .ok_or_else(|| ChainError::InvalidAddress("operator address is required".into()))?;
        FeeEstimator::new(self.client.clone()).estimate(&self.call, &operator).await
    }

    pub fn stage(&self) -> (ExitStage, OperationStatus) {
        self.orchestrator.stage()
    }

    pub fn error_for(&self, stage: ExitStage) -> Option<&OrchestratorError> {
        self.orchestrator.error_for(stage)
    }

    pub fn reset(&mut self) {
        self.orchestrator.reset()
    }

    pub fn events(&self) -> Vec<WorkflowEvent> {
        self.orchestrator.events()
    }
}
