//! Facade tipado sobre `StagedWorkflow`.
use std::marker::PhantomData;

use stake_core::{derive_stage, EventStore, Notifier, OperationStatus, OrchestratorError, StageList, StagedWorkflow,
                 WorkflowDefinition, WorkflowEvent, WorkflowSnapshot};

/// Envuelve el driver genérico con el enum de etapas del workflow concreto:
/// la UI pregunta por `S`, no por índices.
pub struct Orchestrator<S, E>
    where S: StageList,
          E: EventStore
{
    inner: StagedWorkflow<E>,
    _stage: PhantomData<S>,
}

impl<S, E> Orchestrator<S, E>
    where S: StageList,
          E: EventStore
{
    pub fn new(definition: WorkflowDefinition, event_store: E, notifier: Box<dyn Notifier>) -> Self {
        assert_eq!(definition.len(),
                   S::ALL.len(),
                   "definition must provide one operation per stage");
        Self { inner: StagedWorkflow::new(definition, event_store, notifier),
               _stage: PhantomData }
    }

    /// Entry trigger: habilita y avanza hasta completar o bloquear.
    pub async fn start(&mut self) -> Result<WorkflowSnapshot, OrchestratorError> {
        self.inner.start().await
    }

    /// Etapa actual + sub-estado, derivados del snapshot de statuses.
    pub fn stage(&self) -> (S, OperationStatus) {
        derive_stage::<S>(&self.inner.statuses())
    }

    /// Error almacenado en una etapa concreta, si lo hay.
    pub fn error_for(&self, stage: S) -> Option<&OrchestratorError> {
        self.inner.error_at(stage.index())
    }

    pub fn reset(&mut self) {
        self.inner.reset()
    }

    pub fn enabled(&self) -> bool {
        self.inner.enabled()
    }

    pub fn snapshot(&self) -> WorkflowSnapshot {
        self.inner.snapshot()
    }

    pub fn events(&self) -> Vec<WorkflowEvent> {
        self.inner.events()
    }

    pub fn workflow_fingerprint(&self) -> Option<String> {
        self.inner.workflow_fingerprint()
    }

    pub fn inner(&self) -> &StagedWorkflow<E> {
        &self.inner
    }
}
