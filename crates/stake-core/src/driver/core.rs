//! Implementación del driver `StagedWorkflow`.

use chrono::Utc;
use serde_json::{json, Value};
use std::collections::HashMap;
use uuid::Uuid;

use crate::driver::definition::{StageSlot, WorkflowDefinition};
use crate::driver::snapshot::{Advance, WorkflowSnapshot};
use crate::errors::OrchestratorError;
use crate::event::{EventStore, WorkflowEvent, WorkflowEventKind};
use crate::hashing::hash_value;
use crate::notify::Notifier;
use crate::operation::{OperationContext, OperationOutcome};
use crate::stage::derive_position;
use crate::status::OperationStatus;

/// Coordinador de un workflow de operaciones de cadena por etapas.
///
/// Responsable de derivar la etapa actual, disparar cada operación
/// exactamente una vez por transición (avance por flanco), cortar en el
/// primer error y dejar un registro de eventos auditable de la corrida.
/// Cada instancia es local a su dueño; no hay estado compartido entre
/// instancias ni bloqueo entre corridas concurrentes.
pub struct StagedWorkflow<E>
    where E: EventStore
{
    workflow_id: Uuid,
    definition: WorkflowDefinition,
    slots: Vec<StageSlot>,
    enabled: bool,
    event_store: E,
    notifier: Box<dyn Notifier>,
}

impl<E> StagedWorkflow<E> where E: EventStore
{
    pub fn new(definition: WorkflowDefinition, event_store: E, notifier: Box<dyn Notifier>) -> Self {
        let slots = definition.stages
                              .iter()
                              .map(|s| StageSlot::new(s.id().to_string()))
                              .collect();
        Self { workflow_id: Uuid::new_v4(),
               definition,
               slots,
               enabled: false,
               event_store,
               notifier }
    }

    pub fn workflow_id(&self) -> Uuid {
        self.workflow_id
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn stage_count(&self) -> usize {
        self.definition.len()
    }

    pub fn slot(&self, index: usize) -> Option<&StageSlot> {
        self.slots.get(index)
    }

    pub fn error_at(&self, index: usize) -> Option<&OrchestratorError> {
        self.slots.get(index).and_then(|s| s.error.as_ref())
    }

    pub fn statuses(&self) -> Vec<OperationStatus> {
        self.slots.iter().map(|s| s.status).collect()
    }

    pub fn events(&self) -> Vec<WorkflowEvent> {
        self.event_store.list(self.workflow_id)
    }

    pub fn event_store(&self) -> &E {
        &self.event_store
    }

    /// Snapshot puro del estado actual. No dispara ninguna operación:
    /// consultar N veces con el mismo estado devuelve N veces lo mismo.
    pub fn snapshot(&self) -> WorkflowSnapshot {
        let statuses = self.statuses();
        let pos = derive_position(&statuses);
        WorkflowSnapshot { stage_index: pos.index,
                           stage_id: self.slots
                                         .get(pos.index)
                                         .map(|s| s.stage_id.clone())
                                         .unwrap_or_default(),
                           stage_label_key: self.definition
                                                .stages
                                                .get(pos.index)
                                                .map(|s| s.label_key().to_string())
                                                .unwrap_or_default(),
                           sub_status: pos.sub_status,
                           enabled: self.enabled,
                           completed: !statuses.is_empty() && statuses.iter().all(|s| s.is_success()) }
    }

    /// Entry trigger del workflow.
    ///
    /// Habilita el avance automático (una sola vez por instancia, hasta
    /// `reset`), re-arma la etapa fallida actual si el usuario reintenta tras
    /// un error, y avanza hasta completarse o bloquearse. Nunca reintenta
    /// solo: llegar aquí siempre es una acción explícita del usuario.
    pub async fn start(&mut self) -> Result<WorkflowSnapshot, OrchestratorError> {
        if !self.enabled {
            self.enabled = true;
            self.append(WorkflowEventKind::WorkflowEnabled { definition_hash: self.definition.definition_hash.clone(),
                                                             stage_count: self.definition.len() });
        }

        let pos = derive_position(&self.statuses());
        if self.slots.get(pos.index).map(|s| s.status.is_error()).unwrap_or(false) {
            self.rearm(pos.index);
        }

        self.run_until_settled().await
    }

    /// Avanza hasta que el workflow se complete o se bloquee (error, etapa
    /// en vuelo o workflow deshabilitado).
    pub async fn run_until_settled(&mut self) -> Result<WorkflowSnapshot, OrchestratorError> {
        loop {
            match self.step().await? {
                Advance::Advanced => continue,
                Advance::Completed | Advance::NotEnabled | Advance::InFlight => break,
            }
        }
        Ok(self.snapshot())
    }

    /// Un paso del driver: dispara la etapa actual si (y sólo si) el
    /// workflow está habilitado y la etapa está `Idle`.
    ///
    /// El avance es por flanco: la decisión de disparar K+1 nace del registro
    /// del `Success` de K, nunca de observar repetidamente el mismo estado.
    /// Una etapa `Pending` ignora el re-disparo; una etapa en `Error` bloquea
    /// el workflow hasta `start()` (reintento) o `reset()`.
    pub async fn step(&mut self) -> Result<Advance, OrchestratorError> {
        if !self.enabled {
            return Ok(Advance::NotEnabled);
        }
        let statuses = self.statuses();
        if !statuses.is_empty() && statuses.iter().all(|s| s.is_success()) {
            return Ok(Advance::Completed);
        }
        if self.definition.is_empty() {
            return Err(OrchestratorError::Internal("workflow has no stages".into()));
        }

        let pos = derive_position(&statuses);
        match self.slots[pos.index].status {
            OperationStatus::Pending => Ok(Advance::InFlight),
            OperationStatus::Error => Err(OrchestratorError::WorkflowHasFailed),
            OperationStatus::Idle => self.trigger_stage(pos.index).await,
            // derive_position nunca elige una etapa Success salvo el caso
            // all-success, cubierto arriba.
            OperationStatus::Success => Ok(Advance::Completed),
        }
    }

    /// Reset explícito del usuario.
    ///
    /// Deshabilita el workflow y limpia los slots transitorios (pendientes,
    /// con error o con salida sin confirmar status). Los slots `Success` son
    /// registro confirmado en cadena y no se alteran jamás. Idempotente: un
    /// segundo reset sin cambios no agrega evento.
    pub fn reset(&mut self) {
        let mut cleared: Vec<usize> = Vec::new();
        for (i, slot) in self.slots.iter_mut().enumerate() {
            if slot.status.is_success() {
                continue;
            }
            let dirty = slot.status != OperationStatus::Idle || slot.error.is_some() || slot.output.is_some();
            if dirty {
                slot.status = OperationStatus::Idle;
                slot.error = None;
                slot.output = None;
                slot.output_hash = None;
                slot.notified = false;
                slot.started_at = None;
                slot.finished_at = None;
                cleared.push(i);
            }
        }
        if self.enabled || !cleared.is_empty() {
            self.enabled = false;
            self.append(WorkflowEventKind::WorkflowReset { cleared });
        }
    }

    /// Fingerprint agregado de la corrida si ya se completó.
    pub fn workflow_fingerprint(&self) -> Option<String> {
        self.events().iter().rev().find_map(|e| match &e.kind {
                                      WorkflowEventKind::WorkflowCompleted { workflow_fingerprint } => {
                                          Some(workflow_fingerprint.clone())
                                      }
                                      _ => None,
                                  })
    }

    /// Variante compacta de eventos, útil para asserts de secuencia.
    pub fn event_variants(&self) -> Vec<&'static str> {
        self.events()
            .iter()
            .map(|e| match e.kind {
                WorkflowEventKind::WorkflowEnabled { .. } => "E",
                WorkflowEventKind::StageTriggered { .. } => "T",
                WorkflowEventKind::StageSucceeded { .. } => "S",
                WorkflowEventKind::StageFailed { .. } => "X",
                WorkflowEventKind::ErrorNotified { .. } => "N",
                WorkflowEventKind::WorkflowReset { .. } => "R",
                WorkflowEventKind::WorkflowCompleted { .. } => "C",
            })
            .collect()
    }

    fn append(&mut self, kind: WorkflowEventKind) -> WorkflowEvent {
        self.event_store.append_kind(self.workflow_id, kind)
    }

    /// Vuelve una etapa fallida a `Idle` para un reintento explícito.
    fn rearm(&mut self, index: usize) {
        let slot = &mut self.slots[index];
        slot.status = OperationStatus::Idle;
        slot.error = None;
        slot.output = None;
        slot.output_hash = None;
        slot.notified = false;
    }

    async fn trigger_stage(&mut self, index: usize) -> Result<Advance, OrchestratorError> {
        let input = if index == 0 {
            None
        } else {
            self.slots[index - 1].output.clone()
        };
        let stage_id = self.definition.stages[index].id().to_string();
        let params = self.definition.stages[index].params();

        {
            let slot = &mut self.slots[index];
            slot.status = OperationStatus::Pending;
            slot.error = None;
            slot.attempts += 1;
            slot.started_at = Some(Utc::now());
        }
        let attempt = self.slots[index].attempts;
        self.append(WorkflowEventKind::StageTriggered { stage_index: index,
                                                        stage_id: stage_id.clone(),
                                                        attempt });

        let ctx = OperationContext { input, params: params.clone() };
        let outcome = self.definition.stages[index].run(&ctx).await;

        match outcome {
            OperationOutcome::Success { output } => self.handle_success(index, stage_id, params, output),
            OperationOutcome::Failure { error } => self.handle_failure(index, stage_id, params, error),
        }
    }

    fn handle_success(&mut self,
                      index: usize,
                      stage_id: String,
                      params: Value,
                      output: Option<Value>)
                      -> Result<Advance, OrchestratorError> {
        let output_hash = output.as_ref().map(hash_value);
        let fingerprint = self.stage_fingerprint(index, &params, output_hash.as_deref());

        {
            let slot = &mut self.slots[index];
            slot.status = OperationStatus::Success;
            slot.output = output;
            slot.output_hash = output_hash.clone();
            slot.finished_at = Some(Utc::now());
        }
        self.append(WorkflowEventKind::StageSucceeded { stage_index: index,
                                                        stage_id,
                                                        output_hash,
                                                        fingerprint });

        if index + 1 == self.definition.len() {
            self.complete_workflow();
            return Ok(Advance::Completed);
        }
        Ok(Advance::Advanced)
    }

    fn handle_failure(&mut self,
                      index: usize,
                      stage_id: String,
                      params: Value,
                      error: OrchestratorError)
                      -> Result<Advance, OrchestratorError> {
        let fingerprint = self.stage_fingerprint(index, &params, None);
        {
            let slot = &mut self.slots[index];
            slot.status = OperationStatus::Error;
            slot.error = Some(error.clone());
            slot.finished_at = Some(Utc::now());
        }
        self.append(WorkflowEventKind::StageFailed { stage_index: index,
                                                     stage_id: stage_id.clone(),
                                                     error: error.clone(),
                                                     fingerprint });
        self.fan_out_error(index, &stage_id);
        Err(error)
    }

    /// Empuja el error del slot a la superficie de notificación, a lo sumo
    /// una vez por ocurrencia. El error queda además almacenado en el slot
    /// para display inline: reportar no es descartar.
    ///
    /// Se empuja la clave de catálogo del error con la razón como parámetro
    /// `{reason}`; el texto final lo resuelve la capa de presentación.
    fn fan_out_error(&mut self, index: usize, stage_id: &str) {
        if self.slots[index].notified {
            return;
        }
        let (key, reason) = match &self.slots[index].error {
            Some(e) => (e.message_key(), e.reason()),
            None => return,
        };
        self.slots[index].notified = true;
        let params = HashMap::from([("reason".to_string(), reason)]);
        self.notifier.notify_error(key, &params);
        self.append(WorkflowEventKind::ErrorNotified { stage_index: index,
                                                       stage_id: stage_id.to_string() });
    }

    fn complete_workflow(&mut self) {
        let stage_fps: Vec<String> = self.events()
                                         .iter()
                                         .filter_map(|e| match &e.kind {
                                             WorkflowEventKind::StageSucceeded { fingerprint, .. } => {
                                                 Some(fingerprint.clone())
                                             }
                                             _ => None,
                                         })
                                         .collect();
        let workflow_fp = hash_value(&json!({
                                         "orchestrator_version": crate::constants::ORCHESTRATOR_VERSION,
                                         "definition_hash": self.definition.definition_hash,
                                         "stage_fingerprints": stage_fps
                                     }));
        self.append(WorkflowEventKind::WorkflowCompleted { workflow_fingerprint: workflow_fp });
        let completion_key = self.definition.completion_key.clone();
        self.notifier.notify_success(&completion_key);
    }

    fn stage_fingerprint(&self, index: usize, params: &Value, output_hash: Option<&str>) -> String {
        hash_value(&json!({
            "orchestrator_version": crate::constants::ORCHESTRATOR_VERSION,
            "definition_hash": self.definition.definition_hash,
            "stage_index": index,
            "output_hash": output_hash,
            "params": params
        }))
    }
}
