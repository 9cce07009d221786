//! Tipos de evento del workflow y estructura `WorkflowEvent`.
//!
//! Rol en el coordinador:
//! - Cada corrida de `StagedWorkflow` emite eventos a un `EventStore`
//!   append-only; son el registro auditable de una operación financiera.
//! - El enum `WorkflowEventKind` es el contrato observable y estable del
//!   driver: tests y UIs razonan sobre él, no sobre estado interno.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::OrchestratorError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum WorkflowEventKind {
    /// El usuario habilitó el workflow (entry trigger). Invariante: primer
    /// evento de un `workflow_id`.
    WorkflowEnabled { definition_hash: String, stage_count: usize },
    /// Una etapa fue disparada. `attempt` crece con cada reintento manual.
    StageTriggered { stage_index: usize, stage_id: String, attempt: u32 },
    /// Una etapa alcanzó `Success`, con el hash de su salida (si produjo) y
    /// su fingerprint.
    StageSucceeded {
        stage_index: usize,
        stage_id: String,
        output_hash: Option<String>,
        fingerprint: String,
    },
    /// Una etapa falló. El workflow no continúa (stop-on-failure).
    StageFailed {
        stage_index: usize,
        stage_id: String,
        error: OrchestratorError,
        fingerprint: String,
    },
    /// El error de la etapa fue empujado a la superficie de notificación.
    /// A lo sumo uno por ocurrencia de error.
    ErrorNotified { stage_index: usize, stage_id: String },
    /// Reset explícito del usuario: se limpiaron los slots listados (los
    /// `Success` confirmados nunca aparecen aquí).
    WorkflowReset { cleared: Vec<usize> },
    /// Cierre con fingerprint agregado de la corrida (hash de los
    /// fingerprints ordenados de etapas exitosas).
    WorkflowCompleted { workflow_fingerprint: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowEvent {
    pub seq: u64, // asignado por el EventStore (orden de append)
    pub workflow_id: Uuid,
    pub kind: WorkflowEventKind,
    pub ts: DateTime<Utc>, // metadato (no entra en fingerprints)
}
