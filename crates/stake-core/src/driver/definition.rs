//! Definición inmutable del workflow y estado vivo por etapa.
use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::errors::OrchestratorError;
use crate::operation::StageOperation;
use crate::status::OperationStatus;

/// Definición inmutable del workflow: operaciones en orden de ejecución más
/// el hash de la secuencia de ids (identidad de la definición).
pub struct WorkflowDefinition {
    pub stages: Vec<Box<dyn StageOperation>>,
    pub definition_hash: String,
    /// Clave de catálogo notificada al completarse la corrida.
    pub completion_key: String,
}

impl WorkflowDefinition {
    pub fn new(stages: Vec<Box<dyn StageOperation>>, definition_hash: String) -> Self {
        Self { stages, definition_hash, completion_key: "workflow.completed".to_string() }
    }

    /// Clave de cierre propia del workflow (p. ej.
    /// `workflow.register.completed`).
    pub fn with_completion_key(mut self, key: &str) -> Self {
        self.completion_key = key.to_string();
        self
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

/// Construye la definición extrayendo los ids de las operaciones en orden.
pub fn build_workflow_definition(stages: Vec<Box<dyn StageOperation>>) -> WorkflowDefinition {
    use crate::hashing::{hash_str, to_canonical_json};
    use serde_json::json;
    let ids: Vec<String> = stages.iter().map(|s| s.id().to_string()).collect();
    let canonical = to_canonical_json(&json!(ids));
    WorkflowDefinition::new(stages, hash_str(&canonical))
}

/// Estado vivo de una etapa dentro del driver.
///
/// El slot es la única fuente de status/error de la etapa; la operación en sí
/// no guarda bookkeeping. `notified` garantiza a lo sumo una notificación por
/// ocurrencia de error.
#[derive(Debug, Clone)]
pub struct StageSlot {
    pub stage_id: String,
    pub status: OperationStatus,
    pub error: Option<OrchestratorError>,
    /// Salida JSON de la etapa (encadenada como input de la siguiente).
    pub output: Option<Value>,
    pub output_hash: Option<String>,
    pub notified: bool,
    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
    pub attempts: u32,
}

impl StageSlot {
    pub fn new(stage_id: String) -> Self {
        Self { stage_id,
               status: OperationStatus::Idle,
               error: None,
               output: None,
               output_hash: None,
               notified: false,
               started_at: None,
               finished_at: None,
               attempts: 0 }
    }
}
