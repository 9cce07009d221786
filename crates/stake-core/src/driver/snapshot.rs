//! Vistas derivadas del estado del workflow.
use serde::{Deserialize, Serialize};

use crate::status::OperationStatus;

/// Snapshot puro para la capa de presentación: etapa actual + sub-estado.
/// Calcularlo no dispara nada (consultar no es avanzar).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowSnapshot {
    pub stage_index: usize,
    pub stage_id: String,
    /// Clave de catálogo de la etiqueta visible de la etapa actual.
    pub stage_label_key: String,
    pub sub_status: OperationStatus,
    pub enabled: bool,
    pub completed: bool,
}

/// Decisión de un paso del driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// El usuario todavía no habilitó el workflow; no se disparó nada.
    NotEnabled,
    /// La etapa actual ya está `Pending`; el re-disparo se ignora.
    InFlight,
    /// La etapa actual terminó en `Success`; hay una siguiente por disparar.
    Advanced,
    /// Todas las etapas están en `Success`.
    Completed,
}
