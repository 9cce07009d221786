//! Estado de una operación remota en tiempo de ejecución.
use serde::{Deserialize, Serialize};

/// Estado uniforme de toda operación (lectura, simulación, envío,
/// confirmación).
///
/// Las transiciones válidas son:
/// - `Idle` -> `Pending` (disparo)
/// - `Pending` -> `Success`
/// - `Pending` -> `Error`
/// - `Error` -> `Idle` (sólo por re-armado/reset explícito)
///
/// No hay vuelta automática a `Idle` ni saltos arbitrarios. `Idle` significa
/// "el usuario aún no disparó la operación".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperationStatus {
    Idle,
    Pending,
    Error,
    Success,
}

impl OperationStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, OperationStatus::Success)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, OperationStatus::Error)
    }

    /// Terminal = no va a cambiar sin una acción explícita del usuario.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OperationStatus::Success | OperationStatus::Error)
    }
}
