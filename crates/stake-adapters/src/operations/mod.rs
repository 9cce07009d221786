//! Operaciones de etapa concretas.
//!
//! Cada operación envuelve exactamente una interacción remota y la expone al
//! driver como `StageOperation`: valida sus argumentos requeridos de forma
//! síncrona (un faltante es `Validation`, sin llamada remota), delega en el
//! `ChainClient` y mapea el `ChainError` a la taxonomía del coordinador
//! según la etapa que lo observó. Ninguna guarda status propio.

mod approve;
mod confirm;
mod read;
mod simulate;
mod submit;

pub use approve::ApproveOperation;
pub use confirm::ConfirmOperation;
pub use read::ReadOperation;
pub use simulate::SimulateOperation;
pub use submit::SubmitOperation;

use serde::de::DeserializeOwned;
use stake_core::{OperationContext, OrchestratorError};

/// Decodifica la salida encadenada de la etapa anterior; su ausencia es un
/// error de validación, no un fallo remoto.
pub(crate) fn required_input<T: DeserializeOwned>(ctx: &OperationContext, what: &str) -> Result<T, OrchestratorError> {
    let value = ctx.input
                   .clone()
                   .ok_or_else(|| OrchestratorError::Validation(format!("{what} is required")))?;
    serde_json::from_value(value).map_err(|e| OrchestratorError::Validation(format!("invalid {what}: {e}")))
}
