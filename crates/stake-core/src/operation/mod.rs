//! Definiciones relacionadas a operaciones de etapa.
//!
//! Una operación es una unidad remota (lectura, simulación, envío o espera
//! de confirmación) que consume a lo sumo la salida JSON de la etapa
//! anterior y produce a lo sumo una salida. Este módulo define:
//! - `StageOperation`: interfaz neutral usada por el driver.
//! - `OperationOutcome`: resultado abstracto de una corrida.
//! - `OperationContext`: entrada + parámetros canónicos.

mod definition;
mod outcome;

pub use definition::{OperationContext, StageOperation};
pub use outcome::OperationOutcome;
