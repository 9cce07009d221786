//! stake-workflows: los cuatro workflows de staking sobre el coordinador.
//!
//! Cada workflow (registrar nodo, reclamar recompensas, pedir salida, salir)
//! es una instancia del mismo `Orchestrator<S>` genérico con su enum de
//! etapas cerrado y sus operaciones en orden; acá no se duplica derivación
//! ni fan-out de errores.
pub mod claim;
pub mod exit;
pub mod orchestrator;
pub mod register;

pub use claim::{ClaimParams, ClaimRewards, ClaimStage};
pub use exit::{ExitNode, ExitParams, ExitStage, RequestExit, RequestExitStage};
pub use orchestrator::Orchestrator;
pub use register::{RegisterNode, RegisterParams, RegisterStage};
