//! Driver de workflows por etapas.
//!
//! `StagedWorkflow` compone operaciones ordenadas, deriva la etapa actual con
//! la regla pura de `stage::derive_position`, avanza por flanco y reporta
//! errores exactamente una vez. Reemplaza la reactividad de un framework de
//! UI por un patrón explícito de eventos + decisión del driver.

pub mod core;
pub mod definition;
pub mod snapshot;

pub use core::StagedWorkflow;
pub use definition::{build_workflow_definition, StageSlot, WorkflowDefinition};
pub use snapshot::{Advance, WorkflowSnapshot};
