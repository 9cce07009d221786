//! stake-core: coordinador de operaciones asíncronas por etapas.
//!
//! Dado un workflow de operaciones de cadena dependientes (aprobar gasto →
//! simular → enviar → confirmar), el driver mantiene el estado de cada etapa,
//! deriva una única etapa actual con su sub-estado, avanza por flanco
//! (Pending→Success dispara la siguiente etapa exactamente una vez) y reporta
//! cada error una sola vez a la superficie de notificación. No conoce UI ni
//! framework alguno; todo es observable vía eventos append-only.
pub mod constants;
pub mod driver;
pub mod errors;
pub mod event;
pub mod hashing;
pub mod notify;
pub mod operation;
pub mod stage;
pub mod status;

pub use driver::{build_workflow_definition, Advance, StageSlot, StagedWorkflow, WorkflowDefinition, WorkflowSnapshot};
pub use errors::OrchestratorError;
pub use event::{EventStore, InMemoryEventStore, WorkflowEvent, WorkflowEventKind};
pub use notify::{Notifier, NullNotifier};
pub use operation::{OperationContext, OperationOutcome, StageOperation};
pub use stage::{derive_position, derive_stage, StageList, StagePosition};
pub use status::OperationStatus;
