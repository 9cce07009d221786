//! stake-adapters: puente entre el dominio de staking y el coordinador.
//!
//! Define el trait `ChainClient` (colaborador wallet/RPC), las operaciones
//! concretas de etapa que el driver ejecuta (aprobar, simular, enviar,
//! confirmar, leer), un cliente de cadena determinista en memoria para tests
//! y demos, los notificadores y la superficie de traducción.
pub mod client;
pub mod fees;
pub mod i18n;
pub mod mock;
pub mod notify;
pub mod operations;

pub use client::ChainClient;
pub use fees::FeeEstimator;
pub use i18n::{StaticCatalog, Translator};
pub use mock::{CallCounters, MockChainClient};
pub use notify::{CollectingNotifier, LogNotifier, TranslatingNotifier};
pub use operations::{ApproveOperation, ConfirmOperation, ReadOperation, SimulateOperation, SubmitOperation};
