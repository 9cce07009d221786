//! stake-domain: tipos de valor del dominio de staking.
//!
//! Este crate no conoce el motor de orquestación ni el cliente de cadena;
//! sólo define los objetos que viajan entre ambos (direcciones, llamadas a
//! contrato, recibos, estimaciones de fee) y la configuración inyectada.
pub mod call;
pub mod config;
pub mod errors;
pub mod types;

pub use call::{ContractCall, FeeEstimate, PreparedRequest, Receipt};
pub use config::{ChainEnvironment, StakingConfig};
pub use errors::ChainError;
pub use types::{Address, TokenAmount, TxHash};
