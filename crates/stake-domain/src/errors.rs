//! Errores del colaborador de cadena (RPC/wallet), separados de los errores
//! del orquestador: aquí viven las causas, el orquestador les asigna etapa.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum ChainError {
    #[error("invalid address: {0}")] InvalidAddress(String),
    #[error("invalid tx hash: {0}")] InvalidTxHash(String),
    #[error("rpc error: {0}")] Rpc(String),
    #[error("rejected by wallet: {0}")] Rejected(String),
    #[error("reverted: {0}")] Reverted(String),
    #[error("confirmation timed out")] Timeout,
}
