//! Descriptores de llamadas a contrato y sus resultados.
//!
//! `ContractCall` describe la intención (contrato + función + argumentos
//! JSON neutros); `PreparedRequest` es la salida de una simulación exitosa y
//! la entrada del envío real; `Receipt` es el resultado confirmado en cadena.
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::{Address, TokenAmount, TxHash};

/// Llamada a función de contrato. Los argumentos son JSON genérico; el
/// cliente de cadena es quien los codifica al ABI concreto.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractCall {
    pub contract: Address,
    pub function: String,
    pub args: Vec<Value>,
}

impl ContractCall {
    pub fn new(contract: Address, function: impl Into<String>, args: Vec<Value>) -> Self {
        Self { contract, function: function.into(), args }
    }
}

/// Solicitud lista para enviar, producida por una simulación exitosa.
/// Invariante: sólo el cliente de cadena construye estos valores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreparedRequest {
    pub call: ContractCall,
    pub gas_limit: u64,
    pub value: TokenAmount,
}

/// Recibo de una transacción incluida en un bloque.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    pub tx_hash: TxHash,
    pub block_number: u64,
    /// `false` cuando la transacción revirtió en cadena.
    pub success: bool,
}

/// Estimación de fee: gas previsto por la simulación × precio vigente.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeEstimate {
    pub gas: u64,
    pub gas_price: u128,
}

impl FeeEstimate {
    /// Costo total en wei, saturando en overflow (un fee saturado ya es
    /// impagable, no hace falta distinguirlo).
    pub fn total(&self) -> u128 {
        (self.gas as u128).saturating_mul(self.gas_price)
    }
}
