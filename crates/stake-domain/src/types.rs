//! Tipos primitivos de cadena: direcciones, hashes de transacción y montos.
//!
//! Son tipos de valor validados en construcción: una `Address` o un `TxHash`
//! inválidos no pueden existir. La representación textual es siempre hex con
//! prefijo `0x`.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::ChainError;

/// Dirección de cuenta/contrato (20 bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address([u8; 20]);

impl Address {
    /// Parsea desde hex (`0x` opcional). Valida longitud y contenido.
    pub fn from_hex(s: &str) -> Result<Self, ChainError> {
        let stripped = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(stripped).map_err(|_| ChainError::InvalidAddress(s.to_string()))?;
        let arr: [u8; 20] = bytes.try_into().map_err(|_| ChainError::InvalidAddress(s.to_string()))?;
        Ok(Self(arr))
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

/// Hash de transacción (32 bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TxHash([u8; 32]);

impl TxHash {
    pub fn from_hex(s: &str) -> Result<Self, ChainError> {
        let stripped = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(stripped).map_err(|_| ChainError::InvalidTxHash(s.to_string()))?;
        let arr: [u8; 32] = bytes.try_into().map_err(|_| ChainError::InvalidTxHash(s.to_string()))?;
        Ok(Self(arr))
    }

    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

/// Monto de token en la unidad mínima (wei). Aritmética con chequeo de
/// overflow: las operaciones devuelven `None` en lugar de envolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct TokenAmount(pub u128);

impl TokenAmount {
    pub const ZERO: TokenAmount = TokenAmount(0);

    pub fn checked_add(self, other: TokenAmount) -> Option<TokenAmount> {
        self.0.checked_add(other.0).map(TokenAmount)
    }

    pub fn checked_mul(self, factor: u128) -> Option<TokenAmount> {
        self.0.checked_mul(factor).map(TokenAmount)
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
