//! Configuración inyectada del sistema de staking.
//!
//! Se construye una vez al arranque y se pasa por constructor a los
//! workflows; no hay estado de módulo mutable ni flags ambientales.
use serde::{Deserialize, Serialize};

use crate::errors::ChainError;
use crate::types::Address;

/// Red destino. Sólo afecta direcciones y etiquetas, nunca la derivación de
/// etapas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChainEnvironment {
    Mainnet,
    Testnet,
}

/// Direcciones de los contratos del sistema de staking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StakingConfig {
    pub environment: ChainEnvironment,
    /// Contrato del token que se aprueba y deposita.
    pub token_contract: Address,
    /// Contrato de staking (registro, recompensas y salida de nodos).
    pub staking_contract: Address,
}

impl StakingConfig {
    pub fn new(environment: ChainEnvironment, token_contract: Address, staking_contract: Address) -> Self {
        Self { environment, token_contract, staking_contract }
    }

    /// Construye desde strings hex (útil para cargar de entorno).
    pub fn from_hex(environment: ChainEnvironment, token: &str, staking: &str) -> Result<Self, ChainError> {
        Ok(Self { environment,
                  token_contract: Address::from_hex(token)?,
                  staking_contract: Address::from_hex(staking)? })
    }
}
