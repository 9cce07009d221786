//! Configuración central de la demo.
//! Carga variables de entorno (.env) y expone una estructura inmutable
//! (`CONFIG`) con las direcciones de contratos y el entorno de cadena.
use once_cell::sync::Lazy;
use std::env;

use stake_domain::{ChainEnvironment, StakingConfig};

// Direcciones de testnet usadas cuando no hay entorno configurado.
const DEFAULT_TOKEN: &str = "0x00000000000000000000000000000000000000aa";
const DEFAULT_STAKING: &str = "0x00000000000000000000000000000000000000bb";

/// Configuración global perezosa, evaluada una sola vez.
pub static CONFIG: Lazy<StakingConfig> = Lazy::new(|| {
    let environment = match env::var("STAKEFLOW_ENV").as_deref() {
        Ok("mainnet") => ChainEnvironment::Mainnet,
        _ => ChainEnvironment::Testnet,
    };
    let token = env::var("STAKEFLOW_TOKEN_CONTRACT").unwrap_or_else(|_| DEFAULT_TOKEN.to_string());
    let staking = env::var("STAKEFLOW_STAKING_CONTRACT").unwrap_or_else(|_| DEFAULT_STAKING.to_string());
    StakingConfig::from_hex(environment, &token, &staking).expect("invalid contract address in environment")
});
