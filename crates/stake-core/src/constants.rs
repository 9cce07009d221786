//! Constantes del coordinador.
//!
//! Valores estáticos que participan en el cálculo de fingerprints. Un cambio
//! de versión del coordinador invalida determinísticamente los fingerprints
//! de las corridas aunque la definición del workflow no cambie.

/// Versión lógica del coordinador. Forma parte del input de hashing de cada
/// etapa y del fingerprint agregado de la corrida.
pub const ORCHESTRATOR_VERSION: &str = "1.0";
