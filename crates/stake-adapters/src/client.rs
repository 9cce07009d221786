//! Colaborador de cadena: el contrato mínimo que las operaciones consumen.
//!
//! El coordinador no posee formato de wire ni protocolo; todo lo remoto se
//! delega aquí. Las implementaciones reales envuelven un provider
//! wallet/RPC; `MockChainClient` implementa el trait en memoria.
use async_trait::async_trait;
use serde_json::Value;

use stake_domain::{Address, ChainError, ContractCall, PreparedRequest, Receipt, TxHash};

#[async_trait]
pub trait ChainClient: Send + Sync {
    /// Lee un valor de contrato (llamada de sólo lectura).
    async fn read_contract(&self, call: &ContractCall) -> Result<Value, ChainError>;

    /// Dry-run de una escritura: predice éxito/revert y prepara la
    /// solicitud con gas estimado.
    async fn simulate(&self, call: &ContractCall, account: &Address) -> Result<PreparedRequest, ChainError>;

    /// Envía la transacción firmada a la cadena.
    async fn submit(&self, request: &PreparedRequest) -> Result<TxHash, ChainError>;

    /// Espera a que la transacción quede incluida y devuelve el recibo.
    async fn await_confirmation(&self, hash: &TxHash) -> Result<Receipt, ChainError>;

    /// Gas estimado para una llamada.
    async fn estimate_gas(&self, call: &ContractCall, account: &Address) -> Result<u64, ChainError>;

    /// Precio de gas vigente.
    async fn gas_price(&self) -> Result<u128, ChainError>;
}
