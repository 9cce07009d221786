//! Cliente de cadena determinista en memoria.
//!
//! Cumple dos roles: doble de test programable (fallas por función,
//! contadores de llamadas para asserts de "nunca se invocó") y backend de la
//! demo. Los hashes de transacción son secuenciales y reproducibles.
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::client::ChainClient;
use stake_domain::{Address, ChainError, ContractCall, PreparedRequest, Receipt, TokenAmount, TxHash};

/// Contadores de llamadas remotas, por tipo de operación.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallCounters {
    pub read: u32,
    pub simulate: u32,
    pub submit: u32,
    pub confirm: u32,
    pub estimate_gas: u32,
    pub gas_price: u32,
}

#[derive(Debug, Default)]
struct MockState {
    reads: HashMap<String, Value>,
    simulate_failures: HashMap<String, ChainError>,
    submit_failure: Option<ChainError>,
    confirm_revert: Option<String>,
    next_tx: u64,
    counters: CallCounters,
}

#[derive(Debug)]
pub struct MockChainClient {
    state: Mutex<MockState>,
    gas: u64,
    gas_price: u128,
}

impl Default for MockChainClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MockChainClient {
    pub fn new() -> Self {
        Self { state: Mutex::new(MockState::default()),
               gas: 90_000,
               gas_price: 12 }
    }

    /// Fija el resultado de `read_contract` para una función.
    pub fn with_read(self, function: &str, value: Value) -> Self {
        self.state.lock().unwrap().reads.insert(function.to_string(), value);
        self
    }

    /// Hace fallar la simulación de una función concreta.
    pub fn fail_simulate(self, function: &str, error: ChainError) -> Self {
        self.state.lock().unwrap().simulate_failures.insert(function.to_string(), error);
        self
    }

    /// Hace fallar todo envío (p. ej. usuario cancela la firma).
    pub fn fail_submit(self, error: ChainError) -> Self {
        self.state.lock().unwrap().submit_failure = Some(error);
        self
    }

    /// Hace que toda confirmación devuelva un recibo revertido.
    pub fn revert_on_confirm(self, reason: &str) -> Self {
        self.state.lock().unwrap().confirm_revert = Some(reason.to_string());
        self
    }

    /// Deja de fallar simulaciones (para tests de reintento).
    pub fn clear_simulate_failures(&self) {
        self.state.lock().unwrap().simulate_failures.clear();
    }

    pub fn counters(&self) -> CallCounters {
        self.state.lock().unwrap().counters
    }

    fn next_tx_hash(state: &mut MockState) -> TxHash {
        state.next_tx += 1;
        let mut bytes = [0u8; 32];
        bytes[24..].copy_from_slice(&state.next_tx.to_be_bytes());
        TxHash::from_bytes(bytes)
    }
}

#[async_trait]
impl ChainClient for MockChainClient {
    async fn read_contract(&self, call: &ContractCall) -> Result<Value, ChainError> {
        let mut state = self.state.lock().unwrap();
        state.counters.read += 1;
        match state.reads.get(&call.function) {
            Some(v) => Ok(v.clone()),
            None => Err(ChainError::Rpc(format!("no value for {}", call.function))),
        }
    }

    async fn simulate(&self, call: &ContractCall, _account: &Address) -> Result<PreparedRequest, ChainError> {
        let mut state = self.state.lock().unwrap();
        state.counters.simulate += 1;
        if let Some(err) = state.simulate_failures.get(&call.function) {
            return Err(err.clone());
        }
        Ok(PreparedRequest { call: call.clone(),
                             gas_limit: self.gas,
                             value: TokenAmount::ZERO })
    }

    async fn submit(&self, _request: &PreparedRequest) -> Result<TxHash, ChainError> {
        let mut state = self.state.lock().unwrap();
        state.counters.submit += 1;
        if let Some(err) = &state.submit_failure {
            return Err(err.clone());
        }
        Ok(Self::next_tx_hash(&mut state))
    }

    async fn await_confirmation(&self, hash: &TxHash) -> Result<Receipt, ChainError> {
        let mut state = self.state.lock().unwrap();
        state.counters.confirm += 1;
        if let Some(reason) = &state.confirm_revert {
            return Err(ChainError::Reverted(reason.clone()));
        }
        Ok(Receipt { tx_hash: *hash,
                     block_number: state.next_tx,
                     success: true })
    }

    async fn estimate_gas(&self, _call: &ContractCall, _account: &Address) -> Result<u64, ChainError> {
        let mut state = self.state.lock().unwrap();
        state.counters.estimate_gas += 1;
        Ok(self.gas)
    }

    async fn gas_price(&self) -> Result<u128, ChainError> {
        let mut state = self.state.lock().unwrap();
        state.counters.gas_price += 1;
        Ok(self.gas_price)
    }
}
