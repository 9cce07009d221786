//! Estimación de fees para la UI previa al envío.
use std::sync::Arc;

use crate::client::ChainClient;
use stake_domain::{Address, ChainError, ContractCall, FeeEstimate};

/// Combina gas estimado y precio vigente en un `FeeEstimate`. Sólo
/// informativo: no participa del avance del workflow.
pub struct FeeEstimator {
    client: Arc<dyn ChainClient>,
}

impl FeeEstimator {
    pub fn new(client: Arc<dyn ChainClient>) -> Self {
        Self { client }
    }

    pub async fn estimate(&self, call: &ContractCall, account: &Address) -> Result<FeeEstimate, ChainError> {
        let gas = self.client.estimate_gas(call, account).await?;
        let gas_price = self.client.gas_price().await?;
        Ok(FeeEstimate { gas, gas_price })
    }
}
