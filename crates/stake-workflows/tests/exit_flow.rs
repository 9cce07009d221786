//! Flujos de salida: pedido de salida y salida efectiva.

use std::sync::Arc;

use stake_adapters::{CollectingNotifier, MockChainClient};
use stake_core::{InMemoryEventStore, OperationStatus, OrchestratorError};
use stake_domain::{Address, ChainEnvironment, ChainError, StakingConfig};
use stake_workflows::{ExitNode, ExitParams, ExitStage, RequestExit, RequestExitStage};

const TOKEN: &str = "0x00000000000000000000000000000000000000aa";
const STAKING: &str = "0x00000000000000000000000000000000000000bb";
const OPERATOR: &str = "0x00000000000000000000000000000000000000cc";

fn config() -> StakingConfig {
    StakingConfig::from_hex(ChainEnvironment::Testnet, TOKEN, STAKING).expect("config")
}

fn params() -> ExitParams {
    ExitParams { operator: Some(Address::from_hex(OPERATOR).unwrap()),
                 node_key: "node-pubkey-1".to_string() }
}

#[tokio::test]
async fn request_exit_happy_path() {
    let client = Arc::new(MockChainClient::new());
    let mut wf = RequestExit::new(client.clone(), &config(), params(), InMemoryEventStore::default(),
                                  Box::new(CollectingNotifier::default()));

    let snap = wf.request_exit().await.expect("request exit completes");
    assert!(snap.completed);
    assert_eq!(wf.stage(), (RequestExitStage::Transaction, OperationStatus::Success));
    assert_eq!(client.counters().submit, 1);
}

#[tokio::test]
async fn exit_happy_path() {
    let client = Arc::new(MockChainClient::new());
    let mut wf = ExitNode::new(client.clone(), &config(), params(), InMemoryEventStore::default(),
                               Box::new(CollectingNotifier::default()));

    let snap = wf.exit().await.expect("exit completes");
    assert!(snap.completed);
    assert_eq!(wf.stage(), (ExitStage::Transaction, OperationStatus::Success));
}

#[tokio::test]
async fn cancelled_signature_blocks_until_reset_and_new_trigger() {
    let client = Arc::new(MockChainClient::new().fail_submit(ChainError::Rejected("user denied".into())));
    let notifier = CollectingNotifier::default();
    let mut wf = RequestExit::new(client.clone(), &config(), params(), InMemoryEventStore::default(),
                                  Box::new(notifier.clone()));

    let err = wf.request_exit().await.expect_err("submission fails");
    assert!(matches!(err, OrchestratorError::Submission(_)));
    assert_eq!(wf.stage(), (RequestExitStage::Write, OperationStatus::Error));
    assert_eq!(notifier.error_count(), 1);

    // Reset: estado transitorio fuera, simulación exitosa preservada.
    wf.reset();
    assert_eq!(wf.stage(), (RequestExitStage::Write, OperationStatus::Idle));
    assert!(wf.error_for(RequestExitStage::Write).is_none());

    // Sin nuevo entry trigger el workflow queda quieto; con él, reintenta
    // (y vuelve a fallar porque la causa persiste) notificando de nuevo:
    // es una ocurrencia nueva.
    let err = wf.request_exit().await.expect_err("still failing");
    assert!(matches!(err, OrchestratorError::Submission(_)));
    assert_eq!(notifier.error_count(), 2);
    assert_eq!(client.counters().submit, 2);
}

#[tokio::test]
async fn exit_fee_estimate_requires_the_operator() {
    let client = Arc::new(MockChainClient::new());
    let wf = ExitNode::new(client, &config(), ExitParams { operator: None, node_key: "k".into() },
                           InMemoryEventStore::default(), Box::new(CollectingNotifier::default()));
    assert!(matches!(wf.estimate_fee().await, Err(ChainError::InvalidAddress(_))));
}
