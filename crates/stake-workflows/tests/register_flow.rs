//! Flujo completo de registro de nodo contra el cliente en memoria.

use serde_json::json;
use std::sync::Arc;

use stake_adapters::{CollectingNotifier, MockChainClient, StaticCatalog, TranslatingNotifier};
use stake_core::{InMemoryEventStore, OperationStatus, OrchestratorError, WorkflowEventKind};
use stake_domain::{Address, ChainEnvironment, ChainError, StakingConfig, TokenAmount};
use stake_workflows::{RegisterNode, RegisterParams, RegisterStage};

const TOKEN: &str = "0x00000000000000000000000000000000000000aa";
const STAKING: &str = "0x00000000000000000000000000000000000000bb";
const OPERATOR: &str = "0x00000000000000000000000000000000000000cc";

fn config() -> StakingConfig {
    StakingConfig::from_hex(ChainEnvironment::Testnet, TOKEN, STAKING).expect("config")
}

fn params() -> RegisterParams {
    RegisterParams { operator: Some(Address::from_hex(OPERATOR).unwrap()),
                     node_key: "node-pubkey-1".to_string(),
                     amount: TokenAmount(20_000) }
}

fn registered_client() -> Arc<MockChainClient> {
    Arc::new(MockChainClient::new().with_read("nodeRecord", json!({ "registered": true, "key": "node-pubkey-1" })))
}

#[tokio::test]
async fn register_happy_path_reaches_join() {
    let client = registered_client();
    let notifier = CollectingNotifier::default();
    let mut wf = RegisterNode::new(client.clone(), &config(), params(), InMemoryEventStore::default(),
                                   Box::new(notifier.clone()));

    let snap = wf.register_and_stake().await.expect("register completes");
    assert!(snap.completed);
    assert_eq!(snap.stage_label_key, "stage.join");
    assert_eq!(wf.stage(), (RegisterStage::Join, OperationStatus::Success));
    assert!(wf.workflow_fingerprint().is_some());
    assert_eq!(notifier.success_count(), 1);
    assert_eq!(notifier.error_count(), 0);

    // Una corrida: aprobación (sim+envío+confirmación), registro
    // (sim+envío+confirmación) y la lectura de verificación.
    let counters = client.counters();
    assert_eq!(counters.simulate, 2);
    assert_eq!(counters.submit, 2);
    assert_eq!(counters.confirm, 2);
    assert_eq!(counters.read, 1);
}

#[tokio::test]
async fn disconnected_wallet_fails_validation_without_chain_calls() {
    let client = Arc::new(MockChainClient::new());
    let notifier = CollectingNotifier::default();
    let mut wf = RegisterNode::new(client.clone(),
                                   &config(),
                                   RegisterParams { operator: None, ..params() },
                                   InMemoryEventStore::default(),
                                   Box::new(notifier.clone()));

    let err = wf.register_and_stake().await.expect_err("must fail validation");
    assert!(matches!(err, OrchestratorError::Validation(_)));
    assert_eq!(wf.stage(), (RegisterStage::Approve, OperationStatus::Error));
    assert_eq!(client.counters(), Default::default());
    assert_eq!(notifier.error_count(), 1);
}

#[tokio::test]
async fn simulate_failure_blocks_and_explicit_retry_resumes() {
    let client = Arc::new(MockChainClient::new().with_read("nodeRecord", json!({ "registered": true }))
                                                .fail_simulate("registerNode",
                                                               ChainError::Reverted("insufficient stake".into())));
    let notifier = CollectingNotifier::default();
    let mut wf = RegisterNode::new(client.clone(), &config(), params(), InMemoryEventStore::default(),
                                   Box::new(notifier.clone()));

    let err = wf.register_and_stake().await.expect_err("simulation fails");
    assert_eq!(err, OrchestratorError::Simulation("insufficient stake".into()));
    assert_eq!(wf.stage(), (RegisterStage::Simulate, OperationStatus::Error));
    assert!(wf.error_for(RegisterStage::Simulate).is_some());

    // P6: consultar estado repetidas veces no re-notifica.
    let _ = wf.stage();
    let _ = wf.stage();
    assert_eq!(notifier.error_count(), 1);

    // El usuario reintenta después de que la causa desapareció. La
    // aprobación ya confirmada no se repite.
    client.clear_simulate_failures();
    let snap = wf.register_and_stake().await.expect("retry completes");
    assert!(snap.completed);

    let counters = client.counters();
    assert_eq!(counters.simulate, 3); // approve + registro fallido + registro ok
    assert_eq!(counters.submit, 2);
    assert_eq!(counters.confirm, 2);
}

#[tokio::test]
async fn translated_notifications_reach_the_user_surface() {
    let collector = CollectingNotifier::default();
    let notifier = TranslatingNotifier::new(collector.clone(), Arc::new(StaticCatalog));
    let client = registered_client();
    let mut wf = RegisterNode::new(client, &config(), params(), InMemoryEventStore::default(), Box::new(notifier));

    let _ = wf.register_and_stake().await.expect("register completes");
    assert_eq!(collector.successes.lock().unwrap().as_slice(), ["Node registered and staked"]);
}

// El error empujado a la superficie es el mensaje de usuario del catálogo,
// con la razón de la cadena interpolada; el Display crudo del error queda
// para el slot y el log de eventos.
#[tokio::test]
async fn failure_notifications_are_localized_for_the_user() {
    let collector = CollectingNotifier::default();
    let notifier = TranslatingNotifier::new(collector.clone(), Arc::new(StaticCatalog));
    let client = Arc::new(MockChainClient::new().fail_simulate("registerNode",
                                                               ChainError::Reverted("insufficient stake".into())));
    let mut wf = RegisterNode::new(client, &config(), params(), InMemoryEventStore::default(), Box::new(notifier));

    let _ = wf.register_and_stake().await.expect_err("simulation fails");
    assert_eq!(collector.errors.lock().unwrap().as_slice(),
               ["The transaction would fail: insufficient stake"]);
}

#[tokio::test]
async fn estimate_fee_uses_the_chain_quote() {
    let wf = RegisterNode::new(registered_client(), &config(), params(), InMemoryEventStore::default(),
                               Box::new(CollectingNotifier::default()));
    let fee = wf.estimate_fee().await.expect("fee");
    assert_eq!(fee.total(), 90_000 * 12);
}

#[tokio::test]
async fn event_log_tells_the_whole_story() {
    let client = registered_client();
    let mut wf = RegisterNode::new(client, &config(), params(), InMemoryEventStore::default(),
                                   Box::new(CollectingNotifier::default()));
    let _ = wf.register_and_stake().await.expect("register completes");

    let events = wf.events();
    assert!(matches!(events.first().map(|e| &e.kind),
                     Some(WorkflowEventKind::WorkflowEnabled { stage_count: 5, .. })));
    let succeeded: Vec<String> = events.iter()
                                       .filter_map(|e| match &e.kind {
                                           WorkflowEventKind::StageSucceeded { stage_id, .. } => Some(stage_id.clone()),
                                           _ => None,
                                       })
                                       .collect();
    assert_eq!(succeeded, ["approve", "simulate", "write", "transaction", "join"]);
    assert!(matches!(events.last().map(|e| &e.kind),
                     Some(WorkflowEventKind::WorkflowCompleted { .. })));
}
