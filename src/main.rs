//! Demo de los workflows de staking contra el cliente de cadena en memoria.
//!
//! Corre el registro de nodo de punta a punta, después provoca una falla de
//! simulación para mostrar el bloqueo, la notificación única y el reintento
//! explícito.
mod config;

use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;

use stake_adapters::{ChainClient, MockChainClient, StaticCatalog, TranslatingNotifier, Translator};
use stake_core::{InMemoryEventStore, Notifier, WorkflowEventKind};
use stake_domain::{Address, ChainError, TokenAmount};
use stake_workflows::{RegisterNode, RegisterParams};

use crate::config::CONFIG;

/// Notificador de consola para la demo. Recibe texto ya traducido del
/// decorador `TranslatingNotifier`.
struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify_error(&self, key: &str, _params: &HashMap<String, String>) {
        println!("[notify][error] {key}");
    }

    fn notify_success(&self, key: &str) {
        println!("[notify][ok] {key}");
    }
}

fn demo_params() -> RegisterParams {
    let operator = Address::from_hex("0x00000000000000000000000000000000000000cc").expect("operator address");
    RegisterParams { operator: Some(operator),
                     node_key: "demo-node-pubkey".to_string(),
                     amount: TokenAmount(20_000) }
}

fn event_variants(events: &[stake_core::WorkflowEvent]) -> Vec<&'static str> {
    events.iter()
          .map(|e| match e.kind {
              WorkflowEventKind::WorkflowEnabled { .. } => "E",
              WorkflowEventKind::StageTriggered { .. } => "T",
              WorkflowEventKind::StageSucceeded { .. } => "S",
              WorkflowEventKind::StageFailed { .. } => "X",
              WorkflowEventKind::ErrorNotified { .. } => "N",
              WorkflowEventKind::WorkflowReset { .. } => "R",
              WorkflowEventKind::WorkflowCompleted { .. } => "C",
          })
          .collect()
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    println!("Entorno: {:?}", CONFIG.environment);

    // --- Registro feliz ---
    let client: Arc<dyn ChainClient> =
        Arc::new(MockChainClient::new().with_read("nodeRecord", json!({ "registered": true })));
    let notifier = TranslatingNotifier::new(ConsoleNotifier, Arc::new(StaticCatalog));
    let mut register = RegisterNode::new(client, &CONFIG, demo_params(), InMemoryEventStore::default(),
                                         Box::new(notifier));

    let snapshot = register.register_and_stake().await.expect("registro completo");
    println!("Registro completado: etapa={:?} completed={}", register.stage(), snapshot.completed);
    println!("Etiqueta de la etapa final: {}",
             StaticCatalog.translate(&snapshot.stage_label_key, &HashMap::new()));
    println!("Secuencia de eventos: {:?}", event_variants(&register.events()));
    if let Some(fp) = register.workflow_fingerprint() {
        println!("Fingerprint del workflow: {fp}");
    }

    let fee = register.estimate_fee().await.expect("estimación de fee");
    println!("Fee estimada: gas={} precio={} total={}", fee.gas, fee.gas_price, fee.total());

    // --- Falla, bloqueo y reintento explícito ---
    let failing = Arc::new(MockChainClient::new().with_read("nodeRecord", json!({ "registered": true }))
                                                 .fail_simulate("registerNode",
                                                                ChainError::Reverted("insufficient stake".into())));
    let client2: Arc<dyn ChainClient> = failing.clone();
    let notifier2 = TranslatingNotifier::new(ConsoleNotifier, Arc::new(StaticCatalog));
    let mut register2 = RegisterNode::new(client2, &CONFIG, demo_params(), InMemoryEventStore::default(),
                                          Box::new(notifier2));

    let err = register2.register_and_stake().await.expect_err("la simulación debe fallar");
    println!("Bloqueado en {:?}: {err}", register2.stage());

    // La causa desaparece y el usuario reintenta; la aprobación confirmada
    // no se repite.
    failing.clear_simulate_failures();
    let snapshot = register2.register_and_stake().await.expect("reintento completo");
    println!("Reintento completado: etapa={:?} completed={}", register2.stage(), snapshot.completed);
    println!("Secuencia de eventos: {:?}", event_variants(&register2.events()));
}
