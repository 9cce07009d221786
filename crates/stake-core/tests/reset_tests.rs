//! Semántica de `reset` (P5): idempotente, limpia lo transitorio y nunca
//! toca una etapa confirmada en `Success`.

use async_trait::async_trait;
use serde_json::json;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use stake_core::{build_workflow_definition, InMemoryEventStore, NullNotifier, OperationContext, OperationOutcome,
                 OperationStatus, OrchestratorError, StageOperation, StagedWorkflow, WorkflowEventKind};

struct Op {
    id: &'static str,
    calls: Arc<AtomicU32>,
    fail: bool,
}

#[async_trait]
impl StageOperation for Op {
    fn id(&self) -> &str {
        self.id
    }

    async fn run(&self, _ctx: &OperationContext) -> OperationOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            OperationOutcome::failure(OrchestratorError::Submission("user cancelled".into()))
        } else {
            OperationOutcome::success(json!({ "op": self.id }))
        }
    }
}

fn failing_at_second() -> (StagedWorkflow<InMemoryEventStore>, Vec<Arc<AtomicU32>>) {
    let calls: Vec<Arc<AtomicU32>> = (0..3).map(|_| Arc::new(AtomicU32::new(0))).collect();
    let def = build_workflow_definition(vec![Box::new(Op { id: "transaction", calls: calls[0].clone(), fail: false }),
                                             Box::new(Op { id: "write", calls: calls[1].clone(), fail: true }),
                                             Box::new(Op { id: "confirm", calls: calls[2].clone(), fail: false })]);
    (StagedWorkflow::new(def, InMemoryEventStore::default(), Box::new(NullNotifier)), calls)
}

#[tokio::test]
async fn reset_clears_enabled_and_transient_slots() {
    let (mut wf, _calls) = failing_at_second();
    let _ = wf.start().await.expect_err("second stage fails");
    assert!(wf.enabled());

    wf.reset();
    assert!(!wf.enabled());
    assert_eq!(wf.slot(1).unwrap().status, OperationStatus::Idle);
    assert!(wf.error_at(1).is_none());

    // La etapa confirmada sigue intacta: status, salida y hash.
    let confirmed = wf.slot(0).unwrap();
    assert_eq!(confirmed.status, OperationStatus::Success);
    assert!(confirmed.output.is_some());
    assert!(confirmed.output_hash.is_some());
}

#[tokio::test]
async fn reset_twice_equals_reset_once() {
    let (mut wf, _calls) = failing_at_second();
    let _ = wf.start().await.expect_err("second stage fails");

    wf.reset();
    let statuses_once = wf.statuses();
    let events_once = wf.events().len();

    wf.reset();
    assert_eq!(wf.statuses(), statuses_once);
    assert!(!wf.enabled());
    // Un reset sin cambios no agrega evento.
    assert_eq!(wf.events().len(), events_once);
}

#[tokio::test]
async fn reset_event_never_lists_confirmed_stages() {
    let (mut wf, _calls) = failing_at_second();
    let _ = wf.start().await.expect_err("second stage fails");
    wf.reset();

    let cleared = wf.events()
                    .iter()
                    .find_map(|e| match &e.kind {
                        WorkflowEventKind::WorkflowReset { cleared } => Some(cleared.clone()),
                        _ => None,
                    })
                    .expect("reset event present");
    assert!(!cleared.contains(&0), "confirmed stage must not be cleared");
    assert!(cleared.contains(&1));
}

#[tokio::test]
async fn restart_after_reset_requires_the_entry_trigger_again() {
    let (mut wf, calls) = failing_at_second();
    let _ = wf.start().await.expect_err("second stage fails");
    wf.reset();

    // Tras el reset el workflow queda deshabilitado: step no dispara.
    let advance = wf.step().await.expect("step after reset");
    assert_eq!(advance, stake_core::Advance::NotEnabled);
    assert_eq!(calls[1].load(Ordering::SeqCst), 1);
}
