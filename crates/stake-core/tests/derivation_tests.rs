//! Propiedades de la derivación pura de etapa (P1/P2).

use stake_core::stage::{derive_position, derive_stage, StageList, StagePosition};
use stake_core::status::OperationStatus::{self, Error, Idle, Pending, Success};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DemoStage {
    Approve,
    Simulate,
    Write,
    Transaction,
}

impl StageList for DemoStage {
    const ALL: &'static [Self] = &[DemoStage::Approve, DemoStage::Simulate, DemoStage::Write, DemoStage::Transaction];
}

#[test]
fn first_non_success_is_the_current_stage() {
    let pos = derive_position(&[Success, Success, Pending, Idle]);
    assert_eq!(pos, StagePosition { index: 2, sub_status: Pending });

    let (stage, sub) = derive_stage::<DemoStage>(&[Success, Success, Pending, Idle]);
    assert_eq!(stage, DemoStage::Write);
    assert_eq!(sub, Pending);
}

#[test]
fn all_success_lands_on_terminal_stage() {
    let (stage, sub) = derive_stage::<DemoStage>(&[Success, Success, Success, Success]);
    assert_eq!(stage, DemoStage::Transaction);
    assert_eq!(sub, Success);
}

#[test]
fn nothing_started_keeps_the_first_stage() {
    let (stage, sub) = derive_stage::<DemoStage>(&[Pending, Idle, Idle, Idle]);
    assert_eq!(stage, DemoStage::Approve);
    assert_eq!(sub, Pending);
}

#[test]
fn error_on_current_stage_becomes_the_sub_status() {
    let (stage, sub) = derive_stage::<DemoStage>(&[Success, Error, Idle, Idle]);
    assert_eq!(stage, DemoStage::Simulate);
    assert_eq!(sub, Error);
}

// P2: la derivación es función pura del snapshot actual; tuplas
// inconsistentes (éxito posterior con anterior incompleta) siguen
// resolviéndose por precedencia de la etapa más temprana.
#[test]
fn inconsistent_snapshots_still_obey_earliest_precedence() {
    let cases: [(&[OperationStatus], usize); 4] = [(&[Pending, Success, Success, Success], 0),
                                                   (&[Success, Idle, Success, Idle], 1),
                                                   (&[Success, Success, Error, Success], 2),
                                                   (&[Idle, Idle, Idle, Success], 0)];
    for (statuses, expected) in cases {
        let pos = derive_position(statuses);
        assert_eq!(pos.index, expected, "statuses {:?}", statuses);
        assert_eq!(pos.sub_status, statuses[expected]);
    }
}

// Una tupla que no coincide con el enum es un bug de construcción del
// workflow y debe fallar fuerte también en release, nunca reportar la
// etapa terminal por descarte.
#[test]
#[should_panic(expected = "status tuple length")]
fn mismatched_tuple_length_fails_loudly() {
    let _ = derive_stage::<DemoStage>(&[Success, Success, Success, Success, Pending]);
}

#[test]
fn derivation_has_no_memory_between_calls() {
    // La misma tupla produce el mismo resultado sin importar lo derivado
    // antes: se comparan dos secuencias de llamadas intercaladas.
    let advanced = [Success, Success, Success, Pending];
    let regressed = [Success, Pending, Success, Pending];
    let first = derive_position(&advanced);
    let _ = derive_position(&regressed);
    let second = derive_position(&advanced);
    assert_eq!(first, second);
    assert_eq!(derive_position(&regressed).index, 1);
}
