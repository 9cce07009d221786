//! Derivación pura de la etapa actual de un workflow.
//!
//! Regla única: la etapa derivada es la **primera** (en orden) que todavía no
//! alcanzó `Success`; su propio estado es el sub-estado. Si todas las etapas
//! están en `Success`, la derivada es la última con sub-estado `Success`.
//! Una tupla inconsistente (una etapa posterior `Success` con una anterior
//! incompleta) no puede adelantar la etapa derivada: las anteriores mandan.
//!
//! La función es determinista, sin efectos, y no depende de historia previa:
//! sólo del snapshot de estados que recibe.
use crate::status::OperationStatus;

/// Resultado de la derivación: índice de etapa actual + sub-estado.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StagePosition {
    pub index: usize,
    pub sub_status: OperationStatus,
}

/// Deriva la posición actual sobre una tupla ordenada de estados.
///
/// Caso borde: una tupla vacía cae explícitamente en la etapa 0 con
/// sub-estado `Pending` (no hay rama implícita que "caiga" a otra parte).
pub fn derive_position(statuses: &[OperationStatus]) -> StagePosition {
    if statuses.is_empty() {
        return StagePosition { index: 0, sub_status: OperationStatus::Pending };
    }
    match statuses.iter().position(|s| !s.is_success()) {
        Some(index) => StagePosition { index, sub_status: statuses[index] },
        None => StagePosition { index: statuses.len() - 1,
                                sub_status: OperationStatus::Success },
    }
}

/// Enum cerrado de etapas de un workflow concreto.
///
/// `ALL` fija el orden canónico; el compilador exige exhaustividad en los
/// `match` sobre el enum, eliminando ramas de fallback silenciosas.
pub trait StageList: Copy + Eq + std::fmt::Debug + 'static {
    /// Todas las etapas, en orden de ejecución.
    const ALL: &'static [Self];

    fn index(self) -> usize {
        Self::ALL.iter()
                 .position(|s| *s == self)
                 .expect("stage must be listed in ALL")
    }

    /// Etapa por índice. Un índice fuera de rango es un bug de construcción
    /// del workflow (definición y enum desalineados) y falla fuerte.
    fn from_index(index: usize) -> Self {
        Self::ALL.get(index)
                 .copied()
                 .expect("stage index out of range for the stage list")
    }
}

/// Variante tipada de `derive_position` para un `StageList` concreto.
pub fn derive_stage<S: StageList>(statuses: &[OperationStatus]) -> (S, OperationStatus) {
    assert_eq!(statuses.len(),
               S::ALL.len(),
               "status tuple length must match the stage list");
    let pos = derive_position(statuses);
    (S::from_index(pos.index), pos.sub_status)
}
