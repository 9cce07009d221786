//! Superficie de localización.
//!
//! El coordinador sólo consume `translate(key, params)` para producir
//! etiquetas de etapa y texto de error legible; la lógica de derivación es
//! independiente del idioma elegido. Una clave ausente devuelve la clave
//! misma (fallback explícito, nunca un panic).
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub trait Translator: Send + Sync {
    fn translate(&self, key: &str, params: &HashMap<String, String>) -> String;
}

static CATALOG: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([("stage.approve", "Approving token spend"),
                   ("stage.simulate", "Simulating contract call"),
                   ("stage.write", "Submitting transaction"),
                   ("stage.transaction", "Waiting for confirmation"),
                   ("stage.join", "Joining the network"),
                   ("stage.simulate_update_balance", "Simulating balance update"),
                   ("stage.write_update_balance", "Submitting balance update"),
                   ("stage.transaction_update_balance", "Confirming balance update"),
                   ("stage.simulate_claim", "Simulating rewards claim"),
                   ("stage.write_claim", "Submitting rewards claim"),
                   ("stage.transaction_claim", "Confirming rewards claim"),
                   ("workflow.completed", "All steps completed"),
                   ("workflow.register.completed", "Node registered and staked"),
                   ("workflow.claim.completed", "Rewards claimed"),
                   ("workflow.request_exit.completed", "Exit requested"),
                   ("workflow.exit.completed", "Node exited"),
                   ("error.validation", "Missing or invalid input: {reason}"),
                   ("error.simulation", "The transaction would fail: {reason}"),
                   ("error.submission", "The transaction was not submitted: {reason}"),
                   ("error.confirmation", "The transaction failed on-chain: {reason}"),
                   ("error.internal", "Unexpected error: {reason}")])
});

/// Catálogo estático en memoria con interpolación `{param}`.
#[derive(Debug, Default)]
pub struct StaticCatalog;

impl Translator for StaticCatalog {
    fn translate(&self, key: &str, params: &HashMap<String, String>) -> String {
        let template = CATALOG.get(key).copied().unwrap_or(key);
        let mut out = template.to_string();
        for (name, value) in params {
            out = out.replace(&format!("{{{name}}}"), value);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_key_translates_with_params() {
        let t = StaticCatalog;
        let params = HashMap::from([("reason".to_string(), "out of gas".to_string())]);
        assert_eq!(t.translate("error.simulation", &params), "The transaction would fail: out of gas");
    }

    #[test]
    fn unknown_key_falls_back_to_itself() {
        let t = StaticCatalog;
        assert_eq!(t.translate("not.a.key", &HashMap::new()), "not.a.key");
    }
}
