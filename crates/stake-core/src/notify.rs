//! Superficie de notificación hacia el usuario.
//!
//! El driver empuja aquí cada error exactamente una vez por ocurrencia y el
//! cierre exitoso del workflow. El contrato es por **clave de catálogo** más
//! parámetros de interpolación: la capa de presentación decide el texto
//! final (ver el `Translator` de los adapters). Las implementaciones
//! concretas (log, toast, colector de tests) viven en los adapters.
use std::collections::HashMap;

pub trait Notifier: Send + Sync {
    /// Error de etapa: `key` es la clave de catálogo del mensaje
    /// (`error.*`), `params` trae al menos `reason`.
    fn notify_error(&self, key: &str, params: &HashMap<String, String>);
    /// Cierre exitoso del workflow (`workflow.*.completed`).
    fn notify_success(&self, key: &str);
}

/// Notificador nulo, para contextos donde nadie escucha.
#[derive(Debug, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify_error(&self, _key: &str, _params: &HashMap<String, String>) {}
    fn notify_success(&self, _key: &str) {}
}
