//! Implementaciones de la superficie de notificación.
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::i18n::Translator;
use stake_core::Notifier;

fn render_plain(key: &str, params: &HashMap<String, String>) -> String {
    match params.get("reason").filter(|r| !r.is_empty()) {
        Some(reason) => format!("{key}: {reason}"),
        None => key.to_string(),
    }
}

/// Notificador respaldado por el facade `log`: los errores de etapa van al
/// nivel error, los cierres exitosos al nivel info. Registra clave + razón
/// sin traducir (los logs no son superficie de usuario).
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify_error(&self, key: &str, params: &HashMap<String, String>) {
        log::error!(target: "stakeflow", "{}", render_plain(key, params));
    }

    fn notify_success(&self, key: &str) {
        log::info!(target: "stakeflow", "{key}");
    }
}

/// Notificador colector para tests: guarda los mensajes en orden de llegada.
/// Clonar comparte los buffers subyacentes.
#[derive(Clone, Default)]
pub struct CollectingNotifier {
    pub errors: Arc<Mutex<Vec<String>>>,
    pub successes: Arc<Mutex<Vec<String>>>,
}

impl CollectingNotifier {
    pub fn error_count(&self) -> usize {
        self.errors.lock().unwrap().len()
    }

    pub fn success_count(&self) -> usize {
        self.successes.lock().unwrap().len()
    }
}

impl Notifier for CollectingNotifier {
    fn notify_error(&self, key: &str, params: &HashMap<String, String>) {
        self.errors.lock().unwrap().push(render_plain(key, params));
    }

    fn notify_success(&self, key: &str) {
        self.successes.lock().unwrap().push(key.to_string());
    }
}

/// Decorador que resuelve la clave de catálogo (con sus parámetros) a texto
/// de usuario antes de delegar. El notificador interno recibe el mensaje ya
/// traducido.
pub struct TranslatingNotifier<N: Notifier> {
    inner: N,
    translator: Arc<dyn Translator>,
}

impl<N: Notifier> TranslatingNotifier<N> {
    pub fn new(inner: N, translator: Arc<dyn Translator>) -> Self {
        Self { inner, translator }
    }
}

impl<N: Notifier> Notifier for TranslatingNotifier<N> {
    fn notify_error(&self, key: &str, params: &HashMap<String, String>) {
        self.inner.notify_error(&self.translator.translate(key, params), &HashMap::new());
    }

    fn notify_success(&self, key: &str) {
        self.inner.notify_success(&self.translator.translate(key, &HashMap::new()));
    }
}
