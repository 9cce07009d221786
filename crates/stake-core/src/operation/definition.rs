use async_trait::async_trait;
use serde_json::Value;

use super::outcome::OperationOutcome;

/// Contexto entregado a `StageOperation::run`.
pub struct OperationContext {
    /// Salida JSON de la etapa anterior (`None` para la primera etapa o
    /// cuando la etapa no encadena entrada).
    pub input: Option<Value>,
    /// Parámetros canónicos de la operación (entran al fingerprint).
    pub params: Value,
}

/// Trait que define una operación de etapa.
///
/// Las implementaciones validan sus argumentos requeridos **antes** de tocar
/// el cliente remoto: un argumento faltante produce `Failure` con
/// `Validation` sin llamada remota alguna. La operación no mantiene estado
/// de status propio; ese bookkeeping pertenece al slot del driver.
#[async_trait]
pub trait StageOperation: Send + Sync {
    /// Identificador estable y único dentro del workflow.
    fn id(&self) -> &str;

    /// Clave de traducción de la etiqueta visible. Por defecto, el id.
    fn label_key(&self) -> &str {
        self.id()
    }

    /// Parámetros deterministas de la operación.
    fn params(&self) -> Value {
        serde_json::json!({})
    }

    /// Ejecuta la operación remota. Exactamente una llamada en vuelo por
    /// disparo; el driver nunca re-dispara mientras el slot está `Pending`.
    async fn run(&self, ctx: &OperationContext) -> OperationOutcome;
}
