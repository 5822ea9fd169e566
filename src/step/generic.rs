//! Step concreto neutral.
//!
//! `GenericStep` es el descriptor mínimo que un host puede usar tal cual:
//! - `identifier` es la identidad del step dentro del task.
//! - `payload` es JSON genérico; el motor no interpreta su semántica (la
//!   presentación del step pertenece al host, no a este core).
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Step;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenericStep {
    pub identifier: String,
    pub title: Option<String>,  // texto amigable (None => se muestra el identifier)
    pub payload: Option<Value>, // contenido neutro JSON (no entra a la navegación)
}

impl GenericStep {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self { identifier: identifier.into(),
               title: None,
               payload: None }
    }

    pub fn with_title(identifier: impl Into<String>, title: impl Into<String>) -> Self {
        Self { identifier: identifier.into(),
               title: Some(title.into()),
               payload: None }
    }

    pub fn with_payload(identifier: impl Into<String>, payload: Value) -> Self {
        Self { identifier: identifier.into(),
               title: None,
               payload: Some(payload) }
    }
}

impl Step for GenericStep {
    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.identifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn title_falls_back_to_identifier() {
        let bare = GenericStep::new("intro");
        assert_eq!(bare.title(), "intro");

        let titled = GenericStep::with_title("intro", "Bienvenida");
        assert_eq!(titled.title(), "Bienvenida");
        assert_eq!(titled.identifier(), "intro");
    }

    #[test]
    fn payload_survives_serde_round_trip() {
        let step = GenericStep::with_payload("survey", json!({"questions": 12}));
        let encoded = serde_json::to_string(&step).expect("serialize");
        let decoded: GenericStep = serde_json::from_str(&encoded).expect("deserialize");
        assert_eq!(decoded.identifier, "survey");
        assert_eq!(decoded.payload, Some(json!({"questions": 12})));
    }
}
