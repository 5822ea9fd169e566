//! Resultado acumulado de una corrida.
//!
//! `TaskResult` viaja por las consultas de navegación pero la variante lineal
//! nunca lo lee: existe para que variantes con ramificación decidan el
//! siguiente step a partir de respuestas previas. El host lo va llenando
//! entre step y step; este core no lo persiste ni lo interpreta.
use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskResult {
    pub task_identifier: String,
    pub run_id: Uuid,                         // identidad de la corrida, no del task
    pub step_results: HashMap<String, Value>, // clave: identifier del step
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl TaskResult {
    pub fn new(task_identifier: impl Into<String>) -> Self {
        Self { task_identifier: task_identifier.into(),
               run_id: Uuid::new_v4(),
               step_results: HashMap::new(),
               started_at: Utc::now(),
               finished_at: None }
    }

    /// Registra (o reemplaza) el resultado de un step.
    pub fn set_step_result(&mut self, step_identifier: impl Into<String>, value: Value) {
        self.step_results.insert(step_identifier.into(), value);
    }

    pub fn step_result(&self, step_identifier: &str) -> Option<&Value> {
        self.step_results.get(step_identifier)
    }

    /// Marca la corrida como terminada.
    pub fn mark_finished(&mut self) {
        self.finished_at = Some(Utc::now());
    }
}
