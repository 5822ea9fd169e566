//! Errores del core de navegación (simples por ahora).
//!
//! Todo "no encontrado" en la navegación se resuelve con `None`, nunca con
//! error: la única falla real es una secuencia mal construida, detectada por
//! `validate` antes de entregar el task a un driver.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum TaskError {
    #[error("task '{task}' has steps with duplicate identifier '{step}'")] DuplicateStepIdentifier { task: String, step: String },
}
