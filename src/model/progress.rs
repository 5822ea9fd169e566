//! Progreso derivado de la posición del step actual.
use serde::{Deserialize, Serialize};

/// Instantánea de progreso: se recalcula en cada consulta, nunca se almacena.
///
/// `current` es `None` tanto cuando no hay step actual como cuando el step
/// recibido no pertenece a la secuencia (misma política leniente que la
/// navegación).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskProgress {
    pub current: Option<usize>, // posición 0-based dentro de la secuencia
    pub total: usize,
}

impl TaskProgress {
    /// Posición 1-based para mostrar "paso N de M".
    pub fn step_number(&self) -> Option<usize> {
        self.current.map(|i| i + 1)
    }
}
