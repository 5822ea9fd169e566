//! Interfaz de navegación de tasks.
//!
//! Un `Task` es una estrategia de navegación sobre una secuencia de steps:
//! entrega el step siguiente/anterior dado el actual y el resultado
//! acumulado. El driver externo es quien sostiene el cursor, renderiza cada
//! step y alimenta `TaskResult` entre consulta y consulta; este core sólo
//! decide posiciones. Hoy existe la variante lineal (`OrderedTask`);
//! variantes con ramificación implementarán este mismo trait leyendo
//! `result` para decidir el salto.
use std::sync::Arc;

use crate::errors::TaskError;
use crate::model::{TaskProgress, TaskResult};
use crate::step::Step;

pub trait Task {
    /// Identificador estable del task.
    fn identifier(&self) -> &str;

    /// Step siguiente al actual (`None` como actual = aún no se ejecutó
    /// ninguno). Devuelve `None` al llegar al final o si `current` no
    /// pertenece a la secuencia: la navegación es total, nunca falla.
    fn step_after(&self, current: Option<&dyn Step>, result: &TaskResult) -> Option<Arc<dyn Step>>;

    /// Step anterior al actual. `None` si es el primero o no pertenece.
    fn step_before(&self, current: &dyn Step, result: &TaskResult) -> Option<Arc<dyn Step>>;

    /// Primer step (en orden de secuencia) cuyo identificador coincide.
    fn step_with_identifier(&self, identifier: &str) -> Option<Arc<dyn Step>>;

    /// Progreso derivado de la posición del step actual.
    fn progress(&self, current: Option<&dyn Step>, result: &TaskResult) -> TaskProgress;

    /// Chequeo previo a entregar el task a un driver: identificadores únicos.
    /// No se invoca automáticamente en cada navegación (pre-flight explícito,
    /// idempotente, O(n)).
    fn validate(&self) -> Result<(), TaskError>;
}
