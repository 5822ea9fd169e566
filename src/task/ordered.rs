//! Variante lineal de navegación.
//!
//! `OrderedTask` recorre los steps en orden de inserción (orden de inserción
//! = orden de ejecución). La secuencia queda fija una vez construida: no hay
//! API para quitar ni reordenar steps durante una corrida. `result` se acepta
//! en cada consulta pero esta variante no lo lee.
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::errors::TaskError;
use crate::hashing::hash_identifiers;
use crate::model::{TaskProgress, TaskResult};
use crate::step::Step;
use crate::task::Task;

pub struct OrderedTask {
    identifier: String,
    steps: Vec<Arc<dyn Step>>,
}

impl OrderedTask {
    /// Crea un task vacío.
    pub fn new(identifier: impl Into<String>) -> Self {
        Self { identifier: identifier.into(),
               steps: Vec::new() }
    }

    /// Crea un task con los steps dados, preservando el orden. Siempre
    /// colecta a un backing propio: la lista del caller nunca queda
    /// aliasada. Los steps en sí se comparten por `Arc`, nunca se copia su
    /// contenido.
    pub fn with_steps(identifier: impl Into<String>, steps: impl IntoIterator<Item = Arc<dyn Step>>) -> Self {
        Self { identifier: identifier.into(),
               steps: steps.into_iter().collect() }
    }

    /// Agrega un step al final. Los duplicados no se chequean acá: eso lo
    /// hace `validate` antes de entregar el task a un driver.
    pub fn add_step(&mut self, step: Arc<dyn Step>) {
        self.steps.push(step);
    }

    /// Vista inmutable de la secuencia, en orden.
    pub fn steps(&self) -> &[Arc<dyn Step>] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Hash canónico de la lista ordenada de identificadores. Dos tasks con
    /// la misma secuencia de ids comparten hash; sirve como token estable
    /// para retomar corridas interrumpidas.
    pub fn definition_hash(&self) -> String {
        let ids: Vec<&str> = self.steps.iter().map(|s| s.identifier()).collect();
        hash_identifiers(&ids)
    }

    /// Posición del step dentro de la secuencia, por igualdad de
    /// identificador. `None` si no pertenece (un step de otro task cae acá).
    fn position_of(&self, step: &dyn Step) -> Option<usize> {
        self.steps.iter().position(|s| s.identifier() == step.identifier())
    }
}

impl Task for OrderedTask {
    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn step_after(&self, current: Option<&dyn Step>, _result: &TaskResult) -> Option<Arc<dyn Step>> {
        match current {
            None => self.steps.first().cloned(),
            Some(step) => {
                let next = self.position_of(step)? + 1;
                self.steps.get(next).cloned()
            }
        }
    }

    fn step_before(&self, current: &dyn Step, _result: &TaskResult) -> Option<Arc<dyn Step>> {
        let prev = self.position_of(current)?.checked_sub(1)?;
        self.steps.get(prev).cloned()
    }

    fn step_with_identifier(&self, identifier: &str) -> Option<Arc<dyn Step>> {
        self.steps.iter().find(|s| s.identifier() == identifier).cloned()
    }

    fn progress(&self, current: Option<&dyn Step>, _result: &TaskResult) -> TaskProgress {
        TaskProgress { current: current.and_then(|s| self.position_of(s)),
                       total: self.steps.len() }
    }

    fn validate(&self) -> Result<(), TaskError> {
        let mut seen = HashSet::with_capacity(self.steps.len());
        for step in &self.steps {
            if !seen.insert(step.identifier()) {
                return Err(TaskError::DuplicateStepIdentifier { task: self.identifier.clone(),
                                                                step: step.identifier().to_string() });
            }
        }
        Ok(())
    }
}

impl PartialEq for OrderedTask {
    /// Igualdad: mismo identificador de task y misma secuencia de ids de
    /// steps, en orden. El contenido de los steps no participa.
    fn eq(&self, other: &Self) -> bool {
        self.identifier == other.identifier
        && self.steps.len() == other.steps.len()
        && self.steps.iter().zip(&other.steps).all(|(a, b)| a.identifier() == b.identifier())
    }
}

impl Eq for OrderedTask {}

impl fmt::Debug for OrderedTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedTask")
         .field("identifier", &self.identifier)
         .field("steps", &self.steps.iter().map(|s| s.identifier()).collect::<Vec<_>>())
         .finish()
    }
}
