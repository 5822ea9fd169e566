//! Definiciones relacionadas a Steps.
//!
//! Un Step es la unidad mínima de una secuencia: el motor sólo conoce su
//! identificador (único dentro del task) y nunca interpreta ni muta su
//! contenido. Este módulo define:
//! - `Step`: interfaz neutral consumida por el motor de navegación.
//! - `GenericStep`: descriptor concreto neutro para hosts y tests.

pub mod generic;

pub use generic::GenericStep;

/// Trait que define un Step. El motor guarda referencias compartidas
/// (`Arc<dyn Step>`) y trata el resto del contenido como opaco.
pub trait Step {
    /// Identificador estable y único dentro del task.
    fn identifier(&self) -> &str;

    /// Título amigable para mostrar. Por defecto, el identificador.
    fn title(&self) -> &str {
        self.identifier()
    }
}
