//! taskflow-core: Motor de navegación lineal de steps
pub mod errors;
pub mod hashing;
pub mod model;
pub mod step;
pub mod task;

pub use errors::TaskError;
pub use model::{TaskProgress, TaskResult};
pub use step::{GenericStep, Step};
pub use task::{OrderedTask, Task};
