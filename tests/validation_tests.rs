use std::sync::Arc;

use taskflow_core::{GenericStep, OrderedTask, Step, Task, TaskError};

fn step(id: &str) -> Arc<dyn Step> {
    Arc::new(GenericStep::new(id))
}

#[test]
fn validate_rejects_duplicate_identifiers() {
    let task = OrderedTask::with_steps("dup", vec![step("x"), step("x")]);
    let err = task.validate().expect_err("duplicate ids must be rejected");
    assert_eq!(err,
               TaskError::DuplicateStepIdentifier { task: "dup".to_string(),
                                                    step: "x".to_string() });
    assert!(err.to_string().contains("duplicate identifier 'x'"));
}

#[test]
fn validate_passes_for_distinct_identifiers() {
    let task = OrderedTask::with_steps("ok", vec![step("a"), step("b"), step("c")]);
    assert!(task.validate().is_ok());

    // Idempotente: repetir la validación sobre la misma secuencia no cambia nada
    assert!(task.validate().is_ok());
}

#[test]
fn navigation_on_unvalidated_duplicates_is_well_defined() {
    // Un task con ids duplicados navega igual; el lookup resuelve siempre al
    // primer match en orden de secuencia
    let task = OrderedTask::with_steps("dup",
                                       vec![Arc::new(GenericStep::with_title("x", "first")) as Arc<dyn Step>,
                                            Arc::new(GenericStep::with_title("x", "second"))]);

    let found = task.step_with_identifier("x").expect("lookup resolves");
    assert_eq!(found.title(), "first");
}

#[test]
fn validate_detects_duplicates_added_incrementally() {
    let mut task = OrderedTask::new("grow");
    task.add_step(step("a"));
    assert!(task.validate().is_ok());

    task.add_step(step("b"));
    assert!(task.validate().is_ok());

    // add_step no chequea duplicados: la falla recién aparece en validate
    task.add_step(step("a"));
    assert!(matches!(task.validate(), Err(TaskError::DuplicateStepIdentifier { .. })));
}
