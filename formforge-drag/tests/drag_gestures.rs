//! Whole gestures replayed from JSON event scripts

use formforge_drag::{DragController, DragEvent, DragOutcome, PreviewPolicy};
use formforge_layout::{CreateField, FieldId, FieldRegistry, FieldVariant, RowId};
use rstest::rstest;

fn grid() -> FieldRegistry {
    // r1: [a, b]   r2: [c]
    FieldRegistry::new()
        .apply(
            &CreateField::new_row(FieldVariant::SingleLineText)
                .with_new_row_id("r1")
                .with_field_id("a")
                .with_column("ca"),
        )
        .apply(
            &CreateField::in_row(FieldVariant::Number, "r1")
                .with_field_id("b")
                .with_column("cb"),
        )
        .apply(
            &CreateField::new_row(FieldVariant::Dropdown)
                .with_new_row_id("r2")
                .with_field_id("c")
                .with_column("cc"),
        )
}

fn replay(policy: PreviewPolicy, registry: &mut FieldRegistry, script: &str) -> DragController {
    let events: Vec<DragEvent> = serde_json::from_str(script).unwrap();
    let mut controller = DragController::new(policy);
    for event in &events {
        controller.handle(registry, event);
    }
    controller
}

#[rstest]
#[case::optimistic(PreviewPolicy::Optimistic)]
#[case::buffered(PreviewPolicy::Buffered)]
fn test_column_swap_gesture(#[case] policy: PreviewPolicy) {
    let mut reg = grid();
    let script = r#"[
        {"event": "start", "data": {"type": "field", "id": "a"}},
        {"event": "over", "target": {"type": "field", "id": "b"}},
        {"event": "over", "target": {"type": "field", "id": "b"}},
        {"event": "end", "target": {"type": "field", "id": "b"}}
    ]"#;
    let controller = replay(policy, &mut reg, script);

    let order: Vec<_> = reg.column_order().iter().map(|c| c.as_str()).collect();
    assert_eq!(order, vec!["cb", "ca", "cc"]);
    assert_eq!(
        controller.session().last_outcome(),
        Some(DragOutcome::Dropped)
    );
}

#[rstest]
#[case::optimistic_keeps_preview(PreviewPolicy::Optimistic, vec!["r2", "r1"])]
#[case::buffered_rolls_back(PreviewPolicy::Buffered, vec!["r1", "r2"])]
fn test_cancelled_row_drag(#[case] policy: PreviewPolicy, #[case] expected: Vec<&str>) {
    let mut reg = grid();
    let script = r#"[
        {"event": "start", "data": {"type": "row", "id": "r2"}},
        {"event": "over", "target": {"type": "row", "id": "r1"}},
        {"event": "cancel"}
    ]"#;
    let controller = replay(policy, &mut reg, script);

    let rows: Vec<_> = reg.rows_of().iter().map(|r| r.as_str()).collect();
    assert_eq!(rows, expected);
    assert_eq!(
        controller.session().last_outcome(),
        Some(DragOutcome::Cancelled)
    );
}

#[test]
fn test_drag_sole_field_into_other_row_collapses_origin() {
    let mut reg = grid();
    let script = r#"[
        {"event": "start", "data": {"type": "field", "id": "c"}},
        {"event": "over", "target": {"type": "field", "id": "a"}},
        {"event": "end", "target": {"type": "field", "id": "a"}}
    ]"#;
    replay(PreviewPolicy::Optimistic, &mut reg, script);

    assert_eq!(reg.rows_of(), &[RowId::from("r1")]);
    assert_eq!(reg.row_len(&RowId::from("r1")), 3);
    assert!(reg.check_invariants().is_ok());
}

#[test]
fn test_side_panel_drop_onto_field_joins_its_row() {
    let mut reg = grid();
    let script = r#"[
        {"event": "start", "data": {"type": "sideField", "id": "number"}},
        {"event": "over", "target": {"type": "field", "id": "c"}},
        {"event": "end", "target": {"type": "field", "id": "c"}}
    ]"#;
    replay(PreviewPolicy::Optimistic, &mut reg, script);

    assert_eq!(reg.len(), 4);
    assert_eq!(reg.rows_of().len(), 2);
    let r2 = reg.columns_of_row(&RowId::from("r2"));
    assert_eq!(r2.len(), 2);
    assert_eq!(r2[0].id, FieldId::from("c"));
    assert_eq!(r2[1].variant, FieldVariant::Number);
    assert_eq!(r2[1].label, "Number");
}

#[test]
fn test_invalid_sources_and_targets_change_nothing() {
    let before = grid();
    let mut reg = before.clone();
    let script = r#"[
        {"event": "start", "data": {"type": "dropField", "id": "drop"}},
        {"event": "over", "target": {"type": "row", "id": "r1"}},
        {"event": "end", "target": {"type": "row", "id": "r1"}},
        {"event": "start", "data": {"type": "field", "id": "a"}},
        {"event": "over", "target": {"type": "unknown", "id": "x"}},
        {"event": "over"},
        {"event": "end", "target": {"type": "dropField", "id": "drop"}},
        {"event": "start", "data": {"type": "row", "id": "r1"}},
        {"event": "end"}
    ]"#;
    replay(PreviewPolicy::Optimistic, &mut reg, script);
    assert_eq!(reg, before);
}

#[test]
fn test_hover_over_deleted_field_is_noop() {
    let mut reg = grid();
    let mut controller = DragController::default();
    let events: Vec<DragEvent> = serde_json::from_str(
        r#"[
            {"event": "start", "data": {"type": "field", "id": "a"}},
            {"event": "over", "target": {"type": "field", "id": "ghost"}}
        ]"#,
    )
    .unwrap();
    let before = reg.clone();
    let produced: Vec<_> = events
        .iter()
        .filter_map(|e| controller.handle(&mut reg, e))
        .collect();
    assert!(produced.is_empty());
    assert_eq!(reg, before);
    assert!(controller.session().is_dragging());
}
