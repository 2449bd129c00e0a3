//! Property-based tests for the layout invariants.

use std::collections::HashSet;

use formforge_layout::{
    apply_intent, CreateField, DeleteField, DeleteRow, FieldRegistry, FieldVariant, LayoutIntent,
    MoveFieldAcrossRow, ReorderColumnsWithinRow, ReorderRows, RowTarget,
};
use proptest::prelude::*;

/// An abstract step; indexes are resolved against the registry at apply time
/// so generated scripts keep hitting live identifiers.
#[derive(Debug, Clone)]
enum Step {
    CreateNewRow(FieldVariant),
    CreateInRow(FieldVariant, usize),
    DeleteField(usize),
    DeleteRow(usize),
    MoveAcross(usize, usize),
    ReorderRows(usize, usize),
    ReorderColumns(usize, usize),
}

fn variant_strategy() -> impl Strategy<Value = FieldVariant> {
    prop::sample::select(FieldVariant::all().to_vec())
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        3 => variant_strategy().prop_map(Step::CreateNewRow),
        3 => (variant_strategy(), any::<usize>()).prop_map(|(v, r)| Step::CreateInRow(v, r)),
        2 => any::<usize>().prop_map(Step::DeleteField),
        1 => any::<usize>().prop_map(Step::DeleteRow),
        2 => (any::<usize>(), any::<usize>()).prop_map(|(f, r)| Step::MoveAcross(f, r)),
        2 => (any::<usize>(), any::<usize>()).prop_map(|(a, b)| Step::ReorderRows(a, b)),
        2 => (any::<usize>(), any::<usize>()).prop_map(|(a, b)| Step::ReorderColumns(a, b)),
    ]
}

fn resolve(registry: &FieldRegistry, step: &Step) -> Option<LayoutIntent> {
    let fields: Vec<_> = registry.fields_of().map(|f| f.id.clone()).collect();
    let rows = registry.rows_of();
    let field = |i: usize| (!fields.is_empty()).then(|| fields[i % fields.len()].clone());
    let row = |i: usize| (!rows.is_empty()).then(|| rows[i % rows.len()].clone());

    Some(match step {
        Step::CreateNewRow(v) => CreateField::new_row(*v).into(),
        Step::CreateInRow(v, r) => CreateField::in_row(*v, row(*r)?).into(),
        Step::DeleteField(f) => DeleteField::new(field(*f)?).into(),
        Step::DeleteRow(r) => DeleteRow::new(row(*r)?).into(),
        Step::MoveAcross(f, r) => MoveFieldAcrossRow::new(field(*f)?, row(*r)?).into(),
        Step::ReorderRows(a, b) => ReorderRows::new(row(*a)?, row(*b)?).into(),
        Step::ReorderColumns(a, b) => ReorderColumnsWithinRow::new(field(*a)?, field(*b)?).into(),
    })
}

fn build(steps: &[Step]) -> FieldRegistry {
    steps.iter().fold(FieldRegistry::new(), |reg, step| match resolve(&reg, step) {
        Some(intent) => apply_intent(&reg, &intent),
        None => reg,
    })
}

proptest! {
    #[test]
    fn test_any_script_preserves_invariants(
        steps in prop::collection::vec(step_strategy(), 0..40)
    ) {
        let mut reg = FieldRegistry::new();
        for step in &steps {
            if let Some(intent) = resolve(&reg, step) {
                reg = apply_intent(&reg, &intent);
                prop_assert!(reg.check_invariants().is_ok(), "{:?}", reg.check_invariants());
            }
        }
    }

    #[test]
    fn test_delete_existing_field(
        steps in prop::collection::vec(step_strategy(), 1..30),
        pick in any::<usize>()
    ) {
        let reg = build(&steps);
        prop_assume!(!reg.is_empty());
        let victim = reg.fields_of().nth(pick % reg.len()).cloned().unwrap();

        let next = reg.apply(&DeleteField::new(victim.id.clone()));

        prop_assert!(next.field(&victim.id).is_none());
        prop_assert!(!next.contains_column(&victim.column_id));
        for row in next.rows_of() {
            prop_assert!(next.row_len(row) > 0);
        }
        prop_assert!(next.check_invariants().is_ok());
    }

    #[test]
    fn test_delete_missing_field_is_identity(
        steps in prop::collection::vec(step_strategy(), 0..30)
    ) {
        let reg = build(&steps);
        let next = reg.apply(&DeleteField::new("name_does-not-exist"));
        prop_assert_eq!(next, reg);
    }

    #[test]
    fn test_create_mints_unused_ids(
        steps in prop::collection::vec(step_strategy(), 0..30),
        variant in variant_strategy()
    ) {
        let reg = build(&steps);
        let create = CreateField::new_row(variant);
        let RowTarget::New(row_id) = create.row.clone() else {
            unreachable!("new_row always targets a new row");
        };

        let field_ids: HashSet<_> = reg.fields_of().map(|f| f.id.clone()).collect();
        prop_assert!(!field_ids.contains(&create.field_id));
        prop_assert!(!reg.contains_row(&row_id));
        prop_assert!(!reg.contains_column(&create.column_id));

        let next = reg.apply(&create);
        prop_assert_eq!(next.len(), reg.len() + 1);
        prop_assert!(next.contains_row(&row_id));
    }

    #[test]
    fn test_document_round_trip(steps in prop::collection::vec(step_strategy(), 0..30)) {
        let reg = build(&steps);
        let json = reg.to_json(false).unwrap();
        let back = FieldRegistry::from_json(&json).unwrap();
        prop_assert_eq!(back.rows_of(), reg.rows_of());
        prop_assert_eq!(back.column_order(), reg.column_order());
        prop_assert_eq!(back, reg);
    }
}
