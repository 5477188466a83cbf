use proptest::prelude::*;

use dctap_model::{ElementKind, ElementScope};
use dctap_standards::{normalize_name, registry};

#[test]
fn registry_lists_all_dctap_elements() {
    let names: Vec<&str> = registry().elements().iter().map(|e| e.name).collect();
    assert_eq!(
        names,
        vec![
            "shapeID",
            "shapeLabel",
            "propertyID",
            "propertyLabel",
            "mandatory",
            "repeatable",
            "valueNodeType",
            "valueDataType",
            "valueConstraint",
            "valueConstraintType",
            "valueShape",
            "note",
        ]
    );
}

#[test]
fn exact_lookup_is_case_sensitive() {
    let reg = registry();
    assert_eq!(reg.lookup("propertyID").map(|e| e.name), Some("propertyID"));
    assert!(reg.lookup("PropertyID").is_none());
    assert_eq!(
        reg.lookup_ignore_case("PROPERTYID").map(|e| e.name),
        Some("propertyID")
    );
}

#[test]
fn normalized_lookup_ignores_separators() {
    let reg = registry();
    for spelling in ["Property ID", "property_id", "PROPERTY-ID", " propertyId "] {
        assert_eq!(
            reg.lookup_normalized(spelling).map(|e| e.name),
            Some("propertyID"),
            "{spelling}"
        );
    }
    assert!(reg.lookup_normalized("property label x").is_none());
    assert_eq!(normalize_name("Value Constraint_Type"), "valueconstrainttype");
}

#[test]
fn scopes_and_kinds() {
    let reg = registry();
    let shape_id = reg.lookup("shapeID").expect("shapeID");
    assert_eq!(shape_id.scope, ElementScope::Shape);
    assert_eq!(shape_id.kind, ElementKind::Identifier);

    let constraint = reg.lookup("valueConstraint").expect("valueConstraint");
    assert_eq!(constraint.scope, ElementScope::Statement);
    assert_eq!(constraint.kind, ElementKind::ConstraintValue);

    assert_eq!(
        reg.lookup("mandatory").map(|e| e.kind),
        Some(ElementKind::Boolean)
    );
}

#[test]
fn registry_is_shared() {
    assert!(std::ptr::eq(registry(), registry()));
}

fn any_casing(name: &'static str) -> impl Strategy<Value = String> {
    proptest::collection::vec(any::<bool>(), name.len()).prop_map(move |upper| {
        name.chars()
            .zip(upper)
            .map(|(ch, up)| {
                if up {
                    ch.to_ascii_uppercase()
                } else {
                    ch.to_ascii_lowercase()
                }
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn every_element_resolves_in_any_casing(
        (name, cased) in proptest::sample::select(
            registry().elements().iter().map(|e| e.name).collect::<Vec<_>>()
        ).prop_flat_map(|name| (Just(name), any_casing(name)))
    ) {
        let found = registry().lookup_ignore_case(&cased).map(|e| e.name);
        prop_assert_eq!(found, Some(name));
    }
}
