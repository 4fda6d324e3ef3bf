use crate::ast::DirectiveLocation;
use crate::ast::DirectiveLocations;

#[test]
fn names_round_trip() {
    for location in DirectiveLocation::ALL {
        assert_eq!(DirectiveLocation::from_bytes(location.as_str().as_bytes()), Some(location));
        assert_eq!(location.to_string(), location.as_str());
    }
    assert_eq!(DirectiveLocation::from_bytes(b"field"), None);
    assert_eq!(DirectiveLocation::from_bytes(b"FIELDS"), None);
}

#[test]
fn executable_locations() {
    assert!(DirectiveLocation::Query.is_executable());
    assert!(DirectiveLocation::VariableDefinition.is_executable());
    assert!(!DirectiveLocation::Schema.is_executable());
    assert!(!DirectiveLocation::InputFieldDefinition.is_executable());
    assert_eq!(DirectiveLocation::ALL.iter().filter(|l| l.is_executable()).count(), 8);
}

#[test]
fn set_operations() {
    let mut locations = DirectiveLocations::new();
    assert!(locations.is_empty());
    assert_eq!(locations.set_from_raw(b"OBJECT"), Some(DirectiveLocation::Object));
    assert_eq!(locations.set_from_raw(b"NOPE"), None);
    locations.set(DirectiveLocation::Field);
    locations.set(DirectiveLocation::Field);
    assert_eq!(locations.len(), 2);
    assert!(locations.contains(DirectiveLocation::Object));
    assert!(!locations.contains(DirectiveLocation::Query));

    locations.unset(DirectiveLocation::Object);
    assert_eq!(locations.len(), 1);
    assert_eq!(locations.bits(), 1 << (DirectiveLocation::Field as u32));
}

/// Iteration order is canonical, not insertion order.
#[test]
fn iterates_in_canonical_order() {
    let locations: DirectiveLocations = [
        DirectiveLocation::EnumValue,
        DirectiveLocation::Query,
        DirectiveLocation::Scalar,
        DirectiveLocation::Field,
    ]
    .into_iter()
    .collect();
    assert_eq!(
        locations.iter().collect::<Vec<_>>(),
        vec![
            DirectiveLocation::Query,
            DirectiveLocation::Field,
            DirectiveLocation::Scalar,
            DirectiveLocation::EnumValue,
        ],
    );
}
