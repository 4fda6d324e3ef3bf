use crate::ByteSliceReference;
use crate::Position;
use crate::ast::DelimitedList;
use crate::ast::Description;

/// The places a directive may be applied.
///
/// Variant order is the order the GraphQL specification lists them in;
/// [`DirectiveLocations`] iterates (and the printer prints) in this order.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
)]
pub enum DirectiveLocation {
    // Executable
    Query,
    Mutation,
    Subscription,
    Field,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    VariableDefinition,

    // Type system
    Schema,
    Scalar,
    Object,
    FieldDefinition,
    ArgumentDefinition,
    Interface,
    Union,
    Enum,
    EnumValue,
    InputObject,
    InputFieldDefinition,
}

impl DirectiveLocation {
    pub const ALL: [DirectiveLocation; 19] = [
        DirectiveLocation::Query,
        DirectiveLocation::Mutation,
        DirectiveLocation::Subscription,
        DirectiveLocation::Field,
        DirectiveLocation::FragmentDefinition,
        DirectiveLocation::FragmentSpread,
        DirectiveLocation::InlineFragment,
        DirectiveLocation::VariableDefinition,
        DirectiveLocation::Schema,
        DirectiveLocation::Scalar,
        DirectiveLocation::Object,
        DirectiveLocation::FieldDefinition,
        DirectiveLocation::ArgumentDefinition,
        DirectiveLocation::Interface,
        DirectiveLocation::Union,
        DirectiveLocation::Enum,
        DirectiveLocation::EnumValue,
        DirectiveLocation::InputObject,
        DirectiveLocation::InputFieldDefinition,
    ];

    pub fn from_bytes(name: &[u8]) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|location| location.as_str().as_bytes() == name)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DirectiveLocation::Query => "QUERY",
            DirectiveLocation::Mutation => "MUTATION",
            DirectiveLocation::Subscription => "SUBSCRIPTION",
            DirectiveLocation::Field => "FIELD",
            DirectiveLocation::FragmentDefinition => "FRAGMENT_DEFINITION",
            DirectiveLocation::FragmentSpread => "FRAGMENT_SPREAD",
            DirectiveLocation::InlineFragment => "INLINE_FRAGMENT",
            DirectiveLocation::VariableDefinition => "VARIABLE_DEFINITION",
            DirectiveLocation::Schema => "SCHEMA",
            DirectiveLocation::Scalar => "SCALAR",
            DirectiveLocation::Object => "OBJECT",
            DirectiveLocation::FieldDefinition => "FIELD_DEFINITION",
            DirectiveLocation::ArgumentDefinition => "ARGUMENT_DEFINITION",
            DirectiveLocation::Interface => "INTERFACE",
            DirectiveLocation::Union => "UNION",
            DirectiveLocation::Enum => "ENUM",
            DirectiveLocation::EnumValue => "ENUM_VALUE",
            DirectiveLocation::InputObject => "INPUT_OBJECT",
            DirectiveLocation::InputFieldDefinition => "INPUT_FIELD_DEFINITION",
        }
    }

    pub fn is_executable(&self) -> bool {
        (*self as u32) < (DirectiveLocation::Schema as u32)
    }

    fn bit(&self) -> u32 {
        1 << (*self as u32)
    }
}

impl std::fmt::Display for DirectiveLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A set of [`DirectiveLocation`]s stored as a bitmask.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    Hash,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
)]
pub struct DirectiveLocations(u32);

impl DirectiveLocations {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn set(&mut self, location: DirectiveLocation) {
        self.0 |= location.bit();
    }

    pub fn unset(&mut self, location: DirectiveLocation) {
        self.0 &= !location.bit();
    }

    /// Adds the location named by `raw` (e.g. `b"FIELD"`) and returns it, or
    /// returns `None` if `raw` names no location.
    pub fn set_from_raw(&mut self, raw: &[u8]) -> Option<DirectiveLocation> {
        let location = DirectiveLocation::from_bytes(raw)?;
        self.set(location);
        Some(location)
    }

    pub fn contains(&self, location: DirectiveLocation) -> bool {
        self.0 & location.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterates the contained locations in canonical order.
    pub fn iter(self) -> impl Iterator<Item = DirectiveLocation> {
        DirectiveLocation::ALL
            .into_iter()
            .filter(move |location| self.contains(*location))
    }

    pub fn bits(&self) -> u32 {
        self.0
    }
}

impl FromIterator<DirectiveLocation> for DirectiveLocations {
    fn from_iter<I: IntoIterator<Item = DirectiveLocation>>(iter: I) -> Self {
        let mut locations = Self::new();
        for location in iter {
            locations.set(location);
        }
        locations
    }
}

/// `directive @name(arguments) repeatable on LOCATION | ...`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DirectiveDefinition {
    pub description: Option<Description>,
    pub directive_keyword: Position,
    pub at: Position,
    pub name: ByteSliceReference,
    /// Refs into `input_value_definitions`.
    pub arguments: DelimitedList,
    pub repeatable: Option<Position>,
    pub on: Position,
    pub locations: DirectiveLocations,
    pub position: Position,
}
