/// One step of a response path, as tracked by the
/// [`Walker`](crate::walker::Walker) and reported in
/// [`ExternalError::path`](crate::ExternalError::path).
#[derive(
    Clone,
    Debug,
    Eq,
    Hash,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
)]
pub enum PathItem {
    /// A field's response key (its alias, or its name).
    FieldName(String),

    /// An inline fragment, with its type condition's type name if it has
    /// one.
    InlineFragment(Option<String>),
}

impl std::fmt::Display for PathItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathItem::FieldName(name) => f.write_str(name),
            PathItem::InlineFragment(Some(type_name)) => {
                write!(f, "... on {type_name}")
            },
            PathItem::InlineFragment(None) => f.write_str("..."),
        }
    }
}

/// Renders a path as dotted text, e.g. `posts.(... on Post).id`. Inline
/// fragments are parenthesized so their dots never merge with separators.
pub fn format_path(path: &[PathItem]) -> String {
    path.iter()
        .map(|item| match item {
            PathItem::FieldName(name) => name.clone(),
            PathItem::InlineFragment(_) => format!("({item})"),
        })
        .collect::<Vec<_>>()
        .join(".")
}
