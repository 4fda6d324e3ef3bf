use crate::PathItem;
use crate::Report;
use crate::ast::Document;
use crate::ast::Node;
use crate::ast::Ref;

/// Everything a visitor callback can see about the walk's current position.
pub struct VisitContext<'a> {
    /// The document being walked.
    pub operation: &'a Document,

    /// The schema document, if the walk has one.
    pub definition: Option<&'a Document>,

    /// The nodes enclosing the current one, outermost first. Never includes
    /// the node being entered or left.
    pub ancestors: &'a [Node],

    /// Response keys (and inline fragments) from the operation root down to
    /// the current selection set.
    pub path: &'a [PathItem],

    /// The type whose fields are being selected (or defined) at the current
    /// position. For executable documents this is a node of
    /// [`definition`](Self::definition) and requires a schema; for type
    /// system documents it is the enclosing type definition or extension of
    /// [`operation`](Self::operation).
    pub enclosing_type_definition: Option<Node>,

    /// The name of [`enclosing_type_definition`](Self::enclosing_type_definition).
    pub enclosing_type_name: Option<&'a [u8]>,

    /// For field callbacks walked against a schema: the matching field
    /// definition (a ref into the definition's `field_definitions`). `None`
    /// for `__typename` and every other kind.
    pub field_definition: Option<Ref>,

    /// Errors collected so far. Callbacks may add errors without stopping
    /// the walk.
    pub report: &'a mut Report,
}

impl VisitContext<'_> {
    /// The number of ancestors of the current node.
    pub fn depth(&self) -> usize {
        self.ancestors.len()
    }

    /// The innermost ancestor.
    pub fn parent(&self) -> Option<Node> {
        self.ancestors.last().copied()
    }
}
