use crate::ast::Node;
use crate::ast::Ref;
use indexmap::IndexMap;
use smallvec::SmallVec;

/// Name lookup over a document's type system definitions.
///
/// The parser fills it while parsing: every type definition and type
/// extension is recorded under its type name (definition and extensions
/// share one entry, in source order), and every directive definition under
/// its directive name (without `@`).
#[derive(Clone, Debug, Default)]
pub struct Index {
    types: IndexMap<Vec<u8>, SmallVec<[Node; 2]>>,
    directives: IndexMap<Vec<u8>, Ref>,
}

impl Index {
    pub fn add_type_node(&mut self, name: &[u8], node: Node) {
        match self.types.get_mut(name) {
            Some(nodes) => nodes.push(node),
            None => {
                self.types.insert(name.to_vec(), smallvec::smallvec![node]);
            },
        }
    }

    /// Records a directive definition. A redefinition keeps the first.
    pub fn add_directive_definition(&mut self, name: &[u8], directive_definition: Ref) {
        if !self.directives.contains_key(name) {
            self.directives.insert(name.to_vec(), directive_definition);
        }
    }

    /// All definitions and extensions recorded for a type name.
    pub fn type_nodes(&self, name: &[u8]) -> &[Node] {
        self.types.get(name).map(|nodes| nodes.as_slice()).unwrap_or(&[])
    }

    /// The type definition for a name, or its first extension if the
    /// document only extends the type.
    pub fn first_type_node(&self, name: &[u8]) -> Option<Node> {
        let nodes = self.type_nodes(name);
        nodes
            .iter()
            .find(|node| !node.kind.is_type_extension())
            .or_else(|| nodes.first())
            .copied()
    }

    pub fn directive_definition(&self, name: &[u8]) -> Option<Ref> {
        self.directives.get(name).copied()
    }

    /// Type names in first-seen order.
    pub fn type_names(&self) -> impl Iterator<Item = &[u8]> {
        self.types.keys().map(|name| name.as_slice())
    }

    pub fn clear(&mut self) {
        self.types.clear();
        self.directives.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty() && self.directives.is_empty()
    }
}
