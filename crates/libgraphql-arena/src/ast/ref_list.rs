use crate::ast::Ref;

/// Implemented by every table entry that can be a member of a sibling list.
///
/// Sibling lists are intrusive: each entry stores the ref of the next
/// sibling in the same table, and the parent stores only the head in a
/// [`RefList`].
pub trait Linked {
    fn next(&self) -> Option<Ref>;
    fn set_next(&mut self, next: Option<Ref>);
}

macro_rules! impl_linked {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::ast::Linked for $ty {
                fn next(&self) -> Option<$crate::ast::Ref> {
                    self.next
                }

                fn set_next(&mut self, next: Option<$crate::ast::Ref>) {
                    self.next = next;
                }
            }
        )*
    };
}
pub(crate) use impl_linked;

/// The head of an intrusive sibling list. `first == None` is the empty list.
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
pub struct RefList {
    pub first: Option<Ref>,
}

impl RefList {
    pub fn is_empty(&self) -> bool {
        self.first.is_none()
    }

    /// Iterates the refs of this list by chasing `next` links through
    /// `table`.
    pub fn iter<'a, T: Linked>(&self, table: &'a [T]) -> RefListIter<'a, T> {
        RefListIter {
            table,
            current: self.first,
        }
    }

    /// Counts the members of this list. O(n).
    pub fn len<T: Linked>(&self, table: &[T]) -> usize {
        self.iter(table).count()
    }

    /// Returns the `index`th ref of this list, if any.
    pub fn nth<T: Linked>(&self, table: &[T], index: usize) -> Option<Ref> {
        self.iter(table).nth(index)
    }
}

/// Iterator over the refs of a [`RefList`].
#[derive(Clone, Debug)]
pub struct RefListIter<'a, T> {
    table: &'a [T],
    current: Option<Ref>,
}

impl<T: Linked> Iterator for RefListIter<'_, T> {
    type Item = Ref;

    fn next(&mut self) -> Option<Ref> {
        let current = self.current?;
        self.current = self.table.get(current as usize).and_then(Linked::next);
        Some(current)
    }
}

/// Appends refs to a [`RefList`] in O(1) by remembering the last member.
#[derive(Clone, Copy, Debug, Default)]
pub struct RefListBuilder {
    list: RefList,
    last: Option<Ref>,
}

impl RefListBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Links `node_ref` (already stored in `table`) after the current last
    /// member.
    pub fn push<T: Linked>(&mut self, table: &mut [T], node_ref: Ref) {
        match self.last {
            Some(last) => table[last as usize].set_next(Some(node_ref)),
            None => self.list.first = Some(node_ref),
        }
        self.last = Some(node_ref);
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn finish(self) -> RefList {
        self.list
    }
}
