use std::ops::{Deref, Index, IndexMut};

use crate::internal::common::Map;

/// Vec that can only be indexed by the specified `Idx` type.
/// Useful in combination with index types created by `define_id_type`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct IndexVec<Idx, Value>(Vec<Value>, std::marker::PhantomData<Idx>);

impl<Idx, Value> IndexVec<Idx, Value> {
    #[inline]
    pub fn new() -> Self {
        Self(Vec::new(), Default::default())
    }

    #[inline]
    pub fn push(&mut self, value: Value) {
        self.0.push(value);
    }
}

impl<Idx, Value> Default for IndexVec<Idx, Value> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<Idx: Into<usize>, Value> Index<Idx> for IndexVec<Idx, Value> {
    type Output = Value;

    #[inline]
    fn index(&self, index: Idx) -> &Self::Output {
        self.0.index(index.into())
    }
}

impl<Idx: Into<usize>, Value> IndexMut<Idx> for IndexVec<Idx, Value> {
    #[inline]
    fn index_mut(&mut self, index: Idx) -> &mut Self::Output {
        self.0.index_mut(index.into())
    }
}

impl<Idx, Value> Deref for IndexVec<Idx, Value> {
    type Target = Vec<Value>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Interns names into dense ids.
///
/// Ids are assigned in the order of first appearance, so iterating over
/// [`NameIndex::iter`] is deterministic and follows the configuration order.
#[derive(Debug, Clone)]
pub struct NameIndex<Id> {
    names: IndexVec<Id, String>,
    ids: Map<String, Id>,
}

impl<Id> Default for NameIndex<Id> {
    fn default() -> Self {
        Self {
            names: IndexVec::new(),
            ids: Map::default(),
        }
    }
}

impl<Id: Copy + From<u32> + Into<usize>> NameIndex<Id> {
    /// Returns the id of `name` and a flag that is true when the name was
    /// not known before.
    pub fn get_or_allocate(&mut self, name: &str) -> (Id, bool) {
        match self.ids.get(name) {
            Some(&id) => (id, false),
            None => {
                let id = Id::from(self.names.len() as u32);
                self.names.push(name.to_string());
                self.ids.insert(name.to_string(), id);
                (id, true)
            }
        }
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<Id> {
        self.ids.get(name).copied()
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.ids.contains_key(name)
    }

    #[inline]
    pub fn name(&self, id: Id) -> &str {
        &self.names[id]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Id, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(index, name)| (Id::from(index as u32), name.as_str()))
    }
}
