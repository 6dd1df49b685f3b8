use std::fmt::{Display, Formatter};

use smallvec::SmallVec;

use crate::TresCount;

/// One `name[:count]` item of a TRES string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TresEntry {
    pub name: String,
    pub count: TresCount,
    /// The count was written out (`gpu:a10:1`) rather than implied (`gpu:a10`).
    pub explicit: bool,
}

impl TresEntry {
    pub fn new(name: impl Into<String>, count: TresCount) -> Self {
        TresEntry {
            name: name.into(),
            count,
            explicit: true,
        }
    }

    pub fn implicit(name: impl Into<String>) -> Self {
        TresEntry {
            name: name.into(),
            count: 1,
            explicit: false,
        }
    }
}

impl Display for TresEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.count == 1 && !self.explicit {
            f.write_str(&self.name)
        } else {
            write!(f, "{}:{}", self.name, self.count)
        }
    }
}

/// Ordered entries parsed from one resource dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TresList {
    entries: SmallVec<[TresEntry; 4]>,
}

impl TresList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, entry: TresEntry) {
        self.entries.push(entry);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, TresEntry> {
        self.entries.iter()
    }

    pub fn find(&self, name: &str) -> Option<&TresEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Returns the entry with the given name, appending a zero-count entry if there is none.
    pub fn find_or_insert(&mut self, name: &str) -> &mut TresEntry {
        let position = match self.entries.iter().position(|entry| entry.name == name) {
            Some(position) => position,
            None => {
                self.entries.push(TresEntry {
                    name: name.to_string(),
                    count: 0,
                    explicit: false,
                });
                self.entries.len() - 1
            }
        };
        &mut self.entries[position]
    }
}

impl FromIterator<TresEntry> for TresList {
    fn from_iter<T: IntoIterator<Item = TresEntry>>(iter: T) -> Self {
        TresList {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TresList {
    type Item = &'a TresEntry;
    type IntoIter = std::slice::Iter<'a, TresEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
