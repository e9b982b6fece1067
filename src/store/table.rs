//! Copy-on-write entity collections.
//!
//! A `Table` is an `Arc`'d ordered map of `Arc`'d records. Cloning a table is
//! two pointer bumps; writes copy only the map spine and the touched record,
//! so every earlier snapshot stays valid and unchanged tables stay shared.

use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

use crate::model::Merge;

#[derive(Debug)]
pub struct Table<T> {
    rows: Arc<IndexMap<String, Arc<T>>>,
}

impl<T> Clone for Table<T> {
    fn clone(&self) -> Self {
        Self {
            rows: Arc::clone(&self.rows),
        }
    }
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: Arc::new(IndexMap::new()),
        }
    }
}

impl<T: PartialEq> PartialEq for Table<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.rows == other.rows
    }
}

impl<T: Serialize> Serialize for Table<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.rows.iter().map(|(id, row)| (id, row.as_ref())))
    }
}

impl<T> Table<T> {
    pub fn get(&self, id: &str) -> Option<&T> {
        self.rows.get(id).map(Arc::as_ref)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.rows.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Ids in first-insertion order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.rows.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.rows.iter().map(|(id, row)| (id.as_str(), row.as_ref()))
    }

    /// True when both tables share the same storage.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.rows, &other.rows)
    }
}

impl<T: Clone + PartialEq> Table<T> {
    /// Apply `edit` to the row at `id`, creating it with `init` first if needed.
    ///
    /// Storage is only copied when the edit actually changes the row.
    pub fn update(&mut self, id: &str, init: impl FnOnce() -> T, edit: impl FnOnce(&mut T)) {
        let mut row = match self.rows.get(id) {
            Some(existing) => T::clone(existing),
            None => init(),
        };
        edit(&mut row);
        if self.rows.get(id).is_some_and(|existing| **existing == row) {
            return;
        }
        Arc::make_mut(&mut self.rows).insert(id.to_string(), Arc::new(row));
    }

    /// Remove a row, keeping the order of the others. Returns whether it existed.
    pub fn remove(&mut self, id: &str) -> bool {
        if !self.rows.contains_key(id) {
            return false;
        }
        Arc::make_mut(&mut self.rows).shift_remove(id).is_some()
    }
}

impl<T: Clone + PartialEq + Merge> Table<T> {
    /// Smart-merge `incoming` into the row at `id`.
    ///
    /// A merge that leaves the row unchanged keeps the table storage shared.
    pub fn merge(&mut self, id: &str, incoming: T) {
        let row = match self.rows.get(id) {
            Some(existing) => {
                let mut row = T::clone(existing);
                row.merge(incoming);
                if row == **existing {
                    return;
                }
                row
            }
            None => incoming,
        };
        Arc::make_mut(&mut self.rows).insert(id.to_string(), Arc::new(row));
    }
}
