// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Consume-on-match expectation sets.

use crate::failure::CheckFailure;

/// Ordered multiset of expected items.
///
/// Each successful match removes one item, so an item can be consumed at
/// most once and duplicates must each be observed. Whatever remains after
/// a reconciliation pass was never observed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpectedSet<T> {
    items: Vec<T>,
}

impl<T> ExpectedSet<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Remove the first item equal to `item`; false if none is left
    pub fn consume<Q>(&mut self, item: &Q) -> bool
    where
        T: PartialEq<Q>,
        Q: ?Sized,
    {
        match self.items.iter().position(|candidate| candidate == item) {
            Some(pos) => {
                self.items.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Remove and return the first item satisfying `pred`
    pub fn take_first<F>(&mut self, pred: F) -> Option<T>
    where
        F: FnMut(&T) -> bool,
    {
        let pos = self.items.iter().position(pred)?;
        Some(self.items.remove(pos))
    }

    /// Items not yet consumed, in their original order
    pub fn remaining(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_inner(self) -> Vec<T> {
        self.items
    }
}

impl<T: std::fmt::Display> ExpectedSet<T> {
    /// Fail with the leftover items unless everything was consumed
    pub fn ensure_consumed(&self) -> Result<(), CheckFailure> {
        if self.items.is_empty() {
            return Ok(());
        }
        Err(CheckFailure::ReconciliationLeftover {
            leftover: self.items.iter().map(ToString::to_string).collect(),
        })
    }
}

impl<T> From<Vec<T>> for ExpectedSet<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for ExpectedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for ExpectedSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

#[cfg(test)]
#[path = "expected_tests.rs"]
mod tests;
