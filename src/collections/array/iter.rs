use core::slice;

use alloc::{string::String, vec};

/// Borrowing iterator over a [`StringArray`](super::StringArray)'s elements,
/// in order.
pub struct Iter<'a> {
    pub(super) slots: slice::Iter<'a, Option<String>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.next()?.as_deref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

/// Owning iterator that yields each stored string by value.
pub struct IntoIter {
    pub(super) slots: vec::IntoIter<Option<String>>,
    pub(super) remaining: usize,
}

impl Iterator for IntoIter {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.slots.next().flatten()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}
