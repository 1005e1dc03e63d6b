use alloc::{
    borrow::ToOwned,
    boxed::Box,
    string::String,
};
use iter::{IntoIter, Iter};

use core::{fmt, ops::Index};

use crate::errors::{ArrayError, Result};

mod iter;

/// A growable array of owned string values.
///
/// Storage is a contiguous block of `capacity` slots of which the first
/// `count` hold independently owned strings; the rest are unoccupied. When an
/// insertion finds the block full, capacity doubles, so repeated appends cost
/// amortized O(1). Elements are always stored as the array's own copies,
/// never as borrows of caller data.
#[derive(Debug, Clone)]
pub struct StringArray {
    slots: Box<[Option<String>]>,
    count: usize,
}

impl Default for StringArray {
    fn default() -> Self {
        Self {
            slots: empty_slots(4),
            count: 0,
        }
    }
}

impl StringArray {
    /// Creates an empty array with room for `capacity` elements.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::InvalidCapacity`] when `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(ArrayError::InvalidCapacity);
        }
        Ok(Self {
            slots: empty_slots(capacity),
            count: 0,
        })
    }

    /// A `bool` value indicating whether the array is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// The number of elements in the array.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// The total number of elements that the array can contain without
    /// allocating new storage.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns a view of the first element, if available.
    #[must_use]
    pub fn first(&self) -> Option<&str> {
        self.read(0).ok()
    }

    /// Returns a view of the last element, if available.
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.count.checked_sub(1).and_then(|i| self.read(i).ok())
    }

    /// Returns a view of the element at `index`. Ownership stays with the
    /// array.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::IndexOutOfRange`] when `index >= self.count()`.
    pub fn read(&self, index: usize) -> Result<&str> {
        let out_of_range = ArrayError::IndexOutOfRange {
            index,
            count: self.count,
        };
        if index >= self.count {
            return Err(out_of_range);
        }
        // Occupied slots are always the prefix [0, count).
        self.slots[index].as_deref().ok_or(out_of_range)
    }

    /// Adds a copy of `element` at the end of the array, growing storage if
    /// it is full.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynarray::collections::array::StringArray;
    ///
    /// let mut array = StringArray::default();
    /// array.append("a");
    /// array.append("b");
    /// assert_eq!(array.read(1), Ok("b"));
    /// ```
    pub fn append(&mut self, element: &str) {
        if self.count == self.capacity() {
            self.grow();
        }
        self.slots[self.count] = Some(element.to_owned());
        self.count += 1;
    }

    /// Inserts a copy of `element` at the specified position.
    ///
    /// Shifts every element at `at` and after one position to the right.
    /// Inserting at `self.count()` is equivalent to [`append`](Self::append).
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::IndexOutOfRange`] when `at > self.count()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynarray::collections::array::StringArray;
    ///
    /// let mut array = StringArray::default();
    /// array.append("a");
    /// array.append("c");
    /// array.insert("b", 1)?;
    /// assert_eq!(array.read(1), Ok("b"));
    /// # Ok::<(), dynarray::errors::ArrayError>(())
    /// ```
    pub fn insert(&mut self, element: &str, at: usize) -> Result<()> {
        if at > self.count {
            return Err(ArrayError::IndexOutOfRange {
                index: at,
                count: self.count,
            });
        }
        if self.count == self.capacity() {
            self.grow();
        }
        self.shift_right(at);
        self.slots[at] = Some(element.to_owned());
        self.count += 1;
        Ok(())
    }

    /// Removes the first element whose content equals `element` and returns
    /// the owned string.
    ///
    /// All elements after the removed one are shifted one position to the
    /// left; later duplicates are untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::NotFound`] when no element matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynarray::collections::array::StringArray;
    ///
    /// let mut array = StringArray::default();
    /// array.append("a");
    /// array.append("b");
    /// assert_eq!(array.remove("a")?, "a");
    /// assert_eq!(array.read(0), Ok("b"));
    /// # Ok::<(), dynarray::errors::ArrayError>(())
    /// ```
    pub fn remove(&mut self, element: &str) -> Result<String> {
        let at = self.first_index_of(element).ok_or(ArrayError::NotFound)?;
        let removed = self.slots[at].take().ok_or(ArrayError::NotFound)?;
        self.shift_left(at + 1);
        self.count -= 1;
        Ok(removed)
    }

    /// Returns the position of the first element whose content equals
    /// `element`, if any.
    #[must_use]
    pub fn first_index_of(&self, element: &str) -> Option<usize> {
        (0..self.count).find(|&i| self.slots[i].as_deref() == Some(element))
    }

    /// Whether any element's content equals `element`.
    #[must_use]
    pub fn contains(&self, element: &str) -> bool {
        self.first_index_of(element).is_some()
    }

    /// Iterates over views of the elements in order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            slots: self.slots[..self.count].iter(),
        }
    }

    fn grow(&mut self) {
        let mut grown = empty_slots(self.capacity() * 2);
        // Ownership of the stored strings transfers; nothing is re-copied.
        for (new_slot, old_slot) in grown.iter_mut().zip(self.slots.iter_mut().take(self.count)) {
            *new_slot = old_slot.take();
        }
        self.slots = grown;
    }

    fn shift_right(&mut self, from: usize) {
        // Highest index first so no occupied slot is overwritten.
        for i in (from..self.count).rev() {
            self.slots[i + 1] = self.slots[i].take();
        }
    }

    fn shift_left(&mut self, from: usize) {
        // Lowest index first; `take` leaves the vacated tail slot unoccupied.
        for i in from..self.count {
            self.slots[i - 1] = self.slots[i].take();
        }
    }
}

impl fmt::Display for StringArray {
    /// Renders the array as a bracketed, comma-separated list, e.g. `[a,b,c]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, element) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str(element)?;
        }
        f.write_str("]")
    }
}

impl Index<usize> for StringArray {
    type Output = str;

    fn index(&self, index: usize) -> &Self::Output {
        assert!(index < self.count, "Index out of bounds");
        self.slots[index].as_deref().unwrap_or_default()
    }
}

impl<S: AsRef<str>> FromIterator<S> for StringArray {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut array = Self::default();
        for item in iter {
            array.append(item.as_ref());
        }
        array
    }
}

impl IntoIterator for StringArray {
    type Item = String;
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            slots: self.slots.into_vec().into_iter(),
            remaining: self.count,
        }
    }
}

impl<'a> IntoIterator for &'a StringArray {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn empty_slots(capacity: usize) -> Box<[Option<String>]> {
    core::iter::repeat_with(|| None).take(capacity).collect()
}

#[macro_export]
macro_rules! string_array {
    ($($elem:expr),* $(,)?) => {{
        let mut arr = $crate::collections::array::StringArray::default();
        $(arr.append($elem);)*
        arr
    }};
}
