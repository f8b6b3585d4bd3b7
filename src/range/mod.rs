//! A lazy range over any type with an ordering and a successor operation.


use std::fmt;

use chrono::NaiveDate;

use crate::enumerable::Enumerable;

/// The "next value" operation that drives range iteration.
pub trait Successor {
    fn succ(&self) -> Self;
}

macro_rules! int_successor {
    ($($ty:ty),*) => {
        $(impl Successor for $ty {
            fn succ(&self) -> Self {
                self + 1
            }
        })*
    };
}

int_successor!(i32, i64, u32, u64, usize);

impl Successor for char {
    /// Next Unicode scalar value, skipping the surrogate gap. Saturates at
    /// `char::MAX`, so an inclusive range ending there never terminates.
    fn succ(&self) -> Self {
        let mut next = *self as u32 + 1;
        if next == 0xD800 {
            next = 0xE000;
        }
        char::from_u32(next).unwrap_or(char::MAX)
    }
}

impl Successor for NaiveDate {
    /// The following calendar day. Saturates at `NaiveDate::MAX`.
    fn succ(&self) -> Self {
        self.succ_opt().unwrap_or(*self)
    }
}

/// A range of values between `start` and `end`, enumerated lazily by
/// repeated application of [`Successor::succ`].
///
/// The fields are stored verbatim: no validation that `start <= end` is
/// performed, and a range with `start > end` is simply empty. Iteration
/// terminates only if the successor operation eventually leaves the range
/// under the element's comparison semantics; a non-monotonic successor
/// diverges, and the range neither detects nor caps that. Termination is
/// the caller's contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectRange<T> {
    start: T,
    end: T,
    exclusive: bool,
}

impl<T> ObjectRange<T> {
    /// A range whose upper boundary is a member.
    pub fn new(start: T, end: T) -> Self {
        Self {
            start,
            end,
            exclusive: false,
        }
    }

    /// A range whose upper boundary is not a member.
    pub fn exclusive(start: T, end: T) -> Self {
        Self {
            start,
            end,
            exclusive: true,
        }
    }

    pub fn start(&self) -> &T {
        &self.start
    }

    pub fn end(&self) -> &T {
        &self.end
    }

    pub fn is_exclusive(&self) -> bool {
        self.exclusive
    }
}

impl<T: PartialOrd> ObjectRange<T> {
    /// Whether `value` lies within the range boundaries.
    ///
    /// Values that compare as unordered against a boundary (NaN-style) are
    /// never included, per `PartialOrd`.
    pub fn include(&self, value: &T) -> bool {
        if value < &self.start {
            return false;
        }
        if self.exclusive {
            value < &self.end
        } else {
            value <= &self.end
        }
    }
}

impl<T: PartialOrd + Successor + Clone> ObjectRange<T> {
    /// Lazy iterator over the range, starting at `start` and advancing via
    /// [`Successor::succ`] while [`ObjectRange::include`] holds.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            range: self,
            next: Some(self.start.clone()),
        }
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }
}

pub struct Iter<'a, T> {
    range: &'a ObjectRange<T>,
    next: Option<T>,
}

impl<T: PartialOrd + Successor + Clone> Iterator for Iter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let current = self.next.take()?;
        if !self.range.include(&current) {
            return None;
        }
        self.next = Some(current.succ());
        Some(current)
    }
}

impl<'a, T: PartialOrd + Successor + Clone> IntoIterator for &'a ObjectRange<T> {
    type Item = T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialOrd + Successor + Clone> Enumerable for ObjectRange<T> {
    type Item = T;

    fn each<F>(&self, mut f: F)
    where
        F: FnMut(&T),
    {
        for value in self.iter() {
            f(&value);
        }
    }
}

impl<T: fmt::Display> fmt::Display for ObjectRange<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dots = if self.exclusive { "..." } else { ".." };
        write!(f, "{}{}{}", self.start, dots, self.end)
    }
}
