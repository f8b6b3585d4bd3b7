//! Generic enumeration over anything with a "visit each item" primitive.
//!
//! Implementors provide [`Enumerable::each`] and get the derived methods
//! (`map`, `inject`, `detect`, ...) for free. Both [`Hash`] and
//! [`ObjectRange`] build their query helpers on this trait instead of
//! looping locally.
//!
//! [`Hash`]: crate::hash::Hash
//! [`ObjectRange`]: crate::range::ObjectRange

pub trait Enumerable {
    type Item;

    /// Visit every item in order. The one required method.
    fn each<F>(&self, f: F)
    where
        F: FnMut(&Self::Item);

    /// Collect the result of `f` applied to every item.
    ///
    /// Field projection ("pluck") is `map` with an accessor closure.
    fn map<T, F>(&self, mut f: F) -> Vec<T>
    where
        F: FnMut(&Self::Item) -> T,
    {
        let mut out = Vec::new();
        self.each(|item| out.push(f(item)));
        out
    }

    /// Fold every item into an accumulator.
    fn inject<A, F>(&self, initial: A, mut f: F) -> A
    where
        F: FnMut(A, &Self::Item) -> A,
    {
        let mut acc = Some(initial);
        self.each(|item| {
            if let Some(current) = acc.take() {
                acc = Some(f(current, item));
            }
        });
        acc.expect("accumulator is restored after every step")
    }

    /// First item matching the predicate, if any.
    fn detect<F>(&self, mut pred: F) -> Option<Self::Item>
    where
        Self::Item: Clone,
        F: FnMut(&Self::Item) -> bool,
    {
        let mut found = None;
        self.each(|item| {
            if found.is_none() && pred(item) {
                found = Some(item.clone());
            }
        });
        found
    }

    /// All items matching the predicate.
    fn select<F>(&self, mut pred: F) -> Vec<Self::Item>
    where
        Self::Item: Clone,
        F: FnMut(&Self::Item) -> bool,
    {
        let mut out = Vec::new();
        self.each(|item| {
            if pred(item) {
                out.push(item.clone());
            }
        });
        out
    }

    fn any<F>(&self, mut pred: F) -> bool
    where
        F: FnMut(&Self::Item) -> bool,
    {
        let mut result = false;
        self.each(|item| {
            if !result && pred(item) {
                result = true;
            }
        });
        result
    }

    fn all<F>(&self, mut pred: F) -> bool
    where
        F: FnMut(&Self::Item) -> bool,
    {
        let mut result = true;
        self.each(|item| {
            if result && !pred(item) {
                result = false;
            }
        });
        result
    }

    fn count(&self) -> usize {
        self.inject(0, |n, _| n + 1)
    }

    fn to_vec(&self) -> Vec<Self::Item>
    where
        Self::Item: Clone,
    {
        self.map(Clone::clone)
    }
}
