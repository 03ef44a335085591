//! Indexed read/write proxy.

use std::fmt;
use crate::error::Result;
use crate::set::TritSet;
use crate::ternary::Trit;

/// A handle on one index of a [`TritSet`], obtained from [`TritSet::at`].
///
/// Reading through the holder never allocates. Whether a write grows the
/// set is decided only when [`set`](Self::set) is called. The holder
/// borrows the set mutably, so it cannot outlive the statement that uses it
/// while anything else touches the set.
pub struct TritHolder<'a> {
    set: &'a mut TritSet,
    index: usize,
}

impl<'a> TritHolder<'a> {
    pub(crate) fn new(set: &'a mut TritSet, index: usize) -> Self {
        Self { set, index }
    }

    /// The index this holder refers to.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Current value at the index.
    #[inline]
    pub fn get(&self) -> Trit {
        self.set.get(self.index)
    }

    /// Assign `value` and return it, so assignments can be chained:
    /// `a.at(0).set(b.at(2).set(Trit::True))`.
    pub fn set(self, value: Trit) -> Trit {
        self.set.set(self.index, value)
    }

    /// Fallible form of [`set`](Self::set).
    pub fn try_set(self, value: Trit) -> Result<Trit> {
        self.set.try_set(self.index, value)
    }

    /// Apply `f` to the current value and store the result.
    pub fn update(self, f: impl FnOnce(Trit) -> Trit) -> Trit {
        let value = f(self.get());
        self.set(value)
    }
}

impl PartialEq<Trit> for TritHolder<'_> {
    fn eq(&self, other: &Trit) -> bool {
        self.get() == *other
    }
}

impl PartialEq<TritHolder<'_>> for Trit {
    fn eq(&self, other: &TritHolder<'_>) -> bool {
        *self == other.get()
    }
}

impl From<TritHolder<'_>> for Trit {
    fn from(holder: TritHolder<'_>) -> Self {
        holder.get()
    }
}

impl fmt::Debug for TritHolder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TritHolder")
            .field("index", &self.index)
            .field("value", &self.get())
            .finish()
    }
}

impl fmt::Display for TritHolder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_through_holder_does_not_allocate() {
        let mut set = TritSet::with_size(10);
        assert!(set.at(2_000_000) == Trit::Unknown);
        assert_eq!(Trit::from(set.at(7)), Trit::Unknown);
        assert_eq!(set.capacity(), 0);
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn test_assignment_through_holder() {
        let mut set = TritSet::new();
        assert_eq!(set.at(4).set(Trit::False), Trit::False);
        assert!(set.at(4) == Trit::False);
        assert!(Trit::False == set.at(4));
        assert_eq!(set.len(), 5);

        set.at(4).set(Trit::Unknown);
        assert_eq!(set.len(), 0);
        assert_eq!(set.capacity(), 1);
    }

    #[test]
    fn test_chained_assignment() {
        let mut a = TritSet::new();
        let mut b = TritSet::new();
        a.at(0).set(b.at(2).set(Trit::True));
        assert_eq!(a[0], Trit::True);
        assert_eq!(b[2], Trit::True);

        let v = a.at(2).set(Trit::True);
        a.at(1).set(v);
        assert_eq!(a.to_string(), "TTT");
    }

    #[test]
    fn test_copy_between_sets() {
        let source: TritSet = "UFTF".parse().unwrap();
        let mut dest = TritSet::new();
        for i in 0..source.len() {
            dest.at(i).set(source[i]);
        }
        assert_eq!(dest, source);
    }

    #[test]
    fn test_update_negates_in_place() {
        let mut set: TritSet = "TF".parse().unwrap();
        set.at(0).update(|t| !t);
        set.at(1).update(|t| !t);
        set.at(5).update(|t| !t);
        assert_eq!(set.to_string(), "FT");
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_holder_display() {
        let mut set: TritSet = "UT".parse().unwrap();
        let holder = set.at(1);
        assert_eq!(holder.index(), 1);
        assert_eq!(holder.to_string(), "T");
        assert_eq!(format!("{:?}", holder), "TritHolder { index: 1, value: True }");
    }
}
