//! Kleene logic operations trait.
//!
//! Defines the three-valued operations shared by single trits and
//! whole trit sets, so generic code can combine either.

use crate::ternary::Trit;

/// Trait for types that support trit-wise Kleene logic.
pub trait KleeneOps {
    /// The output type of every operation.
    type Output;

    /// Complement every trit (False ↔ True).
    fn kleene_not(&self) -> Self::Output;

    /// Trit-wise Kleene AND.
    fn kleene_and(&self, other: &Self) -> Self::Output;

    /// Trit-wise Kleene OR.
    fn kleene_or(&self, other: &Self) -> Self::Output;
}

impl KleeneOps for Trit {
    type Output = Trit;

    #[inline]
    fn kleene_not(&self) -> Trit {
        Trit::not(*self)
    }

    #[inline]
    fn kleene_and(&self, other: &Self) -> Trit {
        self.and(*other)
    }

    #[inline]
    fn kleene_or(&self, other: &Self) -> Trit {
        self.or(*other)
    }
}

/// Material implication `a → b`, expressed as `!a | b`.
pub fn implies<T>(a: &T, b: &T) -> T
where
    T: KleeneOps<Output = T>,
{
    a.kleene_not().kleene_or(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::set::TritSet;

    #[test]
    fn test_trit_kleene_ops() {
        for a in Trit::ALL {
            assert_eq!(a.kleene_not(), !a);
            for b in Trit::ALL {
                assert_eq!(a.kleene_and(&b), a & b);
                assert_eq!(a.kleene_or(&b), a | b);
            }
        }
    }

    #[test]
    fn test_implication_on_trits() {
        assert_eq!(implies(&Trit::True, &Trit::False), Trit::False);
        assert_eq!(implies(&Trit::False, &Trit::Unknown), Trit::True);
        assert_eq!(implies(&Trit::Unknown, &Trit::True), Trit::True);
        assert_eq!(implies(&Trit::Unknown, &Trit::False), Trit::Unknown);
    }

    #[test]
    fn test_implication_on_sets() {
        let a: TritSet = "TFU".parse().unwrap();
        let b: TritSet = "FFT".parse().unwrap();
        let result = implies(&a, &b);

        assert_eq!(result.get(0), Trit::False);
        assert_eq!(result.get(1), Trit::True);
        assert_eq!(result.get(2), Trit::True);
        assert_eq!(result.len(), 3);
    }
}
