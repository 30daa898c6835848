//! The natural numbers as a commutative monoid under addition.

use std::fmt;

use rand::Rng;

use commalg_core::{
    derive_substream_seed, CommalgError, CommutativeMonoidElement,
    CommutativeMonoidElementFactory, Element, ElementFactory, ErrorInfo, RngHandle,
};

/// Substream slot occupied by [`NaturalFactory`] when deriving its seed.
const NATURAL_SUBSTREAM: u64 = 3;

/// A natural number. Monoid level only: there are no negatives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Natural {
    value: u64,
}

impl Natural {
    /// The additive identity.
    pub const ZERO: Natural = Natural { value: 0 };

    /// Wraps a raw value.
    pub fn new(value: u64) -> Self {
        Self { value }
    }

    /// Returns the underlying value.
    pub fn value(&self) -> u64 {
        self.value
    }
}

impl fmt::Display for Natural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl Element for Natural {}

impl CommutativeMonoidElement for Natural {
    fn is_zero(&self) -> bool {
        self.value == 0
    }

    fn add_to(&self, other: &Self) -> Result<Self, CommalgError> {
        self.value
            .checked_add(other.value)
            .map(Natural::new)
            .ok_or_else(|| {
                CommalgError::Overflow(
                    ErrorInfo::new(
                        "u64-overflow",
                        "computation resulted in an integer that does not fit in a u64",
                    )
                    .with_context("lhs", self.value.to_string())
                    .with_context("rhs", other.value.to_string()),
                )
            })
    }
}

/// Monoid-level factory drawing naturals below `2^31`.
#[derive(Debug, Clone)]
pub struct NaturalFactory {
    rng: RngHandle,
}

impl NaturalFactory {
    /// Builds a factory from a master seed, on its own substream slot.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: RngHandle::from_seed(derive_substream_seed(seed, NATURAL_SUBSTREAM)),
        }
    }
}

impl ElementFactory for NaturalFactory {
    type Element = Natural;

    fn get_random(&mut self) -> Natural {
        Natural::new(self.rng.inner_mut().gen_range(0..=i32::MAX as u64))
    }
}

impl CommutativeMonoidElementFactory for NaturalFactory {
    fn zero(&self) -> Natural {
        Natural::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addition_and_identity() {
        let a = Natural::new(40);
        let b = Natural::new(2);
        assert_eq!(a.add_to(&b).unwrap(), Natural::new(42));
        assert!(Natural::ZERO.is_zero());
        assert_eq!(a.add_to(&Natural::ZERO).unwrap(), a);
    }

    #[test]
    fn overflow_is_reported() {
        let max = Natural::new(u64::MAX);
        assert!(matches!(
            max.add_to(&Natural::new(1)).unwrap_err(),
            CommalgError::Overflow(_)
        ));
    }
}
