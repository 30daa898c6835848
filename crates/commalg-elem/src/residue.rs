//! Integers modulo a runtime modulus, as a commutative ring.
//!
//! Unlike [`Rational`](crate::Rational) or [`Integer`](crate::Integer), the
//! element type carries a runtime parameter. Two residues only live in the
//! same ring when their moduli agree; combining residues from different
//! rings is a [`CommalgError::TypeMismatch`], a caller bug that aborts the
//! run rather than being reported as an axiom failure.

use std::fmt;

use rand::Rng;

use commalg_core::{
    derive_substream_seed, AbelianGroupElement, AbelianGroupElementFactory, CommalgError,
    CommutativeMonoidElement, CommutativeMonoidElementFactory, CommutativeRingElement,
    CommutativeRingElementFactory, Element, ElementFactory, ErrorInfo, RngHandle,
};

/// Substream slot occupied by [`ResidueFactory`] when deriving its seed.
const RESIDUE_SUBSTREAM: u64 = 4;

/// A residue class modulo a fixed positive modulus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Residue {
    value: u64,
    modulus: u64,
}

impl Residue {
    /// Builds the residue class of `value` modulo `modulus`.
    ///
    /// A zero modulus is a [`CommalgError::Construction`] error. The stored
    /// value is always the canonical representative in `0..modulus`.
    pub fn new(value: u64, modulus: u64) -> Result<Self, CommalgError> {
        if modulus == 0 {
            return Err(CommalgError::Construction(
                ErrorInfo::new("zero-modulus", "modulus was set to be zero")
                    .with_context("value", value.to_string()),
            ));
        }
        Ok(Self {
            value: value % modulus,
            modulus,
        })
    }

    /// Canonical representative, in `0..modulus`.
    pub fn value(&self) -> u64 {
        self.value
    }

    /// The modulus of the ring this residue belongs to.
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    fn require_same_modulus(&self, other: &Self) -> Result<(), CommalgError> {
        if self.modulus == other.modulus {
            Ok(())
        } else {
            Err(CommalgError::TypeMismatch(
                ErrorInfo::new("modulus-mismatch", "residues belong to different rings")
                    .with_context("lhs_modulus", self.modulus.to_string())
                    .with_context("rhs_modulus", other.modulus.to_string()),
            ))
        }
    }
}

impl fmt::Display for Residue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (mod {})", self.value, self.modulus)
    }
}

impl Element for Residue {}

impl CommutativeMonoidElement for Residue {
    fn is_zero(&self) -> bool {
        self.value == 0
    }

    fn add_to(&self, other: &Self) -> Result<Self, CommalgError> {
        self.require_same_modulus(other)?;
        // Widen before the add: two representatives can sum past u64::MAX.
        let sum = (u128::from(self.value) + u128::from(other.value)) % u128::from(self.modulus);
        Ok(Self {
            value: sum as u64,
            modulus: self.modulus,
        })
    }
}

impl AbelianGroupElement for Residue {
    fn negative(&self) -> Result<Self, CommalgError> {
        Ok(Self {
            value: (self.modulus - self.value) % self.modulus,
            modulus: self.modulus,
        })
    }
}

impl CommutativeRingElement for Residue {
    fn is_one(&self) -> bool {
        // In the trivial ring (modulus 1) the one element coincides with zero.
        self.value == 1 % self.modulus
    }

    fn multiply_by(&self, other: &Self) -> Result<Self, CommalgError> {
        self.require_same_modulus(other)?;
        let product =
            (u128::from(self.value) * u128::from(other.value)) % u128::from(self.modulus);
        Ok(Self {
            value: product as u64,
            modulus: self.modulus,
        })
    }
}

/// Ring-level factory for residues with one fixed modulus per factory.
#[derive(Debug, Clone)]
pub struct ResidueFactory {
    modulus: u64,
    rng: RngHandle,
}

impl ResidueFactory {
    /// Builds a factory from a master seed for the ring modulo `modulus`.
    pub fn from_seed(seed: u64, modulus: u64) -> Result<Self, CommalgError> {
        if modulus == 0 {
            return Err(CommalgError::Construction(ErrorInfo::new(
                "zero-modulus",
                "modulus was set to be zero",
            )));
        }
        Ok(Self {
            modulus,
            rng: RngHandle::from_seed(derive_substream_seed(seed, RESIDUE_SUBSTREAM)),
        })
    }

    /// The modulus every produced element carries.
    pub fn modulus(&self) -> u64 {
        self.modulus
    }
}

impl ElementFactory for ResidueFactory {
    type Element = Residue;

    fn get_random(&mut self) -> Residue {
        let value = self.rng.inner_mut().gen_range(0..self.modulus);
        Residue {
            value,
            modulus: self.modulus,
        }
    }
}

impl CommutativeMonoidElementFactory for ResidueFactory {
    fn zero(&self) -> Residue {
        Residue {
            value: 0,
            modulus: self.modulus,
        }
    }
}

impl AbelianGroupElementFactory for ResidueFactory {}

impl CommutativeRingElementFactory for ResidueFactory {
    fn one(&self) -> Residue {
        Residue {
            value: 1 % self.modulus,
            modulus: self.modulus,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn res(value: u64, modulus: u64) -> Residue {
        Residue::new(value, modulus).unwrap()
    }

    #[test]
    fn construction_canonicalizes_the_representative() {
        assert_eq!(res(17, 5).value(), 2);
    }

    #[test]
    fn zero_modulus_is_a_construction_error() {
        assert!(matches!(
            Residue::new(3, 0).unwrap_err(),
            CommalgError::Construction(_)
        ));
    }

    #[test]
    fn arithmetic_wraps_around_the_modulus() {
        let a = res(4, 5);
        let b = res(3, 5);
        assert_eq!(a.add_to(&b).unwrap(), res(2, 5));
        assert_eq!(a.multiply_by(&b).unwrap(), res(2, 5));
        assert_eq!(a.negative().unwrap(), res(1, 5));
        assert_eq!(res(0, 5).negative().unwrap(), res(0, 5));
    }

    #[test]
    fn huge_representatives_do_not_wrap_u64() {
        let m = u64::MAX;
        let a = res(m - 1, m);
        let sum = a.add_to(&a).unwrap();
        assert_eq!(sum, res(m - 2, m));
    }

    #[test]
    fn mismatched_moduli_are_a_type_mismatch() {
        let err = res(1, 5).add_to(&res(1, 7)).unwrap_err();
        assert!(matches!(err, CommalgError::TypeMismatch(_)));
        assert_eq!(err.info().code, "modulus-mismatch");
        let err = res(1, 5).multiply_by(&res(1, 7)).unwrap_err();
        assert!(matches!(err, CommalgError::TypeMismatch(_)));
    }

    #[test]
    fn trivial_ring_identifies_zero_and_one() {
        let only = res(0, 1);
        assert!(only.is_zero());
        assert!(only.is_one());
    }
}
