//! Compile-surface check: a minimal type can implement the whole hierarchy
//! and a field-level element is usable wherever a monoid-level one is
//! expected.

use std::fmt;

use commalg_core::{
    AbelianGroupElement, CommalgError, CommutativeMonoidElement, CommutativeRingElement, Element,
    FieldElement,
};

/// Two-element field {0, 1} with addition mod 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Bit(bool);

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", u8::from(self.0))
    }
}

impl Element for Bit {}

impl CommutativeMonoidElement for Bit {
    fn is_zero(&self) -> bool {
        !self.0
    }

    fn add_to(&self, other: &Self) -> Result<Self, CommalgError> {
        Ok(Bit(self.0 ^ other.0))
    }
}

impl AbelianGroupElement for Bit {
    fn negative(&self) -> Result<Self, CommalgError> {
        Ok(*self)
    }
}

impl CommutativeRingElement for Bit {
    fn is_one(&self) -> bool {
        self.0
    }

    fn multiply_by(&self, other: &Self) -> Result<Self, CommalgError> {
        Ok(Bit(self.0 & other.0))
    }
}

impl FieldElement for Bit {
    fn inverse(&self) -> Result<Self, CommalgError> {
        // 1 is its own inverse; inverting 0 would be a construction error in
        // a real element type, but GF(2) tests never reach it through the
        // zero-guarded axiom predicate.
        Ok(*self)
    }
}

fn sum_with_zero<E: CommutativeMonoidElement>(a: &E, zero: &E) -> Result<E, CommalgError> {
    a.add_to(zero)
}

#[test]
fn field_element_satisfies_monoid_contract() {
    let one = Bit(true);
    let zero = Bit(false);
    let sum = sum_with_zero(&one, &zero).unwrap();
    assert_eq!(sum, one);
}

#[test]
fn gf2_laws_hold_pointwise() {
    let zero = Bit(false);
    let one = Bit(true);
    assert!(zero.is_zero());
    assert!(one.is_one());
    assert_eq!(one.add_to(&one).unwrap(), zero);
    assert_eq!(one.multiply_by(&one).unwrap(), one);
    assert_eq!(one.inverse().unwrap(), one);
}
