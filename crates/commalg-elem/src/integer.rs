//! The integers as a commutative ring, with checked `i64` arithmetic.

use std::fmt;

use rand::Rng;

use commalg_core::{
    derive_substream_seed, AbelianGroupElement, AbelianGroupElementFactory, CommalgError,
    CommutativeMonoidElement, CommutativeMonoidElementFactory, CommutativeRingElement,
    CommutativeRingElementFactory, Element, ElementFactory, ErrorInfo, RngHandle,
};

/// Substream slot occupied by [`IntegerFactory`] when deriving its seed.
const INTEGER_SUBSTREAM: u64 = 2;

/// An integer, as an element of the ring Z.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Integer {
    value: i64,
}

impl Integer {
    /// The additive identity.
    pub const ZERO: Integer = Integer { value: 0 };

    /// The multiplicative identity.
    pub const ONE: Integer = Integer { value: 1 };

    /// Wraps a raw value. Every `i64` is a valid integer element.
    pub fn new(value: i64) -> Self {
        Self { value }
    }

    /// Returns the underlying value.
    pub fn value(&self) -> i64 {
        self.value
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl Element for Integer {}

impl CommutativeMonoidElement for Integer {
    fn is_zero(&self) -> bool {
        self.value == 0
    }

    fn add_to(&self, other: &Self) -> Result<Self, CommalgError> {
        self.value
            .checked_add(other.value)
            .map(Integer::new)
            .ok_or_else(|| overflow_error("add", self.value, other.value))
    }
}

impl AbelianGroupElement for Integer {
    fn negative(&self) -> Result<Self, CommalgError> {
        self.value
            .checked_neg()
            .map(Integer::new)
            .ok_or_else(|| overflow_error("negate", self.value, -1))
    }
}

impl CommutativeRingElement for Integer {
    fn is_one(&self) -> bool {
        self.value == 1
    }

    fn multiply_by(&self, other: &Self) -> Result<Self, CommalgError> {
        self.value
            .checked_mul(other.value)
            .map(Integer::new)
            .ok_or_else(|| overflow_error("mul", self.value, other.value))
    }
}

fn overflow_error(op: &str, lhs: i64, rhs: i64) -> CommalgError {
    CommalgError::Overflow(
        ErrorInfo::new(
            "i64-overflow",
            "computation resulted in an integer that does not fit in an i64",
        )
        .with_context("op", op)
        .with_context("lhs", lhs.to_string())
        .with_context("rhs", rhs.to_string()),
    )
}

/// Magnitude bound for random draws. Associativity trials multiply three
/// elements, so the bound keeps triple products inside `i64`.
const MAX_DRAW: i64 = 1 << 20;

/// Ring-level factory drawing integers from a bounded range.
///
/// Draws stay within `±2^20` so that sums and products of any three random
/// elements remain representable in `i64` and suite runs never trip the
/// overflow guard by accident.
#[derive(Debug, Clone)]
pub struct IntegerFactory {
    rng: RngHandle,
}

impl IntegerFactory {
    /// Builds a factory from a master seed, on its own substream slot.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: RngHandle::from_seed(derive_substream_seed(seed, INTEGER_SUBSTREAM)),
        }
    }
}

impl ElementFactory for IntegerFactory {
    type Element = Integer;

    fn get_random(&mut self) -> Integer {
        Integer::new(self.rng.inner_mut().gen_range(-MAX_DRAW..MAX_DRAW))
    }
}

impl CommutativeMonoidElementFactory for IntegerFactory {
    fn zero(&self) -> Integer {
        Integer::ZERO
    }
}

impl AbelianGroupElementFactory for IntegerFactory {}

impl CommutativeRingElementFactory for IntegerFactory {
    fn one(&self) -> Integer {
        Integer::ONE
    }
}
