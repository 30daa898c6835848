//! Exact rational numbers kept in canonical reduced form.
//!
//! Every instance satisfies two invariants, restored at each construction:
//! the denominator is strictly positive, and numerator and denominator are
//! coprime (with `0` always represented as `0/1`). Equality is therefore
//! plain structural equality on the two fields; it must never be weakened to
//! cross-multiplication equivalence, because that would silently tolerate
//! non-canonical instances.

use std::fmt;

use rand::Rng;

use commalg_core::{
    derive_substream_seed, AbelianGroupElement, AbelianGroupElementFactory, CommalgError,
    CommutativeMonoidElement, CommutativeMonoidElementFactory, CommutativeRingElement,
    CommutativeRingElementFactory, Element, ElementFactory, ErrorInfo, FieldElement,
    FieldElementFactory, RngHandle,
};

/// Substream slot occupied by [`RationalFactory`] when deriving its seed.
const RATIONAL_SUBSTREAM: u64 = 1;

/// Magnitude bound for randomly drawn numerators and denominators. Small on
/// purpose: identities and repeated values must come up often enough for the
/// axiom tests to exercise them.
const MAX_MAGNITUDE: i64 = 20;

/// An exact rational number over `i64`, always reduced and sign-normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rational {
    numerator: i64,
    denominator: i64,
}

impl Rational {
    /// The additive identity, `0/1`.
    pub const ZERO: Rational = Rational {
        numerator: 0,
        denominator: 1,
    };

    /// The multiplicative identity, `1/1`.
    pub const ONE: Rational = Rational {
        numerator: 1,
        denominator: 1,
    };

    /// Builds the canonical representation of `numerator/denominator`.
    ///
    /// The fraction is reduced by `gcd(|numerator|, |denominator|)` and the
    /// denominator forced positive by negating both parts if needed. A zero
    /// denominator is a [`CommalgError::Construction`] error. Normalization
    /// runs in `i128`, so boundary inputs such as `1/i64::MIN` surface
    /// [`CommalgError::Overflow`] instead of wrapping.
    pub fn new(numerator: i64, denominator: i64) -> Result<Self, CommalgError> {
        if denominator == 0 {
            return Err(CommalgError::Construction(
                ErrorInfo::new("zero-denominator", "denominator was set to be zero")
                    .with_context("numerator", numerator.to_string())
                    .with_hint("supply a nonzero denominator"),
            ));
        }
        if numerator == 0 {
            return Ok(Rational::ZERO);
        }
        let shared = gcd(numerator, denominator) as i128;
        let mut num = numerator as i128 / shared;
        let mut den = denominator as i128 / shared;
        if den < 0 {
            num = -num;
            den = -den;
        }
        let numerator = i64::try_from(num)
            .map_err(|_| overflow_error("normalize", numerator, denominator))?;
        let denominator = i64::try_from(den)
            .map_err(|_| overflow_error("normalize", numerator, denominator))?;
        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// Numerator of the canonical form. Zero only for the zero element.
    pub fn numerator(&self) -> i64 {
        self.numerator
    }

    /// Denominator of the canonical form. Always strictly positive.
    pub fn denominator(&self) -> i64 {
        self.denominator
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The denominator is guaranteed positive, so the sign always sits on
        // the numerator.
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl Element for Rational {}

impl CommutativeMonoidElement for Rational {
    fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    /// Adds over the least common denominator.
    ///
    /// Naive cross-multiplication (`a*d + c*b` over `b*d`) overflows sooner
    /// than necessary; scaling each numerator by `lcm/denominator` reduces
    /// the risk but does not remove it, so every multiply and the final add
    /// stay checked.
    fn add_to(&self, other: &Self) -> Result<Self, CommalgError> {
        let common = lcm(self.denominator, other.denominator)?;
        let left = self
            .numerator
            .checked_mul(common / self.denominator)
            .ok_or_else(|| overflow_error("add-scale", self.numerator, common))?;
        let right = other
            .numerator
            .checked_mul(common / other.denominator)
            .ok_or_else(|| overflow_error("add-scale", other.numerator, common))?;
        let sum = left
            .checked_add(right)
            .ok_or_else(|| overflow_error("add", left, right))?;
        Rational::new(sum, common)
    }
}

impl AbelianGroupElement for Rational {
    fn negative(&self) -> Result<Self, CommalgError> {
        let negated = self
            .numerator
            .checked_neg()
            .ok_or_else(|| overflow_error("negate", self.numerator, self.denominator))?;
        Rational::new(negated, self.denominator)
    }
}

impl CommutativeRingElement for Rational {
    fn is_one(&self) -> bool {
        self.numerator == 1 && self.denominator == 1
    }

    /// Multiplies after cross-cancelling shared factors.
    ///
    /// Each numerator is reduced against the other operand's denominator
    /// before the multiplies, which keeps intermediates as small as the
    /// final result allows. Overflow is still possible and still checked.
    fn multiply_by(&self, other: &Self) -> Result<Self, CommalgError> {
        let mut num1 = self.numerator;
        let mut den2 = other.denominator;
        let shared = gcd(num1, den2) as i64;
        num1 /= shared;
        den2 /= shared;

        let mut num2 = other.numerator;
        let mut den1 = self.denominator;
        let shared = gcd(num2, den1) as i64;
        num2 /= shared;
        den1 /= shared;

        let numerator = num1
            .checked_mul(num2)
            .ok_or_else(|| overflow_error("mul", num1, num2))?;
        let denominator = den1
            .checked_mul(den2)
            .ok_or_else(|| overflow_error("mul", den1, den2))?;
        Rational::new(numerator, denominator)
    }
}

impl FieldElement for Rational {
    /// Swaps numerator and denominator and re-normalizes.
    ///
    /// Inverting zero hands a zero denominator to [`Rational::new`] and
    /// fails with the same construction error; the multiplicative-inverse
    /// axiom check special-cases zero before calling this.
    fn inverse(&self) -> Result<Self, CommalgError> {
        Rational::new(self.denominator, self.numerator)
    }
}

/// Greatest common divisor by the Euclidean algorithm on absolute values.
///
/// Always nonnegative, and `gcd(0, 0) == 0` by convention. Computed in `u64`
/// so `i64::MIN` operands are handled exactly.
pub fn gcd(a: i64, b: i64) -> u64 {
    let mut a = a.unsigned_abs();
    let mut b = b.unsigned_abs();
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}

/// Least common multiple, as `(a / gcd(a, b)) * b` on magnitudes.
///
/// The lcm of any number and zero is treated as undefined here, not as
/// zero: a zero argument is a [`CommalgError::Undefined`] error. The result
/// is positive; a value beyond `i64::MAX` is [`CommalgError::Overflow`].
pub fn lcm(a: i64, b: i64) -> Result<i64, CommalgError> {
    if a == 0 || b == 0 {
        return Err(CommalgError::Undefined(
            ErrorInfo::new("lcm-zero", "the lcm of a number and zero is undefined")
                .with_context("lhs", a.to_string())
                .with_context("rhs", b.to_string()),
        ));
    }
    let shared = gcd(a, b);
    let magnitude = (a.unsigned_abs() / shared)
        .checked_mul(b.unsigned_abs())
        .ok_or_else(|| overflow_error("lcm", a, b))?;
    i64::try_from(magnitude).map_err(|_| overflow_error("lcm", a, b))
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

/// Field-level factory drawing small random rationals.
///
/// Numerators come from `[-20, 20)` and denominators from `[1, 20)`, so the
/// stream reaches zero, one, and negative values with healthy probability
/// and suite runs stay far away from `i64` overflow.
#[derive(Debug, Clone)]
pub struct RationalFactory {
    rng: RngHandle,
}

impl RationalFactory {
    /// Builds a factory from a master seed, on its own substream slot.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: RngHandle::from_seed(derive_substream_seed(seed, RATIONAL_SUBSTREAM)),
        }
    }
}

impl ElementFactory for RationalFactory {
    type Element = Rational;

    fn get_random(&mut self) -> Rational {
        let numerator = self.rng.inner_mut().gen_range(-MAX_MAGNITUDE..MAX_MAGNITUDE);
        let denominator = self.rng.inner_mut().gen_range(1..MAX_MAGNITUDE);
        Rational::new(numerator, denominator)
            .expect("denominator drawn from 1..MAX_MAGNITUDE is nonzero")
    }
}

impl CommutativeMonoidElementFactory for RationalFactory {
    fn zero(&self) -> Rational {
        Rational::ZERO
    }
}

impl AbelianGroupElementFactory for RationalFactory {}

impl CommutativeRingElementFactory for RationalFactory {
    fn one(&self) -> Rational {
        Rational::ONE
    }
}

impl FieldElementFactory for RationalFactory {}
