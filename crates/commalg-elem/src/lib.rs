#![deny(missing_docs)]
#![doc = "Concrete element types, and the seeded factories that sample them, for the commalg axiom checker."]

/// The integers as a commutative ring with checked arithmetic.
pub mod integer;
/// The natural numbers as a commutative monoid.
pub mod natural;
/// Exact rationals in canonical reduced form, the field-level worked example.
pub mod rational;
/// Integers modulo a runtime modulus; exercises the variant-mismatch path.
pub mod residue;

pub use integer::{Integer, IntegerFactory};
pub use natural::{Natural, NaturalFactory};
pub use rational::{gcd, lcm, Rational, RationalFactory};
pub use residue::{Residue, ResidueFactory};
