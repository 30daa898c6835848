#![deny(missing_docs)]
#![doc = "Capability contracts for commutative algebraic structures and the factories that sample them."]

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod errors;
pub mod rng;

pub use errors::{CommalgError, ErrorInfo};
pub use rng::{derive_substream_seed, RngHandle};

/// A value living in some set, with total equality and a readable rendering.
///
/// Implementations are immutable values: every operation on the richer
/// contracts below constructs a fresh element rather than mutating in place.
/// Elements are plain owned data, hence the `'static` bound; it lets the
/// axiom engine store boxed predicates over them.
pub trait Element: Clone + PartialEq + fmt::Debug + fmt::Display + 'static {}

/// An element of a commutative monoid.
///
/// Implementations are expected to satisfy, for all `a`, `b`, `c`:
/// - commutativity: `a.add_to(b) == b.add_to(a)`
/// - associativity: `a.add_to(b).add_to(c) == a.add_to(b.add_to(c))`
/// - identity: there is a `zero` with `zero.is_zero()` and
///   `a.add_to(zero) == a`
///
/// The contract cannot check these laws by itself; running the axiom suite
/// against the type's factory gathers randomized evidence for them.
pub trait CommutativeMonoidElement: Element {
    /// Recognizes the additive identity.
    fn is_zero(&self) -> bool;

    /// Monoid addition. Fails with [`CommalgError::Overflow`] when the exact
    /// sum is not representable and with [`CommalgError::TypeMismatch`] when
    /// the two elements belong to incompatible runtime variants.
    fn add_to(&self, other: &Self) -> Result<Self, CommalgError>;
}

/// An element of an abelian group: a commutative monoid with negatives.
pub trait AbelianGroupElement: CommutativeMonoidElement {
    /// Additive inverse. Fails with [`CommalgError::Overflow`] for boundary
    /// values whose negation is not representable.
    fn negative(&self) -> Result<Self, CommalgError>;
}

/// An element of a commutative ring: an abelian group with a commutative,
/// associative multiplication and a multiplicative identity.
pub trait CommutativeRingElement: AbelianGroupElement {
    /// Recognizes the multiplicative identity.
    fn is_one(&self) -> bool;

    /// Ring multiplication. Failure modes match
    /// [`CommutativeMonoidElement::add_to`].
    fn multiply_by(&self, other: &Self) -> Result<Self, CommalgError>;
}

/// An element of a field: a commutative ring where every nonzero element has
/// a multiplicative inverse.
pub trait FieldElement: CommutativeRingElement {
    /// Multiplicative inverse. The operation is partial: inverting zero is
    /// a [`CommalgError::Construction`] error. Axiom checks that need a
    /// total statement special-case zero before calling this.
    fn inverse(&self) -> Result<Self, CommalgError>;
}

/// Nested algebraic structure levels, ordered by inclusion.
///
/// `Monoid < Group < Ring < Field`: a suite run at a given level executes
/// the axiom tests of every level up to and including it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum StructureLevel {
    /// Commutative monoid: addition with identity.
    Monoid,
    /// Abelian group: adds negatives.
    Group,
    /// Commutative ring: adds multiplication with identity.
    Ring,
    /// Field: adds multiplicative inverses.
    Field,
}

impl StructureLevel {
    /// Stable lower-case label used in reports and serialized payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            StructureLevel::Monoid => "monoid",
            StructureLevel::Group => "group",
            StructureLevel::Ring => "ring",
            StructureLevel::Field => "field",
        }
    }
}

impl fmt::Display for StructureLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Produces random elements of one concrete type.
///
/// The distribution is implementation-defined but must reach the
/// distinguished identity values and (where the structure has them) negative
/// values with nonzero probability, so axiom tests have a chance to find
/// counterexamples. Factories own their randomness source; the engine only
/// ever asks for the next element.
pub trait ElementFactory {
    /// Concrete element type produced by this factory.
    type Element: Element;

    /// Draws a fresh random element.
    fn get_random(&mut self) -> Self::Element;
}

/// Factory for a commutative monoid: also knows the structure's zero.
pub trait CommutativeMonoidElementFactory: ElementFactory
where
    Self::Element: CommutativeMonoidElement,
{
    /// Returns the claimed additive identity.
    fn zero(&self) -> Self::Element;
}

/// Factory for an abelian group. Adds no operations: negatives live on the
/// element contract. The marker keeps the factory hierarchy aligned with the
/// element hierarchy.
pub trait AbelianGroupElementFactory: CommutativeMonoidElementFactory
where
    Self::Element: AbelianGroupElement,
{
}

/// Factory for a commutative ring: also knows the structure's one.
pub trait CommutativeRingElementFactory: AbelianGroupElementFactory
where
    Self::Element: CommutativeRingElement,
{
    /// Returns the claimed multiplicative identity.
    fn one(&self) -> Self::Element;
}

/// Factory for a field. Inversion lives on the element contract.
pub trait FieldElementFactory: CommutativeRingElementFactory
where
    Self::Element: FieldElement,
{
}
