use proptest::prelude::*;

use commalg_core::{AbelianGroupElement, CommutativeMonoidElement, CommutativeRingElement};
use commalg_elem::{gcd, Rational};

fn arb_rational() -> impl Strategy<Value = Rational> {
    (-1_000_000i64..1_000_000, 1i64..1_000_000)
        .prop_map(|(n, d)| Rational::new(n, d).unwrap())
}

proptest! {
    #[test]
    fn construction_yields_canonical_form(
        n in -1_000_000i64..1_000_000,
        d in -1_000_000_000i64..1_000_000_000,
    ) {
        prop_assume!(d != 0);
        let r = Rational::new(n, d).unwrap();
        prop_assert!(r.denominator() > 0);
        let shared = gcd(r.numerator(), r.denominator());
        prop_assert!(shared == 0 || shared == 1);
        if r.numerator() == 0 {
            prop_assert_eq!(r.denominator(), 1);
        }
    }
}

proptest! {
    #[test]
    fn scaling_by_k_is_invisible(n in -10_000i64..10_000, d in 1i64..10_000, k in 1i64..1_000) {
        let plain = Rational::new(n, d).unwrap();
        let scaled = Rational::new(k * n, k * d).unwrap();
        prop_assert_eq!(plain, scaled);
        let negatively_scaled = Rational::new(-k * n, -k * d).unwrap();
        prop_assert_eq!(plain, negatively_scaled);
    }
}

proptest! {
    #[test]
    fn reduction_is_idempotent(a in arb_rational()) {
        let again = Rational::new(a.numerator(), a.denominator()).unwrap();
        prop_assert_eq!(a, again);
    }
}

proptest! {
    #[test]
    fn addition_commutes(a in arb_rational(), b in arb_rational()) {
        prop_assert_eq!(a.add_to(&b).unwrap(), b.add_to(&a).unwrap());
    }
}

proptest! {
    #[test]
    fn multiplication_commutes(a in arb_rational(), b in arb_rational()) {
        prop_assert_eq!(a.multiply_by(&b).unwrap(), b.multiply_by(&a).unwrap());
    }
}

proptest! {
    #[test]
    fn negation_cancels(a in arb_rational()) {
        let sum = a.negative().unwrap().add_to(&a).unwrap();
        prop_assert!(sum.is_zero());
    }
}

proptest! {
    #[test]
    fn nonzero_inverse_multiplies_to_one(a in arb_rational()) {
        prop_assume!(!a.is_zero());
        use commalg_core::FieldElement;
        let inv = a.inverse().unwrap();
        prop_assert!(a.multiply_by(&inv).unwrap().is_one());
    }
}
