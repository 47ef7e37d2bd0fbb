//! Big Number \
//! This crate provides:
//! - [`BigNumber`]: Unsigned integers of unbounded magnitude kept as decimal digits, with schoolbook
//!   addition, subtraction, multiplication, long division and exponentiation by squaring.
//! - [`BigNumError`]: The errors those operations report instead of wrapping or truncating.

mod big_number;
mod big_number_cache;
mod big_number_constants;
mod error;

pub use crate::big_number::BigNumber;
pub use crate::error::{BigNumError, ErrorKind, Result};

#[cfg(test)]
mod tests {
    use crate::{BigNumber, BigNumError, ErrorKind};
    use proptest::prelude::*;

    fn normalize(s: &str) -> String {
        let trimmed = s.trim_start_matches('0');
        if trimmed.is_empty() {
            String::from("0")
        } else {
            trimmed.to_string()
        }
    }

    #[test]
    fn it_works() {
        let a: BigNumber = "10000000000000".parse().unwrap();
        let b: BigNumber = "900000000000".parse().unwrap();
        println!("a = {}", a);
        println!("a + b = {}", &a + &b);
        println!("a - b = {}", &a - &b);
        println!("a * b = {}", &a * &b);
        println!("a / b = {}", &a / &b);
        println!("a % b = {}", &a % &b);
        println!("a ^ 5 = {}", a.pow_u32(5));
    }

    #[test]
    fn error_kinds() {
        let zero = BigNumber::zero();
        let five = BigNumber::from(5_u32);

        assert_eq!(five.checked_div(&zero).unwrap_err().kind(), ErrorKind::DivisionByZero);
        assert_eq!(five.checked_rem(&zero).unwrap_err().kind(), ErrorKind::DivisionByZero);
        assert_eq!(zero.clone().decrement().unwrap_err().kind(), ErrorKind::Underflow);
        assert_eq!(zero.checked_sub(&five).unwrap_err().kind(), ErrorKind::Underflow);
        assert_eq!(five.digit(1).unwrap_err().kind(), ErrorKind::Index);
        assert_eq!("5x".parse::<BigNumber>().unwrap_err().kind(), ErrorKind::Parse);
        assert_eq!("".parse::<BigNumber>(), Err(BigNumError::Empty));
    }

    #[test]
    fn factorial_of_fifty() {
        let f: BigNumber = (1_u32..=50).map(BigNumber::from).product();
        assert_eq!(
            f.to_string(),
            "30414093201713378043612608166064768844377641568960512000000000000"
        );
        // 50! has twelve trailing zeros
        let ten = BigNumber::from(10_u32);
        let mut g = f.clone();
        for _ in 0..12 {
            assert!(g.checked_rem(&ten).unwrap().is_zero());
            g /= &ten;
        }
        assert!(!g.checked_rem(&ten).unwrap().is_zero());
    }

    proptest! {
        #[test]
        fn round_trip(s in "[0-9]{1,60}") {
            let n: BigNumber = s.parse().unwrap();
            prop_assert_eq!(n.to_string(), normalize(&s));
        }

        #[test]
        fn add_mul_commute(a in "[0-9]{1,40}", b in "[0-9]{1,40}") {
            let a: BigNumber = a.parse().unwrap();
            let b: BigNumber = b.parse().unwrap();
            prop_assert_eq!(&a + &b, &b + &a);
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn identities(a in "[0-9]{1,40}") {
            let a: BigNumber = a.parse().unwrap();
            prop_assert_eq!(&a + &BigNumber::zero(), a.clone());
            prop_assert_eq!(&a * &BigNumber::one(), a.clone());
            prop_assert_eq!(&a * &BigNumber::zero(), BigNumber::zero());
            prop_assert_eq!(a.pow(&BigNumber::zero()), BigNumber::one());
            prop_assert_eq!(a.pow(&BigNumber::one()), a.clone());
        }

        #[test]
        fn div_rem_recombine(a in "[0-9]{1,50}", b in "[1-9][0-9]{0,25}") {
            let a: BigNumber = a.parse().unwrap();
            let b: BigNumber = b.parse().unwrap();
            let (q, r) = a.div_rem(&b).unwrap();
            prop_assert!(r < b);
            prop_assert_eq!(&q * &b + &r, a.clone());
            prop_assert_eq!(a.checked_div(&b).unwrap(), q);
            prop_assert_eq!(a.checked_rem(&b).unwrap(), r);
        }

        #[test]
        fn total_order(a in "[0-9]{1,20}", b in "[0-9]{1,20}") {
            let a: BigNumber = a.parse().unwrap();
            let b: BigNumber = b.parse().unwrap();
            let holds = [a < b, a == b, a > b];
            prop_assert_eq!(holds.iter().filter(|h| **h).count(), 1);
        }

        #[test]
        fn increment_then_decrement(a in "[0-9]{1,40}") {
            let a: BigNumber = a.parse().unwrap();
            let mut b = a.clone();
            b.increment();
            prop_assert!(b > a);
            b.decrement().unwrap();
            prop_assert_eq!(b, a);
        }

        #[test]
        fn matches_native(a in any::<u64>(), b in any::<u64>()) {
            let x = BigNumber::from(a);
            let y = BigNumber::from(b);
            prop_assert_eq!((&x + &y).to_string(), (a as u128 + b as u128).to_string());
            prop_assert_eq!((&x * &y).to_string(), (a as u128 * b as u128).to_string());
            prop_assert_eq!(x.cmp(&y), a.cmp(&b));
            match x.checked_sub(&y) {
                Ok(d) => prop_assert_eq!(d.to_u64(), Some(a - b)),
                Err(e) => {
                    prop_assert!(a < b);
                    prop_assert_eq!(e, BigNumError::Underflow);
                }
            }
            if b != 0 {
                prop_assert_eq!(x.checked_div(&y).unwrap().to_u64(), Some(a / b));
                prop_assert_eq!(x.checked_rem(&y).unwrap().to_u64(), Some(a % b));
            }
        }

        #[test]
        fn pow_matches_native(base in 0_u128..1000, exp in 0_u32..12) {
            let expected = base.pow(exp);
            prop_assert_eq!(BigNumber::from(base).pow_u32(exp), BigNumber::from(expected));
        }
    }
}
