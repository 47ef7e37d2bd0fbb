//! # BigNumber
//! Unsigned integers of unbounded magnitude, stored as decimal digits.
//! Every value is kept in canonical form: at least one digit, no leading zero
//! unless the value is zero itself.
//! # Example
//! ```
//! use big_number::BigNumber;
//!
//! let a: BigNumber = "10000000000000".parse().unwrap();
//! let b: BigNumber = "900000000000".parse().unwrap();
//! println!("a = {}", a);
//! println!("a + b = {}", &a + &b);
//! println!("a - b = {}", a.checked_sub(&b).unwrap());
//! println!("a * b = {}", &a * &b);
//! println!("a / b = {}", a.checked_div(&b).unwrap());
//! println!("a % b = {}", a.checked_rem(&b).unwrap());
//! println!("a ^ 3 = {}", a.pow_u32(3));
//! ```
//!

use std::fmt::{self, Display};
use std::iter::{Product, Sum};
use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Div, DivAssign,
    Rem, RemAssign,
    Index,
};
use std::cmp::Ordering;
use std::str::FromStr;

use log::trace;

use crate::big_number_constants::*;
use crate::big_number_cache::*;
use crate::error::{BigNumError, Result};

macro_rules! strip_leading_zero {
    ($vec: expr) => {
        {
            while $vec.len() > 1 && $vec.last() == Some(&0) {
                $vec.pop();
            }
        }
    };
}

macro_rules! debug_check_canonical {
    ($num: expr) => {
        debug_assert!($num.is_canonical(), "non-canonical digits: {:?}", $num.digits);
    };
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigNumber {
    /// least significant digit first
    digits: Vec<u8>,
}

// 实现构造
impl BigNumber {
    pub(crate) fn from_raw(digits: Vec<u8>) -> Self {
        BigNumber { digits }
    }
    pub fn zero() -> Self {
        SMALL_CACHE[0].clone()
    }
    pub fn one() -> Self {
        SMALL_CACHE[1].clone()
    }
    fn value_of(mut val: u128) -> BigNumber {
        if val <= MAX_CONSTANT as u128 {
            return SMALL_CACHE[val as usize].clone();
        }
        let radix = RADIX as u128;
        let mut digits = Vec::with_capacity(MAX_NATIVE_DIGITS);
        while val != 0 {
            digits.push((val % radix) as u8);
            val /= radix;
        }
        BigNumber::from_raw(digits)
    }
    fn is_canonical(&self) -> bool {
        !self.digits.is_empty() &&
        self.digits.iter().all(|d| (*d as u32) < RADIX) &&
        (self.digits.len() == 1 || self.digits.last() != Some(&0))
    }
}

impl Default for BigNumber {
    fn default() -> Self {
        BigNumber::zero()
    }
}

macro_rules! impl_unsigned_to_big_number {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigNumber {
        fn from(val: $u) -> Self {
            BigNumber::value_of(val as u128)
        }
    }
    )*
    };
}
impl_unsigned_to_big_number!(u8, u16, u32, usize, u64, u128);

// 实现解析
impl BigNumber {
    /// Parses a string of ASCII decimal digits. Redundant leading zeros are
    /// dropped, so `"007"` parses to the same value as `"7"`.
    ///
    /// The string is scanned from its last character to its first; the error
    /// names the first offending character met in that order.
    pub fn parse(val: &str) -> Result<BigNumber> {
        if val.is_empty() {
            return Err(BigNumError::Empty);
        }
        let mut digits = Vec::with_capacity(val.len());
        for (index, c) in val.char_indices().rev() {
            match c.to_digit(RADIX) {
                Some(d) => digits.push(d as u8),
                None => return Err(BigNumError::InvalidDigit { found: c, index }),
            }
        }
        strip_leading_zero!(digits);
        let num = BigNumber::from_raw(digits);
        debug_check_canonical!(num);
        Ok(num)
    }
}

impl FromStr for BigNumber {
    type Err = BigNumError;

    fn from_str(s: &str) -> Result<Self> {
        BigNumber::parse(s)
    }
}

impl TryFrom<&str> for BigNumber {
    type Error = BigNumError;

    fn try_from(val: &str) -> Result<Self> {
        BigNumber::parse(val)
    }
}

impl TryFrom<String> for BigNumber {
    type Error = BigNumError;

    fn try_from(val: String) -> Result<Self> {
        BigNumber::parse(&val)
    }
}

// 实现打印
impl Display for BigNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: String = self.digits
            .iter()
            .rev()
            .map(|d| DIGITS[*d as usize])
            .collect();
        f.pad(&s)
    }
}

// 杂项辅助函数
impl BigNumber {
    /// Number of decimal digits. Zero has one digit.
    pub fn len(&self) -> usize {
        self.digits.len()
    }
    pub fn is_zero(&self) -> bool {
        self.digits.len() == 1 && self.digits[0] == 0
    }
    pub fn is_one(&self) -> bool {
        self.digits.len() == 1 && self.digits[0] == 1
    }
    pub fn is_even(&self) -> bool {
        self.digits[0] % 2 == 0
    }
    pub fn is_odd(&self) -> bool {
        !self.is_even()
    }
    /// The digit at `index`, where index 0 is the least significant digit.
    pub fn digit(&self, index: usize) -> Result<u8> {
        self.digits
            .get(index)
            .copied()
            .ok_or(BigNumError::IndexOutOfRange { index, len: self.digits.len() })
    }
    /// Iterates the digits, least significant first.
    pub fn digits(&self) -> impl Iterator<Item = u8> + '_ {
        self.digits.iter().copied()
    }
    /// Returns `None` when the value does not fit in a `u64`.
    pub fn to_u64(&self) -> Option<u64> {
        self.digits
            .iter()
            .rev()
            .try_fold(0_u64, |acc, d| acc.checked_mul(RADIX as u64)?.checked_add(*d as u64))
    }
    /// Shifts one decimal place left and brings `d` in as the new lowest digit.
    fn push_low_digit(&mut self, d: u8) {
        if self.is_zero() {
            self.digits[0] = d;
        } else {
            self.digits.insert(0, d);
        }
    }
}

impl Index<usize> for BigNumber {
    type Output = u8;

    /// # Panics
    /// Panics when `index >= self.len()`; see [`BigNumber::digit`] for the
    /// fallible form.
    fn index(&self, index: usize) -> &u8 {
        match self.digits.get(index) {
            Some(d) => d,
            None => panic!("{}", BigNumError::IndexOutOfRange { index, len: self.digits.len() }),
        }
    }
}

// 实现大小比较
impl BigNumber {
    fn compare_digits(&self, other: &BigNumber) -> Ordering {
        let self_len = self.digits.len();
        let other_len = other.digits.len();

        if self_len != other_len {
            return self_len.cmp(&other_len);
        }

        for (a, b) in self.digits.iter().rev().zip(other.digits.iter().rev()) {
            if a != b {
                return a.cmp(b);
            }
        }

        Ordering::Equal
    }
}

impl PartialOrd for BigNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare_digits(other)
    }
}

// 实现自增自减
impl BigNumber {
    pub fn increment(&mut self) -> &mut Self {
        let n = self.digits.len();
        let mut i = 0;
        while i < n && self.digits[i] == 9 {
            self.digits[i] = 0;
            i += 1;
        }
        if i == n {
            self.digits.push(1);
        } else {
            self.digits[i] += 1;
        }
        debug_check_canonical!(self);
        self
    }
    /// Increments in place and returns the value held before.
    pub fn post_increment(&mut self) -> BigNumber {
        let prior = self.clone();
        self.increment();
        prior
    }
    /// Fails with [`BigNumError::Underflow`] on zero, leaving `self` untouched.
    pub fn decrement(&mut self) -> Result<&mut Self> {
        if self.is_zero() {
            return Err(BigNumError::Underflow);
        }
        // a canonical non-zero value has a non-zero top digit, so the scan stops
        let mut i = 0;
        while self.digits[i] == 0 {
            self.digits[i] = 9;
            i += 1;
        }
        self.digits[i] -= 1;
        strip_leading_zero!(self.digits);
        debug_check_canonical!(self);
        Ok(self)
    }
    pub fn post_decrement(&mut self) -> Result<BigNumber> {
        let prior = self.clone();
        self.decrement()?;
        Ok(prior)
    }
}

// 实现加法
impl BigNumber {
    fn add_digits(&mut self, y: &[u8]) {
        if y.len() > self.digits.len() {
            self.digits.resize(y.len(), 0);
        }

        let mut carry = 0_u8;
        for (i, x) in self.digits.iter_mut().enumerate() {
            if i >= y.len() && carry == 0 {
                break;
            }
            let sum = *x + y.get(i).copied().unwrap_or(0) + carry;
            *x = sum % 10;
            carry = sum / 10;
        }

        if carry != 0 {
            self.digits.push(carry);
        }
    }
    /// In-place addition returning `self` for chaining.
    pub fn add_mut(&mut self, rhs: &BigNumber) -> &mut Self {
        *self += rhs;
        self
    }
}

impl AddAssign<&BigNumber> for BigNumber {
    fn add_assign(&mut self, rhs: &BigNumber) {
        self.add_digits(&rhs.digits);
        debug_check_canonical!(self);
    }
}

// 实现减法
impl BigNumber {
    /// Requires `self >= y`.
    fn sub_digits(&mut self, y: &[u8]) {
        let mut borrow = 0_i8;
        for (i, x) in self.digits.iter_mut().enumerate() {
            if i >= y.len() && borrow == 0 {
                break;
            }
            let mut diff = *x as i8 - y.get(i).copied().unwrap_or(0) as i8 - borrow;
            if diff < 0 {
                diff += 10;
                borrow = 1;
            } else {
                borrow = 0;
            }
            *x = diff as u8;
        }
        debug_assert_eq!(borrow, 0);
        strip_leading_zero!(self.digits);
    }
    /// Subtracts in place. Fails with [`BigNumError::Underflow`] when
    /// `self < rhs`, leaving `self` untouched.
    pub fn try_sub_assign(&mut self, rhs: &BigNumber) -> Result<&mut Self> {
        if *self < *rhs {
            return Err(BigNumError::Underflow);
        }
        self.sub_digits(&rhs.digits);
        debug_check_canonical!(self);
        Ok(self)
    }
    pub fn checked_sub(&self, rhs: &BigNumber) -> Result<BigNumber> {
        if *self < *rhs {
            return Err(BigNumError::Underflow);
        }
        let mut result = self.clone();
        result.sub_digits(&rhs.digits);
        Ok(result)
    }
}

impl SubAssign<&BigNumber> for BigNumber {
    /// # Panics
    /// Panics when `rhs > self`.
    fn sub_assign(&mut self, rhs: &BigNumber) {
        if let Err(err) = self.try_sub_assign(rhs) {
            panic!("attempt to subtract: {}", err);
        }
    }
}

// 实现乘法
impl BigNumber {
    fn mul_digits(x: &[u8], y: &[u8]) -> Vec<u8> {
        let n = x.len();
        let m = y.len();
        let mut v = vec![0_u64; n + m];

        for (i, a) in x.iter().enumerate() {
            if *a == 0 {
                continue;
            }
            for (j, b) in y.iter().enumerate() {
                v[i + j] += (*a as u64) * (*b as u64);
            }
        }

        let mut carry = 0_u64;
        let mut digits = Vec::with_capacity(n + m);
        for val in v {
            let sum = val + carry;
            digits.push((sum % 10) as u8);
            carry = sum / 10;
        }
        debug_assert_eq!(carry, 0);

        strip_leading_zero!(digits);
        digits
    }
    /// In-place multiplication returning `self` for chaining.
    pub fn mul_mut(&mut self, rhs: &BigNumber) -> &mut Self {
        *self *= rhs;
        self
    }
    pub fn square(&self) -> BigNumber {
        self * self
    }
}

impl MulAssign<&BigNumber> for BigNumber {
    fn mul_assign(&mut self, rhs: &BigNumber) {
        if self.is_zero() || rhs.is_zero() {
            *self = BigNumber::zero();
            return;
        }
        self.digits = BigNumber::mul_digits(&self.digits, &rhs.digits);
        debug_check_canonical!(self);
    }
}

// 实现除法与求余
impl BigNumber {
    /// Schoolbook long division. Requires `self > divisor > 0`.
    fn long_divide(&self, divisor: &BigNumber) -> (BigNumber, BigNumber) {
        trace!("long division: {} digit(s) by {} digit(s)", self.len(), divisor.len());

        // multiples[k] == k * divisor
        let mut multiples = Vec::with_capacity(RADIX as usize);
        multiples.push(BigNumber::zero());
        for k in 1..RADIX as usize {
            let mut next = multiples[k - 1].clone();
            next += divisor;
            multiples.push(next);
        }

        let mut t = BigNumber::zero();
        let mut quotient = Vec::with_capacity(self.len() - divisor.len() + 1);
        for d in self.digits.iter().rev() {
            t.push_low_digit(*d);
            if quotient.is_empty() && t < *divisor {
                continue;
            }
            let mut count = 9;
            while multiples[count] > t {
                count -= 1;
            }
            t.sub_digits(&multiples[count].digits);
            quotient.push(count as u8);
        }

        quotient.reverse();
        let quotient = BigNumber::from_raw(quotient);
        debug_check_canonical!(quotient);
        debug_check_canonical!(t);
        (quotient, t)
    }
    /// Quotient and remainder from a single scan.
    pub fn div_rem(&self, divisor: &BigNumber) -> Result<(BigNumber, BigNumber)> {
        if divisor.is_zero() {
            return Err(BigNumError::DivisionByZero);
        }
        match self.cmp(divisor) {
            Ordering::Less => Ok((BigNumber::zero(), self.clone())),
            Ordering::Equal => Ok((BigNumber::one(), BigNumber::zero())),
            Ordering::Greater => Ok(self.long_divide(divisor)),
        }
    }
    pub fn checked_div(&self, divisor: &BigNumber) -> Result<BigNumber> {
        self.div_rem(divisor).map(|(q, _)| q)
    }
    pub fn checked_rem(&self, divisor: &BigNumber) -> Result<BigNumber> {
        self.div_rem(divisor).map(|(_, r)| r)
    }
    pub fn try_div_assign(&mut self, divisor: &BigNumber) -> Result<&mut Self> {
        *self = self.checked_div(divisor)?;
        Ok(self)
    }
    pub fn try_rem_assign(&mut self, divisor: &BigNumber) -> Result<&mut Self> {
        *self = self.checked_rem(divisor)?;
        Ok(self)
    }
}

impl DivAssign<&BigNumber> for BigNumber {
    /// # Panics
    /// Panics when `rhs` is zero.
    fn div_assign(&mut self, rhs: &BigNumber) {
        if let Err(err) = self.try_div_assign(rhs) {
            panic!("attempt to divide: {}", err);
        }
    }
}

impl RemAssign<&BigNumber> for BigNumber {
    /// # Panics
    /// Panics when `rhs` is zero.
    fn rem_assign(&mut self, rhs: &BigNumber) {
        if let Err(err) = self.try_rem_assign(rhs) {
            panic!("attempt to calculate the remainder: {}", err);
        }
    }
}

// 实现乘方
impl BigNumber {
    /// Integer division by two, in place.
    pub fn halve(&mut self) -> &mut Self {
        let mut carry = 0_u8;
        for x in self.digits.iter_mut().rev() {
            let cur = carry * 10 + *x;
            *x = cur / 2;
            carry = cur % 2;
        }
        strip_leading_zero!(self.digits);
        debug_check_canonical!(self);
        self
    }
    /// Exponentiation by squaring. `0 ^ 0` is one.
    pub fn pow(&self, exponent: &BigNumber) -> BigNumber {
        let mut result = BigNumber::one();
        let mut base = self.clone();
        let mut exp = exponent.clone();
        let mut rounds = 0_usize;

        while !exp.is_zero() {
            if exp.is_odd() {
                result *= &base;
            }
            exp.halve();
            if !exp.is_zero() {
                base = base.square();
            }
            rounds += 1;
        }

        trace!("pow: {} squaring round(s), {} digit(s) in result", rounds, result.len());
        result
    }
    pub fn pow_u32(&self, exponent: u32) -> BigNumber {
        self.pow(&BigNumber::from(exponent))
    }
    pub fn pow_assign(&mut self, exponent: &BigNumber) -> &mut Self {
        *self = self.pow(exponent);
        self
    }
}

// 由 `op=` 派生其余运算符
macro_rules! forward_binop {
    ($($imp: ident, $method: ident, $imp_assign: ident, $method_assign: ident);* $(;)?) => {
    $(
    impl $imp_assign for BigNumber {
        fn $method_assign(&mut self, rhs: BigNumber) {
            <BigNumber as $imp_assign<&BigNumber>>::$method_assign(self, &rhs);
        }
    }

    impl $imp<&BigNumber> for BigNumber {
        type Output = BigNumber;

        fn $method(mut self, rhs: &BigNumber) -> Self::Output {
            <BigNumber as $imp_assign<&BigNumber>>::$method_assign(&mut self, rhs);
            self
        }
    }

    impl $imp for BigNumber {
        type Output = BigNumber;

        fn $method(self, rhs: BigNumber) -> Self::Output {
            <BigNumber as $imp<&BigNumber>>::$method(self, &rhs)
        }
    }

    impl $imp<&BigNumber> for &BigNumber {
        type Output = BigNumber;

        fn $method(self, rhs: &BigNumber) -> Self::Output {
            <BigNumber as $imp<&BigNumber>>::$method(self.clone(), rhs)
        }
    }

    impl $imp<BigNumber> for &BigNumber {
        type Output = BigNumber;

        fn $method(self, rhs: BigNumber) -> Self::Output {
            <BigNumber as $imp<&BigNumber>>::$method(self.clone(), &rhs)
        }
    }
    )*
    };
}

forward_binop! {
    Add, add, AddAssign, add_assign;
    Sub, sub, SubAssign, sub_assign;
    Mul, mul, MulAssign, mul_assign;
    Div, div, DivAssign, div_assign;
    Rem, rem, RemAssign, rem_assign;
}

// 实现累加累乘
impl Sum for BigNumber {
    fn sum<I: Iterator<Item = BigNumber>>(iter: I) -> Self {
        iter.fold(BigNumber::zero(), |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a BigNumber> for BigNumber {
    fn sum<I: Iterator<Item = &'a BigNumber>>(iter: I) -> Self {
        iter.fold(BigNumber::zero(), |acc, x| acc + x)
    }
}

impl Product for BigNumber {
    fn product<I: Iterator<Item = BigNumber>>(iter: I) -> Self {
        iter.fold(BigNumber::one(), |acc, x| acc * x)
    }
}

impl<'a> Product<&'a BigNumber> for BigNumber {
    fn product<I: Iterator<Item = &'a BigNumber>>(iter: I) -> Self {
        iter.fold(BigNumber::one(), |acc, x| acc * x)
    }
}

#[cfg(test)]
fn num(s: &str) -> BigNumber {
    BigNumber::parse(s).unwrap()
}

#[test]
fn test_from() {
    let big = BigNumber::from(0_u8);
    assert_eq!(big.digits, vec![0]);

    let big = BigNumber::from(12_u16);
    assert_eq!(big.digits, vec![2, 1]);

    let big = BigNumber::from(100_u32);
    assert_eq!(big.digits, vec![0, 0, 1]);

    let big = BigNumber::from(u64::MAX);
    assert_eq!(big.to_string(), u64::MAX.to_string());

    let big = BigNumber::from(u128::MAX);
    assert_eq!(big.to_string(), u128::MAX.to_string());
    assert_eq!(big.len(), MAX_NATIVE_DIGITS);

    assert_eq!(BigNumber::default(), BigNumber::zero());
}

#[test]
fn test_parse() {
    assert_eq!(num("0").digits, vec![0]);
    assert_eq!(num("1234").digits, vec![4, 3, 2, 1]);
    // leading zeros are dropped at parse time
    assert_eq!(num("007").digits, vec![7]);
    assert_eq!(num("0000").digits, vec![0]);
    assert_eq!(num("007"), num("7"));

    assert_eq!(BigNumber::parse(""), Err(BigNumError::Empty));
    assert_eq!(
        BigNumber::parse("12a4"),
        Err(BigNumError::InvalidDigit { found: 'a', index: 2 })
    );
    assert_eq!(
        BigNumber::parse("-5"),
        Err(BigNumError::InvalidDigit { found: '-', index: 0 })
    );
    assert_eq!(
        BigNumber::parse(" 5"),
        Err(BigNumError::InvalidDigit { found: ' ', index: 0 })
    );
    assert!(BigNumber::parse("1,000").is_err());
    assert!(BigNumber::parse("+1").is_err());
    // non-ascii digits are rejected
    assert!(BigNumber::parse("١٢").is_err());

    let a: BigNumber = "42".parse().unwrap();
    let b = BigNumber::try_from("42").unwrap();
    let c = BigNumber::try_from(String::from("42")).unwrap();
    assert_eq!(a, b);
    assert_eq!(b, c);
}

#[test]
fn test_to_string() {
    let s = "12345678909876523784950683472613487560983287654321";
    assert_eq!(num(s).to_string(), s);
    assert_eq!(num("000120").to_string(), "120");
    assert_eq!(format!("{:>5}", num("42")), "   42");
}

#[test]
fn test_accessors() {
    let a = num("9021");
    assert_eq!(a.len(), 4);
    assert_eq!(a.digit(0), Ok(1));
    assert_eq!(a.digit(3), Ok(9));
    assert_eq!(a.digit(4), Err(BigNumError::IndexOutOfRange { index: 4, len: 4 }));
    assert_eq!(a[1], 2);
    assert_eq!(a.digits().collect::<Vec<_>>(), vec![1, 2, 0, 9]);

    assert!(BigNumber::zero().is_zero());
    assert!(!num("10").is_zero());
    assert!(BigNumber::one().is_one());
    assert!(num("1234").is_even());
    assert!(num("1235").is_odd());
}

#[test]
#[should_panic]
fn test_index_out_of_range() {
    let a = num("12");
    let _digit: u8 = a[2];
}

#[test]
fn test_to_u64() {
    assert_eq!(num("123456789110").to_u64(), Some(123456789110));
    assert_eq!(num("18446744073709551615").to_u64(), Some(u64::MAX));
    assert_eq!(num("18446744073709551616").to_u64(), None);
    assert_eq!(BigNumber::zero().to_u64(), Some(0));
}

#[test]
fn test_cmp() {
    assert!(num("99") < num("100"));
    assert!(num("100") > num("99"));
    assert!(num("123") < num("124"));
    assert!(num("223") > num("124"));
    assert!(num("124") <= num("124"));
    assert!(num("124") >= num("124"));
    assert_eq!(num("124").cmp(&num("124")), Ordering::Equal);
    assert!(BigNumber::zero() < BigNumber::one());
    assert_ne!(num("12"), num("21"));
}

#[test]
fn test_increment() {
    let mut a = num("999");
    a.increment();
    assert_eq!(a, num("1000"));

    let mut a = num("1289");
    a.increment().increment();
    assert_eq!(a, num("1291"));

    let mut a = BigNumber::zero();
    let prior = a.post_increment();
    assert_eq!(prior, BigNumber::zero());
    assert_eq!(a, BigNumber::one());
}

#[test]
fn test_decrement() {
    let mut a = num("1000");
    a.decrement().unwrap();
    assert_eq!(a, num("999"));
    assert_eq!(a.len(), 3);

    let mut a = num("10");
    a.decrement().unwrap();
    assert_eq!(a.digits, vec![9]);

    let mut a = BigNumber::one();
    a.decrement().unwrap();
    assert!(a.is_zero());

    let mut a = num("501");
    let prior = a.post_decrement().unwrap();
    assert_eq!(prior, num("501"));
    assert_eq!(a, num("500"));

    let mut zero = BigNumber::zero();
    assert_eq!(zero.decrement().err(), Some(BigNumError::Underflow));
    assert_eq!(zero.post_decrement(), Err(BigNumError::Underflow));
    assert!(zero.is_zero());
}

#[test]
fn test_add() {
    assert_eq!(num("999") + num("1"), num("1000"));
    assert_eq!(&num("1") + &num("999"), num("1000"));
    assert_eq!(num("0") + num("0"), num("0"));
    assert_eq!(num("123") + &BigNumber::zero(), num("123"));
    assert_eq!(
        num("99999999999999999999") + num("1"),
        num("100000000000000000000")
    );
    assert_eq!(
        num("12345678901234567890") + num("98765432109876543210"),
        num("111111111011111111100")
    );

    let mut a = num("5");
    a += num("7");
    a += &num("88");
    assert_eq!(a, num("100"));

    let mut a = num("1");
    a.add_mut(&num("2")).add_mut(&num("3"));
    assert_eq!(a, num("6"));
}

#[test]
fn test_sub() {
    assert_eq!(num("1000") - num("1"), num("999"));
    assert_eq!(&num("1000") - &num("1000"), BigNumber::zero());
    assert_eq!(num("100000000000000000000") - num("1"), num("99999999999999999999"));
    assert_eq!(num("54321") - num("54320"), BigNumber::one());
    assert_eq!(num("300").checked_sub(&num("1")), Ok(num("299")));

    assert_eq!(num("1").checked_sub(&num("2")), Err(BigNumError::Underflow));
    assert_eq!(num("99").checked_sub(&num("100")), Err(BigNumError::Underflow));

    let mut a = num("42");
    assert!(a.try_sub_assign(&num("43")).is_err());
    assert_eq!(a, num("42"));
    a.try_sub_assign(&num("40")).unwrap();
    assert_eq!(a, num("2"));
}

#[test]
#[should_panic]
fn test_sub_underflow_panics() {
    let _ = num("1") - num("2");
}

#[test]
fn test_mul() {
    assert_eq!(num("123") * num("456"), num("56088"));
    assert_eq!(&num("456") * &num("123"), num("56088"));
    assert_eq!(num("123") * BigNumber::zero(), BigNumber::zero());
    assert_eq!(BigNumber::zero() * num("123"), BigNumber::zero());
    assert_eq!(num("123") * BigNumber::one(), num("123"));
    assert_eq!(num("99") * num("99"), num("9801"));
    assert_eq!(num("10") * num("10"), num("100"));
    assert_eq!(
        num("123456789012345678901234567890") * num("987654321098765432109876543210"),
        num("121932631137021795226185032733622923332237463801111263526900")
    );

    let mut a = num("2");
    a.mul_mut(&num("3")).mul_mut(&num("7"));
    assert_eq!(a, num("42"));
    a *= num("0");
    assert_eq!(a.digits, vec![0]);

    assert_eq!(num("3").square(), num("9"));
    assert_eq!(num("111111111").square(), num("12345678987654321"));
}

#[test]
fn test_div() {
    assert_eq!(num("100") / num("7"), num("14"));
    assert_eq!(num("120") / num("13"), num("9"));
    assert_eq!(num("7") / num("100"), BigNumber::zero());
    assert_eq!(num("77") / num("77"), BigNumber::one());
    assert_eq!(num("1000") / num("1"), num("1000"));
    assert_eq!(num("1000") / num("10"), num("100"));
    assert_eq!(num("1007") / num("10"), num("100"));
    assert_eq!(
        num("10000000000000000000000000000000000") / num("1000"),
        num("10000000000000000000000000000000")
    );
    assert_eq!(
        num("124871287894782164876238905710532895792830741278950327951074309571023759712087492109591287094780219747214567876543245678976547897654367543567654678987654321456789087654325678908765432567890876543245678908765432567890876543876543245678907654356789")
        / num("5678987654678976543587654678976546789087657876545678976543256789765432456789234567890854376"),
        num("21988300642263136800048566126805476040703295625345756336585704044222781621158596876349726562910906651562104831721609088222205401883168960593370061500432215")
    );

    assert_eq!(num("5").checked_div(&BigNumber::zero()), Err(BigNumError::DivisionByZero));
    assert_eq!(BigNumber::zero().checked_div(&num("5")), Ok(BigNumber::zero()));

    let mut a = num("5");
    assert!(a.try_div_assign(&BigNumber::zero()).is_err());
    assert_eq!(a, num("5"));
}

#[test]
#[should_panic]
fn test_div_by_zero_panics() {
    let _ = num("5") / BigNumber::zero();
}

#[test]
fn test_rem() {
    assert_eq!(num("100") % num("7"), num("2"));
    assert_eq!(num("12") % num("8"), num("4"));
    assert_eq!(num("10000000000000000") % num("10"), BigNumber::zero());
    assert_eq!(num("7") % num("100"), num("7"));
    assert_eq!(num("77") % num("77"), BigNumber::zero());
    assert_eq!(
        num("23456789873625348759607098765432345678909876325346546543456453573434839063464369876543245")
        % num("526738495607659438721653478560954837265378495607"),
        num("393707270751296419349581795408095683999332705291")
    );

    assert_eq!(num("5").checked_rem(&BigNumber::zero()), Err(BigNumError::DivisionByZero));

    let mut a = num("100");
    a.try_rem_assign(&num("7")).unwrap();
    assert_eq!(a, num("2"));
}

#[test]
fn test_div_rem() {
    let (q, r) = num("1000000007").div_rem(&num("97")).unwrap();
    assert_eq!(q, num("10309278"));
    assert_eq!(r, num("41"));

    let (q, r) = num("3").div_rem(&num("5")).unwrap();
    assert_eq!(q, BigNumber::zero());
    assert_eq!(r, num("3"));
}

#[test]
fn test_halve() {
    let mut a = num("1024");
    a.halve();
    assert_eq!(a, num("512"));
    let mut a = num("11");
    a.halve();
    assert_eq!(a, num("5"));
    let mut a = num("1");
    a.halve();
    assert_eq!(a, BigNumber::zero());
    let mut a = num("10");
    a.halve().halve();
    assert_eq!(a.digits, vec![2]);
}

#[test]
fn test_pow() {
    assert_eq!(num("2").pow(&num("10")), num("1024"));
    assert_eq!(num("2").pow_u32(64), num("18446744073709551616"));
    assert_eq!(num("12345").pow(&BigNumber::zero()), BigNumber::one());
    assert_eq!(BigNumber::zero().pow(&BigNumber::zero()), BigNumber::one());
    assert_eq!(BigNumber::zero().pow_u32(5), BigNumber::zero());
    assert_eq!(num("12345").pow(&BigNumber::one()), num("12345"));
    assert_eq!(num("10").pow_u32(30), num("1000000000000000000000000000000"));
    assert_eq!(num("3").pow_u32(40), num("12157665459056928801"));

    let mut a = num("7");
    a.pow_assign(&num("3"));
    assert_eq!(a, num("343"));
}

#[test]
fn test_sum_product() {
    let factorial_25: BigNumber = (1_u32..=25).map(BigNumber::from).product();
    assert_eq!(factorial_25, num("15511210043330985984000000"));

    let nums = vec![num("1"), num("99"), num("900")];
    let total: BigNumber = nums.iter().sum();
    assert_eq!(total, num("1000"));
    let total: BigNumber = nums.into_iter().sum();
    assert_eq!(total, num("1000"));

    let empty: Vec<BigNumber> = Vec::new();
    assert_eq!(empty.iter().product::<BigNumber>(), BigNumber::one());
}
