// jianpu -- compiling numbered musical notation into audio
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Rational numbers are used for all note lengths, tuplet ratios and measure totals.
//!
//! All arithmetic is exact. The checked operations report overflow of the
//! underlying integers instead of wrapping; the operator traits are thin
//! wrappers that panic in that case and are meant for literals and tests.

use std::convert::TryFrom;
use std::fmt;
use std::{cmp::Ordering, ops};

use snafu::{ensure, OptionExt, Snafu};

/// Underlying integral type for the rational numbers.
type Int = i64;

/// Wide type used for intermediate products, so that a single operation on
/// two representable rationals never overflows before reduction.
type Wide = i128;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Snafu)]
pub enum RationalError {
    #[snafu(display("division by zero"))]
    DivisionByZero,
    #[snafu(display("arithmetic overflow in exact fraction"))]
    ArithmeticOverflow,
}

pub type RationalResult = Result<Rational, RationalError>;

/// A rational number, always fully normalized.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Rational {
    /// The numerator of the fraction.
    /// If the fraction is negative, the numerator will be made negative.
    num: Int,
    /// The denominator of the fraction, always strictly positive.
    denom: Int,
}

impl Rational {
    pub const ZERO: Rational = Rational { num: 0, denom: 1 };
    pub const ONE: Rational = Rational { num: 1, denom: 1 };

    // ==================== Constructors ====================

    /// Create a new rational from a potentially unnormalized fraction.
    ///
    /// # Panic
    ///
    /// Panics if the denominator is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use jianpu::rational::*;
    ///
    /// assert_eq!(Rational::new(10, 5), Rational::new(2, 1));
    /// assert_eq!(Rational::new(-10, -5), Rational::new(6, 3));
    /// assert_eq!(Rational::new(-6, 8), Rational::new(3, -4));
    /// assert_eq!(Rational::new(3, -4).denominator(), 4);
    /// ```
    pub fn new(num: Int, denom: Int) -> Rational {
        assert_ne!(denom, 0, "Denominator must not be zero");
        match Rational::try_new(num, denom) {
            Ok(r) => r,
            Err(err) => panic!("{}", err),
        }
    }

    /// Like [`Rational::new`], but reports a zero denominator as an error.
    ///
    /// ```
    /// # use jianpu::rational::*;
    /// assert_eq!(Rational::try_new(1, 0), Err(RationalError::DivisionByZero));
    /// assert_eq!(Rational::try_new(2, 6), Ok(Rational::new(1, 3)));
    /// ```
    pub fn try_new(num: Int, denom: Int) -> RationalResult {
        Rational::reduce(Wide::from(num), Wide::from(denom))
    }

    pub const fn int(int: Int) -> Rational {
        Rational { num: int, denom: 1 }
    }

    pub fn nth(n: Int) -> Self {
        Rational::new(1, n)
    }

    /// Normalize a wide fraction and narrow it back into the storage type.
    fn reduce(num: Wide, denom: Wide) -> RationalResult {
        ensure!(denom != 0, DivisionByZero);
        let div = gcd(num, denom);
        let sign = if denom < 0 { -1 } else { 1 };
        let num = Int::try_from(sign * num / div).ok().context(ArithmeticOverflow)?;
        let denom = Int::try_from(sign * denom / div).ok().context(ArithmeticOverflow)?;
        Ok(Rational { num, denom })
    }

    // ==================== Checked arithmetic ====================

    /// # Examples
    ///
    /// ```
    /// # use jianpu::rational::*;
    /// assert_eq!(Rational::new(1, 2).checked_add(Rational::new(3, 4)), Ok(Rational::new(5, 4)));
    /// let huge = Rational::new(1, i64::MAX);
    /// assert_eq!(huge.checked_add(Rational::new(1, i64::MAX - 1)), Err(RationalError::ArithmeticOverflow));
    /// ```
    pub fn checked_add(self, rhs: Rational) -> RationalResult {
        let (a, b) = (Wide::from(self.num), Wide::from(self.denom));
        let (c, d) = (Wide::from(rhs.num), Wide::from(rhs.denom));
        Rational::reduce(a * d + c * b, b * d)
    }

    pub fn checked_sub(self, rhs: Rational) -> RationalResult {
        let (a, b) = (Wide::from(self.num), Wide::from(self.denom));
        let (c, d) = (Wide::from(rhs.num), Wide::from(rhs.denom));
        Rational::reduce(a * d - c * b, b * d)
    }

    pub fn checked_mul(self, rhs: Rational) -> RationalResult {
        Rational::reduce(
            Wide::from(self.num) * Wide::from(rhs.num),
            Wide::from(self.denom) * Wide::from(rhs.denom),
        )
    }

    /// ```
    /// # use jianpu::rational::*;
    /// assert_eq!(Rational::new(1, 4).checked_div(Rational::new(3, 2)), Ok(Rational::new(1, 6)));
    /// assert_eq!(Rational::ONE.checked_div(Rational::ZERO), Err(RationalError::DivisionByZero));
    /// ```
    pub fn checked_div(self, rhs: Rational) -> RationalResult {
        Rational::reduce(
            Wide::from(self.num) * Wide::from(rhs.denom),
            Wide::from(self.denom) * Wide::from(rhs.num),
        )
    }

    /// Floored remainder, `self - floor(self / rhs) * rhs`.
    pub fn checked_rem(self, rhs: Rational) -> RationalResult {
        let quotient = self.checked_div(rhs)?.floor();
        self.checked_sub(rhs.checked_mul(Rational::int(quotient))?)
    }

    // ==================== Transformations ====================

    pub fn recip(self) -> RationalResult {
        Rational::reduce(Wide::from(self.denom), Wide::from(self.num))
    }

    /// Round towards negative infinity.
    ///
    /// ```
    /// # use jianpu::rational::*;
    ///
    /// assert_eq!(Rational::new(10, 5).floor(), 2);
    /// assert_eq!(Rational::new(13, 7).floor(), 1);
    /// assert_eq!(Rational::new(-1, 4).floor(), -1);
    /// assert_eq!(Rational::new(-10, 5).floor(), -2);
    /// assert_eq!(Rational::new(-10, 6).floor(), -2);
    /// ```
    pub const fn floor(self) -> Int {
        if self.num < 0 {
            (self.num + 1) / self.denom - 1
        } else {
            self.num / self.denom
        }
    }

    /// The nearest floating point value.
    pub fn value(self) -> f64 {
        self.num as f64 / self.denom as f64
    }

    // ==================== Predicates ====================

    pub const fn is_zero(self) -> bool {
        self.num == 0
    }

    // ==================== Destructors ====================

    pub const fn numerator(self) -> Int {
        self.num
    }

    pub const fn denominator(self) -> Int {
        self.denom
    }
}

fn unwrap_op(result: RationalResult) -> Rational {
    match result {
        Ok(r) => r,
        Err(err) => panic!("{}", err),
    }
}

/// # Panics
///
/// The operator traits panic on overflow; use the `checked_*` methods for
/// values computed from user input.
///
/// # Examples
///
/// ```
/// use jianpu::rational::*;
///
/// assert_eq!(Rational::new(1, 2) + Rational::new(3, 4), Rational::new(5, 4));
/// assert_eq!(Rational::new(3, 4) + Rational::new(3, 4), Rational::new(3, 2));
/// assert_eq!(Rational::new(3, 4) + Rational::new(-5, 8), Rational::new(1, 8));
/// ```
impl ops::Add for Rational {
    type Output = Rational;

    fn add(self, rhs: Rational) -> Self::Output {
        unwrap_op(self.checked_add(rhs))
    }
}

impl ops::Sub for Rational {
    type Output = Rational;

    fn sub(self, rhs: Rational) -> Self::Output {
        unwrap_op(self.checked_sub(rhs))
    }
}

impl ops::Mul for Rational {
    type Output = Rational;

    fn mul(self, rhs: Rational) -> Self::Output {
        unwrap_op(self.checked_mul(rhs))
    }
}

impl ops::Div for Rational {
    type Output = Rational;

    fn div(self, rhs: Rational) -> Self::Output {
        unwrap_op(self.checked_div(rhs))
    }
}

/// # Examples
///
/// ```
/// # use jianpu::rational::*;
///
/// assert_eq!(Rational::new(5, 1) % Rational::new(3, 1), Rational::new(2, 1));
/// assert_eq!(Rational::new(-5, 1) % Rational::new(3, 1), Rational::new(1, 1));
/// assert_eq!(Rational::new(7, 3) % Rational::new(1, 4), Rational::new(1, 12));
/// assert_eq!(Rational::new(-7, 3) % Rational::new(1, 4), Rational::new(1, 6));
/// ```
impl ops::Rem for Rational {
    type Output = Rational;

    fn rem(self, rhs: Rational) -> Self::Output {
        unwrap_op(self.checked_rem(rhs))
    }
}

impl ops::Mul<Int> for Rational {
    type Output = Rational;

    fn mul(self, rhs: Int) -> Self::Output {
        unwrap_op(self.checked_mul(Rational::int(rhs)))
    }
}

/// ```
/// # use jianpu::rational::*;
/// assert_eq!(Rational::new(1, 4) / 2, Rational::new(1, 8));
/// assert_eq!(Rational::new(9, 13) / 3, Rational::new(3, 13));
/// ```
impl ops::Div<Int> for Rational {
    type Output = Rational;

    fn div(self, rhs: Int) -> Self::Output {
        unwrap_op(self.checked_div(Rational::int(rhs)))
    }
}

impl ops::Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        unwrap_op(Rational::ZERO.checked_sub(self))
    }
}

impl ops::AddAssign for Rational {
    fn add_assign(&mut self, rhs: Rational) {
        *self = *self + rhs;
    }
}

impl ops::SubAssign for Rational {
    fn sub_assign(&mut self, rhs: Rational) {
        *self = *self - rhs;
    }
}

impl ops::MulAssign for Rational {
    fn mul_assign(&mut self, rhs: Rational) {
        *self = *self * rhs;
    }
}

impl ops::DivAssign for Rational {
    fn div_assign(&mut self, rhs: Rational) {
        *self = *self / rhs;
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Rational) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// ```
/// use jianpu::rational::*;
///
/// assert!(Rational::new(3,4) < Rational::new(3,2));
/// assert!(Rational::new(-1,2) < Rational::new(-1,3));
/// ```
impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        // a / b < c / d
        // <=>
        // a * d < c * b
        let l = Wide::from(self.num) * Wide::from(other.denom);
        let r = Wide::from(other.num) * Wide::from(self.denom);
        l.cmp(&r)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.num)?;
        if self.denom != 1 {
            write!(f, "/{}", self.denom)?;
        }
        Ok(())
    }
}

/// Computes the greates common divisor of two numbers using euclids algorithm.
///
/// # Example
///
/// ```
/// use jianpu::rational::*;
///
/// assert_eq!(gcd(20, 15), 5);
/// assert_eq!(gcd(20, 19), 1);
/// assert_eq!(gcd(10, 0), 10);
/// assert_eq!(gcd(0, 10), 10);
/// assert_eq!(gcd(0, 0), 0);
/// assert_eq!(gcd(10, -10), 10);
/// ```
pub fn gcd(mut a: Wide, mut b: Wide) -> Wide {
    // normalized inputs to be positive to guarantee that it terminates
    if a < 0 {
        a = -a
    }
    if b < 0 {
        b = -b
    }

    // Invariant: a >= b
    if a < b {
        std::mem::swap(&mut a, &mut b)
    }

    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}
