//! Exact rational numbers.
//!
//! [`Rational`] is the numeric substrate of the unit algebra: unit scale factors and exponents are both rationals, so
//! composing units never accumulates floating-point error. Values are always kept in lowest terms with a positive
//! denominator, which makes the derived `PartialEq`/`Hash` structural.
//!
//! The backing integer is `i128`. Unit composition multiplies denominators, so every operation cross-reduces before
//! multiplying and uses checked arithmetic; leaving the `i128` range is reported as [`RatioError::Overflow`] by the
//! `checked_*` methods and is a panic (a compile error in const context) for the plain ones.
//!
//! ```rust
//! use qunit_core::Rational;
//!
//! const HALF: Rational = Rational::new(1, 2);
//! const THIRD: Rational = Rational::new(1, 3);
//! assert_eq!(HALF.add(THIRD), Rational::new(5, 6));
//! assert_eq!(Rational::new(6, -10), Rational::new(-3, 5));
//! ```

use crate::error::{const_try, RatioError};
use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};

/// Returns `None`-overflow as [`RatioError::Overflow`] inside a `const fn`.
macro_rules! checked {
    ($e:expr) => {
        match $e {
            Some(value) => value,
            None => return Err(RatioError::Overflow),
        }
    };
}

/// Greatest common divisor of two integers.
///
/// The result is non-negative and `gcd(0, 0) == 0`. The only unrepresentable case is a gcd of exactly `2^127`
/// (`gcd(i128::MIN, 0)`), which wraps to `i128::MIN`.
///
/// ```rust
/// use qunit_core::gcd;
/// assert_eq!(gcd(0, 164), 164);
/// assert_eq!(gcd(-53667, -25527), 201);
/// ```
pub const fn gcd(a: i128, b: i128) -> i128 {
    let mut a = a.unsigned_abs();
    let mut b = b.unsigned_abs();
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a as i128
}

/// Greatest common divisor of any number of integers (`0` for an empty slice).
///
/// ```rust
/// use qunit_core::gcd_all;
/// assert_eq!(gcd_all(&[30, -36, 24]), 6);
/// ```
pub const fn gcd_all(values: &[i128]) -> i128 {
    let mut acc = 0;
    let mut i = 0;
    while i < values.len() {
        acc = gcd(acc, values[i]);
        i += 1;
    }
    acc
}

/// An exact fraction in lowest terms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rational {
    num: i128,
    den: i128,
}

impl Rational {
    /// `0/1`.
    pub const ZERO: Rational = Rational { num: 0, den: 1 };
    /// `1/1`.
    pub const ONE: Rational = Rational { num: 1, den: 1 };

    /// Builds `num/den` in lowest terms.
    ///
    /// # Panics
    ///
    /// Panics with `"zero denominator"` if `den == 0`.
    pub const fn new(num: i128, den: i128) -> Self {
        match Self::checked_new(num, den) {
            Ok(r) => r,
            Err(err) => err.panic(),
        }
    }

    /// Builds `num/den` in lowest terms, reporting a zero denominator instead of panicking.
    pub const fn checked_new(num: i128, den: i128) -> Result<Self, RatioError> {
        if den == 0 {
            return Err(RatioError::ZeroDenominator);
        }
        let div = gcd(num, den);
        if div <= 0 {
            return Err(RatioError::Overflow);
        }
        let (num, den) = (num / div, den / div);
        if den < 0 {
            Ok(Self {
                num: checked!(num.checked_neg()),
                den: checked!(den.checked_neg()),
            })
        } else {
            Ok(Self { num, den })
        }
    }

    /// Promotes an integer to `n/1`.
    pub const fn integer(n: i128) -> Self {
        Self { num: n, den: 1 }
    }

    /// Numerator (carries the sign).
    #[inline]
    pub const fn numer(self) -> i128 {
        self.num
    }

    /// Denominator (always positive).
    #[inline]
    pub const fn denom(self) -> i128 {
        self.den
    }

    /// `true` for `0/1`.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.num == 0
    }

    /// `true` for `1/1`.
    #[inline]
    pub const fn is_one(self) -> bool {
        self.num == 1 && self.den == 1
    }

    /// `true` when the denominator is one.
    #[inline]
    pub const fn is_integer(self) -> bool {
        self.den == 1
    }

    /// Structural equality usable in const context.
    #[inline]
    pub const fn equals(self, other: Self) -> bool {
        self.num == other.num && self.den == other.den
    }

    /// Exact sum.
    pub const fn checked_add(self, rhs: Self) -> Result<Self, RatioError> {
        // Work over lcm(den_a, den_b); reduces to (a*d + c*b) / (b*d).
        let div = gcd(self.den, rhs.den);
        let lhs_scale = rhs.den / div;
        let rhs_scale = self.den / div;
        let num = checked!(checked!(self.num.checked_mul(lhs_scale))
            .checked_add(checked!(rhs.num.checked_mul(rhs_scale))));
        let den = checked!(self.den.checked_mul(lhs_scale));
        Self::checked_new(num, den)
    }

    /// Exact difference.
    pub const fn checked_sub(self, rhs: Self) -> Result<Self, RatioError> {
        self.checked_add(const_try!(rhs.checked_neg()))
    }

    /// Product with numerators cross-reduced against the opposite denominator first.
    pub const fn checked_mul(self, rhs: Self) -> Result<Self, RatioError> {
        let a = gcd(self.num, rhs.den);
        let b = gcd(rhs.num, self.den);
        let num = checked!((self.num / a).checked_mul(rhs.num / b));
        let den = checked!((self.den / b).checked_mul(rhs.den / a));
        Self::checked_new(num, den)
    }

    /// Exact quotient; dividing by zero is a zero-denominator error.
    pub const fn checked_div(self, rhs: Self) -> Result<Self, RatioError> {
        self.checked_mul(const_try!(rhs.checked_invert()))
    }

    /// `den/num`; inverting zero is a zero-denominator error.
    pub const fn checked_invert(self) -> Result<Self, RatioError> {
        if self.num == 0 {
            return Err(RatioError::ZeroDenominator);
        }
        Self::checked_new(self.den, self.num)
    }

    /// Negation; only `i128::MIN` overflows.
    pub const fn checked_neg(self) -> Result<Self, RatioError> {
        Ok(Self {
            num: checked!(self.num.checked_neg()),
            den: self.den,
        })
    }

    /// Integer power by squaring: `O(log |exp|)` multiplications.
    pub const fn checked_pow(self, exp: i128) -> Result<Self, RatioError> {
        if exp == 0 {
            Ok(Self::ONE)
        } else if exp == 1 {
            Ok(self)
        } else if exp < 0 {
            let inverse = const_try!(self.checked_invert());
            inverse.checked_pow(checked!(exp.checked_neg()))
        } else if exp % 2 == 0 {
            let half = const_try!(self.checked_pow(exp / 2));
            half.checked_mul(half)
        } else {
            let rest = const_try!(self.checked_pow(exp - 1));
            self.checked_mul(rest)
        }
    }

    /// Panicking form of [`checked_add`](Self::checked_add).
    pub const fn add(self, rhs: Self) -> Self {
        unwrap(self.checked_add(rhs))
    }

    /// Panicking form of [`checked_sub`](Self::checked_sub).
    pub const fn sub(self, rhs: Self) -> Self {
        unwrap(self.checked_sub(rhs))
    }

    /// Panicking form of [`checked_mul`](Self::checked_mul).
    pub const fn mul(self, rhs: Self) -> Self {
        unwrap(self.checked_mul(rhs))
    }

    /// Panicking form of [`checked_div`](Self::checked_div).
    pub const fn div(self, rhs: Self) -> Self {
        unwrap(self.checked_div(rhs))
    }

    /// # Panics
    ///
    /// Panics with `"zero denominator"` when `self` is zero.
    pub const fn invert(self) -> Self {
        unwrap(self.checked_invert())
    }

    /// Panicking form of [`checked_neg`](Self::checked_neg).
    pub const fn neg(self) -> Self {
        unwrap(self.checked_neg())
    }

    /// Panicking form of [`checked_pow`](Self::checked_pow).
    pub const fn pow(self, exp: i128) -> Self {
        unwrap(self.checked_pow(exp))
    }

    /// Floating-point value, for use at the quantity boundary only.
    #[inline]
    pub const fn to_f64(self) -> f64 {
        self.num as f64 / self.den as f64
    }

    /// Single-precision value.
    #[inline]
    pub const fn to_f32(self) -> f32 {
        self.num as f32 / self.den as f32
    }
}

const fn unwrap(result: Result<Rational, RatioError>) -> Rational {
    match result {
        Ok(r) => r,
        Err(err) => err.panic(),
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<i128> for Rational {
    fn from(n: i128) -> Self {
        Self::integer(n)
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::integer(n as i128)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

impl Add for Rational {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Rational::add(self, rhs)
    }
}

impl Sub for Rational {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Rational::sub(self, rhs)
    }
}

impl Mul for Rational {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Rational::mul(self, rhs)
    }
}

impl Div for Rational {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        Rational::div(self, rhs)
    }
}

impl Neg for Rational {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Rational::neg(self)
    }
}

/// Metric prefixes as exact ratios, from `10^-24` to `10^24`.
#[allow(missing_docs)]
pub mod prefixes {
    use super::Rational;

    pub const YOCTO: Rational = Rational::new(1, 1_000_000_000_000_000_000_000_000);
    pub const ZEPTO: Rational = Rational::new(1, 1_000_000_000_000_000_000_000);
    pub const ATTO: Rational = Rational::new(1, 1_000_000_000_000_000_000);
    pub const FEMTO: Rational = Rational::new(1, 1_000_000_000_000_000);
    pub const PICO: Rational = Rational::new(1, 1_000_000_000_000);
    pub const NANO: Rational = Rational::new(1, 1_000_000_000);
    pub const MICRO: Rational = Rational::new(1, 1_000_000);
    pub const MILLI: Rational = Rational::new(1, 1_000);
    pub const CENTI: Rational = Rational::new(1, 100);
    pub const DECI: Rational = Rational::new(1, 10);
    pub const ONE: Rational = Rational::ONE;
    pub const DECA: Rational = Rational::integer(10);
    pub const HECTO: Rational = Rational::integer(100);
    pub const KILO: Rational = Rational::integer(1_000);
    pub const MEGA: Rational = Rational::integer(1_000_000);
    pub const GIGA: Rational = Rational::integer(1_000_000_000);
    pub const TERA: Rational = Rational::integer(1_000_000_000_000);
    pub const PETA: Rational = Rational::integer(1_000_000_000_000_000);
    pub const EXA: Rational = Rational::integer(1_000_000_000_000_000_000);
    pub const ZETTA: Rational = Rational::integer(1_000_000_000_000_000_000_000);
    pub const YOTTA: Rational = Rational::integer(1_000_000_000_000_000_000_000_000);
}

#[cfg(test)]
mod tests {
    use super::prefixes::*;
    use super::*;
    use proptest::prelude::*;

    const RA: Rational = Rational::new(1, 2);
    const RB: Rational = Rational::new(-3, 5);
    const RC: Rational = Rational::new(7, -11);

    // ─────────────────────────────────────────────────────────────────────────────
    // gcd
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn gcd_values() {
        assert_eq!(gcd(0, 0), 0);
        assert_eq!(gcd(0, 164), 164);
        assert_eq!(gcd(164, 0), 164);
        assert_eq!(gcd(-53667, -25527), 201);
        assert_eq!(gcd(978, 89_798_763_754_892_653_453_379_597_352_537_489_494), 2);
        assert_eq!(
            gcd(1221, 12_345_678_910_111_213_141_516_171_819_202_122_232),
            1
        );
    }

    #[test]
    fn gcd_variadic() {
        assert_eq!(gcd_all(&[30, -36, 24]), 6);
        assert_eq!(gcd_all(&[]), 0);
        assert_eq!(gcd_all(&[0, 0, 0]), 0);
        assert_eq!(gcd_all(&[-7]), 7);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Construction and reduction
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn construction_reduces() {
        let r = Rational::new(2, 4);
        assert_eq!((r.numer(), r.denom()), (1, 2));
        let r = Rational::new(6, -10);
        assert_eq!((r.numer(), r.denom()), (-3, 5));
        let r = Rational::new(21, -33);
        assert_eq!((r.numer(), r.denom()), (-7, 11));
        assert_eq!(RC, Rational::new(21, -33));
        assert_eq!(Rational::new(0, -9), Rational::ZERO);
    }

    #[test]
    fn large_ratio_reduces() {
        let n: i128 = 45_787_639_226_459_268_364_595_352_537;
        let d: i128 = 7_164_295_923_643_869_682_629;
        assert_eq!(Rational::new(8 * n, 8 * d), Rational::new(n, d));
    }

    #[test]
    fn zero_denominator_is_rejected() {
        assert_eq!(Rational::checked_new(1, 0), Err(RatioError::ZeroDenominator));
        assert_eq!(Rational::ZERO.checked_invert(), Err(RatioError::ZeroDenominator));
    }

    #[test]
    #[should_panic(expected = "zero denominator")]
    fn zero_denominator_panics() {
        let _ = Rational::new(3, 0);
    }

    #[test]
    fn integral_detection() {
        assert!(Rational::new(10, 2).is_integer());
        assert!(Rational::integer(11).is_integer());
        assert!(!RA.is_integer());
        assert!(!RB.is_integer());
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Arithmetic
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn half_plus_third() {
        assert_eq!(Rational::new(1, 2) + Rational::new(1, 3), Rational::new(5, 6));
    }

    #[test]
    fn operations() {
        assert_eq!(RA + RB, Rational::new(-1, 10));
        assert_eq!(RA + RC, Rational::new(-3, 22));
        assert_eq!(RB + RC, Rational::new(-68, 55));

        assert_eq!(RA - RB, Rational::new(11, 10));
        assert_eq!(RA - RC, Rational::new(25, 22));
        assert_eq!(RB - RC, Rational::new(2, 55));

        assert_eq!(RA * RB, Rational::new(-3, 10));
        assert_eq!(RA * RC, Rational::new(-7, 22));
        assert_eq!(RB * RC, Rational::new(21, 55));

        assert_eq!(RA / RB, Rational::new(-5, 6));
        assert_eq!(RA / RC, Rational::new(-11, 14));
        assert_eq!(RB / RC, Rational::new(33, 35));

        assert_eq!(-RB, Rational::new(3, 5));
    }

    #[test]
    fn powers() {
        assert_eq!(RA.pow(0), Rational::ONE);
        assert_eq!(RA.pow(1), RA);
        assert_eq!(Rational::new(2, 4).pow(3), Rational::new(1, 8));
        assert_eq!(RB.pow(-1), Rational::new(-5, 3));
        assert_eq!(RB.pow(-2), Rational::new(25, 9));
        assert_eq!(Rational::integer(10).pow(24), YOTTA);
        assert_eq!(KILO.pow(-8), YOCTO);
    }

    #[test]
    fn const_evaluation() {
        const SUM: Rational = Rational::new(1, 2).add(Rational::new(3, 7));
        const PRODUCT: Rational = Rational::new(1, 2).mul(Rational::new(3, 7));
        assert_eq!(SUM, Rational::new(13, 14));
        assert_eq!(PRODUCT, Rational::new(3, 14));
    }

    #[test]
    fn cross_reduction_avoids_overflow() {
        // Naive (num*num, den*den) would need 10^48 here.
        assert_eq!(YOTTA.checked_mul(YOCTO), Ok(Rational::ONE));
        assert_eq!(YOTTA.checked_div(YOTTA), Ok(Rational::ONE));
    }

    #[test]
    fn overflow_is_reported() {
        assert_eq!(YOTTA.checked_mul(YOTTA), Err(RatioError::Overflow));
        assert_eq!(Rational::integer(i128::MIN).checked_neg(), Err(RatioError::Overflow));
    }

    #[test]
    fn prefixes_match_powers_of_ten() {
        let table = [
            (YOCTO, 1e-24),
            (ZEPTO, 1e-21),
            (ATTO, 1e-18),
            (FEMTO, 1e-15),
            (PICO, 1e-12),
            (NANO, 1e-9),
            (MICRO, 1e-6),
            (MILLI, 1e-3),
            (CENTI, 1e-2),
            (DECI, 1e-1),
            (ONE, 1e0),
            (DECA, 1e1),
            (HECTO, 1e2),
            (KILO, 1e3),
            (MEGA, 1e6),
            (GIGA, 1e9),
            (TERA, 1e12),
            (PETA, 1e15),
            (EXA, 1e18),
            (ZETTA, 1e21),
            (YOTTA, 1e24),
        ];
        for (prefix, expected) in table {
            assert!((prefix.to_f64() / expected - 1.0).abs() < 1e-14);
        }
    }

    #[test]
    fn display() {
        assert_eq!(Rational::new(-3, 5).to_string(), "-3/5");
        assert_eq!(Rational::integer(7).to_string(), "7");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Properties
    // ─────────────────────────────────────────────────────────────────────────────

    fn non_zero() -> impl Strategy<Value = i128> {
        prop_oneof![(-100_000i128..=-1i128), (1i128..=100_000i128)]
    }

    proptest! {
        #[test]
        fn prop_always_lowest_terms(n in -1_000_000i128..1_000_000, d in non_zero()) {
            let r = Rational::new(n, d);
            prop_assert!(r.denom() > 0);
            prop_assert!(gcd(r.numer(), r.denom()) == 1);
        }

        #[test]
        fn prop_reduction_idempotent(n in -1_000_000i128..1_000_000, d in non_zero()) {
            let once = Rational::new(n, d);
            let twice = Rational::new(once.numer(), once.denom());
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_scaling_preserves_value(n in -1000i128..1000, d in non_zero(), k in non_zero()) {
            prop_assert_eq!(Rational::new(n * k, d * k), Rational::new(n, d));
        }

        #[test]
        fn prop_add_sub_inverse(a in -1000i128..1000, b in non_zero(), c in -1000i128..1000, d in non_zero()) {
            let x = Rational::new(a, b);
            let y = Rational::new(c, d);
            prop_assert_eq!((x + y) - y, x);
        }

        #[test]
        fn prop_mul_div_inverse(a in -1000i128..1000, b in non_zero(), c in non_zero(), d in non_zero()) {
            let x = Rational::new(a, b);
            let y = Rational::new(c, d);
            prop_assert_eq!((x * y) / y, x);
        }

        #[test]
        fn prop_pow_matches_repeated_mul(a in non_zero(), b in non_zero(), e in -6i128..6) {
            let x = Rational::new(a % 50, b % 50 + if b % 50 == 0 { 1 } else { 0 });
            prop_assume!(!x.is_zero() || e >= 0);
            let mut expected = Rational::ONE;
            for _ in 0..e.unsigned_abs() {
                expected = expected * x;
            }
            if e < 0 {
                expected = expected.invert();
            }
            prop_assert_eq!(x.pow(e), expected);
        }
    }
}
