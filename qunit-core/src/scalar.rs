//! Numeric value types a [`Quantity`](crate::Quantity) can hold.

use crate::ratio::Rational;
use core::cmp::Ordering;
use core::fmt::Debug;
use num_traits::{Float, Num};

/// A built-in arithmetic type usable as the stored value of a quantity.
///
/// Integral scalars convert only by integral factors ([`to`](crate::Quantity::to)); anything else goes through
/// [`Promoted`](Scalar::Promoted), which is `f64` for every integer type.
pub trait Scalar: Num + Copy + PartialOrd + Debug + 'static {
    /// `true` for integer types.
    const INTEGRAL: bool;

    /// Type used when a conversion would lose precision in `Self`.
    type Promoted: Scalar;

    /// `self · factor`. Integers truncate toward zero.
    ///
    /// # Panics
    ///
    /// For integer types, panics when the result does not fit in `Self`.
    fn scale(self, factor: Rational) -> Self;

    /// Lossless-as-possible widening into [`Promoted`](Scalar::Promoted).
    fn promote(self) -> Self::Promoted;

    /// Orders `self` against `other · factor`.
    ///
    /// Integers compare exactly, even when the cross products leave `i128`.
    fn compare_scaled(self, other: Self, factor: Rational) -> Option<Ordering>;

    /// Absolute value.
    fn abs_value(self) -> Self {
        if self < Self::zero() {
            Self::zero() - self
        } else {
            self
        }
    }
}

/// Floating-point scalars. Rounding, `sqrt`, `hypot` and friends come from [`Float`] (backed by `libm` without
/// `std`).
pub trait Real: Scalar<Promoted = Self> + Float {
    /// Not-a-number.
    const NAN: Self;

    /// IEEE 754 remainder: `self - n·divisor` with `n` the nearest integer to `self / divisor`, ties to even.
    fn ieee_remainder(self, divisor: Self) -> Self;
}

/// `a · b` as a 256-bit `(high, low)` pair. `a` must fit in 64 bits.
fn wide_mul(a: u128, b: u128) -> (u128, u128) {
    let (b_high, b_low) = (b >> 64, b & u128::from(u64::MAX));
    let low_part = a * b_low;
    let high_part = a * b_high;
    let (low, carry) = low_part.overflowing_add(high_part << 64);
    ((high_part >> 64) + u128::from(carry), low)
}

/// Exact ordering of `a · b` against `c · d`, where `a` and `c` fit in 64 bits.
fn cmp_products(a: i128, b: i128, c: i128, d: i128) -> Ordering {
    let lhs_negative = (a < 0) != (b < 0) && a != 0 && b != 0;
    let rhs_negative = (c < 0) != (d < 0) && c != 0 && d != 0;
    let lhs = wide_mul(a.unsigned_abs(), b.unsigned_abs());
    let rhs = wide_mul(c.unsigned_abs(), d.unsigned_abs());
    match (lhs_negative, rhs_negative) {
        (false, true) => Ordering::Greater,
        (true, false) => Ordering::Less,
        (false, false) => lhs.cmp(&rhs),
        (true, true) => rhs.cmp(&lhs),
    }
}

macro_rules! impl_integral_scalar {
    ($($t:ty),+ $(,)?) => {
        $(
            impl Scalar for $t {
                const INTEGRAL: bool = true;
                type Promoted = f64;

                #[inline]
                fn scale(self, factor: Rational) -> Self {
                    let scaled = (self as i128)
                        .checked_mul(factor.numer())
                        .map(|value| value / factor.denom())
                        .and_then(|value| <$t>::try_from(value).ok());
                    match scaled {
                        Some(value) => value,
                        None => panic!(concat!("unit conversion overflowed ", stringify!($t))),
                    }
                }

                #[inline]
                fn promote(self) -> f64 {
                    self as f64
                }

                fn compare_scaled(self, other: Self, factor: Rational) -> Option<Ordering> {
                    // self <=> other·n/d  ⇔  self·d <=> other·n  (d > 0)
                    let lhs = (self as i128).checked_mul(factor.denom());
                    let rhs = (other as i128).checked_mul(factor.numer());
                    match (lhs, rhs) {
                        (Some(lhs), Some(rhs)) => Some(lhs.cmp(&rhs)),
                        _ => Some(cmp_products(self as i128, factor.denom(), other as i128, factor.numer())),
                    }
                }
            }
        )+
    };
}

impl_integral_scalar!(i8, i16, i32, i64, u8, u16, u32, u64);

macro_rules! impl_real_scalar {
    ($($t:ident => $to:ident, $remainder:ident);+ $(;)?) => {
        $(
            impl Scalar for $t {
                const INTEGRAL: bool = false;
                type Promoted = $t;

                #[inline]
                fn scale(self, factor: Rational) -> Self {
                    // Pure powers of ten stay correctly rounded.
                    if factor.denom() == 1 {
                        self * factor.numer() as $t
                    } else if factor.numer() == 1 {
                        self / factor.denom() as $t
                    } else {
                        self * factor.$to()
                    }
                }

                #[inline]
                fn promote(self) -> $t {
                    self
                }

                #[inline]
                fn compare_scaled(self, other: Self, factor: Rational) -> Option<Ordering> {
                    self.partial_cmp(&other.scale(factor))
                }
            }

            impl Real for $t {
                const NAN: Self = $t::NAN;

                #[inline]
                fn ieee_remainder(self, divisor: Self) -> Self {
                    libm::$remainder(self, divisor)
                }
            }
        )+
    };
}

impl_real_scalar! {
    f64 => to_f64, remainder;
    f32 => to_f32, remainderf;
}
