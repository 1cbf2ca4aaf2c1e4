//! Quantity type and its implementations.

use crate::ratio::Rational;
use crate::scalar::{Real, Scalar};
use crate::unit::{Per, Pow, Prod, Sqrt, Unit, Unitless, UNKNOWN_SYMBOL};
use core::cmp::Ordering;
use core::fmt;
use core::marker::PhantomData;
use core::ops::*;

/// A value tagged with a unit.
///
/// `Quantity<U, V>` stores a single `V` (an `f64` unless stated otherwise) and carries the unit `U` as phantom type
/// information only. Operations that mix units check compatibility at compile time: adding metres to seconds does not
/// build, adding feet to metres converts the feet first.
///
/// # Examples
///
/// ```rust
/// use qunit_core::length::{Feet, Meter, Meters};
///
/// let total = Meters::new(1.0) + Feet::new(1.0);
/// assert!((total.value() - 1.3048).abs() < 1e-12);
///
/// let back: Meters = Feet::new(10.0).to::<Meter>();
/// assert!((back.value() - 3.048).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Quantity<U: Unit, V: Scalar = f64>(V, PhantomData<U>);

impl<U: Unit, V: Scalar> Quantity<U, V> {
    /// Creates a new quantity with the given value.
    ///
    /// ```rust
    /// use qunit_core::length::Meters;
    /// let d = Meters::new(3.0);
    /// assert_eq!(d.value(), 3.0);
    /// ```
    #[inline]
    pub const fn new(value: V) -> Self {
        Self(value, PhantomData)
    }

    /// Returns the raw numeric value, expressed in `U`.
    #[inline]
    pub fn value(self) -> V {
        self.0
    }

    /// Converts this quantity to another, compatible unit.
    ///
    /// The conversion factor is the exact ratio of the two units' scales. Incompatible units are a compile error, and
    /// so is a non-integral factor when `V` is an integer type (use [`to_promoted`](Self::to_promoted) for those).
    ///
    /// Integral values are never promoted behind your back: the value type of the result is fixed by the signature,
    /// and it cannot depend on whether the factor happens to be integral. The same rule covers mixed-unit `+`, `-`
    /// and `%`, so `Quantity<Meter, i64> + Quantity<Foot, i64>` does not build; promote one side first.
    ///
    /// ```rust
    /// use qunit_core::length::{Centimeter, Meters};
    ///
    /// let cm = Meters::new(1.0).to::<Centimeter>();
    /// assert_eq!(cm.value(), 100.0);
    ///
    /// let exact = qunit_core::Quantity::<qunit_core::length::Kilometer, i64>::new(3).to::<Centimeter>();
    /// assert_eq!(exact.value(), 300_000);
    /// ```
    ///
    /// ```rust,compile_fail
    /// use qunit_core::length::Meters;
    /// use qunit_core::time::Second;
    ///
    /// let _ = Meters::new(1.0).to::<Second>();
    /// ```
    #[inline]
    pub fn to<T: Unit>(self) -> Quantity<T, V> {
        let factor = const {
            assert!(U::DEF.is_compatible(&T::DEF), "units are not compatible");
            assert!(
                !V::INTEGRAL || U::DEF.conversion_factor(&T::DEF).is_integer(),
                "conversion factor is not an integer; use `to_promoted`"
            );
            U::DEF.conversion_factor(&T::DEF)
        };
        Quantity::new(self.0.scale(factor))
    }

    /// Converts to a compatible unit, widening integer values to `f64` first.
    ///
    /// ```rust
    /// use qunit_core::length::{Meter, Millimeter};
    /// use qunit_core::Quantity;
    ///
    /// let mm = Quantity::<Millimeter, i32>::new(1500);
    /// let m: Quantity<Meter, f64> = mm.to_promoted();
    /// assert_eq!(m.value(), 1.5);
    /// ```
    #[inline]
    pub fn to_promoted<T: Unit>(self) -> Quantity<T, V::Promoted> {
        let factor = const {
            assert!(U::DEF.is_compatible(&T::DEF), "units are not compatible");
            U::DEF.conversion_factor(&T::DEF)
        };
        Quantity::new(self.0.promote().scale(factor))
    }

    /// Returns the value as a plain number. Only dimensionless units qualify; the unit's scale is applied.
    ///
    /// `From`/`Into` give the same number without scaling, and so accept only the trivial unit (`m/m`, `s/s`).
    ///
    /// ```rust
    /// use qunit_core::length::{Kilometers, Meters};
    ///
    /// let ratio = Kilometers::new(3.0) / Meters::new(1.0);
    /// assert_eq!(ratio.into_number(), 3000.0);
    ///
    /// let plain: f64 = (Meters::new(3.0) / Meters::new(1.5)).into();
    /// assert_eq!(plain, 2.0);
    /// ```
    ///
    /// ```rust,compile_fail
    /// use qunit_core::length::{Kilometers, Meters};
    ///
    /// let _: f64 = (Kilometers::new(3.0) / Meters::new(1.0)).into();
    /// ```
    #[inline]
    pub fn into_number(self) -> V {
        self.to::<Unitless>().0
    }

    /// Returns the absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.0.abs_value())
    }

    /// Returns the smaller of two quantities of the same unit.
    ///
    /// ```rust
    /// use qunit_core::length::Meters;
    /// let a = Meters::new(3.0);
    /// let b = Meters::new(5.0);
    /// assert_eq!(a.min(b).value(), 3.0);
    /// ```
    #[inline]
    pub fn min(self, other: Self) -> Self {
        if other.0 < self.0 {
            other
        } else {
            self
        }
    }

    /// Returns the larger of two quantities of the same unit.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        if other.0 > self.0 {
            other
        } else {
            self
        }
    }

    /// Raises the quantity to an integral power; the unit follows (`m` becomes `m^N`).
    ///
    /// Negative powers of integral values truncate like integer division.
    ///
    /// ```rust
    /// use qunit_core::length::{Meter, Meters};
    /// use qunit_core::{Prod, Quantity};
    ///
    /// let area = Meters::new(3.0).powi::<2>();
    /// let same: Quantity<Prod<Meter, Meter>> = area.to();
    /// assert_eq!(same.value(), 9.0);
    /// ```
    #[inline]
    pub fn powi<const N: i128>(self) -> Quantity<Pow<U, N>, V> {
        let magnitude = num_traits::pow(self.0, N.unsigned_abs() as usize);
        if N < 0 {
            Quantity::new(V::one() / magnitude)
        } else {
            Quantity::new(magnitude)
        }
    }
}

impl<U: Unit, V: Real> Quantity<U, V> {
    /// A constant representing NaN for this quantity type.
    ///
    /// ```rust
    /// use qunit_core::length::Meters;
    /// assert!(Meters::NAN.value().is_nan());
    /// ```
    pub const NAN: Self = Self::new(V::NAN);

    /// Square root; the unit becomes `U^(1/2)`, which only exists for base units.
    ///
    /// ```rust
    /// use qunit_core::length::{Meter, Meters};
    /// use qunit_core::{Prod, Quantity, Sqrt};
    ///
    /// let side: Quantity<Sqrt<Meter>> = Meters::new(16.0).sqrt();
    /// let back: Quantity<Prod<Sqrt<Meter>, Sqrt<Meter>>> = side * side;
    /// assert_eq!(back.to::<Meter>().value(), 16.0);
    /// ```
    #[inline]
    pub fn sqrt(self) -> Quantity<Sqrt<U>, V> {
        const {
            assert!(
                U::DEF.checked_pow(Rational::new(1, 2)).is_ok(),
                "Fractional powers of units are not allowed"
            )
        };
        Quantity::new(self.0.sqrt())
    }

    /// `sqrt(self² + other²)`, in the unit of `self`.
    ///
    /// ```rust
    /// use qunit_core::length::{Centimeters, Meters};
    ///
    /// let diagonal = Meters::new(3.0).hypot(Centimeters::new(400.0));
    /// assert_eq!(diagonal.value(), 5.0);
    /// ```
    #[inline]
    pub fn hypot<R: Unit>(self, other: Quantity<R, V>) -> Self {
        Self::new(self.0.hypot(other.to::<U>().0))
    }

    /// Positive difference: `self - other` when that is positive, zero otherwise, NaN if either is NaN.
    #[inline]
    pub fn fdim<R: Unit>(self, other: Quantity<R, V>) -> Self {
        let other = other.to::<U>().0;
        if self.0 > other {
            Self::new(self.0 - other)
        } else if self.0 <= other {
            Self::new(V::zero())
        } else {
            Self::NAN
        }
    }

    /// Fused `self · factor + addend`; `addend` is converted into the product unit.
    ///
    /// ```rust
    /// use qunit_core::derived::{Joules, Newtons};
    /// use qunit_core::length::Meters;
    ///
    /// let work = Newtons::new(2.0).fma(Meters::new(3.0), Joules::new(1.0));
    /// assert_eq!(work.to_string(), "7 J");
    /// ```
    #[inline]
    pub fn fma<R: Unit, S: Unit>(self, factor: Quantity<R, V>, addend: Quantity<S, V>) -> Quantity<Prod<U, R>, V> {
        Quantity::new(self.0.mul_add(factor.0, addend.to::<Prod<U, R>>().0))
    }

    /// Magnitude of `self` with the sign of `sign`, whatever its unit.
    #[inline]
    pub fn copysign<R: Unit>(self, sign: Quantity<R, V>) -> Self {
        Self::new(self.0.copysign(sign.0))
    }

    /// IEEE remainder by a compatible quantity: the quotient is rounded to the nearest integer, so the result can be
    /// negative.
    ///
    /// ```rust
    /// use qunit_core::angular::Degrees;
    ///
    /// let r = Degrees::new(350.0).remainder(Degrees::new(360.0));
    /// assert_eq!(r.value(), -10.0);
    /// ```
    #[inline]
    pub fn remainder<R: Unit>(self, divisor: Quantity<R, V>) -> Self {
        Self::new(self.0.ieee_remainder(divisor.to::<U>().0))
    }

    /// Truncated remainder by a compatible quantity; same as `%`.
    #[inline]
    pub fn fmod<R: Unit>(self, divisor: Quantity<R, V>) -> Self {
        self % divisor
    }

    /// Largest integral value not above `self`, in the same unit.
    #[inline]
    pub fn floor(self) -> Self {
        Self::new(self.0.floor())
    }

    /// Smallest integral value not below `self`, in the same unit.
    #[inline]
    pub fn ceil(self) -> Self {
        Self::new(self.0.ceil())
    }

    /// Integral part of `self`, in the same unit.
    #[inline]
    pub fn trunc(self) -> Self {
        Self::new(self.0.trunc())
    }

    /// Nearest integral value, halves away from zero.
    #[inline]
    pub fn round(self) -> Self {
        Self::new(self.0.round())
    }

    /// `true` if the value is NaN.
    #[inline]
    pub fn is_nan(self) -> bool {
        self.0.is_nan()
    }

    /// `true` if the value is neither infinite nor NaN.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl<U: Unit, V: Scalar> Default for Quantity<U, V> {
    fn default() -> Self {
        Self::new(V::zero())
    }
}

impl<U: Unit, V: Scalar> From<V> for Quantity<U, V> {
    fn from(value: V) -> Self {
        Self::new(value)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Display
// ─────────────────────────────────────────────────────────────────────────────

fn write_symbol<U: Unit>(f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if U::SYMBOL != UNKNOWN_SYMBOL {
        if !U::SYMBOL.is_empty() {
            write!(f, " {}", U::SYMBOL)?;
        }
        return Ok(());
    }
    if U::DEF.is_trivial() {
        return Ok(());
    }
    f.write_str(" ")?;
    #[cfg(feature = "std")]
    {
        crate::registry::global().write_def(&U::DEF, f)
    }
    #[cfg(not(feature = "std"))]
    {
        U::DEF.write_with(f, |_| None)
    }
}

/// `"{value} {symbol}"`; formatting flags apply to the value.
///
/// ```rust
/// use qunit_core::length::Meters;
/// use qunit_core::time::Seconds;
///
/// assert_eq!(format!("{:.2}", Meters::new(1.0 / 3.0)), "0.33 m");
/// assert_eq!((Meters::new(6.0) / Seconds::new(2.0)).to_string(), "3 m·s^-1");
/// ```
impl<U: Unit, V: Scalar + fmt::Display> fmt::Display for Quantity<U, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)?;
        write_symbol::<U>(f)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operators between quantities
// ─────────────────────────────────────────────────────────────────────────────

impl<U: Unit, R: Unit, V: Scalar> Add<Quantity<R, V>> for Quantity<U, V> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Quantity<R, V>) -> Self {
        Self::new(self.0 + rhs.to::<U>().0)
    }
}

impl<U: Unit, R: Unit, V: Scalar> AddAssign<Quantity<R, V>> for Quantity<U, V> {
    #[inline]
    fn add_assign(&mut self, rhs: Quantity<R, V>) {
        self.0 = self.0 + rhs.to::<U>().0;
    }
}

impl<U: Unit, R: Unit, V: Scalar> Sub<Quantity<R, V>> for Quantity<U, V> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Quantity<R, V>) -> Self {
        Self::new(self.0 - rhs.to::<U>().0)
    }
}

impl<U: Unit, R: Unit, V: Scalar> SubAssign<Quantity<R, V>> for Quantity<U, V> {
    #[inline]
    fn sub_assign(&mut self, rhs: Quantity<R, V>) {
        self.0 = self.0 - rhs.to::<U>().0;
    }
}

impl<U: Unit, R: Unit, V: Scalar> Mul<Quantity<R, V>> for Quantity<U, V> {
    type Output = Quantity<Prod<U, R>, V>;
    #[inline]
    fn mul(self, rhs: Quantity<R, V>) -> Self::Output {
        Quantity::new(self.0 * rhs.0)
    }
}

impl<U: Unit, R: Unit, V: Scalar> Div<Quantity<R, V>> for Quantity<U, V> {
    type Output = Quantity<Per<U, R>, V>;
    #[inline]
    fn div(self, rhs: Quantity<R, V>) -> Self::Output {
        Quantity::new(self.0 / rhs.0)
    }
}

/// Remainder by a compatible quantity, taken in the unit of the left operand.
///
/// ```rust
/// use qunit_core::length::{Meter, Millimeter};
/// use qunit_core::Quantity;
///
/// let left = Quantity::<Millimeter, i64>::new(2500) % Quantity::<Meter, i64>::new(1);
/// assert_eq!(left.value(), 500);
/// ```
impl<U: Unit, R: Unit, V: Scalar> Rem<Quantity<R, V>> for Quantity<U, V> {
    type Output = Self;
    #[inline]
    fn rem(self, rhs: Quantity<R, V>) -> Self {
        Self::new(self.0 % rhs.to::<U>().0)
    }
}

impl<U: Unit, V: Scalar + Neg<Output = V>> Neg for Quantity<U, V> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operators with scalars
// ─────────────────────────────────────────────────────────────────────────────

impl<U: Unit, V: Scalar> Mul<V> for Quantity<U, V> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: V) -> Self {
        Self::new(self.0 * rhs)
    }
}

impl<U: Unit, V: Scalar> Div<V> for Quantity<U, V> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: V) -> Self {
        Self::new(self.0 / rhs)
    }
}

impl<U: Unit, V: Scalar> Rem<V> for Quantity<U, V> {
    type Output = Self;
    #[inline]
    fn rem(self, rhs: V) -> Self {
        Self::new(self.0 % rhs)
    }
}

impl<U: Unit, V: Scalar> MulAssign<V> for Quantity<U, V> {
    #[inline]
    fn mul_assign(&mut self, rhs: V) {
        self.0 = self.0 * rhs;
    }
}

impl<U: Unit, V: Scalar> DivAssign<V> for Quantity<U, V> {
    #[inline]
    fn div_assign(&mut self, rhs: V) {
        self.0 = self.0 / rhs;
    }
}

macro_rules! impl_scalar_interop {
    ($($t:ty),+ $(,)?) => {
        $(
            impl<U: Unit> Mul<Quantity<U, $t>> for $t {
                type Output = Quantity<U, $t>;
                #[inline]
                fn mul(self, rhs: Quantity<U, $t>) -> Quantity<U, $t> {
                    rhs * self
                }
            }

            impl<U: Unit> From<Quantity<U, $t>> for $t {
                #[inline]
                fn from(q: Quantity<U, $t>) -> $t {
                    const { assert!(U::DEF.is_trivial(), "quantity is not dimensionless") };
                    q.0
                }
            }
        )+
    };
}

impl_scalar_interop!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

// ─────────────────────────────────────────────────────────────────────────────
// Comparisons
// ─────────────────────────────────────────────────────────────────────────────

impl<U: Unit, V: Scalar> Quantity<U, V> {
    #[inline]
    fn compare<R: Unit>(&self, rhs: &Quantity<R, V>) -> Option<Ordering> {
        let factor = const {
            assert!(R::DEF.is_compatible(&U::DEF), "units are not compatible");
            R::DEF.conversion_factor(&U::DEF)
        };
        self.0.compare_scaled(rhs.0, factor)
    }
}

impl<U: Unit, R: Unit, V: Scalar> PartialEq<Quantity<R, V>> for Quantity<U, V> {
    #[inline]
    fn eq(&self, rhs: &Quantity<R, V>) -> bool {
        self.compare(rhs) == Some(Ordering::Equal)
    }
}

impl<U: Unit, R: Unit, V: Scalar> PartialOrd<Quantity<R, V>> for Quantity<U, V> {
    #[inline]
    fn partial_cmp(&self, rhs: &Quantity<R, V>) -> Option<Ordering> {
        self.compare(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit::{prefix::Kilo, Scaled, Squared};
    use crate::{base_unit, UnitDef};
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    // ─────────────────────────────────────────────────────────────────────────────
    // Test units
    // ─────────────────────────────────────────────────────────────────────────────

    #[derive(Clone, Copy, Debug, PartialEq)]
    pub enum TestUnit {}
    impl Unit for TestUnit {
        const DEF: UnitDef = base_unit(40);
        const SYMBOL: &'static str = "tu";
    }

    #[derive(Clone, Copy, Debug, PartialEq)]
    pub enum OtherUnit {}
    impl Unit for OtherUnit {
        const DEF: UnitDef = base_unit(41);
        const SYMBOL: &'static str = "ou";
    }

    type DoubleTestUnit = Scaled<TestUnit, 2>;
    type HalfTestUnit = Scaled<TestUnit, 1, 2>;
    type KiloTestUnit = Kilo<TestUnit>;

    type TU = Quantity<TestUnit>;
    type Dtu = Quantity<DoubleTestUnit>;
    type Htu = Quantity<HalfTestUnit>;

    // ─────────────────────────────────────────────────────────────────────────────
    // Core behaviour
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn new_value_default() {
        assert_eq!(TU::new(42.0).value(), 42.0);
        assert_eq!(TU::default().value(), 0.0);
        assert_eq!(Quantity::<TestUnit, i32>::default().value(), 0);
        let q: TU = 123.456.into();
        assert_eq!(q.value(), 123.456);
    }

    #[test]
    fn nan_constant() {
        assert!(TU::NAN.value().is_nan());
        assert!(Quantity::<TestUnit, f32>::NAN.value().is_nan());
    }

    #[test]
    fn abs_min_max() {
        assert_eq!(TU::new(-5.0).abs().value(), 5.0);
        assert_eq!(Quantity::<TestUnit, i64>::new(-5).abs().value(), 5);
        let (a, b) = (TU::new(5.0), TU::new(3.0));
        assert_eq!(a.min(b).value(), 3.0);
        assert_eq!(b.min(a).value(), 3.0);
        assert_eq!(a.max(b).value(), 5.0);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Conversion
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn conversion_to_same_unit() {
        assert_eq!(TU::new(10.0).to::<TestUnit>().value(), 10.0);
    }

    #[test]
    fn conversion_to_scaled_unit() {
        // 1 dtu = 2 tu
        assert_relative_eq!(TU::new(10.0).to::<DoubleTestUnit>().value(), 5.0);
        assert_relative_eq!(Dtu::new(10.0).to::<HalfTestUnit>().value(), 40.0);
    }

    #[test]
    fn integer_conversion_by_integral_factor() {
        let k = Quantity::<KiloTestUnit, i32>::new(7);
        assert_eq!(k.to::<TestUnit>().value(), 7000);
        assert_eq!(k.to::<HalfTestUnit>().value(), 14000);
    }

    #[test]
    fn integer_conversion_promotes() {
        let t = Quantity::<TestUnit, i32>::new(1500);
        let k: Quantity<KiloTestUnit, f64> = t.to_promoted();
        assert_relative_eq!(k.value(), 1.5);
        let f = TU::new(2.0).to_promoted::<DoubleTestUnit>();
        assert_relative_eq!(f.value(), 1.0);
    }

    #[test]
    fn dimensionless_into_number() {
        let ratio = TU::new(3.0) / Dtu::new(1.0);
        assert_relative_eq!(ratio.into_number(), 1.5);
        let plain: f64 = Quantity::<Unitless>::new(2.5).into();
        assert_eq!(plain, 2.5);
        let count: i32 = Quantity::<Unitless, i32>::new(4).into();
        assert_eq!(count, 4);
    }

    #[test]
    fn trivial_unit_converts_into_number() {
        let same: f64 = (TU::new(3.0) / TU::new(1.5)).into();
        assert_eq!(same, 2.0);
        let mixed: f32 = (Quantity::<Prod<TestUnit, OtherUnit>, f32>::new(6.0)
            / Quantity::<Prod<OtherUnit, TestUnit>, f32>::new(2.0))
        .into();
        assert_eq!(mixed, 3.0);
        let ticks: i32 = (Quantity::<OtherUnit, i32>::new(12) / Quantity::<OtherUnit, i32>::new(4)).into();
        assert_eq!(ticks, 3);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Arithmetic
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn add_sub_same_unit() {
        assert_eq!((TU::new(3.0) + TU::new(7.0)).value(), 10.0);
        assert_eq!((TU::new(10.0) - TU::new(3.0)).value(), 7.0);
    }

    #[test]
    fn add_sub_converts_rhs_into_lhs_unit() {
        let sum = TU::new(1.0) + Dtu::new(1.0);
        assert_relative_eq!(sum.value(), 3.0);
        let diff = Dtu::new(1.0) - TU::new(1.0);
        assert_relative_eq!(diff.value(), 0.5);
        let ints = Quantity::<TestUnit, i64>::new(1) + Quantity::<KiloTestUnit, i64>::new(2);
        assert_eq!(ints.value(), 2001);
    }

    #[test]
    fn assign_operators() {
        let mut q = TU::new(5.0);
        q += TU::new(3.0);
        assert_eq!(q.value(), 8.0);
        q -= Htu::new(4.0);
        assert_eq!(q.value(), 6.0);
        q *= 2.0;
        assert_eq!(q.value(), 12.0);
        q /= 4.0;
        assert_eq!(q.value(), 3.0);
    }

    #[test]
    fn scalar_operators() {
        let q = TU::new(10.0);
        assert_eq!((q * 3.0).value(), 30.0);
        assert_eq!((3.0 * q).value(), 30.0);
        assert_eq!((q / 4.0).value(), 2.5);
        assert_eq!((q % 3.0).value(), 1.0);
        assert_eq!((-q).value(), -10.0);
        assert_eq!((2u8 * Quantity::<TestUnit, u8>::new(21)).value(), 42);
    }

    #[test]
    fn product_and_quotient_units() {
        let area = TU::new(3.0) * TU::new(4.0);
        assert_eq!(area.value(), 12.0);
        assert_eq!(<Prod<TestUnit, TestUnit>>::DEF, <Squared<TestUnit>>::DEF);

        let mixed: Quantity<Per<TestUnit, OtherUnit>> = TU::new(100.0) / Quantity::<OtherUnit>::new(20.0);
        assert_eq!(mixed.value(), 5.0);

        let recovered = mixed * Quantity::<OtherUnit>::new(4.0);
        assert_relative_eq!(recovered.to::<TestUnit>().value(), 20.0);
    }

    #[test]
    fn powi_and_sqrt() {
        let cube = TU::new(2.0).powi::<3>();
        assert_eq!(cube.value(), 8.0);
        assert_eq!(<Pow<TestUnit, 3>>::DEF.powers()[0].exponent(), Rational::integer(3));
        assert_eq!(TU::new(2.0).powi::<-2>().value(), 0.25);
        assert_eq!(Quantity::<TestUnit, i32>::new(3).powi::<0>().into_number(), 1);

        let root = TU::new(9.0).sqrt();
        assert_eq!(root.value(), 3.0);
        assert_eq!((root * root).to::<TestUnit>().value(), 9.0);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Floating helpers
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn hypot_and_fdim_use_receiver_unit() {
        assert_eq!(TU::new(3.0).hypot(TU::new(4.0)).value(), 5.0);
        // 8 half-units are 4 units
        assert_eq!(TU::new(3.0).hypot(Htu::new(8.0)).value(), 5.0);
        assert_eq!(Dtu::new(3.0).hypot(TU::new(8.0)).value(), 5.0);

        assert_eq!(TU::new(5.0).fdim(Dtu::new(1.0)).value(), 3.0);
        assert_eq!(TU::new(1.0).fdim(Dtu::new(1.0)).value(), 0.0);
        assert!(TU::NAN.fdim(TU::new(1.0)).is_nan());
        assert!(TU::new(1.0).fdim(Dtu::NAN).is_nan());
    }

    #[test]
    fn fma_converts_addend_into_product_unit() {
        let x = TU::new(2.0);
        let y = Quantity::<OtherUnit>::new(3.0);
        assert_eq!(x.fma(y, Quantity::<Prod<TestUnit, OtherUnit>>::new(1.0)).value(), 7.0);
        assert_eq!(x.fma(y, Quantity::<Prod<OtherUnit, DoubleTestUnit>>::new(1.0)).value(), 8.0);
    }

    #[test]
    fn copysign_ignores_sign_unit() {
        assert_eq!(TU::new(3.0).copysign(Quantity::<OtherUnit>::new(-1.0)).value(), -3.0);
        assert_eq!(TU::new(-3.0).copysign(TU::new(0.0)).value(), 3.0);
    }

    #[test]
    fn remainders_by_quantity() {
        // 2 dtu = 4 tu
        assert_eq!(TU::new(7.0).remainder(Dtu::new(2.0)).value(), -1.0);
        assert_eq!(TU::new(7.0).fmod(Dtu::new(2.0)).value(), 3.0);
        assert_eq!((TU::new(7.0) % Dtu::new(2.0)).value(), 3.0);
        assert_eq!((TU::new(-7.0) % TU::new(4.0)).value(), -3.0);

        let units = Quantity::<TestUnit, i32>::new(2500) % Quantity::<KiloTestUnit, i32>::new(1);
        assert_eq!(units.value(), 500);
        assert_eq!((Quantity::<TestUnit, u16>::new(9) % Quantity::<TestUnit, u16>::new(4)).value(), 1);
    }

    #[test]
    fn rounding_keeps_unit() {
        let q = TU::new(2.5);
        assert_eq!(q.floor().value(), 2.0);
        assert_eq!(q.ceil().value(), 3.0);
        assert_eq!(q.round().value(), 3.0);
        assert_eq!((-q).round().value(), -3.0);
        assert_eq!((-q).trunc().value(), -2.0);
        assert_eq!(Quantity::<TestUnit, f32>::new(-2.5).floor().value(), -3.0);
    }

    #[test]
    fn nan_and_finite_checks() {
        assert!(TU::NAN.is_nan());
        assert!(!TU::NAN.is_finite());
        assert!(!TU::new(f64::INFINITY).is_finite());
        assert!(!TU::new(f64::INFINITY).is_nan());
        assert!(TU::new(1.0).is_finite());
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Comparison
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn comparison_across_units() {
        assert!(TU::new(2.0) == Dtu::new(1.0));
        assert!(TU::new(2.0) != Dtu::new(1.5));
        assert!(Htu::new(3.0) < TU::new(2.0));
        assert!(Dtu::new(1.0) >= TU::new(2.0));
        assert!(TU::new(1.0) > Htu::new(1.0));
    }

    #[test]
    fn integer_comparison_is_exact() {
        type Third = Scaled<TestUnit, 1, 3>;
        let a = Quantity::<TestUnit, i64>::new(1);
        let b = Quantity::<Third, i64>::new(3);
        assert!(a == b);
        assert!(a < Quantity::<Third, i64>::new(4));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Display
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn display_uses_symbol_and_flags() {
        assert_eq!(TU::new(1.5).to_string(), "1.5 tu");
        assert_eq!(format!("{:.3}", TU::new(2.0)), "2.000 tu");
        assert_eq!(Quantity::<Unitless>::new(2.0).to_string(), "2");
        assert_eq!(Quantity::<TestUnit, i32>::new(-4).to_string(), "-4 tu");
    }

    #[test]
    fn display_composes_unnamed_units() {
        let rate = TU::new(6.0) / Quantity::<OtherUnit>::new(2.0);
        assert_eq!(rate.to_string(), "3 b40·b41^-1");
        assert_eq!(Dtu::new(1.0).to_string(), "1 (2)·b40");
        assert_eq!((TU::new(1.0) / TU::new(1.0)).to_string(), "1");
    }

    proptest! {
        #[test]
        fn prop_conversion_round_trip(value in -1.0e9f64..1.0e9) {
            let original = Dtu::new(value);
            let back = original.to::<KiloTestUnit>().to::<HalfTestUnit>().to::<DoubleTestUnit>();
            prop_assert!((back.value() - value).abs() <= 1e-9 * value.abs().max(1.0));
        }

        #[test]
        fn prop_remainder_is_bounded(value in -1.0e6f64..1.0e6, divisor in 0.5f64..100.0) {
            let r = TU::new(value).fmod(TU::new(divisor)).value();
            prop_assert!(r.abs() < divisor);
            let ieee = TU::new(value).remainder(TU::new(divisor)).value();
            prop_assert!(ieee.abs() <= divisor / 2.0);
        }

        #[test]
        fn prop_integer_round_trip_is_exact(value in -1_000_000i64..1_000_000) {
            let k = Quantity::<KiloTestUnit, i64>::new(value);
            let half = k.to::<DoubleTestUnit>().to::<HalfTestUnit>();
            prop_assert_eq!(half.value(), value * 2000);
            prop_assert!(half == k);
        }
    }
}
