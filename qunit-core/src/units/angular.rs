//! Angular units and range-wrapping helpers.
//!
//! The base unit of this dimension is [`Radian`] (base index [`ANGLE`](crate::base::ANGLE)). Units defined through
//! π ([`Degree`], [`Cycle`], the arc units) share one exact rational approximation of π, [`Pi`], so conversions among
//! them are exact: a cycle is exactly 360 degrees.
//!
//! ## Wrapping helpers
//!
//! Any `f64` quantity whose unit is an angle gets [`wrap_pos`](Quantity::wrap_pos),
//! [`wrap_signed`](Quantity::wrap_signed), [`wrap_quarter_fold`](Quantity::wrap_quarter_fold) and the separation
//! helpers. Using them on a non-angular unit does not compile.
//!
//! Wrapping follows IEEE‑754 semantics from `f64`: if the underlying numeric is `NaN` or `±∞`, results will
//! generally be `NaN`.
//!
//! ```rust
//! use qunit_core::angular::{Degrees, Radian};
//!
//! let a = Degrees::new(370.0).wrap_signed();
//! assert_eq!(a.value(), 10.0);
//!
//! let r = Degrees::new(90.0).to::<Radian>();
//! assert!((r.value() - core::f64::consts::FRAC_PI_2).abs() < 1e-12);
//! ```
//!
//! ```rust,compile_fail
//! use qunit_core::length::Meters;
//!
//! let _ = Meters::new(370.0).wrap_pos();
//! ```

use crate::base::ANGLE;
use crate::macros::register_units;
use crate::{make_unit, Quantity, Rational, Unit};

#[inline]
fn rem_euclid(x: f64, modulus: f64) -> f64 {
    #[cfg(feature = "std")]
    {
        x.rem_euclid(modulus)
    }
    #[cfg(not(feature = "std"))]
    {
        let r = crate::libm::fmod(x, modulus);
        if r < 0.0 {
            r + modulus
        } else {
            r
        }
    }
}

/// π as an exact ratio, the closest one to `core::f64::consts::PI` with a 10-digit numerator.
pub const PI_RATIO: Rational = Rational::new(14_885_392_687, 4_738_167_652);

/// Radian (SI base unit of plane angle).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "rad", base = ANGLE)]
pub struct Radian;
/// Shorthand type alias for [`Radian`].
pub type Rad = Radian;
/// A quantity measured in radians.
pub type Radians = Quantity<Rad>;
/// One radian.
pub const RAD: Radians = Radians::new(1.0);

/// Milliradian (`1/1000 rad`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mrad", def = make_unit![ratio(1, 1000), Radian])]
pub struct Milliradian;
/// A quantity measured in milliradians.
pub type Milliradians = Quantity<Milliradian>;
/// One milliradian.
pub const MRAD: Milliradians = Milliradians::new(1.0);

/// Half a turn (`π rad`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "pi", def = Radian::DEF.scaled(PI_RATIO))]
pub struct Pi;
/// A quantity measured in multiples of π radians.
pub type Pis = Quantity<Pi>;
/// π radians.
pub const PI: Pis = Pis::new(1.0);

/// Degree (`π/180 rad`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "deg", def = make_unit![ratio(1, 180), Pi])]
pub struct Degree;
/// Shorthand type alias for [`Degree`].
pub type Deg = Degree;
/// A quantity measured in degrees.
pub type Degrees = Quantity<Deg>;
/// One degree.
pub const DEG: Degrees = Degrees::new(1.0);

/// Arcminute (`1/60 deg`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "arcmin", def = make_unit![ratio(1, 60), Degree])]
pub struct Arcminute;
/// Alias for [`Arcminute`] (minute of arc).
pub type MOA = Arcminute;
/// A quantity measured in arcminutes.
pub type Arcminutes = Quantity<Arcminute>;
/// One arcminute.
pub const ARCMIN: Arcminutes = Arcminutes::new(1.0);

/// Arcsecond (`1/60 arcmin`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "arcsec", def = make_unit![ratio(1, 60), Arcminute])]
pub struct Arcsecond;
/// A quantity measured in arcseconds.
pub type Arcseconds = Quantity<Arcsecond>;
/// One arcsecond.
pub const ARCSEC: Arcseconds = Arcseconds::new(1.0);

/// Milliarcsecond (`1/1000 arcsec`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mas", def = make_unit![ratio(1, 1000), Arcsecond])]
pub struct MilliArcsecond;
/// A quantity measured in milliarcseconds.
pub type MilliArcseconds = Quantity<MilliArcsecond>;
/// One milliarcsecond.
pub const MAS: MilliArcseconds = MilliArcseconds::new(1.0);

/// Microarcsecond (`1/1000 mas`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "µas", def = make_unit![ratio(1, 1000), MilliArcsecond])]
pub struct MicroArcsecond;
/// A quantity measured in microarcseconds.
pub type MicroArcseconds = Quantity<MicroArcsecond>;
/// One microarcsecond.
pub const UAS: MicroArcseconds = MicroArcseconds::new(1.0);

/// Gradian (`9/10 deg`, a right angle is 100 gon).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "gon", def = make_unit![ratio(9, 10), Degree])]
pub struct Gradian;
/// A quantity measured in gradians.
pub type Gradians = Quantity<Gradian>;
/// One gradian.
pub const GON: Gradians = Gradians::new(1.0);

/// Hour angle (`15 deg`, one hour of sidereal rotation).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "HA", def = make_unit![ratio(15), Degree])]
pub struct HourAngle;
/// A quantity measured in hour angles.
pub type HourAngles = Quantity<HourAngle>;
/// One hour angle.
pub const HOUR_ANGLE: HourAngles = HourAngles::new(1.0);

/// Full revolution (`2π rad`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "cyc", def = make_unit![ratio(2), Pi])]
pub struct Cycle;
/// Alias for [`Cycle`].
pub type Turn = Cycle;
/// A quantity measured in cycles.
pub type Cycles = Quantity<Cycle>;
/// One full turn.
pub const CYCLE: Cycles = Cycles::new(1.0);

/// One full turn expressed in `U`.
#[inline]
fn full_turn<U: Unit>() -> f64 {
    let turn = const {
        assert!(U::DEF.is_compatible(&Radian::DEF), "unit is not an angle");
        Cycle::DEF.conversion_factor(&U::DEF)
    };
    turn.to_f64()
}

impl<U: Unit> Quantity<U> {
    /// Wrap into the positive range `[0, FULL_TURN)` using Euclidean remainder.
    #[inline]
    pub fn wrap_pos(self) -> Self {
        Self::new(rem_euclid(self.value(), full_turn::<U>()))
    }

    /// Wrap into the signed range `(-HALF_TURN, HALF_TURN]`.
    ///
    /// *Upper bound is inclusive*; lower bound is exclusive. Useful for computing minimal signed angular differences.
    #[inline]
    pub fn wrap_signed(self) -> Self {
        let full = full_turn::<U>();
        let half = 0.5 * full;
        let y = rem_euclid(self.value() + half, full) - half;
        let norm = if y <= -half { y + full } else { y };
        Self::new(norm)
    }

    /// "Latitude fold": map into `[-QUARTER_TURN, +QUARTER_TURN]`.
    #[inline]
    pub fn wrap_quarter_fold(self) -> Self {
        let full = full_turn::<U>();
        let half = 0.5 * full;
        let quarter = 0.25 * full;
        let y = rem_euclid(self.value() + quarter, full);
        // quarter - |y - half| yields [-quarter, quarter]
        Self::new(quarter - (y - half).abs())
    }

    /// Signed smallest angular separation in `(-HALF_TURN, HALF_TURN]`.
    #[inline]
    pub fn signed_separation(self, other: Self) -> Self {
        (self - other).wrap_signed()
    }

    /// Absolute smallest angular separation (magnitude only).
    #[inline]
    pub fn abs_separation(self, other: Self) -> Self {
        self.signed_separation(other).abs()
    }
}

crate::impl_unit_conversions!(
    Radian,
    Milliradian,
    Pi,
    Degree,
    Arcminute,
    Arcsecond,
    MilliArcsecond,
    MicroArcsecond,
    Gradian,
    HourAngle,
    Cycle
);

register_units!(
    Radian,
    Milliradian,
    Pi,
    Degree,
    Arcminute,
    Arcsecond,
    MilliArcsecond,
    MicroArcsecond,
    Gradian,
    HourAngle,
    Cycle
);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use core::f64::consts::PI as F64_PI;
    use proptest::prelude::*;

    // ─────────────────────────────────────────────────────────────────────────────
    // Exact relations
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn pi_ratio_is_f64_pi() {
        assert_eq!(PI_RATIO.to_f64(), F64_PI);
    }

    #[test]
    fn cycle_is_exactly_360_degrees() {
        assert_eq!(Cycle::DEF.conversion_factor(&Degree::DEF), Rational::integer(360));
        assert_eq!(Quantity::<Cycle, i32>::new(2).to::<Degree>().value(), 720);
        assert_eq!(Quantity::<Degree, i64>::new(1).to::<Arcsecond>().value(), 3600);
        assert_eq!(Quantity::<Gradian, i64>::new(100).to::<Arcminute>().value(), 5400);
    }

    #[test]
    fn degrees_to_radians() {
        assert_relative_eq!(Degrees::new(180.0).to::<Radian>().value(), F64_PI, max_relative = 1e-15);
        assert_relative_eq!(RAD.to::<Degree>().value(), 180.0 / F64_PI, max_relative = 1e-15);
        assert_eq!(HOUR_ANGLE.to::<Degree>().value(), 15.0);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Wrapping
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn wrap_pos_degrees() {
        assert_eq!(Degrees::new(370.0).wrap_pos().value(), 10.0);
        assert_eq!(Degrees::new(-10.0).wrap_pos().value(), 350.0);
        assert_eq!(Degrees::new(720.0).wrap_pos().value(), 0.0);
    }

    #[test]
    fn wrap_signed_bounds() {
        assert_eq!(Degrees::new(180.0).wrap_signed().value(), 180.0);
        assert_eq!(Degrees::new(-180.0).wrap_signed().value(), 180.0);
        assert_eq!(Degrees::new(190.0).wrap_signed().value(), -170.0);
    }

    #[test]
    fn wrap_in_radians() {
        let wrapped = Radians::new(3.0 * F64_PI).wrap_pos();
        assert_abs_diff_eq!(wrapped.value(), F64_PI, epsilon = 1e-12);
    }

    #[test]
    fn quarter_fold() {
        assert_eq!(Degrees::new(100.0).wrap_quarter_fold().value(), 80.0);
        assert_eq!(Degrees::new(-100.0).wrap_quarter_fold().value(), -80.0);
        assert_eq!(Degrees::new(45.0).wrap_quarter_fold().value(), 45.0);
    }

    #[test]
    fn separations() {
        let a = Degrees::new(350.0);
        let b = Degrees::new(10.0);
        assert_eq!(a.signed_separation(b).value(), -20.0);
        assert_eq!(b.abs_separation(a).value(), 20.0);
    }

    #[test]
    fn display() {
        assert_eq!(Degrees::new(45.0).to_string(), "45 deg");
        assert_eq!(UAS.to_string(), "1 µas");
    }

    proptest! {
        #[test]
        fn prop_wrap_pos_in_range(value in -1.0e6f64..1.0e6) {
            let wrapped = Degrees::new(value).wrap_pos().value();
            prop_assert!((0.0..360.0).contains(&wrapped));
        }

        #[test]
        fn prop_wrap_signed_in_range(value in -1.0e6f64..1.0e6) {
            let wrapped = Degrees::new(value).wrap_signed().value();
            prop_assert!(wrapped > -180.0 && wrapped <= 180.0);
        }
    }
}
