//! Unit definitions, the [`Unit`] trait and the composite unit types.
//!
//! A unit is an exact scale factor times a canonical product of base-unit powers ([`UnitDef`]). Every unit *type*
//! carries its definition as an associated constant, so composing unit types (`Prod`, `Per`, `Pow`, `Scaled`) runs
//! the unit algebra inside the compiler. An invalid composition (a fractional power of a compound unit, say) fails to
//! build with a message naming the violated rule.

use crate::canonical::{canonicalize, PowerBuffer};
use crate::error::{const_try, UnitError};
use crate::power::Power;
use crate::ratio::Rational;
use core::fmt::{self, Debug, Write};
use core::marker::PhantomData;

/// Maximum number of distinct base units in one [`UnitDef`].
pub const MAX_BASES: usize = 16;

/// Placeholder symbol of a unit that was not given a name.
pub const UNKNOWN_SYMBOL: &str = "?";

/// Canonical description of a unit: `scale · Π base^exponent`.
///
/// Values are only produced through canonicalization, so powers are unique per base, sorted by base index and never
/// zero. Unused slots hold a fixed marker, which makes the derived `Eq` and `Hash` structural.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UnitDef {
    scale: Rational,
    powers: [Power; MAX_BASES],
    len: usize,
}

/// The unit with scale one and no dimension.
pub const DIMENSIONLESS: UnitDef = UnitDef::DIMENSIONLESS;

/// The base unit with index `index`: scale one, a single power with exponent one.
///
/// ```rust
/// use qunit_core::{base_unit, Power, Rational};
///
/// const LENGTH: u32 = 0;
/// let meter = base_unit(LENGTH);
/// assert_eq!(meter.powers(), &[Power::new(LENGTH, Rational::ONE)]);
/// assert!(meter.is_base());
/// ```
pub const fn base_unit(index: u32) -> UnitDef {
    UnitDef::base(index)
}

impl UnitDef {
    /// The unit with scale one and no dimension.
    pub const DIMENSIONLESS: UnitDef = UnitDef {
        scale: Rational::ONE,
        powers: [Power::EMPTY; MAX_BASES],
        len: 0,
    };

    pub(crate) const fn from_parts(scale: Rational, powers: [Power; MAX_BASES], len: usize) -> Self {
        Self { scale, powers, len }
    }

    /// See [`base_unit`].
    pub const fn base(index: u32) -> Self {
        let mut powers = [Power::EMPTY; MAX_BASES];
        powers[0] = Power::new(index, Rational::ONE);
        Self {
            scale: Rational::ONE,
            powers,
            len: 1,
        }
    }

    /// Exact factor relative to the product of base units.
    #[inline]
    pub const fn scale(&self) -> Rational {
        self.scale
    }

    /// Canonical powers: sorted by base, no zero exponents.
    #[inline]
    pub const fn powers(&self) -> &[Power] {
        self.powers.as_slice().split_at(self.len).0
    }

    /// Same dimension: the power lists are equal, scales may differ.
    pub const fn is_compatible(&self, other: &Self) -> bool {
        if self.len != other.len {
            return false;
        }
        let mut i = 0;
        while i < self.len {
            if !self.powers[i].equals(other.powers[i]) {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Same dimension and same scale.
    pub const fn is_identical(&self, other: &Self) -> bool {
        self.is_compatible(other) && self.scale.equals(other.scale)
    }

    /// No base powers (the scale may be anything).
    #[inline]
    pub const fn is_dimensionless(&self) -> bool {
        self.len == 0
    }

    /// Dimensionless with scale one.
    #[inline]
    pub const fn is_trivial(&self) -> bool {
        self.len == 0 && self.scale.is_one()
    }

    /// A single base with exponent one and scale one.
    pub const fn is_base(&self) -> bool {
        self.len == 1 && self.scale.is_one() && self.powers[0].exponent().is_one()
    }

    /// `self · rhs`.
    pub const fn checked_mul(&self, rhs: &Self) -> Result<Self, UnitError> {
        let scale = const_try!(self.scale.checked_mul(rhs.scale), UnitError::Ratio);
        let mut buffer = PowerBuffer::new();
        const_try!(buffer.extend(self.powers()));
        const_try!(buffer.extend(rhs.powers()));
        buffer.finish(scale)
    }

    /// `self · rhs^-1`.
    pub const fn checked_div(&self, rhs: &Self) -> Result<Self, UnitError> {
        let inverse = const_try!(rhs.checked_pow(Rational::integer(-1)));
        self.checked_mul(&inverse)
    }

    /// `self^exp`.
    ///
    /// An integral exponent raises the scale and multiplies every exponent; zero gives the dimensionless unit. A
    /// fractional exponent is only defined for a base unit (and, trivially, for the dimensionless unit of scale one);
    /// for anything else it is [`UnitError::FractionalPower`].
    pub const fn checked_pow(&self, exp: Rational) -> Result<Self, UnitError> {
        if exp.is_zero() {
            return Ok(Self::DIMENSIONLESS);
        }
        if !exp.is_integer() {
            if self.is_trivial() {
                return Ok(*self);
            }
            if !self.is_base() {
                return Err(UnitError::FractionalPower);
            }
        }

        let scale = if exp.is_integer() {
            const_try!(self.scale.checked_pow(exp.numer()), UnitError::Ratio)
        } else {
            Rational::ONE
        };
        let mut powers = self.powers;
        let mut i = 0;
        while i < self.len {
            powers[i] = const_try!(self.powers[i].checked_pow(exp));
            i += 1;
        }
        // A non-zero factor keeps exponents non-zero and the order intact.
        Ok(Self::from_parts(scale, powers, self.len))
    }

    /// `self` with its scale multiplied by `factor`.
    pub const fn checked_scaled(&self, factor: Rational) -> Result<Self, UnitError> {
        let scale = const_try!(self.scale.checked_mul(factor), UnitError::Ratio);
        Ok(Self::from_parts(scale, self.powers, self.len))
    }

    /// Factor that turns a value expressed in `self` into the same amount expressed in `target`.
    ///
    /// Only meaningful for compatible units; the result is `self.scale / target.scale`.
    pub const fn checked_conversion_factor(&self, target: &Self) -> Result<Rational, UnitError> {
        match self.scale.checked_div(target.scale) {
            Ok(factor) => Ok(factor),
            Err(err) => Err(UnitError::Ratio(err)),
        }
    }

    /// Panicking form of [`checked_mul`](Self::checked_mul).
    pub const fn mul(&self, rhs: &Self) -> Self {
        unwrap(self.checked_mul(rhs))
    }

    /// Panicking form of [`checked_div`](Self::checked_div).
    pub const fn div(&self, rhs: &Self) -> Self {
        unwrap(self.checked_div(rhs))
    }

    /// Panicking form of [`checked_pow`](Self::checked_pow).
    pub const fn pow(&self, exp: Rational) -> Self {
        unwrap(self.checked_pow(exp))
    }

    /// Panicking form of [`checked_scaled`](Self::checked_scaled).
    pub const fn scaled(&self, factor: Rational) -> Self {
        unwrap(self.checked_scaled(factor))
    }

    /// Panicking form of [`checked_conversion_factor`](Self::checked_conversion_factor).
    pub const fn conversion_factor(&self, target: &Self) -> Rational {
        match self.checked_conversion_factor(target) {
            Ok(factor) => factor,
            Err(err) => err.panic(),
        }
    }

    /// Writes the unit as `(scale)·sym^exp·…`, naming bases through `base_symbol`.
    ///
    /// Bases without a symbol are written `b{index}`; fractional exponents are parenthesized. The trivial unit writes
    /// nothing.
    pub fn write_with<W, F>(&self, out: &mut W, base_symbol: F) -> fmt::Result
    where
        W: Write,
        F: Fn(u32) -> Option<&'static str>,
    {
        let mut first = true;
        if !self.scale.is_one() {
            write!(out, "({})", self.scale)?;
            first = false;
        }
        for power in self.powers() {
            if !first {
                out.write_str("·")?;
            }
            first = false;
            match base_symbol(power.base()) {
                Some(symbol) => out.write_str(symbol)?,
                None => write!(out, "b{}", power.base())?,
            }
            let exp = power.exponent();
            if exp.is_integer() {
                if !exp.is_one() {
                    write!(out, "^{}", exp)?;
                }
            } else {
                write!(out, "^({})", exp)?;
            }
        }
        Ok(())
    }
}

const fn unwrap(result: Result<UnitDef, UnitError>) -> UnitDef {
    match result {
        Ok(def) => def,
        Err(err) => err.panic(),
    }
}

impl Default for UnitDef {
    fn default() -> Self {
        Self::DIMENSIONLESS
    }
}

impl fmt::Display for UnitDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_with(f, |_| None)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Unit construction from heterogeneous factors
// ─────────────────────────────────────────────────────────────────────────────

/// One argument of [`make_unit`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Factor {
    /// Multiplies into the scale.
    Ratio(Rational),
    /// Contributes `base^1`.
    Base(u32),
    /// Contributes a whole unit: its scale and its powers.
    Unit(UnitDef),
    /// Contributes a unit raised to an exponent.
    Pow(UnitDef, Rational),
}

/// Multiplies every factor together and canonicalizes the result.
///
/// The order of the factors never affects the result. Most code goes through the [`make_unit!`](crate::make_unit!)
/// macro instead of building [`Factor`]s by hand.
///
/// # Errors
///
/// Any [`UnitError`] raised by an individual power, or by canonicalization.
pub const fn try_make_unit(factors: &[Factor]) -> Result<UnitDef, UnitError> {
    let mut scale = Rational::ONE;
    let mut buffer = PowerBuffer::new();
    let mut i = 0;
    while i < factors.len() {
        match factors[i] {
            Factor::Ratio(ratio) => {
                scale = const_try!(scale.checked_mul(ratio), UnitError::Ratio);
            }
            Factor::Base(index) => {
                const_try!(buffer.push(Power::new(index, Rational::ONE)));
            }
            Factor::Unit(def) => {
                scale = const_try!(scale.checked_mul(def.scale), UnitError::Ratio);
                const_try!(buffer.extend(def.powers()));
            }
            Factor::Pow(def, exp) => {
                let raised = const_try!(def.checked_pow(exp));
                scale = const_try!(scale.checked_mul(raised.scale), UnitError::Ratio);
                const_try!(buffer.extend(raised.powers()));
            }
        }
        i += 1;
    }
    buffer.finish(scale)
}

/// Panicking form of [`try_make_unit`]; in a constant, a failure is a compile error.
pub const fn make_unit(factors: &[Factor]) -> UnitDef {
    unwrap(try_make_unit(factors))
}

/// Builds the canonical unit of a raw scale and power list; see [`canonicalize`].
pub const fn unit_from_powers(scale: Rational, powers: &[Power]) -> UnitDef {
    unwrap(canonicalize(scale, powers))
}

// ─────────────────────────────────────────────────────────────────────────────
// The Unit trait and composite unit types
// ─────────────────────────────────────────────────────────────────────────────

/// Trait implemented by every **unit** type.
///
/// * `DEF` is the unit's canonical definition. Two unit types are compatible when their definitions have equal power
///   lists, whatever the types look like.
/// * `SYMBOL` is the printable name (e.g. `"m"` or `"km"`). Composite types keep the [`UNKNOWN_SYMBOL`] placeholder
///   and are named on display from the symbol registry.
///
/// Implementations are zero-sized marker types; use `#[derive(Unit)]` to declare one.
pub trait Unit: Copy + PartialEq + Debug + 'static {
    /// Canonical definition, evaluated at compile time.
    const DEF: UnitDef;

    /// Printable symbol.
    const SYMBOL: &'static str = UNKNOWN_SYMBOL;
}

/// Product of two units, `A·B`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Prod<A: Unit, B: Unit>(PhantomData<(A, B)>);

impl<A: Unit, B: Unit> Unit for Prod<A, B> {
    const DEF: UnitDef = A::DEF.mul(&B::DEF);
}

/// Quotient of two units, `N/D`.
///
/// This is the type produced by dividing two quantities, e.g. `Meters / Seconds` is `Quantity<Per<Meter, Second>>`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Per<N: Unit, D: Unit>(PhantomData<(N, D)>);

impl<N: Unit, D: Unit> Unit for Per<N, D> {
    const DEF: UnitDef = N::DEF.div(&D::DEF);
}

/// A unit raised to the rational power `N/D`.
///
/// Fractional powers are only defined for base units; `Pow<Newton, 1, 2>` is rejected when its definition is
/// evaluated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pow<U: Unit, const N: i128, const D: i128 = 1>(PhantomData<U>);

impl<U: Unit, const N: i128, const D: i128> Unit for Pow<U, N, D> {
    const DEF: UnitDef = U::DEF.pow(Rational::new(N, D));
}

/// A unit multiplied by the exact factor `N/D`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scaled<U: Unit, const N: i128, const D: i128 = 1>(PhantomData<U>);

impl<U: Unit, const N: i128, const D: i128> Unit for Scaled<U, N, D> {
    const DEF: UnitDef = U::DEF.scaled(Rational::new(N, D));
}

/// Zero-sized marker type for dimensionless quantities.
///
/// `Unitless` is the trivial unit: scale one, no dimension, empty symbol. A `Quantity<Unitless, V>` converts into
/// its bare `V`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Unitless;

impl Unit for Unitless {
    const DEF: UnitDef = UnitDef::DIMENSIONLESS;
    const SYMBOL: &'static str = "";
}

/// `U²`
pub type Squared<U> = Pow<U, 2>;
/// `U³`
pub type Cubed<U> = Pow<U, 3>;
/// `U⁻¹`
pub type Inverse<U> = Pow<U, -1>;
/// `U⁻²`
pub type InverseSquared<U> = Pow<U, -2>;
/// `U^(1/2)`, base units only.
pub type Sqrt<U> = Pow<U, 1, 2>;

/// Metric prefixes as unit type constructors: `Kilo<Meter>` is a kilometre.
pub mod prefix {
    use super::Scaled;

    /// `10^-24`
    pub type Yocto<U> = Scaled<U, 1, 1_000_000_000_000_000_000_000_000>;
    /// `10^-21`
    pub type Zepto<U> = Scaled<U, 1, 1_000_000_000_000_000_000_000>;
    /// `10^-18`
    pub type Atto<U> = Scaled<U, 1, 1_000_000_000_000_000_000>;
    /// `10^-15`
    pub type Femto<U> = Scaled<U, 1, 1_000_000_000_000_000>;
    /// `10^-12`
    pub type Pico<U> = Scaled<U, 1, 1_000_000_000_000>;
    /// `10^-9`
    pub type Nano<U> = Scaled<U, 1, 1_000_000_000>;
    /// `10^-6`
    pub type Micro<U> = Scaled<U, 1, 1_000_000>;
    /// `10^-3`
    pub type Milli<U> = Scaled<U, 1, 1_000>;
    /// `10^-2`
    pub type Centi<U> = Scaled<U, 1, 100>;
    /// `10^-1`
    pub type Deci<U> = Scaled<U, 1, 10>;
    /// `10^1`
    pub type Deca<U> = Scaled<U, 10>;
    /// `10^2`
    pub type Hecto<U> = Scaled<U, 100>;
    /// `10^3`
    pub type Kilo<U> = Scaled<U, 1_000>;
    /// `10^6`
    pub type Mega<U> = Scaled<U, 1_000_000>;
    /// `10^9`
    pub type Giga<U> = Scaled<U, 1_000_000_000>;
    /// `10^12`
    pub type Tera<U> = Scaled<U, 1_000_000_000_000>;
    /// `10^15`
    pub type Peta<U> = Scaled<U, 1_000_000_000_000_000>;
    /// `10^18`
    pub type Exa<U> = Scaled<U, 1_000_000_000_000_000_000>;
    /// `10^21`
    pub type Zetta<U> = Scaled<U, 1_000_000_000_000_000_000_000>;
    /// `10^24`
    pub type Yotta<U> = Scaled<U, 1_000_000_000_000_000_000_000_000>;
}
