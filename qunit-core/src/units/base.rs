//! Base-unit indices and the base units that have no module of their own.
//!
//! Every base unit of the catalog is a distinct index passed to [`base_unit`](crate::base_unit). The indices are
//! assigned here once; any other index is free for user-defined bases.
//!
//! ```rust
//! use qunit_core::base::{Ampere, Kelvin, CURRENT, TEMPERATURE};
//! use qunit_core::{base_unit, Unit};
//!
//! assert_eq!(Ampere::DEF, base_unit(CURRENT));
//! assert!(!Kelvin::DEF.is_compatible(&base_unit(CURRENT)));
//! assert_eq!(Kelvin::DEF, base_unit(TEMPERATURE));
//! ```

use crate::macros::register_units;
use crate::{Quantity, Unit};

/// Length (metre).
pub const LENGTH: u32 = 0;
/// Time (second).
pub const TIME: u32 = 1;
/// Mass (kilogram).
pub const MASS: u32 = 2;
/// Electric current (ampere).
pub const CURRENT: u32 = 3;
/// Thermodynamic temperature (kelvin).
pub const TEMPERATURE: u32 = 4;
/// Amount of substance (mole).
pub const AMOUNT: u32 = 5;
/// Luminous intensity (candela).
pub const LUMINOUS_INTENSITY: u32 = 6;
/// Plane angle (radian).
pub const ANGLE: u32 = 7;
/// Solid angle (steradian).
pub const SOLID_ANGLE: u32 = 8;
/// Radioactive decay count.
pub const DECAY: u32 = 9;

/// Ampere (SI base unit of electric current).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "A", base = CURRENT)]
pub struct Ampere;
/// A quantity measured in amperes.
pub type Amperes = Quantity<Ampere>;
/// One ampere.
pub const A: Amperes = Amperes::new(1.0);

/// Kelvin (SI base unit of temperature). Only temperature differences are modelled.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "K", base = TEMPERATURE)]
pub struct Kelvin;
/// A quantity measured in kelvins.
pub type Kelvins = Quantity<Kelvin>;
/// One kelvin.
pub const K: Kelvins = Kelvins::new(1.0);

/// Mole (SI base unit of amount of substance).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mol", base = AMOUNT)]
pub struct Mole;
/// A quantity measured in moles.
pub type Moles = Quantity<Mole>;
/// One mole.
pub const MOL: Moles = Moles::new(1.0);

/// Candela (SI base unit of luminous intensity).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "cd", base = LUMINOUS_INTENSITY)]
pub struct Candela;
/// A quantity measured in candelas.
pub type Candelas = Quantity<Candela>;
/// One candela.
pub const CD: Candelas = Candelas::new(1.0);

/// Steradian, kept as its own base so that solid angles never mix with plane angles.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "sr", base = SOLID_ANGLE)]
pub struct Steradian;
/// A quantity measured in steradians.
pub type Steradians = Quantity<Steradian>;
/// One steradian.
pub const SR: Steradians = Steradians::new(1.0);

/// One radioactive decay event. Becquerel is decays per second.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "dec", base = DECAY)]
pub struct Decay;
/// A count of decays.
pub type Decays = Quantity<Decay>;
/// One decay.
pub const DEC: Decays = Decays::new(1.0);

register_units!(Ampere, Kelvin, Mole, Candela, Steradian, Decay);
