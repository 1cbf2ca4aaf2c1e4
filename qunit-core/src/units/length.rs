//! Length units.
//!
//! The base unit of this dimension is [`Meter`] (base index [`LENGTH`](crate::base::LENGTH)). Every other length
//! unit is an exact ratio to metres:
//!
//! - **SI ladder**: the full metric prefix family for metres from yocto- to yotta-, plus the ångström (`100 pm`).
//! - **Imperial units**: the international foot is exactly `0.3048 m`; thou, barleycorn, yard, chain, furlong, mile
//!   and league are defined from it.
//!
//! ```rust
//! use qunit_core::length::{Feet, Meter, Mile, Miles, Yard};
//!
//! let mile = Miles::new(1.0);
//! assert_eq!(mile.to::<Yard>().value(), 1760.0);
//! assert!((mile.to::<Meter>().value() - 1609.344).abs() < 1e-9);
//! assert_eq!(Feet::new(5280.0).to::<Mile>().value(), 1.0);
//! ```

use crate::base::LENGTH;
use crate::macros::register_units;
use crate::{make_unit, Quantity, Unit};

// ─────────────────────────────────────────────────────────────────────────────
// SI base unit
// ─────────────────────────────────────────────────────────────────────────────

/// Metre (SI base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "m", base = LENGTH)]
pub struct Meter;
/// A quantity measured in metres.
pub type Meters = Quantity<Meter>;
/// One metre.
pub const M: Meters = Meters::new(1.0);

// ─────────────────────────────────────────────────────────────────────────────
// SI prefix ladder
// ─────────────────────────────────────────────────────────────────────────────

/// Yoctometre (`10^-24 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ym", def = make_unit![ratio(1, 1_000_000_000_000_000_000_000_000), Meter])]
pub struct Yoctometer;
/// A quantity measured in yoctometers.
pub type Yoctometers = Quantity<Yoctometer>;
/// One yoctometre.
pub const YMETER: Yoctometers = Yoctometers::new(1.0);

/// Zeptometre (`10^-21 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "zm", def = make_unit![ratio(1, 1_000_000_000_000_000_000_000), Meter])]
pub struct Zeptometer;
/// A quantity measured in zeptometers.
pub type Zeptometers = Quantity<Zeptometer>;
/// One zeptometre.
pub const ZMETER: Zeptometers = Zeptometers::new(1.0);

/// Attometre (`10^-18 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "am", def = make_unit![ratio(1, 1_000_000_000_000_000_000), Meter])]
pub struct Attometer;
/// A quantity measured in attometers.
pub type Attometers = Quantity<Attometer>;
/// One attometre.
pub const AM: Attometers = Attometers::new(1.0);

/// Femtometre (`10^-15 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "fm", def = make_unit![ratio(1, 1_000_000_000_000_000), Meter])]
pub struct Femtometer;
/// A quantity measured in femtometers.
pub type Femtometers = Quantity<Femtometer>;
/// One femtometre.
pub const FM: Femtometers = Femtometers::new(1.0);

/// Picometre (`10^-12 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "pm", def = make_unit![ratio(1, 1_000_000_000_000), Meter])]
pub struct Picometer;
/// A quantity measured in picometers.
pub type Picometers = Quantity<Picometer>;
/// One picometre.
pub const PMETER: Picometers = Picometers::new(1.0);

/// Nanometre (`10^-9 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "nm", def = make_unit![ratio(1, 1_000_000_000), Meter])]
pub struct Nanometer;
/// Type alias shorthand for [`Nanometer`].
pub type Nm = Nanometer;
/// A quantity measured in nanometers.
pub type Nanometers = Quantity<Nanometer>;
/// One nanometre.
pub const NM: Nanometers = Nanometers::new(1.0);

/// Micrometre (`10^-6 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "µm", def = make_unit![ratio(1, 1_000_000), Meter])]
pub struct Micrometer;
/// Type alias shorthand for [`Micrometer`].
pub type Um = Micrometer;
/// A quantity measured in micrometers.
pub type Micrometers = Quantity<Micrometer>;
/// One micrometre.
pub const UM: Micrometers = Micrometers::new(1.0);

/// Millimetre (`10^-3 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mm", def = make_unit![ratio(1, 1_000), Meter])]
pub struct Millimeter;
/// Type alias shorthand for [`Millimeter`].
pub type Mm = Millimeter;
/// A quantity measured in millimeters.
pub type Millimeters = Quantity<Millimeter>;
/// One millimetre.
pub const MM: Millimeters = Millimeters::new(1.0);

/// Centimetre (`10^-2 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "cm", def = make_unit![ratio(1, 100), Meter])]
pub struct Centimeter;
/// Type alias shorthand for [`Centimeter`].
pub type Cm = Centimeter;
/// A quantity measured in centimeters.
pub type Centimeters = Quantity<Centimeter>;
/// One centimetre.
pub const CM: Centimeters = Centimeters::new(1.0);

/// Decimetre (`10^-1 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "dm", def = make_unit![ratio(1, 10), Meter])]
pub struct Decimeter;
/// A quantity measured in decimeters.
pub type Decimeters = Quantity<Decimeter>;
/// One decimetre.
pub const DM: Decimeters = Decimeters::new(1.0);

/// Decametre (`10^1 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "dam", def = make_unit![ratio(10), Meter])]
pub struct Decameter;
/// A quantity measured in decameters.
pub type Decameters = Quantity<Decameter>;
/// One decametre.
pub const DAM: Decameters = Decameters::new(1.0);

/// Hectometre (`10^2 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "hm", def = make_unit![ratio(100), Meter])]
pub struct Hectometer;
/// A quantity measured in hectometers.
pub type Hectometers = Quantity<Hectometer>;
/// One hectometre.
pub const HM: Hectometers = Hectometers::new(1.0);

/// Kilometre (`10^3 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "km", def = make_unit![ratio(1_000), Meter])]
pub struct Kilometer;
/// Type alias shorthand for [`Kilometer`].
pub type Km = Kilometer;
/// A quantity measured in kilometers.
pub type Kilometers = Quantity<Kilometer>;
/// One kilometre.
pub const KM: Kilometers = Kilometers::new(1.0);

/// Megametre (`10^6 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "Mm", def = make_unit![ratio(1_000_000), Meter])]
pub struct Megameter;
/// A quantity measured in megameters.
pub type Megameters = Quantity<Megameter>;
/// One megametre.
pub const MEGAMETER: Megameters = Megameters::new(1.0);

/// Gigametre (`10^9 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "Gm", def = make_unit![ratio(1_000_000_000), Meter])]
pub struct Gigameter;
/// A quantity measured in gigameters.
pub type Gigameters = Quantity<Gigameter>;
/// One gigametre.
pub const GM: Gigameters = Gigameters::new(1.0);

/// Terametre (`10^12 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "Tm", def = make_unit![ratio(1_000_000_000_000), Meter])]
pub struct Terameter;
/// A quantity measured in terameters.
pub type Terameters = Quantity<Terameter>;
/// One terametre.
pub const TM: Terameters = Terameters::new(1.0);

/// Petametre (`10^15 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "Pm", def = make_unit![ratio(1_000_000_000_000_000), Meter])]
pub struct Petameter;
/// A quantity measured in petameters.
pub type Petameters = Quantity<Petameter>;
/// One petametre.
pub const PM: Petameters = Petameters::new(1.0);

/// Exametre (`10^18 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "Em", def = make_unit![ratio(1_000_000_000_000_000_000), Meter])]
pub struct Exameter;
/// A quantity measured in exameters.
pub type Exameters = Quantity<Exameter>;
/// One exametre.
pub const EM: Exameters = Exameters::new(1.0);

/// Zettametre (`10^21 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "Zm", def = make_unit![ratio(1_000_000_000_000_000_000_000), Meter])]
pub struct Zettameter;
/// A quantity measured in zettameters.
pub type Zettameters = Quantity<Zettameter>;
/// One zettametre.
pub const ZM: Zettameters = Zettameters::new(1.0);

/// Yottametre (`10^24 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "Ym", def = make_unit![ratio(1_000_000_000_000_000_000_000_000), Meter])]
pub struct Yottameter;
/// A quantity measured in yottameters.
pub type Yottameters = Quantity<Yottameter>;
/// One yottametre.
pub const YM: Yottameters = Yottameters::new(1.0);

/// Ångström (`100 pm`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "Å", def = make_unit![ratio(100), Picometer])]
pub struct Angstrom;
/// A quantity measured in ångströms.
pub type Angstroms = Quantity<Angstrom>;
/// One ångström.
pub const ANGSTROM: Angstroms = Angstroms::new(1.0);

/// Fermi, the customary name of the femtometre.
pub type Fermi = Femtometer;
/// Micron, the customary name of the micrometre.
pub type Micron = Micrometer;

// ─────────────────────────────────────────────────────────────────────────────
// Imperial units
// ─────────────────────────────────────────────────────────────────────────────

/// International foot (`0.3048 m`, exact).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ft", def = make_unit![ratio(3048, 10000), Meter])]
pub struct Foot;
/// A quantity measured in feet.
pub type Feet = Quantity<Foot>;
/// One foot.
pub const FT: Feet = Feet::new(1.0);

/// Thou, or mil (`1/12000 ft`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "th", def = make_unit![ratio(1, 12000), Foot])]
pub struct Thou;
/// A quantity measured in thou.
pub type Thous = Quantity<Thou>;
/// One thou.
pub const TH: Thous = Thous::new(1.0);

/// Barleycorn (`1/36 ft`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "Bc", def = make_unit![ratio(1, 36), Foot])]
pub struct Barleycorn;
/// A quantity measured in barleycorns.
pub type Barleycorns = Quantity<Barleycorn>;
/// One barleycorn.
pub const BC: Barleycorns = Barleycorns::new(1.0);

/// Yard (`3 ft`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "yd", def = make_unit![ratio(3), Foot])]
pub struct Yard;
/// A quantity measured in yards.
pub type Yards = Quantity<Yard>;
/// One yard.
pub const YD: Yards = Yards::new(1.0);

/// Chain (`66 ft`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ch", def = make_unit![ratio(66), Foot])]
pub struct Chain;
/// A quantity measured in chains.
pub type Chains = Quantity<Chain>;
/// One chain.
pub const CH: Chains = Chains::new(1.0);

/// Furlong (`660 ft`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "fur", def = make_unit![ratio(660), Foot])]
pub struct Furlong;
/// A quantity measured in furlongs.
pub type Furlongs = Quantity<Furlong>;
/// One furlong.
pub const FUR: Furlongs = Furlongs::new(1.0);

/// Statute mile (`5280 ft`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mi", def = make_unit![ratio(5280), Foot])]
pub struct Mile;
/// A quantity measured in miles.
pub type Miles = Quantity<Mile>;
/// One mile.
pub const MI: Miles = Miles::new(1.0);

/// League (`15840 ft`, three miles).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "lea", def = make_unit![ratio(15840), Foot])]
pub struct League;
/// A quantity measured in leagues.
pub type Leagues = Quantity<League>;
/// One league.
pub const LEA: Leagues = Leagues::new(1.0);

crate::impl_unit_conversions!(
    Meter,
    Yoctometer,
    Zeptometer,
    Attometer,
    Femtometer,
    Picometer,
    Nanometer,
    Micrometer,
    Millimeter,
    Centimeter,
    Decimeter,
    Decameter,
    Hectometer,
    Kilometer,
    Megameter,
    Gigameter,
    Terameter,
    Petameter,
    Exameter,
    Zettameter,
    Yottameter,
    Angstrom,
    Foot,
    Thou,
    Barleycorn,
    Yard,
    Chain,
    Furlong,
    Mile,
    League,
);

register_units!(
    Meter,
    Yoctometer,
    Zeptometer,
    Attometer,
    Femtometer,
    Picometer,
    Nanometer,
    Micrometer,
    Millimeter,
    Centimeter,
    Decimeter,
    Decameter,
    Hectometer,
    Kilometer,
    Megameter,
    Gigameter,
    Terameter,
    Petameter,
    Exameter,
    Zettameter,
    Yottameter,
    Angstrom,
    Foot,
    Thou,
    Barleycorn,
    Yard,
    Chain,
    Furlong,
    Mile,
    League,
);
