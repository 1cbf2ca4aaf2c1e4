//! SI derived units with special names, and a few common multiples.
//!
//! Each unit is declared from the base catalog with [`make_unit!`](crate::make_unit!), so its definition is the same
//! canonical [`UnitDef`](crate::UnitDef) the algebra produces: `Prod<Newton, Meter>` *is* [`Joule`], and a quantity of
//! that product displays as `J`.
//!
//! ```rust
//! use qunit_core::derived::{Joule, Newtons, Watt};
//! use qunit_core::length::Meters;
//! use qunit_core::time::Seconds;
//! use qunit_core::{Quantity, Unit};
//!
//! let work = Newtons::new(10.0) * Meters::new(2.0);
//! assert_eq!(work.to_string(), "20 J");
//!
//! let power: Quantity<Watt> = (work / Seconds::new(4.0)).to();
//! assert_eq!(power.value(), 5.0);
//! assert!(Joule::DEF.is_compatible(&<Watt as Unit>::DEF.mul(&qunit_core::time::Second::DEF)));
//! ```

use crate::base::{Ampere, Candela, Decay, Mole, Steradian};
use crate::length::Meter;
use crate::macros::register_units;
use crate::mass::Kilogram;
use crate::time::{Hour, Second};
use crate::{make_unit, Quantity, Unit};

/// Hertz (`s^-1`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "Hz", def = make_unit![pow(Second, -1)])]
pub struct Hertz;
/// A quantity measured in hertz.
pub type Hertzes = Quantity<Hertz>;
/// One hertz.
pub const HZ: Hertzes = Hertzes::new(1.0);

/// Newton (`kg·m·s^-2`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "N", def = make_unit![Kilogram, Meter, pow(Second, -2)])]
pub struct Newton;
/// A quantity measured in newtons.
pub type Newtons = Quantity<Newton>;
/// One newton.
pub const N: Newtons = Newtons::new(1.0);

/// Pascal (`N·m^-2`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "Pa", def = make_unit![Newton, pow(Meter, -2)])]
pub struct Pascal;
/// A quantity measured in pascals.
pub type Pascals = Quantity<Pascal>;
/// One pascal.
pub const PA: Pascals = Pascals::new(1.0);

/// Joule (`N·m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "J", def = make_unit![Newton, Meter])]
pub struct Joule;
/// A quantity measured in joules.
pub type Joules = Quantity<Joule>;
/// One joule.
pub const J: Joules = Joules::new(1.0);

/// Watt (`J·s^-1`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "W", def = make_unit![Joule, pow(Second, -1)])]
pub struct Watt;
/// A quantity measured in watts.
pub type Watts = Quantity<Watt>;
/// One watt.
pub const W: Watts = Watts::new(1.0);

/// Coulomb (`A·s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "C", def = make_unit![Ampere, Second])]
pub struct Coulomb;
/// A quantity measured in coulombs.
pub type Coulombs = Quantity<Coulomb>;
/// One coulomb.
pub const C: Coulombs = Coulombs::new(1.0);

/// Volt (`W·A^-1`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "V", def = make_unit![Watt, pow(Ampere, -1)])]
pub struct Volt;
/// A quantity measured in volts.
pub type Volts = Quantity<Volt>;
/// One volt.
pub const V: Volts = Volts::new(1.0);

/// Farad (`C·V^-1`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "F", def = make_unit![Coulomb, pow(Volt, -1)])]
pub struct Farad;
/// A quantity measured in farads.
pub type Farads = Quantity<Farad>;
/// One farad.
pub const F: Farads = Farads::new(1.0);

/// Ohm (`V·A^-1`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "Ω", def = make_unit![Volt, pow(Ampere, -1)])]
pub struct Ohm;
/// A quantity measured in ohms.
pub type Ohms = Quantity<Ohm>;
/// One ohm.
pub const OHM: Ohms = Ohms::new(1.0);

/// Siemens (`Ω^-1`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "S", def = make_unit![pow(Ohm, -1)])]
pub struct Siemens;
/// A quantity measured in siemens.
pub type SiemensQty = Quantity<Siemens>;
/// One siemens.
pub const S: SiemensQty = SiemensQty::new(1.0);

/// Weber (`V·s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "Wb", def = make_unit![Volt, Second])]
pub struct Weber;
/// A quantity measured in webers.
pub type Webers = Quantity<Weber>;
/// One weber.
pub const WB: Webers = Webers::new(1.0);

/// Tesla (`Wb·m^-2`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "T", def = make_unit![Weber, pow(Meter, -2)])]
pub struct Tesla;
/// A quantity measured in teslas.
pub type Teslas = Quantity<Tesla>;
/// One tesla.
pub const T: Teslas = Teslas::new(1.0);

/// Henry (`Wb·A^-1`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "H", def = make_unit![Weber, pow(Ampere, -1)])]
pub struct Henry;
/// A quantity measured in henries.
pub type Henries = Quantity<Henry>;
/// One henry.
pub const H: Henries = Henries::new(1.0);

/// Lumen (`cd·sr`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "lm", def = make_unit![Candela, Steradian])]
pub struct Lumen;
/// A quantity measured in lumens.
pub type Lumens = Quantity<Lumen>;
/// One lumen.
pub const LM: Lumens = Lumens::new(1.0);

/// Lux (`lm·m^-2`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "lx", def = make_unit![Lumen, pow(Meter, -2)])]
pub struct Lux;
/// A quantity measured in lux.
pub type LuxQty = Quantity<Lux>;
/// One lux.
pub const LX: LuxQty = LuxQty::new(1.0);

/// Becquerel (decays per second).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "Bq", def = make_unit![Decay, pow(Second, -1)])]
pub struct Becquerel;
/// A quantity measured in becquerels.
pub type Becquerels = Quantity<Becquerel>;
/// One becquerel.
pub const BQ: Becquerels = Becquerels::new(1.0);

/// Katal (`mol·s^-1`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "kat", def = make_unit![Mole, pow(Second, -1)])]
pub struct Katal;
/// A quantity measured in katals.
pub type Katals = Quantity<Katal>;
/// One katal.
pub const KAT: Katals = Katals::new(1.0);

// --- Common multiples ---

/// Kilonewton.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "kN", def = make_unit![ratio(1000), Newton])]
pub struct Kilonewton;
/// A quantity measured in kilonewtons.
pub type Kilonewtons = Quantity<Kilonewton>;

/// Kilopascal.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "kPa", def = make_unit![ratio(1000), Pascal])]
pub struct Kilopascal;
/// A quantity measured in kilopascals.
pub type Kilopascals = Quantity<Kilopascal>;

/// Bar (`100 kPa`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "bar", def = make_unit![ratio(100_000), Pascal])]
pub struct Bar;
/// A quantity measured in bars.
pub type Bars = Quantity<Bar>;

/// Standard atmosphere (`101 325 Pa`, exact).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "atm", def = make_unit![ratio(101_325), Pascal])]
pub struct Atmosphere;
/// A quantity measured in standard atmospheres.
pub type Atmospheres = Quantity<Atmosphere>;

/// Kilojoule.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "kJ", def = make_unit![ratio(1000), Joule])]
pub struct Kilojoule;
/// A quantity measured in kilojoules.
pub type Kilojoules = Quantity<Kilojoule>;

/// Thermochemical calorie (`4.184 J`, exact).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "cal", def = make_unit![ratio(4184, 1000), Joule])]
pub struct Calorie;
/// A quantity measured in calories.
pub type Calories = Quantity<Calorie>;

/// Electronvolt (`1.602176634e-19 J`, exact since the 2019 SI redefinition).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "eV", def = make_unit![ratio(1_602_176_634, 10_000_000_000_000_000_000_000_000_000), Joule])]
pub struct Electronvolt;
/// A quantity measured in electronvolts.
pub type Electronvolts = Quantity<Electronvolt>;

/// Kilowatt.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "kW", def = make_unit![ratio(1000), Watt])]
pub struct Kilowatt;
/// A quantity measured in kilowatts.
pub type Kilowatts = Quantity<Kilowatt>;

/// Megawatt.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "MW", def = make_unit![ratio(1_000_000), Watt])]
pub struct Megawatt;
/// A quantity measured in megawatts.
pub type Megawatts = Quantity<Megawatt>;

/// Kilowatt-hour (`3.6 MJ`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "kWh", def = make_unit![Kilowatt, Hour])]
pub struct KilowattHour;
/// A quantity measured in kilowatt-hours.
pub type KilowattHours = Quantity<KilowattHour>;

crate::impl_unit_conversions!(Newton, Kilonewton);
crate::impl_unit_conversions!(Pascal, Kilopascal, Bar, Atmosphere);
crate::impl_unit_conversions!(Joule, Kilojoule, Calorie, Electronvolt, KilowattHour);
crate::impl_unit_conversions!(Watt, Kilowatt, Megawatt);

register_units!(
    Hertz,
    Newton,
    Pascal,
    Joule,
    Watt,
    Coulomb,
    Volt,
    Farad,
    Ohm,
    Siemens,
    Weber,
    Tesla,
    Henry,
    Lumen,
    Lux,
    Becquerel,
    Katal,
    Kilonewton,
    Kilopascal,
    Bar,
    Atmosphere,
    Kilojoule,
    Calorie,
    Electronvolt,
    Kilowatt,
    Megawatt,
    KilowattHour
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::Amperes;
    use crate::length::{Meters, Millimeter};
    use crate::time::Seconds;
    use crate::{Per, Prod, Rational, Squared};
    use approx::assert_relative_eq;

    #[test]
    fn named_units_match_their_products() {
        assert_eq!(<Prod<Newton, Meter>>::DEF, Joule::DEF);
        assert_eq!(<Prod<Watt, Second>>::DEF, Joule::DEF);
        assert_eq!(<Prod<Volt, Ampere>>::DEF, Watt::DEF);
        assert_eq!(<Per<Newton, Squared<Meter>>>::DEF, Pascal::DEF);
        assert_eq!(<Per<Volt, Ohm>>::DEF, Ampere::DEF);
        assert_eq!(<Prod<Ohm, Siemens>>::DEF, crate::Unitless::DEF);
        assert_eq!(<Prod<Tesla, Squared<Meter>>>::DEF, Weber::DEF);
    }

    #[test]
    fn hertz_and_becquerel_differ() {
        assert!(!Hertz::DEF.is_compatible(&Becquerel::DEF));
        assert!(Becquerel::DEF.is_compatible(&<Per<Decay, Second>>::DEF));
    }

    #[test]
    fn energy_conversions() {
        assert_eq!(Quantity::<KilowattHour, i64>::new(1).to::<Joule>().value(), 3_600_000);
        assert_eq!(KilowattHour::DEF.scale(), Rational::integer(3_600_000));
        assert_relative_eq!(Calories::new(1000.0).to::<Kilojoule>().value(), 4.184, max_relative = 1e-15);
        assert_relative_eq!(
            Electronvolts::new(1.0).to::<Joule>().value(),
            1.602176634e-19,
            max_relative = 1e-15
        );
    }

    #[test]
    fn pressure_conversions() {
        assert_eq!(Quantity::<Atmosphere, i32>::new(2).to::<Pascal>().value(), 202_650);
        assert_eq!(Bars::new(1.0).to::<Kilopascal>().value(), 100.0);
        let p = Newtons::new(5.0) / (Meters::new(1.0) * Meters::new(1.0).to::<Millimeter>());
        assert_eq!(p.to::<Pascal>().value(), 5.0);
    }

    #[test]
    fn ohms_law() {
        let v = Volts::new(12.0);
        let i = Amperes::new(3.0);
        let r: Ohms = (v / i).to();
        assert_eq!(r.value(), 4.0);
        assert_eq!((i * r).to::<Volt>().value(), 12.0);
    }

    #[test]
    fn products_display_registered_symbols() {
        assert_eq!((Newtons::new(2.0) * Meters::new(3.0)).to_string(), "6 J");
        assert_eq!((Joules::new(10.0) / Seconds::new(2.0)).to_string(), "5 W");
        assert_eq!((Volts::new(2.0) * Seconds::new(1.0)).to_string(), "2 Wb");
    }
}
