//! Time units.
//!
//! The base unit of this dimension is [`Second`] (base index [`TIME`](crate::base::TIME)). Civil units use the
//! conventional exact mapping: `1 min = 60 s`, `1 h = 60 min`, `1 d = 24 h` (leap seconds ignored) and a calendar year
//! of `365 d`.
//!
//! ```rust
//! use qunit_core::time::{Hour, Hours, Second};
//!
//! let half_hour = Hours::new(0.5);
//! let seconds = half_hour.to::<Second>();
//! assert_eq!(seconds.value(), 1800.0);
//!
//! let back = seconds.to::<Hour>();
//! assert_eq!(back.value(), 0.5);
//! ```

use crate::base::TIME;
use crate::macros::register_units;
use crate::{make_unit, Quantity, Unit};

/// Seconds per day under the civil mapping used by this module.
pub const SECONDS_PER_DAY: i128 = 86_400;

/// Second (SI base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "s", base = TIME)]
pub struct Second;
/// A quantity measured in seconds.
pub type Seconds = Quantity<Second>;
/// One second.
pub const SEC: Seconds = Seconds::new(1.0);

// --- SI prefix ladder ---

/// Yoctosecond (`10^-24 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ys", def = make_unit![ratio(1, 1_000_000_000_000_000_000_000_000), Second])]
pub struct Yoctosecond;
/// A quantity measured in yoctoseconds.
pub type Yoctoseconds = Quantity<Yoctosecond>;
/// One yoctosecond.
pub const YOCTOSEC: Yoctoseconds = Yoctoseconds::new(1.0);

/// Zeptosecond (`10^-21 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "zs", def = make_unit![ratio(1, 1_000_000_000_000_000_000_000), Second])]
pub struct Zeptosecond;
/// A quantity measured in zeptoseconds.
pub type Zeptoseconds = Quantity<Zeptosecond>;
/// One zeptosecond.
pub const ZEPTOSEC: Zeptoseconds = Zeptoseconds::new(1.0);

/// Attosecond (`10^-18 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "as", def = make_unit![ratio(1, 1_000_000_000_000_000_000), Second])]
pub struct Attosecond;
/// A quantity measured in attoseconds.
pub type Attoseconds = Quantity<Attosecond>;
/// One attosecond.
pub const ATTOSEC: Attoseconds = Attoseconds::new(1.0);

/// Femtosecond (`10^-15 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "fs", def = make_unit![ratio(1, 1_000_000_000_000_000), Second])]
pub struct Femtosecond;
/// A quantity measured in femtoseconds.
pub type Femtoseconds = Quantity<Femtosecond>;
/// One femtosecond.
pub const FEMTOSEC: Femtoseconds = Femtoseconds::new(1.0);

/// Picosecond (`10^-12 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ps", def = make_unit![ratio(1, 1_000_000_000_000), Second])]
pub struct Picosecond;
/// A quantity measured in picoseconds.
pub type Picoseconds = Quantity<Picosecond>;
/// One picosecond.
pub const PICOSEC: Picoseconds = Picoseconds::new(1.0);

/// Nanosecond (`10^-9 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ns", def = make_unit![ratio(1, 1_000_000_000), Second])]
pub struct Nanosecond;
/// A quantity measured in nanoseconds.
pub type Nanoseconds = Quantity<Nanosecond>;
/// One nanosecond.
pub const NANOSEC: Nanoseconds = Nanoseconds::new(1.0);

/// Microsecond (`10^-6 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "µs", def = make_unit![ratio(1, 1_000_000), Second])]
pub struct Microsecond;
/// A quantity measured in microseconds.
pub type Microseconds = Quantity<Microsecond>;
/// One microsecond.
pub const MICROSEC: Microseconds = Microseconds::new(1.0);

/// Millisecond (`10^-3 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ms", def = make_unit![ratio(1, 1_000), Second])]
pub struct Millisecond;
/// A quantity measured in milliseconds.
pub type Milliseconds = Quantity<Millisecond>;
/// One millisecond.
pub const MILLISEC: Milliseconds = Milliseconds::new(1.0);

/// Centisecond (`10^-2 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "cs", def = make_unit![ratio(1, 100), Second])]
pub struct Centisecond;
/// A quantity measured in centiseconds.
pub type Centiseconds = Quantity<Centisecond>;
/// One centisecond.
pub const CENTISEC: Centiseconds = Centiseconds::new(1.0);

/// Decisecond (`10^-1 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ds", def = make_unit![ratio(1, 10), Second])]
pub struct Decisecond;
/// A quantity measured in deciseconds.
pub type Deciseconds = Quantity<Decisecond>;
/// One decisecond.
pub const DECISEC: Deciseconds = Deciseconds::new(1.0);

/// Decasecond (`10^1 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "das", def = make_unit![ratio(10), Second])]
pub struct Decasecond;
/// A quantity measured in decaseconds.
pub type Decaseconds = Quantity<Decasecond>;
/// One decasecond.
pub const DECASEC: Decaseconds = Decaseconds::new(1.0);

/// Hectosecond (`10^2 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "hs", def = make_unit![ratio(100), Second])]
pub struct Hectosecond;
/// A quantity measured in hectoseconds.
pub type Hectoseconds = Quantity<Hectosecond>;
/// One hectosecond.
pub const HECTOSEC: Hectoseconds = Hectoseconds::new(1.0);

/// Kilosecond (`10^3 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ks", def = make_unit![ratio(1_000), Second])]
pub struct Kilosecond;
/// A quantity measured in kiloseconds.
pub type Kiloseconds = Quantity<Kilosecond>;
/// One kilosecond.
pub const KILOSEC: Kiloseconds = Kiloseconds::new(1.0);

/// Megasecond (`10^6 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "Ms", def = make_unit![ratio(1_000_000), Second])]
pub struct Megasecond;
/// A quantity measured in megaseconds.
pub type Megaseconds = Quantity<Megasecond>;
/// One megasecond.
pub const MEGASEC: Megaseconds = Megaseconds::new(1.0);

/// Gigasecond (`10^9 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "Gs", def = make_unit![ratio(1_000_000_000), Second])]
pub struct Gigasecond;
/// A quantity measured in gigaseconds.
pub type Gigaseconds = Quantity<Gigasecond>;
/// One gigasecond.
pub const GIGASEC: Gigaseconds = Gigaseconds::new(1.0);

/// Terasecond (`10^12 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "Ts", def = make_unit![ratio(1_000_000_000_000), Second])]
pub struct Terasecond;
/// A quantity measured in teraseconds.
pub type Teraseconds = Quantity<Terasecond>;
/// One terasecond.
pub const TERASEC: Teraseconds = Teraseconds::new(1.0);

/// Petasecond (`10^15 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "Ps", def = make_unit![ratio(1_000_000_000_000_000), Second])]
pub struct Petasecond;
/// A quantity measured in petaseconds.
pub type Petaseconds = Quantity<Petasecond>;
/// One petasecond.
pub const PETASEC: Petaseconds = Petaseconds::new(1.0);

/// Exasecond (`10^18 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "Es", def = make_unit![ratio(1_000_000_000_000_000_000), Second])]
pub struct Exasecond;
/// A quantity measured in exaseconds.
pub type Exaseconds = Quantity<Exasecond>;
/// One exasecond.
pub const EXASEC: Exaseconds = Exaseconds::new(1.0);

/// Zettasecond (`10^21 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "Zs", def = make_unit![ratio(1_000_000_000_000_000_000_000), Second])]
pub struct Zettasecond;
/// A quantity measured in zettaseconds.
pub type Zettaseconds = Quantity<Zettasecond>;
/// One zettasecond.
pub const ZETTASEC: Zettaseconds = Zettaseconds::new(1.0);

/// Yottasecond (`10^24 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "Ys", def = make_unit![ratio(1_000_000_000_000_000_000_000_000), Second])]
pub struct Yottasecond;
/// A quantity measured in yottaseconds.
pub type Yottaseconds = Quantity<Yottasecond>;
/// One yottasecond.
pub const YOTTASEC: Yottaseconds = Yottaseconds::new(1.0);

// --- Civil units ---

/// Minute (`60 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "min", def = make_unit![ratio(60), Second])]
pub struct Minute;
/// A quantity measured in minutes.
pub type Minutes = Quantity<Minute>;
/// One minute.
pub const MIN: Minutes = Minutes::new(1.0);

/// Hour (`60 min`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "h", def = make_unit![ratio(60), Minute])]
pub struct Hour;
/// A quantity measured in hours.
pub type Hours = Quantity<Hour>;
/// One hour.
pub const HOUR: Hours = Hours::new(1.0);

/// Day (`24 h`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "d", def = make_unit![ratio(24), Hour])]
pub struct Day;
/// A quantity measured in days.
pub type Days = Quantity<Day>;
/// One day.
pub const DAY: Days = Days::new(1.0);

/// Calendar year (`365 d`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "yr", def = make_unit![ratio(365), Day])]
pub struct Year;
/// A quantity measured in years.
pub type Years = Quantity<Year>;
/// One year.
pub const YEAR: Years = Years::new(1.0);

crate::impl_unit_conversions!(
    Second,
    Yoctosecond,
    Zeptosecond,
    Attosecond,
    Femtosecond,
    Picosecond,
    Nanosecond,
    Microsecond,
    Millisecond,
    Centisecond,
    Decisecond,
    Decasecond,
    Hectosecond,
    Kilosecond,
    Megasecond,
    Gigasecond,
    Terasecond,
    Petasecond,
    Exasecond,
    Zettasecond,
    Yottasecond,
    Minute,
    Hour,
    Day,
    Year,
);

register_units!(
    Second,
    Yoctosecond,
    Zeptosecond,
    Attosecond,
    Femtosecond,
    Picosecond,
    Nanosecond,
    Microsecond,
    Millisecond,
    Centisecond,
    Decisecond,
    Decasecond,
    Hectosecond,
    Kilosecond,
    Megasecond,
    Gigasecond,
    Terasecond,
    Petasecond,
    Exasecond,
    Zettasecond,
    Yottasecond,
    Minute,
    Hour,
    Day,
    Year,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rational;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn day_is_86400_seconds() {
        assert_eq!(Day::DEF.scale(), Rational::integer(SECONDS_PER_DAY));
        assert_eq!(DAY.to::<Second>().value(), 86_400.0);
    }

    #[test]
    fn year_in_smaller_units() {
        assert_eq!(YEAR.to::<Day>().value(), 365.0);
        assert_eq!(YEAR.to::<Hour>().value(), 8_760.0);
        assert_eq!(Quantity::<Year, i64>::new(1).to::<Second>().value(), 31_536_000);
    }

    #[test]
    fn prefixes() {
        assert_eq!(Milliseconds::new(1500.0).to::<Second>().value(), 1.5);
        assert_eq!(Quantity::<Microsecond, u64>::new(1).to::<Picosecond>().value(), 1_000_000);
        assert_eq!(Kiloseconds::new(3.6).to::<Hour>().value(), 1.0);
    }

    #[test]
    fn minute_hour_relations() {
        let minutes: Minutes = HOUR.into();
        assert_eq!(minutes.value(), 60.0);
        assert_relative_eq!(Minutes::new(90.0).to::<Hour>().value(), 1.5);
    }

    #[test]
    fn display() {
        assert_eq!(Hours::new(2.0).to_string(), "2 h");
        assert_eq!(Microseconds::new(5.0).to_string(), "5 µs");
    }

    proptest! {
        #[test]
        fn prop_round_trip_via_days(value in -1.0e9f64..1.0e9) {
            let back = Seconds::new(value).to::<Day>().to::<Minute>().to::<Second>();
            prop_assert!((back.value() - value).abs() <= 1e-9 * value.abs().max(1.0));
        }
    }
}
