//! Exact ratios: unit definitions, conversion factors and dimensionless quotients.

use qunit::{make_unit, Foot, Meter, Meters, Mile, Rational, Seconds, Unit, Unitless};

fn main() {
    let factor = Mile::DEF.conversion_factor(&Foot::DEF);
    assert_eq!(factor, Rational::integer(5280));
    assert_eq!(Foot::DEF.scale(), Rational::new(381, 1250));

    let fathom = make_unit![ratio(6), Foot];
    assert_eq!(fathom.conversion_factor(&Meter::DEF), Rational::new(1143, 625));

    let half = Meters::new(1.0) / Meters::new(2.0);
    assert_eq!(half.into_number(), 0.5);

    let ratio = (Seconds::new(3.0) / Seconds::new(1.5)).to::<Unitless>();
    println!("{ratio} ({})", Rational::new(1, 2) + Rational::new(1, 3));
}
