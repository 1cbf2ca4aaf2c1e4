//! Minimal end-to-end example: convert units, compute a velocity and print derived quantities.

use qunit::velocity::Velocity;
use qunit::{Degrees, Kilometer, Kilometers, Meters, Newtons, Radian, Second, Seconds};

fn main() {
    let a = Degrees::new(180.0);
    let r = a.to::<Radian>();
    assert!((r.value() - core::f64::consts::PI).abs() < 1e-12);

    let d = Kilometers::new(1_000.0);
    let t = Seconds::new(100.0);
    let v: Velocity<Kilometer, Second> = d / t;
    assert!((v.value() - 10.0).abs() < 1e-12);

    let work = Newtons::new(12.0) * Meters::new(0.5);
    println!("{v} = {}", v.to::<qunit::Per<qunit::Meter, Second>>());
    println!("{work}");
}
