//! Minimal end-to-end example: convert units and walk the derived-quantity algebra.

use measures::{Area, Density, Duration, Length, Mass, Momentum, Speed, Temperature, Volume};

fn main() {
    let d = Length::from_unit(1_500.0, Length::METER);
    assert!((d.to(Length::KILOMETER) - 1.5).abs() < 1e-12);
    println!("distance: {} ({})", d, d.to_string_meters());

    let t = Duration::from_unit(5.0, Duration::MINUTE);
    let v: Speed = d / t;
    println!("speed: {} = {}", v, v.to_string_kilometers_per_hour());
    assert_eq!(v * t, d);

    let floor: Area = Length::from_unit(8.0, Length::METER) * Length::from_unit(5.0, Length::METER);
    let room: Volume = floor * Length::from_unit(2.5, Length::METER);
    println!("room: {} = {}", room.to_string_cubic_meters(), room.to_string_liters());

    let air = Mass::from_unit(1.2, Mass::KILOGRAM) / Volume::CUBIC_METER;
    let air_mass = air * room;
    println!("air: {} -> {}", air.to_string_kilograms_per_cubic_meter(), air_mass.to_string_kilograms());
    assert!(air < Density::WATER);

    let p: Momentum = air_mass * v;
    println!("momentum of the air moving at {}: {}", v, p);

    let t = Temperature::from_celsius(21.0);
    println!("room temperature: {} / {} / {}", t, t.to_string_celsius(), t.to_string_fahrenheit());
}
