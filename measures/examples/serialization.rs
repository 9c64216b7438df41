//! Serializing and deserializing quantities.
//!
//! Scalars persist as their raw canonical value by default; `serde_with_field` writes the named-field layout instead.
//! Derived quantities persist both components.
//!
//! ```bash
//! cargo run --example serialization
//! ```

#[cfg(feature = "serde")]
fn main() {
    use measures::{Density, Duration, Length, Mass, Momentum, Speed, Volume};
    use serde::{Deserialize, Serialize};

    println!("=== Quantity Serialization Examples ===\n");

    println!("1. Raw canonical values:");
    let distance = Length::from_unit(42.5, Length::METER);
    let json = serde_json::to_string(&distance).unwrap();
    println!("   {} → {}", distance, json);
    let back: Length = serde_json::from_str(&json).unwrap();
    assert_eq!(back, distance);
    println!();

    println!("2. Derived quantities keep their components:");
    let v: Speed = Length::from_unit(299_792.458, Length::KILOMETER) / Duration::SECOND;
    let json = serde_json::to_string(&v).unwrap();
    println!("   {} → {}", v, json);
    let p: Momentum = Mass::KILOGRAM * v;
    println!("   {} → {}", p, serde_json::to_string(&p).unwrap());
    println!();

    println!("3. Named fields in structs:");
    #[derive(Serialize, Deserialize, Debug)]
    struct Sample {
        #[serde(with = "measures::serde_with_field")]
        depth: Length,
        #[serde(with = "measures::serde_with_field")]
        volume: Volume,
        density: Density,
    }

    let sample = Sample {
        depth: Length::from_unit(12.0, Length::METER),
        volume: Volume::from_unit(3.0, Volume::LITER),
        density: Density::from_unit(1.025, Density::WATER),
    };
    let json = serde_json::to_string_pretty(&sample).unwrap();
    println!("{}", json);

    let restored: Sample = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.depth, sample.depth);
    println!("   restored mass: {}", (restored.density * restored.volume).to_string_kilograms());
}

#[cfg(not(feature = "serde"))]
fn main() {
    println!("This example requires the `serde` feature.");
}
