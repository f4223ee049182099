use anyhow::{bail, Result};
use std::env;

use utility_toolkit::{checksum, password, temperature, units};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("luhn") => run_luhn(&args[2..]),
        Some("validate") => run_validate(&args[2..]),
        Some("convert") => run_convert(&args[2..]),
        _ => run_demo(),
    }
}

fn run_luhn(args: &[String]) -> Result<()> {
    let Some(number) = args.first() else {
        bail!("Usage: utility-toolkit luhn <number>");
    };

    if checksum::validate(number) {
        println!("✓ '{}' passes the Luhn check", number);
    } else {
        println!("✗ '{}' fails the Luhn check", number);
    }
    Ok(())
}

fn run_validate(args: &[String]) -> Result<()> {
    let Some(pw) = args.first() else {
        bail!("Usage: utility-toolkit validate <password>");
    };

    let result = password::validate(pw);
    let strength = password::score(pw);

    if result.is_valid {
        println!("✓ Password meets all rules");
    } else {
        println!("✗ Password violates {} rule(s):", result.violations.len());
        for violation in &result.violations {
            println!("  - {}", violation);
        }
    }
    println!("Strength: {} ({}/5)", strength.label, strength.score);
    Ok(())
}

fn run_convert(args: &[String]) -> Result<()> {
    if args.len() != 4 {
        bail!("Usage: utility-toolkit convert <length|weight|volume> <value> <from> <to>");
    }

    let domain = &args[0];
    let value: f64 = args[1].parse()?;
    let (from, to) = (&args[2], &args[3]);

    let converted = match domain.to_lowercase().as_str() {
        "length" => units::convert_length(value, from, to)?,
        "weight" => units::convert_weight(value, from, to)?,
        "volume" => units::convert_volume(value, from, to)?,
        _ => bail!("Unknown domain '{}'. Valid domains: length, weight, volume", domain),
    };

    println!("{} {} = {} {}", value, from, converted, to);
    Ok(())
}

fn run_demo() -> Result<()> {
    println!("🧰 Utility Toolkit v{}", utility_toolkit::VERSION);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    println!("\n💳 Luhn checksum");
    println!("  4532015112830366 → {}", checksum::validate("4532015112830366"));
    println!("  4532015112830367 → {}", checksum::validate("4532015112830367"));

    println!("\n📏 Unit conversion");
    println!("  100 feet = {} meters", units::convert_length(100.0, "feet", "meters")?);
    println!("  1 gallons = {} cups", units::convert_volume(1.0, "gallons", "cups")?);

    println!("\n🌡️ Temperature");
    println!("  0°C = {}°F", temperature::celsius_to_fahrenheit(0.0));
    println!(
        "  0°C vs 32°F → {}",
        temperature::compare(0.0, "celsius", 32.0, "fahrenheit")?
    );

    println!("\n🔒 Password policy");
    let result = password::validate("Abcdef1!");
    println!("  'Abcdef1!' valid: {}", result.is_valid);
    let strength = password::score("abc");
    println!("  'abc' strength: {} ({}/5)", strength.label, strength.score);

    println!("\nRun the API server with: cargo run --bin toolkit-server --features server");
    Ok(())
}
