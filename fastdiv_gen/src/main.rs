//! Offline generator for division constants.
//!
//! ```text
//! fastdiv_gen --pow10 32 --bits 128
//! fastdiv_gen --divisor 5 --bits 128 --format rust --name DIV_BY_5_U128
//! ```

use clap::{ArgGroup, Parser, ValueEnum};
use fastdiv::{derive, DeriveError, DerivedConstants, Divisor};
use num_bigint::BigUint;

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Every derived quantity, one per line.
    Text,
    /// A `DivisionConstants` const item.
    Rust,
}

/// Derives Granlund–Montgomery division constants.
#[derive(Parser)]
#[command(version, about)]
#[command(group(ArgGroup::new("target").required(true).args(["divisor", "pow10"])))]
struct Args {
    /// Divide by this value.
    #[arg(short, long)]
    divisor: Option<BigUint>,

    /// Divide by 10^POW10.
    #[arg(short, long)]
    pow10: Option<u32>,

    /// Operand width in bits.
    #[arg(short, long, default_value_t = 128)]
    bits: u32,

    /// Slack width; defaults to the exponent of two in the divisor.
    #[arg(short = 't', long)]
    slack: Option<u32>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Name of the emitted const item.
    #[arg(short, long)]
    name: Option<String>,
}

impl Args {
    fn divisor(&self) -> BigUint {
        match (&self.divisor, self.pow10) {
            (Some(divisor), _) => divisor.clone(),
            (None, Some(exponent)) => Divisor::PowerOfTen(exponent).value(),
            (None, None) => unreachable!("clap requires one of --divisor and --pow10"),
        }
    }

    fn slack(&self, divisor: &BigUint) -> u32 {
        match (self.slack, self.pow10) {
            (Some(slack), _) => slack,
            (None, Some(exponent)) if self.divisor.is_none() => exponent,
            _ => divisor.trailing_zeros().unwrap_or(0) as u32,
        }
    }

    fn name(&self, constants: &DerivedConstants) -> String {
        match (&self.name, self.pow10) {
            (Some(name), _) => name.clone(),
            (None, Some(exponent)) if self.divisor.is_none() => {
                format!("DIV_BY_10_POW_{exponent}_U{}", constants.bits())
            }
            _ => format!("DIV_BY_{}_U{}", constants.divisor(), constants.bits()),
        }
    }
}

fn rust_item(name: &str, constants: &DerivedConstants) -> Result<String, DeriveError> {
    let bits = constants.bits();
    if ![8, 16, 32, 64, 128].contains(&bits) {
        return Err(DeriveError::WidthMismatch {
            expected: bits.next_power_of_two().clamp(8, 128),
            found: bits,
        });
    }

    Ok(format!(
        "pub const {name}: DivisionConstants<u{bits}> = DivisionConstants::from_raw_parts(\n    \
         {},\n    {:#x},\n    {},\n    {},\n    {:#x},\n    {},\n);",
        constants.divisor(),
        constants.multiplier(),
        constants.shift(),
        constants.threshold(),
        constants.inverse(),
        constants.slack(),
    ))
}

fn main() -> Result<(), DeriveError> {
    let args = Args::parse();

    let divisor = args.divisor();
    let slack = args.slack(&divisor);
    let constants = derive(divisor, args.bits, slack)?;

    match args.format {
        Format::Text => println!("{constants}"),
        Format::Rust => println!("{}", rust_item(&args.name(&constants), &constants)?),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLES: &str = include_str!("../../fastdiv/src/tables.rs");

    fn emit(argv: &[&str]) -> String {
        let args = Args::try_parse_from(argv).unwrap();
        let divisor = args.divisor();
        let slack = args.slack(&divisor);
        let constants = derive(divisor, args.bits, slack).unwrap();
        rust_item(&args.name(&constants), &constants).unwrap()
    }

    #[test]
    fn test_emitted_items_match_tables() {
        for argv in [
            &["fastdiv_gen", "--divisor", "5", "--format", "rust"][..],
            &["fastdiv_gen", "--divisor", "10", "--format", "rust"],
            &["fastdiv_gen", "--pow10", "32", "--format", "rust"],
            &["fastdiv_gen", "-d", "5", "-b", "64", "-f", "rust"],
            &["fastdiv_gen", "-d", "10", "-b", "64", "-f", "rust"],
            &["fastdiv_gen", "-d", "10", "-b", "32", "-f", "rust"],
        ] {
            let item = emit(argv);
            assert!(TABLES.contains(&item), "{item}");
        }
    }

    #[test]
    fn test_target_is_required() {
        assert!(Args::try_parse_from(["fastdiv_gen"]).is_err());
        assert!(Args::try_parse_from(["fastdiv_gen", "-d", "5", "-p", "3"]).is_err());
    }

    #[test]
    fn test_explicit_slack() {
        let args = Args::try_parse_from(["fastdiv_gen", "-d", "10", "-t", "0"]).unwrap();
        let divisor = args.divisor();
        let err = derive(divisor.clone(), args.bits, args.slack(&divisor)).unwrap_err();
        assert!(matches!(err, DeriveError::NoInverse { .. }));
    }

    #[test]
    fn test_unsupported_width() {
        let constants = derive(5u32, 256, 0).unwrap();
        assert!(rust_item("DIV", &constants).is_err());
    }
}
