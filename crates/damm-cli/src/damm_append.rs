//! Check digit appending CLI
//!
//! Usage: damm_append <value>...
//!
//! Prints each digit-only value with its Damm check digit appended, one
//! per line, for constructing checksummed identifiers.
//!
//! Example: damm_append 572   ->   5724

use std::env;
use std::process;

struct Args {
    values: Vec<String>,
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} <value>...", program);
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  <value>    Digit-only value to append a check digit to");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --help, -h    Show this help message");
}

fn parse_args() -> Result<Args, String> {
    let args: Vec<String> = env::args().collect();
    let mut values = Vec::new();

    for arg in &args[1..] {
        match arg.as_str() {
            "--help" | "-h" => {
                print_usage(&args[0]);
                process::exit(0);
            }
            arg if !arg.starts_with('-') => values.push(arg.to_string()),
            _ => return Err(format!("Unknown option: {}", arg)),
        }
    }

    if values.is_empty() {
        return Err("Missing value argument".to_string());
    }

    Ok(Args { values })
}

fn main() {
    let args = match parse_args() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_usage(&env::args().next().unwrap_or_default());
            process::exit(1);
        }
    };

    for value in &args.values {
        match damm_checksum::append(value) {
            Ok(identifier) => println!("{}", identifier),
            Err(e) => {
                eprintln!("Error: {}: {}", value, e);
                process::exit(1);
            }
        }
    }
}
