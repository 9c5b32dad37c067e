//! Check digit verification CLI
//!
//! Usage: damm_verify <value>...
//!
//! Checks each value's trailing Damm check digit and reports
//! "valid" or "INVALID" per line. Exits 1 if any value is invalid or
//! malformed.
//!
//! Example: damm_verify 5724 5274

use std::env;
use std::process;

struct Args {
    values: Vec<String>,
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} <value>...", program);
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  <value>    Value carrying a trailing check digit");
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

    let mut all_valid = true;

    for value in &args.values {
        match damm_checksum::verify(value) {
            Ok(true) => println!("{}: valid", value),
            Ok(false) => {
                println!("{}: INVALID", value);
                all_valid = false;
            }
            Err(e) => {
                eprintln!("Error: {}: {}", value, e);
                process::exit(1);
            }
        }
    }

    if !all_valid {
        process::exit(1);
    }
}
