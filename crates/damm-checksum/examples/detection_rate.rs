//! Detection rate evaluation script
//!
//! Measures the fraction of corrupted identifiers the checksum rejects,
//! split by error class. Substitutions and adjacent transpositions must
//! come out at 100%; random multi-digit corruption lands near 90% since a
//! single trailing digit can only rule out nine in ten random errors.
//!
//! ## Usage
//!
//! ```text
//! cargo run --example detection_rate -p damm-checksum --release
//! ```

use std::time::Instant;

use damm_checksum::{append, verify};
use rand::Rng;

const SAMPLE_COUNT: usize = 10_000;
const PAYLOAD_LEN: usize = 12;

fn main() {
    let mut rng = rand::thread_rng();

    println!("[Detection Rate Evaluation]");
    println!("Sample count: {}", SAMPLE_COUNT);
    println!("Payload length: {}", PAYLOAD_LEN);
    println!();

    let start = Instant::now();

    let mut substitution_total = 0u64;
    let mut substitution_detected = 0u64;
    let mut transposition_total = 0u64;
    let mut transposition_detected = 0u64;
    let mut random_total = 0u64;
    let mut random_detected = 0u64;

    for _ in 0..SAMPLE_COUNT {
        let payload: String = (0..PAYLOAD_LEN)
            .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
            .collect();
        let identifier = append(&payload).expect("payload is digit-only");
        let bytes = identifier.as_bytes();

        // One random single-digit substitution
        let pos = rng.gen_range(0..bytes.len());
        let replacement = loop {
            let d = b'0' + rng.gen_range(0..10u8);
            if d != bytes[pos] {
                break d;
            }
        };
        let mut mutated = bytes.to_vec();
        mutated[pos] = replacement;
        substitution_total += 1;
        if !verify(&String::from_utf8(mutated).unwrap()).unwrap() {
            substitution_detected += 1;
        }

        // One random adjacent transposition of distinct digits, if any exists
        let swappable: Vec<usize> = (0..bytes.len() - 1)
            .filter(|&i| bytes[i] != bytes[i + 1])
            .collect();
        if let Some(&i) = swappable.get(rng.gen_range(0..swappable.len().max(1))) {
            let mut mutated = bytes.to_vec();
            mutated.swap(i, i + 1);
            transposition_total += 1;
            if !verify(&String::from_utf8(mutated).unwrap()).unwrap() {
                transposition_detected += 1;
            }
        }

        // Fully random replacement identifier of the same length
        let random_identifier: String = (0..bytes.len())
            .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
            .collect();
        if random_identifier != identifier {
            random_total += 1;
            if !verify(&random_identifier).unwrap() {
                random_detected += 1;
            }
        }
    }

    let elapsed = start.elapsed();

    print_rate("Substitution", substitution_detected, substitution_total);
    print_rate("Transposition", transposition_detected, transposition_total);
    print_rate("Random corruption", random_detected, random_total);
    println!();
    println!("Total time: {:.2}s", elapsed.as_secs_f64());
}

fn print_rate(label: &str, detected: u64, total: u64) {
    let rate = if total > 0 {
        detected as f64 / total as f64 * 100.0
    } else {
        100.0
    };
    println!("{}: {}/{} ({:.2}%)", label, detected, total, rate);
}
