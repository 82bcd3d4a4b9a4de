use lattice_bit_reader::{BitstreamParser, LATTICE_DEVICES};
use std::env;
use std::fs;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <path-to-bit-file>", args[0]);
        std::process::exit(1);
    }

    let bit_path = &args[1];
    println!("Reading bitstream file: {}", bit_path);
    println!("{}", "=".repeat(60));

    let raw = match fs::read(bit_path) {
        Ok(raw) => raw,
        Err(e) => {
            eprintln!("ERROR: Failed to read {}: {}", bit_path, e);
            std::process::exit(1);
        }
    };

    let mut parser = BitstreamParser::new(raw);
    match parser.parse(LATTICE_DEVICES) {
        Ok(()) => {
            println!("\nHeader fields:");
            let mut fields: Vec<(&str, &str)> = parser.header().iter().collect();
            fields.sort();
            for (key, value) in fields {
                println!("  {}: {}", key, value);
            }

            println!("\nPayload:");
            println!("  {} bytes ({} bits)", parser.payload().len(), parser.bit_length());
            if parser.header_val("idcode").is_empty() {
                println!("  idcode: not recoverable from this file");
            }
        }
        Err(e) => {
            eprintln!("\nERROR: Not a valid Lattice bitstream");
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    }
}
