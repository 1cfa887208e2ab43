//! `cpw-encode` — encode trait weightings (JSON) to compact packed weights.
//!
//! Usage:
//!   cpw-encode [--mode compatible|strict] [--strict] [FILE]
//!
//! Reads a JSON object mapping category names to weight arrays from FILE or
//! stdin and prints one hexadecimal CPW per line, in key order.

use cpw::cli::{encode_weightings, CliError};
use std::io::{self, Read};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // Parse --mode and --strict flags; a bare argument is the input file.
    let mut mode = "compatible".to_string();
    let mut file: Option<String> = None;
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--strict" => {
                mode = "strict".to_string();
            }
            "--mode" => {
                i += 1;
                if let Some(m) = args.get(i) {
                    mode = m.clone();
                }
            }
            other => {
                file = Some(other.to_string());
            }
        }
        i += 1;
    }

    let buf = match file {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(buf) => buf,
            Err(e) => {
                eprintln!("{path}: {e}");
                std::process::exit(1);
            }
        },
        None => {
            let mut buf = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buf) {
                eprintln!("{e}");
                std::process::exit(1);
            }
            buf
        }
    };

    match encode_weightings(buf.trim(), &mode) {
        Ok(cpws) => {
            for cpw in cpws {
                println!("{cpw}");
            }
        }
        Err(CliError::UnknownMode(m)) => {
            eprintln!("Unknown mode: {m}");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
