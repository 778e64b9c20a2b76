//! Basic Conversion Example
//!
//! This example demonstrates the most basic usage of xlsxvcard:
//! converting an Excel contact list into vCard files using default settings.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example basic_conversion -- contacts.xlsx vcards
//! ```
//!
//! If no arguments are provided, it will try to use `contacts.xlsx` in the
//! current directory as input and `vcards/` as the output directory.

use std::fs::File;
use std::path::Path;
use xlsxvcard::ConverterBuilder;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Get input file path from command line arguments or use default
    let input_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "contacts.xlsx".to_string());

    // Get output directory from command line arguments or use default
    let output_dir = std::env::args().nth(2).unwrap_or_else(|| "vcards".to_string());

    println!("Converting {} into {}/...", input_path, output_dir);

    // Create a converter with default settings
    let converter = ConverterBuilder::new().build()?;

    // Open input file
    let input = File::open(&input_path).map_err(|e| {
        eprintln!("Error: Could not open input file '{}'", input_path);
        eprintln!("  {}", e);
        eprintln!("\nHint: Provide a path to an existing Excel contact list.");
        e
    })?;

    // Convert the contact list into one .vcf file per contact
    let report = converter.convert(input, Path::new(&output_dir))?;

    for skipped in &report.skipped {
        eprintln!("Warning: row {} skipped: {}", skipped.row, skipped.reason);
    }

    println!("Conversion completed successfully!");
    println!("{} vCards written to: {}", report.written.len(), output_dir);

    Ok(())
}
