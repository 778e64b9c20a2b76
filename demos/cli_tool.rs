//! CLI Tool Example
//!
//! This example demonstrates how to build a command-line tool
//! using xlsxvcard for exporting an Excel contact list as vCard files.

use std::fs::File;
use std::path::Path;
use std::process;
use xlsxvcard::{ConverterBuilder, MissingNamePolicy, SheetSelector, XlsxToVcfError};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 3 {
        eprintln!("Usage: {} <input.xlsx> <output-dir> [options]", args[0]);
        eprintln!("\nOptions:");
        eprintln!("  --sheet-index <n>         Select sheet by index (0-based)");
        eprintln!("  --sheet-name <name>       Select sheet by name");
        eprintln!("  --abort-on-missing-name   Abort the batch when a row has no name");
        eprintln!("\nExamples:");
        eprintln!("  {} contacts.xlsx vcards", args[0]);
        eprintln!("  {} contacts.xlsx vcards --sheet-index 1", args[0]);
        eprintln!("  {} contacts.xlsx vcards --sheet-name \"Contacts\"", args[0]);
        process::exit(1);
    }

    let input_path = &args[1];
    let output_dir = &args[2];

    // Parse options
    let mut sheet_selector = SheetSelector::First;
    let mut missing_name_policy = MissingNamePolicy::Skip;
    let mut i = 3;
    while i < args.len() {
        match args[i].as_str() {
            "--sheet-index" => {
                if i + 1 >= args.len() {
                    eprintln!("Error: --sheet-index requires a value");
                    process::exit(1);
                }
                let index = args[i + 1].parse::<usize>().unwrap_or_else(|_| {
                    eprintln!("Error: Invalid sheet index: {}", args[i + 1]);
                    process::exit(1);
                });
                sheet_selector = SheetSelector::Index(index);
                i += 2;
            }
            "--sheet-name" => {
                if i + 1 >= args.len() {
                    eprintln!("Error: --sheet-name requires a value");
                    process::exit(1);
                }
                sheet_selector = SheetSelector::Name(args[i + 1].clone());
                i += 2;
            }
            "--abort-on-missing-name" => {
                missing_name_policy = MissingNamePolicy::Abort;
                i += 1;
            }
            _ => {
                eprintln!("Error: Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
    }

    // Convert the contact list
    match export_vcards(input_path, output_dir, sheet_selector, missing_name_policy) {
        Ok(()) => {}
        Err(e) => {
            handle_error(e);
            process::exit(1);
        }
    }
}

fn export_vcards(
    input_path: &str,
    output_dir: &str,
    sheet_selector: SheetSelector,
    missing_name_policy: MissingNamePolicy,
) -> Result<(), XlsxToVcfError> {
    // Build converter with the selected options
    let converter = ConverterBuilder::new()
        .with_sheet_selector(sheet_selector)
        .with_missing_name_policy(missing_name_policy)
        .build()?;

    // Open input file
    let input = File::open(input_path)?;

    // Write one .vcf file per contact
    let report = converter.convert(input, Path::new(output_dir))?;

    for skipped in &report.skipped {
        eprintln!("Warning: row {} skipped: {}", skipped.row, skipped.reason);
    }

    println!(
        "Export completed: {} vCards written to {}",
        report.written.len(),
        output_dir
    );

    Ok(())
}

fn handle_error(error: XlsxToVcfError) {
    match error {
        XlsxToVcfError::Io(io_err) => {
            eprintln!("I/O Error: {}", io_err);
            eprintln!("Please check that the paths exist and you have permission to access them.");
        }
        XlsxToVcfError::Parse(parse_err) => {
            eprintln!("Parse Error: {}", parse_err);
            eprintln!("The file may not be a valid Excel file or may be corrupted.");
        }
        XlsxToVcfError::Config(msg) => {
            eprintln!("Configuration Error: {}", msg);
            eprintln!("Please check your sheet selection.");
        }
        XlsxToVcfError::MissingColumn { column } => {
            eprintln!("Missing Column: '{}'", column);
            eprintln!("The input sheet must carry all expected contact columns.");
        }
        XlsxToVcfError::MissingRequiredField { row, column } => {
            eprintln!("Missing Name: row {} has no '{}'", row, column);
            eprintln!("Fix the row or run without --abort-on-missing-name to skip it.");
        }
    }
}
