//! xlsxvcard - Pure-Rust Excel to vCard batch converter
//!
//! This crate reads a contact list from an Excel file (XLSX) and writes one
//! vCard 3.0 file (`.vcf`) per contact into an output directory, with
//! filesystem-safe file names derived from the contact's name.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::fs::File;
//! use std::path::Path;
//! use xlsxvcard::ConverterBuilder;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create a converter with default settings
//!     let converter = ConverterBuilder::new().build()?;
//!
//!     // Open input Excel file
//!     let input = File::open("contacts.xlsx")?;
//!
//!     // Write one .vcf file per contact into the output directory
//!     let report = converter.convert(input, Path::new("vcards"))?;
//!
//!     println!("{} vCards written", report.written.len());
//!     Ok(())
//! }
//! ```
//!
//! For in-memory input, use `Cursor`:
//!
//! ```rust,no_run
//! use std::io::Cursor;
//! use std::path::Path;
//! use xlsxvcard::ConverterBuilder;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let converter = ConverterBuilder::new().build()?;
//! let excel_data: Vec<u8> = vec![]; // Your Excel file bytes
//! let report = converter.convert(Cursor::new(excel_data), Path::new("vcards"))?;
//! # Ok(())
//! # }
//! ```
//!
//! # Custom Configuration
//!
//! ```rust,no_run
//! use std::fs::File;
//! use std::path::Path;
//! use xlsxvcard::{ConverterBuilder, MissingNamePolicy, SheetSelector};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create a converter with custom settings
//!     let converter = ConverterBuilder::new()
//!         .with_sheet_selector(SheetSelector::Name("Contacts".to_string()))
//!         .with_missing_name_policy(MissingNamePolicy::Abort)
//!         .build()?;
//!
//!     let input = File::open("contacts.xlsx")?;
//!     converter.convert(input, Path::new("vcards"))?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Mapping Only
//!
//! ```rust,no_run
//! use std::fs::File;
//! use xlsxvcard::ConverterBuilder;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let converter = ConverterBuilder::new().build()?;
//!     let input = File::open("contacts.xlsx")?;
//!
//!     // Map records to Contact models without touching the filesystem
//!     let (contacts, skipped) = converter.contacts(input)?;
//!     for contact in &contacts {
//!         println!("{}", contact.display_name());
//!     }
//!     eprintln!("{} rows skipped", skipped.len());
//!
//!     Ok(())
//! }
//! ```

mod api;
mod builder;
mod emitter;
mod error;
mod mapper;
mod model;
mod output;
mod parser;
mod types;

// 公開API
pub use api::{MissingNamePolicy, SheetSelector};
pub use builder::{ConversionReport, Converter, ConverterBuilder, SkippedRecord};
pub use error::XlsxToVcfError;
pub use model::Contact;
