//! I/O module
//!
//! Handles user input parsing, script files and summary output.
//!
//! # Components
//!
//! - `amount` - Decimal amount parsing with typed validation errors
//! - `csv_format` - Script row conversion and summary serialization
//! - `script_reader` - CSV script reader with iterator interface

pub mod amount;
pub mod csv_format;
pub mod script_reader;

pub use amount::parse_amount;
pub use csv_format::{convert_command_record, write_summary_csv, CommandRecord};
pub use script_reader::ScriptReader;
