//! Convert tabular rhyme data into import-ready rhyme records.
//!
//! This crate owns all ETL logic: reading delimited rows with a
//! header-derived field mapping, resolving aliased columns, assembling
//! multi-line verses, scoring them, and exporting the converted records
//! as JSON.

pub mod convert;
pub mod csv_import;
pub mod error;
pub mod json_export;
pub mod progress;

pub use convert::{ConvertStats, assemble_verse, calculate_ranking, convert_rows};
pub use csv_import::{
    CATEGORY_ALIASES, DIFFICULTY_ALIASES, RawRow, RowResult, read_rows, read_rows_file,
};
pub use error::ImportError;
pub use json_export::write_records;
pub use progress::{ConvertProgress, LogProgress, SilentProgress};
