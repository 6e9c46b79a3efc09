//! Workbook-to-changelog transformation pipeline
//!
//! Decodes a spreadsheet workbook, validates and extracts each
//! requested sheet as one lookup-code table, renders one changeset per
//! table, and assembles the fragments into a single Liquibase
//! changelog document.

pub mod document;
pub mod emit;
pub mod extract;
pub mod types;

pub use document::{Conversion, ConvertError, ConvertOptions, DEFAULT_AUTHOR, convert};
pub use types::{CodeRecord, CodeTable, SkipReason};
