//! Bundled seed datasets.
//!
//! The seed documents are plain JSON arrays embedded at compile time, the
//! only "persisted" format the system has. Each loader parses a fresh copy,
//! so the data handed to a store is independent of every other copy and the
//! embedded document itself is never mutated.

use crate::error::Result;
use crate::types::{Enquiry, Student};

const STUDENTS_JSON: &str = include_str!("../data/students.json");
const ENQUIRIES_JSON: &str = include_str!("../data/enquiries.json");

/// The bundled student roster.
pub fn students() -> Result<Vec<Student>> {
    Ok(serde_json::from_str(STUDENTS_JSON)?)
}

/// The bundled enquiry list.
pub fn enquiries() -> Result<Vec<Enquiry>> {
    Ok(serde_json::from_str(ENQUIRIES_JSON)?)
}
