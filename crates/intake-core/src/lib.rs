//! intake-core — data layer for the intake training-institute CRM.
//!
//! Two in-memory, identity-keyed collections — students and enquiries —
//! behind one generic async store with simulated latency, plus the seed
//! data, configuration, and dashboard aggregation built on top of them.
//!
//! # Architecture
//!
//! ```text
//! seed ──► MemoryStore<Student> ──┐
//!                                 ├──► DashboardSummary / UI callers
//! seed ──► MemoryStore<Enquiry> ──┘
//! ```
//!
//! The stores are leaves: they know nothing about their callers and never
//! hand out references into their backing collections. Every read and write
//! returns an independent copy.

pub mod config;
pub mod error;
pub mod record;
pub mod report;
pub mod seed;
pub mod store;
pub mod types;

pub use error::{Error, Result};
pub use record::Record;
pub use report::DashboardSummary;
pub use store::{Latency, MemoryStore, Repository};
pub use types::{
    Enquiry, EnquiryPatch, EnquiryStatus, NewEnquiry, NewStudent, Student, StudentPatch,
};
