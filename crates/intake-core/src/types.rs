//! Core entity types for intake-core.
//!
//! This module defines the two records the institute manages — [`Student`]
//! and [`Enquiry`] — together with their draft types (input to `create`,
//! no id yet) and patch types (input to `update`, every field optional).
//!
//! Field names serialize with the upstream API casing (`Id`,
//! `interestedCourse`, `followUpDate`, …) so the bundled seed documents and
//! any exported records keep the same shape the original admin UI consumed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Student
// ---------------------------------------------------------------------------

/// An enrolled student.
///
/// `id` is assigned by the store and never changes. `status` is a free-form
/// label defaulting to `"Active"`; the store enforces no transitions on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    #[serde(rename = "Id")]
    pub id: u32,
    pub name: String,
    pub course: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "enrollmentDate")]
    pub enrollment_date: NaiveDate,
    pub status: String,
}

/// Input to `create` for students: everything but the id.
///
/// `enrollment_date` and `status` may be omitted; the store fills in the
/// current date and `"Active"` respectively.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewStudent {
    pub name: String,
    pub course: String,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "enrollmentDate", default)]
    pub enrollment_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Field-by-field update for a student. `None` leaves the field untouched;
/// there is no way to clear `email` back to empty through a patch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StudentPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub course: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "enrollmentDate", default)]
    pub enrollment_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: Option<String>,
}

// ---------------------------------------------------------------------------
// Enquiry
// ---------------------------------------------------------------------------

/// A prospective-student enquiry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enquiry {
    #[serde(rename = "Id")]
    pub id: u32,
    pub name: String,
    #[serde(rename = "interestedCourse")]
    pub interested_course: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "enquiryDate")]
    pub enquiry_date: NaiveDate,
    #[serde(rename = "followUpDate", default, skip_serializing_if = "Option::is_none")]
    pub follow_up_date: Option<NaiveDate>,
    pub status: EnquiryStatus,
}

/// Input to `create` for enquiries: everything but the id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewEnquiry {
    pub name: String,
    #[serde(rename = "interestedCourse")]
    pub interested_course: String,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "enquiryDate", default)]
    pub enquiry_date: Option<NaiveDate>,
    #[serde(rename = "followUpDate", default)]
    pub follow_up_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: Option<EnquiryStatus>,
}

/// Field-by-field update for an enquiry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnquiryPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "interestedCourse", default)]
    pub interested_course: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "enquiryDate", default)]
    pub enquiry_date: Option<NaiveDate>,
    #[serde(rename = "followUpDate", default)]
    pub follow_up_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: Option<EnquiryStatus>,
}

impl Enquiry {
    /// Whether this enquiry is due for a follow-up on or before `today`.
    /// Converted enquiries are off the follow-up list; Closed ones are not.
    pub fn follow_up_pending(&self, today: NaiveDate) -> bool {
        self.follow_up_date.is_some_and(|due| due <= today)
            && self.status != EnquiryStatus::Converted
    }
}

// ---------------------------------------------------------------------------
// EnquiryStatus
// ---------------------------------------------------------------------------

/// Enquiry pipeline status. New enquiries start as `New`; the store does not
/// enforce any transition order between the variants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum EnquiryStatus {
    #[default]
    New,
    Contacted,
    Converted,
    Closed,
}

impl EnquiryStatus {
    pub const ALL: [EnquiryStatus; 4] = [
        EnquiryStatus::New,
        EnquiryStatus::Contacted,
        EnquiryStatus::Converted,
        EnquiryStatus::Closed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EnquiryStatus::New => "New",
            EnquiryStatus::Contacted => "Contacted",
            EnquiryStatus::Converted => "Converted",
            EnquiryStatus::Closed => "Closed",
        }
    }
}

impl std::fmt::Display for EnquiryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive parse, matching how the upstream UI compared statuses.
impl std::str::FromStr for EnquiryStatus {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "new" => Ok(EnquiryStatus::New),
            "contacted" => Ok(EnquiryStatus::Contacted),
            "converted" => Ok(EnquiryStatus::Converted),
            "closed" => Ok(EnquiryStatus::Closed),
            _ => Err(crate::Error::UnknownStatus(s.to_string())),
        }
    }
}

impl TryFrom<String> for EnquiryStatus {
    type Error = crate::Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<EnquiryStatus> for String {
    fn from(status: EnquiryStatus) -> Self {
        status.as_str().to_string()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
