//! The [`Record`] trait — the seam that lets one generic store manage both
//! entity types.
//!
//! A record knows its id, how to materialize itself from a draft (filling
//! store-side defaults), how to merge a patch field-by-field, and which of
//! its fields free-text search looks at.

use crate::types::{
    Enquiry, EnquiryPatch, EnquiryStatus, NewEnquiry, NewStudent, Student, StudentPatch,
};
use chrono::NaiveDate;

/// An identity-keyed entity managed by a [`MemoryStore`](crate::store::MemoryStore).
pub trait Record: Clone + Send + Sync + 'static {
    /// Input to `create`: the record minus its id, with defaultable fields
    /// optional.
    type Draft: Send;
    /// Input to `update`: every field optional, `None` meaning "leave as is".
    type Patch: Send;

    /// Entity name used in error messages ("Student", "Enquiry").
    const KIND: &'static str;

    fn id(&self) -> u32;

    /// Build a full record from a draft, the store-assigned id, and the
    /// current date for date defaults.
    fn materialize(id: u32, draft: Self::Draft, today: NaiveDate) -> Self;

    /// Overwrite exactly the fields the patch carries. The id is governed by
    /// the store, never by the patch.
    fn merge(&mut self, patch: Self::Patch);

    /// Substring match against the record's searchable fields. `needle` is
    /// already lowercased; the empty string matches every record.
    fn matches(&self, needle: &str) -> bool;
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

// ---------------------------------------------------------------------------
// Student
// ---------------------------------------------------------------------------

impl Record for Student {
    type Draft = NewStudent;
    type Patch = StudentPatch;

    const KIND: &'static str = "Student";

    fn id(&self) -> u32 {
        self.id
    }

    fn materialize(id: u32, draft: NewStudent, today: NaiveDate) -> Self {
        Student {
            id,
            name: draft.name,
            course: draft.course,
            phone: draft.phone,
            email: draft.email,
            enrollment_date: draft.enrollment_date.unwrap_or(today),
            status: draft.status.unwrap_or_else(|| "Active".to_string()),
        }
    }

    fn merge(&mut self, patch: StudentPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(course) = patch.course {
            self.course = course;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(email) = patch.email {
            self.email = Some(email);
        }
        if let Some(date) = patch.enrollment_date {
            self.enrollment_date = date;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }

    fn matches(&self, needle: &str) -> bool {
        contains_ci(&self.name, needle)
            || contains_ci(&self.course, needle)
            || self.phone.contains(needle)
            || self
                .email
                .as_deref()
                .is_some_and(|email| contains_ci(email, needle))
    }
}

// ---------------------------------------------------------------------------
// Enquiry
// ---------------------------------------------------------------------------

impl Record for Enquiry {
    type Draft = NewEnquiry;
    type Patch = EnquiryPatch;

    const KIND: &'static str = "Enquiry";

    fn id(&self) -> u32 {
        self.id
    }

    fn materialize(id: u32, draft: NewEnquiry, today: NaiveDate) -> Self {
        Enquiry {
            id,
            name: draft.name,
            interested_course: draft.interested_course,
            phone: draft.phone,
            email: draft.email,
            enquiry_date: draft.enquiry_date.unwrap_or(today),
            follow_up_date: draft.follow_up_date,
            status: draft.status.unwrap_or(EnquiryStatus::New),
        }
    }

    fn merge(&mut self, patch: EnquiryPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(course) = patch.interested_course {
            self.interested_course = course;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(email) = patch.email {
            self.email = Some(email);
        }
        if let Some(date) = patch.enquiry_date {
            self.enquiry_date = date;
        }
        if let Some(date) = patch.follow_up_date {
            self.follow_up_date = Some(date);
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }

    fn matches(&self, needle: &str) -> bool {
        contains_ci(&self.name, needle)
            || contains_ci(&self.interested_course, needle)
            || self.phone.contains(needle)
            || self
                .email
                .as_deref()
                .is_some_and(|email| contains_ci(email, needle))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
