//! Test builders — ergonomic constructors for drafts, patches, and stores.
//!
//! These builders are designed for readability in test assertions, not for
//! production use.

use intake_core::{
    Enquiry, EnquiryStatus, Latency, MemoryStore, NewEnquiry, NewStudent, Student,
};
use chrono::NaiveDate;

// ---------------------------------------------------------------------------
// StudentDraft
// ---------------------------------------------------------------------------

/// Fluent builder for [`NewStudent`] test fixtures.
///
/// # Example
///
/// ```rust
/// let draft = StudentDraft::new("Asha Kulkarni", "Python")
///     .phone("98220 11223")
///     .email("asha@example.com")
///     .build();
/// ```
pub struct StudentDraft {
    draft: NewStudent,
}

impl StudentDraft {
    pub fn new(name: impl Into<String>, course: impl Into<String>) -> Self {
        Self {
            draft: NewStudent {
                name: name.into(),
                course: course.into(),
                phone: "98220 00000".to_string(),
                ..Default::default()
            },
        }
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.draft.phone = phone.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.draft.email = Some(email.into());
        self
    }

    pub fn enrolled_on(mut self, date: NaiveDate) -> Self {
        self.draft.enrollment_date = Some(date);
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.draft.status = Some(status.into());
        self
    }

    pub fn build(self) -> NewStudent {
        self.draft
    }
}

// ---------------------------------------------------------------------------
// EnquiryDraft
// ---------------------------------------------------------------------------

/// Fluent builder for [`NewEnquiry`] test fixtures.
pub struct EnquiryDraft {
    draft: NewEnquiry,
}

impl EnquiryDraft {
    pub fn new(name: impl Into<String>, course: impl Into<String>) -> Self {
        Self {
            draft: NewEnquiry {
                name: name.into(),
                interested_course: course.into(),
                phone: "98500 00000".to_string(),
                ..Default::default()
            },
        }
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.draft.phone = phone.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.draft.email = Some(email.into());
        self
    }

    pub fn enquired_on(mut self, date: NaiveDate) -> Self {
        self.draft.enquiry_date = Some(date);
        self
    }

    pub fn follow_up_on(mut self, date: NaiveDate) -> Self {
        self.draft.follow_up_date = Some(date);
        self
    }

    pub fn status(mut self, status: EnquiryStatus) -> Self {
        self.draft.status = Some(status);
        self
    }

    pub fn build(self) -> NewEnquiry {
        self.draft
    }
}

// ---------------------------------------------------------------------------
// Store constructors
// ---------------------------------------------------------------------------

/// An empty student store with no simulated latency.
pub fn student_store() -> MemoryStore<Student> {
    MemoryStore::empty(Latency::none())
}

/// An empty enquiry store with no simulated latency.
pub fn enquiry_store() -> MemoryStore<Enquiry> {
    MemoryStore::empty(Latency::none())
}

/// A student store seeded from the given records, no latency.
pub fn seeded_student_store(seed: Vec<Student>) -> MemoryStore<Student> {
    MemoryStore::new(seed, Latency::none())
}

/// An enquiry store seeded from the given records, no latency.
pub fn seeded_enquiry_store(seed: Vec<Enquiry>) -> MemoryStore<Enquiry> {
    MemoryStore::new(seed, Latency::none())
}
