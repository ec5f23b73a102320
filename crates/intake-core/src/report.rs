//! Dashboard summary aggregation.
//!
//! The admin dashboard derives everything it shows from two full-collection
//! snapshots fetched concurrently, the same way the original screen fanned
//! out its two `getAll` calls. No store-side aggregation exists; this module
//! is the one place the numbers are computed.

use crate::error::Result;
use crate::store::Repository;
use crate::types::{Enquiry, EnquiryStatus, Student};
use chrono::NaiveDate;
use std::cmp::Reverse;

/// The numbers and recent-activity lists the dashboard shows.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub total_students: usize,
    /// Enquiries still in the `New` status.
    pub new_enquiries: usize,
    /// Enquiries due for a follow-up today or earlier.
    pub pending_follow_ups: usize,
    /// Most recent enrollments, newest first, at most `recent_limit`.
    pub recent_students: Vec<Student>,
    /// Most recent enquiries, newest first, at most `recent_limit`.
    pub recent_enquiries: Vec<Enquiry>,
}

impl DashboardSummary {
    /// Snapshot both collections concurrently and derive the summary as of
    /// `today`.
    pub async fn collect(
        students: &impl Repository<Student>,
        enquiries: &impl Repository<Enquiry>,
        today: NaiveDate,
        recent_limit: usize,
    ) -> Result<Self> {
        let (students, enquiries) = tokio::join!(students.get_all(), enquiries.get_all());
        let students = students?;
        let enquiries = enquiries?;

        let new_enquiries = enquiries
            .iter()
            .filter(|e| e.status == EnquiryStatus::New)
            .count();
        let pending_follow_ups = enquiries
            .iter()
            .filter(|e| e.follow_up_pending(today))
            .count();

        let mut recent_students = students.clone();
        recent_students.sort_by_key(|s| Reverse(s.enrollment_date));
        recent_students.truncate(recent_limit);

        let mut recent_enquiries = enquiries.clone();
        recent_enquiries.sort_by_key(|e| Reverse(e.enquiry_date));
        recent_enquiries.truncate(recent_limit);

        Ok(DashboardSummary {
            total_students: students.len(),
            new_enquiries,
            pending_follow_ups,
            recent_students,
            recent_enquiries,
        })
    }
}
