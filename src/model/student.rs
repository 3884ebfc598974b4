use super::Faculty;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct StudentId(pub u32);

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum StudentStatus {
    Active,
    #[serde(rename = "Academic Leave", alias = "Academic_Leave")]
    AcademicLeave,
    Graduated,
    Expelled,
}

impl StudentStatus {
    /// Graduated and expelled students cannot change status anymore.
    pub fn is_terminal(self) -> bool {
        matches!(self, StudentStatus::Graduated | StudentStatus::Expelled)
    }
}

impl fmt::Display for StudentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StudentStatus::Active => "Active",
            StudentStatus::AcademicLeave => "Academic Leave",
            StudentStatus::Graduated => "Graduated",
            StudentStatus::Expelled => "Expelled",
        })
    }
}

/// Student data as provided at enrollment time, before an id is assigned.
#[derive(Clone, Debug, Deserialize)]
pub struct NewStudent {
    pub full_name: String,
    pub faculty: Faculty,
    pub year: u32,
    #[serde(default = "active")]
    pub status: StudentStatus,
    pub enrollment_date: NaiveDate,
    pub group_number: String,
}

fn active() -> StudentStatus {
    StudentStatus::Active
}

#[derive(Clone, Debug, Serialize)]
pub struct Student {
    pub id: StudentId,
    pub full_name: String,
    pub faculty: Faculty,
    pub year: u32,
    pub status: StudentStatus,
    pub enrollment_date: NaiveDate,
    pub group_number: String,
}

impl Student {
    pub(super) fn new(id: StudentId, data: NewStudent) -> Self {
        Self {
            id,
            full_name: data.full_name,
            faculty: data.faculty,
            year: data.year,
            status: data.status,
            enrollment_date: data.enrollment_date,
            group_number: data.group_number,
        }
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.full_name, self.group_number)
    }
}

#[test]
fn test_terminal_statuses() {
    assert!(!StudentStatus::Active.is_terminal());
    assert!(!StudentStatus::AcademicLeave.is_terminal());
    assert!(StudentStatus::Graduated.is_terminal());
    assert!(StudentStatus::Expelled.is_terminal());
    assert_eq!(StudentStatus::AcademicLeave.to_string(), "Academic Leave");
}
