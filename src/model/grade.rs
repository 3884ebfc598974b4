use super::{CourseId, Semester, StudentId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum Grade {
    Excellent,
    Good,
    Satisfactory,
    Unsatisfactory,
}

impl Grade {
    /// Best first.
    pub const ALL: [Grade; 4] = [
        Grade::Excellent,
        Grade::Good,
        Grade::Satisfactory,
        Grade::Unsatisfactory,
    ];

    pub fn value(self) -> u8 {
        match self {
            Grade::Excellent => 5,
            Grade::Good => 4,
            Grade::Satisfactory => 3,
            Grade::Unsatisfactory => 2,
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} ({})", self, self.value())
    }
}

/// Enrollment of one student in one course, along with the current grade.
#[derive(Clone, Debug, Serialize)]
pub struct GradeRecord {
    pub student_id: StudentId,
    pub course_id: CourseId,
    pub grade: Grade,
    pub date: DateTime<Utc>,
    pub semester: Semester,
}

impl GradeRecord {
    pub fn concerns(&self, student: StudentId, course: CourseId) -> bool {
        self.student_id == student && self.course_id == course
    }
}

#[test]
fn test_grade_values() {
    assert_eq!(
        Grade::ALL.iter().map(|g| g.value()).collect::<Vec<_>>(),
        vec![5, 4, 3, 2]
    );
    assert_eq!(Grade::Good.to_string(), "Good (4)");
}
