use super::Faculty;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct CourseId(pub u32);

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum CourseType {
    Mandatory,
    Optional,
    Special,
}

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Deserialize, Serialize)]
pub enum Semester {
    First,
    Second,
}

impl Semester {
    pub const ALL: [Semester; 2] = [Semester::First, Semester::Second];
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Semester::First => "First",
            Semester::Second => "Second",
        })
    }
}

/// Course data as provided when it is added, before an id is assigned.
#[derive(Clone, Debug, Deserialize)]
pub struct NewCourse {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: CourseType,
    pub credits: u32,
    pub semester: Semester,
    pub faculty: Faculty,
    pub max_students: usize,
}

#[derive(Clone, Debug, Serialize)]
pub struct Course {
    pub id: CourseId,
    pub name: String,
    pub kind: CourseType,
    pub credits: u32,
    pub semester: Semester,
    pub faculty: Faculty,
    pub max_students: usize,
}

impl Course {
    pub(super) fn new(id: CourseId, data: NewCourse) -> Self {
        Self {
            id,
            name: data.name,
            kind: data.kind,
            credits: data.credits,
            semester: data.semester,
            faculty: data.faculty,
            max_students: data.max_students,
        }
    }
}
