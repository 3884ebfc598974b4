use crate::model::{CourseId, StudentId, StudentStatus};

/// Entity that could not be resolved by its id.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Missing {
    Student(StudentId),
    Course(CourseId),
}

impl std::fmt::Display for Missing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Missing::Student(id) => write!(f, "student {id}"),
            Missing::Course(id) => write!(f, "course {id}"),
        }
    }
}

/// Failures of the records manager. None of them is recovered internally.
#[derive(Debug, thiserror::Error)]
pub enum RecordsError {
    #[error("{0} not found")]
    NotFound(Missing),

    #[error("student {student} cannot register for course {course} from a different faculty")]
    FacultyMismatch { student: StudentId, course: CourseId },

    #[error("course {course} is full ({max_students} students)")]
    CourseFull { course: CourseId, max_students: usize },

    #[error("student {student} is already registered for course {course}")]
    AlreadyRegistered { student: StudentId, course: CourseId },

    #[error("student {student} is not registered for course {course}")]
    NotRegistered { student: StudentId, course: CourseId },

    #[error("cannot update status of student {student}: status {status} is final")]
    TerminalStatus {
        student: StudentId,
        status: StudentStatus,
    },

    #[error("no grades found for student {0}")]
    NoGrades(StudentId),
}
