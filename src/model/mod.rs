pub use self::course::{Course, CourseId, CourseType, NewCourse, Semester};
pub use self::faculty::Faculty;
pub use self::grade::{Grade, GradeRecord};
pub use self::ids::IdAllocator;
pub use self::records::Records;
pub use self::student::{NewStudent, Student, StudentId, StudentStatus};

mod course;
mod faculty;
mod grade;
mod ids;
mod records;
mod student;
