use super::*;
use crate::error::{Missing, RecordsError};
use chrono::Utc;
use tracing::debug;

/// In-memory store of students, courses and grade records.
#[derive(Debug, Default)]
pub struct Records {
    students: Vec<Student>,
    courses: Vec<Course>,
    grades: Vec<GradeRecord>,
    student_ids: IdAllocator,
    course_ids: IdAllocator,
}

impl Records {
    pub fn new() -> Records {
        Records::default()
    }

    pub fn enroll_student(&mut self, data: NewStudent) -> &Student {
        let id = StudentId(self.student_ids.allocate());
        debug!(student = %id, name = %data.full_name, faculty = %data.faculty, "enrolling student");
        self.students.push(Student::new(id, data));
        &self.students[self.students.len() - 1]
    }

    pub fn add_course(&mut self, data: NewCourse) -> &Course {
        let id = CourseId(self.course_ids.allocate());
        debug!(course = %id, name = %data.name, faculty = %data.faculty, "adding course");
        self.courses.push(Course::new(id, data));
        &self.courses[self.courses.len() - 1]
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn grade_records(&self) -> &[GradeRecord] {
        &self.grades
    }

    pub fn student(&self, id: StudentId) -> Result<&Student, RecordsError> {
        self.students
            .iter()
            .find(|s| s.id == id)
            .ok_or(RecordsError::NotFound(Missing::Student(id)))
    }

    pub fn course(&self, id: CourseId) -> Result<&Course, RecordsError> {
        self.courses
            .iter()
            .find(|c| c.id == id)
            .ok_or(RecordsError::NotFound(Missing::Course(id)))
    }

    /// Number of students registered for a course.
    pub fn enrolled_count(&self, course: CourseId) -> usize {
        self.grades.iter().filter(|g| g.course_id == course).count()
    }

    pub fn register_for_course(
        &mut self,
        student: StudentId,
        course: CourseId,
    ) -> Result<(), RecordsError> {
        let faculty = self.student(student)?.faculty;
        let c = self.course(course)?;
        if faculty != c.faculty {
            return Err(RecordsError::FacultyMismatch { student, course });
        }
        if self.enrolled_count(course) >= c.max_students {
            return Err(RecordsError::CourseFull {
                course,
                max_students: c.max_students,
            });
        }
        if self.grades.iter().any(|g| g.concerns(student, course)) {
            return Err(RecordsError::AlreadyRegistered { student, course });
        }
        let semester = c.semester;
        self.grades.push(GradeRecord {
            student_id: student,
            course_id: course,
            grade: Grade::Unsatisfactory,
            date: Utc::now(),
            semester,
        });
        debug!(%student, %course, "student registered for course");
        Ok(())
    }

    pub fn set_grade(
        &mut self,
        student: StudentId,
        course: CourseId,
        grade: Grade,
    ) -> Result<(), RecordsError> {
        self.student(student)?;
        self.course(course)?;
        let record = self
            .grades
            .iter_mut()
            .find(|g| g.concerns(student, course))
            .ok_or(RecordsError::NotRegistered { student, course })?;
        record.grade = grade;
        debug!(%student, %course, %grade, "grade set");
        Ok(())
    }

    pub fn update_student_status(
        &mut self,
        student: StudentId,
        status: StudentStatus,
    ) -> Result<(), RecordsError> {
        let s = self
            .students
            .iter_mut()
            .find(|s| s.id == student)
            .ok_or(RecordsError::NotFound(Missing::Student(student)))?;
        if s.status.is_terminal() {
            return Err(RecordsError::TerminalStatus {
                student,
                status: s.status,
            });
        }
        debug!(%student, from = %s.status, to = %status, "status updated");
        s.status = status;
        Ok(())
    }

    pub fn students_by_faculty(&self, faculty: Faculty) -> Vec<&Student> {
        self.students.iter().filter(|s| s.faculty == faculty).collect()
    }

    pub fn student_grades(&self, student: StudentId) -> Vec<&GradeRecord> {
        self.grades
            .iter()
            .filter(|g| g.student_id == student)
            .collect()
    }

    pub fn available_courses(&self, faculty: Faculty, semester: Semester) -> Vec<&Course> {
        self.courses
            .iter()
            .filter(|c| c.faculty == faculty && c.semester == semester)
            .collect()
    }

    pub fn calculate_average_grade(&self, student: StudentId) -> Result<f64, RecordsError> {
        let grades = self.student_grades(student);
        if grades.is_empty() {
            return Err(RecordsError::NoGrades(student));
        }
        Ok(Self::mean(&grades))
    }

    /// Students of the faculty whose average grade is exactly excellent.
    /// Students without any grade have a NaN average and never qualify.
    pub fn honors_by_faculty(&self, faculty: Faculty) -> Vec<&Student> {
        let excellent = f64::from(Grade::Excellent.value());
        self.students
            .iter()
            .filter(|s| Self::mean(&self.student_grades(s.id)) == excellent)
            .filter(|s| s.faculty == faculty)
            .collect()
    }

    #[allow(clippy::cast_precision_loss)]
    fn mean(grades: &[&GradeRecord]) -> f64 {
        let total: u32 = grades.iter().map(|g| u32::from(g.grade.value())).sum();
        f64::from(total) / grades.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn student(name: &str, faculty: Faculty) -> NewStudent {
        NewStudent {
            full_name: name.into(),
            faculty,
            year: 1,
            status: StudentStatus::Active,
            enrollment_date: NaiveDate::from_ymd_opt(2024, 9, 1).unwrap(),
            group_number: "CS101".into(),
        }
    }

    fn course(name: &str, faculty: Faculty, max_students: usize) -> NewCourse {
        NewCourse {
            name: name.into(),
            kind: CourseType::Mandatory,
            credits: 5,
            semester: Semester::First,
            faculty,
            max_students,
        }
    }

    #[test]
    fn test_sequential_ids() {
        let mut r = Records::new();
        let ids = (0..5)
            .map(|n| r.enroll_student(student(&format!("S{n}"), Faculty::Law)).id)
            .collect::<Vec<_>>();
        assert_eq!(ids, (1..=5).map(StudentId).collect::<Vec<_>>());
        assert_eq!(r.add_course(course("A", Faculty::Law, 1)).id, CourseId(1));
        assert_eq!(r.add_course(course("B", Faculty::Law, 1)).id, CourseId(2));
    }

    #[test]
    fn test_register_unknown() {
        let mut r = Records::new();
        let s = r.enroll_student(student("Ann", Faculty::Law)).id;
        let c = r.add_course(course("Torts", Faculty::Law, 3)).id;
        assert!(matches!(
            r.register_for_course(StudentId(42), c),
            Err(RecordsError::NotFound(Missing::Student(StudentId(42))))
        ));
        assert!(matches!(
            r.register_for_course(s, CourseId(9)),
            Err(RecordsError::NotFound(Missing::Course(CourseId(9))))
        ));
        assert!(r.grade_records().is_empty());
    }

    #[test]
    fn test_faculty_mismatch_before_capacity() {
        let mut r = Records::new();
        let s = r.enroll_student(student("Ann", Faculty::Law)).id;
        let roomy = r.add_course(course("Algebra", Faculty::Engineering, 30)).id;
        let full = r.add_course(course("Compilers", Faculty::ComputerScience, 0)).id;
        assert!(matches!(
            r.register_for_course(s, roomy),
            Err(RecordsError::FacultyMismatch { .. })
        ));
        assert!(matches!(
            r.register_for_course(s, full),
            Err(RecordsError::FacultyMismatch { .. })
        ));
    }

    #[test]
    fn test_course_capacity() {
        let mut r = Records::new();
        let c = r.add_course(course("Economics 101", Faculty::Economics, 3)).id;
        let students = (0..4)
            .map(|n| r.enroll_student(student(&format!("S{n}"), Faculty::Economics)).id)
            .collect::<Vec<_>>();
        for &s in &students[..3] {
            r.register_for_course(s, c).unwrap();
        }
        assert_eq!(r.enrolled_count(c), 3);
        assert!(matches!(
            r.register_for_course(students[3], c),
            Err(RecordsError::CourseFull { max_students: 3, .. })
        ));
        assert_eq!(r.enrolled_count(c), 3);
    }

    #[test]
    fn test_registration_preset() {
        let mut r = Records::new();
        let s = r.enroll_student(student("Ann", Faculty::Law)).id;
        let mut second = course("Contracts", Faculty::Law, 2);
        second.semester = Semester::Second;
        let c = r.add_course(second).id;
        r.register_for_course(s, c).unwrap();
        let grades = r.student_grades(s);
        assert_eq!(grades.len(), 1);
        assert_eq!(grades[0].grade, Grade::Unsatisfactory);
        assert_eq!(grades[0].semester, Semester::Second);
        assert!(matches!(
            r.register_for_course(s, c),
            Err(RecordsError::AlreadyRegistered { .. })
        ));
        assert_eq!(r.enrolled_count(c), 1);
    }

    #[test]
    fn test_set_grade_requires_registration() {
        let mut r = Records::new();
        let s = r.enroll_student(student("Ann", Faculty::Law)).id;
        let c = r.add_course(course("Torts", Faculty::Law, 3)).id;
        assert!(matches!(
            r.set_grade(s, c, Grade::Good),
            Err(RecordsError::NotRegistered { .. })
        ));
        assert!(matches!(
            r.set_grade(s, CourseId(7), Grade::Good),
            Err(RecordsError::NotFound(Missing::Course(_)))
        ));
        r.register_for_course(s, c).unwrap();
        r.set_grade(s, c, Grade::Good).unwrap();
        assert_eq!(r.student_grades(s)[0].grade, Grade::Good);
    }

    #[test]
    fn test_status_transitions() {
        let mut r = Records::new();
        let s = r.enroll_student(student("Ann", Faculty::Law)).id;
        r.update_student_status(s, StudentStatus::AcademicLeave).unwrap();
        r.update_student_status(s, StudentStatus::Active).unwrap();
        r.update_student_status(s, StudentStatus::Active).unwrap();
        r.update_student_status(s, StudentStatus::Graduated).unwrap();
        for status in [
            StudentStatus::Active,
            StudentStatus::AcademicLeave,
            StudentStatus::Expelled,
            StudentStatus::Graduated,
        ] {
            assert!(matches!(
                r.update_student_status(s, status),
                Err(RecordsError::TerminalStatus {
                    status: StudentStatus::Graduated,
                    ..
                })
            ));
        }
        assert!(matches!(
            r.update_student_status(StudentId(3), StudentStatus::Active),
            Err(RecordsError::NotFound(_))
        ));
    }

    #[test]
    fn test_expelled_is_terminal() {
        let mut r = Records::new();
        let s = r.enroll_student(student("Bob", Faculty::Law)).id;
        r.update_student_status(s, StudentStatus::Expelled).unwrap();
        assert!(r.update_student_status(s, StudentStatus::Active).is_err());
        assert_eq!(r.student(s).unwrap().status, StudentStatus::Expelled);
    }

    #[test]
    fn test_average_grade() {
        let mut r = Records::new();
        let s = r.enroll_student(student("Ann", Faculty::Law)).id;
        let a = r.add_course(course("Torts", Faculty::Law, 3)).id;
        let b = r.add_course(course("Contracts", Faculty::Law, 3)).id;
        assert!(matches!(
            r.calculate_average_grade(s),
            Err(RecordsError::NoGrades(_))
        ));
        r.register_for_course(s, a).unwrap();
        r.register_for_course(s, b).unwrap();
        r.set_grade(s, a, Grade::Excellent).unwrap();
        r.set_grade(s, b, Grade::Good).unwrap();
        assert_eq!(r.calculate_average_grade(s).unwrap(), 4.5);
    }

    #[test]
    fn test_filters() {
        let mut r = Records::new();
        r.enroll_student(student("Ann", Faculty::Law));
        r.enroll_student(student("Ivan", Faculty::ComputerScience));
        r.enroll_student(student("Bob", Faculty::Law));
        r.add_course(course("Torts", Faculty::Law, 3));
        let mut second = course("Contracts", Faculty::Law, 3);
        second.semester = Semester::Second;
        r.add_course(second);
        let names = r
            .students_by_faculty(Faculty::Law)
            .iter()
            .map(|s| s.full_name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["Ann", "Bob"]);
        assert!(r.students_by_faculty(Faculty::Economics).is_empty());
        let courses = r.available_courses(Faculty::Law, Semester::Second);
        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].name, "Contracts");
        assert!(r.available_courses(Faculty::Engineering, Semester::First).is_empty());
        assert!(r.student_grades(StudentId(1)).is_empty());
    }

    #[test]
    fn test_honors_scenario() {
        let mut r = Records::new();
        let ivan = r
            .enroll_student(student("Ivan Ivanov", Faculty::ComputerScience))
            .id;
        let lazy = r
            .enroll_student(student("Petr Petrov", Faculty::ComputerScience))
            .id;
        let good = r
            .enroll_student(student("Anna Smirnova", Faculty::ComputerScience))
            .id;
        let c = r
            .add_course(course("Introduction to Programming", Faculty::ComputerScience, 30))
            .id;
        r.register_for_course(ivan, c).unwrap();
        r.set_grade(ivan, c, Grade::Excellent).unwrap();
        r.register_for_course(good, c).unwrap();
        r.set_grade(good, c, Grade::Good).unwrap();
        assert_eq!(r.calculate_average_grade(ivan).unwrap(), 5.0);
        let honors = r.honors_by_faculty(Faculty::ComputerScience);
        assert_eq!(honors.len(), 1);
        assert_eq!(honors[0].full_name, "Ivan Ivanov");
        assert!(r.student_grades(lazy).is_empty());
        assert!(r.honors_by_faculty(Faculty::Law).is_empty());
    }
}
