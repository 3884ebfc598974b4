use crate::model::{CourseId, Faculty, Grade, Records, Student};

/// Number of Excellent, Good, Satisfactory and Unsatisfactory grades
/// in a course, in this order.
pub fn grade_distribution(records: &Records, course: CourseId) -> [usize; 4] {
    let mut counts = [0; 4];
    for record in records
        .grade_records()
        .iter()
        .filter(|g| g.course_id == course)
    {
        if let Some(idx) = Grade::ALL.iter().position(|&g| g == record.grade) {
            counts[idx] += 1;
        }
    }
    counts
}

/// Average grade of every student of a faculty, `None` for those who
/// have not been graded yet.
pub fn faculty_averages(records: &Records, faculty: Faculty) -> Vec<(&Student, Option<f64>)> {
    records
        .students_by_faculty(faculty)
        .into_iter()
        .map(|s| (s, records.calculate_average_grade(s.id).ok()))
        .collect()
}
