use crate::model::{Grade, Records};
use eyre::{Error, ensure};
use tracing::warn;

pub fn check_full_courses(r: &Records) {
    for c in r.courses() {
        if r.enrolled_count(c.id) >= c.max_students {
            warn!(
                course = %c.name,
                max_students = c.max_students,
                "course is full"
            );
        }
    }
}

/// Warn about registrations whose grade was never changed.
pub fn check_ungraded(r: &Records) {
    for g in r
        .grade_records()
        .iter()
        .filter(|g| g.grade == Grade::Unsatisfactory)
    {
        if let (Ok(s), Ok(c)) = (r.student(g.student_id), r.course(g.course_id)) {
            warn!(student = %s, course = %c.name, "grade still at registration default");
        }
    }
}

pub fn ensure_no_skipped(skipped: usize) -> Result<(), Error> {
    ensure!(skipped == 0, "{} scenario steps have been skipped", skipped);
    Ok(())
}

#[test]
fn test_ensure_no_skipped() {
    assert!(ensure_no_skipped(0).is_ok());
    assert_eq!(
        ensure_no_skipped(2).unwrap_err().to_string(),
        "2 scenario steps have been skipped"
    );
}
