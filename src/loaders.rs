use crate::error::RecordsError;
use crate::model::{
    CourseId, Grade, NewCourse, NewStudent, Records, Semester, StudentId, StudentStatus,
};
use chrono::{DateTime, Utc};
use eyre::{Error, WrapErr};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;
use tracing::{info, trace, warn};

/// Sequence of operations to replay against a fresh set of records.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub students: Vec<NewStudent>,
    pub courses: Vec<NewCourse>,
    pub registrations: Vec<Registration>,
    pub grades: Vec<Grading>,
    pub status_updates: Vec<StatusUpdate>,
}

#[derive(Debug, Deserialize)]
pub struct Registration {
    pub student: u32,
    pub course: u32,
}

#[derive(Debug, Deserialize)]
pub struct Grading {
    pub student: u32,
    pub course: u32,
    pub grade: Grade,
}

#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub student: u32,
    pub status: StudentStatus,
}

impl Scenario {
    pub fn load(file_name: &Path) -> Result<Scenario, Error> {
        let content = std::fs::read_to_string(file_name).wrap_err("cannot load scenario file")?;
        content
            .parse()
            .wrap_err_with(|| format!("in scenario file {}", file_name.display()))
    }

    /// Replay the scenario. Students and courses are created in file order,
    /// so they get ids 1..N. Returns the number of skipped steps, which is
    /// always 0 unless `keep_going` is set.
    pub fn apply(&self, records: &mut Records, keep_going: bool) -> Result<usize, Error> {
        for student in &self.students {
            records.enroll_student(student.clone());
        }
        for course in &self.courses {
            records.add_course(course.clone());
        }
        info!(
            students = self.students.len(),
            courses = self.courses.len(),
            "records populated"
        );
        let mut skipped = 0;
        for r in &self.registrations {
            let outcome = records.register_for_course(StudentId(r.student), CourseId(r.course));
            skipped += handle(outcome, keep_going, || {
                format!(
                    "cannot register student {} for course {}",
                    r.student, r.course
                )
            })?;
        }
        for g in &self.grades {
            let outcome = records.set_grade(StudentId(g.student), CourseId(g.course), g.grade);
            skipped += handle(outcome, keep_going, || {
                format!(
                    "cannot grade student {} in course {}",
                    g.student, g.course
                )
            })?;
        }
        for u in &self.status_updates {
            let outcome = records.update_student_status(StudentId(u.student), u.status);
            skipped += handle(outcome, keep_going, || {
                format!("cannot update status of student {}", u.student)
            })?;
        }
        Ok(skipped)
    }
}

impl std::str::FromStr for Scenario {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s).wrap_err("cannot parse scenario")
    }
}

fn handle(
    outcome: Result<(), RecordsError>,
    keep_going: bool,
    step: impl FnOnce() -> String,
) -> Result<usize, Error> {
    match outcome {
        Ok(()) => Ok(0),
        Err(e) if keep_going => {
            warn!(error = %e, "{}, skipping", step());
            Ok(1)
        }
        Err(e) => Err(Error::new(e).wrap_err(step())),
    }
}

#[derive(Serialize)]
struct ExportRow<'a> {
    student_id: u32,
    student: &'a str,
    course_id: u32,
    course: &'a str,
    grade: u8,
    semester: Semester,
    date: DateTime<Utc>,
}

/// Write all grade records as CSV, in registration order.
pub fn export_grades<W: Write>(records: &Records, writer: W) -> Result<(), Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    for g in records.grade_records() {
        let student = records.student(g.student_id)?;
        let course = records.course(g.course_id)?;
        trace!(student = %student, course = %course.name, "exporting grade record");
        wtr.serialize(ExportRow {
            student_id: g.student_id.0,
            student: &student.full_name,
            course_id: g.course_id.0,
            course: &course.name,
            grade: g.grade.value(),
            semester: g.semester,
            date: g.date,
        })
        .wrap_err("cannot write grade record")?;
    }
    wtr.flush().wrap_err("cannot flush grade records")?;
    Ok(())
}
