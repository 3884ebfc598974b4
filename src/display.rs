use crate::model::{Faculty, Grade, Records, Semester};
use crate::stats;

pub fn display_roster(r: &Records, faculties: &[Faculty]) {
    for &f in faculties {
        let mut students = r.students_by_faculty(f);
        if students.is_empty() {
            continue;
        }
        students.sort_by_key(|s| (s.group_number.clone(), s.full_name.clone()));
        println!("{f}:");
        for s in students {
            println!(
                "  - {} (year {}, group {}, {}, enrolled {})",
                s.full_name, s.year, s.group_number, s.status, s.enrollment_date
            );
        }
        println!();
    }
}

pub fn display_averages(r: &Records, faculties: &[Faculty]) {
    println!("Average grades:");
    for &f in faculties {
        for (s, avg) in stats::faculty_averages(r, f) {
            match avg {
                Some(avg) => println!("  - {}: {:.2}", s.full_name, avg),
                None => println!("  - {}: no grades", s.full_name),
            }
        }
    }
    println!();
}

pub fn display_honors(r: &Records, faculties: &[Faculty]) {
    for &f in faculties {
        let honors = r.honors_by_faculty(f);
        if !honors.is_empty() {
            println!("Honors students of {f}:");
            for s in honors {
                println!("  - {} ({})", s.full_name, s.group_number);
            }
            println!();
        }
    }
}

pub fn display_available_courses(r: &Records, faculties: &[Faculty], semesters: &[Semester]) {
    for &f in faculties {
        for &sem in semesters {
            let courses = r.available_courses(f, sem);
            if courses.is_empty() {
                continue;
            }
            println!("Courses of {f}, {sem} semester:");
            for c in courses {
                println!(
                    "  - {} ({:?}, {} credits, {}/{} students)",
                    c.name,
                    c.kind,
                    c.credits,
                    r.enrolled_count(c.id),
                    c.max_students
                );
            }
            println!();
        }
    }
}

pub fn display_distribution(r: &Records) {
    let mut courses = r
        .courses()
        .iter()
        .filter(|c| r.enrolled_count(c.id) > 0)
        .collect::<Vec<_>>();
    if courses.is_empty() {
        return;
    }
    courses.sort_by_key(|c| c.name.clone());
    println!("Grade distribution:");
    for c in courses {
        let counts = stats::grade_distribution(r, c.id);
        let total: usize = counts.iter().sum();
        println!("  - {}:", c.name);
        for (grade, n) in Grade::ALL.iter().zip(counts) {
            if n != 0 {
                println!(
                    "      {}: {} ({:.2}%)",
                    grade,
                    n,
                    100.0 * n as f32 / total as f32
                );
            }
        }
    }
}
