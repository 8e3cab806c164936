use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use classroom::Database;
use classroom::models::{Announcement, Course, Grade, ScheduleEntry, User, UserType};

fn temp_db(prefix: &str) -> (Database, PathBuf) {
    let dir = std::env::temp_dir().join(format!(
        "{}-{}",
        prefix,
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).expect("create temp dir");
    let db = Database::open(dir.join("classroom.db")).expect("open db");
    (db, dir)
}

#[test]
fn course_round_trip() {
    let (db, dir) = temp_db("crud-course");
    let id = db.add_course("Maths", "Chapter 1", "Lesson 1", "Quiz", "/tmp/q.pdf").unwrap();

    let courses = db.list_courses().unwrap();
    assert_eq!(
        courses,
        vec![Course {
            id,
            name: "Maths".into(),
            chapter: "Chapter 1".into(),
            lesson: "Lesson 1".into(),
            resource_type: "Quiz".into(),
            file_path: "/tmp/q.pdf".into(),
        }]
    );
    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn course_update_is_idempotent() {
    let (db, dir) = temp_db("crud-course-update");
    let id = db.add_course("Maths", "Chapter 1", "Lesson 1", "Quiz", "/tmp/q.pdf").unwrap();
    let original = db.list_courses().unwrap().remove(0);

    assert!(db.update_course(&original).unwrap());
    assert_eq!(db.list_courses().unwrap(), vec![original.clone()]);

    let changed = Course { chapter: "Chapter 3".into(), resource_type: "Syllabus".into(), ..original };
    assert!(db.update_course(&changed).unwrap());
    let once = db.list_courses().unwrap();
    assert!(db.update_course(&changed).unwrap());
    assert_eq!(db.list_courses().unwrap(), once);
    assert_eq!(once, vec![changed]);
    assert_eq!(once[0].id, id);
    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn delete_removes_only_the_target() {
    let (db, dir) = temp_db("crud-delete");
    let ids: Vec<i64> = ["Maths", "Physics", "Chemistry", "Biology"]
        .iter()
        .map(|name| db.add_course(name, "Chapter 1", "Lesson 1", "Other", "/tmp/x").unwrap())
        .collect();

    assert!(db.delete_course(ids[1]).unwrap());
    let left: Vec<i64> = db.list_courses().unwrap().iter().map(|c| c.id).collect();
    assert_eq!(left, vec![ids[0], ids[2], ids[3]]);

    assert!(!db.delete_course(ids[1]).unwrap());
    assert!(!db.delete_course(9_999).unwrap());
    assert_eq!(db.list_courses().unwrap().len(), 3);
    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn ids_keep_increasing_after_delete() {
    let (db, dir) = temp_db("crud-ids");
    let first = db.add_announcement("A", "a", "2024-01-01").unwrap();
    let second = db.add_announcement("B", "b", "2024-01-02").unwrap();
    db.delete_announcement(second).unwrap();
    let third = db.add_announcement("C", "c", "2024-01-03").unwrap();
    assert!(first < second && second < third);
    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn schedule_crud() {
    let (db, dir) = temp_db("crud-schedule");
    let a = db.add_schedule("Maths", "Monday", "09:00", "10:30", "201").unwrap();
    let b = db.add_schedule("Physics", "Friday", "13:00", "14:00", "205").unwrap();

    let listed = db.list_schedules().unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(
        listed[0],
        ScheduleEntry {
            id: a,
            course: "Maths".into(),
            day: "Monday".into(),
            start_time: "09:00".into(),
            end_time: "10:30".into(),
            room: "201".into(),
        }
    );

    let moved = ScheduleEntry { room: "203".into(), day: "Tuesday".into(), ..listed[1].clone() };
    assert!(db.update_schedule(&moved).unwrap());
    let listed = db.list_schedules().unwrap();
    assert_eq!(listed[1], moved);
    assert_eq!(listed[0].room, "201");

    assert!(db.delete_schedule(a).unwrap());
    let left: Vec<i64> = db.list_schedules().unwrap().iter().map(|s| s.id).collect();
    assert_eq!(left, vec![b]);
    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn grade_crud() {
    let (db, dir) = temp_db("crud-grade");
    let id = db.add_grade(2, 1, 88.5).unwrap();
    assert_eq!(db.list_grades().unwrap(), vec![Grade { id, student_id: 2, course_id: 1, grade: 88.5 }]);

    let regraded = Grade { id, student_id: 2, course_id: 1, grade: 92.0 };
    assert!(db.update_grade(&regraded).unwrap());
    assert_eq!(db.list_grades().unwrap(), vec![regraded]);

    assert!(!db.update_grade(&Grade { id: id + 100, student_id: 1, course_id: 1, grade: 1.0 }).unwrap());
    assert!(db.delete_grade(id).unwrap());
    assert!(db.list_grades().unwrap().is_empty());
    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn grades_survive_deleting_their_student_and_course() {
    let (db, dir) = temp_db("crud-no-cascade");
    let student = db.add_user("dave", "pw", UserType::User).unwrap().unwrap();
    let course = db.add_course("Biology", "Chapter 2", "Lesson 4", "Assignment", "/tmp/b").unwrap();
    let grade = db.add_grade(student, course, 70.0).unwrap();

    assert!(db.delete_user(student).unwrap());
    assert!(db.delete_course(course).unwrap());
    let grades = db.list_grades().unwrap();
    assert_eq!(grades.len(), 1);
    assert_eq!(grades[0].id, grade);
    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn announcements_newest_first() {
    let (db, dir) = temp_db("crud-announcement");
    let old = db.add_announcement("Welcome", "First week", "2024-01-10").unwrap();
    let new = db.add_announcement("Exam", "Room 201", "2024-03-05").unwrap();
    let mid = db.add_announcement("Trip", "Museum", "2024-02-01").unwrap();

    let order: Vec<i64> = db.list_announcements().unwrap().iter().map(|a| a.id).collect();
    assert_eq!(order, vec![new, mid, old]);

    let edited = Announcement { id: old, title: "Welcome back".into(), content: "Second term".into(), date: "2024-04-01".into() };
    assert!(db.update_announcement(&edited).unwrap());
    let listed = db.list_announcements().unwrap();
    assert_eq!(listed[0], edited);
    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn user_update_and_delete() {
    let (db, dir) = temp_db("crud-user");
    let id = db.add_user("erin", "pw", UserType::User).unwrap().unwrap();
    let keep = db.add_user("frank", "pw", UserType::User).unwrap().unwrap();

    let promoted = User { id, username: "erin".into(), password: "better".into(), user_type: UserType::Admin };
    assert!(db.update_user(&promoted).unwrap());
    assert_eq!(db.list_users().unwrap()[0], promoted);

    let clash = User { username: "frank".into(), ..promoted.clone() };
    assert!(db.update_user(&clash).is_err());
    assert_eq!(db.list_users().unwrap()[0], promoted);

    assert!(db.delete_user(id).unwrap());
    let left: Vec<i64> = db.list_users().unwrap().iter().map(|u| u.id).collect();
    assert_eq!(left, vec![keep]);
    let _ = std::fs::remove_dir_all(dir);
}
