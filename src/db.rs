use std::path::{Path, PathBuf};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use rusqlite::{params, Connection, OptionalExtension};
use tracing::{error, info, warn};
use crate::error::{Error, Result};
use crate::models::{Announcement, Course, Grade, ScheduleEntry, User, UserType};
use crate::session::Session;

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        username TEXT NOT NULL UNIQUE,
        password TEXT NOT NULL,
        user_type TEXT NOT NULL
    );
    CREATE TABLE IF NOT EXISTS courses (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        chapter TEXT NOT NULL,
        lesson TEXT NOT NULL,
        resource_type TEXT NOT NULL,
        file_path TEXT NOT NULL
    );
    CREATE TABLE IF NOT EXISTS schedule (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        course TEXT NOT NULL,
        day TEXT NOT NULL,
        start_time TEXT NOT NULL,
        end_time TEXT NOT NULL,
        room TEXT NOT NULL
    );
    CREATE TABLE IF NOT EXISTS announcements (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        content TEXT NOT NULL,
        date TEXT NOT NULL
    );
    CREATE TABLE IF NOT EXISTS grades (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        student_id INTEGER,
        course_id INTEGER,
        grade REAL,
        FOREIGN KEY (student_id) REFERENCES users(id),
        FOREIGN KEY (course_id) REFERENCES courses(id)
    );
";

/// Accounts created on first start when they are missing.
pub const DEFAULT_USERS: &[(&str, &str, UserType)] = &[
    ("admin", "admin123", UserType::Admin),
    ("user", "user123", UserType::User),
    ("user2", "user321", UserType::User),
];

impl FromSql for UserType {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value.as_str()?.parse().map_err(|e: Error| FromSqlError::Other(Box::new(e)))
    }
}

impl ToSql for UserType {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

/// Handle to the classroom store.
///
/// Holds nothing but the file path: every call opens its own connection and
/// drops it before returning, so the handle is cheap to clone and can be used
/// from any thread.
#[derive(Debug, Clone)]
pub struct Database {
    path: PathBuf,
}

impl Database {
    /// Opens (creating if needed) the store at `path` and makes sure all five
    /// tables exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let db = Self { path: path.as_ref().to_path_buf() };
        let conn = db.connect()?;
        logged("initializing database", conn.execute_batch(SCHEMA))?;
        info!(path = %db.path.display(), "Database initialized");
        Ok(db)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> Result<Connection> {
        logged("opening database", Connection::open(&self.path))
    }

    pub fn seed_default_users(&self) -> Result<()> {
        for (username, password, user_type) in DEFAULT_USERS {
            if !self.user_exists(username)? {
                self.add_user(username, password, *user_type)?;
            }
        }
        Ok(())
    }

    // --- users and authentication ---

    /// Checks the pair against the store. On a match the session is pointed at
    /// that user; otherwise the session is left exactly as it was.
    pub fn authenticate(&self, session: &mut Session, username: &str, password: &str) -> Result<bool> {
        let conn = self.connect()?;
        let found = logged(
            "authenticating user",
            conn.query_row(
                "SELECT id, username, user_type FROM users WHERE username = ?1 AND password = ?2",
                params![username, password],
                |row| Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?, row.get::<_, UserType>(2)?)),
            )
            .optional(),
        )?;

        match found {
            Some((id, name, user_type)) => {
                session.sign_in(id, &name, user_type);
                info!(user_id = id, username = %name, "User authenticated");
                Ok(true)
            }
            None => {
                warn!(username = %username, "Authentication failed");
                Ok(false)
            }
        }
    }

    pub fn user_exists(&self, username: &str) -> Result<bool> {
        let conn = self.connect()?;
        let count: i64 = logged(
            "checking if user exists",
            conn.query_row("SELECT COUNT(*) FROM users WHERE username = ?1", [username], |row| row.get(0)),
        )?;
        Ok(count > 0)
    }

    /// Returns the new id, or `None` when the username is already taken.
    pub fn add_user(&self, username: &str, password: &str, user_type: UserType) -> Result<Option<i64>> {
        if self.user_exists(username)? {
            warn!(username = %username, "User already exists");
            return Ok(None);
        }
        let conn = self.connect()?;
        logged(
            "adding user",
            conn.execute(
                "INSERT INTO users (username, password, user_type) VALUES (?1, ?2, ?3)",
                params![username, password, user_type],
            ),
        )?;
        let id = conn.last_insert_rowid();
        info!(user_id = id, username = %username, "User added");
        Ok(Some(id))
    }

    pub fn list_users(&self) -> Result<Vec<User>> {
        let conn = self.connect()?;
        let mut stmt = logged("listing users", conn.prepare("SELECT id, username, password, user_type FROM users ORDER BY id"))?;
        let users = stmt.query_map([], |row| {
            Ok(User {
                id: row.get(0)?,
                username: row.get(1)?,
                password: row.get(2)?,
                user_type: row.get(3)?,
            })
        });
        logged("listing users", users.and_then(|rows| rows.collect()))
    }

    pub fn update_user(&self, user: &User) -> Result<bool> {
        let conn = self.connect()?;
        let changed = logged(
            "updating user",
            conn.execute(
                "UPDATE users SET username = ?1, password = ?2, user_type = ?3 WHERE id = ?4",
                params![user.username, user.password, user.user_type, user.id],
            ),
        )?;
        info!(user_id = user.id, changed, "User updated");
        Ok(changed > 0)
    }

    pub fn delete_user(&self, id: i64) -> Result<bool> {
        self.delete_by_id("users", id)
    }

    // --- courses ---

    pub fn add_course(&self, name: &str, chapter: &str, lesson: &str, resource_type: &str, file_path: &str) -> Result<i64> {
        let conn = self.connect()?;
        logged(
            "adding course",
            conn.execute(
                "INSERT INTO courses (name, chapter, lesson, resource_type, file_path) VALUES (?1, ?2, ?3, ?4, ?5)",
                params![name, chapter, lesson, resource_type, file_path],
            ),
        )?;
        let id = conn.last_insert_rowid();
        info!(course_id = id, "Course added");
        Ok(id)
    }

    pub fn list_courses(&self) -> Result<Vec<Course>> {
        let conn = self.connect()?;
        let mut stmt = logged(
            "listing courses",
            conn.prepare("SELECT id, name, chapter, lesson, resource_type, file_path FROM courses ORDER BY id"),
        )?;
        let courses = stmt.query_map([], |row| {
            Ok(Course {
                id: row.get(0)?,
                name: row.get(1)?,
                chapter: row.get(2)?,
                lesson: row.get(3)?,
                resource_type: row.get(4)?,
                file_path: row.get(5)?,
            })
        });
        logged("listing courses", courses.and_then(|rows| rows.collect()))
    }

    pub fn update_course(&self, course: &Course) -> Result<bool> {
        let conn = self.connect()?;
        let changed = logged(
            "updating course",
            conn.execute(
                "UPDATE courses SET name = ?1, chapter = ?2, lesson = ?3, resource_type = ?4, file_path = ?5 WHERE id = ?6",
                params![course.name, course.chapter, course.lesson, course.resource_type, course.file_path, course.id],
            ),
        )?;
        info!(course_id = course.id, changed, "Course updated");
        Ok(changed > 0)
    }

    pub fn delete_course(&self, id: i64) -> Result<bool> {
        self.delete_by_id("courses", id)
    }

    // --- schedule ---

    pub fn add_schedule(&self, course: &str, day: &str, start_time: &str, end_time: &str, room: &str) -> Result<i64> {
        let conn = self.connect()?;
        logged(
            "adding schedule",
            conn.execute(
                "INSERT INTO schedule (course, day, start_time, end_time, room) VALUES (?1, ?2, ?3, ?4, ?5)",
                params![course, day, start_time, end_time, room],
            ),
        )?;
        let id = conn.last_insert_rowid();
        info!(schedule_id = id, "Schedule added");
        Ok(id)
    }

    pub fn list_schedules(&self) -> Result<Vec<ScheduleEntry>> {
        let conn = self.connect()?;
        let mut stmt = logged(
            "listing schedules",
            conn.prepare("SELECT id, course, day, start_time, end_time, room FROM schedule ORDER BY id"),
        )?;
        let entries = stmt.query_map([], |row| {
            Ok(ScheduleEntry {
                id: row.get(0)?,
                course: row.get(1)?,
                day: row.get(2)?,
                start_time: row.get(3)?,
                end_time: row.get(4)?,
                room: row.get(5)?,
            })
        });
        logged("listing schedules", entries.and_then(|rows| rows.collect()))
    }

    pub fn update_schedule(&self, entry: &ScheduleEntry) -> Result<bool> {
        let conn = self.connect()?;
        let changed = logged(
            "updating schedule",
            conn.execute(
                "UPDATE schedule SET course = ?1, day = ?2, start_time = ?3, end_time = ?4, room = ?5 WHERE id = ?6",
                params![entry.course, entry.day, entry.start_time, entry.end_time, entry.room, entry.id],
            ),
        )?;
        info!(schedule_id = entry.id, changed, "Schedule updated");
        Ok(changed > 0)
    }

    pub fn delete_schedule(&self, id: i64) -> Result<bool> {
        self.delete_by_id("schedule", id)
    }

    // --- grades ---

    pub fn add_grade(&self, student_id: i64, course_id: i64, grade: f64) -> Result<i64> {
        let conn = self.connect()?;
        logged(
            "adding grade",
            conn.execute(
                "INSERT INTO grades (student_id, course_id, grade) VALUES (?1, ?2, ?3)",
                params![student_id, course_id, grade],
            ),
        )?;
        let id = conn.last_insert_rowid();
        info!(grade_id = id, student_id, course_id, "Grade added");
        Ok(id)
    }

    pub fn list_grades(&self) -> Result<Vec<Grade>> {
        self.query_grades("SELECT id, student_id, course_id, grade FROM grades ORDER BY id", None)
    }

    /// Grades belonging to whoever `session` says is signed in.
    pub fn grades_for_current_user(&self, session: &Session) -> Result<Vec<Grade>> {
        let Some(user_id) = session.user_id() else {
            error!("Grades requested without a signed-in user");
            return Err(Error::NotAuthenticated);
        };
        self.query_grades(
            "SELECT id, student_id, course_id, grade FROM grades WHERE student_id = ?1 ORDER BY id",
            Some(user_id),
        )
    }

    fn query_grades(&self, sql: &str, student_id: Option<i64>) -> Result<Vec<Grade>> {
        let conn = self.connect()?;
        let mut stmt = logged("listing grades", conn.prepare(sql))?;
        let map = |row: &rusqlite::Row<'_>| -> rusqlite::Result<Grade> {
            Ok(Grade {
                id: row.get(0)?,
                student_id: row.get(1)?,
                course_id: row.get(2)?,
                grade: row.get(3)?,
            })
        };
        let grades = match student_id {
            Some(id) => stmt.query_map([id], map).and_then(|rows| rows.collect()),
            None => stmt.query_map([], map).and_then(|rows| rows.collect()),
        };
        logged("listing grades", grades)
    }

    pub fn update_grade(&self, grade: &Grade) -> Result<bool> {
        let conn = self.connect()?;
        let changed = logged(
            "updating grade",
            conn.execute(
                "UPDATE grades SET student_id = ?1, course_id = ?2, grade = ?3 WHERE id = ?4",
                params![grade.student_id, grade.course_id, grade.grade, grade.id],
            ),
        )?;
        info!(grade_id = grade.id, changed, "Grade updated");
        Ok(changed > 0)
    }

    pub fn delete_grade(&self, id: i64) -> Result<bool> {
        self.delete_by_id("grades", id)
    }

    // --- announcements ---

    pub fn add_announcement(&self, title: &str, content: &str, date: &str) -> Result<i64> {
        let conn = self.connect()?;
        logged(
            "adding announcement",
            conn.execute(
                "INSERT INTO announcements (title, content, date) VALUES (?1, ?2, ?3)",
                params![title, content, date],
            ),
        )?;
        let id = conn.last_insert_rowid();
        info!(announcement_id = id, "Announcement added");
        Ok(id)
    }

    /// Newest first.
    pub fn list_announcements(&self) -> Result<Vec<Announcement>> {
        let conn = self.connect()?;
        let mut stmt = logged(
            "listing announcements",
            conn.prepare("SELECT id, title, content, date FROM announcements ORDER BY date DESC, id DESC"),
        )?;
        let announcements = stmt.query_map([], |row| {
            Ok(Announcement {
                id: row.get(0)?,
                title: row.get(1)?,
                content: row.get(2)?,
                date: row.get(3)?,
            })
        });
        logged("listing announcements", announcements.and_then(|rows| rows.collect()))
    }

    pub fn update_announcement(&self, announcement: &Announcement) -> Result<bool> {
        let conn = self.connect()?;
        let changed = logged(
            "updating announcement",
            conn.execute(
                "UPDATE announcements SET title = ?1, content = ?2, date = ?3 WHERE id = ?4",
                params![announcement.title, announcement.content, announcement.date, announcement.id],
            ),
        )?;
        info!(announcement_id = announcement.id, changed, "Announcement updated");
        Ok(changed > 0)
    }

    pub fn delete_announcement(&self, id: i64) -> Result<bool> {
        self.delete_by_id("announcements", id)
    }

    // `table` is always one of the literals above, never user input.
    fn delete_by_id(&self, table: &'static str, id: i64) -> Result<bool> {
        let conn = self.connect()?;
        let changed = logged(
            "deleting row",
            conn.execute(&format!("DELETE FROM {table} WHERE id = ?1"), [id]),
        )?;
        info!(table, id, changed, "Row deleted");
        Ok(changed > 0)
    }
}

fn logged<T>(action: &str, result: rusqlite::Result<T>) -> Result<T> {
    result.map_err(|e| {
        error!(error = %e, "Error {}", action);
        Error::from(e)
    })
}
