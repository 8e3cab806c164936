use std::fmt;
use std::str::FromStr;
use chrono::{NaiveDate, NaiveTime};
use crate::error::{Error, Result};

pub const COURSE_NAMES: &[&str] = &["Maths", "Physics", "Chemistry", "Biology"];
pub const CHAPTERS: &[&str] = &["Chapter 1", "Chapter 2", "Chapter 3", "Chapter 4"];
pub const LESSONS: &[&str] = &["Lesson 1", "Lesson 2", "Lesson 3", "Lesson 4"];
pub const RESOURCE_TYPES: &[&str] = &["Assignment", "Lecture Notes", "Syllabus", "Quiz", "Other"];
pub const DAYS: &[&str] = &["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"];
pub const ROOMS: &[&str] = &["201", "202", "203", "204", "205"];

pub const TIME_FORMAT: &str = "%H:%M";
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UserType {
    Admin,
    #[default]
    User,
}

impl UserType {
    pub const ALL: &'static [UserType] = &[UserType::Admin, UserType::User];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Admin => "admin",
            UserType::User => "user",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserType {
    type Err = Error;

    fn from_str(input: &str) -> Result<UserType> {
        match input {
            "admin" => Ok(UserType::Admin),
            "user" => Ok(UserType::User),
            other => Err(Error::UnknownUserType(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password: String,
    pub user_type: UserType,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub id: i64,
    pub name: String,
    pub chapter: String,
    pub lesson: String,
    pub resource_type: String,
    pub file_path: String,
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {} / {}", self.name, self.chapter, self.lesson)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleEntry {
    pub id: i64,
    pub course: String,
    pub day: String,
    pub start_time: String,
    pub end_time: String,
    pub room: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Announcement {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub date: String,
}

/// A grade row. `student_id` and `course_id` point at `users.id` and
/// `courses.id` but nothing enforces that the rows exist.
#[derive(Debug, Clone, PartialEq)]
pub struct Grade {
    pub id: i64,
    pub student_id: i64,
    pub course_id: i64,
    pub grade: f64,
}

/// Every form field the panels submit must be non-blank.
pub fn require_filled(fields: &[&str]) -> Result<()> {
    if fields.iter().any(|f| f.trim().is_empty()) {
        return Err(Error::Validation("Please fill in all fields.".to_string()));
    }
    Ok(())
}

/// Normalizes `H:MM` / `HH:MM` to `HH:MM`.
pub fn parse_time(input: &str) -> Result<String> {
    NaiveTime::parse_from_str(input.trim(), TIME_FORMAT)
        .map(|t| t.format(TIME_FORMAT).to_string())
        .map_err(|_| Error::Validation(format!("'{}' is not a valid HH:MM time.", input.trim())))
}

pub fn parse_date(input: &str) -> Result<String> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
        .map(|d| d.format(DATE_FORMAT).to_string())
        .map_err(|_| Error::Validation(format!("'{}' is not a valid YYYY-MM-DD date.", input.trim())))
}

pub fn parse_id(label: &str, input: &str) -> Result<i64> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| Error::Validation(format!("{} must be a whole number.", label)))
}

pub fn parse_grade(input: &str) -> Result<f64> {
    match input.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(Error::Validation("Grade must be a number.".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_type_round_trips_through_text() {
        for kind in UserType::ALL {
            assert_eq!(kind.as_str().parse::<UserType>().unwrap(), *kind);
        }
        assert!(matches!("guest".parse::<UserType>(), Err(Error::UnknownUserType(t)) if t == "guest"));
    }

    #[test]
    fn blank_fields_are_rejected() {
        assert!(require_filled(&["Maths", "Chapter 1"]).is_ok());
        assert!(matches!(require_filled(&["Maths", "  "]), Err(Error::Validation(_))));
    }

    #[test]
    fn times_are_normalized() {
        assert_eq!(parse_time("9:05").unwrap(), "09:05");
        assert_eq!(parse_time(" 14:30 ").unwrap(), "14:30");
        assert!(parse_time("25:00").is_err());
        assert!(parse_time("noon").is_err());
    }

    #[test]
    fn dates_and_numbers_are_checked() {
        assert_eq!(parse_date("2024-03-01").unwrap(), "2024-03-01");
        assert!(parse_date("01.03.2024").is_err());
        assert_eq!(parse_id("Student ID", " 42 ").unwrap(), 42);
        assert!(parse_id("Student ID", "abc").is_err());
        assert_eq!(parse_grade("87.5").unwrap(), 87.5);
        assert!(parse_grade("NaN").is_err());
        assert!(parse_grade("").is_err());
    }
}
