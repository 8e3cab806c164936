use std::path::PathBuf;
use chrono::{Datelike, Local, NaiveDate};
use iced::Theme;
use iced::widget::text_editor;
use iced_aw::date_picker::Date;
use classroom::config::Config;
use classroom::models::{self, Announcement, Course, Grade, ScheduleEntry, User, UserType, DATE_FORMAT};
use classroom::search::CourseFilter;
use classroom::{Database, Result, Session};
use crate::screens::settings::theme_from_str;

pub struct App {
    pub db: Database,
    pub session: Session,
    pub config: Config,
    pub config_path: PathBuf,
    pub theme: Theme,
    //
    pub current_screen: Screen,
    pub login_username: String,
    pub login_password: String,
    pub login_error: Option<String>,
    //
    pub notice: Option<Notice>,
    pub confirm: Option<Confirm>,
    //
    pub users: Vec<User>,
    pub courses: Vec<Course>,
    pub schedules: Vec<ScheduleEntry>,
    pub grades: Vec<Grade>,
    pub announcements: Vec<Announcement>,
    pub my_grades: Vec<Grade>,
    pub my_grades_error: Option<String>,
    //
    pub course_form: CourseForm,
    pub schedule_form: ScheduleForm,
    pub grade_form: GradeForm,
    pub announcement_form: AnnouncementForm,
    pub user_form: UserForm,
    pub search: SearchTerms,
    // Student course browser
    pub course_filter: CourseFilter,
    pub selected_resource: Option<i64>,
}

impl App {
    pub fn new(db: Database, config: Config, config_path: PathBuf) -> Self {
        let theme = theme_from_str(&config.theme_name).unwrap_or(Theme::Light);
        Self {
            db,
            session: Session::new(),
            config,
            config_path,
            theme,
            current_screen: Screen::Login,
            login_username: "".to_string(),
            login_password: "".to_string(),
            login_error: None,
            notice: None,
            confirm: None,
            users: vec![],
            courses: vec![],
            schedules: vec![],
            grades: vec![],
            announcements: vec![],
            my_grades: vec![],
            my_grades_error: None,
            course_form: CourseForm::default(),
            schedule_form: ScheduleForm::default(),
            grade_form: GradeForm::default(),
            announcement_form: AnnouncementForm::default(),
            user_form: UserForm::default(),
            search: SearchTerms::default(),
            course_filter: CourseFilter::default(),
            selected_resource: None,
        }
    }

    /// Course label for a grade row: the course name when the id still exists.
    pub fn course_label(&self, course_id: i64) -> String {
        match self.courses.iter().find(|c| c.id == course_id) {
            Some(course) => format!("{} (#{})", course.name, course_id),
            None => format!("#{}", course_id),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Admin(AdminPanel),
    User(UserPanel),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminPanel {
    Dashboard,
    Courses,
    Schedule,
    Gradebook,
    Announcements,
    Users,
    Settings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserPanel {
    Dashboard,
    Courses,
    Schedule,
    Grades,
    Notifications,
    Settings,
}

/// The editable tables in the admin window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Course,
    Schedule,
    Grade,
    Announcement,
    User,
}

impl Entity {
    pub fn label(&self) -> &'static str {
        match self {
            Entity::Course => "course",
            Entity::Schedule => "schedule",
            Entity::Grade => "grade",
            Entity::Announcement => "announcement",
            Entity::User => "user",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Entity::Course => "Course",
            Entity::Schedule => "Schedule",
            Entity::Grade => "Grade",
            Entity::Announcement => "Announcement",
            Entity::User => "User",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub body: String,
}

impl Notice {
    pub fn info(title: &str, body: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Info, title: title.to_string(), body: body.into() }
    }

    pub fn warning(title: &str, body: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Warning, title: title.to_string(), body: body.into() }
    }

    pub fn error(title: &str, body: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, title: title.to_string(), body: body.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirm {
    Delete(Entity, i64),
    Logout,
}

#[derive(Debug, Clone, Default)]
pub struct SearchTerms {
    pub courses: String,
    pub schedules: String,
    pub grades: String,
    pub announcements: String,
    pub users: String,
}

impl SearchTerms {
    pub fn get(&self, entity: Entity) -> &str {
        match entity {
            Entity::Course => &self.courses,
            Entity::Schedule => &self.schedules,
            Entity::Grade => &self.grades,
            Entity::Announcement => &self.announcements,
            Entity::User => &self.users,
        }
    }

    pub fn set(&mut self, entity: Entity, term: String) {
        match entity {
            Entity::Course => self.courses = term,
            Entity::Schedule => self.schedules = term,
            Entity::Grade => self.grades = term,
            Entity::Announcement => self.announcements = term,
            Entity::User => self.users = term,
        }
    }
}

pub fn options(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn picked(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

#[derive(Debug, Clone, Default)]
pub struct CourseForm {
    pub selected: Option<i64>,
    pub name: Option<String>,
    pub chapter: Option<String>,
    pub lesson: Option<String>,
    pub resource_type: Option<String>,
    pub file_path: String,
}

impl CourseForm {
    pub fn load(&mut self, course: &Course) {
        self.selected = Some(course.id);
        self.name = Some(course.name.clone());
        self.chapter = Some(course.chapter.clone());
        self.lesson = Some(course.lesson.clone());
        self.resource_type = Some(course.resource_type.clone());
        self.file_path = course.file_path.clone();
    }

    pub fn to_course(&self, id: i64) -> Result<Course> {
        models::require_filled(&[
            picked(&self.name),
            picked(&self.chapter),
            picked(&self.lesson),
            picked(&self.resource_type),
            &self.file_path,
        ])?;
        Ok(Course {
            id,
            name: picked(&self.name).to_string(),
            chapter: picked(&self.chapter).to_string(),
            lesson: picked(&self.lesson).to_string(),
            resource_type: picked(&self.resource_type).to_string(),
            file_path: self.file_path.trim().to_string(),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScheduleForm {
    pub selected: Option<i64>,
    pub course: Option<String>,
    pub day: Option<String>,
    pub start_time: String,
    pub end_time: String,
    pub room: Option<String>,
}

impl ScheduleForm {
    pub fn load(&mut self, entry: &ScheduleEntry) {
        self.selected = Some(entry.id);
        self.course = Some(entry.course.clone());
        self.day = Some(entry.day.clone());
        self.start_time = entry.start_time.clone();
        self.end_time = entry.end_time.clone();
        self.room = Some(entry.room.clone());
    }

    pub fn to_entry(&self, id: i64) -> Result<ScheduleEntry> {
        models::require_filled(&[
            picked(&self.course),
            picked(&self.day),
            &self.start_time,
            &self.end_time,
            picked(&self.room),
        ])?;
        Ok(ScheduleEntry {
            id,
            course: picked(&self.course).to_string(),
            day: picked(&self.day).to_string(),
            start_time: models::parse_time(&self.start_time)?,
            end_time: models::parse_time(&self.end_time)?,
            room: picked(&self.room).to_string(),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct GradeForm {
    pub selected: Option<i64>,
    pub student_id: String,
    pub course_id: String,
    pub grade: String,
}

impl GradeForm {
    pub fn load(&mut self, grade: &Grade) {
        self.selected = Some(grade.id);
        self.student_id = grade.student_id.to_string();
        self.course_id = grade.course_id.to_string();
        self.grade = grade.grade.to_string();
    }

    pub fn to_grade(&self, id: i64) -> Result<Grade> {
        models::require_filled(&[&self.student_id, &self.course_id, &self.grade])?;
        Ok(Grade {
            id,
            student_id: models::parse_id("Student ID", &self.student_id)?,
            course_id: models::parse_id("Course ID", &self.course_id)?,
            grade: models::parse_grade(&self.grade)?,
        })
    }
}

pub struct AnnouncementForm {
    pub selected: Option<i64>,
    pub title: String,
    pub content: text_editor::Content,
    pub date: Date,
    pub show_date_picker: bool,
}

impl Default for AnnouncementForm {
    fn default() -> Self {
        Self {
            selected: None,
            title: "".to_string(),
            content: text_editor::Content::new(),
            date: Date::today(),
            show_date_picker: false,
        }
    }
}

impl AnnouncementForm {
    pub fn load(&mut self, announcement: &Announcement) {
        self.selected = Some(announcement.id);
        self.title = announcement.title.clone();
        self.content = text_editor::Content::with_text(&announcement.content);
        let date = NaiveDate::parse_from_str(&announcement.date, DATE_FORMAT)
            .unwrap_or_else(|_| Local::now().date_naive());
        self.date = Date::from_ymd(date.year(), date.month(), date.day());
        self.show_date_picker = false;
    }

    pub fn date_text(&self) -> String {
        format!("{:04}-{:02}-{:02}", self.date.year, self.date.month, self.date.day)
    }

    pub fn to_announcement(&self, id: i64) -> Result<Announcement> {
        let content = self.content.text();
        let content = content.trim_end();
        models::require_filled(&[&self.title, content])?;
        Ok(Announcement {
            id,
            title: self.title.trim().to_string(),
            content: content.to_string(),
            date: models::parse_date(&self.date_text())?,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct UserForm {
    pub selected: Option<i64>,
    pub username: String,
    pub password: String,
    pub user_type: Option<UserType>,
}

impl UserForm {
    pub fn load(&mut self, user: &User) {
        self.selected = Some(user.id);
        self.username = user.username.clone();
        self.password = user.password.clone();
        self.user_type = Some(user.user_type);
    }

    pub fn to_user(&self, id: i64) -> Result<User> {
        let user_type = self.user_type.map(|t| t.as_str()).unwrap_or("");
        models::require_filled(&[&self.username, &self.password, user_type])?;
        Ok(User {
            id,
            username: self.username.trim().to_string(),
            password: self.password.clone(),
            user_type: user_type.parse()?,
        })
    }
}
