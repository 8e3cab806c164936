use std::path::PathBuf;
use iced::widget::text_editor;
use iced_aw::date_picker::Date;
use classroom::models::UserType;
use crate::app::state::{AdminPanel, Entity, UserPanel};

#[derive(Debug, Clone)]
pub enum Message {
    LoginUsernameChanged(String),
    LoginPasswordChanged(String),
    LoginPressed,
    //
    GoToAdminPanel(AdminPanel),
    GoToUserPanel(UserPanel),
    LogoutPressed,
    //
    DismissNotice,
    ConfirmAccepted,
    ConfirmCancelled,
    //
    ThemeSelected(&'static str),
    // Shared by every admin table
    SearchChanged(Entity, String),
    Select(Entity, i64),
    Submit(Entity),
    Update(Entity),
    Delete(Entity),
    ClearForm(Entity),
    // Course form
    CourseNameSelected(String),
    CourseChapterSelected(String),
    CourseLessonSelected(String),
    CourseResourceTypeSelected(String),
    CourseFilePathChanged(String),
    BrowseCourseFile,
    CourseFileChosen(Option<PathBuf>),
    // Schedule form
    ScheduleCourseSelected(String),
    ScheduleDaySelected(String),
    ScheduleStartChanged(String),
    ScheduleEndChanged(String),
    ScheduleRoomSelected(String),
    // Grade form
    GradeStudentChanged(String),
    GradeCourseChanged(String),
    GradeValueChanged(String),
    // Announcement form
    AnnouncementTitleChanged(String),
    AnnouncementContentEdited(text_editor::Action),
    ChooseAnnouncementDate,
    SubmitAnnouncementDate(Date),
    CancelAnnouncementDate,
    // User form
    UserNameChanged(String),
    UserPasswordChanged(String),
    UserTypeSelected(UserType),
    // Student window
    CourseFilterCourse(Option<String>),
    CourseFilterChapter(Option<String>),
    SelectResource(i64),
    DownloadResource,
    ResourceDownloaded(Result<Option<PathBuf>, String>),
}
