use iced::Task;
use tokio::task::spawn_blocking;
use tracing::{debug, info, warn};
use classroom::models::UserType;
use classroom::{resources, Error};
use crate::app::state::{AdminPanel, Confirm, Entity, Notice, Screen, UserPanel};
use crate::screens::settings::theme_from_str;
use super::{App, Message};

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::LoginUsernameChanged(v) => {
                self.login_username = v;
                Task::none()
            }
            Message::LoginPasswordChanged(v) => {
                self.login_password = v;
                Task::none()
            }
            Message::LoginPressed => {
                self.login();
                Task::none()
            }
            Message::GoToAdminPanel(panel) => {
                if self.session.is_admin() {
                    self.current_screen = Screen::Admin(panel);
                    for entity in admin_tables(panel) {
                        self.refresh(*entity);
                    }
                }
                Task::none()
            }
            Message::GoToUserPanel(panel) => {
                if self.session.is_authenticated() {
                    self.current_screen = Screen::User(panel);
                    for entity in user_tables(panel) {
                        self.refresh(*entity);
                    }
                    if panel == UserPanel::Grades {
                        self.refresh_my_grades();
                    }
                }
                Task::none()
            }
            Message::LogoutPressed => {
                self.confirm = Some(Confirm::Logout);
                Task::none()
            }
            Message::DismissNotice => {
                self.notice = None;
                Task::none()
            }
            Message::ConfirmCancelled => {
                self.confirm = None;
                Task::none()
            }
            Message::ConfirmAccepted => {
                match self.confirm.take() {
                    Some(Confirm::Delete(entity, id)) => self.delete_row(entity, id),
                    Some(Confirm::Logout) => self.logout(),
                    None => {}
                }
                Task::none()
            }
            Message::ThemeSelected(name) => {
                if let Some(theme) = theme_from_str(name) {
                    self.theme = theme;
                    self.config.theme_name = name.to_string();
                    if let Err(e) = self.config.save_to(&self.config_path) {
                        warn!(error = %e, "Could not save theme");
                    }
                }
                Task::none()
            }
            Message::SearchChanged(entity, term) => {
                self.search.set(entity, term);
                Task::none()
            }
            Message::Select(entity, id) => {
                self.select_row(entity, id);
                Task::none()
            }
            Message::Submit(entity) => {
                self.submit(entity);
                Task::none()
            }
            Message::Update(entity) => {
                self.update_selected(entity);
                Task::none()
            }
            Message::Delete(entity) => {
                match self.selected_id(entity) {
                    Some(id) => self.confirm = Some(Confirm::Delete(entity, id)),
                    None => {
                        self.notice = Some(Notice::warning(
                            "No Selection",
                            format!("Please select a {} to delete.", entity.label()),
                        ))
                    }
                }
                Task::none()
            }
            Message::ClearForm(entity) => {
                self.clear_form(entity);
                Task::none()
            }
            Message::CourseNameSelected(v) => {
                self.course_form.name = Some(v);
                Task::none()
            }
            Message::CourseChapterSelected(v) => {
                self.course_form.chapter = Some(v);
                Task::none()
            }
            Message::CourseLessonSelected(v) => {
                self.course_form.lesson = Some(v);
                Task::none()
            }
            Message::CourseResourceTypeSelected(v) => {
                self.course_form.resource_type = Some(v);
                Task::none()
            }
            Message::CourseFilePathChanged(v) => {
                self.course_form.file_path = v;
                Task::none()
            }
            Message::BrowseCourseFile => Task::perform(
                async move {
                    spawn_blocking(|| rfd::FileDialog::new().set_title("Choose resource").pick_file())
                        .await
                        .unwrap_or_else(|join_err| {
                            warn!(error = %join_err, "File dialog task failed");
                            None
                        })
                },
                Message::CourseFileChosen,
            ),
            Message::CourseFileChosen(path) => {
                if let Some(path) = path {
                    self.course_form.file_path = path.to_string_lossy().into_owned();
                }
                Task::none()
            }
            Message::ScheduleCourseSelected(v) => {
                self.schedule_form.course = Some(v);
                Task::none()
            }
            Message::ScheduleDaySelected(v) => {
                self.schedule_form.day = Some(v);
                Task::none()
            }
            Message::ScheduleStartChanged(v) => {
                self.schedule_form.start_time = v;
                Task::none()
            }
            Message::ScheduleEndChanged(v) => {
                self.schedule_form.end_time = v;
                Task::none()
            }
            Message::ScheduleRoomSelected(v) => {
                self.schedule_form.room = Some(v);
                Task::none()
            }
            Message::GradeStudentChanged(v) => {
                self.grade_form.student_id = v;
                Task::none()
            }
            Message::GradeCourseChanged(v) => {
                self.grade_form.course_id = v;
                Task::none()
            }
            Message::GradeValueChanged(v) => {
                self.grade_form.grade = v;
                Task::none()
            }
            Message::AnnouncementTitleChanged(v) => {
                self.announcement_form.title = v;
                Task::none()
            }
            Message::AnnouncementContentEdited(action) => {
                self.announcement_form.content.perform(action);
                Task::none()
            }
            Message::ChooseAnnouncementDate => {
                self.announcement_form.show_date_picker = true;
                Task::none()
            }
            Message::SubmitAnnouncementDate(date) => {
                self.announcement_form.date = date;
                self.announcement_form.show_date_picker = false;
                Task::none()
            }
            Message::CancelAnnouncementDate => {
                self.announcement_form.show_date_picker = false;
                Task::none()
            }
            Message::UserNameChanged(v) => {
                self.user_form.username = v;
                Task::none()
            }
            Message::UserPasswordChanged(v) => {
                self.user_form.password = v;
                Task::none()
            }
            Message::UserTypeSelected(t) => {
                self.user_form.user_type = Some(t);
                Task::none()
            }
            Message::CourseFilterCourse(v) => {
                self.course_filter.course = v;
                self.selected_resource = None;
                Task::none()
            }
            Message::CourseFilterChapter(v) => {
                self.course_filter.chapter = v;
                self.selected_resource = None;
                Task::none()
            }
            Message::SelectResource(id) => {
                self.selected_resource = Some(id);
                Task::none()
            }
            Message::DownloadResource => {
                let Some(course) = self
                    .selected_resource
                    .and_then(|id| self.courses.iter().find(|c| c.id == id))
                else {
                    self.notice = Some(Notice::warning("No Selection", "Please select a resource to download."));
                    return Task::none();
                };
                let source = course.file_path.clone();
                let suggested = resources::file_name(&source);
                Task::perform(
                    async move {
                        spawn_blocking(move || {
                            let Some(destination) = rfd::FileDialog::new()
                                .set_title("Save resource")
                                .set_file_name(&suggested)
                                .save_file()
                            else {
                                return Ok(None);
                            };
                            resources::download(&source, &destination)
                                .map(|_| Some(destination))
                                .map_err(|e| e.to_string())
                        })
                        .await
                        .unwrap_or_else(|join_err| Err(format!("Download task failed: {}", join_err)))
                    },
                    Message::ResourceDownloaded,
                )
            }
            Message::ResourceDownloaded(result) => {
                match result {
                    Ok(Some(path)) => {
                        self.notice = Some(Notice::info(
                            "Download Complete",
                            format!("File downloaded successfully to {}", path.display()),
                        ));
                    }
                    Ok(None) => debug!("Download cancelled"),
                    Err(e) => {
                        self.notice = Some(Notice::error("Download Error", format!("Error downloading file: {}", e)));
                    }
                }
                Task::none()
            }
        }
    }

    fn login(&mut self) {
        if self.login_username.trim().is_empty() || self.login_password.is_empty() {
            self.login_error = Some("Please enter a username and password.".to_string());
            return;
        }
        match self.db.authenticate(&mut self.session, &self.login_username, &self.login_password) {
            Ok(true) => {
                self.login_error = None;
                self.login_password.clear();
                if self.session.is_admin() {
                    self.current_screen = Screen::Admin(AdminPanel::Dashboard);
                    for entity in [Entity::Course, Entity::Schedule, Entity::Grade, Entity::Announcement, Entity::User] {
                        self.refresh(entity);
                    }
                } else {
                    self.current_screen = Screen::User(UserPanel::Dashboard);
                    for entity in [Entity::Course, Entity::Schedule, Entity::Announcement] {
                        self.refresh(entity);
                    }
                    self.refresh_my_grades();
                }
                info!(username = self.session.username().unwrap_or_default(), "Opened window");
            }
            Ok(false) => self.login_error = Some("Invalid username or password".to_string()),
            Err(_) => self.login_error = Some("Could not reach the database.".to_string()),
        }
    }

    fn logout(&mut self) {
        info!(username = self.session.username().unwrap_or_default(), "Logged out");
        self.session.clear();
        for entity in [Entity::Course, Entity::Schedule, Entity::Grade, Entity::Announcement, Entity::User] {
            self.clear_form(entity);
            self.search.set(entity, String::new());
        }
        self.users.clear();
        self.courses.clear();
        self.schedules.clear();
        self.grades.clear();
        self.announcements.clear();
        self.my_grades.clear();
        self.my_grades_error = None;
        self.course_filter = Default::default();
        self.selected_resource = None;
        self.login_username.clear();
        self.login_password.clear();
        self.current_screen = Screen::Login;
    }

    fn refresh(&mut self, entity: Entity) {
        debug!(table = entity.label(), "Refreshing");
        let result = match entity {
            Entity::Course => self.db.list_courses().map(|rows| self.courses = rows),
            Entity::Schedule => self.db.list_schedules().map(|rows| self.schedules = rows),
            Entity::Grade => self.db.list_grades().map(|rows| self.grades = rows),
            Entity::Announcement => self.db.list_announcements().map(|rows| self.announcements = rows),
            Entity::User => self.db.list_users().map(|rows| self.users = rows),
        };
        if result.is_err() {
            self.notice = Some(Notice::error("Error", format!("Error loading {} data.", entity.label())));
        }
    }

    fn refresh_my_grades(&mut self) {
        match self.db.grades_for_current_user(&self.session) {
            Ok(rows) => {
                self.my_grades = rows;
                self.my_grades_error = None;
            }
            Err(Error::NotAuthenticated) => {
                self.my_grades.clear();
                self.my_grades_error = Some("Please log in to view your grades.".to_string());
            }
            Err(_) => {
                self.my_grades.clear();
                self.my_grades_error = Some("Error reading grades data.".to_string());
            }
        }
    }

    fn selected_id(&self, entity: Entity) -> Option<i64> {
        match entity {
            Entity::Course => self.course_form.selected,
            Entity::Schedule => self.schedule_form.selected,
            Entity::Grade => self.grade_form.selected,
            Entity::Announcement => self.announcement_form.selected,
            Entity::User => self.user_form.selected,
        }
    }

    fn select_row(&mut self, entity: Entity, id: i64) {
        match entity {
            Entity::Course => {
                if let Some(row) = self.courses.iter().find(|r| r.id == id) {
                    self.course_form.load(row);
                }
            }
            Entity::Schedule => {
                if let Some(row) = self.schedules.iter().find(|r| r.id == id) {
                    self.schedule_form.load(row);
                }
            }
            Entity::Grade => {
                if let Some(row) = self.grades.iter().find(|r| r.id == id) {
                    self.grade_form.load(row);
                }
            }
            Entity::Announcement => {
                if let Some(row) = self.announcements.iter().find(|r| r.id == id) {
                    self.announcement_form.load(row);
                }
            }
            Entity::User => {
                if let Some(row) = self.users.iter().find(|r| r.id == id) {
                    self.user_form.load(row);
                }
            }
        }
    }

    fn clear_form(&mut self, entity: Entity) {
        match entity {
            Entity::Course => self.course_form = Default::default(),
            Entity::Schedule => self.schedule_form = Default::default(),
            Entity::Grade => self.grade_form = Default::default(),
            Entity::Announcement => self.announcement_form = Default::default(),
            Entity::User => self.user_form = Default::default(),
        }
    }

    fn submit(&mut self, entity: Entity) {
        let outcome = match entity {
            Entity::Course => self.course_form.to_course(0).and_then(|c| {
                self.db
                    .add_course(&c.name, &c.chapter, &c.lesson, &c.resource_type, &c.file_path)
                    .map(|_| true)
            }),
            Entity::Schedule => self.schedule_form.to_entry(0).and_then(|s| {
                self.db
                    .add_schedule(&s.course, &s.day, &s.start_time, &s.end_time, &s.room)
                    .map(|_| true)
            }),
            Entity::Grade => self
                .grade_form
                .to_grade(0)
                .and_then(|g| self.db.add_grade(g.student_id, g.course_id, g.grade).map(|_| true)),
            Entity::Announcement => self
                .announcement_form
                .to_announcement(0)
                .and_then(|a| self.db.add_announcement(&a.title, &a.content, &a.date).map(|_| true)),
            Entity::User => self
                .user_form
                .to_user(0)
                .and_then(|u| self.db.add_user(&u.username, &u.password, u.user_type).map(|id| id.is_some())),
        };
        match outcome {
            Ok(true) => {
                self.notice = Some(Notice::info("Success", format!("{} added successfully!", entity.title())));
                self.after_write(entity);
            }
            Ok(false) => {
                self.notice = Some(Notice::warning("Duplicate", "A user with that username already exists."));
            }
            Err(e) => self.report_failure(entity, "adding", e),
        }
    }

    fn update_selected(&mut self, entity: Entity) {
        let Some(id) = self.selected_id(entity) else {
            self.notice = Some(Notice::warning(
                "No Selection",
                format!("Please select a {} to update.", entity.label()),
            ));
            return;
        };
        let outcome = match entity {
            Entity::Course => self.course_form.to_course(id).and_then(|c| self.db.update_course(&c)).map(Some),
            Entity::Schedule => self.schedule_form.to_entry(id).and_then(|s| self.db.update_schedule(&s)).map(Some),
            Entity::Grade => self.grade_form.to_grade(id).and_then(|g| self.db.update_grade(&g)).map(Some),
            Entity::Announcement => self
                .announcement_form
                .to_announcement(id)
                .and_then(|a| self.db.update_announcement(&a))
                .map(Some),
            Entity::User => self.user_form.to_user(id).and_then(|u| {
                if self.session.user_id() == Some(id) && u.user_type != UserType::Admin {
                    return Err(Error::Validation("You cannot remove your own admin rights.".to_string()));
                }
                if self.username_taken(id, &u.username)? {
                    return Ok(None);
                }
                self.db.update_user(&u).map(Some)
            }),
        };
        match outcome {
            Ok(None) => {
                self.notice = Some(Notice::warning("Duplicate", "A user with that username already exists."));
            }
            Ok(Some(true)) => {
                self.notice = Some(Notice::info("Success", format!("{} updated successfully!", entity.title())));
                self.after_write(entity);
            }
            Ok(Some(false)) => {
                self.notice = Some(Notice::warning("Not Found", format!("That {} no longer exists.", entity.label())));
                self.after_write(entity);
            }
            Err(e) => self.report_failure(entity, "updating", e),
        }
    }

    fn delete_row(&mut self, entity: Entity, id: i64) {
        if entity == Entity::User && self.session.user_id() == Some(id) {
            self.notice = Some(Notice::warning("Not Allowed", "You cannot delete the account you are signed in with."));
            return;
        }
        let outcome = match entity {
            Entity::Course => self.db.delete_course(id),
            Entity::Schedule => self.db.delete_schedule(id),
            Entity::Grade => self.db.delete_grade(id),
            Entity::Announcement => self.db.delete_announcement(id),
            Entity::User => self.db.delete_user(id),
        };
        match outcome {
            Ok(true) => {
                self.notice = Some(Notice::info("Success", format!("{} deleted successfully!", entity.title())));
                self.after_write(entity);
            }
            Ok(false) => {
                self.notice = Some(Notice::warning("Not Found", format!("That {} no longer exists.", entity.label())));
                self.after_write(entity);
            }
            Err(e) => self.report_failure(entity, "deleting", e),
        }
    }

    /// Another account already uses `username`. Keeping your own name is fine.
    fn username_taken(&self, id: i64, username: &str) -> classroom::Result<bool> {
        let current = self.users.iter().find(|u| u.id == id).map(|u| u.username.as_str());
        if current == Some(username) {
            return Ok(false);
        }
        self.db.user_exists(username)
    }

    fn after_write(&mut self, entity: Entity) {
        self.clear_form(entity);
        self.refresh(entity);
    }

    fn report_failure(&mut self, entity: Entity, action: &str, e: Error) {
        self.notice = Some(match e {
            Error::Validation(msg) => Notice::warning("Incomplete Form", msg),
            other => {
                warn!(error = %other, "Error {} {}", action, entity.label());
                Notice::error("Error", format!("Error {} {}.", action, entity.label()))
            }
        });
    }
}

/// Tables a panel shows, reloaded from the store whenever it is opened.
fn admin_tables(panel: AdminPanel) -> &'static [Entity] {
    match panel {
        AdminPanel::Dashboard => &[Entity::Course, Entity::Schedule, Entity::Grade, Entity::Announcement, Entity::User],
        AdminPanel::Courses => &[Entity::Course],
        AdminPanel::Schedule => &[Entity::Schedule],
        AdminPanel::Gradebook => &[Entity::Grade, Entity::Course],
        AdminPanel::Announcements => &[Entity::Announcement],
        AdminPanel::Users => &[Entity::User],
        AdminPanel::Settings => &[],
    }
}

fn user_tables(panel: UserPanel) -> &'static [Entity] {
    match panel {
        UserPanel::Dashboard | UserPanel::Notifications => &[Entity::Announcement],
        UserPanel::Courses | UserPanel::Grades => &[Entity::Course],
        UserPanel::Schedule => &[Entity::Schedule],
        UserPanel::Settings => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::NoticeKind;
    use crate::app::testing::scratch_app;
    use classroom::Database;

    fn sign_in(app: &mut App, username: &str, password: &str) {
        let _ = app.update(Message::LoginUsernameChanged(username.to_string()));
        let _ = app.update(Message::LoginPasswordChanged(password.to_string()));
        let _ = app.update(Message::LoginPressed);
    }

    #[test]
    fn opening_a_panel_reloads_its_rows() {
        let mut app = scratch_app("nav-reload");
        sign_in(&mut app, "user", "user123");
        assert_eq!(app.current_screen, Screen::User(UserPanel::Dashboard));
        assert!(app.courses.is_empty());

        // A second window writing to the same file.
        let other = Database::open(app.db.path()).unwrap();
        other.add_course("Maths", "Chapter 1", "Lesson 1", "Quiz", "/tmp/q.pdf").unwrap();
        other.add_announcement("Exam", "Room 201", "2024-05-01").unwrap();

        let _ = app.update(Message::GoToUserPanel(UserPanel::Courses));
        assert_eq!(app.courses.len(), 1);
        let _ = app.update(Message::GoToUserPanel(UserPanel::Notifications));
        assert_eq!(app.announcements.len(), 1);
        assert_eq!(app.announcements[0].title, "Exam");
    }

    #[test]
    fn admin_panels_reload_too() {
        let mut app = scratch_app("nav-admin");
        sign_in(&mut app, "admin", "admin123");
        assert_eq!(app.current_screen, Screen::Admin(AdminPanel::Dashboard));

        let other = Database::open(app.db.path()).unwrap();
        other.add_schedule("Physics", "Monday", "09:00", "10:00", "202").unwrap();
        let _ = app.update(Message::GoToAdminPanel(AdminPanel::Schedule));
        assert_eq!(app.schedules.len(), 1);
    }

    #[test]
    fn username_must_match_exactly() {
        let mut app = scratch_app("login-exact");
        sign_in(&mut app, " admin", "admin123");
        assert_eq!(app.current_screen, Screen::Login);
        assert!(!app.session.is_authenticated());
        assert_eq!(app.login_error.as_deref(), Some("Invalid username or password"));
    }

    #[test]
    fn deleting_a_vanished_row_is_reported() {
        let mut app = scratch_app("delete-gone");
        sign_in(&mut app, "admin", "admin123");
        let id = app.db.add_course("Maths", "Chapter 1", "Lesson 1", "Quiz", "/tmp/q.pdf").unwrap();
        let _ = app.update(Message::GoToAdminPanel(AdminPanel::Courses));
        let _ = app.update(Message::Select(Entity::Course, id));
        app.db.delete_course(id).unwrap();

        let _ = app.update(Message::Delete(Entity::Course));
        let _ = app.update(Message::ConfirmAccepted);
        let notice = app.notice.clone().unwrap();
        assert_eq!(notice.kind, NoticeKind::Warning);
        assert_eq!(notice.title, "Not Found");
    }

    #[test]
    fn renaming_onto_a_taken_username_is_a_duplicate() {
        let mut app = scratch_app("rename-dup");
        sign_in(&mut app, "admin", "admin123");
        let _ = app.update(Message::GoToAdminPanel(AdminPanel::Users));
        let user2 = app.users.iter().find(|u| u.username == "user2").unwrap().id;

        let _ = app.update(Message::Select(Entity::User, user2));
        let _ = app.update(Message::UserNameChanged("user".to_string()));
        let _ = app.update(Message::Update(Entity::User));
        assert_eq!(app.notice.as_ref().map(|n| n.title.as_str()), Some("Duplicate"));
        assert!(app.db.list_users().unwrap().iter().any(|u| u.id == user2 && u.username == "user2"));

        // Keeping the same name is still a normal update.
        let _ = app.update(Message::DismissNotice);
        let _ = app.update(Message::UserNameChanged("user2".to_string()));
        let _ = app.update(Message::UserPasswordChanged("fresh".to_string()));
        let _ = app.update(Message::Update(Entity::User));
        assert_eq!(app.notice.as_ref().map(|n| n.title.as_str()), Some("Success"));
    }
}
