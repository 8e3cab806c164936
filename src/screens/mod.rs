pub mod widgets;
pub mod dialogs;
pub mod login;
pub mod nav_menu;
pub mod dashboard;
pub mod courses;
pub mod schedule;
pub mod gradebook;
pub mod announcements;
pub mod user_list;
pub mod student;
pub mod settings;

pub use login::login_screen;
pub use settings::settings_screen;
pub use nav_menu::{admin_menu, user_menu};
pub use dashboard::{admin_dashboard, user_dashboard};
pub use courses::courses_screen;
pub use schedule::schedule_screen;
pub use gradebook::gradebook_screen;
pub use announcements::announcements_screen;
pub use user_list::user_list_screen;
pub use student::{notifications_screen, student_courses_screen, student_grades_screen, student_schedule_screen};
