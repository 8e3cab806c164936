use iced::{Element, Length};
use iced::widget::{Container, Row, Stack};
use crate::app::state::{AdminPanel, Screen, UserPanel};
use crate::screens::dialogs::{confirm_dialog, notice_dialog};
use crate::screens::{
    admin_dashboard, admin_menu, announcements_screen, courses_screen, gradebook_screen, login_screen,
    notifications_screen, schedule_screen, settings_screen, student_courses_screen, student_grades_screen,
    student_schedule_screen, user_dashboard, user_list_screen, user_menu,
};
use super::{App, Message};

impl App {
    pub fn view(&self) -> Element<Message> {
        let (sidebar, content) = match self.current_screen {
            Screen::Login => (None, login_screen(self)),
            Screen::Admin(panel) => (
                Some(admin_menu(self, panel)),
                match panel {
                    AdminPanel::Dashboard => admin_dashboard(self),
                    AdminPanel::Courses => courses_screen(self),
                    AdminPanel::Schedule => schedule_screen(self),
                    AdminPanel::Gradebook => gradebook_screen(self),
                    AdminPanel::Announcements => announcements_screen(self),
                    AdminPanel::Users => user_list_screen(self),
                    AdminPanel::Settings => settings_screen(self),
                },
            ),
            Screen::User(panel) => (
                Some(user_menu(self, panel)),
                match panel {
                    UserPanel::Dashboard => user_dashboard(self),
                    UserPanel::Courses => student_courses_screen(self),
                    UserPanel::Schedule => student_schedule_screen(self),
                    UserPanel::Grades => student_grades_screen(self),
                    UserPanel::Notifications => notifications_screen(self),
                    UserPanel::Settings => settings_screen(self),
                },
            ),
        };

        let mut base = Row::new().spacing(20);
        if let Some(menu) = sidebar {
            // Sidebar
            base = base.push(
                menu.width(Length::Fixed(200.0))
                    .height(Length::Fill)
                    .padding(10),
            );
        }
        base = base.push(content.width(Length::Fill));

        let mut ui_stack = Stack::new().push(base);
        if let Some(confirm) = self.confirm {
            ui_stack = ui_stack.push(confirm_dialog(confirm));
        }
        if let Some(notice) = &self.notice {
            ui_stack = ui_stack.push(notice_dialog(notice));
        }

        Container::new(ui_stack)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}
