use iced::{widget::{button, Column}, Alignment, Element, Length, Renderer, Theme};
use iced::widget::{text, vertical_space, Container, Row};
use iced_font_awesome::fa_icon_solid;
use crate::app::state::{AdminPanel, UserPanel};
use crate::app::{Message, App};

fn icon_button_content<'a>(
    icon_element: impl Into<Element<'a, Message, Theme, Renderer>>,
    label: &'a str,
) -> Row<'a, Message> {
    Row::new()
        .align_y(Alignment::Center)
        .spacing(5)
        .push(icon_element)
        .push(text(label))
}

fn nav_button<'a>(theme: &'a Theme, icon: &'a str, label: &'a str, active: bool, message: Message) -> Element<'a, Message> {
    button(icon_button_content(
        fa_icon_solid(icon).style(move |_| text::base(theme)),
        label,
    ))
        .style(move |t, status| if active { button::primary(t, status) } else { button::secondary(t, status) })
        .on_press(message)
        .width(Length::Fill)
        .into()
}

fn framed(content: Column<Message>) -> Container<Message> {
    Container::new(content.spacing(10))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(10)
}

const ADMIN_ITEMS: &[(&str, &str, AdminPanel)] = &[
    ("gauge", "Dashboard", AdminPanel::Dashboard),
    ("book", "Courses", AdminPanel::Courses),
    ("calendar-days", "Schedule", AdminPanel::Schedule),
    ("clipboard-list", "Gradebook", AdminPanel::Gradebook),
    ("bullhorn", "Announcements", AdminPanel::Announcements),
    ("users", "Users", AdminPanel::Users),
];

const USER_ITEMS: &[(&str, &str, UserPanel)] = &[
    ("gauge", "Dashboard", UserPanel::Dashboard),
    ("book", "Courses", UserPanel::Courses),
    ("calendar-days", "Schedule", UserPanel::Schedule),
    ("graduation-cap", "Grades", UserPanel::Grades),
    ("bell", "Notifications", UserPanel::Notifications),
];

pub fn admin_menu(app: &App, current: AdminPanel) -> Container<Message> {
    let theme = &app.theme;
    let items = ADMIN_ITEMS.iter().fold(Column::new(), |col, (icon, label, panel)| {
        col.push(nav_button(theme, icon, label, current == *panel, Message::GoToAdminPanel(*panel)))
    });
    framed(
        items
            .push(vertical_space())
            .push(nav_button(theme, "gear", "Settings", current == AdminPanel::Settings, Message::GoToAdminPanel(AdminPanel::Settings)))
            .push(nav_button(theme, "arrow-right-from-bracket", "Logout", false, Message::LogoutPressed)),
    )
}

pub fn user_menu(app: &App, current: UserPanel) -> Container<Message> {
    let theme = &app.theme;
    let items = USER_ITEMS.iter().fold(Column::new(), |col, (icon, label, panel)| {
        col.push(nav_button(theme, icon, label, current == *panel, Message::GoToUserPanel(*panel)))
    });
    framed(
        items
            .push(vertical_space())
            .push(nav_button(theme, "gear", "Settings", current == UserPanel::Settings, Message::GoToUserPanel(UserPanel::Settings)))
            .push(nav_button(theme, "arrow-right-from-bracket", "Logout", false, Message::LogoutPressed)),
    )
}
