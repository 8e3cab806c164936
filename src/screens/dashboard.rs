use iced::{widget::{column, text, Column, Container}, Length};
use iced::widget::container::bordered_box;
use crate::app::{App, Message};

fn greeting(app: &App) -> Column<Message> {
    column![
        text("Welcome to your dashboard!").size(30),
        text(format!("Signed in as {}", app.session.username().unwrap_or("unknown"))).size(18),
    ]
        .spacing(10)
}

pub fn admin_dashboard(app: &App) -> Container<Message> {
    let counts = column![
        text(format!("Courses: {}", app.courses.len())),
        text(format!("Schedule entries: {}", app.schedules.len())),
        text(format!("Grades: {}", app.grades.len())),
        text(format!("Announcements: {}", app.announcements.len())),
        text(format!("Users: {}", app.users.len())),
    ]
        .spacing(8);

    Container::new(
        greeting(app).push(Container::new(counts).style(bordered_box).padding(15)),
    )
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(40)
}

pub fn user_dashboard(app: &App) -> Container<Message> {
    let mut content = greeting(app);
    if let Some(latest) = app.announcements.first() {
        content = content.push(
            Container::new(
                column![
                    text(format!("Latest announcement ({})", latest.date)).size(16),
                    text(&latest.title).size(20),
                    text(&latest.content),
                ]
                    .spacing(6),
            )
                .style(bordered_box)
                .padding(15)
                .width(Length::Fill),
        );
    }
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(40)
}
