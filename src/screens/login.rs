use iced::{widget::{column, text, text_input, button, vertical_space, Container}, Length, Center};
use crate::app::{App, Message};

pub fn login_screen(app: &App) -> Container<Message> {
    let content = column![
        vertical_space(),
        text("Login").size(30),
        text_input("User Name", &app.login_username)
            .on_input(Message::LoginUsernameChanged)
            .on_submit(Message::LoginPressed)
            .padding(10)
            .size(18)
            .width(Length::Fixed(350.0)),
        text_input("Password", &app.login_password)
            .on_input(Message::LoginPasswordChanged)
            .on_submit(Message::LoginPressed)
            .secure(true)
            .padding(10)
            .size(18)
            .width(Length::Fixed(350.0)),
        button("Login")
            .on_press(Message::LoginPressed)
            .padding(10),
        text(app.login_error.as_deref().unwrap_or("")).size(18),
        vertical_space(),
    ]
        .spacing(15)
        .width(Length::Fill)
        .align_x(Center);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(40)
}
