use iced::widget::{column, pick_list, text_input, Column, Container};
use iced::Length;
use classroom::models::UserType;
use classroom::search::{self, Searchable};
use crate::app::state::Entity;
use crate::app::{App, Message};
use super::widgets::{crud_panel, field, table, TableRow};

const HEADERS: [&str; 3] = ["ID", "Username", "User Type"];

fn user_form(app: &App) -> Column<Message> {
    let form = &app.user_form;
    column![
        field(
            "Username",
            text_input("Username", &form.username)
                .on_input(Message::UserNameChanged)
                .padding(8),
        ),
        field(
            "Password",
            text_input("Password", &form.password)
                .on_input(Message::UserPasswordChanged)
                .secure(true)
                .padding(8),
        ),
        field(
            "User Type",
            pick_list(&UserType::ALL[..], form.user_type, Message::UserTypeSelected)
                .placeholder("Select a type")
                .width(Length::Fill),
        ),
    ]
}

pub fn user_list_screen(app: &App) -> Container<Message> {
    let term = app.search.get(Entity::User);
    let rows: Vec<TableRow> = search::filter(&app.users, term)
        .into_iter()
        .map(|u| (u.id, u.cells()))
        .collect();

    let grid = table(&HEADERS, rows, app.user_form.selected, |id| Some(Message::Select(Entity::User, id)));
    crud_panel("Users", Entity::User, term, grid, user_form(app))
}
