use iced::widget::{button, column, text, text_editor, text_input, Column, Container};
use iced::Length;
use iced_aw::date_picker;
use classroom::search::{self, Searchable};
use crate::app::state::Entity;
use crate::app::{App, Message};
use super::widgets::{crud_panel, field, table, TableRow};

const HEADERS: [&str; 4] = ["ID", "Title", "Content", "Date"];

fn announcement_form(app: &App) -> Column<Message> {
    let form = &app.announcement_form;
    let date_button = button(text(form.date_text())).on_press(Message::ChooseAnnouncementDate);
    column![
        field(
            "Title",
            text_input("Announcement title", &form.title)
                .on_input(Message::AnnouncementTitleChanged)
                .padding(8),
        ),
        field(
            "Content",
            text_editor(&form.content)
                .placeholder("Write the announcement...")
                .on_action(Message::AnnouncementContentEdited)
                .height(Length::Fixed(160.0)),
        ),
        field(
            "Date",
            date_picker(
                form.show_date_picker,
                form.date,
                date_button,
                Message::CancelAnnouncementDate,
                Message::SubmitAnnouncementDate,
            ),
        ),
    ]
}

pub fn announcements_screen(app: &App) -> Container<Message> {
    let term = app.search.get(Entity::Announcement);
    let rows: Vec<TableRow> = search::filter(&app.announcements, term)
        .into_iter()
        .map(|a| (a.id, a.cells()))
        .collect();

    let grid = table(&HEADERS, rows, app.announcement_form.selected, |id| {
        Some(Message::Select(Entity::Announcement, id))
    });
    crud_panel("Announcements", Entity::Announcement, term, grid, announcement_form(app))
}
