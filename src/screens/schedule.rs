use iced::widget::{column, pick_list, text_input, Column, Container};
use iced::Length;
use classroom::models::{COURSE_NAMES, DAYS, ROOMS};
use classroom::search::{self, Searchable};
use crate::app::state::{options, Entity};
use crate::app::{App, Message};
use super::widgets::{crud_panel, field, table, TableRow};

const HEADERS: [&str; 6] = ["ID", "Course", "Day", "Start Time", "End Time", "Room"];

fn schedule_form(app: &App) -> Column<Message> {
    let form = &app.schedule_form;
    column![
        field(
            "Course",
            pick_list(options(&COURSE_NAMES), form.course.clone(), Message::ScheduleCourseSelected)
                .placeholder("Select a course")
                .width(Length::Fill),
        ),
        field(
            "Day",
            pick_list(options(&DAYS), form.day.clone(), Message::ScheduleDaySelected)
                .placeholder("Select a day")
                .width(Length::Fill),
        ),
        field(
            "Start Time (HH:MM)",
            text_input("09:00", &form.start_time)
                .on_input(Message::ScheduleStartChanged)
                .padding(8),
        ),
        field(
            "End Time (HH:MM)",
            text_input("10:30", &form.end_time)
                .on_input(Message::ScheduleEndChanged)
                .padding(8),
        ),
        field(
            "Room",
            pick_list(options(&ROOMS), form.room.clone(), Message::ScheduleRoomSelected)
                .placeholder("Select a room")
                .width(Length::Fill),
        ),
    ]
}

pub fn schedule_screen(app: &App) -> Container<Message> {
    let term = app.search.get(Entity::Schedule);
    let rows: Vec<TableRow> = search::filter(&app.schedules, term)
        .into_iter()
        .map(|s| (s.id, s.cells()))
        .collect();

    let grid = table(&HEADERS, rows, app.schedule_form.selected, |id| Some(Message::Select(Entity::Schedule, id)));
    crud_panel("Schedule", Entity::Schedule, term, grid, schedule_form(app))
}
