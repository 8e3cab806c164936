use iced::widget::{button, column, pick_list, row, text_input, Column, Container};
use iced::Length;
use classroom::models::{CHAPTERS, COURSE_NAMES, LESSONS, RESOURCE_TYPES};
use classroom::search::{self, Searchable};
use crate::app::state::{options, Entity};
use crate::app::{App, Message};
use super::widgets::{crud_panel, field, table, TableRow};

const HEADERS: [&str; 6] = ["ID", "Course Name", "Chapter", "Lesson", "Resource Type", "File Path"];

fn course_form(app: &App) -> Column<Message> {
    let form = &app.course_form;
    column![
        field(
            "Course Name",
            pick_list(options(&COURSE_NAMES), form.name.clone(), Message::CourseNameSelected)
                .placeholder("Select a course")
                .width(Length::Fill),
        ),
        field(
            "Chapter",
            pick_list(options(&CHAPTERS), form.chapter.clone(), Message::CourseChapterSelected)
                .placeholder("Select a chapter")
                .width(Length::Fill),
        ),
        field(
            "Lesson",
            pick_list(options(&LESSONS), form.lesson.clone(), Message::CourseLessonSelected)
                .placeholder("Select a lesson")
                .width(Length::Fill),
        ),
        field(
            "Resource Type",
            pick_list(options(&RESOURCE_TYPES), form.resource_type.clone(), Message::CourseResourceTypeSelected)
                .placeholder("Select a type")
                .width(Length::Fill),
        ),
        field(
            "File",
            row![
                text_input("Path to the resource file", &form.file_path)
                    .on_input(Message::CourseFilePathChanged)
                    .padding(8),
                button("Browse...").on_press(Message::BrowseCourseFile),
            ]
                .spacing(8),
        ),
    ]
}

pub fn courses_screen(app: &App) -> Container<Message> {
    let term = app.search.get(Entity::Course);
    let rows: Vec<TableRow> = search::filter(&app.courses, term)
        .into_iter()
        .map(|c| (c.id, c.cells()))
        .collect();

    let grid = table(&HEADERS, rows, app.course_form.selected, |id| Some(Message::Select(Entity::Course, id)));
    crud_panel("Courses", Entity::Course, term, grid, course_form(app))
}
