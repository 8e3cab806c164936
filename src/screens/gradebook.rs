use iced::widget::{column, text, text_input, Column, Container};
use classroom::search;
use crate::app::state::Entity;
use crate::app::{App, Message};
use super::widgets::{crud_panel, field, table, TableRow};

const HEADERS: [&str; 4] = ["ID", "Student ID", "Course", "Grade"];

fn grade_form(app: &App) -> Column<Message> {
    let form = &app.grade_form;
    column![
        field(
            "Student ID",
            text_input("e.g. 2", &form.student_id)
                .on_input(Message::GradeStudentChanged)
                .padding(8),
        ),
        field(
            "Course ID",
            text_input("e.g. 1", &form.course_id)
                .on_input(Message::GradeCourseChanged)
                .padding(8),
        ),
        field(
            "Grade",
            text_input("e.g. 87.5", &form.grade)
                .on_input(Message::GradeValueChanged)
                .padding(8),
        ),
        text("Student and course ids are not checked against existing records.").size(12),
    ]
}

/// Rows as displayed, searched on the displayed text so course names match.
pub(crate) fn grade_rows(app: &App, term: &str) -> Vec<TableRow> {
    let rows: Vec<TableRow> = app
        .grades
        .iter()
        .map(|g| {
            (g.id, vec![
                g.id.to_string(),
                g.student_id.to_string(),
                app.course_label(g.course_id),
                g.grade.to_string(),
            ])
        })
        .collect();
    search::filter_cells(rows, term)
}

pub fn gradebook_screen(app: &App) -> Container<Message> {
    let term = app.search.get(Entity::Grade);
    let grid = table(&HEADERS, grade_rows(app, term), app.grade_form.selected, |id| Some(Message::Select(Entity::Grade, id)));
    crud_panel("Gradebook", Entity::Grade, term, grid, grade_form(app))
}
