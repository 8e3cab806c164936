use iced::widget::{button, column, pick_list, row, text, Container};
use iced::{Alignment, Length};
use classroom::search::CourseFilter;
use crate::app::{App, Message};
use super::widgets::{table, TableRow};

const ALL_COURSES: &str = "All Courses";
const ALL_CHAPTERS: &str = "All Chapters";

fn page<'a>(title: &'a str, body: impl Into<iced::Element<'a, Message>>) -> Container<'a, Message> {
    Container::new(column![text(title).size(30), body.into()].spacing(15))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(20)
}

/// "All ..." first, then the distinct values.
fn with_all(all: &str, values: Vec<String>) -> Vec<String> {
    std::iter::once(all.to_string()).chain(values).collect()
}

fn unless_all(all: &str, choice: String) -> Option<String> {
    (choice != all).then_some(choice)
}

pub fn student_courses_screen(app: &App) -> Container<Message> {
    let (names, chapters) = CourseFilter::options(&app.courses);
    let filter = &app.course_filter;

    let filters = row![
        text("Course:"),
        pick_list(
            with_all(ALL_COURSES, names),
            Some(filter.course.clone().unwrap_or_else(|| ALL_COURSES.to_string())),
            |choice| Message::CourseFilterCourse(unless_all(ALL_COURSES, choice)),
        ),
        text("Chapter:"),
        pick_list(
            with_all(ALL_CHAPTERS, chapters),
            Some(filter.chapter.clone().unwrap_or_else(|| ALL_CHAPTERS.to_string())),
            |choice| Message::CourseFilterChapter(unless_all(ALL_CHAPTERS, choice)),
        ),
    ]
        .spacing(10)
        .align_y(Alignment::Center);

    // File paths stay out of the student view.
    let rows: Vec<TableRow> = filter
        .apply(&app.courses)
        .into_iter()
        .map(|c| {
            (c.id, vec![
                c.id.to_string(),
                c.name.clone(),
                c.chapter.clone(),
                c.lesson.clone(),
                c.resource_type.clone(),
            ])
        })
        .collect();

    let grid = table(
        &["ID", "Course Name", "Chapter", "Lesson", "Resource Type"],
        rows,
        app.selected_resource,
        |id| Some(Message::SelectResource(id)),
    );

    let download = button("Download Selected Resource").on_press(Message::DownloadResource);

    page("Courses", column![filters, grid, download].spacing(15))
}

pub fn student_schedule_screen(app: &App) -> Container<Message> {
    let rows: Vec<TableRow> = app
        .schedules
        .iter()
        .map(|s| (s.id, vec![s.course.clone(), s.day.clone(), s.start_time.clone(), s.end_time.clone(), s.room.clone()]))
        .collect();
    page(
        "Schedule",
        table(&["Course", "Day", "Start Time", "End Time", "Room"], rows, None, |_| None),
    )
}

pub fn student_grades_screen(app: &App) -> Container<Message> {
    if let Some(err) = &app.my_grades_error {
        return page("Grades", text(err).size(18));
    }
    let rows: Vec<TableRow> = app
        .my_grades
        .iter()
        .map(|g| (g.id, vec![app.course_label(g.course_id), g.grade.to_string()]))
        .collect();
    page("Grades", table(&["Course", "Grade"], rows, None, |_| None))
}

pub fn notifications_screen(app: &App) -> Container<Message> {
    let rows: Vec<TableRow> = app
        .announcements
        .iter()
        .map(|a| (a.id, vec![a.date.clone(), a.title.clone(), a.content.clone()]))
        .collect();
    page("Notifications", table(&["Date", "Title", "Content"], rows, None, |_| None))
}
