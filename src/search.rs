use std::collections::BTreeSet;
use regex::{Regex, RegexBuilder};
use crate::models::{Announcement, Course, Grade, ScheduleEntry, User};

/// A row that can be shown in a table and searched column by column.
pub trait Searchable {
    fn cells(&self) -> Vec<String>;
}

impl Searchable for User {
    fn cells(&self) -> Vec<String> {
        vec![self.id.to_string(), self.username.clone(), self.user_type.to_string()]
    }
}

impl Searchable for Course {
    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.chapter.clone(),
            self.lesson.clone(),
            self.resource_type.clone(),
            self.file_path.clone(),
        ]
    }
}

impl Searchable for ScheduleEntry {
    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.course.clone(),
            self.day.clone(),
            self.start_time.clone(),
            self.end_time.clone(),
            self.room.clone(),
        ]
    }
}

impl Searchable for Grade {
    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.student_id.to_string(),
            self.course_id.to_string(),
            self.grade.to_string(),
        ]
    }
}

impl Searchable for Announcement {
    fn cells(&self) -> Vec<String> {
        vec![self.id.to_string(), self.title.clone(), self.content.clone(), self.date.clone()]
    }
}

/// Case-insensitive pattern for a search box. Text that is not a valid regex
/// is matched literally.
pub fn pattern(term: &str) -> Option<Regex> {
    let term = term.trim();
    if term.is_empty() {
        return None;
    }
    RegexBuilder::new(term)
        .case_insensitive(true)
        .build()
        .or_else(|_| RegexBuilder::new(&regex::escape(term)).case_insensitive(true).build())
        .ok()
}

pub fn matches<T: Searchable>(row: &T, term: &str) -> bool {
    match pattern(term) {
        Some(re) => row.cells().iter().any(|cell| re.is_match(cell)),
        None => true,
    }
}

pub fn filter<'a, T: Searchable>(rows: &'a [T], term: &str) -> Vec<&'a T> {
    match pattern(term) {
        Some(re) => rows
            .iter()
            .filter(|row| row.cells().iter().any(|cell| re.is_match(cell)))
            .collect(),
        None => rows.iter().collect(),
    }
}

/// Rows already turned into display cells, keeping those where any cell
/// matches. Use this when a table shows derived text, such as a course name
/// looked up from an id.
pub fn filter_cells<K>(rows: Vec<(K, Vec<String>)>, term: &str) -> Vec<(K, Vec<String>)> {
    match pattern(term) {
        Some(re) => rows
            .into_iter()
            .filter(|(_, cells)| cells.iter().any(|cell| re.is_match(cell)))
            .collect(),
        None => rows,
    }
}

/// Course/chapter selection in the student course browser. `None` stands for
/// "all".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseFilter {
    pub course: Option<String>,
    pub chapter: Option<String>,
}

impl CourseFilter {
    pub fn accepts(&self, course: &Course) -> bool {
        self.course.as_ref().is_none_or(|name| &course.name == name)
            && self.chapter.as_ref().is_none_or(|chapter| &course.chapter == chapter)
    }

    pub fn apply<'a>(&self, courses: &'a [Course]) -> Vec<&'a Course> {
        courses.iter().filter(|c| self.accepts(c)).collect()
    }

    /// Distinct course names and chapters present in `courses`, sorted.
    pub fn options(courses: &[Course]) -> (Vec<String>, Vec<String>) {
        let names: BTreeSet<_> = courses.iter().map(|c| c.name.clone()).collect();
        let chapters: BTreeSet<_> = courses.iter().map(|c| c.chapter.clone()).collect();
        (names.into_iter().collect(), chapters.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(id: i64, name: &str, chapter: &str) -> Course {
        Course {
            id,
            name: name.to_string(),
            chapter: chapter.to_string(),
            lesson: "Lesson 1".to_string(),
            resource_type: "Quiz".to_string(),
            file_path: format!("/tmp/{id}.pdf"),
        }
    }

    #[test]
    fn empty_term_keeps_everything() {
        let rows = vec![course(1, "Maths", "Chapter 1"), course(2, "Physics", "Chapter 2")];
        assert_eq!(filter(&rows, "   ").len(), 2);
        assert!(matches(&rows[0], ""));
    }

    #[test]
    fn search_is_case_insensitive_and_keeps_order() {
        let rows = vec![
            course(1, "Maths", "Chapter 1"),
            course(2, "Physics", "Chapter 2"),
            course(3, "maths", "Chapter 3"),
        ];
        let ids: Vec<i64> = filter(&rows, "MATHS").iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn regex_terms_are_honoured() {
        let rows = vec![course(1, "Maths", "Chapter 1"), course(2, "Biology", "Chapter 2")];
        let ids: Vec<i64> = filter(&rows, "^bio").iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn broken_regex_falls_back_to_literal() {
        let mut odd = course(1, "Maths", "Chapter 1");
        odd.file_path = "/tmp/notes(1.pdf".to_string();
        let rows = vec![odd, course(2, "Physics", "Chapter 2")];
        let ids: Vec<i64> = filter(&rows, "notes(1").iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn rendered_cells_are_searchable() {
        let rows = vec![
            (1, vec!["1".to_string(), "2".to_string(), "Maths (#1)".to_string(), "91".to_string()]),
            (2, vec!["2".to_string(), "3".to_string(), "Physics (#2)".to_string(), "64".to_string()]),
        ];
        let hits: Vec<i64> = filter_cells(rows.clone(), "maths").into_iter().map(|(id, _)| id).collect();
        assert_eq!(hits, vec![1]);
        assert_eq!(filter_cells(rows, "").len(), 2);
    }

    #[test]
    fn course_filter_combines_course_and_chapter() {
        let rows = vec![
            course(1, "Maths", "Chapter 1"),
            course(2, "Maths", "Chapter 2"),
            course(3, "Physics", "Chapter 1"),
        ];
        let all = CourseFilter::default();
        assert_eq!(all.apply(&rows).len(), 3);

        let maths = CourseFilter { course: Some("Maths".into()), chapter: None };
        assert_eq!(maths.apply(&rows).iter().map(|c| c.id).collect::<Vec<_>>(), vec![1, 2]);

        let both = CourseFilter { course: Some("Maths".into()), chapter: Some("Chapter 2".into()) };
        assert_eq!(both.apply(&rows).iter().map(|c| c.id).collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn options_are_distinct_and_sorted() {
        let rows = vec![
            course(1, "Physics", "Chapter 2"),
            course(2, "Maths", "Chapter 1"),
            course(3, "Physics", "Chapter 1"),
        ];
        let (names, chapters) = CourseFilter::options(&rows);
        assert_eq!(names, vec!["Maths", "Physics"]);
        assert_eq!(chapters, vec!["Chapter 1", "Chapter 2"]);
    }
}
