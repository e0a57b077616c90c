//! In-memory browsing over a fetched course list.
//!
//! `CourseBrowser` owns the three pieces of selection state behind the course
//! page: the free-text query, the active course and the active lesson.
//! Everything else (the visible sidebar, previous/next controls, the detail
//! pane) is derived on demand.

use thiserror::Error;

use super::records::{Course, Lesson, LessonStatus, LessonView};
use crate::domain::foundation::{CourseId, LessonId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BrowseError {
    #[error("No course with id {0}")]
    UnknownCourse(CourseId),

    #[error("Course {course} has no lesson '{lesson}'")]
    UnknownLesson { course: CourseId, lesson: LessonId },
}

/// A course as listed in the sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseEntry<'a> {
    pub course: &'a Course,
    pub is_active: bool,
    /// Whether the lesson list is open (active course, or a query is set).
    pub expanded: bool,
    /// Listed lessons; empty when collapsed.
    pub lessons: Vec<LessonEntry<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonEntry<'a> {
    pub lesson: &'a Lesson,
    pub is_active: bool,
    pub status: LessonStatus,
}

/// Neighbours of the active lesson within the active course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LessonNavigation<'a> {
    pub previous: Option<&'a Lesson>,
    pub next: Option<&'a Lesson>,
}

/// Case-insensitive substring match against an already lowercased needle.
fn contains_folded(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// True when the course title or any of its lesson titles contains `query`.
///
/// An empty query matches every course.
pub fn course_matches(course: &Course, query: &str) -> bool {
    let needle = query.to_lowercase();
    contains_folded(&course.title, &needle)
        || course
            .lessons
            .iter()
            .any(|lesson| contains_folded(&lesson.title, &needle))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseBrowser {
    courses: Vec<Course>,
    query: String,
    active_course: Option<CourseId>,
    /// Stored with its owning course: lesson ids are only unique per course.
    active_lesson: Option<(CourseId, LessonId)>,
}

impl CourseBrowser {
    /// Starts on the first course and its first lesson, when present.
    pub fn new(courses: Vec<Course>) -> Self {
        let active_course = courses.first().map(|course| course.id);
        let active_lesson = courses
            .first()
            .and_then(|course| course.first_lesson().map(|l| (course.id, l.id.clone())));

        Self {
            courses,
            query: String::new(),
            active_course,
            active_lesson,
        }
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    fn has_query(&self) -> bool {
        !self.query.is_empty()
    }

    fn course(&self, id: CourseId) -> Option<&Course> {
        self.courses.iter().find(|course| course.id == id)
    }

    pub fn active_course(&self) -> Option<&Course> {
        self.active_course.and_then(|id| self.course(id))
    }

    pub fn active_lesson(&self) -> Option<&Lesson> {
        let (course_id, lesson_id) = self.active_lesson.as_ref()?;
        self.course(*course_id)?.lesson(lesson_id)
    }

    /// Activates a course and resets the lesson to its first one.
    ///
    /// A course without lessons keeps the previously active lesson.
    pub fn select_course(&mut self, id: CourseId) -> Result<(), BrowseError> {
        let course = self.course(id).ok_or(BrowseError::UnknownCourse(id))?;
        let first = course.first_lesson().map(|lesson| (id, lesson.id.clone()));

        self.active_course = Some(id);
        if first.is_some() {
            self.active_lesson = first;
        }
        Ok(())
    }

    /// Activates a lesson. The active course is left unchanged.
    pub fn select_lesson(&mut self, course: CourseId, lesson: LessonId) -> Result<(), BrowseError> {
        let owner = self.course(course).ok_or(BrowseError::UnknownCourse(course))?;
        if owner.lesson(&lesson).is_none() {
            return Err(BrowseError::UnknownLesson { course, lesson });
        }

        self.active_lesson = Some((course, lesson));
        Ok(())
    }

    /// Sidebar listing after applying the query.
    pub fn visible_courses(&self) -> Vec<CourseEntry<'_>> {
        let needle = self.query.to_lowercase();
        let searching = self.has_query();

        self.courses
            .iter()
            .filter(|course| course_matches(course, &self.query))
            .map(|course| {
                let is_active = self.active_course == Some(course.id);
                let expanded = is_active || searching;
                let lessons = if expanded {
                    course
                        .lessons
                        .iter()
                        .filter(|lesson| !searching || contains_folded(&lesson.title, &needle))
                        .map(|lesson| LessonEntry {
                            lesson,
                            is_active: self.is_active_lesson(course.id, &lesson.id),
                            status: lesson.status(),
                        })
                        .collect()
                } else {
                    Vec::new()
                };

                CourseEntry {
                    course,
                    is_active,
                    expanded,
                    lessons,
                }
            })
            .collect()
    }

    fn is_active_lesson(&self, course: CourseId, lesson: &LessonId) -> bool {
        matches!(&self.active_lesson, Some((c, l)) if *c == course && l == lesson)
    }

    /// Position of the active lesson within the active course, if it belongs there.
    fn active_position(&self) -> Option<(&Course, usize)> {
        let course = self.active_course()?;
        let (owner, lesson) = self.active_lesson.as_ref()?;
        if *owner != course.id {
            return None;
        }
        course.position_of(lesson).map(|index| (course, index))
    }

    pub fn navigation(&self) -> LessonNavigation<'_> {
        let Some((course, index)) = self.active_position() else {
            return LessonNavigation::default();
        };

        LessonNavigation {
            previous: index.checked_sub(1).and_then(|i| course.lessons.get(i)),
            next: course.lessons.get(index + 1),
        }
    }

    /// Moves to the previous lesson. Returns false at the first position.
    pub fn go_previous(&mut self) -> bool {
        let target = self
            .navigation()
            .previous
            .map(|lesson| lesson.id.clone());
        self.move_within_active(target)
    }

    /// Moves to the next lesson. Returns false at the last position.
    pub fn go_next(&mut self) -> bool {
        let target = self.navigation().next.map(|lesson| lesson.id.clone());
        self.move_within_active(target)
    }

    fn move_within_active(&mut self, target: Option<LessonId>) -> bool {
        match (self.active_course, target) {
            (Some(course), Some(lesson)) => {
                self.active_lesson = Some((course, lesson));
                true
            }
            _ => false,
        }
    }

    /// Detail pane for the active lesson, when a course and lesson are active.
    pub fn lesson_view(&self) -> Option<LessonView<'_>> {
        self.active_course()?;
        self.active_lesson().map(Lesson::view)
    }

    /// Header line under the sidebar title.
    pub fn availability_label(&self) -> String {
        match self.courses.len() {
            1 => "1 course available".to_string(),
            n => format!("{} courses available", n),
        }
    }
}
