//! Course domain module.
//!
//! Course and lesson records plus the browsing state (search, selection,
//! lesson navigation) behind the course content page.

mod browser;
mod records;

pub use browser::{
    course_matches, BrowseError, CourseBrowser, CourseEntry, LessonEntry, LessonNavigation,
};
pub use records::{
    Course, Lesson, LessonStatus, LessonView, ENROLMENT_PATH, PLACEHOLDER_THUMBNAIL,
};
