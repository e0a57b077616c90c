//! Course and lesson records as fetched from the backend.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CourseId, LessonId};

/// Path of the enrolment page offered on locked lessons.
pub const ENROLMENT_PATH: &str = "/inscripcion";

/// Image shown when a lesson has no thumbnail.
pub const PLACEHOLDER_THUMBNAIL: &str = "/placeholder.svg?height=200&width=350";

/// A course and its ordered lessons. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub lessons: Vec<Lesson>,
}

impl Course {
    pub fn first_lesson(&self) -> Option<&Lesson> {
        self.lessons.first()
    }

    pub fn lesson(&self, id: &LessonId) -> Option<&Lesson> {
        self.lessons.iter().find(|lesson| &lesson.id == id)
    }

    /// Position of a lesson within this course.
    pub fn position_of(&self, id: &LessonId) -> Option<usize> {
        self.lessons.iter().position(|lesson| &lesson.id == id)
    }
}

/// A single lesson. Ordering within its course drives previous/next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: LessonId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub duration: String,
    pub video_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub locked: bool,
}

impl Lesson {
    /// Sidebar marker: completion wins over the lock.
    pub fn status(&self) -> LessonStatus {
        if self.completed {
            LessonStatus::Completed
        } else if self.locked {
            LessonStatus::Locked
        } else {
            LessonStatus::Playable
        }
    }

    /// What the detail pane shows for this lesson.
    pub fn view(&self) -> LessonView<'_> {
        if self.locked {
            LessonView::Locked {
                call_to_action: ENROLMENT_PATH,
            }
        } else {
            LessonView::Playable {
                thumbnail: self
                    .thumbnail
                    .as_deref()
                    .filter(|thumbnail| !thumbnail.is_empty())
                    .unwrap_or(PLACEHOLDER_THUMBNAIL),
                video_url: &self.video_url,
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LessonStatus {
    Completed,
    Locked,
    Playable,
}

/// Detail pane content for the active lesson.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LessonView<'a> {
    /// Locked placeholder with a link to the enrolment page.
    Locked { call_to_action: &'a str },
    /// Thumbnail plus an outbound link to the video resource.
    Playable { thumbnail: &'a str, video_url: &'a str },
}
