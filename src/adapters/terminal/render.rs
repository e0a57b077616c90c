//! Text rendering of the portal pages.
//!
//! Every function here is pure: it turns state into lines of text. The shell
//! decides when to print them.

use crate::application::{ContentState, FailureAction};
use crate::domain::course::{CourseBrowser, LessonStatus, LessonView};
use crate::domain::navigation::NavMenu;
use crate::domain::routing::{Guarded, Route};
use crate::domain::session::Session;

const RULE: &str = "----------------------------------------";

/// Everything a page needs to render.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    pub route: Route,
    pub session: &'a Session,
    pub content: &'a ContentState,
    pub menu: &'a NavMenu,
}

/// Renders the header and the current page.
pub fn render_page(ctx: PageContext<'_>) -> String {
    let mut lines = header(ctx.session, ctx.menu);
    lines.push(RULE.to_string());

    match ctx.route {
        Route::Home => lines.extend(home_page()),
        Route::Login => lines.extend(login_page(ctx.session)),
        Route::CourseContent => lines.extend(course_page(ctx.content)),
        Route::AdminCourses => lines.extend(admin_page(ctx.session)),
        Route::NotFound => lines.extend(not_found_page()),
    }

    lines.join("\n")
}

fn header(session: &Session, menu: &NavMenu) -> Vec<String> {
    let account = match session.identity() {
        Some(identity) => format!("{} ({})", identity.display_name, identity.role),
        None if session.is_loading() => "...".to_string(),
        None => "not signed in".to_string(),
    };
    let mut lines = vec![format!("Course Portal  [{}]", account)];

    if menu.is_open() {
        lines.push("Menu (type 'menu' to close):".to_string());
        lines.extend(
            menu.links()
                .iter()
                .map(|link| format!("  {:<16} {}", link.label, link.href)),
        );
    } else {
        let inline: Vec<String> = menu
            .links()
            .iter()
            .map(|link| format!("{} {}", link.label, link.href))
            .collect();
        lines.push(inline.join("  |  "));
    }

    lines
}

fn home_page() -> Vec<String> {
    vec![
        "Welcome!".to_string(),
        "Learn at your own pace with short video lessons.".to_string(),
        "Open the course material with: go /course-content".to_string(),
    ]
}

fn login_page(session: &Session) -> Vec<String> {
    let mut lines = vec!["Sign in".to_string()];

    if let Some(identity) = session.identity() {
        lines.push(format!("You are signed in as {}.", identity.email));
        lines.push("Type 'logout' to sign out.".to_string());
        return lines;
    }

    if session.is_loading() {
        lines.push("Signing in...".to_string());
    }
    if let Some(error) = session.error() {
        lines.push(format!("Error: {}", error));
        lines.push("(type 'clear-error' to dismiss)".to_string());
    }
    lines.push("login <email> <password>".to_string());
    lines.push("register <email> <password> <name...>".to_string());
    lines
}

fn admin_page(session: &Session) -> Vec<String> {
    let Some(guard) = Route::AdminCourses.guard() else {
        return vec!["Course administration".to_string()];
    };

    match guard.protect(session.identity(), "Course administration") {
        Guarded::Render(title) => vec![
            title.to_string(),
            "Course authoring is not available from this client.".to_string(),
        ],
        Guarded::Redirect(route) => vec![format!("Sign in first: go {}", route)],
    }
}

fn not_found_page() -> Vec<String> {
    vec![
        "404 - Page not found".to_string(),
        "Type 'home' to go back.".to_string(),
    ]
}

/// Renders the course page for any loader state.
pub fn course_page(content: &ContentState) -> Vec<String> {
    match content {
        ContentState::Loading => vec!["Loading courses...".to_string()],
        ContentState::Failed { message } => {
            let mut lines = vec![message.clone()];
            lines.extend(content.actions().iter().map(|action| {
                let command = match action {
                    FailureAction::Retry => "retry",
                    FailureAction::GoHome => "home",
                };
                format!("  [{}] {}", command, action.label())
            }));
            lines
        }
        ContentState::Empty => vec!["No courses available yet.".to_string()],
        ContentState::Ready(browser) => browser_page(browser),
    }
}

fn status_marker(status: LessonStatus) -> &'static str {
    match status {
        LessonStatus::Completed => "[done]",
        LessonStatus::Locked => "[locked]",
        LessonStatus::Playable => "[play]",
    }
}

fn browser_page(browser: &CourseBrowser) -> Vec<String> {
    let mut lines = vec![format!("Courses - {}", browser.availability_label())];
    if !browser.query().is_empty() {
        lines.push(format!("Search: \"{}\"", browser.query()));
    }

    let visible = browser.visible_courses();
    if visible.is_empty() {
        lines.push("No results found".to_string());
    }
    for entry in &visible {
        let marker = if entry.is_active { ">" } else { " " };
        lines.push(format!(
            "{} [{}] {}",
            marker, entry.course.id, entry.course.title
        ));
        for lesson in &entry.lessons {
            let marker = if lesson.is_active { ">" } else { " " };
            lines.push(format!(
                "    {} {:<8} {} ({}) [{}]",
                marker,
                status_marker(lesson.status),
                lesson.lesson.title,
                lesson.lesson.duration,
                lesson.lesson.id
            ));
        }
    }

    lines.push(RULE.to_string());
    lines.extend(lesson_detail(browser));
    lines
}

fn lesson_detail(browser: &CourseBrowser) -> Vec<String> {
    let (Some(course), Some(lesson), Some(view)) = (
        browser.active_course(),
        browser.active_lesson(),
        browser.lesson_view(),
    ) else {
        return vec!["Select a lesson to start.".to_string()];
    };

    let mut lines = vec![
        course.title.clone(),
        format!("{} ({})", lesson.title, lesson.duration),
    ];
    if lesson.status() == LessonStatus::Completed {
        lines.push("Completed".to_string());
    }
    if !lesson.description.is_empty() {
        lines.push(lesson.description.clone());
    }

    match view {
        LessonView::Locked { call_to_action } => {
            lines.push("This lesson is locked.".to_string());
            lines.push(format!("Enrol to unlock it: {}", call_to_action));
        }
        LessonView::Playable {
            thumbnail,
            video_url,
        } => {
            lines.push(format!("Thumbnail: {}", thumbnail));
            lines.push(format!("Watch: {}", video_url));
        }
    }

    let navigation = browser.navigation();
    let mut controls = Vec::new();
    if let Some(previous) = navigation.previous {
        controls.push(format!("prev: {}", previous.title));
    }
    if let Some(next) = navigation.next {
        controls.push(format!("next: {}", next.title));
    }
    if !controls.is_empty() {
        lines.push(controls.join("  |  "));
    }

    lines
}

/// Lines listing every command.
pub fn help_text() -> String {
    super::command::HELP
        .iter()
        .map(|(usage, description)| format!("  {:<40} {}", usage, description))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::LOAD_FAILED_MESSAGE;
    use crate::domain::course::{Course, Lesson};
    use crate::domain::foundation::{CourseId, Identity, LessonId};

    fn lesson(id: &str, title: &str, locked: bool, completed: bool) -> Lesson {
        Lesson {
            id: LessonId::new(id).unwrap(),
            title: title.to_string(),
            description: String::new(),
            duration: "10:00".to_string(),
            video_url: format!("https://videos.example.com/{}", id),
            thumbnail: None,
            completed,
            locked,
        }
    }

    fn browser() -> CourseBrowser {
        CourseBrowser::new(vec![
            Course {
                id: CourseId::new(1),
                title: "Python basics".to_string(),
                description: String::new(),
                lessons: vec![
                    lesson("a", "Setup", false, true),
                    lesson("b", "Variables", false, false),
                    lesson("c", "Functions", true, false),
                ],
            },
            Course {
                id: CourseId::new(2),
                title: "Data analysis".to_string(),
                description: String::new(),
                lessons: vec![lesson("d", "Pandas", false, false)],
            },
        ])
    }

    fn render(route: Route, session: &Session, content: &ContentState) -> String {
        render_page(PageContext {
            route,
            session,
            content,
            menu: &NavMenu::new(),
        })
    }

    #[test]
    fn empty_and_failed_states_render_differently() {
        let empty = course_page(&ContentState::Empty).join("\n");
        let failed = course_page(&ContentState::Failed {
            message: LOAD_FAILED_MESSAGE.to_string(),
        })
        .join("\n");

        assert!(empty.contains("No courses available"));
        assert!(!empty.contains(LOAD_FAILED_MESSAGE));
        assert!(failed.contains(LOAD_FAILED_MESSAGE));
        assert!(failed.contains("[retry] Try again"));
        assert!(failed.contains("[home] Back to home"));
    }

    #[test]
    fn ready_page_shows_completed_badge_and_next_only_at_start() {
        let page = course_page(&ContentState::Ready(browser())).join("\n");

        assert!(page.contains("2 courses available"));
        assert!(page.contains("Completed"));
        assert!(page.contains("next: Variables"));
        assert!(!page.contains("prev:"));
        assert!(page.contains("Thumbnail: /placeholder.svg?height=200&width=350"));
    }

    #[test]
    fn locked_lesson_links_to_enrolment() {
        let mut browser = browser();
        browser
            .select_lesson(CourseId::new(1), LessonId::new("c").unwrap())
            .unwrap();

        let page = course_page(&ContentState::Ready(browser)).join("\n");

        assert!(page.contains("Enrol to unlock it: /inscripcion"));
        assert!(!page.contains("Watch:"));
        assert!(page.contains("prev: Variables"));
        assert!(!page.contains("next:"));
    }

    #[test]
    fn search_without_matches_says_no_results() {
        let mut browser = browser();
        browser.set_query("zzz");

        let page = course_page(&ContentState::Ready(browser)).join("\n");

        assert!(page.contains("No results found"));
    }

    #[test]
    fn login_page_shows_error_and_loading() {
        let mut session = Session::signed_out();
        session.begin_operation();
        session.record_error("User does not exist. Please register.");

        let page = render(Route::Login, &session, &ContentState::Loading);

        assert!(page.contains("Signing in..."));
        assert!(page.contains("Error: User does not exist. Please register."));
    }

    #[test]
    fn admin_page_renders_only_for_admins() {
        let mut session = Session::signed_out();
        session.sign_in(Identity::new("Ana", "ana@example.com", "admin"));
        let page = render(Route::AdminCourses, &session, &ContentState::Loading);
        assert!(page.contains("Course authoring is not available"));

        let mut session = Session::signed_out();
        session.sign_in(Identity::new("Luis", "luis@example.com", "student"));
        let page = render(Route::AdminCourses, &session, &ContentState::Loading);
        assert!(page.contains("Sign in first: go /login"));
    }

    #[test]
    fn header_shows_drawer_when_menu_open() {
        let mut menu = NavMenu::new();
        menu.toggle();

        let page = render_page(PageContext {
            route: Route::NotFound,
            session: &Session::signed_out(),
            content: &ContentState::Loading,
            menu: &menu,
        });

        assert!(page.contains("Menu (type 'menu' to close):"));
        assert!(page.contains("404 - Page not found"));
        assert!(page.contains("not signed in"));
    }

    #[test]
    fn help_lists_every_command() {
        let help = help_text();
        assert!(help.contains("register <email> <password> <name...>"));
        assert!(help.contains("quit"));
    }
}
