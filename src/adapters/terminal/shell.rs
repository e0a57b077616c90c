//! Interactive shell: reads commands, drives the navigator, prints pages.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::watch;

use super::command::{Command, ShellError};
use super::render::{help_text, render_page, PageContext};
use crate::application::Navigator;
use crate::domain::course::CourseBrowser;
use crate::domain::navigation::NavMenu;
use crate::domain::routing::Route;
use crate::domain::session::Session;

const PROMPT: &str = "> ";

/// Whether the loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Shell {
    navigator: Navigator,
    menu: NavMenu,
    session_changes: watch::Receiver<Session>,
    /// One-off message printed above the next page.
    notice: Option<String>,
}

impl Shell {
    pub fn new(navigator: Navigator) -> Self {
        let session_changes = navigator.session().subscribe();
        Self {
            navigator,
            menu: NavMenu::new(),
            session_changes,
            notice: None,
        }
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn menu(&self) -> &NavMenu {
        &self.menu
    }

    /// Takes the pending notice, if any.
    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }

    /// Current page as text.
    pub fn render(&self) -> String {
        let session = self.navigator.session().snapshot();
        render_page(PageContext {
            route: self.navigator.current(),
            session: &session,
            content: self.navigator.content().state(),
            menu: &self.menu,
        })
    }

    /// Parses and runs one input line. Blank lines do nothing.
    pub async fn handle_line(&mut self, line: &str) -> Result<Flow, ShellError> {
        if line.trim().is_empty() {
            return Ok(Flow::Continue);
        }
        let command: Command = line.parse()?;
        self.execute(command).await
    }

    /// Runs a command, then re-applies guards if the session changed,
    /// whether or not the command succeeded.
    pub async fn execute(&mut self, command: Command) -> Result<Flow, ShellError> {
        tracing::debug!(?command, "Executing command");

        let flow = self.apply(command).await;
        self.sync_with_session().await;
        flow
    }

    async fn apply(&mut self, command: Command) -> Result<Flow, ShellError> {
        match command {
            Command::Go(path) => self.go(&path).await,
            Command::Home => self.go(Route::Home.path()).await,
            Command::Login { email, password } => {
                let session = self.navigator.session().clone();
                let identity = session.login(email, password).await?;
                self.notice = Some(format!("Welcome, {}!", identity.display_name));
                if self.navigator.current() == Route::Login {
                    self.go(Route::Home.path()).await;
                }
            }
            Command::Register {
                email,
                password,
                name,
            } => {
                let session = self.navigator.session().clone();
                session.register(name, email, password).await?;
                self.notice = Some("Account created. You can now sign in.".to_string());
            }
            Command::Logout => {
                self.navigator.session().logout().await;
                self.notice = Some("Signed out.".to_string());
            }
            Command::ClearError => self.navigator.session().clear_error(),
            Command::Search(query) => {
                let browser = self.browser_mut()?;
                if query.is_empty() {
                    browser.clear_query();
                } else {
                    browser.set_query(query);
                }
            }
            Command::Course(id) => self.browser_mut()?.select_course(id)?,
            Command::Lesson { course, lesson } => {
                self.browser_mut()?.select_lesson(course, lesson)?
            }
            Command::Next => {
                if !self.browser_mut()?.go_next() {
                    self.notice = Some("This is the last lesson.".to_string());
                }
            }
            Command::Prev => {
                if !self.browser_mut()?.go_previous() {
                    self.notice = Some("This is the first lesson.".to_string());
                }
            }
            Command::Retry => {
                self.require_course_page()?;
                self.navigator.content_mut().retry().await;
            }
            Command::Menu => self.menu.toggle(),
            Command::Resize(width) => self.menu.on_resize(width),
            Command::WhoAmI => {
                self.notice = Some(match self.navigator.session().current_user() {
                    Some(identity) => format!(
                        "{} <{}> ({})",
                        identity.display_name, identity.email, identity.role
                    ),
                    None => "Not signed in.".to_string(),
                });
            }
            Command::Help => self.notice = Some(help_text()),
            Command::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    async fn go(&mut self, path: &str) {
        self.menu.close();
        let navigation = self.navigator.navigate(path).await;
        if navigation.redirected {
            self.notice = Some(format!(
                "{} requires signing in with the right account.",
                navigation.requested
            ));
        }
    }

    fn require_course_page(&self) -> Result<(), ShellError> {
        if self.navigator.current() == Route::CourseContent {
            Ok(())
        } else {
            Err(ShellError::NotOnCoursePage)
        }
    }

    fn browser_mut(&mut self) -> Result<&mut CourseBrowser, ShellError> {
        self.require_course_page()?;
        self.navigator
            .content_mut()
            .browser_mut()
            .ok_or(ShellError::CoursesNotReady)
    }

    /// Re-applies guards if the session changed since the last check.
    async fn sync_with_session(&mut self) {
        if self.session_changes.has_changed().unwrap_or(false) {
            self.session_changes.borrow_and_update();
            self.navigator.refresh().await;
        }
    }

    /// Runs the read-eval-print loop until `quit` or end of input.
    ///
    /// Session changes made in the background (the startup restore) re-render
    /// the page without waiting for input.
    pub async fn run<R, W>(&mut self, input: R, mut output: W) -> Result<(), ShellError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = input.lines();
        let mut watching = true;
        self.write_page(&mut output).await?;

        loop {
            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line? else { break };
                    match self.handle_line(&line).await {
                        Ok(Flow::Quit) => break,
                        Ok(Flow::Continue) => {}
                        Err(e) => {
                            tracing::debug!(error = %e, "Command failed");
                            self.notice = Some(format!("Error: {}", e));
                        }
                    }
                    self.write_page(&mut output).await?;
                }
                changed = self.session_changes.changed(), if watching => {
                    if changed.is_err() {
                        watching = false;
                        continue;
                    }
                    self.session_changes.borrow_and_update();
                    self.navigator.refresh().await;
                    self.write_page(&mut output).await?;
                }
            }
        }

        output.write_all(b"Bye!\n").await?;
        output.flush().await?;
        Ok(())
    }

    async fn write_page<W: AsyncWrite + Unpin>(&mut self, output: &mut W) -> Result<(), ShellError> {
        let mut text = String::from("\n");
        if let Some(notice) = self.take_notice() {
            text.push_str(&notice);
            text.push('\n');
        }
        text.push_str(&self.render());
        text.push('\n');
        text.push_str(PROMPT);

        output.write_all(text.as_bytes()).await?;
        output.flush().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::adapters::auth::MockAuthApi;
    use crate::adapters::catalog::MockCourseCatalog;
    use crate::adapters::storage::InMemoryKeyValueStore;
    use crate::application::{AppContext, SessionService};
    use crate::domain::course::{Course, Lesson};
    use crate::domain::foundation::{CourseId, Identity, LessonId};

    fn lesson(id: &str, title: &str) -> Lesson {
        Lesson {
            id: LessonId::new(id).unwrap(),
            title: title.to_string(),
            description: String::new(),
            duration: "3:00".to_string(),
            video_url: format!("https://videos.example.com/{}", id),
            thumbnail: None,
            completed: false,
            locked: false,
        }
    }

    fn courses() -> Vec<Course> {
        vec![
            Course {
                id: CourseId::new(1),
                title: "Getting started".to_string(),
                description: String::new(),
                lessons: vec![lesson("a", "Setup"), lesson("b", "First notebook")],
            },
            Course {
                id: CourseId::new(2),
                title: "Plotting".to_string(),
                description: String::new(),
                lessons: vec![lesson("c", "Charts")],
            },
        ]
    }

    fn shell() -> Shell {
        let auth = MockAuthApi::new()
            .with_account(Identity::new("Ana", "ana@example.com", "admin"), "secret");
        let session = Arc::new(SessionService::new(
            Arc::new(InMemoryKeyValueStore::new()),
            Arc::new(auth),
        ));
        let context = AppContext::builder()
            .session(session)
            .catalog(Arc::new(MockCourseCatalog::new().with_courses(courses())))
            .build();
        Shell::new(context.navigator().unwrap())
    }

    #[tokio::test]
    async fn course_commands_require_course_page() {
        let mut shell = shell();

        let err = shell.handle_line("next").await.unwrap_err();

        assert!(matches!(err, ShellError::NotOnCoursePage));
    }

    #[tokio::test]
    async fn browsing_flow_moves_between_lessons() {
        let mut shell = shell();
        shell.handle_line("go /course-content").await.unwrap();

        shell.handle_line("next").await.unwrap();
        assert!(shell.render().contains("prev: Setup"));

        shell.handle_line("next").await.unwrap();
        assert_eq!(
            shell.take_notice().as_deref(),
            Some("This is the last lesson.")
        );

        shell.handle_line("course 2").await.unwrap();
        assert!(shell.render().contains("Watch: https://videos.example.com/c"));
    }

    #[tokio::test]
    async fn search_filters_courses() {
        let mut shell = shell();
        shell.handle_line("go /course-content").await.unwrap();

        shell.handle_line("search setup").await.unwrap();
        let page = shell.render();

        assert!(page.contains("Getting started"));
        assert!(!page.contains("Plotting"));
    }

    #[tokio::test]
    async fn unknown_course_is_reported() {
        let mut shell = shell();
        shell.handle_line("go /course-content").await.unwrap();

        let err = shell.handle_line("course 99").await.unwrap_err();

        assert_eq!(err.to_string(), "No course with id 99");
    }

    #[tokio::test]
    async fn login_from_login_page_goes_home() {
        let mut shell = shell();
        shell.handle_line("go /admin/courses").await.unwrap();
        assert_eq!(shell.navigator().current(), Route::Login);

        shell
            .handle_line("login ana@example.com secret")
            .await
            .unwrap();

        assert_eq!(shell.navigator().current(), Route::Home);
        shell.handle_line("go /admin/courses").await.unwrap();
        assert_eq!(shell.navigator().current(), Route::AdminCourses);
    }

    #[tokio::test]
    async fn logout_leaves_admin_page() {
        let mut shell = shell();
        shell
            .handle_line("login ana@example.com secret")
            .await
            .unwrap();
        shell.handle_line("go /admin/courses").await.unwrap();

        shell.handle_line("logout").await.unwrap();

        assert_eq!(shell.navigator().current(), Route::Login);
    }

    #[tokio::test]
    async fn failed_login_shows_error_on_login_page() {
        let mut shell = shell();
        shell.handle_line("go /login").await.unwrap();

        let err = shell
            .handle_line("login nobody@example.com pw")
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "User does not exist. Please register.");
        assert!(shell
            .render()
            .contains("Error: User does not exist. Please register."));

        shell.handle_line("clear-error").await.unwrap();
        assert!(!shell.render().contains("Error:"));
    }

    #[tokio::test]
    async fn menu_toggles_and_closes_on_wide_resize() {
        let mut shell = shell();

        shell.handle_line("menu").await.unwrap();
        assert!(shell.menu().is_open());

        shell.handle_line("resize 500").await.unwrap();
        assert!(shell.menu().is_open());

        shell.handle_line("resize 768").await.unwrap();
        assert!(!shell.menu().is_open());
    }

    #[tokio::test]
    async fn run_renders_pages_until_quit() {
        let mut shell = shell();
        let input: &[u8] = b"go /nowhere\n\nquit\n";
        let mut output = Vec::new();

        shell.run(input, &mut output).await.unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Welcome!"));
        assert!(text.contains("404 - Page not found"));
        assert!(text.ends_with("Bye!\n"));
    }

    #[tokio::test]
    async fn run_reports_command_errors_and_continues() {
        let mut shell = shell();
        let input: &[u8] = b"dance\nwhoami\n";
        let mut output = Vec::new();

        shell.run(input, &mut output).await.unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Error: Unknown command 'dance'"));
        assert!(text.contains("Not signed in."));
    }
}
