//! Shell command grammar.

use std::str::FromStr;

use secrecy::SecretString;
use thiserror::Error;

use crate::application::ContextError;
use crate::domain::course::BrowseError;
use crate::domain::foundation::{AuthError, CourseId, LessonId, ValidationError};

/// A parsed shell command.
#[derive(Debug)]
pub enum Command {
    Go(String),
    Login {
        email: String,
        password: SecretString,
    },
    Register {
        email: String,
        password: SecretString,
        name: String,
    },
    Logout,
    ClearError,
    /// Sets the course filter; an empty query clears it.
    Search(String),
    Course(CourseId),
    Lesson {
        course: CourseId,
        lesson: LessonId,
    },
    Next,
    Prev,
    Retry,
    Home,
    Menu,
    Resize(u32),
    WhoAmI,
    Help,
    Quit,
}

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("Nothing to do")]
    EmptyInput,

    #[error("Unknown command '{0}'. Type 'help' for the list of commands.")]
    UnknownCommand(String),

    #[error("'{command}' needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("'{command}': {reason}")]
    InvalidArgument {
        command: &'static str,
        reason: String,
    },

    #[error("'{0}' takes no more arguments")]
    TooManyArguments(&'static str),

    #[error("Open the course page first (go /course-content)")]
    NotOnCoursePage,

    #[error("Courses are not available right now")]
    CoursesNotReady,

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Browse(#[from] BrowseError),

    #[error(transparent)]
    Context(#[from] ContextError),

    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Usage lines shown by `help`.
pub const HELP: &[(&str, &str)] = &[
    ("go <path>", "open a page (/, /login, /course-content, /admin/courses)"),
    ("login <email> <password>", "sign in"),
    ("register <email> <password> <name...>", "create an account"),
    ("logout", "sign out"),
    ("clear-error", "dismiss the sign-in error"),
    ("search [query...]", "filter courses and lessons; no query clears"),
    ("course <id>", "select a course"),
    ("lesson <course-id> <lesson-id>", "select a lesson"),
    ("next / prev", "move between lessons"),
    ("retry", "reload the course list"),
    ("home", "back to the home page"),
    ("menu", "open or close the navigation menu"),
    ("resize <width>", "report a new terminal width"),
    ("whoami", "show the signed-in user"),
    ("help", "show this list"),
    ("quit", "leave"),
];

struct Args<'a> {
    command: &'static str,
    words: std::str::SplitWhitespace<'a>,
}

impl<'a> Args<'a> {
    fn required(&mut self, argument: &'static str) -> Result<&'a str, ShellError> {
        self.words.next().ok_or(ShellError::MissingArgument {
            command: self.command,
            argument,
        })
    }

    /// Everything left, joined by single spaces.
    fn rest(&mut self) -> String {
        self.words.by_ref().collect::<Vec<_>>().join(" ")
    }

    fn finish(mut self) -> Result<(), ShellError> {
        match self.words.next() {
            Some(_) => Err(ShellError::TooManyArguments(self.command)),
            None => Ok(()),
        }
    }

    fn course_id(&mut self) -> Result<CourseId, ShellError> {
        let raw = self.required("a course id")?;
        raw.parse().map_err(|e: ValidationError| {
            ShellError::InvalidArgument {
                command: self.command,
                reason: e.to_string(),
            }
        })
    }
}

/// A command that takes no arguments.
fn bare(command: Command, args: Args<'_>) -> Result<Command, ShellError> {
    args.finish()?;
    Ok(command)
}

impl FromStr for Command {
    type Err = ShellError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let head = words.next().ok_or(ShellError::EmptyInput)?;

        let name: &'static str = match head.to_lowercase().as_str() {
            "go" => "go",
            "login" => "login",
            "register" => "register",
            "logout" => "logout",
            "clear-error" => "clear-error",
            "search" => "search",
            "course" => "course",
            "lesson" => "lesson",
            "next" => "next",
            "prev" => "prev",
            "retry" => "retry",
            "home" => "home",
            "menu" => "menu",
            "resize" => "resize",
            "whoami" => "whoami",
            "help" | "?" => "help",
            "quit" | "exit" => "quit",
            _ => return Err(ShellError::UnknownCommand(head.to_string())),
        };
        let mut args = Args {
            command: name,
            words,
        };

        let command = match name {
            "go" => {
                let path = args.required("a path")?.to_string();
                args.finish()?;
                Command::Go(path)
            }
            "login" => {
                let email = args.required("an email")?.to_string();
                let password = SecretString::new(args.required("a password")?.to_string());
                args.finish()?;
                Command::Login { email, password }
            }
            "register" => {
                let email = args.required("an email")?.to_string();
                let password = SecretString::new(args.required("a password")?.to_string());
                let name = args.rest();
                if name.is_empty() {
                    return Err(ShellError::MissingArgument {
                        command: "register",
                        argument: "a name",
                    });
                }
                Command::Register {
                    email,
                    password,
                    name,
                }
            }
            "search" => Command::Search(args.rest()),
            "course" => {
                let id = args.course_id()?;
                args.finish()?;
                Command::Course(id)
            }
            "lesson" => {
                let course = args.course_id()?;
                let lesson = LessonId::new(args.required("a lesson id")?).map_err(|e| {
                    ShellError::InvalidArgument {
                        command: "lesson",
                        reason: e.to_string(),
                    }
                })?;
                args.finish()?;
                Command::Lesson { course, lesson }
            }
            "resize" => {
                let width = args
                    .required("a width")?
                    .parse()
                    .map_err(|_| ShellError::InvalidArgument {
                        command: "resize",
                        reason: "width must be a whole number".to_string(),
                    })?;
                args.finish()?;
                Command::Resize(width)
            }
            "logout" => bare(Command::Logout, args)?,
            "clear-error" => bare(Command::ClearError, args)?,
            "next" => bare(Command::Next, args)?,
            "prev" => bare(Command::Prev, args)?,
            "retry" => bare(Command::Retry, args)?,
            "home" => bare(Command::Home, args)?,
            "menu" => bare(Command::Menu, args)?,
            "whoami" => bare(Command::WhoAmI, args)?,
            "help" => bare(Command::Help, args)?,
            _ => bare(Command::Quit, args)?,
        };

        Ok(command)
    }
}
