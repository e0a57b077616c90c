//! Terminal presentation adapter.
//!
//! A line-oriented shell standing in for the browser: commands go in, pages
//! come out as text on stdout.

mod command;
mod render;
mod shell;

pub use command::{Command, ShellError, HELP};
pub use render::{course_page, help_text, render_page, PageContext};
pub use shell::{Flow, Shell};
