//! Header navigation menu.
//!
//! On narrow viewports the menu is a drawer that the learner opens and
//! closes; once the viewport reaches the desktop breakpoint the drawer is
//! closed and the links are shown inline.

/// Viewport width (columns or pixels) at which the drawer collapses.
pub const DESKTOP_BREAKPOINT: u32 = 768;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: [NavLink; 3] = [
    NavLink {
        label: "Home",
        href: "/",
    },
    NavLink {
        label: "Course material",
        href: "/course-content",
    },
    NavLink {
        label: "About",
        href: "/#about",
    },
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn links(&self) -> &'static [NavLink] {
        &NAV_LINKS
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Closes the drawer once the viewport is at least desktop width.
    pub fn on_resize(&mut self, width: u32) {
        if width >= DESKTOP_BREAKPOINT {
            self.open = false;
        }
    }
}
