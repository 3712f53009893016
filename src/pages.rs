//! Page navigation for the simulator window.
//!
//! Press `Y` to toggle between pages.
//!
//! - [`Page::Screensaver`]: the animated screensaver with its overlay
//! - [`Page::Debug`]: frame metrics, system info and the log terminal

/// Pages the simulator can show.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Page {
    #[default]
    Screensaver,

    /// Metrics and log terminal.
    Debug,
}

impl Page {
    #[inline]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Screensaver => Self::Debug,
            Self::Debug => Self::Screensaver,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Screensaver => "Screensaver",
            Self::Debug => "Debug",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_default() {
        assert_eq!(Page::default(), Page::Screensaver);
    }

    #[test]
    fn test_page_toggle() {
        assert_eq!(Page::Screensaver.toggle(), Page::Debug);
        assert_eq!(Page::Debug.toggle(), Page::Screensaver);
        assert_eq!(Page::Debug.toggle().toggle(), Page::Debug);
    }

    #[test]
    fn test_page_names() {
        assert_eq!(Page::Screensaver.name(), "Screensaver");
        assert_eq!(Page::Debug.name(), "Debug");
    }
}
