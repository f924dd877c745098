//! Page navigation for the watch simulator.
//!
//! Press `Y` to toggle between pages.
//!
//! # Pages
//!
//! - [`Page::Watch`]: the radial watch face
//! - [`Page::Debug`]: frame timing, simulator stats and the event log

#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Page {
    #[default]
    Watch,
    Debug,
}

impl Page {
    /// Toggle to the other page.
    #[inline]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Watch => Self::Debug,
            Self::Debug => Self::Watch,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Watch => "Watch",
            Self::Debug => "Debug",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_default() {
        assert_eq!(Page::default(), Page::Watch);
    }

    #[test]
    fn test_page_toggle() {
        assert_eq!(Page::Watch.toggle(), Page::Debug);
        assert_eq!(Page::Debug.toggle(), Page::Watch);
    }

    #[test]
    fn test_page_toggle_cycle() {
        let page = Page::Watch;
        let page = page.toggle(); // -> Debug
        let page = page.toggle(); // -> Watch
        assert_eq!(page, Page::Watch);
    }

    #[test]
    fn test_page_names() {
        assert_eq!(Page::Watch.name(), "Watch");
        assert_eq!(Page::Debug.name(), "Debug");
    }
}
