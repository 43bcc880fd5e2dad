// SPDX-License-Identifier: MPL-2.0
//! Page lifecycle orchestration.
//!
//! Pages are virtual: navigating swaps which component set is live without
//! restarting the application. Each page component gets exactly one `init`
//! per activation and one `cleanup` per deactivation, in a fixed order, and
//! must tolerate repeated cycles without duplicating state. Player instances
//! deliberately live outside this cycle; they persist across transitions and
//! are only pruned when their root disappears.

/// The site's pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    About,
    Contact,
}

impl Page {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::About => "about",
            Page::Contact => "contact",
        }
    }

    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "home" => Some(Page::Home),
            "about" => Some(Page::About),
            "contact" => Some(Page::Contact),
            _ => None,
        }
    }
}

/// A component participating in the page lifecycle.
pub trait PageComponent {
    fn init(&mut self);
    fn cleanup(&mut self);
}

/// Tracks the current page and drives component transitions.
#[derive(Debug, Default)]
pub struct PageLifecycle {
    current: Option<Page>,
}

impl PageLifecycle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn current(&self) -> Option<Page> {
        self.current
    }

    /// Activates `page`: cleans up the outgoing components, then
    /// initializes the incoming ones, in index order. `outgoing` and
    /// `incoming` index into `components`, so a component live on both
    /// pages is cleaned up and re-initialized through the same borrow.
    /// Out-of-range indices are ignored. Navigating to the current page is
    /// a no-op. Returns whether a transition happened.
    pub fn navigate(
        &mut self,
        page: Page,
        components: &mut [&mut dyn PageComponent],
        outgoing: &[usize],
        incoming: &[usize],
    ) -> bool {
        if self.current == Some(page) {
            return false;
        }
        if self.current.is_some() {
            for &index in outgoing {
                if let Some(component) = components.get_mut(index) {
                    component.cleanup();
                }
            }
        }
        for &index in incoming {
            if let Some(component) = components.get_mut(index) {
                component.init();
            }
        }
        self.current = Some(page);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Probe {
        inits: usize,
        cleanups: usize,
    }

    impl PageComponent for Probe {
        fn init(&mut self) {
            self.inits += 1;
        }
        fn cleanup(&mut self) {
            self.cleanups += 1;
        }
    }

    #[test]
    fn first_navigation_initializes_without_cleanup() {
        let mut lifecycle = PageLifecycle::new();
        let mut old = Probe::default();
        let mut new = Probe::default();

        assert!(lifecycle.navigate(Page::Home, &mut [&mut old, &mut new], &[0], &[1]));
        assert_eq!(old.cleanups, 0);
        assert_eq!(new.inits, 1);
        assert_eq!(lifecycle.current(), Some(Page::Home));
    }

    #[test]
    fn navigating_to_the_current_page_is_a_noop() {
        let mut lifecycle = PageLifecycle::new();
        let mut component = Probe::default();
        assert!(lifecycle.navigate(Page::Home, &mut [&mut component], &[], &[0]));
        assert!(!lifecycle.navigate(Page::Home, &mut [&mut component], &[0], &[0]));
        assert_eq!(component.inits, 1);
        assert_eq!(component.cleanups, 0);
    }

    #[test]
    fn transition_pairs_cleanup_with_init() {
        let mut lifecycle = PageLifecycle::new();
        let mut home = Probe::default();
        let mut about = Probe::default();

        let _ = lifecycle.navigate(Page::Home, &mut [&mut home, &mut about], &[], &[0]);
        let _ = lifecycle.navigate(Page::About, &mut [&mut home, &mut about], &[0], &[1]);
        let _ = lifecycle.navigate(Page::Home, &mut [&mut home, &mut about], &[1], &[0]);

        assert_eq!(home.inits, 2);
        assert_eq!(home.cleanups, 1);
        assert_eq!(about.inits, 1);
        assert_eq!(about.cleanups, 1);
    }

    #[test]
    fn component_on_both_pages_cycles_through_both_phases() {
        let mut lifecycle = PageLifecycle::new();
        let mut shared = Probe::default();

        let _ = lifecycle.navigate(Page::Home, &mut [&mut shared], &[], &[0]);
        let _ = lifecycle.navigate(Page::About, &mut [&mut shared], &[0], &[0]);

        assert_eq!(shared.cleanups, 1);
        assert_eq!(shared.inits, 2);
    }

    #[test]
    fn out_of_range_indices_are_ignored() {
        let mut lifecycle = PageLifecycle::new();
        let mut component = Probe::default();
        assert!(lifecycle.navigate(Page::Home, &mut [&mut component], &[], &[0, 7]));
        assert_eq!(component.inits, 1);
    }

    #[test]
    fn page_names_round_trip() {
        for page in [Page::Home, Page::About, Page::Contact] {
            assert_eq!(Page::parse(page.as_str()), Some(page));
        }
        assert_eq!(Page::parse("pricing"), None);
    }
}
