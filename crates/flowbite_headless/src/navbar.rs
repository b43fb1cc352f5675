//! Collapsible navbar menu state.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Notifications produced by navbar menu transitions.
pub enum NavbarEvent {
    /// The open flag changed; carries the new value for two-way binding.
    OpenChanged(bool),
    /// The menu was expanded.
    Expanded,
    /// The menu was collapsed.
    Collapsed,
    /// The menu was toggled; carries the new open flag.
    Toggled(bool),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Open/closed state of a navbar's collapsible menu.
pub struct NavbarMenu {
    open: bool,
}

impl NavbarMenu {
    /// Menu starting in the given state.
    pub fn new(open: bool) -> Self {
        Self { open }
    }

    /// Whether the menu is expanded.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Silently applies an externally controlled flag.
    pub fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    /// Expands the menu. No-op when already expanded.
    pub fn expand(&mut self) -> Vec<NavbarEvent> {
        if self.open {
            return Vec::new();
        }
        self.open = true;
        vec![
            NavbarEvent::OpenChanged(true),
            NavbarEvent::Expanded,
            NavbarEvent::Toggled(true),
        ]
    }

    /// Collapses the menu. No-op when already collapsed.
    pub fn collapse(&mut self) -> Vec<NavbarEvent> {
        if !self.open {
            return Vec::new();
        }
        self.open = false;
        vec![
            NavbarEvent::OpenChanged(false),
            NavbarEvent::Collapsed,
            NavbarEvent::Toggled(false),
        ]
    }

    /// Flips the menu. Unlike [`NavbarMenu::expand`] and [`NavbarMenu::collapse`], the toggle
    /// notification precedes the expanded/collapsed one.
    pub fn toggle(&mut self) -> Vec<NavbarEvent> {
        self.open = !self.open;
        let open = self.open;
        vec![
            NavbarEvent::OpenChanged(open),
            NavbarEvent::Toggled(open),
            if open {
                NavbarEvent::Expanded
            } else {
                NavbarEvent::Collapsed
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn expand_and_collapse_are_idempotent() {
        let mut menu = NavbarMenu::default();

        assert_eq!(
            menu.expand(),
            vec![
                NavbarEvent::OpenChanged(true),
                NavbarEvent::Expanded,
                NavbarEvent::Toggled(true),
            ]
        );
        assert!(menu.expand().is_empty());
        assert!(menu.is_open());

        assert_eq!(
            menu.collapse(),
            vec![
                NavbarEvent::OpenChanged(false),
                NavbarEvent::Collapsed,
                NavbarEvent::Toggled(false),
            ]
        );
        assert!(menu.collapse().is_empty());
        assert!(!menu.is_open());
    }

    #[test]
    fn toggle_reports_toggle_before_direction() {
        let mut menu = NavbarMenu::new(true);

        assert_eq!(
            menu.toggle(),
            vec![
                NavbarEvent::OpenChanged(false),
                NavbarEvent::Toggled(false),
                NavbarEvent::Collapsed,
            ]
        );
        assert_eq!(
            menu.toggle(),
            vec![
                NavbarEvent::OpenChanged(true),
                NavbarEvent::Toggled(true),
                NavbarEvent::Expanded,
            ]
        );
    }

    #[test]
    fn controlled_flag_is_applied_silently() {
        let mut menu = NavbarMenu::default();
        menu.set_open(true);
        assert!(menu.is_open());
        assert!(menu.expand().is_empty());
    }
}
