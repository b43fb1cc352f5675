//! Accordion, navbar, bottom navigation, and skeleton primitives.

use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::*;

mod accordion;
mod bottom_navigation;
mod navbar;
mod skeleton;

pub use accordion::{use_accordion, Accordion, AccordionHandle, AccordionItem};
pub use bottom_navigation::{BottomNavigation, BottomNavigationItem};
pub use navbar::{use_navbar, Navbar, NavbarBrand, NavbarCollapse, NavbarHandle, NavbarToggle};
pub use skeleton::{Skeleton, SkeletonImage, SkeletonText, SkeletonVideo};

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

/// Caller classes for an inner slot, or no `class` attribute at all.
pub(crate) fn slot_class(extra: Option<&'static str>) -> Option<&'static str> {
    extra.map(str::trim).filter(|extra| !extra.is_empty())
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

pub(crate) fn open_token(open: bool) -> &'static str {
    if open {
        "open"
    } else {
        "closed"
    }
}
