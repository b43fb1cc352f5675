//! Flowbite-style Leptos component library.
//!
//! Components render the stable `data-ui-*` DOM contract consumed by the stylesheet layers and
//! delegate all open/closed bookkeeping to [`flowbite_headless`]. The accordion is the only
//! widget with shared state: items hold a lookup key and read their flag and position from the
//! enclosing [`Accordion`]'s [`AccordionHandle`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod primitives;

pub use flowbite_headless::{
    AccordionColor, AccordionConfig, AccordionEvent, AccordionEventKind, AccordionMode,
    AccordionStyle, BottomNavigationStyle, DispatchReport, HandlerError, ItemId, SubscriptionId,
};
pub use primitives::{
    use_accordion, use_navbar, Accordion, AccordionHandle, AccordionItem, BottomNavigation,
    BottomNavigationItem, Navbar, NavbarBrand, NavbarCollapse, NavbarHandle, NavbarToggle,
    Skeleton, SkeletonImage, SkeletonText, SkeletonVideo,
};

/// Convenience imports for application crates consuming the component set.
pub mod prelude {
    pub use crate::{
        use_accordion, use_navbar, Accordion, AccordionColor, AccordionConfig, AccordionHandle,
        AccordionItem, AccordionMode, AccordionStyle, BottomNavigation, BottomNavigationItem,
        BottomNavigationStyle, ItemId, Navbar, NavbarBrand, NavbarCollapse, NavbarHandle,
        NavbarToggle, Skeleton, SkeletonImage, SkeletonText, SkeletonVideo,
    };
}
