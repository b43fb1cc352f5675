//! Renderer-independent state for the Flowbite-style component library.
//!
//! Views hold lookup keys only; the types here are the single source of truth for which
//! accordion items are open, whether a navbar menu is expanded, and how bottom navigation lays
//! out its columns. Transitions are synchronous and return the notifications they produce.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod accordion;
pub mod bottom_navigation;
pub mod error;
pub mod id;
pub mod navbar;

pub use accordion::{
    AccordionColor, AccordionConfig, AccordionController, AccordionEvent, AccordionEventKind,
    AccordionMode, AccordionState, AccordionStyle, DispatchReport, ItemBinding, ItemPosition,
    SubscriptionId,
};
pub use bottom_navigation::{BottomNavigationStyle, GridColumns};
pub use error::{HandlerError, NotificationFailure};
pub use id::ItemId;
pub use navbar::{NavbarEvent, NavbarMenu};
