//! Accordion open/closed coordination shared by an accordion and its items.

mod config;
mod controller;
mod item;
mod state;

pub use config::{AccordionColor, AccordionConfig, AccordionMode, AccordionStyle};
pub use controller::{AccordionController, AccordionHandler, DispatchReport, SubscriptionId};
pub use item::{is_activation_key, ItemActivation, ItemBinding, ACTIVATION_KEYS};
pub use state::{AccordionEvent, AccordionEventKind, AccordionState, ItemPosition};
