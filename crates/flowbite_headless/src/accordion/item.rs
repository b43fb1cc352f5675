use super::{
    controller::{AccordionController, DispatchReport},
    state::ItemPosition,
};
use crate::id::ItemId;

/// Keys that activate an item header from the keyboard.
pub const ACTIVATION_KEYS: [&str; 2] = ["Enter", " "];

/// Whether a `KeyboardEvent.key` value should toggle an item.
pub fn is_activation_key(key: &str) -> bool {
    ACTIVATION_KEYS.contains(&key)
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Binding between one item view and the shared accordion state.
///
/// The binding holds only the lookup key and the caller's flags; the controller is the single
/// source of truth for open/closed membership.
pub struct ItemBinding {
    id: ItemId,
    default_open: bool,
    controlled: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Outcome of a user-initiated toggle.
pub struct ItemActivation {
    /// Open flag after the toggle, for `open_changed` write-back.
    pub open: bool,
    /// Dispatch details from the controller.
    pub report: DispatchReport,
}

impl ItemBinding {
    /// Creates a binding. `open` makes the item controlled; `default_open` only seeds an
    /// uncontrolled item.
    pub fn new(id: ItemId, default_open: bool, open: Option<bool>) -> Self {
        Self {
            id,
            default_open,
            controlled: open,
        }
    }

    /// Item identifier.
    pub fn id(&self) -> &ItemId {
        &self.id
    }

    /// Whether the caller owns the open flag.
    pub fn is_controlled(&self) -> bool {
        self.controlled.is_some()
    }

    /// Registers the item and seeds its open flag once, at creation time.
    pub fn mount(&self, controller: &AccordionController) -> ItemPosition {
        let position = controller.register_item(&self.id);
        let open = self.controlled.unwrap_or(self.default_open);
        controller.set_initial_state(&self.id, open);
        position
    }

    /// Re-applies an externally controlled flag. Uncontrolled items ignore `open == None`.
    ///
    /// Returns the open flag the view should render.
    pub fn sync(&mut self, controller: &AccordionController, open: Option<bool>) -> bool {
        self.controlled = open;
        if let Some(open) = open {
            if controller.is_open(&self.id) != open {
                controller.set_initial_state(&self.id, open);
            }
        }
        controller.is_open(&self.id)
    }

    /// Current open flag from the shared state.
    pub fn is_open(&self, controller: &AccordionController) -> bool {
        controller.is_open(&self.id)
    }

    /// Toggles the item through the controller so the collapse rule is enforced centrally.
    pub fn activate(&self, controller: &AccordionController) -> ItemActivation {
        let report = controller.toggle_item(&self.id);
        ItemActivation {
            open: controller.is_open(&self.id),
            report,
        }
    }
}
