use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::config::AccordionMode;
use crate::id::ItemId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Kinds of accordion notifications.
pub enum AccordionEventKind {
    /// An item became open.
    Opened,
    /// An item became closed, either directly or because another item opened in collapse mode.
    Closed,
    /// An item was toggled. Always the last event of a toggle sequence.
    Toggled,
}

impl AccordionEventKind {
    /// Stable lowercase name of the kind.
    pub fn token(self) -> &'static str {
        match self {
            Self::Opened => "opened",
            Self::Closed => "closed",
            Self::Toggled => "toggled",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One notification produced by an accordion state transition.
pub struct AccordionEvent {
    /// What happened.
    pub kind: AccordionEventKind,
    /// Item it happened to.
    pub item_id: ItemId,
}

impl AccordionEvent {
    /// `Opened` event for `item_id`.
    pub fn opened(item_id: impl Into<ItemId>) -> Self {
        Self {
            kind: AccordionEventKind::Opened,
            item_id: item_id.into(),
        }
    }

    /// `Closed` event for `item_id`.
    pub fn closed(item_id: impl Into<ItemId>) -> Self {
        Self {
            kind: AccordionEventKind::Closed,
            item_id: item_id.into(),
        }
    }

    /// `Toggled` event for `item_id`.
    pub fn toggled(item_id: impl Into<ItemId>) -> Self {
        Self {
            kind: AccordionEventKind::Toggled,
            item_id: item_id.into(),
        }
    }
}

impl std::fmt::Display for AccordionEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.kind.token(), self.item_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Position of an item within registration order. Recomputed on every query.
pub struct ItemPosition {
    /// Item was registered first.
    pub is_first: bool,
    /// Item is currently the last registered item.
    pub is_last: bool,
    /// Zero-based registration index.
    pub index: usize,
}

impl ItemPosition {
    fn at(index: usize, len: usize) -> Self {
        Self {
            is_first: index == 0,
            is_last: index + 1 == len,
            index,
        }
    }

    /// Stable token for the `data-ui-position` attribute.
    pub fn token(self) -> &'static str {
        match (self.is_first, self.is_last) {
            (true, true) => "only",
            (true, false) => "first",
            (false, true) => "last",
            (false, false) => "middle",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Open/closed membership and registration order for one accordion instance.
///
/// Transitions return the notifications they produce instead of invoking handlers, so the state
/// is always fully updated before anything observes it.
pub struct AccordionState {
    mode: AccordionMode,
    open_items: HashSet<ItemId>,
    item_order: Vec<ItemId>,
}

impl AccordionState {
    /// Empty state in the given mode.
    pub fn new(mode: AccordionMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Current behavior mode.
    pub fn mode(&self) -> AccordionMode {
        self.mode
    }

    /// Switches the behavior mode.
    ///
    /// Items already open stay open: leaving `AlwaysOpen` with several items open does not close
    /// any of them, and the single-open rule applies from the next opening onward.
    pub fn set_mode(&mut self, mode: AccordionMode) {
        self.mode = mode;
    }

    /// Appends `id` to registration order if absent and returns its current position.
    pub fn register_item(&mut self, id: &ItemId) -> ItemPosition {
        let index = match self.index_of(id) {
            Some(index) => index,
            None => {
                self.item_order.push(id.clone());
                self.item_order.len() - 1
            }
        };
        ItemPosition::at(index, self.item_order.len())
    }

    /// Position of `id` without registering it.
    pub fn position(&self, id: &ItemId) -> Option<ItemPosition> {
        self.index_of(id)
            .map(|index| ItemPosition::at(index, self.item_order.len()))
    }

    /// Registered ids in registration order.
    pub fn item_order(&self) -> &[ItemId] {
        &self.item_order
    }

    /// Whether `id` is open. Unknown ids are closed.
    pub fn is_open(&self, id: &ItemId) -> bool {
        self.open_items.contains(id)
    }

    /// Open ids in registration order.
    pub fn open_items(&self) -> Vec<ItemId> {
        self.item_order
            .iter()
            .filter(|id| self.open_items.contains(*id))
            .cloned()
            .collect()
    }

    /// Seeds membership for `id` without producing notifications.
    ///
    /// Used when an item mounts or when a controlled item re-applies its external flag. The
    /// collapse rule is not enforced here; seeding two items open in collapse mode leaves both
    /// open until the next toggle.
    pub fn set_initial_state(&mut self, id: &ItemId, open: bool) {
        if open {
            self.register_item(id);
            self.open_items.insert(id.clone());
        } else {
            self.open_items.remove(id);
        }
    }

    /// Opens `id` through [`AccordionState::toggle`] unless it is already open.
    pub fn open(&mut self, id: &ItemId) -> Vec<AccordionEvent> {
        if self.is_open(id) {
            return Vec::new();
        }
        self.toggle(id)
    }

    /// Closes `id` through [`AccordionState::toggle`] unless it is already closed.
    pub fn close(&mut self, id: &ItemId) -> Vec<AccordionEvent> {
        if !self.is_open(id) {
            return Vec::new();
        }
        self.toggle(id)
    }

    /// Flips `id` and returns the resulting notifications in delivery order.
    ///
    /// Opening in collapse mode first closes every other open item (in registration order).
    /// The `Toggled` event for `id` is always last.
    pub fn toggle(&mut self, id: &ItemId) -> Vec<AccordionEvent> {
        let opening = !self.is_open(id);
        let mut events = Vec::new();

        if opening && self.mode == AccordionMode::Collapse {
            for other in self.open_items() {
                if &other == id {
                    continue;
                }
                self.open_items.remove(&other);
                events.push(AccordionEvent::closed(other));
            }
        }

        if opening {
            self.register_item(id);
            self.open_items.insert(id.clone());
            events.push(AccordionEvent::opened(id.clone()));
        } else {
            self.open_items.remove(id);
            events.push(AccordionEvent::closed(id.clone()));
        }

        events.push(AccordionEvent::toggled(id.clone()));
        events
    }

    fn index_of(&self, id: &ItemId) -> Option<usize> {
        self.item_order.iter().position(|candidate| candidate == id)
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    const IDS: [&str; 4] = ["a", "b", "c", "d"];

    #[derive(Debug, Clone, Copy)]
    enum Op {
        Toggle(usize),
        Open(usize),
        Close(usize),
        Seed(usize),
    }

    impl Op {
        fn target(self) -> ItemId {
            let (Op::Toggle(index) | Op::Open(index) | Op::Close(index) | Op::Seed(index)) = self;
            ItemId::new(IDS[index])
        }

        fn apply(self, state: &mut AccordionState) -> Vec<AccordionEvent> {
            let target = self.target();
            match self {
                Op::Toggle(_) => state.toggle(&target),
                Op::Open(_) => state.open(&target),
                Op::Close(_) => state.close(&target),
                Op::Seed(_) => {
                    state.set_initial_state(&target, false);
                    Vec::new()
                }
            }
        }
    }

    impl Arbitrary for Op {
        type Parameters = ();
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
            let index = 0..IDS.len();
            prop_oneof![
                index.clone().prop_map(Op::Toggle),
                index.clone().prop_map(Op::Open),
                index.clone().prop_map(Op::Close),
                index.prop_map(Op::Seed),
            ]
            .boxed()
        }
    }

    fn assert_open_items_registered(state: &AccordionState) -> Result<(), TestCaseError> {
        for raw in IDS {
            let id = ItemId::new(raw);
            if state.is_open(&id) {
                prop_assert!(state.item_order().contains(&id), "{raw} open but unregistered");
            }
        }
        Ok(())
    }

    proptest! {
        /// Collapse mode holds at most one open item after every step.
        #[test]
        fn collapse_mode_caps_open_items(ops in prop::collection::vec(any::<Op>(), 0..64)) {
            let mut state = AccordionState::new(AccordionMode::Collapse);
            for op in ops {
                op.apply(&mut state);
                prop_assert!(state.open_items().len() <= 1, "after {op:?}: {:?}", state.open_items());
                assert_open_items_registered(&state)?;
            }
        }

        /// Always-open mode only ever changes the targeted item.
        #[test]
        fn always_open_steps_leave_other_items_alone(
            ops in prop::collection::vec(any::<Op>(), 0..64),
        ) {
            let mut state = AccordionState::new(AccordionMode::AlwaysOpen);
            for op in ops {
                let target = op.target();
                let before = IDS.map(|raw| state.is_open(&ItemId::new(raw)));

                let events = op.apply(&mut state);

                for (raw, was_open) in IDS.into_iter().zip(before) {
                    let id = ItemId::new(raw);
                    if id != target {
                        prop_assert_eq!(state.is_open(&id), was_open, "{} changed by {:?}", raw, op);
                    }
                }
                prop_assert!(events.iter().all(|event| event.item_id == target));
                assert_open_items_registered(&state)?;
            }
        }

        /// Toggle always reports `Toggled` for its target last.
        #[test]
        fn toggle_ends_with_toggled_event(
            ops in prop::collection::vec(any::<Op>(), 0..32),
            last in 0..IDS.len(),
        ) {
            let mut state = AccordionState::new(AccordionMode::Collapse);
            for op in ops {
                op.apply(&mut state);
            }
            let target = ItemId::new(IDS[last]);

            let events = state.toggle(&target);
            let expected = AccordionEvent::toggled(target);

            prop_assert_eq!(events.last(), Some(&expected));
        }
    }
}
