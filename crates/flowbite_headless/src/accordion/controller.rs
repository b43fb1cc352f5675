use std::{cell::RefCell, collections::VecDeque, rc::Rc};

use super::{
    config::AccordionConfig,
    state::{AccordionEvent, AccordionEventKind, AccordionState, ItemPosition},
};
use crate::{
    error::{HandlerError, NotificationFailure},
    id::ItemId,
};

/// Notification handler. Returning an error records a [`NotificationFailure`] and dispatch moves
/// on to the next handler.
pub type AccordionHandler = Rc<dyn Fn(&AccordionEvent) -> Result<(), HandlerError>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Handle returned by [`AccordionController::subscribe`].
pub struct SubscriptionId(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Open(ItemId),
    Close(ItemId),
    Toggle(ItemId),
}

#[derive(Clone)]
struct Subscriber {
    id: SubscriptionId,
    kind: AccordionEventKind,
    handler: AccordionHandler,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Result of one programmatic or user-initiated operation.
pub struct DispatchReport {
    /// Events delivered, in delivery order. Includes events of calls queued while this one was
    /// dispatching.
    pub events: Vec<AccordionEvent>,
    /// Handler failures isolated during delivery.
    pub failures: Vec<NotificationFailure>,
    /// The call arrived during another dispatch and was queued behind it.
    pub queued: bool,
}

impl DispatchReport {
    fn queued() -> Self {
        Self {
            queued: true,
            ..Self::default()
        }
    }

    /// Whether every handler accepted every event.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

#[derive(Default)]
struct ControllerInner {
    config: AccordionConfig,
    state: AccordionState,
    subscribers: Vec<Subscriber>,
    next_subscription: u64,
    pending: VecDeque<Command>,
    dispatching: bool,
}

impl ControllerInner {
    fn apply(&mut self, command: Command) -> Vec<AccordionEvent> {
        match command {
            Command::Open(id) => self.state.open(&id),
            Command::Close(id) => self.state.close(&id),
            Command::Toggle(id) => self.state.toggle(&id),
        }
    }
}

#[derive(Clone, Default)]
/// Owns the [`AccordionState`] of one accordion instance and relays its notifications.
///
/// Cloning yields another handle to the same accordion. All calls happen on one thread; borrows
/// of the inner state are released before any handler runs, so handlers may query or drive the
/// controller. A mutating call made from inside a handler is queued and runs once the current
/// notification sequence finishes, before the outermost call returns.
pub struct AccordionController {
    inner: Rc<RefCell<ControllerInner>>,
}

impl std::fmt::Debug for AccordionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("AccordionController")
            .field("config", &inner.config)
            .field("state", &inner.state)
            .field("subscribers", &inner.subscribers.len())
            .field("dispatching", &inner.dispatching)
            .finish()
    }
}

impl AccordionController {
    /// Creates a controller with state built from `config`.
    pub fn new(config: AccordionConfig) -> Self {
        let inner = ControllerInner {
            config,
            state: AccordionState::new(config.mode),
            ..ControllerInner::default()
        };
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    /// Pushes the latest configuration into the state.
    ///
    /// Mode changes apply from the next opening onward; see [`AccordionState::set_mode`].
    pub fn configure(&self, config: AccordionConfig) {
        let mut inner = self.inner.borrow_mut();
        inner.state.set_mode(config.mode);
        inner.config = config;
    }

    /// Current configuration.
    pub fn config(&self) -> AccordionConfig {
        self.inner.borrow().config
    }

    /// Adds `handler` for events of `kind`. Handlers run in subscription order.
    ///
    /// A subscription made during dispatch takes effect from the next operation.
    pub fn subscribe<F>(&self, kind: AccordionEventKind, handler: F) -> SubscriptionId
    where
        F: Fn(&AccordionEvent) -> Result<(), HandlerError> + 'static,
    {
        let mut inner = self.inner.borrow_mut();
        inner.next_subscription += 1;
        let id = SubscriptionId(inner.next_subscription);
        inner.subscribers.push(Subscriber {
            id,
            kind,
            handler: Rc::new(handler),
        });
        id
    }

    /// Removes a subscription. Returns `false` when it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.inner.borrow_mut();
        let before = inner.subscribers.len();
        inner.subscribers.retain(|subscriber| subscriber.id != id);
        inner.subscribers.len() != before
    }

    /// Whether `id` is open. Unknown ids are closed.
    pub fn is_open(&self, id: &ItemId) -> bool {
        self.inner.borrow().state.is_open(id)
    }

    /// Open ids in registration order.
    pub fn open_items(&self) -> Vec<ItemId> {
        self.inner.borrow().state.open_items()
    }

    /// Registers `id` if needed and returns its position.
    pub fn register_item(&self, id: &ItemId) -> ItemPosition {
        self.inner.borrow_mut().state.register_item(id)
    }

    /// Position of `id` without registering it.
    pub fn position(&self, id: &ItemId) -> Option<ItemPosition> {
        self.inner.borrow().state.position(id)
    }

    /// Seeds membership for `id` without notifications.
    pub fn set_initial_state(&self, id: &ItemId, open: bool) {
        self.inner.borrow_mut().state.set_initial_state(id, open);
    }

    /// Opens `id` unless it is already open.
    pub fn open_item(&self, id: &ItemId) -> DispatchReport {
        self.run(Command::Open(id.clone()))
    }

    /// Closes `id` unless it is already closed. Unknown ids are a silent no-op.
    pub fn close_item(&self, id: &ItemId) -> DispatchReport {
        self.run(Command::Close(id.clone()))
    }

    /// Toggles `id`, closing other items first in collapse mode.
    pub fn toggle_item(&self, id: &ItemId) -> DispatchReport {
        self.run(Command::Toggle(id.clone()))
    }

    fn run(&self, command: Command) -> DispatchReport {
        {
            let mut inner = self.inner.borrow_mut();
            inner.pending.push_back(command);
            if inner.dispatching {
                return DispatchReport::queued();
            }
            inner.dispatching = true;
        }

        let _guard = DispatchGuard { inner: &self.inner };
        let mut report = DispatchReport::default();
        loop {
            let (events, subscribers) = {
                let mut inner = self.inner.borrow_mut();
                let Some(command) = inner.pending.pop_front() else {
                    break;
                };
                let events = inner.apply(command);
                (events, inner.subscribers.clone())
            };

            for event in events {
                deliver(&subscribers, &event, &mut report.failures);
                report.events.push(event);
            }
        }
        report
    }
}

/// Ends a dispatch even when a handler unwinds. Commands queued behind a panicking handler are
/// dropped along with it.
struct DispatchGuard<'a> {
    inner: &'a RefCell<ControllerInner>,
}

impl Drop for DispatchGuard<'_> {
    fn drop(&mut self) {
        if let Ok(mut inner) = self.inner.try_borrow_mut() {
            inner.dispatching = false;
            if std::thread::panicking() {
                inner.pending.clear();
            }
        }
    }
}

fn deliver(
    subscribers: &[Subscriber],
    event: &AccordionEvent,
    failures: &mut Vec<NotificationFailure>,
) {
    for subscriber in subscribers
        .iter()
        .filter(|subscriber| subscriber.kind == event.kind)
    {
        if let Err(error) = (subscriber.handler)(event) {
            failures.push(NotificationFailure {
                subscription: subscriber.id,
                event: event.clone(),
                error,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::accordion::AccordionMode;

    fn id(raw: &str) -> ItemId {
        ItemId::new(raw)
    }

    fn recorder(controller: &AccordionController) -> Rc<RefCell<Vec<AccordionEvent>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        for kind in [
            AccordionEventKind::Opened,
            AccordionEventKind::Closed,
            AccordionEventKind::Toggled,
        ] {
            let log = Rc::clone(&log);
            controller.subscribe(kind, move |event| {
                log.borrow_mut().push(event.clone());
                Ok(())
            });
        }
        log
    }

    fn controller_with(mode: AccordionMode, ids: &[&str]) -> AccordionController {
        let controller = AccordionController::new(AccordionConfig::with_mode(mode));
        for raw in ids {
            controller.register_item(&id(raw));
        }
        controller
    }

    #[test]
    fn toggle_delivers_close_open_toggle_sequence_to_subscribers() {
        let controller = controller_with(AccordionMode::Collapse, &["A", "B", "C"]);
        controller.set_initial_state(&id("A"), true);
        let log = recorder(&controller);

        let report = controller.toggle_item(&id("B"));

        let expected = vec![
            AccordionEvent::closed("A"),
            AccordionEvent::opened("B"),
            AccordionEvent::toggled("B"),
        ];
        assert_eq!(*log.borrow(), expected);
        assert_eq!(report.events, expected);
        assert!(report.is_clean());
        assert_eq!(controller.open_items(), vec![id("B")]);
    }

    #[test]
    fn handlers_run_in_subscription_order() {
        let controller = controller_with(AccordionMode::Collapse, &["a"]);
        let order = Rc::new(RefCell::new(Vec::new()));
        for label in ["first", "second", "third"] {
            let order = Rc::clone(&order);
            controller.subscribe(AccordionEventKind::Opened, move |_| {
                order.borrow_mut().push(label);
                Ok(())
            });
        }

        controller.open_item(&id("a"));

        assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn failing_handler_is_isolated_and_state_is_kept() {
        let controller = controller_with(AccordionMode::Collapse, &["a", "b"]);
        controller.set_initial_state(&id("a"), true);
        let failing = controller.subscribe(AccordionEventKind::Closed, |_| {
            Err(HandlerError::rejected("boom"))
        });
        let log = recorder(&controller);

        let report = controller.toggle_item(&id("b"));

        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].subscription, failing);
        assert_eq!(report.failures[0].event, AccordionEvent::closed("a"));
        assert_eq!(log.borrow().len(), 3);
        assert_eq!(controller.open_items(), vec![id("b")]);
    }

    #[test]
    fn unsubscribed_handlers_stop_receiving_events() {
        let controller = controller_with(AccordionMode::AlwaysOpen, &["a"]);
        let hits = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&hits);
        let subscription = controller.subscribe(AccordionEventKind::Toggled, move |_| {
            *counter.borrow_mut() += 1;
            Ok(())
        });

        controller.toggle_item(&id("a"));
        assert!(controller.unsubscribe(subscription));
        assert!(!controller.unsubscribe(subscription));
        controller.toggle_item(&id("a"));

        assert_eq!(*hits.borrow(), 1);
    }

    #[test]
    fn reentrant_toggle_is_queued_until_current_sequence_finishes() {
        let controller = controller_with(AccordionMode::Collapse, &["a", "b"]);
        let log = recorder(&controller);
        let nested = Rc::new(RefCell::new(None));

        let handle = controller.clone();
        let nested_report = Rc::clone(&nested);
        controller.subscribe(AccordionEventKind::Opened, move |event| {
            if event.item_id.as_str() == "a" {
                // Observes the fully applied state of the outer call.
                assert!(handle.is_open(&ItemId::new("a")));
                *nested_report.borrow_mut() = Some(handle.toggle_item(&ItemId::new("b")));
            }
            Ok(())
        });

        let report = controller.toggle_item(&id("a"));

        let nested = nested.borrow().clone().expect("nested call recorded");
        assert!(nested.queued);
        assert!(nested.events.is_empty());
        assert_eq!(
            report.events,
            vec![
                AccordionEvent::opened("a"),
                AccordionEvent::toggled("a"),
                AccordionEvent::closed("a"),
                AccordionEvent::opened("b"),
                AccordionEvent::toggled("b"),
            ]
        );
        assert_eq!(*log.borrow(), report.events);
        assert_eq!(controller.open_items(), vec![id("b")]);
    }

    #[test]
    fn configure_updates_mode_without_closing_open_items() {
        let controller = controller_with(AccordionMode::AlwaysOpen, &["a", "b"]);
        controller.open_item(&id("a"));
        controller.open_item(&id("b"));

        controller.configure(AccordionConfig::with_mode(AccordionMode::Collapse));

        assert_eq!(controller.config().mode, AccordionMode::Collapse);
        assert_eq!(controller.open_items(), vec![id("a"), id("b")]);
    }

    #[test]
    fn close_unknown_item_reports_nothing() {
        let controller = controller_with(AccordionMode::Collapse, &["a"]);
        let log = recorder(&controller);

        let report = controller.close_item(&id("nonexistent"));

        assert_eq!(report, DispatchReport::default());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn open_unknown_item_registers_and_opens_it() {
        let controller = controller_with(AccordionMode::Collapse, &["a"]);

        controller.open_item(&id("late"));

        assert!(controller.is_open(&id("late")));
        assert_eq!(controller.position(&id("late")).map(|p| p.index), Some(1));
    }

    #[test]
    fn panicking_handler_does_not_stall_later_operations() {
        let controller = controller_with(AccordionMode::Collapse, &["a", "b"]);
        let nested = controller.clone();
        let panicking = controller.subscribe(AccordionEventKind::Opened, move |_| {
            nested.toggle_item(&id("b"));
            panic!("handler failed");
        });

        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            controller.toggle_item(&id("a"))
        }));
        assert!(outcome.is_err());
        assert!(controller.is_open(&id("a")));
        assert!(!controller.is_open(&id("b")));

        assert!(controller.unsubscribe(panicking));
        let report = controller.toggle_item(&id("b"));

        assert!(!report.queued);
        assert_eq!(
            report.events,
            vec![
                AccordionEvent::closed(id("a")),
                AccordionEvent::opened(id("b")),
                AccordionEvent::toggled(id("b")),
            ]
        );
        assert_eq!(controller.open_items(), vec![id("b")]);
    }
}
