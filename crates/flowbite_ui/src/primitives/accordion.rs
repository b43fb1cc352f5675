use flowbite_headless::accordion::{
    is_activation_key, AccordionColor, AccordionConfig, AccordionController, AccordionEventKind,
    AccordionMode, AccordionStyle, DispatchReport, ItemActivation, ItemBinding, ItemPosition,
};
use flowbite_headless::{ItemId, SubscriptionId};

use super::*;

#[derive(Clone, Copy)]
/// Reactive handle to one accordion's shared state.
///
/// The handle is provided as context by [`Accordion`] and may also be created by the caller and
/// passed in through the `handle` prop for programmatic open/close/toggle. Every mutation bumps a
/// revision signal so item views re-read the shared state.
pub struct AccordionHandle {
    controller: StoredValue<AccordionController>,
    revision: RwSignal<u64>,
}

impl AccordionHandle {
    /// Creates a handle with state configured from `config`.
    pub fn new(config: AccordionConfig) -> Self {
        Self {
            controller: store_value(AccordionController::new(config)),
            revision: create_rw_signal(0),
        }
    }

    /// Opens `id` and refreshes item views.
    pub fn open_item(&self, id: impl Into<ItemId>) -> DispatchReport {
        let report = self.controller().open_item(&id.into());
        self.finish(report)
    }

    /// Closes `id` and refreshes item views. Unknown ids are a no-op.
    pub fn close_item(&self, id: impl Into<ItemId>) -> DispatchReport {
        let report = self.controller().close_item(&id.into());
        self.finish(report)
    }

    /// Toggles `id` and refreshes item views.
    pub fn toggle_item(&self, id: impl Into<ItemId>) -> DispatchReport {
        let report = self.controller().toggle_item(&id.into());
        self.finish(report)
    }

    /// Reactive open flag for `id`.
    pub fn is_open(&self, id: &ItemId) -> bool {
        self.revision.get();
        self.controller().is_open(id)
    }

    /// Reactive position of `id` in registration order.
    pub fn position(&self, id: &ItemId) -> Option<ItemPosition> {
        self.revision.get();
        self.controller().position(id)
    }

    /// Reactive configuration.
    pub fn config(&self) -> AccordionConfig {
        self.revision.get();
        self.controller().config()
    }

    /// Pushes new configuration into the shared state and refreshes item views.
    pub fn configure(&self, config: AccordionConfig) {
        let controller = self.controller();
        if controller.config() == config {
            return;
        }
        controller.configure(config);
        self.refresh();
    }

    /// Forwards events of `kind` to `callback` with the item id as payload.
    pub fn relay(&self, kind: AccordionEventKind, callback: Callback<String>) -> SubscriptionId {
        self.controller().subscribe(kind, move |event| {
            callback.call(event.item_id.to_string());
            Ok(())
        })
    }

    /// Removes a subscription added through [`AccordionHandle::relay`].
    pub fn unsubscribe(&self, subscription: SubscriptionId) -> bool {
        self.controller().unsubscribe(subscription)
    }

    pub(crate) fn mount_item(&self, binding: &ItemBinding) {
        binding.mount(&self.controller());
        self.refresh();
    }

    pub(crate) fn sync_item(&self, binding: &mut ItemBinding, open: bool) {
        let controller = self.controller();
        let before = binding.is_open(&controller);
        if binding.sync(&controller, Some(open)) != before {
            self.refresh();
        }
    }

    pub(crate) fn activate_item(&self, binding: &ItemBinding) -> ItemActivation {
        let activation = binding.activate(&self.controller());
        log_failures(&activation.report);
        self.refresh();
        activation
    }

    fn controller(&self) -> AccordionController {
        self.controller.get_value()
    }

    fn finish(&self, report: DispatchReport) -> DispatchReport {
        log_failures(&report);
        self.refresh();
        report
    }

    fn refresh(&self) {
        self.revision.update(|revision| *revision = revision.wrapping_add(1));
    }
}

fn log_failures(report: &DispatchReport) {
    for failure in &report.failures {
        logging::warn!("accordion notification failed: {failure}");
    }
}

/// Returns the [`AccordionHandle`] of the enclosing [`Accordion`].
///
/// # Panics
///
/// Panics if called outside [`Accordion`].
pub fn use_accordion() -> AccordionHandle {
    use_context::<AccordionHandle>().expect("AccordionHandle not provided")
}

#[component]
/// Collapsible content sections sharing one open/closed state.
pub fn Accordion(
    #[prop(optional, into)] mode: MaybeSignal<AccordionMode>,
    #[prop(optional, into)] style: MaybeSignal<AccordionStyle>,
    #[prop(optional, into)] color: MaybeSignal<AccordionColor>,
    /// Caller-owned handle for programmatic control. Created internally when omitted.
    #[prop(optional)]
    handle: Option<AccordionHandle>,
    #[prop(optional)] on_item_opened: Option<Callback<String>>,
    #[prop(optional)] on_item_closed: Option<Callback<String>>,
    #[prop(optional)] on_item_toggled: Option<Callback<String>>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    children: Children,
) -> impl IntoView {
    let current_config = move || AccordionConfig {
        mode: mode.get(),
        style: style.get(),
        color: color.get(),
    };
    let handle =
        handle.unwrap_or_else(|| AccordionHandle::new(untrack(current_config)));

    let subscriptions = [
        (AccordionEventKind::Opened, on_item_opened),
        (AccordionEventKind::Closed, on_item_closed),
        (AccordionEventKind::Toggled, on_item_toggled),
    ]
    .into_iter()
    .filter_map(|(kind, callback)| callback.map(|callback| handle.relay(kind, callback)))
    .collect::<Vec<_>>();
    on_cleanup(move || {
        for subscription in subscriptions {
            handle.unsubscribe(subscription);
        }
    });

    create_effect(move |_| handle.configure(current_config()));

    provide_context(handle);

    view! {
        <div
            class=merge_layout_class("ui-accordion", layout_class)
            id=id
            data-ui-primitive="true"
            data-ui-kind="accordion"
            data-ui-mode=move || mode.get().token()
            data-ui-variant=move || style.get().token()
            data-ui-tone=move || color.get().token()
        >
            {children()}
        </div>
    }
}

#[component]
/// One togglable accordion section.
///
/// Uncontrolled items seed the shared state from `default_open` once. Passing `open` makes the
/// item controlled: the flag is re-applied whenever it changes and `on_open_changed` reports the
/// new value after each user toggle. `header` replaces the plain `title` when headers need markup.
pub fn AccordionItem(
    #[prop(optional, into)] title: MaybeSignal<String>,
    #[prop(optional)] header: Option<ChildrenFn>,
    /// Stable identifier. Generated when omitted; supply one for controlled usage.
    #[prop(optional, into)]
    id: Option<String>,
    #[prop(optional)] default_open: bool,
    #[prop(optional, into)] open: Option<MaybeSignal<bool>>,
    #[prop(optional)] on_open_changed: Option<Callback<bool>>,
    #[prop(optional)] layout_class: Option<&'static str>,
    /// Extra classes for the clickable header.
    #[prop(optional)]
    header_class: Option<&'static str>,
    /// Extra classes for the collapsible body.
    #[prop(optional)]
    body_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let handle = use_accordion();
    let item_id = ItemId::or_generate(id);
    let binding = ItemBinding::new(
        item_id.clone(),
        default_open,
        open.map(|open| open.get_untracked()),
    );
    handle.mount_item(&binding);
    let binding = store_value(binding);

    if let Some(open) = open {
        create_effect(move |_| {
            let flag = open.get();
            let mut current = binding.get_value();
            handle.sync_item(&mut current, flag);
            binding.set_value(current);
        });
    }

    let is_open = {
        let item_id = item_id.clone();
        Signal::derive(move || handle.is_open(&item_id))
    };
    let position = {
        let item_id = item_id.clone();
        Signal::derive(move || {
            handle
                .position(&item_id)
                .map(ItemPosition::token)
                .unwrap_or("only")
        })
    };

    let activate = move || {
        let current = binding.get_value();
        let activation = handle.activate_item(&current);
        if let Some(on_open_changed) = on_open_changed.as_ref() {
            on_open_changed.call(activation.open);
        }
    };

    let header_id = item_id.header_id();
    let body_id = item_id.body_id();
    let header_content = match header {
        Some(header) => view! { <span data-ui-slot="title">{header()}</span> }.into_view(),
        None => view! { <span data-ui-slot="title">{move || title.get()}</span> }.into_view(),
    };

    view! {
        <div
            class=merge_layout_class("ui-accordion-item", layout_class)
            id=item_id.to_string()
            data-ui-primitive="true"
            data-ui-kind="accordion-item"
            data-ui-state=move || open_token(is_open.get())
            data-ui-position=move || position.get()
        >
            <h2 data-ui-slot="heading">
                <div
                    id=header_id.clone()
                    class=slot_class(header_class)
                    role="button"
                    tabindex="0"
                    data-ui-slot="header"
                    aria-expanded=move || bool_token(is_open.get())
                    aria-controls=body_id.clone()
                    on:click=move |_: MouseEvent| activate()
                    on:keydown=move |ev: KeyboardEvent| {
                        if is_activation_key(&ev.key()) {
                            ev.prevent_default();
                            activate();
                        }
                    }
                >
                    {header_content}
                    <span
                        data-ui-slot="indicator"
                        data-ui-state=move || open_token(is_open.get())
                        aria-hidden="true"
                    ></span>
                </div>
            </h2>
            <div
                id=body_id
                class=slot_class(body_class)
                role="region"
                data-ui-slot="body"
                aria-labelledby=header_id
                hidden=move || !is_open.get()
            >
                <div data-ui-slot="content">{children()}</div>
            </div>
        </div>
    }
}
