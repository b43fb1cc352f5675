use flowbite_headless::navbar::{NavbarEvent, NavbarMenu};

use super::*;

const DEFAULT_COLLAPSE_ID: &str = "navbar-default";

#[derive(Clone, Copy, Default)]
struct NavbarCallbacks {
    on_menu_open_changed: Option<Callback<bool>>,
    on_expand: Option<Callback<()>>,
    on_collapse: Option<Callback<()>>,
    on_toggle: Option<Callback<bool>>,
}

impl NavbarCallbacks {
    fn emit(&self, event: NavbarEvent) {
        match event {
            NavbarEvent::OpenChanged(open) => {
                if let Some(callback) = self.on_menu_open_changed.as_ref() {
                    callback.call(open);
                }
            }
            NavbarEvent::Expanded => {
                if let Some(callback) = self.on_expand.as_ref() {
                    callback.call(());
                }
            }
            NavbarEvent::Collapsed => {
                if let Some(callback) = self.on_collapse.as_ref() {
                    callback.call(());
                }
            }
            NavbarEvent::Toggled(open) => {
                if let Some(callback) = self.on_toggle.as_ref() {
                    callback.call(open);
                }
            }
        }
    }
}

#[derive(Clone, Copy)]
/// Reactive handle to a navbar's collapsible menu.
pub struct NavbarHandle {
    menu: RwSignal<NavbarMenu>,
    callbacks: StoredValue<NavbarCallbacks>,
    collapse_id: StoredValue<String>,
}

impl NavbarHandle {
    /// Creates a handle whose menu starts `open`.
    pub fn new(open: bool) -> Self {
        Self {
            menu: create_rw_signal(NavbarMenu::new(open)),
            callbacks: store_value(NavbarCallbacks::default()),
            collapse_id: store_value(DEFAULT_COLLAPSE_ID.to_string()),
        }
    }

    /// Reactive expanded flag.
    pub fn is_open(&self) -> bool {
        self.menu.get().is_open()
    }

    /// Expands the menu. No-op when already expanded.
    pub fn expand(&self) {
        self.apply(NavbarMenu::expand);
    }

    /// Collapses the menu. No-op when already collapsed.
    pub fn collapse(&self) {
        self.apply(NavbarMenu::collapse);
    }

    /// Flips the menu.
    pub fn toggle(&self) {
        self.apply(NavbarMenu::toggle);
    }

    /// DOM id of the collapsible menu.
    pub fn collapse_id(&self) -> String {
        self.collapse_id.get_value()
    }

    fn sync_open(&self, open: bool) {
        if self.menu.get_untracked().is_open() != open {
            self.menu.update(|menu| menu.set_open(open));
        }
    }

    fn apply(&self, transition: fn(&mut NavbarMenu) -> Vec<NavbarEvent>) {
        let mut menu = self.menu.get_untracked();
        let events = transition(&mut menu);
        if events.is_empty() {
            return;
        }
        self.menu.set(menu);

        let callbacks = self.callbacks.get_value();
        for event in events {
            callbacks.emit(event);
        }
    }
}

/// Returns the [`NavbarHandle`] of the enclosing [`Navbar`].
///
/// # Panics
///
/// Panics if called outside [`Navbar`].
pub fn use_navbar() -> NavbarHandle {
    use_context::<NavbarHandle>().expect("NavbarHandle not provided")
}

#[component]
/// Top navigation bar with a collapsible menu.
pub fn Navbar(
    #[prop(optional)] fluid: bool,
    #[prop(optional)] rounded: bool,
    #[prop(optional)] border: bool,
    #[prop(optional)] sticky: bool,
    #[prop(optional, into)] collapse_id: Option<String>,
    /// Controlled expanded flag. Re-applied whenever it changes.
    #[prop(optional, into)]
    menu_open: Option<MaybeSignal<bool>>,
    /// Caller-owned handle for programmatic expand/collapse/toggle.
    #[prop(optional)]
    handle: Option<NavbarHandle>,
    #[prop(optional)] on_menu_open_changed: Option<Callback<bool>>,
    #[prop(optional)] on_expand: Option<Callback<()>>,
    #[prop(optional)] on_collapse: Option<Callback<()>>,
    #[prop(optional)] on_toggle: Option<Callback<bool>>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let handle = handle.unwrap_or_else(|| {
        NavbarHandle::new(menu_open.map(|open| open.get_untracked()).unwrap_or(false))
    });
    handle.callbacks.set_value(NavbarCallbacks {
        on_menu_open_changed,
        on_expand,
        on_collapse,
        on_toggle,
    });
    if let Some(collapse_id) = collapse_id.filter(|id| !id.is_empty()) {
        handle.collapse_id.set_value(collapse_id);
    }

    if let Some(menu_open) = menu_open {
        create_effect(move |_| handle.sync_open(menu_open.get()));
    }

    provide_context(handle);

    view! {
        <nav
            class=merge_layout_class("ui-navbar", layout_class)
            data-ui-primitive="true"
            data-ui-kind="navbar"
            data-ui-rounded=bool_token(rounded)
            data-ui-bordered=bool_token(border)
            data-ui-sticky=bool_token(sticky)
            data-ui-state=move || open_token(handle.is_open())
        >
            <div data-ui-slot="container" data-ui-fluid=bool_token(fluid)>
                {children()}
            </div>
        </nav>
    }
}

#[component]
/// Brand link shown at the start of a [`Navbar`].
pub fn NavbarBrand(
    #[prop(optional, into)] href: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <a
            href=href.unwrap_or_else(|| "/".to_string())
            data-ui-primitive="true"
            data-ui-kind="navbar-brand"
        >
            {children()}
        </a>
    }
}

#[component]
/// Menu toggle button for small viewports.
pub fn NavbarToggle(
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let handle = use_navbar();
    view! {
        <button
            type="button"
            class=merge_layout_class("ui-navbar-toggle", layout_class)
            data-ui-primitive="true"
            data-ui-kind="navbar-toggle"
            aria-controls=handle.collapse_id()
            aria-expanded=move || bool_token(handle.is_open())
            aria-label=aria_label.unwrap_or_else(|| "Open main menu".to_string())
            on:click=move |_: MouseEvent| handle.toggle()
        >
            <span data-ui-slot="indicator" aria-hidden="true"></span>
        </button>
    }
}

#[component]
/// Collapsible menu region controlled by [`NavbarToggle`].
pub fn NavbarCollapse(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let handle = use_navbar();
    view! {
        <div
            class=merge_layout_class("ui-navbar-collapse", layout_class)
            id=handle.collapse_id()
            data-ui-primitive="true"
            data-ui-kind="navbar-collapse"
            data-ui-state=move || open_token(handle.is_open())
        >
            {children()}
        </div>
    }
}
