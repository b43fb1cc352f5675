use flowbite_headless::bottom_navigation::{BottomNavigationStyle, GridColumns, DEFAULT_COLUMNS};

use super::*;

#[derive(Clone, Copy)]
struct BottomNavigationContext {
    style: BottomNavigationStyle,
}

#[component]
/// Fixed bar of evenly spaced navigation items along the bottom edge.
pub fn BottomNavigation(
    #[prop(optional)] style: BottomNavigationStyle,
    #[prop(default = DEFAULT_COLUMNS)] columns: u8,
    /// Pins the bar to the viewport. When false it is positioned within its container.
    #[prop(default = true)]
    fixed: bool,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let columns = GridColumns::new(columns);
    provide_context(BottomNavigationContext { style });

    view! {
        <nav
            class=merge_layout_class("ui-bottom-navigation", layout_class)
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="bottom-navigation"
            data-ui-variant=style.token()
            data-ui-position=if fixed { "fixed" } else { "absolute" }
        >
            <div
                data-ui-slot="items"
                data-ui-columns=columns.get()
                style=columns.container_style()
            >
                {children()}
            </div>
        </nav>
    }
}

#[component]
/// One destination in a [`BottomNavigation`]. Renders a link when `href` is set.
pub fn BottomNavigationItem(
    #[prop(optional, into)] href: Option<String>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] active: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let style = use_context::<BottomNavigationContext>()
        .map(|context| context.style)
        .unwrap_or_default();
    let class = merge_layout_class("ui-bottom-navigation-item", layout_class);

    let handle_click = move |ev: MouseEvent| {
        if disabled.get_untracked() {
            ev.prevent_default();
            return;
        }
        if let Some(on_click) = on_click.as_ref() {
            on_click.call(ev);
        }
    };

    let content = view! {
        <span data-ui-slot="glyph" aria-hidden="true"></span>
        {label.map(|label| view! { <span data-ui-slot="label">{label}</span> })}
        {children.map(|children| children())}
    };

    match href {
        Some(href) => view! {
            <a
                href=href
                class=class
                data-ui-primitive="true"
                data-ui-kind="bottom-navigation-item"
                data-ui-variant=style.token()
                data-ui-selected=move || bool_token(active.get())
                data-ui-disabled=move || bool_token(disabled.get())
                aria-current=move || active.get().then_some("page")
                aria-disabled=move || bool_token(disabled.get())
                on:click=handle_click
            >
                {content}
            </a>
        }
        .into_view(),
        None => view! {
            <button
                type="button"
                class=class
                disabled=move || disabled.get()
                data-ui-primitive="true"
                data-ui-kind="bottom-navigation-item"
                data-ui-variant=style.token()
                data-ui-selected=move || bool_token(active.get())
                data-ui-disabled=move || bool_token(disabled.get())
                on:click=handle_click
            >
                {content}
            </button>
        }
        .into_view(),
    }
}
