use super::*;

const DEFAULT_LOADING_LABEL: &str = "Loading...";

fn placeholder_style(width: Option<&str>, height: Option<&str>) -> Option<String> {
    let declarations = [("width", width), ("height", height)]
        .into_iter()
        .filter_map(|(property, value)| {
            value
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(|value| format!("{property}: {value};"))
        })
        .collect::<Vec<_>>();
    if declarations.is_empty() {
        None
    } else {
        Some(declarations.join(" "))
    }
}

#[component]
/// Busy placeholder container announcing a loading state.
pub fn Skeleton(
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-skeleton", layout_class)
            role="status"
            aria-busy="true"
            data-ui-primitive="true"
            data-ui-kind="skeleton"
        >
            {children()}
            <span data-ui-slot="sr-label">
                {label.unwrap_or_else(|| DEFAULT_LOADING_LABEL.to_string())}
            </span>
        </div>
    }
}

#[component]
/// Placeholder text lines.
pub fn SkeletonText(
    #[prop(default = 1)] lines: usize,
    /// CSS width of each line, for example `"12rem"`. Full width when omitted.
    #[prop(optional, into)]
    width: Option<String>,
    /// CSS height of each line.
    #[prop(optional, into)]
    height: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let style = placeholder_style(width.as_deref(), height.as_deref());
    let lines = (0..lines.max(1))
        .map(|index| {
            view! {
                <div data-ui-slot="line" data-ui-index=index style=style.clone()></div>
            }
        })
        .collect_view();

    view! {
        <div
            class=merge_layout_class("ui-skeleton-text", layout_class)
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="skeleton-text"
        >
            {lines}
        </div>
    }
}

#[component]
/// Placeholder block for an image.
pub fn SkeletonImage(
    #[prop(optional, into)] width: Option<String>,
    #[prop(optional, into)] height: Option<String>,
    #[prop(default = true)] show_icon: bool,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-skeleton-media", layout_class)
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="skeleton-image"
            style=placeholder_style(width.as_deref(), height.as_deref())
        >
            {show_icon.then(|| view! { <span data-ui-slot="glyph" data-ui-glyph="image"></span> })}
        </div>
    }
}

#[component]
/// Placeholder block for a video.
pub fn SkeletonVideo(
    #[prop(optional, into)] width: Option<String>,
    #[prop(optional, into)] height: Option<String>,
    #[prop(default = true)] show_icon: bool,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-skeleton-media", layout_class)
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="skeleton-video"
            style=placeholder_style(width.as_deref(), height.as_deref())
        >
            {show_icon.then(|| view! { <span data-ui-slot="glyph" data-ui-glyph="video"></span> })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_style_skips_missing_and_blank_values() {
        assert_eq!(placeholder_style(None, None), None);
        assert_eq!(placeholder_style(Some("  "), None), None);
        assert_eq!(
            placeholder_style(Some("12rem"), None).as_deref(),
            Some("width: 12rem;")
        );
        assert_eq!(
            placeholder_style(Some("100%"), Some(" 0.5rem ")).as_deref(),
            Some("width: 100%; height: 0.5rem;")
        );
    }
}
