//! Raised surface components.

use leptos::prelude::*;

/// Elevation of a selected option card.
pub const RAISED: u8 = 10;
/// Elevation of a resting option card.
pub const RESTING: u8 = 1;

fn shadow_for(elevation: u8) -> &'static str {
    match elevation {
        0 => "shadow-none",
        1..=2 => "shadow-sm",
        3..=8 => "shadow-md",
        _ => "shadow-xl ring-2 ring-primary",
    }
}

/// Surface with a shadow proportional to its elevation.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Paper elevation=RAISED class="p-4">
///         <p>"Selected"</p>
///     </Paper>
/// }
/// ```
#[component]
pub fn Paper(
    /// Elevation level; higher draws a deeper shadow.
    #[prop(default = RESTING)]
    elevation: u8,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Paper content.
    children: Children,
) -> impl IntoView {
    let classes = format!(
        "rounded-2xl bg-surface text-textPrimary transition-shadow {} {}",
        shadow_for(elevation),
        class
    );

    view! {
        <div class=classes data-elevation=elevation.to_string()>
            {children()}
        </div>
    }
}

/// Page-width container.
#[component]
pub fn Container(
    /// Constrain to the large breakpoint instead of the full width.
    #[prop(default = false)]
    constrained: bool,
    /// Container content.
    children: Children,
) -> impl IntoView {
    let classes = if constrained {
        "container mx-auto px-4 md:px-6 max-w-5xl"
    } else {
        "w-full px-4 md:px-6"
    };

    view! {
        <div class=classes>
            {children()}
        </div>
    }
}
