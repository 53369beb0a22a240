//! Helper and error text under form controls.

use leptos::prelude::*;

/// Small text attached to a form control.
///
/// Error text is announced to assistive technology.
#[component]
pub fn FormHelperText(
    /// Render as an error message.
    #[prop(default = false)]
    error: bool,
    /// Text content.
    children: Children,
) -> impl IntoView {
    let (classes, role) = if error {
        ("text-xs text-danger", "alert")
    } else {
        ("text-xs text-textMuted", "note")
    };

    view! {
        <p class=classes role=role>
            {children()}
        </p>
    }
}
