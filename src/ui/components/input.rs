//! Labelled form fields.

use leptos::prelude::*;

use super::FormHelperText;

const FIELD_CLASSES: &str = "w-full rounded-xl border bg-background px-3 py-2 text-sm \
                             text-textPrimary placeholder:text-textMuted \
                             focus-visible:outline-none focus-visible:ring-2 \
                             focus-visible:ring-primary disabled:cursor-not-allowed \
                             disabled:opacity-50";

/// Escape text for raw insertion as element content.
fn escape_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

fn border_for(has_error: bool) -> &'static str {
    if has_error {
        "border-danger"
    } else {
        "border-panelBorder"
    }
}

/// Single-line text field with label and helper text.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <TextField label="Store name" name="name" value=profile.name required=true error=None />
/// }
/// ```
#[component]
pub fn TextField(
    /// Visible label.
    label: &'static str,
    /// Input name attribute; also used as its id.
    name: &'static str,
    /// Current value.
    #[prop(into)]
    value: String,
    /// Whether the field is required.
    #[prop(default = false)]
    required: bool,
    /// Error message shown under the field.
    error: Option<String>,
) -> impl IntoView {
    let classes = format!("{} {}", FIELD_CLASSES, border_for(error.is_some()));
    let invalid = if error.is_some() { "true" } else { "false" };

    view! {
        <div class="space-y-1.5">
            <label for=name class="text-sm font-medium text-textSecondary">{label}</label>
            <input
                type="text"
                id=name
                name=name
                value=value
                required=required
                aria-invalid=invalid
                class=classes
            />
            {error.map(|message| view! { <FormHelperText error=true>{message}</FormHelperText> })}
        </div>
    }
}

/// Multi-line text field with label.
///
/// SSR writes textarea children verbatim, so the value is escaped here and
/// set as inner HTML.
#[component]
pub fn TextArea(
    /// Visible label.
    label: &'static str,
    /// Textarea name attribute; also used as its id.
    name: &'static str,
    /// Current value.
    #[prop(into)]
    value: String,
    /// Number of rows.
    #[prop(default = 4)]
    rows: u32,
) -> impl IntoView {
    let classes = format!("{} {} resize-none", FIELD_CLASSES, border_for(false));
    let content = escape_text(&value);

    view! {
        <div class="space-y-1.5">
            <label for=name class="text-sm font-medium text-textSecondary">{label}</label>
            <textarea id=name name=name rows=rows class=classes inner_html=content></textarea>
        </div>
    }
}
