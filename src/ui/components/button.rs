//! Button component with variants and sizes.

use leptos::prelude::*;

/// Button visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Filled primary action.
    #[default]
    Primary,
    /// Filled accent action, used for wizard confirmation.
    Secondary,
    /// Borderless text button.
    Text,
    /// Outline button.
    Outline,
}

impl ButtonVariant {
    /// Get CSS classes for this variant.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Primary => "bg-primary text-white hover:bg-primaryMuted shadow-md",
            Self::Secondary => "bg-secondary text-white hover:bg-secondaryMuted shadow-md",
            Self::Text => "bg-transparent text-textPrimary hover:bg-surfaceVariant",
            Self::Outline => "bg-transparent border border-panelBorder text-textPrimary hover:bg-surfaceVariant",
        }
    }
}

/// Button footprint.
///
/// Form actions ("Update Store") use `Md`. Wizard navigation uses `Lg` so
/// "Previous" and "Next" stay easy targets at the foot of the step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Md => "h-10 px-5 text-sm",
            Self::Lg => "h-12 px-8 text-base min-w-[8rem]",
        }
    }
}

fn button_classes(variant: ButtonVariant, size: ButtonSize, class: &str) -> String {
    let base_classes = "inline-flex items-center justify-center rounded-xl font-medium \
                        transition-colors focus-visible:outline-none focus-visible:ring-2 \
                        focus-visible:ring-primary focus-visible:ring-offset-2 \
                        disabled:pointer-events-none disabled:opacity-50";

    format!(
        "{} {} {} {}",
        base_classes,
        variant.classes(),
        size.classes(),
        class
    )
}

/// Form button.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Button variant=ButtonVariant::Secondary size=ButtonSize::Lg button_type="submit">
///         "Next"
///     </Button>
/// }
/// ```
#[component]
pub fn Button(
    /// Button variant.
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// Button size.
    #[prop(default = ButtonSize::Md)]
    size: ButtonSize,
    /// Whether the button is disabled.
    #[prop(default = false)]
    disabled: bool,
    /// Button type attribute.
    #[prop(default = "button")]
    button_type: &'static str,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Button content.
    children: Children,
) -> impl IntoView {
    let classes = button_classes(variant, size, class);
    let aria_disabled = if disabled { "true" } else { "false" };

    view! {
        <button type=button_type class=classes disabled=disabled aria-disabled=aria_disabled>
            {children()}
        </button>
    }
}

/// Anchor styled as a [`Button`].
#[component]
pub fn ButtonLink(
    /// Link target.
    #[prop(into)]
    href: String,
    /// Button variant.
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// Button size.
    #[prop(default = ButtonSize::Md)]
    size: ButtonSize,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Link content.
    children: Children,
) -> impl IntoView {
    let classes = button_classes(variant, size, class);

    view! {
        <a href=href class=classes>
            {children()}
        </a>
    }
}
