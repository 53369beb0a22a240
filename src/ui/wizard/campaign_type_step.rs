//! Campaign-type selection step.

use std::sync::Arc;

use leptos::prelude::*;

use crate::campaign::CampaignCatalog;
use crate::ui::components::{
    ArrowLeftIcon, Button, ButtonLink, ButtonSize, ButtonVariant, Container, FormHelperText,
    Paper, RAISED, RESTING,
};
use crate::ui::document::{Page, render_fragment, render_page};
use crate::wizard::{CampaignTypeStep, StepState, SubmissionStatus};

/// DOM id of the step form; HTMX swaps this element.
pub const STEP_ID: &str = "campaign-type-step";

/// Endpoint selecting a campaign type.
pub fn select_url(wizard_id: &str) -> String {
    format!("/campaigns/create/{wizard_id}/type")
}

/// Endpoint confirming the step.
pub fn submit_url(wizard_id: &str) -> String {
    format!("/campaigns/create/{wizard_id}/submit")
}

fn status_name(status: &SubmissionStatus) -> &'static str {
    match status {
        SubmissionStatus::Idle => "idle",
        SubmissionStatus::Pending => "pending",
        SubmissionStatus::Failed(_) => "failed",
    }
}

/// The step form: one card per campaign type, an error region and the
/// navigation controls.
///
/// The "Previous" control is rendered only when `back_href` is set. The
/// "Next" control is disabled while a submission is pending.
#[component]
pub fn CampaignTypeStepView(
    /// Wizard the form belongs to.
    #[prop(into)]
    wizard_id: String,
    /// Options to choose from.
    catalog: Arc<CampaignCatalog>,
    /// Current selection and submission status.
    state: StepState,
    /// Target of the "Previous" control.
    back_href: Option<String>,
    /// Extra CSS classes for the form.
    class: Option<String>,
) -> impl IntoView {
    let pending = state.status().is_pending();
    let error = state.status().error().map(str::to_string);
    let status = status_name(state.status());
    let classes = format!("campaign-type-step {}", class.unwrap_or_default());
    let action = submit_url(&wizard_id);
    let target = format!("#{STEP_ID}");

    let cards = catalog
        .options()
        .iter()
        .map(|option| {
            let selected = option.value == state.selected();
            let elevation = if selected { RAISED } else { RESTING };
            let aria_checked = if selected { "true" } else { "false" };
            let value = option.value.clone();
            let data_option = option.value.clone();
            let title = option.title.clone();
            let description = option.description.clone();
            let select = select_url(&wizard_id);
            let target = target.clone();

            view! {
                <label class="block cursor-pointer" data-option=data_option>
                    <Paper elevation=elevation class="flex items-start p-4 mb-4">
                        <input
                            type="radio"
                            name="campaign_type"
                            value=value
                            checked=selected
                            aria-checked=aria_checked
                            class="mt-1 h-5 w-5 accent-primary"
                            hx-post=select
                            hx-trigger="change"
                            hx-target=target
                            hx-swap="outerHTML"
                        />
                        <div class="ml-4">
                            <h5 class="text-lg font-semibold mb-1">{title}</h5>
                            <p class="text-sm text-textPrimary">{description}</p>
                        </div>
                    </Paper>
                </label>
            }
        })
        .collect_view();

    view! {
        <form
            id=STEP_ID
            class=classes
            method="post"
            action=action.clone()
            hx-post=action
            hx-target="this"
            hx-swap="outerHTML"
            hx-disabled-elt="find button[type='submit']"
            data-status=status
        >
            <h3 class="text-2xl font-bold text-textPrimary">
                "Please select Poshmark campaign type"
            </h3>
            <div class="mt-2">
                <p class="text-textSecondary">
                    "Hoptub enables the following campaign types. Select one to configure your campaign."
                </p>
            </div>
            <div class="mt-4" role="radiogroup" aria-label="Campaign type">
                {cards}
            </div>
            {error.map(|message| view! {
                <div class="mt-4" id="campaign-type-error">
                    <FormHelperText error=true>{message}</FormHelperText>
                </div>
            })}
            <div class="mt-12 flex items-center">
                {back_href.map(|href| view! {
                    <ButtonLink href=href variant=ButtonVariant::Text size=ButtonSize::Lg>
                        <ArrowLeftIcon class="mr-2"/>
                        "Previous"
                    </ButtonLink>
                })}
                <div class="flex-grow"></div>
                <Button
                    variant=ButtonVariant::Secondary
                    size=ButtonSize::Lg
                    button_type="submit"
                    disabled=pending
                >
                    "Next"
                </Button>
            </div>
        </form>
    }
}

/// Full page hosting the campaign-type step.
#[component]
pub fn CreateCampaignPage(
    /// Wizard the page belongs to.
    #[prop(into)]
    wizard_id: String,
    /// Options to choose from.
    catalog: Arc<CampaignCatalog>,
    /// Current selection and submission status.
    state: StepState,
    /// Target of the "Previous" control.
    back_href: Option<String>,
    /// Extra CSS classes for the form.
    class: Option<String>,
) -> impl IntoView {
    view! {
        <Page title="Create Campaign">
            <Container constrained=true>
                <h1 class="text-3xl font-bold mb-6">"Create Campaign"</h1>
                <Paper class="p-6 md:p-8">
                    <CampaignTypeStepView
                        wizard_id=wizard_id
                        catalog=catalog
                        state=state
                        back_href=back_href
                        class=class
                    />
                </Paper>
            </Container>
        </Page>
    }
}

/// Render the step form alone, for HTMX swaps.
pub fn render_step(step: &CampaignTypeStep, wizard_id: &str, state: StepState) -> String {
    let wizard_id = wizard_id.to_string();
    let catalog = Arc::clone(step.catalog());
    let back_href = step.navigation().back.as_ref().map(|b| b.resolve(&wizard_id));
    let class = step.class().map(str::to_string);
    render_fragment(move || {
        view! {
            <CampaignTypeStepView
                wizard_id=wizard_id
                catalog=catalog
                state=state
                back_href=back_href
                class=class
            />
        }
    })
}

/// Render the full create-campaign page.
pub fn render_create_page(step: &CampaignTypeStep, wizard_id: &str, state: StepState) -> String {
    let wizard_id = wizard_id.to_string();
    let catalog = Arc::clone(step.catalog());
    let back_href = step.navigation().back.as_ref().map(|b| b.resolve(&wizard_id));
    let class = step.class().map(str::to_string);
    render_page(move || {
        view! {
            <CreateCampaignPage
                wizard_id=wizard_id
                catalog=catalog
                state=state
                back_href=back_href
                class=class
            />
        }
    })
}
