//! Dashboard landing page.

use leptos::prelude::*;

use crate::store::DEMO_STORE_ID;
use crate::ui::components::{ButtonLink, ButtonVariant, Container, MegaphoneIcon, Paper, StoreIcon};
use crate::ui::document::{Page, render_page};

/// Landing page linking to the campaign wizard and the demo store.
#[component]
pub fn HomePage() -> impl IntoView {
    let store_href = format!("/stores/{DEMO_STORE_ID}/edit");

    view! {
        <Page title="Dashboard">
            <Container constrained=true>
                <h1 class="text-3xl font-bold mb-6">"Dashboard"</h1>
                <div class="grid gap-4 md:grid-cols-2">
                    <Paper class="p-6 space-y-4">
                        <MegaphoneIcon class="h-6 w-6 text-primary"/>
                        <h2 class="font-semibold text-lg">"Campaigns"</h2>
                        <p class="text-sm text-textMuted">
                            "Automate sharing, offers and follows for your closet."
                        </p>
                        <ButtonLink href="/campaigns/create" variant=ButtonVariant::Secondary>
                            "Create Campaign"
                        </ButtonLink>
                    </Paper>
                    <Paper class="p-6 space-y-4">
                        <StoreIcon class="h-6 w-6 text-primary"/>
                        <h2 class="font-semibold text-lg">"Sales Channels"</h2>
                        <p class="text-sm text-textMuted">
                            "Review the closet details Hoptub works with."
                        </p>
                        <ButtonLink href=store_href variant=ButtonVariant::Outline>
                            "Edit Store"
                        </ButtonLink>
                    </Paper>
                </div>
            </Container>
        </Page>
    }
}

/// Render the landing page.
pub fn render_home() -> String {
    render_page(|| view! { <HomePage/> })
}
