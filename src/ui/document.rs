//! Page chrome and HTML rendering helpers.

use leptos::prelude::*;

use crate::store::DEMO_STORE_ID;
use crate::ui::components::{MegaphoneIcon, StoreIcon};

/// Product name shown in the chrome and appended to page titles.
pub const APP_NAME: &str = "Hoptub";

/// Render a full document, doctype included.
pub fn render_page<F, V>(page: F) -> String
where
    F: FnOnce() -> V,
    V: IntoView,
{
    format!("<!DOCTYPE html>{}", render_fragment(page))
}

/// Render a view to an HTML fragment, as swapped in by HTMX.
pub fn render_fragment<F, V>(view: F) -> String
where
    F: FnOnce() -> V,
    V: IntoView,
{
    Owner::new().with(|| view().to_html())
}

/// Full page wrapper: head metadata, top bar and main region.
///
/// `title` becomes the browser tab title as `"{title} | Hoptub"`.
#[component]
pub fn Page(
    /// Page title.
    #[prop(into)]
    title: String,
    /// Page content.
    children: Children,
) -> impl IntoView {
    let full_title = format!("{title} | {APP_NAME}");

    view! {
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="description" content="Hoptub closet automation dashboard"/>

                <title>{full_title}</title>

                // Local scripts only (no CDN)
                <script src="/static/vendor/htmx-2.0.8.min.js"></script>
                <link rel="stylesheet" href="/static/app.css"/>
            </head>

            <body class="min-h-screen bg-background text-textPrimary antialiased">
                <div id="app-shell" class="flex flex-col min-h-screen">
                    <TopBar/>
                    <main id="app" class="flex-1 bg-backgroundDark py-6">
                        {children()}
                    </main>
                </div>
            </body>
        </html>
    }
}

/// Dashboard navigation bar.
#[component]
fn TopBar() -> impl IntoView {
    let store_href = format!("/stores/{DEMO_STORE_ID}/edit");

    view! {
        <nav class="sticky top-0 z-50 w-full bg-surfaceContainer shadow-sm">
            <div class="container mx-auto flex h-14 items-center justify-between px-4 md:px-6 max-w-5xl">
                <a href="/" class="font-semibold text-lg hover:opacity-80 transition-opacity">
                    {APP_NAME}
                </a>
                <div class="flex items-center gap-1" hx-boost="true">
                    <a href="/campaigns/create" class="flex items-center gap-2 px-3 py-2 rounded-xl text-sm text-textSecondary hover:text-textPrimary hover:bg-surface">
                        <MegaphoneIcon/>
                        "Campaigns"
                    </a>
                    <a href=store_href class="flex items-center gap-2 px-3 py-2 rounded-xl text-sm text-textSecondary hover:text-textPrimary hover:bg-surface">
                        <StoreIcon/>
                        "Stores"
                    </a>
                </div>
            </div>
        </nav>
    }
}
