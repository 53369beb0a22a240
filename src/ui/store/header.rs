//! Store edit page header.

use leptos::prelude::*;

use crate::ui::components::ChevronRightIcon;

/// Breadcrumbs and heading of the store edit page.
#[component]
pub fn StoreEditHeader() -> impl IntoView {
    view! {
        <header data-region="header" class="space-y-2">
            <nav aria-label="breadcrumb" class="flex items-center gap-1 text-sm text-textSecondary">
                <a href="/" class="hover:text-textPrimary">"Dashboard"</a>
                <ChevronRightIcon/>
                <span>"Sales Channels"</span>
            </nav>
            <h1 class="text-3xl font-bold text-textPrimary">"Edit Store"</h1>
        </header>
    }
}
