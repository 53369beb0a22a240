//! Store edit page layout.

use leptos::prelude::*;

use super::{StoreEditForm, StoreEditHeader};
use crate::store::{FieldError, StoreForm};
use crate::ui::components::Container;
use crate::ui::document::{Page, render_fragment, render_page};

/// Browser title of the store edit page.
pub const PAGE_TITLE: &str = "Edit Store";

/// Page wrapper, one header region and one form region.
#[component]
pub fn StoreEditPage(
    /// Store being edited.
    #[prop(into)]
    store_id: String,
    /// Current values of the store.
    values: StoreForm,
    /// Presence check failures from the last save.
    #[prop(default = Vec::new())]
    errors: Vec<FieldError>,
    /// Whether the last save succeeded.
    #[prop(default = false)]
    saved: bool,
) -> impl IntoView {
    view! {
        <Page title=PAGE_TITLE>
            <Container>
                <StoreEditHeader/>
            </Container>
            <div class="mt-6">
                <Container constrained=true>
                    <StoreEditForm store_id=store_id values=values errors=errors saved=saved/>
                </Container>
            </div>
        </Page>
    }
}

/// Render the full store edit page.
pub fn render_edit_page(
    store_id: &str,
    values: StoreForm,
    errors: Vec<FieldError>,
    saved: bool,
) -> String {
    let store_id = store_id.to_string();
    render_page(move || {
        view! { <StoreEditPage store_id=store_id values=values errors=errors saved=saved/> }
    })
}

/// Render the edit form alone, for HTMX swaps.
pub fn render_edit_form(
    store_id: &str,
    values: StoreForm,
    errors: Vec<FieldError>,
    saved: bool,
) -> String {
    let store_id = store_id.to_string();
    render_fragment(move || {
        view! { <StoreEditForm store_id=store_id values=values errors=errors saved=saved/> }
    })
}
