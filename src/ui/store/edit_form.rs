//! Store edit form.

use leptos::prelude::*;

use crate::store::{FieldError, StoreForm};
use crate::ui::components::{
    Button, ButtonSize, ButtonVariant, CheckIcon, FormHelperText, Paper, TextArea, TextField,
};

/// DOM id of the form; HTMX swaps this element.
pub const FORM_ID: &str = "store-edit-form";

/// Endpoint saving a store.
pub fn save_url(store_id: &str) -> String {
    format!("/stores/{store_id}")
}

/// Editable store fields with per-field errors and a save notice.
#[component]
pub fn StoreEditForm(
    /// Store being edited.
    #[prop(into)]
    store_id: String,
    /// Values to show.
    values: StoreForm,
    /// Presence check failures from the last save.
    #[prop(default = Vec::new())]
    errors: Vec<FieldError>,
    /// Whether the last save succeeded.
    #[prop(default = false)]
    saved: bool,
) -> impl IntoView {
    let action = save_url(&store_id);
    let name_error = StoreForm::error_for(&errors, "name").map(str::to_string);
    let username_error = StoreForm::error_for(&errors, "username").map(str::to_string);

    view! {
        <form
            id=FORM_ID
            data-region="form"
            method="post"
            action=action.clone()
            hx-post=action
            hx-target="this"
            hx-swap="outerHTML"
            hx-disabled-elt="find button[type='submit']"
        >
            <Paper class="p-6 space-y-6">
                <div class="grid gap-6 md:grid-cols-2">
                    <TextField
                        label="Store name"
                        name="name"
                        value=values.name
                        required=true
                        error=name_error
                    />
                    <TextField
                        label="Poshmark username"
                        name="username"
                        value=values.username
                        required=true
                        error=username_error
                    />
                </div>
                <TextArea label="Description" name="description" value=values.description/>
                {saved.then(|| view! {
                    <div class="flex items-center gap-2 text-success" id="store-saved">
                        <CheckIcon/>
                        <FormHelperText>"Store updated"</FormHelperText>
                    </div>
                })}
                <div class="flex justify-end">
                    <Button variant=ButtonVariant::Secondary size=ButtonSize::Md button_type="submit">
                        "Update Store"
                    </Button>
                </div>
            </Paper>
        </form>
    }
}
