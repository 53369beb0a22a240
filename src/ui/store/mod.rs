//! Sales-channel store views.

mod edit_form;
mod edit_page;
mod header;

pub use edit_form::{FORM_ID, StoreEditForm, save_url};
pub use edit_page::{PAGE_TITLE, StoreEditPage, render_edit_form, render_edit_page};
pub use header::StoreEditHeader;
