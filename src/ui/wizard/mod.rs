//! Campaign wizard views.

mod campaign_type_step;

pub use campaign_type_step::{
    CampaignTypeStepView, CreateCampaignPage, STEP_ID, render_create_page, render_step, select_url,
    submit_url,
};
