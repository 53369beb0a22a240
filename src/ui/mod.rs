//! UI components and layouts.
//!
//! This module provides Leptos SSR components for rendering the dashboard.
//! Pages are rendered to strings with [`render_page`]; HTMX swaps use
//! [`render_fragment`].
//!
//! # Structure
//!
//! - [`document`]: Page chrome and rendering helpers
//! - [`components`]: Reusable UI components
//! - [`wizard`]: Campaign creation wizard views
//! - [`store`]: Store edit page
//! - [`home`]: Dashboard landing page

pub mod components;
pub mod document;
pub mod home;
pub mod store;
pub mod wizard;

pub use document::{render_fragment, render_page};
