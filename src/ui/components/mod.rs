//! Reusable UI components.
//!
//! This module provides a set of composable, accessible UI components
//! rendered via Leptos SSR.
//!
//! # Components
//!
//! - [`Button`], [`ButtonLink`]: Actions with variants and sizes
//! - [`Paper`]: Raised surface with an elevation level
//! - [`Container`]: Page-width wrapper
//! - [`TextField`], [`TextArea`]: Labelled form fields
//! - [`FormHelperText`]: Helper and error text
//! - [`icons`]: SVG icon components

mod button;
mod helper_text;
mod icons;
mod input;
mod paper;

pub use button::{Button, ButtonLink, ButtonSize, ButtonVariant};
pub use helper_text::FormHelperText;
pub use icons::*;
pub use input::{TextArea, TextField};
pub use paper::{Container, Paper, RAISED, RESTING};
