//! UI Components for the TranzitAI landing page.
//!
//! # Layout Components
//! - [`HeroSection`] - Headline, call-to-action buttons and preview image
//!
//! # Primitives
//! - [`Button`] - Generic button with size and variant options

mod button;
mod hero;

pub use button::*;
pub use hero::*;
