//! TranzitAI - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend rendering the TranzitAI marketing landing page.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Home                                                        │
//! │  └── HeroSection (headline, call-to-actions, preview image) │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Hardcoded application constants
//! - [`components`] - UI components (HeroSection, Button)

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod components;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::*;
pub use components::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 {} - Starting Leptos App", APP_NAME);

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="TranzitAI — AI Powered Career Assistant"/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=Home/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn Home() -> impl IntoView {
    view! {
        <div class="container">
            <HeroSection/>
        </div>
    }
}
