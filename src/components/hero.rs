//! Hero section component
//!
//! Headline, subheading, the two call-to-action buttons and the
//! dashboard preview image. The preview image wrapper carries a
//! `scrolled` class while the page is scrolled past
//! [`SCROLL_THRESHOLD`](crate::SCROLL_THRESHOLD).

use leptos::*;

use crate::components::{Button, ButtonSize, ButtonVariant};
use crate::{
    DASHBOARD_PATH, HERO_IMAGE_HEIGHT, HERO_IMAGE_SRC, HERO_IMAGE_WIDTH, SCROLL_THRESHOLD,
};

/// Whether a vertical scroll offset counts as "scrolled" for the hero image.
///
/// Strictly greater-than: an offset of exactly [`SCROLL_THRESHOLD`] is
/// still the resting state.
pub fn past_threshold(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD
}

#[component]
pub fn HeroSection() -> impl IntoView {
    // Recomputed from the current offset on every scroll event
    let (scrolled, set_scrolled) = create_signal(false);

    // A missing window or a failed scroll_y read leaves the flag untouched
    let handle = window_event_listener(ev::scroll, move |_| {
        if let Some(window) = web_sys::window() {
            if let Ok(offset) = window.scroll_y() {
                set_scrolled.set(past_threshold(offset));
            }
        }
    });
    on_cleanup(move || handle.remove());

    view! {
        <section class="hero">
            <div class="hero-heading">
                <h1 class="gradient-title">"TRANZITAI"</h1>
                <h2 class="gradient-title">"AI POWERED CAREER ASSISTANT"</h2>
            </div>

            <p class="subtitle">
                "Your AI-powered career assistant for resumes, cover letters, and interview preparation."
            </p>

            <div class="hero-actions">
                <a href=DASHBOARD_PATH>
                    <Button size=ButtonSize::Large variant=ButtonVariant::Primary>
                        "Get Started"
                    </Button>
                </a>
                <a href=DASHBOARD_PATH target="_blank">
                    <Button size=ButtonSize::Large variant=ButtonVariant::Outline>
                        "Watch Demo"
                    </Button>
                </a>
            </div>

            <div class="hero-image-wrapper">
                <div class="hero-image" class:scrolled=move || scrolled.get()>
                    <img
                        src=HERO_IMAGE_SRC
                        width=HERO_IMAGE_WIDTH
                        height=HERO_IMAGE_HEIGHT
                        alt="Dashboard Preview"
                        class="hero-image-img"
                        loading="eager"
                        fetchpriority="high"
                    />
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_strictly_greater_than() {
        assert!(!past_threshold(0.0));
        assert!(!past_threshold(100.0));
        assert!(past_threshold(101.0));
        assert!(past_threshold(250.0));
    }

    #[test]
    fn test_handler_is_idempotent() {
        // Same offset twice yields the same flag both times
        assert!(past_threshold(150.0));
        assert!(past_threshold(150.0));
        assert!(!past_threshold(50.0));
        assert!(!past_threshold(50.0));
    }

    /// The scroll flag wiring: state is always recomputed from the
    /// current offset, never toggled incrementally.
    #[test]
    fn test_scroll_flag_round_trip() {
        let runtime = create_runtime();

        let (scrolled, set_scrolled) = create_signal(false);
        let observe = move |offset: f64| set_scrolled.set(past_threshold(offset));

        assert!(!scrolled.get_untracked());

        observe(150.0);
        assert!(scrolled.get_untracked());

        // Re-observing the same offset does not flicker
        observe(150.0);
        assert!(scrolled.get_untracked());

        // Back below the threshold: same state as before the cycle
        observe(0.0);
        assert!(!scrolled.get_untracked());

        runtime.dispose();
    }
}
