//! Browser mount smoke tests (wasm only).

#![cfg(target_arch = "wasm32")]

use leptos::prelude::*;
use skillbridge_frontend::components::hero::HeroSection;
use skillbridge_frontend::services::enrollment_state::provide_enrollment_context;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_hero_mounts_with_context() {
    // The hero reads the enrollment context at mount; this guards against a
    // missing-provider panic in the wiring.
    leptos::mount::mount_to_body(|| {
        provide_enrollment_context();
        view! { <HeroSection /> }
    });
}
