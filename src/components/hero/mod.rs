//! Landing hero section: headline, CTA, and the card deck carousel.

mod card_deck;

pub use card_deck::CardDeck;

use leptos::prelude::*;

use crate::components::design_system::Button;
use crate::services::enrollment_state::use_enrollment_context;

fn rocket_icon() -> impl IntoView {
    view! {
        <svg
            width="48"
            height="48"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class="text-orange-500"
        >
            <path d="M4.5 16.5c-1.5 1.26-2 5-2 5s3.74-.5 5-2c.71-.84.7-2.13-.09-2.91a2.18 2.18 0 0 0-2.91-.09z" />
            <path d="m12 15-3-3a22 22 0 0 1 2-3.95A12.88 12.88 0 0 1 22 2c0 2.72-.78 7.5-6 11a22.35 22.35 0 0 1-4 2z" />
            <path d="M9 12H4s.55-3.03 2-4c1.62-1.08 5 0 5 0" />
            <path d="M12 15v5s3.03-.55 4-2c1.08-1.62 0-5 0-5" />
        </svg>
    }
}

/// The always-visible landing hero. Its CTA is the only entry point into the
/// enrollment funnel.
#[component]
pub fn HeroSection() -> impl IntoView {
    let ctx = use_enrollment_context();

    view! {
        <section class="relative min-h-screen w-full overflow-hidden bg-gradient-to-br from-slate-50 via-neutral-50 to-stone-50 py-20 px-4 md:py-32 md:px-8">
            <div class="mx-auto max-w-7xl">
                <div class="relative rounded-[3rem] bg-gradient-to-br from-stone-50 via-amber-50 to-orange-50 p-8 md:p-12 lg:p-16 shadow-lg shadow-slate-200/20">
                    <div class="grid gap-12 lg:grid-cols-2 lg:gap-16 lg:items-center">
                        <div class="space-y-8">
                            {rocket_icon()}
                            <div class="space-y-4">
                                <span class="block text-4xl font-bold text-slate-900 md:text-5xl lg:text-6xl">
                                    "Exclusively Curated Programs"
                                </span>
                                <span class="block text-4xl font-bold bg-gradient-to-r from-orange-500 to-orange-600 bg-clip-text text-transparent md:text-5xl lg:text-6xl">
                                    "India's #1"
                                </span>
                                <span class="block text-4xl font-bold text-slate-900 md:text-5xl lg:text-6xl">
                                    "Career Accelerator"
                                </span>
                            </div>
                            <p class="max-w-lg text-lg leading-relaxed text-gray-600 md:text-xl">
                                "Elevate your career trajectory with our meticulously designed programs that combine cutting-edge curriculum, expert mentorship, and real-world application."
                            </p>
                            <Button
                                class="py-3 px-8 text-lg"
                                on_click=move |_| ctx.open_modal()
                            >
                                "Start Your Journey"
                            </Button>
                        </div>
                        <div class="flex justify-center lg:justify-end lg:mt-16">
                            <CardDeck />
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
