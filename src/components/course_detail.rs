//! Course Detail screen (funnel step 3)
//!
//! Renders nothing when no course has been selected; that is the funnel's
//! whole error-handling policy for malformed navigation state.

use leptos::prelude::*;

use crate::components::design_system::Button;
use crate::components::progress_indicator::ProgressIndicator;
use crate::services::enrollment_state::{use_enrollment_context, Step};

const OUTCOMES: &[&str] = &[
    "Master advanced concepts and techniques",
    "Gain hands-on experience with real projects",
    "Build a professional portfolio",
    "Network with industry experts",
    "Earn recognized certification",
];

#[component]
pub fn CourseDetail() -> impl IntoView {
    let ctx = use_enrollment_context();

    move || {
        let Some(course) = ctx.selected_course() else {
            return ().into_any();
        };

        let handle_enroll = move |_| ctx.set_step(Step::Confirmation);

        view! {
            <div class="min-h-screen bg-gradient-to-br from-slate-50 via-neutral-50 to-stone-50 py-12 px-4">
                <div class="max-w-4xl mx-auto">
                    <ProgressIndicator current=Step::CourseDetail />

                    <div class="bg-white rounded-2xl shadow-xl p-8 md:p-12">
                        <h1 class="text-3xl font-bold text-gray-900 mb-4">{course.name}</h1>
                        <p class="text-lg text-gray-600 mb-8">{course.description}</p>

                        <div class="grid md:grid-cols-2 gap-8 mb-8">
                            <div>
                                <h3 class="text-xl font-semibold text-gray-900 mb-4">
                                    "Course Overview"
                                </h3>
                                <p class="text-gray-600 leading-relaxed">
                                    "This comprehensive program is designed to provide you with cutting-edge skills and knowledge in your chosen field. Our expert instructors and industry partners ensure you receive practical, real-world training that prepares you for immediate success in your career."
                                </p>
                            </div>
                            <div>
                                <h3 class="text-xl font-semibold text-gray-900 mb-4">
                                    "Learning Outcomes"
                                </h3>
                                <ul class="text-gray-600 space-y-2">
                                    {OUTCOMES
                                        .iter()
                                        .map(|outcome| view! { <li>{format!("• {outcome}")}</li> })
                                        .collect_view()}
                                </ul>
                            </div>
                        </div>

                        <div class="bg-gray-50 rounded-xl p-6 mb-8">
                            <div class="grid md:grid-cols-2 gap-6">
                                <div>
                                    <p class="text-sm text-gray-500">"Duration"</p>
                                    <p class="font-semibold text-gray-900">{course.duration}</p>
                                </div>
                                <div>
                                    <p class="text-sm text-gray-500">"Fee"</p>
                                    <p class="font-semibold text-gray-900">{course.fee}</p>
                                </div>
                            </div>
                        </div>

                        <div class="text-center">
                            <Button class="py-4 px-8 text-lg" on_click=handle_enroll>
                                "Enroll Now"
                            </Button>
                        </div>
                    </div>
                </div>
            </div>
        }
        .into_any()
    }
}
