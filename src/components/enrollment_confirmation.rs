//! Enrollment Confirmation screen (funnel step 4)
//!
//! Review panel for the captured lead and the selected course. Requires both
//! to be present; renders nothing otherwise.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::catalog::program_name_or_id;
use crate::components::design_system::LoadingSpinner;
use crate::components::progress_indicator::ProgressIndicator;
use crate::services::enrollment_state::{use_enrollment_context, Step};

const PROCESSING_DELAY_MS: u32 = 1500;

#[component]
pub fn EnrollmentConfirmation() -> impl IntoView {
    let ctx = use_enrollment_context();

    let is_processing = RwSignal::new(false);

    move || {
        let (Some(details), Some(course)) = (ctx.user_details(), ctx.selected_course()) else {
            return ().into_any();
        };

        let handle_proceed = move |_| {
            if is_processing.get() {
                return;
            }
            is_processing.set(true);
            spawn_local(async move {
                TimeoutFuture::new(PROCESSING_DELAY_MS).await;
                is_processing.set(false);
                ctx.set_step(Step::Payment);
            });
        };

        let program_name = program_name_or_id(&details.service).to_string();

        view! {
            <div class="min-h-screen bg-gradient-to-br from-slate-50 via-neutral-50 to-stone-50 py-12 px-4">
                <div class="max-w-2xl mx-auto">
                    <ProgressIndicator current=Step::Confirmation />

                    <div class="bg-white rounded-2xl shadow-xl p-8 md:p-12">
                        <div class="text-center mb-8">
                            <div class="w-16 h-16 bg-green-100 rounded-full flex items-center justify-center mx-auto mb-4">
                                <svg class="w-8 h-8 text-green-600" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                    <path
                                        stroke-linecap="round"
                                        stroke-linejoin="round"
                                        stroke-width="2"
                                        d="M5 13l4 4L19 7"
                                    />
                                </svg>
                            </div>
                            <h1 class="text-2xl font-bold text-gray-900 mb-2">
                                "Confirm Your Enrollment"
                            </h1>
                            <p class="text-gray-600">
                                "Please review your details before proceeding to payment"
                            </p>
                        </div>

                        <div class="space-y-6 mb-8">
                            <div class="bg-gray-50 rounded-xl p-6">
                                <h3 class="text-lg font-semibold text-gray-900 mb-4">
                                    "Personal Details"
                                </h3>
                                <div class="grid md:grid-cols-2 gap-4">
                                    <div>
                                        <p class="text-sm text-gray-500">"Full Name"</p>
                                        <p class="font-medium text-gray-900">{details.full_name.clone()}</p>
                                    </div>
                                    <div>
                                        <p class="text-sm text-gray-500">"Email"</p>
                                        <p class="font-medium text-gray-900">{details.email.clone()}</p>
                                    </div>
                                    <div>
                                        <p class="text-sm text-gray-500">"Mobile"</p>
                                        <p class="font-medium text-gray-900">
                                            {format!("{} {}", details.country_code, details.mobile)}
                                        </p>
                                    </div>
                                    <div>
                                        <p class="text-sm text-gray-500">"Program"</p>
                                        <p class="font-medium text-gray-900">{program_name}</p>
                                    </div>
                                </div>
                            </div>

                            <div class="bg-gray-50 rounded-xl p-6">
                                <h3 class="text-lg font-semibold text-gray-900 mb-4">
                                    "Selected Course"
                                </h3>
                                <div class="flex justify-between items-start">
                                    <div>
                                        <p class="font-medium text-gray-900">{course.name}</p>
                                        <p class="text-sm text-gray-600 mt-1">{course.description}</p>
                                        <p class="text-sm text-gray-500 mt-2">
                                            {format!("Duration: {}", course.duration)}
                                        </p>
                                    </div>
                                    <div class="text-right">
                                        <p class="text-2xl font-bold text-orange-600">{course.fee}</p>
                                    </div>
                                </div>
                            </div>
                        </div>

                        <button
                            type="button"
                            disabled=move || is_processing.get()
                            on:click=handle_proceed
                            class="w-full bg-gradient-to-r from-orange-500 to-orange-600 text-white py-4 px-8 rounded-xl font-semibold text-lg shadow-lg hover:shadow-xl transition-shadow disabled:opacity-50 disabled:cursor-not-allowed"
                        >
                            {move || {
                                if is_processing.get() {
                                    view! {
                                        <div class="flex items-center justify-center gap-3">
                                            <LoadingSpinner size="sm" />
                                            "Processing..."
                                        </div>
                                    }
                                        .into_any()
                                } else {
                                    view! { <span>"Proceed to Payment"</span> }.into_any()
                                }
                            }}
                        </button>
                    </div>
                </div>
            </div>
        }
        .into_any()
    }
}
