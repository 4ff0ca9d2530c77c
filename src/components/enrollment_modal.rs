//! Lead-Capture Modal (funnel step 1)
//!
//! Overlaid on the hero while the store is open. Validates the four lead
//! fields locally, simulates the submit round-trip, then stores the details
//! and advances the funnel.

use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::catalog::PROGRAMS;
use crate::components::design_system::{Input, LoadingSpinner, Select};
use crate::services::enrollment_state::{use_enrollment_context, Step};
use crate::services::lead_form::{validate, LeadForm, LeadFormErrors, COUNTRY_CODES};

const SUBMIT_DELAY_MS: u32 = 1000;

#[component]
fn FieldError(message: Signal<Option<&'static str>>) -> impl IntoView {
    view! {
        {move || {
            message
                .get()
                .map(|msg| view! { <p class="text-red-500 text-sm mt-1">{msg}</p> })
        }}
    }
}

#[component]
pub fn EnrollmentModal() -> impl IntoView {
    let ctx = use_enrollment_context();

    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let country_code = RwSignal::new(COUNTRY_CODES[0].0.to_string());
    let mobile = RwSignal::new(String::new());
    let service = RwSignal::new(String::new());

    let errors = RwSignal::new(LeadFormErrors::default());
    let is_submitting = RwSignal::new(false);

    // editing a field clears that field's error, leaving the others visible
    let clear_full_name = Callback::new(move |_: String| {
        errors.update(|e| e.full_name = None);
    });
    let clear_email = Callback::new(move |_: String| {
        errors.update(|e| e.email = None);
    });
    let clear_mobile = Callback::new(move |_: String| {
        errors.update(|e| e.mobile = None);
    });
    let clear_service = Callback::new(move |_: String| {
        errors.update(|e| e.service = None);
    });

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get() {
            return;
        }

        let form = LeadForm {
            full_name: full_name.get(),
            email: email.get(),
            country_code: country_code.get(),
            mobile: mobile.get(),
            service: service.get(),
        };

        let found = validate(&form);
        if !found.is_empty() {
            errors.set(found);
            return;
        }

        is_submitting.set(true);
        spawn_local(async move {
            TimeoutFuture::new(SUBMIT_DELAY_MS).await;
            log::info!("lead captured for service {}", form.service);
            ctx.set_user_details(form.into_details());
            ctx.set_step(Step::CourseSelection);
            is_submitting.set(false);
        });
    };

    view! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center bg-black/50 backdrop-blur-sm"
            on:click=move |_| ctx.close_modal()
        >
            <div
                class="relative w-full max-w-md mx-4 bg-white rounded-2xl shadow-2xl p-6"
                on:click=move |ev: ev::MouseEvent| ev.stop_propagation()
            >
                <div class="flex items-center mb-6">
                    <div class="w-8 h-8 bg-orange-100 rounded-full flex items-center justify-center mr-3">
                        <svg class="w-4 h-4 text-orange-500" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                            <path
                                stroke-linecap="round"
                                stroke-linejoin="round"
                                stroke-width="2"
                                d="M16 7a4 4 0 11-8 0 4 4 0 018 0zM12 14a7 7 0 00-7 7h14a7 7 0 00-7-7z"
                            />
                        </svg>
                    </div>
                    <h2 class="text-xl font-semibold text-gray-900">"Get Started"</h2>
                </div>

                <form class="space-y-4" on:submit=handle_submit>
                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1">"Full Name"</label>
                        <Input
                            value=full_name
                            placeholder="Enter your full name"
                            on_input=clear_full_name
                            error=Signal::derive(move || errors.with(|e| e.full_name.is_some()))
                        />
                        <FieldError message=Signal::derive(move || errors.with(|e| e.full_name)) />
                    </div>

                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1">"Email Address"</label>
                        <Input
                            value=email
                            r#type="email"
                            placeholder="Enter your email"
                            on_input=clear_email
                            error=Signal::derive(move || errors.with(|e| e.email.is_some()))
                        />
                        <FieldError message=Signal::derive(move || errors.with(|e| e.email)) />
                    </div>

                    <div class="grid grid-cols-3 gap-2">
                        <div>
                            <label class="block text-sm font-medium text-gray-700 mb-1">"Country"</label>
                            <Select value=country_code>
                                {COUNTRY_CODES
                                    .iter()
                                    .map(|(code, country)| {
                                        view! {
                                            <option value=*code>{format!("{code} {country}")}</option>
                                        }
                                    })
                                    .collect_view()}
                            </Select>
                        </div>
                        <div class="col-span-2">
                            <label class="block text-sm font-medium text-gray-700 mb-1">"Mobile Number"</label>
                            <Input
                                value=mobile
                                r#type="tel"
                                placeholder="Enter mobile number"
                                on_input=clear_mobile
                                error=Signal::derive(move || errors.with(|e| e.mobile.is_some()))
                            />
                            <FieldError message=Signal::derive(move || errors.with(|e| e.mobile)) />
                        </div>
                    </div>

                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1">"Choose a Service"</label>
                        <Select
                            value=service
                            on_change=clear_service
                            error=Signal::derive(move || errors.with(|e| e.service.is_some()))
                        >
                            <option value="">"Select a service"</option>
                            {PROGRAMS
                                .iter()
                                .map(|program| {
                                    view! { <option value=program.id>{program.name}</option> }
                                })
                                .collect_view()}
                        </Select>
                        <FieldError message=Signal::derive(move || errors.with(|e| e.service)) />
                    </div>

                    <button
                        type="submit"
                        disabled=move || is_submitting.get()
                        class="w-full bg-gradient-to-r from-orange-500 to-orange-600 text-white py-3 px-4 rounded-lg font-semibold shadow-lg disabled:opacity-50 disabled:cursor-not-allowed"
                    >
                        {move || {
                            if is_submitting.get() {
                                view! {
                                    <div class="flex items-center justify-center gap-3">
                                        <LoadingSpinner size="sm" />
                                        "Processing..."
                                    </div>
                                }
                                    .into_any()
                            } else {
                                view! { <span>"Continue"</span> }.into_any()
                            }
                        }}
                    </button>
                </form>
            </div>
        </div>
    }
}
