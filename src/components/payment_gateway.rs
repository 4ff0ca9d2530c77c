//! Mock Payment Gateway screen (funnel step 5)
//!
//! Terminal screen of the funnel. Authorization goes through the
//! `PaymentAuthorizer` seam; a decline surfaces a single retryable error and
//! never moves the step. Success swaps the screen-local view, again without
//! touching the step.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::design_system::LoadingSpinner;
use crate::components::progress_indicator::ProgressIndicator;
use crate::services::enrollment_state::{use_enrollment_context, Step};
use crate::services::payment::{DemoUpiGateway, PaymentAuthorizer, PaymentReceipt, DEMO_UPI_ID};

const PAYMENT_DELAY_MS: u32 = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PaymentStatus {
    Idle,
    Processing,
    Success,
}

#[component]
fn SuccessView(receipt: PaymentReceipt) -> impl IntoView {
    let ctx = use_enrollment_context();

    move || {
        let (Some(details), Some(course)) = (ctx.user_details(), ctx.selected_course()) else {
            return ().into_any();
        };
        let enrollment_id = receipt.enrollment_id.clone();

        view! {
            <div class="bg-white rounded-2xl shadow-xl p-8 md:p-12 text-center">
                <div class="w-20 h-20 bg-green-100 rounded-full flex items-center justify-center mx-auto mb-6">
                    <svg class="w-10 h-10 text-green-600" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path
                            stroke-linecap="round"
                            stroke-linejoin="round"
                            stroke-width="2"
                            d="M5 13l4 4L19 7"
                        />
                    </svg>
                </div>

                <h1 class="text-3xl font-bold text-gray-900 mb-4">"Payment Successful!"</h1>
                <p class="text-lg text-gray-600 mb-8">
                    "Your enrollment for "
                    <span class="font-semibold text-orange-600">{course.name}</span>
                    " has been confirmed."
                </p>

                <div class="bg-gray-50 rounded-xl p-6 mb-8">
                    <div class="text-sm text-gray-500 mb-2">"Enrollment ID"</div>
                    <div class="text-lg font-mono font-semibold text-gray-900">{enrollment_id}</div>
                </div>

                <div class="space-y-4">
                    <p class="text-gray-600">
                        "A confirmation email has been sent to "
                        <span class="font-medium">{details.email.clone()}</span>
                    </p>
                    <button
                        type="button"
                        class="w-full bg-gradient-to-r from-orange-500 to-orange-600 text-white py-4 px-8 rounded-xl font-semibold text-lg shadow-lg hover:shadow-xl transition-shadow"
                    >
                        "View Course Dashboard"
                    </button>
                </div>
            </div>
        }
        .into_any()
    }
}

#[component]
pub fn MockPaymentGateway() -> impl IntoView {
    let ctx = use_enrollment_context();

    let status = RwSignal::new(PaymentStatus::Idle);
    let upi_id = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let receipt = RwSignal::new(None::<PaymentReceipt>);

    let handle_payment = move |_| {
        if status.get() == PaymentStatus::Processing {
            return;
        }
        // the gateway is exact-match; only the emptiness check below trims
        match DemoUpiGateway.authorize(&upi_id.get()) {
            Err(err) => {
                log::warn!("payment declined: {err}");
                error.set(Some(err.to_string()));
            }
            Ok(paid) => {
                error.set(None);
                status.set(PaymentStatus::Processing);
                spawn_local(async move {
                    TimeoutFuture::new(PAYMENT_DELAY_MS).await;
                    receipt.set(Some(paid));
                    status.set(PaymentStatus::Success);
                });
            }
        }
    };

    move || {
        let (Some(_details), Some(course)) = (ctx.user_details(), ctx.selected_course()) else {
            return ().into_any();
        };

        if let (PaymentStatus::Success, Some(paid)) = (status.get(), receipt.get()) {
            return view! {
                <div class="min-h-screen bg-gradient-to-br from-slate-50 via-neutral-50 to-stone-50 py-12 px-4">
                    <div class="max-w-2xl mx-auto">
                        <ProgressIndicator current=Step::Payment />
                        <SuccessView receipt=paid />
                    </div>
                </div>
            }
            .into_any();
        }

        let pay_disabled = move || {
            status.get() == PaymentStatus::Processing || upi_id.with(|v| v.trim().is_empty())
        };

        view! {
            <div class="min-h-screen bg-gradient-to-br from-slate-50 via-neutral-50 to-stone-50 py-12 px-4">
                <div class="max-w-md mx-auto">
                    <ProgressIndicator current=Step::Payment />

                    <div class="bg-white rounded-2xl shadow-xl p-8">
                        <div class="text-center mb-8">
                            <div class="w-12 h-12 bg-orange-100 rounded-full flex items-center justify-center mx-auto mb-4">
                                <svg class="w-6 h-6 text-orange-600" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                    <path
                                        stroke-linecap="round"
                                        stroke-linejoin="round"
                                        stroke-width="2"
                                        d="M12 15v2m-6 4h12a2 2 0 002-2v-6a2 2 0 00-2-2H6a2 2 0 00-2 2v6a2 2 0 002 2zm10-10V7a4 4 0 00-8 0v4h8z"
                                    />
                                </svg>
                            </div>
                            <h1 class="text-2xl font-bold text-gray-900 mb-2">"Secure Payment"</h1>
                            <p class="text-gray-600">
                                {format!("Complete your enrollment for {}", course.name)}
                            </p>
                        </div>

                        <div class="space-y-6">
                            <div class="bg-gray-50 rounded-xl p-4">
                                <div class="flex justify-between items-center mb-2">
                                    <span class="text-sm font-medium text-gray-900">"Course"</span>
                                    <span class="text-sm text-gray-600">{course.name}</span>
                                </div>
                                <div class="flex justify-between items-center">
                                    <span class="text-sm font-medium text-gray-900">"Amount"</span>
                                    <span class="text-lg font-bold text-orange-600">{course.fee}</span>
                                </div>
                            </div>

                            <div>
                                <h3 class="text-lg font-semibold text-gray-900 mb-4">
                                    "Payment Method"
                                </h3>
                                <div class="space-y-3">
                                    <div class="flex items-center p-4 border-2 border-orange-200 bg-orange-50 rounded-lg">
                                        <div class="w-4 h-4 bg-orange-500 rounded-full mr-3"></div>
                                        <span class="font-medium text-gray-900">"UPI"</span>
                                    </div>
                                    <div class="flex items-center p-4 border border-gray-200 rounded-lg opacity-50 cursor-not-allowed">
                                        <div class="w-4 h-4 bg-gray-300 rounded-full mr-3"></div>
                                        <span class="text-gray-500">"Credit/Debit Card"</span>
                                    </div>
                                    <div class="flex items-center p-4 border border-gray-200 rounded-lg opacity-50 cursor-not-allowed">
                                        <div class="w-4 h-4 bg-gray-300 rounded-full mr-3"></div>
                                        <span class="text-gray-500">"Net Banking"</span>
                                    </div>
                                </div>
                            </div>

                            <div>
                                <label class="block text-sm font-medium text-gray-700 mb-2">
                                    "Enter UPI ID"
                                </label>
                                <input
                                    type="text"
                                    prop:value=move || upi_id.get()
                                    on:input=move |ev| upi_id.set(event_target_value(&ev))
                                    placeholder=DEMO_UPI_ID
                                    disabled=move || status.get() == PaymentStatus::Processing
                                    class=move || {
                                        format!(
                                            "w-full px-4 py-3 border rounded-lg focus:ring-2 focus:ring-orange-500 focus:border-orange-500 transition-colors {}",
                                            if error.with(|e| e.is_some()) {
                                                "border-red-300"
                                            } else {
                                                "border-gray-300"
                                            },
                                        )
                                    }
                                />
                                <p class="text-xs text-gray-500 mt-1">
                                    {format!("Use {DEMO_UPI_ID} for demo payment")}
                                </p>
                                {move || {
                                    error
                                        .get()
                                        .map(|msg| {
                                            view! { <p class="text-sm text-red-600 mt-1">{msg}</p> }
                                        })
                                }}
                            </div>

                            <button
                                type="button"
                                disabled=pay_disabled
                                on:click=handle_payment
                                class="w-full bg-gradient-to-r from-orange-500 to-orange-600 text-white py-4 px-6 rounded-lg font-semibold disabled:opacity-50 disabled:cursor-not-allowed"
                            >
                                {move || {
                                    if status.get() == PaymentStatus::Processing {
                                        view! {
                                            <div class="flex items-center justify-center gap-2">
                                                <LoadingSpinner size="sm" />
                                                "Processing payment..."
                                            </div>
                                        }
                                            .into_any()
                                    } else {
                                        view! { <span>{format!("Pay {}", course.fee)}</span> }
                                            .into_any()
                                    }
                                }}
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        }
        .into_any()
    }
}
