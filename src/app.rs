use leptos::prelude::*;

use crate::components::course_detail::CourseDetail;
use crate::components::course_selection::CourseSelection;
use crate::components::enrollment_confirmation::EnrollmentConfirmation;
use crate::components::enrollment_modal::EnrollmentModal;
use crate::components::hero::HeroSection;
use crate::components::payment_gateway::MockPaymentGateway;
use crate::services::enrollment_state::{provide_enrollment_context, use_enrollment_context, Step};

#[component]
pub fn App() -> impl IntoView {
    // Single shared store for the whole funnel
    provide_enrollment_context();

    let ctx = use_enrollment_context();

    view! {
        <div class="min-h-screen">
            <HeroSection />
            {move || match ctx.current_step() {
                Step::LeadCapture => {
                    if ctx.is_open() {
                        view! { <EnrollmentModal /> }.into_any()
                    } else {
                        ().into_any()
                    }
                }
                Step::CourseSelection => view! { <CourseSelection /> }.into_any(),
                Step::CourseDetail => view! { <CourseDetail /> }.into_any(),
                Step::Confirmation => view! { <EnrollmentConfirmation /> }.into_any(),
                Step::Payment => view! { <MockPaymentGateway /> }.into_any(),
            }}
        </div>
    }
}
