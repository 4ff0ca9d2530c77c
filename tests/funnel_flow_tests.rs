//! End-to-end funnel walkthrough
//!
//! Drives the pure layers (store, lead validation, catalog, payment seam)
//! through the happy path a real user takes, plus the decline/retry and
//! abandonment branches.

use skillbridge_frontend::catalog::{find_course, program_name_or_id};
use skillbridge_frontend::services::enrollment_state::{EnrollmentState, Step};
use skillbridge_frontend::services::lead_form::{validate, LeadForm};
use skillbridge_frontend::services::payment::{
    DemoUpiGateway, PaymentAuthorizer, PaymentError, DEMO_UPI_ID,
};

fn valid_lead() -> LeadForm {
    LeadForm {
        full_name: "A B".into(),
        email: "a@b.com".into(),
        country_code: "+91".into(),
        mobile: "9999999999".into(),
        service: "career-launchpad".into(),
    }
}

#[test]
fn test_happy_path_to_payment_success() {
    let mut state = EnrollmentState::new();

    // CTA opens the lead-capture modal
    state.open_modal();
    assert!(state.is_open);
    assert_eq!(state.current_step, Step::LeadCapture);

    // lead form validates, details stored, advance
    let form = valid_lead();
    assert!(validate(&form).is_empty());
    state.set_user_details(form.into_details());
    state.set_step(Step::CourseSelection);
    assert_eq!(state.current_step, Step::CourseSelection);
    assert!(state.user_details.is_some());

    // course picked from the catalog
    let course = find_course("full-stack-dev").unwrap();
    state.set_selected_course(course);
    state.set_step(Step::CourseDetail);
    assert_eq!(
        state.selected_course.unwrap().name,
        "Full Stack Web Development"
    );

    // enroll
    state.set_step(Step::Confirmation);
    assert_eq!(state.current_step, Step::Confirmation);

    // the confirmation screen resolves the program name from the lead
    let details = state.user_details.as_ref().unwrap();
    assert_eq!(program_name_or_id(&details.service), "Career Launchpad");

    // proceed to payment
    state.set_step(Step::Payment);
    assert_eq!(state.current_step, Step::Payment);

    // demo UPI id authorizes and mints a receipt; the step never changes
    let receipt = DemoUpiGateway.authorize(DEMO_UPI_ID).unwrap();
    assert!(receipt.enrollment_id.starts_with("ENR"));
    assert_eq!(state.current_step, Step::Payment);
}

#[test]
fn test_declined_payment_keeps_state_and_allows_retry() {
    let mut state = EnrollmentState::new();
    state.open_modal();
    state.set_user_details(valid_lead().into_details());
    state.set_selected_course(find_course("full-stack-dev").unwrap());
    state.set_step(Step::Payment);

    let before = state.clone();
    for _ in 0..3 {
        assert_eq!(
            DemoUpiGateway.authorize("wrong@id").unwrap_err(),
            PaymentError::Declined
        );
    }
    assert_eq!(state, before, "declines must not touch the store");

    // a later correct attempt still succeeds
    assert!(DemoUpiGateway.authorize(DEMO_UPI_ID).is_ok());
}

#[test]
fn test_backward_navigation_from_progress_rail() {
    let mut state = EnrollmentState::new();
    state.open_modal();
    state.set_user_details(valid_lead().into_details());
    state.set_selected_course(find_course("full-stack-dev").unwrap());
    state.set_step(Step::Confirmation);

    // the rail only offers steps strictly before the current one
    let current = state.current_step;
    for step in Step::all() {
        if step.index() < current.index() {
            let mut jumped = state.clone();
            jumped.set_step(step);
            assert_eq!(jumped.current_step, step);
            // captured data survives a backward jump
            assert!(jumped.user_details.is_some());
            assert!(jumped.selected_course.is_some());
        }
    }
}

#[test]
fn test_abandonment_mid_funnel() {
    let mut state = EnrollmentState::new();
    state.open_modal();
    state.set_user_details(valid_lead().into_details());
    state.set_step(Step::CourseSelection);

    state.close_modal();
    assert_eq!(state, EnrollmentState::default());

    // re-opening starts a clean run
    state.open_modal();
    assert!(state.is_open);
    assert!(state.user_details.is_none());
}
