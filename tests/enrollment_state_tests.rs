//! Enrollment store contract tests
//!
//! Exercises the mutator operations of the pure state container: setter
//! identity, the full reset on close, and the deliberate non-reset on open.

use skillbridge_frontend::catalog::{find_course, find_program};
use skillbridge_frontend::services::enrollment_state::{EnrollmentState, Step, UserDetails};

fn sample_details() -> UserDetails {
    UserDetails {
        full_name: "A B".into(),
        email: "a@b.com".into(),
        country_code: "+91".into(),
        mobile: "9999999999".into(),
        service: "career-launchpad".into(),
    }
}

#[test]
fn test_initial_state() {
    let state = EnrollmentState::new();
    assert!(!state.is_open);
    assert_eq!(state.current_step, Step::LeadCapture);
    assert!(state.user_details.is_none());
    assert!(state.active_program.is_none());
    assert!(state.selected_course.is_none());
}

#[test]
fn test_set_step_identity_for_every_step() {
    let mut state = EnrollmentState::new();
    for step in Step::all() {
        state.set_step(step);
        assert_eq!(state.current_step, step);
        // setting again is a no-op change
        state.set_step(step);
        assert_eq!(state.current_step, step);
    }
}

#[test]
fn test_open_modal_shows_step_one() {
    let mut state = EnrollmentState::new();
    state.set_step(Step::Payment);
    state.open_modal();
    assert!(state.is_open);
    assert_eq!(state.current_step, Step::LeadCapture);
}

#[test]
fn test_open_modal_keeps_prior_run_data() {
    let mut state = EnrollmentState::new();
    state.set_user_details(sample_details());
    state.set_selected_course(find_course("full-stack-dev").unwrap());
    state.open_modal();
    // documented as-is: a fresh open does not clear a previous run
    assert!(state.user_details.is_some());
    assert!(state.selected_course.is_some());
}

#[test]
fn test_close_modal_resets_from_any_step() {
    for step in Step::all() {
        let mut state = EnrollmentState::new();
        state.open_modal();
        state.set_user_details(sample_details());
        state.set_active_program(find_program("career-launchpad").unwrap());
        state.set_selected_course(find_course("full-stack-dev").unwrap());
        state.set_step(step);

        state.close_modal();
        assert_eq!(state, EnrollmentState::default(), "after close from {step:?}");
    }
}

#[test]
fn test_setters_overwrite() {
    let mut state = EnrollmentState::new();
    state.set_selected_course(find_course("full-stack-dev").unwrap());
    state.set_selected_course(find_course("ui-ux-design").unwrap());
    assert_eq!(state.selected_course.unwrap().id, "ui-ux-design");

    let mut details = sample_details();
    state.set_user_details(details.clone());
    details.email = "b@c.com".into();
    state.set_user_details(details.clone());
    assert_eq!(state.user_details.unwrap().email, "b@c.com");
}

#[test]
fn test_setters_do_not_touch_step() {
    let mut state = EnrollmentState::new();
    state.set_step(Step::CourseSelection);
    state.set_active_program(find_program("study-abroad").unwrap());
    state.set_selected_course(find_course("ms-ai").unwrap());
    state.set_user_details(sample_details());
    assert_eq!(state.current_step, Step::CourseSelection);
}

#[test]
fn test_step_ordering_is_linear() {
    let steps = Step::all();
    assert_eq!(steps.len(), 5);
    for window in steps.windows(2) {
        assert_eq!(window[0].next(), Some(window[1]));
        assert_eq!(window[1].previous(), Some(window[0]));
    }
    assert_eq!(steps.first().unwrap().previous(), None);
    assert_eq!(steps.last().unwrap().next(), None);
}
