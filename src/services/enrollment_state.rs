//! Enrollment Funnel State Management
//!
//! Provides reactive state management for the five-step enrollment funnel.
//! Uses Leptos signals and context for component communication.
//!
//! # Architecture
//! - `Step` - tagged variant for the funnel position
//! - `EnrollmentState` - plain state container with the mutator contract
//! - `EnrollmentContext` - reactive wrapper shared through the component tree
//! - Context provider pattern for component tree access

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::catalog::{Course, Program};

// ============================================================================
// Types
// ============================================================================

/// Funnel step. Screens are dispatched by exhaustive match over this enum,
/// so an unrepresented step value cannot exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    #[default]
    LeadCapture,
    CourseSelection,
    CourseDetail,
    Confirmation,
    Payment,
}

impl Step {
    /// Label shown in the progress indicator.
    pub fn label(&self) -> &'static str {
        match self {
            Step::LeadCapture => "Details",
            Step::CourseSelection => "Programs & Courses",
            Step::CourseDetail => "Details",
            Step::Confirmation => "Enrollment",
            Step::Payment => "Payment",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Step::LeadCapture => 0,
            Step::CourseSelection => 1,
            Step::CourseDetail => 2,
            Step::Confirmation => 3,
            Step::Payment => 4,
        }
    }

    /// One-based step number shown to the user.
    pub fn number(&self) -> usize {
        self.index() + 1
    }

    pub fn all() -> Vec<Self> {
        vec![
            Step::LeadCapture,
            Step::CourseSelection,
            Step::CourseDetail,
            Step::Confirmation,
            Step::Payment,
        ]
    }

    pub fn next(&self) -> Option<Self> {
        match self {
            Step::LeadCapture => Some(Step::CourseSelection),
            Step::CourseSelection => Some(Step::CourseDetail),
            Step::CourseDetail => Some(Step::Confirmation),
            Step::Confirmation => Some(Step::Payment),
            Step::Payment => None,
        }
    }

    pub fn previous(&self) -> Option<Self> {
        match self {
            Step::LeadCapture => None,
            Step::CourseSelection => Some(Step::LeadCapture),
            Step::CourseDetail => Some(Step::CourseSelection),
            Step::Confirmation => Some(Step::CourseDetail),
            Step::Payment => Some(Step::Confirmation),
        }
    }
}

/// Lead captured by the first screen, immutable for the rest of the run.
/// `service` holds a program id and is resolved by catalog lookup at render
/// time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDetails {
    pub full_name: String,
    pub email: String,
    pub country_code: String,
    pub mobile: String,
    pub service: String,
}

/// The funnel state. One instance per page session, only ever mutated through
/// the methods below; screens never write fields directly.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EnrollmentState {
    pub is_open: bool,
    pub current_step: Step,
    pub user_details: Option<UserDetails>,
    pub active_program: Option<&'static Program>,
    pub selected_course: Option<&'static Course>,
}

impl EnrollmentState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the lead-capture modal at step one. Deliberately does not clear
    /// data captured by a previous run; the only reachable path back here is
    /// `close_modal`, which does.
    pub fn open_modal(&mut self) {
        self.is_open = true;
        self.current_step = Step::LeadCapture;
    }

    /// Abandonment/reset path: back to the initial state, discarding
    /// everything captured so far. Callable from any step.
    pub fn close_modal(&mut self) {
        *self = Self::default();
    }

    /// Set the current step. Ordering discipline (no skipping ahead of the
    /// captured data) is a caller contract; screens missing their upstream
    /// data render nothing.
    pub fn set_step(&mut self, step: Step) {
        self.current_step = step;
    }

    pub fn set_user_details(&mut self, details: UserDetails) {
        self.user_details = Some(details);
    }

    pub fn set_active_program(&mut self, program: &'static Program) {
        self.active_program = Some(program);
    }

    pub fn set_selected_course(&mut self, course: &'static Course) {
        self.selected_course = Some(course);
    }
}

// ============================================================================
// Enrollment Context - Reactive State Management
// ============================================================================

/// Reactive handle to the enrollment state, shared via context. Cheap to
/// copy into event handlers; all mutation goes through the state's own
/// mutator methods.
#[derive(Clone, Copy)]
pub struct EnrollmentContext {
    state: RwSignal<EnrollmentState>,
}

impl EnrollmentContext {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(EnrollmentState::new()),
        }
    }

    // ---- reads -------------------------------------------------------

    pub fn is_open(&self) -> bool {
        self.state.with(|s| s.is_open)
    }

    pub fn current_step(&self) -> Step {
        self.state.with(|s| s.current_step)
    }

    pub fn user_details(&self) -> Option<UserDetails> {
        self.state.with(|s| s.user_details.clone())
    }

    pub fn active_program(&self) -> Option<&'static Program> {
        self.state.with(|s| s.active_program)
    }

    pub fn selected_course(&self) -> Option<&'static Course> {
        self.state.with(|s| s.selected_course)
    }

    // ---- mutators ----------------------------------------------------

    pub fn open_modal(&self) {
        self.state.update(|s| s.open_modal());
    }

    pub fn close_modal(&self) {
        self.state.update(|s| s.close_modal());
    }

    pub fn set_step(&self, step: Step) {
        self.state.update(|s| s.set_step(step));
    }

    pub fn set_user_details(&self, details: UserDetails) {
        self.state.update(|s| s.set_user_details(details));
    }

    pub fn set_active_program(&self, program: &'static Program) {
        self.state.update(|s| s.set_active_program(program));
    }

    pub fn set_selected_course(&self, course: &'static Course) {
        self.state.update(|s| s.set_selected_course(course));
    }
}

impl Default for EnrollmentContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Provide the enrollment context to the component tree.
pub fn provide_enrollment_context() {
    provide_context(EnrollmentContext::new());
}

/// Use the enrollment context from anywhere in the tree. Panics when no
/// provider is installed above the caller; that is a wiring mistake, not a
/// runtime condition.
pub fn use_enrollment_context() -> EnrollmentContext {
    expect_context::<EnrollmentContext>()
}

/// Try to get the enrollment context (returns None if not provided).
pub fn try_use_enrollment_context() -> Option<EnrollmentContext> {
    use_context::<EnrollmentContext>()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_navigation() {
        assert_eq!(Step::LeadCapture.next(), Some(Step::CourseSelection));
        assert_eq!(Step::Payment.next(), None);
        assert_eq!(Step::LeadCapture.previous(), None);
        assert_eq!(Step::Payment.previous(), Some(Step::Confirmation));
    }

    #[test]
    fn test_step_numbers() {
        for (i, step) in Step::all().iter().enumerate() {
            assert_eq!(step.index(), i);
            assert_eq!(step.number(), i + 1);
        }
    }

    #[test]
    fn test_open_modal_keeps_prior_data() {
        let mut state = EnrollmentState::new();
        state.set_selected_course(&crate::catalog::PROGRAMS[1].courses[0]);
        state.open_modal();
        assert!(state.is_open);
        assert_eq!(state.current_step, Step::LeadCapture);
        assert!(state.selected_course.is_some());
    }

    #[test]
    fn test_close_modal_resets_everything() {
        let mut state = EnrollmentState::new();
        state.open_modal();
        state.set_user_details(UserDetails {
            full_name: "A B".into(),
            email: "a@b.com".into(),
            country_code: "+91".into(),
            mobile: "9999999999".into(),
            service: "career-launchpad".into(),
        });
        state.set_step(Step::Confirmation);
        state.close_modal();
        assert_eq!(state, EnrollmentState::default());
    }
}
