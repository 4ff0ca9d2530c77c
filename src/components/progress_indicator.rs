//! Funnel Progress Indicator
//!
//! Numbered rail shown on steps 2-5. Completed steps are clickable and jump
//! backward through the store; the current and future steps are inert, so a
//! forward jump is impossible from here.

use leptos::prelude::*;

use crate::services::enrollment_state::{use_enrollment_context, Step};

/// Checkmark icon SVG
fn check_icon() -> impl IntoView {
    view! {
        <svg class="w-4 h-4" fill="none" stroke="currentColor" viewBox="0 0 24 24">
            <path
                stroke-linecap="round"
                stroke-linejoin="round"
                stroke-width="2"
                d="M5 13l4 4L19 7"
            />
        </svg>
    }
}

#[component]
fn StepDot(step: Step, current: Step) -> impl IntoView {
    let ctx = use_enrollment_context();

    let is_completed = step.index() < current.index();
    let is_current = step == current;

    let circle_class = if is_completed {
        "bg-green-500 text-white cursor-pointer hover:bg-green-600"
    } else if is_current {
        "bg-orange-500 text-white"
    } else {
        "bg-gray-300 text-gray-600"
    };

    let label_class = if is_current {
        "font-semibold text-orange-600"
    } else {
        "text-gray-600"
    };

    let handle_click = move |_| {
        if is_completed {
            ctx.set_step(step);
        }
    };

    view! {
        <button
            type="button"
            class="flex items-center"
            disabled=!is_completed
            on:click=handle_click
        >
            <div class=format!(
                "w-8 h-8 rounded-full flex items-center justify-center text-sm font-semibold transition-all {circle_class}",
            )>
                {if is_completed {
                    check_icon().into_any()
                } else {
                    view! { <span>{step.number()}</span> }.into_any()
                }}
            </div>
            <span class=format!("ml-2 text-sm {label_class}")>{step.label()}</span>
        </button>
    }
}

/// Progress rail over all five funnel steps.
#[component]
pub fn ProgressIndicator(
    /// The step the rendering screen belongs to
    current: Step,
) -> impl IntoView {
    let steps = Step::all();

    view! {
        <div class="flex items-center justify-center mb-12">
            <div class="flex items-center space-x-4">
                {steps
                    .iter()
                    .enumerate()
                    .map(|(i, step)| {
                        let step = *step;
                        let connector = (i > 0)
                            .then(|| {
                                let done = step.index() <= current.index();
                                view! {
                                    <div class=format!(
                                        "w-8 h-0.5 {}",
                                        if done { "bg-green-500" } else { "bg-gray-300" },
                                    )></div>
                                }
                            });
                        view! {
                            {connector}
                            <StepDot step=step current=current />
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
