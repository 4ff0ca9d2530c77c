//! Course Selection screen (funnel step 2)
//!
//! Program tabs over the static catalog; choosing a course stores it and
//! advances to the detail screen. The active program lives in the store so
//! the rest of the funnel can see what was being browsed.

use leptos::prelude::*;

use crate::catalog::{Course, PROGRAMS};
use crate::components::progress_indicator::ProgressIndicator;
use crate::services::enrollment_state::{use_enrollment_context, Step};

const ACCENT_COLORS: &[&str] = &[
    "from-blue-400 to-blue-600",
    "from-green-400 to-green-600",
    "from-purple-400 to-purple-600",
    "from-pink-400 to-pink-600",
    "from-indigo-400 to-indigo-600",
];

#[component]
fn CourseCard(course: &'static Course, accent: &'static str) -> impl IntoView {
    let ctx = use_enrollment_context();

    let handle_select = move |_| {
        ctx.set_selected_course(course);
        ctx.set_step(Step::CourseDetail);
    };

    view! {
        <div
            class="group relative bg-gradient-to-r from-white to-gray-50 border border-gray-100 rounded-lg p-5 cursor-pointer overflow-hidden hover:shadow-lg transition-shadow"
            on:click=handle_select
        >
            <div class="flex items-center">
                <div class=format!(
                    "w-1 h-12 bg-gradient-to-b {accent} rounded-full mr-4 group-hover:h-16 transition-all duration-300",
                )></div>
                <div class="flex-1">
                    <h3 class="text-lg font-semibold text-gray-900 group-hover:text-orange-600 transition-colors mb-1">
                        {course.name}
                    </h3>
                    <p class="text-sm text-gray-600 leading-relaxed mb-3">{course.description}</p>
                    <div class="flex items-center space-x-6 text-xs text-gray-500">
                        <span>{course.duration}</span>
                        <span>{course.fee}</span>
                    </div>
                </div>
                <div class="ml-4 text-gray-400 group-hover:text-orange-500">
                    <svg class="w-6 h-6" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path
                            stroke-linecap="round"
                            stroke-linejoin="round"
                            stroke-width="2"
                            d="M9 5l7 7-7 7"
                        />
                    </svg>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn CourseSelection() -> impl IntoView {
    let ctx = use_enrollment_context();

    let active_index = RwSignal::new(0usize);

    // keep the browsed program in the store
    Effect::new(move |_| {
        ctx.set_active_program(&PROGRAMS[active_index.get()]);
    });

    view! {
        <div class="min-h-screen bg-gradient-to-br from-slate-50 via-neutral-50 to-stone-50 py-12 px-4">
            <div class="max-w-7xl mx-auto">
                <ProgressIndicator current=Step::CourseSelection />

                <div class="text-center mb-12">
                    <h1 class="text-3xl font-bold text-gray-900 mb-4">"Choose Your Program"</h1>
                    <p class="text-lg text-gray-600">
                        "Select the program that best fits your career goals"
                    </p>
                </div>

                <div class="flex flex-col items-center mb-8">
                    <div class="flex space-x-1 bg-gray-100 rounded-lg p-1 mb-4">
                        {PROGRAMS
                            .iter()
                            .enumerate()
                            .map(|(i, program)| {
                                let tab_class = move || {
                                    if active_index.get() == i {
                                        "px-6 py-3 rounded-md text-sm font-medium transition-colors bg-white text-orange-600 shadow-sm"
                                    } else {
                                        "px-6 py-3 rounded-md text-sm font-medium transition-colors text-gray-600 hover:text-gray-900"
                                    }
                                };
                                view! {
                                    <button
                                        type="button"
                                        class=tab_class
                                        on:click=move |_| active_index.set(i)
                                    >
                                        {program.name}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="w-full max-w-4xl h-0.5 bg-orange-500"></div>
                </div>

                {move || {
                    let Some(program) = ctx.active_program() else {
                        return ().into_any();
                    };
                    view! {
                        <div class="w-full max-w-4xl mx-auto px-4">
                            <div class="text-center mb-8">
                                <h2 class="text-2xl font-semibold text-gray-900 mb-2">
                                    {format!("{} Courses", program.name)}
                                </h2>
                                <p class="text-gray-600">
                                    "Choose the course that matches your aspirations"
                                </p>
                            </div>
                            <div class="space-y-3">
                                {program
                                    .courses
                                    .iter()
                                    .enumerate()
                                    .map(|(i, course)| {
                                        let accent = ACCENT_COLORS[i % ACCENT_COLORS.len()];
                                        view! { <CourseCard course=course accent=accent /> }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    }
                        .into_any()
                }}
            </div>
        </div>
    }
}
