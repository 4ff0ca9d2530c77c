use leptos::prelude::*;

/// A loading spinner component
#[component]
pub fn LoadingSpinner(
    /// Size: "sm", "md", or "lg"
    #[prop(default = "md")]
    size: &'static str,
) -> impl IntoView {
    let size_class = match size {
        "sm" => "w-4 h-4",
        "lg" => "w-8 h-8",
        _ => "w-6 h-6",
    };

    view! {
        <div class=format!(
            "{} animate-spin rounded-full border-2 border-white/40 border-t-white",
            size_class,
        )></div>
    }
}
