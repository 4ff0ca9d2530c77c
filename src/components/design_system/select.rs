use leptos::ev;
use leptos::prelude::*;

/// A styled select dropdown component
#[component]
pub fn Select(
    /// Current selected value
    #[prop(into)]
    value: RwSignal<String>,
    /// Change handler
    #[prop(into, optional)]
    on_change: Option<Callback<String>>,
    /// Whether to render the error border
    #[prop(into, default = Signal::derive(|| false))]
    error: Signal<bool>,
    /// Additional CSS classes
    #[prop(into, optional)]
    class: String,
    /// Select options
    children: Children,
) -> impl IntoView {
    let base_class = "w-full px-3 py-2 border rounded-lg focus:ring-2 focus:ring-orange-500 focus:border-orange-500 outline-none transition-colors bg-white";

    let full_class = move || {
        let border = if error.get() {
            "border-red-500"
        } else {
            "border-gray-300"
        };
        format!("{base_class} {border} {class}")
    };

    let handle_change = move |evt: ev::Event| {
        let target = event_target::<web_sys::HtmlSelectElement>(&evt);
        let new_value = target.value();
        value.set(new_value.clone());
        if let Some(ref callback) = on_change {
            callback.run(new_value);
        }
    };

    view! {
        <select class=full_class on:change=handle_change prop:value=move || value.get()>
            {children()}
        </select>
    }
}
