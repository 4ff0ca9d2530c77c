use leptos::ev;
use leptos::prelude::*;

/// A styled text input component
#[component]
pub fn Input(
    /// The current value (two-way binding signal)
    #[prop(into)]
    value: RwSignal<String>,
    /// Placeholder text
    #[prop(into, optional)]
    placeholder: Signal<String>,
    /// Input change handler (called with the new value)
    #[prop(into, optional)]
    on_input: Option<Callback<String>>,
    /// Whether the input is disabled
    #[prop(into, default = Signal::derive(|| false))]
    disabled: Signal<bool>,
    /// Whether to render the error border
    #[prop(into, default = Signal::derive(|| false))]
    error: Signal<bool>,
    /// Input type (text, email, tel, ...)
    #[prop(into, optional)]
    r#type: Signal<String>,
    /// Additional CSS classes
    #[prop(into, optional)]
    class: String,
) -> impl IntoView {
    let input_type = Signal::derive(move || {
        let t = r#type.get();
        if t.is_empty() {
            "text".to_string()
        } else {
            t
        }
    });

    let base_class = "w-full px-3 py-2 border rounded-lg focus:ring-2 focus:ring-orange-500 focus:border-orange-500 outline-none transition-colors disabled:opacity-50 disabled:cursor-not-allowed";

    let full_class = move || {
        let border = if error.get() {
            "border-red-500"
        } else {
            "border-gray-300"
        };
        format!("{base_class} {border} {class}")
    };

    let handle_input = move |evt: ev::Event| {
        let new_value = event_target_value(&evt);
        value.set(new_value.clone());
        if let Some(ref callback) = on_input {
            callback.run(new_value);
        }
    };

    view! {
        <input
            class=full_class
            type=move || input_type.get()
            prop:value=move || value.get()
            placeholder=move || placeholder.get()
            disabled=move || disabled.get()
            on:input=handle_input
        />
    }
}
