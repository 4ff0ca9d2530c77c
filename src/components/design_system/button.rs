use leptos::ev;
use leptos::prelude::*;

use super::loading::LoadingSpinner;

/// Button variant styles
#[derive(Default, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => {
                "bg-gradient-to-r from-orange-500 to-orange-600 text-white shadow-lg hover:shadow-xl border border-transparent"
            }
            ButtonVariant::Secondary => {
                "bg-gray-100 hover:bg-gray-200 text-gray-700 border border-gray-200"
            }
            ButtonVariant::Ghost => {
                "bg-transparent hover:bg-gray-100 text-gray-600 hover:text-gray-900 border border-transparent"
            }
        }
    }
}

/// A styled button component with loading and disabled states
#[component]
pub fn Button<F>(
    /// The visual variant of the button
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// Click handler
    #[prop(optional)]
    on_click: Option<F>,
    /// Whether the button is disabled
    #[prop(into, default = Signal::derive(|| false))]
    disabled: Signal<bool>,
    /// Whether to show a loading spinner
    #[prop(into, default = Signal::derive(|| false))]
    loading: Signal<bool>,
    /// Additional CSS classes
    #[prop(into, optional)]
    class: String,
    /// Button content
    children: Children,
) -> impl IntoView
where
    F: Fn(ev::MouseEvent) + 'static,
{
    let base_class = "px-4 py-2 rounded-lg transition-all duration-200 flex items-center justify-center gap-2 font-semibold focus:outline-none focus:ring-2 focus:ring-orange-500 focus:ring-offset-2";
    let variant_class = variant.class();

    let is_disabled = move || disabled.get() || loading.get();

    let state_class = move || {
        if is_disabled() {
            "opacity-50 cursor-not-allowed"
        } else {
            "cursor-pointer active:scale-95"
        }
    };

    let full_class = move || format!("{base_class} {variant_class} {} {class}", state_class());

    let handle_click = move |evt: ev::MouseEvent| {
        if !is_disabled() {
            if let Some(ref callback) = on_click {
                callback(evt);
            }
        }
    };

    view! {
        <button
            type="button"
            class=full_class
            on:click=handle_click
            disabled=is_disabled
        >
            {move || {
                if loading.get() {
                    Some(view! { <LoadingSpinner size="sm" /> })
                } else {
                    None
                }
            }}
            {children()}
        </button>
    }
}
