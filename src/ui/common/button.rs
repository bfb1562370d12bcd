use leptos::prelude::*;

/// Button variant types
#[derive(Clone, Copy, PartialEq)]
pub enum ButtonVariant {
    Primary,
    Secondary,
    Danger,
    Success,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => {
                "bg-blue-600 hover:bg-blue-700 text-white"
            }
            ButtonVariant::Secondary => {
                "bg-[#f0f2f4] hover:bg-[#e4e7ea] text-[#111518]"
            }
            ButtonVariant::Danger => "bg-red-600 hover:bg-red-700 text-white",
            ButtonVariant::Success => "bg-green-600 hover:bg-green-700 text-white",
        }
    }
}

/// Type-safe button component with variants
#[component]
pub fn Button(
    /// Button variant style
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// Click handler
    on_click: Callback<()>,
    /// Disabled state
    #[prop(optional, into)]
    disabled: Signal<bool>,
    /// Button label
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=format!(
                "flex min-w-[84px] items-center justify-center rounded-lg h-10 px-4 \
                 text-sm font-bold leading-normal transition-colors disabled:opacity-60 \
                 disabled:cursor-not-allowed {}",
                variant.class()
            )
            disabled=move || disabled.get()
            on:click=move |_| on_click.run(())
        >
            {children()}
        </button>
    }
}
