use dioxus::prelude::*;

const BASE: &str = "font-semibold text-lg cursor-pointer transition-all ease-in-out duration-300 disabled:opacity-50 disabled:cursor-not-allowed";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Solid,
    Outline,
    /// Full-width form action.
    Block,
}

impl ButtonVariant {
    /// Sizing and colour for this variant. Each variant owns its padding,
    /// rounding and background so nothing has to be overridden.
    pub fn classes(self) -> &'static str {
        match self {
            ButtonVariant::Solid => "px-5 py-3 rounded-md bg-yellow-500 hover:bg-yellow-600",
            ButtonVariant::Outline => {
                "px-5 py-3 rounded-md border border-yellow-500 hover:bg-yellow-600"
            }
            ButtonVariant::Block => "w-full mt-2 py-2 rounded-sm bg-yellow-600 hover:bg-yellow-500",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    #[props(optional)]
    pub variant: Option<ButtonVariant>,
    #[props(optional)]
    pub r#type: Option<String>,
    #[props(optional)]
    pub disabled: Option<bool>,
    pub children: Element,
}

#[component]
pub fn Button(props: ButtonProps) -> Element {
    let variant = props.variant.unwrap_or_default();
    let class = format!("{BASE} {}", variant.classes());

    rsx! {
        button {
            class,
            r#type: props.r#type.unwrap_or_else(|| "button".to_string()),
            disabled: props.disabled.unwrap_or(false),
            {props.children}
        }
    }
}
