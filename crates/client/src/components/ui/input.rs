use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct TextInputProps {
    pub id: String,
    /// Also used as the form field name.
    pub name: String,
    pub value: String,
    pub oninput: EventHandler<FormEvent>,
    #[props(optional)]
    pub placeholder: Option<String>,
    #[props(optional)]
    pub required: Option<bool>,
    #[props(optional)]
    pub class: Option<String>,
}

#[component]
pub fn TextInput(props: TextInputProps) -> Element {
    let base = "bg-transparent px-2 py-1 border";
    let class = match props.class {
        Some(extra) if !extra.is_empty() => format!("{base} {extra}"),
        _ => base.to_string(),
    };

    rsx! {
        input {
            class,
            r#type: "text",
            id: props.id,
            name: props.name,
            required: props.required.unwrap_or(false),
            value: "{props.value}",
            placeholder: props.placeholder.unwrap_or_default(),
            oninput: move |e| props.oninput.call(e),
        }
    }
}
