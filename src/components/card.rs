use dioxus::prelude::*;

#[component]
pub fn Card(
    children: Element,
    #[props(into, default = "bg-gradient-card shadow-card".to_string())] class: String,
    #[props(into, default = "p-6".to_string())] padding: String,
) -> Element {
    rsx! {
        div {
            class: "rounded-lg border border-border {padding} {class}",
            {children}
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeVariant {
    #[default]
    Outline,
    Destructive,
}

#[component]
pub fn Badge(
    children: Element,
    #[props(default)] variant: BadgeVariant,
    #[props(into, default = String::new())] class: String,
) -> Element {
    let variant_class = match variant {
        BadgeVariant::Outline => "border border-border text-foreground",
        BadgeVariant::Destructive => "bg-alert text-alert-foreground",
    };

    rsx! {
        span {
            class: "inline-flex items-center rounded-full px-2.5 py-0.5 font-semibold {variant_class} {class}",
            {children}
        }
    }
}
