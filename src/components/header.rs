use dioxus::prelude::*;

/// Top bar shared by the dashboard and tips pages; `children` fill the right-hand slot.
#[component]
pub fn PageHeader(
    #[props(into)] title: String,
    #[props(into)] subtitle: String,
    children: Element,
) -> Element {
    rsx! {
        header { class: "border-b border-border bg-card",
            div { class: "container mx-auto px-4 py-4",
                div { class: "flex items-center justify-between",
                    div {
                        h1 { class: "text-2xl font-bold text-foreground", "{title}" }
                        p { class: "text-sm text-muted-foreground", "{subtitle}" }
                    }
                    {children}
                }
            }
        }
    }
}
