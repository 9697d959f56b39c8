use crate::components::Card;
use crate::home::models::Tip;
use dioxus::prelude::*;

#[component]
pub fn TipCard(tip: Tip) -> Element {
    let glyph = tip.icon.glyph();

    rsx! {
        Card { class: "bg-gradient-card shadow-card hover:shadow-lg transition-all duration-300",
            div { class: "flex items-start gap-4 mb-4",
                div { class: "p-3 rounded-full bg-primary-soft text-2xl", "{glyph}" }
                div { class: "flex-1",
                    h3 { class: "font-semibold text-lg text-foreground mb-2", "{tip.title}" }
                    p { class: "text-sm text-muted-foreground", "{tip.description}" }
                }
            }
            div { class: "space-y-2 mt-4",
                h4 { class: "font-medium text-sm text-foreground", "Steps:" }
                ol { class: "space-y-2",
                    for (n, step) in (1..).zip(tip.steps.iter()) {
                        li { key: "{n}", class: "text-sm text-foreground flex gap-3",
                            span { class: "font-semibold text-primary min-w-[20px]", "{n}." }
                            span { "{step}" }
                        }
                    }
                }
            }
        }
    }
}
