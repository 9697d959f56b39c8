use crate::components::{Card, PageHeader, TipCard};
use crate::home::{self, models::TipCategory};
use crate::Route;
use dioxus::prelude::*;

/// The Tips page component that will be rendered when the current route is `[Route::Tips]`
#[component]
pub fn Tips() -> Element {
    let home = home::snapshot();
    let navigator = use_navigator();

    let sections: Vec<_> = TipCategory::ALL
        .into_iter()
        .map(|c| (c.heading(), c.blurb(), home.tips_in(c)))
        .collect();

    use_hook(|| tracing::debug!(tips = home.tips.len(), "tips mounted"));

    rsx! {
        div { class: "min-h-screen bg-background",
            PageHeader {
                title: "Energy Saving Tips",
                subtitle: "Actionable advice to reduce your energy costs",
                button {
                    class: "rounded-md border border-border px-4 py-2 hover:bg-muted",
                    onclick: move |_| {
                        navigator.push(Route::Dashboard {});
                    },
                    "Back to Dashboard"
                }
            }

            main { class: "container mx-auto px-4 py-8 space-y-10",
                for (heading, blurb, tips) in sections {
                    section { key: "{heading}", class: "space-y-4",
                        div {
                            h2 { class: "text-2xl font-bold text-foreground mb-2", "{heading}" }
                            p { class: "text-muted-foreground", "{blurb}" }
                        }
                        div { class: "grid md:grid-cols-2 gap-6",
                            for tip in tips {
                                TipCard { key: "{tip.title}", tip: tip.clone() }
                            }
                        }
                    }
                }

                Card { class: "bg-gradient-thermal shadow-card text-center", padding: "p-8",
                    h3 { class: "text-2xl font-bold text-primary-foreground mb-2", "Need More Help?" }
                    p { class: "text-primary-foreground-soft mb-6",
                        "Our Thermal Detective system is continuously monitoring your home for energy inefficiencies."
                    }
                    button {
                        class: "rounded-md bg-secondary px-6 py-3 text-lg font-semibold",
                        onclick: move |_| {
                            navigator.push(Route::Dashboard {});
                        },
                        "View Live Dashboard"
                    }
                }
            }
        }
    }
}
