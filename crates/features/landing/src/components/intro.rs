use dioxus::prelude::*;

#[component]
pub(crate) fn Hero(title: String, tagline: String, motto: String) -> Element {
    rsx! {
        header { class: "hero",
            h1 { class: "hero-title", "{title}" }
            p { class: "hero-tagline", "{tagline}" }
            p { class: "hero-motto", "{motto}" }
        }
    }
}

#[component]
pub(crate) fn Highlights() -> Element {
    rsx! {
        section { class: "highlights",
            div { class: "feature-card",
                div { class: "feature-icon", "🎓" }
                h3 { "Learn by Doing" }
                p { "Hands-on lessons in Google Colab. Click, code, learn. No boring theory!" }
            }
            div { class: "feature-card feature-card-free",
                div { class: "feature-icon", "💰" }
                h3 { "100% Free" }
                p { "Free GPU from Google. Free courses. Free everything. Seriously." }
            }
            div { class: "feature-card feature-card-friend",
                div { class: "feature-icon", "🤝" }
                h3 { "Friend Mode" }
                p { "No jargon. No PhD needed. Just me explaining like we are friends." }
            }
        }
    }
}

#[component]
pub(crate) fn QuickStart() -> Element {
    rsx! {
        section { class: "quick-start", id: "quick-start",
            h2 { "🚀 Start in 30 Seconds" }
            div { class: "panel",
                h3 { "Here is how this works:" }
                ol { class: "steps",
                    li { strong { "Pick a lesson" } " from below (start with the first one!)" }
                    li { strong { "Click the orange button" } " - opens in Google Colab" }
                    li { strong { "Run the code cells" } " - just click play ▶️" }
                    li { strong { "Learn by doing" } " - you will train real AI models!" }
                }
                p { class: "steps-note",
                    strong { "No installation. No setup. No credit card." }
                    " Just click and learn!"
                }
            }
        }
    }
}
