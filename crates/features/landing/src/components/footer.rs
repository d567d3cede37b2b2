use academy_domain::config::SiteLink;
use dioxus::prelude::*;

#[component]
pub(crate) fn Footer(links: Vec<SiteLink>) -> Element {
    rsx! {
        footer { class: "footer",
            p { "Built with ❤️ for people who want to actually learn AI" }
            nav { class: "footer-links",
                for (index, link) in links.iter().enumerate() {
                    if index > 0 { " • " }
                    a {
                        href: "{link.url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "{link.label}"
                    }
                }
            }
            p { class: "footer-note", "100% Free • Forever • No BS" }
        }
    }
}
