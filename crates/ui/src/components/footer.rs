use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;

const DESCRIPTION: &str = "Simplify your learning journey with our intuitive platform designed to help you master any subject through deliberate practice.";

#[must_use]
pub fn copyright_line(year: i32) -> String {
    format!("© {year} Mastery. All rights reserved.")
}

#[component]
pub fn Footer() -> Element {
    let ctx = use_context::<AppContext>();
    let copyright = copyright_line(ctx.clock().current_year());

    rsx! {
        footer { class: "site-footer",
            div { class: "footer-grid",
                div { class: "footer-brand",
                    h3 { "Mastery" }
                    p { "{DESCRIPTION}" }
                }
                div { class: "footer-links",
                    h4 { "Navigation" }
                    ul {
                        li { Link { to: Route::Home {}, "Home" } }
                        li { Link { to: Route::Practice {}, "Practice" } }
                        li { Link { to: Route::Dashboard {}, "Dashboard" } }
                        li { Link { to: Route::About {}, "About" } }
                        li { Link { to: Route::Settings {}, "Settings" } }
                    }
                }
                div { class: "footer-contact",
                    h4 { "Contact" }
                    p { "Email: contact@masteryapp.com" }
                    div { class: "footer-social",
                        a { href: "#", "Twitter" }
                        a { href: "#", "LinkedIn" }
                        a { href: "#", "GitHub" }
                    }
                }
            }
            div { class: "footer-bottom",
                p { "{copyright}" }
                div { class: "footer-legal",
                    a { href: "#", "Privacy Policy" }
                    a { href: "#", "Terms of Service" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::copyright_line;

    #[test]
    fn copyright_uses_the_given_year() {
        assert_eq!(copyright_line(2023), "© 2023 Mastery. All rights reserved.");
    }
}
