use dioxus::prelude::*;

use ui::use_session;

use crate::Route;

/// Landing page.
#[component]
pub fn Hero() -> Element {
    let session = use_session();

    rsx! {
        div {
            class: "min-h-screen flex items-center justify-center px-4",
            div {
                class: "max-w-3xl text-center space-y-8 py-20",

                h1 {
                    class: "text-6xl font-bold leading-tight",
                    "Learn, Grow & Succeed"
                }
                p {
                    class: "text-xl text-gray-600",
                    "Unlock your potential with expert-led courses, personalized learning paths, "
                    "and a community of passionate learners. Your journey to success starts here."
                }

                div {
                    class: "flex gap-4 justify-center",

                    Link {
                        class: "cta-primary px-8 py-3 rounded-full font-semibold",
                        to: Route::Courses {},
                        "Browse Courses"
                    }

                    if session.is_authenticated() {
                        Link {
                            class: "cta-secondary px-8 py-3 rounded-full font-semibold",
                            to: Route::Dashboard {},
                            "Go to Dashboard"
                        }
                    } else {
                        Link {
                            class: "cta-secondary px-8 py-3 rounded-full font-semibold",
                            to: Route::Signup {},
                            "Get Started"
                        }
                    }
                }
            }
        }
    }
}
