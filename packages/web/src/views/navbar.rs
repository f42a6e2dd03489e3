use dioxus::prelude::*;

use ui::use_session;

use crate::Route;

/// Top navigation bar with links that follow the session: Dashboard, Profile,
/// and Logout appear once logged in, the Admin link only for admins.
#[component]
pub fn NavBar() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let current: Route = use_route();

    let link_class = move |route: &Route| {
        if current == *route {
            "nav-link nav-link-active"
        } else {
            "nav-link"
        }
    };

    let handle_logout = move |_| {
        session.log_out();
        nav.push(Route::Login {});
    };

    rsx! {
        nav {
            class: "bg-white shadow-md",
            div {
                class: "max-w-7xl mx-auto px-4 py-4 flex justify-between items-center",

                Link {
                    class: "text-2xl font-bold brand",
                    to: Route::Hero {},
                    "Campus Hub"
                }

                div {
                    class: "flex gap-6 items-center",

                    Link { class: link_class(&Route::Hero {}), to: Route::Hero {}, "Home" }
                    Link { class: link_class(&Route::Courses {}), to: Route::Courses {}, "Courses" }

                    if session.is_authenticated() {
                        Link {
                            class: link_class(&Route::Dashboard {}),
                            to: Route::Dashboard {},
                            "Dashboard"
                        }

                        if session.is_admin() {
                            Link {
                                class: link_class(&Route::Admin {}),
                                to: Route::Admin {},
                                "Admin"
                            }
                        }

                        Link {
                            class: link_class(&Route::Profile {}),
                            to: Route::Profile {},
                            "Profile"
                        }

                        button {
                            class: "nav-link",
                            onclick: handle_logout,
                            "Logout"
                        }
                    } else {
                        Link { class: link_class(&Route::Login {}), to: Route::Login {}, "Login" }
                        Link {
                            class: "nav-cta px-4 py-2 rounded-full font-semibold",
                            to: Route::Signup {},
                            "Sign Up"
                        }
                    }
                }
            }
        }

        Outlet::<Route> {}
    }
}
