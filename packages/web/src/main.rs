use dioxus::prelude::*;

use session::{GuardDecision, RedirectTarget};
use ui::SessionProvider;
use views::{Admin, Courses, Dashboard, Hero, Login, NavBar, NotFound, Profile, Signup};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(NavBar)]
    #[route("/")]
    Hero {},
    #[route("/login")]
    Login {},
    #[route("/signup")]
    Signup {},
    #[route("/courses")]
    Courses {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/profile")]
    Profile {},
    #[route("/admin")]
    Admin {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl From<RedirectTarget> for Route {
    fn from(target: RedirectTarget) -> Self {
        match target {
            RedirectTarget::Login => Route::Login {},
            RedirectTarget::Dashboard => Route::Dashboard {},
        }
    }
}

/// Apply a guard decision: `true` means render, `false` means the navigation
/// was replaced with the guard's redirect target.
fn apply_guard(decision: GuardDecision, nav: &Navigator) -> bool {
    match decision {
        GuardDecision::Allow => true,
        GuardDecision::Redirect(target) => {
            nav.replace(Route::from(target));
            false
        }
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            Router::<Route> {}
        }
    }
}
