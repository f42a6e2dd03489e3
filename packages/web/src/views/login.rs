use dioxus::prelude::*;

use ui::use_session;

use crate::Route;

/// Login page with email/password form and the demo credentials panel.
#[component]
pub fn Login() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);
            loading.set(true);

            match ui::api_client().login(email(), password()).await {
                Ok(auth) => {
                    session.log_in(auth.access_token, auth.user);
                    nav.push(Route::Dashboard {});
                }
                Err(e) => {
                    error.set(Some(e.user_message("Login failed. Please try again.")));
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        div {
            class: "min-h-screen flex items-center justify-center px-4",
            div {
                class: "w-full max-w-md bg-white p-8 rounded-2xl shadow-lg border border-gray-100",

                h2 { class: "text-3xl font-bold mb-6 text-center", "Welcome Back" }

                if let Some(err) = error() {
                    div {
                        class: "mb-6 px-4 py-3 bg-red-50 border border-red-200 rounded-lg text-red-700",
                        "{err}"
                    }
                }

                form {
                    onsubmit: handle_submit,
                    class: "space-y-4",

                    div {
                        label { class: "block text-sm font-semibold mb-2", "Email" }
                        input {
                            class: "w-full px-4 py-3 border border-gray-300 rounded-lg",
                            r#type: "email",
                            placeholder: "your@email.com",
                            value: email(),
                            oninput: move |evt: FormEvent| email.set(evt.value()),
                            required: true,
                        }
                    }

                    div {
                        label { class: "block text-sm font-semibold mb-2", "Password" }
                        input {
                            class: "w-full px-4 py-3 border border-gray-300 rounded-lg",
                            r#type: "password",
                            placeholder: "••••••••",
                            value: password(),
                            oninput: move |evt: FormEvent| password.set(evt.value()),
                            required: true,
                        }
                    }

                    button {
                        class: "w-full cta-primary py-3 rounded-full font-semibold",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Logging in..." } else { "Login" }
                    }
                }

                p {
                    class: "text-center text-gray-600 mt-6",
                    "Don't have an account? "
                    Link { class: "brand font-semibold", to: Route::Signup {}, "Sign up" }
                }

                div {
                    class: "mt-8 pt-6 border-t border-gray-200",
                    p { class: "text-xs text-gray-500 text-center mb-2", "Demo Credentials:" }
                    div {
                        class: "bg-gray-50 p-3 rounded-lg space-y-1 text-xs text-gray-600",
                        p {
                            strong { "Admin: " }
                            "admin@campushub.com / admin123"
                        }
                        p {
                            strong { "Instructor: " }
                            "instructor@campushub.com / instructor123"
                        }
                    }
                }
            }
        }
    }
}
