use dioxus::prelude::*;

use api::{Role, SignupRequest};
use ui::use_session;

use crate::Route;

/// Account creation form. The role select offers student and instructor;
/// admin accounts are never self-service.
#[component]
pub fn Signup() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut role = use_signal(|| Role::Student);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);
            loading.set(true);

            let request = SignupRequest {
                username: username(),
                email: email(),
                password: password(),
                role: role(),
            };

            match ui::api_client().signup(request).await {
                Ok(auth) => {
                    session.log_in(auth.access_token, auth.user);
                    nav.push(Route::Dashboard {});
                }
                Err(e) => {
                    error.set(Some(e.user_message("Signup failed. Please try again.")));
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

                h2 { class: "text-3xl font-bold mb-6 text-center", "Create Account" }

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
                        label { class: "block text-sm font-semibold mb-2", "Username" }
                        input {
                            class: "w-full px-4 py-3 border border-gray-300 rounded-lg",
                            r#type: "text",
                            placeholder: "john_doe",
                            value: username(),
                            oninput: move |evt: FormEvent| username.set(evt.value()),
                            required: true,
                        }
                    }

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

                    div {
                        label { class: "block text-sm font-semibold mb-2", "Role" }
                        select {
                            class: "w-full px-4 py-3 border border-gray-300 rounded-lg",
                            value: "{role()}",
                            onchange: move |evt: FormEvent| {
                                role.set(match evt.value().as_str() {
                                    "instructor" => Role::Instructor,
                                    _ => Role::Student,
                                });
                            },
                            option { value: "student", "Student" }
                            option { value: "instructor", "Instructor" }
                        }
                    }

                    button {
                        class: "w-full cta-primary py-3 rounded-full font-semibold",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Creating Account..." } else { "Sign Up" }
                    }
                }

                p {
                    class: "text-center text-gray-600 mt-6",
                    "Already have an account? "
                    Link { class: "brand font-semibold", to: Route::Login {}, "Login" }
                }
            }
        }
    }
}
