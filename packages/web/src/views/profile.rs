use dioxus::prelude::*;

use api::ProfileUpdate;
use ui::{forms, use_flash, use_session, ErrorBanner, FlashBanner};

use crate::apply_guard;

/// Profile settings: read-only account info plus an update form. A password
/// change is optional; when entered, the confirmation must match exactly or
/// the update is rejected before any request is sent.
#[component]
pub fn Profile() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let mut email = use_signal(|| session.user().map(|u| u.email).unwrap_or_default());
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);
    let flash = use_flash();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let new_password = match forms::validate_password_change(&password(), &confirm_password()) {
                Ok(value) => value,
                Err(message) => {
                    error.set(Some(message.to_string()));
                    return;
                }
            };

            let Some(user) = session.user() else {
                return;
            };

            loading.set(true);
            let update = ProfileUpdate {
                email: email(),
                password: new_password,
            };

            match ui::api_client().update_profile(user.id, &update).await {
                Ok(updated) => {
                    session.refresh_user(updated);
                    flash.show("Profile updated successfully!");
                    password.set(String::new());
                    confirm_password.set(String::new());
                }
                Err(e) => {
                    error.set(Some(e.user_message("Failed to update profile")));
                }
            }
            loading.set(false);
        });
    };

    if !apply_guard(session::protected(&ui::session_store()), &nav) {
        return rsx! {};
    }

    let user = session.user();
    let username = user.as_ref().map(|u| u.username.clone()).unwrap_or_default();
    let role = user.as_ref().map(|u| u.role.label()).unwrap_or_default();
    let member_since = user.as_ref().map(|u| u.created_at.clone()).unwrap_or_default();

    rsx! {
        div {
            class: "min-h-screen py-12 px-4",
            div {
                class: "max-w-2xl mx-auto bg-white rounded-2xl shadow-md p-8",

                h1 { class: "text-3xl font-bold mb-8", "Profile Settings" }

                ErrorBanner { message: error }
                FlashBanner { flash }

                div {
                    class: "mb-8 pb-8 border-b border-gray-200",
                    h2 { class: "text-lg font-semibold mb-4", "Account Information" }
                    div {
                        class: "grid grid-cols-2 gap-6 text-sm",
                        div {
                            p { class: "text-gray-600 mb-1", "Username" }
                            p { class: "font-semibold", "{username}" }
                        }
                        div {
                            p { class: "text-gray-600 mb-1", "Role" }
                            p { class: "font-semibold", "{role}" }
                        }
                        div {
                            p { class: "text-gray-600 mb-1", "Member Since" }
                            p { class: "font-semibold", "{member_since}" }
                        }
                    }
                }

                form {
                    onsubmit: handle_submit,
                    class: "space-y-6",

                    div {
                        label { class: "block text-sm font-semibold mb-2", "Email Address" }
                        input {
                            class: "w-full px-4 py-3 border border-gray-300 rounded-lg",
                            r#type: "email",
                            value: email(),
                            oninput: move |evt: FormEvent| email.set(evt.value()),
                        }
                    }

                    div {
                        label {
                            class: "block text-sm font-semibold mb-2",
                            "New Password (Optional)"
                        }
                        input {
                            class: "w-full px-4 py-3 border border-gray-300 rounded-lg",
                            r#type: "password",
                            placeholder: "Leave blank to keep current password",
                            value: password(),
                            oninput: move |evt: FormEvent| password.set(evt.value()),
                        }
                    }

                    div {
                        label { class: "block text-sm font-semibold mb-2", "Confirm Password" }
                        input {
                            class: "w-full px-4 py-3 border border-gray-300 rounded-lg",
                            r#type: "password",
                            placeholder: "Confirm new password",
                            value: confirm_password(),
                            oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                        }
                    }

                    button {
                        class: "w-full cta-primary py-3 rounded-full font-semibold",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Updating..." } else { "Update Profile" }
                    }
                }
            }
        }
    }
}
