//! Transient feedback banners.
//!
//! [`Flash`] shows a success message that clears itself after
//! [`FLASH_DURATION_SECS`] seconds, matching the behaviour of every mutation
//! in the app. [`ErrorBanner`] is its sibling for failures: errors stay until
//! the user dismisses them or retries.

use dioxus::prelude::*;

/// How long a success message stays on screen.
pub const FLASH_DURATION_SECS: u64 = 3;

async fn sleep_secs(secs: u64) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(std::time::Duration::from_secs(secs)).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_secs(secs)).await;
}

/// Handle on a self-clearing success message.
#[derive(Clone, Copy, PartialEq)]
pub struct Flash {
    message: Signal<Option<String>>,
}

impl Flash {
    pub fn show(&self, text: impl Into<String>) {
        let mut message = self.message;
        message.set(Some(text.into()));
        spawn(async move {
            sleep_secs(FLASH_DURATION_SECS).await;
            message.set(None);
        });
    }

    pub fn current(&self) -> Option<String> {
        (self.message)()
    }
}

pub fn use_flash() -> Flash {
    Flash {
        message: use_signal(|| None),
    }
}

/// Green banner rendered while a flash message is live.
#[component]
pub fn FlashBanner(flash: Flash) -> Element {
    rsx! {
        if let Some(message) = flash.current() {
            div {
                class: "mb-4 px-4 py-3 bg-green-50 border border-green-200 rounded-lg text-green-700",
                "✓ {message}"
            }
        }
    }
}

/// Red banner for a failed action, dismissible with the close button.
#[component]
pub fn ErrorBanner(mut message: Signal<Option<String>>) -> Element {
    rsx! {
        if let Some(text) = message() {
            div {
                class: "mb-4 px-4 py-3 bg-red-50 border border-red-200 rounded-lg text-red-700 flex justify-between items-center",
                span { "{text}" }
                button {
                    class: "ml-4 font-bold",
                    onclick: move |_| message.set(None),
                    "×"
                }
            }
        }
    }
}
