use api::Role;
use dioxus::prelude::*;

/// Pill badge for an enrollment status. "active" is green, "completed" blue,
/// anything else grey.
#[component]
pub fn StatusBadge(status: String, label: String) -> Element {
    let class = match status.as_str() {
        "active" => "bg-green-100 text-green-700",
        "completed" => "bg-blue-100 text-blue-700",
        _ => "bg-gray-100 text-gray-700",
    };

    rsx! {
        span {
            class: "px-3 py-1 rounded-full text-xs font-semibold {class}",
            "{label}"
        }
    }
}

/// Pill badge for a user role.
#[component]
pub fn RoleBadge(role: Role) -> Element {
    let class = match role {
        Role::Admin => "bg-red-100 text-red-700",
        Role::Instructor => "bg-blue-100 text-blue-700",
        Role::Student => "bg-green-100 text-green-700",
    };

    rsx! {
        span {
            class: "px-3 py-1 rounded-full text-xs font-semibold {class}",
            "{role.label()}"
        }
    }
}
