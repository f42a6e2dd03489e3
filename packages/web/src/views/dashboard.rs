use dioxus::prelude::*;

use api::{Enrollment, EnrollmentStats};
use ui::{use_session, StatusBadge};

use crate::{apply_guard, Route};

/// Personal dashboard: three counters derived from the enrollment list and a
/// card per enrolled course. Reachable only with an authenticated session.
#[component]
pub fn Dashboard() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let mut enrollments = use_signal(Vec::<Enrollment>::new);
    let mut loading = use_signal(|| true);

    let _loader = use_resource(move || async move {
        if let Some(user) = session.user() {
            match ui::api_client().user_enrollments(user.id).await {
                Ok(list) => enrollments.set(list),
                Err(e) => tracing::error!("failed to fetch enrollments: {e}"),
            }
        }
        loading.set(false);
    });

    if !apply_guard(session::protected(&ui::session_store()), &nav) {
        return rsx! {};
    }

    let username = session.user().map(|u| u.username).unwrap_or_default();
    let stats = EnrollmentStats::tally(&enrollments());

    rsx! {
        div {
            class: "min-h-screen py-12 px-4",
            div {
                class: "max-w-6xl mx-auto",

                div {
                    class: "mb-8",
                    h1 { class: "text-4xl font-bold mb-2", "Welcome, {username}!" }
                    p { class: "text-gray-600", "Here's your learning dashboard" }
                }

                div {
                    class: "grid grid-cols-3 gap-6 mb-12",
                    div {
                        class: "stat-card bg-white p-6 rounded-2xl shadow-md",
                        h3 { class: "text-gray-600 text-sm font-semibold mb-2", "Enrolled Courses" }
                        p { class: "text-3xl font-bold", "{stats.total}" }
                    }
                    div {
                        class: "stat-card bg-white p-6 rounded-2xl shadow-md",
                        h3 { class: "text-gray-600 text-sm font-semibold mb-2", "In Progress" }
                        p { class: "text-3xl font-bold", "{stats.active}" }
                    }
                    div {
                        class: "stat-card bg-white p-6 rounded-2xl shadow-md",
                        h3 { class: "text-gray-600 text-sm font-semibold mb-2", "Completed" }
                        p { class: "text-3xl font-bold", "{stats.completed}" }
                    }
                }

                div {
                    class: "bg-white rounded-2xl shadow-md p-8",
                    h2 { class: "text-2xl font-bold mb-6", "My Courses" }

                    if loading() {
                        p { class: "text-gray-600", "Loading your courses..." }
                    } else if enrollments().is_empty() {
                        div {
                            class: "text-center py-12",
                            p {
                                class: "text-gray-600 mb-4",
                                "You haven't enrolled in any courses yet."
                            }
                            Link {
                                class: "inline-block cta-primary px-6 py-3 rounded-full",
                                to: Route::Courses {},
                                "Browse Courses"
                            }
                        }
                    } else {
                        div {
                            class: "grid grid-cols-2 gap-6",
                            for enrollment in enrollments() {
                                div {
                                    key: "{enrollment.id}",
                                    class: "border border-gray-200 rounded-xl p-6",
                                    div {
                                        class: "flex justify-between items-start mb-3",
                                        h3 {
                                            class: "text-lg font-semibold flex-1",
                                            "{enrollment.course_title}"
                                        }
                                        StatusBadge {
                                            status: enrollment.status.clone(),
                                            label: enrollment.status_label(),
                                        }
                                    }
                                    p {
                                        class: "text-sm text-gray-500",
                                        "Enrolled: {enrollment.enrolled_at}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
