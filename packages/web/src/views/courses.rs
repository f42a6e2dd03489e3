use std::collections::HashSet;

use dioxus::prelude::*;

use api::{Course, EnrollAction};
use ui::{use_flash, use_session, CourseCard, ErrorBanner, FlashBanner};

/// Course catalog. When a user is logged in their enrollments are fetched too,
/// so each card knows whether to offer "Enroll Now", "Enrolled", or
/// "Course Full". Enrolling re-fetches both lists rather than patching local
/// state; the backend is the sole source of truth for seat counts.
#[component]
pub fn Courses() -> Element {
    let session = use_session();
    let mut courses = use_signal(Vec::<Course>::new);
    let mut enrolled_ids = use_signal(HashSet::<i64>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let flash = use_flash();

    let reload = move || async move {
        let client = ui::api_client();
        match client.list_courses().await {
            Ok(list) => courses.set(list),
            Err(e) => {
                tracing::error!("failed to fetch courses: {e}");
                error.set(Some(e.user_message("Failed to load courses")));
            }
        }
        if let Some(user) = session.user() {
            match client.user_enrollments(user.id).await {
                Ok(enrollments) => {
                    enrolled_ids.set(enrollments.iter().map(|e| e.course_id).collect());
                }
                Err(e) => tracing::error!("failed to fetch enrollments: {e}"),
            }
        }
    };

    let _loader = use_resource(move || async move {
        reload().await;
        loading.set(false);
    });

    let handle_enroll = move |course_id: i64| {
        spawn(async move {
            error.set(None);
            match ui::api_client().enroll(course_id).await {
                Ok(_) => {
                    flash.show("Successfully enrolled in the course!");
                    reload().await;
                }
                Err(e) => {
                    error.set(Some(e.user_message("Failed to enroll in course")));
                }
            }
        });
    };

    rsx! {
        div {
            class: "min-h-screen py-12 px-4",
            div {
                class: "max-w-6xl mx-auto",

                div {
                    class: "mb-12",
                    h1 { class: "text-4xl font-bold mb-2", "Available Courses" }
                    p {
                        class: "text-gray-600",
                        "Explore our catalog of courses and start learning today"
                    }
                }

                FlashBanner { flash }
                ErrorBanner { message: error }

                if loading() {
                    p { class: "text-center text-gray-600", "Loading courses..." }
                } else if courses().is_empty() {
                    p { class: "text-center text-gray-600", "No courses available yet." }
                } else {
                    div {
                        class: "grid grid-cols-3 gap-8",
                        for course in courses() {
                            CourseCard {
                                key: "{course.id}",
                                action: EnrollAction::for_course(&course, &enrolled_ids()),
                                course,
                                on_enroll: handle_enroll,
                            }
                        }
                    }
                }
            }
        }
    }
}
