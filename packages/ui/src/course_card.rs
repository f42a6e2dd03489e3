use api::{Course, EnrollAction};
use dioxus::prelude::*;

/// One course in the catalog grid: title, instructor, seat counters, and an
/// enroll button whose state comes from [`EnrollAction`].
#[component]
pub fn CourseCard(course: Course, action: EnrollAction, on_enroll: EventHandler<i64>) -> Element {
    let capacity = course.capacity.max(1);
    let percent = (course.enrolled_count * 100 / capacity).min(100);
    let description = course
        .description
        .clone()
        .unwrap_or_else(|| "No description available".to_string());
    let course_id = course.id;

    rsx! {
        div {
            class: "bg-white rounded-2xl shadow-md overflow-hidden",

            if let Some(url) = course.image_url.as_deref() {
                img {
                    class: "h-32 w-full object-cover",
                    src: "{url}",
                    alt: "{course.title}",
                }
            } else {
                div { class: "h-32 course-header-fallback" }
            }

            div {
                class: "p-6",

                h3 { class: "text-lg font-bold mb-2", "{course.title}" }
                p { class: "text-gray-600 text-sm mb-4", "{description}" }

                div {
                    class: "space-y-2 mb-6 text-sm text-gray-600",
                    div {
                        class: "flex justify-between",
                        span { "Instructor:" }
                        span { class: "font-semibold", "{course.instructor_name}" }
                    }
                    div {
                        class: "flex justify-between",
                        span { "Enrolled:" }
                        span { class: "font-semibold", "{course.enrolled_count} / {course.capacity}" }
                    }
                }

                div {
                    class: "w-full bg-gray-200 rounded-full h-2 mb-6",
                    div {
                        class: "progress-fill h-2 rounded-full",
                        style: "width: {percent}%;",
                    }
                }

                button {
                    class: "w-full enroll-btn py-3 rounded-full font-semibold",
                    disabled: action.is_disabled(),
                    onclick: move |_| on_enroll.call(course_id),
                    "{action.label()}"
                }
            }
        }
    }
}
