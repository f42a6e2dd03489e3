use dioxus::prelude::*;

use api::{Course, CoursePayload, Role, User};
use ui::{confirm_dialog, forms, use_flash, ErrorBanner, FlashBanner, RoleBadge};

use crate::apply_guard;

/// Fallback shown when the preview URL fails to load.
const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/400x300?text=Invalid+Image";

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Courses,
    Users,
}

/// Admin console: course CRUD and a read-only user directory, split over two
/// tabs. Reachable only by authenticated admins; everyone else is bounced to
/// their dashboard by the guard.
#[component]
pub fn Admin() -> Element {
    let nav = use_navigator();
    let mut users = use_signal(Vec::<User>::new);
    let mut courses = use_signal(Vec::<Course>::new);
    let mut loading = use_signal(|| true);
    let mut active_tab = use_signal(|| Tab::Courses);

    // Course form state. `editing` holds the id of the course being edited,
    // or None when the form is in add mode.
    let mut show_form = use_signal(|| false);
    let mut editing = use_signal(|| Option::<i64>::None);
    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut instructor = use_signal(String::new);
    let mut capacity = use_signal(|| forms::DEFAULT_CAPACITY.to_string());
    let mut image_url = use_signal(String::new);
    let mut preview_src = use_signal(String::new);

    let mut error = use_signal(|| Option::<String>::None);
    let flash = use_flash();

    let _loader = use_resource(move || async move {
        let client = ui::api_client();
        match client.list_users().await {
            Ok(list) => users.set(list),
            Err(e) => {
                tracing::error!("failed to fetch users: {e}");
                error.set(Some("Failed to load data".to_string()));
            }
        }
        match client.list_courses().await {
            Ok(list) => courses.set(list),
            Err(e) => {
                tracing::error!("failed to fetch courses: {e}");
                error.set(Some("Failed to load data".to_string()));
            }
        }
        loading.set(false);
    });

    let mut reset_form = move || {
        title.set(String::new());
        description.set(String::new());
        instructor.set(String::new());
        capacity.set(forms::DEFAULT_CAPACITY.to_string());
        image_url.set(String::new());
        preview_src.set(String::new());
        editing.set(None);
        show_form.set(false);
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let instructor_id = match forms::validate_course_form(&title(), &instructor()) {
                Ok(id) => id,
                Err(message) => {
                    error.set(Some(message.to_string()));
                    return;
                }
            };

            let payload = CoursePayload {
                title: title().trim().to_string(),
                description: description(),
                instructor_id,
                capacity: forms::parse_capacity(&capacity()),
                image_url: image_url(),
            };

            let client = ui::api_client();
            match editing() {
                Some(course_id) => match client.update_course(course_id, &payload).await {
                    Ok(updated) => {
                        let mut list = courses();
                        if let Some(slot) = list.iter_mut().find(|c| c.id == course_id) {
                            *slot = updated;
                        }
                        courses.set(list);
                        reset_form();
                        flash.show("Course updated successfully!");
                    }
                    Err(e) => {
                        error.set(Some(e.user_message("Failed to update course")));
                    }
                },
                None => match client.create_course(&payload).await {
                    Ok(created) => {
                        courses.write().push(created);
                        reset_form();
                        flash.show("Course added successfully!");
                    }
                    Err(e) => {
                        error.set(Some(e.user_message("Failed to add course")));
                    }
                },
            }
        });
    };

    let mut handle_edit = move |course: Course| {
        title.set(course.title);
        description.set(course.description.unwrap_or_default());
        instructor.set(course.instructor_id.to_string());
        capacity.set(course.capacity.to_string());
        let url = course.image_url.unwrap_or_default();
        preview_src.set(url.clone());
        image_url.set(url);
        editing.set(Some(course.id));
        show_form.set(true);
    };

    let handle_delete = move |course_id: i64| {
        if !confirm_dialog("Are you sure you want to delete this course?") {
            return;
        }
        spawn(async move {
            error.set(None);
            match ui::api_client().delete_course(course_id).await {
                Ok(()) => {
                    courses.write().retain(|c| c.id != course_id);
                    flash.show("Course deleted successfully!");
                }
                Err(e) => {
                    error.set(Some(e.user_message("Failed to delete course")));
                }
            }
        });
    };

    if !apply_guard(session::admin_only(&ui::session_store()), &nav) {
        return rsx! {};
    }

    let instructors: Vec<User> = users()
        .into_iter()
        .filter(|u| matches!(u.role, Role::Instructor | Role::Admin))
        .collect();
    let course_count = courses().len();
    let user_count = users().len();

    rsx! {
        div {
            class: "min-h-screen py-12 px-4",
            div {
                class: "max-w-7xl mx-auto",

                div {
                    class: "mb-8",
                    h1 { class: "text-4xl font-bold mb-2", "Admin Dashboard" }
                    p { class: "text-gray-600", "Manage users, courses, and system settings" }
                }

                FlashBanner { flash }
                ErrorBanner { message: error }

                div {
                    class: "flex gap-4 mb-8",
                    button {
                        class: if active_tab() == Tab::Courses { "tab tab-active" } else { "tab" },
                        onclick: move |_| active_tab.set(Tab::Courses),
                        "Courses ({course_count})"
                    }
                    button {
                        class: if active_tab() == Tab::Users { "tab tab-active" } else { "tab" },
                        onclick: move |_| active_tab.set(Tab::Users),
                        "Users ({user_count})"
                    }
                }

                if loading() {
                    p { class: "text-center text-gray-600", "Loading..." }
                } else if active_tab() == Tab::Courses {
                    div {
                        class: "space-y-6",

                        if show_form() {
                            div {
                                class: "bg-white rounded-2xl shadow-lg p-8",
                                h2 {
                                    class: "text-2xl font-bold mb-6",
                                    if editing().is_some() { "Edit Course" } else { "Add New Course" }
                                }

                                form {
                                    onsubmit: handle_submit,
                                    class: "space-y-4",

                                    div {
                                        class: "grid grid-cols-2 gap-4",

                                        div {
                                            label {
                                                class: "block text-sm font-semibold mb-2",
                                                "Course Title *"
                                            }
                                            input {
                                                class: "w-full px-4 py-2 border border-gray-300 rounded-lg",
                                                r#type: "text",
                                                placeholder: "e.g., Advanced React Patterns",
                                                value: title(),
                                                oninput: move |evt: FormEvent| title.set(evt.value()),
                                            }
                                        }

                                        div {
                                            label {
                                                class: "block text-sm font-semibold mb-2",
                                                "Assign Instructor *"
                                            }
                                            select {
                                                class: "w-full px-4 py-2 border border-gray-300 rounded-lg",
                                                value: instructor(),
                                                onchange: move |evt: FormEvent| instructor.set(evt.value()),
                                                option { value: "", "Select an instructor" }
                                                for candidate in instructors.iter() {
                                                    option {
                                                        key: "{candidate.id}",
                                                        value: "{candidate.id}",
                                                        "{candidate.username} ({candidate.email})"
                                                    }
                                                }
                                            }
                                        }

                                        div {
                                            label {
                                                class: "block text-sm font-semibold mb-2",
                                                "Course Capacity"
                                            }
                                            input {
                                                class: "w-full px-4 py-2 border border-gray-300 rounded-lg",
                                                r#type: "number",
                                                min: "{forms::MIN_CAPACITY}",
                                                max: "{forms::MAX_CAPACITY}",
                                                value: capacity(),
                                                oninput: move |evt: FormEvent| capacity.set(evt.value()),
                                            }
                                        }
                                    }

                                    div {
                                        label {
                                            class: "block text-sm font-semibold mb-2",
                                            "Description"
                                        }
                                        textarea {
                                            class: "w-full px-4 py-2 border border-gray-300 rounded-lg",
                                            rows: "4",
                                            placeholder: "Course description and key topics...",
                                            value: description(),
                                            oninput: move |evt: FormEvent| description.set(evt.value()),
                                        }
                                    }

                                    div {
                                        label {
                                            class: "block text-sm font-semibold mb-2",
                                            "Course Image URL"
                                        }
                                        input {
                                            class: "w-full px-4 py-2 border border-gray-300 rounded-lg",
                                            r#type: "url",
                                            placeholder: "https://example.com/image.jpg",
                                            value: image_url(),
                                            oninput: move |evt: FormEvent| {
                                                image_url.set(evt.value());
                                                preview_src.set(evt.value());
                                            },
                                        }
                                        if !preview_src().is_empty() {
                                            div {
                                                class: "mt-4",
                                                p {
                                                    class: "text-sm font-semibold mb-2",
                                                    "Image Preview:"
                                                }
                                                img {
                                                    class: "h-40 w-full object-cover rounded-lg",
                                                    src: preview_src(),
                                                    alt: "Course preview",
                                                    onerror: move |_| {
                                                        preview_src.set(PLACEHOLDER_IMAGE.to_string());
                                                    },
                                                }
                                            }
                                        }
                                    }

                                    div {
                                        class: "flex gap-4 pt-4",
                                        button {
                                            class: "flex-1 cta-primary px-6 py-3 rounded-lg font-semibold",
                                            r#type: "submit",
                                            if editing().is_some() { "Update Course" } else { "Add Course" }
                                        }
                                        button {
                                            class: "flex-1 bg-gray-200 px-6 py-3 rounded-lg font-semibold",
                                            r#type: "button",
                                            onclick: move |_| {
                                                reset_form();
                                                error.set(None);
                                            },
                                            "Cancel"
                                        }
                                    }
                                }
                            }
                        } else {
                            button {
                                class: "cta-primary px-8 py-3 rounded-lg font-semibold",
                                onclick: move |_| show_form.set(true),
                                "Add New Course"
                            }
                        }

                        div {
                            class: "bg-white rounded-2xl shadow-md overflow-x-auto",
                            table {
                                class: "w-full",
                                thead {
                                    class: "border-b border-gray-200",
                                    tr {
                                        th { class: "px-6 py-4 text-left text-sm font-semibold", "Course Title" }
                                        th { class: "px-6 py-4 text-left text-sm font-semibold", "Instructor" }
                                        th { class: "px-6 py-4 text-left text-sm font-semibold", "Capacity" }
                                        th { class: "px-6 py-4 text-left text-sm font-semibold", "Enrolled" }
                                        th { class: "px-6 py-4 text-left text-sm font-semibold", "Created" }
                                        th { class: "px-6 py-4 text-center text-sm font-semibold", "Actions" }
                                    }
                                }
                                tbody {
                                    if courses().is_empty() {
                                        tr {
                                            td {
                                                class: "px-6 py-8 text-center text-gray-500",
                                                colspan: "6",
                                                "No courses yet. Create your first course!"
                                            }
                                        }
                                    } else {
                                        for course in courses() {
                                            tr {
                                                key: "{course.id}",
                                                class: "border-b border-gray-200",
                                                td { class: "px-6 py-4 text-sm font-semibold", "{course.title}" }
                                                td { class: "px-6 py-4 text-sm text-gray-600", "{course.instructor_name}" }
                                                td { class: "px-6 py-4 text-sm text-gray-600", "{course.capacity}" }
                                                td { class: "px-6 py-4 text-sm text-gray-600", "{course.enrolled_count}" }
                                                td { class: "px-6 py-4 text-sm text-gray-600", "{course.created_at}" }
                                                td {
                                                    class: "px-6 py-4 text-sm text-center space-x-2",
                                                    button {
                                                        class: "table-action",
                                                        onclick: {
                                                            let course = course.clone();
                                                            move |_| handle_edit(course.clone())
                                                        },
                                                        "Edit"
                                                    }
                                                    button {
                                                        class: "table-action table-action-danger",
                                                        onclick: move |_| handle_delete(course.id),
                                                        "Delete"
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                } else {
                    div {
                        class: "bg-white rounded-2xl shadow-md overflow-x-auto",
                        table {
                            class: "w-full",
                            thead {
                                class: "border-b border-gray-200",
                                tr {
                                    th { class: "px-6 py-4 text-left text-sm font-semibold", "Username" }
                                    th { class: "px-6 py-4 text-left text-sm font-semibold", "Email" }
                                    th { class: "px-6 py-4 text-left text-sm font-semibold", "Role" }
                                    th { class: "px-6 py-4 text-left text-sm font-semibold", "Joined" }
                                }
                            }
                            tbody {
                                for user in users() {
                                    tr {
                                        key: "{user.id}",
                                        class: "border-b border-gray-200",
                                        td { class: "px-6 py-4 text-sm font-semibold", "{user.username}" }
                                        td { class: "px-6 py-4 text-sm text-gray-600", "{user.email}" }
                                        td {
                                            class: "px-6 py-4 text-sm",
                                            RoleBadge { role: user.role }
                                        }
                                        td { class: "px-6 py-4 text-sm text-gray-600", "{user.created_at}" }
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
