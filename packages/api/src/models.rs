//! # Domain models for courses and enrollments
//!
//! Client-held copies of backend entities plus the request payloads the
//! backend accepts. The backend owns all canonical state; views cache the
//! latest fetch in local state and re-fetch after each mutation.
//!
//! Two pure helpers live here because every view that renders them needs the
//! same answer:
//!
//! - [`EnrollAction`] — whether a course can be enrolled in right now, derived
//!   from the capacity counters and the viewer's enrolled-course set.
//! - [`EnrollmentStats`] — the dashboard's counters, tallied fresh from the
//!   enrollment list on every render.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use session::{Role, User};

/// A course as listed by the backend. The backend enforces
/// `enrolled_count <= capacity`; the client trusts it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub instructor_id: i64,
    pub instructor_name: String,
    pub capacity: u32,
    pub enrolled_count: u32,
    pub image_url: Option<String>,
    pub created_at: String,
}

impl Course {
    pub fn is_full(&self) -> bool {
        self.enrolled_count >= self.capacity
    }
}

/// A user's enrollment in a course. `status` is an open set owned by the
/// backend; the client only distinguishes "active" and "completed".
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: i64,
    pub course_id: i64,
    pub course_title: String,
    pub status: String,
    pub enrolled_at: String,
}

impl Enrollment {
    pub fn is_active(&self) -> bool {
        self.status == "active"
    }

    pub fn is_completed(&self) -> bool {
        self.status == "completed"
    }

    /// Status with the first letter capitalised, for display.
    pub fn status_label(&self) -> String {
        let mut chars = self.status.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

/// What the enroll button on a course card should do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnrollAction {
    /// The viewer already has an enrollment for this course.
    AlreadyEnrolled,
    /// No seats left.
    Full,
    /// Enrollable.
    Open,
}

impl EnrollAction {
    /// Derive the action from the course's counters and the viewer's set of
    /// enrolled course ids. An existing enrollment wins over fullness so the
    /// viewer sees "Enrolled" rather than "Course Full" for their own courses.
    pub fn for_course(course: &Course, enrolled_course_ids: &HashSet<i64>) -> Self {
        if enrolled_course_ids.contains(&course.id) {
            EnrollAction::AlreadyEnrolled
        } else if course.is_full() {
            EnrollAction::Full
        } else {
            EnrollAction::Open
        }
    }

    /// Button label for this action.
    pub fn label(&self) -> &'static str {
        match self {
            EnrollAction::AlreadyEnrolled => "Enrolled",
            EnrollAction::Full => "Course Full",
            EnrollAction::Open => "Enroll Now",
        }
    }

    /// The button is disabled unless the course is enrollable.
    pub fn is_disabled(&self) -> bool {
        !matches!(self, EnrollAction::Open)
    }
}

/// Dashboard counters, recomputed from the enrollment list on every render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EnrollmentStats {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}

impl EnrollmentStats {
    pub fn tally(enrollments: &[Enrollment]) -> Self {
        Self {
            total: enrollments.len(),
            active: enrollments.iter().filter(|e| e.is_active()).count(),
            completed: enrollments.iter().filter(|e| e.is_completed()).count(),
        }
    }
}

/// `POST /auth/login` body.
#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST /auth/signup` body.
#[derive(Clone, Debug, Serialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Successful login/signup response.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub user: User,
}

/// `POST /courses` and `PUT /courses/:id` share this shape.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CoursePayload {
    pub title: String,
    pub description: String,
    pub instructor_id: i64,
    pub capacity: u32,
    pub image_url: String,
}

/// `PUT /users/:id` body. The password is omitted from the wire entirely when
/// the user is not changing it.
#[derive(Clone, Debug, Serialize)]
pub struct ProfileUpdate {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// `POST /enrollments` body; the backend resolves the user from the token.
#[derive(Clone, Debug, Serialize)]
pub struct EnrollRequest {
    pub course_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(id: i64, enrolled: u32, capacity: u32) -> Course {
        Course {
            id,
            title: "Intro to Go".into(),
            description: None,
            instructor_id: 2,
            instructor_name: "Pat Instructor".into(),
            capacity,
            enrolled_count: enrolled,
            image_url: None,
            created_at: "2025-02-01T00:00:00Z".into(),
        }
    }

    fn enrollment(course_id: i64, status: &str) -> Enrollment {
        Enrollment {
            id: course_id * 10,
            course_id,
            course_title: format!("Course {course_id}"),
            status: status.into(),
            enrolled_at: "2025-02-02T00:00:00Z".into(),
        }
    }

    #[test]
    fn open_course_is_enrollable() {
        let action = EnrollAction::for_course(&course(1, 10, 50), &HashSet::new());
        assert_eq!(action, EnrollAction::Open);
        assert_eq!(action.label(), "Enroll Now");
        assert!(!action.is_disabled());
    }

    #[test]
    fn full_course_is_disabled() {
        let action = EnrollAction::for_course(&course(1, 50, 50), &HashSet::new());
        assert_eq!(action, EnrollAction::Full);
        assert_eq!(action.label(), "Course Full");
        assert!(action.is_disabled());
    }

    #[test]
    fn over_capacity_still_reads_as_full() {
        let action = EnrollAction::for_course(&course(1, 51, 50), &HashSet::new());
        assert_eq!(action, EnrollAction::Full);
    }

    #[test]
    fn existing_enrollment_wins_over_fullness() {
        let enrolled: HashSet<i64> = [1].into();
        let action = EnrollAction::for_course(&course(1, 50, 50), &enrolled);
        assert_eq!(action, EnrollAction::AlreadyEnrolled);
        assert_eq!(action.label(), "Enrolled");
        assert!(action.is_disabled());
    }

    #[test]
    fn disabled_exactly_when_full_or_enrolled() {
        let enrolled: HashSet<i64> = [3].into();
        assert!(!EnrollAction::for_course(&course(1, 0, 50), &enrolled).is_disabled());
        assert!(EnrollAction::for_course(&course(1, 50, 50), &enrolled).is_disabled());
        assert!(EnrollAction::for_course(&course(3, 0, 50), &enrolled).is_disabled());
    }

    #[test]
    fn stats_tally_counts_by_status() {
        let enrollments = vec![
            enrollment(1, "active"),
            enrollment(2, "completed"),
            enrollment(3, "active"),
            enrollment(4, "dropped"),
        ];
        let stats = EnrollmentStats::tally(&enrollments);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.active, 2);
        assert_eq!(stats.completed, 1);
    }

    #[test]
    fn stats_of_empty_list_are_zero() {
        assert_eq!(EnrollmentStats::tally(&[]), EnrollmentStats::default());
    }

    #[test]
    fn status_label_capitalises() {
        assert_eq!(enrollment(1, "active").status_label(), "Active");
        assert_eq!(enrollment(1, "completed").status_label(), "Completed");
        assert_eq!(enrollment(1, "").status_label(), "");
    }

    #[test]
    fn profile_update_omits_unset_password() {
        let keep = ProfileUpdate {
            email: "a@b.com".into(),
            password: None,
        };
        assert_eq!(
            serde_json::to_string(&keep).unwrap(),
            r#"{"email":"a@b.com"}"#
        );

        let change = ProfileUpdate {
            email: "a@b.com".into(),
            password: Some("hunter2".into()),
        };
        assert_eq!(
            serde_json::to_string(&change).unwrap(),
            r#"{"email":"a@b.com","password":"hunter2"}"#
        );
    }

    #[test]
    fn signup_request_serialises_role_lowercase() {
        let body = SignupRequest {
            username: "jane".into(),
            email: "jane@campushub.com".into(),
            password: "pw".into(),
            role: Role::Instructor,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["role"], "instructor");
    }

    #[test]
    fn auth_response_deserialises() {
        let raw = r#"{
            "access_token": "jwt-abc",
            "user": {
                "id": 1,
                "username": "admin",
                "email": "admin@campushub.com",
                "role": "admin",
                "created_at": "2025-01-01T00:00:00Z"
            }
        }"#;
        let resp: AuthResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(resp.access_token, "jwt-abc");
        assert_eq!(resp.user.role, Role::Admin);
    }

    #[test]
    fn admin_login_response_opens_the_admin_view() {
        use session::{admin_only, GuardDecision, MemoryStorage, SessionStore};

        let raw = r#"{
            "access_token": "jwt-admin",
            "user": {
                "id": 1,
                "username": "admin",
                "email": "admin@campushub.com",
                "role": "admin",
                "created_at": "2025-01-01T00:00:00Z"
            }
        }"#;
        let resp: AuthResponse = serde_json::from_str(raw).unwrap();

        let store = SessionStore::new(MemoryStorage::new());
        store.set_session(&resp.access_token, &resp.user);

        assert!(store.is_admin());
        assert_eq!(admin_only(&store), GuardDecision::Allow);
    }

    #[test]
    fn course_with_null_optionals_deserialises() {
        let raw = r#"{
            "id": 9,
            "title": "Databases",
            "description": null,
            "instructor_id": 2,
            "instructor_name": "Pat",
            "capacity": 50,
            "enrolled_count": 0,
            "image_url": null,
            "created_at": "2025-02-01T00:00:00Z"
        }"#;
        let course: Course = serde_json::from_str(raw).unwrap();
        assert!(course.description.is_none());
        assert!(!course.is_full());
    }
}
