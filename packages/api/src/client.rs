//! # HTTP client bound to the CampusHub backend
//!
//! [`ApiClient`] wraps one [`reqwest::Client`] configured with a base URL and
//! a [`SessionStore`]. Every outgoing request picks up the current access
//! token, if there is one, as a bearer credential; unauthenticated requests go
//! out bare and the backend answers with an authorization error.
//!
//! The generic verbs ([`get`](ApiClient::get), [`post`](ApiClient::post),
//! [`put`](ApiClient::put), [`delete`](ApiClient::delete)) do the transport
//! work; the typed wrappers below them pin down the exact paths and payload
//! shapes of the backend surface so views never spell out a path themselves.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use serde::Serialize;
use session::{SessionStorage, SessionStore, User};

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{
    AuthResponse, Course, CoursePayload, EnrollRequest, Enrollment, LoginRequest,
    ProfileUpdate, SignupRequest,
};

/// HTTP client for the backend, carrying the session for token attachment.
#[derive(Clone, Debug)]
pub struct ApiClient<S: SessionStorage> {
    http: reqwest::Client,
    base_url: String,
    session: SessionStore<S>,
}

impl<S: SessionStorage> ApiClient<S> {
    pub fn new(config: ApiConfig, session: SessionStore<S>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url,
            session,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Send a prepared request and parse the response body, mapping non-2xx
    /// statuses to [`ApiError::Backend`] with the backend's own message.
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = self.authorize(request).send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ApiError::from_response(status.as_u16(), &body));
        }
        Ok(serde_json::from_str(&body)?)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(self.http.get(self.url(path))).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.send(self.http.post(self.url(path)).json(body)).await
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.send(self.http.put(self.url(path)).json(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(self.http.delete(self.url(path))).await
    }

    // ---- typed backend surface ----

    /// `POST /auth/login`
    pub async fn login(&self, email: String, password: String) -> Result<AuthResponse, ApiError> {
        self.post("/auth/login", &LoginRequest { email, password })
            .await
    }

    /// `POST /auth/signup`
    pub async fn signup(&self, request: SignupRequest) -> Result<AuthResponse, ApiError> {
        self.post("/auth/signup", &request).await
    }

    /// `GET /courses`
    pub async fn list_courses(&self) -> Result<Vec<Course>, ApiError> {
        self.get("/courses").await
    }

    /// `POST /courses` (admin)
    pub async fn create_course(&self, payload: &CoursePayload) -> Result<Course, ApiError> {
        self.post("/courses", payload).await
    }

    /// `PUT /courses/:id` (admin)
    pub async fn update_course(
        &self,
        course_id: i64,
        payload: &CoursePayload,
    ) -> Result<Course, ApiError> {
        self.put(&format!("/courses/{course_id}"), payload).await
    }

    /// `DELETE /courses/:id` (admin). The backend answers with a confirmation
    /// message the client has no use for.
    pub async fn delete_course(&self, course_id: i64) -> Result<(), ApiError> {
        let _: serde_json::Value = self.delete(&format!("/courses/{course_id}")).await?;
        Ok(())
    }

    /// `GET /users` (admin)
    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.get("/users").await
    }

    /// `PUT /users/:id` — self profile update.
    pub async fn update_profile(
        &self,
        user_id: i64,
        update: &ProfileUpdate,
    ) -> Result<User, ApiError> {
        self.put(&format!("/users/{user_id}"), update).await
    }

    /// `GET /enrollments/user/:id`
    pub async fn user_enrollments(&self, user_id: i64) -> Result<Vec<Enrollment>, ApiError> {
        self.get(&format!("/enrollments/user/{user_id}")).await
    }

    /// `POST /enrollments` — enroll the current user.
    pub async fn enroll(&self, course_id: i64) -> Result<Enrollment, ApiError> {
        self.post("/enrollments", &EnrollRequest { course_id }).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use session::MemoryStorage;

    fn client() -> ApiClient<MemoryStorage> {
        ApiClient::new(
            ApiConfig::new("http://localhost:5000/api"),
            SessionStore::new(MemoryStorage::new()),
        )
    }

    #[test]
    fn joins_paths_onto_the_base_url() {
        let client = client();
        assert_eq!(client.url("/courses"), "http://localhost:5000/api/courses");
        assert_eq!(
            client.url("/enrollments/user/7"),
            "http://localhost:5000/api/enrollments/user/7"
        );
    }

    #[test]
    fn trailing_slash_in_config_does_not_double_up() {
        let client = ApiClient::new(
            ApiConfig::new("http://localhost:5000/api/"),
            SessionStore::new(MemoryStorage::new()),
        );
        assert_eq!(client.url("/users"), "http://localhost:5000/api/users");
    }
}
