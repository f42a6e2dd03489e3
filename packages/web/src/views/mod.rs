mod navbar;
pub use navbar::NavBar;

mod hero;
pub use hero::Hero;

mod login;
pub use login::Login;

mod signup;
pub use signup::Signup;

mod courses;
pub use courses::Courses;

mod dashboard;
pub use dashboard::Dashboard;

mod profile;
pub use profile::Profile;

mod admin;
pub use admin::Admin;

mod not_found;
pub use not_found::NotFound;
