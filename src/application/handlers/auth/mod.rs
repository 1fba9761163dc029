//! Authentication handlers.

mod session_controller;

pub use session_controller::{
    AuthSessionController, CHECK_ENDPOINT, LOGIN_ENDPOINT, LOGOUT_ENDPOINT, SIGNUP_ENDPOINT,
};
