//! Cookie-backed session artifacts.
//!
//! The signup email is HTTP-only so it survives the redirect-based signup flow
//! without ever being readable by page scripts. The browser enforces its
//! max-age; once it lapses the cookie is simply not sent.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

use crate::app_error::{AppError, AppResult};
use crate::application::validators::is_valid_email;

pub const SIGNUP_EMAIL_COOKIE: &str = "signup_email";
pub const ACCESS_TOKEN_COOKIE: &str = "access_token";

/// Store the pending signup email. Fails with `InvalidInput` when the email
/// is missing, blank or malformed; the jar is untouched in that case.
pub fn set_pending_signup_email(
    jar: CookieJar,
    email: Option<&str>,
    ttl: Duration,
    secure: bool,
) -> AppResult<CookieJar> {
    let email = email.map(str::trim).unwrap_or_default();
    if email.is_empty() {
        return Err(AppError::InvalidInput("email is required".into()));
    }
    if !is_valid_email(email) {
        return Err(AppError::InvalidInput("Invalid email format".into()));
    }

    let cookie = Cookie::build((SIGNUP_EMAIL_COOKIE, email.to_owned()))
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(ttl)
        .build();

    Ok(jar.add(cookie))
}

pub fn get_pending_signup_email(jar: &CookieJar) -> AppResult<String> {
    jar.get(SIGNUP_EMAIL_COOKIE)
        .map(|c| c.value().to_owned())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::NotFound("No pending signup email".into()))
}

/// The caller's bearer token, if the login flow left one. Never an error.
pub fn access_token(jar: &CookieJar) -> Option<String> {
    jar.get(ACCESS_TOKEN_COOKIE)
        .map(|c| c.value().to_owned())
        .filter(|v| !v.is_empty())
}
