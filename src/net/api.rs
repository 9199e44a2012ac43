//! REST helpers for communicating with the auth backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so session and
//! credential failures degrade UI behavior without crashing hydration.

#![allow(clippy::unused_async)]

use super::types::User;

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// End the current session via `POST /api/auth/logout`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server answers with
/// a non-success status. The session is still live in that case.
pub async fn logout() -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/logout")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("server answered {}", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Ok(())
    }
}

/// Sign in with email and password via `POST /api/auth/signin`.
///
/// # Errors
///
/// Returns a user-presentable error string on bad credentials or transport
/// failure.
pub async fn sign_in(email: &str, password: &str) -> Result<User, String> {
    credentials_request(
        "/api/auth/signin",
        &serde_json::json!({
            "email": email,
            "password": password,
        }),
    )
    .await
}

/// Create an account via `POST /api/auth/signup`.
///
/// # Errors
///
/// Returns a user-presentable error string when the account cannot be
/// created.
pub async fn sign_up(first_name: &str, email: &str, password: &str) -> Result<User, String> {
    credentials_request(
        "/api/auth/signup",
        &serde_json::json!({
            "firstName": first_name,
            "email": email,
            "password": password,
        }),
    )
    .await
}

async fn credentials_request(url: &str, body: &serde_json::Value) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(url)
            .json(body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(match resp.status() {
                401 | 403 => "Invalid email or password".to_owned(),
                409 => "An account with this email already exists".to_owned(),
                status => format!("request failed: {status}"),
            });
        }
        resp.json::<User>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, body);
        Err("not available during server rendering".to_owned())
    }
}
