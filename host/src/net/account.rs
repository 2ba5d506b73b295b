//! Account REST client used by password login, sign-up and the profile page.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "account_test.rs"]
mod account_test;

use serde::{Deserialize, Serialize};
use session::User;

use super::ApiError;

const NO_TOKEN_MESSAGE: &str = "토큰을 받지 못했습니다.";

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub nick_name: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login reply. The backend has used three spellings for the token field.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub user_token: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl LoginResponse {
    /// First non-empty token among `token`, `accessToken`, `userToken`.
    ///
    /// # Errors
    ///
    /// [`ApiError::MissingToken`] carrying the server message, if any.
    pub fn into_token(self) -> Result<String, ApiError> {
        [self.token, self.access_token, self.user_token]
            .into_iter()
            .flatten()
            .find(|t| !t.is_empty())
            .ok_or_else(|| {
                ApiError::MissingToken(
                    self.message
                        .filter(|m| !m.is_empty())
                        .unwrap_or_else(|| NO_TOKEN_MESSAGE.to_owned()),
                )
            })
    }
}

/// `GET /my-profile` reply.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub nick_name: Option<String>,
    #[serde(default)]
    pub login_type: Option<String>,
}

impl Profile {
    /// Profile snapshot kept in the session store for display.
    #[must_use]
    pub fn to_user(&self) -> User {
        User { name: None, email: self.email.clone(), nickname: self.nick_name.clone() }
    }
}

#[cfg_attr(not(feature = "csr"), allow(dead_code))]
fn endpoint(path: &str) -> String {
    format!("{}/{path}", crate::config::account_api_base().trim_end_matches('/'))
}

/// `POST /register`.
///
/// # Errors
///
/// Network failures and non-2xx replies.
pub async fn register(req: &RegisterRequest) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&endpoint("register")).json(req)?.send().await?;
        super::error::check_status(resp).await?;
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = req;
        Err(ApiError::Unavailable)
    }
}

/// `POST /login`, returning the bearer token.
///
/// # Errors
///
/// Network failures, non-2xx replies and replies without a token.
pub async fn login(req: &LoginRequest) -> Result<String, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&endpoint("login")).json(req)?.send().await?;
        let resp = super::error::check_status(resp).await?;
        let body = resp.json::<LoginResponse>().await.unwrap_or_default();
        body.into_token()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = req;
        Err(ApiError::Unavailable)
    }
}

/// `GET /my-profile` with the bearer token.
///
/// # Errors
///
/// Network failures, non-2xx replies and undecodable bodies.
pub async fn my_profile(token: &str) -> Result<Profile, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&endpoint("my-profile"))
            .header("Authorization", &format!("Bearer {token}"))
            .send()
            .await?;
        let resp = super::error::check_status(resp).await?;
        resp.json::<Profile>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// Register, log straight in and fetch the display profile.
///
/// A failed profile fetch is not fatal; the session is stored without one.
///
/// # Errors
///
/// Failures of the register or login step.
pub async fn register_and_login(req: RegisterRequest) -> Result<(String, Option<User>), ApiError> {
    register(&req).await?;
    let token = login(&LoginRequest { email: req.email, password: req.password }).await?;
    let user = match my_profile(&token).await {
        Ok(profile) => Some(profile.to_user()),
        Err(e) => {
            log::warn!("profile fetch after sign-up failed: {e}");
            None
        }
    };
    Ok((token, user))
}
