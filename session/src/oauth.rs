//! Popup login protocol.
//!
//! The host opens a popup on the backend's authentication start path. The
//! popup's final page posts one message back to the opener. That message is
//! only trusted when its origin equals the configured backend origin; it is
//! then decoded into an explicit [`PopupMessage`] instead of guessing from
//! whichever fields happen to be present.

#[cfg(test)]
#[path = "oauth_test.rs"]
mod oauth_test;

use std::rc::Rc;

use serde_json::{Map, Value};

use crate::error::SessionError;
use crate::model::{PendingSignup, Session, User};
use crate::notify::{AuthChanged, ChangeChannel, ChangeReason};
use crate::store::SessionStore;

/// Window name of the login popup.
pub const POPUP_NAME: &str = "kakao-login";

/// Decoded popup payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PopupMessage {
    /// `{ userToken, user }`: an existing account finished logging in.
    Existing { user_token: String, user: Option<User> },
    /// `{ newUser: true, temporaryUserToken, user, loginType? }`: a first-time
    /// account that must complete sign-up.
    NewUser {
        temporary_token: String,
        user: Option<User>,
        login_type: Option<String>,
    },
}

/// Why a trusted-origin message was still refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MessageError {
    #[error("popup message is not a JSON object")]
    NotAnObject,
    #[error("popup message carries both `userToken` and `newUser`")]
    Ambiguous,
    #[error("popup message matches no known shape")]
    Unrecognized,
    #[error("popup message field `{0}` is malformed")]
    Malformed(&'static str),
}

impl PopupMessage {
    /// Decode a structured-clone payload already converted to JSON.
    ///
    /// # Errors
    ///
    /// Returns [`MessageError`] for anything that is not exactly one of the
    /// two known shapes.
    pub fn from_value(value: &Value) -> Result<Self, MessageError> {
        let obj = value.as_object().ok_or(MessageError::NotAnObject)?;

        let user_token = obj.get("userToken").filter(|v| !v.is_null());
        let new_user = obj.get("newUser").and_then(Value::as_bool).unwrap_or(false);

        match (user_token, new_user) {
            (Some(_), true) => Err(MessageError::Ambiguous),
            (Some(token), false) => Ok(Self::Existing {
                user_token: non_empty_str(token, "userToken")?,
                user: decode_user(obj)?,
            }),
            (None, true) => {
                let token = obj
                    .get("temporaryUserToken")
                    .ok_or(MessageError::Malformed("temporaryUserToken"))?;
                let login_type = match obj.get("loginType") {
                    None | Some(Value::Null) => None,
                    Some(Value::String(s)) => Some(s.clone()),
                    Some(_) => return Err(MessageError::Malformed("loginType")),
                };
                Ok(Self::NewUser {
                    temporary_token: non_empty_str(token, "temporaryUserToken")?,
                    user: decode_user(obj)?,
                    login_type,
                })
            }
            (None, false) => Err(MessageError::Unrecognized),
        }
    }
}

fn non_empty_str(value: &Value, field: &'static str) -> Result<String, MessageError> {
    value
        .as_str()
        .filter(|s| !s.is_empty())
        .map(ToOwned::to_owned)
        .ok_or(MessageError::Malformed(field))
}

fn decode_user(obj: &Map<String, Value>) -> Result<Option<User>, MessageError> {
    match obj.get("user") {
        None | Some(Value::Null) => Ok(None),
        Some(raw) => serde_json::from_value::<User>(raw.clone())
            .map(Some)
            .map_err(|_| MessageError::Malformed("user")),
    }
}

/// Failure while applying a trusted popup message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PopupError {
    #[error(transparent)]
    Message(#[from] MessageError),
    #[error(transparent)]
    Storage(#[from] SessionError),
}

/// What the opener should do after a message event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PopupOutcome {
    /// Foreign origin; dropped without a trace.
    Ignored,
    /// Session written and announced; go home.
    LoggedIn(Session),
    /// Pending sign-up written and announced; go to the sign-up page.
    SignupRequired(PendingSignup),
    /// Trusted origin but unusable payload or failed write.
    Rejected(PopupError),
}

impl PopupOutcome {
    /// Whether the popup window should now be closed.
    #[must_use]
    pub fn closes_popup(&self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// Applies popup messages to the shared session.
pub struct OAuthBridge {
    expected_origin: String,
    store: SessionStore,
    channel: Rc<dyn ChangeChannel>,
}

impl OAuthBridge {
    /// `expected_origin` is compared verbatim after dropping trailing `/`.
    pub fn new(expected_origin: &str, store: SessionStore, channel: Rc<dyn ChangeChannel>) -> Self {
        Self {
            expected_origin: expected_origin.trim_end_matches('/').to_owned(),
            store,
            channel,
        }
    }

    #[must_use]
    pub fn expected_origin(&self) -> &str {
        &self.expected_origin
    }

    #[must_use]
    pub fn trusts(&self, origin: &str) -> bool {
        origin == self.expected_origin
    }

    /// Handle one `message` event delivered to the opener window.
    pub fn handle(&self, origin: &str, data: &Value) -> PopupOutcome {
        if !self.trusts(origin) {
            log::debug!("dropping popup message from untrusted origin {origin}");
            return PopupOutcome::Ignored;
        }

        let message = match PopupMessage::from_value(data) {
            Ok(message) => message,
            Err(e) => {
                log::warn!("rejecting popup message: {e}");
                return PopupOutcome::Rejected(e.into());
            }
        };

        match self.apply(message) {
            Ok(outcome) => outcome,
            Err(e) => {
                log::warn!("could not persist popup login: {e}");
                PopupOutcome::Rejected(e.into())
            }
        }
    }

    fn apply(&self, message: PopupMessage) -> Result<PopupOutcome, SessionError> {
        match message {
            PopupMessage::Existing { user_token, user } => {
                self.store.write(&user_token, user.as_ref())?;
                if let Err(e) = self.store.clear_pending() {
                    log::warn!("could not clear pending sign-up: {e}");
                }
                self.channel.announce(AuthChanged::new(ChangeReason::Login));
                Ok(PopupOutcome::LoggedIn(self.store.read()))
            }
            PopupMessage::NewUser { temporary_token, user, .. } => {
                let pending = PendingSignup { temporary_token, user };
                self.store.write_pending(&pending)?;
                self.channel.announce(AuthChanged::new(ChangeReason::PendingSignup));
                Ok(PopupOutcome::SignupRequired(pending))
            }
        }
    }
}

/// Position and size of the login popup, centred over the top window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PopupGeometry {
    pub width: i32,
    pub height: i32,
    pub left: i32,
    pub top: i32,
}

impl PopupGeometry {
    pub const WIDTH: i32 = 460;
    pub const HEIGHT: i32 = 680;

    /// Centre a popup over a window of `outer_width` x `outer_height` whose
    /// top-left corner sits at (`screen_x`, `screen_y`).
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn centered(outer_width: f64, outer_height: f64, screen_x: f64, screen_y: f64) -> Self {
        let left = outer_width / 2.0 + screen_x - f64::from(Self::WIDTH) / 2.0;
        let top = outer_height / 2.0 + screen_y - f64::from(Self::HEIGHT) / 2.0;
        Self {
            width: Self::WIDTH,
            height: Self::HEIGHT,
            left: left.round() as i32,
            top: top.round() as i32,
        }
    }

    /// `window.open` feature string.
    #[must_use]
    pub fn features(&self) -> String {
        format!(
            "width={},height={},left={},top={},resizable=no,scrollbars=yes",
            self.width, self.height, self.left, self.top
        )
    }
}
