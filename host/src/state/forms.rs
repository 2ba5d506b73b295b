//! Form validation for the account pages.
//!
//! Messages are the exact texts shown under each field. Lengths count
//! characters, not bytes.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

pub const SIGNUP_MIN_PASSWORD: usize = 6;
pub const EDIT_MIN_NICKNAME: usize = 2;
pub const EDIT_MIN_CURRENT_PASSWORD: usize = 4;

/// Loose `local@domain.tld` check: no whitespace, one `@`, a dot inside the
/// domain with text on both sides.
#[must_use]
pub fn is_valid_email(raw: &str) -> bool {
    if raw.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupErrors {
    pub email: Option<&'static str>,
    pub nickname: Option<&'static str>,
    pub password: Option<&'static str>,
    pub confirm: Option<&'static str>,
}

impl SignupErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[must_use]
pub fn validate_signup(email: &str, nickname: &str, password: &str, confirm: &str) -> SignupErrors {
    let email_error = if email.trim().is_empty() {
        Some("이메일을 입력해 주세요.")
    } else if !is_valid_email(email.trim()) {
        Some("올바른 이메일 형식이 아닙니다.")
    } else {
        None
    };
    let password_error = if password.is_empty() {
        Some("비밀번호를 입력해 주세요.")
    } else if password.chars().count() < SIGNUP_MIN_PASSWORD {
        Some("비밀번호는 6자 이상이어야 합니다.")
    } else {
        None
    };
    SignupErrors {
        email: email_error,
        nickname: nickname.trim().is_empty().then_some("닉네임을 입력해 주세요."),
        password: password_error,
        confirm: (confirm != password).then_some("비밀번호가 일치하지 않습니다."),
    }
}

/// User-facing text for a failed sign-up.
#[must_use]
pub fn signup_failure_message(error: &str) -> String {
    if error.contains("unique") {
        "이미 가입된 이메일일 수 있어요.".to_owned()
    } else if error.is_empty() {
        "회원가입 중 오류가 발생했습니다.".to_owned()
    } else {
        error.to_owned()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginFieldError {
    Email,
    Password,
}

impl LoginFieldError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Email => "이메일을 입력해 주세요.",
            Self::Password => "비밀번호를 입력해 주세요.",
        }
    }
}

/// First missing login field, checked in display order.
///
/// # Errors
///
/// The field that is blank.
pub fn validate_login(email: &str, password: &str) -> Result<(), LoginFieldError> {
    if email.trim().is_empty() {
        return Err(LoginFieldError::Email);
    }
    if password.trim().is_empty() {
        return Err(LoginFieldError::Password);
    }
    Ok(())
}

/// Profile edit submit gate: optional nickname of two or more characters,
/// current password of four or more, new password of six or more.
#[must_use]
pub fn edit_profile_ready(nickname: &str, current_password: &str, new_password: &str) -> bool {
    let nickname_len = nickname.chars().count();
    (nickname_len == 0 || nickname_len >= EDIT_MIN_NICKNAME)
        && current_password.chars().count() >= EDIT_MIN_CURRENT_PASSWORD
        && new_password.chars().count() >= SIGNUP_MIN_PASSWORD
}
