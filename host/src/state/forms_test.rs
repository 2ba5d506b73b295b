use super::*;

// =============================================================
// email
// =============================================================

#[test]
fn email_shapes() {
    assert!(is_valid_email("kim@example.com"));
    assert!(is_valid_email("a@b.c"));
    assert!(!is_valid_email("kim@example"));
    assert!(!is_valid_email("kim@.com"));
    assert!(!is_valid_email("kim@example."));
    assert!(!is_valid_email("@example.com"));
    assert!(!is_valid_email("kim@@example.com"));
    assert!(!is_valid_email("kim @example.com"));
}

// =============================================================
// sign-up
// =============================================================

#[test]
fn valid_signup_has_no_errors() {
    assert!(validate_signup("kim@example.com", "kim", "secret1", "secret1").is_empty());
}

#[test]
fn signup_reports_every_field() {
    let errors = validate_signup("", " ", "", "x");
    assert_eq!(errors.email, Some("이메일을 입력해 주세요."));
    assert_eq!(errors.nickname, Some("닉네임을 입력해 주세요."));
    assert_eq!(errors.password, Some("비밀번호를 입력해 주세요."));
    assert_eq!(errors.confirm, Some("비밀번호가 일치하지 않습니다."));
}

#[test]
fn short_password_and_bad_email() {
    let errors = validate_signup("kim", "kim", "12345", "12345");
    assert_eq!(errors.email, Some("올바른 이메일 형식이 아닙니다."));
    assert_eq!(errors.password, Some("비밀번호는 6자 이상이어야 합니다."));
    assert_eq!(errors.confirm, None);
}

#[test]
fn password_length_counts_characters() {
    assert!(validate_signup("kim@example.com", "kim", "비밀번호여섯", "비밀번호여섯").is_empty());
}

#[test]
fn unique_violation_reads_as_duplicate_email() {
    assert_eq!(
        signup_failure_message("HTTP 500 duplicate key violates unique constraint"),
        "이미 가입된 이메일일 수 있어요."
    );
    assert_eq!(signup_failure_message("HTTP 400"), "HTTP 400");
    assert_eq!(signup_failure_message(""), "회원가입 중 오류가 발생했습니다.");
}

// =============================================================
// login / edit
// =============================================================

#[test]
fn login_checks_email_first() {
    assert_eq!(validate_login(" ", ""), Err(LoginFieldError::Email));
    assert_eq!(validate_login("kim@example.com", " "), Err(LoginFieldError::Password));
    assert_eq!(validate_login("kim@example.com", "pw"), Ok(()));
}

#[test]
fn edit_profile_gate() {
    assert!(edit_profile_ready("", "1234", "123456"));
    assert!(edit_profile_ready("ab", "1234", "123456"));
    assert!(!edit_profile_ready("a", "1234", "123456"));
    assert!(!edit_profile_ready("", "123", "123456"));
    assert!(!edit_profile_ready("", "1234", "12345"));
}
