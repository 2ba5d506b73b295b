//! Reusable UI components.

pub mod kakao_login_button;
pub mod remote_nav;
