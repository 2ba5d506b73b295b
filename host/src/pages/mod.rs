//! Routed page components.

pub mod domestic;
pub mod home;
pub mod login;
pub mod mypage;
pub mod signup;
pub mod support;
