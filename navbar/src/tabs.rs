//! Category and my-page tab sets, with active-tab matching.

#[cfg(test)]
#[path = "tabs_test.rs"]
mod tabs_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Match {
    /// The path itself or anything below it.
    Prefix,
    /// `/mypage`, `/mypage/profile`, with or without a trailing slash.
    ProfileRoot,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tab {
    pub href: &'static str,
    pub label: &'static str,
    rule: Match,
}

impl Tab {
    const fn prefix(href: &'static str, label: &'static str) -> Self {
        Self { href, label, rule: Match::Prefix }
    }

    #[must_use]
    pub fn is_active(&self, path: &str) -> bool {
        match self.rule {
            Match::Prefix => path == self.href || path.strip_prefix(self.href).is_some_and(|rest| rest.starts_with('/')),
            Match::ProfileRoot => matches!(path, "/mypage" | "/mypage/" | "/mypage/profile" | "/mypage/profile/"),
        }
    }
}

pub const MAIN_TABS: [Tab; 4] = [
    Tab::prefix("/domestic", "국내여행"),
    Tab::prefix("/theme", "테마여행"),
    Tab::prefix("/custom", "맞춤여행"),
    Tab::prefix("/reviews", "리뷰게시판"),
];

pub const MYPAGE_TABS: [Tab; 3] = [
    Tab { href: "/mypage/profile", label: "내프로필", rule: Match::ProfileRoot },
    Tab::prefix("/mypage/edit", "회원정보 수정"),
    Tab::prefix("/mypage/delete", "회원탈퇴"),
];
