//! Province names used by the region search page.
//!
//! The UI shows short names ("서울"); the place database stores official
//! long names ("서울특별시"), sometimes followed by a district. These helpers
//! translate in both directions.

#[cfg(test)]
#[path = "region_test.rs"]
mod region_test;

/// Pseudo-region meaning "no location filter".
pub const ALL_REGIONS: &str = "전국";

/// Region chips in display order.
pub const REGIONS: [&str; 17] = [
    ALL_REGIONS, "서울", "세종", "부산", "인천", "경기", "강원", "충북", "충남", "전북", "전남", "경북", "경남",
    "광주", "대구", "울산", "제주",
];

/// Short name to the long name stored by the backend.
const SHORT_TO_LONG: [(&str, &str); 16] = [
    ("서울", "서울특별시"),
    ("인천", "인천광역시"),
    ("부산", "부산광역시"),
    ("대구", "대구광역시"),
    ("광주", "광주광역시"),
    ("울산", "울산광역시"),
    ("세종", "세종특별자치시"),
    ("경기", "경기도"),
    ("강원", "강원특별자치도"),
    ("충북", "충청북도"),
    ("충남", "충청남도"),
    ("전북", "전라북도"),
    ("전남", "전라남도"),
    ("경북", "경상북도"),
    ("경남", "경상남도"),
    ("제주", "제주특별자치도"),
];

/// Long spellings that are not the canonical long name.
const EXTRA_LONG: [(&str, &str); 1] = [("강원도", "강원")];

/// Location filter to send for a selected chip; `None` for [`ALL_REGIONS`].
#[must_use]
pub fn to_api_location(region: &str) -> Option<&str> {
    if region.is_empty() || region == ALL_REGIONS {
        return None;
    }
    Some(
        SHORT_TO_LONG
            .iter()
            .find(|(short, _)| *short == region)
            .map_or(region, |(_, long)| *long),
    )
}

/// Short region of a stored location such as `"인천광역시 중구 ..."`.
#[must_use]
pub fn to_short(location: &str) -> Option<&str> {
    let first = location.split_whitespace().next()?;
    let short = SHORT_TO_LONG
        .iter()
        .find(|(_, long)| *long == first)
        .map(|(short, _)| *short)
        .or_else(|| EXTRA_LONG.iter().find(|(long, _)| *long == first).map(|(_, short)| *short));
    Some(short.unwrap_or(first))
}

/// Whether a place at `location` belongs under the selected chip.
#[must_use]
pub fn matches_region(location: Option<&str>, region: &str) -> bool {
    region == ALL_REGIONS || location.and_then(to_short) == Some(region)
}
