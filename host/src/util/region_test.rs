use super::*;

#[test]
fn all_regions_sends_no_location() {
    assert_eq!(to_api_location(ALL_REGIONS), None);
    assert_eq!(to_api_location(""), None);
}

#[test]
fn short_names_map_to_backend_names() {
    assert_eq!(to_api_location("서울"), Some("서울특별시"));
    assert_eq!(to_api_location("제주"), Some("제주특별자치도"));
    assert_eq!(to_api_location("강원"), Some("강원특별자치도"));
}

#[test]
fn unknown_region_is_passed_through() {
    assert_eq!(to_api_location("독도"), Some("독도"));
}

#[test]
fn stored_location_takes_first_word() {
    assert_eq!(to_short("인천광역시 중구 월미로"), Some("인천"));
    assert_eq!(to_short("  제주특별자치도"), Some("제주"));
    assert_eq!(to_short("강원도 강릉시"), Some("강원"));
    assert_eq!(to_short("어딘가"), Some("어딘가"));
    assert_eq!(to_short("   "), None);
}

#[test]
fn region_filter() {
    assert!(matches_region(None, ALL_REGIONS));
    assert!(matches_region(Some("부산광역시 해운대구"), "부산"));
    assert!(!matches_region(Some("부산광역시 해운대구"), "서울"));
    assert!(!matches_region(None, "서울"));
}

#[test]
fn every_chip_but_all_has_a_long_name() {
    for region in REGIONS.iter().skip(1) {
        assert_ne!(to_api_location(region), Some(*region), "{region}");
    }
}
