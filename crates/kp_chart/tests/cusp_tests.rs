use kp_chart::houses::{placidus::placidus_cusps, sidereal_cusps};
use kp_chart::time::parse_local_datetime;
use kp_chart::{
    analyze, ayanamsa_offset, compute_house_cusps, normalize_degrees, Ayanamsa, Chart,
    ChartError, GeoPosition, House, HouseSystem, PlacidusCorrections,
};

fn seoul_chart(system: HouseSystem, ayanamsa: Ayanamsa) -> Chart {
    Chart::new(
        parse_local_datetime("2012-01-19T11:21:00").unwrap(),
        "Asia/Seoul",
        GeoPosition::new(37.38, 127.1188).unwrap(),
        system,
        ayanamsa,
    )
    .unwrap()
}

fn house(n: u8) -> House {
    House::new(n).unwrap()
}

#[test]
fn test_seoul_angular_cusps_exactly_opposite() {
    let cusps = compute_house_cusps(&seoul_chart(HouseSystem::Placidus, Ayanamsa::Lahiri));
    assert_eq!(cusps.get(house(7)), normalize_degrees(cusps.get(house(1)) + 180.0));
    assert_eq!(cusps.get(house(10)), normalize_degrees(cusps.get(house(4)) + 180.0));
}

#[test]
fn test_antipodes_hold_across_places() {
    let places = [(0.0, 0.0), (51.5, -0.12), (-33.9, 151.2), (64.1, -21.9), (-54.8, -68.3)];
    for (lat, lon) in places {
        let chart = Chart::new(
            parse_local_datetime("1987-07-04 06:30:00").unwrap(),
            "UTC",
            GeoPosition::new(lat, lon).unwrap(),
            HouseSystem::Placidus,
            Ayanamsa::KpNew,
        )
        .unwrap();
        let cusps = compute_house_cusps(&chart);
        for n in 1..=6 {
            let h = house(n);
            if matches!(n, 1 | 4) {
                assert_eq!(cusps.get(h.opposite()), normalize_degrees(cusps.get(h) + 180.0));
            }
            assert!((0.0..360.0).contains(&cusps.get(h)));
        }
    }
}

#[test]
fn test_seoul_placidus_cusps_match_golden_values() {
    let cusps = compute_house_cusps(&seoul_chart(HouseSystem::Placidus, Ayanamsa::Lahiri));
    let expected = [172.7272, 156.9498, 143.9128, 75.5871, 59.0355, 46.7073];
    for (n, want) in (1..=6u8).zip(expected) {
        let got = cusps.get(house(n));
        assert!((got - want).abs() < 0.01, "house {n}: got {got}, want {want}");
        let opposite = cusps.get(house(n).opposite());
        assert!(
            (opposite - normalize_degrees(want + 180.0)).abs() < 0.01,
            "house {}: got {opposite}",
            n + 6
        );
    }
    assert!(!cusps.is_ascending());
}

#[test]
fn test_both_ayanamsas_agree_but_stay_distinct() {
    let jd = 2_455_945.598;
    assert_eq!(
        ayanamsa_offset(jd, "LAHIRI").unwrap(),
        ayanamsa_offset(jd, "KP_NEW").unwrap()
    );
    assert_ne!(Ayanamsa::Lahiri, Ayanamsa::KpNew);
    let a = compute_house_cusps(&seoul_chart(HouseSystem::Placidus, Ayanamsa::Lahiri));
    let b = compute_house_cusps(&seoul_chart(HouseSystem::Placidus, Ayanamsa::KpNew));
    assert_eq!(a, b);
}

#[test]
fn test_unknown_ayanamsa_fails() {
    match ayanamsa_offset(2_451_545.0, "FOO") {
        Err(ChartError::InvalidAyanamsa { ayanamsa, valid }) => {
            assert_eq!(ayanamsa, "FOO");
            assert!(valid.contains(&"LAHIRI".to_string()));
        }
        other => panic!("expected InvalidAyanamsa, got {other:?}"),
    }
}

#[test]
fn test_analysis_matches_direct_cusps() {
    let chart = seoul_chart(HouseSystem::Placidus, Ayanamsa::Lahiri);
    let analysis = analyze(&chart);
    assert_eq!(analysis.house_cusps, compute_house_cusps(&chart));
    assert_eq!(analysis.basic_info.datetime, "2012-01-19T11:21:00");
    assert_eq!(analysis.basic_info.timezone, "Asia/Seoul");
    assert_eq!(analysis, analyze(&chart));
}

#[test]
fn test_placidus_cusps_are_pure() {
    let corrections = PlacidusCorrections::default();
    let tropical = placidus_cusps(295.8, 227.4, 37.38, 23.4373, &corrections);
    assert_eq!(tropical, placidus_cusps(295.8, 227.4, 37.38, 23.4373, &corrections));
    let sidereal = sidereal_cusps(&tropical, 24.0);
    assert!((sidereal.get(house(1)) - 271.8).abs() < 1e-9);
}
