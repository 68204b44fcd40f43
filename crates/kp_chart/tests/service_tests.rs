use kp_chart::kp::RawLordship;
use kp_chart::{ChartInput, ChartReport, KpService, Level, LordshipTable, RecordingDiagnostics};
use kp_config::KpSettings;
use std::sync::Arc;

fn request(datetime: &str, lat: f64, lon: f64) -> ChartInput {
    ChartInput {
        datetime: Some(datetime.into()),
        latitude: Some(lat),
        longitude: Some(lon),
        ..ChartInput::default()
    }
}

#[test]
fn test_parallel_charts_match_sequential() {
    let service = KpService::default();
    let inputs: Vec<ChartInput> = (0..16)
        .map(|i| {
            request(
                &format!("1990-{:02}-{:02}T{:02}:15:00", i % 12 + 1, i + 1, i % 24),
                -40.0 + i as f64 * 5.0,
                -170.0 + i as f64 * 20.0,
            )
        })
        .collect();

    let sequential: Vec<ChartReport> = inputs.iter().map(|i| service.report(i)).collect();
    let shared = &service;
    let parallel: Vec<ChartReport> = std::thread::scope(|scope| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|input| scope.spawn(move || shared.report(input)))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(sequential, parallel);
    assert!(sequential.iter().all(ChartReport::is_ok));
}

#[test]
fn test_diagnostics_are_recorded_not_printed() {
    let diag = Arc::new(RecordingDiagnostics::new());
    let service = KpService::default().with_diagnostics(diag.clone());
    let mut input = request("2012-01-19T11:21:00", 37.38, 127.1188);
    input.house_planets.insert(2, "명왕성".into());
    input.planet_angles.insert("moon".into(), "??".into());

    let report = service.report(&input);
    assert!(report.is_ok());
    assert!(diag.contains(Level::Debug, "obliquity="));
    assert!(diag.contains(Level::Warn, "명왕성"));
    assert!(diag.contains(Level::Warn, "moon"));
    assert!(diag.at_level(Level::Error).is_empty());
}

#[test]
fn test_dst_gap_is_reported() {
    let diag = Arc::new(RecordingDiagnostics::new());
    let service = KpService::default().with_diagnostics(diag.clone());
    let mut input = request("2021-03-14T02:30:00", 40.71, -74.0);
    input.timezone = Some("America/New_York".into());

    assert!(service.report(&input).is_ok());
    assert!(diag.contains(Level::Warn, "does not exist"));
}

struct SaturnEverywhere;

impl LordshipTable for SaturnEverywhere {
    fn lookup(&self, _sidereal_degree: f64) -> Option<RawLordship> {
        Some(RawLordship {
            sign_lord: "토성".into(),
            nakshatra_lord: "Sa".into(),
            sub_lord: "saturn".into(),
        })
    }
}

#[test]
fn test_external_table_is_used() {
    let service = KpService::default().with_table(Arc::new(SaturnEverywhere));
    let mut input = request("2012-01-19T11:21:00", 37.38, 127.1188);
    input.planet_angles.insert("Sa".into(), "100º00'00\"".into());

    let report = service.report(&input);
    let saturn = kp_chart::Planet::Saturn;
    for sigs in report.house_significators.values() {
        assert_eq!(sigs.a, vec![saturn]);
        assert_eq!(sigs.b, vec![saturn]);
    }
    assert_eq!(report.planet_significators[&saturn].a.len(), 12);
}

#[test]
fn test_settings_feed_the_service() {
    let settings = KpSettings::from_toml_str(
        r#"
        [defaults]
        timezone = "Europe/London"
        ayanamsa = "KP_NEW"

        [placidus]
        correction_gain = 0.0
        "#,
    )
    .unwrap();
    let service = KpService::new(&settings);
    assert_eq!(service.defaults().timezone, "Europe/London");
    assert_eq!(service.calculator().corrections().gain, 0.0);

    let report = service.report(&ChartInput {
        datetime: Some("2012-01-19T11:21:00".into()),
        ..ChartInput::default()
    });
    let info = report.basic_info.unwrap();
    assert_eq!(info.timezone, "Europe/London");
    assert_eq!(info.ayanamsa, kp_chart::Ayanamsa::KpNew);
    assert_eq!(info.latitude, 37.38);
}
