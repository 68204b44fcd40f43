//! Configured entry point tying the chart pipeline, lordship table and
//! significator cascade together.

use crate::chart::{Chart, ChartAnalysis, ChartCalculator, ChartInput};
use crate::diagnostics::{Diagnostics, LogDiagnostics};
use crate::error::ChartError;
use crate::houses::{House, HouseCusps, HouseTable, PlacidusCorrections};
use crate::kp::{
    KpSubLordTable, LordshipResolver, LordshipTable, LordshipTriple, Occupancy, Planet,
    SignificatorTable,
};
use crate::report::{ChartReport, CuspRow};
use kp_config::{ChartDefaults, KpSettings};
use std::collections::BTreeMap;
use std::sync::Arc;

const TARGET: &str = "kp_chart::service";

/// Shares one read-only lordship table across every chart it computes.
#[derive(Clone)]
pub struct KpService {
    calculator: ChartCalculator,
    table: Arc<dyn LordshipTable>,
    diagnostics: Arc<dyn Diagnostics>,
    defaults: ChartDefaults,
}

impl Default for KpService {
    fn default() -> Self {
        Self::new(&KpSettings::default())
    }
}

impl KpService {
    /// Built-in KP table, `log` diagnostics.
    pub fn new(settings: &KpSettings) -> Self {
        let diagnostics: Arc<dyn Diagnostics> = Arc::new(LogDiagnostics);
        Self {
            calculator: ChartCalculator::new(
                PlacidusCorrections::from(&settings.placidus),
                diagnostics.clone(),
            ),
            table: Arc::new(KpSubLordTable::new()),
            diagnostics,
            defaults: settings.defaults.clone(),
        }
    }

    pub fn with_table(mut self, table: Arc<dyn LordshipTable>) -> Self {
        self.table = table;
        self
    }

    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn Diagnostics>) -> Self {
        self.calculator = ChartCalculator::new(*self.calculator.corrections(), diagnostics.clone());
        self.diagnostics = diagnostics;
        self
    }

    pub fn calculator(&self) -> &ChartCalculator {
        &self.calculator
    }

    pub fn defaults(&self) -> &ChartDefaults {
        &self.defaults
    }

    fn resolver(&self) -> LordshipResolver<'_> {
        LordshipResolver::new(self.table.as_ref(), self.diagnostics.as_ref())
    }

    pub fn chart_from_input(&self, input: &ChartInput) -> Result<Chart, ChartError> {
        Chart::from_input(input, &self.defaults, self.diagnostics.as_ref())
    }

    pub fn analyze(&self, chart: &Chart) -> ChartAnalysis {
        self.calculator.analyze(chart)
    }

    pub fn house_lordships(&self, cusps: &HouseCusps) -> HouseTable<LordshipTriple> {
        let resolver = self.resolver();
        HouseTable::from_fn(|house| resolver.resolve(cusps.get(house)))
    }

    /// Lordships for all nine planets; planets without a position are unresolved.
    pub fn planet_lordships(
        &self,
        positions: &BTreeMap<Planet, f64>,
    ) -> BTreeMap<Planet, LordshipTriple> {
        let resolver = self.resolver();
        Planet::ALL
            .into_iter()
            .map(|planet| {
                let triple = positions
                    .get(&planet)
                    .map_or(LordshipTriple::UNRESOLVED, |lon| resolver.resolve(*lon));
                (planet, triple)
            })
            .collect()
    }

    pub fn significators(
        &self,
        house_lords: &HouseTable<LordshipTriple>,
        planet_lords: &BTreeMap<Planet, LordshipTriple>,
        occupancy: &Occupancy,
    ) -> SignificatorTable {
        SignificatorTable::derive(house_lords, planet_lords, occupancy)
    }

    /// Full pipeline for a request. Never fails: errors become a zeroed report.
    pub fn report(&self, input: &ChartInput) -> ChartReport {
        match self.chart_from_input(input) {
            Ok(chart) => self.report_chart(&chart, &input.house_angles),
            Err(err) => {
                self.diagnostics
                    .error(TARGET, &format!("chart rejected, tables zeroed: {err}"));
                ChartReport::failed(err.to_string())
            }
        }
    }

    /// Report for a built chart. `house_angles` overrides the longitude used to
    /// resolve a house's lordship; the cusp rows always show computed cusps. A
    /// malformed override leaves only that house unresolved.
    pub fn report_chart(&self, chart: &Chart, house_angles: &BTreeMap<u8, String>) -> ChartReport {
        let analysis = self.analyze(chart);
        let resolver = self.resolver();

        let mut rows = Vec::with_capacity(12);
        let mut house_lords: HouseTable<LordshipTriple> = HouseTable::default();
        for (house, lon) in analysis.house_cusps.iter() {
            rows.push(CuspRow::computed(house, lon));
            house_lords[house] = match house_angles.get(&house.number()) {
                Some(supplied) => resolver.resolve_str(supplied),
                None => resolver.resolve(lon),
            };
        }
        for number in house_angles.keys().filter(|n| House::new(**n).is_none()) {
            self.diagnostics.warn(
                TARGET,
                &format!("angle for house {number} ignored, houses run 1..12"),
            );
        }

        let planet_lords = self.planet_lordships(&analysis.planet_positions);
        let significators = self.significators(&house_lords, &planet_lords, &analysis.occupancy);

        ChartReport::new(
            analysis.basic_info,
            rows,
            &house_lords,
            &planet_lords,
            &significators,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{Level, RecordingDiagnostics};
    use crate::angle::{normalize_degrees, to_dms};
    use crate::kp::{Lord, Sign};

    fn service() -> (KpService, Arc<RecordingDiagnostics>) {
        let diag = Arc::new(RecordingDiagnostics::new());
        (KpService::default().with_diagnostics(diag.clone()), diag)
    }

    fn input() -> ChartInput {
        ChartInput {
            datetime: Some("2012-01-19T11:21:00".into()),
            ..ChartInput::default()
        }
    }

    #[test]
    fn report_has_twelve_rows_and_nine_planets() {
        let (svc, _) = service();
        let report = svc.report(&input());
        assert!(report.is_ok());
        assert_eq!(report.house_cusps.len(), 12);
        assert_eq!(report.house_lordships.len(), 12);
        assert_eq!(report.planet_lordships.len(), 9);
        assert_eq!(report.planet_significators.len(), 9);
        assert!(report.house_lordships.values().all(|t| t.sign_lord.is_resolved()));
        for row in &report.house_cusps {
            assert_eq!(
                report.house_lordships[&row.house].sign_lord,
                Lord::Planet(row.sign.lord())
            );
        }
    }

    #[test]
    fn bad_override_only_affects_its_house() {
        let (svc, diag) = service();
        let mut request = input();
        request.house_angles.insert(3, "not an angle".into());
        request.house_angles.insert(5, "353°03'58\"".into());
        let report = svc.report(&request);

        let h = |n| House::new(n).unwrap();
        assert_eq!(report.house_lordships[&h(3)], LordshipTriple::UNRESOLVED);
        assert!(report.house_significators[&h(3)].a.is_empty());
        assert!(report.house_significators[&h(3)].b.is_empty());
        assert_eq!(report.house_lordships[&h(5)].sign_lord, Lord::Planet(Planet::Jupiter));
        assert!(report.house_lordships[&h(4)].sign_lord.is_resolved());
        assert!(diag.contains(Level::Warn, "not an angle"));

        // Overrides feed lordships only; the rows keep the computed cusps.
        let chart = svc.chart_from_input(&request).unwrap();
        let cusps = svc.calculator().compute_house_cusps(&chart);
        for row in &report.house_cusps {
            let lon = cusps.get(row.house);
            assert_eq!(row.longitude, to_dms(lon));
            assert_eq!(row.sign, Sign::from_longitude(lon));
        }
        assert_ne!(report.house_cusps[4].longitude, "353°03'58\"");
        assert!(report.house_cusps[2].longitude.contains('º'));
        assert_eq!(
            report.house_cusps[6].longitude,
            to_dms(normalize_degrees(cusps.get(h(1)) + 180.0))
        );
    }

    #[test]
    fn out_of_range_planet_angle_stays_unresolved() {
        let (svc, diag) = service();
        let mut request = input();
        request.planet_angles.insert("sun".into(), "400º00'00\"".into());
        request.planet_angles.insert("jupiter".into(), "227º54'27\"".into());
        let report = svc.report(&request);

        assert!(report.is_ok());
        assert_eq!(report.planet_lordships[&Planet::Sun], LordshipTriple::UNRESOLVED);
        assert!(report.planet_lordships[&Planet::Jupiter].sign_lord.is_resolved());
        assert!(report.house_significators.values().all(|s| !s.b.contains(&Planet::Sun)));
        assert!(diag.contains(Level::Warn, "outside [0, 360)"));
    }

    #[test]
    fn rejected_chart_yields_zeroed_report() {
        let (svc, diag) = service();
        let mut request = input();
        request.ayanamsa = Some("FOO".into());
        let report = svc.report(&request);

        assert!(!report.is_ok());
        assert!(report.error.as_deref().unwrap().contains("FOO"));
        assert!(report.house_cusps.is_empty());
        assert_eq!(report.house_lordships.len(), 12);
        assert!(report
            .house_significators
            .values()
            .all(|s| s.a.is_empty() && s.b.is_empty() && s.c.is_empty() && s.d.is_empty()));
        assert_eq!(report.planet_significators.len(), 9);
        assert_eq!(diag.at_level(Level::Error).len(), 1);
    }

    #[test]
    fn report_serializes_to_json() {
        let (svc, _) = service();
        let json = svc.report(&input()).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["basic_info"]["ayanamsa"], "LAHIRI");
        assert_eq!(value["basic_info"]["house_system"], "P");
        assert!(value["house_lordships"]["12"]["sign_lord"].is_string());
        assert!(value["error"].is_null());
    }
}
