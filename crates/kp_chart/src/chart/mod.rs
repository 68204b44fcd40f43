pub mod calculator;
pub mod types;

pub use calculator::{analyze, compute_house_cusps, ChartCalculator};
pub use types::{BasicInfo, Chart, ChartAnalysis, ChartInput};
