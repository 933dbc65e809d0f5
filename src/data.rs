//! Bundled sample datasets and the shaping applied before plotting.
//!
//! Every dataset is a JSON array of records carrying an ISO-8601 `date`. The
//! records are expected in date order; loading checks that and sorts
//! (with a warning) when a file breaks the assumption.
use chrono::{DateTime, Utc};
use iced::Color;
use indexmap::IndexMap;
use serde::{Deserialize, de::DeserializeOwned};

use crate::error::{Error, Result};
use crate::ticks::TimeDomain;

const FLOW_JSON: &str = include_str!("../data/flow.json");
const TUBING_JSON: &str = include_str!("../data/tubing.json");
const CASING_JSON: &str = include_str!("../data/casing.json");
const SIMPLE_JSON: &str = include_str!("../data/simple.json");
const CYCLES_JSON: &str = include_str!("../data/cycles.json");

/// A record placed on a time axis.
pub trait Timestamped {
    fn start(&self) -> DateTime<Utc>;

    /// Where the record ends. Point samples end where they start.
    fn end(&self) -> DateTime<Utc> {
        self.start()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowSample {
    pub date: DateTime<Utc>,
    pub flow_rate: f64,
}

/// A tubing or casing pressure reading.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PressureSample {
    pub date: DateTime<Utc>,
    #[serde(alias = "tubing", alias = "casing")]
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SimpleSample {
    pub date: DateTime<Utc>,
    pub y: f64,
}

/// How a plunger arrived at the end of its cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrivalCategory {
    Fast,
    Good,
    Slow,
    #[serde(other)]
    Unknown,
}

impl ArrivalCategory {
    pub fn label(self) -> &'static str {
        match self {
            ArrivalCategory::Fast => "Fast",
            ArrivalCategory::Good => "Good",
            ArrivalCategory::Slow => "Slow",
            ArrivalCategory::Unknown => "Unknown",
        }
    }
}

/// Category colors, in legend order.
pub fn arrival_palette() -> IndexMap<ArrivalCategory, Color> {
    IndexMap::from([
        (ArrivalCategory::Fast, Color::from_rgb8(0xe5, 0x73, 0x73)),
        (ArrivalCategory::Good, Color::from_rgb8(0x81, 0xc7, 0x84)),
        (ArrivalCategory::Slow, Color::from_rgb8(0xff, 0xd5, 0x4f)),
        (ArrivalCategory::Unknown, Color::from_rgb8(0xb0, 0xbe, 0xc5)),
    ])
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Arrival {
    pub category: ArrivalCategory,
}

/// One plunger cycle, spanning `date` to `end_date`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cycle {
    pub date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub y: f64,
    pub arrival: Arrival,
}

impl Cycle {
    /// Key used to identify the cycle for hover focus.
    pub fn key(&self) -> i64 {
        self.date.timestamp_millis()
    }
}

impl Timestamped for FlowSample {
    fn start(&self) -> DateTime<Utc> {
        self.date
    }
}

impl Timestamped for PressureSample {
    fn start(&self) -> DateTime<Utc> {
        self.date
    }
}

impl Timestamped for SimpleSample {
    fn start(&self) -> DateTime<Utc> {
        self.date
    }
}

impl Timestamped for Cycle {
    fn start(&self) -> DateTime<Utc> {
        self.date
    }

    fn end(&self) -> DateTime<Utc> {
        self.end_date
    }
}

/// All sample datasets, parsed once at startup and read-only afterwards.
#[derive(Debug, Clone)]
pub struct SampleData {
    pub flow: Vec<FlowSample>,
    pub tubing: Vec<PressureSample>,
    pub casing: Vec<PressureSample>,
    pub simple: Vec<SimpleSample>,
    pub cycles: Vec<Cycle>,
}

impl SampleData {
    /// Parse the datasets bundled with the crate.
    pub fn load() -> Result<Self> {
        let data = Self {
            flow: parse_dataset("flow", FLOW_JSON)?,
            tubing: parse_dataset("tubing", TUBING_JSON)?,
            casing: parse_dataset("casing", CASING_JSON)?,
            simple: parse_dataset("simple", SIMPLE_JSON)?,
            cycles: parse_dataset("cycles", CYCLES_JSON)?,
        };
        tracing::debug!(
            flow = data.flow.len(),
            tubing = data.tubing.len(),
            casing = data.casing.len(),
            simple = data.simple.len(),
            cycles = data.cycles.len(),
            "loaded sample data"
        );
        Ok(data)
    }
}

/// Parse a JSON dataset, sorting it by date if it arrived out of order.
pub fn parse_dataset<T>(name: &'static str, json: &str) -> Result<Vec<T>>
where
    T: DeserializeOwned + Timestamped,
{
    let mut records: Vec<T> =
        serde_json::from_str(json).map_err(|source| Error::Data { name, source })?;
    if !is_sorted(&records) {
        tracing::warn!(dataset = name, "records are not in date order, sorting");
        records.sort_by_key(|r| r.start());
    }
    Ok(records)
}

pub fn is_sorted<T: Timestamped>(records: &[T]) -> bool {
    records.windows(2).all(|w| w[0].start() <= w[1].start())
}

/// Domain from the first record's start to the last record's end.
///
/// Relies on the records being in date order.
pub fn extent<T: Timestamped>(name: &'static str, records: &[T]) -> Result<TimeDomain> {
    match (records.first(), records.last()) {
        (Some(first), Some(last)) => TimeDomain::new(first.start(), last.end()),
        _ => Err(Error::EmptyDataset(name)),
    }
}

/// Map records to `[millis, value]` plot positions.
pub fn to_series<T: Timestamped>(records: &[T], value: impl Fn(&T) -> f64) -> Vec<[f64; 2]> {
    records
        .iter()
        .map(|r| [r.start().timestamp_millis() as f64, value(r)])
        .collect()
}

/// Smallest and largest value, widened by `padding` on both sides.
pub fn value_extent(values: impl IntoIterator<Item = f64>, padding: f64) -> Option<(f64, f64)> {
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
        .map(|(lo, hi)| (lo - padding, hi + padding))
}

/// Index of the position whose x is closest to `x`. Positions must be sorted by x.
pub fn nearest_index(positions: &[[f64; 2]], x: f64) -> Option<usize> {
    if positions.is_empty() {
        return None;
    }
    let idx = positions.partition_point(|p| p[0] < x);
    if idx == 0 {
        return Some(0);
    }
    if idx == positions.len() {
        return Some(positions.len() - 1);
    }
    let before = x - positions[idx - 1][0];
    let after = positions[idx][0] - x;
    Some(if before <= after { idx - 1 } else { idx })
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn bundled_data_loads_sorted() {
        let data = SampleData::load().unwrap();
        assert!(!data.flow.is_empty());
        assert_eq!(data.tubing.len(), data.casing.len());
        assert!(is_sorted(&data.flow));
        assert!(is_sorted(&data.cycles));
        assert!(data.cycles.iter().all(|c| c.date < c.end_date));
    }

    #[test]
    fn pressure_keys_map_to_value() {
        let tubing: Vec<PressureSample> =
            parse_dataset("t", r#"[{"date":"2020-04-30T14:55:00.000Z","tubing":212.5}]"#).unwrap();
        let casing: Vec<PressureSample> =
            parse_dataset("c", r#"[{"date":"2020-04-30T14:55:00.000Z","casing":301.0}]"#).unwrap();
        assert_eq!(tubing[0].value, 212.5);
        assert_eq!(casing[0].value, 301.0);
        assert_eq!(tubing[0].date, Utc.with_ymd_and_hms(2020, 4, 30, 14, 55, 0).unwrap());
    }

    #[test]
    fn unknown_arrival_category_falls_back() {
        let cycles: Vec<Cycle> = parse_dataset(
            "cycles",
            r#"[{"date":"2020-04-30T00:00:00Z","endDate":"2020-04-30T02:00:00Z","y":1,
                 "arrival":{"category":"late"}}]"#,
        )
        .unwrap();
        assert_eq!(cycles[0].arrival.category, ArrivalCategory::Unknown);
    }

    #[test]
    fn out_of_order_records_are_sorted() {
        let samples: Vec<SimpleSample> = parse_dataset(
            "simple",
            r#"[{"date":"2020-04-30T02:00:00Z","y":2},{"date":"2020-04-30T01:00:00Z","y":1}]"#,
        )
        .unwrap();
        assert_eq!(samples[0].y, 1.0);
        assert_eq!(samples[1].y, 2.0);
    }

    #[test]
    fn malformed_dataset_reports_its_name() {
        let err = parse_dataset::<SimpleSample>("broken", r#"[{"date":"yesterday","y":1}]"#)
            .unwrap_err();
        assert!(matches!(err, Error::Data { name: "broken", .. }));
    }

    #[test]
    fn cycle_extent_ends_at_last_end_date() {
        let data = SampleData::load().unwrap();
        let domain = extent("cycles", &data.cycles).unwrap();
        assert_eq!(domain.start, data.cycles[0].date);
        assert_eq!(domain.end, data.cycles.last().unwrap().end_date);
    }

    #[test]
    fn empty_dataset_has_no_extent() {
        let empty: Vec<SimpleSample> = Vec::new();
        assert!(matches!(extent("simple", &empty), Err(Error::EmptyDataset("simple"))));
    }

    #[test]
    fn padded_value_extent() {
        assert_eq!(value_extent([3.0, 7.5, 5.0], 10.0), Some((-7.0, 17.5)));
        assert_eq!(value_extent([f64::NAN], 10.0), None);
    }

    #[test]
    fn nearest_index_picks_closest_sample() {
        let positions = [[0.0, 1.0], [10.0, 2.0], [20.0, 3.0]];
        assert_eq!(nearest_index(&positions, -5.0), Some(0));
        assert_eq!(nearest_index(&positions, 4.0), Some(0));
        assert_eq!(nearest_index(&positions, 6.0), Some(1));
        assert_eq!(nearest_index(&positions, 99.0), Some(2));
        assert_eq!(nearest_index(&[], 1.0), None);
    }
}
