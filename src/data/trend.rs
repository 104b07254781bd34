use serde::Serialize;

use super::model::{Metric, Record, ReturnPeriod, Schema};
use super::normalize::normalize;

/// One chart point. A malformed return keeps its slot as
/// [`Metric::Unparseable`] so the series always has five entries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendPoint {
    pub label: &'static str,
    pub value: Metric,
}

/// The return trend of one company. Values are parsed on each pass, so the
/// sequence can be iterated any number of times.
#[derive(Debug, Clone, Copy)]
pub struct Trend<'a> {
    schema: &'a Schema,
    record: &'a Record,
}

impl<'a> Trend<'a> {
    pub fn new(schema: &'a Schema, record: &'a Record) -> Self {
        Self { schema, record }
    }

    pub fn points(&self) -> impl Iterator<Item = TrendPoint> + Clone + 'a {
        let (schema, record) = (self.schema, self.record);
        ReturnPeriod::ALL.into_iter().map(move |period| TrendPoint {
            label: period.label(),
            value: normalize(record.cell(schema.return_column(period))),
        })
    }

    /// Present values as `(position, value)` pairs; gaps are skipped.
    pub fn present(&self) -> impl Iterator<Item = (usize, f64)> + 'a {
        self.points()
            .enumerate()
            .filter_map(|(i, p)| p.value.value().map(|v| (i, v)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::{record, schema};

    #[test]
    fn malformed_return_leaves_a_gap() {
        let schema = schema();
        let rec = record(["A", "Tech", "100", "12", "15", "5", "10", "oops", "20", "1,025"]);
        let points: Vec<_> = Trend::new(&schema, &rec).points().collect();

        assert_eq!(points.len(), 5);
        assert_eq!(points[0].value, Metric::Value(5.0));
        assert_eq!(points[1].value, Metric::Value(10.0));
        assert_eq!(points[2].value, Metric::Unparseable);
        assert_eq!(points[3].value, Metric::Value(20.0));
        assert_eq!(points[4].value, Metric::Value(1025.0));
    }

    #[test]
    fn labels_follow_period_order() {
        let schema = schema();
        let rec = record(["A", "Tech", "", "", "", "", "", "", "", ""]);
        let labels: Vec<_> = Trend::new(&schema, &rec).points().map(|p| p.label).collect();
        assert_eq!(labels, vec!["1Y", "3Y", "5Y", "7Y", "10Y"]);
    }

    #[test]
    fn sequence_is_restartable() {
        let schema = schema();
        let rec = record(["A", "Tech", "", "", "", "1", "2", "3", "4", "5"]);
        let trend = Trend::new(&schema, &rec);
        let first = trend.points();
        let again = first.clone();
        assert_eq!(first.count(), 5);
        assert_eq!(again.collect::<Vec<_>>(), trend.points().collect::<Vec<_>>());
    }

    #[test]
    fn present_skips_gaps_but_keeps_positions() {
        let schema = schema();
        let rec = record(["A", "Tech", "", "", "", "1", "", "3", "n/a", "5"]);
        let present: Vec<_> = Trend::new(&schema, &rec).present().collect();
        assert_eq!(present, vec![(0, 1.0), (2, 3.0), (4, 5.0)]);
    }

    #[test]
    fn columns_are_found_regardless_of_position() {
        let headers: Vec<String> = [
            "Return over 10years",
            "Name",
            "Return over 1years",
            "Industry",
            "Return over 3years",
            "Current Price",
            "Return over 5years",
            "PE",
            "Return over 7years",
            "RoE %",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        let schema = Schema::resolve(headers).unwrap();
        let cells = ["10", "A", "1", "Tech", "3", "", "5", "", "7", ""]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let rec = Record::from_cells(&schema, cells);
        let values: Vec<_> = Trend::new(&schema, &rec)
            .points()
            .map(|p| p.value.value())
            .collect();
        assert_eq!(values, vec![Some(1.0), Some(3.0), Some(5.0), Some(7.0), Some(10.0)]);
    }
}
