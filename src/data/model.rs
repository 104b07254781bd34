use std::collections::BTreeSet;
use std::fmt;

use serde::{Serialize, Serializer};

use super::normalize::normalize;

// ---------------------------------------------------------------------------
// Metric – a numeric cell that may have failed to parse
// ---------------------------------------------------------------------------

/// A normalized numeric value.
///
/// `Unparseable` is distinct from zero. Every comparison against it is false:
/// `at_least`, `at_most` and `within` all reject it, so a company with a
/// malformed P/E or RoE never passes a numeric filter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Metric {
    Value(f64),
    Unparseable,
}

impl Metric {
    pub fn value(self) -> Option<f64> {
        match self {
            Metric::Value(v) => Some(v),
            Metric::Unparseable => None,
        }
    }

    pub fn is_unparseable(self) -> bool {
        matches!(self, Metric::Unparseable)
    }

    /// `self >= threshold`; false when unparseable.
    pub fn at_least(self, threshold: f64) -> bool {
        self.value().is_some_and(|v| v >= threshold)
    }

    /// `self <= ceiling`; false when unparseable.
    pub fn at_most(self, ceiling: f64) -> bool {
        self.value().is_some_and(|v| v <= ceiling)
    }

    /// `min <= self <= max`; false when unparseable.
    pub fn within(self, min: f64, max: f64) -> bool {
        self.at_least(min) && self.at_most(max)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Value(v) => write!(f, "{v}"),
            Metric::Unparseable => write!(f, "n/a"),
        }
    }
}

/// Serialized as a plain number, or `null` when unparseable.
impl Serialize for Metric {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value().serialize(serializer)
    }
}

// ---------------------------------------------------------------------------
// ReturnPeriod – the five trailing-return columns
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReturnPeriod {
    OneYear,
    ThreeYears,
    FiveYears,
    SevenYears,
    TenYears,
}

impl ReturnPeriod {
    /// Chart order.
    pub const ALL: [ReturnPeriod; 5] = [
        ReturnPeriod::OneYear,
        ReturnPeriod::ThreeYears,
        ReturnPeriod::FiveYears,
        ReturnPeriod::SevenYears,
        ReturnPeriod::TenYears,
    ];

    pub fn years(self) -> u32 {
        match self {
            ReturnPeriod::OneYear => 1,
            ReturnPeriod::ThreeYears => 3,
            ReturnPeriod::FiveYears => 5,
            ReturnPeriod::SevenYears => 7,
            ReturnPeriod::TenYears => 10,
        }
    }

    /// Short axis label, e.g. `"5Y"`.
    pub fn label(self) -> &'static str {
        match self {
            ReturnPeriod::OneYear => "1Y",
            ReturnPeriod::ThreeYears => "3Y",
            ReturnPeriod::FiveYears => "5Y",
            ReturnPeriod::SevenYears => "7Y",
            ReturnPeriod::TenYears => "10Y",
        }
    }

    /// The spelling used by the watchlist export.
    pub fn column_name(self) -> String {
        match self.years() {
            1 => "Return over 1year".to_string(),
            n => format!("Return over {n}years"),
        }
    }

    /// Whether `header` names this period's column. Accepts the export's
    /// spelling plus plural/spaced variants (`Return over 1years`,
    /// `Return over 5 years`).
    pub fn matches_header(self, header: &str) -> bool {
        let Some(rest) = header.strip_prefix("Return over ") else {
            return false;
        };
        let rest = rest.trim();
        let Some(unit) = rest.strip_prefix(&self.years().to_string()) else {
            return false;
        };
        matches!(unit.trim_start(), "year" | "years")
    }
}

// ---------------------------------------------------------------------------
// Schema – resolved column positions of the fixed header layout
// ---------------------------------------------------------------------------

pub const NAME_COLUMN: &str = "Name";
pub const INDUSTRY_COLUMN: &str = "Industry";
pub const PRICE_COLUMN: &str = "Current Price";
pub const PE_COLUMN: &str = "PE";
pub const ROE_COLUMN: &str = "RoE %";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    /// Header row exactly as read (trimmed).
    pub headers: Vec<String>,
    name: usize,
    industry: usize,
    price: usize,
    pe: usize,
    roe: usize,
    returns: [usize; 5],
}

impl Schema {
    /// Locate every required column. On failure returns the names of the
    /// missing columns.
    pub fn resolve(headers: Vec<String>) -> Result<Self, Vec<String>> {
        let mut missing = Vec::new();
        let mut find = |name: &str| {
            let idx = headers.iter().position(|h| h == name);
            if idx.is_none() {
                missing.push(name.to_string());
            }
            idx.unwrap_or(0)
        };
        let name = find(NAME_COLUMN);
        let industry = find(INDUSTRY_COLUMN);
        let price = find(PRICE_COLUMN);
        let pe = find(PE_COLUMN);
        let roe = find(ROE_COLUMN);

        let mut returns = [0; 5];
        for (slot, period) in returns.iter_mut().zip(ReturnPeriod::ALL) {
            match headers.iter().position(|h| period.matches_header(h)) {
                Some(idx) => *slot = idx,
                None => missing.push(period.column_name()),
            }
        }

        if !missing.is_empty() {
            return Err(missing);
        }
        Ok(Schema {
            headers,
            name,
            industry,
            price,
            pe,
            roe,
            returns,
        })
    }

    pub fn width(&self) -> usize {
        self.headers.len()
    }

    /// Column index of a return period.
    pub fn return_column(&self, period: ReturnPeriod) -> usize {
        let pos = ReturnPeriod::ALL
            .iter()
            .position(|p| *p == period)
            .unwrap_or_default();
        self.returns[pos]
    }
}

// ---------------------------------------------------------------------------
// Record – one company (one data row)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Raw cells, padded to the header width.
    pub cells: Vec<String>,
    pub name: String,
    pub industry: String,
    pub current_price: Metric,
    pub pe: Metric,
    pub roe: Metric,
}

impl Record {
    /// Build a record from a raw data row, normalizing the numeric columns.
    /// Short rows are padded with empty cells, which normalize to
    /// [`Metric::Unparseable`].
    pub fn from_cells(schema: &Schema, mut cells: Vec<String>) -> Self {
        if cells.len() < schema.width() {
            cells.resize(schema.width(), String::new());
        }
        Record {
            name: cells[schema.name].clone(),
            industry: cells[schema.industry].clone(),
            current_price: normalize(&cells[schema.price]),
            pe: normalize(&cells[schema.pe]),
            roe: normalize(&cells[schema.roe]),
            cells,
        }
    }

    pub fn cell(&self, column: usize) -> &str {
        self.cells.get(column).map(String::as_str).unwrap_or("")
    }
}

// ---------------------------------------------------------------------------
// Table – the loaded watchlist
// ---------------------------------------------------------------------------

/// The full normalized table with the industry index used by the filter UI.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub schema: Schema,
    pub records: Vec<Record>,
    /// Sorted distinct industries.
    pub industries: BTreeSet<String>,
}

impl Table {
    pub fn new(schema: Schema, records: Vec<Record>) -> Self {
        let industries = records.iter().map(|r| r.industry.clone()).collect();
        Table {
            schema,
            records,
            industries,
        }
    }

    pub fn headers(&self) -> &[String] {
        &self.schema.headers
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) const HEADER: [&str; 10] = [
        "Name",
        "Industry",
        "Current Price",
        "PE",
        "RoE %",
        "Return over 1year",
        "Return over 3years",
        "Return over 5years",
        "Return over 7years",
        "Return over 10years",
    ];

    pub(crate) fn schema() -> Schema {
        Schema::resolve(HEADER.iter().map(|s| s.to_string()).collect()).unwrap()
    }

    pub(crate) fn record(fields: [&str; 10]) -> Record {
        Record::from_cells(&schema(), fields.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn unparseable_fails_every_comparison() {
        let m = Metric::Unparseable;
        assert!(!m.at_least(f64::NEG_INFINITY));
        assert!(!m.at_most(f64::INFINITY));
        assert!(!m.within(f64::MIN, f64::MAX));
        assert_eq!(m.value(), None);
    }

    #[test]
    fn value_bounds_are_inclusive() {
        let m = Metric::Value(50.0);
        assert!(m.within(0.0, 50.0));
        assert!(m.at_least(50.0));
        assert!(!m.within(0.0, 49.9));
    }

    #[test]
    fn metric_display_and_json() {
        assert_eq!(Metric::Value(12.0).to_string(), "12");
        assert_eq!(Metric::Unparseable.to_string(), "n/a");
        assert_eq!(serde_json::to_string(&Metric::Value(1.5)).unwrap(), "1.5");
        assert_eq!(serde_json::to_string(&Metric::Unparseable).unwrap(), "null");
    }

    #[test]
    fn return_headers_accept_common_spellings() {
        assert!(ReturnPeriod::OneYear.matches_header("Return over 1year"));
        assert!(ReturnPeriod::OneYear.matches_header("Return over 1years"));
        assert!(ReturnPeriod::FiveYears.matches_header("Return over 5 years"));
        assert!(!ReturnPeriod::OneYear.matches_header("Return over 10years"));
        assert!(!ReturnPeriod::TenYears.matches_header("Return over 1year"));
    }

    #[test]
    fn schema_reports_missing_columns() {
        let headers = vec!["Name".to_string(), "PE".to_string()];
        let missing = Schema::resolve(headers).unwrap_err();
        assert!(missing.contains(&"Industry".to_string()));
        assert!(missing.contains(&"RoE %".to_string()));
        assert!(missing.contains(&"Return over 1year".to_string()));
        assert!(missing.contains(&"Return over 10years".to_string()));
        assert!(!missing.contains(&"Name".to_string()));
    }

    #[test]
    fn short_rows_are_padded_and_unparseable() {
        let rec = Record::from_cells(&schema(), vec!["Acme".into(), "Tech".into()]);
        assert_eq!(rec.cells.len(), HEADER.len());
        assert_eq!(rec.pe, Metric::Unparseable);
        assert_eq!(rec.cell(3), "");
        assert_eq!(rec.cell(99), "");
    }

    #[test]
    fn name_and_industry_keep_raw_text() {
        let rec = record([" Acme ", "Tech ", "", "", "", "", "", "", "", ""]);
        assert_eq!(rec.name, " Acme ");
        assert_eq!(rec.industry, "Tech ");
        assert_eq!(rec.name, rec.cell(0));
    }

    #[test]
    fn table_collects_sorted_industries() {
        let table = Table::new(
            schema(),
            vec![
                record(["B", "Tech", "", "", "", "", "", "", "", ""]),
                record(["A", "Bank", "", "", "", "", "", "", "", ""]),
                record(["C", "Tech", "", "", "", "", "", "", "", ""]),
            ],
        );
        let industries: Vec<_> = table.industries.iter().cloned().collect();
        assert_eq!(industries, vec!["Bank", "Tech"]);
        assert_eq!(table.len(), 3);
    }
}
