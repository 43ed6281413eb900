use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fixed column layout of the source file (0-indexed, no header row).
///
/// Column 12 exists in the file but is not consumed.
pub mod columns {
    pub const ID: usize = 0;
    pub const RANK: usize = 1;
    pub const NAME: usize = 2;
    pub const INDUSTRY: usize = 3;
    pub const CITY: usize = 4;
    pub const STATE: usize = 5;
    pub const ZIP: usize = 6;
    pub const WEBSITE: usize = 7;
    pub const EMPLOYEES: usize = 8;
    pub const REVENUE: usize = 9;
    pub const VALUATION: usize = 10;
    pub const PROFIT: usize = 11;
    // 12 is skipped
    pub const TICKER: usize = 13;
    pub const CEO: usize = 14;

    /// Minimum number of fields a well-formed row must carry.
    pub const EXPECTED: usize = 15;
}

/// One row of the company dataset.
///
/// `id` is the stable identity used for lookups; it is not necessarily the
/// source line number. Text fields are absent when the source field is
/// empty. Serialized with camelCase keys to match the service's JSON
/// contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRecord {
    pub id: i64,
    pub rank: i64,
    pub name: Option<String>,
    pub industry: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub website: Option<String>,
    pub employees: i64,
    pub revenue_in_millions: Decimal,
    pub profit_in_millions: Decimal,
    pub valuation_in_millions: Decimal,
    pub ticker: Option<String>,
    pub ceo: Option<String>,
}

impl CompanyRecord {
    /// Assemble a record from the raw fields of one source line.
    ///
    /// Integer and currency columns are fail-fast: a value that still does
    /// not parse after separator stripping aborts the whole load rather
    /// than producing a half-typed row.
    pub fn from_fields(fields: &[String]) -> Result<Self> {
        if fields.len() < columns::EXPECTED {
            anyhow::bail!(
                "row has {} fields, expected at least {}",
                fields.len(),
                columns::EXPECTED
            );
        }

        Ok(Self {
            id: parse_int(&fields[columns::ID]).context("column 'id'")?,
            rank: parse_int(&fields[columns::RANK]).context("column 'rank'")?,
            name: text(&fields[columns::NAME]),
            industry: text(&fields[columns::INDUSTRY]),
            city: text(&fields[columns::CITY]),
            state: text(&fields[columns::STATE]),
            zip: text(&fields[columns::ZIP]),
            website: text(&fields[columns::WEBSITE]),
            employees: parse_count(&fields[columns::EMPLOYEES]).context("column 'employees'")?,
            revenue_in_millions: parse_currency(&fields[columns::REVENUE])
                .context("column 'revenue'")?,
            valuation_in_millions: parse_currency(&fields[columns::VALUATION])
                .context("column 'valuation'")?,
            profit_in_millions: parse_currency(&fields[columns::PROFIT])
                .context("column 'profit'")?,
            ticker: text(&fields[columns::TICKER]),
            ceo: text(&fields[columns::CEO]),
        })
    }
}

/// Empty source fields become absent rather than empty strings.
fn text(field: &str) -> Option<String> {
    if field.is_empty() {
        None
    } else {
        Some(field.to_string())
    }
}

fn parse_int(field: &str) -> Result<i64> {
    field
        .trim()
        .parse::<i64>()
        .with_context(|| format!("invalid integer '{}'", field))
}

/// Counts may carry thousands separators ("1,234"); an absent value is zero.
fn parse_count(field: &str) -> Result<i64> {
    let cleaned = field.trim().replace(',', "");
    if cleaned.is_empty() {
        return Ok(0);
    }
    cleaned
        .parse::<i64>()
        .with_context(|| format!("invalid count '{}'", field))
}

/// Currency amounts may carry a dollar sign and thousands separators; both
/// are stripped before parsing. An absent value is zero.
fn parse_currency(field: &str) -> Result<Decimal> {
    let cleaned = field.trim().replace(['$', ','], "");
    if cleaned.is_empty() {
        return Ok(Decimal::ZERO);
    }
    cleaned
        .parse::<Decimal>()
        .with_context(|| format!("invalid currency amount '{}'", field))
}
