// 📅 Charge Dates - Recurring contribution date arithmetic

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interval {
    Month,
    Year,
}

impl Interval {
    pub fn as_str(&self) -> &'static str {
        match self {
            Interval::Month => "month",
            Interval::Year => "year",
        }
    }
}

impl FromStr for Interval {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "month" => Ok(Interval::Month),
            "year" => Ok(Interval::Year),
            _ => Err(format!("unknown interval: {}", s)),
        }
    }
}

/// Next charge date for a subscription first charged on `first_charge`.
///
/// Monthly charges land on the 1st of the next month; a first charge after
/// the 15th skips one month so the first period is never shorter than two
/// weeks. Yearly charges land on the 1st of the same month next year.
pub fn next_charge_date(first_charge: NaiveDate, interval: Interval) -> NaiveDate {
    let month_start = first_charge.with_day(1).unwrap_or(first_charge);

    let months = match interval {
        Interval::Month if first_charge.day() > 15 => 2,
        Interval::Month => 1,
        Interval::Year => 12,
    };

    month_start
        .checked_add_months(Months::new(months))
        .unwrap_or(NaiveDate::MAX)
}

/// `YYYY-MM-DD`
pub fn to_iso_date_str(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Same day one year earlier; February 29 becomes February 28.
///
/// The clamp applies to February itself. The older web helper compared the
/// zero-based month index against 2 (March) and let Feb 29 roll to Mar 1;
/// this version deliberately corrects that slip.
pub fn date_12_months_ago(date: NaiveDate) -> NaiveDate {
    date.checked_sub_months(Months::new(12))
        .unwrap_or(NaiveDate::MIN)
}
