//! Prices: free-text fee extraction for calendar descriptions, and currency
//! conversion for the search API's numeric `minPrice`.

use std::ops::RangeInclusive;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Amounts outside this range (in won) are treated as false positives such as dates
/// or phone numbers when no fee keyword anchors them.
pub const PLAUSIBLE_PRICE_RANGE: RangeInclusive<u64> = 1_000..=1_000_000;

fn fee_keyword_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"참가비[^0-9]{0,30}([0-9,]+)\s*원").expect("valid fee keyword regex")
    })
}

fn won_amount_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([0-9,]+)\s*원").expect("valid won amount regex"))
}

fn parse_grouped(digits: &str) -> Option<u64> {
    let plain: String = digits.chars().filter(|c| *c != ',').collect();
    plain.parse().ok()
}

/// Registration fee in won from a free-text event description.
///
/// An amount right after "참가비" wins outright. Otherwise the first "N원" in the
/// text is used, but only if it lies in [`PLAUSIBLE_PRICE_RANGE`].
pub fn extract_price(description: &str) -> Option<u64> {
    if let Some(amount) = fee_keyword_re()
        .captures(description)
        .and_then(|caps| parse_grouped(&caps[1]))
    {
        return Some(amount);
    }

    let first = won_amount_re().captures(description)?;
    let amount = parse_grouped(&first[1])?;
    PLAUSIBLE_PRICE_RANGE.contains(&amount).then_some(amount)
}

/// "35000원" as the calendar dataset stores it.
pub fn format_won_plain(amount: u64) -> String {
    format!("{amount}원")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceStatus {
    Free,
    Unknown,
    Amount,
}

/// Converted entry price. Keeps "free" and "not published" apart even though the
/// flat output fields (`minPrice = 0`, `minPriceFormatted = ""`) look the same for both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Price {
    Free,
    Unknown,
    Amount(i64),
}

impl Price {
    /// `round(trunc(price * rate), -2)`; absent → `Unknown`, zero → `Free`.
    pub fn from_source(raw: Option<f64>, rate: f64) -> Self {
        match raw {
            None => Self::Unknown,
            Some(value) if !value.is_finite() || value < 0.0 => Self::Unknown,
            Some(value) if value == 0.0 => Self::Free,
            Some(value) => Self::Amount(round_to_hundreds((value * rate).trunc() as i64)),
        }
    }

    pub fn amount(&self) -> i64 {
        match self {
            Self::Amount(won) => *won,
            Self::Free | Self::Unknown => 0,
        }
    }

    pub fn status(&self) -> PriceStatus {
        match self {
            Self::Free => PriceStatus::Free,
            Self::Unknown => PriceStatus::Unknown,
            Self::Amount(_) => PriceStatus::Amount,
        }
    }

    /// "약 17,900원", or empty when there is no amount.
    pub fn formatted(&self) -> String {
        match self {
            Self::Amount(won) => format!("약 {}원", group_thousands(*won)),
            Self::Free | Self::Unknown => String::new(),
        }
    }
}

/// Nearest hundred, ties to the even hundred.
pub fn round_to_hundreds(value: i64) -> i64 {
    let quotient = value.div_euclid(100);
    let remainder = value.rem_euclid(100);
    let rounded = match remainder.cmp(&50) {
        std::cmp::Ordering::Less => quotient,
        std::cmp::Ordering::Greater => quotient + 1,
        std::cmp::Ordering::Equal if quotient % 2 == 0 => quotient,
        std::cmp::Ordering::Equal => quotient + 1,
    };
    rounded * 100
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
