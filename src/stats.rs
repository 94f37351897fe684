//! Summary statistics over a normalized dataset, rendered as plain text for the
//! end of a global run.

use std::collections::HashMap;
use std::fmt::Write as _;

use serde::Serialize;

use crate::data::record::CanonicalMarathonRecord;

const TOP_COUNTRIES: usize = 10;
const SAMPLE_COUNT: usize = 3;
const SAMPLE_TAGS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceSummary {
    pub priced: usize,
    pub min: i64,
    pub max: i64,
    pub average: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetStats {
    pub total: usize,
    /// Largest group first; ties by label.
    pub by_race_type: Vec<(String, usize)>,
    pub top_countries: Vec<(String, usize)>,
    pub by_surface: Vec<(String, usize)>,
    pub available: usize,
    pub sold_out: usize,
    pub race_day_passed: usize,
    pub reviewed: usize,
    pub average_rating: Option<f64>,
    pub price: Option<PriceSummary>,
}

impl DatasetStats {
    pub fn compute(records: &[CanonicalMarathonRecord]) -> Self {
        let by_race_type = ranked(records.iter().map(|record| record.race_type_label.as_str()));
        let mut top_countries = ranked(records.iter().map(|record| record.country.as_str()));
        top_countries.truncate(TOP_COUNTRIES);
        let by_surface = ranked(
            records
                .iter()
                .map(|record| record.surface.as_str())
                .filter(|surface| !surface.is_empty()),
        );

        let reviewed: Vec<&CanonicalMarathonRecord> =
            records.iter().filter(|record| record.flags.has_reviews).collect();
        let average_rating = (!reviewed.is_empty()).then(|| {
            reviewed.iter().map(|record| record.rating).sum::<f64>() / reviewed.len() as f64
        });

        let prices: Vec<i64> = records
            .iter()
            .map(|record| record.min_price)
            .filter(|price| *price > 0)
            .collect();
        let price = match (prices.iter().min(), prices.iter().max()) {
            (Some(&min), Some(&max)) => Some(PriceSummary {
                priced: prices.len(),
                min,
                max,
                average: prices.iter().sum::<i64>() as f64 / prices.len() as f64,
            }),
            _ => None,
        };

        Self {
            total: records.len(),
            by_race_type,
            top_countries,
            by_surface,
            available: records.iter().filter(|record| record.flags.is_available).count(),
            sold_out: records
                .iter()
                .filter(|record| record.registration.is_sold_out)
                .count(),
            race_day_passed: records
                .iter()
                .filter(|record| record.registration.is_race_day_passed)
                .count(),
            reviewed: reviewed.len(),
            average_rating,
            price,
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "대회 타입별:");
        write_counts(&mut out, &self.by_race_type);
        let _ = writeln!(out, "국가별 (상위 {TOP_COUNTRIES}개):");
        write_counts(&mut out, &self.top_countries);
        let _ = writeln!(out, "노면 타입별:");
        write_counts(&mut out, &self.by_surface);

        let _ = writeln!(out, "등록 상태:");
        let _ = writeln!(out, "  등록 가능: {}개", self.available);
        let _ = writeln!(out, "  매진: {}개", self.sold_out);
        let _ = writeln!(out, "  종료: {}개", self.race_day_passed);

        if let Some(average) = self.average_rating {
            let _ = writeln!(out, "평점:");
            let _ = writeln!(out, "  리뷰 있는 대회: {}개", self.reviewed);
            let _ = writeln!(out, "  평균 평점: {average:.2}/5.0");
        }
        if let Some(price) = &self.price {
            let _ = writeln!(out, "가격:");
            let _ = writeln!(out, "  가격 정보 있음: {}개", price.priced);
            let _ = writeln!(out, "  최저가: {}원", price.min);
            let _ = writeln!(out, "  최고가: {}원", price.max);
            let _ = writeln!(out, "  평균가: {:.0}원", price.average);
        }
        out
    }
}

fn ranked<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for label in labels {
        *counts.entry(label).or_default() += 1;
    }
    let mut ranked: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(label, count)| (label.to_string(), count))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked
}

fn write_counts(out: &mut String, counts: &[(String, usize)]) {
    for (label, count) in counts {
        let _ = writeln!(out, "  {label}: {count}개");
    }
}

/// The first few records in a human-readable block.
pub fn render_samples(records: &[CanonicalMarathonRecord]) -> String {
    let mut out = String::new();
    for (index, record) in records.iter().take(SAMPLE_COUNT).enumerate() {
        let tags: Vec<&str> = record
            .tags
            .iter()
            .take(SAMPLE_TAGS)
            .map(String::as_str)
            .collect();
        let _ = writeln!(out, "{}. {}", index + 1, record.title);
        let _ = writeln!(out, "   ID: {}", record.id);
        let _ = writeln!(out, "   위치: {}", record.location);
        let _ = writeln!(out, "   날짜: {}", record.str_date_range_next_race_week_day);
        let _ = writeln!(out, "   타입: {}", record.race_type_label);
        let _ = writeln!(out, "   거리: {}", display_value(&record.main_distance));
        let _ = writeln!(out, "   가격: {}", record.min_price_formatted);
        let _ = writeln!(
            out,
            "   평점: {}/5.0 ({} 리뷰)",
            record.rating, record.reviews_count
        );
        let _ = writeln!(
            out,
            "   등록: {}",
            if record.flags.is_available { "가능" } else { "불가" }
        );
        let _ = writeln!(out, "   태그: {}", tags.join(", "));
    }
    out
}

fn display_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(text) => text.clone(),
        serde_json::Value::Null => "N/A".to_string(),
        other => other.to_string(),
    }
}
