//! Free-text extractor and normalizer throughput.
//!
//! Run with: `cargo bench`

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use pacenote::extract::{
    collect_image_candidates, extract_price, normalize_date, parse_visa_text, pick_hero_image,
    split_registration_period,
};
use pacenote::net::Offline;
use pacenote::normalize::{normalize_all, NormalizeContext};
use pacenote::tables::{CityLocalizer, TranslatorSettings};
use serde_json::json;

const VISA_TEXTS: [&str; 6] = [
    "90일",
    "180일 중 90일",
    "6개월",
    "X",
    "1. 무비자 2. 30일 또는 60일",
    "관광 목적 최대 30일, 연장 불가",
];

const DESCRIPTION: &str = "대회 안내\n코스: 풀, 하프, 10km\n2026년 3월 15일 출발\n\
참가비: 풀코스 50,000원 / 하프 40,000원 / 10km 30,000원\n기념품: 티셔츠";

const HERO_PAGE: &str = r#"<html><head>
<meta property="og:image" content="/img/og.png">
<meta name="twitter:image" content="https://cdn.test/tw.jpg"></head>
<body><div style="background-image: url('/img/main_visual.jpg')"></div>
<img src="/img/icon_home.png"><img src="/img/logo.png"><img src="/img/course.jpg">
</body></html>"#;

fn bench_text_extractors(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract");
    group.throughput(Throughput::Elements(VISA_TEXTS.len() as u64));
    group.bench_function("visa_text", |b| {
        b.iter(|| {
            for text in VISA_TEXTS {
                black_box(parse_visa_text(black_box(text)));
            }
        })
    });
    group.throughput(Throughput::Elements(1));
    group.bench_function("price", |b| b.iter(|| extract_price(black_box(DESCRIPTION))));
    group.bench_function("registration_period", |b| {
        b.iter(|| split_registration_period(black_box("2026년1월5일~2026년3월1일"), 2026))
    });
    group.bench_function("list_date", |b| b.iter(|| normalize_date(black_box("3/15"), 2026)));
    group.bench_function("hero_image", |b| {
        b.iter(|| {
            let candidates = collect_image_candidates(black_box(HERO_PAGE), "https://race.test/");
            pick_hero_image(&candidates)
        })
    });
    group.finish();
}

fn bench_normalize(c: &mut Criterion) {
    let raws: Vec<serde_json::Value> = (0..500)
        .map(|index| {
            json!({
                "id": format!("race-{index}"),
                "title": "Berlin Marathon",
                "dateNextRace": "2026-09-27",
                "city": "Berlin",
                "country": "Germany",
                "countryCode": "DE",
                "startPoint": [13.4, 52.5],
                "raceType": "full_marathon",
                "minPrice": 89.5,
                "surface": "Road",
                "tags": [{"label": "scenic"}, {"label": "5000-9999-participants"}],
                "reviewsCount": 12,
                "registerPossible": true
            })
        })
        .collect();
    let ctx = NormalizeContext {
        today: NaiveDate::from_ymd_opt(2026, 1, 1).expect("valid date"),
        krw_rate: 1450.0,
    };
    let settings = TranslatorSettings {
        endpoint: "https://translate.test".to_string(),
        language_pair: "en|ko".to_string(),
        timeout: std::time::Duration::from_secs(1),
        delay: std::time::Duration::ZERO,
    };

    let mut group = c.benchmark_group("normalize");
    group.throughput(Throughput::Elements(raws.len() as u64));
    group.bench_function("batch_500", |b| {
        b.iter(|| {
            let mut localizer = CityLocalizer::new(Offline, settings.clone());
            normalize_all(black_box(&raws), &ctx, &mut localizer).records.len()
        })
    });
    group.finish();
}

criterion_group!(benches, bench_text_extractors, bench_normalize);
criterion_main!(benches);
