use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde::Serialize;
use serde_dotenv::{to_string, to_string_with_options, DotenvOptions};

#[derive(Serialize, Clone)]
struct Settings {
    editor: String,
    make_jobs: u32,
    no_analytics: bool,
    verbose: bool,
}

#[derive(Serialize, Clone)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
struct WideRecord {
    homebrew_allowed_taps: Option<Vec<String>>,
    homebrew_api_auto_update_secs: Option<u32>,
    homebrew_auto_update_secs: Option<u32>,
    homebrew_bat: Option<bool>,
    homebrew_cache: Option<String>,
    homebrew_cleanup_max_age_days: Option<u32>,
    homebrew_color: Option<bool>,
    homebrew_curl_retries: Option<u32>,
    homebrew_debug: Option<bool>,
    homebrew_editor: Option<String>,
    homebrew_fail_log_lines: Option<u32>,
    homebrew_forbidden_formulae: Option<Vec<String>>,
    homebrew_make_jobs: Option<u32>,
    homebrew_no_analytics: Option<bool>,
    homebrew_no_auto_update: Option<bool>,
    homebrew_no_cleanup_formulae: Option<Vec<String>>,
    homebrew_temp: Option<String>,
    homebrew_verbose: Option<bool>,
    #[serde(rename = "no_proxy")]
    no_proxy: Option<Vec<String>>,
}

fn wide_record() -> WideRecord {
    WideRecord {
        homebrew_allowed_taps: Some(vec![
            "homebrew/core".to_string(),
            "homebrew/cask".to_string(),
        ]),
        homebrew_api_auto_update_secs: Some(450),
        homebrew_auto_update_secs: None,
        homebrew_bat: Some(true),
        homebrew_cache: Some("/opt/homebrew/cache".to_string()),
        homebrew_cleanup_max_age_days: Some(30),
        homebrew_color: Some(true),
        homebrew_curl_retries: Some(3),
        homebrew_debug: Some(false),
        homebrew_editor: Some("code --wait".to_string()),
        homebrew_fail_log_lines: None,
        homebrew_forbidden_formulae: None,
        homebrew_make_jobs: Some(8),
        homebrew_no_analytics: Some(true),
        homebrew_no_auto_update: None,
        homebrew_no_cleanup_formulae: Some(vec!["git".to_string(), "curl".to_string()]),
        homebrew_temp: Some("/tmp".to_string()),
        homebrew_verbose: Some(false),
        no_proxy: Some(vec!["localhost".to_string(), "127.0.0.1".to_string()]),
    }
}

fn benchmark_serialize_simple(c: &mut Criterion) {
    let settings = Settings {
        editor: "vim".to_string(),
        make_jobs: 8,
        no_analytics: true,
        verbose: false,
    };

    c.bench_function("serialize_simple_struct", |b| {
        b.iter(|| to_string(black_box(&settings)))
    });
}

fn benchmark_serialize_wide_record(c: &mut Criterion) {
    let record = wide_record();
    let options = DotenvOptions::new()
        .with_separator("HOMEBREW_NO_CLEANUP_FORMULAE", ",")
        .with_separator("no_proxy", ",");

    c.bench_function("serialize_wide_record", |b| {
        b.iter(|| to_string_with_options(black_box(&record), options.clone()))
    });
}

fn benchmark_serialize_sequence(c: &mut Criterion) {
    #[derive(Serialize)]
    struct Taps {
        taps: Vec<String>,
    }

    let mut group = c.benchmark_group("serialize_sequence");

    for size in [10, 50, 100, 500].iter() {
        let taps = Taps {
            taps: (0..*size).map(|i| format!("user/tap-{}", i)).collect(),
        };

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| to_string(black_box(&taps)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_serialize_simple,
    benchmark_serialize_wide_record,
    benchmark_serialize_sequence
);
criterion_main!(benches);
