use std::sync::LazyLock;

use prometheus::*;

static METRIC_SEARCH_COUNT: LazyLock<IntCounterVec> = LazyLock::new(|| {
    register_int_counter_vec!("scent_search_count", "count of name searches", &["outcome"])
        .unwrap()
});

static METRIC_RECOMMEND_COUNT: LazyLock<IntCounterVec> = LazyLock::new(|| {
    register_int_counter_vec!(
        "scent_recommend_count",
        "count of recommendation lookups",
        &["outcome"]
    )
    .unwrap()
});

static METRIC_REQUEST_DURATION: LazyLock<HistogramVec> = LazyLock::new(|| {
    register_histogram_vec!(
        "scent_request_duration",
        "duration of the per-request lookup in seconds",
        &["endpoint"]
    )
    .unwrap()
});

static METRIC_HERO_MATCH_SCORE: LazyLock<Histogram> = LazyLock::new(|| {
    register_histogram!(
        "scent_hero_match_score",
        "match score of the returned hero",
        (5..=100).step_by(5).map(|x| x as f64).collect()
    )
    .unwrap()
});

/// 增加搜索计数，`outcome` 为 `hit`、`empty` 或错误类型
pub fn inc_search_count(outcome: &str) {
    METRIC_SEARCH_COUNT.with_label_values(&[outcome]).inc();
}

pub fn inc_recommend_count(outcome: &str) {
    METRIC_RECOMMEND_COUNT.with_label_values(&[outcome]).inc();
}

pub fn observe_request_duration(endpoint: &str, duration: f32) {
    METRIC_REQUEST_DURATION.with_label_values(&[endpoint]).observe(duration as f64);
}

pub fn observe_hero_match_score(score: u8) {
    METRIC_HERO_MATCH_SCORE.observe(score as f64);
}
