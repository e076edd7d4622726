use once_cell::sync::Lazy;
use prometheus::{
    register_histogram, register_int_counter, register_int_counter_vec, Histogram, IntCounter,
    IntCounterVec,
};

pub static ANALYSES_GENERATED_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "api_analyses_generated_total",
        "Analyses produced, grouped by source (template or generated)",
        &["source"]
    )
    .expect("analyses generated total")
});

pub static ANALYZE_REJECTIONS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "api_analyze_rejections_total",
        "Analyze requests rejected because the repository path failed validation"
    )
    .expect("analyze rejections total")
});

pub static ANALYZE_DURATION: Lazy<Histogram> = Lazy::new(|| {
    register_histogram!(
        "api_analyze_duration_seconds",
        "Duration of accepted analyze requests in seconds, simulated delay included",
        vec![0.1, 0.25, 0.5, 0.8, 1.0, 1.5, 2.0, 5.0]
    )
    .expect("analyze duration histogram")
});
