use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use assist_core::Category;
use once_cell::sync::OnceCell;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

static TRACING_INIT: OnceCell<()> = OnceCell::new();

/// Gateway-side request counters. The classifier itself never touches these.
#[derive(Debug, Default)]
pub struct AppMetrics {
    requests_total: AtomicU64,
    delay_total: AtomicU64,
    cancellation_total: AtomicU64,
    weather_total: AtomicU64,
    general_total: AtomicU64,
    total_latency_micros: AtomicU64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryCounts {
    pub delay: u64,
    pub cancellation: u64,
    pub weather: u64,
    pub general: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    pub requests_total: u64,
    pub categories: CategoryCounts,
    pub avg_latency_micros: f64,
}

impl AppMetrics {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn inc_request(&self) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
        metrics::counter!("assist_requests_total").increment(1);
    }

    pub fn record_category(&self, category: Category) {
        let counter = match category {
            Category::Delay => &self.delay_total,
            Category::Cancellation => &self.cancellation_total,
            Category::Weather => &self.weather_total,
            Category::General => &self.general_total,
        };
        counter.fetch_add(1, Ordering::Relaxed);
        metrics::counter!("assist_category_total", "category" => category.as_code())
            .increment(1);
    }

    pub fn observe_latency(&self, duration: Duration) {
        self.total_latency_micros
            .fetch_add(duration.as_micros() as u64, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        let requests = self.requests_total.load(Ordering::Relaxed);
        let latency = self.total_latency_micros.load(Ordering::Relaxed);

        MetricsSnapshot {
            requests_total: requests,
            categories: CategoryCounts {
                delay: self.delay_total.load(Ordering::Relaxed),
                cancellation: self.cancellation_total.load(Ordering::Relaxed),
                weather: self.weather_total.load(Ordering::Relaxed),
                general: self.general_total.load(Ordering::Relaxed),
            },
            avg_latency_micros: if requests == 0 {
                0.0
            } else {
                latency as f64 / requests as f64
            },
        }
    }
}

/// Workspace crates that log at info unless `RUST_LOG` says otherwise.
const LOGGING_CRATES: &[&str] = &["assist_agents", "assist_api", "assist_cli", "tower_http"];

fn default_directives(service_name: &str) -> String {
    let mut targets = vec![service_name];
    targets.extend(
        LOGGING_CRATES
            .iter()
            .copied()
            .filter(|target| *target != service_name),
    );
    targets
        .iter()
        .map(|target| format!("{target}=info"))
        .collect::<Vec<_>>()
        .join(",")
}

pub fn init_tracing(service_name: &str) {
    TRACING_INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directives(service_name)));

        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_current_span(true)
            .init();
    });
}
