mod advisor;

use std::sync::Arc;
use std::time::Instant;

use assist_core::{classify_category, Category, GuidanceResponse, Query};
use assist_observability::AppMetrics;
use serde::Serialize;
use tracing::{info, instrument};

pub use advisor::{delay_recommendation_prompt, CompletionModel, DelayAdvisor};

#[derive(Debug, Clone, Serialize)]
pub struct Classified {
    pub category: Category,
    pub response: GuidanceResponse,
}

#[derive(Clone)]
pub struct FlightAssistAgent {
    metrics: Arc<AppMetrics>,
}

impl FlightAssistAgent {
    pub fn new(metrics: Arc<AppMetrics>) -> Self {
        Self { metrics }
    }

    #[instrument(skip(self, query), fields(input_len = query.input_text.len()))]
    pub fn handle_query(&self, query: &Query) -> Classified {
        let started = Instant::now();
        self.metrics.inc_request();

        let category = classify_category(&query.input_text);
        let response = category.response();

        self.metrics.record_category(category);
        self.metrics.observe_latency(started.elapsed());
        info!(
            category = %category.as_code(),
            recommendations = response.recommendations.len(),
            "query classified"
        );

        Classified { category, response }
    }
}
