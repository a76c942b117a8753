//! Language-model seam. Nothing on the recommendation path calls into this;
//! it exists so a real completion backend can be plugged in separately.

use anyhow::{Context, Result};

pub trait CompletionModel: Send + Sync {
    fn generate(&self, prompt: &str) -> Result<String>;
}

pub fn delay_recommendation_prompt(details: &str) -> String {
    format!(
        "A flight has been delayed and there are operational issues. Here are the details: {details}\n\n\
         Provide a detailed recommendation:\n\
         - Compose a short, empathetic message for passengers.\n\
         - Suggest alternate flight options (exact)\n"
    )
}

/// Named tool wrapping a completion model for operational delay write-ups.
pub struct DelayAdvisor<M> {
    model: M,
}

impl<M: CompletionModel> DelayAdvisor<M> {
    pub const NAME: &'static str = "FlightDelayRecommendation";
    pub const DESCRIPTION: &'static str =
        "Provides recommendations for flight delays and issues.";

    pub fn new(model: M) -> Self {
        Self { model }
    }

    pub fn recommend(&self, details: &str) -> Result<String> {
        let prompt = delay_recommendation_prompt(details);
        self.model
            .generate(&prompt)
            .context("completion model failed to produce a delay recommendation")
    }
}
