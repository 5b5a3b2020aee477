//! Campus guide question answering.
//!
//! Forwards a visitor's question to the text provider, then scans the reply
//! for a campus location so the frontend knows whether to show a map.

use crate::catalog;
use crate::models::{GuideResponse, LocationRef};
use crate::services::metrics;
use crate::services::providers::{GenerationParams, TextProvider};
use service_core::error::AppError;
use std::fmt::Write;
use std::sync::Arc;
use std::time::Instant;

pub struct CampusGuide {
    provider: Arc<dyn TextProvider>,
    params: GenerationParams,
}

impl CampusGuide {
    pub fn new(provider: Arc<dyn TextProvider>, params: GenerationParams) -> Self {
        Self { provider, params }
    }

    pub async fn answer(&self, query: &str) -> Result<GuideResponse, AppError> {
        let prompt = build_prompt(query);
        let started = Instant::now();

        let result = self.provider.generate(&prompt, &self.params).await;
        let status = if result.is_ok() { "ok" } else { "error" };
        metrics::record_provider_latency(self.provider.name(), status, started.elapsed());

        let generated = result.map_err(|e| {
            tracing::error!(provider = %self.provider.name(), error = %e, "Text generation failed");
            metrics::record_query("error");
            e
        })?;

        metrics::record_tokens(
            self.provider.name(),
            generated.input_tokens,
            generated.output_tokens,
        );
        tracing::debug!(
            finish_reason = generated.finish_reason.as_str(),
            reply_len = generated.text.len(),
            "Generated campus guide reply"
        );

        let response = respond_with_location(generated.text);
        match &response.location {
            Some(location) => {
                tracing::info!(location_id = %location.id, "Location found in reply");
                metrics::record_query("location");
            }
            None => metrics::record_query("no_location"),
        }

        Ok(response)
    }
}

/// Wrap generated text in a response, surfacing the first campus location it
/// mentions.
pub fn respond_with_location(message: String) -> GuideResponse {
    let location = catalog::find_mentioned_location(&message);

    GuideResponse {
        show_map: location.is_some(),
        location: location.map(|l| LocationRef {
            id: l.id.to_string(),
        }),
        message,
    }
}

/// Build the assistant prompt for a visitor's question.
pub fn build_prompt(query: &str) -> String {
    let college = catalog::college();

    let mut prompt = format!(
        "You are a helpful campus guide assistant for {}.\n\
         The user asked: {}\n\n\
         Available locations on campus:\n",
        college.name, query
    );

    for location in catalog::locations() {
        let _ = writeln!(
            prompt,
            "- {} (id: {}, direction: {}, lat: {}, lng: {})",
            location.name, location.id, location.direction, location.lat, location.lng
        );
    }

    prompt.push_str(
        "\nGive a helpful, witty and friendly answer. \
         If the user asks about a specific location, mention it by its name. \
         If the user asks for directions, say that a map will be shown.\n",
    );

    prompt
}
