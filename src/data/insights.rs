//! Generative-text API client for fund insights
//!
//! Sends a single fund record to a generateContent endpoint and extracts the
//! produced markdown report. The prompt is assembled from the record's
//! `key = value` lines plus fixed section instructions; response parsing is
//! typed end-to-end, and a response without usable text is an explicit error
//! rather than a placeholder string.

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use super::Record;

/// Base URL for the generateContent API family
const DEFAULT_ENDPOINT_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Upper bound on one insight generation call
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Errors that can occur when generating insights
#[derive(Debug, Error)]
pub enum InsightError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Provider answered with a non-success status
    #[error("Insight provider returned HTTP {0}")]
    Status(StatusCode),

    /// The model response carried no candidates
    #[error("No candidates in model response")]
    NoCandidates,

    /// The first candidate carried no usable text
    #[error("No text content in model response")]
    MissingContent,
}

/// Client for generating fund insights from a generative-text API
#[derive(Debug, Clone)]
pub struct InsightsClient {
    /// HTTP client for making requests
    http_client: Client,
    /// API key passed as a query parameter
    api_key: String,
    /// Model name used to build the default endpoint
    model: String,
    /// Full endpoint override; when set, `model` is not used for the URL
    endpoint: Option<String>,
}

impl InsightsClient {
    /// Creates a new InsightsClient for the given key and model
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            endpoint: None,
        }
    }

    /// Overrides the full endpoint URL (for testing or proxied deployments)
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Returns the endpoint URL for this client
    fn endpoint_url(&self) -> String {
        match &self.endpoint {
            Some(endpoint) => endpoint.clone(),
            None => format!("{}/{}:generateContent", DEFAULT_ENDPOINT_BASE, self.model),
        }
    }

    /// Generates a markdown insight report for one fund record
    ///
    /// # Returns
    /// * `Ok(String)` - The generated report text
    /// * `Err(InsightError)` - On transport failure, non-2xx status, or a
    ///   response without usable text
    pub async fn generate_insights(&self, fund: &Record) -> Result<String, InsightError> {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: build_prompt(fund),
                }],
            }],
        };

        let response = self
            .http_client
            .post(self.endpoint_url())
            .query(&[("key", self.api_key.as_str())])
            .timeout(REQUEST_TIMEOUT)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(InsightError::Status(status));
        }

        let body: GenerateResponse = response.json().await?;
        extract_text(body)
    }
}

/// Builds the analysis prompt for one fund record
fn build_prompt(fund: &Record) -> String {
    let mut prompt = String::from(
        "You are a financial research assistant. Analyze the following mutual fund and \
         produce detailed, factual, and neutral insights to help a retail investor decide \
         suitability.\n\nFund data (CSV fields as key=value):\n",
    );
    for (name, value) in fund.iter() {
        prompt.push_str(&format!("- {} = {}\n", name, value));
    }
    prompt.push_str(
        "\nOutput a well-structured markdown report with these sections:\n\
         1. Historical performance: CAGR, drawdowns, rolling returns (if known or infer using general category trends; avoid fabricating unknowns).\n\
         2. Description & objectives: investment objective, category, style, benchmarks.\n\
         3. Sector-wise holdings & diversification: typical sector allocation and concentration risks for this fund/category.\n\
         4. Statistical & analytics: risk metrics (volatility, Sharpe-like discussion), expense ratio considerations, minimum SIP/lump sum if relevant.\n\
         5. Suitability: who it suits, investment horizon, and key risks.\n\n\
         Important: If specific numeric data is not provided in input, base insights on the fund's \
         category and general market knowledge without inventing exact numbers. Use clear headings \
         and bullet points.",
    );
    prompt
}

/// Pulls the first candidate's first text part out of a response
fn extract_text(response: GenerateResponse) -> Result<String, InsightError> {
    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or(InsightError::NoCandidates)?;

    candidate
        .content
        .and_then(|content| content.parts.into_iter().next())
        .and_then(|part| part.text)
        .filter(|text| !text.is_empty())
        .ok_or(InsightError::MissingContent)
}

/// generateContent request body
#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

/// generateContent response body
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}
