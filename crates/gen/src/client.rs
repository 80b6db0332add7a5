//! HTTP client for the generation provider.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

/// Total attempts per generation call (1 initial + 2 retries).
const MAX_ATTEMPTS: u32 = 3;

/// Default per-request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Configuration for the generation provider.
#[derive(Debug, Clone)]
pub struct GenConfig {
    /// Base URL of the provider API, e.g. `https://api.example.com/v1`.
    pub api_url: String,
    /// Bearer token sent with every request.
    pub api_key: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl GenConfig {
    /// Load generation configuration from environment variables.
    ///
    /// | Env Var            | Required | Default |
    /// |--------------------|----------|---------|
    /// | `GEN_API_URL`      | **yes**  | --      |
    /// | `GEN_API_KEY`      | **yes**  | --      |
    /// | `GEN_TIMEOUT_SECS` | no       | `120`   |
    ///
    /// # Panics
    ///
    /// Panics if a required variable is missing.
    pub fn from_env() -> Self {
        let api_url = std::env::var("GEN_API_URL").expect("GEN_API_URL must be set");
        let api_key = std::env::var("GEN_API_KEY").expect("GEN_API_KEY must be set");
        let timeout_secs: u64 = std::env::var("GEN_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
            .parse()
            .expect("GEN_TIMEOUT_SECS must be a valid u64");

        Self {
            api_url,
            api_key,
            timeout_secs,
        }
    }
}

/// Errors raised by the generation client.
#[derive(Debug, thiserror::Error)]
pub enum GenError {
    /// The request could not be sent or timed out, after all retries.
    #[error("Generation request failed: {0}")]
    Request(String),

    /// The provider returned a non-success status, after all retries.
    #[error("Generation provider returned {status}: {message}")]
    Provider { status: u16, message: String },

    /// The provider response could not be decoded.
    #[error("Invalid generation response: {0}")]
    Decode(String),
}

// ---------------------------------------------------------------------------
// Request / response payloads
// ---------------------------------------------------------------------------

/// Parameters for an image generation call.
#[derive(Debug, Clone, Serialize)]
pub struct ImageRequest {
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negative_prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct ImageResponse {
    image_base64: String,
    #[serde(default)]
    mime_type: Option<String>,
}

/// A decoded image generation result.
#[derive(Debug)]
pub struct GeneratedImage {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

/// Parameters for a video generation call.
#[derive(Debug, Clone, Serialize)]
pub struct VideoRequest {
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_secs: Option<f32>,
    /// Optional source image URL for image-to-video generation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// A video generation result. Videos stay hosted by the provider.
#[derive(Debug, Deserialize)]
pub struct GeneratedVideo {
    pub video_url: String,
    #[serde(default)]
    pub mime_type: Option<String>,
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// HTTP client handle for the generation provider.
///
/// Construct once per process and share via `Arc`.
pub struct GenClient {
    http: reqwest::Client,
    config: GenConfig,
}

impl GenClient {
    /// Create a client with the per-request timeout from `config`.
    pub fn new(config: GenConfig) -> Result<Self, GenError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GenError::Request(e.to_string()))?;
        Ok(Self { http, config })
    }

    /// Generate an image, returning the decoded bytes.
    pub async fn generate_image(&self, request: &ImageRequest) -> Result<GeneratedImage, GenError> {
        let response: ImageResponse = self.post_with_retry("images/generate", request).await?;
        let bytes = BASE64
            .decode(&response.image_base64)
            .map_err(|e| GenError::Decode(format!("image_base64: {e}")))?;
        Ok(GeneratedImage {
            bytes,
            mime_type: response.mime_type.unwrap_or_else(|| "image/png".into()),
        })
    }

    /// Generate a video. The result stays hosted at the provider's URL.
    pub async fn generate_video(&self, request: &VideoRequest) -> Result<GeneratedVideo, GenError> {
        self.post_with_retry("videos/generate", request).await
    }

    /// POST `body` to `path`, retrying transient failures a fixed number of
    /// times with no backoff.
    ///
    /// Transport errors and 5xx responses are retried; 4xx responses are
    /// not (the request itself is wrong and will not improve).
    async fn post_with_retry<B, R>(&self, path: &str, body: &B) -> Result<R, GenError>
    where
        B: Serialize,
        R: serde::de::DeserializeOwned,
    {
        let url = format!("{}/{path}", self.config.api_url.trim_end_matches('/'));
        let mut last_error = GenError::Request("no attempts made".into());

        for attempt in 1..=MAX_ATTEMPTS {
            let result = self
                .http
                .post(&url)
                .bearer_auth(&self.config.api_key)
                .json(body)
                .send()
                .await;

            match result {
                Err(e) => {
                    tracing::warn!(attempt, url = %url, error = %e, "Generation request error");
                    last_error = GenError::Request(e.to_string());
                }
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        return response
                            .json::<R>()
                            .await
                            .map_err(|e| GenError::Decode(e.to_string()));
                    }

                    let message = response.text().await.unwrap_or_default();
                    if status.is_client_error() {
                        return Err(GenError::Provider {
                            status: status.as_u16(),
                            message,
                        });
                    }

                    tracing::warn!(attempt, url = %url, %status, "Generation provider error");
                    last_error = GenError::Provider {
                        status: status.as_u16(),
                        message,
                    };
                }
            }
        }

        Err(last_error)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn test_image_request_serialization_skips_absent_fields() {
        let request = ImageRequest {
            prompt: "a rooftop chase at dusk".into(),
            negative_prompt: None,
            width: Some(1024),
            height: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["prompt"], "a rooftop chase at dusk");
        assert_eq!(json["width"], 1024);
        assert!(json.get("negative_prompt").is_none());
        assert!(json.get("height").is_none());
    }

    #[test]
    fn test_image_response_decodes_base64() {
        let payload: ImageResponse = serde_json::from_value(serde_json::json!({
            "image_base64": BASE64.encode(b"fake-png"),
            "mime_type": "image/png",
        }))
        .unwrap();
        assert_eq!(BASE64.decode(payload.image_base64).unwrap(), b"fake-png");
    }

    #[test]
    fn test_video_response_shape() {
        let video: GeneratedVideo = serde_json::from_value(serde_json::json!({
            "video_url": "https://cdn.example.com/v/123.mp4",
        }))
        .unwrap();
        assert_eq!(video.video_url, "https://cdn.example.com/v/123.mp4");
        assert!(video.mime_type.is_none());
    }

    #[tokio::test]
    async fn test_unreachable_provider_reports_request_error() {
        // Port 9 (discard) refuses connections immediately; all attempts fail
        // without waiting on the timeout.
        let client = GenClient::new(GenConfig {
            api_url: "http://127.0.0.1:9".into(),
            api_key: "test-key".into(),
            timeout_secs: 1,
        })
        .unwrap();

        let result = client
            .generate_image(&ImageRequest {
                prompt: "x".into(),
                negative_prompt: None,
                width: None,
                height: None,
            })
            .await;
        assert_matches!(result, Err(GenError::Request(_)));
    }
}
