//! Client for the external AI image/video generation HTTP API.
//!
//! The service is a thin proxy: requests are forwarded as JSON, responses
//! carry either a base64 image payload or a hosted video URL. The client
//! applies a per-request timeout and a small fixed retry count; anything
//! beyond that (queueing, progress, backoff) is the provider's concern.

mod client;

pub use client::{
    GenClient, GenConfig, GenError, GeneratedImage, GeneratedVideo, ImageRequest, VideoRequest,
};
