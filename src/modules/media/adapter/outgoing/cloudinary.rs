use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use sha2::{Digest, Sha256};

use crate::modules::media::application::ports::outgoing::{MediaHost, MediaHostError};
use crate::modules::media::domain::{MediaRef, StagedUpload};
use crate::shared::config::{optional, parsed, required, ConfigError, EnvLookup};

const DEFAULT_API_BASE: &str = "https://api.cloudinary.com/v1_1";

#[derive(Clone, PartialEq, Eq)]
pub struct CloudinaryConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
    pub folder: String,
    pub timeout_secs: u64,
    pub api_base: String,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for CloudinaryConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CloudinaryConfig")
            .field("cloud_name", &self.cloud_name)
            .field("folder", &self.folder)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl CloudinaryConfig {
    pub fn from_lookup(lookup: EnvLookup) -> Result<Self, ConfigError> {
        let timeout_secs = parsed(lookup, "MEDIA_TIMEOUT_SECS", 30u64)?;
        if timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                name: "MEDIA_TIMEOUT_SECS",
                reason: "must be greater than zero".to_string(),
            });
        }

        Ok(Self {
            cloud_name: required(lookup, "CLOUDINARY_CLOUD_NAME")?,
            api_key: required(lookup, "CLOUDINARY_API_KEY")?,
            api_secret: required(lookup, "CLOUDINARY_API_SECRET")?,
            folder: optional(lookup, "CLOUDINARY_FOLDER", "portfolio"),
            timeout_secs,
            api_base: optional(lookup, "CLOUDINARY_API_BASE", DEFAULT_API_BASE),
        })
    }
}

/// Signature over the request parameters: `k=v` pairs sorted by key, joined
/// with `&`, followed by the API secret, hashed with SHA-256.
fn sign(params: &[(&str, String)], api_secret: &str) -> String {
    let mut sorted: Vec<&(&str, String)> = params.iter().collect();
    sorted.sort_by(|a, b| a.0.cmp(b.0));

    let joined = sorted
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");

    let mut hasher = Sha256::new();
    hasher.update(joined.as_bytes());
    hasher.update(api_secret.as_bytes());
    hex::encode(hasher.finalize())
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
    public_id: String,
}

#[derive(Debug, Deserialize)]
struct DestroyResponse {
    result: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

fn error_message(status: reqwest::StatusCode, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.error.message)
        .unwrap_or_else(|_| format!("media host responded with {status}"))
}

fn parse_upload(body: &str) -> Result<MediaRef, MediaHostError> {
    let parsed: UploadResponse = serde_json::from_str(body)
        .map_err(|e| MediaHostError::UploadFailed(format!("unexpected response: {e}")))?;

    Ok(MediaRef::new(parsed.secure_url, parsed.public_id))
}

fn parse_destroy(body: &str) -> Result<(), MediaHostError> {
    let parsed: DestroyResponse = serde_json::from_str(body)
        .map_err(|e| MediaHostError::DeleteFailed(format!("unexpected response: {e}")))?;

    // Deleting an asset that is already gone is not an error.
    match parsed.result.as_str() {
        "ok" | "not found" => Ok(()),
        other => Err(MediaHostError::DeleteFailed(other.to_string())),
    }
}

#[derive(Clone)]
pub struct CloudinaryMediaHost {
    config: CloudinaryConfig,
    client: reqwest::Client,
}

impl CloudinaryMediaHost {
    pub fn new(config: CloudinaryConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    fn endpoint(&self, action: &str) -> String {
        format!(
            "{}/{}/image/{}",
            self.config.api_base.trim_end_matches('/'),
            self.config.cloud_name,
            action
        )
    }

    fn signed_form(&self, params: Vec<(&'static str, String)>) -> Form {
        let signature = sign(&params, &self.config.api_secret);

        params
            .into_iter()
            .fold(Form::new(), |form, (k, v)| form.text(k, v))
            .text("api_key", self.config.api_key.clone())
            .text("signature", signature)
            .text("signature_algorithm", "sha256")
    }
}

#[async_trait]
impl MediaHost for CloudinaryMediaHost {
    async fn upload(&self, file: StagedUpload, folder: &str) -> Result<MediaRef, MediaHostError> {
        let bytes = tokio::fs::read(file.path())
            .await
            .map_err(|e| MediaHostError::UploadFailed(format!("cannot read staged file: {e}")))?;

        let part = Part::bytes(bytes)
            .file_name(file.file_name().to_string())
            .mime_str(file.content_type())
            .map_err(|e| MediaHostError::UploadFailed(e.to_string()))?;

        // The staged file is no longer needed once its bytes are in memory.
        drop(file);

        let form = self
            .signed_form(vec![
                ("folder", folder.to_string()),
                ("timestamp", Utc::now().timestamp().to_string()),
            ])
            .part("file", part);

        let response = self
            .client
            .post(self.endpoint("upload"))
            .multipart(form)
            .send()
            .await
            .map_err(|e| MediaHostError::UploadFailed(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| MediaHostError::UploadFailed(e.to_string()))?;

        if !status.is_success() {
            return Err(MediaHostError::UploadFailed(error_message(status, &body)));
        }

        let media = parse_upload(&body)?;
        tracing::info!(public_id = %media.public_id, "Uploaded media asset");
        Ok(media)
    }

    async fn delete(&self, public_id: &str) -> Result<(), MediaHostError> {
        let form = self.signed_form(vec![
            ("public_id", public_id.to_string()),
            ("timestamp", Utc::now().timestamp().to_string()),
        ]);

        let response = self
            .client
            .post(self.endpoint("destroy"))
            .multipart(form)
            .send()
            .await
            .map_err(|e| MediaHostError::DeleteFailed(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| MediaHostError::DeleteFailed(e.to_string()))?;

        if !status.is_success() {
            return Err(MediaHostError::DeleteFailed(error_message(status, &body)));
        }

        parse_destroy(&body)
    }
}
