use actix_multipart::{Field, Multipart, MultipartError};
use futures::TryStreamExt;
use tempfile::NamedTempFile;
use tokio::io::AsyncWriteExt;

use crate::modules::media::domain::{StagedUpload, UploadPolicy, UploadRejection};

/// Streams every part named `field_name` into its own temp file. Other parts
/// are drained and ignored. A rejected part removes every file staged so far.
pub async fn stage_files(
    payload: &mut Multipart,
    field_name: &str,
    policy: &UploadPolicy,
) -> Result<Vec<StagedUpload>, UploadRejection> {
    let mut staged = Vec::new();

    while let Some(mut field) = payload.try_next().await.map_err(malformed)? {
        if field.name() != Some(field_name) {
            drain(&mut field).await?;
            continue;
        }

        if staged.len() >= policy.max_files_per_request {
            return Err(UploadRejection::TooMany(policy.max_files_per_request));
        }

        staged.push(stage_field(&mut field, policy).await?);
    }

    Ok(staged)
}

/// Stages the first `field_name` part; fails with `Missing` when there is none.
pub async fn stage_single(
    payload: &mut Multipart,
    field_name: &str,
    policy: &UploadPolicy,
) -> Result<StagedUpload, UploadRejection> {
    stage_files(payload, field_name, policy)
        .await?
        .into_iter()
        .next()
        .ok_or(UploadRejection::Missing)
}

async fn stage_field(
    field: &mut Field,
    policy: &UploadPolicy,
) -> Result<StagedUpload, UploadRejection> {
    let content_type = field
        .content_type()
        .map(|mime| mime.essence_str().to_string())
        .unwrap_or_else(|| "application/octet-stream".to_string());
    policy.check_type(&content_type)?;

    let file_name = field
        .content_disposition()
        .and_then(|cd| cd.get_filename())
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or("upload")
        .to_string();

    let (file, path) = NamedTempFile::new().map_err(staging)?.into_parts();
    let mut out = tokio::fs::File::from_std(file);
    let mut size: u64 = 0;

    while let Some(chunk) = field.try_next().await.map_err(malformed)? {
        size += chunk.len() as u64;
        policy.check_size(size)?;
        out.write_all(&chunk).await.map_err(staging)?;
    }
    out.flush().await.map_err(staging)?;

    if size == 0 {
        return Err(UploadRejection::Empty);
    }

    Ok(StagedUpload::new(path, file_name, content_type, size))
}

async fn drain(field: &mut Field) -> Result<(), UploadRejection> {
    while field.try_next().await.map_err(malformed)?.is_some() {}
    Ok(())
}

fn malformed(err: MultipartError) -> UploadRejection {
    UploadRejection::Malformed(err.to_string())
}

fn staging(err: std::io::Error) -> UploadRejection {
    UploadRejection::Staging(err.to_string())
}
