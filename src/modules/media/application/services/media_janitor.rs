use std::sync::Arc;

use futures::future::join_all;
use tracing::warn;

use crate::modules::media::application::ports::outgoing::MediaHost;
use crate::modules::media::domain::MediaRef;

/// Best-effort remote cleanup for content flows. Failures are logged and
/// never reach the caller.
#[derive(Clone)]
pub struct MediaJanitor {
    host: Arc<dyn MediaHost>,
}

impl MediaJanitor {
    pub fn new(host: Arc<dyn MediaHost>) -> Self {
        Self { host }
    }

    pub async fn discard(&self, media: &MediaRef) {
        if let Err(e) = self.host.delete(&media.public_id).await {
            warn!(
                public_id = %media.public_id,
                error = %e,
                "Failed to delete orphaned media asset"
            );
        }
    }

    /// Deletes `previous` unless `next` points at the same asset.
    pub async fn discard_replaced(&self, previous: Option<&MediaRef>, next: Option<&MediaRef>) {
        let Some(previous) = previous else {
            return;
        };

        let kept = next.map(|n| n.same_asset(previous)).unwrap_or(false);
        if !kept {
            self.discard(previous).await;
        }
    }

    /// Deletes every asset of `previous` that `next` no longer references.
    pub async fn discard_dropped(&self, previous: &[MediaRef], next: &[MediaRef]) {
        for media in previous {
            if !next.iter().any(|n| n.same_asset(media)) {
                self.discard(media).await;
            }
        }
    }

    /// Deletes all assets in parallel.
    pub async fn discard_all<'a, I>(&self, media: I)
    where
        I: IntoIterator<Item = &'a MediaRef>,
    {
        join_all(media.into_iter().map(|m| self.discard(m))).await;
    }
}
