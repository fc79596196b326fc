use std::collections::HashMap;
use std::sync::Arc;

use futures::future::{join_all, BoxFuture, FutureExt, Shared};
use tracing::debug;

use super::decoder::{DecodedImage, ImageDecoder};

/// Outcome of a decode request. Failures still count as settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    Decoded(DecodedImage),
    Failed,
}

impl Readiness {
    pub fn is_decoded(&self) -> bool {
        matches!(self, Readiness::Decoded(_))
    }
}

/// Cloneable signal that settles once per source
pub type ReadySignal = Shared<BoxFuture<'static, Readiness>>;

/// Append-only cache of decode requests keyed by source string
///
/// Entries live as long as the cache. The carousel works over a small fixed
/// image set, so growth is bounded in practice.
pub struct ImageCache {
    decoder: Arc<dyn ImageDecoder>,
    entries: HashMap<String, ReadySignal>,
}

impl ImageCache {
    pub fn new(decoder: Arc<dyn ImageDecoder>) -> Self {
        Self {
            decoder,
            entries: HashMap::new(),
        }
    }

    /// Start decoding `src` unless a request already exists, returning its signal
    ///
    /// Must be called from within a Tokio runtime: the decode runs as a
    /// spawned task so it progresses even if nobody awaits the signal.
    pub fn preload(&mut self, src: &str) -> ReadySignal {
        if let Some(ready) = self.entries.get(src) {
            return ready.clone();
        }

        let ready = self.spawn_decode(src);
        self.entries.insert(src.to_string(), ready.clone());
        ready
    }

    /// Best-effort decode of an already displayed source, outside the cache
    pub fn redecode(&self, src: &str) {
        drop(self.spawn_decode(src));
    }

    fn spawn_decode(&self, src: &str) -> ReadySignal {
        let decoder = Arc::clone(&self.decoder);
        let owned = src.to_string();
        let task = tokio::spawn(async move {
            match decoder.decode(&owned).await {
                Ok(image) => Readiness::Decoded(image),
                Err(e) => {
                    debug!(src = %owned, error = %e, "Image decode failed, treating as settled");
                    Readiness::Failed
                }
            }
        });

        async move {
            task.await.unwrap_or_else(|e| {
                debug!(error = %e, "Image decode task aborted");
                Readiness::Failed
            })
        }
        .boxed()
        .shared()
    }

    /// Settled readiness of a source, None while pending or never requested
    ///
    /// Polls the signal once, so a decode that finished is seen even when
    /// nobody awaited it.
    pub fn readiness(&self, src: &str) -> Option<Readiness> {
        self.entries
            .get(src)
            .and_then(|ready| ready.clone().now_or_never())
    }

    pub fn contains(&self, src: &str) -> bool {
        self.entries.contains_key(src)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Wait for every signal to settle. Individual failures do not short-circuit.
pub async fn settle_all(signals: Vec<ReadySignal>) -> Vec<Readiness> {
    join_all(signals).await
}
