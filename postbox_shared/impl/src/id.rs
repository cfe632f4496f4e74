use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use postbox_models::message::MessageId;
use postbox_shared_contracts::id::MessageIdService;

/// Process-local id generator backed by an atomic counter.
///
/// Ids start at 1 and increase; clones share the same counter.
#[derive(Debug, Clone, Default)]
pub struct MessageIdServiceImpl {
    counter: Arc<AtomicU64>,
}

impl MessageIdService for MessageIdServiceImpl {
    #[tracing::instrument(skip(self))]
    fn generate(&self) -> MessageId {
        (self.counter.fetch_add(1, Ordering::Relaxed) + 1).into()
    }
}
