use async_trait::async_trait;

use crate::OutboundMessage;

/// Outbound mail transport used by the gateway.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Whether the transport has usable credentials. The gateway refuses to
    /// send when this is false, before any network I/O.
    fn is_configured(&self) -> bool;

    /// Deliver one message. Called at most once per submission.
    async fn send(&self, message: OutboundMessage) -> anyhow::Result<()>;
}

#[async_trait]
impl<M: Mailer + ?Sized> Mailer for std::sync::Arc<M> {
    fn is_configured(&self) -> bool {
        (**self).is_configured()
    }

    async fn send(&self, message: OutboundMessage) -> anyhow::Result<()> {
        (**self).send(message).await
    }
}
