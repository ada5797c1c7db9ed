use crate::modules::hotels::core::entities::{Enrollment, UserTicket};
use crate::shared::core::primitives::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait TicketLookup: Send + Sync {
    async fn find_enrollment_by_user_id(&self, user_id: UserId)
    -> anyhow::Result<Option<Enrollment>>;

    /// Follows enrollment -> ticket -> ticket type. Returns the oldest ticket
    /// when an enrollment holds several.
    async fn find_ticket_by_user_id(&self, user_id: UserId) -> anyhow::Result<Option<UserTicket>>;
}
