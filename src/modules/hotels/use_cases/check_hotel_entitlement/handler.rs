use crate::modules::hotels::adapters::outbound::ticket_lookup::TicketLookup;
use crate::modules::hotels::core::errors::ApplicationError;
use crate::modules::hotels::use_cases::check_hotel_entitlement::decide::{
    Entitlement, decide_entitlement,
};
use crate::shared::core::primitives::UserId;
use std::sync::Arc;

/// Gates every hotel read. Evaluated afresh on each call.
pub struct EntitlementPolicy<TTicketLookup>
where
    TTicketLookup: TicketLookup + Send + Sync + 'static,
{
    ticket_lookup: Arc<TTicketLookup>,
}

impl<TTicketLookup> EntitlementPolicy<TTicketLookup>
where
    TTicketLookup: TicketLookup + Send + Sync + 'static,
{
    pub fn new(ticket_lookup: Arc<TTicketLookup>) -> Self {
        Self { ticket_lookup }
    }

    pub async fn evaluate(&self, user_id: UserId) -> Result<Entitlement, ApplicationError> {
        // The enrollment is only read to label a missing ticket.
        let entitlement = match self.ticket_lookup.find_ticket_by_user_id(user_id).await? {
            Some(user_ticket) => decide_entitlement(&user_ticket),
            None => match self.ticket_lookup.find_enrollment_by_user_id(user_id).await? {
                Some(_) => Entitlement::NoTicket,
                None => Entitlement::NoEnrollment,
            },
        };

        match entitlement {
            Entitlement::Entitled => {
                tracing::debug!(%user_id, "hotel entitlement granted");
            }
            denied => {
                tracing::info!(%user_id, outcome = ?denied, "hotel entitlement denied");
            }
        }
        Ok(entitlement)
    }

    pub async fn check_hotel_entitlement(&self, user_id: UserId) -> Result<(), ApplicationError> {
        Ok(self.evaluate(user_id).await?.into_result()?)
    }
}
