// Pure entitlement decision.
//
// Purpose
// - Decide from a user's ticket whether hotel data may be shown.
//
// Responsibilities
// - Grant only a paid ticket whose type includes a hotel and is not remote.
// - Collapse the outcome into the two error kinds callers see.
// - Never perform input or output.

use crate::modules::hotels::core::entities::{TicketStatus, UserTicket};
use crate::modules::hotels::core::errors::EntitlementError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entitlement {
    Entitled,
    NoEnrollment,
    NoTicket,
    NotEntitled,
}

impl Entitlement {
    pub fn into_result(self) -> Result<(), EntitlementError> {
        match self {
            Entitlement::Entitled => Ok(()),
            Entitlement::NoEnrollment | Entitlement::NoTicket => Err(EntitlementError::NotFound),
            Entitlement::NotEntitled => Err(EntitlementError::Unauthorized),
        }
    }
}

pub fn decide_entitlement(user_ticket: &UserTicket) -> Entitlement {
    let denied = user_ticket.ticket.status != TicketStatus::Paid
        || !user_ticket.ticket_type.includes_hotel
        || user_ticket.ticket_type.is_remote;

    if denied {
        Entitlement::NotEntitled
    } else {
        Entitlement::Entitled
    }
}
