use thiserror::Error;

/// Outcomes that deny access to hotel data.
///
/// `Unauthorized` deliberately carries no reason: an unpaid, remote or
/// hotel-less ticket all look the same to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EntitlementError {
    #[error("not found")]
    NotFound,

    #[error("unauthorized")]
    Unauthorized,
}

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Entitlement(#[from] EntitlementError),

    #[error(transparent)]
    Store(#[from] anyhow::Error),
}
