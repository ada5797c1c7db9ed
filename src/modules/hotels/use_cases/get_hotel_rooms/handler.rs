use crate::modules::hotels::adapters::outbound::hotel_store::HotelStore;
use crate::modules::hotels::adapters::outbound::ticket_lookup::TicketLookup;
use crate::modules::hotels::core::entities::HotelWithRooms;
use crate::modules::hotels::core::errors::{ApplicationError, EntitlementError};
use crate::modules::hotels::use_cases::check_hotel_entitlement::handler::EntitlementPolicy;
use crate::shared::core::primitives::{HotelId, UserId};
use std::sync::Arc;

pub struct GetHotelRoomsHandler<TTicketLookup, THotelStore>
where
    TTicketLookup: TicketLookup + Send + Sync + 'static,
    THotelStore: HotelStore + Send + Sync + 'static,
{
    policy: EntitlementPolicy<TTicketLookup>,
    hotel_store: Arc<THotelStore>,
}

impl<TTicketLookup, THotelStore> GetHotelRoomsHandler<TTicketLookup, THotelStore>
where
    TTicketLookup: TicketLookup + Send + Sync + 'static,
    THotelStore: HotelStore + Send + Sync + 'static,
{
    pub fn new(ticket_lookup: Arc<TTicketLookup>, hotel_store: Arc<THotelStore>) -> Self {
        Self {
            policy: EntitlementPolicy::new(ticket_lookup),
            hotel_store,
        }
    }

    pub async fn handle(
        &self,
        user_id: UserId,
        hotel_id: HotelId,
    ) -> Result<HotelWithRooms, ApplicationError> {
        self.policy.check_hotel_entitlement(user_id).await?;

        match self.hotel_store.find_hotel_with_rooms(hotel_id).await? {
            Some(hotel) => Ok(hotel),
            None => {
                tracing::debug!(%user_id, %hotel_id, "hotel not found");
                Err(EntitlementError::NotFound.into())
            }
        }
    }
}
