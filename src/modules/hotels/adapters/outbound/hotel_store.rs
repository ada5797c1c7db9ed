use crate::modules::hotels::core::entities::{Hotel, HotelWithRooms};
use crate::shared::core::primitives::HotelId;
use async_trait::async_trait;

#[async_trait]
pub trait HotelStore: Send + Sync {
    async fn list_hotels(&self) -> anyhow::Result<Vec<Hotel>>;

    async fn find_hotel_with_rooms(
        &self,
        hotel_id: HotelId,
    ) -> anyhow::Result<Option<HotelWithRooms>>;
}
