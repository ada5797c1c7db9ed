use crate::modules::hotels::adapters::outbound::store_in_memory::InMemoryStore;
use crate::modules::hotels::use_cases::get_hotel_rooms::handler::GetHotelRoomsHandler;
use crate::modules::hotels::use_cases::list_hotels::handler::ListHotelsHandler;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub list_hotels: Arc<ListHotelsHandler<InMemoryStore, InMemoryStore>>,
    pub get_hotel_rooms: Arc<GetHotelRoomsHandler<InMemoryStore, InMemoryStore>>,
}

impl AppState {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self {
            list_hotels: Arc::new(ListHotelsHandler::new(store.clone(), store.clone())),
            get_hotel_rooms: Arc::new(GetHotelRoomsHandler::new(store.clone(), store)),
        }
    }
}
