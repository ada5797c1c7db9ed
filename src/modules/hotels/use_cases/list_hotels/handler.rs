use crate::modules::hotels::adapters::outbound::hotel_store::HotelStore;
use crate::modules::hotels::adapters::outbound::ticket_lookup::TicketLookup;
use crate::modules::hotels::core::entities::Hotel;
use crate::modules::hotels::core::errors::ApplicationError;
use crate::modules::hotels::use_cases::check_hotel_entitlement::handler::EntitlementPolicy;
use crate::shared::core::primitives::UserId;
use std::sync::Arc;

pub struct ListHotelsHandler<TTicketLookup, THotelStore>
where
    TTicketLookup: TicketLookup + Send + Sync + 'static,
    THotelStore: HotelStore + Send + Sync + 'static,
{
    policy: EntitlementPolicy<TTicketLookup>,
    hotel_store: Arc<THotelStore>,
}

impl<TTicketLookup, THotelStore> ListHotelsHandler<TTicketLookup, THotelStore>
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

    pub async fn handle(&self, user_id: UserId) -> Result<Vec<Hotel>, ApplicationError> {
        self.policy.check_hotel_entitlement(user_id).await?;

        let hotels = self.hotel_store.list_hotels().await?;
        tracing::debug!(%user_id, count = hotels.len(), "listed hotels");
        Ok(hotels)
    }
}

#[cfg(test)]
mod list_hotels_handler_tests {
    use super::*;
    use crate::modules::hotels::adapters::outbound::store_in_memory::InMemoryStore;
    use crate::modules::hotels::core::entities::TicketStatus;
    use crate::modules::hotels::core::errors::EntitlementError;
    use crate::tests::fixtures::{ENTITLED_USER, UserTicketBuilder, seed_enrollment_only};
    use rstest::{fixture, rstest};

    type Handler = ListHotelsHandler<InMemoryStore, InMemoryStore>;

    fn handler_for(store: InMemoryStore) -> Handler {
        let store = Arc::new(store);
        ListHotelsHandler::new(store.clone(), store)
    }

    #[fixture]
    fn before_each() -> InMemoryStore {
        InMemoryStore::new()
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_list_every_hotel_for_an_entitled_user(before_each: InMemoryStore) {
        let store = before_each;
        UserTicketBuilder::new().seed(&store, ENTITLED_USER).await;
        let first = store.insert_hotel("nice hotel", "nice image").await;
        let second = store.insert_hotel("other hotel", "other image").await;
        let handler = handler_for(store);

        let hotels = handler.handle(ENTITLED_USER).await.unwrap();

        assert_eq!(hotels, vec![first, second]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_an_empty_list_when_there_are_no_hotels(before_each: InMemoryStore) {
        let store = before_each;
        UserTicketBuilder::new().seed(&store, ENTITLED_USER).await;
        let handler = handler_for(store);

        assert!(handler.handle(ENTITLED_USER).await.unwrap().is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_identical_results_on_repeated_calls(before_each: InMemoryStore) {
        let store = before_each;
        UserTicketBuilder::new().seed(&store, ENTITLED_USER).await;
        store.insert_hotel("nice hotel", "nice image").await;
        let handler = handler_for(store);

        let first = handler.handle(ENTITLED_USER).await.unwrap();
        let second = handler.handle(ENTITLED_USER).await.unwrap();

        assert_eq!(first, second);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_not_find_anything_for_a_user_without_ticket(before_each: InMemoryStore) {
        let store = before_each;
        seed_enrollment_only(&store, ENTITLED_USER).await;
        store.insert_hotel("nice hotel", "nice image").await;
        let handler = handler_for(store);

        assert!(matches!(
            handler.handle(ENTITLED_USER).await,
            Err(ApplicationError::Entitlement(EntitlementError::NotFound))
        ));
    }

    #[rstest]
    #[case(UserTicketBuilder::new().status(TicketStatus::Reserved))]
    #[case(UserTicketBuilder::new().includes_hotel(false))]
    #[case(UserTicketBuilder::new().is_remote(true))]
    #[tokio::test]
    async fn it_should_refuse_a_user_whose_ticket_does_not_grant_hotels(
        before_each: InMemoryStore,
        #[case] ticket: UserTicketBuilder,
    ) {
        let store = before_each;
        ticket.seed(&store, ENTITLED_USER).await;
        store.insert_hotel("nice hotel", "nice image").await;
        let handler = handler_for(store);

        assert!(matches!(
            handler.handle(ENTITLED_USER).await,
            Err(ApplicationError::Entitlement(EntitlementError::Unauthorized))
        ));
    }
}
