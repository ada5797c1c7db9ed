// Demo data for local runs against the in-memory store.
//
// User 1 holds a paid, in-person ticket with hotel; user 2 a reserved one;
// user 3 is enrolled without a ticket.

use crate::modules::hotels::adapters::outbound::store_in_memory::InMemoryStore;
use crate::modules::hotels::core::entities::TicketStatus;
use crate::shared::core::primitives::UserId;

pub async fn seed_demo_data(store: &InMemoryStore) -> anyhow::Result<()> {
    let with_hotel = store
        .insert_ticket_type("in person with hotel", 600, false, true)
        .await;

    let paid = store.insert_enrollment(UserId::new(1), "paid user").await;
    store
        .insert_ticket(paid.id, with_hotel.id, TicketStatus::Paid)
        .await?;

    let reserved = store.insert_enrollment(UserId::new(2), "reserved user").await;
    store
        .insert_ticket(reserved.id, with_hotel.id, TicketStatus::Reserved)
        .await?;

    store.insert_enrollment(UserId::new(3), "ticketless user").await;

    let driven = store
        .insert_hotel("Driven Resort", "https://example.com/driven.jpg")
        .await;
    store.insert_room(driven.id, "101", 1).await?;
    store.insert_room(driven.id, "102", 2).await?;
    store.insert_room(driven.id, "201", 3).await?;

    let palace = store
        .insert_hotel("Driven Palace", "https://example.com/palace.jpg")
        .await;
    store.insert_room(palace.id, "Suite 1", 4).await?;

    store
        .insert_hotel("Driven World", "https://example.com/world.jpg")
        .await;

    tracing::info!("seeded demo enrollments, tickets and hotels");
    Ok(())
}
