// In memory store for enrollments, tickets and the hotel catalog.
//
// Purpose
// - Serve the TicketLookup and HotelStore ports without a database.
//
// Responsibilities
// - Keep each table in an ordered map keyed by id so reads come back in id order.
// - Offer insert helpers that stand in for the enrollment, ticket and catalog services.
// - Simulate an unavailable backend through `toggle_offline`.

use crate::modules::hotels::adapters::outbound::hotel_store::HotelStore;
use crate::modules::hotels::adapters::outbound::ticket_lookup::TicketLookup;
use crate::modules::hotels::core::entities::{
    Enrollment, Hotel, HotelWithRooms, Room, Ticket, TicketStatus, TicketType, UserTicket,
};
use crate::shared::core::primitives::{HotelId, UserId};
use anyhow::{anyhow, bail};
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryStore {
    enrollments: RwLock<BTreeMap<i64, Enrollment>>,
    ticket_types: RwLock<BTreeMap<i64, TicketType>>,
    tickets: RwLock<BTreeMap<i64, Ticket>>,
    hotels: RwLock<BTreeMap<HotelId, Hotel>>,
    rooms: RwLock<BTreeMap<i64, Room>>,
    sequence: AtomicI64,
    is_offline: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn next_id(&self) -> i64 {
        self.sequence.fetch_add(1, Ordering::Relaxed) + 1
    }

    fn ensure_online(&self) -> anyhow::Result<()> {
        if self.is_offline {
            bail!("Store offline");
        }
        Ok(())
    }

    /// A user holds at most one enrollment; enrolling twice returns the first.
    pub async fn insert_enrollment(&self, user_id: UserId, name: impl Into<String>) -> Enrollment {
        let mut enrollments = self.enrollments.write().await;
        if let Some(existing) = enrollments.values().find(|e| e.user_id == user_id) {
            return existing.clone();
        }
        let now = Utc::now();
        let enrollment = Enrollment {
            id: self.next_id(),
            name: name.into(),
            user_id,
            created_at: now,
            updated_at: now,
        };
        enrollments.insert(enrollment.id, enrollment.clone());
        enrollment
    }

    pub async fn insert_ticket_type(
        &self,
        name: impl Into<String>,
        price: i32,
        is_remote: bool,
        includes_hotel: bool,
    ) -> TicketType {
        let now = Utc::now();
        let ticket_type = TicketType {
            id: self.next_id(),
            name: name.into(),
            price,
            is_remote,
            includes_hotel,
            created_at: now,
            updated_at: now,
        };
        self.ticket_types
            .write()
            .await
            .insert(ticket_type.id, ticket_type.clone());
        ticket_type
    }

    pub async fn insert_ticket(
        &self,
        enrollment_id: i64,
        ticket_type_id: i64,
        status: TicketStatus,
    ) -> anyhow::Result<Ticket> {
        if !self.enrollments.read().await.contains_key(&enrollment_id) {
            bail!("enrollment {enrollment_id} does not exist");
        }
        if !self.ticket_types.read().await.contains_key(&ticket_type_id) {
            bail!("ticket type {ticket_type_id} does not exist");
        }
        let now = Utc::now();
        let ticket = Ticket {
            id: self.next_id(),
            ticket_type_id,
            enrollment_id,
            status,
            created_at: now,
            updated_at: now,
        };
        self.tickets.write().await.insert(ticket.id, ticket.clone());
        Ok(ticket)
    }

    pub async fn insert_hotel(&self, name: impl Into<String>, image: impl Into<String>) -> Hotel {
        let now = Utc::now();
        let hotel = Hotel {
            id: HotelId::new(self.next_id()),
            name: name.into(),
            image: image.into(),
            created_at: now,
            updated_at: now,
        };
        self.hotels.write().await.insert(hotel.id, hotel.clone());
        hotel
    }

    pub async fn insert_room(
        &self,
        hotel_id: HotelId,
        name: impl Into<String>,
        capacity: i32,
    ) -> anyhow::Result<Room> {
        if !self.hotels.read().await.contains_key(&hotel_id) {
            bail!("hotel {hotel_id} does not exist");
        }
        let now = Utc::now();
        let room = Room {
            id: self.next_id(),
            name: name.into(),
            capacity,
            hotel_id,
            created_at: now,
            updated_at: now,
        };
        self.rooms.write().await.insert(room.id, room.clone());
        Ok(room)
    }
}

#[async_trait::async_trait]
impl TicketLookup for InMemoryStore {
    async fn find_enrollment_by_user_id(
        &self,
        user_id: UserId,
    ) -> anyhow::Result<Option<Enrollment>> {
        self.ensure_online()?;

        Ok(self
            .enrollments
            .read()
            .await
            .values()
            .find(|e| e.user_id == user_id)
            .cloned())
    }

    async fn find_ticket_by_user_id(&self, user_id: UserId) -> anyhow::Result<Option<UserTicket>> {
        let Some(enrollment) = self.find_enrollment_by_user_id(user_id).await? else {
            return Ok(None);
        };

        let Some(ticket) = self
            .tickets
            .read()
            .await
            .values()
            .find(|t| t.enrollment_id == enrollment.id)
            .cloned()
        else {
            return Ok(None);
        };

        let ticket_type = self
            .ticket_types
            .read()
            .await
            .get(&ticket.ticket_type_id)
            .cloned()
            .ok_or_else(|| {
                anyhow!(
                    "ticket {} references missing ticket type {}",
                    ticket.id,
                    ticket.ticket_type_id
                )
            })?;

        Ok(Some(UserTicket {
            ticket,
            ticket_type,
        }))
    }
}

#[async_trait::async_trait]
impl HotelStore for InMemoryStore {
    async fn list_hotels(&self) -> anyhow::Result<Vec<Hotel>> {
        self.ensure_online()?;

        Ok(self.hotels.read().await.values().cloned().collect())
    }

    async fn find_hotel_with_rooms(
        &self,
        hotel_id: HotelId,
    ) -> anyhow::Result<Option<HotelWithRooms>> {
        self.ensure_online()?;

        let Some(hotel) = self.hotels.read().await.get(&hotel_id).cloned() else {
            return Ok(None);
        };
        let rooms = self
            .rooms
            .read()
            .await
            .values()
            .filter(|r| r.hotel_id == hotel_id)
            .cloned()
            .collect();

        Ok(Some(HotelWithRooms { hotel, rooms }))
    }
}
