use async_graphql::{Context, ErrorExtensions, Object, Result as GqlResult, SimpleObject, Value};

use crate::modules::hotels::core::entities::{Hotel, HotelWithRooms, Room};
use crate::modules::hotels::core::errors::{ApplicationError, EntitlementError};
use crate::shared::core::primitives::{HotelId, format_iso_millis};
use crate::shell::auth::AuthenticatedUser;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
#[graphql(name = "Hotel")]
pub struct GqlHotel {
    pub id: i64,
    pub name: String,
    pub image: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Hotel> for GqlHotel {
    fn from(h: Hotel) -> Self {
        Self {
            id: h.id.value(),
            name: h.name,
            image: h.image,
            created_at: format_iso_millis(&h.created_at),
            updated_at: format_iso_millis(&h.updated_at),
        }
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(name = "Room")]
pub struct GqlRoom {
    pub id: i64,
    pub name: String,
    pub capacity: i32,
    pub hotel_id: i64,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Room> for GqlRoom {
    fn from(r: Room) -> Self {
        Self {
            id: r.id,
            name: r.name,
            capacity: r.capacity,
            hotel_id: r.hotel_id.value(),
            created_at: format_iso_millis(&r.created_at),
            updated_at: format_iso_millis(&r.updated_at),
        }
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(name = "HotelWithRooms")]
pub struct GqlHotelWithRooms {
    pub id: i64,
    pub name: String,
    pub image: String,
    pub created_at: String,
    pub updated_at: String,
    pub rooms: Vec<GqlRoom>,
}

impl From<HotelWithRooms> for GqlHotelWithRooms {
    fn from(v: HotelWithRooms) -> Self {
        let hotel = GqlHotel::from(v.hotel);
        Self {
            id: hotel.id,
            name: hotel.name,
            image: hotel.image,
            created_at: hotel.created_at,
            updated_at: hotel.updated_at,
            rooms: v.rooms.into_iter().map(Into::into).collect(),
        }
    }
}

fn coded(message: &str, code: &'static str) -> async_graphql::Error {
    async_graphql::Error::new(message)
        .extend_with(|_, extensions| extensions.set("code", Value::String(code.to_string())))
}

fn into_gql_error(error: ApplicationError) -> async_graphql::Error {
    match error {
        ApplicationError::Entitlement(EntitlementError::NotFound) => coded("not found", "NOT_FOUND"),
        ApplicationError::Entitlement(EntitlementError::Unauthorized) => {
            coded("unauthorized", "UNAUTHORIZED")
        }
        ApplicationError::Store(error) => {
            tracing::error!(error = ?error, "graphql hotel query failed");
            coded("internal error", "INTERNAL")
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn hotels(&self, context: &Context<'_>) -> GqlResult<Vec<GqlHotel>> {
        let state = context.data_unchecked::<AppState>();
        let AuthenticatedUser(user_id) = *context.data::<AuthenticatedUser>()?;

        let hotels = state
            .list_hotels
            .handle(user_id)
            .await
            .map_err(into_gql_error)?;
        Ok(hotels.into_iter().map(Into::into).collect())
    }

    async fn hotel(&self, context: &Context<'_>, id: i64) -> GqlResult<GqlHotelWithRooms> {
        let state = context.data_unchecked::<AppState>();
        let AuthenticatedUser(user_id) = *context.data::<AuthenticatedUser>()?;
        let hotel_id = HotelId::try_from(id).map_err(|_| coded("not found", "NOT_FOUND"))?;

        let hotel = state
            .get_hotel_rooms
            .handle(user_id, hotel_id)
            .await
            .map_err(into_gql_error)?;
        Ok(hotel.into())
    }
}
