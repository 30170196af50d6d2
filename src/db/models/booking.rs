use crate::db::enums::{BookingGender, GameFormat};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Booking models
#[derive(Queryable, Selectable, Serialize, Deserialize, Clone)]
#[diesel(table_name = crate::schema::bookings)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Booking {
    pub id: Uuid,
    pub booking_date: chrono::NaiveDate,
    pub session: i32,
    pub rink_count: i32,
    pub format: GameFormat,
    pub gender: BookingGender,
    pub event_type: String,
    pub notes: Option<String>,
    pub organiser_id: Uuid,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::bookings)]
pub struct NewBooking {
    pub booking_date: chrono::NaiveDate,
    pub session: i32,
    pub rink_count: i32,
    pub format: GameFormat,
    pub gender: BookingGender,
    pub event_type: String,
    pub notes: Option<String>,
    pub organiser_id: Uuid,
}

// Booking API DTOs
#[derive(Deserialize)]
pub struct CreateBookingRequest {
    pub booking_date: chrono::NaiveDate,
    pub session: i32,
    pub rink_count: i32,
    pub format: GameFormat,
    pub gender: BookingGender,
    pub event_type: String,
    pub notes: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateBookingRequest {
    pub booking_date: Option<chrono::NaiveDate>,
    pub session: Option<i32>,
    pub rink_count: Option<i32>,
    pub format: Option<GameFormat>,
    pub gender: Option<BookingGender>,
    pub event_type: Option<String>,
    pub notes: Option<String>,
}

#[derive(Deserialize)]
pub struct BookingsQuery {
    pub from: Option<chrono::NaiveDate>,
    pub to: Option<chrono::NaiveDate>,
}
