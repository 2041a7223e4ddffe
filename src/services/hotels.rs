use sqlx::SqlitePool;

use crate::error::ApiError;
use crate::models::hotel::HotelWithRooms;
use crate::repositories::{enrollments, hotels};

/// Checks that `user_id` may list hotels: the user must be enrolled and hold
/// a ticket that grants hotel access. Read-only, single pass.
async fn verify(pool: &SqlitePool, user_id: i64) -> Result<(), ApiError> {
    let enrollment = enrollments::find_enrollment_by_user_id(pool, user_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    if enrollment.user_id != user_id {
        return Err(ApiError::Unauthorized);
    }

    let ticket = enrollments::find_ticket_by_enrollment_id(pool, enrollment.id)
        .await?
        .ok_or(ApiError::NotFound)?;

    if !ticket.grants_hotel_access() {
        return Err(ApiError::CannotListHotels);
    }

    Ok(())
}

/// Lists every hotel with its rooms. An empty catalog is reported as
/// NotFound rather than an empty array; clients depend on that.
pub async fn get_hotels(pool: &SqlitePool, user_id: i64) -> Result<Vec<HotelWithRooms>, ApiError> {
    verify(pool, user_id).await?;

    let hotels = hotels::find_hotels(pool).await?;
    if hotels.is_empty() {
        return Err(ApiError::NotFound);
    }

    Ok(hotels)
}

/// Fetches one hotel with its rooms. A hotel with no rooms is reported as
/// NotFound, same as a missing hotel.
pub async fn get_rooms_by_hotel_id(
    pool: &SqlitePool,
    user_id: i64,
    hotel_id: i64,
) -> Result<HotelWithRooms, ApiError> {
    verify(pool, user_id).await?;

    let hotel = hotels::find_hotel_by_id(pool, hotel_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    if hotel.rooms.is_empty() {
        return Err(ApiError::NotFound);
    }

    Ok(hotel)
}
