use std::collections::HashMap;

use sqlx::SqlitePool;

use crate::models::hotel::{Hotel, HotelWithRooms, Room};

/// Fetches every hotel with its rooms. Hotels and rooms are both returned
/// in ascending id order so repeated reads produce identical bodies.
pub async fn find_hotels(pool: &SqlitePool) -> Result<Vec<HotelWithRooms>, sqlx::Error> {
    let hotels = sqlx::query_as::<_, Hotel>(
        "SELECT id, name, image, created_at, updated_at FROM hotels ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    let rooms = sqlx::query_as::<_, Room>(
        "SELECT id, name, capacity, hotel_id, created_at, updated_at FROM rooms ORDER BY hotel_id, id",
    )
    .fetch_all(pool)
    .await?;

    let mut rooms_by_hotel: HashMap<i64, Vec<Room>> = HashMap::new();
    for room in rooms {
        rooms_by_hotel.entry(room.hotel_id).or_default().push(room);
    }

    Ok(hotels
        .into_iter()
        .map(|hotel| {
            let rooms = rooms_by_hotel.remove(&hotel.id).unwrap_or_default();
            HotelWithRooms { hotel, rooms }
        })
        .collect())
}

pub async fn find_hotel_by_id(
    pool: &SqlitePool,
    hotel_id: i64,
) -> Result<Option<HotelWithRooms>, sqlx::Error> {
    let hotel = sqlx::query_as::<_, Hotel>(
        "SELECT id, name, image, created_at, updated_at FROM hotels WHERE id = ?",
    )
    .bind(hotel_id)
    .fetch_optional(pool)
    .await?;

    let Some(hotel) = hotel else {
        return Ok(None);
    };

    let rooms = sqlx::query_as::<_, Room>(
        "SELECT id, name, capacity, hotel_id, created_at, updated_at FROM rooms WHERE hotel_id = ? ORDER BY id",
    )
    .bind(hotel_id)
    .fetch_all(pool)
    .await?;

    Ok(Some(HotelWithRooms { hotel, rooms }))
}
