use actix_web::{web, HttpResponse, Scope};
use sqlx::SqlitePool;

use crate::auth::AuthenticatedUser;
use crate::error::ApiError;
use crate::services::hotels as hotels_service;

pub fn scope() -> Scope {
    web::scope("/hotels")
        .route("", web::get().to(get_hotels))
        .route("/{hotelId}", web::get().to(get_rooms_by_hotel_id))
}

pub async fn get_hotels(
    pool: web::Data<SqlitePool>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, ApiError> {
    let hotels = hotels_service::get_hotels(pool.get_ref(), user.user_id).await?;
    Ok(HttpResponse::Ok().json(hotels))
}

pub async fn get_rooms_by_hotel_id(
    pool: web::Data<SqlitePool>,
    user: AuthenticatedUser,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let hotel_id = parse_hotel_id(&path)?;

    let hotel = hotels_service::get_rooms_by_hotel_id(pool.get_ref(), user.user_id, hotel_id).await?;
    Ok(HttpResponse::Ok().json(hotel))
}

/// Hotel ids on the wire must be positive integers.
fn parse_hotel_id(raw: &str) -> Result<i64, ApiError> {
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ApiError::BadRequest(format!("invalid hotel id: {}", raw))),
    }
}
