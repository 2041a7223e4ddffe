//! Row factories for the hotels endpoint tests. Each test gets its own
//! in-memory database with the production migrations applied.

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

pub async fn test_pool() -> SqlitePool {
    // A single connection keeps every query on the same in-memory database.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("failed to run migrations");

    pool
}

pub async fn create_user(pool: &SqlitePool, email: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO users (email) VALUES (?) RETURNING id")
        .bind(email)
        .fetch_one(pool)
        .await
        .expect("failed to insert user")
}

pub async fn create_session(pool: &SqlitePool, user_id: i64, token: &str) {
    sqlx::query("INSERT INTO sessions (user_id, token) VALUES (?, ?)")
        .bind(user_id)
        .bind(token)
        .execute(pool)
        .await
        .expect("failed to insert session");
}

pub async fn create_enrollment(pool: &SqlitePool, user_id: i64) -> i64 {
    sqlx::query_scalar("INSERT INTO enrollments (user_id, address) VALUES (?, ?) RETURNING id")
        .bind(user_id)
        .bind("123 Test Street")
        .fetch_one(pool)
        .await
        .expect("failed to insert enrollment")
}

pub async fn create_ticket_type(pool: &SqlitePool, is_remote: bool, includes_hotel: bool) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO ticket_types (name, price, is_remote, includes_hotel) VALUES (?, ?, ?, ?) RETURNING id",
    )
    .bind("Conference Pass")
    .bind(25000_i64)
    .bind(is_remote)
    .bind(includes_hotel)
    .fetch_one(pool)
    .await
    .expect("failed to insert ticket type")
}

pub async fn create_ticket(
    pool: &SqlitePool,
    enrollment_id: i64,
    ticket_type_id: i64,
    status: &str,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO tickets (enrollment_id, ticket_type_id, status) VALUES (?, ?, ?) RETURNING id",
    )
    .bind(enrollment_id)
    .bind(ticket_type_id)
    .bind(status)
    .fetch_one(pool)
    .await
    .expect("failed to insert ticket")
}

pub async fn create_hotel(pool: &SqlitePool, name: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO hotels (name, image) VALUES (?, ?) RETURNING id")
        .bind(name)
        .bind("https://example.com/hotel.jpg")
        .fetch_one(pool)
        .await
        .expect("failed to insert hotel")
}

pub async fn create_room(pool: &SqlitePool, hotel_id: i64, name: &str, capacity: i64) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO rooms (name, capacity, hotel_id) VALUES (?, ?, ?) RETURNING id",
    )
    .bind(name)
    .bind(capacity)
    .bind(hotel_id)
    .fetch_one(pool)
    .await
    .expect("failed to insert room")
}

/// Shorthand for the usual setup: a user with a session, an enrollment and
/// a PAID, in-person, hotel-including ticket. Returns the session token.
pub async fn eligible_user(pool: &SqlitePool) -> String {
    let user_id = create_user(pool, "eligible@test.com").await;
    create_session(pool, user_id, "eligible-token").await;
    let enrollment_id = create_enrollment(pool, user_id).await;
    let ticket_type_id = create_ticket_type(pool, false, true).await;
    create_ticket(pool, enrollment_id, ticket_type_id, "PAID").await;
    "eligible-token".to_owned()
}
