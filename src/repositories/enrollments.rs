use sqlx::SqlitePool;

use crate::models::enrollment::{Enrollment, TicketWithType};

pub async fn find_enrollment_by_user_id(
    pool: &SqlitePool,
    user_id: i64,
) -> Result<Option<Enrollment>, sqlx::Error> {
    sqlx::query_as::<_, Enrollment>(
        "SELECT id, user_id, address, created_at, updated_at FROM enrollments WHERE user_id = ?",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

pub async fn find_ticket_by_enrollment_id(
    pool: &SqlitePool,
    enrollment_id: i64,
) -> Result<Option<TicketWithType>, sqlx::Error> {
    sqlx::query_as::<_, TicketWithType>(
        r#"
        SELECT t.id, t.enrollment_id, t.ticket_type_id, t.status,
               tt.price, tt.is_remote, tt.includes_hotel
        FROM tickets t
        JOIN ticket_types tt ON tt.id = t.ticket_type_id
        WHERE t.enrollment_id = ?
        "#,
    )
    .bind(enrollment_id)
    .fetch_optional(pool)
    .await
}
