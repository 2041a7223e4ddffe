use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "UPPERCASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    Reserved,
    Paid,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Enrollment {
    pub id: i64,
    pub user_id: i64,
    pub address: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// A ticket joined with the flags of its ticket type, which is all the
/// eligibility check needs.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TicketWithType {
    pub id: i64,
    pub enrollment_id: i64,
    pub ticket_type_id: i64,
    pub status: TicketStatus,
    pub price: i64,
    pub is_remote: bool,
    pub includes_hotel: bool,
}

impl TicketWithType {
    /// PAID, in-person and hotel-including — the three clauses that gate
    /// hotel listing.
    pub fn grants_hotel_access(&self) -> bool {
        self.status == TicketStatus::Paid && !self.is_remote && self.includes_hotel
    }
}
