/// All primary keys are UUIDv7, generated by the application at insert time.
pub type DbId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Calendar dates (hire, termination, opening, establishment) carry no time of day.
pub type Date = chrono::NaiveDate;

/// Exact decimal used for money and floor area.
pub type Decimal = rust_decimal::Decimal;

/// Generate a new time-ordered primary key.
pub fn new_id() -> DbId {
    uuid::Uuid::now_v7()
}
