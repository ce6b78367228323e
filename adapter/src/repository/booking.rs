use crate::database::{model::booking::BookingRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    booking::{
        event::{CreateBooking, UpdateBookingRoom},
        Booking,
    },
    id::{BookingId, UserId},
};
use kernel::repository::booking::BookingRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct BookingRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl BookingRepository for BookingRepositoryImpl {
    async fn create(&self, event: CreateBooking) -> AppResult<BookingId> {
        let booking_id = sqlx::query_scalar::<_, BookingId>(
            r#"
                INSERT INTO bookings (user_id, room_id)
                VALUES ($1, $2)
                RETURNING id
            "#,
        )
        .bind(event.user_id)
        .bind(event.room_id)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(booking_id)
    }

    async fn find_first_by_user_id(&self, user_id: UserId) -> AppResult<Option<Booking>> {
        let row = sqlx::query_as::<_, BookingRow>(
            r#"
                SELECT
                    b.id,
                    b.user_id,
                    b.created_at,
                    b.updated_at,
                    r.id AS room_id,
                    r.name AS room_name,
                    r.capacity,
                    r.hotel_id
                FROM bookings AS b
                INNER JOIN rooms AS r ON b.room_id = r.id
                WHERE b.user_id = $1
                ORDER BY b.id
                LIMIT 1
            "#,
        )
        .bind(user_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Booking::from))
    }

    async fn update_room(&self, event: UpdateBookingRoom) -> AppResult<BookingId> {
        let res = sqlx::query(
            r#"
                UPDATE bookings
                SET room_id = $2, updated_at = CURRENT_TIMESTAMP
                WHERE id = $1
            "#,
        )
        .bind(event.booking_id)
        .bind(event.room_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No booking record has been updated".into(),
            ));
        }

        Ok(event.booking_id)
    }
}
