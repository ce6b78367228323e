use crate::database::{
    model::{hotel::HotelRow, room::RoomRow},
    ConnectionPool,
};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    hotel::{Hotel, HotelWithRooms},
    id::HotelId,
    room::Room,
};
use kernel::repository::hotel::HotelRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct HotelRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl HotelRepository for HotelRepositoryImpl {
    async fn find_all(&self) -> AppResult<Vec<Hotel>> {
        let rows = sqlx::query_as::<_, HotelRow>(
            r#"
                SELECT
                    id,
                    name,
                    image
                FROM hotels
                ORDER BY id
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Hotel::from).collect())
    }

    async fn find_with_rooms_by_id(&self, hotel_id: HotelId) -> AppResult<Option<HotelWithRooms>> {
        let hotel = sqlx::query_as::<_, HotelRow>(
            r#"
                SELECT
                    id,
                    name,
                    image
                FROM hotels
                WHERE id = $1
            "#,
        )
        .bind(hotel_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        let Some(hotel) = hotel else {
            return Ok(None);
        };

        let rooms = sqlx::query_as::<_, RoomRow>(
            r#"
                SELECT
                    id,
                    name,
                    capacity,
                    hotel_id
                FROM rooms
                WHERE hotel_id = $1
                ORDER BY id
            "#,
        )
        .bind(hotel_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        let HotelRow { id, name, image } = hotel;
        Ok(Some(HotelWithRooms {
            id,
            name,
            image,
            rooms: rooms.into_iter().map(Room::from).collect(),
        }))
    }
}
