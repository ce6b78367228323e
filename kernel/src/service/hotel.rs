use std::sync::Arc;

use derive_new::new;
use shared::error::{AppError, AppResult};

use crate::{
    model::{
        hotel::{Hotel, HotelWithRooms},
        id::{HotelId, UserId},
    },
    repository::{enrollment::EnrollmentRepository, hotel::HotelRepository, ticket::TicketRepository},
};

// ホテル一覧と部屋一覧の閲覧可否を判断するサービス。
// 予約作成と同じ判定条件を使うが、条件を満たさない場合は 402 側で拒否する
#[derive(new)]
pub struct HotelService {
    enrollment_repository: Arc<dyn EnrollmentRepository>,
    ticket_repository: Arc<dyn TicketRepository>,
    hotel_repository: Arc<dyn HotelRepository>,
}

impl HotelService {
    pub async fn list_hotels(&self, user_id: UserId) -> AppResult<Vec<Hotel>> {
        self.check_hotel_access(user_id).await?;

        let hotels = self.hotel_repository.find_all().await?;
        if hotels.is_empty() {
            return Err(AppError::EntityNotFound(
                "ホテルが登録されていません。".into(),
            ));
        }

        Ok(hotels)
    }

    pub async fn get_hotel_rooms(
        &self,
        hotel_id: HotelId,
        user_id: UserId,
    ) -> AppResult<HotelWithRooms> {
        self.check_hotel_access(user_id).await?;

        self.hotel_repository
            .find_with_rooms_by_id(hotel_id)
            .await?
            .ok_or_else(|| {
                AppError::EntityNotFound(format!("ホテル（{hotel_id}）が見つかりませんでした。"))
            })
    }

    // 参加登録とチケットの存在は 404、支払い・種別の違反は 402 に落とす
    async fn check_hotel_access(&self, user_id: UserId) -> AppResult<()> {
        if self
            .enrollment_repository
            .find_by_user_id(user_id)
            .await?
            .is_none()
        {
            return Err(AppError::EntityNotFound(
                "参加登録が見つかりませんでした。".into(),
            ));
        }

        let ticket = self
            .ticket_repository
            .find_with_type_by_user_id(user_id)
            .await?
            .ok_or_else(|| {
                AppError::EntityNotFound("チケットが見つかりませんでした。".into())
            })?;

        if !ticket.grants_hotel_access() {
            return Err(AppError::PaymentRequired(
                "チケットでは宿泊施設を閲覧できません。".into(),
            ));
        }

        Ok(())
    }
}
