use crate::model::{
    booking::{
        event::{CreateBooking, UpdateBookingRoom},
        Booking,
    },
    id::{BookingId, UserId},
};
use async_trait::async_trait;
use shared::error::AppResult;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingRepository: Send + Sync {
    // 予約を作成する
    async fn create(&self, event: CreateBooking) -> AppResult<BookingId>;
    // ユーザーの予約を部屋情報ごと取得する。常に最初の 1 件を返す
    async fn find_first_by_user_id(&self, user_id: UserId) -> AppResult<Option<Booking>>;
    // 予約の部屋参照を書き換える
    async fn update_room(&self, event: UpdateBookingRoom) -> AppResult<BookingId>;
}
