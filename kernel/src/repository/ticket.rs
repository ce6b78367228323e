use crate::model::{
    id::{EnrollmentId, TicketId, UserId},
    ticket::{Ticket, TicketType, TicketWithType},
};
use async_trait::async_trait;
use shared::error::AppResult;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketRepository: Send + Sync {
    // 参加登録に紐づくチケットを取得する
    async fn find_by_enrollment_id(&self, enrollment_id: EnrollmentId)
        -> AppResult<Option<Ticket>>;
    // チケットが参照するチケット種別を取得する
    async fn find_type_by_ticket_id(&self, ticket_id: TicketId) -> AppResult<Option<TicketType>>;
    // ユーザーからチケットを種別ごと直接引く（ホテル一覧側の取得経路）
    async fn find_with_type_by_user_id(&self, user_id: UserId)
        -> AppResult<Option<TicketWithType>>;
}
