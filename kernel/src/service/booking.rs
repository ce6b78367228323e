use std::sync::Arc;

use anyhow::anyhow;
use derive_new::new;
use shared::error::{AppError, AppResult};

use crate::{
    model::{
        booking::{
            event::{CreateBooking, UpdateBookingRoom},
            Booking,
        },
        id::{BookingId, RoomId, UserId},
        ticket::grants_hotel_access,
    },
    repository::{
        booking::BookingRepository, enrollment::EnrollmentRepository, room::RoomRepository,
        ticket::TicketRepository,
    },
};

// 予約の作成・変更可否を判断するサービス。
// 状態は一切持たず、毎回ゲートウェイ越しにストレージの現在値を読み直す
#[derive(new)]
pub struct BookingService {
    enrollment_repository: Arc<dyn EnrollmentRepository>,
    ticket_repository: Arc<dyn TicketRepository>,
    room_repository: Arc<dyn RoomRepository>,
    booking_repository: Arc<dyn BookingRepository>,
}

impl BookingService {
    pub async fn create_booking(&self, room_id: RoomId, user_id: UserId) -> AppResult<BookingId> {
        // 参加登録がないユーザーは登録未完了とみなす
        let enrollment = self
            .enrollment_repository
            .find_by_user_id(user_id)
            .await?
            .ok_or(AppError::UnauthenticatedError)?;

        let ticket = self
            .ticket_repository
            .find_by_enrollment_id(enrollment.id)
            .await?
            .ok_or(AppError::UnauthenticatedError)?;

        // チケットは必ず種別を参照する。欠けていたらデータ破損
        let ticket_type = self
            .ticket_repository
            .find_type_by_ticket_id(ticket.id)
            .await?
            .ok_or_else(|| {
                AppError::UnexpectedError(anyhow!(
                    "ticket ({}) references a missing ticket type",
                    ticket.id
                ))
            })?;

        if !grants_hotel_access(ticket.status, &ticket_type) {
            return Err(AppError::ForbiddenOperation(
                "チケットでは宿泊予約ができません。".into(),
            ));
        }

        let room = self
            .room_repository
            .find_by_id(room_id)
            .await?
            .ok_or_else(|| {
                AppError::EntityNotFound(format!("部屋（{room_id}）が見つかりませんでした。"))
            })?;

        if room.capacity == 0 {
            return Err(AppError::ForbiddenOperation(format!(
                "部屋（{room_id}）には空きがありません。"
            )));
        }

        self.booking_repository
            .create(CreateBooking::new(room_id, user_id))
            .await
    }

    // 既存予約の参照にチケットの再検証は行わない
    pub async fn get_booking(&self, user_id: UserId) -> AppResult<Booking> {
        self.booking_repository
            .find_first_by_user_id(user_id)
            .await?
            .ok_or_else(|| {
                AppError::EntityNotFound(format!(
                    "ユーザー（{user_id}）の予約が見つかりませんでした。"
                ))
            })
    }

    pub async fn update_booking(
        &self,
        new_room_id: RoomId,
        user_id: UserId,
        booking_id: BookingId,
    ) -> AppResult<BookingId> {
        // 予約の検索はユーザー ID 基準。booking_id との突き合わせはしない
        let booking = self
            .booking_repository
            .find_first_by_user_id(user_id)
            .await?;
        let room = self.room_repository.find_by_id(new_room_id).await?;

        // 予約なし・部屋なし・満室はいずれも同じ拒否として扱う
        let has_vacancy = room.map(|r| r.capacity > 0).unwrap_or(false);
        if booking.is_none() || !has_vacancy {
            return Err(AppError::ForbiddenOperation(
                "この部屋へは予約を変更できません。".into(),
            ));
        }

        self.booking_repository
            .update_room(UpdateBookingRoom::new(booking_id, new_room_id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        model::{
            enrollment::Enrollment,
            id::{EnrollmentId, HotelId, TicketId, TicketTypeId},
            room::Room,
            ticket::{Ticket, TicketStatus, TicketType},
        },
        repository::{
            booking::MockBookingRepository, enrollment::MockEnrollmentRepository,
            room::MockRoomRepository, ticket::MockTicketRepository,
        },
    };
    use chrono::Utc;

    fn enrollment() -> Enrollment {
        Enrollment {
            id: EnrollmentId::new(11),
            user_id: UserId::new(1),
            name: "Test User".into(),
        }
    }

    fn ticket(status: TicketStatus) -> Ticket {
        Ticket {
            id: TicketId::new(21),
            enrollment_id: EnrollmentId::new(11),
            ticket_type_id: TicketTypeId::new(31),
            status,
        }
    }

    fn ticket_type(is_remote: bool, includes_hotel: bool) -> TicketType {
        TicketType {
            id: TicketTypeId::new(31),
            name: "Test Type".into(),
            is_remote,
            includes_hotel,
        }
    }

    fn room(capacity: i32) -> Room {
        Room {
            id: RoomId::new(41),
            name: "101".into(),
            capacity,
            hotel_id: HotelId::new(51),
        }
    }

    fn booking() -> Booking {
        Booking {
            id: BookingId::new(61),
            user_id: UserId::new(1),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            room: room(1),
        }
    }

    struct Mocks {
        enrollment: MockEnrollmentRepository,
        ticket: MockTicketRepository,
        room: MockRoomRepository,
        booking: MockBookingRepository,
    }

    impl Mocks {
        fn new() -> Self {
            Self {
                enrollment: MockEnrollmentRepository::new(),
                ticket: MockTicketRepository::new(),
                room: MockRoomRepository::new(),
                booking: MockBookingRepository::new(),
            }
        }

        // 登録済み・支払い済み・宿泊付きの状態まで整える
        fn with_eligible_user(mut self) -> Self {
            self.enrollment
                .expect_find_by_user_id()
                .returning(|_| Ok(Some(enrollment())));
            self.ticket
                .expect_find_by_enrollment_id()
                .returning(|_| Ok(Some(ticket(TicketStatus::Paid))));
            self.ticket
                .expect_find_type_by_ticket_id()
                .returning(|_| Ok(Some(ticket_type(false, true))));
            self
        }

        fn into_service(self) -> BookingService {
            BookingService::new(
                Arc::new(self.enrollment),
                Arc::new(self.ticket),
                Arc::new(self.room),
                Arc::new(self.booking),
            )
        }
    }

    #[tokio::test]
    async fn create_booking_persists_a_booking_for_an_eligible_user() {
        let mut mocks = Mocks::new().with_eligible_user();
        mocks.room.expect_find_by_id().returning(|_| Ok(Some(room(1))));
        mocks
            .booking
            .expect_create()
            .withf(|event| event.room_id == RoomId::new(41) && event.user_id == UserId::new(1))
            .returning(|_| Ok(BookingId::new(61)));

        let res = mocks
            .into_service()
            .create_booking(RoomId::new(41), UserId::new(1))
            .await;

        assert_eq!(res.unwrap(), BookingId::new(61));
    }

    #[tokio::test]
    async fn create_booking_rejects_users_without_an_enrollment() {
        let mut mocks = Mocks::new();
        mocks
            .enrollment
            .expect_find_by_user_id()
            .returning(|_| Ok(None));

        let res = mocks
            .into_service()
            .create_booking(RoomId::new(41), UserId::new(1))
            .await;

        assert!(matches!(res, Err(AppError::UnauthenticatedError)));
    }

    #[tokio::test]
    async fn create_booking_rejects_users_without_a_ticket() {
        let mut mocks = Mocks::new();
        mocks
            .enrollment
            .expect_find_by_user_id()
            .returning(|_| Ok(Some(enrollment())));
        mocks
            .ticket
            .expect_find_by_enrollment_id()
            .returning(|_| Ok(None));

        let res = mocks
            .into_service()
            .create_booking(RoomId::new(41), UserId::new(1))
            .await;

        assert!(matches!(res, Err(AppError::UnauthenticatedError)));
    }

    #[tokio::test]
    async fn create_booking_forbids_unpaid_remote_and_hotelless_tickets() {
        for (status, is_remote, includes_hotel) in [
            (TicketStatus::Reserved, false, true),
            (TicketStatus::Paid, true, true),
            (TicketStatus::Paid, false, false),
        ] {
            let mut mocks = Mocks::new();
            mocks
                .enrollment
                .expect_find_by_user_id()
                .returning(|_| Ok(Some(enrollment())));
            mocks
                .ticket
                .expect_find_by_enrollment_id()
                .returning(move |_| Ok(Some(ticket(status))));
            mocks
                .ticket
                .expect_find_type_by_ticket_id()
                .returning(move |_| Ok(Some(ticket_type(is_remote, includes_hotel))));

            let res = mocks
                .into_service()
                .create_booking(RoomId::new(41), UserId::new(1))
                .await;

            assert!(matches!(res, Err(AppError::ForbiddenOperation(_))));
        }
    }

    #[tokio::test]
    async fn create_booking_reports_a_missing_room_as_not_found() {
        let mut mocks = Mocks::new().with_eligible_user();
        mocks.room.expect_find_by_id().returning(|_| Ok(None));

        let res = mocks
            .into_service()
            .create_booking(RoomId::new(41), UserId::new(1))
            .await;

        assert!(matches!(res, Err(AppError::EntityNotFound(_))));
    }

    #[tokio::test]
    async fn create_booking_forbids_rooms_without_vacancy() {
        let mut mocks = Mocks::new().with_eligible_user();
        mocks.room.expect_find_by_id().returning(|_| Ok(Some(room(0))));

        let res = mocks
            .into_service()
            .create_booking(RoomId::new(41), UserId::new(1))
            .await;

        assert!(matches!(res, Err(AppError::ForbiddenOperation(_))));
    }

    #[tokio::test]
    async fn get_booking_returns_the_booking_with_its_room() {
        let mut mocks = Mocks::new();
        mocks
            .booking
            .expect_find_first_by_user_id()
            .returning(|_| Ok(Some(booking())));

        let res = mocks.into_service().get_booking(UserId::new(1)).await.unwrap();

        assert_eq!(res.id, BookingId::new(61));
        assert_eq!(res.room.id, RoomId::new(41));
    }

    #[tokio::test]
    async fn get_booking_reports_not_found_when_no_booking_row_exists() {
        let mut mocks = Mocks::new();
        mocks
            .booking
            .expect_find_first_by_user_id()
            .returning(|_| Ok(None));

        let res = mocks.into_service().get_booking(UserId::new(1)).await;

        assert!(matches!(res, Err(AppError::EntityNotFound(_))));
    }

    #[tokio::test]
    async fn update_booking_moves_the_booking_to_a_vacant_room() {
        let mut mocks = Mocks::new();
        mocks
            .booking
            .expect_find_first_by_user_id()
            .returning(|_| Ok(Some(booking())));
        mocks.room.expect_find_by_id().returning(|_| Ok(Some(room(2))));
        mocks
            .booking
            .expect_update_room()
            .withf(|event| {
                event.booking_id == BookingId::new(61) && event.room_id == RoomId::new(41)
            })
            .returning(|event| Ok(event.booking_id));

        let res = mocks
            .into_service()
            .update_booking(RoomId::new(41), UserId::new(1), BookingId::new(61))
            .await;

        assert_eq!(res.unwrap(), BookingId::new(61));
    }

    #[tokio::test]
    async fn update_booking_forbids_users_without_an_existing_booking() {
        let mut mocks = Mocks::new();
        mocks
            .booking
            .expect_find_first_by_user_id()
            .returning(|_| Ok(None));
        mocks.room.expect_find_by_id().returning(|_| Ok(Some(room(1))));

        let res = mocks
            .into_service()
            .update_booking(RoomId::new(41), UserId::new(1), BookingId::new(61))
            .await;

        // 予約が無い場合も 404 ではなく 403 で拒否する
        assert!(matches!(res, Err(AppError::ForbiddenOperation(_))));
    }

    #[tokio::test]
    async fn update_booking_forbids_missing_and_full_rooms_alike() {
        for target_room in [None, Some(room(0))] {
            let mut mocks = Mocks::new();
            mocks
                .booking
                .expect_find_first_by_user_id()
                .returning(|_| Ok(Some(booking())));
            mocks
                .room
                .expect_find_by_id()
                .returning(move |_| Ok(target_room.clone()));

            let res = mocks
                .into_service()
                .update_booking(RoomId::new(41), UserId::new(1), BookingId::new(61))
                .await;

            assert!(matches!(res, Err(AppError::ForbiddenOperation(_))));
        }
    }
}
