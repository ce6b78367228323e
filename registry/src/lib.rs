use std::sync::Arc;

use adapter::database::ConnectionPool;
use adapter::redis::RedisClient;
use adapter::repository::{
    auth::AuthRepositoryImpl, booking::BookingRepositoryImpl,
    enrollment::EnrollmentRepositoryImpl, health::HealthCheckRepositoryImpl,
    hotel::HotelRepositoryImpl, room::RoomRepositoryImpl, ticket::TicketRepositoryImpl,
};
use kernel::repository::{auth::AuthRepository, health::HealthCheckRepository};
use kernel::service::{booking::BookingService, hotel::HotelService};

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    auth_repository: Arc<dyn AuthRepository>,
    booking_service: Arc<BookingService>,
    hotel_service: Arc<HotelService>,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool, redis_client: Arc<RedisClient>) -> Self {
        let enrollment_repository = Arc::new(EnrollmentRepositoryImpl::new(pool.clone()));
        let ticket_repository = Arc::new(TicketRepositoryImpl::new(pool.clone()));
        let room_repository = Arc::new(RoomRepositoryImpl::new(pool.clone()));
        let hotel_repository = Arc::new(HotelRepositoryImpl::new(pool.clone()));
        let booking_repository = Arc::new(BookingRepositoryImpl::new(pool.clone()));

        let booking_service = Arc::new(BookingService::new(
            enrollment_repository.clone(),
            ticket_repository.clone(),
            room_repository,
            booking_repository,
        ));
        let hotel_service = Arc::new(HotelService::new(
            enrollment_repository,
            ticket_repository,
            hotel_repository,
        ));

        Self {
            health_check_repository: Arc::new(HealthCheckRepositoryImpl::new(pool)),
            auth_repository: Arc::new(AuthRepositoryImpl::new(redis_client)),
            booking_service,
            hotel_service,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn auth_repository(&self) -> Arc<dyn AuthRepository> {
        self.auth_repository.clone()
    }

    pub fn booking_service(&self) -> Arc<BookingService> {
        self.booking_service.clone()
    }

    pub fn hotel_service(&self) -> Arc<HotelService> {
        self.hotel_service.clone()
    }
}
