use crate::database::{
    model::ticket::{TicketRow, TicketTypeRow, TicketWithTypeRow},
    ConnectionPool,
};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::{EnrollmentId, TicketId, UserId},
    ticket::{Ticket, TicketType, TicketWithType},
};
use kernel::repository::ticket::TicketRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct TicketRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl TicketRepository for TicketRepositoryImpl {
    async fn find_by_enrollment_id(
        &self,
        enrollment_id: EnrollmentId,
    ) -> AppResult<Option<Ticket>> {
        let row = sqlx::query_as::<_, TicketRow>(
            r#"
                SELECT
                    id,
                    enrollment_id,
                    ticket_type_id,
                    status
                FROM tickets
                WHERE enrollment_id = $1
            "#,
        )
        .bind(enrollment_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Ticket::from))
    }

    async fn find_type_by_ticket_id(&self, ticket_id: TicketId) -> AppResult<Option<TicketType>> {
        let row = sqlx::query_as::<_, TicketTypeRow>(
            r#"
                SELECT
                    tt.id,
                    tt.name,
                    tt.is_remote,
                    tt.includes_hotel
                FROM ticket_types AS tt
                INNER JOIN tickets AS t ON t.ticket_type_id = tt.id
                WHERE t.id = $1
            "#,
        )
        .bind(ticket_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(TicketType::from))
    }

    async fn find_with_type_by_user_id(
        &self,
        user_id: UserId,
    ) -> AppResult<Option<TicketWithType>> {
        let row = sqlx::query_as::<_, TicketWithTypeRow>(
            r#"
                SELECT
                    t.id,
                    t.enrollment_id,
                    t.ticket_type_id,
                    t.status,
                    tt.name AS type_name,
                    tt.is_remote,
                    tt.includes_hotel
                FROM tickets AS t
                INNER JOIN enrollments AS e ON t.enrollment_id = e.id
                INNER JOIN ticket_types AS tt ON t.ticket_type_id = tt.id
                WHERE e.user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(TicketWithType::from))
    }
}
