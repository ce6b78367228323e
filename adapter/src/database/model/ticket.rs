use kernel::model::{
    id::{EnrollmentId, TicketId, TicketTypeId},
    ticket::{Ticket, TicketStatus, TicketType, TicketWithType},
};

#[derive(sqlx::FromRow)]
pub struct TicketRow {
    pub id: TicketId,
    pub enrollment_id: EnrollmentId,
    pub ticket_type_id: TicketTypeId,
    pub status: TicketStatus,
}

impl From<TicketRow> for Ticket {
    fn from(value: TicketRow) -> Self {
        let TicketRow {
            id,
            enrollment_id,
            ticket_type_id,
            status,
        } = value;
        Ticket {
            id,
            enrollment_id,
            ticket_type_id,
            status,
        }
    }
}

#[derive(sqlx::FromRow)]
pub struct TicketTypeRow {
    pub id: TicketTypeId,
    pub name: String,
    pub is_remote: bool,
    pub includes_hotel: bool,
}

impl From<TicketTypeRow> for TicketType {
    fn from(value: TicketTypeRow) -> Self {
        let TicketTypeRow {
            id,
            name,
            is_remote,
            includes_hotel,
        } = value;
        TicketType {
            id,
            name,
            is_remote,
            includes_hotel,
        }
    }
}

// チケットと種別を 1 回の JOIN で取るときに使う型
#[derive(sqlx::FromRow)]
pub struct TicketWithTypeRow {
    pub id: TicketId,
    pub enrollment_id: EnrollmentId,
    pub ticket_type_id: TicketTypeId,
    pub status: TicketStatus,
    pub type_name: String,
    pub is_remote: bool,
    pub includes_hotel: bool,
}

impl From<TicketWithTypeRow> for TicketWithType {
    fn from(value: TicketWithTypeRow) -> Self {
        let TicketWithTypeRow {
            id,
            enrollment_id,
            ticket_type_id,
            status,
            type_name,
            is_remote,
            includes_hotel,
        } = value;
        TicketWithType {
            ticket: Ticket {
                id,
                enrollment_id,
                ticket_type_id,
                status,
            },
            ticket_type: TicketType {
                id: ticket_type_id,
                name: type_name,
                is_remote,
                includes_hotel,
            },
        }
    }
}
