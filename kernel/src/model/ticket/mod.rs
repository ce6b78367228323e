use crate::model::id::{EnrollmentId, TicketId, TicketTypeId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "ticket_status", rename_all = "UPPERCASE")]
pub enum TicketStatus {
    Reserved,
    Paid,
}

#[derive(Debug)]
pub struct Ticket {
    pub id: TicketId,
    pub enrollment_id: EnrollmentId,
    pub ticket_type_id: TicketTypeId,
    pub status: TicketStatus,
}

#[derive(Debug)]
pub struct TicketType {
    pub id: TicketTypeId,
    pub name: String,
    pub is_remote: bool,
    pub includes_hotel: bool,
}

#[derive(Debug)]
pub struct TicketWithType {
    pub ticket: Ticket,
    pub ticket_type: TicketType,
}

// ホテル一覧の閲覧と予約作成の両方を同じ条件で制限する。
// 支払い済み、かつ現地参加、かつ宿泊付きのチケットだけが対象
pub fn grants_hotel_access(status: TicketStatus, ticket_type: &TicketType) -> bool {
    status == TicketStatus::Paid && !ticket_type.is_remote && ticket_type.includes_hotel
}

impl TicketWithType {
    pub fn grants_hotel_access(&self) -> bool {
        grants_hotel_access(self.ticket.status, &self.ticket_type)
    }
}
