use crate::model::id::{HotelId, RoomId};

// capacity は空きの有無を表す固定値で、予約のたびに減算されるカウンタではない。
// 0 の部屋は満室扱い
#[derive(Debug, Clone)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub capacity: i32,
    pub hotel_id: HotelId,
}
