use crate::model::{id::HotelId, room::Room};

#[derive(Debug)]
pub struct Hotel {
    pub id: HotelId,
    pub name: String,
    pub image: String,
}

#[derive(Debug)]
pub struct HotelWithRooms {
    pub id: HotelId,
    pub name: String,
    pub image: String,
    pub rooms: Vec<Room>,
}
