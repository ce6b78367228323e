use kernel::model::{hotel::Hotel, id::HotelId};

#[derive(sqlx::FromRow)]
pub struct HotelRow {
    pub id: HotelId,
    pub name: String,
    pub image: String,
}

impl From<HotelRow> for Hotel {
    fn from(value: HotelRow) -> Self {
        let HotelRow { id, name, image } = value;
        Hotel { id, name, image }
    }
}
