use axum::{
    routing::{get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::booking::{change_booking_room, create_booking, show_booking};

pub fn build_booking_routers() -> Router<AppRegistry> {
    let booking_routers = Router::new()
        .route("/", post(create_booking))
        .route("/", get(show_booking))
        .route("/:booking_id", put(change_booking_room));

    Router::new().nest("/booking", booking_routers)
}
