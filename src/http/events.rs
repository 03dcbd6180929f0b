//! Event listings; same shape as clubs with a `date` instead of spots.

use actix_web::{delete, get, post, put, web, HttpResponse};

use super::auth::AdminAuth;
use crate::error::ApiError;
use crate::models::{Created, EventUpdate, NewEvent};
use crate::services::Services;

#[get("/events")]
pub async fn list_events(services: web::Data<Services>) -> Result<HttpResponse, ApiError> {
    let events = services.events.list().await?;
    Ok(HttpResponse::Ok().json(events))
}

#[get("/events/{id}")]
pub async fn get_event(
    path: web::Path<i32>,
    services: web::Data<Services>,
) -> Result<HttpResponse, ApiError> {
    let event = services.events.get_by_id(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(event))
}

#[post("/events")]
pub async fn create_event(
    _admin: AdminAuth,
    body: web::Json<NewEvent>,
    services: web::Data<Services>,
) -> Result<HttpResponse, ApiError> {
    let id = services.events.create(&body).await?;
    log::info!("event {id} created ({:?} at {})", body.name, body.date);
    Ok(HttpResponse::Ok().json(Created { id }))
}

#[put("/events/{id}")]
pub async fn update_event(
    _admin: AdminAuth,
    path: web::Path<i32>,
    body: web::Json<EventUpdate>,
    services: web::Data<Services>,
) -> Result<HttpResponse, ApiError> {
    services.events.update(path.into_inner(), &body).await?;
    Ok(HttpResponse::Ok().finish())
}

#[delete("/events/{id}")]
pub async fn delete_event(
    _admin: AdminAuth,
    path: web::Path<i32>,
    services: web::Data<Services>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    services.events.delete(id).await?;
    log::info!("event {id} deleted");
    Ok(HttpResponse::Ok().finish())
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list_events)
        .service(get_event)
        .service(create_event)
        .service(update_event)
        .service(delete_event);
}
