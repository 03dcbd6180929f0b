//! Club catalogue: public reads, admin-only writes.

use actix_web::{delete, get, post, put, web, HttpResponse};

use super::auth::AdminAuth;
use crate::error::ApiError;
use crate::models::{ClubUpdate, Created, NewClub};
use crate::services::Services;

/// GET /api/v1/clubs
#[get("/clubs")]
pub async fn list_clubs(services: web::Data<Services>) -> Result<HttpResponse, ApiError> {
    let clubs = services.clubs.list().await?;
    Ok(HttpResponse::Ok().json(clubs))
}

/// GET /api/v1/clubs/{id}
#[get("/clubs/{id}")]
pub async fn get_club(
    path: web::Path<i32>,
    services: web::Data<Services>,
) -> Result<HttpResponse, ApiError> {
    let club = services.clubs.get_by_id(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(club))
}

/// POST /api/v1/clubs
#[post("/clubs")]
pub async fn create_club(
    _admin: AdminAuth,
    body: web::Json<NewClub>,
    services: web::Data<Services>,
) -> Result<HttpResponse, ApiError> {
    let id = services.clubs.create(&body).await?;
    log::info!("club {id} created ({:?})", body.name);
    Ok(HttpResponse::Ok().json(Created { id }))
}

/// PUT /api/v1/clubs/{id}
#[put("/clubs/{id}")]
pub async fn update_club(
    _admin: AdminAuth,
    path: web::Path<i32>,
    body: web::Json<ClubUpdate>,
    services: web::Data<Services>,
) -> Result<HttpResponse, ApiError> {
    services.clubs.update(path.into_inner(), &body).await?;
    Ok(HttpResponse::Ok().finish())
}

/// DELETE /api/v1/clubs/{id}
#[delete("/clubs/{id}")]
pub async fn delete_club(
    _admin: AdminAuth,
    path: web::Path<i32>,
    services: web::Data<Services>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    services.clubs.delete(id).await?;
    log::info!("club {id} deleted");
    Ok(HttpResponse::Ok().finish())
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list_clubs)
        .service(get_club)
        .service(create_club)
        .service(update_club)
        .service(delete_club);
}
