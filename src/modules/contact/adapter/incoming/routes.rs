use actix_web::{delete, get, post, put, web, Responder};
use uuid::Uuid;

use crate::auth::application::domain::entities::AdminSession;
use crate::modules::contact::domain::{ContactEntryInput, ContactList, ContactUpdate};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/contact")]
pub async fn get_contact_handler(data: web::Data<AppState>) -> impl Responder {
    match data.contact.get().await {
        Ok(contact) => ApiResponse::success(contact),
        Err(e) => ApiResponse::from_content_error(e),
    }
}

#[put("/api/contact")]
pub async fn update_contact_handler(
    _admin: AdminSession,
    req: web::Json<ContactUpdate>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.contact.update(req.into_inner()).await {
        Ok(contact) => ApiResponse::success_with_message(contact, "Contact updated successfully"),
        Err(e) => ApiResponse::from_content_error(e),
    }
}

#[post("/api/contact/{list:emails|phones|social-links}")]
pub async fn add_contact_entry_handler(
    _admin: AdminSession,
    path: web::Path<ContactList>,
    req: web::Json<serde_json::Value>,
    data: web::Data<AppState>,
) -> impl Responder {
    let input = match ContactEntryInput::parse(path.into_inner(), req.into_inner()) {
        Ok(input) => input,
        Err(e) => return ApiResponse::from_content_error(e),
    };

    match data.contact.add_entry(input).await {
        Ok(contact) => ApiResponse::created(contact),
        Err(e) => ApiResponse::from_content_error(e),
    }
}

#[put("/api/contact/{list:emails|phones|social-links}/{id}")]
pub async fn update_contact_entry_handler(
    _admin: AdminSession,
    path: web::Path<(ContactList, Uuid)>,
    req: web::Json<serde_json::Value>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (list, id) = path.into_inner();
    let input = match ContactEntryInput::parse(list, req.into_inner()) {
        Ok(input) => input,
        Err(e) => return ApiResponse::from_content_error(e),
    };

    match data.contact.update_entry(id, input).await {
        Ok(contact) => ApiResponse::success_with_message(contact, "Contact entry updated"),
        Err(e) => ApiResponse::from_content_error(e),
    }
}

#[delete("/api/contact/{list:emails|phones|social-links}/{id}")]
pub async fn delete_contact_entry_handler(
    _admin: AdminSession,
    path: web::Path<(ContactList, Uuid)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (list, id) = path.into_inner();

    match data.contact.delete_entry(list, id).await {
        Ok(contact) => ApiResponse::success_with_message(contact, "Contact entry deleted"),
        Err(e) => ApiResponse::from_content_error(e),
    }
}
