//! HTTP client for the remote backend.
//!
//! Fetches return `Result` so the store can log the failure; mutating calls
//! collapse to the backend contract's boolean success. Every outgoing save
//! payload is traced to the console before the request leaves.

use gloo_console::{debug, error};
use gloo_net::http::{Request, RequestBuilder};
use gloo_net::Error;
use serde::Serialize;

use common::model::book::Book;
use common::model::salon::Salon;
use common::model::user::{User, UserStatus};
use common::requests::UpdateStatusRequest;

use crate::config;

fn trace_payload<T: Serialize>(operation: &str, payload: &T) {
    if let Ok(json) = serde_json::to_string(payload) {
        debug!(operation, json);
    }
}

/// Sends a JSON body and reduces the outcome to the gateway's boolean
/// contract, logging the failure detail on the way.
async fn send_json<T: Serialize>(builder: RequestBuilder, payload: &T) -> bool {
    let request = match builder.json(payload) {
        Ok(request) => request,
        Err(err) => {
            error!(format!("no se pudo serializar el payload: {err}"));
            return false;
        }
    };
    match request.send().await {
        Ok(response) if response.ok() => true,
        Ok(response) => {
            error!(format!("el backend respondió HTTP {}", response.status()));
            false
        }
        Err(err) => {
            error!(format!("no se pudo contactar el backend: {err}"));
            false
        }
    }
}

pub async fn fetch_libros() -> Result<Vec<Book>, Error> {
    Request::get(&config::api_url("/api/libros"))
        .send()
        .await?
        .json()
        .await
}

pub async fn fetch_usuarios() -> Result<Vec<User>, Error> {
    Request::get(&config::api_url("/api/usuarios"))
        .send()
        .await?
        .json()
        .await
}

pub async fn fetch_salones() -> Result<Vec<Salon>, Error> {
    Request::get(&config::api_url("/api/salones"))
        .send()
        .await?
        .json()
        .await
}

/// Whole-record upsert: POST for a record without id, PUT otherwise.
pub async fn add_or_update_libro(libro: &Book) -> bool {
    trace_payload("guardar libro", libro);
    let builder = match libro.id {
        Some(id) => Request::put(&config::api_url(&format!("/api/libros/{id}"))),
        None => Request::post(&config::api_url("/api/libros")),
    };
    send_json(builder, libro).await
}

pub async fn delete_libro(id: u32) -> bool {
    match Request::delete(&config::api_url(&format!("/api/libros/{id}")))
        .send()
        .await
    {
        Ok(response) if response.ok() => true,
        Ok(response) => {
            error!(format!("el backend respondió HTTP {}", response.status()));
            false
        }
        Err(err) => {
            error!(format!("no se pudo contactar el backend: {err}"));
            false
        }
    }
}

pub async fn update_usuario_status(usuario: &User, status: UserStatus) -> bool {
    let payload = UpdateStatusRequest { status };
    trace_payload("cambiar estado de usuario", &payload);
    let builder = Request::put(&config::api_url(&format!(
        "/api/usuarios/{}/status",
        usuario.id
    )));
    send_json(builder, &payload).await
}

pub async fn add_or_update_salon(salon: &Salon) -> bool {
    trace_payload("guardar salón", salon);
    let builder = match salon.id {
        Some(id) => Request::put(&config::api_url(&format!("/api/salones/{id}"))),
        None => Request::post(&config::api_url("/api/salones")),
    };
    send_json(builder, salon).await
}
