use std::sync::{Mutex, TryLockError};

use actix_web::{HttpResponse, Responder, get, post, route, web};
use serde_json::json;
use tera::Tera;

use crate::chat::{ChatError, HttpChatGateway};
use crate::domain::chat::ChatSession;
use crate::forms::chat::{ChatForm, ChatFormPayload};
use crate::routes::{base_context, render_template};
use crate::services;

const ALLOW_ORIGIN: (&str, &str) = ("Access-Control-Allow-Origin", "*");

fn chat_error_status(error: &ChatError) -> u16 {
    match error {
        ChatError::RateLimited => 429,
        ChatError::CreditsExhausted => 402,
        _ => 500,
    }
}

#[get("/chat")]
pub async fn chat_page(
    session: web::Data<Mutex<ChatSession>>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let transcript = match session.lock() {
        Ok(session) => session.transcript().to_vec(),
        Err(poisoned) => poisoned.into_inner().transcript().to_vec(),
    };

    let mut context = base_context("chat");
    context.insert("transcript", &transcript);

    render_template(&tera, "chat/index.html", &context)
}

#[post("/chat")]
pub async fn send_chat(
    form: web::Json<ChatForm>,
    session: web::Data<Mutex<ChatSession>>,
    gateway: web::Data<HttpChatGateway>,
) -> impl Responder {
    let payload = match ChatFormPayload::try_from(form.into_inner()) {
        Ok(payload) => payload,
        Err(e) => {
            return HttpResponse::BadRequest()
                .insert_header(ALLOW_ORIGIN)
                .json(json!({ "error": e.to_string() }));
        }
    };

    // One in-flight request at a time; a concurrent send is rejected
    // instead of queued behind the lock.
    let mut session = match session.try_lock() {
        Ok(session) => session,
        Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner(),
        Err(TryLockError::WouldBlock) => {
            return HttpResponse::TooManyRequests()
                .insert_header(ALLOW_ORIGIN)
                .json(json!({ "error": "a message is already in flight" }));
        }
    };

    match services::chat::send_message(&mut session, gateway.get_ref(), &payload.message).await {
        Ok(reply) => match reply.error {
            None => HttpResponse::Ok()
                .insert_header(ALLOW_ORIGIN)
                .json(json!({ "reply": reply.text })),
            Some(ref error) => {
                let status = actix_web::http::StatusCode::from_u16(chat_error_status(error))
                    .unwrap_or(actix_web::http::StatusCode::INTERNAL_SERVER_ERROR);
                HttpResponse::build(status)
                    .insert_header(ALLOW_ORIGIN)
                    .json(json!({ "error": reply.text }))
            }
        },
        Err(e) => HttpResponse::BadRequest()
            .insert_header(ALLOW_ORIGIN)
            .json(json!({ "error": e.to_string() })),
    }
}

/// CORS preflight for the relay interface: empty success with permissive
/// headers.
#[route("/chat", method = "OPTIONS")]
pub async fn chat_preflight() -> impl Responder {
    HttpResponse::Ok()
        .insert_header(ALLOW_ORIGIN)
        .insert_header(("Access-Control-Allow-Methods", "GET, POST, OPTIONS"))
        .insert_header(("Access-Control-Allow-Headers", "Content-Type, Authorization"))
        .finish()
}
