use actix_web::{web, HttpResponse, Responder};
use log::{error, info, warn};
use serde_json::json;
use tera::Context;

use crate::art::styles::{DEFAULT_STYLE, STYLES};
use crate::art::{build_prompt, AspectRatio, GenerationOutcome};
use crate::error::GenerationError;
use crate::web::models::{GenerateRequest, GenerateResponse};
use crate::AppState;

// Index page handler
pub async fn index(data: web::Data<AppState>) -> impl Responder {
    let mut context = Context::new();
    context.insert("styles", STYLES);
    context.insert("default_style", DEFAULT_STYLE);
    context.insert("ratios", &AspectRatio::ALL);
    match data.tera.render("index.html", &context) {
        Ok(html) => HttpResponse::Ok().content_type("text/html").body(html),
        Err(e) => {
            error!("Template error: {}", e);
            HttpResponse::InternalServerError().body("Template error")
        }
    }
}

// Health check endpoint
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

// Logo generation endpoint
pub async fn generate(
    data: web::Data<AppState>,
    req: web::Json<GenerateRequest>,
) -> impl Responder {
    if !data.generator.has_credentials() {
        error!("Generation requested but provider credentials are missing");
        return HttpResponse::InternalServerError()
            .json(GenerateResponse::failed(GenerationError::MissingCredentials.to_string()));
    }

    let req = req.into_inner();
    let brand_name = req.brand_name.as_deref().unwrap_or("").trim();
    let description = req.description.as_deref().unwrap_or("").trim();
    let style_key = req.style.as_deref().unwrap_or(DEFAULT_STYLE);
    let ratio = AspectRatio::from_key(req.ratio.as_deref().unwrap_or("1:1"));

    if brand_name.is_empty() && description.is_empty() {
        return HttpResponse::BadRequest()
            .json(GenerateResponse::failed("Enter a brand name or a description."));
    }

    let seed = match req.seed.as_ref().map(|seed| seed.resolve()).transpose() {
        Ok(seed) => seed.flatten(),
        Err(message) => return HttpResponse::BadRequest().json(GenerateResponse::failed(message)),
    };

    let prompt = build_prompt(brand_name, description, style_key);
    info!(
        "Generate request: style={} ratio={} seed={:?}",
        style_key,
        ratio.key(),
        seed
    );

    match data.generator.generate(&prompt, seed, ratio).await {
        Ok(GenerationOutcome::Saved { filename }) => {
            HttpResponse::Ok().json(GenerateResponse::saved(filename, prompt))
        }
        Ok(GenerationOutcome::TimedOut) => HttpResponse::Ok().json(
            GenerateResponse::failed("Timeout: the image was not ready in time.").with_prompt(prompt),
        ),
        Err(e) if e.is_upstream() => {
            warn!("Image provider rejected request: {}", e);
            HttpResponse::BadGateway().json(GenerateResponse::failed(e.to_string()))
        }
        Err(e) => {
            error!("Generation error: {}", e);
            HttpResponse::InternalServerError().json(GenerateResponse::failed(e.to_string()))
        }
    }
}
