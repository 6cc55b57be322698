use crate::domain::{register, Registration, RegisterResponse};
use crate::repository::SpeakerRepository;
use actix_web::{web, HttpResponse};

/// # Cleaning up Instrumentation Code - tracing::Instrument
///
/// `#[tracing::instrument]` creates a span at the beginning of the function
/// invocation and automatically attaches all arguments passed to the function
/// to the context of the span. Arguments that are not displayable on log
/// records (the repository) or that we want to capture field-by-field (the
/// payload) are skipped, and the interesting fields are named explicitly.
///
/// The result is quite nice: all instrumentation concerns are visually
/// separated from execution concerns - the first are dealt with in a
/// procedural macro that "decorates" the function declaration, while the
/// function body focuses on the actual business logic.
#[tracing::instrument(
    name = "Registering a conference speaker",
    skip(payload, repository),
    fields(
        speaker_email = %payload.email,
        speaker_name = %payload.first_name
    )
)]
pub async fn register_speaker<R: SpeakerRepository>(
    payload: web::Json<Registration>,
    // Retrieving the repository from the application state!
    repository: web::Data<R>,
) -> HttpResponse {
    let mut registration = payload.into_inner();

    match register(&mut registration, repository.get_ref()).await {
        Ok(RegisterResponse::Accepted { speaker_id }) => {
            HttpResponse::Ok().json(serde_json::json!({ "speaker_id": speaker_id }))
        }
        Ok(RegisterResponse::Rejected(error)) => {
            tracing::info!("Registration rejected: {error}");
            let message = error.to_string();
            HttpResponse::BadRequest().json(serde_json::json!({
                "error": error,
                "message": message,
            }))
        }
        Err(error) => {
            tracing::error!("Failed to save an accepted speaker: {error:?}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
