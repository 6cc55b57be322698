use crate::domain::Registration;
use anyhow::Context;
use sqlx::PgPool;
use std::sync::{Arc, Mutex};

/// The one collaborator the evaluation pipeline is allowed to call out to.
///
/// `save_speaker` is invoked exactly once per accepted registration, after the
/// fee and the per-session approval tags have been written onto the record. It
/// returns the identifier assigned to the new speaker; any failure it raises is
/// not translated into a rejection reason - it bubbles up to the caller as-is.
pub trait SpeakerRepository {
    async fn save_speaker(&self, registration: &Registration) -> Result<i64, anyhow::Error>;
}

/// Postgres-backed repository used by the binary. The speaker row and its
/// session rows are written in a single transaction, so a partially saved
/// registration is never visible.
#[derive(Clone)]
pub struct PostgresSpeakerRepository {
    pool: PgPool,
}

impl PostgresSpeakerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl SpeakerRepository for PostgresSpeakerRepository {
    #[tracing::instrument(
        name = "Saving an accepted speaker",
        skip(self, registration),
        fields(speaker_email = %registration.email)
    )]
    async fn save_speaker(&self, registration: &Registration) -> Result<i64, anyhow::Error> {
        let mut transaction = self
            .pool
            .begin()
            .await
            .context("Failed to acquire a Postgres connection from the pool")?;

        let speaker_id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO speakers (
                first_name, last_name, email, years_experience, has_blog,
                blog_url, browser_name, browser_major_version, certifications,
                employer, registration_fee, registered_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING id
            "#,
        )
        .bind(&registration.first_name)
        .bind(&registration.last_name)
        .bind(&registration.email)
        .bind(registration.years_experience)
        .bind(registration.has_blog)
        .bind(&registration.blog_url)
        .bind(registration.browser.name.as_str())
        .bind(registration.browser.major_version)
        .bind(&registration.certifications)
        .bind(&registration.employer)
        .bind(registration.registration_fee)
        .bind(chrono::Utc::now())
        .fetch_one(&mut transaction)
        .await
        .context("Failed to insert the speaker row")?;

        for session in &registration.sessions {
            sqlx::query(
                r#"
                INSERT INTO sessions (speaker_id, title, description, approved)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(speaker_id)
            .bind(&session.title)
            .bind(&session.description)
            .bind(session.approved.unwrap_or(false))
            .execute(&mut transaction)
            .await
            .context("Failed to insert a session row")?;
        }

        transaction
            .commit()
            .await
            .context("Failed to commit the speaker registration")?;

        Ok(speaker_id)
    }
}

/// In-memory repository with sequential identifiers. The whole test suite runs
/// against it, and it is handy for poking at the service locally without a
/// database. Saved records can be inspected through [`saved_speakers`].
///
/// [`saved_speakers`]: InMemorySpeakerRepository::saved_speakers
#[derive(Clone, Default)]
pub struct InMemorySpeakerRepository {
    saved: Arc<Mutex<Vec<Registration>>>,
}

impl InMemorySpeakerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A snapshot of every registration saved so far, in save order.
    pub fn saved_speakers(&self) -> Vec<Registration> {
        self.saved
            .lock()
            .map(|saved| saved.clone())
            .unwrap_or_default()
    }
}

impl SpeakerRepository for InMemorySpeakerRepository {
    async fn save_speaker(&self, registration: &Registration) -> Result<i64, anyhow::Error> {
        let mut saved = self
            .saved
            .lock()
            .map_err(|_| anyhow::anyhow!("The in-memory speaker store is poisoned"))?;
        saved.push(registration.clone());
        Ok(saved.len() as i64)
    }
}
