use crate::domain::{BrowserName, Registration, Session};
use crate::repository::SpeakerRepository;

/// Session proposals mentioning any of these are turned down, by title or
/// description, case-sensitively. Fixed policy, not configuration.
const OLD_TECHNOLOGIES: [&str; 4] = ["Cobol", "Punch Cards", "Commodore", "VBScript"];

/// Email providers we treat as a negative eligibility signal.
const DOMAIN_DENY_LIST: [&str; 3] = ["aol.com", "prodigy.com", "compuserve.com"];

/// Employers whose speakers skip red-flag screening entirely.
const PREFERRED_EMPLOYERS: [&str; 3] = ["Pluralsight", "Microsoft", "Google"];

/// The complete taxonomy of reasons a registration can be turned down. The
/// first applicable reason wins; rejections are never aggregated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error, serde::Serialize)]
pub enum RegisterError {
    #[error("First name is required.")]
    FirstNameRequired,
    #[error("Last name is required.")]
    LastNameRequired,
    #[error("Email is required.")]
    EmailRequired,
    #[error("At least one session must be proposed.")]
    NoSessionsProvided,
    #[error("Speaker does not meet the conference standards.")]
    SpeakerDoesNotMeetStandards,
    #[error("None of the proposed sessions were approved.")]
    NoSessionsApproved,
}

/// The outcome of evaluating a single registration: exactly one of an assigned
/// speaker identifier or a rejection reason, never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterResponse {
    Accepted { speaker_id: i64 },
    Rejected(RegisterError),
}

/// Runs the registration decision pipeline over a submitted record.
///
/// The stages run in a fixed order and each failure short-circuits the rest:
/// field validation, eligibility, per-session approval, fee computation, and
/// finally persistence. A business rejection is an `Ok(Rejected(_))` - it is a
/// regular outcome, not an error. The only `Err` this function produces is a
/// failure of the repository, which propagates untranslated.
///
/// The registration is mutated in place: once eligibility passes, every session
/// gets its `approved` tag and the fee is written back, and those writes stand
/// even if the evaluation still ends in a rejection. Callers must not assume
/// the record is untouched on failure paths.
#[tracing::instrument(
    name = "Evaluating a speaker registration",
    skip(registration, repository),
    fields(speaker_email = %registration.email)
)]
pub async fn register<R: SpeakerRepository>(
    registration: &mut Registration,
    repository: &R,
) -> Result<RegisterResponse, anyhow::Error> {
    if let Some(error) = validate_data(registration) {
        return Ok(RegisterResponse::Rejected(error));
    }

    // An exceptional speaker is exempt from red-flag screening, and a speaker
    // with a clean record needs no exceptional credentials. Only the
    // combination of red flags and nothing exceptional is turned down. The
    // unusual shape of this expression is the policy itself - keep it intact.
    let is_qualified = is_exceptional(registration) || !has_red_flags(registration);
    if !is_qualified {
        return Ok(RegisterResponse::Rejected(
            RegisterError::SpeakerDoesNotMeetStandards,
        ));
    }

    if let Some(error) = approve_sessions(&mut registration.sessions) {
        return Ok(RegisterResponse::Rejected(error));
    }

    registration.registration_fee = calculate_fee(registration.years_experience);

    let speaker_id = repository.save_speaker(registration).await?;
    Ok(RegisterResponse::Accepted { speaker_id })
}

/// Emptiness checks only, in fixed precedence. Whitespace-only values pass;
/// email format is not validated here.
fn validate_data(registration: &Registration) -> Option<RegisterError> {
    if registration.first_name.is_empty() {
        return Some(RegisterError::FirstNameRequired);
    }
    if registration.last_name.is_empty() {
        return Some(RegisterError::LastNameRequired);
    }
    if registration.email.is_empty() {
        return Some(RegisterError::EmailRequired);
    }
    if registration.sessions.is_empty() {
        return Some(RegisterError::NoSessionsProvided);
    }
    None
}

/// Any one seniority or credibility signal is enough. A missing
/// years-of-experience fails the tenure comparison.
fn is_exceptional(registration: &Registration) -> bool {
    registration.years_experience.map_or(false, |years| years > 10)
        || registration.has_blog
        || registration.certifications.len() > 3
        || PREFERRED_EMPLOYERS.contains(&registration.employer.as_str())
}

fn has_red_flags(registration: &Registration) -> bool {
    // Everything after the last `@`; the whole address when there is none.
    // Exact match only - a subdomain of a denied provider does not count.
    let email_domain = registration.email.rsplit('@').next().unwrap_or_default();

    DOMAIN_DENY_LIST.contains(&email_domain)
        || (registration.browser.name == BrowserName::InternetExplorer
            && registration.browser.major_version < 9)
}

/// Tags every session - deliberately no short-circuit on the first approval,
/// so a rejected registration still reports which individual sessions would
/// have made the cut.
fn approve_sessions(sessions: &mut [Session]) -> Option<RegisterError> {
    for session in sessions.iter_mut() {
        session.approved = Some(!is_about_old_technology(session));
    }

    if sessions.iter().any(|session| session.approved == Some(true)) {
        None
    } else {
        Some(RegisterError::NoSessionsApproved)
    }
}

fn is_about_old_technology(session: &Session) -> bool {
    OLD_TECHNOLOGIES
        .iter()
        .any(|tech| session.title.contains(tech) || session.description.contains(tech))
}

/// Fee bands by years of experience. A missing value fails every `<=`
/// comparison and lands in the final band, so unknown tenure pays nothing -
/// the same way it fails the `> 10` comparison in `is_exceptional`.
fn calculate_fee(years_experience: Option<i32>) -> i32 {
    match years_experience {
        Some(years) if years <= 1 => 500,
        Some(years) if years <= 3 => 250,
        Some(years) if years <= 5 => 100,
        Some(years) if years <= 9 => 50,
        _ => 0,
    }
}
