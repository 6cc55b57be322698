use crate::helpers::{spawn_app, valid_registration_body};
use serde_json::json;

#[tokio::test]
async fn a_valid_registration_is_accepted_and_persisted() {
    // Arrange
    let app = spawn_app().await;
    let body = valid_registration_body();

    // Act
    let response = app.post_registration(&body).await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let payload: serde_json::Value = response.json().await.expect("Failed to parse the body");
    assert_eq!(payload["speaker_id"], json!(1));

    let saved = app.repository.saved_speakers();
    assert_eq!(saved.len(), 1);
    // Two years of experience fall in the second fee band.
    assert_eq!(saved[0].registration_fee, 250);
    assert_eq!(saved[0].sessions[0].approved, Some(true));
}

#[tokio::test]
async fn a_missing_first_name_is_rejected_with_the_right_reason() {
    // Arrange
    let app = spawn_app().await;
    let mut body = valid_registration_body();
    body["first_name"] = json!("");
    body["last_name"] = json!("Smith");

    // Act
    let response = app.post_registration(&body).await;

    // Assert
    assert_eq!(400, response.status().as_u16());
    let payload: serde_json::Value = response.json().await.expect("Failed to parse the body");
    assert_eq!(payload["error"], json!("FirstNameRequired"));
}

#[tokio::test]
async fn a_registration_without_sessions_is_rejected() {
    // Arrange
    let app = spawn_app().await;
    let mut body = valid_registration_body();
    body["sessions"] = json!([]);

    // Act
    let response = app.post_registration(&body).await;

    // Assert
    assert_eq!(400, response.status().as_u16());
    let payload: serde_json::Value = response.json().await.expect("Failed to parse the body");
    assert_eq!(payload["error"], json!("NoSessionsProvided"));
}

#[tokio::test]
async fn an_exceptional_speaker_passes_despite_a_red_flag_email_provider() {
    // Arrange
    let app = spawn_app().await;
    let mut body = valid_registration_body();
    // A denied email provider is outweighed by a preferred employer.
    body["employer"] = json!("Google");
    body["email"] = json!("grace@aol.com");
    body["years_experience"] = json!(2);

    // Act
    let response = app.post_registration(&body).await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let payload: serde_json::Value = response.json().await.expect("Failed to parse the body");
    assert_eq!(payload["speaker_id"], json!(1));

    let saved = app.repository.saved_speakers();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].registration_fee, 250);
    assert_eq!(saved[0].sessions[0].approved, Some(true));
}

#[tokio::test]
async fn an_unremarkable_speaker_with_an_old_browser_is_turned_down() {
    // Arrange
    let app = spawn_app().await;
    let mut body = valid_registration_body();
    body["employer"] = json!("Acme");
    body["browser"] = json!({ "name": "InternetExplorer", "major_version": 7 });

    // Act
    let response = app.post_registration(&body).await;

    // Assert
    assert_eq!(400, response.status().as_u16());
    let payload: serde_json::Value = response.json().await.expect("Failed to parse the body");
    assert_eq!(payload["error"], json!("SpeakerDoesNotMeetStandards"));
    // Nothing reaches the repository on a rejection.
    assert!(app.repository.saved_speakers().is_empty());
}

#[tokio::test]
async fn a_registration_whose_only_session_is_about_old_technology_is_turned_down() {
    // Arrange
    let app = spawn_app().await;
    let mut body = valid_registration_body();
    body["sessions"] = json!([{ "title": "Cobol Forever", "description": "" }]);

    // Act
    let response = app.post_registration(&body).await;

    // Assert
    assert_eq!(400, response.status().as_u16());
    let payload: serde_json::Value = response.json().await.expect("Failed to parse the body");
    assert_eq!(payload["error"], json!("NoSessionsApproved"));
    assert!(app.repository.saved_speakers().is_empty());
}

#[tokio::test]
async fn rejections_come_with_a_displayable_message() {
    // Arrange
    let app = spawn_app().await;
    let mut body = valid_registration_body();
    body["email"] = json!("");

    // Act
    let response = app.post_registration(&body).await;

    // Assert
    assert_eq!(400, response.status().as_u16());
    let payload: serde_json::Value = response.json().await.expect("Failed to parse the body");
    assert_eq!(payload["error"], json!("EmailRequired"));
    assert_eq!(payload["message"], json!("Email is required."));
}
