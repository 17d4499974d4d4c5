use std::io::Write;
use std::path::PathBuf;

use serde_json::json;
use similar_asserts::assert_eq;
use tempfile::NamedTempFile;
use trs_core::TrsCore;
use trs_core::config::core_config::AppConfig;
use trs_core::service::identity_matching::dto::{
    DigitalIdentityMatchOutcome, MatchedAttribute, MatchedAttributeValueDTO,
    RegistrationMatchOutcome,
};
use uuid::Uuid;

use super::{Command, run};
use crate::CliConfig;
use crate::dto::{DigitalIdentityMatchOutcomeRestDTO, RegistrationMatchOutcomeRestDTO};
use crate::init::initialize_core;

async fn setup_core() -> TrsCore {
    let db = sql_data_provider::db_conn("sqlite::memory:", true)
        .await
        .unwrap();
    initialize_core(&AppConfig::<CliConfig>::default(), db)
}

fn json_file(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn path(file: &NamedTempFile) -> PathBuf {
    file.path().to_path_buf()
}

#[tokio::test]
async fn test_match_digital_identity_on_empty_register() {
    let core = setup_core().await;
    let claim = json_file(
        r#"{
            "names": [["Amelia", "Smith"]],
            "datesOfBirth": ["1990-01-01"],
            "nationalInsuranceNumber": "QQ123456C",
            "gender": "FEMALE"
        }"#,
    );

    let output = run(&core, Command::MatchDigitalIdentity { claim: path(&claim) })
        .await
        .unwrap();

    assert_eq!(output, json!({ "outcome": "NO_MATCH" }));
}

#[tokio::test]
async fn test_match_digital_identity_without_date_of_birth() {
    let core = setup_core().await;
    let claim = json_file(r#"{ "names": [["Amelia", "Smith"]] }"#);

    let output = run(&core, Command::MatchDigitalIdentity { claim: path(&claim) })
        .await
        .unwrap();

    assert_eq!(output, json!({ "outcome": "NO_MATCH" }));
}

#[tokio::test]
async fn test_claim_with_unknown_field_is_rejected() {
    let core = setup_core().await;
    let claim = json_file(r#"{ "names": [["Amelia"]], "shoeSize": 38 }"#);

    let error = run(&core, Command::DigitalIdentitySuggestions { claim: path(&claim) })
        .await
        .unwrap_err();

    assert!(error.to_string().starts_with("Failed parsing"));
}

#[tokio::test]
async fn test_missing_claim_file() {
    let core = setup_core().await;

    let error = run(
        &core,
        Command::MatchDigitalIdentity {
            claim: PathBuf::from("/nonexistent/claim.json"),
        },
    )
    .await
    .unwrap_err();

    assert!(error.to_string().starts_with("Failed reading"));
}

#[tokio::test]
async fn test_registration_commands_on_empty_register() {
    let core = setup_core().await;
    let request = json_file(
        r#"{
            "firstName": "Amelia",
            "lastName": "Smith",
            "dateOfBirth": "1990-01-01",
            "emailAddress": "amelia.smith@example.com"
        }"#,
    );

    let outcome = run(&core, Command::MatchRegistration { request: path(&request) })
        .await
        .unwrap();
    assert_eq!(outcome, json!({ "outcome": "NO_MATCHES" }));

    let suggestions = run(
        &core,
        Command::RegistrationSuggestions {
            request: path(&request),
        },
    )
    .await
    .unwrap();
    assert_eq!(suggestions, json!([]));
}

#[tokio::test]
async fn test_matched_attributes_of_unknown_person() {
    let core = setup_core().await;
    let request = json_file(r#"{ "lastName": "Smith" }"#);
    let person_id = Uuid::from_u128(7).into();

    let error = run(
        &core,
        Command::RegistrationMatchedAttributes {
            request: path(&request),
            person_id,
        },
    )
    .await
    .unwrap_err();

    assert_eq!(error.to_string(), format!("Person `{person_id}` not found"));
}

#[test]
fn test_digital_identity_outcome_serialization() {
    let person_id = Uuid::from_u128(1).into();
    let outcome = DigitalIdentityMatchOutcomeRestDTO::from(DigitalIdentityMatchOutcome::Match {
        person_id,
        reference_number: "1234567".to_string(),
        matched_attributes: vec![
            MatchedAttributeValueDTO {
                attribute: MatchedAttribute::DateOfBirth,
                value: "1990-01-01".to_string(),
            },
            MatchedAttributeValueDTO {
                attribute: MatchedAttribute::NationalInsuranceNumber,
                value: "QQ123456C".to_string(),
            },
        ],
    });

    assert_eq!(
        serde_json::to_value(outcome).unwrap(),
        json!({
            "outcome": "MATCH",
            "personId": "00000000-0000-0000-0000-000000000001",
            "referenceNumber": "1234567",
            "matchedAttributes": [
                { "attribute": "DATE_OF_BIRTH", "value": "1990-01-01" },
                { "attribute": "NATIONAL_INSURANCE_NUMBER", "value": "QQ123456C" },
            ],
        })
    );
}

#[test]
fn test_registration_outcome_serialization() {
    let first = Uuid::from_u128(1).into();
    let second = Uuid::from_u128(2).into();

    let outcome = RegistrationMatchOutcomeRestDTO::from(RegistrationMatchOutcome::PotentialMatches {
        person_ids: vec![first, second],
    });

    assert_eq!(
        serde_json::to_value(outcome).unwrap(),
        json!({
            "outcome": "POTENTIAL_MATCHES",
            "personIds": [
                "00000000-0000-0000-0000-000000000001",
                "00000000-0000-0000-0000-000000000002",
            ],
        })
    );
}

#[test]
fn test_shipped_config_parses() {
    let config = AppConfig::<CliConfig>::from_files(&[concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/config/config.yml"
    )])
    .unwrap();

    assert_eq!(config.core.matching.name_token_limit, None);
    assert_eq!(config.core.matching.suggestion_limit, Some(20));
    assert!(config.app.run_migrations);
    assert_eq!(config.app.trace_json, Some(false));
}
