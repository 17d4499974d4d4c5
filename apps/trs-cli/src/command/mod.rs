use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Subcommand;
use one_dto_mapper::convert_inner;
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared_types::PersonId;
use trs_core::TrsCore;

use crate::dto::{
    DigitalIdentityClaimRestDTO, DigitalIdentityMatchOutcomeRestDTO, MatchSuggestionRestDTO,
    MatchedAttributeValueRestDTO, RegistrationMatchOutcomeRestDTO, RegistrationRequestRestDTO,
};

#[cfg(test)]
mod test;

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Decides whether a digital identity claim belongs to exactly one person
    MatchDigitalIdentity {
        #[arg(value_name = "FILE")]
        claim: PathBuf,
    },
    /// Ranked shortlist of persons sharing evidence with a digital identity claim
    DigitalIdentitySuggestions {
        #[arg(value_name = "FILE")]
        claim: PathBuf,
    },
    /// Evidence a digital identity claim shares with one person
    DigitalIdentityMatchedAttributes {
        #[arg(value_name = "FILE")]
        claim: PathBuf,
        #[arg(long)]
        person_id: PersonId,
    },
    /// Classifies a registration request as a definite, potential or missing match
    MatchRegistration {
        #[arg(value_name = "FILE")]
        request: PathBuf,
    },
    /// Ranked shortlist of persons sharing evidence with a registration request
    RegistrationSuggestions {
        #[arg(value_name = "FILE")]
        request: PathBuf,
    },
    /// Evidence a registration request shares with one person
    RegistrationMatchedAttributes {
        #[arg(value_name = "FILE")]
        request: PathBuf,
        #[arg(long)]
        person_id: PersonId,
    },
}

/// Executes one command and returns its result as JSON.
pub async fn run(core: &TrsCore, command: Command) -> anyhow::Result<Value> {
    let service = &core.identity_matching_service;

    let output = match command {
        Command::MatchDigitalIdentity { claim } => {
            let claim: DigitalIdentityClaimRestDTO = read_json(&claim)?;
            let outcome = service.match_digital_identity(claim.into()).await?;
            serde_json::to_value(DigitalIdentityMatchOutcomeRestDTO::from(outcome))?
        }
        Command::DigitalIdentitySuggestions { claim } => {
            let claim: DigitalIdentityClaimRestDTO = read_json(&claim)?;
            let suggestions: Vec<MatchSuggestionRestDTO> =
                convert_inner(service.get_digital_identity_suggestions(claim.into()).await?);
            serde_json::to_value(suggestions)?
        }
        Command::DigitalIdentityMatchedAttributes { claim, person_id } => {
            let claim: DigitalIdentityClaimRestDTO = read_json(&claim)?;
            let attributes: Vec<MatchedAttributeValueRestDTO> = convert_inner(
                service
                    .get_matched_attributes(claim.into(), &person_id)
                    .await?,
            );
            serde_json::to_value(attributes)?
        }
        Command::MatchRegistration { request } => {
            let request: RegistrationRequestRestDTO = read_json(&request)?;
            let outcome = service.match_registration_request(request.into()).await?;
            serde_json::to_value(RegistrationMatchOutcomeRestDTO::from(outcome))?
        }
        Command::RegistrationSuggestions { request } => {
            let request: RegistrationRequestRestDTO = read_json(&request)?;
            let suggestions: Vec<MatchSuggestionRestDTO> = convert_inner(
                service
                    .get_registration_request_suggestions(request.into())
                    .await?,
            );
            serde_json::to_value(suggestions)?
        }
        Command::RegistrationMatchedAttributes { request, person_id } => {
            let request: RegistrationRequestRestDTO = read_json(&request)?;
            let attributes: Vec<MatchedAttributeValueRestDTO> = convert_inner(
                service
                    .get_registration_request_matched_attributes(request.into(), &person_id)
                    .await?,
            );
            serde_json::to_value(attributes)?
        }
    };

    Ok(output)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    tracing::debug!("Reading request from {}", path.display());
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed reading {}", path.display()))?;

    serde_json::from_str(&content).with_context(|| format!("Failed parsing {}", path.display()))
}
