use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type EntertainerId = i32;

/// Optional contact attributes of an entertainer. Absent values are stored as null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntertainerDetails {
    #[serde(rename = "entSsn", default)]
    pub ssn: Option<String>,
    #[serde(rename = "entStreetAddress", default)]
    pub street_address: Option<String>,
    #[serde(rename = "entCity", default)]
    pub city: Option<String>,
    #[serde(rename = "entState", default)]
    pub state: Option<String>,
    #[serde(rename = "entZipCode", default)]
    pub zip_code: Option<String>,
    #[serde(rename = "entPhoneNumber", default)]
    pub phone_number: Option<String>,
    #[serde(rename = "entWebPage", default)]
    pub web_page: Option<String>,
    #[serde(rename = "entEmailAddress", default)]
    pub email_address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entertainer {
    #[serde(rename = "entertainerId")]
    pub id: EntertainerId,
    #[serde(rename = "entStageName")]
    pub stage_name: String,
    #[serde(flatten)]
    pub details: EntertainerDetails,
    #[serde(rename = "dateEntered")]
    pub date_entered: NaiveDate,
}

/// Client supplied payload for create and update.
///
/// Every field is optional on the wire so that validation, not deserialization,
/// decides what a missing stage name or id means. Fields the server owns
/// (`dateEntered`) and derived fields the client may echo back are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EntertainerInput {
    #[serde(rename = "entertainerId", default)]
    pub id: Option<EntertainerId>,
    #[serde(rename = "entStageName", default)]
    pub stage_name: Option<String>,
    #[serde(flatten)]
    pub details: EntertainerDetails,
}

/// A validated entertainer that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntertainer {
    pub stage_name: String,
    pub details: EntertainerDetails,
    pub date_entered: NaiveDate,
}

/// A validated replacement for every mutable field of a stored entertainer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntertainerUpdate {
    pub id: EntertainerId,
    pub stage_name: String,
    pub details: EntertainerDetails,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Stage name is required")]
    StageNameRequired,

    #[error("ID mismatch")]
    IdMismatch,
}

fn require_stage_name(stage_name: Option<String>) -> Result<String, ValidationError> {
    match stage_name {
        Some(name) if !name.trim().is_empty() => Ok(name),
        _ => Err(ValidationError::StageNameRequired),
    }
}

impl EntertainerInput {
    pub fn into_new_entertainer(
        self,
        date_entered: NaiveDate,
    ) -> Result<NewEntertainer, ValidationError> {
        Ok(NewEntertainer {
            stage_name: require_stage_name(self.stage_name)?,
            details: self.details,
            date_entered,
        })
    }

    /// The id check runs first so a mismatch is reported whatever the stage name.
    pub fn into_update(self, id: EntertainerId) -> Result<EntertainerUpdate, ValidationError> {
        if self.id != Some(id) {
            return Err(ValidationError::IdMismatch);
        }
        Ok(EntertainerUpdate {
            id,
            stage_name: require_stage_name(self.stage_name)?,
            details: self.details,
        })
    }
}

impl Entertainer {
    pub fn from_new(id: EntertainerId, new: NewEntertainer) -> Self {
        Self {
            id,
            stage_name: new.stage_name,
            details: new.details,
            date_entered: new.date_entered,
        }
    }

    /// Replaces the mutable fields, leaving `id` and `date_entered` untouched.
    pub fn apply(&mut self, update: EntertainerUpdate) {
        self.stage_name = update.stage_name;
        self.details = update.details;
    }
}
