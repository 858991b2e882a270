use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::modules::entertainers::core::entertainer::EntertainerId;

/// A booking of one entertainer. Only the fields the booking statistics need
/// are modelled; the booking subsystem owns the rest of the row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Engagement {
    #[serde(rename = "engagementNumber")]
    pub id: i32,
    #[serde(rename = "entertainerId")]
    pub entertainer_id: EntertainerId,
    #[serde(rename = "startDate")]
    pub start_date: NaiveDate,
}
