use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::modules::entertainers::core::engagement::Engagement;
use crate::modules::entertainers::core::entertainer::{Entertainer, EntertainerId};

/// An entertainer joined with its booking statistics.
///
/// `booking_count == 0` exactly when `last_booked_date` is `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntertainerSummary {
    #[serde(rename = "entertainerId")]
    pub entertainer_id: EntertainerId,
    #[serde(rename = "entStageName")]
    pub stage_name: String,
    #[serde(rename = "bookingCount")]
    pub booking_count: i64,
    #[serde(rename = "lastBookedDate")]
    pub last_booked_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BookingStats {
    pub count: i64,
    pub last_booked_date: Option<NaiveDate>,
}

impl BookingStats {
    fn record(&mut self, start_date: NaiveDate) {
        self.count += 1;
        self.last_booked_date = self.last_booked_date.max(Some(start_date));
    }
}

/// Groups engagements by entertainer in a single pass.
pub fn booking_stats<'a>(
    engagements: impl IntoIterator<Item = &'a Engagement>,
) -> HashMap<EntertainerId, BookingStats> {
    let mut stats: HashMap<EntertainerId, BookingStats> = HashMap::new();
    for engagement in engagements {
        stats
            .entry(engagement.entertainer_id)
            .or_default()
            .record(engagement.start_date);
    }
    stats
}

/// Joins entertainers with their booking statistics, O(n + m).
///
/// Output order follows the order of `entertainers`. Engagements that reference
/// an unknown entertainer are dropped by the join.
pub fn summarize<'a>(
    entertainers: impl IntoIterator<Item = &'a Entertainer>,
    engagements: impl IntoIterator<Item = &'a Engagement>,
) -> Vec<EntertainerSummary> {
    let stats = booking_stats(engagements);
    entertainers
        .into_iter()
        .map(|entertainer| {
            let BookingStats {
                count,
                last_booked_date,
            } = stats.get(&entertainer.id).copied().unwrap_or_default();
            EntertainerSummary {
                entertainer_id: entertainer.id,
                stage_name: entertainer.stage_name.clone(),
                booking_count: count,
                last_booked_date,
            }
        })
        .collect()
}
