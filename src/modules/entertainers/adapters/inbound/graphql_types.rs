use async_graphql::{InputObject, SimpleObject};
use chrono::NaiveDate;

use crate::modules::entertainers::core::entertainer::{
    Entertainer, EntertainerDetails, EntertainerInput,
};
use crate::modules::entertainers::core::summary::EntertainerSummary;
use crate::modules::entertainers::use_cases::errors::ApplicationError;

#[derive(SimpleObject, Clone)]
#[graphql(name = "Entertainer")]
pub struct GqlEntertainer {
    pub entertainer_id: i32,
    pub stage_name: String,
    pub ssn: Option<String>,
    pub street_address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub phone_number: Option<String>,
    pub web_page: Option<String>,
    pub email_address: Option<String>,
    pub date_entered: NaiveDate,
}

impl From<Entertainer> for GqlEntertainer {
    fn from(e: Entertainer) -> Self {
        Self {
            entertainer_id: e.id,
            stage_name: e.stage_name,
            ssn: e.details.ssn,
            street_address: e.details.street_address,
            city: e.details.city,
            state: e.details.state,
            zip_code: e.details.zip_code,
            phone_number: e.details.phone_number,
            web_page: e.details.web_page,
            email_address: e.details.email_address,
            date_entered: e.date_entered,
        }
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(name = "EntertainerSummary")]
pub struct GqlEntertainerSummary {
    pub entertainer_id: i32,
    pub stage_name: String,
    pub booking_count: i64,
    pub last_booked_date: Option<NaiveDate>,
}

impl From<EntertainerSummary> for GqlEntertainerSummary {
    fn from(s: EntertainerSummary) -> Self {
        Self {
            entertainer_id: s.entertainer_id,
            stage_name: s.stage_name,
            booking_count: s.booking_count,
            last_booked_date: s.last_booked_date,
        }
    }
}

#[derive(InputObject, Clone, Default)]
#[graphql(name = "EntertainerInput")]
pub struct GqlEntertainerInput {
    pub entertainer_id: Option<i32>,
    pub stage_name: Option<String>,
    pub ssn: Option<String>,
    pub street_address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub phone_number: Option<String>,
    pub web_page: Option<String>,
    pub email_address: Option<String>,
}

impl From<GqlEntertainerInput> for EntertainerInput {
    fn from(i: GqlEntertainerInput) -> Self {
        Self {
            id: i.entertainer_id,
            stage_name: i.stage_name,
            details: EntertainerDetails {
                ssn: i.ssn,
                street_address: i.street_address,
                city: i.city,
                state: i.state,
                zip_code: i.zip_code,
                phone_number: i.phone_number,
                web_page: i.web_page,
                email_address: i.email_address,
            },
        }
    }
}

pub fn to_gql_error(error: ApplicationError) -> async_graphql::Error {
    if let ApplicationError::Store(store_error) = &error {
        tracing::error!(error = %store_error, "entertainer store failure");
    }
    async_graphql::Error::new(error.to_string())
}
