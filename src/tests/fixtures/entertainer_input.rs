// Shared test fixture for the entertainer create/update payload.

use crate::modules::entertainers::core::entertainer::{EntertainerId, EntertainerInput};
use std::fs;

pub struct EntertainerInputBuilder {
    inner: EntertainerInput,
}

impl Default for EntertainerInputBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl EntertainerInputBuilder {
    pub fn new() -> Self {
        let json_str =
            fs::read_to_string("./src/tests/fixtures/json/entertainer_input.json").unwrap();
        Self {
            inner: serde_json::from_str(&json_str).unwrap(),
        }
    }

    pub fn id(mut self, v: EntertainerId) -> Self {
        self.inner.id = Some(v);
        self
    }

    pub fn stage_name(mut self, v: impl Into<String>) -> Self {
        self.inner.stage_name = Some(v.into());
        self
    }

    pub fn without_stage_name(mut self) -> Self {
        self.inner.stage_name = None;
        self
    }

    pub fn city(mut self, v: impl Into<String>) -> Self {
        self.inner.details.city = Some(v.into());
        self
    }

    pub fn build(self) -> EntertainerInput {
        self.inner
    }
}

#[cfg(test)]
mod entertainer_input_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = EntertainerInputBuilder::default().build();
        assert_eq!(built.id, None);
        assert_eq!(built.stage_name.as_deref(), Some("Carol Peacock Trio"));
        assert_eq!(built.details.city.as_deref(), Some("Redmond"));
        assert_eq!(built.details.state.as_deref(), Some("WA"));
        assert_eq!(
            built.details.email_address.as_deref(),
            Some("carolp@cptrio.com")
        );
    }

    #[rstest]
    fn setters_override_fields_and_build_returns_inner() {
        let custom = EntertainerInputBuilder::new()
            .id(8)
            .stage_name("Topazz")
            .city("Auburn")
            .build();

        assert_eq!(custom.id, Some(8));
        assert_eq!(custom.stage_name.as_deref(), Some("Topazz"));
        assert_eq!(custom.details.city.as_deref(), Some("Auburn"));

        let blank = EntertainerInputBuilder::new().without_stage_name().build();
        assert_eq!(blank.stage_name, None);
    }
}
