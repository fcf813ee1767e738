use serde::Deserialize;

/// One generated person from the randomuser.me `/api/` endpoint.
///
/// Only the fields shown on a card are decoded; everything else in the
/// record is ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Profile {
    pub name: Name,
    pub email: String,
    pub phone: String,
    pub login: Login,
    pub picture: Picture,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Name {
    pub title: String,
    pub first: String,
    pub last: String,
}

impl Name {
    /// Title, first and last name joined by single spaces.
    pub fn full(&self) -> String {
        format!("{} {} {}", self.title, self.first, self.last)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Login {
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Picture {
    pub medium: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Location {
    pub city: String,
    pub country: String,
}

/// Optional metadata block the API sends next to `results`.
#[derive(Debug, Default, Deserialize)]
pub struct ResponseInfo {
    pub seed: Option<String>,
    pub version: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Female => "female",
            Gender::Male => "male",
        }
    }
}

/// Validated inputs for a single fetch. Built per submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestParams {
    pub count: u8,
    pub gender: Option<Gender>,
}
