//! Test doubles for the controller's seams.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::json;

use crate::client::UserSource;
use crate::error::FetchError;
use crate::input::FormSurface;
use crate::models::{Location, Login, Name, Picture, Profile, RequestParams};
use crate::render::{Card, DisplaySurface};
use crate::status::StatusMessage;

pub fn profile(title: &str, first: &str, last: &str, username: &str) -> Profile {
    Profile {
        name: Name {
            title: title.into(),
            first: first.into(),
            last: last.into(),
        },
        email: format!("{username}@example.com"),
        phone: "555-0100".into(),
        login: Login {
            username: username.into(),
        },
        picture: Picture {
            medium: format!("https://example.com/{username}.jpg"),
        },
        location: Location {
            city: "Springfield".into(),
            country: "Freedonia".into(),
        },
    }
}

/// A randomuser.me style response body with one record per username.
pub fn results_body(usernames: &[&str]) -> String {
    let results: Vec<_> = usernames
        .iter()
        .map(|username| {
            json!({
                "gender": "female",
                "name": { "title": "Ms", "first": username, "last": "Tester" },
                "location": { "city": "Springfield", "country": "Freedonia" },
                "email": format!("{username}@example.com"),
                "login": { "uuid": "0", "username": username },
                "phone": "555-0100",
                "picture": { "medium": format!("https://example.com/{username}.jpg") }
            })
        })
        .collect();

    json!({
        "results": results,
        "info": { "seed": "abc", "results": usernames.len(), "page": 1, "version": "1.4" }
    })
    .to_string()
}

#[derive(Default)]
pub struct RecordingDisplay {
    cards: Mutex<Vec<Card>>,
    status: Mutex<Option<StatusMessage>>,
    statuses: Mutex<Vec<StatusMessage>>,
}

impl RecordingDisplay {
    pub fn cards(&self) -> Vec<Card> {
        self.cards.lock().unwrap().clone()
    }

    pub fn status(&self) -> Option<StatusMessage> {
        self.status.lock().unwrap().clone()
    }

    /// Every status set so far, oldest first.
    pub fn status_history(&self) -> Vec<StatusMessage> {
        self.statuses.lock().unwrap().clone()
    }
}

impl DisplaySurface for RecordingDisplay {
    fn clear_cards(&self) {
        self.cards.lock().unwrap().clear();
    }

    fn append_card(&self, card: Card) {
        self.cards.lock().unwrap().push(card);
    }

    fn set_status(&self, status: StatusMessage) {
        self.statuses.lock().unwrap().push(status.clone());
        *self.status.lock().unwrap() = Some(status);
    }
}

pub struct FakeForm {
    count: String,
    gender: String,
    help: Mutex<String>,
}

impl FakeForm {
    pub fn new(count: &str, gender: &str) -> Self {
        Self {
            count: count.into(),
            gender: gender.into(),
            help: Mutex::new(String::new()),
        }
    }

    pub fn help(&self) -> String {
        self.help.lock().unwrap().clone()
    }
}

impl FormSurface for FakeForm {
    fn count_text(&self) -> String {
        self.count.clone()
    }

    fn gender_text(&self) -> String {
        self.gender.clone()
    }

    fn set_count_help(&self, text: &str) {
        *self.help.lock().unwrap() = text.to_string();
    }
}

/// Replays queued outcomes and remembers every request it saw.
#[derive(Default)]
pub struct StubSource {
    outcomes: Mutex<VecDeque<Result<Vec<Profile>, FetchError>>>,
    requests: Mutex<Vec<RequestParams>>,
}

impl StubSource {
    pub fn push(&self, outcome: Result<Vec<Profile>, FetchError>) {
        self.outcomes.lock().unwrap().push_back(outcome);
    }

    pub fn requests(&self) -> Vec<RequestParams> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserSource for StubSource {
    async fn fetch_users(&self, params: &RequestParams) -> Result<Vec<Profile>, FetchError> {
        self.requests.lock().unwrap().push(*params);
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}
