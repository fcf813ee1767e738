use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, error, info, warn};

use crate::client::UserSource;
use crate::input::{self, FormSurface};
use crate::models::RequestParams;
use crate::render::{self, DisplaySurface};
use crate::status::StatusMessage;

/// A validated submission waiting for its fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission {
    pub params: RequestParams,
    generation: u64,
}

/// Wires form events to the user source and the display.
///
/// Each submission and each clear starts a new generation. A fetch that
/// resolves after a newer generation has started is dropped, so the most
/// recent action always decides what is on screen.
///
/// The generation lock is held while display updates are issued, so a
/// clear or a new submission can never be enqueued between a fetch's
/// generation check and its render.
pub struct UserController {
    source: Arc<dyn UserSource>,
    display: Arc<dyn DisplaySurface>,
    generation: Mutex<u64>,
}

impl UserController {
    pub fn new(source: Arc<dyn UserSource>, display: Arc<dyn DisplaySurface>) -> Self {
        Self {
            source,
            display,
            generation: Mutex::new(0),
        }
    }

    pub fn count_edited(&self, form: &dyn FormSurface) {
        form.set_count_help(&input::helper_text(&form.count_text()));
    }

    pub fn clear(&self) {
        let mut current = self.generation.lock();
        *current += 1;
        render::clear_users(self.display.as_ref());
        self.display.set_status(StatusMessage::cleared());
    }

    /// Validates the form and announces the fetch. `None` means the input
    /// was rejected and nothing should be requested.
    pub fn prepare(&self, form: &dyn FormSurface) -> Option<Submission> {
        let mut current = self.generation.lock();
        *current += 1;
        let generation = *current;

        let params = match input::read_request(form) {
            Ok(params) => params,
            Err(err) => {
                warn!(input = %err.input, "rejected user count");
                self.display.set_status(StatusMessage::invalid_count());
                render::clear_users(self.display.as_ref());
                return None;
            }
        };

        self.display.set_status(StatusMessage::fetching());
        Some(Submission { params, generation })
    }

    pub async fn complete(&self, submission: Submission) {
        let Submission { params, generation } = submission;
        info!(count = params.count, gender = ?params.gender, "fetching profiles");

        let outcome = self.source.fetch_users(&params).await;

        let current = self.generation.lock();
        if generation != *current {
            debug!(generation, "discarding response for superseded submission");
            return;
        }

        match outcome {
            Ok(profiles) => {
                render::render_users(self.display.as_ref(), &profiles);
                self.display.set_status(StatusMessage::loaded(profiles.len()));
                info!(count = profiles.len(), "rendered profiles");
            }
            Err(err) => {
                render::clear_users(self.display.as_ref());
                self.display.set_status(StatusMessage::fetch_failed());
                error!(error = %err, "failed to fetch profiles");
            }
        }
    }
}
