use std::rc::Rc;

use anyhow::{Context, Result};
use slint::{Model, ModelRc, VecModel, Weak};
use tokio::runtime::Handle;
use tracing::debug;

use crate::input::FormSurface;
use crate::render::{Card, DisplaySurface};
use crate::status::{Severity, StatusMessage};
use crate::{AppWindow, CardItem, StatusKind};

/// Edge length, in pixels, of the square avatar thumbnails.
pub const AVATAR_SIZE: u32 = 72;

/// Combo box entry that stands for "no gender filter".
pub const ANY_GENDER: &str = "Any";

/// Display surface backed by the Slint window.
///
/// Calls may come from any thread; every mutation is queued onto the Slint
/// event loop, so they land in the order they were made.
pub struct SlintDisplay {
    window: Weak<AppWindow>,
    http: reqwest::Client,
    runtime: Handle,
}

impl SlintDisplay {
    pub fn new(window: Weak<AppWindow>, http: reqwest::Client, runtime: Handle) -> Self {
        Self {
            window,
            http,
            runtime,
        }
    }

    fn update(&self, func: impl FnOnce(AppWindow) + Send + 'static) {
        if let Err(err) = self.window.upgrade_in_event_loop(func) {
            debug!(error = %err, "window closed, dropping display update");
        }
    }

    fn load_avatar(&self, url: String) {
        if url.is_empty() {
            return;
        }

        let http = self.http.clone();
        let window = self.window.clone();

        self.runtime.spawn(async move {
            match download_avatar_pixels(&http, &url, AVATAR_SIZE).await {
                Ok((pixels, w, h)) => {
                    let _ = window.upgrade_in_event_loop(move |app| {
                        with_cards(&app, |cards| attach_avatar(cards, &url, &pixels, w, h));
                    });
                }
                Err(err) => debug!(%url, error = %err, "avatar download failed"),
            }
        });
    }
}

impl DisplaySurface for SlintDisplay {
    fn clear_cards(&self) {
        self.update(|app| with_cards(&app, |cards| cards.set_vec(Vec::new())));
    }

    fn append_card(&self, card: Card) {
        let url = card.picture_url.clone();
        self.update(move |app| with_cards(&app, |cards| cards.push(card_item(card))));
        self.load_avatar(url);
    }

    fn set_status(&self, status: StatusMessage) {
        self.update(move |app| {
            app.set_status_kind(match status.severity {
                Severity::Info => StatusKind::Info,
                Severity::Error => StatusKind::Error,
            });
            app.set_status_text(status.text.into());
        });
    }
}

/// Form surface over a live window. Only usable on the UI thread.
pub struct SlintForm<'a>(pub &'a AppWindow);

impl FormSurface for SlintForm<'_> {
    fn count_text(&self) -> String {
        self.0.get_count_text().to_string()
    }

    fn gender_text(&self) -> String {
        let choice = self.0.get_gender_choice();
        if choice.as_str() == ANY_GENDER {
            String::new()
        } else {
            choice.to_string()
        }
    }

    fn set_count_help(&self, text: &str) {
        self.0.set_count_help(text.into());
    }
}

fn card_item(card: Card) -> CardItem {
    CardItem {
        full_name: card.full_name.into(),
        username: card.username.into(),
        email: card.email.into(),
        phone: card.phone.into(),
        location: card.location.into(),
        picture_url: card.picture_url.into(),
        avatar_alt: card.picture_alt.into(),
        avatar: slint::Image::default(),
    }
}

/// Runs `func` against the window's card model, installing one if the
/// window does not hold a `VecModel` yet.
fn with_cards(app: &AppWindow, func: impl FnOnce(&VecModel<CardItem>)) {
    let cards = app.get_cards();
    if let Some(model) = cards.as_any().downcast_ref::<VecModel<CardItem>>() {
        func(model);
        return;
    }

    let model = Rc::new(VecModel::<CardItem>::default());
    func(&model);
    app.set_cards(ModelRc::from(model));
}

fn attach_avatar(cards: &VecModel<CardItem>, url: &str, pixels: &[u8], w: u32, h: u32) {
    let buf = slint::SharedPixelBuffer::<slint::Rgba8Pixel>::clone_from_slice(pixels, w, h);
    let avatar = slint::Image::from_rgba8(buf);

    for row in 0..cards.row_count() {
        if let Some(mut item) = cards.row_data(row) {
            if item.picture_url.as_str() == url {
                item.avatar = avatar.clone();
                cards.set_row_data(row, item);
            }
        }
    }
}

/// Downloads an avatar and decodes it into raw RGBA pixels of `size`×`size`.
pub async fn download_avatar_pixels(
    client: &reqwest::Client,
    url: &str,
    size: u32,
) -> Result<(Vec<u8>, u32, u32)> {
    let bytes = client
        .get(url)
        .send()
        .await
        .and_then(|response| response.error_for_status())
        .context("Failed to request avatar")?
        .bytes()
        .await
        .context("Failed to read avatar body")?;

    let decoded = image::load_from_memory(&bytes).context("Failed to decode avatar")?;

    // thumbnail_exact is cheaper than resize_exact and keeps memory flat
    // when the server sends a larger picture than we display.
    let rgba = decoded.thumbnail_exact(size, size).to_rgba8();
    let (w, h) = rgba.dimensions();

    Ok((rgba.into_raw(), w, h))
}
