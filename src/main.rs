#![windows_subsystem = "windows"]
mod client;
mod config;
mod controller;
mod error;
mod input;
mod models;
mod render;
mod status;
mod ui;
#[cfg(test)]
mod testing;
slint::include_modules!();

use std::rc::Rc;
use std::sync::Arc;

use anyhow::Context;
use slint::{ModelRc, VecModel};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::client::RandomUserClient;
use crate::config::AppConfig;
use crate::controller::UserController;
use crate::ui::{SlintDisplay, SlintForm};

fn main() -> anyhow::Result<()> {
    // Load .env variables
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;
    init_tracing(config.log_json);

    // Shared HTTP Client
    let http_client = client::build_client()?;

    // Background tokio runtime for async HTTP
    let rt = Arc::new(tokio::runtime::Runtime::new().context("Failed to start tokio runtime")?);

    // Create the UI
    let app = AppWindow::new().context("Failed to create the main window")?;
    app.set_cards(ModelRc::from(Rc::new(VecModel::<CardItem>::default())));

    let display = Arc::new(SlintDisplay::new(
        app.as_weak(),
        http_client.clone(),
        rt.handle().clone(),
    ));
    let source = Arc::new(RandomUserClient::new(http_client, config.api_url.clone()));
    let controller = Arc::new(UserController::new(source, display));

    info!(api_url = %config.api_url, "starting random user client");

    // =============================================
    //  CALLBACK: count-edited (helper text)
    // =============================================
    {
        let app_weak = app.as_weak();
        let controller = controller.clone();

        app.on_count_edited(move || {
            if let Some(app) = app_weak.upgrade() {
                controller.count_edited(&SlintForm(&app));
            }
        });
    }

    // =============================================
    //  CALLBACK: submit-requested (fetch users)
    // =============================================
    {
        let app_weak = app.as_weak();
        let controller = controller.clone();
        let rt = rt.clone();

        app.on_submit_requested(move || {
            let Some(app) = app_weak.upgrade() else { return };
            let Some(submission) = controller.prepare(&SlintForm(&app)) else {
                return;
            };

            let controller = controller.clone();
            rt.spawn(async move {
                controller.complete(submission).await;
            });
        });
    }

    // =============================================
    //  CALLBACK: clear-requested
    // =============================================
    {
        let controller = controller.clone();

        app.on_clear_requested(move || {
            controller.clear();
        });
    }

    // Run the Slint event loop
    app.run()?;

    Ok(())
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}
