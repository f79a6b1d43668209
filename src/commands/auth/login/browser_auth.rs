use std::convert::Infallible;
use std::future::Future;
use std::pin::Pin;

use anyhow::{Context, Result};
use hyper::{Body, Request, Response, StatusCode};
use reqwest::Url;
use tokio::sync::mpsc::Sender;

use super::util::{is_loopback, CallbackParams};
use crate::config::{Config, CALLBACK_PATH, CALLBACK_TIMEOUT_MIN};
use crate::utils::browser::listen_for_callback;
use crate::utils::urlify;

pub async fn browser_login(config: &Config, auth_url: &Url) -> Result<CallbackParams> {
    let port = config
        .app_url
        .port_or_known_default()
        .filter(|_| is_loopback(&config.app_url));

    if webbrowser::open(auth_url.as_str()).is_ok() {
        log::info!("Opening browser to: {}", urlify(auth_url.as_str()));

        if let Some(port) = port {
            let query = listen_for_callback(port, CALLBACK_TIMEOUT_MIN, request_handler)
                .await
                .context("Error while waiting for the login callback")?;

            return Ok(CallbackParams::from_query(&query));
        }
    } else {
        log::info!("Could not open a web browser.");
        log::info!("Please open {} to log in.", urlify(auth_url.as_str()));
    }

    // fallback to pasting the page the browser ended up on
    let input = dialoguer::Input::<String>::new()
        .with_prompt("Paste the URL you were redirected to")
        .interact_text()?;

    Ok(CallbackParams::from_input(&input))
}

fn request_handler(
    req: Request<Body>,
    sender: Sender<String>,
) -> Pin<Box<dyn Future<Output = Result<Response<Body>, Infallible>> + Send>> {
    Box::pin(async move {
        if req.uri().path() != CALLBACK_PATH {
            return Ok(Response::builder()
                .status(StatusCode::NOT_FOUND)
                .body(Body::empty())
                .unwrap_or_default());
        }

        let query = req.uri().query().unwrap_or_default().to_string();
        let authorized = CallbackParams::from_query(&query).token().is_some();

        // hand it to the login command, which decides what to keep
        sender.send(query).await.ok();

        let body = if authorized {
            "Authentication complete. You can close this window and return to the terminal."
        } else {
            "Authentication failed. Return to the terminal and try again."
        };

        Ok(Response::new(body.into()))
    })
}
