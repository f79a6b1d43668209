use std::convert::Infallible;
use std::future::Future;
use std::pin::Pin;

use anyhow::{ensure, Context, Result};
use hyper::service::{make_service_fn, service_fn};
use hyper::{Body, Request, Response, Server};
use tokio::sync::mpsc::{channel, Sender};
use tokio::sync::oneshot;

type RequestHandler =
    fn(
        Request<Body>,
        Sender<String>,
    ) -> Pin<Box<dyn Future<Output = Result<Response<Body>, Infallible>> + Send>>;

/// Serves `127.0.0.1:port` until `request_handler` sends a value or the timeout hits.
pub async fn listen_for_callback(
    port: u16,
    timeout_min: u16,
    request_handler: RequestHandler,
) -> Result<String> {
    let (sender, mut receiver) = channel::<String>(1);

    let timeouter = sender.clone();

    let timeout = tokio::spawn(async move {
        let timeout = u64::from(timeout_min) * 60;

        tokio::time::sleep(tokio::time::Duration::from_secs(timeout)).await;
        timeouter.send("timeout".to_string()).await.ok();
    });

    let service = make_service_fn(move |_| {
        let sender = sender.clone();

        async move {
            Ok::<_, Infallible>(service_fn(move |req: Request<Body>| {
                request_handler(req, sender.clone())
            }))
        }
    });

    let address = ([127, 0, 0, 1], port).into();

    let (shutdown, shutdown_signal) = oneshot::channel::<()>();

    let server = Server::try_bind(&address)
        .with_context(|| format!("Could not listen on port {port}"))?
        .serve(service)
        .with_graceful_shutdown(async {
            shutdown_signal.await.ok();
        });

    log::debug!("Waiting for the callback on {address}");

    let runtime = tokio::spawn(async move {
        if let Err(error) = server.await {
            log::error!("Server error: {error}");
        }

        timeout.abort();
    });

    let response = receiver.recv().await;

    // let the browser get its response before stopping
    shutdown.send(()).ok();
    runtime.await.ok();

    ensure!(
        Some("timeout".to_string()) != response,
        "Timed out after {timeout_min} minutes"
    );

    response.context("Callback server stopped unexpectedly")
}
