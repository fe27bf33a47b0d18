use bytes::Bytes;
use serde::Serialize;
use std::convert::Infallible;
use std::path::PathBuf;
use warp::filters::BoxedFilter;
use warp::http::StatusCode;
use warp::{Filter, Rejection, Reply};

use super::weather::{self, Upstream};

/// Largest accepted lookup body.
const MAX_BODY_BYTES: u64 = 1024 * 16;

pub async fn run(address: std::net::SocketAddr, upstream: Upstream, static_dir: Option<PathBuf>) {
    log::info!("Listening on {}", address);
    if let Some(dir) = &static_dir {
        log::info!("Serving client files from {}", dir.display());
    }

    warp::serve(routes(upstream, static_dir)).run(address).await
}

/// API routes, plus the client files on any other GET when `static_dir` is set.
pub fn routes(
    upstream: Upstream,
    static_dir: Option<PathBuf>,
) -> impl Filter<Extract = (impl Reply,), Error = Infallible> + Clone {
    let routes: BoxedFilter<(Box<dyn Reply>,)> = match static_dir {
        Some(dir) => api(upstream)
            .or(warp::get().and(warp::fs::dir(dir)))
            .map(|reply| Box::new(reply) as Box<dyn Reply>)
            .boxed(),
        None => api(upstream)
            .map(|reply| Box::new(reply) as Box<dyn Reply>)
            .boxed(),
    };

    routes.recover(rejection)
}

fn api(upstream: Upstream) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let health_route = warp::path!("health")
        .and(warp::get())
        .map(|| StatusCode::OK);

    let weather_route = warp::path!("api" / "weather")
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::bytes())
        .and(with_upstream(upstream))
        .and_then(lookup_weather);

    health_route.or(weather_route)
}

fn with_upstream(
    upstream: Upstream,
) -> impl Filter<Extract = (Upstream,), Error = Infallible> + Clone {
    warp::any().map(move || upstream.clone())
}

pub async fn lookup_weather(body: Bytes, upstream: Upstream) -> Result<impl Reply, Rejection> {
    let (status, envelope) = weather::relay(&upstream, &body).await;
    Ok(warp::reply::with_status(warp::reply::json(&envelope), status))
}

#[derive(Serialize)]
struct ErrorMessage {
    success: bool,
    message: String,
}

pub async fn rejection(err: warp::Rejection) -> Result<impl Reply, Infallible> {
    let (code, message) = if err.is_not_found() {
        (StatusCode::NOT_FOUND, "Not found.")
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed.")
    } else if err.find::<warp::reject::PayloadTooLarge>().is_some() {
        (StatusCode::PAYLOAD_TOO_LARGE, "Payload too large.")
    } else {
        log::error!("Error: {:?}", err);
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error.")
    };

    let json = warp::reply::json(&ErrorMessage {
        success: false,
        message: message.into(),
    });

    Ok(warp::reply::with_status(json, code))
}
