use std::{sync::Arc, time::Instant};

use axum::{
	body::{Body, HttpBody},
	extract::State,
	http::{
		HeaderMap, HeaderValue, Method, Request, StatusCode,
		header::{
			ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
			ACCESS_CONTROL_ALLOW_ORIGIN, ORIGIN, VARY,
		},
	},
	middleware::Next,
	response::{IntoResponse, Response},
};
use color_eyre::Result;

use medcat_config::Cors;

#[derive(Debug, Clone)]
enum AllowedOrigins {
	Any,
	List(Vec<HeaderValue>),
}

/// Pre-rendered CORS response headers.
#[derive(Debug, Clone)]
pub struct CorsPolicy {
	origins: AllowedOrigins,
	methods: HeaderValue,
	headers: HeaderValue,
}
impl CorsPolicy {
	pub fn new(cfg: &Cors) -> Result<Self> {
		let origins = if cfg.allowed_origins.iter().any(|origin| origin.trim() == "*") {
			AllowedOrigins::Any
		} else {
			AllowedOrigins::List(
				cfg.allowed_origins
					.iter()
					.map(|origin| HeaderValue::from_str(origin.trim()))
					.collect::<Result<_, _>>()?,
			)
		};
		let methods = HeaderValue::from_str(&cfg.allowed_methods.join(", "))?;
		let headers = HeaderValue::from_str(&cfg.allowed_headers.join(", "))?;

		Ok(Self { origins, methods, headers })
	}

	fn apply(&self, request_origin: Option<&HeaderValue>, out: &mut HeaderMap) {
		match &self.origins {
			AllowedOrigins::Any => {
				out.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
			},
			AllowedOrigins::List(allowed) => {
				out.append(VARY, HeaderValue::from_static("origin"));

				let Some(origin) = request_origin.filter(|origin| allowed.contains(origin)) else {
					return;
				};

				out.insert(ACCESS_CONTROL_ALLOW_ORIGIN, origin.clone());
			},
		}

		out.insert(ACCESS_CONTROL_ALLOW_METHODS, self.methods.clone());
		out.insert(ACCESS_CONTROL_ALLOW_HEADERS, self.headers.clone());
	}
}

/// Adds CORS headers to every response and answers preflight requests directly.
pub async fn cors(
	State(policy): State<Arc<CorsPolicy>>,
	req: Request<Body>,
	next: Next,
) -> Response {
	let origin = req.headers().get(ORIGIN).cloned();
	let mut response = if req.method() == Method::OPTIONS {
		StatusCode::NO_CONTENT.into_response()
	} else {
		next.run(req).await
	};

	policy.apply(origin.as_ref(), response.headers_mut());

	response
}

/// One access-log line per request: method, uri, status, body size and latency.
pub async fn log_request(req: Request<Body>, next: Next) -> Response {
	let method = req.method().clone();
	let uri = req.uri().clone();
	let started = Instant::now();
	let response = next.run(req).await;
	let elapsed_ms = started.elapsed().as_secs_f64() * 1_000.0;
	let content_length = response.body().size_hint().exact();

	tracing::info!(
		%method,
		%uri,
		status = response.status().as_u16(),
		content_length,
		elapsed_ms,
		"Request handled."
	);

	response
}
