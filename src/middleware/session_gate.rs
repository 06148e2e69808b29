//! Session-gated request admission.
//!
//! Requests whose path matches the static gate configuration must carry a
//! session the [`SessionProvider`] recognises. Without one they are sent to
//! the sign-in page on the same origin; with one they continue untouched.
//! Every other path goes straight through and the provider is never asked.
//!
//! A provider failure is not the same as "no session". It surfaces as a 500
//! instead of a redirect, so an outage cannot masquerade as a logged-out user.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{HeaderMap, Uri, header},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use nt_auth::{ProviderError, SessionProvider};
use nt_config::GateConfig;
use nt_core::AppError;
use tracing::{debug, error};

use crate::metrics::track_gate_decision;
use crate::state::AppState;

const X_FORWARDED_HOST: &str = "x-forwarded-host";
const X_FORWARDED_PROTO: &str = "x-forwarded-proto";

#[derive(Clone, Debug, PartialEq, Eq)]
enum Pattern {
    Exact(String),
    /// `/prefix/:path*`; an empty prefix matches every path.
    Prefix(String),
}

/// Static list of gated path patterns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteMatcher {
    patterns: Vec<Pattern>,
}

impl RouteMatcher {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|p| {
                let p = p.as_ref();
                match p.strip_suffix("/:path*") {
                    Some(prefix) => Pattern::Prefix(normalize(prefix).to_string()),
                    None => Pattern::Exact(normalize(p).to_string()),
                }
            })
            .collect();

        Self { patterns }
    }

    pub fn matches(&self, path: &str) -> bool {
        let path = normalize(path);
        self.patterns.iter().any(|pattern| match pattern {
            Pattern::Exact(exact) => path == exact,
            Pattern::Prefix(prefix) if prefix.is_empty() || prefix == "/" => true,
            Pattern::Prefix(prefix) => {
                path == prefix
                    || path
                        .strip_prefix(prefix.as_str())
                        .is_some_and(|rest| rest.starts_with('/'))
            }
        })
    }
}

/// Drops one trailing slash, except on the root path.
fn normalize(path: &str) -> &str {
    if path.len() > 1 {
        path.strip_suffix('/').unwrap_or(path)
    } else {
        path
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateDecision {
    PassThrough,
    Redirect { location: String },
}

impl GateDecision {
    pub fn label(&self) -> &'static str {
        match self {
            Self::PassThrough => "pass_through",
            Self::Redirect { .. } => "redirect",
        }
    }
}

#[derive(Clone)]
pub struct SessionGate {
    matcher: RouteMatcher,
    sign_in_path: String,
    base_url: String,
    provider: Arc<dyn SessionProvider>,
}

impl SessionGate {
    pub fn new(config: &GateConfig, base_url: &str, provider: Arc<dyn SessionProvider>) -> Self {
        Self {
            matcher: RouteMatcher::new(&config.matcher),
            sign_in_path: config.sign_in_path.clone(),
            base_url: base_url.to_string(),
            provider,
        }
    }

    pub fn applies_to(&self, path: &str) -> bool {
        self.matcher.matches(path)
    }

    /// Asks the provider about the request and decides. Does not check
    /// [`applies_to`](Self::applies_to); callers do that first.
    pub async fn decide(
        &self,
        uri: &Uri,
        headers: &HeaderMap,
    ) -> Result<GateDecision, ProviderError> {
        if self.provider.get_session(headers).await?.is_some() {
            return Ok(GateDecision::PassThrough);
        }

        let location = match request_origin(uri, headers, &self.base_url) {
            Some(origin) => format!("{}{}", origin, self.sign_in_path),
            None => self.sign_in_path.clone(),
        };

        Ok(GateDecision::Redirect { location })
    }
}

/// `scheme://authority` of the original request.
///
/// Taken from an absolute request URI when there is one, otherwise from
/// `Host` with `X-Forwarded-Proto` for the scheme, and finally from
/// `base_url`. `X-Forwarded-Host` is only honoured when it names the base
/// URL's host, and only `http`/`https` are accepted as forwarded schemes.
/// Without a forwarded scheme, a host equal to the base URL's host inherits
/// its scheme; any other host is assumed `http`.
pub fn request_origin(uri: &Uri, headers: &HeaderMap, base_url: &str) -> Option<String> {
    if let (Some(scheme), Some(authority)) = (uri.scheme_str(), uri.authority()) {
        return Some(format!("{}://{}", scheme, authority));
    }

    let base = split_origin(base_url);

    let host = header_str(headers, X_FORWARDED_HOST)
        .filter(|forwarded| base.is_some_and(|(_, authority)| authority == *forwarded))
        .or_else(|| header_str(headers, header::HOST.as_str()));
    if let Some(host) = host {
        let scheme = header_str(headers, X_FORWARDED_PROTO)
            .filter(|proto| matches!(*proto, "http" | "https"))
            .or_else(|| base.filter(|(_, authority)| *authority == host).map(|(scheme, _)| scheme))
            .unwrap_or("http");
        return Some(format!("{}://{}", scheme, host));
    }

    base.map(|(scheme, authority)| format!("{}://{}", scheme, authority))
}

/// First comma-separated value of a header, trimmed, if non-empty.
fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)?
        .to_str()
        .ok()?
        .split(',')
        .next()
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

fn split_origin(url: &str) -> Option<(&str, &str)> {
    let (scheme, rest) = url.split_once("://")?;
    let authority = rest.split('/').next().unwrap_or(rest);
    (!scheme.is_empty() && !authority.is_empty()).then_some((scheme, authority))
}

/// Middleware applying [`SessionGate`] to the router.
pub async fn session_gate(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let gate = &state.gate;
    if !gate.applies_to(req.uri().path()) {
        return Ok(next.run(req).await);
    }

    let decision = match gate.decide(req.uri(), req.headers()).await {
        Ok(decision) => decision,
        Err(e) => {
            error!(path = %req.uri().path(), error = %e, "Session lookup failed");
            track_gate_decision("error");
            return Err(AppError::upstream(e));
        }
    };
    track_gate_decision(decision.label());

    match decision {
        GateDecision::PassThrough => Ok(next.run(req).await),
        GateDecision::Redirect { location } => {
            debug!(path = %req.uri().path(), %location, "No session, redirecting to sign-in");
            Ok(Redirect::temporary(&location).into_response())
        }
    }
}
