use axum::http::HeaderMap;
use axum_extra::extract::cookie::CookieJar;

/// Reads the session token from the `Cookie` header(s).
///
/// Empty values count as absent.
pub fn session_token(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    CookieJar::from_headers(headers)
        .get(cookie_name)
        .map(|cookie| cookie.value().trim().to_string())
        .filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderValue, header};

    fn headers(cookie: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static(cookie));
        headers
    }

    #[test]
    fn test_finds_named_cookie_among_others() {
        let headers = headers("theme=dark; session=valid-token; lang=en");
        assert_eq!(
            session_token(&headers, "session").as_deref(),
            Some("valid-token")
        );
    }

    #[test]
    fn test_missing_or_empty_cookie() {
        assert_eq!(session_token(&HeaderMap::new(), "session"), None);
        assert_eq!(session_token(&headers("theme=dark"), "session"), None);
        assert_eq!(session_token(&headers("session="), "session"), None);
    }

    #[test]
    fn test_name_must_match_exactly() {
        let headers = headers("session_old=stale");
        assert_eq!(session_token(&headers, "session"), None);
    }
}
