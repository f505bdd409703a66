//! Credential extractor.

use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header};
use std::future::{Ready, ready};

use star_core::ports::AuthToken;

/// Cookie holding the session token set by the login flow.
pub const AUTH_COOKIE: &str = "auth-token";

/// Caller credential, if any.
///
/// Never rejects a request: whether a token is required is decided by the
/// post service. Looks at `Authorization: Bearer` first, then the
/// [`AUTH_COOKIE`] cookie.
#[derive(Debug, Clone)]
pub struct Credential(pub Option<AuthToken>);

impl Credential {
    pub fn token(&self) -> Option<&AuthToken> {
        self.0.as_ref()
    }
}

fn bearer_token(req: &HttpRequest) -> Option<AuthToken> {
    let value = req.headers().get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim_start().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    AuthToken::parse(token)
}

fn cookie_token(req: &HttpRequest) -> Option<AuthToken> {
    let cookie = req.cookie(AUTH_COOKIE)?;
    AuthToken::parse(cookie.value())
}

impl FromRequest for Credential {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token = bearer_token(req).or_else(|| cookie_token(req));
        ready(Ok(Credential(token)))
    }
}

#[cfg(test)]
mod tests {
    use actix_web::cookie::Cookie;
    use actix_web::test::TestRequest;

    use super::*;

    #[test]
    fn test_bearer_header_wins_over_cookie() {
        let req = TestRequest::default()
            .insert_header((header::AUTHORIZATION, "Bearer from-header"))
            .cookie(Cookie::new(AUTH_COOKIE, "from-cookie"))
            .to_http_request();
        let token = bearer_token(&req).or_else(|| cookie_token(&req)).unwrap();
        assert_eq!(token.expose(), "from-header");
    }

    #[test]
    fn test_cookie_fallback() {
        let req = TestRequest::default()
            .cookie(Cookie::new(AUTH_COOKIE, "from-cookie"))
            .to_http_request();
        assert_eq!(cookie_token(&req).unwrap().expose(), "from-cookie");
    }

    #[test]
    fn test_bearer_scheme_is_case_insensitive() {
        for header_value in ["bearer lower", "BEARER lower"] {
            let req = TestRequest::default()
                .insert_header((header::AUTHORIZATION, header_value))
                .to_http_request();
            assert_eq!(bearer_token(&req).unwrap().expose(), "lower");
        }
    }

    #[test]
    fn test_non_bearer_scheme_is_ignored() {
        let req = TestRequest::default()
            .insert_header((header::AUTHORIZATION, "Basic dXNlcjpwYXNz"))
            .to_http_request();
        assert!(bearer_token(&req).is_none());
    }
}
