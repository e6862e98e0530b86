/**
 * Session Cookies
 *
 * Session tokens are mirrored into HTTP-only cookies so browsers never have
 * to store them in script-visible storage.
 *
 * | Cookie          | Path        | Max-Age            |
 * |-----------------|-------------|--------------------|
 * | `access_token`  | `/`         | access token TTL   |
 * | `refresh_token` | `/api/auth` | refresh token TTL  |
 *
 * Both are `HttpOnly; SameSite=Lax`, and `Secure` unless disabled in config.
 */

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

use crate::backend::auth::sessions::{IssuedToken, TokenKind};

/// Name of the access token cookie
pub const ACCESS_COOKIE: &str = "access_token";

/// Name of the refresh token cookie
pub const REFRESH_COOKIE: &str = "refresh_token";

const ACCESS_PATH: &str = "/";
const REFRESH_PATH: &str = "/api/auth";

fn session_cookie(name: &'static str, path: &'static str, value: String, kind: TokenKind, secure: bool) -> Cookie<'static> {
    Cookie::build((name, value))
        .path(path)
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .max_age(Duration::seconds(kind.ttl_secs()))
        .build()
}

fn removal_cookie(name: &'static str, path: &'static str, secure: bool) -> Cookie<'static> {
    let mut cookie = Cookie::build((name, ""))
        .path(path)
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .build();
    cookie.make_removal();
    cookie
}

/// Set only the access cookie
pub fn with_access(jar: CookieJar, access: &IssuedToken, secure: bool) -> CookieJar {
    jar.add(session_cookie(
        ACCESS_COOKIE,
        ACCESS_PATH,
        access.token.clone(),
        TokenKind::Access,
        secure,
    ))
}

/// Set both session cookies
pub fn with_session(jar: CookieJar, access: &IssuedToken, refresh: &IssuedToken, secure: bool) -> CookieJar {
    with_access(jar, access, secure).add(session_cookie(
        REFRESH_COOKIE,
        REFRESH_PATH,
        refresh.token.clone(),
        TokenKind::Refresh,
        secure,
    ))
}

/// Expire both session cookies, whether or not the client sent them
pub fn clear_session(jar: CookieJar, secure: bool) -> CookieJar {
    jar.add(removal_cookie(ACCESS_COOKIE, ACCESS_PATH, secure))
        .add(removal_cookie(REFRESH_COOKIE, REFRESH_PATH, secure))
}
