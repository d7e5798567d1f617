use super::*;

#[test]
fn join_url_concatenates_without_rewriting() {
    assert_eq!(join_url("http://localhost:8080", "/auth/api/login"), "http://localhost:8080/auth/api/login");
    assert_eq!(join_url("", "/auth/api/login"), "/auth/api/login");
    assert_eq!(join_url("http://h/", "/x"), "http://h//x");
}

#[test]
fn api_url_uses_configured_base() {
    assert_eq!(api_url(LOGIN_PATH), format!("{API_BASE_URL}/auth/api/login"));
    assert!(api_url(REGISTER_PATH).ends_with("/auth/api/register"));
}

#[test]
fn status_error_uses_api_error_body() {
    let err = status_error(401, r#"{"error":"Invalid Telegram authorization"}"#);
    assert_eq!(err, ApiError::Status { status: 401, message: "Invalid Telegram authorization".to_owned() });
    assert_eq!(err.to_string(), "Invalid Telegram authorization (status 401)");
}

#[test]
fn status_error_falls_back_on_unparseable_body() {
    let err = status_error(502, "<html>bad gateway</html>");
    assert_eq!(err, ApiError::Status { status: 502, message: "request failed: 502".to_owned() });
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_are_unavailable_outside_browser() {
    let auth = TelegramAuth {
        id: 1,
        first_name: "A".to_owned(),
        last_name: String::new(),
        username: String::new(),
        photo_url: String::new(),
        auth_date: 1,
        hash: "h".to_owned(),
    };
    // Futures complete immediately without the hydrate feature.
    let login = std::pin::pin!(login(&auth));
    let register = std::pin::pin!(register(&auth));
    let waker = std::task::Waker::noop();
    let mut cx = std::task::Context::from_waker(waker);
    assert_eq!(login.poll(&mut cx), std::task::Poll::Ready(Err(ApiError::Unavailable)));
    assert_eq!(register.poll(&mut cx), std::task::Poll::Ready(Err(ApiError::Unavailable)));
}
