use std::collections::HashMap;

use super::*;

fn query(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
}

fn full_query() -> HashMap<String, String> {
    query(&[
        ("id", "123456"),
        ("first_name", "Ada"),
        ("last_name", "Lovelace"),
        ("username", "ada"),
        ("photo_url", "https://t.me/i/userpic/ada.jpg"),
        ("auth_date", "1700000000"),
        ("hash", "deadbeef"),
    ])
}

#[test]
fn parses_complete_payload() {
    let params = full_query();
    let auth = telegram_auth_from_query(|k| params.get(k).cloned()).unwrap();
    assert_eq!(auth.id, 123_456);
    assert_eq!(auth.first_name, "Ada");
    assert_eq!(auth.last_name, "Lovelace");
    assert_eq!(auth.username, "ada");
    assert_eq!(auth.photo_url, "https://t.me/i/userpic/ada.jpg");
    assert_eq!(auth.auth_date, 1_700_000_000);
    assert_eq!(auth.hash, "deadbeef");
}

#[test]
fn optional_fields_default_to_empty() {
    let params = query(&[("id", "1"), ("first_name", "A"), ("auth_date", "2"), ("hash", "h")]);
    let auth = telegram_auth_from_query(|k| params.get(k).cloned()).unwrap();
    assert!(auth.last_name.is_empty());
    assert!(auth.username.is_empty());
    assert!(auth.photo_url.is_empty());
}

#[test]
fn missing_required_field_is_incomplete() {
    for key in ["id", "first_name", "auth_date", "hash"] {
        let mut params = full_query();
        params.remove(key);
        assert_eq!(
            telegram_auth_from_query(|k| params.get(k).cloned()),
            Err(INCOMPLETE_PAYLOAD),
            "missing {key}"
        );
    }
}

#[test]
fn blank_required_field_is_incomplete() {
    let mut params = full_query();
    params.insert("first_name".to_owned(), "   ".to_owned());
    assert_eq!(telegram_auth_from_query(|k| params.get(k).cloned()), Err(INCOMPLETE_PAYLOAD));
}

#[test]
fn non_numeric_id_or_date_is_invalid() {
    let mut params = full_query();
    params.insert("id".to_owned(), "abc".to_owned());
    assert_eq!(telegram_auth_from_query(|k| params.get(k).cloned()), Err(INVALID_PAYLOAD));

    let mut params = full_query();
    params.insert("auth_date".to_owned(), "yesterday".to_owned());
    assert_eq!(telegram_auth_from_query(|k| params.get(k).cloned()), Err(INVALID_PAYLOAD));
}

#[test]
fn widget_payload_requires_non_empty_hash() {
    let params = full_query();
    assert!(has_widget_payload(|k| params.get(k).cloned()));

    let params = query(&[("hash", "")]);
    assert!(!has_widget_payload(|k| params.get(k).cloned()));

    let params = query(&[]);
    assert!(!has_widget_payload(|k| params.get(k).cloned()));
}
