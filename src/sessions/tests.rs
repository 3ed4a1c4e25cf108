use crate::sessions::extractors::{session_id_from_cookies, Session, SESSION_COOKIE};
use uuid::Uuid;

#[test]
fn test_session_id_is_found_among_other_cookies() {
    let id = Uuid::new_v4();
    let header = format!("theme=dark; {SESSION_COOKIE}={id}; lang=en");

    assert_eq!(session_id_from_cookies([header.as_str()].into_iter()), Some(id));
}

#[test]
fn test_session_id_in_second_cookie_header() {
    let id = Uuid::new_v4();
    let second = format!("{SESSION_COOKIE}={id}");

    assert_eq!(
        session_id_from_cookies(["theme=dark", second.as_str()].into_iter()),
        Some(id)
    );
}

#[test]
fn test_malformed_session_id_is_ignored() {
    let header = format!("{SESSION_COOKIE}=not-a-uuid");

    assert_eq!(session_id_from_cookies([header.as_str()].into_iter()), None);
    assert_eq!(session_id_from_cookies(std::iter::empty()), None);
}

#[test]
fn test_set_cookie_header() {
    let session = Session { id: Uuid::nil() };

    assert_eq!(
        session.set_cookie_header(),
        "near_me_session=00000000-0000-0000-0000-000000000000; Path=/; HttpOnly; SameSite=Lax"
    );
}
