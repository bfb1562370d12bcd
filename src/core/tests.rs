use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use crate::core::endpoints;
use crate::core::session::{
    MemoryStore, Role, SessionGuard, SessionStore, SessionVerdict, decode_token, evaluate_token,
    subject_id_from_token,
};
use crate::core::types::{LoanListResponse, format_currency, format_date};

/// Build a three-segment token with the given JSON payload and a
/// throwaway signature, the way the backend shapes them.
fn make_token(payload: &str) -> String {
    format!(
        "{}.{}.sig",
        URL_SAFE_NO_PAD.encode(b"{\"alg\":\"HS256\",\"typ\":\"JWT\"}"),
        URL_SAFE_NO_PAD.encode(payload.as_bytes()),
    )
}

const NOW: i64 = 1_700_000_000;

#[test]
fn test_absent_token_is_no_token() {
    assert_eq!(evaluate_token(None, NOW), SessionVerdict::NoToken);
}

#[test]
fn test_two_segment_token_is_malformed() {
    assert_eq!(
        evaluate_token(Some("abc.def"), NOW),
        SessionVerdict::Malformed
    );
}

#[test]
fn test_four_segment_token_is_malformed() {
    assert_eq!(
        evaluate_token(Some("a.b.c.d"), NOW),
        SessionVerdict::Malformed
    );
}

#[test]
fn test_unparsable_payload_is_malformed() {
    // Valid Base64URL bytes that are not JSON
    let token = format!("h.{}.s", URL_SAFE_NO_PAD.encode(b"not json"));
    assert_eq!(evaluate_token(Some(&token), NOW), SessionVerdict::Malformed);

    // Not Base64URL at all
    assert_eq!(
        evaluate_token(Some("h.!!!.s"), NOW),
        SessionVerdict::Malformed
    );
}

#[test]
fn test_past_exp_is_expired() {
    let token = make_token("{\"exp\": 1}");
    assert_eq!(evaluate_token(Some(&token), NOW), SessionVerdict::Expired);
}

#[test]
fn test_future_exp_is_valid() {
    let token = make_token(&format!("{{\"exp\": {}}}", NOW + 3600));
    assert_eq!(evaluate_token(Some(&token), NOW), SessionVerdict::Valid);
}

#[test]
fn test_exp_equal_to_now_is_still_valid() {
    // Expiry is strictly-less-than; the boundary second passes
    let token = make_token(&format!("{{\"exp\": {NOW}}}"));
    assert_eq!(evaluate_token(Some(&token), NOW), SessionVerdict::Valid);
}

#[test]
fn test_missing_exp_never_expires() {
    let token = make_token("{\"id\": \"u1\"}");
    assert_eq!(evaluate_token(Some(&token), NOW), SessionVerdict::Valid);
}

#[test]
fn test_guard_clears_storage_on_expired() {
    let token = make_token("{\"exp\": 1}");
    let guard = SessionGuard::new(MemoryStore::with_token(&token));

    assert_eq!(guard.check_at(NOW), SessionVerdict::Expired);
    assert_eq!(guard.store().read(), None);
}

#[test]
fn test_guard_clears_storage_on_malformed() {
    let guard = SessionGuard::new(MemoryStore::with_token("abc.def"));

    assert_eq!(guard.check_at(NOW), SessionVerdict::Malformed);
    assert_eq!(guard.store().read(), None);
}

#[test]
fn test_guard_keeps_valid_token() {
    let token = make_token(&format!("{{\"exp\": {}}}", NOW + 3600));
    let guard = SessionGuard::new(MemoryStore::with_token(&token));

    assert_eq!(guard.check_at(NOW), SessionVerdict::Valid);
    assert_eq!(guard.store().read(), Some(token));
}

#[test]
fn test_guard_does_not_touch_storage_when_absent() {
    let guard = SessionGuard::new(MemoryStore::new());
    assert_eq!(guard.check_at(NOW), SessionVerdict::NoToken);
    assert_eq!(guard.store().read(), None);
}

#[test]
fn test_expired_check_is_idempotent() {
    let token = make_token("{\"exp\": 1}");
    let guard = SessionGuard::new(MemoryStore::with_token(&token));

    // First pass expires and clears; second pass sees the empty slot
    assert_eq!(guard.check_at(NOW), SessionVerdict::Expired);
    assert_eq!(guard.check_at(NOW), SessionVerdict::NoToken);
    assert!(!guard.is_valid_at(NOW));
}

#[test]
fn test_decode_token_extracts_claims() {
    let token = make_token(&format!(
        "{{\"exp\": {}, \"id\": \"u1\", \"role\": \"customer\"}}",
        NOW + 3600
    ));

    let claims = decode_token(&token).unwrap();
    assert_eq!(claims.exp, Some(NOW + 3600));
    assert_eq!(claims.id.as_deref(), Some("u1"));
    assert_eq!(claims.role(), Role::Customer);
    assert_eq!(claims.subject_id(), Some("u1"));
}

#[test]
fn test_decode_token_fails_closed() {
    assert!(decode_token("").is_none());
    assert!(decode_token("one-segment").is_none());
    assert!(decode_token("h.%%%.s").is_none());
}

#[test]
fn test_subject_id_fallback_order() {
    // `id` wins even when the others are present
    let token = make_token("{\"id\": \"u1\", \"customerId\": \"c2\", \"sub\": \"s3\"}");
    assert_eq!(subject_id_from_token(&token).as_deref(), Some("u1"));

    let token = make_token("{\"customerId\": \"c2\", \"sub\": \"s3\"}");
    assert_eq!(subject_id_from_token(&token).as_deref(), Some("c2"));

    let token = make_token("{\"sub\": \"s3\"}");
    assert_eq!(subject_id_from_token(&token).as_deref(), Some("s3"));

    let token = make_token("{}");
    assert_eq!(subject_id_from_token(&token), None);
}

#[test]
fn test_role_claim_mapping() {
    assert_eq!(Role::from_claim(Some("bank")), Role::Bank);
    assert_eq!(Role::from_claim(Some("officer")), Role::Bank);
    assert_eq!(Role::from_claim(Some("customer")), Role::Customer);
    assert_eq!(Role::from_claim(Some("anything")), Role::Customer);
    assert_eq!(Role::from_claim(None), Role::Customer);
}

#[test]
fn test_loan_detail_endpoint_variants() {
    assert_eq!(endpoints::loan_by_id("l1", None), "/api/loans/l1");
    assert_eq!(
        endpoints::loan_by_id("l1", Some("c9")),
        "/api/loans/l1/customerId/c9"
    );
    assert_eq!(
        endpoints::repayment_history("l1"),
        "/api/loans/l1/repayment_history"
    );
    assert_eq!(endpoints::approve_loan("l1"), "/api/banks/loans/l1/approve");
    assert_eq!(endpoints::reject_loan("l1"), "/api/banks/loans/l1/reject");
}

#[test]
fn test_loan_list_response_shapes() {
    let wrapped: LoanListResponse =
        serde_json::from_str("{\"loans\": [{\"id\": \"l1\", \"amount\": 10.0}]}").unwrap();
    assert_eq!(wrapped.into_loans().len(), 1);

    let data: LoanListResponse =
        serde_json::from_str("{\"data\": [{\"id\": \"l1\"}, {\"id\": \"l2\"}]}").unwrap();
    assert_eq!(data.into_loans().len(), 2);

    let empty: LoanListResponse = serde_json::from_str("{}").unwrap();
    assert!(empty.into_loans().is_empty());
}

#[test]
fn test_currency_and_date_formatting() {
    assert_eq!(format_currency(0.0), "$0.00");
    assert_eq!(format_currency(1234.5), "$1,234.50");
    assert_eq!(format_currency(1_000_000.0), "$1,000,000.00");
    assert_eq!(format_currency(-42.0), "-$42.00");

    assert_eq!(format_date(Some("2025-04-01T12:00:00Z")), "2025-04-01");
    assert_eq!(format_date(Some("n/a")), "n/a");
    assert_eq!(format_date(None), "N/A");
}
