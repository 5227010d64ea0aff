//! Tests for the user data models.

use super::*;
use chrono::TimeZone;
use rstest::rstest;
use serde_json::json;

fn sample_record() -> UserRecord {
    UserRecord {
        id: 7,
        first_name: "Ana".to_owned(),
        last_name: "López".to_owned(),
        email: "ana.lopez@example.com".to_owned(),
        cuit: "27-23456789-4".to_owned(),
        birth_date: Utc.with_ymd_and_hms(1990, 5, 1, 0, 0, 0).single(),
        address: Some("Av. Siempre Viva 742".to_owned()),
        phone_number: None,
        is_deleted: false,
    }
}

#[rstest]
fn record_deserializes_camel_case_wire_shape() {
    let record: UserRecord = serde_json::from_value(json!({
        "id": 7,
        "firstName": "Ana",
        "lastName": "López",
        "email": "ana.lopez@example.com",
        "cuit": "27-23456789-4",
        "birthDate": "1990-05-01T00:00:00Z",
        "address": "Av. Siempre Viva 742",
        "isDeleted": false,
    }))
    .expect("wire shape deserializes");

    assert_eq!(record, sample_record());
}

#[rstest]
fn record_tolerates_absent_optional_fields() {
    let record: UserRecord = serde_json::from_value(json!({
        "id": 3,
        "firstName": "Juan",
        "lastName": "Pérez",
        "email": "juan@example.com",
        "cuit": "20-12345678-9",
    }))
    .expect("minimal shape deserializes");

    assert_eq!(record.birth_date, None);
    assert_eq!(record.address, None);
    assert_eq!(record.phone_number, None);
    assert!(!record.is_deleted);
}

#[rstest]
fn draft_serializes_with_capitalised_id() {
    let draft = UserDraft {
        id: 7,
        first_name: "Ana".to_owned(),
        ..UserDraft::blank()
    };

    let value = serde_json::to_value(&draft).expect("draft serializes");
    assert_eq!(value.get("Id"), Some(&json!(7)));
    assert_eq!(value.get("firstName"), Some(&json!("Ana")));
    assert_eq!(value.get("id"), None);
}

#[rstest]
fn draft_from_record_strips_time_of_day() {
    let draft = UserDraft::from(sample_record());

    assert_eq!(draft.birth_date, "1990-05-01");
    assert_eq!(draft.id, 7);
    assert_eq!(draft.address, "Av. Siempre Viva 742");
    assert_eq!(draft.phone_number, "");
    assert!(draft.is_persisted());
}

#[rstest]
fn draft_from_record_maps_missing_birth_date_to_empty() {
    let record = UserRecord {
        birth_date: None,
        ..sample_record()
    };

    assert_eq!(UserDraft::from(record).birth_date, "");
}

#[rstest]
fn blank_draft_is_not_persisted() {
    let draft = UserDraft::blank();

    assert_eq!(draft.id, 0);
    assert!(!draft.is_persisted());
    assert!(draft.first_name.is_empty());
    assert!(draft.birth_date.is_empty());
}
