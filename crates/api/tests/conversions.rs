//! Round-trip behaviour of the policy and instance converters.

use assert_matches::assert_matches;
use chrono::{TimeZone, Utc};
use preheat_api::convert::{instance, policy};
use preheat_api::payload::{InstancePayload, PreheatPolicyPayload};
use preheat_core::error::CoreError;
use preheat_core::models::encoded::Encoded;
use preheat_core::models::instance::{Instance, HEALTHY_STATUS, UNKNOWN_STATUS};
use preheat_core::models::policy::{
    Filter, FilterType, Policy, Trigger, TriggerSettings, TriggerType,
};
use serde_json::json;

fn decoded_policy() -> Policy {
    let mut p = Policy {
        id: 12,
        name: "warm-library.nightly".to_string(),
        description: "preheat library images".to_string(),
        project_id: 3,
        provider_id: 5,
        enabled: true,
        created_at: Some(Utc.with_ymd_and_hms(2020, 10, 1, 12, 0, 0).unwrap()),
        updated_at: Some(Utc.with_ymd_and_hms(2020, 10, 2, 13, 30, 0).unwrap()),
        ..Default::default()
    };
    p.set_filters(vec![
        Filter {
            kind: FilterType::Repository,
            value: json!("library/**"),
        },
        Filter {
            kind: FilterType::Label,
            value: json!(["prod"]),
        },
    ])
    .unwrap();
    p.set_trigger(Trigger {
        kind: TriggerType::Scheduled,
        settings: TriggerSettings {
            cron: "0 0 2 * * *".to_string(),
        },
    })
    .unwrap();
    p
}

fn sample_instance(status: &str) -> Instance {
    Instance {
        id: 7,
        name: "kraken-east".to_string(),
        description: "primary cluster".to_string(),
        vendor: "kraken".to_string(),
        enabled: true,
        endpoint: "https://kraken.example.com".to_string(),
        auth_mode: "BASIC".to_string(),
        auth_data: r#"{"password":"pw","username":"admin"}"#.to_string(),
        status: status.to_string(),
        default: false,
        insecure: false,
        setup_timestamp: 1_600_000_000,
    }
}

#[test]
fn policy_round_trip_keeps_text_and_drops_structure() {
    let original = decoded_policy();

    let payload = policy::to_payload(Some(&original)).unwrap();
    let back = policy::to_domain(Some(&payload)).unwrap();

    assert_eq!(back.filters, original.filters.to_raw());
    assert_eq!(back.trigger, original.trigger.to_raw());
    assert!(back.filters.value().is_none());
    assert!(back.trigger.value().is_none());

    let expected = Policy {
        filters: original.filters.to_raw(),
        trigger: original.trigger.to_raw(),
        ..original.clone()
    };
    assert_eq!(back, expected);

    // Decoding restores the structured forms.
    assert_eq!(back.decode().unwrap(), original);
}

#[test]
fn policy_payload_wire_shape() {
    let payload = policy::to_payload(Some(&decoded_policy())).unwrap();
    let wire = serde_json::to_value(&payload).unwrap();

    assert_eq!(wire["name"], "warm-library.nightly");
    assert_eq!(wire["project_id"], 3);
    assert_eq!(wire["provider_id"], 5);
    assert_eq!(wire["creation_time"], "2020-10-01T12:00:00.000Z");
    assert_eq!(wire["update_time"], "2020-10-02T13:30:00.000Z");
    assert_eq!(
        wire["trigger"],
        r#"{"type":"scheduled","trigger_setting":{"cron":"0 0 2 * * *"}}"#
    );
}

#[test]
fn policy_from_request_body() {
    let body = r#"{
        "name": "abc",
        "project_id": 1,
        "provider_id": 2,
        "filters": "[{\"type\":\"tag\",\"value\":\"v1.*\"}]",
        "trigger": "{\"type\":\"manual\"}",
        "enabled": true
    }"#;
    let payload: PreheatPolicyPayload = serde_json::from_str(body).unwrap();

    let p = policy::to_domain(Some(&payload)).unwrap().decode().unwrap();

    assert_eq!(p.created_at, None);
    assert_eq!(p.filters.value().unwrap()[0].kind, FilterType::Tag);
    assert_eq!(p.trigger.value().unwrap().kind, TriggerType::Manual);
    assert!(p.validate().is_ok());
}

#[test]
fn unset_policy_times_serialize_as_wire_zero() {
    let p = Policy {
        name: "abc".to_string(),
        filters: Encoded::default(),
        ..Default::default()
    };
    let wire = serde_json::to_value(policy::to_payload(Some(&p)).unwrap()).unwrap();
    assert_eq!(wire["creation_time"], "0001-01-01T00:00:00.000Z");
    assert_eq!(wire["update_time"], "0001-01-01T00:00:00.000Z");
}

#[test]
fn instance_round_trip_with_status() {
    let original = sample_instance(HEALTHY_STATUS);

    let payload = instance::to_payload(Some(&original)).unwrap();
    assert_eq!(payload.auth_info.get("username").map(String::as_str), Some("admin"));

    assert_eq!(instance::to_domain(Some(&payload)).unwrap(), original);
}

#[test]
fn empty_status_normalizes_to_unknown_one_way() {
    let original = sample_instance("");

    let payload = instance::to_payload(Some(&original)).unwrap();
    assert_eq!(payload.status, UNKNOWN_STATUS);

    let back = instance::to_domain(Some(&payload)).unwrap();
    assert_eq!(back.status, "Unknown");
    assert_ne!(back, original);
    assert_eq!(
        back,
        Instance {
            status: UNKNOWN_STATUS.to_string(),
            ..original
        }
    );
}

#[test]
fn instance_payload_wire_shape() {
    let payload = instance::to_payload(Some(&sample_instance(""))).unwrap();
    let wire = serde_json::to_value(&payload).unwrap();

    assert_eq!(wire["auth_info"], json!({"password": "pw", "username": "admin"}));
    assert_eq!(wire["status"], "Unknown");
    assert_eq!(wire["setup_timestamp"], 1_600_000_000);
    assert_eq!(wire["default"], false);
}

#[test]
fn instance_from_request_body() {
    let body = r#"{
        "name": "df",
        "vendor": "dragonfly",
        "endpoint": "http://df:8002",
        "auth_mode": "OAUTH",
        "auth_info": {"token": "abc"}
    }"#;
    let payload: InstancePayload = serde_json::from_str(body).unwrap();

    let i = instance::to_domain(Some(&payload)).unwrap();

    assert_eq!(i.auth_data, r#"{"token":"abc"}"#);
    assert_eq!(i.status, "");
    assert!(!i.default);
}

#[test]
fn malformed_auth_data_never_yields_empty_map() {
    for blob in ["plain text", "[]", r#"{"a":1}"#, "{", "   \n"] {
        let broken = Instance {
            auth_data: blob.to_string(),
            ..sample_instance(HEALTHY_STATUS)
        };
        assert_matches!(
            instance::to_payload(Some(&broken)),
            Err(CoreError::InvalidAuthData(_)),
            "blob {blob:?}"
        );
    }
}

#[test]
fn nil_inputs_fail_for_every_converter() {
    assert_matches!(policy::to_payload(None), Err(CoreError::NilInput { .. }));
    assert_matches!(policy::to_domain(None), Err(CoreError::NilInput { .. }));
    assert_matches!(instance::to_payload(None), Err(CoreError::NilInput { .. }));
    assert_matches!(instance::to_domain(None), Err(CoreError::NilInput { .. }));
}

#[test]
fn both_converters_share_the_name_rule() {
    for name in ["abc/-.**", "_aa/*b", ""] {
        let p = PreheatPolicyPayload {
            name: name.to_string(),
            ..Default::default()
        };
        let i = InstancePayload {
            name: name.to_string(),
            ..Default::default()
        };
        assert_matches!(policy::to_domain(Some(&p)), Err(CoreError::InvalidName(_)));
        assert_matches!(instance::to_domain(Some(&i)), Err(CoreError::InvalidName(_)));
    }
}

#[test]
fn policy_body_with_null_fields_reads_as_zero() {
    let body = r#"{
        "id": null,
        "name": "abc",
        "description": null,
        "filters": null,
        "trigger": null,
        "enabled": null,
        "creation_time": null,
        "update_time": null
    }"#;
    let payload: PreheatPolicyPayload = serde_json::from_str(body).unwrap();
    assert!(payload.creation_time.is_zero());

    let p = policy::to_domain(Some(&payload)).unwrap();

    assert_eq!(p.created_at, None);
    assert_eq!(p.updated_at, None);
    assert_eq!(p.filters.text(), "");
    assert_eq!(p.description, "");
    assert!(!p.enabled);
}

#[test]
fn instance_body_with_null_fields_reads_as_zero() {
    let body = r#"{
        "name": "df",
        "auth_info": null,
        "status": null,
        "endpoint": null,
        "setup_timestamp": null
    }"#;
    let payload: InstancePayload = serde_json::from_str(body).unwrap();

    let i = instance::to_domain(Some(&payload)).unwrap();

    assert_eq!(i.auth_data, "");
    assert_eq!(i.status, "");
    assert_eq!(i.setup_timestamp, 0);
}
