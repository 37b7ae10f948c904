use cascade_engine::{parse_reference, CascadeError};
use cascade_test_utils::InMemoryRecordService;
use pretty_assertions::assert_eq;
use uuid::Uuid;

fn contact_id() -> Uuid {
    Uuid::parse_str("11111111-1111-1111-1111-111111111111").unwrap()
}

#[tokio::test]
async fn url_with_etc_and_id_resolves_via_metadata() {
    let service = InMemoryRecordService::new().with_type_code(2, "contact");
    let url = format!("https://org.crm.example.com/main.aspx?etc=2&id={}", contact_id());

    let identity = parse_reference(&service, &url).await.unwrap();
    assert_eq!(identity.type_name(), "contact");
    assert_eq!(identity.id(), contact_id());
}

#[tokio::test]
async fn url_query_parameter_order_is_irrelevant() {
    let service = InMemoryRecordService::new().with_type_code(2, "contact");
    let url = format!(
        "https://org.crm.example.com/main.aspx?pagetype=entityrecord&id={}&etc=2&extra=1",
        contact_id()
    );

    let identity = parse_reference(&service, &url).await.unwrap();
    assert_eq!(identity.type_name(), "contact");
    assert_eq!(identity.id(), contact_id());
}

#[tokio::test]
async fn url_without_id_fails_as_unresolved() {
    let service = InMemoryRecordService::new().with_type_code(2, "contact");

    let err = parse_reference(&service, "https://org.crm.example.com/main.aspx?etc=2")
        .await
        .unwrap_err();
    assert!(matches!(err, CascadeError::IdentityNotResolved { .. }));
}

#[tokio::test]
async fn url_with_nil_id_fails_as_unresolved() {
    let service = InMemoryRecordService::new().with_type_code(2, "contact");
    let url = format!("https://org.crm.example.com/main.aspx?etc=2&id={}", Uuid::nil());

    let err = parse_reference(&service, &url).await.unwrap_err();
    assert!(matches!(err, CascadeError::IdentityNotResolved { .. }));
}

#[tokio::test]
async fn url_with_unknown_type_code_fails_as_unresolved() {
    let service = InMemoryRecordService::new().with_type_code(2, "contact");
    let url = format!("https://org.crm.example.com/main.aspx?etc=999&id={}", contact_id());

    let err = parse_reference(&service, &url).await.unwrap_err();
    assert!(matches!(err, CascadeError::IdentityNotResolved { .. }));
}

#[tokio::test]
async fn url_with_garbage_id_is_malformed() {
    let service = InMemoryRecordService::new().with_type_code(2, "contact");

    let err = parse_reference(
        &service,
        "https://org.crm.example.com/main.aspx?etc=2&id=not-a-uuid",
    )
    .await
    .unwrap_err();
    assert!(matches!(err, CascadeError::MalformedReference { .. }));
}

#[tokio::test]
async fn serialized_identity_needs_no_metadata_round_trip() {
    // Scripted metadata fault proves the serialized path never touches it.
    let service =
        InMemoryRecordService::new().fail_on("record_type_by_code", "must not be called");
    let reference = format!(r#"{{"LogicalName":"contact","Id":"{}"}}"#, contact_id());

    let identity = parse_reference(&service, &reference).await.unwrap();
    assert_eq!(identity.type_name(), "contact");
    assert_eq!(identity.id(), contact_id());
}

#[tokio::test]
async fn non_url_non_json_input_is_malformed_with_diagnostics() {
    let service = InMemoryRecordService::new();

    let err = parse_reference(&service, "definitely not a reference")
        .await
        .unwrap_err();
    match err {
        CascadeError::MalformedReference { reference, message } => {
            assert_eq!(reference, "definitely not a reference");
            assert!(!message.is_empty(), "original parse message must be preserved");
        }
        other => panic!("expected MalformedReference, got {other:?}"),
    }
}
