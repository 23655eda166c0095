//! Integration tests for the backend client against a mock HTTP server.
//!
//! Covers the endpoint shapes, the exact create-payload JSON the form binder
//! produces, verbatim backend error passthrough, and the bulk-import round
//! trip with its unconditional store refresh.

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use sevadash_client::{bulk_import_and_refresh, refresh_store, ApiClient, ClientConfig};
use sevadash_core::{
    AttendancePayload, CreatePayload, EntityKind, Error, FileDisposition, FilterState,
    ImportSummary, LoadState, NutritionStockPayload, RecordService, RecordStore, Scope,
};

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(ClientConfig::default().with_base_url(server.uri()))
}

#[tokio::test]
async fn test_list_scoped_to_organization() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/attendance"))
        .and(query_param("organization_id", "5"))
        .and(query_param("limit", "500"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 1,
                "organization_id": 5,
                "record_date": "2026-03-01",
                "staff_present_count": 15,
                "doctor_present": true
            },
            {
                "id": 2,
                "organization_id": 5,
                "record_date": "2026-02-28",
                "doctor_present": false
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let scope = Scope::organization(EntityKind::Attendance, 5);
    let records = client.list_records(&scope, 500).await.unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id(), 1);
    assert_eq!(records[0].organization_id(), 5);
}

#[tokio::test]
async fn test_list_scoped_to_department() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/medicine_stock/department"))
        .and(query_param("limit", "200"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let scope = Scope::department(EntityKind::MedicineStock);
    let records = client.list_records(&scope, 200).await.unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn test_create_sends_exact_payload_shape() {
    let server = MockServer::start().await;

    // Empty staff count must be absent from the body, not null; the
    // checkbox is always present.
    Mock::given(method("POST"))
        .and(path("/attendance"))
        .and(body_json(json!({
            "organization_id": 5,
            "record_date": "2026-03-01",
            "doctor_present": true
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 3,
            "organization_id": 5,
            "record_date": "2026-03-01",
            "doctor_present": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let payload = CreatePayload::Attendance(AttendancePayload {
        organization_id: 5,
        record_date: "2026-03-01".to_string(),
        staff_present_count: None,
        doctor_present: true,
    });
    let created = client.create_record(payload).await.unwrap();
    assert_eq!(created.id(), 3);
}

#[tokio::test]
async fn test_backend_error_message_surfaced_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/attendance"))
        .respond_with(
            ResponseTemplate::new(422)
                .set_body_json(json!({"error": "record already exists for this date"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let payload = CreatePayload::Attendance(AttendancePayload {
        organization_id: 5,
        record_date: "2026-03-01".to_string(),
        staff_present_count: None,
        doctor_present: false,
    });

    match client.create_record(payload).await {
        Err(Error::Request(msg)) => assert_eq!(msg, "record already exists for this date"),
        other => panic!("Expected request error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unauthorized_status_is_fatal() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/patients/department"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": "token expired"})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let scope = Scope::department(EntityKind::Patients);

    match client.list_records(&scope, 500).await {
        Err(err @ Error::Unauthorized(_)) => {
            assert!(err.is_fatal_for_page());
            assert!(err.to_string().contains("token expired"));
        }
        other => panic!("Expected unauthorized error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_bearer_token_attached_when_configured() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/organizations"))
        .and(header("authorization", "Bearer secret-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 5, "name": "PHC Rampur"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(
        ClientConfig::default()
            .with_base_url(server.uri())
            .with_token("secret-token"),
    );
    let orgs = client.list_organizations().await.unwrap();
    assert_eq!(orgs[0].name, "PHC Rampur");
}

#[tokio::test]
async fn test_nutrition_update_and_delete_routes() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/nutrition_stock/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 7,
            "organization_id": 9,
            "record_date": "2026-03-01",
            "item_name": "Rice",
            "opening_stock": 80,
            "received": 20,
            "distributed": 25,
            "closing_stock": 75
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/nutrition_stock/7"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let payload = NutritionStockPayload {
        organization_id: 9,
        record_date: "2026-03-01".to_string(),
        item_name: "Rice".to_string(),
        opening_stock: Some(80.0),
        received: Some(20.0),
        distributed: Some(25.0),
        closing_stock: 75.0,
    };
    let updated = client.update_nutrition(7, payload).await.unwrap();
    assert_eq!(updated.id(), 7);

    client.delete_nutrition(7).await.unwrap();
}

#[tokio::test]
async fn test_bulk_import_reports_partial_success_and_refreshes() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/attendance/bulk_csv"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "imported": 8,
            "errors": ["row 3: invalid date", "row 9: missing organization_id"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    // The refresh after the upload must happen even though rows failed.
    Mock::given(method("GET"))
        .and(path("/attendance"))
        .and(query_param("organization_id", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 1,
                "organization_id": 5,
                "record_date": "2026-03-01",
                "doctor_present": true
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let scope = Scope::organization(EntityKind::Attendance, 5);
    let mut store = RecordStore::new(scope);

    let csv = b"organization_id,record_date,staff_present_count,doctor_present\n".to_vec();
    let (outcome, disposition) =
        bulk_import_and_refresh(&client, &mut store, scope, 500, "attendance_march.csv", csv)
            .await;

    let result = outcome.unwrap();
    assert_eq!(result.imported, 8);
    assert_eq!(result.errors.len(), 2);
    assert_eq!(disposition, FileDisposition::Clear);

    let banner = ImportSummary::from_result(&result).banner();
    assert!(banner.contains("Imported 8"));
    assert!(banner.contains("row 3: invalid date"));

    assert_eq!(store.state(), LoadState::Loaded);
    assert_eq!(store.records().len(), 1);
}

#[tokio::test]
async fn test_failed_reload_keeps_last_known_good_data() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/patients"))
        .and(query_param("organization_id", "12"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 4,
                "organization_id": 12,
                "record_date": "2026-02-20",
                "opd_count": 40
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let scope = Scope::organization(EntityKind::Patients, 12);
    let mut store = RecordStore::new(scope);

    assert!(refresh_store(&client, &mut store, scope, 500).await);
    assert_eq!(store.records().len(), 1);

    // Backend goes away; the reload fails but the collection stays.
    server.reset().await;
    Mock::given(method("GET"))
        .and(path("/patients"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    refresh_store(&client, &mut store, scope, 500).await;
    assert_eq!(store.state(), LoadState::Failed);
    assert_eq!(store.records().len(), 1);
    assert!(store.last_error().is_some());

    let view = store.derive_view(&FilterState::default());
    assert_eq!(view.visible_rows.len(), 1);
}
