use compass_api::types::{Record, Resource};
use compass_api::{Client, Error, HttpError};
use serde_json::{json, Value};
use wiremock::matchers::{body_json, header, method, path, path_regex, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

fn client(server: &MockServer) -> Client {
    Client::with_base_url(&server.uri(), "my_token").unwrap()
}

fn record(value: Value) -> Record {
    match value {
        Value::Object(map) => map,
        other => panic!("not an object: {}", other),
    }
}

#[tokio::test]
async fn get_company_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("company.json");

    Mock::given(method("GET"))
        .and(path("/api/companies/1001"))
        .and(header("x-compass-token", "my_token"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let company = client(&mock_server).get_company(1001).await.unwrap();
    assert_eq!(company["CompanyId"], 1001);
    assert_eq!(company["Name"], "Acme Engineering");

    // field order follows the server's document
    let keys: Vec<&str> = company.keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        vec!["CompanyId", "Name", "Website", "Phone", "Active", "Notes"]
    );
}

#[tokio::test]
async fn get_company_schema_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("company_schema.json");

    Mock::given(method("GET"))
        .and(path("/api/companies/schema/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let schema = client(&mock_server).get_company_schema().await.unwrap();
    assert_eq!(schema["Fields"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn schema_paths_per_resource() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path_regex(r"^/api/[a-z]+/schema/$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(4)
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    client.get_company_schema().await.unwrap();
    client.get_contact_schema().await.unwrap();
    client.get_project_schema().await.unwrap();
    client.get_opportunity_schema().await.unwrap();

    let paths: Vec<String> = mock_server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .map(|r| r.url.path().to_string())
        .collect();
    assert_eq!(
        paths,
        vec![
            "/api/companies/schema/",
            "/api/contacts/schema/",
            "/api/projects/schema/",
            "/api/opportunities/schema/",
        ]
    );
}

#[tokio::test]
async fn list_sends_exactly_size_and_from() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path_regex(r"^/api/[a-z]+/$"))
        .and(query_param("size", "50"))
        .and(query_param("from", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"Id": 1}])))
        .expect(4)
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    assert_eq!(client.get_company_list(50, 100).await.unwrap().len(), 1);
    assert_eq!(client.get_contact_list(50, 100).await.unwrap().len(), 1);
    assert_eq!(client.get_project_list(50, 100).await.unwrap().len(), 1);
    assert_eq!(client.get_opportunity_list(50, 100).await.unwrap().len(), 1);

    for request in mock_server.received_requests().await.unwrap() {
        assert_eq!(request.url.query(), Some("size=50&from=100"));
    }
}

#[tokio::test]
async fn search_encodes_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/contacts/search"))
        .and(query_param("q", "name:o'brien & co"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"ContactId": 3}])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let contacts = client(&mock_server)
        .search_contacts("name:o'brien & co")
        .await
        .unwrap();
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0]["ContactId"], 3);
}

#[tokio::test]
async fn update_puts_bare_object_at_record_id() {
    let mock_server = MockServer::start().await;
    let company = record(json!({"CompanyId": 42, "Name": "Renamed"}));

    Mock::given(method("PUT"))
        .and(path("/api/companies/42/"))
        .and(body_json(json!({"CompanyId": 42, "Name": "Renamed"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"CompanyId": 42})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let updated = client(&mock_server).update_company(&company).await.unwrap();
    assert_eq!(updated["CompanyId"], 42);
}

#[tokio::test]
async fn update_uses_each_resource_id_field() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(3)
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    client
        .update_contact(&record(json!({"ContactId": 7})))
        .await
        .unwrap();
    client
        .update_project(&record(json!({"ProjectId": 8})))
        .await
        .unwrap();
    client
        .update_opportunity(&record(json!({"OpportunityId": 9})))
        .await
        .unwrap();

    let paths: Vec<String> = mock_server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .map(|r| r.url.path().to_string())
        .collect();
    assert_eq!(
        paths,
        vec!["/api/contacts/7/", "/api/projects/8/", "/api/opportunities/9/"]
    );
}

#[tokio::test]
async fn update_without_id_sends_nothing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let err = client(&mock_server)
        .update_company(&record(json!({"Name": "No id"})))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::MissingId("CompanyId")));
}

#[tokio::test]
async fn create_wraps_record_in_array() {
    let mock_server = MockServer::start().await;

    for resource in ["companies", "contacts", "projects"] {
        Mock::given(method("POST"))
            .and(path(format!("/api/{}/", resource)))
            .and(body_json(json!([{"Name": "New"}])))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"Id": 1}])))
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    let client = client(&mock_server);
    let new = record(json!({"Name": "New"}));
    client.create_company(&new).await.unwrap();
    client.create_contact(&new).await.unwrap();
    client.create_project(&new).await.unwrap();
}

#[tokio::test]
async fn create_opportunity_posts_bare_object() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/opportunities/"))
        .and(body_json(json!({"OpportunityName": "Bridge bid"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"OpportunityId": 5})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let created = client(&mock_server)
        .create_opportunity(&record(json!({"OpportunityName": "Bridge bid"})))
        .await
        .unwrap();
    assert_eq!(created["OpportunityId"], 5);

    let requests = mock_server.received_requests().await.unwrap();
    assert!(requests[0].body.starts_with(b"{"));
}

#[tokio::test]
async fn company_links_hit_their_paths() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path_regex(r"^/api/companies/5/[a-z_]+/$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(11)
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    client.get_company_addresses(5).await.unwrap();
    client.get_company_contacts(5).await.unwrap();
    client.get_company_divisions(5).await.unwrap();
    client.get_company_offices(5).await.unwrap();
    client.get_company_practice_areas(5).await.unwrap();
    client.get_company_prequalifications(5).await.unwrap();
    client.get_company_primary_categories(5).await.unwrap();
    client.get_company_studios(5).await.unwrap();
    client.get_company_territories(5).await.unwrap();
    client.get_company_types(5).await.unwrap();
    client.get_company_users(5).await.unwrap();

    let segments: Vec<String> = mock_server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .map(|r| r.url.path().trim_start_matches("/api/companies/5/").to_string())
        .collect();
    assert_eq!(
        segments,
        vec![
            "addresses/",
            "contacts/",
            "divisions/",
            "offices/",
            "practiceareas/",
            "prequalifications/",
            "primarycategories/",
            "studios/",
            "territories/",
            "companytypes/",
            "users/",
        ]
    );
}

#[tokio::test]
async fn contact_links_hit_their_paths() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path_regex(r"^/api/contacts/9/[a-z_]+/$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(4)
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    client.get_contact_company(9).await.unwrap();
    client.get_contact_category(9).await.unwrap();
    client.get_contact_divisions(9).await.unwrap();
    client.get_contact_offices(9).await.unwrap();

    let paths: Vec<String> = mock_server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .map(|r| r.url.path().to_string())
        .collect();
    assert_eq!(
        paths,
        vec![
            "/api/contacts/9/company/",
            "/api/contacts/9/contact_category/",
            "/api/contacts/9/divisions/",
            "/api/contacts/9/offices/",
        ]
    );
}

#[tokio::test]
async fn failure_status_surfaces_from_resource_methods() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such record"))
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    let expected_404 = HttpError {
        status: 404,
        reason: "Not Found".to_string(),
        text: "no such record".to_string(),
    };

    match client.get_project(1).await.unwrap_err() {
        Error::Http(e) => assert_eq!(e, expected_404),
        other => panic!("expected HTTP error, got {:?}", other),
    }
    match client.get_record(Resource::Opportunity, 1).await.unwrap_err() {
        Error::Http(e) => assert_eq!(e, expected_404),
        other => panic!("expected HTTP error, got {:?}", other),
    }
    match client.search_projects("x").await.unwrap_err() {
        Error::Http(e) => assert_eq!(e, expected_404),
        other => panic!("expected HTTP error, got {:?}", other),
    }
    let err = client
        .create_contact(&record(json!({"Name": "x"})))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "500: Internal Server Error - boom");
}

#[tokio::test]
async fn malformed_json_is_a_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/companies/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let err = client(&mock_server)
        .get_company_list(50, 0)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
}

#[tokio::test]
async fn get_user_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/user/"))
        .and(header("x-compass-token", "my_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"UserId": 12}])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let user = client(&mock_server).get_user().await.unwrap();
    assert_eq!(user[0]["UserId"], 12);
}
