use serde_json::json;
use umdio_api::{
    ApiResult, Client, CourseListQuery, CoursesQuery, Endpoint, Error, ProfessorsQuery, Query,
    QueryOptions, SectionsQuery, BASE_URL,
};
use wiremock::matchers::{any, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

fn json_response(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body.to_string(), "application/json")
}

async fn mount_json(mock_server: &MockServer, at: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(at))
        .respond_with(json_response(body))
        .mount(mock_server)
        .await;
}

/// Query strings of every request the mock server has seen, in order.
async fn received_queries(mock_server: &MockServer) -> Vec<Option<String>> {
    mock_server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .map(|r| r.url.query().map(str::to_string))
        .collect()
}

async fn received_count(mock_server: &MockServer) -> usize {
    mock_server.received_requests().await.unwrap().len()
}

#[tokio::test]
async fn course_success() {
    let mock_server = MockServer::start().await;
    mount_json(&mock_server, "/courses/INST414", r#"{"course_id":"INST414"}"#).await;

    let client = Client::with_base_url(&mock_server.uri());
    let result = client.course("INST414").await;
    assert_eq!(result, ApiResult::Data(json!({"course_id": "INST414"})));
}

#[tokio::test]
async fn courses_success() {
    let mock_server = MockServer::start().await;
    mount_json(&mock_server, "/courses", &load_fixture("courses.json")).await;

    let client = Client::with_base_url(&mock_server.uri());
    let result = client.courses(&CoursesQuery::default()).await;
    let courses = result.as_value().unwrap().as_array().unwrap();
    assert_eq!(courses.len(), 2);
    assert_eq!(courses[0]["course_id"], "INST414");
}

#[tokio::test]
async fn not_found_returns_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error_code": 404})))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    assert!(client.course("XXXX999").await.is_empty());
    assert!(client.buildings().await.is_empty());
    assert!(client.bus_route("999").await.is_empty());
}

#[tokio::test]
async fn html_content_type_returns_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/courses/semesters"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw("<html>[\"202108\"]</html>", "text/html"),
        )
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    assert!(client.semesters().await.is_empty());

    let err = client
        .request(Endpoint::Semesters, None, &QueryOptions::new())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::UnexpectedContentType { content_type: Some(ref ct) } if ct == "text/html"
    ));
}

#[tokio::test]
async fn content_type_must_match_exactly() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/courses/semesters"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(r#"["202101","202108"]"#, "APPLICATION/JSON; charset=utf-8"),
        )
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/courses/departments"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(r#"["INST"]"#, "application/json; charset=utf-8"),
        )
        .mount(&mock_server)
        .await;
    mount_json(&mock_server, "/majors/list", r#"["Accounting"]"#).await;

    let client = Client::with_base_url(&mock_server.uri());
    assert!(client.semesters().await.is_empty());
    assert!(client.departments().await.is_empty());
    assert_eq!(client.majors().await, ApiResult::Data(json!(["Accounting"])));
}

#[tokio::test]
async fn malformed_json_returns_empty() {
    let mock_server = MockServer::start().await;
    mount_json(&mock_server, "/majors/list", "{not valid json}").await;

    let client = Client::with_base_url(&mock_server.uri());
    assert!(client.majors().await.is_empty());

    let err = client
        .request(Endpoint::Majors, None, &QueryOptions::new())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
}

#[tokio::test]
async fn server_error_reports_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/bus/stops"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    assert!(client.bus_stops().await.is_empty());

    let err = client
        .request(Endpoint::BusStops, None, &QueryOptions::new())
        .await
        .unwrap_err();
    match err {
        Error::HttpStatus { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "Internal Server Error");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn redirects_are_not_followed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/map/buildings"))
        .respond_with(
            ResponseTemplate::new(301)
                .insert_header("location", format!("{}/moved", mock_server.uri()).as_str()),
        )
        .mount(&mock_server)
        .await;
    mount_json(&mock_server, "/moved", "[]").await;

    let client = Client::with_base_url(&mock_server.uri());
    assert!(client.buildings().await.is_empty());
    assert_eq!(received_count(&mock_server).await, 1);
}

#[tokio::test]
async fn transport_failure_returns_empty() {
    // Nothing listens on the discard port.
    let client = Client::with_base_url("http://127.0.0.1:9");
    assert!(client.departments().await.is_empty());

    let err = client
        .request(Endpoint::Departments, None, &QueryOptions::new())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::RequestFailed));
}

#[tokio::test]
async fn sends_fixed_referer() {
    let mock_server = MockServer::start().await;
    mount_json(&mock_server, "/bus/routes", &load_fixture("bus_routes.json")).await;

    let client = Client::with_base_url(&mock_server.uri());
    assert!(!client.bus_routes().await.is_empty());

    let requests = mock_server.received_requests().await.unwrap();
    let referer = requests[0].headers.get("referer").unwrap();
    assert_eq!(referer.to_str().unwrap(), BASE_URL);
}

#[tokio::test]
async fn courses_includes_gen_ed_and_defaults() {
    let mock_server = MockServer::start().await;
    mount_json(&mock_server, "/courses", "[]").await;

    let mut client = Client::with_base_url(&mock_server.uri());
    client.set_dept_id("INST").set_per_page(10).set_semester("202108");

    let query = CoursesQuery::default().with_page(2).with_gen_ed("ABCD");
    assert_eq!(client.courses(&query).await, ApiResult::Data(json!([])));

    let query = CoursesQuery::default().with_page(2).with_gen_ed("AB");
    client.courses(&query).await;

    assert_eq!(
        received_queries(&mock_server).await,
        vec![
            Some("page=2&gen_ed=ABCD&semester=202108&dept_id=INST&per_page=10".to_string()),
            Some("page=2&semester=202108&dept_id=INST&per_page=10".to_string()),
        ]
    );
}

#[tokio::test]
async fn courses_without_defaults_sends_page_size() {
    let mock_server = MockServer::start().await;
    mount_json(&mock_server, "/courses", "[]").await;

    let client = Client::with_base_url(&mock_server.uri());
    client
        .courses(&CoursesQuery::new(0, "3", "", "-credits"))
        .await;

    assert_eq!(
        received_queries(&mock_server).await,
        vec![Some("credits=3&sort=-credits&per_page=30".to_string())]
    );
}

#[tokio::test]
async fn course_list_and_sections_skip_department() {
    let mock_server = MockServer::start().await;
    mount_json(&mock_server, "/courses/list", &load_fixture("course_list.json")).await;
    mount_json(&mock_server, "/courses/sections", &load_fixture("sections.json")).await;

    let mut client = Client::with_base_url(&mock_server.uri());
    client.set_semester("202108").set_dept_id("AASP");

    assert!(!client.course_list(&CourseListQuery::new(1, "name")).await.is_empty());
    let sections = SectionsQuery::default().with_course_id("AASP100").with_open_seats("1");
    assert!(!client.sections(&sections).await.is_empty());

    assert_eq!(
        received_queries(&mock_server).await,
        vec![
            Some("page=1&sort=name&semester=202108&per_page=30".to_string()),
            Some("page=1&course_id=AASP100&open_seats=1&semester=202108&per_page=30".to_string()),
        ]
    );
}

#[tokio::test]
async fn section_and_course_carry_semester() {
    let mock_server = MockServer::start().await;
    mount_json(&mock_server, "/courses/sections/AASP100-0101", "[]").await;
    mount_json(&mock_server, "/courses/INST414", "[]").await;

    let mut client = Client::with_base_url(&mock_server.uri());
    client.set_per_page(50).set_dept_id("INST");
    client.section("AASP100-0101").await;
    client.set_semester("202108");
    client.course("INST414").await;

    assert_eq!(
        received_queries(&mock_server).await,
        vec![None, Some("semester=202108".to_string())]
    );
}

#[tokio::test]
async fn listings_ignore_defaults() {
    let mock_server = MockServer::start().await;
    mount_json(&mock_server, "/courses/semesters", "[]").await;
    mount_json(&mock_server, "/courses/departments", &load_fixture("departments.json")).await;
    mount_json(&mock_server, "/majors/list", &load_fixture("majors.json")).await;
    mount_json(&mock_server, "/map/buildings", &load_fixture("buildings.json")).await;
    mount_json(&mock_server, "/bus/routes", &load_fixture("bus_routes.json")).await;
    mount_json(&mock_server, "/bus/stops", &load_fixture("bus_stops.json")).await;

    let mut client = Client::with_base_url(&mock_server.uri());
    client.set_semester("202108").set_dept_id("INST").set_per_page(5);

    assert!(!client.semesters().await.is_empty());
    assert!(!client.departments().await.is_empty());
    assert!(!client.majors().await.is_empty());
    assert!(!client.buildings().await.is_empty());
    assert!(!client.bus_routes().await.is_empty());
    assert!(!client.bus_stops().await.is_empty());

    assert_eq!(received_queries(&mock_server).await, vec![None; 6]);
}

#[tokio::test]
async fn id_keyed_operations_substitute_id() {
    let mock_server = MockServer::start().await;
    mount_json(&mock_server, "/map/buildings/432", "{}").await;
    mount_json(&mock_server, "/bus/routes/115", "{}").await;
    mount_json(&mock_server, "/bus/stops/stamp", "{}").await;
    mount_json(&mock_server, "/bus/routes/115/schedules", "[]").await;

    let mut client = Client::with_base_url(&mock_server.uri());
    client.set_semester("202108");

    assert_eq!(client.building("432").await, ApiResult::Data(json!({})));
    assert_eq!(client.bus_route("115").await, ApiResult::Data(json!({})));
    assert_eq!(client.bus_stop("stamp").await, ApiResult::Data(json!({})));
    assert_eq!(client.bus_schedule("115").await, ApiResult::Data(json!([])));

    assert_eq!(received_queries(&mock_server).await, vec![None; 4]);
}

#[tokio::test]
async fn empty_ids_send_no_request() {
    let mock_server = MockServer::start().await;
    Mock::given(any())
        .respond_with(json_response("[]"))
        .mount(&mock_server)
        .await;

    let mut client = Client::with_base_url(&mock_server.uri());
    client.set_semester("202108");

    assert!(client.section("").await.is_empty());
    assert!(client.course("").await.is_empty());
    assert!(client.building("").await.is_empty());
    assert!(client.bus_route("").await.is_empty());
    assert!(client.bus_stop("").await.is_empty());
    assert!(client.bus_schedule("").await.is_empty());

    let err = client
        .request(Endpoint::BusSchedule, None, &QueryOptions::new())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::MissingIdentifier {
            endpoint: Endpoint::BusSchedule
        }
    ));

    assert_eq!(received_count(&mock_server).await, 0);
}

#[tokio::test]
async fn zero_arguments_count_as_missing() {
    let mock_server = MockServer::start().await;
    Mock::given(any())
        .respond_with(json_response("[]"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    assert!(client.professors(&ProfessorsQuery::new("0", "")).await.is_empty());
    assert!(client.building("0").await.is_empty());
    assert!(client.bus_stop("0").await.is_empty());
    assert_eq!(received_count(&mock_server).await, 0);

    client
        .sections(&SectionsQuery::default().with_waitlist("0").with_course_id("INST414"))
        .await;
    client
        .courses(&CoursesQuery::default().with_credits("0"))
        .await;

    assert_eq!(
        received_queries(&mock_server).await,
        vec![
            Some("page=1&course_id=INST414&per_page=30".to_string()),
            Some("page=1&per_page=30".to_string()),
        ]
    );
}

#[tokio::test]
async fn professors_without_filters_sends_no_request() {
    let mock_server = MockServer::start().await;
    Mock::given(any())
        .respond_with(json_response("[]"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    assert!(client.professors(&ProfessorsQuery::new("", "")).await.is_empty());
    assert_eq!(received_count(&mock_server).await, 0);
}

#[tokio::test]
async fn professors_by_name_and_course() {
    let mock_server = MockServer::start().await;
    mount_json(&mock_server, "/professors", &load_fixture("professors.json")).await;

    let mut client = Client::with_base_url(&mock_server.uri());
    client.set_semester("202108");

    let result = client.professors(&ProfessorsQuery::new("LaRia Rogers", "")).await;
    assert_eq!(result.as_value().unwrap()[0]["name"], "LaRia Rogers");
    client
        .professors(&ProfessorsQuery::default().with_course_id("CMSC216"))
        .await;

    assert_eq!(
        received_queries(&mock_server).await,
        vec![
            Some("name=LaRia+Rogers".to_string()),
            Some("course_id=CMSC216".to_string()),
        ]
    );
}
