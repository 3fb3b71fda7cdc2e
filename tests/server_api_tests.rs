use barrow::server::routes::route_request;

#[test]
fn health_endpoint_returns_ok_json() {
    let response = route_request("GET", "/api/health", "");
    assert_eq!(response.status_code, 200);
    assert_eq!(response.content_type, "application/json");
    assert!(response.body.contains("\"status\": \"ok\""));
}

#[test]
fn variants_endpoint_lists_all_six() {
    let response = route_request("GET", "/api/variants", "");
    assert_eq!(response.status_code, 200);

    let payload: serde_json::Value =
        serde_json::from_str(&response.body).expect("response should be valid json");
    let variants = payload["variants"]
        .as_array()
        .expect("variants should be an array");
    assert_eq!(variants.len(), 6);

    let ghost = variants
        .iter()
        .find(|entry| entry["variant"] == "Ghost")
        .expect("ghost should be listed");
    assert_eq!(ghost["starting_hp"], 50.0);
    assert_eq!(ghost["damage_intake_scale"], 0.1);
    assert_eq!(ghost["abilities"].as_array().map(Vec::len), Some(2));

    let lich = variants
        .iter()
        .find(|entry| entry["variant"] == "Lich")
        .expect("lich should be listed");
    assert_eq!(lich["death_pinned"], true);
}

#[test]
fn duel_endpoint_applies_a_haunt() {
    let body = r#"{
        "attacker": {"variant": "Ghost", "name": "Casper"},
        "target": {"variant": "Mummy", "name": "King Tut"},
        "ability": "Haunt"
    }"#;
    let response = route_request("POST", "/api/duel", body);
    assert_eq!(response.status_code, 200);

    let payload: serde_json::Value =
        serde_json::from_str(&response.body).expect("response should be valid json");
    assert_eq!(payload["status"], "ok");
    assert_eq!(payload["attacker"]["hp"], 60.0);
    assert_eq!(payload["target"]["hp"], 100.0);
    assert_eq!(payload["outcome"]["kind"], "Heal");
}

#[test]
fn duel_endpoint_defaults_to_self_target() {
    let body = r#"{
        "attacker": {"variant": "Mummy", "name": "King Tut", "hp": 0.0},
        "ability": "Revive"
    }"#;
    let response = route_request("POST", "/api/duel", body);
    assert_eq!(response.status_code, 200);

    let payload: serde_json::Value =
        serde_json::from_str(&response.body).expect("response should be valid json");
    assert_eq!(payload["attacker"]["hp"], 100.0);
    assert_eq!(payload["attacker"]["is_dead"], false);
    assert!(payload.get("target").is_none() || payload["target"].is_null());
    assert!(payload["outcome"].get("target").is_none() || payload["outcome"]["target"].is_null());
}

#[test]
fn duel_endpoint_honors_hp_overrides() {
    let body = r#"{
        "attacker": {"variant": "Mummy", "name": "King Tut", "hp": 100.0},
        "target": {"variant": "Ghost", "name": "Casper", "hp": 60.0},
        "ability": "Attack"
    }"#;
    let response = route_request("POST", "/api/duel", body);
    assert_eq!(response.status_code, 200);

    let payload: serde_json::Value =
        serde_json::from_str(&response.body).expect("response should be valid json");
    assert_eq!(payload["target"]["hp"], 54.4);
}

#[test]
fn duel_endpoint_rejects_invalid_body() {
    let response = route_request("POST", "/api/duel", "{bad json}");
    assert_eq!(response.status_code, 400);
    assert!(response.body.contains("Invalid request body"));
}

#[test]
fn duel_endpoint_rejects_unknown_variant() {
    let body = r#"{"attacker": {"variant": "Wight"}, "ability": "Attack"}"#;
    let response = route_request("POST", "/api/duel", body);
    assert_eq!(response.status_code, 400);
    assert!(response.body.contains("unknown undead variant"));
}

#[test]
fn duel_endpoint_rejects_unknown_ability() {
    let body = r#"{
        "attacker": {"variant": "Skeleton", "name": "Rattles"},
        "target": {"variant": "Zombie"},
        "ability": "Bite"
    }"#;
    let response = route_request("POST", "/api/duel", body);
    assert_eq!(response.status_code, 400);
    assert!(response.body.contains("has no ability"));
}

#[test]
fn duel_endpoint_rejects_bad_hp_override() {
    let body = r#"{
        "attacker": {"variant": "Zombie", "hp": -5.0},
        "ability": "Attack"
    }"#;
    let response = route_request("POST", "/api/duel", body);
    assert_eq!(response.status_code, 400);
    assert!(response.body.contains("finite and non-negative"));
}

#[test]
fn scenario_endpoint_runs_a_posted_fixture() {
    let body = r#"{
        "undead": [
            {"undead": "Ghost", "name": "Casper"},
            {"undead": "Mummy", "name": "King Tut"}
        ],
        "cases": [{
            "description": "haunt",
            "attacker": "Casper",
            "target": "King Tut",
            "ability": "Haunt",
            "expected_result": {
                "Casper": {"hp": 60.0, "is_dead": false},
                "King Tut": {"hp": 100.0, "is_dead": false}
            }
        }]
    }"#;
    let response = route_request("POST", "/api/scenario", body);
    assert_eq!(response.status_code, 200);

    let payload: serde_json::Value =
        serde_json::from_str(&response.body).expect("response should be valid json");
    assert_eq!(payload["total"], 1);
    assert_eq!(payload["passed"], 1);
    assert_eq!(payload["cases"][0]["passed"], true);
}

#[test]
fn scenario_endpoint_rejects_invalid_body() {
    let response = route_request("POST", "/api/scenario", "{bad json}");
    assert_eq!(response.status_code, 400);
    assert!(response.body.contains("Invalid request body"));
}

#[test]
fn scenario_endpoint_rejects_authoring_mistakes_with_issue_list() {
    let body = r#"{
        "undead": [{"undead": "Wight", "name": "Willow"}],
        "cases": [{
            "description": "bad fixture",
            "attacker": "Willow",
            "target": "Willow",
            "ability": "Attack",
            "expected_result": {"Willow": {"hp": 10.0, "is_dead": false}}
        }]
    }"#;
    let response = route_request("POST", "/api/scenario", body);
    assert_eq!(response.status_code, 400);

    let payload: serde_json::Value =
        serde_json::from_str(&response.body).expect("response should be valid json");
    assert_eq!(payload["status"], "error");
    assert_eq!(payload["message"], "Validation failed");
    let issues = payload["issues"].as_array().expect("issues should be array");
    assert!(!issues.is_empty());
    assert!(issues
        .iter()
        .any(|issue| issue.as_str().is_some_and(|s| s.contains("Wight"))));
}

#[test]
fn index_page_serves_the_console() {
    let response = route_request("GET", "/", "");
    assert_eq!(response.status_code, 200);
    assert!(response.content_type.starts_with("text/html"));
    assert!(response.body.contains("Barrow Local API"));
}

#[test]
fn unknown_route_returns_404() {
    let response = route_request("GET", "/api/nothing", "");
    assert_eq!(response.status_code, 404);
    assert!(response.body.contains("Route not found"));
}
