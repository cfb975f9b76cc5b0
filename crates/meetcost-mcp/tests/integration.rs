use chrono::NaiveDate;
use meetcost_dashboard::Dashboard;
use meetcost_mcp::tools::{
    AddMeetingParams, DateRangeParams, DeleteMeetingParams, ListMeetingsParams,
    PeriodTrendsParams, RoleRateParam, SaveConfigParams, SaveRoleRatesParams, MeetcostServer,
};
use meetcost_store::SqliteStore;
use rmcp::{handler::server::wrapper::Parameters, model::*, ServerHandler};
use serde_json::{json, Value};

fn test_server() -> MeetcostServer {
    let store = SqliteStore::in_memory().unwrap();
    let today = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
    MeetcostServer::new(Dashboard::new(store).with_today(today))
}

fn extract_json(result: &CallToolResult) -> Value {
    match &result.content[0].raw {
        RawContent::Text(t) => serde_json::from_str(&t.text).unwrap(),
        _ => panic!("expected text content"),
    }
}

fn add(server: &MeetcostServer, fields: Value) -> Value {
    let params: AddMeetingParams = serde_json::from_value(fields).unwrap();
    extract_json(&server.add_meeting(Parameters(params)).unwrap())
}

#[test]
fn server_info_is_correct() {
    let info = test_server().get_info();

    assert_eq!(info.server_info.name, "meetcost");
    assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));
    let instructions = info.instructions.unwrap();
    for tool in [
        "list_meetings",
        "add_meeting",
        "delete_meeting",
        "get_dashboard_stats",
        "get_role_rates",
        "save_role_rates",
        "get_config",
        "save_config",
        "suggest_optimizations",
        "get_meeting_cost_summary",
        "get_velocity_correlation",
    ] {
        assert!(instructions.contains(tool), "missing {tool}");
    }
}

#[test]
fn add_and_list_meetings() {
    let server = test_server();
    let added = add(
        &server,
        json!({
            "title": "Sprint planning",
            "date": "2025-06-23",
            "duration_minutes": 60,
            "attendee_roles": ["engineer", "pm"],
            "meeting_type": "planning",
        }),
    );
    assert_eq!(added["success"], true);
    assert_eq!(added["meeting"]["calculatedCost"], 165.0);
    assert_eq!(added["meeting"]["meetingType"], "planning");

    let listed = extract_json(
        &server
            .list_meetings(Parameters(ListMeetingsParams { limit: Some(10) }))
            .unwrap(),
    );
    assert_eq!(listed["meetings"].as_array().unwrap().len(), 1);
    assert_eq!(listed["meetings"][0]["title"], "Sprint planning");
}

#[test]
fn delete_meeting_reports_whether_it_existed() {
    let server = test_server();
    let added = add(&server, json!({"title": "Sync"}));
    let id = added["meeting"]["id"].as_str().unwrap().to_string();

    let deleted = extract_json(
        &server
            .delete_meeting(Parameters(DeleteMeetingParams { id: id.clone() }))
            .unwrap(),
    );
    assert_eq!(deleted, json!({"success": true, "deleted": true}));

    let again = extract_json(
        &server
            .delete_meeting(Parameters(DeleteMeetingParams { id }))
            .unwrap(),
    );
    assert_eq!(again, json!({"success": true, "deleted": false}));
}

#[test]
fn stats_and_summary_for_range() {
    let server = test_server();
    add(
        &server,
        json!({"date": "2025-06-27", "durationMinutes": "30", "attendeeRoles": ["engineer"], "meetingType": "standup"}),
    );

    let stats = extract_json(
        &server
            .get_dashboard_stats(Parameters(DateRangeParams {
                date_range: Some("last-week".into()),
            }))
            .unwrap(),
    );
    assert_eq!(stats["stats"]["meetingCount"], 1);
    assert_eq!(stats["stats"]["totalCost"], 37.5);
    assert_eq!(stats["stats"]["costByType"]["standup"]["count"], 1);

    let summary = extract_json(
        &server
            .get_meeting_cost_summary(Parameters(DateRangeParams::default()))
            .unwrap(),
    );
    assert_eq!(summary["dateRange"], "last-month");
    assert_eq!(summary["mostExpensiveType"], "Standup");
    assert!(summary["summary"].as_str().unwrap().contains("$37.50"));
}

#[test]
fn period_trends_rejects_unknown_granularity() {
    let server = test_server();
    let result = server.get_period_trends(Parameters(PeriodTrendsParams {
        date_range: None,
        granularity: Some("hourly".into()),
    }));
    assert!(result.is_err());

    let ok = server
        .get_period_trends(Parameters(PeriodTrendsParams {
            date_range: Some("last-quarter".into()),
            granularity: Some("month".into()),
        }))
        .unwrap();
    assert_eq!(extract_json(&ok)["granularity"], "month");
}

#[test]
fn invalid_rates_are_flagged_as_tool_errors() {
    let server = test_server();
    let result = server
        .save_role_rates(Parameters(SaveRoleRatesParams {
            rates: vec![RoleRateParam {
                role_id: "engineer".into(),
                role_name: None,
                hourly_rate: -5.0,
                currency: None,
            }],
        }))
        .unwrap();
    assert_eq!(result.is_error, Some(true));
    let json = extract_json(&result);
    assert_eq!(json["success"], false);
    assert!(json["error"].as_str().unwrap().contains("non-negative"));

    let rates = extract_json(&server.get_role_rates().unwrap());
    assert_eq!(rates["rates"].as_array().unwrap().len(), 7);
}

#[test]
fn save_and_read_rates_and_config() {
    let server = test_server();
    let saved = server
        .save_role_rates(Parameters(SaveRoleRatesParams {
            rates: vec![RoleRateParam {
                role_id: "contractor".into(),
                role_name: Some("Contractor".into()),
                hourly_rate: 130.0,
                currency: Some("EUR".into()),
            }],
        }))
        .unwrap();
    assert_eq!(extract_json(&saved), json!({"success": true}));
    let rates = extract_json(&server.get_role_rates().unwrap());
    assert_eq!(rates["rates"][0]["roleId"], "contractor");
    assert_eq!(rates["rates"][0]["currency"], "EUR");

    server
        .save_config(Parameters(SaveConfigParams {
            currency: Some("EUR".into()),
            work_hours_per_day: None,
        }))
        .unwrap();
    let config = extract_json(&server.get_config().unwrap());
    assert_eq!(
        config["settings"],
        json!({"currency": "EUR", "workHoursPerDay": 8.0})
    );
}

#[test]
fn optimizations_and_velocity() {
    let server = test_server();
    let report = extract_json(&server.suggest_optimizations().unwrap());
    assert_eq!(report["success"], true);
    assert_eq!(report["suggestions"], json!([]));
    assert_eq!(report["totalPotentialSavings"], 0.0);

    let velocity = extract_json(&server.get_velocity_correlation().unwrap());
    assert_eq!(velocity["sampleData"], true);
    assert!(velocity["correlation"].as_f64().unwrap() < 0.0);
    assert!(velocity["recommendation"].is_string());
}
