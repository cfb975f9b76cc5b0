use chrono::{NaiveDate, Utc};
use meetcost_core::{Meeting, MeetingType, RoleRate, Settings};
use meetcost_store::{
    load_meetings, load_role_rates, load_settings, save_meetings, save_role_rates, save_settings,
    SqliteStore,
};

#[test]
fn values_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("meetcost.db");

    {
        let store = SqliteStore::open(&path).unwrap();
        let meeting = Meeting {
            id: "m-1".into(),
            title: "Planning".into(),
            date: NaiveDate::from_ymd_opt(2025, 2, 10).unwrap(),
            duration_minutes: 90,
            attendee_count: 5,
            attendee_roles: vec!["pm".into(), "engineer".into()],
            meeting_type: MeetingType::Planning,
            calculated_cost: 247.5,
            created_at: Utc::now(),
        };
        save_meetings(&store, &[meeting]).unwrap();
        save_role_rates(&store, &[RoleRate::new("pm", "Product Manager", 95.0)]).unwrap();
        save_settings(
            &store,
            &Settings {
                currency: "GBP".into(),
                work_hours_per_day: 7.0,
            },
        )
        .unwrap();
    }

    assert!(path.exists());
    let store = SqliteStore::open(&path).unwrap();
    let meetings = load_meetings(&store).unwrap();
    assert_eq!(meetings.len(), 1);
    assert_eq!(meetings[0].meeting_type, MeetingType::Planning);
    assert_eq!(meetings[0].attendee_roles, vec!["pm", "engineer"]);
    assert_eq!(load_role_rates(&store).unwrap()[0].hourly_rate, 95.0);
    assert_eq!(load_settings(&store).unwrap().currency, "GBP");
}

#[test]
fn fresh_database_reads_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let store = SqliteStore::open(&dir.path().join("fresh.db")).unwrap();
    assert!(load_meetings(&store).unwrap().is_empty());
    assert_eq!(load_role_rates(&store).unwrap().len(), 7);
    assert_eq!(load_settings(&store).unwrap(), Settings::default());
}
