//! Serde roundtrip and JsonSchema validation tests for the entity types.

use chrono::{NaiveDate, NaiveTime, Utc};
use mess_core::audit_detail::StatusChangedDetail;
use mess_core::entities::*;
use mess_core::enums::*;
use mess_core::responses::*;
use pretty_assertions::assert_eq;
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(recovered, val, "serde roundtrip failed for {}", stringify!($ty));

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

roundtrip_and_validate!(
    announcement_roundtrip,
    Announcement,
    Announcement {
        id: 1,
        title: "Republic Day Holiday Notice".into(),
        message: "The mess will remain closed on 26th January 2024.".into(),
        category: AnnouncementCategory::Holiday,
        created_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    poll_roundtrip,
    Poll,
    Poll {
        id: 2,
        meal: Meal::Breakfast,
        date_label: "Tomorrow".into(),
        question: "Will you come for breakfast tomorrow?".into(),
        deadline: "10:00 PM Today".into(),
        status: PollStatus::Active,
        yes_count: 98,
        no_count: 45,
        total_eligible: 248,
        created_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    anonymous_feedback_roundtrip,
    Feedback,
    Feedback {
        id: 2,
        author: Author::Anonymous,
        feedback_type: FeedbackType::Complaint,
        category: "Hygiene".into(),
        message: "The dining tables are not being cleaned properly.".into(),
        status: FeedbackStatus::Open,
        response: None,
        created_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    named_feedback_roundtrip,
    Feedback,
    Feedback {
        id: 3,
        author: Author::Student {
            student_ref: "stu-2".into(),
            name: "Priya M.".into(),
            email: "priya@college.edu".into(),
        },
        feedback_type: FeedbackType::Suggestion,
        category: "Menu".into(),
        message: "More South Indian breakfast options please.".into(),
        status: FeedbackStatus::Review,
        response: Some("We are looking into adding more options.".into()),
        created_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    payment_roundtrip,
    PaymentRecord,
    PaymentRecord {
        id: 1,
        student_ref: "stu-1".into(),
        student_name: "Rahul Sharma".into(),
        student_email: "rahul@college.edu".into(),
        room: "A-204".into(),
        period: "January 2024".into(),
        amount_due: 2500,
        status: PaymentStatus::Paid,
        due_date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
        paid_on: NaiveDate::from_ymd_opt(2024, 1, 5),
        transaction_id: Some("TXN20240105001".into()),
    }
);

roundtrip_and_validate!(
    meal_timing_roundtrip,
    MealTiming,
    MealTiming {
        meal: Meal::Lunch,
        start_time: NaiveTime::from_hms_opt(12, 30, 0).unwrap(),
        end_time: NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
        items: vec!["Rice".into(), "Dal".into(), "Roti".into()],
    }
);

roundtrip_and_validate!(
    audit_entry_roundtrip,
    AuditEntry,
    AuditEntry {
        id: 9,
        entity_type: EntityType::Feedback,
        entity_id: "1".into(),
        action: AuditAction::StatusChanged,
        detail: Some(
            serde_json::to_value(StatusChangedDetail {
                from: "open".into(),
                to: "review".into(),
            })
            .unwrap()
        ),
        created_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    payment_summary_roundtrip,
    PaymentSummary,
    PaymentSummary {
        paid: 3,
        pending: 3,
        overdue: 2,
        total_collected: 7500,
        total_outstanding: 12500,
        currency: "INR".into(),
    }
);

#[test]
fn meal_timing_serializes_hhmm() {
    let timing = MealTiming {
        meal: Meal::Dinner,
        start_time: NaiveTime::from_hms_opt(19, 30, 0).unwrap(),
        end_time: NaiveTime::from_hms_opt(21, 0, 0).unwrap(),
        items: Vec::new(),
    };
    let json = serde_json::to_value(&timing).unwrap();
    assert_eq!(json["start_time"], "19:30");
    assert_eq!(json["end_time"], "21:00");
    assert_eq!(timing.window_label(), "19:30 - 21:00");
}

#[test]
fn anonymous_author_serializes_without_identity_fields() {
    let json = serde_json::to_value(Author::Anonymous).unwrap();
    assert_eq!(json, serde_json::json!({ "kind": "anonymous" }));
}
