use rust_decimal_macros::dec;
use serde_json::json;

use travel_budget::core::dispatch::{dispatch, LedgerIntent, LedgerReply};
use travel_budget::domain::booking::BookingRecord;
use travel_budget::session::TripSession;

fn intent(value: serde_json::Value) -> LedgerIntent {
    serde_json::from_value(value).expect("intent deserializes")
}

fn data(reply: LedgerReply) -> serde_json::Value {
    match reply {
        LedgerReply::Ok { data } => data,
        LedgerReply::Error { kind, message } => panic!("unexpected error {kind}: {message}"),
    }
}

#[test]
fn booking_flow_feeds_the_recorder_through_the_directory() {
    travel_budget::init();
    let mut session = TripSession::new();
    session.record_booking(BookingRecord::new(
        "HTL-204518",
        "hotel",
        "Taj Residency - Jaipur",
        dec!(7200),
    ));

    let reply = dispatch(
        &mut session,
        intent(json!({"intent": "set_budget", "total_budget": "60000", "group_size": 2})),
    );
    assert!(reply.is_ok());

    let receipt = data(dispatch(
        &mut session,
        intent(json!({
            "intent": "track_booking_expense",
            "booking_type": "hotel",
            "booking_reference": "HTL-204518"
        })),
    ));
    assert_eq!(receipt["amount"], "7200");
    assert_eq!(receipt["description"], "Taj Residency - Jaipur");
    assert_eq!(receipt["per_person_cost"], "3600");
    assert_eq!(receipt["remaining_budget"], "52800");
}

#[test]
fn full_conversational_flow_over_intents() {
    let mut session = TripSession::new();

    let setup = data(dispatch(
        &mut session,
        intent(json!({"intent": "set_budget", "total_budget": "90000", "group_size": 3})),
    ));
    assert_eq!(setup["per_person_budget"], "30000");

    data(dispatch(
        &mut session,
        intent(json!({
            "intent": "track_booking_expense",
            "booking_type": "flight",
            "amount": "30000",
            "description": "Delhi to Goa round trip"
        })),
    ));
    data(dispatch(
        &mut session,
        intent(json!({
            "intent": "add_expense",
            "category": "Food",
            "amount": "6000",
            "description": "dinner",
            "shared_by": 2
        })),
    ));

    let split = data(dispatch(&mut session, intent(json!({"intent": "calculate_split"}))));
    assert_eq!(split["per_person_bookings"], "10000");
    assert_eq!(split["per_person_additional"], "3000");
    assert_eq!(split["per_person_total"], "13000");
    assert_eq!(split["per_person_remaining"], "17000");
    assert_eq!(split["expense_details"].as_array().unwrap().len(), 2);

    let summary = data(dispatch(&mut session, intent(json!({"intent": "budget_summary"}))));
    assert_eq!(summary["total_spent"], "36000");
    assert_eq!(summary["booking_breakdown"]["flight"], "30000");
    assert_eq!(summary["category_breakdown"]["Food"], "6000");
    assert_eq!(summary["total_expenses_count"], 3);

    let bookings_only = data(dispatch(
        &mut session,
        intent(json!({"intent": "expense_list", "filter": "booking"})),
    ));
    assert_eq!(bookings_only["expense_count"], 1);
    assert_eq!(bookings_only["total_amount"], "30000");
}

#[test]
fn errors_come_back_as_replies_the_chat_can_relay() {
    let mut session = TripSession::new();

    let reply = dispatch(
        &mut session,
        intent(json!({
            "intent": "track_booking_expense",
            "booking_type": "hotel",
            "amount": "5000"
        })),
    );
    let LedgerReply::Error { kind, .. } = reply else {
        panic!("expected error before budget is set");
    };
    assert_eq!(kind, "uninitialized_ledger");

    dispatch(
        &mut session,
        intent(json!({"intent": "set_budget", "total_budget": "5000", "group_size": 2})),
    );

    let reply = dispatch(
        &mut session,
        intent(json!({"intent": "track_booking_expense", "booking_type": "hotel"})),
    );
    let LedgerReply::Error { kind, .. } = reply else {
        panic!("expected amount_required");
    };
    assert_eq!(kind, "amount_required");

    let reply = dispatch(
        &mut session,
        intent(json!({
            "intent": "track_booking_expense",
            "booking_type": "hotel",
            "booking_reference": "HTL-000000"
        })),
    );
    let LedgerReply::Error { kind, message } = reply else {
        panic!("expected booking_not_found");
    };
    assert_eq!(kind, "booking_not_found");
    assert!(message.contains("HTL-000000"));
}
