use flysearch::error::SearchError;
use flysearch::query::{
    BookerSearch, CabinClass, OriginDestinationQuery, PassengerCode, PassengerCount,
    SearchPayload,
};
use serde_json::json;

fn make_valid_payload() -> SearchPayload {
    SearchPayload::new(
        vec![OriginDestinationQuery::new("IST", "LHR", "2026-03-01")],
        vec![PassengerCount::new(PassengerCode::Adult, 1)],
        CabinClass::Economy,
    )
}

#[test]
fn valid_payload_passes() {
    assert!(make_valid_payload().validate().is_ok());
}

#[test]
fn new_fills_fixed_fields() {
    let p = make_valid_payload();
    assert_eq!(p.module_type, "STANDARD");
    assert_eq!(p.selected_booker_search, "O");
    assert_eq!(p.selected_cabin_class, "ECONOMY");
}

#[test]
fn reversed_second_leg_is_round_trip() {
    let legs = vec![
        OriginDestinationQuery::new("IST", "JFK", "2026-05-01"),
        OriginDestinationQuery::new("JFK", "IST", "2026-05-15"),
    ];
    assert_eq!(BookerSearch::for_legs(&legs), BookerSearch::RoundTrip);

    let p = SearchPayload::new(legs, vec![], CabinClass::Business);
    assert_eq!(p.selected_booker_search, "R");
    assert_eq!(p.selected_cabin_class, "BUSINESS");
}

#[test]
fn unrelated_second_leg_is_not_round_trip() {
    let legs = vec![
        OriginDestinationQuery::new("IST", "JFK", "2026-05-01"),
        OriginDestinationQuery::new("BOS", "IST", "2026-05-15"),
    ];
    assert_eq!(BookerSearch::for_legs(&legs), BookerSearch::OneWay);
}

#[test]
fn rejects_empty_legs() {
    let mut p = make_valid_payload();
    p.legs.clear();
    assert!(matches!(p.validate(), Err(SearchError::Validation(_))));
}

#[test]
fn rejects_lowercase_airport() {
    let mut p = make_valid_payload();
    p.legs[0].origin_airport_code = "ist".into();
    assert!(matches!(p.validate(), Err(SearchError::InvalidAirport(code)) if code == "ist"));
}

#[test]
fn rejects_too_short_airport() {
    let mut p = make_valid_payload();
    p.legs[0].destination_airport_code = "LH".into();
    assert!(p.validate().is_err());
}

#[test]
fn rejects_too_long_airport() {
    let mut p = make_valid_payload();
    p.legs[0].destination_airport_code = "LHRX".into();
    assert!(p.validate().is_err());
}

#[test]
fn rejects_bad_date_format() {
    let mut p = make_valid_payload();
    p.legs[0].departure_date = "03/01/2026".into();
    assert!(matches!(p.validate(), Err(SearchError::InvalidDate(_))));
}

#[test]
fn rejects_invalid_month() {
    let mut p = make_valid_payload();
    p.legs[0].departure_date = "2026-13-01".into();
    assert!(p.validate().is_err());
}

#[test]
fn rejects_feb_30() {
    let mut p = make_valid_payload();
    p.legs[0].departure_date = "2026-02-30".into();
    assert!(p.validate().is_err());
}

#[test]
fn accepts_leap_day() {
    let mut p = make_valid_payload();
    p.legs[0].departure_date = "2028-02-29".into();
    assert!(p.validate().is_ok());
}

#[test]
fn rejects_non_leap_feb_29() {
    let mut p = make_valid_payload();
    p.legs[0].departure_date = "2027-02-29".into();
    assert!(p.validate().is_err());
}

#[test]
fn rejects_zero_passengers() {
    let mut p = make_valid_payload();
    p.passengers = vec![PassengerCount::new(PassengerCode::Adult, 0)];
    assert!(p.validate().is_err());
}

#[test]
fn rejects_too_many_passengers() {
    let mut p = make_valid_payload();
    p.passengers = vec![
        PassengerCount::new(PassengerCode::Adult, 6),
        PassengerCount::new(PassengerCode::Child, 4),
    ];
    let err = p.validate().unwrap_err();
    assert!(err.to_string().contains("exceeds maximum of 9"));
}

#[test]
fn huge_passenger_counts_do_not_wrap() {
    let mut p = make_valid_payload();
    p.passengers = vec![
        PassengerCount::new(PassengerCode::Adult, u32::MAX),
        PassengerCount::new(PassengerCode::Child, 1),
    ];
    assert_eq!(p.total_passengers(), u64::from(u32::MAX) + 1);
    let err = p.validate().unwrap_err();
    assert!(matches!(&err, SearchError::Validation(msg) if msg.contains("exceeds maximum of 9")));
}

#[test]
fn rejects_signed_date_parts() {
    let mut p = make_valid_payload();
    p.legs[0].departure_date = "2026-+3-01".into();
    assert!(matches!(p.validate(), Err(SearchError::InvalidDate(_))));
}

#[test]
fn cabin_class_parsing() {
    assert_eq!(CabinClass::from_str_loose("economy").unwrap(), CabinClass::Economy);
    assert_eq!(CabinClass::from_str_loose("BUSINESS").unwrap(), CabinClass::Business);
    assert!(CabinClass::from_str_loose("first").is_err());
}

#[test]
fn serializes_with_wire_names() {
    let value = serde_json::to_value(make_valid_payload()).unwrap();
    assert_eq!(
        value,
        json!({
            "moduleType": "STANDARD",
            "originDestinationInformationList": [{
                "destinationAirportCode": "LHR",
                "destinationMultiPort": false,
                "originAirportCode": "IST",
                "departureDate": "2026-03-01"
            }],
            "passengerTypeList": [{ "quantity": 1, "code": "ADULT" }],
            "selectedBookerSearch": "O",
            "selectedCabinClass": "ECONOMY"
        })
    );
}

#[test]
fn payload_survives_encode_decode() {
    let p = SearchPayload::new(
        vec![
            OriginDestinationQuery::new("IST", "JFK", "2026-05-01"),
            OriginDestinationQuery::new("JFK", "IST", "2026-05-15"),
        ],
        vec![
            PassengerCount::new(PassengerCode::Adult, 2),
            PassengerCount::new(PassengerCode::Infant, 1),
        ],
        CabinClass::Business,
    );
    let bytes = p.to_json().unwrap();
    let back: SearchPayload = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(back, p);
}

#[test]
fn decoding_payload_names_missing_field() {
    let err = serde_json::from_value::<SearchPayload>(json!({
        "moduleType": "STANDARD",
        "originDestinationInformationList": [],
        "passengerTypeList": [],
        "selectedBookerSearch": "O"
    }))
    .unwrap_err();
    assert!(err.to_string().contains("selectedCabinClass"));
}
