use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<ResponseBody>,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<ResponseMessage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    #[serde(rename = "originDestinationInformationList")]
    pub legs: Vec<OriginDestinationResult>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OriginDestinationResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outbound_flight_id: Option<String>,
    pub departure_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrival_date: Option<String>,
    pub origin_location: String,
    pub destination_location: String,
    pub sold_out_all_flights: bool,
    #[serde(rename = "originDestinationOptionList")]
    pub options: Vec<FlightOption>,
}

/// One priced, bookable combination of segments for a leg.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightOption {
    pub option_id: i64,
    #[serde(rename = "segmentList")]
    pub segments: Vec<FlightSegment>,
    #[serde(rename = "startingPrice", default, skip_serializing_if = "Option::is_none")]
    pub price: Option<FlightPrice>,
}

impl FlightOption {
    pub fn total_duration_millis(&self) -> i64 {
        self.segments
            .iter()
            .map(|s| s.journey_duration_in_millis)
            .fold(0i64, i64::saturating_add)
    }

    pub fn total_duration_minutes(&self) -> i64 {
        self.total_duration_millis() / 60_000
    }

    /// Connections between segments plus any technical stops inside them.
    pub fn stops(&self) -> usize {
        let connections = self.segments.len().saturating_sub(1);
        let technical = self
            .segments
            .iter()
            .filter_map(|s| s.stop_count)
            .filter(|n| *n > 0)
            .fold(0i64, i64::saturating_add);
        connections.saturating_add(usize::try_from(technical).unwrap_or(usize::MAX))
    }

    pub fn origin(&self) -> Option<&str> {
        self.segments.first().map(|s| s.departure_airport_code.as_str())
    }

    pub fn destination(&self) -> Option<&str> {
        self.segments.last().map(|s| s.arrival_airport_code.as_str())
    }
}

/// A single takeoff and landing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightSegment {
    pub departure_airport_code: String,
    pub arrival_airport_code: String,
    pub departure_date_time: String,
    pub arrival_date_time: String,
    pub flight_code: FlightCode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connected: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rph: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_share_ind: Option<String>,
    pub journey_duration_in_millis: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipment_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_count: Option<i64>,
}

impl FlightSegment {
    pub fn flight_designator(&self) -> String {
        format!(
            "{}{}",
            self.flight_code.airline_code, self.flight_code.flight_number
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightCode {
    pub airline_code: String,
    pub flight_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lease_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightPrice {
    pub currency_code: String,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency_sign: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decimal_places: Option<i64>,
}

impl FlightPrice {
    pub fn display(&self) -> String {
        let places = self.decimal_places.unwrap_or(2).clamp(0, 6) as usize;
        match &self.currency_sign {
            Some(sign) if !sign.is_empty() => format!("{}{:.*}", sign, places, self.amount),
            _ => format!("{:.*} {}", places, self.amount, self.currency_code),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseMessage {
    pub detail: Vec<ResponseDetail>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseDetail {
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<Vec<String>>,
}
