use serde::{Deserialize, Serialize};

use crate::error::SearchError;

pub const MODULE_TYPE_STANDARD: &str = "STANDARD";

/// One directional leg of the requested itinerary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OriginDestinationQuery {
    pub destination_airport_code: String,
    pub destination_multi_port: bool,
    pub origin_airport_code: String,
    pub departure_date: String,
}

impl OriginDestinationQuery {
    pub fn new(origin: &str, destination: &str, date: &str) -> Self {
        Self {
            destination_airport_code: destination.to_string(),
            destination_multi_port: false,
            origin_airport_code: origin.to_string(),
            departure_date: date.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassengerCount {
    pub quantity: u32,
    pub code: String,
}

impl PassengerCount {
    pub fn new(code: PassengerCode, quantity: u32) -> Self {
        Self {
            quantity,
            code: code.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPayload {
    pub module_type: String,
    #[serde(rename = "originDestinationInformationList")]
    pub legs: Vec<OriginDestinationQuery>,
    #[serde(rename = "passengerTypeList")]
    pub passengers: Vec<PassengerCount>,
    pub selected_booker_search: String,
    pub selected_cabin_class: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassengerCode {
    Adult,
    Child,
    Infant,
}

impl PassengerCode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Adult => "ADULT",
            Self::Child => "CHILD",
            Self::Infant => "INFANT",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CabinClass {
    Economy,
    Business,
}

impl CabinClass {
    pub fn from_str_loose(s: &str) -> Result<Self, SearchError> {
        match s.to_ascii_lowercase().as_str() {
            "economy" => Ok(Self::Economy),
            "business" => Ok(Self::Business),
            _ => Err(SearchError::Validation(format!("invalid cabin class: {s}"))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Economy => "ECONOMY",
            Self::Business => "BUSINESS",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookerSearch {
    OneWay,
    RoundTrip,
}

impl BookerSearch {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OneWay => "O",
            Self::RoundTrip => "R",
        }
    }

    /// Two legs where the second reverses the first are a round trip.
    pub fn for_legs(legs: &[OriginDestinationQuery]) -> Self {
        match legs {
            [out, back]
                if out.origin_airport_code == back.destination_airport_code
                    && out.destination_airport_code == back.origin_airport_code =>
            {
                Self::RoundTrip
            }
            _ => Self::OneWay,
        }
    }
}

fn validate_airport(code: &str) -> Result<(), SearchError> {
    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(SearchError::InvalidAirport(code.to_string()));
    }
    Ok(())
}

fn days_in_month(year: u32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if (year % 4 == 0 && year % 100 != 0) || year % 400 == 0 {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

fn validate_date(date: &str) -> Result<(), SearchError> {
    let invalid = || SearchError::InvalidDate(date.to_string());

    let parts: Vec<&str> = date.split('-').collect();
    if parts.len() != 3 || parts[0].len() != 4 || parts[1].len() != 2 || parts[2].len() != 2 {
        return Err(invalid());
    }
    if !parts.iter().all(|p| p.bytes().all(|b| b.is_ascii_digit())) {
        return Err(invalid());
    }
    let year: u32 = parts[0].parse().map_err(|_| invalid())?;
    let month: u32 = parts[1].parse().map_err(|_| invalid())?;
    let day: u32 = parts[2].parse().map_err(|_| invalid())?;

    if year < 2000 || !(1..=12).contains(&month) {
        return Err(invalid());
    }

    if day < 1 || day > days_in_month(year, month) {
        return Err(invalid());
    }

    Ok(())
}

impl SearchPayload {
    pub fn new(
        legs: Vec<OriginDestinationQuery>,
        passengers: Vec<PassengerCount>,
        cabin: CabinClass,
    ) -> Self {
        let booker = BookerSearch::for_legs(&legs);
        Self {
            module_type: MODULE_TYPE_STANDARD.to_string(),
            legs,
            passengers,
            selected_booker_search: booker.as_str().to_string(),
            selected_cabin_class: cabin.as_str().to_string(),
        }
    }

    pub fn total_passengers(&self) -> u64 {
        self.passengers.iter().map(|p| u64::from(p.quantity)).sum()
    }

    pub fn validate(&self) -> Result<(), SearchError> {
        if self.legs.is_empty() {
            return Err(SearchError::Validation(
                "at least one flight leg required".into(),
            ));
        }

        for leg in &self.legs {
            validate_airport(&leg.origin_airport_code)?;
            validate_airport(&leg.destination_airport_code)?;
            validate_date(&leg.departure_date)?;
        }

        let total = self.total_passengers();

        if total > 9 {
            return Err(SearchError::Validation(format!(
                "total passengers ({total}) exceeds maximum of 9"
            )));
        }

        if total == 0 {
            return Err(SearchError::Validation(
                "at least one passenger required".into(),
            ));
        }

        Ok(())
    }

    pub fn to_json(&self) -> Result<Vec<u8>, SearchError> {
        serde_json::to_vec(self).map_err(SearchError::Serialization)
    }
}
