use serde_path_to_error::{Path, Segment};

use crate::error::{DecodeError, SearchError, UNKNOWN_ERROR};
use crate::model::{FlightOption, SearchResponse};

/// Walks the object keys of `path` through the response schema. Sequence
/// indices keep the element type of the list they index.
pub fn schema_type(path: &Path) -> &'static str {
    let mut ty = "SearchResponse";
    for segment in path.iter() {
        if let Segment::Map { key } = segment {
            ty = match (ty, key.as_str()) {
                ("SearchResponse", "data") => "ResponseBody",
                ("SearchResponse", "message") => "ResponseMessage",
                ("ResponseBody", "originDestinationInformationList") => "OriginDestinationResult",
                ("OriginDestinationResult", "originDestinationOptionList") => "FlightOption",
                ("FlightOption", "segmentList") => "FlightSegment",
                ("FlightOption", "startingPrice") => "FlightPrice",
                ("FlightSegment", "flightCode") => "FlightCode",
                ("ResponseMessage", "detail") => "ResponseDetail",
                _ => ty,
            };
        }
    }
    ty
}

pub fn decode_response(body: &str) -> Result<SearchResponse, DecodeError> {
    let mut de = serde_json::Deserializer::from_str(body);
    let response: SearchResponse = serde_path_to_error::deserialize(&mut de).map_err(|e| {
        let path = e.path().to_string();
        let type_name = schema_type(e.path());
        DecodeError::new(e.into_inner(), path, type_name)
    })?;
    de.end()
        .map_err(|e| DecodeError::new(e, ".".to_string(), "SearchResponse"))?;
    Ok(response)
}

/// First detail code the endpoint sent back, if any.
pub fn business_code(response: &SearchResponse) -> String {
    response
        .message
        .as_ref()
        .and_then(|m| m.detail.first())
        .map(|d| d.code.clone())
        .unwrap_or_else(|| UNKNOWN_ERROR.to_string())
}

/// Concatenates every leg's options in order. Failure, or success without
/// a body, becomes a business error.
pub fn into_options(response: SearchResponse) -> Result<Vec<FlightOption>, SearchError> {
    match response {
        SearchResponse {
            success: true,
            data: Some(data),
            ..
        } => Ok(data.legs.into_iter().flat_map(|leg| leg.options).collect()),
        other => Err(SearchError::Business(business_code(&other))),
    }
}

pub fn parse_response(body: &str) -> Result<Vec<FlightOption>, SearchError> {
    if body.trim().is_empty() {
        return Err(SearchError::EmptyResponse);
    }
    let response = decode_response(body).map_err(SearchError::Decode)?;
    into_options(response)
}
