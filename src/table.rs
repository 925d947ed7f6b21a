use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};

use crate::model::{FlightOption, FlightPrice};

pub fn format_price(price: Option<&FlightPrice>) -> String {
    price.map(FlightPrice::display).unwrap_or_else(|| "—".to_string())
}

pub fn format_duration(option: &FlightOption) -> String {
    if option.segments.is_empty() {
        return "—".to_string();
    }
    let total = option.total_duration_minutes();
    format!("{}h {:02}m", total / 60, total % 60)
}

/// `2026-03-01T10:30:00` style stamps shown as `2026-03-01 10:30`.
pub fn format_timestamp(stamp: &str) -> String {
    match stamp.split_once('T') {
        Some((date, time)) => format!("{date} {}", time.get(..5).unwrap_or(time)),
        None => stamp.to_string(),
    }
}

pub fn format_stops(option: &FlightOption) -> String {
    match option.stops() {
        0 if option.segments.is_empty() => "—".to_string(),
        0 => "Nonstop".to_string(),
        n => {
            let via: Vec<&str> = option.segments[..option.segments.len().saturating_sub(1)]
                .iter()
                .map(|s| s.arrival_airport_code.as_str())
                .collect();
            if via.is_empty() {
                n.to_string()
            } else {
                format!("{n} ({})", via.join(", "))
            }
        }
    }
}

pub fn render(options: &[FlightOption]) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "Option", "Flights", "Route", "Depart", "Arrive", "Duration", "Stops", "Aircraft",
            "Price",
        ]);

    for option in options {
        let flights: Vec<String> = option.segments.iter().map(|s| s.flight_designator()).collect();

        let route: Vec<String> = option
            .segments
            .iter()
            .map(|s| format!("{} → {}", s.departure_airport_code, s.arrival_airport_code))
            .collect();

        let depart = option
            .segments
            .first()
            .map(|s| format_timestamp(&s.departure_date_time))
            .unwrap_or_else(|| "—".to_string());

        let arrive = option
            .segments
            .last()
            .map(|s| format_timestamp(&s.arrival_date_time))
            .unwrap_or_else(|| "—".to_string());

        let aircraft: Vec<String> = option
            .segments
            .iter()
            .filter_map(|s| s.equipment_code.clone())
            .collect();

        table.add_row(vec![
            option.option_id.to_string(),
            flights.join("\n"),
            route.join("\n"),
            depart,
            arrive,
            format_duration(option),
            format_stops(option),
            aircraft.join(", "),
            format_price(option.price.as_ref()),
        ]);
    }

    table.to_string()
}

/// One line per option, for scripts.
pub fn render_compact(options: &[FlightOption]) -> String {
    options
        .iter()
        .map(|option| {
            let route: Vec<&str> = option
                .origin()
                .into_iter()
                .chain(option.segments.iter().map(|s| s.arrival_airport_code.as_str()))
                .collect();
            let flights: Vec<String> =
                option.segments.iter().map(|s| s.flight_designator()).collect();
            let times = match (option.segments.first(), option.segments.last()) {
                (Some(d), Some(a)) => format!(
                    "{}>{}",
                    format_timestamp(&d.departure_date_time),
                    format_timestamp(&a.arrival_date_time)
                ),
                _ => "—".to_string(),
            };
            format!(
                "{} | {} | {} | {} | {} | {}",
                format_price(option.price.as_ref()),
                route.join(">"),
                format_duration(option),
                format_stops(option).to_lowercase(),
                flights.join(","),
                times
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
