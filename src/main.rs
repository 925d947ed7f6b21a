use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use flysearch::error::SearchError;
use flysearch::fetch::{FetchOptions, AVAILABILITY_URL};
use flysearch::model::FlightOption;
use flysearch::query::{
    CabinClass, OriginDestinationQuery, PassengerCode, PassengerCount, SearchPayload,
};
use flysearch::table;

#[derive(Parser)]
#[command(
    name = "flysearch",
    about = "Search airline flight availability from the terminal",
    version,
    after_help = "\
Examples:
  flysearch search -f IST -t LHR -d 2026-04-01
  flysearch search -f IST -t JFK -d 2026-05-01 --return-date 2026-05-15
  flysearch search -f IST -t NRT -d 2026-03-01 --cabin business --adults 2
  flysearch search -f IST -t CDG -d 2026-03-01 --json --pretty"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    #[command(
        about = "Search for flights",
        long_about = "Search for bookable flight options between two airports on a date.\n\
            Add --return-date to search the return leg in the same request.",
        after_help = "\
Examples:
  One-way:      flysearch search -f IST -t LHR -d 2026-04-01
  Round-trip:   flysearch search -f IST -t JFK -d 2026-05-01 --return-date 2026-05-15
  Business:     flysearch search -f IST -t NRT -d 2026-03-01 --cabin business
  JSON output:  flysearch search -f IST -t CDG -d 2026-03-01 --json --pretty
  Scripts:      flysearch search -f IST -t CDG -d 2026-03-01 --compact"
    )]
    Search(SearchArgs),
}

#[derive(clap::Args)]
struct SearchArgs {
    #[arg(
        short, long,
        value_name = "IATA",
        help = "Departure airport code",
        long_help = "Departure airport IATA code (3 letters, e.g. IST, JFK, LHR)."
    )]
    from: String,

    #[arg(
        short, long,
        value_name = "IATA",
        help = "Arrival airport code",
        long_help = "Arrival airport IATA code (3 letters, e.g. LHR, CDG, NRT)."
    )]
    to: String,

    #[arg(
        short, long,
        value_name = "YYYY-MM-DD",
        help = "Departure date",
        long_help = "Departure date in YYYY-MM-DD format."
    )]
    date: String,

    #[arg(
        long,
        value_name = "YYYY-MM-DD",
        help = "Return date (adds the return leg)"
    )]
    return_date: Option<String>,

    #[arg(
        long,
        default_value = "economy",
        value_name = "CLASS",
        help = "Cabin class [economy, business]"
    )]
    cabin: String,

    #[arg(long, default_value = "1", value_name = "N", help = "Number of adult passengers")]
    adults: u32,

    #[arg(long, default_value = "0", value_name = "N", help = "Number of child passengers (2-11)")]
    children: u32,

    #[arg(long, default_value = "0", value_name = "N", help = "Number of infants (under 2)")]
    infants: u32,

    #[arg(long, help = "One-line-per-option output (recommended for scripts)")]
    compact: bool,

    #[arg(long, help = "Output as JSON")]
    json: bool,

    #[arg(long, help = "Output as pretty-printed JSON")]
    pretty: bool,

    #[arg(long, value_name = "URL", help = "HTTP or SOCKS5 proxy")]
    proxy: Option<String>,

    #[arg(long, default_value = "30", value_name = "SECS", help = "Request timeout")]
    timeout: u64,

    #[arg(
        long,
        value_name = "URL",
        default_value = AVAILABILITY_URL,
        help = "Availability endpoint",
        hide_default_value = true
    )]
    endpoint: String,
}

fn is_json(args: &SearchArgs) -> bool {
    args.json || args.pretty
}

fn error_code(err: &SearchError) -> i32 {
    match err {
        _ if err.is_unavailable() => 0,
        SearchError::InvalidAirport(_)
        | SearchError::InvalidDate(_)
        | SearchError::Validation(_) => 2,
        SearchError::Transport(_) => 3,
        SearchError::EmptyResponse | SearchError::Decode(_) => 6,
        SearchError::Business(_) => 7,
        SearchError::Serialization(_) => 1,
    }
}

fn error_kind(err: &SearchError) -> &'static str {
    match err {
        SearchError::InvalidAirport(_) => "invalid_airport",
        SearchError::InvalidDate(_) => "invalid_date",
        SearchError::Validation(_) => "validation_error",
        SearchError::Serialization(_) => "serialization_error",
        SearchError::Transport(_) => "transport_error",
        SearchError::EmptyResponse => "empty_response",
        _ if err.is_unavailable() => "no_results",
        SearchError::Decode(_) => "no_results",
        SearchError::Business(_) => "business_error",
    }
}

fn die(err: &SearchError, json_mode: bool) -> ! {
    if json_mode {
        let json = serde_json::json!({
            "error": {
                "kind": error_kind(err),
                "message": err.user_message(),
            }
        });
        println!("{json}");
    } else {
        eprintln!("error: {}", err.user_message());
    }
    process::exit(error_code(err));
}

fn build_payload(args: &SearchArgs) -> Result<SearchPayload, SearchError> {
    let from = args.from.trim().to_uppercase();
    let to = args.to.trim().to_uppercase();

    let mut legs = vec![OriginDestinationQuery::new(&from, &to, &args.date)];
    if let Some(ref ret) = args.return_date {
        legs.push(OriginDestinationQuery::new(&to, &from, ret));
    }

    let passengers: Vec<PassengerCount> = [
        (PassengerCode::Adult, args.adults),
        (PassengerCode::Child, args.children),
        (PassengerCode::Infant, args.infants),
    ]
    .into_iter()
    .filter(|(_, n)| *n > 0)
    .map(|(code, n)| PassengerCount::new(code, n))
    .collect();

    if args.infants > args.adults {
        return Err(SearchError::Validation(
            "infants cannot exceed number of adults".into(),
        ));
    }

    let cabin = CabinClass::from_str_loose(&args.cabin)?;
    let payload = SearchPayload::new(legs, passengers, cabin);
    payload.validate()?;
    Ok(payload)
}

fn print_result(options: &[FlightOption], args: &SearchArgs) -> Result<(), serde_json::Error> {
    if is_json(args) {
        let output = if args.pretty {
            serde_json::to_string_pretty(options)?
        } else {
            serde_json::to_string(options)?
        };
        println!("{output}");
    } else if options.is_empty() {
        println!("No flights found.");
    } else if args.compact {
        println!("{}", table::render_compact(options));
    } else {
        println!("{}", table::render(options));
    }
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Search(args) => {
            let json_mode = is_json(&args);

            let payload = match build_payload(&args) {
                Ok(p) => p,
                Err(e) => die(&e, json_mode),
            };

            let options = FetchOptions {
                endpoint: args.endpoint.clone(),
                proxy: args.proxy.clone(),
                timeout: args.timeout,
            };

            match flysearch::search_flights(&payload, &options).await {
                Ok(found) => {
                    if let Err(e) = print_result(&found, &args) {
                        eprintln!("error: failed to write results: {e}");
                        process::exit(1);
                    }
                }
                Err(e) => die(&e, json_mode),
            }
        }
    }
}
