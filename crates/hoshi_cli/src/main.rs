use clap::{Parser, Subcommand};
use hoshi_rs::*;

#[derive(Parser)]
#[command(name = "hoshi", about = "Hoshi astrology core CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize a birth record to UTC and a Julian Day
    Normalize {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Birth time (HH:MM, 24-hour); omit if unknown
        #[arg(long)]
        time: Option<String>,
        /// IANA timezone identifier (e.g. Asia/Tokyo)
        #[arg(long)]
        tz: String,
        /// Emit JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
    /// Tropical chart from explicit longitudes (offline canned ephemeris)
    Western {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Birth time (HH:MM, 24-hour); omit if unknown
        #[arg(long)]
        time: Option<String>,
        /// IANA timezone identifier
        #[arg(long)]
        tz: String,
        /// Geographic latitude in decimal degrees
        #[arg(long)]
        lat: Option<f64>,
        /// Geographic longitude in decimal degrees
        #[arg(long)]
        lon: Option<f64>,
        /// Body longitudes: sun=294.5,moon=100.0,... (all ten bodies)
        #[arg(long)]
        positions: String,
        /// Ascendant longitude for the canned house query
        #[arg(long)]
        asc_lon: Option<f64>,
    },
    /// Sidereal chart from explicit Sun/Moon longitudes
    Vedic {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Birth time (HH:MM, 24-hour); omit if unknown
        #[arg(long)]
        time: Option<String>,
        /// IANA timezone identifier
        #[arg(long)]
        tz: String,
        /// Tropical Sun longitude in degrees
        #[arg(long)]
        sun_lon: f64,
        /// Tropical Moon longitude in degrees
        #[arg(long)]
        moon_lon: f64,
        /// Geographic latitude in decimal degrees
        #[arg(long)]
        lat: Option<f64>,
        /// Geographic longitude in decimal degrees
        #[arg(long)]
        lon: Option<f64>,
        /// Tropical ascendant longitude for the canned house query
        #[arg(long)]
        asc_lon: Option<f64>,
    },
    /// Aspect table for explicit longitudes
    Aspects {
        /// Body longitudes: sun=294.5,moon=100.0,...
        #[arg(long)]
        positions: String,
    },
    /// Compatibility between two MBTI type codes
    Compat {
        /// First type (e.g. INTJ)
        type_a: String,
        /// Second type (e.g. ENFP)
        type_b: String,
    },
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli.command) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Normalize {
            date,
            time,
            tz,
            json,
        } => run_normalize(&date, time.as_deref(), &tz, json),
        Commands::Western {
            date,
            time,
            tz,
            lat,
            lon,
            positions,
            asc_lon,
        } => run_western(&date, time.as_deref(), &tz, lat, lon, &positions, asc_lon),
        Commands::Vedic {
            date,
            time,
            tz,
            sun_lon,
            moon_lon,
            lat,
            lon,
            asc_lon,
        } => run_vedic(&date, time.as_deref(), &tz, sun_lon, moon_lon, lat, lon, asc_lon),
        Commands::Aspects { positions } => run_aspects(&positions),
        Commands::Compat { type_a, type_b } => run_compat(&type_a, &type_b),
    }
}

fn run_normalize(
    date: &str,
    time: Option<&str>,
    tz: &str,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let parsed_date = parse_birth_date(date)?;
    let parsed_time = parse_birth_time(time)?;
    let nb = hoshi_rs::normalize_birth(date, time, tz)?;
    let rendered = format_birth_date_time(parsed_date, parsed_time, tz)?;

    if json {
        let value = serde_json::json!({
            "utc": nb.utc.to_rfc3339(),
            "julian_day": nb.julian_day,
            "formatted": rendered,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("UTC:        {}", nb.utc.to_rfc3339());
        println!("Julian Day: {:.6}", nb.julian_day);
        println!("Formatted:  {rendered}");
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn run_western(
    date: &str,
    time: Option<&str>,
    tz: &str,
    lat: Option<f64>,
    lon: Option<f64>,
    positions: &str,
    asc_lon: Option<f64>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut provider = StaticEphemeris::from_longitudes(&parse_positions(positions)?);
    if let Some(asc) = asc_lon {
        provider = provider.with_ascendant(asc);
    }

    let input = birth_input(date, time, tz, lat, lon)?;
    let reading = western_chart(&provider, &input)?;
    println!("{}", serde_json::to_string_pretty(&reading)?);
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn run_vedic(
    date: &str,
    time: Option<&str>,
    tz: &str,
    sun_lon: f64,
    moon_lon: f64,
    lat: Option<f64>,
    lon: Option<f64>,
    asc_lon: Option<f64>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut provider =
        StaticEphemeris::from_longitudes(&[(Body::Sun, sun_lon), (Body::Moon, moon_lon)]);
    if let Some(asc) = asc_lon {
        provider = provider.with_ascendant(asc);
    }

    let input = birth_input(date, time, tz, lat, lon)?;
    let reading = vedic_chart(&provider, &input)?;
    println!("{}", serde_json::to_string_pretty(&reading)?);
    Ok(())
}

fn run_aspects(positions: &str) -> Result<(), Box<dyn std::error::Error>> {
    let planets: Vec<PlanetPosition> = parse_positions(positions)?
        .into_iter()
        .map(|(body, lon)| {
            let longitude = normalize_360(lon);
            let info = sign_from_longitude(longitude);
            PlanetPosition {
                body,
                longitude,
                latitude: 0.0,
                distance: 0.0,
                speed: 0.0,
                sign: info.sign,
                degree: info.degrees_in_sign as u8,
            }
        })
        .collect();

    let aspects = detect_aspects(&planets);
    println!("{}", serde_json::to_string_pretty(&aspects)?);
    Ok(())
}

fn run_compat(type_a: &str, type_b: &str) -> Result<(), Box<dyn std::error::Error>> {
    let result = compatibility(type_a, type_b)?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

/// Parse a `sun=294.5,moon=100.0,...` longitude list.
fn parse_positions(spec: &str) -> Result<Vec<(Body, f64)>, String> {
    let mut out = Vec::new();
    for entry in spec.split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        let (name, value) = entry
            .split_once('=')
            .ok_or_else(|| format!("invalid position entry: {entry:?} (expected name=degrees)"))?;
        let body = body_by_name(name.trim())
            .ok_or_else(|| format!("unknown body name: {:?}", name.trim()))?;
        let longitude: f64 = value
            .trim()
            .parse()
            .map_err(|_| format!("invalid longitude {:?} for {}", value.trim(), body))?;
        out.push((body, longitude));
    }
    if out.is_empty() {
        return Err("no positions supplied".to_string());
    }
    Ok(out)
}

fn body_by_name(name: &str) -> Option<Body> {
    ALL_BODIES
        .into_iter()
        .find(|b| b.name().eq_ignore_ascii_case(name))
}
