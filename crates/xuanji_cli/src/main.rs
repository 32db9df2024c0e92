use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chrono::Utc;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use xuanji_config::XuanjiConfig;
use xuanji_rs::{
    BirthFields, BirthTimePayload, CivilTime, SolarTimeRequest, birth_meta, cast_numbers,
    cast_time, draw, format_timezone_offset, get_offset_minutes_from_time_zone, hexagram,
    list_known_locations, parse_civil, parse_timezone_offset_minutes, resolve_timezone,
    solar_time, trigram,
};

#[derive(Parser)]
#[command(name = "xuanji", about = "Xuanji divination engine CLI", version)]
struct Cli {
    /// TOML config file (defaults to $XUANJI_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Trigram for a number (wraps modulo 8)
    Trigram {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Hexagram from an upper and lower trigram number
    Hexagram {
        #[arg(long, allow_hyphen_values = true)]
        upper: String,
        #[arg(long, allow_hyphen_values = true)]
        lower: String,
        /// Changing-line positions 1-6, comma separated
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        changing: Vec<i64>,
    },
    /// Cast from three drawn numbers
    CastNumbers {
        #[arg(num_args = 3, allow_hyphen_values = true)]
        numbers: Vec<String>,
    },
    /// Cast from a date and time
    CastTime {
        /// Civil date/time (YYYY-MM-DDThh:mm)
        #[arg(long)]
        date: String,
    },
    /// Parse a UTC offset label such as UTC+05:30
    TzParse { label: String },
    /// Render signed minutes as a UTC offset label
    TzFormat {
        #[arg(allow_hyphen_values = true)]
        minutes: f64,
    },
    /// Offset of an IANA zone at a UTC instant
    TzOffset {
        zone: String,
        /// UTC date/time (YYYY-MM-DDThh:mm), defaults to now
        #[arg(long)]
        date: Option<String>,
    },
    /// Resolve birth offset and UTC instant
    BirthMeta {
        /// Civil birth date/time (YYYY-MM-DDThh:mm)
        #[arg(long)]
        date: String,
        /// Explicit offset in minutes east of UTC
        #[arg(long, allow_hyphen_values = true)]
        offset: Option<f64>,
        /// UTC label or IANA zone name
        #[arg(long)]
        timezone: Option<String>,
    },
    /// Correct a birth time to true solar time
    SolarTime {
        /// Civil birth date/time (YYYY-MM-DDThh:mm)
        #[arg(long)]
        date: String,
        /// Place name or "lat, lng"
        #[arg(long)]
        location: Option<String>,
        /// Longitude in degrees east; overrides the location's
        #[arg(long, allow_hyphen_values = true)]
        longitude: Option<f64>,
        /// UTC label or IANA zone name
        #[arg(long)]
        timezone: Option<String>,
        /// Explicit offset in minutes east of UTC
        #[arg(long, allow_hyphen_values = true)]
        offset: Option<f64>,
    },
    /// List gazetteer places
    Locations,
    /// Draw a tarot spread
    Tarot {
        /// SingleCard, ThreeCard, CelticCross, Relationship or Horseshoe
        #[arg(long)]
        spread: Option<String>,
        /// Seed for a reproducible draw
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn birth_fields(civil: &CivilTime) -> BirthFields {
    BirthFields::new(
        i64::from(civil.year),
        i64::from(civil.month),
        i64::from(civil.day),
        i64::from(civil.hour),
        i64::from(civil.minute),
    )
}

fn init_tracing(config: &XuanjiConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli, config: &XuanjiConfig) -> Result<()> {
    let default_tz = config.default_timezone.as_deref();

    match cli.command {
        Commands::Trigram { value } => print_json(trigram(&value)?),

        Commands::Hexagram {
            upper,
            lower,
            changing,
        } => print_json(&hexagram(&upper, &lower, &changing)?),

        Commands::CastNumbers { numbers } => print_json(&cast_numbers(&numbers)?),

        Commands::CastTime { date } => print_json(&cast_time(&parse_civil(&date)?)?),

        Commands::TzParse { label } => match parse_timezone_offset_minutes(&label) {
            Some(minutes) => print_json(&minutes),
            None => bail!("unrecognised offset label: {label}"),
        },

        Commands::TzFormat { minutes } => print_json(&format_timezone_offset(minutes)),

        Commands::TzOffset { zone, date } => {
            let at = match date {
                Some(d) => parse_civil(&d)?.to_naive().and_utc(),
                None => Utc::now(),
            };
            let minutes = get_offset_minutes_from_time_zone(&zone, at)
                .with_context(|| format!("unknown timezone: {zone}"))?;
            print_json(&serde_json::json!({
                "offsetMinutes": minutes,
                "offsetLabel": format_timezone_offset(f64::from(minutes)),
            }))
        }

        Commands::BirthMeta {
            date,
            offset,
            timezone,
        } => {
            let payload = BirthTimePayload {
                birth: birth_fields(&parse_civil(&date)?),
                timezone_offset_minutes: offset,
                timezone,
            };
            print_json(&serde_json::json!({
                "meta": birth_meta(&payload, default_tz),
                "timezoneResolved": resolve_timezone(&payload, default_tz),
            }))
        }

        Commands::SolarTime {
            date,
            location,
            longitude,
            timezone,
            offset,
        } => {
            let request = SolarTimeRequest {
                birth: birth_fields(&parse_civil(&date)?),
                timezone_offset_minutes: offset,
                timezone,
                location,
                longitude,
            };
            print_json(&solar_time(&request, default_tz))
        }

        Commands::Locations => print_json(&list_known_locations()),

        Commands::Tarot { spread, seed } => {
            let spread = spread.unwrap_or_else(|| config.default_spread.clone());
            let seed = seed.or(config.seed);
            debug!(%spread, ?seed, "drawing");
            print_json(&draw(Some(&spread), seed))
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let config = XuanjiConfig::load(cli.config.as_deref()).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(2);
    });
    init_tracing(&config);

    if let Err(e) = run(cli, &config) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn negative_numbers_are_values() {
        let cli = Cli::try_parse_from(["xuanji", "cast-numbers", "-9", "4", "12"]).unwrap();
        match cli.command {
            Commands::CastNumbers { numbers } => assert_eq!(numbers, ["-9", "4", "12"]),
            _ => panic!("wrong subcommand"),
        }
        let cli = Cli::try_parse_from(["xuanji", "tz-format", "-90"]).unwrap();
        assert!(matches!(cli.command, Commands::TzFormat { minutes } if minutes == -90.0));
    }

    #[test]
    fn changing_lines_comma_separated() {
        let cli = Cli::try_parse_from([
            "xuanji", "hexagram", "--upper", "1", "--lower", "8", "--changing", "1,6",
        ])
        .unwrap();
        match cli.command {
            Commands::Hexagram { changing, .. } => assert_eq!(changing, [1, 6]),
            _ => panic!("wrong subcommand"),
        }
    }

    #[test]
    fn cast_numbers_needs_three() {
        assert!(Cli::try_parse_from(["xuanji", "cast-numbers", "1", "2"]).is_err());
    }

    #[test]
    fn global_config_flag() {
        let cli = Cli::try_parse_from(["xuanji", "locations", "--config", "x.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
    }

    #[test]
    fn tarot_uses_config_defaults() {
        let config = XuanjiConfig {
            default_spread: "ThreeCard".into(),
            seed: Some(5),
            ..XuanjiConfig::default()
        };
        let cli = Cli::try_parse_from(["xuanji", "tarot"]).unwrap();
        assert!(run(cli, &config).is_ok());
    }

    #[test]
    fn errors_surface() {
        let config = XuanjiConfig::default();
        let cli = Cli::try_parse_from(["xuanji", "tz-parse", "GMT+12:75"]).unwrap();
        let err = run(cli, &config).unwrap_err();
        assert!(err.to_string().contains("GMT+12:75"));
        let cli = Cli::try_parse_from(["xuanji", "cast-time", "--date", "yesterday"]).unwrap();
        assert!(run(cli, &config).is_err());
    }
}
