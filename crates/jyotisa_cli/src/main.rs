use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use clap::{Args, Parser, Subcommand};
use jyotisa_config::JyotisaConfig;
use jyotisa_core::{AyanamshaSystem, GeoLocation, TableEngine};
use jyotisa_search::{
    BirthChart, DashaMethod, PanchangaElement, PanchangaInfo, birth_chart, dasha_for_birth,
    dasha_snapshot_at, panchanga_for_date,
};
use jyotisa_time::{
    civil_to_utc, jd_from_utc, local_to_utc, parse_clock_time, parse_date, parse_instant,
};
use jyotisa_vedic_base::dasha::{DashaHierarchy, DashaPeriod, DashaSnapshot};
use jyotisa_vedic_base::{RiseSetCalculator, nakshatra_from_longitude, rashi_from_longitude};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "jyotisa", about = "Panchanga, chart and Vimshottari dasha CLI")]
struct Cli {
    /// TOML config file with location/timezone/ayanamsha defaults
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log debug events to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

/// Overrides for the configured place and sidereal system.
#[derive(Args, Debug, Default)]
struct PlaceArgs {
    /// Latitude in degrees, north positive
    #[arg(long, allow_hyphen_values = true)]
    lat: Option<f64>,
    /// Longitude in degrees, east positive
    #[arg(long, allow_hyphen_values = true)]
    lon: Option<f64>,
    /// IANA timezone (e.g. Asia/Kolkata)
    #[arg(long)]
    tz: Option<String>,
    /// Ayanamsha: lahiri, raman or krishnamurti
    #[arg(long)]
    ayanamsha: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a local date and clock time to UTC
    Time {
        /// Local date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Clock time (HH:MM[:SS] or H:MM AM/PM)
        #[arg(long)]
        time: String,
        /// IANA timezone (defaults to the configured one)
        #[arg(long)]
        tz: Option<String>,
    },
    /// Panchanga for a civil date
    Panchanga {
        /// Longitude table (JSON)
        #[arg(long)]
        table: PathBuf,
        /// Local date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        #[command(flatten)]
        place: PlaceArgs,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Ascendant and graha placements
    Chart {
        /// Longitude table (JSON)
        #[arg(long)]
        table: PathBuf,
        /// Local date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Clock time (HH:MM[:SS] or H:MM AM/PM)
        #[arg(long)]
        time: String,
        #[command(flatten)]
        place: PlaceArgs,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Dasha periods from a birth instant
    Dasha {
        /// Longitude table (JSON)
        #[arg(long)]
        table: PathBuf,
        /// Birth datetime, RFC 3339 or local YYYY-MM-DDTHH:MM[:SS]
        #[arg(long)]
        birth: String,
        /// Method: Vimshottari, Yogini or CharA
        #[arg(long)]
        method: Option<String>,
        /// Levels to expand (1-3)
        #[arg(long)]
        levels: Option<u8>,
        /// Show only the periods active at this datetime
        #[arg(long)]
        at: Option<String>,
        #[command(flatten)]
        place: PlaceArgs,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Nakshatra and pada from sidereal longitude
    Nakshatra {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_hyphen_values = true)]
        lon: f64,
    },
}

/// Place and sidereal system after applying command-line overrides.
struct Settings {
    location: GeoLocation,
    tz: Tz,
    ayanamsha: AyanamshaSystem,
}

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> JyotisaConfig {
    match path {
        Some(p) => JyotisaConfig::load(p).unwrap_or_else(|e| fail(e)),
        None => JyotisaConfig::default(),
    }
}

fn resolve_settings(config: &JyotisaConfig, place: &PlaceArgs) -> Result<Settings, String> {
    let mut config = config.clone();
    if let Some(lat) = place.lat {
        config.location.latitude_deg = lat;
    }
    if let Some(lon) = place.lon {
        config.location.longitude_deg = lon;
    }
    if let Some(tz) = &place.tz {
        config.location.timezone = tz.clone();
    }
    if let Some(name) = &place.ayanamsha {
        config.ayanamsha = name.parse().map_err(|e| format!("{e}"))?;
    }
    Ok(Settings {
        location: config.geo_location().map_err(|e| e.to_string())?,
        tz: config.timezone().map_err(|e| e.to_string())?,
        ayanamsha: config.ayanamsha,
    })
}

fn require_settings(config: &JyotisaConfig, place: &PlaceArgs) -> Settings {
    resolve_settings(config, place).unwrap_or_else(|e| fail(e))
}

fn load_table(path: &Path) -> TableEngine {
    TableEngine::load(path).unwrap_or_else(|e| {
        eprintln!("Failed to load table {}: {e}", path.display());
        std::process::exit(1);
    })
}

fn require_date(s: &str) -> NaiveDate {
    parse_date(s).unwrap_or_else(|e| fail(e))
}

fn require_instant(s: &str, tz: Tz) -> DateTime<Utc> {
    parse_instant(s, tz).unwrap_or_else(|e| fail(e))
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => fail(e),
    }
}

fn local(dt: DateTime<Utc>, tz: Tz) -> String {
    dt.with_timezone(&tz).format("%Y-%m-%d %H:%M:%S %Z").to_string()
}

fn print_element(label: &str, el: &PanchangaElement, tz: Tz) {
    let until = if el.end.found {
        format!("until {}", local(el.end.instant, tz))
    } else {
        format!("beyond {} (no change in search window)", local(el.end.instant, tz))
    };
    println!("  {label:<10} {} ({}) {until}", el.name, el.index);
}

fn print_panchanga(info: &PanchangaInfo, tz: Tz) {
    println!(
        "Panchanga for {} ({}, {} {:.4} deg)",
        info.date,
        info.timezone,
        info.ayanamsha,
        info.ayanamsha_deg
    );
    println!("  Sunrise:   {}", local(info.sunrise, tz));
    println!("  Sunset:    {}", local(info.sunset, tz));
    println!("  Vaar:      {} ({})", info.vaar.name(), info.vaar.english_name());
    print_element("Tithi:", &info.tithi, tz);
    println!("  Paksha:    {}", info.paksha.name());
    print_element("Nakshatra:", &info.nakshatra, tz);
    print_element("Yoga:", &info.yoga, tz);
    print_element("Karana:", &info.karana, tz);
    for (label, seg) in [
        ("Rahukalam", &info.rahukalam),
        ("Yamagandam", &info.yamagandam),
        ("Gulika", &info.gulika),
        ("Abhijit", &info.abhijit_muhurta),
    ] {
        println!("  {label:<10} {} - {}", local(seg.start, tz), local(seg.end, tz));
    }
}

fn print_chart(chart: &BirthChart, tz: Tz) {
    let asc = &chart.ascendant;
    println!(
        "Chart for {} ({} {:.4} deg)",
        local(chart.instant, tz),
        chart.ayanamsha,
        chart.ayanamsha_deg
    );
    println!(
        "  Lagna: {:.4} deg, {} ({}) {:.4} deg in sign [{}, delta {:.4} deg]",
        asc.longitude_deg,
        asc.sign.name(),
        asc.sign.western_name(),
        asc.degree_in_sign,
        asc.method.name(),
        asc.delta_deg
    );
    for p in &chart.placements {
        println!(
            "  {:<8} {:>9.4} deg  {:<10} house {:>2}{}",
            p.graha.name(),
            p.longitude_deg,
            p.sign.name(),
            p.house,
            if p.retrograde { "  (R)" } else { "" }
        );
    }
    println!(
        "  Moon nakshatra: {} pada {}",
        chart.moon_nakshatra.nakshatra.name(),
        chart.moon_nakshatra.pada
    );
}

fn print_period(period: &DashaPeriod, tz: Tz, indent: usize) {
    println!(
        "{:indent$}{:<8} {} -> {}",
        "",
        period.lord.name(),
        local(period.start, tz),
        local(period.end, tz),
        indent = indent * 2
    );
    for child in &period.children {
        print_period(child, tz, indent + 1);
    }
}

fn print_hierarchy(h: &DashaHierarchy, tz: Tz) {
    println!(
        "Vimshottari from {} (Moon in {}, {} balance {:.4} years)",
        local(h.birth, tz),
        h.birth_nakshatra.name(),
        h.starting_lord.name(),
        h.balance_years
    );
    for maha in &h.mahadashas {
        print_period(maha, tz, 1);
    }
}

fn print_snapshot(snapshot: &DashaSnapshot, tz: Tz) {
    println!("Active periods at {}", local(snapshot.query, tz));
    for period in &snapshot.periods {
        println!(
            "  {:<16} {:<8} {} -> {}",
            period.level.name(),
            period.lord.name(),
            local(period.start, tz),
            local(period.end, tz)
        );
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = load_config(cli.config.as_deref());
    debug!(?config, "effective config");

    match cli.command {
        Commands::Time { date, time, tz } => {
            let tz = tz.unwrap_or_else(|| config.location.timezone.clone());
            match local_to_utc(&date, &time, &tz) {
                Ok(utc) => {
                    println!("{}", utc.to_rfc3339());
                    println!("  JD (UTC): {:.6}", jd_from_utc(utc));
                }
                Err(e) => fail(e),
            }
        }

        Commands::Panchanga {
            table,
            date,
            place,
            json,
        } => {
            let settings = require_settings(&config, &place);
            let date = require_date(&date);
            let engine = load_table(&table);
            let sun = RiseSetCalculator::new(&engine);
            let search = config.crossing_config().unwrap_or_else(|e| fail(e));
            match panchanga_for_date(
                &engine,
                &sun,
                date,
                &settings.location,
                settings.tz,
                settings.ayanamsha,
                &search,
            ) {
                Ok(info) if json => print_json(&info),
                Ok(info) => print_panchanga(&info, settings.tz),
                Err(e) => fail(e),
            }
        }

        Commands::Chart {
            table,
            date,
            time,
            place,
            json,
        } => {
            let settings = require_settings(&config, &place);
            let date = require_date(&date);
            let clock = parse_clock_time(&time).unwrap_or_else(|e| fail(e));
            let instant = civil_to_utc(date, clock, settings.tz).unwrap_or_else(|e| fail(e));
            let engine = load_table(&table);
            match birth_chart(
                &engine,
                instant,
                &settings.location,
                settings.ayanamsha,
                &config.ascendant_config(),
            ) {
                Ok(chart) if json => print_json(&chart),
                Ok(chart) => print_chart(&chart, settings.tz),
                Err(e) => fail(e),
            }
        }

        Commands::Dasha {
            table,
            birth,
            method,
            levels,
            at,
            place,
            json,
        } => {
            let settings = require_settings(&config, &place);
            let birth = require_instant(&birth, settings.tz);
            let mut request = config.dasha_request();
            if let Some(m) = method {
                request.method = m.parse::<DashaMethod>().unwrap_or_else(|e| fail(e));
            }
            if let Some(depth) = levels {
                request.depth = depth;
            }
            let engine = load_table(&table);
            match at {
                Some(at) => {
                    let at = require_instant(&at, settings.tz);
                    match dasha_snapshot_at(&engine, birth, settings.ayanamsha, &request, at) {
                        Ok(snap) if json => print_json(&snap),
                        Ok(snap) => print_snapshot(&snap, settings.tz),
                        Err(e) => fail(e),
                    }
                }
                None => match dasha_for_birth(&engine, birth, settings.ayanamsha, &request) {
                    Ok(h) if json => print_json(&h),
                    Ok(h) => print_hierarchy(&h, settings.tz),
                    Err(e) => fail(e),
                },
            }
        }

        Commands::Nakshatra { lon } => {
            let info = nakshatra_from_longitude(lon);
            let rashi = rashi_from_longitude(lon);
            println!(
                "{} (index {}) - Pada {} ({:.4} deg in nakshatra), {} {:.4} deg in sign",
                info.nakshatra.name(),
                info.index,
                info.pada,
                info.degrees_in_nakshatra,
                rashi.rashi.name(),
                rashi.degree_in_sign
            );
        }
    }
}
