use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use stellium_chart::{ChartCalculator, ChartSnapshot};
use stellium_ephem::AnalyticEphemeris;
use stellium_events::major_events;

#[derive(Parser)]
#[command(name = "stellium", about = "Daily astrological chart CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full chart snapshot for a date (YYYY-MM-DD)
    Chart {
        date: NaiveDate,
        /// Emit the snapshot as JSON
        #[arg(long)]
        json: bool,
    },
    /// Planetary placements for a date
    Positions { date: NaiveDate },
    /// Aspects between the day's placements
    Aspects { date: NaiveDate },
    /// Lunar phase label for a date
    MoonPhase { date: NaiveDate },
    /// Notable events over an inclusive date range
    Events {
        start: NaiveDate,
        end: NaiveDate,
        /// Emit the events as JSON
        #[arg(long)]
        json: bool,
    },
}

fn print_chart(chart: &ChartSnapshot) {
    let sun_sign = chart.sun_sign.map_or("Unknown", |s| s.name());
    println!("Chart for {}", chart.date);
    println!("  Sun sign:   {sun_sign}");
    println!("  Moon phase: {}", chart.moon_phase.label());
    println!("  Method:     {}", chart.calculation_method);
    if !chart.unresolved.is_empty() {
        let names: Vec<&str> = chart.unresolved.iter().map(|b| b.display_name()).collect();
        println!("  Unresolved: {}", names.join(", "));
    }
    println!("  Positions:");
    for p in &chart.positions {
        println!(
            "    {} {:<8} {:7.3}°  {} {:.2}°",
            p.symbol,
            p.body.display_name(),
            p.longitude_deg,
            p.sign.name(),
            p.degree_in_sign
        );
    }
    if chart.aspects.is_empty() {
        println!("  Aspects: none");
    } else {
        println!("  Aspects:");
        for a in &chart.aspects {
            let marker = if a.exact { " (exact)" } else { "" };
            println!(
                "    {} {} {}  orb {:.2}°{marker}",
                a.body1.display_name(),
                a.kind.name(),
                a.body2.display_name(),
                a.orb_deg
            );
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let calc = ChartCalculator::new(AnalyticEphemeris::new());

    match cli.command {
        Commands::Chart { date, json } => {
            let chart = calc.chart(date);
            if json {
                println!("{}", serde_json::to_string_pretty(&chart)?);
            } else {
                print_chart(&chart);
            }
        }
        Commands::Positions { date } => {
            let set = calc.positions(date);
            for p in &set.positions {
                println!(
                    "{} {:<8} {:7.3}°  {} {:.2}°",
                    p.symbol,
                    p.body.display_name(),
                    p.longitude_deg,
                    p.sign.name(),
                    p.degree_in_sign
                );
            }
            for body in &set.unresolved {
                println!("{} unresolved", body.display_name());
            }
        }
        Commands::Aspects { date } => {
            let set = calc.positions(date);
            for a in calc.aspects(&set.positions) {
                let marker = if a.exact { " (exact)" } else { "" };
                println!(
                    "{} {} {}  orb {:.2}°{marker}",
                    a.body1.display_name(),
                    a.kind.name(),
                    a.body2.display_name(),
                    a.orb_deg
                );
            }
        }
        Commands::MoonPhase { date } => {
            println!("{}", calc.moon_phase(date).label());
        }
        Commands::Events { start, end, json } => {
            let events = major_events(&calc, start, end);
            if json {
                println!("{}", serde_json::to_string_pretty(&events)?);
            } else if events.is_empty() {
                println!("no notable events in {start}..{end}");
            } else {
                for e in &events {
                    println!("{}  [{}]  {}", e.date, e.kind.label(), e.description);
                }
            }
        }
    }
    Ok(())
}
