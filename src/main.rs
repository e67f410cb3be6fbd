use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use trip_planner_rs::budget::BudgetPage;
use trip_planner_rs::cli::{Cli, Command, ShowArgs};
use trip_planner_rs::config::{SessionOptions, Settings, parse_start_date, today};
use trip_planner_rs::culinary::CulinaryPage;
use trip_planner_rs::error::PlannerResult;
use trip_planner_rs::itinerary::ItineraryStore;
use trip_planner_rs::packing::PackingPage;
use trip_planner_rs::page::ItineraryPage;
use trip_planner_rs::plans::HomePage;
use trip_planner_rs::prompt::TerminalPrompter;
use trip_planner_rs::shell::Session;
use trip_planner_rs::{metadata, render};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let settings_path = match cli.config.clone() {
        Some(path) => path,
        None => Settings::default_path()?,
    };
    let settings = Settings::load_from(&settings_path)?;

    // Logs go to stderr so they never land in the middle of a prompt.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| settings.log_filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.resolved_command() {
        Command::Start(args) => {
            let options = SessionOptions::resolve(&settings, &args)?;
            if !options.color {
                colored::control::set_override(false);
            }
            tracing::info!(
                sample = options.seed_sample_data,
                start = ?options.trip_start,
                "starting planner session"
            );
            Session::new(&options).run()?;
        }
        Command::Show(args) => show(&settings, &args)?,
        Command::Version => {
            println!("{} {}", metadata::PKG_NAME, metadata::PKG_VERSION);
        }
        Command::Config => {
            let prompter = TerminalPrompter::new();
            let updated = settings.edit_interactively(prompter.theme())?;
            updated.save_to(&settings_path)?;
            println!("Saved {}", settings_path.display());
        }
    }

    Ok(())
}

fn show(settings: &Settings, args: &ShowArgs) -> PlannerResult<()> {
    let store = ItineraryStore::sample();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&*store.days())?);
        return Ok(());
    }

    if !settings.color {
        colored::control::set_override(false);
    }
    let mut itinerary = ItineraryPage::new(store);
    let start = parse_start_date(args.start_date.as_deref())?.unwrap_or_else(today);
    itinerary.set_trip_start(Some(start));

    println!("{}", render::home(&HomePage::sample()));
    println!("{}", render::itinerary(&itinerary));
    println!("{}", render::culinary(&CulinaryPage::sample()));
    println!("{}", render::packing(&PackingPage::sample()));
    println!("{}", render::budget(&BudgetPage::sample(), &settings.currency_symbol));
    Ok(())
}
