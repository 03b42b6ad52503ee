mod commands;
mod render;
mod session;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use cupom_core::coupon::CouponKind;
use tracing_subscriber::EnvFilter;

use crate::session::Session;

#[derive(Parser)]
#[command(name = "cupom")]
#[command(about = "Fill in store events and print them as thermal coupon receipts")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show or change the store details printed on every coupon
    Store {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        whatsapp: Option<String>,

        #[arg(long)]
        instagram: Option<String>,
    },
    /// List the editable events
    Events {
        /// Print the derived (printed) list as JSON instead
        #[arg(long)]
        json: bool,

        /// Merge all themed Saturdays into one block (with --json)
        #[arg(long)]
        unify: bool,
    },
    /// Add, edit or remove an event
    Event {
        #[command(subcommand)]
        action: EventAction,
    },
    /// List the predefined event categories and their defaults
    Presets,
    /// Show a preview of a coupon layout
    Preview {
        #[arg(value_enum, default_value_t = Layout::Events)]
        layout: Layout,

        /// Merge all themed Saturdays into one block
        #[arg(long)]
        unify: bool,
    },
    /// Write a coupon layout as plain text, ready for the printer
    Print {
        #[arg(value_enum, default_value_t = Layout::Events)]
        layout: Layout,

        /// Merge all themed Saturdays into one block
        #[arg(long)]
        unify: bool,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show or change the configuration
    Config {
        #[arg(long)]
        paper_width: Option<usize>,

        #[arg(long)]
        brand: Option<String>,

        /// Unify themed Saturdays by default
        #[arg(long)]
        unify: Option<bool>,
    },
}

#[derive(Subcommand)]
enum EventAction {
    /// Add a blank event (at most four)
    Add {
        /// Apply a predefined category right away
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Edit fields of an event; prompts for each editable field when no flag is given
    Edit {
        /// Event id, id prefix or position (1-4)
        event: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        subtitle: Option<String>,

        /// YYYY-MM-DD
        #[arg(long)]
        date: Option<String>,

        /// HH:MM
        #[arg(long)]
        start: Option<String>,

        /// HH:MM, or "" for an open-ended event
        #[arg(long)]
        end: Option<String>,

        #[arg(long)]
        description: Option<String>,

        /// Treat themed Saturdays as unified (locks their date)
        #[arg(long)]
        unify: bool,
    },
    /// Switch an event to a predefined category, overwriting its fields
    Category { event: String, category: String },
    /// Include an event in the printed list
    Enable { event: String },
    /// Keep an event but leave it out of the printed list
    Disable { event: String },
    /// Delete an event
    Remove { event: String },
}

#[derive(Clone, Copy, ValueEnum)]
enum Layout {
    Events,
    Discount,
    Pickup,
    Christmas,
}

impl From<Layout> for CouponKind {
    fn from(layout: Layout) -> Self {
        match layout {
            Layout::Events => CouponKind::Events,
            Layout::Discount => CouponKind::Discount,
            Layout::Pickup => CouponKind::PickupInfo,
            Layout::Christmas => CouponKind::ChristmasLetter,
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    // Config works on the file alone; everything else needs the stored state.
    match cli.command {
        Commands::Config { paper_width, brand, unify } => {
            commands::config::run(paper_width, brand, unify)
        }
        Commands::Store { name, whatsapp, instagram } => {
            let mut session = Session::open()?;
            commands::store::run(&mut session, name, whatsapp, instagram)
        }
        Commands::Events { json, unify } => commands::events::run(&Session::open()?, json, unify),
        Commands::Event { action } => run_event_action(&mut Session::open()?, action),
        Commands::Presets => commands::presets::run(&Session::open()?),
        Commands::Preview { layout, unify } => {
            commands::preview::run(&Session::open()?, layout.into(), unify)
        }
        Commands::Print { layout, unify, output } => {
            commands::print::run(&Session::open()?, layout.into(), unify, output)
        }
    }
}

fn run_event_action(session: &mut Session, action: EventAction) -> Result<()> {
    match action {
        EventAction::Add { category } => commands::event::add(session, category),
        EventAction::Edit {
            event,
            title,
            subtitle,
            date,
            start,
            end,
            description,
            unify,
        } => {
            let edits = commands::event::Edits {
                title,
                subtitle,
                date,
                start,
                end,
                description,
            };
            commands::event::edit(session, &event, edits, unify)
        }
        EventAction::Category { event, category } => {
            commands::event::category(session, &event, &category)
        }
        EventAction::Enable { event } => commands::event::set_active(session, &event, true),
        EventAction::Disable { event } => commands::event::set_active(session, &event, false),
        EventAction::Remove { event } => commands::event::remove(session, &event),
    }
}

/// Diagnostics go to stderr, filtered by `CUPOM_LOG` (default: warn).
fn init_tracing() {
    let filter = EnvFilter::try_from_env("CUPOM_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
