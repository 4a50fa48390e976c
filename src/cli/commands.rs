use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use chrono::Utc;
use clap::{Parser, Subcommand};

use super::console::ConsoleHost;
use crate::catalog::Catalog;
use crate::config::{AppConfig, AppContext};
use crate::detail::{PROPERTY_INSIGHTS, SIMILAR_LIMIT, location_blurb, price_per_sqft};
use crate::error::SubmitError;
use crate::favorites::{EMPTY_STATE_MESSAGE, FavoriteStore, SavedView};
use crate::filters::parse_filter;
use crate::host::{Host, MessageKind};
use crate::inquiries::{ContactFlow, ContactForm, InquiryBook};
use crate::logging::{self, LogTarget};
use crate::models::{InquiryStatus, ListingStatus, Property};
use crate::profile::{Dashboard, ProfileTab};
use crate::routes::{Route, map_link};
use crate::utils::{format_baths, format_price, format_thousands, get_data_dir, sanitize};
use crate::wizard::my_listings;

#[derive(Parser)]
#[command(name = "property-explorer")]
#[command(version = "0.1.0")]
#[command(about = "Browse, filter and save real-estate listings", long_about = None)]
pub struct Cli {
    /// Data directory (defaults to $PROPERTY_EXPLORER_HOME, then the platform data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Open the interactive browser (default)
    Browse {
        /// Start at this path, e.g. /saved or /property/prop-1
        #[arg(long, default_value = "/")]
        route: String,
    },
    /// Print catalog properties
    List {
        /// Only featured properties
        #[arg(long)]
        featured: bool,
        /// Filter expression, e.g. "type:house price:0-500000 beds:3"
        #[arg(long)]
        filter: Option<String>,
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Print one property in full
    Show { id: String },
    /// Add a property to saved properties
    Save { id: String },
    /// Remove a property from saved properties
    Unsave { id: String },
    /// Print saved properties
    Saved {
        /// all, recent or frequent
        #[arg(long, default_value = "all")]
        view: String,
    },
    /// Request a viewing
    Inquire {
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        message: Option<String>,
        /// today, tomorrow or YYYY-MM-DD
        #[arg(long)]
        date: Option<String>,
    },
    /// Print listings created with the listing wizard
    Listings,
    /// Print submitted viewing requests
    Inquiries,
    /// Show statistics about the catalog and local data
    Stats,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Browse { route: "/".to_string() });

    let data_dir = get_data_dir(cli.data_dir.as_deref())?;
    let config = AppConfig::load(&data_dir)?;

    let target = if matches!(command, Commands::Browse { .. }) {
        fs::create_dir_all(&data_dir)
            .with_context(|| format!("Failed to create data directory {}", data_dir.display()))?;
        LogTarget::file_in(&data_dir)
    } else {
        LogTarget::Stderr
    };
    logging::init(&target, &config.log_level)?;

    let ctx = AppContext::with_config(data_dir, config)?;
    let mut host = ConsoleHost::new(io::stdout());
    execute(&command, &ctx, &mut io::stdout(), &mut host)
}

/// Run one command against `ctx`, printing to `out` and confirming through `host`
pub fn execute(
    command: &Commands,
    ctx: &AppContext,
    out: &mut dyn Write,
    host: &mut dyn Host,
) -> Result<()> {
    match command {
        Commands::Browse { route } => crate::tui::run_interactive(ctx, Route::parse(route)),
        Commands::List { featured, filter, limit } => {
            list_properties(ctx, *featured, filter.as_deref(), *limit, out)
        }
        Commands::Show { id } => show_property(ctx, id, out),
        Commands::Save { id } => {
            let property = find_property(&ctx.catalog, id)?;
            let store = FavoriteStore::new(&ctx.repo);
            if store.is_saved(id) {
                host.notify("Already in saved properties", MessageKind::Info);
            } else {
                store.save(property, Utc::now())?;
                host.notify(crate::favorites::ADDED_MESSAGE, MessageKind::Success);
            }
            Ok(())
        }
        Commands::Unsave { id } => {
            if FavoriteStore::new(&ctx.repo).unsave(id)? {
                host.notify(crate::favorites::REMOVED_MESSAGE, MessageKind::Success);
            } else {
                host.notify("Not in saved properties", MessageKind::Info);
            }
            Ok(())
        }
        Commands::Saved { view } => list_saved(ctx, view.parse()?, out),
        Commands::Inquire { id, name, email, phone, message, date } => {
            let form = ContactForm {
                name: name.clone(),
                email: email.clone(),
                phone: phone.clone(),
                message: message.clone().unwrap_or_default(),
                date: date.clone().unwrap_or_default(),
            };
            inquire(ctx, id, form, out, host)
        }
        Commands::Listings => list_listings(ctx, out),
        Commands::Inquiries => list_inquiries(ctx, out),
        Commands::Stats => show_stats(ctx, out),
    }
}

fn find_property<'a>(catalog: &'a Catalog, id: &str) -> Result<&'a Property> {
    match catalog.find(id) {
        Some(property) => Ok(property),
        None => bail!("Property not found: {}", id),
    }
}

fn property_line(property: &Property) -> String {
    let mut line = format!(
        "{:<10} {} | {} | {} | {} bd · {} ba · {} sqft",
        property.id,
        sanitize(&property.title),
        sanitize(&property.location),
        format_price(property.price),
        property.beds,
        format_baths(property.baths),
        format_thousands(u64::from(property.sqft)),
    );
    if property.is_featured {
        line.push_str(" [Featured]");
    }
    if property.is_new {
        line.push_str(" [New]");
    }
    line
}

fn list_properties(
    ctx: &AppContext,
    featured: bool,
    filter: Option<&str>,
    limit: Option<usize>,
    out: &mut dyn Write,
) -> Result<()> {
    let filter = parse_filter(filter.unwrap_or_default())?;
    let mut properties = ctx.catalog.search(&filter);
    if featured {
        properties.retain(|p| p.is_featured);
    }
    let total = properties.len();
    if let Some(limit) = limit {
        properties.truncate(limit);
    }

    for property in &properties {
        writeln!(out, "{}", property_line(property))?;
    }
    writeln!(out, "{} of {} properties ({})", properties.len(), total, filter.summary())?;
    Ok(())
}

fn show_property(ctx: &AppContext, id: &str, out: &mut dyn Write) -> Result<()> {
    let property = find_property(&ctx.catalog, id)?;
    let views = FavoriteStore::new(&ctx.repo).record_view(id)?;

    writeln!(out, "{}", sanitize(&property.title))?;
    writeln!(out, "{}", sanitize(&property.location))?;
    let mut stats = format!(
        "{} · {} beds · {} baths · {} sqft",
        format_price(property.price),
        property.beds,
        format_baths(property.baths),
        format_thousands(u64::from(property.sqft))
    );
    if let Some(per_sqft) = price_per_sqft(property) {
        stats.push_str(&format!(" · {}/sqft", format_price(per_sqft)));
    }
    writeln!(out, "{}", stats)?;
    writeln!(out)?;
    writeln!(out, "{}", sanitize(&property.description))?;
    writeln!(out)?;

    if !property.features.is_empty() {
        writeln!(out, "Features: {}", sanitize(&property.features.join(", ")))?;
    }
    writeln!(out, "Images: {}", property.images.len())?;
    writeln!(out, "{}", sanitize(&location_blurb(&property.location)))?;
    writeln!(out, "Map: {}", map_link(&property.location))?;
    writeln!(out, "Link: {}", Route::property(&property.id))?;

    writeln!(out)?;
    writeln!(out, "AI Analysis")?;
    for (heading, body) in PROPERTY_INSIGHTS {
        writeln!(out, "  {}: {}", heading, body)?;
    }

    let similar = ctx.catalog.similar_to(&property.id, SIMILAR_LIMIT);
    if !similar.is_empty() {
        writeln!(out)?;
        writeln!(out, "Similar properties")?;
        for other in similar {
            writeln!(out, "  {}", property_line(other))?;
        }
    }

    writeln!(out)?;
    match views {
        Some(count) => writeln!(out, "Saved ({} views)", count)?,
        None => writeln!(out, "Not saved")?,
    }
    let inquiries = InquiryBook::new(&ctx.repo).for_property(&property.id).len();
    writeln!(out, "Viewing requests: {}", inquiries)?;
    Ok(())
}

fn list_saved(ctx: &AppContext, view: SavedView, out: &mut dyn Write) -> Result<()> {
    let now = Utc::now();
    let saved = FavoriteStore::new(&ctx.repo).list_view(view, now);
    if saved.is_empty() {
        writeln!(out, "{}", EMPTY_STATE_MESSAGE)?;
        return Ok(());
    }

    for snapshot in &saved {
        writeln!(
            out,
            "{:<10} {} | {} | {} | saved {} | {} views",
            snapshot.id,
            sanitize(&snapshot.title),
            sanitize(&snapshot.location),
            sanitize(&snapshot.price),
            crate::utils::format_timestamp(&snapshot.saved_at, &now),
            snapshot.view_count
        )?;
    }
    writeln!(out, "{} saved ({})", saved.len(), view)?;
    Ok(())
}

fn inquire(
    ctx: &AppContext,
    id: &str,
    form: ContactForm,
    out: &mut dyn Write,
    host: &mut dyn Host,
) -> Result<()> {
    let property = find_property(&ctx.catalog, id)?;
    let mut flow = ContactFlow::new(ctx.config.submission_delay());
    flow.form = form;

    match flow.submit(&ctx.repo, property, host, Instant::now()) {
        Ok(inquiry) => {
            writeln!(out, "Recorded inquiry {} for {}", inquiry.id, sanitize(&property.title))?;
            flow.wait(host);
            Ok(())
        }
        Err(SubmitError::Invalid(errors)) => {
            for error in errors.iter() {
                writeln!(out, "  {}", error)?;
            }
            bail!("Inquiry was not recorded")
        }
        Err(e) => Err(e.into()),
    }
}

fn listing_status(status: ListingStatus) -> &'static str {
    match status {
        ListingStatus::Active => "active",
        ListingStatus::Pending => "pending",
        ListingStatus::Sold => "sold",
    }
}

fn inquiry_status(status: InquiryStatus) -> &'static str {
    match status {
        InquiryStatus::Pending => "pending",
        InquiryStatus::Contacted => "contacted",
        InquiryStatus::Closed => "closed",
    }
}

fn list_listings(ctx: &AppContext, out: &mut dyn Write) -> Result<()> {
    let listings = my_listings(&ctx.repo);
    if listings.is_empty() {
        writeln!(out, "No listings yet. Use the browser's List a Property screen to add one.")?;
        return Ok(());
    }

    for listing in &listings {
        let line = property_line(&listing.as_property());
        writeln!(out, "{} [{}]", line, listing_status(listing.status))?;
    }
    Ok(())
}

fn list_inquiries(ctx: &AppContext, out: &mut dyn Write) -> Result<()> {
    let inquiries = InquiryBook::new(&ctx.repo).list();
    if inquiries.is_empty() {
        writeln!(out, "No viewing requests yet")?;
        return Ok(());
    }

    for inquiry in &inquiries {
        let date = inquiry.date.map(|d| d.to_string()).unwrap_or_else(|| "any day".to_string());
        writeln!(
            out,
            "{} | {} | {} <{}> {} | {} | {}",
            inquiry.submitted_at.format("%Y-%m-%d %H:%M"),
            sanitize(&inquiry.property_title),
            sanitize(&inquiry.name),
            sanitize(&inquiry.email),
            sanitize(&inquiry.phone),
            date,
            inquiry_status(inquiry.status)
        )?;
    }
    Ok(())
}

fn show_stats(ctx: &AppContext, out: &mut dyn Write) -> Result<()> {
    let dashboard = Dashboard::load(&ctx.repo);

    writeln!(out, "Property Explorer Statistics")?;
    writeln!(out, "============================")?;
    writeln!(
        out,
        "Catalog properties: {} ({} featured)",
        ctx.catalog.len(),
        ctx.catalog.all().iter().filter(|p| p.is_featured).count()
    )?;
    for tab in ProfileTab::ALL {
        writeln!(out, "{}: {}", tab.label(), dashboard.count(tab))?;
    }
    let preferences = if dashboard.preferences.is_some() { "saved" } else { "not set" };
    writeln!(out, "Preferences: {}", preferences)?;
    writeln!(out)?;
    writeln!(out, "Data directory: {}", ctx.data_dir.display())?;
    Ok(())
}
