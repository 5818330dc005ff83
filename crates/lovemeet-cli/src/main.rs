mod config;

use std::sync::Arc;

use anyhow::{Context, bail};
use chrono::{NaiveDate, Utc};
use clap::{Args, Parser, Subcommand};
use tracing::{info, warn};

use lovemeet_ai::{GeminiClient, MessageHelper};
use lovemeet_api::countdown::{self, days_until_text, time_left};
use lovemeet_api::proposals::{create_proposal, proposals};
use lovemeet_api::shares::{
    all_share_links, create_share_link, delete_share_link, email_invite_link, invite_message,
    proposal_url, share_url, whatsapp_link,
};
use lovemeet_api::validation::{validate_plan, validate_proposal};
use lovemeet_api::{PlanSource, RecipientResolver, Resolution, Route, quotes};
use lovemeet_store::{Database, LocalStore};
use lovemeet_types::{
    CountdownPrefs, DatePlan, Language, ProposalDraft, RevealPolicy, RsvpResponse, Theme,
};

use crate::config::Config;

#[derive(Parser)]
#[command(name = "lovemeet", version, about = "Plan dates, share invitations and collect RSVPs")]
struct Cli {
    /// Keep everything in memory for this run instead of the database file.
    #[arg(long, global = true)]
    ephemeral: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Date plans and their share links
    #[command(subcommand)]
    Plan(PlanCommand),
    /// Show the plan behind a share or proposal link
    Open {
        url: String,
        #[arg(long)]
        json: bool,
    },
    /// Answer a date invitation
    Rsvp { url: String, response: RsvpResponse },
    /// Compose a proposal
    Propose(ProposeArgs),
    /// List saved proposals, oldest first
    Proposals,
    /// Event countdown
    #[command(subcommand)]
    Countdown(CountdownCommand),
    /// Print a love quote
    Quote {
        #[arg(long, default_value = "english")]
        language: Language,
        /// Skip this quote id
        #[arg(long)]
        after: Option<String>,
    },
    /// Suggest romantic venues near a place
    Venues {
        #[arg(long, default_value = "Colombo")]
        city: String,
        #[arg(long, default_value_t = lovemeet_types::DEFAULT_LATITUDE)]
        lat: f64,
        #[arg(long, default_value_t = lovemeet_types::DEFAULT_LONGITUDE)]
        lng: f64,
    },
}

#[derive(Subcommand)]
enum PlanCommand {
    /// Create a plan and print its share links
    Create(PlanArgs),
    /// List plans shared from this device
    List,
    /// Forget a shared plan
    Delete { id: String },
}

#[derive(Args)]
struct PlanArgs {
    /// YYYY-MM-DD
    #[arg(long)]
    date: String,
    /// HH:MM
    #[arg(long)]
    time: String,
    #[arg(long)]
    address: String,
    #[arg(long)]
    address2: Option<String>,
    #[arg(long, default_value = "Colombo")]
    city: String,
    #[arg(long)]
    district: Option<String>,
    #[arg(long)]
    postal_code: Option<String>,
    #[arg(long)]
    lat: Option<f64>,
    #[arg(long)]
    lng: Option<f64>,
    #[arg(long)]
    from: Option<String>,
    #[arg(long)]
    message: Option<String>,
    /// Recipient's phone, used for the WhatsApp link
    #[arg(long)]
    phone: Option<String>,
    /// Attach AI venue suggestions for the city
    #[arg(long)]
    suggest_venues: bool,
}

#[derive(Args)]
struct ProposeArgs {
    #[arg(long)]
    to: Option<String>,
    #[arg(long)]
    from: Option<String>,
    /// Message text; generated when omitted and --mood is given
    #[arg(long)]
    message: Option<String>,
    /// Tone for a generated message
    #[arg(long)]
    mood: Option<String>,
    #[arg(long, default_value = "romantic")]
    theme: Theme,
    /// after-yes, never or countdown
    #[arg(long, default_value = "after-yes")]
    reveal: RevealPolicy,
    /// Reveal date for the countdown policy, YYYY-MM-DD
    #[arg(long)]
    countdown_date: Option<String>,
}

#[derive(Subcommand)]
enum CountdownCommand {
    Show,
    Set {
        #[arg(long)]
        name: String,
        /// YYYY-MM-DD
        #[arg(long)]
        date: NaiveDate,
    },
    /// Back to the next Valentine's Day
    Reset,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lovemeet=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();

    let store = if cli.ephemeral {
        LocalStore::in_memory()
    } else {
        let db = Database::open(&config.db_path)
            .with_context(|| format!("opening {}", config.db_path.display()))?;
        LocalStore::new(Arc::new(db))
    };

    match cli.command {
        Command::Plan(PlanCommand::Create(args)) => create_plan(&config, &store, args).await?,
        Command::Plan(PlanCommand::List) => {
            let links = all_share_links(&store)?;
            if links.is_empty() {
                println!("No shared plans yet.");
            }
            for link in links {
                let plan = &link.plan_data;
                println!(
                    "{}  {} {}  {}, {}",
                    link.unique_id, plan.date, plan.time, plan.address_line1, plan.city
                );
            }
        }
        Command::Plan(PlanCommand::Delete { id }) => {
            if delete_share_link(&store, &id)? {
                println!("Deleted {id}");
            } else {
                println!("No plan {id} on this device");
            }
        }
        Command::Open { url, json } => open(&store, &url, json)?,
        Command::Rsvp { url, response } => {
            let route = Route::parse(&url).with_context(|| format!("not a LoveMeet link: {url}"))?;
            let Some((id, _)) = route.recipient_target() else {
                bail!("not an invitation link: {url}");
            };
            let record = RecipientResolver::new(store.clone()).submit_rsvp(id, response)?;
            println!("Answered {} for {id}", record.response);
        }
        Command::Propose(args) => propose(&config, &store, args).await?,
        Command::Proposals => {
            for p in proposals(&store)? {
                println!(
                    "{}  [{}] to {}: {}",
                    p.id,
                    p.theme,
                    p.crush_name.as_deref().unwrap_or("someone special"),
                    p.message
                );
            }
        }
        Command::Countdown(cmd) => {
            let today = Utc::now().date_naive();
            let prefs = match cmd {
                CountdownCommand::Show => countdown::countdown(&store, today)?,
                CountdownCommand::Set { name, date } => {
                    let prefs = CountdownPrefs {
                        event_name: name,
                        target_date: date,
                    };
                    countdown::save_countdown(&store, &prefs)?;
                    prefs
                }
                CountdownCommand::Reset => countdown::reset_to_valentines(&store, today)?,
            };
            print_countdown(&prefs);
        }
        Command::Quote { language, after } => {
            match quotes::next_quote(language, after.as_deref()) {
                Some(q) => {
                    println!("\"{}\"", q.quote);
                    if let Some(author) = q.author {
                        println!("  - {author}");
                    }
                    println!("  ({})", q.id);
                }
                None => println!("No quotes available."),
            }
        }
        Command::Venues { city, lat, lng } => {
            let venues = message_helper(&config)?
                .venue_recommendations(&city, lat, lng)
                .await;
            if venues.is_empty() {
                println!("No suggestions right now.");
            }
            for v in venues {
                println!("{} ({:.1}★)\n  {}\n  {}", v.name, v.rating, v.address, v.url);
            }
        }
    }

    Ok(())
}

fn message_helper(config: &Config) -> anyhow::Result<MessageHelper> {
    let client = GeminiClient::new(config.gemini.clone())?;
    if !client.has_api_key() {
        warn!("No Gemini API key set; AI features will use fallbacks");
    }
    Ok(MessageHelper::new(Arc::new(client)))
}

async fn create_plan(config: &Config, store: &LocalStore, args: PlanArgs) -> anyhow::Result<()> {
    let defaults = DatePlan::default();
    let mut plan = DatePlan {
        creator_name: args.from,
        creator_message: args.message,
        date: args.date,
        time: args.time,
        address_line1: args.address,
        address_line2: args.address2,
        city: args.city,
        district: args.district,
        postal_code: args.postal_code,
        latitude: args.lat.unwrap_or(defaults.latitude),
        longitude: args.lng.unwrap_or(defaults.longitude),
        recipient_phone: args.phone,
        ..defaults
    };
    validate_plan(&plan)?;

    if args.suggest_venues {
        plan.venues = message_helper(config)?
            .venue_recommendations(&plan.city, plan.latitude, plan.longitude)
            .await;
    }

    let link = create_share_link(store, &plan)?;
    let url = share_url(&config.base_url, &link.unique_id, Some(&link.plan_data));
    info!(id = %link.unique_id, "Plan ready to share");

    println!("Share link: {url}");
    println!(
        "WhatsApp:   {}",
        whatsapp_link(link.plan_data.recipient_phone.as_deref(), &invite_message(&url))
    );
    println!("Email:      {}", email_invite_link(&url));
    Ok(())
}

fn open(store: &LocalStore, url: &str, json: bool) -> anyhow::Result<()> {
    let resolver = RecipientResolver::new(store.clone());
    let Resolution::Found { plan, source } = resolver.resolve_url(url)? else {
        println!("Plan not found. The link may be incomplete or from another device.");
        return Ok(());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    if let Some(name) = &plan.creator_name {
        println!("From: {name}");
    }
    if let Some(message) = &plan.creator_message {
        println!("\"{message}\"");
    }
    let when = plan
        .calendar_date()
        .map(|d| days_until_text(d, Utc::now()))
        .unwrap_or_default();
    println!("When:  {} at {} {when}", plan.date, plan.time);
    println!("Where: {}, {}, {}", plan.address_line1, plan.city, plan.country);
    for v in &plan.venues {
        println!("  * {} ({:.1}★) {}", v.name, v.rating, v.url);
    }
    if let Some(response) = plan.response {
        println!("Your answer: {response}");
    }
    if source == PlanSource::LocalRegistry {
        println!("(loaded from this device)");
    }
    Ok(())
}

async fn propose(config: &Config, store: &LocalStore, args: ProposeArgs) -> anyhow::Result<()> {
    let message = match (args.message, args.mood) {
        (Some(message), _) => message,
        (None, Some(mood)) => {
            message_helper(config)?
                .generate(&mood, args.to.as_deref().unwrap_or(""), args.theme)
                .await
        }
        (None, None) => String::new(),
    };

    let draft = ProposalDraft {
        crush_name: args.to,
        sender_name: args.from,
        message,
        theme: args.theme,
        reveal: args.reveal,
        countdown_date: args.countdown_date,
    };
    validate_proposal(&draft)?;

    let proposal = create_proposal(store, draft)?;
    println!("{}", proposal.message);
    println!("Proposal link: {}", proposal_url(&config.base_url, &proposal.id));
    Ok(())
}

fn print_countdown(prefs: &CountdownPrefs) {
    let left = time_left(prefs.target_date, Utc::now());
    println!("{} ({})", prefs.event_name, prefs.target_date);
    println!(
        "{}d {:02}h {:02}m {:02}s",
        left.days, left.hours, left.minutes, left.seconds
    );
}
