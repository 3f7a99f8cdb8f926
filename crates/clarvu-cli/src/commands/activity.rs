use chrono::{Duration, Local, Utc};
use clap::Subcommand;
use clarvu_core::{classify, derive_state, local_day_bounds, ActivitySample, Config, Database};

/// Samples older than this are dropped on each `log` call.
const RETENTION_DAYS: i64 = 7;

#[derive(Subcommand)]
pub enum ActivityAction {
    /// Record a foreground window/tab title
    Log {
        /// The observed title
        title: String,
    },
    /// Classify a title without recording it
    Classify {
        /// The title to classify
        title: String,
    },
    /// Print today's recorded samples
    Today,
    /// Print the derived focus signals as JSON
    Status,
}

pub fn run(action: ActivityAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ActivityAction::Log { title } => {
            let db = Database::open()?;
            let record = db.record_sample(Utc::now(), &title)?;
            db.prune_before(Utc::now() - Duration::days(RETENTION_DAYS))?;
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        ActivityAction::Classify { title } => {
            let classification = classify(&title);
            println!("{}", serde_json::to_string_pretty(&classification)?);
        }
        ActivityAction::Today => {
            let db = Database::open()?;
            let (day_start, _) = local_day_bounds(&Local::now());
            let samples = db.samples_since(day_start.with_timezone(&Utc))?;
            println!("{}", serde_json::to_string_pretty(&samples)?);
        }
        ActivityAction::Status => {
            let db = Database::open()?;
            let config = Config::load_or_default();
            let now = Utc::now();
            let samples: Vec<ActivitySample<Utc>> = db
                .samples_since(now - Duration::hours(1))?
                .into_iter()
                .map(|r| ActivitySample {
                    observed_at: r.observed_at,
                    title: r.title,
                })
                .collect();
            let state = derive_state(&samples, None, now, &config.activity);
            let status = serde_json::json!({
                "focus_state": state.focus_state,
                "is_idle": state.is_idle,
                "context_switches_last_hour": state.context_switches_last_hour,
                "samples_last_hour": samples.len(),
            });
            println!("{}", serde_json::to_string_pretty(&status)?);
        }
    }
    Ok(())
}
