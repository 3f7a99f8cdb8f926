use chrono::{DateTime, Duration, Local, Utc};
use clap::Subcommand;
use clarvu_core::{
    derive_state, next_fire_time, ActivitySample, Config, Database, ReminderState, SessionAction,
    SessionStore,
};

/// How long the watch loop sleeps when reminders are suppressed
/// (disabled, quiet hours, or snoozed) before re-polling.
const SUPPRESSED_POLL_SECS: u64 = 300;

#[derive(Subcommand)]
pub enum ReminderAction {
    /// Print the next fire time, or "none"
    Next,
    /// Print settings and derived signals as JSON
    Status,
    /// Record that a reminder was just delivered
    Fired,
    /// Suppress reminders for the given number of minutes
    Snooze {
        /// Snooze duration in minutes
        #[arg(default_value = "30")]
        minutes: u32,
    },
    /// Run the delivery loop in the foreground, printing when due
    Watch,
}

/// Assemble the engine state for one evaluation from the activity log and
/// the session store.
fn evaluate_now(
    db: &Database,
    config: &Config,
    store: &SessionStore,
) -> Result<ReminderState<Local>, Box<dyn std::error::Error>> {
    let now = Local::now();
    let samples: Vec<ActivitySample<Local>> = db
        .samples_since(now.with_timezone(&Utc) - Duration::hours(1))?
        .into_iter()
        .map(|r| ActivitySample {
            observed_at: r.observed_at.with_timezone(&Local),
            title: r.title,
        })
        .collect();
    let last = store
        .state()
        .last_reminder_at
        .map(|at| at.with_timezone(&Local));
    Ok(derive_state(&samples, last, now, &config.activity))
}

fn resolve(
    db: &Database,
    config: &Config,
    store: &SessionStore,
) -> Result<Option<DateTime<Local>>, Box<dyn std::error::Error>> {
    let state = evaluate_now(db, config, store)?;
    if store.state().is_snoozed(state.now.with_timezone(&Utc)) {
        return Ok(None);
    }
    Ok(next_fire_time(&config.reminders, &state))
}

pub fn run(action: ReminderAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let config = Config::load_or_default();
    let mut store = SessionStore::hydrate()?;

    match action {
        ReminderAction::Next => match resolve(&db, &config, &store)? {
            Some(at) => println!("{}", at.to_rfc3339()),
            None => println!("none"),
        },
        ReminderAction::Status => {
            let state = evaluate_now(&db, &config, &store)?;
            let next = resolve(&db, &config, &store)?;
            let status = serde_json::json!({
                "settings": config.reminders,
                "session": store.state(),
                "focus_state": state.focus_state,
                "is_idle": state.is_idle,
                "context_switches_last_hour": state.context_switches_last_hour,
                "next_fire_time": next.map(|at| at.to_rfc3339()),
            });
            println!("{}", serde_json::to_string_pretty(&status)?);
        }
        ReminderAction::Fired => {
            store.apply(&SessionAction::ReminderFired { at: Utc::now() })?;
            println!("ok");
        }
        ReminderAction::Snooze { minutes } => {
            let until = Utc::now() + Duration::minutes(i64::from(minutes));
            store.apply(&SessionAction::Snoozed { until })?;
            println!("snoozed until {}", until.to_rfc3339());
        }
        ReminderAction::Watch => {
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(watch_loop(&db, &config, &mut store))?;
        }
    }
    Ok(())
}

/// Foreground delivery loop: evaluate, sleep until due, mark fired, repeat.
/// Ctrl-C ends the loop; there is no in-flight work to abort.
async fn watch_loop(
    db: &Database,
    config: &Config,
    store: &mut SessionStore,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        match resolve(db, config, store)? {
            None => {
                tokio::time::sleep(std::time::Duration::from_secs(SUPPRESSED_POLL_SECS)).await;
            }
            Some(at) => {
                let wait = (at - Local::now()).to_std().unwrap_or_default();
                tokio::time::sleep(wait).await;
                println!("reminder due at {}", at.to_rfc3339());
                store.apply(&SessionAction::ReminderFired { at: Utc::now() })?;
            }
        }
    }
}
