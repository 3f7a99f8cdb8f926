use clap::Subcommand;
use clarvu_core::SessionAction as StoreAction;
use clarvu_core::{PermissionState, SessionStore};

#[derive(Subcommand)]
pub enum SessionAction {
    /// Print the current session state as JSON
    Show,
    /// Record the platform notification-permission answer
    Permission {
        /// One of: granted, denied, undecided
        state: String,
    },
    /// End the session and drop all per-session state
    Logout,
}

pub fn run(action: SessionAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = SessionStore::hydrate()?;
    match action {
        SessionAction::Show => {
            println!("{}", serde_json::to_string_pretty(store.state())?);
        }
        SessionAction::Permission { state } => {
            let permission = match state.as_str() {
                "granted" => PermissionState::Granted,
                "denied" => PermissionState::Denied,
                "undecided" => PermissionState::Undecided,
                other => {
                    eprintln!("unknown permission state: {other}");
                    std::process::exit(1);
                }
            };
            store.apply(&StoreAction::PermissionChanged { permission })?;
            println!("ok");
        }
        SessionAction::Logout => {
            store.clear()?;
            println!("session cleared");
        }
    }
    Ok(())
}
