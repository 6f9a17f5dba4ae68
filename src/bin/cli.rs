use clap::{Parser, Subcommand};
use dialoguer::Select;
use dotenvy::dotenv;

use staffee_auth::{Role, create_session_token, decrypt};
use staffee_config::SessionConfig;

#[derive(Parser)]
#[command(name = "staffee-cli")]
#[command(about = "Staffee CLI - session tools for local development", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign a session token for a user, as a successful login would
    IssueSession {
        /// Backend user id
        #[arg(short = 'u', long)]
        user_id: String,

        /// candidate or employer (prompted if omitted)
        #[arg(short = 'r', long)]
        role: Option<Role>,
    },
    /// Decode a session token with the configured secret
    InspectSession {
        /// Value of the `session` cookie
        token: String,
    },
}

fn prompt_role() -> anyhow::Result<Role> {
    let roles = [Role::Candidate, Role::Employer];
    let choice = Select::new()
        .with_prompt("Role")
        .items(&roles.map(|r| r.as_str()))
        .default(0)
        .interact()?;
    Ok(roles[choice])
}

fn issue_session(config: &SessionConfig, user_id: &str, role: Option<Role>) -> anyhow::Result<()> {
    let role = match role {
        Some(role) => role,
        None => prompt_role()?,
    };

    let (token, claims) = create_session_token(user_id, role, config).map_err(|e| e.error)?;

    println!("{token}");
    eprintln!(
        "Session for {} ({}) expires {}",
        claims.user_id,
        claims.role,
        claims.expires_at().to_rfc3339()
    );
    Ok(())
}

fn inspect_session(config: &SessionConfig, token: &str) -> bool {
    match decrypt(token.trim(), config) {
        Some(claims) => {
            println!("userId:    {}", claims.user_id);
            println!("role:      {}", claims.role);
            println!("expiresAt: {}", claims.expires_at().to_rfc3339());
            true
        }
        None => {
            println!("invalid session");
            false
        }
    }
}

fn main() {
    dotenv().ok();

    let cli = Cli::parse();
    let config = SessionConfig::from_env();

    let ok = match cli.command {
        Commands::IssueSession { user_id, role } => match issue_session(&config, &user_id, role) {
            Ok(()) => true,
            Err(e) => {
                eprintln!("Error issuing session: {e}");
                false
            }
        },
        Commands::InspectSession { token } => inspect_session(&config, &token),
    };

    if !ok {
        std::process::exit(1);
    }
}
