mod demo;
mod login;
mod logout;
mod status;

use edu_auth::LoginOutcome;
use edu_client::Source;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthCommands;
use crate::context::AppContext;

/// Handle `edubot auth <subcommand>`.
pub async fn handle(
    action: &AuthCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AuthCommands::Login(args) => login::handle(args, ctx, flags).await,
        AuthCommands::Demo(args) => demo::handle(args, ctx, flags).await,
        AuthCommands::Logout => logout::handle(ctx, flags),
        AuthCommands::Status => status::handle(ctx, flags),
    }
}

#[derive(Debug, Serialize)]
struct AuthLoginResponse {
    authenticated: bool,
    user_id: u64,
    name: String,
    role: String,
    dashboard: &'static str,
    source: Source,
}

impl From<&LoginOutcome> for AuthLoginResponse {
    fn from(outcome: &LoginOutcome) -> Self {
        Self {
            authenticated: true,
            user_id: outcome.session.user_id(),
            name: outcome.session.display_name().to_string(),
            role: outcome.session.role().label().to_string(),
            dashboard: outcome.dashboard,
            source: outcome.source,
        }
    }
}
