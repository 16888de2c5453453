use super::AuthLoginResponse;
use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthLoginArgs;
use crate::commands::shared::parse::parse_role;
use crate::commands::shared::prompt::ask;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(
    args: &AuthLoginArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let role = parse_role(&args.role)?;
    let username = match &args.username {
        Some(username) => username.clone(),
        None => ask("Usuario")?,
    };
    let password = match &args.password {
        Some(password) => password.clone(),
        None => ask("Contraseña")?,
    };

    let outcome = ctx.app.login(&username, &password, role).await?;
    tracing::info!(
        user = outcome.session.display_name(),
        source = %outcome.source,
        "logged in"
    );
    output(&AuthLoginResponse::from(&outcome), flags.format)
}
