use edu_client::fixtures::demo_account;

use super::AuthLoginResponse;
use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthDemoArgs;
use crate::commands::shared::parse::parse_role;
use crate::context::AppContext;
use crate::output::output;

/// Log in with the role's demo account credentials.
pub async fn handle(
    args: &AuthDemoArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let role = parse_role(&args.role)?;
    let account = demo_account(role);
    let outcome = ctx
        .app
        .login(account.username, account.password, role)
        .await?;
    output(&AuthLoginResponse::from(&outcome), flags.format)
}
