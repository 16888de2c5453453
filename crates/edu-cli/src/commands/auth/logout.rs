use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthLogoutResponse {
    cleared: bool,
    was_logged_in: bool,
}

pub fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let was_logged_in = ctx.app.session().is_some();
    ctx.app.logout()?;
    output(
        &AuthLogoutResponse {
            cleared: true,
            was_logged_in,
        },
        flags.format,
    )
}
