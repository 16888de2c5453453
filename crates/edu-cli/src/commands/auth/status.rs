use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthStatusResponse {
    authenticated: bool,
    user_id: Option<u64>,
    name: Option<String>,
    initials: Option<String>,
    email: Option<String>,
    role: Option<String>,
    dashboard: Option<&'static str>,
    has_token: bool,
    session_file: String,
    base_url: String,
}

pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let session = ctx.app.session();
    let status = AuthStatusResponse {
        authenticated: session.is_some(),
        user_id: session.map(edu_core::entities::Session::user_id),
        name: session.map(|s| s.display_name().to_string()),
        initials: session.map(|s| s.user.initials()),
        email: session.and_then(|s| s.email().map(str::to_string)),
        role: session.map(|s| s.role().label().to_string()),
        dashboard: session.map(|s| s.role().dashboard()),
        has_token: session.is_some_and(|s| s.auth_token.is_some()),
        session_file: ctx.session_path.display().to_string(),
        base_url: ctx.config.api.normalized_base_url().to_string(),
    };

    output(&status, flags.format)
}
