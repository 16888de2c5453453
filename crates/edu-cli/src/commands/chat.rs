use crate::cli::GlobalFlags;
use crate::cli::root_commands::ChatArgs;
use crate::context::AppContext;
use crate::output::output_page;

/// Handle `edubot chat <text...>`.
pub async fn handle(args: &ChatArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let page = ctx.app.send(&args.text()).await?;
    output_page(&page, flags.format)
}
