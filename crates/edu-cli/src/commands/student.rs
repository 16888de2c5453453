//! Student commands: enroll, cancel, enrollments, progress.

use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{CancelArgs, EnrollArgs};
use crate::commands::shared::prompt::confirm;
use crate::context::AppContext;
use crate::output::{output, output_page};

#[derive(Serialize)]
struct CancelDismissed {
    cancelled: bool,
    code: String,
}

pub async fn enroll(
    args: &EnrollArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let page = ctx.app.enroll(&args.code).await?;
    output_page(&page, flags.format)
}

/// Ask before cancelling unless `--yes` was given.
pub async fn cancel(
    args: &CancelArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if args.yes {
        let page = ctx.app.cancel(&args.code).await?;
        return output_page(&page, flags.format);
    }

    let prompt = ctx.app.request_cancellation(&args.code)?;
    if confirm(&prompt.question)? {
        let page = ctx.app.confirm_pending().await?;
        output_page(&page, flags.format)
    } else {
        ctx.app.dismiss_pending()?;
        output(
            &CancelDismissed {
                cancelled: false,
                code: prompt.code,
            },
            flags.format,
        )
    }
}

pub async fn enrollments(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let page = ctx.app.my_enrollments().await?;
    output_page(&page, flags.format)
}

pub async fn progress(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let page = ctx.app.progress().await?;
    output_page(&page, flags.format)
}
