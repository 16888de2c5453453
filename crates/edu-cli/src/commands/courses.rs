use crate::cli::GlobalFlags;
use crate::cli::subcommands::CoursesCommands;
use crate::context::AppContext;
use crate::output::output_page;

/// Handle `edubot courses`.
pub async fn handle(
    action: &CoursesCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CoursesCommands::List { semester } => {
            let page = ctx.app.search_courses(*semester).await?;
            output_page(&page, flags.format)
        }
        CoursesCommands::Filter => {
            let page = ctx.app.filter_by_semester().await?;
            output_page(&page, flags.format)
        }
        CoursesCommands::Show { code } => {
            let page = ctx.app.course_detail(code).await?;
            output_page(&page, flags.format)
        }
    }
}
