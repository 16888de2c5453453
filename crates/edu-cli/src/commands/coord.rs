use edu_app::features::CourseForm;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CoordCommands;
use crate::context::AppContext;
use crate::output::output_page;

/// Handle `edubot coord`.
pub async fn handle(
    action: &CoordCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let app = &ctx.app;
    match action {
        CoordCommands::Courses => output_page(&app.coordinator_courses().await?, flags.format),
        CoordCommands::Create(args) => {
            let form = CourseForm {
                code: args.code.clone(),
                name: args.name.clone(),
                semester: args.semester.clone(),
            };
            output_page(&app.create_course(&form).await?, flags.format)
        }
        CoordCommands::Approve { code } => {
            output_page(&app.approve_course(code).await?, flags.format)
        }
        CoordCommands::Students { code } => {
            output_page(&app.course_students(code).await?, flags.format)
        }
        CoordCommands::Report => output_page(&app.general_report().await?, flags.format),
    }
}
