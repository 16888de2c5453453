use edu_app::features::GradeForm;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TeacherCommands;
use crate::context::AppContext;
use crate::output::output_page;

/// Handle `edubot teacher`.
pub async fn handle(
    action: &TeacherCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let app = &ctx.app;
    match action {
        TeacherCommands::Courses => output_page(&app.assigned_courses().await?, flags.format),
        TeacherCommands::Grade(args) => {
            let form = GradeForm {
                course: args.course.clone(),
                student_id: args.student.clone(),
                grade: args.grade.clone(),
            };
            output_page(&app.record_grade(&form).await?, flags.format)
        }
        TeacherCommands::Report { code } => {
            output_page(&app.student_report(code).await?, flags.format)
        }
    }
}
