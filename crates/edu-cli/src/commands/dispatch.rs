use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Auth { action } => commands::auth::handle(&action, ctx, flags).await,
        Commands::Courses { action } => commands::courses::handle(&action, ctx, flags).await,
        Commands::Enroll(args) => commands::student::enroll(&args, ctx, flags).await,
        Commands::Cancel(args) => commands::student::cancel(&args, ctx, flags).await,
        Commands::Enrollments => commands::student::enrollments(ctx, flags).await,
        Commands::Progress => commands::student::progress(ctx, flags).await,
        Commands::Chat(args) => commands::chat::handle(&args, ctx, flags).await,
        Commands::Shell => commands::shell::handle(ctx, flags).await,
        Commands::Coord { action } => commands::coord::handle(&action, ctx, flags).await,
        Commands::Teacher { action } => commands::teacher::handle(&action, ctx, flags).await,
        Commands::Schema(_) => {
            unreachable!("schema is pre-dispatched in main")
        }
    }
}
