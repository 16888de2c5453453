use clap::Subcommand;

/// Course catalog commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CoursesCommands {
    /// List available courses.
    List {
        /// Only courses of this semester.
        #[arg(long)]
        semester: Option<u32>,
    },
    /// Group courses by semester.
    Filter,
    /// Show one course with its schedule.
    Show {
        /// Course code, e.g. MAT101.
        code: String,
    },
}
