use clap::{Args, Subcommand};

/// Coordinator commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CoordCommands {
    /// List all courses, pending and approved.
    Courses,
    /// Create a course.
    Create(CoordCreateArgs),
    /// Approve a pending course.
    Approve {
        code: String,
    },
    /// Students enrolled in a course.
    Students {
        code: String,
    },
    /// Enrollment and average per course.
    Report,
}

/// Fields are taken as typed and validated by the controller.
#[derive(Clone, Debug, Args)]
pub struct CoordCreateArgs {
    #[arg(long)]
    pub code: String,
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub semester: String,
}
