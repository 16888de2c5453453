use clap::{Args, Subcommand};

/// Teacher commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TeacherCommands {
    /// Courses assigned to me.
    Courses,
    /// Record a student's grade.
    Grade(TeacherGradeArgs),
    /// Grades of every student in a course.
    Report {
        code: String,
    },
}

#[derive(Clone, Debug, Args)]
pub struct TeacherGradeArgs {
    /// Course code.
    #[arg(long)]
    pub course: String,
    /// Student id, e.g. EST002.
    #[arg(long)]
    pub student: String,
    /// Grade on the 0.0 to 5.0 scale.
    #[arg(long, allow_hyphen_values = true)]
    pub grade: String,
}
