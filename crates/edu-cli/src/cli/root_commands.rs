use clap::{Args, Subcommand, ValueEnum};

use crate::cli::subcommands::{AuthCommands, CoordCommands, CoursesCommands, TeacherCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Log in, log out, and inspect the stored session.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Browse the course catalog.
    Courses {
        #[command(subcommand)]
        action: CoursesCommands,
    },
    /// Enroll in a course.
    Enroll(EnrollArgs),
    /// Cancel an enrollment.
    Cancel(CancelArgs),
    /// List my enrollments.
    Enrollments,
    /// Show my academic progress.
    Progress,
    /// Send one message to the assistant.
    Chat(ChatArgs),
    /// Interactive assistant session.
    Shell,
    /// Coordinator dashboard.
    Coord {
        #[command(subcommand)]
        action: CoordCommands,
    },
    /// Teacher dashboard.
    Teacher {
        #[command(subcommand)]
        action: TeacherCommands,
    },
    /// Print the JSON Schema of a wire type.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct EnrollArgs {
    /// Course code, e.g. MAT101.
    pub code: String,
}

#[derive(Clone, Debug, Args)]
pub struct CancelArgs {
    /// Course code of the enrollment to cancel.
    pub code: String,
    /// Skip the confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

#[derive(Clone, Debug, Args)]
pub struct ChatArgs {
    /// Message text; words are joined with spaces.
    #[arg(required = true, num_args = 1.., trailing_var_arg = true)]
    pub words: Vec<String>,
}

impl ChatArgs {
    #[must_use]
    pub fn text(&self) -> String {
        self.words.join(" ")
    }
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Wire type to describe.
    #[arg(value_enum)]
    pub type_name: SchemaType,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaType {
    Session,
    User,
    Course,
    CourseDetail,
    Assignment,
    Enrollment,
    Progress,
    ReportRow,
    Student,
    Grade,
}
