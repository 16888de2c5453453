use clap::{Args, Subcommand};

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Log in with a role, username, and password.
    Login(AuthLoginArgs),
    /// Log in with the demo account of a role.
    Demo(AuthDemoArgs),
    /// Clear the stored session.
    Logout,
    /// Show the stored session.
    Status,
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    /// estudiante, coordinador, or docente (English names accepted).
    #[arg(short, long)]
    pub role: String,
    /// Prompted on stdin when omitted.
    #[arg(short, long)]
    pub username: Option<String>,
    /// Prompted on stdin when omitted.
    #[arg(short, long)]
    pub password: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct AuthDemoArgs {
    /// estudiante, coordinador, or docente (English names accepted).
    pub role: String,
}
