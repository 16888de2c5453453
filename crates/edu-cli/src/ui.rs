use std::io::IsTerminal;
use std::sync::OnceLock;

use edu_client::{Notice, NoticeLevel, Notifier};

use crate::cli::{GlobalFlags, OutputFormat};

#[derive(Clone, Copy, Debug)]
pub struct UiPrefs {
    pub table_color: bool,
    pub term_width: Option<usize>,
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let table_color = std::io::stdout().is_terminal()
        && flags.format == OutputFormat::Table
        && !flags.quiet
        && std::env::var_os("NO_COLOR").is_none();

    let term_width = std::env::var("COLUMNS")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|width| *width >= 40);

    let _ = UI_PREFS.set(UiPrefs {
        table_color,
        term_width,
    });
}

#[must_use]
pub fn prefs() -> UiPrefs {
    *UI_PREFS.get().unwrap_or(&UiPrefs {
        table_color: false,
        term_width: None,
    })
}

/// Prints client and controller notices to stderr so stdout stays parseable.
///
/// Quiet mode keeps errors only.
#[derive(Debug, Clone, Copy)]
pub struct StderrNotifier {
    quiet: bool,
}

impl StderrNotifier {
    #[must_use]
    pub const fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    const fn shows(self, level: NoticeLevel) -> bool {
        !self.quiet || matches!(level, NoticeLevel::Error)
    }
}

impl Notifier for StderrNotifier {
    fn notify(&self, notice: Notice) {
        if self.shows(notice.level) {
            eprintln!("{}", format_notice(&notice));
        }
    }
}

fn format_notice(notice: &Notice) -> String {
    let marker = match notice.level {
        NoticeLevel::Info => "·",
        NoticeLevel::Success => "✓",
        NoticeLevel::Error => "✗",
    };
    format!("{marker} {}", notice.text)
}
