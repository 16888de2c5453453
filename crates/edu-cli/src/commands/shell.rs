//! Interactive assistant.
//!
//! One `App` lives for the whole session, so the course cache and a held
//! cancellation carry over between lines. Plain text goes to the assistant;
//! lines starting with `/` are quick actions.

use std::io::Write;

use anyhow::Context;
use edu_app::App;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output_page;

const HELP: &str = "\
Acciones:
  /cursos [semestre]   cursos disponibles
  /semestres           agrupar cursos por semestre
  /curso CODIGO        detalle y cronograma
  /inscribir CODIGO    inscribirse en un curso
  /cancelar CODIGO     cancelar una inscripción (pide confirmación)
  /si | /no            confirmar o descartar la cancelación pendiente
  /inscripciones       mis inscripciones
  /progreso            mi progreso académico
  /ayuda               esta ayuda
  /salir               terminar
Cualquier otro texto se envía al asistente.";

#[derive(Debug, Clone, PartialEq, Eq)]
enum ShellCommand {
    Courses(Option<u32>),
    Semesters,
    Detail(String),
    Enroll(String),
    Cancel(String),
    Confirm,
    Dismiss,
    Enrollments,
    Progress,
    Help,
    Quit,
    Chat(String),
    Empty,
}

impl ShellCommand {
    fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Self::Empty);
        }
        let Some(action) = line.strip_prefix('/') else {
            return Ok(Self::Chat(line.to_string()));
        };

        let mut parts = action.split_whitespace();
        let name = parts.next().unwrap_or_default().to_lowercase();
        let arg = parts.next();
        let code = || {
            arg.map(str::to_uppercase)
                .ok_or_else(|| format!("/{name} necesita un código de curso"))
        };

        match name.as_str() {
            "cursos" => arg
                .map(str::parse::<u32>)
                .transpose()
                .map(Self::Courses)
                .map_err(|_| "el semestre debe ser un número".to_string()),
            "semestres" => Ok(Self::Semesters),
            "curso" => code().map(Self::Detail),
            "inscribir" => code().map(Self::Enroll),
            "cancelar" => code().map(Self::Cancel),
            "si" | "sí" | "confirmar" => Ok(Self::Confirm),
            "no" | "descartar" => Ok(Self::Dismiss),
            "inscripciones" => Ok(Self::Enrollments),
            "progreso" => Ok(Self::Progress),
            "ayuda" | "help" => Ok(Self::Help),
            "salir" | "exit" | "quit" => Ok(Self::Quit),
            other => Err(format!("acción desconocida: /{other} (usa /ayuda)")),
        }
    }
}

/// Handle `edubot shell`.
pub async fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let Some(session) = ctx.app.session() else {
        anyhow::bail!("not authenticated; run `edubot auth login`");
    };
    eprintln!(
        "¡Hola {}! Escribe tu consulta o /ayuda para ver las acciones.",
        session.display_name()
    );

    let lines = drive(BufReader::new(tokio::io::stdin()), &mut ctx.app, flags).await?;
    tracing::debug!(lines, "shell closed");
    Ok(())
}

/// Read lines from `reader` and run them until `/salir` or end of input.
/// Returns how many commands were run.
async fn drive<R>(reader: R, app: &mut App, flags: &GlobalFlags) -> anyhow::Result<usize>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    let mut ran = 0;
    loop {
        eprint!("edubot> ");
        std::io::stderr().flush().context("failed to write prompt")?;

        let Some(line) = lines.next_line().await.context("failed to read shell input")? else {
            break;
        };

        let command = match ShellCommand::parse(&line) {
            Ok(ShellCommand::Empty) => continue,
            Ok(ShellCommand::Quit) => break,
            Ok(command) => command,
            Err(message) => {
                eprintln!("{message}");
                continue;
            }
        };
        ran += 1;
        if let Err(error) = run(command, app, flags).await {
            eprintln!("edubot error: {error:#}");
        }
    }

    Ok(ran)
}

async fn run(command: ShellCommand, app: &mut App, flags: &GlobalFlags) -> anyhow::Result<()> {
    let format = flags.format;
    match command {
        ShellCommand::Courses(semester) => output_page(&app.search_courses(semester).await?, format),
        ShellCommand::Semesters => output_page(&app.filter_by_semester().await?, format),
        ShellCommand::Detail(code) => output_page(&app.course_detail(&code).await?, format),
        ShellCommand::Enroll(code) => output_page(&app.enroll(&code).await?, format),
        ShellCommand::Cancel(code) => {
            let prompt = app.request_cancellation(&code)?;
            eprintln!("{} (/si para confirmar, /no para descartar)", prompt.question);
            Ok(())
        }
        ShellCommand::Confirm => output_page(&app.confirm_pending().await?, format),
        ShellCommand::Dismiss => {
            if app.dismiss_pending()? {
                eprintln!("Cancelación descartada.");
            }
            Ok(())
        }
        ShellCommand::Enrollments => output_page(&app.my_enrollments().await?, format),
        ShellCommand::Progress => output_page(&app.progress().await?, format),
        ShellCommand::Chat(text) => output_page(&app.send(&text).await?, format),
        ShellCommand::Help => {
            eprintln!("{HELP}");
            Ok(())
        }
        ShellCommand::Quit | ShellCommand::Empty => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use edu_app::App;
    use edu_auth::MemorySessionStore;
    use edu_client::{ApiClient, FallbackPolicy, RecordingNotifier};
    use edu_config::ApiConfig;
    use pretty_assertions::assert_eq;

    use super::{ShellCommand, drive};
    use crate::cli::{GlobalFlags, OutputFormat};

    fn signed_out_app() -> App {
        let client =
            ApiClient::new(&ApiConfig::default(), Arc::new(RecordingNotifier::new())).unwrap();
        App::new(client, FallbackPolicy::default(), Arc::new(MemorySessionStore::new()))
    }

    fn flags() -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            quiet: true,
            verbose: false,
            base_url: None,
            no_demo: false,
            legacy_fallback: false,
        }
    }

    #[tokio::test]
    async fn quit_stops_reading_lines() {
        let mut app = signed_out_app();
        let input: &[u8] = b"/ayuda\n\n/no\n/salir\n/progreso\n";

        let ran = drive(input, &mut app, &flags()).await.unwrap();

        assert_eq!(ran, 2);
    }

    #[tokio::test]
    async fn end_of_input_closes_the_shell() {
        let mut app = signed_out_app();
        let input: &[u8] = b"/borrar\n/ayuda";

        let ran = drive(input, &mut app, &flags()).await.unwrap();

        assert_eq!(ran, 1);
    }

    #[test]
    fn plain_text_goes_to_the_assistant() {
        assert_eq!(
            ShellCommand::parse("  quiero ver cursos de física \n"),
            Ok(ShellCommand::Chat("quiero ver cursos de física".into()))
        );
        assert_eq!(ShellCommand::parse("   "), Ok(ShellCommand::Empty));
    }

    #[test]
    fn actions_take_upper_cased_codes() {
        assert_eq!(
            ShellCommand::parse("/inscribir mat101"),
            Ok(ShellCommand::Enroll("MAT101".into()))
        );
        assert_eq!(
            ShellCommand::parse("/Cancelar fis201"),
            Ok(ShellCommand::Cancel("FIS201".into()))
        );
    }

    #[test]
    fn courses_takes_an_optional_semester() {
        assert_eq!(ShellCommand::parse("/cursos"), Ok(ShellCommand::Courses(None)));
        assert_eq!(ShellCommand::parse("/cursos 2"), Ok(ShellCommand::Courses(Some(2))));
        assert!(ShellCommand::parse("/cursos dos").is_err());
    }

    #[test]
    fn confirmation_words() {
        assert_eq!(ShellCommand::parse("/sí"), Ok(ShellCommand::Confirm));
        assert_eq!(ShellCommand::parse("/no"), Ok(ShellCommand::Dismiss));
        assert_eq!(ShellCommand::parse("/salir"), Ok(ShellCommand::Quit));
    }

    #[test]
    fn missing_code_and_unknown_action_are_errors() {
        let missing = ShellCommand::parse("/curso").expect_err("code is required");
        assert!(missing.contains("/curso"));
        let unknown = ShellCommand::parse("/borrar").expect_err("unknown action");
        assert!(unknown.contains("/ayuda"));
    }
}
