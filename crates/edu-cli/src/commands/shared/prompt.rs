use std::io::{BufRead, Write};

use anyhow::Context;

/// Ask for one line on stderr and read it from stdin.
pub fn ask(label: &str) -> anyhow::Result<String> {
    let stdin = std::io::stdin();
    ask_from(&mut stdin.lock(), &mut std::io::stderr(), label)
}

/// Ask a yes/no question. Anything but an explicit yes is a no.
pub fn confirm(question: &str) -> anyhow::Result<bool> {
    let answer = ask(&format!("{question} [s/N]"))?;
    Ok(is_yes(&answer))
}

pub fn ask_from<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    label: &str,
) -> anyhow::Result<String> {
    write!(writer, "{label}: ").context("failed to write prompt")?;
    writer.flush().context("failed to write prompt")?;

    let mut line = String::new();
    reader.read_line(&mut line).context("failed to read from stdin")?;
    Ok(line.trim().to_string())
}

#[must_use]
pub fn is_yes(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "s" | "si" | "sí" | "y" | "yes"
    )
}
