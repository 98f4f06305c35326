//! Line-driven form: one command per line on standard input.

use super::helpers::render_results;
use anyhow::Context;
use meshcalc_core::domain::InputField;
use meshcalc_core::report::{DocumentUploader, ExportSettings, StubUploader};
use meshcalc_core::session::CalculatorSession;
use std::io::{BufRead, Write};

pub(super) struct SessionContext {
    pub(super) share_base_url: String,
    pub(super) export: ExportSettings,
    pub(super) uploader: Option<StubUploader>,
}

const SESSION_HELP: &str = "Commands:
  set <field> <value>  Set a field (product-type, finish, mesh, wire, length, loss, width, hook, price-per-kg, quantity)
  show                 Print the form and the last result
  calc                 Validate and calculate
  reset                Clear all fields and results
  share                Print the share link for the last result
  export               Write the report for the last result
  help                 Print this help
  quit                 Leave the session";

pub(super) fn run_session_loop<R, W>(
    reader: R,
    writer: &mut W,
    mut session: CalculatorSession,
    context: &SessionContext,
) -> anyhow::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(writer, "{}", SESSION_HELP)?;
    for line in reader.lines() {
        let line = line.context("failed to read session input")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command.to_ascii_lowercase().as_str() {
            "set" => set_field(writer, &mut session, rest)?,
            "show" => show(writer, &session)?,
            "calc" => match session.calculate() {
                Ok(result) => writeln!(writer, "{}", render_results(session.input(), &result))?,
                Err(error) => writeln!(writer, "{}", error.diagnostic_line())?,
            },
            "reset" => {
                session.reset();
                writeln!(writer, "Form cleared.")?;
            }
            "share" => match session.share(&context.share_base_url) {
                Ok(payload) => writeln!(writer, "{}", payload.link)?,
                Err(error) => writeln!(writer, "{}", error.diagnostic_line())?,
            },
            "export" => {
                let uploader = context
                    .uploader
                    .as_ref()
                    .map(|uploader| uploader as &dyn DocumentUploader);
                match session.export(&context.export, uploader) {
                    Ok(outcome) => {
                        writeln!(writer, "Report written: {}", outcome.local_path.display())?;
                        writeln!(writer, "Share link: {}", outcome.share.link)?;
                    }
                    Err(error) => writeln!(writer, "{}", error.diagnostic_line())?,
                }
            }
            "help" => writeln!(writer, "{}", SESSION_HELP)?,
            "quit" | "exit" => break,
            other => writeln!(writer, "Unknown command '{}'. Type 'help'.", other)?,
        }
    }
    writer.flush()?;
    Ok(())
}

fn set_field<W: Write>(
    writer: &mut W,
    session: &mut CalculatorSession,
    arguments: &str,
) -> anyhow::Result<()> {
    let (name, value) = match arguments.split_once(char::is_whitespace) {
        Some((name, value)) => (name, value.trim()),
        None => (arguments, ""),
    };

    match InputField::from_name(name) {
        Some(field) => {
            session.set_field(field, value);
            writeln!(writer, "{} = {}", field.label(), session.input().field(field))?;
        }
        None => writeln!(writer, "Unknown field '{}'.", name)?,
    }
    Ok(())
}

fn show<W: Write>(writer: &mut W, session: &CalculatorSession) -> anyhow::Result<()> {
    for field in InputField::ALL {
        let marker = if field.is_required() { " *" } else { "" };
        writeln!(
            writer,
            "{}{}: {}",
            field.label(),
            marker,
            session.input().field(field)
        )?;
    }
    match session.calculation() {
        Some(calculation) => writeln!(
            writer,
            "{}",
            render_results(&calculation.input, &calculation.result)
        )?,
        None => writeln!(writer, "No result yet.")?,
    }
    Ok(())
}
