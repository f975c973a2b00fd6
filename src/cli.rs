//! Terminal front end: one-shot reports, a sign listing, and an interactive
//! form shell driving the [`Planner`].

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};

use crate::{Event, Field, FormInput, Planner, Report, Sign, SubmitError};

#[derive(Debug, Parser)]
#[command(
    name = "astro-happiness",
    about = "Astro Happiness Planner: find your sun sign and a few habits for a happier life",
    version,
    propagate_version = true
)]
pub struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate the report for one birth date
    Report(ReportArgs),

    /// List every sign with the days it covers
    Signs {
        /// Output as JSON
        #[arg(long, short = 'j')]
        json: bool,
    },

    /// Fill in the form interactively
    Shell,
}

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Date of birth, YYYY-MM-DD or MM/DD/YYYY
    #[arg(long, env = "ASTRO_DATE")]
    pub date: String,

    /// Your name (optional)
    #[arg(long, env = "ASTRO_NAME", default_value = "")]
    pub name: String,

    /// Time of birth (accepted, not used)
    #[arg(long, env = "ASTRO_TIME", default_value = "")]
    pub time: String,

    /// Place of birth, "City, Country" (accepted, not used)
    #[arg(long, env = "ASTRO_PLACE", default_value = "")]
    pub place: String,

    /// Output as JSON
    #[arg(long, short = 'j')]
    pub json: bool,
}

impl ReportArgs {
    pub fn form(&self) -> FormInput {
        FormInput {
            name:  self.name.clone(),
            date:  self.date.clone(),
            time:  self.time.clone(),
            place: self.place.clone(),
        }
    }
}

/// Runs a parsed command line against stdin and stdout.
///
/// # Errors
/// Fails when the report cannot be built or the terminal cannot be written.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Report(args) => {
            let mut planner = Planner::with_form(args.form());
            planner
                .submit()
                .with_context(|| format!("cannot build a report for date {:?}", args.date))?;
            let report = planner
                .report()
                .context("planner did not enter the report state")?;
            if args.json {
                serde_json::to_writer_pretty(&mut out, report)?;
                writeln!(out)?;
            } else {
                write!(out, "{}", render_report(report))?;
            }
        },
        Command::Signs { json } => {
            if json {
                let signs: Vec<serde_json::Value> = Sign::ALL
                    .iter()
                    .map(|sign| serde_json::json!({ "sign": sign, "range": sign.range() }))
                    .collect();
                serde_json::to_writer_pretty(&mut out, &signs)?;
                writeln!(out)?;
            } else {
                write!(out, "{}", render_signs())?;
            }
        },
        Command::Shell => {
            let stdin = io::stdin();
            run_shell(stdin.lock(), out)?;
        },
    }

    Ok(())
}

/// Plain-text report: greeting, overview, then the four titled insights.
pub fn render_report(report: &Report) -> String {
    let record = report.record();
    let insights: String = record
        .insights
        .iter()
        .map(|(category, insight)| format!("\n  {category}\n    {insight}\n"))
        .collect();
    format!(
        "{}\n\n{}\n\nHappiness Insights\n{insights}",
        report.greeting(),
        record.overview
    )
}

pub fn render_signs() -> String {
    Sign::ALL
        .iter()
        .map(|sign| format!("{:<12} {}\n", sign.name(), sign.range()))
        .collect()
}

const SHELL_HELP: &str = "\
Commands:
  name <text>     set your name (optional)
  date <date>     set your date of birth (YYYY-MM-DD or MM/DD/YYYY)
  time <hh:mm>    set your time of birth (optional)
  place <text>    set your place of birth (optional)
  submit          generate the report
  back            return to the form
  show            print the form or the current report
  help            print this help
  quit            leave";

/// One line of shell input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Edit(Field, String),
    Submit,
    Back,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown command: {0} (type `help` for a list)")]
pub struct UnknownCommand(pub String);

impl FromStr for ShellCommand {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (word, rest) = trimmed
            .split_once(char::is_whitespace)
            .map_or((trimmed, ""), |(word, rest)| (word, rest.trim()));

        match word.to_ascii_lowercase().as_str() {
            "submit" => Ok(Self::Submit),
            "back" | "reset" => Ok(Self::Back),
            "show" => Ok(Self::Show),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            _ => word
                .parse::<Field>()
                .map(|field| Self::Edit(field, rest.to_owned()))
                .map_err(|_| UnknownCommand(word.to_owned())),
        }
    }
}

impl ShellCommand {
    /// The planner event this command stands for, if any.
    pub fn into_event(self) -> Option<Event> {
        match self {
            Self::Edit(field, value) => Some(Event::Edit(field, value)),
            Self::Submit => Some(Event::Submit),
            Self::Back => Some(Event::Reset),
            Self::Show | Self::Help | Self::Quit => None,
        }
    }
}

fn render_form(form: &FormInput) -> String {
    Field::ALL
        .iter()
        .map(|field| format!("  {:<6} {}\n", field.to_string(), form.get(*field)))
        .collect()
}

fn prompt(out: &mut impl Write, planner: &Planner) -> io::Result<()> {
    let label = if planner.is_reporting() { "report" } else { "form" };
    write!(out, "{label}> ")?;
    out.flush()
}

/// Reads commands line by line until `quit` or end of input.
///
/// A submit with no date does nothing, just like the web form. An
/// unreadable date is reported and the form stays open.
///
/// # Errors
/// Fails only on I/O errors.
pub fn run_shell(input: impl BufRead, mut out: impl Write) -> anyhow::Result<()> {
    let mut planner = Planner::new();
    writeln!(out, "Astro Happiness Planner")?;
    writeln!(out, "{SHELL_HELP}")?;
    prompt(&mut out, &planner)?;

    for line in input.lines() {
        let line = line.context("failed to read shell input")?;
        if line.trim().is_empty() {
            prompt(&mut out, &planner)?;
            continue;
        }

        match line.parse::<ShellCommand>() {
            Ok(ShellCommand::Quit) => break,
            Ok(ShellCommand::Help) => writeln!(out, "{SHELL_HELP}")?,
            Ok(ShellCommand::Show) => match planner.report() {
                Some(report) => write!(out, "{}", render_report(report))?,
                None => write!(out, "{}", render_form(planner.form()))?,
            },
            Ok(command) => {
                let is_submit = command == ShellCommand::Submit;
                if let Some(event) = command.into_event() {
                    match planner.handle(event) {
                        Ok(()) => {
                            if let (true, Some(report)) = (is_submit, planner.report()) {
                                write!(out, "{}", render_report(report))?;
                            }
                        },
                        Err(SubmitError::MissingDate) => {},
                        Err(error) => writeln!(out, "error: {error}")?,
                    }
                }
            },
            Err(error) => writeln!(out, "{error}")?,
        }
        prompt(&mut out, &planner)?;
    }

    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;
    use clap::CommandFactory;
    use std::io::Cursor;

    fn shell(script: &str) -> String {
        let mut out = Vec::new();
        run_shell(Cursor::new(script.to_owned()), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_report_args() {
        let cli = Cli::try_parse_from([
            "astro-happiness",
            "report",
            "--date",
            "1990-07-04",
            "--name",
            "Ada",
            "--place",
            "Lisbon, Portugal",
        ])
        .unwrap();
        let Command::Report(args) = cli.command else {
            panic!("expected report command");
        };
        let form = args.form();
        assert_eq!(form.date, "1990-07-04");
        assert_eq!(form.name, "Ada");
        assert_eq!(form.place, "Lisbon, Portugal");
        assert!(form.time.is_empty());
        assert!(!args.json);
    }

    #[test]
    fn test_parse_shell_commands() {
        struct TestCase {
            line:     &'static str,
            expected: ShellCommand,
        }

        let cases = [
            TestCase {
                line:     "date 1990-07-04",
                expected: ShellCommand::Edit(Field::Date, "1990-07-04".to_owned()),
            },
            TestCase {
                line:     "place   Oslo, Norway ",
                expected: ShellCommand::Edit(Field::Place, "Oslo, Norway".to_owned()),
            },
            TestCase {
                line:     "name",
                expected: ShellCommand::Edit(Field::Name, String::new()),
            },
            TestCase {
                line:     "SUBMIT",
                expected: ShellCommand::Submit,
            },
            TestCase {
                line:     "reset",
                expected: ShellCommand::Back,
            },
            TestCase {
                line:     "exit",
                expected: ShellCommand::Quit,
            },
        ];

        for case in &cases {
            assert_eq!(case.line.parse::<ShellCommand>().unwrap(), case.expected, "{}", case.line);
        }

        assert_eq!(
            "horoscope today".parse::<ShellCommand>(),
            Err(UnknownCommand("horoscope".to_owned()))
        );
    }

    #[test]
    fn test_render_report_includes_all_sections() {
        let mut planner = Planner::new();
        planner.edit(Field::Date, "1990-07-04");
        planner.submit().unwrap();
        let text = render_report(planner.report().unwrap());

        let record = content::lookup(Sign::Cancer);
        assert!(text.starts_with("You are a Cancer!\n"));
        assert!(text.contains(record.overview));
        assert!(text.contains("Happiness Insights"));
        for (category, insight) in record.insights.iter() {
            assert!(text.contains(&category.to_string()), "missing {category}");
            assert!(text.contains(insight), "missing {category} insight");
        }
    }

    #[test]
    fn test_render_report_layout() {
        let mut planner = Planner::new();
        planner.edit(Field::Name, "Ada");
        planner.edit(Field::Date, "1990-07-04");
        planner.submit().unwrap();
        let report = planner.report().unwrap();
        let record = report.record();

        let text = render_report(report);
        let mut expected = format!(
            "Hello Ada, you are a Cancer!\n\n{}\n\nHappiness Insights\n",
            record.overview
        );
        for (category, insight) in record.insights.iter() {
            expected.push_str(&format!("\n  {category}\n    {insight}\n"));
        }
        assert_eq!(text, expected);
        assert!(text.ends_with(&format!("    {}\n", record.insights.service)));
    }

    #[test]
    fn test_render_signs_lists_every_span() {
        let text = render_signs();
        assert_eq!(text.lines().count(), 12);
        assert!(text.contains("Capricorn    12-22/01-19"));
        assert!(text.contains("Pisces       02-19/03-20"));
    }

    #[test]
    fn test_shell_submit_and_back() {
        let output = shell("name Ada\ndate 1990-07-04\nsubmit\nback\nshow\nquit\n");
        assert!(output.contains("Hello Ada, you are a Cancer!"));
        assert!(output.contains(content::lookup(Sign::Cancer).overview));
        assert!(output.contains("report> "));
        assert!(output.contains("  date   1990-07-04"));
    }

    #[test]
    fn test_shell_submit_without_date_is_silent() {
        let output = shell("submit\nquit\n");
        assert!(!output.contains("You are a"));
        assert!(!output.contains("error"));
        assert!(!output.contains("report> "));
    }

    #[test]
    fn test_shell_reports_bad_date() {
        let output = shell("date 1990-02-30\nsubmit\n");
        assert!(output.contains("error: Invalid day 30 for month 1990-02"));
        assert!(!output.contains("report> "));
    }

    #[test]
    fn test_shell_unknown_command() {
        let output = shell("fly\n");
        assert!(output.contains("Unknown command: fly"));
    }
}
