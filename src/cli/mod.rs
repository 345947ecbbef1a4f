use anyhow::{Context, Result, bail};
use clap::Parser;
use std::io::{BufRead, Write};
use tracing::debug;

use crate::application::{BudgetSession, UiProjection};
use crate::domain::{Cents, Expense, LedgerSnapshot, Severity, format_cents};

const HELP: &str = "\
Commands:
  add <amount> <name...>      Record an expense (e.g. \"add 12.50 Lunch\")
  delete <id>                 Remove an expense (alias: rm)
  list                        Show all expenses
  status                      Show budget, spent and remaining
  help                        Show this help
  quit                        Leave the session (alias: exit)";

/// Tally - session budget tracker
#[derive(Parser, Debug)]
#[command(name = "tally")]
#[command(about = "Track expenses against a budget for one session")]
#[command(version)]
pub struct Cli {
    /// Initial budget (e.g. "1000" or "1000.00"); prompts if omitted
    #[arg(short, long)]
    pub budget: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Symbol printed in front of amounts
    #[arg(long, default_value = "$")]
    pub currency_symbol: String,
}

impl Cli {
    /// Default log filter when RUST_LOG is not set.
    pub fn log_filter(&self) -> &'static str {
        if self.verbose { "tally=debug" } else { "tally=warn" }
    }

    pub fn run(self) -> Result<()> {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        self.run_with(stdin.lock(), stdout.lock())
    }

    /// Run an interactive session over arbitrary input and output streams.
    pub fn run_with<R: BufRead, W: Write>(&self, mut input: R, output: W) -> Result<()> {
        let projection = ConsoleProjection::new(output, &self.currency_symbol);
        let mut session = BudgetSession::new(projection);

        if let Some(raw) = &self.budget {
            if let Err(err) = session.request_initial_budget(raw) {
                debug!(%err, "budget flag rejected, falling back to prompt");
            }
            flush_projection(&mut session)?;
        }

        // An invalid budget restarts the session: no ledger exists until a valid amount is given.
        while !session.is_initialized() {
            session.projection_mut().prompt("What is your budget? ")?;
            let Some(line) = read_line(&mut input)? else {
                return Ok(());
            };
            if let Err(err) = session.request_initial_budget(&line) {
                debug!(%err, "restarting budget prompt");
            }
            flush_projection(&mut session)?;
        }

        session.projection_mut().print(HELP)?;

        loop {
            session.projection_mut().prompt("> ")?;
            let Some(line) = read_line(&mut input)? else {
                break;
            };

            match Command::parse(&line) {
                Ok(None) => {}
                Ok(Some(Command::Quit)) => break,
                Ok(Some(command)) => execute(&mut session, command)?,
                Err(err) => session.projection_mut().on_validation_error(&err.to_string()),
            }
            flush_projection(&mut session)?;
        }

        Ok(())
    }
}

/// One line of user input inside a running session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add { raw_amount: String, raw_name: String },
    Delete { raw_id: String },
    List,
    Status,
    Help,
    Quit,
}

impl Command {
    /// Parse an input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_lowercase().as_str() {
            "" => return Ok(None),
            "add" => {
                // Missing parts are passed through as empty so the session reports them.
                let (raw_amount, raw_name) = match rest.split_once(char::is_whitespace) {
                    Some((amount, name)) => (amount, name.trim()),
                    None => (rest, ""),
                };
                Command::Add {
                    raw_amount: raw_amount.to_string(),
                    raw_name: raw_name.to_string(),
                }
            }
            "delete" | "rm" => Command::Delete {
                raw_id: rest.to_string(),
            },
            "list" | "ls" => Command::List,
            "status" => Command::Status,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => bail!("Unknown command '{}'. Type 'help' for a list of commands", other),
        };

        Ok(Some(command))
    }
}

fn execute<W: Write>(
    session: &mut BudgetSession<ConsoleProjection<W>>,
    command: Command,
) -> Result<()> {
    match command {
        Command::Add {
            raw_amount,
            raw_name,
        } => {
            if let Err(err) = session.request_add_expense(&raw_name, &raw_amount) {
                debug!(%err, "add rejected");
            }
        }

        Command::Delete { raw_id } => match session.request_delete_expense_raw(&raw_id) {
            Ok(Some(_)) => {}
            Ok(None) => session
                .projection_mut()
                .print(&format!("No expense with id {}", raw_id.trim()))?,
            Err(err) => debug!(%err, "delete rejected"),
        },

        Command::List => {
            if let Some(snapshot) = session.snapshot() {
                session
                    .projection_mut()
                    .on_expense_list_changed(&snapshot.expenses);
            }
        }

        Command::Status => {
            if let Some(snapshot) = session.snapshot() {
                session.projection_mut().render_status(&snapshot)?;
            }
        }

        Command::Help => session.projection_mut().print(HELP)?,

        Command::Quit => {}
    }

    Ok(())
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Failed to read input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Surface any write error the projection swallowed while rendering.
fn flush_projection<W: Write>(session: &mut BudgetSession<ConsoleProjection<W>>) -> Result<()> {
    if let Some(err) = session.projection_mut().take_error() {
        return Err(err).context("Failed to write output");
    }
    Ok(())
}

/// Terminal rendering of a budget session.
///
/// `UiProjection` callbacks cannot fail, so the first write error is kept
/// and handed back through [`take_error`](Self::take_error).
pub struct ConsoleProjection<W> {
    out: W,
    currency_symbol: String,
    error: Option<std::io::Error>,
}

impl<W: Write> ConsoleProjection<W> {
    pub fn new(out: W, currency_symbol: &str) -> Self {
        Self {
            out,
            currency_symbol: currency_symbol.to_string(),
            error: None,
        }
    }

    pub fn money(&self, cents: Cents) -> String {
        if cents < 0 {
            format!("-{}{}", self.currency_symbol, format_cents(cents).trim_start_matches('-'))
        } else {
            format!("{}{}", self.currency_symbol, format_cents(cents))
        }
    }

    pub fn print(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{}", text).context("Failed to write output")
    }

    pub fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.out, "{}", text)
            .and_then(|_| self.out.flush())
            .context("Failed to write output")
    }

    pub fn render_status(&mut self, snapshot: &LedgerSnapshot) -> Result<()> {
        let lines = [
            format!("Budget:    {:>15}", self.money(snapshot.total_budget)),
            format!("Spent:     {:>15}", self.money(snapshot.spent)),
            format!(
                "Remaining: {:>15}  [{}]",
                self.money(snapshot.remaining),
                snapshot.severity()
            ),
            format!("Expenses:  {:>15}", snapshot.expenses.len()),
        ];
        self.print(&lines.join("\n"))
    }

    pub fn take_error(&mut self) -> Option<std::io::Error> {
        self.error.take()
    }

    fn emit(&mut self, text: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = writeln!(self.out, "{}", text) {
            self.error = Some(err);
        }
    }
}

impl<W: Write> UiProjection for ConsoleProjection<W> {
    fn on_budget_initialized(&mut self, snapshot: &LedgerSnapshot) {
        let line = format!("Budget:    {:>15}", self.money(snapshot.total_budget));
        self.emit(&line);
    }

    fn on_expense_list_changed(&mut self, expenses: &[Expense]) {
        if expenses.is_empty() {
            self.emit("No expenses recorded.");
            return;
        }

        let mut table = format!(
            "{:<6} {:<30} {:>15} {:>10}\n{}",
            "ID",
            "NAME",
            "AMOUNT",
            "ADDED",
            "-".repeat(64)
        );
        for expense in expenses {
            table.push_str(&format!(
                "\n{:<6} {:<30} {:>15} {:>10}",
                expense.id,
                expense.name,
                self.money(expense.amount_cents),
                expense.created_at.format("%H:%M:%S")
            ));
        }
        self.emit(&table);
    }

    fn on_remaining_changed(&mut self, remaining: Cents, severity: Severity) {
        let line = format!("Remaining: {:>15}  [{}]", self.money(remaining), severity);
        self.emit(&line);
    }

    fn on_validation_error(&mut self, message: &str) {
        self.emit(&format!("error: {}", message));
    }

    fn on_info(&mut self, message: &str) {
        self.emit(&format!("ok: {}", message));
    }
}
