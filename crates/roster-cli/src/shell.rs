//! Interactive shell
//!
//! Line-oriented front end over [`RosterSession`]. The shell owns nothing but
//! a session and an optional default snapshot path; it forwards raw field
//! text into the core and renders whatever state comes back. All typed roster
//! errors are absorbed into printed notices so the loop never aborts on a
//! wrong secret, an unknown id or a locked session.

use crate::snapshot::Snapshot;
use anyhow::bail;
use roster_core::{Field, RecordId, RosterError, RosterSession};
use std::io::Write;
use std::path::PathBuf;

/// One parsed shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Submit a secret to the gate
    Unlock { secret: String },
    /// Replace one draft field
    Draft { field: Field, value: String },
    /// Commit the draft
    Add,
    /// Replace one field of an existing record
    Set {
        id: RecordId,
        field: Field,
        value: String,
    },
    /// Delete a record
    Remove { id: RecordId },
    /// Clear the roster
    Reset,
    /// Render the roster
    List,
    /// Save a snapshot
    Save { path: Option<PathBuf> },
    /// Load a snapshot
    Load { path: Option<PathBuf> },
    /// Show usage
    Help,
    /// Leave the shell
    Quit,
}

impl Command {
    /// Parse one input line; blank lines parse to `None`
    pub fn parse(line: &str) -> anyhow::Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (line, ""),
        };

        let command = match head {
            "unlock" => Self::Unlock {
                secret: rest.to_string(),
            },
            "draft" => {
                let (field, value) = split_field_value(rest)?;
                Self::Draft { field, value }
            }
            "add" => Self::Add,
            "set" => {
                let (id, tail) = split_id(rest)?;
                let (field, value) = split_field_value(tail)?;
                Self::Set { id, field, value }
            }
            "rm" => {
                let (id, tail) = split_id(rest)?;
                if !tail.is_empty() {
                    bail!("usage: rm <id>");
                }
                Self::Remove { id }
            }
            "reset" => Self::Reset,
            "list" => Self::List,
            "save" => Self::Save {
                path: optional_path(rest),
            },
            "load" => Self::Load {
                path: optional_path(rest),
            },
            "help" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => bail!("unknown command: {other} (try 'help')"),
        };
        Ok(Some(command))
    }
}

fn split_field_value(text: &str) -> anyhow::Result<(Field, String)> {
    let (name, value) = match text.split_once(char::is_whitespace) {
        Some((name, value)) => (name, value.trim()),
        None if !text.is_empty() => (text, ""),
        None => bail!("expected a field name (name, destination, date, total-days)"),
    };
    Ok((name.parse()?, value.to_string()))
}

fn split_id(text: &str) -> anyhow::Result<(RecordId, &str)> {
    let (head, tail) = match text.split_once(char::is_whitespace) {
        Some((head, tail)) => (head, tail.trim()),
        None => (text, ""),
    };
    let raw: u64 = head
        .parse()
        .map_err(|_| anyhow::anyhow!("expected a record id, got '{head}'"))?;
    Ok((RecordId(raw), tail))
}

fn optional_path(text: &str) -> Option<PathBuf> {
    if text.is_empty() {
        None
    } else {
        Some(PathBuf::from(text))
    }
}

/// Whether the loop should keep reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Quit,
}

/// The shell: one session plus a default snapshot path
pub struct Shell {
    session: RosterSession,
    snapshot_path: Option<PathBuf>,
}

impl Shell {
    /// Create a shell over the given session
    #[inline]
    #[must_use]
    pub fn new(session: RosterSession, snapshot_path: Option<PathBuf>) -> Self {
        Self {
            session,
            snapshot_path,
        }
    }

    /// The underlying session
    #[inline]
    #[must_use]
    pub fn session(&self) -> &RosterSession {
        &self.session
    }

    /// Execute one command, writing any output to `out`
    ///
    /// Roster errors become notices; only writer failures propagate.
    pub fn execute(&mut self, command: Command, out: &mut impl Write) -> anyhow::Result<Outcome> {
        match command {
            Command::Unlock { secret } => {
                if self.session.is_unlocked() {
                    writeln!(out, "already unlocked")?;
                } else if self.session.unlock(&secret) {
                    writeln!(out, "write access granted")?;
                } else {
                    writeln!(out, "secret not accepted; session stays locked")?;
                }
            }
            Command::Draft { field, value } => {
                let result = self.session.update_draft(field, value);
                self.notice(result, out)?;
            }
            Command::Add => match self.session.add() {
                Ok(id) => writeln!(out, "added record {id}")?,
                Err(error) => writeln!(out, "{error}")?,
            },
            Command::Set { id, field, value } => {
                let result = self.session.edit_field(id, field, value);
                self.notice(result, out)?;
            }
            Command::Remove { id } => {
                let result = self.session.remove(id);
                self.notice(result, out)?;
            }
            Command::Reset => {
                let result = self.session.clear();
                self.notice(result, out)?;
            }
            Command::List => {
                self.render(out)?;
            }
            Command::Save { path } => {
                self.save(path, out)?;
            }
            Command::Load { path } => {
                self.load(path, out)?;
            }
            Command::Help => {
                writeln!(out, "{}", USAGE)?;
            }
            Command::Quit => return Ok(Outcome::Quit),
        }
        Ok(Outcome::Continue)
    }

    fn notice(&self, result: Result<(), RosterError>, out: &mut impl Write) -> anyhow::Result<()> {
        match result {
            Ok(()) => writeln!(out, "ok")?,
            Err(error) => writeln!(out, "{error}")?,
        }
        Ok(())
    }

    fn render(&self, out: &mut impl Write) -> anyhow::Result<()> {
        if !self.session.is_unlocked() {
            writeln!(out, "session is locked; unlock first")?;
            return Ok(());
        }
        if self.session.records().is_empty() {
            writeln!(out, "no trips on the roster")?;
            return Ok(());
        }
        writeln!(
            out,
            "{:<4} {:<5} {:<16} {:<16} {:<12} {}",
            "#", "id", "name", "destination", "date", "total-days"
        )?;
        // The position column is a display artifact of the current order;
        // only the id is stable.
        for (position, record) in self.session.records().iter().enumerate() {
            writeln!(
                out,
                "{:<4} {:<5} {:<16} {:<16} {:<12} {}",
                position + 1,
                record.id,
                record.name,
                record.destination,
                record.date,
                record.total_days
            )?;
        }
        Ok(())
    }

    fn resolve_path(&self, path: Option<PathBuf>) -> Option<PathBuf> {
        path.or_else(|| self.snapshot_path.clone())
    }

    fn save(&self, path: Option<PathBuf>, out: &mut impl Write) -> anyhow::Result<()> {
        let Some(path) = self.resolve_path(path) else {
            writeln!(out, "no snapshot path given (use 'save <path>' or --snapshot)")?;
            return Ok(());
        };
        let snapshot = Snapshot::capture(self.session.records(), self.session.next_id());
        match snapshot.save(&path) {
            Ok(()) => writeln!(out, "saved {} record(s) to {}", snapshot.records.len(), path.display())?,
            Err(error) => writeln!(out, "save failed: {error:#}")?,
        }
        Ok(())
    }

    fn load(&mut self, path: Option<PathBuf>, out: &mut impl Write) -> anyhow::Result<()> {
        let Some(path) = self.resolve_path(path) else {
            writeln!(out, "no snapshot path given (use 'load <path>' or --snapshot)")?;
            return Ok(());
        };
        let snapshot = match Snapshot::load(&path) {
            Ok(snapshot) => snapshot,
            Err(error) => {
                writeln!(out, "load failed: {error:#}")?;
                return Ok(());
            }
        };
        let count = snapshot.records.len();
        match self.session.import(snapshot.records, snapshot.next_id) {
            Ok(()) => writeln!(out, "loaded {} record(s) from {}", count, path.display())?,
            Err(error) => writeln!(out, "{error}")?,
        }
        Ok(())
    }
}

/// Shell usage text
pub const USAGE: &str = "\
commands:
  unlock <secret>           submit the session secret
  draft <field> <value>     fill one draft field (name, destination, date, total-days)
  add                       commit the draft as a new record
  set <id> <field> <value>  replace one field of a record, verbatim
  rm <id>                   delete a record
  reset                     clear the roster
  list                      show the roster in maintained order
  save [path]               write a JSON snapshot
  load [path]               replace the roster from a JSON snapshot
  help                      show this text
  quit                      leave the shell";
