//! Parse trace: the ordered record of what the parser did.
//!
//! Each grammar rule logs entry and exit (with success), every consumed
//! token, every reported error and every recovery. The `Display` impl
//! renders an indented log:
//!
//! ```text
//! Entering <Program>
//!   Consumed: 'main'
//!   Consumed: ':'
//!   Entering <Block>
//!     Consumed: '{'
//!     Consumed: '}'
//!   Exiting <Block> (success)
//! Exiting <Program> (success)
//! ```

use std::fmt;

/// Grammar rules that appear in the trace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rule {
    Program,
    Block,
    Statement,
    DeclStmt,
    AssignStmt,
    CondStmt,
    IterStmt,
    OutputStmt,
    InputStmt,
    BreakStmt,
    Expr,
}

impl Rule {
    pub const fn name(self) -> &'static str {
        match self {
            Rule::Program => "Program",
            Rule::Block => "Block",
            Rule::Statement => "Statement",
            Rule::DeclStmt => "DeclStmt",
            Rule::AssignStmt => "AssignStmt",
            Rule::CondStmt => "CondStmt",
            Rule::IterStmt => "IterStmt",
            Rule::OutputStmt => "OutputStmt",
            Rule::InputStmt => "InputStmt",
            Rule::BreakStmt => "BreakStmt",
            Rule::Expr => "Expr",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single trace entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TraceEvent {
    Enter(Rule),
    Exit { rule: Rule, ok: bool },
    Consumed { text: String, line: u32, column: u32 },
    Error { message: String, line: u32, column: u32 },
    Recovered { skipped: usize },
}

/// Ordered list of trace events.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseTrace {
    events: Vec<TraceEvent>,
    disabled: bool,
}

impl ParseTrace {
    pub fn new() -> Self {
        Self::default()
    }

    /// A trace that records nothing.
    pub fn disabled() -> Self {
        ParseTrace {
            events: Vec::new(),
            disabled: true,
        }
    }

    #[inline]
    fn push(&mut self, event: TraceEvent) {
        if !self.disabled {
            self.events.push(event);
        }
    }

    pub(crate) fn enter(&mut self, rule: Rule) {
        self.push(TraceEvent::Enter(rule));
    }

    pub(crate) fn exit(&mut self, rule: Rule, ok: bool) {
        self.push(TraceEvent::Exit { rule, ok });
    }

    pub(crate) fn consumed(&mut self, text: &str, line: u32, column: u32) {
        self.push(TraceEvent::Consumed {
            text: text.to_string(),
            line,
            column,
        });
    }

    pub(crate) fn error(&mut self, message: &str, line: u32, column: u32) {
        self.push(TraceEvent::Error {
            message: message.to_string(),
            line,
            column,
        });
    }

    pub(crate) fn recovered(&mut self, skipped: usize) {
        self.push(TraceEvent::Recovered { skipped });
    }

    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// How many times `rule` was entered.
    pub fn count_entered(&self, rule: Rule) -> usize {
        self.events
            .iter()
            .filter(|e| **e == TraceEvent::Enter(rule))
            .count()
    }

    /// Rules in the order they were entered.
    pub fn rules_entered(&self) -> impl Iterator<Item = Rule> + '_ {
        self.events.iter().filter_map(|e| match e {
            TraceEvent::Enter(rule) => Some(*rule),
            _ => None,
        })
    }

    /// Text of every consumed token, in order.
    pub fn consumed_texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.events.iter().filter_map(|e| match e {
            TraceEvent::Consumed { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl fmt::Display for ParseTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut depth = 0usize;
        for event in &self.events {
            if let TraceEvent::Exit { .. } = event {
                depth = depth.saturating_sub(1);
            }
            write!(f, "{:width$}", "", width = depth * 2)?;
            match event {
                TraceEvent::Enter(rule) => {
                    writeln!(f, "Entering <{rule}>")?;
                    depth += 1;
                }
                TraceEvent::Exit { rule, ok } => {
                    let status = if *ok { "success" } else { "failure" };
                    writeln!(f, "Exiting <{rule}> ({status})")?;
                }
                TraceEvent::Consumed { text, .. } => writeln!(f, "Consumed: '{text}'")?,
                TraceEvent::Error {
                    message,
                    line,
                    column,
                } => writeln!(f, ">> ERROR at {line}:{column}: {message}")?,
                TraceEvent::Recovered { skipped } => {
                    writeln!(f, ">> PANIC MODE: skipped {skipped} token(s)")?;
                }
            }
        }
        Ok(())
    }
}
