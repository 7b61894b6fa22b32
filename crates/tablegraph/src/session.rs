//! Interactive question loop.
//!
//! A [`Session`] reads one question per line, classifies it and answers from
//! the graph. Input and output are generic so the same loop drives the
//! terminal and the tests.

use crate::domain::QueryKind;
use crate::error::Result;
use crate::explain::{self, Explainer};
use crate::graph::DependencyGraph;
use crate::intent::{Intent, IntentClassifier};
use crate::output::{self, OutputConfig, OutputMode};
use std::io::{BufRead, Write};
use tablegraph_csv::Encoding;

const RULE: &str = "============================================================";
const PROMPT: &str = "Your question (or 'quit'): ";
const GOODBYE: &str = "Goodbye!";
const NO_ANSWER: &str = "Sorry, no answer available.";

/// Question loop over a built graph.
pub struct Session<'a> {
    graph: &'a DependencyGraph,
    classifier: IntentClassifier,
    explainer: Option<&'a dyn Explainer>,
    output: OutputConfig,
    mode: OutputMode,
}

impl<'a> Session<'a> {
    /// Create a session; `explainer` is `None` when explanations are off.
    ///
    /// # Errors
    ///
    /// Returns an error if the question patterns fail to compile.
    pub fn new(
        graph: &'a DependencyGraph,
        explainer: Option<&'a dyn Explainer>,
        output: OutputConfig,
        mode: OutputMode,
    ) -> Result<Self> {
        Ok(Self {
            graph,
            classifier: IntentClassifier::new()?,
            explainer,
            output,
            mode,
        })
    }

    /// Answer questions from `input` until a quit word or end of input.
    ///
    /// Lines that are not valid UTF-8 are read as Latin-1. In JSON mode only
    /// query results are written, one JSON document per answered query.
    pub async fn run<R: BufRead, W: Write>(&self, mut input: R, w: &mut W) -> Result<()> {
        if self.mode == OutputMode::Text {
            writeln!(w, "{RULE}")?;
            writeln!(w, "DEPENDENCY ANALYSIS")?;
            writeln!(
                w,
                "{} names, {} dependencies loaded",
                self.graph.node_count(),
                self.graph.edge_count()
            )?;
            writeln!(w, "{RULE}")?;
        }

        let mut buf = Vec::new();
        loop {
            if self.mode == OutputMode::Text {
                write!(w, "\n{PROMPT}")?;
                w.flush()?;
            }

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                if self.mode == OutputMode::Text {
                    writeln!(w)?;
                    writeln!(w, "{GOODBYE}")?;
                }
                break;
            }

            let line = decode_line(&buf);
            if !self.ask(&line, w).await? {
                break;
            }
        }

        tracing::debug!("Session ended");
        Ok(())
    }

    /// Answer a single line of input.
    ///
    /// Returns `false` when the line asks to end the session. JSON mode
    /// answers graph queries only; other lines produce no output.
    pub async fn ask<W: Write>(&self, line: &str, w: &mut W) -> Result<bool> {
        let intent = self.classifier.classify(line);
        if self.mode == OutputMode::Json {
            match intent {
                Intent::Quit => return Ok(false),
                Intent::Query { kind, name } => self.answer(kind, &name, w).await?,
                Intent::Empty | Intent::SmallTalk(_) | Intent::General(_) => {}
            }
            return Ok(true);
        }

        match intent {
            Intent::Empty => {}
            Intent::Quit => {
                writeln!(w, "{GOODBYE}")?;
                return Ok(false);
            }
            Intent::SmallTalk(reply) => {
                writeln!(w)?;
                writeln!(w, "{reply}")?;
            }
            Intent::General(question) => self.answer_general(&question, w).await?,
            Intent::Query { kind, name } => self.answer(kind, &name, w).await?,
        }
        Ok(true)
    }

    /// Run one graph query and write its result, followed by an explanation
    /// when one is available.
    ///
    /// JSON mode writes only the serialized result.
    pub async fn answer<W: Write>(&self, kind: QueryKind, name: &str, w: &mut W) -> Result<()> {
        let display = self.graph.display_name(name);

        let prompt = match kind {
            QueryKind::Overview => {
                let lookup = self.graph.overview(name);
                match self.mode {
                    OutputMode::Json => output::write_json(w, &lookup)?,
                    OutputMode::Text => output::write_overview_lookup(w, &lookup, &self.output)?,
                }
                lookup.found().and_then(explain::overview_prompt)
            }
            QueryKind::Direct | QueryKind::Indirect | QueryKind::Users => {
                let lookup = match kind {
                    QueryKind::Direct => self.graph.direct_dependencies(name),
                    QueryKind::Indirect => self.graph.indirect_dependencies(name),
                    _ => self.graph.users(name),
                };
                match self.mode {
                    OutputMode::Json => output::write_json(w, &lookup)?,
                    OutputMode::Text => {
                        output::write_list_lookup(w, kind, &display, &lookup, &self.output)?;
                    }
                }
                lookup.found().and_then(|items| match kind {
                    QueryKind::Direct => explain::direct_prompt(&display, items),
                    QueryKind::Indirect => explain::indirect_prompt(&display, items),
                    _ => explain::users_prompt(&display, items),
                })
            }
        };

        if self.mode == OutputMode::Json {
            return Ok(());
        }
        if let (Some(prompt), Some(explainer)) = (prompt, self.explainer) {
            match explainer.explain(&prompt).await {
                Ok(text) => output::write_explanation(w, &text, &self.output)?,
                Err(e) => tracing::warn!(error = %e, "Explanation unavailable"),
            }
        }
        Ok(())
    }

    async fn answer_general<W: Write>(&self, question: &str, w: &mut W) -> Result<()> {
        writeln!(w)?;
        let Some(explainer) = self.explainer else {
            writeln!(w, "{NO_ANSWER}")?;
            return Ok(());
        };

        match explainer.explain(question).await {
            Ok(text) => output::write_explanation(w, &text, &self.output)?,
            Err(e) => {
                tracing::warn!(error = %e, "General question failed");
                writeln!(w, "{NO_ANSWER}")?;
            }
        }
        Ok(())
    }
}

/// Console input is usually UTF-8, but Windows consoles may send cp1252.
fn decode_line(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => Encoding::Latin1.decode(bytes).into_owned(),
    }
}
