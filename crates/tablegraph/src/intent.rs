//! Mapping free-form questions onto graph queries.
//!
//! A question is classified in three steps:
//!
//! 1. Whole-line commands: quitting and canned small talk.
//! 2. Entity extraction: the first `schema.table`-shaped token. A question
//!    without one is a general question for the language model.
//! 3. An ordered rule table of `(pattern, query kind)`; the first matching
//!    rule wins and anything else is an overview.
//!
//! Both French and English phrasing are recognised. The indirect rule is
//! checked before the direct one because "indirecte" contains "directe".

use crate::domain::QueryKind;
use crate::error::Result;
use regex::Regex;

/// Lines that end the interactive session.
const QUIT_WORDS: &[&str] = &["quitter", "exit", "bye", "quit"];

/// Canned answers for greetings, matched on the whole line.
const SMALL_TALK: &[(&str, &str)] = &[
    (
        "bonjour",
        "Bonjour ! Comment puis-je vous aider avec vos dépendances de données aujourd'hui ?",
    ),
    (
        "comment ça va",
        "Je fonctionne normalement, prêt à analyser vos données !",
    ),
    (
        "hello",
        "Hello! How can I help you with your data dependencies today?",
    ),
    (
        "how are you",
        "Running normally and ready to analyse your data!",
    ),
];

/// Entity names look like `schema.table`.
const ENTITY_PATTERN: &str = r"(?i)([a-z0-9_]+\.[a-z0-9_]+)";

/// Ordered rules; the first match decides the query.
const RULES: &[(&str, QueryKind)] = &[
    (
        concat!(
            r"(?i)(d[ée]pend.*(indirect|tout|\ball\b|transitiv)",
            r"|(indirect|transitiv|\ball)\w*\s+d[ée]pend)",
        ),
        QueryKind::Indirect,
    ),
    (
        r"(?i)(d[ée]pend.*\b(direct|imm[ée]diat)|\b(direct|imm[ée]diat)\w*\s+d[ée]pend)",
        QueryKind::Direct,
    ),
    (
        r"(?i)(qui utilise|d[ée]pendant|dependents?\b|utilisateur|who uses|used by|\busers?\b)",
        QueryKind::Users,
    ),
];

/// What a line of user input asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Nothing was typed.
    Empty,
    /// End the session.
    Quit,
    /// A greeting with its canned reply.
    SmallTalk(&'static str),
    /// A question that names no entity.
    General(String),
    /// A graph query about `name`.
    Query {
        /// Which query to run.
        kind: QueryKind,
        /// The entity name as typed.
        name: String,
    },
}

/// Compiled classification rules.
#[derive(Debug, Clone)]
pub struct IntentClassifier {
    entity: Regex,
    rules: Vec<(Regex, QueryKind)>,
}

impl IntentClassifier {
    /// Compile the built-in rules.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Pattern`](crate::error::Error::Pattern) if a pattern
    /// does not compile.
    pub fn new() -> Result<Self> {
        let rules = RULES
            .iter()
            .map(|(pattern, kind)| -> Result<(Regex, QueryKind)> {
                Ok((Regex::new(pattern)?, *kind))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            entity: Regex::new(ENTITY_PATTERN)?,
            rules,
        })
    }

    /// Classify one line of input.
    pub fn classify(&self, line: &str) -> Intent {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Intent::Empty;
        }

        let lowered = trimmed.to_lowercase();
        if QUIT_WORDS.contains(&lowered.as_str()) {
            return Intent::Quit;
        }
        if let Some((_, reply)) = SMALL_TALK.iter().find(|(greeting, _)| *greeting == lowered) {
            return Intent::SmallTalk(*reply);
        }

        let Some(entity) = self.entity.captures(trimmed).and_then(|c| c.get(1)) else {
            return Intent::General(trimmed.to_string());
        };

        // Rules only see the wording around the entity, so a name such as
        // `app.users` does not pick the query by itself.
        let mut wording = trimmed.to_string();
        wording.replace_range(entity.range(), " ");

        let kind = self
            .rules
            .iter()
            .find(|(pattern, _)| pattern.is_match(&wording))
            .map_or(QueryKind::Overview, |(_, kind)| *kind);

        tracing::debug!(%kind, name = entity.as_str(), "Classified question");

        Intent::Query {
            kind,
            name: entity.as_str().to_string(),
        }
    }
}
