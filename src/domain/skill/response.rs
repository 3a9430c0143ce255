//! Outgoing response builder.
//!
//! Handlers receive a `SkillResponse` by value, enrich it step by step and
//! hand it back. The HTTP adapter turns the final value into the platform's
//! response envelope.

use std::collections::HashMap;

use serde_json::Value;

use super::card::Card;
use super::display::DisplayDirective;

/// Response under construction for a single turn.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillResponse {
    speech: Vec<String>,
    card: Option<Card>,
    directives: Vec<DisplayDirective>,
    session_attributes: HashMap<String, Value>,
    should_end_session: bool,
}

impl Default for SkillResponse {
    fn default() -> Self {
        Self::new()
    }
}

impl SkillResponse {
    /// Creates an empty response that ends the session.
    pub fn new() -> Self {
        Self {
            speech: Vec::new(),
            card: None,
            directives: Vec::new(),
            session_attributes: HashMap::new(),
            should_end_session: true,
        }
    }

    /// Appends text to the spoken output.
    pub fn say(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        if !text.is_empty() {
            self.speech.push(text);
        }
        self
    }

    /// Attaches a card shown in the companion app.
    pub fn card(mut self, card: Card) -> Self {
        self.card = Some(card);
        self
    }

    /// Adds a display directive.
    pub fn directive(mut self, directive: DisplayDirective) -> Self {
        self.directives.push(directive);
        self
    }

    /// Sets a session attribute for the next turn.
    pub fn session(mut self, key: impl Into<String>, value: Value) -> Self {
        self.session_attributes.insert(key.into(), value);
        self
    }

    pub fn should_end_session(mut self, end: bool) -> Self {
        self.should_end_session = end;
        self
    }

    /// Spoken text, segments joined by a single space.
    pub fn speech_text(&self) -> String {
        self.speech.join(" ")
    }

    /// Spoken text wrapped in SSML with XML special characters escaped.
    pub fn ssml(&self) -> String {
        format!("<speak>{}</speak>", escape_xml(&self.speech_text()))
    }

    pub fn card_ref(&self) -> Option<&Card> {
        self.card.as_ref()
    }

    pub fn directives(&self) -> &[DisplayDirective] {
        &self.directives
    }

    pub fn session_attributes(&self) -> &HashMap<String, Value> {
        &self.session_attributes
    }

    pub fn ends_session(&self) -> bool {
        self.should_end_session
    }
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
