//! Card and row composition
//!
//! Headless containers for the dashboard's sections. A card owns its
//! entrance transition and an ordered list of rows, each with its own
//! entrance; content is either a labeled statistic or plain text.

use claimsight_animation::{Entrance, EntrancePhase, EntranceSpec};

/// Content of a single list row
#[derive(Clone, Debug, PartialEq)]
pub enum RowContent {
    /// A labeled numeric statistic
    Stat { label: String, value: u64 },
    /// A plain text line
    Text(String),
}

/// A list row with its entrance transition
pub struct Row {
    content: RowContent,
    entrance: Entrance,
}

impl Row {
    pub fn new(content: RowContent, spec: EntranceSpec) -> Self {
        Self {
            content,
            entrance: Entrance::new(spec),
        }
    }

    pub fn content(&self) -> &RowContent {
        &self.content
    }

    pub fn entrance(&self) -> &Entrance {
        &self.entrance
    }

    fn tick(&mut self, dt_ms: f32) {
        self.entrance.tick(dt_ms);
    }
}

/// A top-level dashboard card
pub struct Card {
    title: String,
    entrance: Entrance,
    rows: Vec<Row>,
}

impl Card {
    pub fn new(title: impl Into<String>, spec: EntranceSpec) -> Self {
        Self {
            title: title.into(),
            entrance: Entrance::new(spec),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, content: RowContent, spec: EntranceSpec) {
        self.rows.push(Row::new(content, spec));
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn entrance(&self) -> &Entrance {
        &self.entrance
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Advance the card's and its rows' entrances
    pub fn tick(&mut self, dt_ms: f32) {
        self.entrance.tick(dt_ms);
        for row in &mut self.rows {
            row.tick(dt_ms);
        }
    }

    /// Whether the card and every row have finished entering
    pub fn is_entered(&self) -> bool {
        self.entrance.phase() == EntrancePhase::Entered
            && self
                .rows
                .iter()
                .all(|row| row.entrance.phase() == EntrancePhase::Entered)
    }
}
