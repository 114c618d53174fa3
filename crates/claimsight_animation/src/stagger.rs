//! Entrance choreography
//!
//! Assigns per-item delay offsets so sibling elements enter in a
//! staggered cascade instead of simultaneously, and models the
//! entrance transition itself (fade + slide to rest). Scheduling is
//! the whole job here: an item is either pending or entered, nothing
//! more.

use claimsight_core::Point;

use crate::easing::Easing;

/// Direction for stagger animations
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StaggerDirection {
    /// Animate first to last
    #[default]
    Forward,
    /// Animate last to first
    Reverse,
    /// Animate from center outward
    FromCenter,
}

/// Configuration for stagger animations
#[derive(Clone, Copy, Debug)]
pub struct StaggerConfig {
    /// Delay between each sibling's entrance start (ms)
    pub delay_ms: u32,
    /// Direction of the cascade
    pub direction: StaggerDirection,
    /// Optional: cap the effective index so late items share a delay
    pub limit: Option<usize>,
}

impl StaggerConfig {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            direction: StaggerDirection::Forward,
            limit: None,
        }
    }

    /// Stagger from last to first
    pub fn reverse(mut self) -> Self {
        self.direction = StaggerDirection::Reverse;
        self
    }

    /// Stagger from center outward
    pub fn from_center(mut self) -> Self {
        self.direction = StaggerDirection::FromCenter;
        self
    }

    /// Limit stagger to the first N items
    pub fn limit(mut self, n: usize) -> Self {
        self.limit = Some(n);
        self
    }

    /// Calculate the delay for a specific sibling index
    pub fn delay_for_index(&self, index: usize, total: usize) -> u32 {
        let effective_index = match self.direction {
            StaggerDirection::Forward => index,
            StaggerDirection::Reverse => total.saturating_sub(1).saturating_sub(index),
            StaggerDirection::FromCenter => {
                let center = total / 2;
                if index <= center {
                    center - index
                } else {
                    index - center
                }
            }
        };

        let capped_index = match self.limit {
            Some(limit) => effective_index.min(limit),
            None => effective_index,
        };

        self.delay_ms * capped_index as u32
    }
}

/// Parameters of a single entrance transition
#[derive(Clone, Copy, Debug)]
pub struct EntranceSpec {
    /// Delay before the entrance starts (ms)
    pub delay_ms: u32,
    /// Initial positional offset animated to rest
    pub offset: Point,
    /// Opacity once entered
    pub final_opacity: f32,
    /// Transition duration (ms)
    pub duration_ms: f32,
}

impl EntranceSpec {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            offset: Point::new(0.0, 20.0),
            final_opacity: 1.0,
            duration_ms: 500.0,
        }
    }

    pub fn with_offset(mut self, offset: Point) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_final_opacity(mut self, opacity: f32) -> Self {
        if !(0.0..=1.0).contains(&opacity) {
            tracing::warn!(opacity, "entrance opacity outside 0..=1, clamping");
        }
        self.final_opacity = opacity.clamp(0.0, 1.0);
        self
    }

    pub fn with_duration(mut self, duration_ms: f32) -> Self {
        self.duration_ms = duration_ms.max(f32::EPSILON);
        self
    }
}

/// Lifecycle state of an entering element
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntrancePhase {
    /// Not yet (fully) entered
    Pending,
    /// Transition complete, element at rest
    Entered,
}

/// A running entrance transition
///
/// Fades opacity 0 to `final_opacity` and slides `offset` to rest over
/// the configured duration, eased, after the configured delay.
#[derive(Clone, Debug)]
pub struct Entrance {
    spec: EntranceSpec,
    elapsed_ms: f32,
}

impl Entrance {
    pub fn new(spec: EntranceSpec) -> Self {
        Self {
            spec,
            elapsed_ms: 0.0,
        }
    }

    pub fn spec(&self) -> &EntranceSpec {
        &self.spec
    }

    /// Advance by elapsed wall-clock time
    pub fn tick(&mut self, dt_ms: f32) {
        self.elapsed_ms += dt_ms;
    }

    /// Eased progress through the transition (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        let active = self.elapsed_ms - self.spec.delay_ms as f32;
        if active <= 0.0 {
            return 0.0;
        }
        Easing::EaseOut.apply(active / self.spec.duration_ms)
    }

    pub fn opacity(&self) -> f32 {
        self.spec.final_opacity * self.progress()
    }

    /// Current positional offset, shrinking to zero at rest
    pub fn offset(&self) -> Point {
        let remaining = 1.0 - self.progress();
        Point::new(self.spec.offset.x * remaining, self.spec.offset.y * remaining)
    }

    pub fn phase(&self) -> EntrancePhase {
        if self.progress() >= 1.0 {
            EntrancePhase::Entered
        } else {
            EntrancePhase::Pending
        }
    }
}

/// Assigns entrance delays across the dashboard
///
/// Top-level cards cascade at 100ms intervals in render order; rows
/// within a card cascade at 100ms intervals after their parent card
/// begins its own entrance.
#[derive(Clone, Copy, Debug)]
pub struct Choreographer {
    cards: StaggerConfig,
    rows: StaggerConfig,
}

impl Choreographer {
    pub fn new() -> Self {
        Self {
            cards: StaggerConfig::new(100),
            rows: StaggerConfig::new(100),
        }
    }

    /// Entrance delay for the card at `index`
    pub fn card_delay(&self, index: usize, total: usize) -> u32 {
        self.cards.delay_for_index(index, total)
    }

    /// Entrance delay for a row, relative to its parent card's start
    pub fn row_delay(&self, index: usize, total: usize) -> u32 {
        self.rows.delay_for_index(index, total)
    }

    /// Entrance spec for a top-level card: fade in, slide up 20px
    pub fn card_entrance(&self, index: usize, total: usize) -> EntranceSpec {
        EntranceSpec::new(self.card_delay(index, total))
    }

    /// Entrance spec for a list row: fade in, slide right from -20px
    pub fn row_entrance(&self, card_delay_ms: u32, index: usize, total: usize) -> EntranceSpec {
        EntranceSpec::new(card_delay_ms + self.row_delay(index, total))
            .with_offset(Point::new(-20.0, 0.0))
    }
}

impl Default for Choreographer {
    fn default() -> Self {
        Self::new()
    }
}
