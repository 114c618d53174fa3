//! Dashboard composition
//!
//! Builds the six cards from a data snapshot, wires every animated
//! primitive to the scheduler, and assigns staggered entrance delays
//! so the screen cascades in rather than appearing at once. All
//! animation state is owned here; the snapshot itself is never
//! mutated. `tick` is the single host-loop entry point.

use claimsight_animation::{
    AnimatedCount, AnimationScheduler, Choreographer, ParticleField, ParticleFieldConfig,
};

use crate::bar::{BarProgress, BarSpec};
use crate::cards::{Card, RowContent};
use crate::ring::{RingProgress, RingSpec};
use crate::snapshot::DashboardSnapshot;
use crate::theme;

/// Number of top-level cards
pub const CARD_COUNT: usize = 6;

/// The mounted dashboard
pub struct Dashboard {
    scheduler: AnimationScheduler,
    snapshot: DashboardSnapshot,
    cards: Vec<Card>,
    active_total: AnimatedCount,
    closed_total: AnimatedCount,
    settlements_ring: RingProgress,
    deadline_bars: Vec<BarProgress>,
    deadline_rings: Vec<RingProgress>,
    assessments_ring: RingProgress,
    particles: ParticleField,
}

impl Dashboard {
    /// Mount the dashboard from a snapshot
    ///
    /// `rng` seeds the particle field only; pass a seeded
    /// `fastrand::Rng` for deterministic fields under test.
    pub fn mount(snapshot: DashboardSnapshot, rng: &mut fastrand::Rng) -> Self {
        let scheduler = AnimationScheduler::new();
        let handle = scheduler.handle();
        let choreographer = Choreographer::new();

        // -- Card 0: files status -------------------------------------------
        let mut files = Card::new("Files status", choreographer.card_entrance(0, CARD_COUNT));
        let active = &snapshot.files_status.active;
        let closed = &snapshot.files_status.closed;
        let active_rows = [
            ("Accident benefit", active.accident_benefit_claim),
            ("Bodily injury claim", active.bodily_injury_claim),
            ("Property damage claim", active.property_damage_claim),
        ];
        for (i, (label, value)) in active_rows.iter().enumerate() {
            files.push_row(
                RowContent::Stat {
                    label: label.to_string(),
                    value: *value,
                },
                choreographer.row_entrance(0, i, active_rows.len()),
            );
        }
        // The closed block cascades in after the active block
        let closed_rows = [
            ("Accident benefit", closed.accident_benefit_claim),
            ("Bodily injury claim", closed.bodily_injury_claim),
            ("Property damage claim", closed.property_damage_claim),
        ];
        for (i, (label, value)) in closed_rows.iter().enumerate() {
            files.push_row(
                RowContent::Stat {
                    label: label.to_string(),
                    value: *value,
                },
                choreographer.row_entrance(300, i, closed_rows.len()),
            );
        }
        let active_total = AnimatedCount::new(handle.clone(), active.total);
        let closed_total = AnimatedCount::new(handle.clone(), closed.total);

        // -- Card 1: settlements --------------------------------------------
        let settlements_delay = choreographer.card_delay(1, CARD_COUNT);
        let mut settlements = Card::new(
            "Settlements",
            choreographer.card_entrance(1, CARD_COUNT),
        );
        let settlement_rows = [
            ("accident benefit", snapshot.settlements.accident_benefit_claim),
            ("bodily injury claim", snapshot.settlements.bodily_injury_claim),
        ];
        for (i, (label, value)) in settlement_rows.iter().enumerate() {
            settlements.push_row(
                RowContent::Stat {
                    label: label.to_string(),
                    value: *value,
                },
                choreographer.row_entrance(settlements_delay, i, settlement_rows.len()),
            );
        }
        let (cyan, pink) = (
            theme::color(theme::ColorToken::Cyan),
            theme::color(theme::ColorToken::Pink),
        );
        let settlements_ring = RingProgress::mount(
            &handle,
            RingSpec::new(100.0, snapshot.settlements.total_settled_files, 90.0, 10.0)
                .with_colors(cyan, pink),
        );

        // -- Card 2: deadlines ----------------------------------------------
        let deadlines = Card::new("Deadlines", choreographer.card_entrance(2, CARD_COUNT));
        let deadline_bars = snapshot
            .deadlines
            .general
            .iter()
            .enumerate()
            .map(|(i, _category)| {
                let width = theme::DEADLINE_BAR_WIDTHS[i % theme::DEADLINE_BAR_WIDTHS.len()];
                let (from, to) = theme::deadline_bar_gradient(i);
                BarProgress::mount(
                    &handle,
                    BarSpec::new(width, from, to).with_delay(i as f32 * 100.0),
                )
            })
            .collect();
        let insurance = &snapshot.deadlines.insurance;
        let ring_values = [
            insurance.insurance_examinations,
            snapshot.assessments.upcoming_assessments,
            insurance.inform_to_ab_insurance,
        ];
        let deadline_rings = ring_values
            .iter()
            .enumerate()
            .map(|(i, &value)| {
                let (from, to) = theme::deadline_ring_gradient(i);
                RingProgress::mount(
                    &handle,
                    RingSpec::new(value as f32, value, 50.0, 5.0).with_colors(from, to),
                )
            })
            .collect();

        // -- Card 3: pending documents --------------------------------------
        let pending_delay = choreographer.card_delay(3, CARD_COUNT);
        let mut pending = Card::new(
            "Pending documents",
            choreographer.card_entrance(3, CARD_COUNT),
        );
        let total_docs = snapshot.pending_documents.len();
        for (i, doc) in snapshot.pending_documents.iter().enumerate() {
            pending.push_row(
                RowContent::Text(doc.clone()),
                choreographer.row_entrance(pending_delay, i, total_docs),
            );
        }

        // -- Card 4: assessments --------------------------------------------
        let assessments_delay = choreographer.card_delay(4, CARD_COUNT);
        let mut assessments = Card::new(
            "Assessments",
            choreographer.card_entrance(4, CARD_COUNT),
        );
        assessments.push_row(
            RowContent::Text(snapshot.assessments.inform_to_client.clone()),
            choreographer.row_entrance(assessments_delay, 0, 3),
        );
        for (i, line) in snapshot.assessments.additional_text.lines().enumerate() {
            assessments.push_row(
                RowContent::Text(line.to_string()),
                choreographer.row_entrance(assessments_delay, i + 1, 3),
            );
        }
        let (violet, assess_cyan) = (
            theme::color(theme::ColorToken::Violet),
            theme::color(theme::ColorToken::Cyan),
        );
        let assessments_ring = RingProgress::mount(
            &handle,
            RingSpec::new(
                snapshot.assessments.upcoming_assessments as f32,
                snapshot.assessments.upcoming_assessments,
                90.0,
                10.0,
            )
            .with_colors(violet, assess_cyan),
        );

        // -- Card 5: calendar -----------------------------------------------
        let calendar_delay = choreographer.card_delay(5, CARD_COUNT);
        let mut calendar = Card::new("Calendar", choreographer.card_entrance(5, CARD_COUNT));
        calendar.push_row(
            RowContent::Text(snapshot.calendar.selected_date.clone()),
            choreographer.row_entrance(calendar_delay, 0, 2),
        );
        calendar.push_row(
            RowContent::Text(snapshot.calendar.note.clone()),
            choreographer.row_entrance(calendar_delay, 1, 2),
        );

        let particles = ParticleField::generate(ParticleFieldConfig::default(), rng);

        Self {
            scheduler,
            snapshot,
            cards: vec![
                files,
                settlements,
                deadlines,
                pending,
                assessments,
                calendar,
            ],
            active_total,
            closed_total,
            settlements_ring,
            deadline_bars,
            deadline_rings,
            assessments_ring,
            particles,
        }
    }

    /// Advance every animation by elapsed wall-clock time
    ///
    /// Returns true while any one-shot animation (counters, sweeps,
    /// fills, entrances) is still in flight. The particle field loops
    /// forever and is excluded from settling.
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        let scheduler_active = self.scheduler.tick(dt_ms);
        for card in &mut self.cards {
            card.tick(dt_ms);
        }
        self.particles.tick(dt_ms);

        scheduler_active || !self.cards.iter().all(|c| c.is_entered())
    }

    /// Whether every one-shot animation has settled
    pub fn is_settled(&self) -> bool {
        !self.scheduler.has_active_animations() && self.cards.iter().all(|c| c.is_entered())
    }

    pub fn snapshot(&self) -> &DashboardSnapshot {
        &self.snapshot
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Current value of the big active-files counter
    pub fn active_total(&self) -> u64 {
        self.active_total.get()
    }

    /// Current value of the closed-files counter
    pub fn closed_total(&self) -> u64 {
        self.closed_total.get()
    }

    pub fn settlements_ring(&self) -> &RingProgress {
        &self.settlements_ring
    }

    pub fn deadline_bars(&self) -> &[BarProgress] {
        &self.deadline_bars
    }

    pub fn deadline_rings(&self) -> &[RingProgress] {
        &self.deadline_rings
    }

    pub fn assessments_ring(&self) -> &RingProgress {
        &self.assessments_ring
    }

    pub fn particles(&self) -> &ParticleField {
        &self.particles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DashboardSnapshot {
        DashboardSnapshot::from_json(include_str!("../data/snapshot.json")).unwrap()
    }

    fn mounted() -> Dashboard {
        let mut rng = fastrand::Rng::with_seed(17);
        Dashboard::mount(sample(), &mut rng)
    }

    #[test]
    fn test_six_cards_with_increasing_delays() {
        let dashboard = mounted();
        assert_eq!(dashboard.cards().len(), CARD_COUNT);

        let delays: Vec<u32> = dashboard
            .cards()
            .iter()
            .map(|c| c.entrance().spec().delay_ms)
            .collect();
        assert_eq!(delays, vec![0, 100, 200, 300, 400, 500]);
    }

    #[test]
    fn test_counters_settle_on_snapshot_totals() {
        let mut dashboard = mounted();
        for _ in 0..80 {
            dashboard.tick(50.0);
        }
        assert!(dashboard.is_settled());
        assert_eq!(dashboard.active_total(), 256);
        assert_eq!(dashboard.closed_total(), 180);
        assert_eq!(dashboard.settlements_ring().label_value(), 145);
    }

    #[test]
    fn test_all_gradient_ids_unique() {
        let dashboard = mounted();
        let mut ids = vec![dashboard.settlements_ring().gradient_id()];
        ids.push(dashboard.assessments_ring().gradient_id());
        ids.extend(dashboard.deadline_rings().iter().map(|r| r.gradient_id()));

        for (i, a) in ids.iter().enumerate() {
            for b in &ids[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_bars_cascade() {
        let dashboard = mounted();
        let delays: Vec<f32> = dashboard
            .deadline_bars()
            .iter()
            .map(|b| b.spec().delay_ms)
            .collect();
        for pair in delays.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_particles_survive_ticks_unchanged() {
        let mut dashboard = mounted();
        let before: Vec<_> = dashboard.particles().particles().to_vec();
        for _ in 0..10 {
            dashboard.tick(50.0);
        }
        assert_eq!(dashboard.particles().particles(), before.as_slice());
        assert_eq!(dashboard.particles().len(), 25);
    }
}
