//! Claimsight Dashboard
//!
//! A single-screen claims-analytics dashboard driven by an in-memory
//! data snapshot. This crate owns the presentational layer: the
//! snapshot model, the ring and bar progress renderers, card
//! composition with staggered entrances, and the theme palette. The
//! temporal machinery lives in `claimsight_animation`; the rendering
//! surface itself is an external collaborator that samples the
//! animated state exposed here each frame.

pub mod bar;
pub mod cards;
pub mod dashboard;
pub mod error;
pub mod ring;
pub mod snapshot;
pub mod theme;

pub use bar::{BarProgress, BarSpec, FILL_DURATION_MS};
pub use cards::{Card, Row, RowContent};
pub use dashboard::{Dashboard, CARD_COUNT};
pub use error::{DashboardError, Result};
pub use ring::{RingProgress, RingSpec, SWEEP_DURATION_MS};
pub use snapshot::{
    Assessments, Calendar, ClaimCounts, DashboardSnapshot, Deadlines, FilesStatus,
    InsuranceDeadlines, Settlements,
};
