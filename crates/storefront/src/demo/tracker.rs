//! Simulated order tracking.

use rand::Rng;
use resto_core::TrackingStatus;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackError {
    #[error("Please enter a valid order ID")]
    EmptyOrderId,
}

/// Display state of one step in the progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepState {
    Completed,
    Active,
    Pending,
}

/// What the tracker shows for an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackingSnapshot {
    pub order_id: String,
    pub status: TrackingStatus,
    /// One entry per [`TrackingStatus::ALL`] step.
    pub steps: Vec<(TrackingStatus, StepState)>,
    pub estimate: &'static str,
}

impl TrackingSnapshot {
    /// Progress bar for `status`: every step up to it is completed and the
    /// next one is active.
    #[must_use]
    pub fn at(order_id: impl Into<String>, status: TrackingStatus) -> Self {
        let current = status.index();
        let steps = TrackingStatus::ALL
            .iter()
            .map(|step| {
                let state = if step.index() <= current {
                    StepState::Completed
                } else if step.index() == current + 1 {
                    StepState::Active
                } else {
                    StepState::Pending
                };
                (*step, state)
            })
            .collect();
        Self {
            order_id: order_id.into(),
            status,
            steps,
            estimate: status.estimate(),
        }
    }
}

/// Look up an order's progress. The status is made up.
///
/// # Errors
///
/// [`TrackError::EmptyOrderId`] if the order ID is blank.
pub fn track_order(order_id: &str) -> Result<TrackingSnapshot, TrackError> {
    let order_id = order_id.trim();
    if order_id.is_empty() {
        return Err(TrackError::EmptyOrderId);
    }
    let index = rand::rng().random_range(0..TrackingStatus::ALL.len());
    let status = TrackingStatus::ALL
        .get(index)
        .copied()
        .unwrap_or(TrackingStatus::Confirmed);
    tracing::debug!(order_id, %status, "Simulated tracking status");
    Ok(TrackingSnapshot::at(order_id, status))
}
