//! Contract with the external combat engine.
//!
//! Site handlers start a fight through [`CombatBoundary::initiate_combat`]
//! and never see its result. When the fight is over, the combat engine
//! reports a [`CombatOutcome`] to the site board, which owns the conquest
//! transition.

use serde::{Deserialize, Serialize};

use super::enemy::EnemyArchetype;
use crate::sites::SiteId;

/// A fight requested by a site handler.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatRequest {
    /// Site being attacked.
    pub site: SiteId,
    pub enemy: EnemyArchetype,
}

/// How a fight ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombatResult {
    Victory,
    Defeat,
    Retreat,
}

/// Event emitted by the combat engine once a fight is resolved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatOutcome {
    pub site: SiteId,
    pub enemy: EnemyArchetype,
    pub result: CombatResult,
}

impl CombatOutcome {
    #[must_use]
    pub fn victory(request: CombatRequest) -> Self {
        Self {
            site: request.site,
            enemy: request.enemy,
            result: CombatResult::Victory,
        }
    }

    #[must_use]
    pub fn defeat(request: CombatRequest) -> Self {
        Self {
            site: request.site,
            enemy: request.enemy,
            result: CombatResult::Defeat,
        }
    }

    #[must_use]
    pub fn is_victory(&self) -> bool {
        self.result == CombatResult::Victory
    }
}

/// The external combat engine.
///
/// Fire-and-trust: the call returns immediately and the outcome arrives
/// later as a [`CombatOutcome`].
pub trait CombatBoundary {
    fn initiate_combat(&mut self, request: CombatRequest);
}

/// Combat boundary that queues requests for the host to pick up.
#[derive(Clone, Debug, Default)]
pub struct PendingCombats {
    queue: Vec<CombatRequest>,
}

impl PendingCombats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    #[must_use]
    pub fn peek(&self) -> Option<&CombatRequest> {
        self.queue.first()
    }

    /// Take all queued requests, oldest first.
    pub fn drain(&mut self) -> impl Iterator<Item = CombatRequest> + '_ {
        self.queue.drain(..)
    }
}

impl CombatBoundary for PendingCombats {
    fn initiate_combat(&mut self, request: CombatRequest) {
        tracing::debug!(
            site = %request.site,
            enemy = %request.enemy.name,
            "combat.request.queued"
        );
        self.queue.push(request);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_combats_queue_in_order() {
        let mut pending = PendingCombats::new();
        pending.initiate_combat(CombatRequest {
            site: SiteId::new(1),
            enemy: EnemyArchetype::mine_overseer(),
        });
        pending.initiate_combat(CombatRequest {
            site: SiteId::new(2),
            enemy: EnemyArchetype::crystal_guardian(),
        });

        assert_eq!(pending.len(), 2);
        assert_eq!(pending.peek().map(|r| r.site), Some(SiteId::new(1)));

        let drained: Vec<_> = pending.drain().map(|r| r.site).collect();
        assert_eq!(drained, vec![SiteId::new(1), SiteId::new(2)]);
        assert!(pending.is_empty());
    }

    #[test]
    fn test_outcome_constructors() {
        let request = CombatRequest {
            site: SiteId::new(3),
            enemy: EnemyArchetype::crystal_guardian(),
        };
        assert!(CombatOutcome::victory(request.clone()).is_victory());

        let lost = CombatOutcome::defeat(request);
        assert!(!lost.is_victory());
        assert_eq!(lost.result, CombatResult::Defeat);
    }
}
