//! Scripted collaborators shared by the integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;

use site_encounter::combat::{CombatBoundary, CombatRequest};
use site_encounter::core::{PixelPoint, RandomSource};
use site_encounter::hero::Crystal;
use site_encounter::sites::VisualFeedback;

/// Replays fixed draws. Falls back to 0 when a queue runs dry.
#[derive(Default)]
pub struct ScriptedRandom {
    floats: VecDeque<f64>,
    indices: VecDeque<usize>,
}

impl ScriptedRandom {
    pub fn floats(values: &[f64]) -> Self {
        Self {
            floats: values.iter().copied().collect(),
            indices: VecDeque::new(),
        }
    }

    pub fn indices(values: &[usize]) -> Self {
        Self {
            floats: VecDeque::new(),
            indices: values.iter().copied().collect(),
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn next_f64(&mut self) -> f64 {
        self.floats.pop_front().unwrap_or(0.0)
    }

    fn below(&mut self, upper: usize) -> usize {
        let value = self.indices.pop_front().unwrap_or(0);
        value % upper.max(1)
    }
}

/// Combat boundary that records every request.
#[derive(Default)]
pub struct RecordingCombat {
    pub requests: Vec<CombatRequest>,
}

impl CombatBoundary for RecordingCombat {
    fn initiate_combat(&mut self, request: CombatRequest) {
        self.requests.push(request);
    }
}

/// Visual feedback sink that records every cue.
#[derive(Default)]
pub struct RecordingFeedback {
    pub cues: Vec<(PixelPoint, Crystal)>,
}

impl VisualFeedback for RecordingFeedback {
    fn buff_effect(&mut self, at: PixelPoint, color: Crystal) {
        self.cues.push((at, color));
    }
}
