// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{HabitId, HabitState};

/// Largest gap since the previous completion that still continues a streak.
pub const STREAK_SLACK_HOURS: i64 = 36;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HabitTransition {
    /// Already marked today; nothing changed.
    AlreadyDone,
    Extended(u32),
    /// First completion, or the previous streak lapsed.
    Restarted,
}

/// Streak state for the fixed habit set. Every known habit always has an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<String, HabitState>",
    into = "BTreeMap<String, HabitState>"
)]
pub struct Habits {
    states: BTreeMap<HabitId, HabitState>,
}

impl Default for Habits {
    fn default() -> Self {
        Self {
            states: HabitId::ALL
                .into_iter()
                .map(|id| (id, HabitState::default()))
                .collect(),
        }
    }
}

impl From<BTreeMap<String, HabitState>> for Habits {
    fn from(doc: BTreeMap<String, HabitState>) -> Self {
        let mut habits = Habits::default();
        for (key, state) in doc {
            if let Ok(id) = key.parse::<HabitId>() {
                habits.states.insert(id, state);
            }
        }
        habits
    }
}

impl From<Habits> for BTreeMap<String, HabitState> {
    fn from(habits: Habits) -> Self {
        habits
            .states
            .into_iter()
            .map(|(id, state)| (id.as_str().to_string(), state))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HabitView {
    pub id: HabitId,
    pub label: &'static str,
    pub streak: u32,
    pub done_today: bool,
}

impl Habits {
    pub fn get(&self, id: HabitId) -> HabitState {
        self.states.get(&id).copied().unwrap_or_default()
    }

    pub fn mark_done(&mut self, id: HabitId, today: NaiveDate) -> HabitTransition {
        let state = self.states.entry(id).or_default();
        let transition = match state.last_done {
            Some(last) if last == today => return HabitTransition::AlreadyDone,
            Some(last) if today.signed_duration_since(last).num_hours() <= STREAK_SLACK_HOURS => {
                state.streak += 1;
                HabitTransition::Extended(state.streak)
            }
            _ => {
                state.streak = 1;
                HabitTransition::Restarted
            }
        };
        state.last_done = Some(today);
        transition
    }

    pub fn view(&self, today: NaiveDate) -> Vec<HabitView> {
        HabitId::ALL
            .into_iter()
            .map(|id| {
                let state = self.get(id);
                HabitView {
                    id,
                    label: id.label(),
                    streak: state.streak,
                    done_today: state.last_done == Some(today),
                }
            })
            .collect()
    }
}
