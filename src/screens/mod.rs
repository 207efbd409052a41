//! Per-screen state and the update steps run around each client call.
//!
//! Pages own one of these in a signal: fetch, mutate, then patch or refetch.

mod calendar;
mod generator;
mod history;

pub(crate) use calendar::{schedule_generated_ideas, CalendarState, IdeaGroup};
pub(crate) use generator::{share_toast, GeneratorState};
pub(crate) use history::HistoryState;
