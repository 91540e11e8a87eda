//! Core module - strategy, context, resolution, and debounce state

mod context;
mod debounce;
mod resolver;
mod strategy;

pub(crate) use context::{ContextSnapshot, CwdHint};
pub(crate) use debounce::DebounceState;
pub(crate) use resolver::{Candidate, ResolutionResult, candidates, resolve, survey};
pub(crate) use strategy::{SourceKind, Strategy};
