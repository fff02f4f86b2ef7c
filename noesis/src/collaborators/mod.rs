//! Collaborator boundary around the core engine.
//!
//! The engine delegates everything that is not state-machine or
//! data-structure work to the components here: emotion weighting and trend
//! tracking, keyword-based bias/logic review, self-reflection, and abstract
//! expansion. Each keeps its own bounded log; the expansion text generator
//! is the one injectable (and possibly randomized) seam.

pub mod abstraction;
pub mod emotion;
pub mod meta_cognition;
pub mod reflection;
