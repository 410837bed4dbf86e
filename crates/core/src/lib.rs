//! Core library for PokéPulse
//!
//! This crate implements the **Functional Core** of the PokéPulse application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The PokéPulse project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`pokepulse_core`** (this crate): Pure transformation functions with zero I/O
//! - **`pokepulse`**: I/O operations and orchestration (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! All functions in this crate adhere to these principles:
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: No I/O operations, no external state mutations
//! - **Deterministic**: Behavior is predictable and reproducible (the single
//!   exception is [`round::start`], which draws the secret number; its
//!   deterministic sibling [`round::start_with_target`] covers every other use)
//! - **Testable**: Can be tested with simple fixture data, no mocking required
//!
//! # Module Organization
//!
//! The core crate is organized by domain:
//!
//! - [`catalog`]: Transformations for Pokémon catalog API data (pokeapi.co)
//! - [`round`]: The guessing-round state machine and its transition functions
//! - [`scores`]: The bounded score ledger and its selection and display helpers
//!
//! Each module contains:
//!
//! - **Domain models**: Structured types representing API responses and outputs
//! - **Transformation functions**: Pure functions that convert inputs to domain models
//! - **Comprehensive tests**: Unit tests using fixture data (no mocking)
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use pokepulse_core::round::{self, Difficulty, Feedback};
//!
//! // Start a deterministic round (no RNG required)
//! let state = round::start_with_target(Difficulty::Easy.settings(), 17);
//!
//! // Transition using pure functions
//! let (state, feedback) = round::submit_guess(&state, 25);
//!
//! // Assert on results (no mocking needed)
//! assert_eq!(feedback, Feedback::TooHigh);
//! assert_eq!(state.feasible_max, 24);
//! ```
//!
//! # Pattern Reference
//!
//! This architecture is based on Gary Bernhardt's Functional Core, Imperative Shell pattern.
//! The key insight: **data transformation logic should be pure and ignorant of where data
//! comes from or where it goes**.

pub mod catalog;
pub mod round;
pub mod scores;
