//! CLI infrastructure for the oxo binary
//!
//! This module provides the command-line interface for playing interactive
//! rounds and analyzing positions with the minimax engine.

pub mod commands;
pub mod output;
