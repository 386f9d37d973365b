//! Core type definitions for the desktop state core
//!
//! This module centralizes type aliases used throughout the crate
//! for consistency and discoverability.

/// Window identifier
///
/// Windows are keyed by the string id of the app that opened them
/// (e.g. `"about"`), so reopening an app targets its existing window.
pub type WindowId = String;

/// Opaque parameters forwarded to the component rendered inside a window
///
/// The registry stores and returns these untouched.
pub type Props = serde_json::Map<String, serde_json::Value>;
