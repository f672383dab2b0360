//! Tests for the upward configuration search.
//!
//! Covers probe ordering within and across directories, leading-dot
//! stripping, module-style resolution, the home directory fallback and the
//! search-then-load helpers.

mod loading;
