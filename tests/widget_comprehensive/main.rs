//! Widget Comprehensive Test Suite
//!
//! End-to-end tests through the `docsearch` facade, over both the bundled
//! site pages and small hand-built corpora.
//!
//! ## Test Tier Structure
//!
//! - **Tier 1: Store Invariants**
//!   Build-once, mapping completeness, empty query, order preservation.
//!
//! - **Tier 2: Controller Lifecycle**
//!   Open/close cycles, listener attachment, propagation.
//!
//! - **Tier 3: Site Scenarios**
//!   Ranking expectations against the bundled documentation pages.
//!
//! - **Tier 4: Configuration**
//!   `docsearch.toml` and corpus files on disk.
//!
//! - **Tier 5: Property-Based**
//!   Random queries and key sequences.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test widget_comprehensive
//!
//! # Only the property tests
//! cargo test --test widget_comprehensive property
//! ```

mod test_utils;

// Tier 1
mod store_invariants;

// Tier 2
mod controller_lifecycle;

// Tier 3
mod site_scenarios;

// Tier 4
mod configuration;

// Tier 5
mod property_tests;
