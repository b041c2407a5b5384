#![doc(test(attr(deny(warnings))))]

//! Travel Budget offers the expense ledger, group-split, and reporting
//! primitives that back a trip-planning assistant's budget tools.

pub mod core;
pub mod domain;
pub mod errors;
pub mod session;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Travel Budget tracing initialized.");
    });
}
