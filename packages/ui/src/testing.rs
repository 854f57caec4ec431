//! Helpers for driving a `VirtualDom` in tests.

use std::time::Duration;

use dioxus::prelude::*;
use dioxus_core::NoOpMutations;

/// Let pending tasks run and apply the renders they schedule, until no new
/// work arrives within the idle window.
pub async fn settle(dom: &mut VirtualDom) {
    const IDLE: Duration = Duration::from_millis(50);
    const MAX_PASSES: usize = 100;

    for _ in 0..MAX_PASSES {
        if tokio::time::timeout(IDLE, dom.wait_for_work()).await.is_err() {
            return;
        }
        dom.render_immediate(&mut NoOpMutations);
    }
    panic!("virtual dom still busy after {MAX_PASSES} passes");
}
