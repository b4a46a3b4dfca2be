//! Plays a heartbeat-like pattern against a no-op haptics handle,
//! logging every engine event to stdout.
//!
//! Run with: `cargo run --example heartbeat --features logging`

use std::sync::Arc;
use std::time::Duration;

use staccato::{Config, Engine, FixedTier, LogWriter, NullHaptics, Subscribe};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let subs: Vec<Arc<dyn Subscribe>> = vec![Arc::new(LogWriter)];
    let engine = Engine::new(
        Config::default(),
        Arc::new(FixedTier::default()),
        Arc::new(NullHaptics),
        subs,
    );

    // lub-dub, pause, lub-dub
    engine.submit_pattern("oO--oO", Duration::from_millis(150));
    engine.drained().await;

    // a submission while the first pattern is in flight would be dropped,
    // so chain the next one after drained()
    engine.play(".x.x.");
    engine.drained().await;

    engine.shutdown().await.unwrap();
}
