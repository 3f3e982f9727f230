//! Tracing subscriber for the CLI.

use std::sync::Once;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};
use tracing_tree::HierarchicalLayer;

static TRACING_INIT: Once = Once::new();

/// Install the subscriber.
///
/// Does nothing unless `RUST_LOG` is set, e.g.
/// `RUST_LOG=fixform_lexer=debug` for fallbacks and literal errors or
/// `RUST_LOG=fixform_lexer=trace` for every token.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();
        // Writes to stderr, leaving stdout to the token dump.
        let tree = HierarchicalLayer::default()
            .with_indent_amount(2)
            .with_indent_lines(true)
            .with_targets(true);
        Registry::default().with(filter).with(tree).init();
    });
}
