//! Structured diagnostic logging via `log` + `env_logger`, the ambient-stack
//! replacement for the teacher's ad hoc `println!`/`colored` debug output.
//! Emitted from FEN parsing and make/unmake at `debug`/`trace` level; never
//! from `generate_moves` itself, which would dominate perft runtime.

use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes the global logger from `RUST_LOG` (or `warn` if unset).
/// Safe to call more than once — only the first call takes effect, which is
/// what lets both the `perft` binary and integration tests call this
/// unconditionally without double-init panicking.
pub fn init() {
    INIT.call_once(|| {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    });
}
