//! Process-wide ephemeris, initialized once.

use std::sync::{Arc, OnceLock};

use crate::adapter::Ephemeris;
use crate::source::EphemerisSource;

static GLOBAL: OnceLock<Ephemeris> = OnceLock::new();

/// The process-wide adapter.
///
/// The first caller installs the built-in mean-element source unless
/// [`install`] ran earlier. Racing first calls are safe; everyone observes
/// the same instance.
pub fn global() -> &'static Ephemeris {
    GLOBAL.get_or_init(Ephemeris::with_mean_source)
}

/// Install a custom source as the process-wide provider.
///
/// Returns `false` if the global ephemeris was already initialized, in
/// which case the existing source stays in place. Hosts that want a
/// higher-precision provider call this before any chart work.
pub fn install(source: Arc<dyn EphemerisSource>) -> bool {
    GLOBAL.set(Ephemeris::new(source)).is_ok()
}
