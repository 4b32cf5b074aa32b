//! Rooms source resolution.
//!
//! The rooms list can live in several places; resolution checks, highest
//! precedence first:
//!
//! 1. `DENIM_ROOMS` - explicit source, a file path or URL, used verbatim
//! 2. `DENIM_HOME`  - application home; rooms file at `$DENIM_HOME/rooms`
//! 3. `HOME`        - user home; rooms file at `$HOME/.denim/rooms`
//!
//! Variables that are set but empty count as unset. No I/O happens here;
//! resolution only computes a path or URL string.

/// Explicit rooms source override (file path or URL).
pub const ROOMS_VAR: &str = "DENIM_ROOMS";

/// Application home override.
pub const HOME_VAR: &str = "DENIM_HOME";

/// User home, the lowest-precedence fallback.
const USER_HOME_VAR: &str = "HOME";

/// Resolve the rooms source from the process environment.
///
/// Returns `None` when no configuration variable is set.
pub fn resolve_source() -> Option<String> {
    resolve_source_with(|key| std::env::var(key).ok())
}

/// Resolve the rooms source with an explicit environment lookup.
///
/// Split out from [`resolve_source`] so tests can drive the precedence
/// rules without touching process-wide environment state.
pub fn resolve_source_with<F>(env: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| env(key).filter(|value| !value.is_empty());

    if let Some(source) = get(ROOMS_VAR) {
        return Some(source);
    }
    if let Some(app_home) = get(HOME_VAR) {
        return Some(format!("{}/rooms", app_home));
    }
    get(USER_HOME_VAR).map(|home| format!("{}/.denim/rooms", home))
}

/// Whether a resolved source is a network URL rather than a local path.
pub fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}
