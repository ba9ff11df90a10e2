//! Charset resolution shared by the handlers.

use flxb::presets::PresetRegistry;
use flxb::{Charset, FlxbError, Result};

use super::global::GlobalArgs;

/// Loads the built-in preset registry, merged with the user's `--presets`
/// file when given.
pub fn load_registry(global: &GlobalArgs) -> Result<PresetRegistry> {
    let mut registry = PresetRegistry::load_default()?;
    if let Some(path) = &global.presets {
        registry.merge(PresetRegistry::load_from_file(path)?);
    }
    Ok(registry)
}

/// Builds a charset from `--charset` or `--preset`, or returns `None` when
/// neither was given (legal for header-driven decode).
///
/// A preset's own pow2 flag is honored; `--pow2` forces the bit-packing
/// mode on top of either source.
pub fn resolve_charset(
    charset: Option<&str>,
    preset: Option<&str>,
    pow2: bool,
    registry: &PresetRegistry,
) -> Result<Option<Charset>> {
    match (charset, preset) {
        (Some(raw), None) => Ok(Some(Charset::build(raw.as_bytes(), pow2)?)),
        (None, Some(name)) => {
            let config = registry.get(name).ok_or_else(|| {
                let mut msg = format!("preset '{}' not found", name);
                if let Some(suggestion) = registry.suggest(name) {
                    msg.push_str(&format!("; did you mean '{}'?", suggestion));
                }
                FlxbError::Config(msg)
            })?;
            Ok(Some(Charset::build(
                config.chars.as_bytes(),
                pow2 || config.pow2,
            )?))
        }
        (None, None) => Ok(None),
        // clap's conflicts_with already rejects this pair; keep the check
        // for library callers of run() with a hand-built argv.
        (Some(_), Some(_)) => Err(FlxbError::config(
            "--charset and --preset are mutually exclusive",
        )),
    }
}
