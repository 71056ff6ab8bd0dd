use log::Level;

/// Total time a counter spends counting up, before interval clamping.
pub const COUNT_UP_DURATION_MS: u32 = 1000;

/// Fraction of the viewport height a section's top edge has to cross
/// before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.9;

#[cfg(debug_assertions)]
pub fn get_asset_base() -> &'static str {
    "/assets"  // Served by `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn get_asset_base() -> &'static str {
    "./assets"  // Production, relative to index.html
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub fn asset_url(name: &str) -> String {
    format!("{}/{}", get_asset_base(), name)
}
