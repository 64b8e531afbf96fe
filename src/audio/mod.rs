//! Phase-completion alerts.
//!
//! The default alert synthesizes a short bell tone on the system output
//! device. Playback is best effort: callers log failures and move on.

mod alert;
#[cfg(feature = "tone-alert")]
mod player;
#[cfg(test)]
mod tests;
mod tone;

#[cfg(test)]
pub(crate) use alert::testing;
pub use alert::{build_alert, AlertSettings, AlertSink, BellAlert, SilentAlert};
#[cfg(feature = "tone-alert")]
pub use player::{list_output_devices, ToneAlert};
pub use tone::{fill_interleaved, ToneEnvelope, ToneSamples, DEFAULT_PEAK, DEFAULT_PITCH_HZ};

use std::env;

/// Output device names, or the comma-separated `FLIPCLOCK_TEST_DEVICES`
/// list when that variable is set.
pub fn available_output_devices() -> anyhow::Result<Vec<String>> {
    if let Ok(raw) = env::var("FLIPCLOCK_TEST_DEVICES") {
        return Ok(raw
            .split(',')
            .map(|item| item.trim().to_string())
            .filter(|item| !item.is_empty())
            .collect());
    }
    list_output_devices()
}

/// Without CPAL there is nothing to enumerate.
#[cfg(not(feature = "tone-alert"))]
pub fn list_output_devices() -> anyhow::Result<Vec<String>> {
    Ok(Vec::new())
}
