use crate::config::AlertKind;
use anyhow::{Context, Result};
use std::io::{self, Stdout, Write};

use super::tone::ToneEnvelope;

/// Best-effort sound played when a phase runs out.
pub trait AlertSink {
    fn play_alert(&mut self) -> Result<()>;

    fn label(&self) -> &'static str;
}

#[derive(Debug, Clone, PartialEq)]
pub struct AlertSettings {
    pub kind: AlertKind,
    pub envelope: ToneEnvelope,
    pub output_device: Option<String>,
}

impl Default for AlertSettings {
    fn default() -> Self {
        Self {
            kind: AlertKind::Tone,
            envelope: ToneEnvelope::default(),
            output_device: None,
        }
    }
}

/// Pick the alert implementation for the configured kind.
pub fn build_alert(settings: &AlertSettings) -> Box<dyn AlertSink> {
    match settings.kind {
        AlertKind::Tone => tone_alert(settings),
        AlertKind::Bell => Box::new(BellAlert::stdout()),
        AlertKind::Off => Box::new(SilentAlert),
    }
}

#[cfg(feature = "tone-alert")]
fn tone_alert(settings: &AlertSettings) -> Box<dyn AlertSink> {
    Box::new(super::ToneAlert::new(
        settings.envelope,
        settings.output_device.clone(),
    ))
}

#[cfg(not(feature = "tone-alert"))]
fn tone_alert(_settings: &AlertSettings) -> Box<dyn AlertSink> {
    crate::log_debug("tone alerts not compiled in; falling back to terminal bell");
    Box::new(BellAlert::stdout())
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SilentAlert;

impl AlertSink for SilentAlert {
    fn play_alert(&mut self) -> Result<()> {
        Ok(())
    }

    fn label(&self) -> &'static str {
        "off"
    }
}

/// Rings the terminal bell (BEL) on the given writer.
pub struct BellAlert<W: Write> {
    out: W,
}

impl BellAlert<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> BellAlert<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> AlertSink for BellAlert<W> {
    fn play_alert(&mut self) -> Result<()> {
        self.out.write_all(b"\x07").context("failed to ring terminal bell")?;
        self.out.flush().context("failed to flush terminal bell")?;
        Ok(())
    }

    fn label(&self) -> &'static str {
        "bell"
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::AlertSink;
    use anyhow::{anyhow, Result};
    use std::cell::Cell;
    use std::rc::Rc;

    /// Counts plays; optionally fails every one of them.
    #[derive(Clone, Default)]
    pub(crate) struct CountingAlert {
        pub(crate) plays: Rc<Cell<u32>>,
        pub(crate) fail: bool,
    }

    impl CountingAlert {
        pub(crate) fn failing() -> Self {
            Self {
                plays: Rc::default(),
                fail: true,
            }
        }

        pub(crate) fn count(&self) -> u32 {
            self.plays.get()
        }
    }

    impl AlertSink for CountingAlert {
        fn play_alert(&mut self) -> Result<()> {
            self.plays.set(self.plays.get() + 1);
            if self.fail {
                return Err(anyhow!("audio output blocked"));
            }
            Ok(())
        }

        fn label(&self) -> &'static str {
            "counting"
        }
    }
}
