//! Alert playback through the system output device via CPAL.
//!
//! Each alert gets its own short-lived thread that opens the device, plays the
//! tone to the end, and drops the stream. The UI thread never waits on audio.

use super::alert::AlertSink;
use super::tone::{fill_interleaved, ToneEnvelope, ToneSamples};
use crate::log_debug;
use anyhow::{anyhow, bail, Context, Result};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{SampleFormat, StreamConfig};
use std::thread;
use std::time::Duration;

/// Extra time the stream stays open so the device drains its buffer.
const PLAYBACK_TAIL: Duration = Duration::from_millis(150);

pub struct ToneAlert {
    envelope: ToneEnvelope,
    output_device: Option<String>,
}

impl ToneAlert {
    pub fn new(envelope: ToneEnvelope, output_device: Option<String>) -> Self {
        Self {
            envelope,
            output_device,
        }
    }
}

impl AlertSink for ToneAlert {
    fn play_alert(&mut self) -> Result<()> {
        let envelope = self.envelope;
        let output_device = self.output_device.clone();
        thread::Builder::new()
            .name("flipclock-alert".to_string())
            .spawn(move || {
                if let Err(err) = play_tone(&envelope, output_device.as_deref()) {
                    log_debug(&format!("alert playback failed: {err:#}"));
                    tracing::warn!(error = %format!("{err:#}"), "alert playback failed");
                }
            })
            .context("failed to spawn alert playback thread")?;
        Ok(())
    }

    fn label(&self) -> &'static str {
        "tone"
    }
}

/// Output device names so the CLI can offer a selector.
pub fn list_output_devices() -> Result<Vec<String>> {
    let host = cpal::default_host();
    let devices = host
        .output_devices()
        .context("no output devices available")?;
    let mut names = Vec::new();
    for device in devices {
        if let Ok(name) = device.name() {
            names.push(name);
        }
    }
    Ok(names)
}

fn open_device(preferred: Option<&str>) -> Result<cpal::Device> {
    let host = cpal::default_host();
    match preferred {
        Some(name) => {
            let mut devices = host
                .output_devices()
                .context("no output devices available")?;
            devices
                .find(|d| d.name().map(|n| n == name).unwrap_or(false))
                .ok_or_else(|| anyhow!("output device '{name}' not found"))
        }
        None => host
            .default_output_device()
            .context("no default output device available"),
    }
}

fn play_tone(envelope: &ToneEnvelope, preferred: Option<&str>) -> Result<()> {
    let device = open_device(preferred)?;
    let supported = device
        .default_output_config()
        .context("output device has no default config")?;
    let format = supported.sample_format();
    let config: StreamConfig = supported.into();
    let sample_rate = config.sample_rate.0;
    let channels = usize::from(config.channels.max(1));
    log_debug(&format!(
        "Alert config: format={format:?} sample_rate={sample_rate}Hz channels={channels}"
    ));

    let samples = ToneSamples::new(*envelope, sample_rate);
    let err_fn = |err| log_debug(&format!("alert_stream_error: {err}"));

    let stream = match format {
        SampleFormat::F32 => {
            let mut samples = samples;
            device.build_output_stream(
                &config,
                move |data: &mut [f32], _| {
                    fill_interleaved(data, channels, &mut samples, |sample| sample)
                },
                err_fn,
                None,
            )?
        }
        SampleFormat::I16 => {
            let mut samples = samples;
            device.build_output_stream(
                &config,
                move |data: &mut [i16], _| {
                    fill_interleaved(data, channels, &mut samples, |sample| {
                        (sample.clamp(-1.0, 1.0) * f32::from(i16::MAX)) as i16
                    })
                },
                err_fn,
                None,
            )?
        }
        SampleFormat::U16 => {
            let mut samples = samples;
            device.build_output_stream(
                &config,
                move |data: &mut [u16], _| {
                    fill_interleaved(data, channels, &mut samples, |sample| {
                        ((sample.clamp(-1.0, 1.0) * 0.5 + 0.5) * f32::from(u16::MAX)) as u16
                    })
                },
                err_fn,
                None,
            )?
        }
        other => bail!("unsupported sample format: {other:?}"),
    };

    stream.play().context("failed to start alert stream")?;
    thread::sleep(envelope.length + PLAYBACK_TAIL);
    if let Err(err) = stream.pause() {
        log_debug(&format!("failed to pause alert stream: {err}"));
    }
    drop(stream);
    Ok(())
}
