//! Bell-like alert tone: a fixed-pitch sine with a short linear attack and an
//! exponential decay.

use std::f32::consts::TAU;
use std::time::Duration;

pub const DEFAULT_PITCH_HZ: f32 = 523.25;
pub const DEFAULT_PEAK: f32 = 0.3;
pub const DEFAULT_ATTACK: Duration = Duration::from_millis(50);
pub const DEFAULT_LENGTH: Duration = Duration::from_secs(2);
/// Level the decay reaches at the end of the tone.
pub const DECAY_FLOOR: f32 = 0.001;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneEnvelope {
    pub pitch_hz: f32,
    pub peak: f32,
    pub attack: Duration,
    pub length: Duration,
    pub floor: f32,
}

impl Default for ToneEnvelope {
    fn default() -> Self {
        Self {
            pitch_hz: DEFAULT_PITCH_HZ,
            peak: DEFAULT_PEAK,
            attack: DEFAULT_ATTACK,
            length: DEFAULT_LENGTH,
            floor: DECAY_FLOOR,
        }
    }
}

impl ToneEnvelope {
    pub fn with_pitch(mut self, pitch_hz: f32) -> Self {
        self.pitch_hz = pitch_hz;
        self
    }

    pub fn with_peak(mut self, peak: f32) -> Self {
        self.peak = peak;
        self
    }

    /// Gain at `t` seconds from the start of the tone.
    pub fn amplitude_at(&self, t: f32) -> f32 {
        let attack = self.attack.as_secs_f32();
        let length = self.length.as_secs_f32();
        if self.peak <= 0.0 || t < 0.0 || t >= length {
            return 0.0;
        }
        if t < attack {
            return self.peak * (t / attack);
        }
        let decay_span = (length - attack).max(f32::EPSILON);
        let progress = ((t - attack) / decay_span).clamp(0.0, 1.0);
        // Exponential ramp needs a strictly positive target.
        let ratio = (self.floor / self.peak).clamp(f32::MIN_POSITIVE, 1.0);
        self.peak * ratio.powf(progress)
    }

    pub fn sample_at(&self, t: f32) -> f32 {
        self.amplitude_at(t) * (TAU * self.pitch_hz * t).sin()
    }

    pub fn total_samples(&self, sample_rate: u32) -> u64 {
        (self.length.as_secs_f64() * f64::from(sample_rate)).ceil() as u64
    }
}

/// Mono sample stream for one playback of the tone.
#[derive(Debug, Clone)]
pub struct ToneSamples {
    envelope: ToneEnvelope,
    sample_rate: f32,
    index: u64,
    total: u64,
}

impl ToneSamples {
    pub fn new(envelope: ToneEnvelope, sample_rate: u32) -> Self {
        let sample_rate = sample_rate.max(1);
        Self {
            envelope,
            sample_rate: sample_rate as f32,
            index: 0,
            total: envelope.total_samples(sample_rate),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.index >= self.total
    }
}

impl Iterator for ToneSamples {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        if self.is_finished() {
            return None;
        }
        let t = self.index as f32 / self.sample_rate;
        self.index += 1;
        Some(self.envelope.sample_at(t))
    }
}

/// Write the mono stream into an interleaved device buffer, padding with
/// silence once the tone has ended.
pub fn fill_interleaved<T, F>(data: &mut [T], channels: usize, samples: &mut ToneSamples, convert: F)
where
    T: Copy,
    F: Fn(f32) -> T,
{
    for frame in data.chunks_mut(channels.max(1)) {
        let value = convert(samples.next().unwrap_or(0.0));
        for slot in frame {
            *slot = value;
        }
    }
}
