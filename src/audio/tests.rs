use super::*;
use crate::config::AlertKind;
use std::time::Duration;

fn approx(a: f32, b: f32, tolerance: f32) -> bool {
    (a - b).abs() <= tolerance
}

#[test]
fn envelope_starts_silent_and_peaks_after_attack() {
    let envelope = ToneEnvelope::default();
    assert_eq!(envelope.amplitude_at(0.0), 0.0);
    assert!(approx(envelope.amplitude_at(0.025), 0.15, 1e-4));
    assert!(approx(envelope.amplitude_at(0.05), DEFAULT_PEAK, 1e-4));
}

#[test]
fn envelope_decays_towards_floor_and_stops() {
    let envelope = ToneEnvelope::default();
    let late = envelope.amplitude_at(1.999);
    assert!(late < 0.0015, "expected near-floor amplitude, got {late}");
    assert!(envelope.amplitude_at(1.0) < envelope.amplitude_at(0.5));
    assert_eq!(envelope.amplitude_at(2.0), 0.0);
    assert_eq!(envelope.amplitude_at(-0.1), 0.0);
}

#[test]
fn envelope_is_silent_at_zero_volume() {
    let envelope = ToneEnvelope::default().with_peak(0.0);
    assert_eq!(envelope.amplitude_at(0.05), 0.0);
    assert_eq!(envelope.sample_at(0.3), 0.0);
}

#[test]
fn samples_never_exceed_peak() {
    let envelope = ToneEnvelope::default().with_pitch(440.0);
    let peak = ToneSamples::new(envelope, 8_000).fold(0.0_f32, |acc, s| acc.max(s.abs()));
    assert!(peak <= DEFAULT_PEAK + 1e-6);
    assert!(peak > 0.2);
}

#[test]
fn sample_stream_lasts_the_tone_length() {
    let envelope = ToneEnvelope {
        length: Duration::from_millis(500),
        ..ToneEnvelope::default()
    };
    assert_eq!(ToneSamples::new(envelope, 48_000).count(), 24_000);
}

#[test]
fn fill_interleaved_duplicates_mono_across_channels_then_pads() {
    let envelope = ToneEnvelope {
        length: Duration::from_millis(1),
        ..ToneEnvelope::default()
    };
    let mut samples = ToneSamples::new(envelope, 2_000);
    let mut data = [9.0_f32; 8];
    fill_interleaved(&mut data, 2, &mut samples, |s| s);
    assert_eq!(data[0], data[1]);
    assert_eq!(data[2], data[3]);
    assert_eq!(&data[4..], &[0.0; 4]);
    assert!(samples.is_finished());
}

#[test]
fn bell_alert_writes_bel() {
    let mut bell = BellAlert::new(Vec::new());
    bell.play_alert().expect("bell");
    bell.play_alert().expect("bell");
    assert_eq!(bell.into_inner(), b"\x07\x07");
}

#[test]
fn build_alert_honours_kind() {
    let mut settings = AlertSettings::default();
    settings.kind = AlertKind::Off;
    assert_eq!(build_alert(&settings).label(), "off");
    settings.kind = AlertKind::Bell;
    assert_eq!(build_alert(&settings).label(), "bell");
}

#[cfg(feature = "tone-alert")]
#[test]
fn build_alert_uses_tone_by_default() {
    assert_eq!(build_alert(&AlertSettings::default()).label(), "tone");
}
