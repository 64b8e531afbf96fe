pub const DEFAULT_FOCUS_MINUTES: u32 = 25;
pub const DEFAULT_BREAK_MINUTES: u32 = 5;
pub const DEFAULT_IDLE_MS: u64 = 3000;
pub const DEFAULT_ALERT_VOLUME: f32 = 0.3;
pub const DEFAULT_ALERT_PITCH_HZ: f32 = 523.25;

pub(super) const MAX_SESSION_MINUTES: u32 = 24 * 60;
pub(super) const MIN_IDLE_MS: u64 = 500;
pub(super) const MAX_IDLE_MS: u64 = 600_000;
pub(super) const MIN_ALERT_PITCH_HZ: f32 = 20.0;
pub(super) const MAX_ALERT_PITCH_HZ: f32 = 20_000.0;
pub(super) const MAX_DEVICE_NAME_CHARS: usize = 256;
