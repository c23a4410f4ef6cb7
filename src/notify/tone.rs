//! Synthesized success tone.

use std::f32::consts::PI;
use std::io::Write;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use super::Notifier;

/// A sine tone with an exponential gain ramp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneSpec {
    /// Pitch in hertz.
    pub frequency_hz: f32,
    /// Gain at the start of the tone.
    pub start_gain: f32,
    /// Gain reached at the end of the tone. Must be positive.
    pub end_gain: f32,
    /// Length of the tone.
    pub duration: Duration,
}

impl ToneSpec {
    /// 800 Hz, fading from 0.3 to 0.01 over half a second.
    pub const SUCCESS: ToneSpec = ToneSpec {
        frequency_hz: 800.0,
        start_gain: 0.3,
        end_gain: 0.01,
        duration: Duration::from_millis(500),
    };

    /// Gain at `t` seconds into the tone.
    pub fn gain_at(&self, t: f32) -> f32 {
        let length = self.duration.as_secs_f32();
        if length <= 0.0 {
            return self.end_gain;
        }
        let progress = (t / length).clamp(0.0, 1.0);
        self.start_gain * (self.end_gain / self.start_gain).powf(progress)
    }

    /// Render the tone as mono signed 16-bit samples.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    pub fn render(&self, sample_rate: u32) -> Vec<i16> {
        let count = (self.duration.as_secs_f32() * sample_rate as f32).round() as usize;
        (0..count)
            .map(|n| {
                let t = n as f32 / sample_rate as f32;
                let sample = (2.0 * PI * self.frequency_hz * t).sin() * self.gain_at(t);
                (sample * f32::from(i16::MAX)) as i16
            })
            .collect()
    }
}

/// Writes the rendered tone as raw little-endian PCM, e.g. into an
/// `aplay -f S16_LE -r <rate>` pipe.
pub struct PcmNotifier<W: Write + Send> {
    out: Mutex<W>,
    tone: ToneSpec,
    sample_rate: u32,
}

impl<W: Write + Send> PcmNotifier<W> {
    /// Play `tone` at `sample_rate` into `out`.
    pub fn new(out: W, tone: ToneSpec, sample_rate: u32) -> Self {
        Self {
            out: Mutex::new(out),
            tone,
            sample_rate,
        }
    }

    /// Recover the writer.
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> Notifier for PcmNotifier<W> {
    fn notify_success(&self) {
        let bytes: Vec<u8> = self
            .tone
            .render(self.sample_rate)
            .into_iter()
            .flat_map(i16::to_le_bytes)
            .collect();

        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = out.write_all(&bytes).and_then(|()| out.flush()) {
            tracing::warn!(error = %e, "Failed to write success tone");
        }
    }
}
