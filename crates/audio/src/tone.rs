//! Synthesized feedback tones.
//!
//! Each [`SoundEvent`] maps to a short sine tone whose frequency and gain
//! ramp exponentially from a start to an end value over the tone's length.

use std::f32::consts::TAU;
use std::time::Duration;

use crate::types::SoundEvent;

pub const SAMPLE_RATE: u32 = 44_100;

/// Parameters of one feedback tone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneSpec {
    pub freq_start: f32,
    pub freq_end: f32,
    pub gain_start: f32,
    pub gain_end: f32,
    pub duration_ms: u32,
}

impl ToneSpec {
    pub const fn for_event(event: SoundEvent) -> Self {
        match event {
            SoundEvent::Move => Self::new(200.0, 200.0, 0.10, 50),
            SoundEvent::Rotate => Self::new(300.0, 300.0, 0.10, 80),
            SoundEvent::Drop => Self::new(100.0, 50.0, 0.20, 100),
            SoundEvent::Clear => Self::new(400.0, 800.0, 0.15, 200),
            SoundEvent::GameOver => Self::new(300.0, 50.0, 0.20, 500),
        }
    }

    /// Every tone fades to the same floor.
    const fn new(freq_start: f32, freq_end: f32, gain_start: f32, duration_ms: u32) -> Self {
        Self {
            freq_start,
            freq_end,
            gain_start,
            gain_end: 0.01,
            duration_ms,
        }
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms as u64)
    }

    pub fn sample_count(&self, sample_rate: u32) -> u64 {
        sample_rate as u64 * self.duration_ms as u64 / 1000
    }
}

/// `start * (end / start)^t` for `t` in `[0, 1]`.
fn exp_ramp(start: f32, end: f32, t: f32) -> f32 {
    if start <= 0.0 || end <= 0.0 {
        return start + (end - start) * t;
    }
    start * (end / start).powf(t)
}

/// Mono sine oscillator playing one [`ToneSpec`] to completion.
#[derive(Debug, Clone)]
pub struct ToneSource {
    spec: ToneSpec,
    sample_rate: u32,
    index: u64,
    total: u64,
    phase: f32,
}

impl ToneSource {
    pub fn new(spec: ToneSpec) -> Self {
        Self::with_sample_rate(spec, SAMPLE_RATE)
    }

    pub fn with_sample_rate(spec: ToneSpec, sample_rate: u32) -> Self {
        Self {
            spec,
            sample_rate: sample_rate.max(1),
            index: 0,
            total: spec.sample_count(sample_rate.max(1)),
            phase: 0.0,
        }
    }

    pub fn for_event(event: SoundEvent) -> Self {
        Self::new(ToneSpec::for_event(event))
    }

    fn progress(&self) -> f32 {
        if self.total <= 1 {
            return 0.0;
        }
        self.index as f32 / (self.total - 1) as f32
    }
}

impl Iterator for ToneSource {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        if self.index >= self.total {
            return None;
        }

        let t = self.progress();
        let freq = exp_ramp(self.spec.freq_start, self.spec.freq_end, t);
        let gain = exp_ramp(self.spec.gain_start, self.spec.gain_end, t);
        let sample = self.phase.sin() * gain;

        // Accumulate phase so frequency sweeps stay continuous.
        self.phase = (self.phase + TAU * freq / self.sample_rate as f32) % TAU;
        self.index += 1;
        Some(sample)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.total - self.index) as usize;
        (left, Some(left))
    }
}

impl rodio::Source for ToneSource {
    fn current_frame_len(&self) -> Option<usize> {
        Some((self.total - self.index) as usize)
    }

    fn channels(&self) -> u16 {
        1
    }

    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn total_duration(&self) -> Option<Duration> {
        Some(self.spec.duration())
    }
}
