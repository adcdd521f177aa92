//! Table lookup oscillator used as a low frequency modulator.

use alloc::borrow::Cow;
use alloc::vec::Vec;

#[allow(unused_imports)]
use num_traits::float::Float;
use spin::Once;

use crate::utils::interpolate_wrap;

/// Number of points in the shared sine table.
pub const SINE_TABLE_SIZE: usize = 128;

/// Fastest phase increment, in cycles per sample.
pub const MAX_FREQUENCY: f32 = 0.5;

static SINE_TABLE: Once<[f32; SINE_TABLE_SIZE + 1]> = Once::new();

/// One period of a sine, with a guard point, built on first use.
pub fn sine_table() -> &'static [f32; SINE_TABLE_SIZE + 1] {
    SINE_TABLE.call_once(|| {
        let mut table = [0.0; SINE_TABLE_SIZE + 1];
        fill_table(&mut table, |x: f32| x.sin());
        table
    })
}

/// Samples `function` over `0..2pi` into all but the last point of `table`,
/// which receives a copy of the first.
fn fill_table<F: Fn(f32) -> f32>(table: &mut [f32], function: F) {
    let size = table.len() - 1;
    for (i, point) in table.iter_mut().take(size).enumerate() {
        *point = function(core::f32::consts::TAU * i as f32 / size as f32);
    }
    table[size] = table[0];
}

#[derive(Debug, Clone)]
pub struct WavetableOscillator {
    table: Cow<'static, [f32]>,
    table_size: usize,

    sample_rate: f32,
    frequency: f32,

    // Oscillator state, in cycles.
    phase: f32,
    increment: f32,
}

impl Default for WavetableOscillator {
    fn default() -> Self {
        Self::sine()
    }
}

impl WavetableOscillator {
    /// Sine oscillator reading the shared table.
    pub fn sine() -> Self {
        Self {
            table: Cow::Borrowed(&sine_table()[..]),
            table_size: SINE_TABLE_SIZE,
            sample_rate: 48000.0,
            frequency: 0.0,
            phase: 0.0,
            increment: 0.0,
        }
    }

    /// Rebuilds the table from one period of `function`, sampled at
    /// `table_size` points over `0..2pi`. Allocates.
    pub fn initialise<F: Fn(f32) -> f32>(&mut self, function: F, table_size: usize) {
        let table_size = table_size.max(2);
        let mut table = Vec::with_capacity(table_size + 1);
        table.resize(table_size + 1, 0.0);
        fill_table(&mut table, function);
        self.table = Cow::Owned(table);
        self.table_size = table_size;
    }

    pub fn prepare(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
        self.set_frequency(self.frequency);
        self.reset();
    }

    pub fn reset(&mut self) {
        self.phase = 0.0;
    }

    /// Sets the rate in Hz. The phase is left untouched so the output stays
    /// continuous.
    #[inline]
    pub fn set_frequency(&mut self, frequency: f32) {
        self.frequency = if frequency.is_finite() {
            frequency.max(0.0)
        } else {
            0.0
        };
        self.increment = (self.frequency / self.sample_rate).min(MAX_FREQUENCY);
    }

    #[inline]
    pub fn frequency(&self) -> f32 {
        self.frequency
    }

    #[inline]
    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// Moves the phase forward by `samples` increments without reading.
    #[inline]
    pub fn advance(&mut self, samples: usize) {
        self.phase += self.increment * samples as f32;
        self.phase -= self.phase.floor();
    }

    /// Reads the table at the current phase, then advances by one sample.
    ///
    /// `input` is added to the waveform, so a noise input turns the output
    /// into a wandering control signal around the periodic shape.
    #[inline]
    pub fn process_sample(&mut self, input: f32) -> f32 {
        let value = interpolate_wrap(&self.table, self.phase, self.table_size);

        self.phase += self.increment;
        if self.phase >= 1.0 {
            self.phase -= 1.0;
        }

        input + value
    }

    #[inline]
    pub fn render(&mut self, out: &mut [f32]) {
        for sample in out.iter_mut() {
            *sample = self.process_sample(0.0);
        }
    }
}
