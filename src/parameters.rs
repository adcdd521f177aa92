//! Host-visible controls.
//!
//! Each control has a static [`ParameterInfo`] descriptor and a current value
//! stored in an atomic, so a control thread can write while the audio thread
//! reads. Values are clamped on every read; a block-level snapshot reads each
//! field exactly once.

use core::sync::atomic::{AtomicU32, Ordering};

#[allow(unused_imports)]
use num_traits::float::Float;

/// Static description of a control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterInfo {
    pub id: ParamId,
    pub name: &'static str,
    pub min: f32,
    pub max: f32,
    pub default: f32,
    /// Normalized mapping exponent; below 1.0 gives more resolution near `min`.
    pub skew: f32,
}

impl ParameterInfo {
    const fn new(id: ParamId, name: &'static str, min: f32, max: f32, default: f32) -> Self {
        Self {
            id,
            name,
            min,
            max,
            default,
            skew: 1.0,
        }
    }

    const fn skewed(self, skew: f32) -> Self {
        Self { skew, ..self }
    }

    /// Clamps `value` into the declared range. NaN maps to the default.
    #[inline]
    pub fn clamp(&self, value: f32) -> f32 {
        if value.is_nan() {
            self.default
        } else {
            value.clamp(self.min, self.max)
        }
    }

    /// Maps a 0.0..1.0 position onto the range.
    #[inline]
    pub fn from_normalized(&self, normalized: f32) -> f32 {
        let mut proportion = if normalized.is_nan() {
            0.0
        } else {
            normalized.clamp(0.0, 1.0)
        };
        if self.skew != 1.0 && proportion > 0.0 {
            proportion = (proportion.ln() / self.skew).exp();
        }
        self.min + (self.max - self.min) * proportion
    }

    /// Maps a value onto its 0.0..1.0 position.
    #[inline]
    pub fn to_normalized(&self, value: f32) -> f32 {
        let proportion = (self.clamp(value) - self.min) / (self.max - self.min);
        if self.skew != 1.0 && proportion > 0.0 {
            proportion.powf(self.skew)
        } else {
            proportion
        }
    }
}

macro_rules! parameters {
    ($($id:ident => $info:expr,)*) => {
        /// Identifier of every control.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum ParamId {
            $($id,)*
        }

        impl ParamId {
            pub const ALL: &'static [ParamId] = &[$(ParamId::$id,)*];
        }

        const INFOS: &[ParameterInfo] = &[$($info,)*];
    };
}

use ParamId::*;

parameters! {
    MasterGain => ParameterInfo::new(MasterGain, "Master Gain", 0.0, 1.0, 0.5),

    MidBoilGain => ParameterInfo::new(MidBoilGain, "MB Gain", 0.0, 1.5, 0.6),
    MidBoilCutoff => ParameterInfo::new(MidBoilCutoff, "MB Bandpass Cutoff", 15.0, 10000.0, 3200.0).skewed(0.3),
    MidBoilQ => ParameterInfo::new(MidBoilQ, "MB Bandpass QFactor", 0.1, 15.0, 1.8),
    MidBoilRandomGain => ParameterInfo::new(MidBoilRandomGain, "MB Random Gain (dB)", 0.0, 24.0, 6.0),
    MidBoilRngOscFrequency => ParameterInfo::new(MidBoilRngOscFrequency, "MB Rng Osc Frequency", 1.0, 100.0, 4.0).skewed(0.5),
    MidBoilRngFreqBand => ParameterInfo::new(MidBoilRngFreqBand, "MB Rng BPF Freq Band", 100.0, 2000.0, 900.0),
    MidBoilRngCenterFrequency => ParameterInfo::new(MidBoilRngCenterFrequency, "MB Rng BPF Center Freq", 15.0, 10000.0, 2400.0).skewed(0.3),
    MidBoilRngQ => ParameterInfo::new(MidBoilRngQ, "MB Rng BPF QFactor", 0.1, 15.0, 4.0),

    LowBoilGain => ParameterInfo::new(LowBoilGain, "LB Gain", 0.0, 1.5, 0.75),
    LowBoilCutoff => ParameterInfo::new(LowBoilCutoff, "LB Bandpass Cutoff", 15.0, 10000.0, 2341.0).skewed(0.3),
    LowBoilQ => ParameterInfo::new(LowBoilQ, "LB Bandpass QFactor", 0.1, 15.0, 2.4),
    LowBoilRandomGain => ParameterInfo::new(LowBoilRandomGain, "LB Random Gain (dB)", 0.0, 24.0, 9.0),
    LowBoilLfoFrequency => ParameterInfo::new(LowBoilLfoFrequency, "LB LFO Frequency", 0.01, 10.0, 0.2).skewed(0.5),
    LowBoilLfoDepth => ParameterInfo::new(LowBoilLfoDepth, "LB LFO Depth", 0.0, 2000.0, 400.0),
    LowBoilRngOscFrequency => ParameterInfo::new(LowBoilRngOscFrequency, "LB Rng Osc Frequency", 1.0, 100.0, 2.0).skewed(0.5),
    LowBoilRngFreqBand => ParameterInfo::new(LowBoilRngFreqBand, "LB Rng BPF Freq Band", 100.0, 500.0, 435.0),
    LowBoilRngCenterFrequency => ParameterInfo::new(LowBoilRngCenterFrequency, "LB Rng BPF Center Freq", 15.0, 10000.0, 606.0).skewed(0.3),
    LowBoilRngQ => ParameterInfo::new(LowBoilRngQ, "LB Rng BPF QFactor", 0.1, 15.0, 9.0),

    StereoGain => ParameterInfo::new(StereoGain, "SW Gain", 0.0, 1.5, 0.4),
    StereoCutoff => ParameterInfo::new(StereoCutoff, "SW Highpass Cutoff", 20.0, 15000.0, 4000.0).skewed(0.3),
    StereoQ => ParameterInfo::new(StereoQ, "SW Highpass QFactor", 0.1, 15.0, 0.7),
    StereoWidth => ParameterInfo::new(StereoWidth, "SW Width", 0.0, 1.0, 0.8),
    StereoRngOscFrequency => ParameterInfo::new(StereoRngOscFrequency, "SW Rng Osc Frequency", 1.0, 100.0, 1.5).skewed(0.5),
    StereoRngFreqBand => ParameterInfo::new(StereoRngFreqBand, "SW Rng BPF Freq Band", 100.0, 4000.0, 1500.0),
    StereoRngCenterFrequency => ParameterInfo::new(StereoRngCenterFrequency, "SW Rng BPF Center Freq", 15.0, 15000.0, 7000.0).skewed(0.3),
    StereoRngQ => ParameterInfo::new(StereoRngQ, "SW Rng BPF QFactor", 0.1, 15.0, 1.2),

    DropletGain => ParameterInfo::new(DropletGain, "Drop Gain", 0.0, 1.5, 0.8),
    DropletOnsetWindow => ParameterInfo::new(DropletOnsetWindow, "Drop Onset Window (s)", 0.001, 0.5, 0.05).skewed(0.5),
    DropletInterval => ParameterInfo::new(DropletInterval, "Drop Interval Coeff", 0.0, 1.0, 0.5),
    DropletFrequency => ParameterInfo::new(DropletFrequency, "Drop Frequency Coeff", 0.0, 1.0, 0.5),
}

/// Number of controls.
pub const PARAM_COUNT: usize = ParamId::ALL.len();

impl ParamId {
    #[inline]
    pub fn info(self) -> &'static ParameterInfo {
        &INFOS[self as usize]
    }

    #[inline]
    pub fn name(self) -> &'static str {
        self.info().name
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|id| id.name() == name)
    }
}

/// Randomized bandpass settings shared by the boil and stereo layers.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ModulatorSettings {
    pub rate: f32,
    pub band: f32,
    pub center: f32,
    pub q: f32,
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct MidBoilSettings {
    pub gain: f32,
    pub cutoff: f32,
    pub q: f32,
    pub random_gain_db: f32,
    pub modulator: ModulatorSettings,
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct LowBoilSettings {
    pub gain: f32,
    pub cutoff: f32,
    pub q: f32,
    pub random_gain_db: f32,
    pub lfo_frequency: f32,
    pub lfo_depth: f32,
    pub modulator: ModulatorSettings,
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct StereoWidthSettings {
    pub gain: f32,
    pub cutoff: f32,
    pub q: f32,
    pub width: f32,
    pub modulator: ModulatorSettings,
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct DropletSettings {
    pub onset_window: f32,
    pub interval: f32,
    pub frequency: f32,
}

/// Current value of every control.
#[derive(Debug)]
pub struct Parameters {
    values: [AtomicU32; PARAM_COUNT],
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            values: core::array::from_fn(|i| AtomicU32::new(INFOS[i].default.to_bits())),
        }
    }
}

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value, clamped to the declared range.
    #[inline]
    pub fn get(&self, id: ParamId) -> f32 {
        let raw = f32::from_bits(self.values[id as usize].load(Ordering::Relaxed));
        id.info().clamp(raw)
    }

    #[inline]
    pub fn set(&self, id: ParamId, value: f32) {
        let value = id.info().clamp(value);
        self.values[id as usize].store(value.to_bits(), Ordering::Relaxed);
    }

    #[inline]
    pub fn get_normalized(&self, id: ParamId) -> f32 {
        id.info().to_normalized(self.get(id))
    }

    #[inline]
    pub fn set_normalized(&self, id: ParamId, normalized: f32) {
        self.set(id, id.info().from_normalized(normalized));
    }

    /// Restores every default.
    pub fn reset(&self) {
        for id in ParamId::ALL {
            self.set(*id, id.info().default);
        }
    }

    pub fn mid_boil(&self) -> MidBoilSettings {
        MidBoilSettings {
            gain: self.get(MidBoilGain),
            cutoff: self.get(MidBoilCutoff),
            q: self.get(MidBoilQ),
            random_gain_db: self.get(MidBoilRandomGain),
            modulator: ModulatorSettings {
                rate: self.get(MidBoilRngOscFrequency),
                band: self.get(MidBoilRngFreqBand),
                center: self.get(MidBoilRngCenterFrequency),
                q: self.get(MidBoilRngQ),
            },
        }
    }

    pub fn low_boil(&self) -> LowBoilSettings {
        LowBoilSettings {
            gain: self.get(LowBoilGain),
            cutoff: self.get(LowBoilCutoff),
            q: self.get(LowBoilQ),
            random_gain_db: self.get(LowBoilRandomGain),
            lfo_frequency: self.get(LowBoilLfoFrequency),
            lfo_depth: self.get(LowBoilLfoDepth),
            modulator: ModulatorSettings {
                rate: self.get(LowBoilRngOscFrequency),
                band: self.get(LowBoilRngFreqBand),
                center: self.get(LowBoilRngCenterFrequency),
                q: self.get(LowBoilRngQ),
            },
        }
    }

    pub fn stereo_width(&self) -> StereoWidthSettings {
        StereoWidthSettings {
            gain: self.get(StereoGain),
            cutoff: self.get(StereoCutoff),
            q: self.get(StereoQ),
            width: self.get(StereoWidth),
            modulator: ModulatorSettings {
                rate: self.get(StereoRngOscFrequency),
                band: self.get(StereoRngFreqBand),
                center: self.get(StereoRngCenterFrequency),
                q: self.get(StereoRngQ),
            },
        }
    }

    pub fn droplet(&self) -> DropletSettings {
        DropletSettings {
            onset_window: self.get(DropletOnsetWindow),
            interval: self.get(DropletInterval),
            frequency: self.get(DropletFrequency),
        }
    }
}
