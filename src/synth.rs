//! Block orchestration.
//!
//! Once per block the synth clears the output, snapshots the controls into
//! every layer, renders the layers one after the other into a reusable stereo
//! scratch buffer, accumulates each onto the output and applies the master
//! gain.

use alloc::boxed::Box;
use alloc::vec;

use log::{debug, warn};
use thiserror::Error;

use crate::layer::droplet_layer::DropletLayer;
use crate::layer::low_boil::LowBoilLayer;
use crate::layer::mid_boil::MidBoilLayer;
use crate::layer::stereo_width::StereoWidthLayer;
use crate::layer::Layer;
use crate::parameters::{ParamId, Parameters};
use crate::utils::random::{Random, RandomSource};
use crate::utils::{add_into, apply_gain, peak};
use crate::ProcessSpec;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum PrepareError {
    #[error("invalid sample rate {0} Hz")]
    InvalidSampleRate(f64),
    #[error("invalid maximum block size {0}")]
    InvalidBlockSize(usize),
}

/// Layers in mixing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerKind {
    MidBoil = 0,
    LowBoil = 1,
    StereoWidth = 2,
    Droplet = 3,
}

impl LayerKind {
    pub const ALL: [LayerKind; 4] = [
        LayerKind::MidBoil,
        LayerKind::LowBoil,
        LayerKind::StereoWidth,
        LayerKind::Droplet,
    ];
}

/// Stereo buffer sized once at prepare time.
#[derive(Debug, Clone)]
struct ScratchBuffer {
    left: Box<[f32]>,
    right: Box<[f32]>,
}

impl ScratchBuffer {
    fn new(size: usize) -> Self {
        Self {
            left: vec![0.0; size].into_boxed_slice(),
            right: vec![0.0; size].into_boxed_slice(),
        }
    }

    fn capacity(&self) -> usize {
        self.left.len()
    }

    /// Zeroes the first `size` frames and hands them out.
    #[inline]
    fn cleared(&mut self, size: usize) -> (&mut [f32], &mut [f32]) {
        let left = &mut self.left[..size];
        let right = &mut self.right[..size];
        left.fill(0.0);
        right.fill(0.0);
        (left, right)
    }
}

#[derive(Debug, Clone)]
pub struct RainSynth<R> {
    spec: ProcessSpec,

    // Uniform stream shared by mid-boil, gain swells and droplets.
    random: R,

    mid_boil: MidBoilLayer,
    low_boil: LowBoilLayer<R>,
    stereo_width: StereoWidthLayer<R>,
    droplet: DropletLayer,

    scratch: ScratchBuffer,
    layer_peaks: [f32; 4],
}

impl RainSynth<Random> {
    /// Creates a synth driven by seeded generators, prepared with the default
    /// [`ProcessSpec`].
    pub fn new(seed: u32) -> Self {
        Self::with_sources(
            Random::new(seed),
            Random::new(seed ^ 0x5bd1_e995),
            Random::new(seed.wrapping_add(0x9e37_79b9)),
            Random::new(seed.rotate_left(16) ^ 0x85eb_ca6b),
        )
    }
}

#[cfg(feature = "rand")]
impl RainSynth<crate::utils::random::EntropyRandom> {
    /// Creates a synth seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        use crate::utils::random::EntropyRandom;

        Self::with_sources(
            EntropyRandom::new(),
            EntropyRandom::new(),
            EntropyRandom::new(),
            EntropyRandom::new(),
        )
    }
}

impl<R: RandomSource> RainSynth<R> {
    /// Creates a synth from four independent streams: the shared uniform
    /// stream, the low-boil pink stream and the stereo left/right pink streams.
    pub fn with_sources(random: R, low: R, left: R, right: R) -> Self {
        let spec = ProcessSpec::default();
        let mut synth = Self {
            spec,
            random,
            mid_boil: MidBoilLayer::new(),
            low_boil: LowBoilLayer::new(low),
            stereo_width: StereoWidthLayer::new(left, right),
            droplet: DropletLayer::new(),
            scratch: ScratchBuffer::new(spec.maximum_block_size),
            layer_peaks: [0.0; 4],
        };
        synth.prepare_layers();
        synth
    }

    /// (Re)initializes every filter and oscillator and sizes the scratch
    /// buffer. Not realtime safe; may be called again on configuration change.
    pub fn prepare(&mut self, sample_rate: f64, maximum_block_size: usize) -> Result<(), PrepareError> {
        if !sample_rate.is_finite() || sample_rate <= 0.0 {
            warn!("rejecting sample rate {sample_rate}");
            return Err(PrepareError::InvalidSampleRate(sample_rate));
        }
        if maximum_block_size == 0 {
            warn!("rejecting maximum block size {maximum_block_size}");
            return Err(PrepareError::InvalidBlockSize(maximum_block_size));
        }
        if sample_rate > crate::MAX_SAMPLE_RATE {
            warn!("sample rate {sample_rate} Hz is above the tuned range");
        }

        self.spec = ProcessSpec::new(sample_rate, maximum_block_size);
        if self.scratch.capacity() != maximum_block_size {
            self.scratch = ScratchBuffer::new(maximum_block_size);
        }
        self.prepare_layers();

        debug!(
            "prepared rain synth: {} Hz, {} frames, {} channels",
            self.spec.sample_rate, self.spec.maximum_block_size, self.spec.num_channels
        );

        Ok(())
    }

    fn prepare_layers(&mut self) {
        let spec = self.spec;
        Layer::<R>::prepare(&mut self.mid_boil, &spec);
        self.low_boil.prepare(&spec);
        self.stereo_width.prepare(&spec);
        Layer::<R>::prepare(&mut self.droplet, &spec);
        self.layer_peaks = [0.0; 4];
    }

    /// Renders one block into `left` and `right`, overwriting their content.
    ///
    /// # Panics
    ///
    /// If the channels differ in length or exceed the prepared block size.
    pub fn process(&mut self, parameters: &Parameters, left: &mut [f32], right: &mut [f32]) {
        assert_eq!(left.len(), right.len(), "channel length mismatch");
        assert!(
            left.len() <= self.spec.maximum_block_size,
            "block of {} frames exceeds prepared maximum of {}",
            left.len(),
            self.spec.maximum_block_size
        );

        left.fill(0.0);
        right.fill(0.0);

        let size = left.len();
        if size == 0 {
            return;
        }

        self.update(parameters);

        for kind in LayerKind::ALL {
            let (scratch_left, scratch_right) = self.scratch.cleared(size);
            let layer: &mut dyn Layer<R> = match kind {
                LayerKind::MidBoil => &mut self.mid_boil,
                LayerKind::LowBoil => &mut self.low_boil,
                LayerKind::StereoWidth => &mut self.stereo_width,
                LayerKind::Droplet => &mut self.droplet,
            };
            layer.render(&mut self.random, parameters, scratch_left, scratch_right);

            self.layer_peaks[kind as usize] = peak(scratch_left).max(peak(scratch_right));
            add_into(left, scratch_left);
            add_into(right, scratch_right);
        }

        let master_gain = parameters.get(ParamId::MasterGain);
        apply_gain(left, master_gain);
        apply_gain(right, master_gain);
    }

    fn update(&mut self, parameters: &Parameters) {
        Layer::<R>::update(&mut self.mid_boil, parameters);
        self.low_boil.update(parameters);
        self.stereo_width.update(parameters);
        Layer::<R>::update(&mut self.droplet, parameters);
    }

    #[inline]
    pub fn spec(&self) -> &ProcessSpec {
        &self.spec
    }

    /// Peak absolute level each layer contributed to the last block, before
    /// the master gain.
    #[inline]
    pub fn layer_peaks(&self) -> [f32; 4] {
        self.layer_peaks
    }

    #[inline]
    pub fn layer_peak(&self, kind: LayerKind) -> f32 {
        self.layer_peaks[kind as usize]
    }

    /// Number of droplets started since construction.
    #[inline]
    pub fn droplet_triggers(&self) -> u64 {
        self.droplet.triggers()
    }

    #[inline]
    pub fn droplet_finished(&self) -> bool {
        self.droplet.droplet().finished()
    }

    #[inline]
    pub fn droplet_layer(&self) -> &DropletLayer {
        &self.droplet
    }

    pub fn random_mut(&mut self) -> &mut R {
        &mut self.random
    }
}
