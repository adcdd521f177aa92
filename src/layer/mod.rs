//! Parallel signal paths mixed by the synth.
//!
//! Every layer follows the same block shape: [`Layer::update`] pulls a
//! parameter snapshot into its filters and oscillators, then
//! [`Layer::render`] runs the per-sample loop and adds its contribution onto
//! the stereo slices it is handed.

pub mod droplet_layer;
pub mod low_boil;
pub mod mid_boil;
pub mod random_bandpass;
pub mod stereo_width;

use crate::parameters::Parameters;
use crate::utils::random::RandomSource;
use crate::ProcessSpec;

pub trait Layer<R: RandomSource> {
    /// Fixes the sample rate and block size. Not realtime safe.
    fn prepare(&mut self, spec: &ProcessSpec);

    /// Reads this layer's controls for the coming block.
    fn update(&mut self, parameters: &Parameters);

    /// Adds one block onto `left` and `right`, drawing from the shared stream.
    fn render(
        &mut self,
        random: &mut R,
        parameters: &Parameters,
        left: &mut [f32],
        right: &mut [f32],
    );
}
