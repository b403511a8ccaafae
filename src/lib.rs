//! Pure-math core of a tile-based display scaling pipeline.
//!
//! Two independent components, both stateless per call:
//!
//! - [`tile`] — the tile-window coordinate solver: backward/forward mapping
//!   between the output interval a resampler produces and the input interval
//!   it must fetch, for three kernel families (6-tap polyphase, single-tap
//!   accumulate, 4-tap cubic), with exact fixed-point arithmetic and the
//!   even/odd alignment rules the hardware imposes.
//! - [`filmgrain`] — AV1 film grain synthesis: noise-plane generation
//!   (LFSR + Gaussian table + auto-regressive filter), per-channel scaling
//!   LUT construction, and the packed parameter words the grain block
//!   consumes.
//!
//! # Example
//!
//! ```
//! use mml_dsp::{backward, AxisInterval, KernelFamily, ScaleConfig};
//!
//! // Which input pixels does a unity-ratio 6-tap resampler need in order
//! // to produce output pixels 0..=31?
//! let cfg = ScaleConfig {
//!     coeff: 1 << 20,
//!     precision: 1 << 20,
//!     crop: 0,
//!     crop_frac: 0,
//!     max: 1919,
//!     align: Default::default(),
//! };
//! let out = AxisInterval { start: 0, end: 31 };
//! let input = backward(KernelFamily::SixTap, out, &cfg).unwrap();
//! assert_eq!(input.start, 0);
//! assert_eq!(input.end, 36);
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod filmgrain;
pub(crate) mod intops;
pub mod random;
pub(crate) mod tables;
pub mod tile;

pub use error::Error;
pub use filmgrain::{
    pack_pps0, pack_pps1, pack_pps2, pack_pps3, synthesize, FilmGrainParams, GrainPlane,
    ScalingLut, GRAIN_HEIGHT, GRAIN_WIDTH,
};
pub use random::RandomState;
pub use tile::{
    backward, forward, Alignment, AxisInterval, ForwardSolution, KernelFamily, ScaleConfig,
    TapDescriptor, SUBPIXEL_BITS,
};
