//! Image morphing by simulated annealing over pixel permutations.
//!
//! Given a *target* image and a *working* image of the same size, `simpix`
//! rearranges the working pixels so that, position by position, their
//! colors approach the target's. Only swaps are ever applied, so the
//! result uses exactly the working image's palette.
//!
//! - [`color`]: normalized RGB and the Euclidean color distance.
//! - [`pixel`]: packed ARGB words to and from color buffers.
//! - [`energy`]: total distance and the O(1) swap delta.
//! - [`anneal`]: Metropolis sampler, annealing controller and run driver.
//!
//! Decoding, encoding and displaying images are left to the caller.
//!
//! # Examples
//!
//! ```
//! use simpix::anneal::{AnnealConfig, MorphRunner};
//! use simpix::pixel::PixelBuffer;
//!
//! let target = PixelBuffer::from_argb(&[0xff000000, 0xffffffff, 0xff000000, 0xffffffff]);
//! let mut source = PixelBuffer::from_argb(&[0xffffffff, 0xff000000, 0xffffffff, 0xff000000]);
//!
//! let config = AnnealConfig::default()
//!     .with_success_threshold(1)
//!     .with_seed(42);
//! let report = MorphRunner::run(&target.colors, &mut source.colors, &config).unwrap();
//!
//! let out = source.to_argb();
//! assert_eq!(out.len(), 4);
//! assert!(report.total_distance <= report.initial_distance);
//! ```

pub mod anneal;
pub mod color;
pub mod energy;
pub mod error;
pub mod pixel;

pub use color::{distance, Color};
pub use energy::{swap_delta, total_distance};
pub use error::{Result, SimpixError};
