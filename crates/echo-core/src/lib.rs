//! Engine-independent core of the echolocation radar.
//!
//! Hosts build an [`EchoSession`] from an [`EchoConfig`], feed it a
//! [`Viewer`] pose every frame and draw the returned tiers and radar
//! projections. The free functions [`generate`], [`classify_3d`] and
//! [`project`] are usable on their own.

pub mod config;
pub mod constants;
pub mod error;
pub mod layout;
pub mod projector;
pub mod sampler;
pub mod session;
pub mod tier;
pub mod viewer;

pub use config::*;
pub use constants::*;
pub use error::{EchoError, Result};
pub use layout::*;
pub use projector::*;
pub use sampler::*;
pub use session::*;
pub use tier::*;
pub use viewer::*;

// Shaders bundled as string constants
pub static RADAR_WGSL: &str = include_str!("../shaders/radar.wgsl");
