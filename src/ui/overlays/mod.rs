// SPDX-License-Identifier: MPL-2.0
//! Modal overlay stack.
//!
//! Any screen can open an overlay through the root's [`Manager`]; the root
//! view layers the open overlays over the current page with [`modal::view`].
//! Overlays close from the header button, a backdrop press, the escape key
//! (topmost only) or programmatically, each path gated by its own flag.

mod manager;
pub mod modal;
mod overlay;

pub use manager::{Manager, Message as OverlayMessage};
pub use overlay::{Overlay, OverlayConfig, OverlayId, Size};
