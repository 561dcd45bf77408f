//! Framework primitives consumed by glide components.
//!
//! A glide component does not own a renderer, a layout engine or a gesture
//! arena. It is driven by a host runtime through the small set of interfaces
//! collected here:
//!
//! - [`px`] and [`dp`] for logical pixel geometry reported by layout,
//! - [`gesture`] for the pan responder protocol and a thin recognizer,
//! - [`animation`] for cosmetic transitions and interpolation,
//! - [`theme`] and [`color`] for read-only light/dark color selection,
//! - [`prop`] for comparable callback handles.
//!
//! # Example
//!
//! ```
//! use glide_ui::{CallbackWith, Px, PxSize};
//!
//! let size = PxSize::new(Px(300.0), Px(40.0));
//! let on_change = CallbackWith::new(|value: f32| println!("value = {value}"));
//! on_change.call(size.width.to_f32());
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod animation;
pub mod color;
pub mod dp;
pub mod gesture;
pub mod prop;
pub mod px;
pub mod theme;

pub use crate::{
    animation::{AnimationConfig, Transition, interpolate},
    color::Color,
    dp::Dp,
    gesture::{GestureEvent, GestureResponder, PanRecognizer, PointerSample},
    prop::CallbackWith,
    px::{Px, PxPosition, PxRect, PxSize},
    theme::{SharedTheme, StaticTheme, ThemeMode, ThemeProvider},
};
