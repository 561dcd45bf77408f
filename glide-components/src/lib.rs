//! Headless components for glide.
//!
//! Components here own their interaction logic and derive everything a
//! renderer needs to draw them, but never draw themselves. The host feeds
//! layout measurements and gesture events in and paints the projection that
//! comes out.
//!
//! # Example
//!
//! ```
//! use glide_components::slider::{MeasureTarget, Slider, SliderArgs};
//! use glide_ui::{GestureEvent, GestureResponder, Px, PxPosition, PxSize};
//!
//! let mut slider = Slider::new(
//!     SliderArgs::default()
//!         .maximum_value(100.0)
//!         .on_value_change(|value| println!("value: {value}")),
//! )
//! .unwrap();
//!
//! slider.on_layout(MeasureTarget::Container, PxSize::from([300.0, 40.0]));
//! slider.on_layout(MeasureTarget::Track, PxSize::from([300.0, 5.0]));
//! slider.on_layout(MeasureTarget::Thumb, PxSize::from([16.0, 16.0]));
//!
//! let start = GestureEvent::start_at(PxPosition::new(Px(8.0), Px(8.0)));
//! assert!(slider.should_set_responder_on_start(&start));
//! slider.on_grant(&start);
//! slider.on_move(&GestureEvent::with_dx(142.0));
//! slider.on_release(&GestureEvent::with_dx(142.0));
//! assert_eq!(slider.value(), 50.0);
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod slider;
pub mod theme;
