use glide_ui::{Px, PxRect, PxSize};
use tracing::{debug, trace};

/// The measured elements of a slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeasureTarget {
    /// The outer container spanning the full slider width.
    Container,
    /// The visual track.
    Track,
    /// The visual thumb.
    Thumb,
}

/// Sizes reported by the layout provider.
///
/// Each target starts unknown. Once all three have been reported the cache
/// is ready, and it stays ready until the slider is dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SliderGeometry {
    container: Option<PxSize>,
    track: Option<PxSize>,
    thumb: Option<PxSize>,
    all_measured: bool,
}

impl SliderGeometry {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a measurement. Returns `false` when `size` matches what was
    /// already recorded for `target`, in which case nothing changes.
    pub fn record_measurement(&mut self, target: MeasureTarget, size: PxSize) -> bool {
        let slot = match target {
            MeasureTarget::Container => &mut self.container,
            MeasureTarget::Track => &mut self.track,
            MeasureTarget::Thumb => &mut self.thumb,
        };
        if *slot == Some(size) {
            trace!(?target, "redundant measurement ignored");
            return false;
        }
        *slot = Some(size);

        if !self.all_measured
            && self.container.is_some()
            && self.track.is_some()
            && self.thumb.is_some()
        {
            self.all_measured = true;
            debug!(
                container = ?self.container,
                track = ?self.track,
                thumb = ?self.thumb,
                "slider geometry ready"
            );
        }
        true
    }

    /// Whether container, track and thumb have all been measured.
    pub fn all_measured(&self) -> bool {
        self.all_measured
    }

    /// Container size, zero until measured.
    pub fn container(&self) -> PxSize {
        self.container.unwrap_or_default()
    }

    /// Track size, zero until measured.
    pub fn track(&self) -> PxSize {
        self.track.unwrap_or_default()
    }

    /// Thumb size, zero until measured.
    pub fn thumb(&self) -> PxSize {
        self.thumb.unwrap_or_default()
    }

    /// How far the touch target extends past the visual thumb (width) and
    /// past the container (height). Zero before the geometry is ready.
    pub fn touch_overflow_size(&self, thumb_touch_size: PxSize) -> PxSize {
        if !self.all_measured {
            return PxSize::ZERO;
        }
        PxSize::new(
            (thumb_touch_size.width - self.thumb().width).max(Px::ZERO),
            (thumb_touch_size.height - self.container().height).max(Px::ZERO),
        )
    }

    /// Touch target around a thumb whose left edge is at `thumb_left`.
    ///
    /// Coordinates are relative to the container grown by half the touch
    /// overflow on each side, which is the frame gesture locations arrive in.
    pub fn thumb_touch_rect(&self, thumb_left: Px, thumb_touch_size: PxSize) -> PxRect {
        let overflow = self.touch_overflow_size(thumb_touch_size);
        let thumb = self.thumb();
        let container = self.container();
        PxRect::new(
            overflow.width / 2.0 + thumb_left + (thumb.width - thumb_touch_size.width) / 2.0,
            overflow.height / 2.0 + (container.height - thumb_touch_size.height) / 2.0,
            thumb_touch_size.width,
            thumb_touch_size.height,
        )
    }
}
