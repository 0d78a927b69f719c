//! Fixed marker and zone placement for the simulated map.
//!
//! The map is not projected: markers sit at a fixed table of percentage
//! offsets chosen by roster index, and zone overlays are hand-placed.
//! Latitude/longitude on the records are ignored here.

#[cfg(test)]
#[path = "map_layout_test.rs"]
mod map_layout_test;

/// Position of an element inside the map, as CSS percentages.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapOffset {
    pub left_pct: f64,
    pub top_pct: f64,
}

impl MapOffset {
    /// Inline `left`/`top` style.
    #[must_use]
    pub fn style(self) -> String {
        format!("left:{}%;top:{}%;", self.left_pct, self.top_pct)
    }
}

/// Marker slots, reused cyclically past the end of the table.
pub const MARKER_SLOTS: [MapOffset; 3] = [
    MapOffset { left_pct: 18.0, top_pct: 28.0 },
    MapOffset { left_pct: 55.0, top_pct: 45.0 },
    MapOffset { left_pct: 72.0, top_pct: 38.0 },
];

/// Offset for the marker of the roster entry at `index`.
#[must_use]
pub fn marker_offset(index: usize) -> MapOffset {
    MARKER_SLOTS[index % MARKER_SLOTS.len()]
}

/// Horizontal anchor for a zone overlay.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Anchor {
    Left(f64),
    Right(f64),
}

/// A dashed safe-zone circle drawn on the map.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoneOverlay {
    pub label: &'static str,
    pub anchor: Anchor,
    pub top_pct: f64,
    /// Circle diameter in pixels.
    pub diameter_px: u32,
}

impl ZoneOverlay {
    /// Inline position and size style.
    #[must_use]
    pub fn style(&self) -> String {
        let horizontal = match self.anchor {
            Anchor::Left(pct) => format!("left:{pct}%;"),
            Anchor::Right(pct) => format!("right:{pct}%;"),
        };
        format!(
            "{horizontal}top:{}%;width:{d}px;height:{d}px;",
            self.top_pct,
            d = self.diameter_px
        )
    }
}

pub const ZONE_OVERLAYS: [ZoneOverlay; 2] = [
    ZoneOverlay { label: "Home", anchor: Anchor::Left(15.0), top_pct: 25.0, diameter_px: 128 },
    ZoneOverlay { label: "School", anchor: Anchor::Right(20.0), top_pct: 35.0, diameter_px: 96 },
];
