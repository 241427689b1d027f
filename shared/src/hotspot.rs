use serde::{Deserialize, Serialize};

use crate::map::LatLng;

/// Meters of circle radius per unit of hotspot intensity.
pub const HOTSPOT_RADIUS_SCALE: f64 = 2000.0;

/// One geocoded case-density sample, as served by `GET /api/heatmap-data`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hotspot {
    pub lat: f64,
    pub lng: f64,
    pub intensity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleOverlay {
    pub center: LatLng,
    pub radius_m: f64,
}

impl Hotspot {
    pub fn overlay(&self) -> CircleOverlay {
        CircleOverlay {
            center: LatLng::new(self.lat, self.lng),
            radius_m: self.intensity * HOTSPOT_RADIUS_SCALE,
        }
    }
}

impl CircleOverlay {
    /// Zero, negative or non-finite radii have no SVG rendering.
    pub fn is_drawable(&self) -> bool {
        self.radius_m.is_finite() && self.radius_m > 0.0
    }
}

/// One overlay per hotspot, in order. Duplicates are drawn twice.
pub fn overlays(hotspots: &[Hotspot]) -> Vec<CircleOverlay> {
    hotspots.iter().map(Hotspot::overlay).collect()
}

/// Per-visit lifecycle of the hotspot list.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum HotspotLoad {
    #[default]
    Idle,
    Loading,
    Loaded(Vec<Hotspot>),
    Empty,
}

impl HotspotLoad {
    /// Moves `Idle` to `Loading`. Returns false if a fetch was already issued
    /// for this visit.
    pub fn start(&mut self) -> bool {
        if *self != HotspotLoad::Idle {
            return false;
        }
        *self = HotspotLoad::Loading;
        true
    }

    /// Replaces the list wholesale. Failures and empty lists both land in
    /// `Empty`.
    pub fn finish<E>(&mut self, outcome: Result<Vec<Hotspot>, E>) {
        *self = match outcome {
            Ok(hotspots) if !hotspots.is_empty() => HotspotLoad::Loaded(hotspots),
            _ => HotspotLoad::Empty,
        };
    }

    pub fn hotspots(&self) -> &[Hotspot] {
        match self {
            HotspotLoad::Loaded(hotspots) => hotspots,
            _ => &[],
        }
    }

    pub fn overlays(&self) -> Vec<CircleOverlay> {
        overlays(self.hotspots())
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, HotspotLoad::Loading)
    }
}
