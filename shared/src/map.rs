//! Slippy-map geometry: Web Mercator projection and 256 px raster tiles.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

pub const TILE_SIZE: f64 = 256.0;
pub const EARTH_CIRCUMFERENCE_M: f64 = 40_075_016.686;
pub const TILE_URL_TEMPLATE: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
const SUBDOMAINS: [&str; 3] = ["a", "b", "c"];
// Mercator is undefined at the poles.
const MAX_SIN_LAT: f64 = 0.9999;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

fn world_size(zoom: u8) -> f64 {
    TILE_SIZE * 2f64.powi(zoom as i32)
}

/// Position of `point` in world pixels at `zoom`, origin at the north-west
/// corner.
pub fn project(point: LatLng, zoom: u8) -> (f64, f64) {
    let size = world_size(zoom);
    let x = (point.lng + 180.0) / 360.0 * size;
    let sin = point.lat.to_radians().sin().clamp(-MAX_SIN_LAT, MAX_SIN_LAT);
    let y = (0.5 - ((1.0 + sin) / (1.0 - sin)).ln() / (4.0 * PI)) * size;
    (x, y)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pub x: u32,
    pub y: u32,
    pub z: u8,
    /// Offset of the tile's top-left corner inside the viewport.
    pub left: f64,
    pub top: f64,
}

impl Tile {
    pub fn url(&self) -> String {
        let subdomain = SUBDOMAINS[((self.x + self.y) % 3) as usize];
        TILE_URL_TEMPLATE
            .replace("{s}", subdomain)
            .replace("{z}", &self.z.to_string())
            .replace("{x}", &self.x.to_string())
            .replace("{y}", &self.y.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapView {
    pub center: LatLng,
    pub zoom: u8,
    pub width: f64,
    pub height: f64,
}

impl MapView {
    /// The outbreak map opens on Pune.
    pub const OUTBREAK: MapView = MapView {
        center: LatLng::new(18.5204, 73.8567),
        zoom: 10,
        width: 800.0,
        height: 400.0,
    };

    fn origin(&self) -> (f64, f64) {
        let (cx, cy) = project(self.center, self.zoom);
        (cx - self.width / 2.0, cy - self.height / 2.0)
    }

    pub fn to_screen(&self, point: LatLng) -> (f64, f64) {
        let (ox, oy) = self.origin();
        let (x, y) = project(point, self.zoom);
        (x - ox, y - oy)
    }

    pub fn meters_per_pixel(&self, lat: f64) -> f64 {
        EARTH_CIRCUMFERENCE_M * lat.to_radians().cos() / world_size(self.zoom)
    }

    pub fn meters_to_pixels(&self, meters: f64, lat: f64) -> f64 {
        meters / self.meters_per_pixel(lat)
    }

    /// Tiles intersecting the viewport. Columns wrap around the antimeridian;
    /// rows past the poles are dropped.
    pub fn tiles(&self) -> Vec<Tile> {
        let (ox, oy) = self.origin();
        let count = 1i64 << self.zoom;
        let first_col = (ox / TILE_SIZE).floor() as i64;
        let last_col = ((ox + self.width) / TILE_SIZE).ceil() as i64 - 1;
        let first_row = ((oy / TILE_SIZE).floor() as i64).max(0);
        let last_row = (((oy + self.height) / TILE_SIZE).ceil() as i64 - 1).min(count - 1);

        let mut tiles = Vec::new();
        for row in first_row..=last_row {
            for col in first_col..=last_col {
                tiles.push(Tile {
                    x: col.rem_euclid(count) as u32,
                    y: row as u32,
                    z: self.zoom,
                    left: col as f64 * TILE_SIZE - ox,
                    top: row as f64 * TILE_SIZE - oy,
                });
            }
        }
        tiles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    #[test]
    fn null_island_is_world_center() {
        let (x, y) = project(LatLng::new(0.0, 0.0), 0);
        assert!(close(x, 128.0, 1e-9));
        assert!(close(y, 128.0, 1e-9));
    }

    #[test]
    fn north_is_up() {
        let (_, north) = project(LatLng::new(45.0, 0.0), 3);
        let (_, south) = project(LatLng::new(-45.0, 0.0), 3);
        assert!(north < south);
    }

    #[test]
    fn center_lands_mid_viewport() {
        let view = MapView::OUTBREAK;
        let (x, y) = view.to_screen(view.center);
        assert!(close(x, 400.0, 1e-6));
        assert!(close(y, 200.0, 1e-6));
    }

    #[test]
    fn equator_scale_at_zoom_zero() {
        let view = MapView { zoom: 0, ..MapView::OUTBREAK };
        assert!(close(view.meters_per_pixel(0.0), 156_543.034, 0.01));
    }

    #[test]
    fn two_km_at_zoom_ten_is_about_fourteen_pixels() {
        let view = MapView::OUTBREAK;
        let px = view.meters_to_pixels(2000.0, 18.5);
        // ~144 m per pixel at zoom 10 and 18.5 degrees.
        assert!(px > 13.0 && px < 15.0, "got {px}");
    }

    #[test]
    fn tiles_cover_viewport() {
        let view = MapView::OUTBREAK;
        let tiles = view.tiles();
        assert!(!tiles.is_empty());
        assert!(tiles.iter().all(|t| t.z == 10));
        let min_left = tiles.iter().map(|t| t.left).fold(f64::INFINITY, f64::min);
        let min_top = tiles.iter().map(|t| t.top).fold(f64::INFINITY, f64::min);
        let max_right = tiles.iter().map(|t| t.left + TILE_SIZE).fold(f64::NEG_INFINITY, f64::max);
        let max_bottom = tiles.iter().map(|t| t.top + TILE_SIZE).fold(f64::NEG_INFINITY, f64::max);
        assert!(min_left <= 0.0 && min_top <= 0.0);
        assert!(max_right >= view.width && max_bottom >= view.height);
    }

    #[test]
    fn columns_wrap_at_antimeridian() {
        let view = MapView {
            center: LatLng::new(0.0, 179.9),
            zoom: 1,
            width: 256.0,
            height: 256.0,
        };
        let xs: Vec<u32> = view.tiles().iter().map(|t| t.x).collect();
        assert!(xs.contains(&0));
        assert!(xs.contains(&1));
        assert!(xs.iter().all(|&x| x < 2));
    }

    #[test]
    fn tile_url_rotates_subdomain() {
        let tile = Tile { x: 720, y: 460, z: 10, left: 0.0, top: 0.0 };
        assert_eq!(tile.url(), "https://b.tile.openstreetmap.org/10/720/460.png");
    }
}
