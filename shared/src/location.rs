//! Location reconciliation for the citizen report wizard.
//!
//! Four inputs compete for the coordinate attached to a report: GPS embedded
//! in the photo, the device's geolocation fix, a manual pick on the map, and
//! a fixed city-center default. [`LocationResolver`] owns the resolved point,
//! its provenance, and a generation counter that discards device fixes which
//! arrive after a newer request or a manual pick superseded them.

use crate::{DEFAULT_LATITUDE, DEFAULT_LONGITUDE, GpsData};

/// A latitude/longitude pair in WGS84 degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<GpsData> for GeoPoint {
    fn from(gps: GpsData) -> Self {
        Self::new(gps.latitude, gps.longitude)
    }
}

/// Where the currently resolved coordinate came from, in ascending precedence
/// order. Precedence governs asynchronous arrivals: a device fix never
/// replaces photo GPS. A manual pick is a direct user action and is always
/// applied regardless of rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LocationSource {
    Default,
    ManualPick,
    DeviceGps,
    PhotoGps,
}

/// Progress of the device geolocation acquisition, surfaced as a status chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GeoStatus {
    #[default]
    Idle,
    Searching,
    Success,
    Error,
}

/// Token identifying one device geolocation request. A fix is only applied
/// when its token is still current.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceRequestToken(u64);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocationResolver {
    point: GeoPoint,
    source: LocationSource,
    device_generation: u64,
}

impl LocationResolver {
    pub fn new() -> Self {
        Self {
            point: GeoPoint::new(DEFAULT_LATITUDE, DEFAULT_LONGITUDE),
            source: LocationSource::Default,
            device_generation: 0,
        }
    }

    /// The coordinate a submission would carry right now.
    pub fn point(&self) -> GeoPoint {
        self.point
    }

    pub fn source(&self) -> LocationSource {
        self.source
    }

    /// Start a device geolocation request. Any fix still in flight from an
    /// earlier request becomes stale.
    pub fn begin_device_request(&mut self) -> DeviceRequestToken {
        self.device_generation += 1;
        DeviceRequestToken(self.device_generation)
    }

    /// Apply a device fix. Returns `false` (and leaves the resolved point
    /// untouched) when the token is stale or photo GPS already won.
    pub fn apply_device_fix(&mut self, token: DeviceRequestToken, point: GeoPoint) -> bool {
        if token.0 != self.device_generation {
            return false;
        }
        if self.source == LocationSource::PhotoGps {
            return false;
        }
        self.point = point;
        self.source = LocationSource::DeviceGps;
        true
    }

    /// Coordinates extracted from the photo's metadata override everything.
    pub fn apply_photo_gps(&mut self, gps: GpsData) {
        self.point = gps.into();
        self.source = LocationSource::PhotoGps;
    }

    /// A click on the map sets the exact coordinate. Always applied; any
    /// in-flight device request is invalidated so a late fix cannot clobber
    /// the user's choice.
    pub fn apply_manual_pick(&mut self, point: GeoPoint) {
        self.device_generation += 1;
        self.point = point;
        self.source = LocationSource::ManualPick;
    }
}

impl Default for LocationResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gps(lat: f64, lng: f64) -> GpsData {
        GpsData {
            latitude: lat,
            longitude: lng,
        }
    }

    #[test]
    fn starts_at_the_city_default() {
        let resolver = LocationResolver::new();
        assert_eq!(resolver.point(), GeoPoint::new(12.9716, 77.5946));
        assert_eq!(resolver.source(), LocationSource::Default);
    }

    #[test]
    fn photo_gps_overrides_a_device_fix() {
        let mut resolver = LocationResolver::new();
        let token = resolver.begin_device_request();
        assert!(resolver.apply_device_fix(token, GeoPoint::new(12.97, 77.59)));

        resolver.apply_photo_gps(gps(12.90, 77.60));
        assert_eq!(resolver.point(), GeoPoint::new(12.90, 77.60));
        assert_eq!(resolver.source(), LocationSource::PhotoGps);
    }

    #[test]
    fn device_fix_cannot_replace_photo_gps() {
        let mut resolver = LocationResolver::new();
        resolver.apply_photo_gps(gps(12.90, 77.60));

        let token = resolver.begin_device_request();
        assert!(!resolver.apply_device_fix(token, GeoPoint::new(12.97, 77.59)));
        assert_eq!(resolver.point(), GeoPoint::new(12.90, 77.60));
    }

    #[test]
    fn missing_photo_gps_leaves_prior_value() {
        let mut resolver = LocationResolver::new();
        let token = resolver.begin_device_request();
        resolver.apply_device_fix(token, GeoPoint::new(12.97, 77.59));

        // A validation response without gps_data never touches the resolver,
        // so the device fix survives.
        assert_eq!(resolver.point(), GeoPoint::new(12.97, 77.59));
        assert_eq!(resolver.source(), LocationSource::DeviceGps);
    }

    #[test]
    fn stale_device_fix_is_discarded() {
        let mut resolver = LocationResolver::new();
        let old = resolver.begin_device_request();
        let new = resolver.begin_device_request();

        assert!(!resolver.apply_device_fix(old, GeoPoint::new(1.0, 1.0)));
        assert_eq!(resolver.source(), LocationSource::Default);

        assert!(resolver.apply_device_fix(new, GeoPoint::new(2.0, 2.0)));
        assert_eq!(resolver.point(), GeoPoint::new(2.0, 2.0));
    }

    #[test]
    fn manual_pick_always_applies_and_kills_inflight_fix() {
        let mut resolver = LocationResolver::new();
        let token = resolver.begin_device_request();

        resolver.apply_manual_pick(GeoPoint::new(12.95, 77.61));
        assert_eq!(resolver.source(), LocationSource::ManualPick);

        // The fix that was still in flight when the user clicked must lose.
        assert!(!resolver.apply_device_fix(token, GeoPoint::new(12.97, 77.59)));
        assert_eq!(resolver.point(), GeoPoint::new(12.95, 77.61));
    }

    #[test]
    fn manual_pick_overrides_photo_gps() {
        let mut resolver = LocationResolver::new();
        resolver.apply_photo_gps(gps(12.90, 77.60));

        resolver.apply_manual_pick(GeoPoint::new(12.91, 77.62));
        assert_eq!(resolver.point(), GeoPoint::new(12.91, 77.62));
        assert_eq!(resolver.source(), LocationSource::ManualPick);
    }

    #[test]
    fn explicit_rerequest_can_replace_a_manual_pick() {
        let mut resolver = LocationResolver::new();
        resolver.apply_manual_pick(GeoPoint::new(12.91, 77.62));

        let token = resolver.begin_device_request();
        assert!(resolver.apply_device_fix(token, GeoPoint::new(12.97, 77.59)));
        assert_eq!(resolver.source(), LocationSource::DeviceGps);
    }
}
