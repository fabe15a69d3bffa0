//! The place-lookup seam: resolving a city/country pair to coordinates.
//!
//! Geocoding itself lives outside this crate (a CSV-backed gazetteer, a web
//! service, a fixture). Callers construct an implementation and inject it
//! wherever coordinates are needed; nothing here holds global state.

/// A latitude/longitude pair in decimal degrees, latitude first.
///
/// This is the shape a [`PlaceLookup`] resolves to and what a caller passes
/// on to the weather provider's endpoints.
///
/// # Examples
///
/// ```
/// use meteoview::LatLon;
///
/// let jaipur = LatLon(26.92, 75.79);
/// let (lat, lon) = (jaipur.0, jaipur.1);
/// assert!(lat > 0.0 && lon > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon(pub f64, pub f64);

/// Resolves a city/country pair to coordinates.
///
/// Matching semantics are up to the implementation; the same city name can
/// exist in several countries, so both parts are always passed.
pub trait PlaceLookup {
    fn coords(&self, city: &str, country: &str) -> Option<LatLon>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StaticLookup {
        entries: Vec<(&'static str, &'static str, LatLon)>,
    }

    impl PlaceLookup for StaticLookup {
        fn coords(&self, city: &str, country: &str) -> Option<LatLon> {
            let city = city.trim().to_lowercase();
            let country = country.trim().to_lowercase();
            self.entries
                .iter()
                .find(|(c, n, _)| *c == city && *n == country)
                .map(|(_, _, coords)| *coords)
        }
    }

    #[test]
    fn lookup_disambiguates_by_country() {
        let lookup = StaticLookup {
            entries: vec![
                ("kota", "india", LatLon(25.18, 75.83)),
                ("kota", "japan", LatLon(34.30, 133.94)),
            ],
        };
        assert_eq!(
            lookup.coords(" Kota ", "India"),
            Some(LatLon(25.18, 75.83))
        );
        assert_eq!(
            lookup.coords("Kota", "Japan"),
            Some(LatLon(34.30, 133.94))
        );
        assert_eq!(lookup.coords("Kota", "Brazil"), None);
    }
}
