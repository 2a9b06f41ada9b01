use beeline_core::gateways::geocode::{GeoCodingGateway, GeocodingError};
use beeline_entities::geo::MapPoint;
use reqwest::header::USER_AGENT;
use serde::Deserialize;

pub const DEFAULT_ENDPOINT: &str = "https://nominatim.openstreetmap.org";
pub const DEFAULT_USER_AGENT: &str = "beeline";

/// Forward geocoding with the OpenStreetMap Nominatim API.
///
/// Nominatim rejects requests without a `User-Agent`.
#[derive(Debug, Clone)]
pub struct Nominatim {
    endpoint: String,
    user_agent: String,
}

/// A single search hit, coordinates are transferred as strings.
#[derive(Debug, Deserialize)]
struct Place {
    lat: String,
    lon: String,
}

impl Default for Nominatim {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT.to_string(), DEFAULT_USER_AGENT.to_string())
    }
}

impl Nominatim {
    pub fn new(endpoint: String, user_agent: String) -> Self {
        let endpoint = endpoint.trim_end_matches('/').to_string();
        Self {
            endpoint,
            user_agent,
        }
    }

    fn search(&self, address: &str) -> reqwest::Result<Vec<Place>> {
        let url = format!("{}/search", self.endpoint);
        let client = reqwest::blocking::Client::new();
        client
            .get(url)
            .query(&[("q", address), ("format", "json"), ("limit", "1")])
            .header(USER_AGENT, &self.user_agent)
            .send()?
            .error_for_status()?
            .json()
    }
}

impl GeoCodingGateway for Nominatim {
    fn resolve_address(&self, address: &str) -> Result<MapPoint, GeocodingError> {
        let places = self
            .search(address)
            .map_err(|err| GeocodingError::Service(err.to_string()))?;
        let Some(Place { lat, lon }) = places.into_iter().next() else {
            return Err(GeocodingError::NotFound);
        };
        log::debug!("Resolved address location '{address}': {lat},{lon}");
        Ok(MapPoint::parse_lat_lng_deg(&lat, &lon)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::{
        matchers::{header, method, path, query_param},
        Mock, MockServer, ResponseTemplate,
    };

    async fn resolve(
        server: &MockServer,
        address: &'static str,
    ) -> Result<MapPoint, GeocodingError> {
        let gw = Nominatim::new(format!("{}/", server.uri()), "beeline-test".to_string());
        tokio::task::spawn_blocking(move || gw.resolve_address(address))
            .await
            .unwrap()
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn resolve_first_hit() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("q", "東京駅 & 丸の内"))
            .and(query_param("format", "json"))
            .and(query_param("limit", "1"))
            .and(header("user-agent", "beeline-test"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"[{"lat":"35.6812362","lon":"139.7671248","display_name":"東京駅"}]"#,
            ))
            .expect(1)
            .mount(&server)
            .await;

        let pos = resolve(&server, "東京駅 & 丸の内").await.unwrap();
        assert_eq!(pos.lat(), 35.6812362);
        assert_eq!(pos.lng(), 139.7671248);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn empty_result_means_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .mount(&server)
            .await;

        let err = resolve(&server, "Atlantis").await.unwrap_err();
        assert!(matches!(err, GeocodingError::NotFound));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn unparsable_coordinates() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(r#"[{"lat":"north","lon":"1.0"}]"#),
            )
            .mount(&server)
            .await;

        let err = resolve(&server, "Somewhere").await.unwrap_err();
        assert!(matches!(err, GeocodingError::InvalidCoordinates(_)));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn service_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = resolve(&server, "Tokyo").await.unwrap_err();
        assert!(matches!(err, GeocodingError::Service(_)));
    }
}
