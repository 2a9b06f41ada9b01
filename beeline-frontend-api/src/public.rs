use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use beeline_entities::address::AddressPair;

use crate::{into_lookup_response, LookupResponse, Result};

/// Characters that `encodeURIComponent` leaves untouched in browsers.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Public distance API
#[derive(Clone)]
pub struct DistanceApi {
    url: String,
    client: reqwest::Client,
}

impl DistanceApi {
    #[must_use]
    pub fn new(url: String) -> Self {
        let url = url.trim_end_matches('/').to_string();
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }

    #[must_use]
    pub fn distance_url(&self, addresses: &AddressPair) -> String {
        let address1 = utf8_percent_encode(&addresses.address1, URI_COMPONENT);
        let address2 = utf8_percent_encode(&addresses.address2, URI_COMPONENT);
        format!("{}/distance?address1={address1}&address2={address2}", self.url)
    }

    pub async fn distance(&self, addresses: &AddressPair) -> Result<LookupResponse> {
        let url = self.distance_url(addresses);
        let response = self.client.get(&url).send().await?;
        log::debug!("{response:?}");
        into_lookup_response(response).await
    }
}
