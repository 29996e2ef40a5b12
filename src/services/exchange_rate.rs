use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;
use tracing::warn;
use utoipa::ToSchema;

/// rate used when the exchange rate endpoint is down or slow, the fetched
/// rate only seeds a editable form field so a stale constant is acceptable
pub const FALLBACK_JPY_TO_LKR_RATE: f64 = 1.9775;

/// how long to wait on the exchange rate endpoint before falling back
const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Serialize, Clone, Copy, PartialEq, Eq, Debug, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RateSource {
    Live,
    Fallback,
}

/// A JPY to LKR rate and where it came from, rates are never stored from
/// here, every persisted rate is typed (or accepted) by the user.
#[derive(Serialize, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RateQuote {
    pub rate: f64,
    pub source: RateSource,
}

/// shape of the JPY based rates endpoint response
#[derive(Deserialize)]
struct RatesResponse {
    rates: HashMap<String, f64>,
}

#[derive(Clone)]
pub struct ExchangeRateService {
    http_client: reqwest::Client,
    endpoint: String,
}

impl ExchangeRateService {
    /// # PANICS
    /// panics if the http client cannot be constructed, this should never happen
    pub fn new(endpoint: String) -> ExchangeRateService {
        let http_client = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .unwrap_or_else(|_| panic!("[RATE] failed to build http client"));

        ExchangeRateService {
            http_client,
            endpoint,
        }
    }

    /// fetches the current JPY to LKR rate, falling back to
    /// [`FALLBACK_JPY_TO_LKR_RATE`] on any failure or timeout
    pub async fn jpy_to_lkr(&self) -> RateQuote {
        match self.fetch_lkr_rate().await {
            Ok(rate) => RateQuote {
                rate,
                source: RateSource::Live,
            },
            Err(err) => {
                warn!("[RATE] falling back to constant rate: {}", err);

                RateQuote {
                    rate: FALLBACK_JPY_TO_LKR_RATE,
                    source: RateSource::Fallback,
                }
            }
        }
    }

    async fn fetch_lkr_rate(&self) -> anyhow::Result<f64> {
        let response = self
            .http_client
            .get(&self.endpoint)
            .send()
            .await?
            .error_for_status()?;

        let rates: RatesResponse = response.json().await?;

        rates
            .rates
            .get("LKR")
            .copied()
            .filter(|rate| rate.is_finite() && *rate > 0.0)
            .ok_or_else(|| anyhow::anyhow!("response has no usable LKR rate"))
    }
}
