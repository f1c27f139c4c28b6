/*
[INPUT]:  Query parameters and API key authentication
[OUTPUT]: User account data (balances, private trade history)
[POS]:    HTTP layer - account data endpoints (require X-API-Key)
[UPDATE]: When adding new account endpoints or changing query parameters
*/

use reqwest::Method;

use crate::http::{Result, WallexClient};
use crate::types::{BalancesResponse, UserTradesFilter, UserTradesResponse};

impl WallexClient {
    /// Retrieve wallet balances for all assets associated with the API key
    ///
    /// GET /v1/account/balances
    pub async fn get_balances(&self) -> Result<BalancesResponse> {
        self.request(Method::GET, "/account/balances", "v1", true)
            .await
    }

    /// Retrieve private trade history, optionally filtered server-side by
    /// symbol and side
    ///
    /// GET /v1/account/trades[?symbol={symbol}&side={side}]
    pub async fn get_user_trades(
        &self,
        filter: Option<&UserTradesFilter>,
    ) -> Result<UserTradesResponse> {
        match filter {
            Some(filter) => {
                self.request_with(Method::GET, "/account/trades", "v1", true, filter)
                    .await
            }
            None => {
                self.request(Method::GET, "/account/trades", "v1", true)
                    .await
            }
        }
    }
}
