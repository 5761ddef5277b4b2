//! Currency definition, state, conversion, and cross-chain transfer queries.

use serde_json::{json, Map, Value};

use crate::client::VerusClient;
use crate::error::ClientError;
use crate::response::RpcValue;

impl VerusClient {
    /// Estimates converting `amount` of `from_currency` into `to_currency`,
    /// optionally routed `via` an intermediate basket currency.
    pub fn estimate_conversion(
        &self,
        amount: f64,
        from_currency: &str,
        to_currency: &str,
        via: Option<&str>,
    ) -> Result<RpcValue, ClientError> {
        let mut conversion = Map::new();
        conversion.insert("currency".to_owned(), json!(from_currency));
        conversion.insert("convertto".to_owned(), json!(to_currency));
        conversion.insert("amount".to_owned(), json!(amount));
        if let Some(via) = via {
            conversion.insert("via".to_owned(), json!(via));
        }
        self.call("estimateconversion", vec![Value::Object(conversion)])
    }

    /// Returns the definition of a currency by name or i-address.
    pub fn get_currency(&self, currency: &str) -> Result<RpcValue, ClientError> {
        self.call("getcurrency", vec![json!(currency)])
    }

    /// Returns the state of a currency.
    ///
    /// `range` is the daemon's optional second positional slot: a block
    /// height or a `start,end,step` range. When only
    /// `conversion_data_currency` is wanted, the daemon still expects that
    /// slot to be filled, so an omitted range is sent as the empty-string
    /// placeholder.
    pub fn get_currency_state(
        &self,
        currency: &str,
        range: Option<&str>,
        conversion_data_currency: Option<&str>,
    ) -> Result<RpcValue, ClientError> {
        let mut params = vec![json!(currency), json!(range.unwrap_or(""))];
        if let Some(conversion_data_currency) = conversion_data_currency {
            params.push(json!(conversion_data_currency));
        }
        self.call("getcurrencystate", params)
    }

    /// Returns import transactions into `currency`, optionally bounded to
    /// the `[start_height, end_height]` block range.
    ///
    /// An omitted start with a given end is sent as the empty-string
    /// placeholder so the end stays in its positional slot.
    pub fn get_imports(
        &self,
        currency: &str,
        start_height: Option<u64>,
        end_height: Option<u64>,
    ) -> Result<RpcValue, ClientError> {
        self.call("getimports", height_range_params(currency, start_height, end_height))
    }

    /// Returns export transactions from `currency`, optionally bounded to
    /// the `[start_height, end_height]` block range.
    pub fn get_exports(
        &self,
        currency: &str,
        start_height: Option<u64>,
        end_height: Option<u64>,
    ) -> Result<RpcValue, ClientError> {
        self.call("getexports", height_range_params(currency, start_height, end_height))
    }
}

/// `currency` plus the optional height range, with the placeholder rule
/// shared by `getimports` and `getexports`.
fn height_range_params(
    currency: &str,
    start_height: Option<u64>,
    end_height: Option<u64>,
) -> Vec<Value> {
    let mut params = vec![json!(currency)];
    match start_height {
        Some(start_height) => params.push(json!(start_height)),
        None => params.push(json!("")),
    }
    if let Some(end_height) = end_height {
        params.push(json!(end_height));
    }
    params
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::rpc::mock::MockTransport;
    use crate::test_util::mock_client;

    #[test]
    fn estimate_conversion_sends_one_object_param() {
        let (client, mock) = mock_client(MockTransport::builder().build());
        client
            .estimate_conversion(100.0, "vrsc", "dai.veth", None)
            .unwrap();
        client
            .estimate_conversion(5.5, "vrsc", "mkr.veth", Some("bridge.veth"))
            .unwrap();

        let requests = mock.requests();
        assert_eq!(requests[0].method, "estimateconversion");
        assert_eq!(
            requests[0].params,
            vec![json!({"currency": "vrsc", "convertto": "dai.veth", "amount": 100.0})]
        );
        assert_eq!(
            requests[1].params,
            vec![json!({
                "currency": "vrsc",
                "convertto": "mkr.veth",
                "amount": 5.5,
                "via": "bridge.veth",
            })]
        );
    }

    #[test]
    fn get_currency_state_fills_the_range_slot_with_a_placeholder() {
        let (client, mock) = mock_client(MockTransport::builder().build());
        client.get_currency_state("vrsc", None, None).unwrap();
        client
            .get_currency_state("vrsc", Some("10,100,10"), Some("dai.veth"))
            .unwrap();

        let requests = mock.requests();
        assert_eq!(requests[0].params, vec![json!("vrsc"), json!("")]);
        assert_eq!(
            requests[1].params,
            vec![json!("vrsc"), json!("10,100,10"), json!("dai.veth")]
        );
    }

    #[test]
    fn get_imports_forwards_the_full_height_range() {
        let (client, mock) = mock_client(MockTransport::builder().build());
        client.get_imports("bridge.veth", None, None).unwrap();
        client.get_imports("bridge.veth", Some(10), Some(20)).unwrap();
        client.get_imports("bridge.veth", None, Some(20)).unwrap();

        let requests = mock.requests();
        assert_eq!(requests[0].method, "getimports");
        assert_eq!(requests[0].params, vec![json!("bridge.veth"), json!("")]);
        assert_eq!(
            requests[1].params,
            vec![json!("bridge.veth"), json!(10), json!(20)]
        );
        assert_eq!(
            requests[2].params,
            vec![json!("bridge.veth"), json!(""), json!(20)]
        );
    }

    #[test]
    fn get_exports_builds_params_like_get_imports() {
        let (client, mock) = mock_client(MockTransport::builder().build());
        client.get_exports("vrsc", Some(100), None).unwrap();

        let requests = mock.requests();
        assert_eq!(requests[0].method, "getexports");
        assert_eq!(requests[0].params, vec![json!("vrsc"), json!(100)]);
    }
}
