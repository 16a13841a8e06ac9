//! Common test utilities and fixtures for integration tests
//!
//! Payload shapes follow responses captured from the Exchange API v1.

#![allow(dead_code)]

use cryptocom_rest::transport::{HttpRequest, HttpResponse};
use cryptocom_rest::{Credentials, OrderHistoryEntry};
use serde_json::{json, Value};

pub const API_KEY: &str = "test-api-key";
pub const API_SECRET: &str = "test-api-secret";

pub fn credentials() -> Credentials {
    Credentials::new(API_KEY, API_SECRET).unwrap()
}

/// One order as the exchange returns it, stamped at `create_time`
pub fn order_json(order_id: &str, create_time: i64) -> Value {
    json!({
        "account_id": "52e7c00f-1324-5a6z-bfgt-de445bde21a5",
        "order_id": order_id,
        "client_oid": format!("client-{order_id}"),
        "order_type": "LIMIT",
        "time_in_force": "GOOD_TILL_CANCEL",
        "side": "BUY",
        "exec_inst": [],
        "quantity": "0.0100",
        "limit_price": "25000.0",
        "order_value": "250.00",
        "maker_fee_rate": "0.000250",
        "taker_fee_rate": "0.000400",
        "avg_price": "25000.0",
        "cumulative_quantity": "0.0100",
        "cumulative_value": "250.00",
        "cumulative_fee": "0.06250000",
        "status": "FILLED",
        "update_user_id": "fd797356-55db-48c2-a44d-157aabf702e8",
        "order_date": "2024-01-01",
        "instrument_name": "BTC_USD",
        "fee_instrument_name": "USD",
        "create_time": create_time,
        "create_time_ns": create_time.to_string(),
        "update_time": create_time
    })
}

pub fn order(order_id: &str, create_time: i64) -> OrderHistoryEntry {
    serde_json::from_value(order_json(order_id, create_time)).unwrap()
}

pub fn success(method: &str, result: Value) -> Value {
    json!({"id": 1, "method": method, "code": 0, "result": result})
}

pub fn failure(method: &str, code: i64, message: &str) -> Value {
    json!({"id": 1, "method": method, "code": code, "message": message})
}

pub fn order_history_envelope(orders: &[Value]) -> Value {
    success("private/get-order-history", json!({ "data": orders }))
}

pub fn candle_json(timestamp: i64, close: f64) -> Value {
    json!({
        "o": (close - 1.0).to_string(),
        "h": (close + 2.0).to_string(),
        "l": (close - 2.0).to_string(),
        "c": close.to_string(),
        "v": "12.5",
        "t": timestamp
    })
}

pub fn candlestick_envelope(instrument: &str, interval: &str, candles: &[Value]) -> Value {
    json!({
        "id": -1,
        "method": "public/get-candlestick",
        "code": 0,
        "result": {
            "interval": interval,
            "instrument_name": instrument,
            "data": candles
        }
    })
}

/// Parse the JSON envelope of a signed request
pub fn signed_body(request: &HttpRequest) -> Value {
    serde_json::from_str(request.body.as_deref().unwrap()).unwrap()
}

/// Handler emulating the order-history endpoint over fixed timestamps
///
/// Records with `start_time <= t < end_time` are returned oldest first,
/// capped at `limit`. Each record's id is derived from its timestamp.
pub fn order_history_handler(times: Vec<i64>) -> impl Fn(&HttpRequest) -> HttpResponse + Send + Sync {
    move |request: &HttpRequest| {
        let body = signed_body(request);
        let params = &body["params"];
        let start = params["start_time"].as_i64().unwrap();
        let end = params["end_time"].as_i64().unwrap();
        let limit = params["limit"].as_u64().unwrap() as usize;

        let mut matching: Vec<i64> = times.iter().copied().filter(|t| *t >= start && *t < end).collect();
        matching.sort_unstable();
        let page: Vec<Value> = matching
            .into_iter()
            .take(limit)
            .map(|t| order_json(&format!("order-{t}"), t))
            .collect();

        HttpResponse::new(200, order_history_envelope(&page).to_string())
    }
}
