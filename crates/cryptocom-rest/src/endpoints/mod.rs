//! API endpoint implementations

pub mod account;
pub mod market;
pub mod trading;

pub use account::AccountEndpoints;
pub use market::MarketEndpoints;
pub use trading::{CreateOrderRequest, TradingEndpoints};

use cryptocom_types::{Method, Params, ResponseEnvelope};
use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use crate::error::RestResult;
use crate::request::{Auth, RequestBuilder};
use crate::response::validate;
use crate::transport::HttpTransport;

/// Build, send and validate one call
///
/// Private methods are signed, public ones are not.
pub(crate) async fn send<T: HttpTransport>(
    transport: &T,
    builder: &RequestBuilder,
    method: Method,
    params: Params,
) -> RestResult<ResponseEnvelope> {
    let auth = if method.is_private() {
        Auth::Signed
    } else {
        Auth::Public
    };
    let request = builder.build(method.as_str(), params, auth, None)?;

    debug!(%method, url = %request.url, "Sending request");
    let response = transport.send(request).await?;
    debug!(%method, status = response.status, "Received response");
    trace!(body = %response.body, "Response body");

    validate(response.status, &response.body)
}

/// [`send`] and deserialize the result payload
pub(crate) async fn call<T: HttpTransport, R: DeserializeOwned>(
    transport: &T,
    builder: &RequestBuilder,
    method: Method,
    params: Params,
) -> RestResult<R> {
    Ok(send(transport, builder, method, params).await?.into_result()?)
}
