//! Trading endpoints for order management
//!
//! These endpoints require authentication.

use cryptocom_types::{
    CreateOrderResult, ExecInst, Method, OrderSide, OrderType, Params, TimeInForce,
};
use rust_decimal::Decimal;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::error::{RestError, RestResult};
use crate::request::RequestBuilder;
use crate::transport::HttpTransport;

/// Parameters for `private/create-order`
#[derive(Debug, Clone, PartialEq)]
pub struct CreateOrderRequest {
    pub instrument_name: String,
    pub side: OrderSide,
    pub order_type: OrderType,
    pub quantity: Decimal,
    pub price: Option<Decimal>,
    pub client_oid: Option<String>,
    pub time_in_force: Option<TimeInForce>,
    pub exec_inst: Vec<ExecInst>,
}

impl CreateOrderRequest {
    /// Limit order at `price`
    pub fn limit(
        instrument_name: impl Into<String>,
        side: OrderSide,
        quantity: Decimal,
        price: Decimal,
    ) -> Self {
        Self {
            instrument_name: instrument_name.into(),
            side,
            order_type: OrderType::Limit,
            quantity,
            price: Some(price),
            client_oid: None,
            time_in_force: None,
            exec_inst: Vec::new(),
        }
    }

    pub fn buy_limit(instrument_name: impl Into<String>, quantity: Decimal, price: Decimal) -> Self {
        Self::limit(instrument_name, OrderSide::Buy, quantity, price)
    }

    pub fn sell_limit(instrument_name: impl Into<String>, quantity: Decimal, price: Decimal) -> Self {
        Self::limit(instrument_name, OrderSide::Sell, quantity, price)
    }

    pub fn with_client_oid(mut self, client_oid: impl Into<String>) -> Self {
        self.client_oid = Some(client_oid.into());
        self
    }

    pub fn with_time_in_force(mut self, tif: TimeInForce) -> Self {
        self.time_in_force = Some(tif);
        self
    }

    /// Reject the order instead of letting it take liquidity
    pub fn post_only(mut self) -> Self {
        if !self.exec_inst.contains(&ExecInst::PostOnly) {
            self.exec_inst.push(ExecInst::PostOnly);
        }
        self
    }

    /// Check the request and convert it to wire parameters
    ///
    /// Price and quantity are sent as decimal strings.
    pub fn to_params(&self) -> RestResult<Params> {
        if self.instrument_name.trim().is_empty() {
            return Err(RestError::InvalidParameter("instrument_name is empty".into()));
        }
        if self.quantity <= Decimal::ZERO {
            return Err(RestError::InvalidParameter(format!(
                "quantity must be positive, got {}",
                self.quantity
            )));
        }
        if self.order_type == OrderType::Unknown || self.time_in_force == Some(TimeInForce::Unknown) {
            return Err(RestError::InvalidParameter(
                "order type and time in force must be known values".into(),
            ));
        }
        match (self.order_type, self.price) {
            (OrderType::Limit, None) => {
                return Err(RestError::InvalidParameter("limit order requires a price".into()))
            }
            (_, Some(price)) if price <= Decimal::ZERO => {
                return Err(RestError::InvalidParameter(format!(
                    "price must be positive, got {price}"
                )))
            }
            _ => {}
        }

        let mut params = Params::new();
        params.insert("instrument_name".into(), self.instrument_name.clone().into());
        params.insert("side".into(), self.side.as_str().into());
        params.insert("type".into(), self.order_type.as_str().into());
        params.insert("quantity".into(), self.quantity.normalize().to_string().into());
        params.insert(
            "price".into(),
            self.price.map(|p| p.normalize().to_string()).into(),
        );
        params.insert("client_oid".into(), self.client_oid.clone().into());
        params.insert(
            "time_in_force".into(),
            self.time_in_force.map(|t| t.as_str()).into(),
        );
        if !self.exec_inst.is_empty() {
            let inst: Vec<Value> = self.exec_inst.iter().map(|e| e.as_str().into()).collect();
            params.insert("exec_inst".into(), Value::Array(inst));
        }
        Ok(params)
    }
}

/// Trading endpoints for order management
pub struct TradingEndpoints<'a, T> {
    transport: &'a T,
    builder: &'a RequestBuilder,
}

impl<'a, T: HttpTransport> TradingEndpoints<'a, T> {
    pub fn new(transport: &'a T, builder: &'a RequestBuilder) -> Self {
        Self { transport, builder }
    }

    /// Place a new order
    #[instrument(skip(self, order), fields(instrument = %order.instrument_name, side = ?order.side, order_type = ?order.order_type))]
    pub async fn create_order(&self, order: &CreateOrderRequest) -> RestResult<CreateOrderResult> {
        let params = order.to_params()?;
        let result: CreateOrderResult =
            super::call(self.transport, self.builder, Method::CreateOrder, params).await?;
        debug!(order_id = %result.order_id, "Order accepted");
        Ok(result)
    }

    /// Place a limit order
    pub async fn create_limit_order(
        &self,
        instrument: &str,
        side: OrderSide,
        quantity: Decimal,
        price: Decimal,
    ) -> RestResult<CreateOrderResult> {
        self.create_order(&CreateOrderRequest::limit(instrument, side, quantity, price))
            .await
    }

    pub async fn buy_limit(
        &self,
        instrument: &str,
        quantity: Decimal,
        price: Decimal,
    ) -> RestResult<CreateOrderResult> {
        self.create_limit_order(instrument, OrderSide::Buy, quantity, price)
            .await
    }

    pub async fn sell_limit(
        &self,
        instrument: &str,
        quantity: Decimal,
        price: Decimal,
    ) -> RestResult<CreateOrderResult> {
        self.create_limit_order(instrument, OrderSide::Sell, quantity, price)
            .await
    }

    /// Cancel an order by id
    #[instrument(skip(self))]
    pub async fn cancel_order(&self, order_id: &str) -> RestResult<()> {
        let mut params = Params::new();
        params.insert("order_id".into(), order_id.into());
        super::send(self.transport, self.builder, Method::CancelOrder, params).await?;
        Ok(())
    }

    /// Cancel all open orders, optionally for one instrument only
    #[instrument(skip(self))]
    pub async fn cancel_all_orders(&self, instrument: Option<&str>) -> RestResult<()> {
        let mut params = Params::new();
        params.insert("instrument_name".into(), instrument.into());
        super::send(self.transport, self.builder, Method::CancelAllOrders, params).await?;
        Ok(())
    }
}
