//! Generic order document builder.
//!
//! `OrderBuilder` is a plain accumulator: every setter records a field, and
//! [`OrderBuilder::build`] hands back the [`Order`] document ready for
//! serialization into the brokerage's order-submission schema. Unset fields
//! are omitted from the serialized document entirely.

use serde::{Deserialize, Serialize};

use super::common::{
    AssetType, ComplexOrderStrategyType, Duration, OptionInstruction, OrderStrategyType,
    OrderType, Session,
};

/// The instrument referenced by one order leg.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instrument {
    pub symbol: String,
    pub asset_type: AssetType,
}

/// One buy/sell instruction line within an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLeg {
    pub instruction: OptionInstruction,
    pub instrument: Instrument,
    pub quantity: u32,
}

/// A declarative order description, serializable to the submission schema.
///
/// Field names serialize in camelCase; enum tags in SCREAMING_SNAKE_CASE.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<Session>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<Duration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_type: Option<OrderType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complex_order_strategy_type: Option<ComplexOrderStrategyType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    /// Prices travel as strings with two decimal places.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_strategy_type: Option<OrderStrategyType>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub order_leg_collection: Vec<OrderLeg>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub child_order_strategies: Vec<Order>,
}

/// Chainable accumulator over [`Order`] fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderBuilder {
    order: Order,
}

impl OrderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_session(mut self, session: Session) -> Self {
        self.order.session = Some(session);
        self
    }

    pub fn set_duration(mut self, duration: Duration) -> Self {
        self.order.duration = Some(duration);
        self
    }

    pub fn set_order_type(mut self, order_type: OrderType) -> Self {
        self.order.order_type = Some(order_type);
        self
    }

    pub fn set_complex_order_strategy_type(
        mut self,
        strategy_type: ComplexOrderStrategyType,
    ) -> Self {
        self.order.complex_order_strategy_type = Some(strategy_type);
        self
    }

    pub fn set_order_strategy_type(mut self, strategy_type: OrderStrategyType) -> Self {
        self.order.order_strategy_type = Some(strategy_type);
        self
    }

    /// Order-level quantity, used by multi-leg orders priced at the net.
    pub fn set_quantity(mut self, quantity: u32) -> Self {
        self.order.quantity = Some(quantity);
        self
    }

    pub fn set_price(mut self, price: f64) -> Self {
        self.order.price = Some(format!("{price:.2}"));
        self
    }

    /// Append one option leg. Legs keep their insertion order in the
    /// serialized document.
    pub fn add_option_leg(
        mut self,
        instruction: OptionInstruction,
        symbol: &str,
        quantity: u32,
    ) -> Self {
        self.order.order_leg_collection.push(OrderLeg {
            instruction,
            instrument: Instrument {
                symbol: symbol.to_string(),
                asset_type: AssetType::Option,
            },
            quantity,
        });
        self
    }

    /// Nest another order as a child strategy (OCO / trigger composition).
    pub fn add_child_order_strategy(mut self, child: OrderBuilder) -> Self {
        self.order.child_order_strategies.push(child.build());
        self
    }

    /// Finalize into the order document.
    pub fn build(self) -> Order {
        tracing::trace!(
            order_type = ?self.order.order_type,
            legs = self.order.order_leg_collection.len(),
            "finalized order document"
        );
        self.order
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_builder_serializes_to_empty_object() {
        let order = OrderBuilder::new().build();
        assert_eq!(serde_json::to_value(&order).unwrap(), json!({}));
    }

    #[test]
    fn unset_fields_are_omitted() {
        let order = OrderBuilder::new()
            .set_session(Session::Normal)
            .set_order_type(OrderType::Market)
            .build();
        assert_eq!(
            serde_json::to_value(&order).unwrap(),
            json!({"session": "NORMAL", "orderType": "MARKET"})
        );
    }

    #[test]
    fn price_formats_to_two_decimals() {
        let order = OrderBuilder::new().set_price(1.5).build();
        assert_eq!(order.price.as_deref(), Some("1.50"));

        let order = OrderBuilder::new().set_price(300.0).build();
        assert_eq!(order.price.as_deref(), Some("300.00"));
    }

    #[test]
    fn legs_preserve_insertion_order() {
        let order = OrderBuilder::new()
            .add_option_leg(OptionInstruction::BuyToOpen, "AAPL  240420C00150000", 2)
            .add_option_leg(OptionInstruction::SellToOpen, "AAPL  240420C00160000", 2)
            .build();

        assert_eq!(order.order_leg_collection.len(), 2);
        assert_eq!(
            order.order_leg_collection[0].instruction,
            OptionInstruction::BuyToOpen
        );
        assert_eq!(
            order.order_leg_collection[1].instruction,
            OptionInstruction::SellToOpen
        );
    }

    #[test]
    fn leg_serializes_with_option_instrument() {
        let order = OrderBuilder::new()
            .add_option_leg(OptionInstruction::SellToClose, "QQQ  240420P00500000", 1)
            .build();

        assert_eq!(
            serde_json::to_value(&order).unwrap(),
            json!({
                "orderLegCollection": [{
                    "instruction": "SELL_TO_CLOSE",
                    "instrument": {
                        "symbol": "QQQ  240420P00500000",
                        "assetType": "OPTION"
                    },
                    "quantity": 1
                }]
            })
        );
    }

    #[test]
    fn child_orders_nest_as_full_documents() {
        let child = OrderBuilder::new().set_order_type(OrderType::Limit).set_price(10.0);
        let order = OrderBuilder::new()
            .set_order_strategy_type(OrderStrategyType::Oco)
            .add_child_order_strategy(child)
            .build();

        assert_eq!(order.child_order_strategies.len(), 1);
        assert_eq!(
            order.child_order_strategies[0].order_type,
            Some(OrderType::Limit)
        );
    }

    #[test]
    fn order_round_trips_through_json() {
        let order = OrderBuilder::new()
            .set_session(Session::Normal)
            .set_duration(Duration::Day)
            .set_order_type(OrderType::NetDebit)
            .set_price(1.5)
            .set_quantity(2)
            .add_option_leg(OptionInstruction::BuyToOpen, "AAPL  240420C00150000", 2)
            .build();

        let text = serde_json::to_string(&order).unwrap();
        let back: Order = serde_json::from_str(&text).unwrap();
        assert_eq!(back, order);
    }
}
