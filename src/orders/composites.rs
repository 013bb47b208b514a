//! Composite order strategies built from other orders.

use super::builder::OrderBuilder;
use super::common::OrderStrategyType;

/// If one of the orders is executed, immediately cancel the other.
pub fn one_cancels_other(order1: OrderBuilder, order2: OrderBuilder) -> OrderBuilder {
    OrderBuilder::new()
        .set_order_strategy_type(OrderStrategyType::Oco)
        .add_child_order_strategy(order1)
        .add_child_order_strategy(order2)
}

/// If `first_order` is executed, immediately place `second_order`.
pub fn first_triggers_second(
    first_order: OrderBuilder,
    second_order: OrderBuilder,
) -> OrderBuilder {
    first_order
        .set_order_strategy_type(OrderStrategyType::Trigger)
        .add_child_order_strategy(second_order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::common::OrderType;
    use crate::orders::options::{option_buy_to_open_limit, option_sell_to_close_limit};

    #[test]
    fn oco_wraps_both_orders_as_children() {
        let order = one_cancels_other(
            option_sell_to_close_limit("SYM", 1, 3.0),
            option_sell_to_close_limit("SYM", 1, 1.0),
        )
        .build();

        assert_eq!(order.order_strategy_type, Some(OrderStrategyType::Oco));
        assert_eq!(order.child_order_strategies.len(), 2);
        // The wrapper itself carries no session/duration/type of its own.
        assert!(order.session.is_none());
        assert!(order.order_type.is_none());
        assert!(order.order_leg_collection.is_empty());
    }

    #[test]
    fn trigger_mutates_the_first_order_in_place() {
        let order = first_triggers_second(
            option_buy_to_open_limit("SYM", 1, 2.0),
            option_sell_to_close_limit("SYM", 1, 4.0),
        )
        .build();

        // The first order keeps its own fields and legs.
        assert_eq!(order.order_type, Some(OrderType::Limit));
        assert_eq!(order.order_leg_collection.len(), 1);
        assert_eq!(order.order_strategy_type, Some(OrderStrategyType::Trigger));
        assert_eq!(order.child_order_strategies.len(), 1);
        assert_eq!(
            order.child_order_strategies[0].order_type,
            Some(OrderType::Limit)
        );
    }
}
