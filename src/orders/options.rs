//! Pre-filled order builders for common option strategies.
//!
//! Each function returns an [`OrderBuilder`] configured for one named
//! strategy; the caller can keep mutating it before serializing. All
//! builders start from the same base: normal trading session, day duration.
//!
//! Vertical spreads fix both the net-debit/net-credit order type and the
//! leg instruction pairing per strategy; only symbols, quantity and the net
//! price are caller-supplied. Both legs always carry the same quantity, and
//! leg order in the document matches the order legs are listed here.

use super::builder::OrderBuilder;
use super::common::{
    ComplexOrderStrategyType, Duration, OptionInstruction, OrderStrategyType, OrderType, Session,
};

fn base_builder() -> OrderBuilder {
    OrderBuilder::new()
        .set_session(Session::Normal)
        .set_duration(Duration::Day)
}

fn single_market(instruction: OptionInstruction, symbol: &str, quantity: u32) -> OrderBuilder {
    base_builder()
        .set_order_type(OrderType::Market)
        .set_order_strategy_type(OrderStrategyType::Single)
        .add_option_leg(instruction, symbol, quantity)
}

fn single_limit(
    instruction: OptionInstruction,
    symbol: &str,
    quantity: u32,
    price: f64,
) -> OrderBuilder {
    base_builder()
        .set_order_type(OrderType::Limit)
        .set_price(price)
        .set_order_strategy_type(OrderStrategyType::Single)
        .add_option_leg(instruction, symbol, quantity)
}

fn vertical(
    order_type: OrderType,
    price: f64,
    quantity: u32,
    leg1: (OptionInstruction, &str),
    leg2: (OptionInstruction, &str),
) -> OrderBuilder {
    base_builder()
        .set_order_type(order_type)
        .set_complex_order_strategy_type(ComplexOrderStrategyType::Vertical)
        .set_price(price)
        .set_quantity(quantity)
        .set_order_strategy_type(OrderStrategyType::Single)
        .add_option_leg(leg1.0, leg1.1, quantity)
        .add_option_leg(leg2.0, leg2.1, quantity)
}

// --- Single options ---

/// Buy-to-open market order.
pub fn option_buy_to_open_market(symbol: &str, quantity: u32) -> OrderBuilder {
    single_market(OptionInstruction::BuyToOpen, symbol, quantity)
}

/// Buy-to-open limit order.
pub fn option_buy_to_open_limit(symbol: &str, quantity: u32, price: f64) -> OrderBuilder {
    single_limit(OptionInstruction::BuyToOpen, symbol, quantity, price)
}

/// Sell-to-open market order.
pub fn option_sell_to_open_market(symbol: &str, quantity: u32) -> OrderBuilder {
    single_market(OptionInstruction::SellToOpen, symbol, quantity)
}

/// Sell-to-open limit order.
pub fn option_sell_to_open_limit(symbol: &str, quantity: u32, price: f64) -> OrderBuilder {
    single_limit(OptionInstruction::SellToOpen, symbol, quantity, price)
}

/// Buy-to-close market order.
pub fn option_buy_to_close_market(symbol: &str, quantity: u32) -> OrderBuilder {
    single_market(OptionInstruction::BuyToClose, symbol, quantity)
}

/// Buy-to-close limit order.
pub fn option_buy_to_close_limit(symbol: &str, quantity: u32, price: f64) -> OrderBuilder {
    single_limit(OptionInstruction::BuyToClose, symbol, quantity, price)
}

/// Sell-to-close market order.
pub fn option_sell_to_close_market(symbol: &str, quantity: u32) -> OrderBuilder {
    single_market(OptionInstruction::SellToClose, symbol, quantity)
}

/// Sell-to-close limit order.
pub fn option_sell_to_close_limit(symbol: &str, quantity: u32, price: f64) -> OrderBuilder {
    single_limit(OptionInstruction::SellToClose, symbol, quantity, price)
}

// --- Verticals ---

/// Open a bull call vertical: buy the long call, sell the short call, for a
/// net debit.
pub fn bull_call_vertical_open(
    long_call_symbol: &str,
    short_call_symbol: &str,
    quantity: u32,
    net_debit: f64,
) -> OrderBuilder {
    vertical(
        OrderType::NetDebit,
        net_debit,
        quantity,
        (OptionInstruction::BuyToOpen, long_call_symbol),
        (OptionInstruction::SellToOpen, short_call_symbol),
    )
}

/// Close a bull call vertical: sell the long call, buy back the short call,
/// for a net credit.
pub fn bull_call_vertical_close(
    long_call_symbol: &str,
    short_call_symbol: &str,
    quantity: u32,
    net_credit: f64,
) -> OrderBuilder {
    vertical(
        OrderType::NetCredit,
        net_credit,
        quantity,
        (OptionInstruction::SellToClose, long_call_symbol),
        (OptionInstruction::BuyToClose, short_call_symbol),
    )
}

/// Open a bear call vertical: sell the short call, buy the long call, for a
/// net credit.
pub fn bear_call_vertical_open(
    short_call_symbol: &str,
    long_call_symbol: &str,
    quantity: u32,
    net_credit: f64,
) -> OrderBuilder {
    vertical(
        OrderType::NetCredit,
        net_credit,
        quantity,
        (OptionInstruction::SellToOpen, short_call_symbol),
        (OptionInstruction::BuyToOpen, long_call_symbol),
    )
}

/// Close a bear call vertical: buy back the short call, sell the long call,
/// for a net debit.
pub fn bear_call_vertical_close(
    short_call_symbol: &str,
    long_call_symbol: &str,
    quantity: u32,
    net_debit: f64,
) -> OrderBuilder {
    vertical(
        OrderType::NetDebit,
        net_debit,
        quantity,
        (OptionInstruction::BuyToClose, short_call_symbol),
        (OptionInstruction::SellToClose, long_call_symbol),
    )
}

/// Open a bull put vertical: buy the long put, sell the short put, for a
/// net credit.
pub fn bull_put_vertical_open(
    long_put_symbol: &str,
    short_put_symbol: &str,
    quantity: u32,
    net_credit: f64,
) -> OrderBuilder {
    vertical(
        OrderType::NetCredit,
        net_credit,
        quantity,
        (OptionInstruction::BuyToOpen, long_put_symbol),
        (OptionInstruction::SellToOpen, short_put_symbol),
    )
}

/// Close a bull put vertical: sell the long put, buy back the short put, for
/// a net debit.
pub fn bull_put_vertical_close(
    long_put_symbol: &str,
    short_put_symbol: &str,
    quantity: u32,
    net_debit: f64,
) -> OrderBuilder {
    vertical(
        OrderType::NetDebit,
        net_debit,
        quantity,
        (OptionInstruction::SellToClose, long_put_symbol),
        (OptionInstruction::BuyToClose, short_put_symbol),
    )
}

/// Open a bear put vertical: sell the short put, buy the long put, for a net
/// debit.
pub fn bear_put_vertical_open(
    short_put_symbol: &str,
    long_put_symbol: &str,
    quantity: u32,
    net_debit: f64,
) -> OrderBuilder {
    vertical(
        OrderType::NetDebit,
        net_debit,
        quantity,
        (OptionInstruction::SellToOpen, short_put_symbol),
        (OptionInstruction::BuyToOpen, long_put_symbol),
    )
}

/// Close a bear put vertical: buy back the short put, sell the long put, for
/// a net credit.
pub fn bear_put_vertical_close(
    short_put_symbol: &str,
    long_put_symbol: &str,
    quantity: u32,
    net_credit: f64,
) -> OrderBuilder {
    vertical(
        OrderType::NetCredit,
        net_credit,
        quantity,
        (OptionInstruction::BuyToClose, short_put_symbol),
        (OptionInstruction::SellToClose, long_put_symbol),
    )
}
