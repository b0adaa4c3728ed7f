//! 食堂の注文計算

use crate::types::MenuItem;

/// 1品あたりの最大注文数
pub const MAX_QUANTITY: u32 = 10;

/// 既定の通貨表記
pub const DEFAULT_CURRENCY: &str = "Rs.";

/// 1品の注文（数量は 1..=MAX_QUANTITY に収める）
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    item: MenuItem,
    quantity: u32,
}

impl Order {
    pub fn new(item: MenuItem, quantity: u32) -> Self {
        Self {
            item,
            quantity: quantity.clamp(1, MAX_QUANTITY),
        }
    }

    pub fn item(&self) -> &MenuItem {
        &self.item
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// 数量+1（上限で止まる）
    pub fn increment(&mut self) {
        self.quantity = (self.quantity + 1).min(MAX_QUANTITY);
    }

    /// 数量-1（1で止まる）
    pub fn decrement(&mut self) {
        self.quantity = self.quantity.saturating_sub(1).max(1);
    }

    /// 合計金額
    pub fn total(&self) -> u64 {
        self.item.price as u64 * self.quantity as u64
    }

    /// カート追加時のメッセージ
    pub fn confirmation(&self, currency: &str) -> String {
        format!(
            "{} x {} added to cart. Total: {}",
            self.quantity,
            self.item.name,
            format_price(self.total(), currency)
        )
    }
}

/// 金額表示（"Rs. 1,250" 形式、通貨表記は呼び出し側指定）
pub fn format_price(amount: u64, currency: &str) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{} {}", currency, grouped)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn burger() -> MenuItem {
        MenuItem {
            id: 2,
            name: "Zinger Burger".into(),
            section: "Fast Food".into(),
            price: 450,
            ..Default::default()
        }
    }

    #[test]
    fn test_quantity_is_clamped() {
        assert_eq!(Order::new(burger(), 0).quantity(), 1);
        assert_eq!(Order::new(burger(), 3).quantity(), 3);
        assert_eq!(Order::new(burger(), 99).quantity(), MAX_QUANTITY);
    }

    #[test]
    fn test_increment_decrement_saturate() {
        let mut order = Order::new(burger(), 1);
        order.decrement();
        assert_eq!(order.quantity(), 1);

        let mut order = Order::new(burger(), MAX_QUANTITY);
        order.increment();
        assert_eq!(order.quantity(), MAX_QUANTITY);
        order.decrement();
        assert_eq!(order.quantity(), MAX_QUANTITY - 1);
    }

    #[test]
    fn test_total() {
        assert_eq!(Order::new(burger(), 3).total(), 1350);
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0, DEFAULT_CURRENCY), "Rs. 0");
        assert_eq!(format_price(450, DEFAULT_CURRENCY), "Rs. 450");
        assert_eq!(format_price(1350, DEFAULT_CURRENCY), "Rs. 1,350");
        assert_eq!(format_price(1234567, "PKR"), "PKR 1,234,567");
    }

    #[test]
    fn test_confirmation_message() {
        let order = Order::new(burger(), 3);
        assert_eq!(order.confirmation(DEFAULT_CURRENCY), "3 x Zinger Burger added to cart. Total: Rs. 1,350");
        assert_eq!(order.confirmation("PKR"), "3 x Zinger Burger added to cart. Total: PKR 1,350");
    }
}
