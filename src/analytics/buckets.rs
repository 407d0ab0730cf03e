/// One bar of the price histogram: `min <= price < max`, open above when
/// `max` is `None`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBucket {
    pub label: &'static str,
    pub min: f64,
    pub max: Option<f64>,
}

impl PriceBucket {
    const fn new(label: &'static str, min: f64, max: Option<f64>) -> Self {
        Self { label, min, max }
    }

    pub fn contains(&self, price: f64) -> bool {
        in_price_range(price, self.min, self.max)
    }
}

/// `min <= price < max`, unbounded above when `max` is `None`.
pub fn in_price_range(price: f64, min: f64, max: Option<f64>) -> bool {
    price >= min && max.map_or(true, |max| price < max)
}

// Lower bounds after the first sit one unit above the previous upper bound,
// so prices in [100, 101), [200, 201), ... fall into no bucket.
pub const PRICE_BUCKETS: [PriceBucket; 10] = [
    PriceBucket::new("0-100", 0.0, Some(100.0)),
    PriceBucket::new("101-200", 101.0, Some(200.0)),
    PriceBucket::new("201-300", 201.0, Some(300.0)),
    PriceBucket::new("301-400", 301.0, Some(400.0)),
    PriceBucket::new("401-500", 401.0, Some(500.0)),
    PriceBucket::new("501-600", 501.0, Some(600.0)),
    PriceBucket::new("601-700", 601.0, Some(700.0)),
    PriceBucket::new("701-800", 701.0, Some(800.0)),
    PriceBucket::new("801-900", 801.0, Some(900.0)),
    PriceBucket::new("901-above", 901.0, None),
];
