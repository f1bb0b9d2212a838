use metrics_exporter_prometheus::PrometheusHandle;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Thousands-separated dollar amount with cents, e.g. `$67,543.60`.
pub(crate) fn format_currency(value: Decimal) -> String {
    let rounded = value.round_dp(2);
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    let magnitude = rounded.abs();
    let dollars = magnitude.trunc().to_u128().unwrap_or_default().to_string();
    let cents = (magnitude.fract() * Decimal::ONE_HUNDRED)
        .to_u32()
        .unwrap_or_default();

    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (index, digit) in dollars.chars().enumerate() {
        if index > 0 && (dollars.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{sign}${grouped}.{cents:02}")
}
