use crate::models::budget::BudgetService;

/// Rounds a monetary amount to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Clamps a discount percentage into [0, 100]. Non-finite input counts as no
/// discount.
pub fn clamp_discount(discount_percent: f64) -> f64 {
    if discount_percent.is_finite() {
        discount_percent.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

fn sanitize_unit_value(unit_value: f64) -> f64 {
    if unit_value.is_finite() && unit_value > 0.0 {
        unit_value
    } else {
        0.0
    }
}

/// Computes a budget total: selected services priced per guest, summed, with
/// a percentage discount applied and the result rounded to cents.
pub fn compute_total(guest_count: i32, services: &[BudgetService], discount_percent: f64) -> f64 {
    if guest_count <= 0 {
        return 0.0;
    }

    let subtotal: f64 = services
        .iter()
        .filter(|s| s.selected)
        .map(|s| sanitize_unit_value(s.unit_value) * f64::from(guest_count))
        .sum();

    let discount = clamp_discount(discount_percent);
    round2(subtotal * (100.0 - discount) / 100.0)
}
