use leptos::prelude::*;

use crate::shared::icons::icon;

/// Count with a thin-space thousands separator: 1234567 -> "1 234 567".
pub fn format_count(n: usize) -> String {
    let digits = n.to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('\u{00a0}');
        }
        grouped.push(ch);
    }
    grouped.chars().rev().collect()
}

/// Summary card on the overview dashboard. `value = None` renders as a
/// loading placeholder.
#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: String,
    /// Icon name from the icon() helper
    icon_name: String,
    /// Primary value (None = still loading or failed)
    #[prop(into)]
    value: Signal<Option<usize>>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__icon">{icon(&icon_name)}</div>
            <div class="stat-card__body">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">
                    {move || match value.get() {
                        Some(n) => format_count(n),
                        None => "…".to_string(),
                    }}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_234), "1\u{00a0}234");
        assert_eq!(format_count(1_234_567), "1\u{00a0}234\u{00a0}567");
    }
}
