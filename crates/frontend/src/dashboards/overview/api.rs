use contracts::domain::courier::Courier;
use contracts::domain::shop::Shop;
use contracts::shared::page::CountsResponse;

use crate::shared::http::{api_url, get_json, ApiError, PageResult};
use crate::system::auth::session::Session;

/// Fetch the total number of customer accounts (`GET /users/counts`).
pub async fn fetch_customer_count(session: &Session) -> Result<usize, ApiError> {
    let counts = get_json::<CountsResponse>(session, &api_url("/users/counts")).await?;
    Ok(counts.counts)
}

/// Card values for the overview, with one message per failed source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverviewCounts {
    pub customers: Option<usize>,
    pub couriers: Option<usize>,
    pub shops: Option<usize>,
    pub errors: Vec<String>,
}

/// Fold the three count fetches into card values. A failed source leaves its
/// card empty and contributes its message to `errors`; nothing is dropped
/// silently.
pub fn collect_counts(
    customers: Result<usize, ApiError>,
    couriers: &PageResult<Courier>,
    shops: &PageResult<Shop>,
) -> OverviewCounts {
    let mut counts = OverviewCounts::default();

    match customers {
        Ok(n) => counts.customers = Some(n),
        Err(err) => counts.errors.push(err.to_string()),
    }
    match (&couriers.data, &couriers.error) {
        (Some(_), _) => counts.couriers = Some(couriers.total),
        (None, message) => counts
            .errors
            .push(message.clone().unwrap_or_else(|| "Failed to fetch delivery personnel".into())),
    }
    match (&shops.data, &shops.error) {
        (Some(_), _) => counts.shops = Some(shops.total),
        (None, message) => counts
            .errors
            .push(message.clone().unwrap_or_else(|| "Failed to fetch shops".into())),
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::page::Page;

    fn page<T>(total: usize) -> PageResult<T> {
        PageResult::ok(Page {
            data: Vec::new(),
            total,
        })
    }

    #[test]
    fn all_sources_ok_yields_three_counts_and_no_errors() {
        let counts = collect_counts(Ok(12), &page(3), &page(7));
        assert_eq!(counts.customers, Some(12));
        assert_eq!(counts.couriers, Some(3));
        assert_eq!(counts.shops, Some(7));
        assert!(counts.errors.is_empty());
    }

    #[test]
    fn each_failed_source_reports_a_message() {
        let couriers: PageResult<Courier> =
            PageResult::failed(&ApiError::Fetch("boom".into()), "delivery personnel");
        let shops: PageResult<Shop> = PageResult::failed(&ApiError::Unauthenticated, "shops");

        let counts = collect_counts(
            Err(ApiError::Fetch("Request failed: 500".into())),
            &couriers,
            &shops,
        );

        assert_eq!(counts.customers, None);
        assert_eq!(counts.couriers, None);
        assert_eq!(counts.shops, None);
        assert_eq!(
            counts.errors,
            vec![
                "Request failed: 500".to_string(),
                "Failed to fetch delivery personnel".to_string(),
                "Not authenticated".to_string(),
            ]
        );
    }

    #[test]
    fn partial_failure_keeps_the_healthy_counts() {
        let shops: PageResult<Shop> = PageResult::failed(&ApiError::Fetch("x".into()), "shops");
        let counts = collect_counts(Ok(5), &page(2), &shops);
        assert_eq!(counts.customers, Some(5));
        assert_eq!(counts.couriers, Some(2));
        assert_eq!(counts.shops, None);
        assert_eq!(counts.errors.len(), 1);
    }
}
