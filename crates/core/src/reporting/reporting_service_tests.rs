//! Tests for the aggregate reporting queries.

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::clients::Client;
    use crate::commission::CommissionKind;
    use crate::constants::DEFAULT_SERIES_MONTHS;
    use crate::portfolio::{PortfolioItem, ProductType};
    use crate::reporting::{
        commission_time_series, gross_managed_volume, kpi_snapshot, monthly_commission,
    };

    fn item(
        product_type: ProductType,
        value: Decimal,
        commission_final: Decimal,
        created: NaiveDate,
        is_existing: bool,
    ) -> PortfolioItem {
        PortfolioItem {
            id: format!("item-{:?}-{}", product_type, created),
            product_type,
            variant: None,
            name: product_type.label().to_string(),
            value,
            created_date: created.and_hms_opt(10, 30, 0).unwrap(),
            expiry_date: None,
            details: String::new(),
            is_existing,
            commission_kind: CommissionKind::Fixed,
            commission_input: commission_final,
            commission_final,
        }
    }

    fn client(portfolio: Vec<PortfolioItem>) -> Client {
        Client {
            id: "client-1".to_string(),
            first_name: "Jana".to_string(),
            last_name: "Nováková".to_string(),
            email: "jana@example.com".to_string(),
            phone: "+420 777 000 111".to_string(),
            age: 42,
            occupation: "Lékařka".to_string(),
            income: dec!(65000),
            portfolio,
            notes: String::new(),
            last_contact: None,
        }
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    // ==================== Gross Managed Volume ====================

    #[test]
    fn test_volume_excludes_insurance_premiums() {
        let clients = vec![client(vec![
            item(
                ProductType::Investment,
                dec!(100000),
                dec!(680),
                date(2025, 6, 1),
                false,
            ),
            item(
                ProductType::LifeInsurance,
                dec!(1000),
                dec!(12600),
                date(2025, 6, 1),
                false,
            ),
        ])];
        assert_eq!(gross_managed_volume(&clients), dec!(100000));
    }

    #[test]
    fn test_volume_counts_loans_by_absolute_value() {
        let clients = vec![client(vec![item(
            ProductType::Mortgage,
            dec!(-2000000),
            dec!(46000),
            date(2025, 6, 1),
            false,
        )])];
        assert_eq!(gross_managed_volume(&clients), dec!(2000000));
    }

    #[test]
    fn test_volume_includes_existing_products() {
        // External products still belong to the portfolio view, only their
        // commission is excluded.
        let clients = vec![client(vec![item(
            ProductType::SavingsAccount,
            dec!(50000),
            Decimal::ZERO,
            date(2025, 6, 1),
            true,
        )])];
        assert_eq!(gross_managed_volume(&clients), dec!(50000));
    }

    #[test]
    fn test_volume_of_empty_book_is_zero() {
        assert_eq!(gross_managed_volume(&[]), Decimal::ZERO);
    }

    // ==================== Monthly Commission ====================

    #[test]
    fn test_monthly_commission_matches_month_and_year() {
        let clients = vec![client(vec![
            item(
                ProductType::Investment,
                dec!(100000),
                dec!(680),
                date(2025, 6, 15),
                false,
            ),
            item(
                ProductType::Mortgage,
                dec!(-2000000),
                dec!(46000),
                date(2025, 5, 31),
                false,
            ),
            // Same month, previous year: must not count.
            item(
                ProductType::PensionSavings,
                dec!(1000),
                dec!(2210),
                date(2024, 6, 15),
                false,
            ),
        ])];
        assert_eq!(monthly_commission(&clients, date(2025, 6, 1)), dec!(680));
    }

    #[test]
    fn test_monthly_commission_skips_existing_products() {
        let clients = vec![client(vec![item(
            ProductType::Investment,
            dec!(100000),
            Decimal::ZERO,
            date(2025, 6, 15),
            true,
        )])];
        assert_eq!(
            monthly_commission(&clients, date(2025, 6, 1)),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_monthly_commission_of_empty_book_is_zero() {
        assert_eq!(monthly_commission(&[], date(2025, 6, 1)), Decimal::ZERO);
    }

    // ==================== Commission Time Series ====================

    #[test]
    fn test_series_has_one_bucket_per_month_oldest_first() {
        let series = commission_time_series(&[], date(2025, 6, 15), 6);
        assert_eq!(series.len(), 6);
        assert_eq!((series[0].year, series[0].month), (2025, 1));
        assert_eq!((series[5].year, series[5].month), (2025, 6));
        assert_eq!(series[0].label, "Led");
        assert_eq!(series[5].label, "Čer");
        assert!(series.iter().all(|bucket| bucket.total.is_zero()));
    }

    #[test]
    fn test_series_default_span_is_six_months() {
        let series = commission_time_series(&[], date(2025, 6, 15), DEFAULT_SERIES_MONTHS);
        assert_eq!(series.len(), DEFAULT_SERIES_MONTHS as usize);
        assert_eq!((series[0].year, series[0].month), (2025, 1));
    }

    #[test]
    fn test_series_crosses_year_boundary() {
        let series = commission_time_series(&[], date(2025, 2, 1), 6);
        assert_eq!((series[0].year, series[0].month), (2024, 9));
        assert_eq!(series[0].label, "Zář");
        assert_eq!((series[5].year, series[5].month), (2025, 2));
    }

    #[test]
    fn test_series_item_contributes_only_to_its_own_bucket() {
        let clients = vec![client(vec![item(
            ProductType::Investment,
            dec!(100000),
            dec!(680),
            date(2025, 4, 10),
            false,
        )])];
        let series = commission_time_series(&clients, date(2025, 6, 15), 6);
        for bucket in &series {
            let expected = if bucket.month == 4 {
                dec!(680)
            } else {
                Decimal::ZERO
            };
            assert_eq!(bucket.total, expected, "bucket {}/{}", bucket.month, bucket.year);
        }
    }

    #[test]
    fn test_series_excludes_existing_products_entirely() {
        let clients = vec![client(vec![item(
            ProductType::Investment,
            dec!(100000),
            Decimal::ZERO,
            date(2025, 4, 10),
            true,
        )])];
        let series = commission_time_series(&clients, date(2025, 6, 15), 6);
        assert!(series.iter().all(|bucket| bucket.total.is_zero()));
    }

    #[test]
    fn test_series_sums_items_across_clients_in_same_month() {
        let clients = vec![
            client(vec![item(
                ProductType::Investment,
                dec!(100000),
                dec!(680),
                date(2025, 6, 2),
                false,
            )]),
            client(vec![item(
                ProductType::PensionSavings,
                dec!(1000),
                dec!(2210),
                date(2025, 6, 28),
                false,
            )]),
        ];
        let series = commission_time_series(&clients, date(2025, 6, 15), 6);
        assert_eq!(series[5].total, dec!(2890));
    }

    // ==================== Idempotence & KPI ====================

    #[test]
    fn test_aggregates_are_idempotent() {
        let clients = vec![client(vec![
            item(
                ProductType::Investment,
                dec!(100000),
                dec!(680),
                date(2025, 6, 15),
                false,
            ),
            item(
                ProductType::Mortgage,
                dec!(-2000000),
                dec!(46000),
                date(2025, 3, 1),
                false,
            ),
        ])];
        let reference = date(2025, 6, 15);

        assert_eq!(gross_managed_volume(&clients), gross_managed_volume(&clients));
        assert_eq!(
            monthly_commission(&clients, reference),
            monthly_commission(&clients, reference)
        );
        assert_eq!(
            commission_time_series(&clients, reference, 6),
            commission_time_series(&clients, reference, 6)
        );
    }

    #[test]
    fn test_kpi_snapshot() {
        let clients = vec![client(vec![
            item(
                ProductType::Investment,
                dec!(100000),
                dec!(680),
                date(2025, 6, 15),
                false,
            ),
            item(
                ProductType::LifeInsurance,
                dec!(1000),
                dec!(12600),
                date(2025, 6, 15),
                false,
            ),
        ])];
        let kpi = kpi_snapshot(&clients, date(2025, 6, 30));
        assert_eq!(kpi.gross_managed_volume, dec!(100000));
        assert_eq!(kpi.active_clients, 1);
        assert_eq!(kpi.monthly_commission, dec!(13280));
    }
}
