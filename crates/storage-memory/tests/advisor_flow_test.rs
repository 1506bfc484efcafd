//! End-to-end flow over the in-memory repositories: clients, pricing,
//! rate replacement, reporting and session handling wired together the way
//! the application composes them.

use std::sync::Arc;

use chrono::{Datelike, Utc};
use rust_decimal_macros::dec;

use advisor_core::clients::{ClientService, ClientServiceTrait, NewClient};
use advisor_core::constants::DEFAULT_SERIES_MONTHS;
use advisor_core::portfolio::{NewPortfolioItem, ProductType, ProductVariant};
use advisor_core::rates::{RateConfiguration, RateService, RateServiceTrait};
use advisor_core::reporting;
use advisor_core::session::{SessionService, SessionServiceTrait, UserProfile};
use advisor_storage_memory::{
    InMemoryClientRepository, InMemoryRateRepository, InMemorySessionStore,
};

fn new_client(first: &str, last: &str) -> NewClient {
    NewClient {
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: format!("{}@example.com", first.to_lowercase()),
        phone: String::new(),
        age: 40,
        occupation: String::new(),
        income: dec!(50000),
        notes: String::new(),
        last_contact: None,
    }
}

fn draft(product_type: ProductType, value: rust_decimal::Decimal) -> NewPortfolioItem {
    NewPortfolioItem {
        product_type,
        variant: None,
        name: String::new(),
        value,
        expiry_date: None,
        details: String::new(),
        is_existing: false,
    }
}

#[tokio::test]
async fn test_full_advisor_flow() {
    let client_repository = Arc::new(InMemoryClientRepository::new());
    let rate_repository = Arc::new(InMemoryRateRepository::default());

    let clients = ClientService::new(client_repository.clone(), rate_repository.clone());
    let rates = RateService::new(rate_repository.clone());

    // Two clients, products priced at the default rates.
    let jana = clients
        .create_client(new_client("Jana", "Nováková"))
        .await
        .unwrap();
    let petr = clients
        .create_client(new_client("Petr", "Svoboda"))
        .await
        .unwrap();

    clients
        .add_product(&jana.id, draft(ProductType::Investment, dec!(100000)))
        .await
        .unwrap();
    clients
        .add_product(&jana.id, draft(ProductType::LifeInsurance, dec!(1000)))
        .await
        .unwrap();
    clients
        .add_product(&petr.id, draft(ProductType::Mortgage, dec!(-2000000)))
        .await
        .unwrap();
    clients
        .add_product(
            &petr.id,
            NewPortfolioItem {
                variant: Some(ProductVariant::ContractFirst),
                ..draft(ProductType::BuildingSavings, dec!(600000))
            },
        )
        .await
        .unwrap();

    let book = clients.list_clients().unwrap();
    let today = Utc::now().date_naive();

    // Insurance premium excluded, loan counted by absolute volume.
    assert_eq!(
        reporting::gross_managed_volume(&book),
        dec!(100000) + dec!(2000000) + dec!(600000)
    );

    // 680 + 12600 + 46000 + 1852, all created this month.
    assert_eq!(
        reporting::monthly_commission(&book, today),
        dec!(61132)
    );

    let series = reporting::commission_time_series(&book, today, DEFAULT_SERIES_MONTHS);
    assert_eq!(series.len(), DEFAULT_SERIES_MONTHS as usize);
    let (past, current) = series.split_at(series.len() - 1);
    assert_eq!(current[0].month, today.month());
    assert_eq!(current[0].total, dec!(61132));
    assert!(past.iter().all(|bucket| bucket.total == dec!(0)));

    // Replacing the rate configuration leaves stored commissions frozen.
    rates
        .replace_rates(RateConfiguration {
            investment_rate: dec!(10),
            ..RateConfiguration::default()
        })
        .await
        .unwrap();

    let book = clients.list_clients().unwrap();
    assert_eq!(reporting::monthly_commission(&book, today), dec!(61132));

    // A negative rate never reaches the store.
    let invalid = RateConfiguration {
        mortgage_rate: dec!(-1),
        ..RateConfiguration::default()
    };
    assert!(rates.replace_rates(invalid).await.is_err());
    assert_eq!(rates.get_rates().unwrap().investment_rate, dec!(10));

    // Deleting a client drops their commissions from the aggregates.
    clients.delete_client(&jana.id).await.unwrap();
    let book = clients.list_clients().unwrap();
    assert_eq!(reporting::monthly_commission(&book, today), dec!(47852));
}

#[tokio::test]
async fn test_session_round_trip() {
    let store = Arc::new(InMemorySessionStore::new());
    let session = SessionService::new(store);

    assert_eq!(session.current_user().unwrap(), None);

    let profile = UserProfile {
        username: "jnovak".to_string(),
        full_name: "Jan Novák".to_string(),
        biometrics_enabled: true,
    };
    session.login(profile.clone()).await.unwrap();
    assert_eq!(session.current_user().unwrap(), Some(profile));

    session.logout().await.unwrap();
    assert_eq!(session.current_user().unwrap(), None);
}
