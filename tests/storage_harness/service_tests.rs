//! Macro-generated test suite for the `CompanyService` + `InvoiceService`
//! contract.
//!
//! # Usage
//!
//! ```rust,ignore
//! store_service_tests!(InMemoryStore::new());
//! ```
//!
//! `$factory` is re-evaluated for each test and must produce an empty store
//! implementing both services.

#[macro_export]
macro_rules! store_service_tests {
    ($factory:expr) => {
        mod store_service_contract_tests {
            use super::*;
            use biztime::core::StorageError;
            use biztime::core::model::InvoiceChanges;
            use biztime::core::{CompanyService, InvoiceService};
            use chrono::Utc;

            // ==================================================================
            // Companies
            // ==================================================================

            #[tokio::test]
            async fn test_empty_store_lists_nothing() {
                let store = $factory;
                assert!(CompanyService::list(&store).await.unwrap().is_empty());
                assert!(InvoiceService::list(&store).await.unwrap().is_empty());
            }

            #[tokio::test]
            async fn test_company_create_and_get() {
                let store = $factory;
                let created = CompanyService::create(&store, company("msft", "Microsoft", "Software"))
                    .await
                    .unwrap();
                assert_eq!(created, company("msft", "Microsoft", "Software"));

                let fetched = CompanyService::get(&store, "msft").await.unwrap();
                assert_eq!(fetched, Some(created));
                assert_eq!(CompanyService::get(&store, "nope").await.unwrap(), None);
            }

            #[tokio::test]
            async fn test_company_list_ordered_by_code() {
                let store = $factory;
                seed(&store).await.unwrap();

                let listed = CompanyService::list(&store).await.unwrap();
                let codes: Vec<&str> = listed.iter().map(|c| c.code.as_str()).collect();
                assert_eq!(codes, vec!["apple", "ibm"]);
                assert_eq!(listed[0].name, "Apple Computer");
            }

            #[tokio::test]
            async fn test_company_duplicate_code() {
                let store = $factory;
                seed(&store).await.unwrap();

                let err = CompanyService::create(&store, company("ibm", "Other", "dup"))
                    .await
                    .unwrap_err();
                assert!(matches!(
                    err.downcast_ref::<StorageError>(),
                    Some(StorageError::UniqueViolation { .. })
                ));
            }

            #[tokio::test]
            async fn test_company_update() {
                let store = $factory;
                seed(&store).await.unwrap();

                let updated = CompanyService::update(&store, "ibm", "IBM", "Hardware")
                    .await
                    .unwrap();
                assert_eq!(updated, Some(company("ibm", "IBM", "Hardware")));

                let missing = CompanyService::update(&store, "nope", "x", "y").await.unwrap();
                assert_eq!(missing, None);
            }

            #[tokio::test]
            async fn test_company_delete_cascades() {
                let store = $factory;
                let fixture = seed(&store).await.unwrap();

                assert!(CompanyService::delete(&store, "ibm").await.unwrap());
                assert!(!CompanyService::delete(&store, "ibm").await.unwrap());
                assert_eq!(InvoiceService::get(&store, fixture.ibm_400).await.unwrap(), None);
                assert_eq!(InvoiceService::list(&store).await.unwrap().len(), 3);
            }

            // ==================================================================
            // Invoices
            // ==================================================================

            #[tokio::test]
            async fn test_invoice_create_defaults() {
                let store = $factory;
                seed(&store).await.unwrap();

                let created = InvoiceService::create(&store, new_invoice("ibm", 55.5))
                    .await
                    .unwrap();
                assert_eq!(created.comp_code, "ibm");
                assert_eq!(created.amt, 55.5);
                assert!(!created.paid);
                assert_eq!(created.paid_date, None);

                let fetched = InvoiceService::get(&store, created.id).await.unwrap().unwrap();
                assert_eq!(fetched.id, created.id);
                assert_eq!(fetched.amt, 55.5);
            }

            #[tokio::test]
            async fn test_invoice_unknown_company() {
                let store = $factory;
                seed(&store).await.unwrap();

                let err = InvoiceService::create(&store, new_invoice("ghost", 1.0))
                    .await
                    .unwrap_err();
                assert!(matches!(
                    err.downcast_ref::<StorageError>(),
                    Some(StorageError::ForeignKeyViolation { .. })
                ));
                assert_eq!(InvoiceService::list(&store).await.unwrap().len(), 4);
            }

            #[tokio::test]
            async fn test_invoice_list_ordered_by_id() {
                let store = $factory;
                let fixture = seed(&store).await.unwrap();

                let ids: Vec<i32> = InvoiceService::list(&store)
                    .await
                    .unwrap()
                    .into_iter()
                    .map(|i| i.id)
                    .collect();
                assert_eq!(
                    ids,
                    vec![
                        fixture.apple_100,
                        fixture.apple_200,
                        fixture.apple_300_paid,
                        fixture.ibm_400
                    ]
                );
            }

            #[tokio::test]
            async fn test_invoice_update() {
                let store = $factory;
                let fixture = seed(&store).await.unwrap();
                let now = Utc::now();

                let updated = InvoiceService::update(
                    &store,
                    fixture.apple_100,
                    InvoiceChanges {
                        amt: 150.0,
                        paid: true,
                        paid_date: Some(now),
                    },
                )
                .await
                .unwrap()
                .unwrap();
                assert_eq!(updated.amt, 150.0);
                assert!(updated.paid);
                assert!(updated.paid_date.is_some());

                let missing = InvoiceService::update(
                    &store,
                    i32::MAX,
                    InvoiceChanges {
                        amt: 1.0,
                        paid: false,
                        paid_date: None,
                    },
                )
                .await
                .unwrap();
                assert!(missing.is_none());
            }

            #[tokio::test]
            async fn test_invoice_delete() {
                let store = $factory;
                let fixture = seed(&store).await.unwrap();

                assert!(InvoiceService::delete(&store, fixture.apple_200).await.unwrap());
                assert!(!InvoiceService::delete(&store, fixture.apple_200).await.unwrap());
                assert_eq!(InvoiceService::get(&store, fixture.apple_200).await.unwrap(), None);
            }

            #[tokio::test]
            async fn test_list_for_company() {
                let store = $factory;
                let fixture = seed(&store).await.unwrap();

                let apple = InvoiceService::list_for_company(&store, "apple").await.unwrap();
                assert_eq!(apple.len(), 3);
                assert_eq!(apple[2].id, fixture.apple_300_paid);
                assert_eq!(apple[2].paid_date, Some(seeded_paid_date()));

                let ibm = InvoiceService::list_for_company(&store, "ibm").await.unwrap();
                assert_eq!(ibm.len(), 1);
                assert_eq!(ibm[0].amt, 400.0);

                assert!(InvoiceService::list_for_company(&store, "nope")
                    .await
                    .unwrap()
                    .is_empty());
            }
        }
    };
}
