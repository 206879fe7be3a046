//! Unit tests for the Wallet crate

#[cfg(test)]
mod provisioning_tests {
    use std::sync::Arc;

    use crate::application::{
        CreateCustomerInput, CreateCustomerUseCase, DeleteCustomerUseCase, ListCustomersUseCase,
        WalletConfig,
    };
    use crate::domain::value_object::account_no::{ACCOUNT_NO_HEX_LENGTH, ACCOUNT_NO_PREFIX};
    use crate::error::WalletError;
    use crate::infra::memory::InMemoryWalletRepository;
    use rust_decimal::Decimal;

    fn use_case(
        repo: &Arc<InMemoryWalletRepository>,
    ) -> CreateCustomerUseCase<InMemoryWalletRepository, InMemoryWalletRepository> {
        CreateCustomerUseCase::new(
            repo.clone(),
            repo.clone(),
            Arc::new(WalletConfig::development()),
        )
    }

    fn input(customer_id: &str, email: &str, pin: &str) -> CreateCustomerInput {
        CreateCustomerInput {
            customer_id: customer_id.to_string(),
            first_name: "Alice".to_string(),
            last_name: "Mumbi".to_string(),
            email: email.to_string(),
            pin: pin.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_customer_provisions_account() {
        let repo = Arc::new(InMemoryWalletRepository::new());
        let output = use_case(&repo)
            .execute(input("C1", "alice@example.com", "1234"))
            .await
            .unwrap();

        let account_no = output.account.account_no.as_str();
        assert!(account_no.starts_with(ACCOUNT_NO_PREFIX));
        assert_eq!(
            account_no.len(),
            ACCOUNT_NO_PREFIX.len() + ACCOUNT_NO_HEX_LENGTH
        );
        assert!(
            account_no[ACCOUNT_NO_PREFIX.len()..]
                .chars()
                .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase())
        );
        assert_eq!(output.account.balance, Decimal::ZERO);
        assert_eq!(output.customer.customer_id.as_str(), "C1");
        assert_eq!(output.customer.email.as_str(), "alice@example.com");
    }

    #[tokio::test]
    async fn test_create_customer_stores_hash_not_pin() {
        let repo = Arc::new(InMemoryWalletRepository::new());
        let output = use_case(&repo)
            .execute(input("C1", "alice@example.com", "1234"))
            .await
            .unwrap();

        let phc = output.customer.pin.as_phc_string();
        assert!(phc.starts_with("$argon2"));
        assert!(!phc.contains("1234"));
    }

    #[tokio::test]
    async fn test_duplicate_customer_id_rejected() {
        let repo = Arc::new(InMemoryWalletRepository::new());
        use_case(&repo)
            .execute(input("C1", "alice@example.com", "1234"))
            .await
            .unwrap();

        let err = use_case(&repo)
            .execute(input("C1", "other@example.com", "5678"))
            .await
            .unwrap_err();
        assert!(matches!(err, WalletError::DuplicateCustomerId(id) if id == "C1"));
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let repo = Arc::new(InMemoryWalletRepository::new());
        use_case(&repo)
            .execute(input("C1", "alice@example.com", "1234"))
            .await
            .unwrap();

        let err = use_case(&repo)
            .execute(input("C2", "alice@example.com", "5678"))
            .await
            .unwrap_err();
        assert!(matches!(err, WalletError::DuplicateEmail(email) if email == "alice@example.com"));
    }

    #[tokio::test]
    async fn test_invalid_pin_rejected_before_any_write() {
        let repo = Arc::new(InMemoryWalletRepository::new());
        let err = use_case(&repo)
            .execute(input("C1", "alice@example.com", "12"))
            .await
            .unwrap_err();
        assert!(matches!(err, WalletError::Validation(_)));

        let customers = ListCustomersUseCase::new(repo.clone()).execute().await.unwrap();
        assert!(customers.is_empty());
    }

    #[tokio::test]
    async fn test_output_debug_redacts_credential() {
        let repo = Arc::new(InMemoryWalletRepository::new());
        let output = use_case(&repo)
            .execute(input("C1", "alice@example.com", "1234"))
            .await
            .unwrap();

        let rendered = format!("{:?}", output);
        assert!(rendered.contains("[HASH]"));
        assert!(!rendered.contains("argon2"));
    }

    #[tokio::test]
    async fn test_distinct_customers_get_distinct_accounts() {
        let repo = Arc::new(InMemoryWalletRepository::new());
        let a = use_case(&repo)
            .execute(input("C1", "alice@example.com", "1234"))
            .await
            .unwrap();
        let b = use_case(&repo)
            .execute(input("C2", "bob@example.com", "0000"))
            .await
            .unwrap();
        assert_ne!(a.account.account_no, b.account.account_no);
    }

    #[tokio::test]
    async fn test_email_search_and_delete() {
        let repo = Arc::new(InMemoryWalletRepository::new());
        use_case(&repo)
            .execute(input("C1", "alice@example.com", "1234"))
            .await
            .unwrap();
        use_case(&repo)
            .execute(input("C2", "bob@other.org", "5678"))
            .await
            .unwrap();

        let list = ListCustomersUseCase::new(repo.clone());
        assert_eq!(list.execute().await.unwrap().len(), 2);

        let hits = list.search_by_email("example.com").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].customer_id.as_str(), "C1");

        let delete = DeleteCustomerUseCase::new(repo.clone());
        delete.execute("C1").await.unwrap();
        assert_eq!(list.execute().await.unwrap().len(), 1);

        let err = delete.execute("C1").await.unwrap_err();
        assert!(matches!(err, WalletError::CustomerNotFound));
    }
}

#[cfg(test)]
mod provisioning_rollback_tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::application::{
        CreateCustomerInput, CreateCustomerUseCase, ListCustomersUseCase, LoginInput,
        LoginUseCase, WalletConfig,
    };
    use crate::domain::entity::account::Account;
    use crate::domain::repository::AccountRepository;
    use crate::domain::value_object::{account_no::AccountNo, customer_id::CustomerId};
    use crate::error::{WalletError, WalletResult};
    use crate::infra::memory::InMemoryWalletRepository;

    /// Account store whose first `failures` inserts fail, sharing tables
    /// with the surrounding in-memory repository.
    struct FlakyAccountStore {
        inner: InMemoryWalletRepository,
        failures: AtomicUsize,
    }

    impl AccountRepository for FlakyAccountStore {
        async fn create(&self, account: &Account) -> WalletResult<()> {
            let remaining = self.failures.load(Ordering::SeqCst);
            if remaining > 0 {
                self.failures.store(remaining - 1, Ordering::SeqCst);
                return Err(WalletError::Internal(
                    "account store write failed".to_string(),
                ));
            }
            self.inner.create(account).await
        }

        async fn find_by_customer_id(
            &self,
            customer_id: &CustomerId,
        ) -> WalletResult<Option<Account>> {
            self.inner.find_by_customer_id(customer_id).await
        }

        async fn exists_by_account_no(&self, account_no: &AccountNo) -> WalletResult<bool> {
            self.inner.exists_by_account_no(account_no).await
        }
    }

    #[tokio::test]
    async fn test_failed_account_insert_rolls_back_customer() {
        let repo = Arc::new(InMemoryWalletRepository::new());
        let accounts = Arc::new(FlakyAccountStore {
            inner: (*repo).clone(),
            failures: AtomicUsize::new(1),
        });
        let config = Arc::new(WalletConfig::development());
        let use_case = CreateCustomerUseCase::new(repo.clone(), accounts.clone(), config.clone());

        let input = || CreateCustomerInput {
            customer_id: "C1".to_string(),
            first_name: "Alice".to_string(),
            last_name: "Mumbi".to_string(),
            email: "alice@example.com".to_string(),
            pin: "1234".to_string(),
        };

        let err = use_case.execute(input()).await.unwrap_err();
        assert!(matches!(err, WalletError::Internal(_)));

        // The half-provisioned customer must not survive the failure
        let customers = ListCustomersUseCase::new(repo.clone()).execute().await.unwrap();
        assert!(customers.is_empty());

        // A retry provisions cleanly and the customer can log in
        let output = use_case.execute(input()).await.unwrap();
        let profile = LoginUseCase::new(repo.clone(), accounts.clone(), config)
            .execute(LoginInput {
                customer_id: "C1".to_string(),
                pin: "1234".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(profile.account_no, output.account.account_no);
    }
}

#[cfg(test)]
mod login_tests {
    use std::sync::Arc;

    use crate::application::{
        CreateCustomerInput, CreateCustomerUseCase, LoginInput, LoginUseCase, WalletConfig,
    };
    use crate::error::WalletError;
    use crate::infra::memory::InMemoryWalletRepository;

    async fn provision(
        repo: &Arc<InMemoryWalletRepository>,
        config: &Arc<WalletConfig>,
        customer_id: &str,
        pin: &str,
    ) -> String {
        let output = CreateCustomerUseCase::new(repo.clone(), repo.clone(), config.clone())
            .execute(CreateCustomerInput {
                customer_id: customer_id.to_string(),
                first_name: "Alice".to_string(),
                last_name: "Mumbi".to_string(),
                email: format!("{}@example.com", customer_id.to_lowercase()),
                pin: pin.to_string(),
            })
            .await
            .unwrap();
        output.account.account_no.as_str().to_string()
    }

    #[tokio::test]
    async fn test_login_returns_profile_with_account_no() {
        let repo = Arc::new(InMemoryWalletRepository::new());
        let config = Arc::new(WalletConfig::development());
        let account_no = provision(&repo, &config, "C1", "1234").await;

        let profile = LoginUseCase::new(repo.clone(), repo.clone(), config.clone())
            .execute(LoginInput {
                customer_id: "C1".to_string(),
                pin: "1234".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(profile.customer_id.as_str(), "C1");
        assert_eq!(profile.first_name, "Alice");
        assert_eq!(profile.account_no.as_str(), account_no);
    }

    #[tokio::test]
    async fn test_login_unknown_customer() {
        let repo = Arc::new(InMemoryWalletRepository::new());
        let config = Arc::new(WalletConfig::development());

        let err = LoginUseCase::new(repo.clone(), repo.clone(), config)
            .execute(LoginInput {
                customer_id: "NOBODY".to_string(),
                pin: "1234".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, WalletError::CustomerNotFound));
    }

    #[tokio::test]
    async fn test_login_wrong_pin() {
        let repo = Arc::new(InMemoryWalletRepository::new());
        let config = Arc::new(WalletConfig::development());
        provision(&repo, &config, "C1", "1234").await;

        let err = LoginUseCase::new(repo.clone(), repo.clone(), config)
            .execute(LoginInput {
                customer_id: "C1".to_string(),
                pin: "0000".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, WalletError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_login_malformed_pin_is_invalid_credentials() {
        let repo = Arc::new(InMemoryWalletRepository::new());
        let config = Arc::new(WalletConfig::development());
        provision(&repo, &config, "C1", "1234").await;

        // Does not leak whether the failure was policy or mismatch
        let err = LoginUseCase::new(repo.clone(), repo.clone(), config)
            .execute(LoginInput {
                customer_id: "C1".to_string(),
                pin: "not-digits".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, WalletError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_login_honors_pepper() {
        let repo = Arc::new(InMemoryWalletRepository::new());
        let config = Arc::new(WalletConfig::with_pepper(b"server-secret".to_vec()));
        provision(&repo, &config, "C1", "1234").await;

        let ok = LoginUseCase::new(repo.clone(), repo.clone(), config)
            .execute(LoginInput {
                customer_id: "C1".to_string(),
                pin: "1234".to_string(),
            })
            .await;
        assert!(ok.is_ok());

        // Same PIN verified without the pepper must fail
        let err = LoginUseCase::new(
            repo.clone(),
            repo.clone(),
            Arc::new(WalletConfig::development()),
        )
        .execute(LoginInput {
            customer_id: "C1".to_string(),
            pin: "1234".to_string(),
        })
        .await
        .unwrap_err();
        assert!(matches!(err, WalletError::InvalidCredentials));
    }
}

#[cfg(test)]
mod account_number_tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::application::account_number::generate_account_no;
    use crate::domain::entity::account::Account;
    use crate::domain::repository::AccountRepository;
    use crate::domain::value_object::{account_no::AccountNo, customer_id::CustomerId};
    use crate::error::WalletResult;

    /// Reports the first `collisions` candidates as taken, then yields.
    struct CollidingAccounts {
        collisions: AtomicUsize,
        checks: AtomicUsize,
    }

    impl CollidingAccounts {
        fn new(collisions: usize) -> Self {
            Self {
                collisions: AtomicUsize::new(collisions),
                checks: AtomicUsize::new(0),
            }
        }
    }

    impl AccountRepository for CollidingAccounts {
        async fn create(&self, _account: &Account) -> WalletResult<()> {
            Ok(())
        }

        async fn find_by_customer_id(
            &self,
            _customer_id: &CustomerId,
        ) -> WalletResult<Option<Account>> {
            Ok(None)
        }

        async fn exists_by_account_no(&self, _account_no: &AccountNo) -> WalletResult<bool> {
            self.checks.fetch_add(1, Ordering::SeqCst);
            let remaining = self.collisions.load(Ordering::SeqCst);
            if remaining > 0 {
                self.collisions.store(remaining - 1, Ordering::SeqCst);
                Ok(true)
            } else {
                Ok(false)
            }
        }
    }

    #[tokio::test]
    async fn test_generation_succeeds_without_collision() {
        let accounts = CollidingAccounts::new(0);
        let account_no = generate_account_no(&accounts).await.unwrap();
        assert!(account_no.as_str().starts_with("ACC"));
        assert_eq!(accounts.checks.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_generation_retries_past_collisions() {
        let accounts = CollidingAccounts::new(3);
        let account_no = generate_account_no(&accounts).await.unwrap();
        assert!(account_no.as_str().starts_with("ACC"));
        assert_eq!(accounts.checks.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_generation_avoids_stored_numbers() {
        let repo = crate::infra::memory::InMemoryWalletRepository::new();
        let taken = ["ACC0000000001", "ACC0000000002"];
        for account_no in taken {
            repo.create(&Account::open(
                CustomerId::from_db("C1"),
                AccountNo::from_db(account_no),
            ))
            .await
            .unwrap();
        }

        let generated = generate_account_no(&repo).await.unwrap();
        assert!(!taken.contains(&generated.as_str()));
        assert!(!repo.exists_by_account_no(&generated).await.unwrap());
    }
}

#[cfg(test)]
mod transaction_tests {
    use std::sync::Arc;

    use crate::application::TransactionLookupUseCase;
    use crate::domain::entity::transaction::NewTransaction;
    use crate::domain::repository::TransactionRepository;
    use crate::domain::value_object::{account_no::AccountNo, customer_id::CustomerId};
    use crate::infra::memory::InMemoryWalletRepository;
    use rust_decimal::Decimal;

    async fn seed(repo: &InMemoryWalletRepository, n: usize, customer: &str, account: &str) {
        let customer_id = CustomerId::new(customer).unwrap();
        let account_no = AccountNo::new(account).unwrap();
        for i in 1..=n {
            repo.record(&NewTransaction {
                transaction_id: format!("TX{i}"),
                customer_id: customer_id.clone(),
                account_no: account_no.clone(),
                amount: Decimal::new(i as i64 * 100, 2),
            })
            .await
            .unwrap();
        }
    }

    #[tokio::test]
    async fn test_mini_statement_most_recent_first() {
        let repo = Arc::new(InMemoryWalletRepository::new());
        seed(&repo, 5, "C1", "ACC0123456789").await;

        let lookup = TransactionLookupUseCase::new(repo.clone());
        let statement = lookup.mini_statement("C1", "ACC0123456789").await.unwrap();

        assert_eq!(statement.len(), 5);
        let ids: Vec<_> = statement.iter().map(|t| &t.transaction_id).collect();
        assert_eq!(ids, ["TX5", "TX4", "TX3", "TX2", "TX1"]);
        for pair in statement.windows(2) {
            assert!(pair[0].id > pair[1].id);
        }
    }

    #[tokio::test]
    async fn test_mini_statement_filters_both_keys() {
        let repo = Arc::new(InMemoryWalletRepository::new());
        seed(&repo, 3, "C1", "ACC0123456789").await;
        seed(&repo, 2, "C2", "ACCfedcba9876").await;

        let lookup = TransactionLookupUseCase::new(repo.clone());
        let statement = lookup.mini_statement("C1", "ACC0123456789").await.unwrap();
        assert_eq!(statement.len(), 3);

        // Right customer, wrong account
        let cross = lookup.mini_statement("C1", "ACCfedcba9876").await.unwrap();
        assert!(cross.is_empty());
    }

    #[tokio::test]
    async fn test_lookup_by_customer_and_by_transaction_id() {
        let repo = Arc::new(InMemoryWalletRepository::new());
        seed(&repo, 3, "C1", "ACC0123456789").await;

        let lookup = TransactionLookupUseCase::new(repo.clone());

        assert_eq!(lookup.by_customer("C1").await.unwrap().len(), 3);
        assert_eq!(lookup.by_customer("C2").await.unwrap().len(), 0);

        let hits = lookup.by_transaction_id("TX2").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].transaction_id, "TX2");
        assert!(lookup.by_transaction_id("TX999").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_lookup_by_customer_or_transaction_id() {
        let repo = Arc::new(InMemoryWalletRepository::new());
        seed(&repo, 2, "C1", "ACC0123456789").await;
        seed(&repo, 1, "C2", "ACCfedcba9876").await;

        let lookup = TransactionLookupUseCase::new(repo.clone());

        // Matches TX1 from both customers plus everything owned by C1
        let hits = lookup.by_customer_or_transaction_id("TX1", "C1").await.unwrap();
        assert_eq!(hits.len(), 3);

        // Neither predicate matches
        let none = lookup.by_customer_or_transaction_id("TX999", "C9").await.unwrap();
        assert!(none.is_empty());
    }
}

#[cfg(test)]
mod customer_store_tests {
    use crate::domain::entity::customer::Customer;
    use crate::domain::repository::CustomerRepository;
    use crate::domain::value_object::{
        customer_id::CustomerId,
        email::Email,
        pin::{CustomerPin, RawPin},
    };
    use crate::error::WalletError;
    use crate::infra::memory::InMemoryWalletRepository;

    fn customer(customer_id: &str, email: &str) -> Customer {
        let raw = RawPin::new("1234".to_string()).unwrap();
        Customer::new(
            CustomerId::new(customer_id).unwrap(),
            "Alice".to_string(),
            "Mumbi".to_string(),
            Email::new(email).unwrap(),
            CustomerPin::from_raw(&raw, None).unwrap(),
        )
    }

    // The insert itself is the authoritative uniqueness guard; a writer
    // that skipped every pre-check still gets the conflict.
    #[tokio::test]
    async fn test_create_rejects_duplicates_at_the_store() {
        let repo = InMemoryWalletRepository::new();
        repo.create(&customer("C1", "alice@example.com")).await.unwrap();

        let err = repo
            .create(&customer("C1", "other@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, WalletError::DuplicateCustomerId(id) if id == "C1"));

        let err = repo
            .create(&customer("C2", "alice@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, WalletError::DuplicateEmail(email) if email == "alice@example.com"));
    }

    #[tokio::test]
    async fn test_find_by_email() {
        let repo = InMemoryWalletRepository::new();
        repo.create(&customer("C1", "alice@example.com")).await.unwrap();

        let found = repo
            .find_by_email(&Email::new("alice@example.com").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.customer_id.as_str(), "C1");

        let missing = repo
            .find_by_email(&Email::new("nobody@example.com").unwrap())
            .await
            .unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_update_first_name() {
        let repo = InMemoryWalletRepository::new();
        repo.create(&customer("C1", "alice@example.com")).await.unwrap();

        let c1 = CustomerId::new("C1").unwrap();
        let touched = repo.update_first_name(&c1, "Alicia").await.unwrap();
        assert_eq!(touched, 1);

        let updated = repo.find_by_customer_id(&c1).await.unwrap().unwrap();
        assert_eq!(updated.first_name, "Alicia");
        assert!(updated.updated_at >= updated.created_at);

        let absent = CustomerId::new("C9").unwrap();
        assert_eq!(repo.update_first_name(&absent, "X").await.unwrap(), 0);
    }
}

#[cfg(test)]
mod account_store_tests {
    use crate::domain::entity::account::Account;
    use crate::domain::repository::AccountRepository;
    use crate::domain::value_object::{account_no::AccountNo, customer_id::CustomerId};
    use crate::error::WalletError;
    use crate::infra::memory::InMemoryWalletRepository;

    #[tokio::test]
    async fn test_create_rejects_duplicate_account_no() {
        let repo = InMemoryWalletRepository::new();
        let taken = AccountNo::from_db("ACC0123456789");

        repo.create(&Account::open(CustomerId::from_db("C1"), taken.clone()))
            .await
            .unwrap();

        let err = repo
            .create(&Account::open(CustomerId::from_db("C2"), taken))
            .await
            .unwrap_err();
        assert!(matches!(err, WalletError::DuplicateAccountNo(no) if no == "ACC0123456789"));
    }
}

#[cfg(test)]
mod router_tests {
    use crate::application::WalletConfig;
    use crate::infra::memory::InMemoryWalletRepository;
    use crate::presentation::router::wallet_router_generic;

    #[test]
    fn test_router_builds_over_memory_store() {
        let repo = InMemoryWalletRepository::new();
        let _router = wallet_router_generic(repo, WalletConfig::development());
    }
}
