use crate::entities::Account;
use crate::error::{AccountError, Result};
use crate::repository::AccountRepository;
use crate::schema::SchemaValidator;

/// CRUD orchestration over an injected repository.
///
/// Field rules are enforced on `create` only. `update` copies
/// name/document/phone as given, and both `get_by_id` and `update`
/// report a missing id as `None`; only `delete` treats it as an error.
pub struct AccountService<R: AccountRepository> {
    repo: R,
    validator: SchemaValidator,
}

impl<R: AccountRepository> AccountService<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            validator: SchemaValidator::new(),
        }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn create(&self, account: Account) -> Result<Account> {
        if let Err(err) = self.validator.validate_create(&account) {
            tracing::warn!(error = %err, "Rejected account creation");
            return Err(err.into());
        }

        // Creation always inserts; ids come from the store
        let created = self.repo.save(&account.without_id())?;
        tracing::info!(id = ?created.id, "Account created");

        Ok(created)
    }

    pub fn get_all(&self) -> Result<Vec<Account>> {
        self.repo.find_all()
    }

    pub fn get_by_id(&self, id: i64) -> Result<Option<Account>> {
        tracing::debug!(id, "Looking up account");
        self.repo.find_by_id(id)
    }

    pub fn update(&self, id: i64, account: Account) -> Result<Option<Account>> {
        let Some(existing) = self.get_by_id(id)? else {
            tracing::debug!(id, "Update skipped, account not found");
            return Ok(None);
        };

        // Plain UPDATE: a row deleted since the lookup stays deleted
        let updated = self.repo.update(&existing.with_values_of(&account))?;
        match &updated {
            Some(_) => tracing::info!(id, "Account updated"),
            None => tracing::debug!(id, "Update skipped, account removed concurrently"),
        }

        Ok(updated)
    }

    pub fn delete(&self, id: i64) -> Result<()> {
        match self.repo.find_by_id(id)? {
            Some(account) => {
                self.repo.delete(&account)?;
                tracing::info!(id, "Account deleted");
                Ok(())
            }
            None => {
                tracing::warn!(id, "Delete requested for unknown account");
                Err(AccountError::NotFound)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::open_in_memory;
    use crate::repository::SqliteAccountRepository;

    /// Repository that removes a record right after it has been looked up,
    /// the way a concurrent DELETE would.
    struct DeleteAfterLookup {
        inner: SqliteAccountRepository,
    }

    impl AccountRepository for DeleteAfterLookup {
        fn save(&self, account: &Account) -> Result<Account> {
            self.inner.save(account)
        }

        fn update(&self, account: &Account) -> Result<Option<Account>> {
            self.inner.update(account)
        }

        fn find_all(&self) -> Result<Vec<Account>> {
            self.inner.find_all()
        }

        fn find_by_id(&self, id: i64) -> Result<Option<Account>> {
            let found = self.inner.find_by_id(id)?;
            if let Some(account) = &found {
                self.inner.delete(account)?;
            }
            Ok(found)
        }

        fn delete_all(&self) -> Result<()> {
            self.inner.delete_all()
        }

        fn delete(&self, account: &Account) -> Result<()> {
            self.inner.delete(account)
        }

        fn count(&self) -> Result<i64> {
            self.inner.count()
        }
    }

    fn create_test_service() -> AccountService<SqliteAccountRepository> {
        AccountService::new(SqliteAccountRepository::new(open_in_memory().unwrap()))
    }

    fn validation_message(result: Result<Account>) -> String {
        match result {
            Err(AccountError::Validation(err)) => err.to_string(),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_create_valid_account_assigns_id() {
        let service = create_test_service();

        let created = service
            .create(Account::new("Test Name", "12345678900", "987654321"))
            .unwrap();

        let id = created.id.expect("id assigned");
        let found = service.get_by_id(id).unwrap().unwrap();
        assert_eq!(found, created);
        assert_eq!(found.name, "Test Name");
        assert_eq!(found.document, "12345678900");
        assert_eq!(found.phone, "987654321");
    }

    #[test]
    fn test_create_ignores_incoming_id() {
        let service = create_test_service();
        let existing = service
            .create(Account::new("Existing", "12345678900", "1"))
            .unwrap();

        let created = service
            .create(Account::new("Newcomer", "98765432100", "2").with_id(existing.id.unwrap()))
            .unwrap();

        assert_ne!(created.id, existing.id);
        assert_eq!(service.get_by_id(existing.id.unwrap()).unwrap(), Some(existing));
        assert_eq!(service.get_all().unwrap().len(), 2);
    }

    #[test]
    fn test_create_empty_name() {
        let service = create_test_service();

        let message = validation_message(service.create(Account::new("", "123", "987654321")));

        assert_eq!(message, "[name] nao pode estar em branco");
    }

    #[test]
    fn test_create_short_name() {
        let service = create_test_service();

        let message = validation_message(service.create(Account::new("luiz", "123", "987654321")));

        assert_eq!(message, "[name] minimo 5 caracteres");
    }

    #[test]
    fn test_create_wrong_document_length() {
        let service = create_test_service();

        let message = validation_message(service.create(Account::new("luiz6u", "123", "123456")));

        assert_eq!(message, "[document] precisa ter 11 caracteres");
    }

    #[test]
    fn test_rejected_create_persists_nothing() {
        let service = create_test_service();

        let _ = service.create(Account::new("luiz", "123", "987654321"));

        assert!(service.get_all().unwrap().is_empty());
    }

    #[test]
    fn test_get_all_returns_every_record() {
        let service = create_test_service();
        service.create(Account::new("First one", "12345678900", "1")).unwrap();
        service.create(Account::new("Second one", "12345678901", "2")).unwrap();

        let names: Vec<String> = service
            .get_all()
            .unwrap()
            .into_iter()
            .map(|a| a.name)
            .collect();

        assert_eq!(names, vec!["First one", "Second one"]);
    }

    #[test]
    fn test_get_by_id_missing_is_none() {
        let service = create_test_service();
        assert_eq!(service.get_by_id(99).unwrap(), None);
    }

    #[test]
    fn test_update_replaces_values_and_keeps_id() {
        let service = create_test_service();
        let created = service
            .create(Account::new("Test Name", "12345678900", "987654321"))
            .unwrap();
        let id = created.id.unwrap();

        let updated = service
            .update(id, Account::new("Updated", "123", "555").with_id(777))
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, Some(id));
        assert_eq!(updated.name, "Updated");

        let found = service.get_by_id(id).unwrap().unwrap();
        assert_eq!(found, updated);
        assert_eq!(service.get_by_id(777).unwrap(), None);
    }

    #[test]
    fn test_update_skips_validation() {
        let service = create_test_service();
        let created = service
            .create(Account::new("Test Name", "12345678900", "987654321"))
            .unwrap();

        let updated = service
            .update(created.id.unwrap(), Account::new("", "1", ""))
            .unwrap()
            .unwrap();

        assert_eq!(updated.name, "");
        assert_eq!(updated.document, "1");
    }

    #[test]
    fn test_update_record_stored_without_validation() {
        let service = create_test_service();
        let stored = service
            .repository()
            .save(&Account::new("Test", "123", "987654321"))
            .unwrap();

        let updated = service
            .update(stored.id.unwrap(), Account::new("Updated", "123", "987654321"))
            .unwrap();

        assert_eq!(updated.map(|a| a.name), Some("Updated".to_string()));
    }

    #[test]
    fn test_update_missing_is_none() {
        let service = create_test_service();

        let result = service
            .update(42, Account::new("Test Name", "12345678900", "987654321"))
            .unwrap();

        assert_eq!(result, None);
        assert!(service.get_all().unwrap().is_empty());
    }

    #[test]
    fn test_update_does_not_resurrect_deleted_record() {
        let inner = SqliteAccountRepository::new(open_in_memory().unwrap());
        let stored = inner
            .save(&Account::new("Test Name", "12345678900", "987654321"))
            .unwrap();
        let service = AccountService::new(DeleteAfterLookup { inner });

        let result = service
            .update(stored.id.unwrap(), Account::new("Updated", "12345678900", "1"))
            .unwrap();

        assert_eq!(result, None);
        assert_eq!(service.repository().count().unwrap(), 0);
    }

    #[test]
    fn test_create_accepts_lengths_in_utf16_units() {
        let service = create_test_service();

        let by_name = service.create(Account::new("😀😀😀", "12345678900", "1")).unwrap();
        let by_document = service
            .create(Account::new("Test Name", "123456789😀", "1"))
            .unwrap();

        assert!(by_name.id.is_some());
        assert!(by_document.id.is_some());
        assert_eq!(service.get_all().unwrap().len(), 2);
    }

    #[test]
    fn test_delete_existing() {
        let service = create_test_service();
        let created = service
            .create(Account::new("Test Name", "12345678900", "987654321"))
            .unwrap();
        let id = created.id.unwrap();

        service.delete(id).unwrap();

        assert_eq!(service.get_by_id(id).unwrap(), None);
    }

    #[test]
    fn test_delete_missing_is_not_found() {
        let service = create_test_service();

        let err = service.delete(42).unwrap_err();

        assert!(matches!(err, AccountError::NotFound));
        assert_eq!(err.to_string(), "ID Not Found");
    }

    #[test]
    fn test_delete_twice_fails_second_time() {
        let service = create_test_service();
        let id = service
            .create(Account::new("Test Name", "12345678900", "987654321"))
            .unwrap()
            .id
            .unwrap();

        service.delete(id).unwrap();

        assert!(matches!(service.delete(id), Err(AccountError::NotFound)));
    }
}
