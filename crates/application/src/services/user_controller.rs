//! User controller - the "change a user's email" use case
//!
//! Loads a user and their company, applies the domain rule, writes the
//! results back and announces the change on the message bus.
//!
//! Writes are serialized per company: the employee count and the user are
//! read, adjusted and written under a company-wide lock taken from the
//! database's [`CompanyLocks`](crate::CompanyLocks) registry. Every
//! controller over the same store therefore waits on the same lock.

use std::{fmt, sync::Arc};

use domain::{Company, CompanyId, DomainError, User, UserId};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::{DatabasePort, MessageBusPort},
};

/// Result of a successful email change
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailChangeOutcome {
    /// The user as stored after the change
    pub user: User,
    /// The company's employee count after the change
    pub number_of_employees: u32,
    /// `false` when the new email equaled the old one and nothing was written
    pub changed: bool,
}

/// Orchestrates user changes across the database and message bus
pub struct UserController {
    database: Arc<dyn DatabasePort>,
    message_bus: Arc<dyn MessageBusPort>,
    company_id: CompanyId,
}

impl fmt::Debug for UserController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserController")
            .field("company_id", &self.company_id)
            .finish_non_exhaustive()
    }
}

impl UserController {
    /// Create a controller for the given company
    pub fn new(
        database: Arc<dyn DatabasePort>,
        message_bus: Arc<dyn MessageBusPort>,
        company_id: CompanyId,
    ) -> Self {
        Self {
            database,
            message_bus,
            company_id,
        }
    }

    /// The company whose headcount this controller maintains
    pub const fn company_id(&self) -> CompanyId {
        self.company_id
    }

    /// Load a user
    ///
    /// # Errors
    ///
    /// Returns a not-found domain error if the user does not exist.
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub async fn get_user(&self, user_id: &UserId) -> Result<User, ApplicationError> {
        self.database
            .get_user_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("User", user_id.to_string()).into())
    }

    /// Load the controller's company
    ///
    /// # Errors
    ///
    /// Returns a not-found domain error if the company does not exist.
    pub async fn get_company(&self) -> Result<Company, ApplicationError> {
        self.database
            .get_company(&self.company_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Company", self.company_id.to_string()).into())
    }

    /// Change a user's email, reclassifying them and updating the headcount
    ///
    /// Nothing is written if loading or the domain rule fails. Company count
    /// and user are saved through one [`DatabasePort::save_email_change`]
    /// call, then the message bus is notified. Setting the current email
    /// again writes nothing and sends nothing.
    ///
    /// # Errors
    ///
    /// - domain errors for a malformed email or an unknown user or company
    /// - [`ApplicationError::Persistence`] if saving fails
    /// - [`ApplicationError::ExternalService`] if the change was saved but
    ///   the notification could not be sent
    #[instrument(skip(self, new_email), fields(user_id = %user_id, company_id = %self.company_id))]
    pub async fn change_email(
        &self,
        user_id: &UserId,
        new_email: &str,
    ) -> Result<EmailChangeOutcome, ApplicationError> {
        let lock = self.database.company_locks().lock_for(&self.company_id);
        let _guard = lock.lock().await;

        let mut user = self.get_user(user_id).await?;
        let company = self.get_company().await?;

        let previous_email = user.email().clone();
        let previous_type = user.user_type();
        let number_of_employees = user.change_email(
            new_email,
            company.domain_name(),
            company.number_of_employees(),
        )?;

        if *user.email() == previous_email {
            debug!("Email unchanged, nothing to save");
            return Ok(EmailChangeOutcome {
                user,
                number_of_employees,
                changed: false,
            });
        }

        self.database
            .save_email_change(&self.company_id, number_of_employees, &user)
            .await?;

        info!(
            from_type = %previous_type,
            to_type = %user.user_type(),
            number_of_employees,
            "User email changed"
        );

        if let Err(e) = self
            .message_bus
            .send_email_changed_message(user_id, user.email())
            .await
        {
            warn!(error = %e, "Email change saved but notification failed");
            return Err(e);
        }

        Ok(EmailChangeOutcome {
            user,
            number_of_employees,
            changed: true,
        })
    }

    /// Give a user a new display name
    ///
    /// The name is trimmed and capped at 50 characters. No notification is
    /// sent. Runs under the company lock so it can not write back a user
    /// whose email changed after it was loaded.
    ///
    /// # Errors
    ///
    /// Returns a domain error for an unknown user or a blank name, and
    /// [`ApplicationError::Persistence`] if saving fails.
    #[instrument(skip(self, new_name), fields(user_id = %user_id))]
    pub async fn rename_user(
        &self,
        user_id: &UserId,
        new_name: &str,
    ) -> Result<User, ApplicationError> {
        let lock = self.database.company_locks().lock_for(&self.company_id);
        let _guard = lock.lock().await;

        let mut user = self.get_user(user_id).await?;
        user.rename(new_name)?;
        self.database.save_user(&user).await?;

        debug!("User renamed");
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use domain::{DomainName, EmailAddress, UserType};
    use mockall::predicate::eq;

    use super::*;
    use crate::{
        locks::CompanyLocks,
        ports::{MockDatabasePort, MockMessageBusPort},
    };

    fn acme(company_id: CompanyId, count: u32) -> Company {
        Company::new(company_id, DomainName::new("acme.com").unwrap(), count)
    }

    fn user(id: UserId, email: &str, user_type: UserType) -> User {
        User::new(id, EmailAddress::new(email).unwrap(), user_type)
    }

    fn database_with(
        stored_user: Option<User>,
        company: Option<Company>,
    ) -> MockDatabasePort {
        let mut db = MockDatabasePort::new();
        db.expect_company_locks().return_const(CompanyLocks::new());
        db.expect_get_user_by_id()
            .returning(move |_| Ok(stored_user.clone()));
        db.expect_get_company()
            .returning(move |_| Ok(company.clone()));
        db
    }

    fn controller(
        db: MockDatabasePort,
        bus: MockMessageBusPort,
        company_id: CompanyId,
    ) -> UserController {
        UserController::new(Arc::new(db), Arc::new(bus), company_id)
    }

    #[tokio::test]
    async fn customer_joining_company_domain_becomes_employee() {
        let company_id = CompanyId::new();
        let user_id = UserId::new();
        let mut db = database_with(
            Some(user(user_id, "joe@gmail.com", UserType::Customer)),
            Some(acme(company_id, 10)),
        );
        db.expect_save_email_change()
            .withf(move |id, count, saved| {
                *id == company_id
                    && *count == 11
                    && saved.user_type() == UserType::Employee
                    && saved.email().as_str() == "joe@acme.com"
            })
            .times(1)
            .returning(|_, _, _| Ok(()));

        let mut bus = MockMessageBusPort::new();
        bus.expect_send_email_changed_message()
            .withf(move |id, email| *id == user_id && email.as_str() == "joe@acme.com")
            .times(1)
            .returning(|_, _| Ok(()));

        let outcome = controller(db, bus, company_id)
            .change_email(&user_id, "joe@acme.com")
            .await
            .unwrap();

        assert!(outcome.changed);
        assert_eq!(outcome.number_of_employees, 11);
        assert_eq!(outcome.user.user_type(), UserType::Employee);
    }

    #[tokio::test]
    async fn employee_leaving_company_domain_becomes_customer() {
        let company_id = CompanyId::new();
        let user_id = UserId::new();
        let mut db = database_with(
            Some(user(user_id, "joe@acme.com", UserType::Employee)),
            Some(acme(company_id, 11)),
        );
        db.expect_save_email_change()
            .withf(|_, count, _| *count == 10)
            .times(1)
            .returning(|_, _, _| Ok(()));

        let mut bus = MockMessageBusPort::new();
        bus.expect_send_email_changed_message()
            .times(1)
            .returning(|_, _| Ok(()));

        let outcome = controller(db, bus, company_id)
            .change_email(&user_id, "joe@gmail.com")
            .await
            .unwrap();

        assert_eq!(outcome.number_of_employees, 10);
        assert_eq!(outcome.user.user_type(), UserType::Customer);
    }

    #[tokio::test]
    async fn unchanged_email_writes_and_sends_nothing() {
        let company_id = CompanyId::new();
        let user_id = UserId::new();
        let mut db = database_with(
            Some(user(user_id, "joe@acme.com", UserType::Customer)),
            Some(acme(company_id, 10)),
        );
        db.expect_save_email_change().never();

        let mut bus = MockMessageBusPort::new();
        bus.expect_send_email_changed_message().never();

        let outcome = controller(db, bus, company_id)
            .change_email(&user_id, "joe@acme.com")
            .await
            .unwrap();

        assert!(!outcome.changed);
        assert_eq!(outcome.number_of_employees, 10);
        assert_eq!(outcome.user.user_type(), UserType::Customer);
    }

    #[tokio::test]
    async fn malformed_email_aborts_before_writing() {
        let company_id = CompanyId::new();
        let user_id = UserId::new();
        let mut db = database_with(
            Some(user(user_id, "joe@acme.com", UserType::Employee)),
            Some(acme(company_id, 10)),
        );
        db.expect_save_email_change().never();
        let mut bus = MockMessageBusPort::new();
        bus.expect_send_email_changed_message().never();

        let err = controller(db, bus, company_id)
            .change_email(&user_id, "joe-no-at-sign")
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ApplicationError::Domain(DomainError::InvalidEmailAddress(_))
        ));
    }

    #[tokio::test]
    async fn unknown_user_is_not_found() {
        let company_id = CompanyId::new();
        let mut db = database_with(None, Some(acme(company_id, 10)));
        db.expect_save_email_change().never();

        let err = controller(db, MockMessageBusPort::new(), company_id)
            .change_email(&UserId::new(), "joe@acme.com")
            .await
            .unwrap_err();

        assert!(err.is_not_found());
        assert!(err.to_string().starts_with("User not found"));
    }

    #[tokio::test]
    async fn unknown_company_is_not_found() {
        let user_id = UserId::new();
        let mut db = database_with(Some(user(user_id, "joe@gmail.com", UserType::Customer)), None);
        db.expect_save_email_change().never();

        let err = controller(db, MockMessageBusPort::new(), CompanyId::new())
            .change_email(&user_id, "joe@acme.com")
            .await
            .unwrap_err();

        assert!(err.to_string().starts_with("Company not found"));
    }

    #[tokio::test]
    async fn persistence_failure_surfaces_and_skips_notification() {
        let company_id = CompanyId::new();
        let user_id = UserId::new();
        let mut db = database_with(
            Some(user(user_id, "joe@gmail.com", UserType::Customer)),
            Some(acme(company_id, 10)),
        );
        db.expect_save_email_change()
            .returning(|_, _, _| Err(ApplicationError::Persistence("write failed".into())));
        let mut bus = MockMessageBusPort::new();
        bus.expect_send_email_changed_message().never();

        let err = controller(db, bus, company_id)
            .change_email(&user_id, "joe@acme.com")
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::Persistence(_)));
    }

    #[tokio::test]
    async fn notification_failure_is_reported() {
        let company_id = CompanyId::new();
        let user_id = UserId::new();
        let mut db = database_with(
            Some(user(user_id, "joe@gmail.com", UserType::Customer)),
            Some(acme(company_id, 10)),
        );
        db.expect_save_email_change()
            .times(1)
            .returning(|_, _, _| Ok(()));
        let mut bus = MockMessageBusPort::new();
        bus.expect_send_email_changed_message()
            .returning(|_, _| Err(ApplicationError::ExternalService("bus down".into())));

        let err = controller(db, bus, company_id)
            .change_email(&user_id, "joe@acme.com")
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::ExternalService(_)));
    }

    #[tokio::test]
    async fn rename_trims_and_saves() {
        let user_id = UserId::new();
        let mut db = database_with(Some(user(user_id, "joe@acme.com", UserType::Employee)), None);
        db.expect_save_user()
            .withf(|saved| saved.name().map(domain::UserName::as_str) == Some("Joe Smith"))
            .times(1)
            .returning(|_| Ok(()));

        let renamed = controller(db, MockMessageBusPort::new(), CompanyId::new())
            .rename_user(&user_id, "  Joe Smith  ")
            .await
            .unwrap();

        assert_eq!(renamed.name().map(domain::UserName::as_str), Some("Joe Smith"));
    }

    #[tokio::test]
    async fn blank_rename_is_rejected_without_saving() {
        let user_id = UserId::new();
        let mut db = database_with(Some(user(user_id, "joe@acme.com", UserType::Employee)), None);
        db.expect_save_user().never();

        let err = controller(db, MockMessageBusPort::new(), CompanyId::new())
            .rename_user(&user_id, "   ")
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ApplicationError::Domain(DomainError::ValidationError(_))
        ));
    }

    #[tokio::test]
    async fn get_user_queries_by_id() {
        let user_id = UserId::new();
        let stored = user(user_id, "joe@acme.com", UserType::Employee);
        let mut db = MockDatabasePort::new();
        let returned = stored.clone();
        db.expect_get_user_by_id()
            .with(eq(user_id))
            .returning(move |_| Ok(Some(returned.clone())));

        let loaded = controller(db, MockMessageBusPort::new(), CompanyId::new())
            .get_user(&user_id)
            .await
            .unwrap();

        assert_eq!(loaded, stored);
    }

    #[tokio::test]
    async fn writes_take_the_database_lock() {
        let company_id = CompanyId::new();
        let user_id = UserId::new();
        let locks = CompanyLocks::new();
        let mut db = MockDatabasePort::new();
        db.expect_company_locks()
            .times(2)
            .return_const(locks.clone());
        db.expect_get_user_by_id().returning(move |_| {
            Ok(Some(user(user_id, "joe@gmail.com", UserType::Customer)))
        });
        db.expect_get_company()
            .returning(move |_| Ok(Some(acme(company_id, 0))));
        db.expect_save_email_change().returning(|_, _, _| Ok(()));
        db.expect_save_user().returning(|_| Ok(()));
        let mut bus = MockMessageBusPort::new();
        bus.expect_send_email_changed_message()
            .returning(|_, _| Ok(()));
        let controller = controller(db, bus, company_id);

        let held = locks.lock_for(&company_id);
        let guard = held.lock().await;
        let change = controller.change_email(&user_id, "joe@acme.com");
        tokio::pin!(change);
        assert!(still_pending(change.as_mut()).await);
        drop(guard);
        change.await.unwrap();

        let guard = held.lock().await;
        let rename = controller.rename_user(&user_id, "Joe");
        tokio::pin!(rename);
        assert!(still_pending(rename.as_mut()).await);
        drop(guard);
        rename.await.unwrap();
    }

    /// Poll a future briefly and report whether it is still waiting
    async fn still_pending<F: std::future::Future>(fut: std::pin::Pin<&mut F>) -> bool {
        tokio::time::timeout(std::time::Duration::from_millis(20), fut)
            .await
            .is_err()
    }

    #[test]
    fn debug_hides_ports() {
        let company_id = CompanyId::new();
        let controller = controller(
            MockDatabasePort::new(),
            MockMessageBusPort::new(),
            company_id,
        );
        let debug = format!("{controller:?}");
        assert!(debug.contains("UserController"));
        assert!(debug.contains(&company_id.to_string()));
    }
}
