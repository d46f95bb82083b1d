//! Customer repository.

use async_trait::async_trait;
use common::CustomerId;
use domain::repository::Result;
use domain::{
    Address, Customer, CustomerRepository, DomainError, Entity, Repository, RepositoryError,
};
use sqlx::SqlitePool;

/// Row of the `customers` table.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct CustomerRecord {
    pub id: String,
    pub name: String,
    pub street: Option<String>,
    pub number: Option<i64>,
    pub zipcode: Option<String>,
    pub city: Option<String>,
    pub active: bool,
    pub reward_points: i64,
}

impl CustomerRecord {
    pub fn from_entity(customer: &Customer) -> Self {
        let address = customer.address();
        Self {
            id: customer.id().to_string(),
            name: customer.name().to_string(),
            street: address.map(|a| a.street().to_string()),
            number: address.map(|a| i64::from(a.number())),
            zipcode: address.map(|a| a.zip().to_string()),
            city: address.map(|a| a.city().to_string()),
            active: customer.is_active(),
            reward_points: customer.reward_points(),
        }
    }

    pub fn into_entity(self) -> std::result::Result<Customer, DomainError> {
        let mut customer = Customer::new(self.id, self.name)?;
        if let (Some(street), Some(number), Some(zip), Some(city)) =
            (self.street, self.number, self.zipcode, self.city)
        {
            let number = u32::try_from(number).unwrap_or(0);
            customer.change_address(Address::new(street, number, zip, city)?);
        }
        if self.active {
            customer.activate()?;
        }
        customer.add_reward_points(self.reward_points);
        Ok(customer)
    }
}

const SELECT_CUSTOMER: &str = "SELECT id, name, street, number, zipcode, city, active, reward_points FROM customers";

/// SQLite-backed customer repository.
#[derive(Clone)]
pub struct SqliteCustomerRepository {
    pool: SqlitePool,
}

impl SqliteCustomerRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Customer> for SqliteCustomerRepository {
    #[tracing::instrument(skip_all, fields(customer_id = %entity.id()))]
    async fn create(&self, entity: &Customer) -> Result<()> {
        let record = CustomerRecord::from_entity(entity);
        sqlx::query(
            r#"
            INSERT INTO customers (id, name, street, number, zipcode, city, active, reward_points)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&record.id)
        .bind(&record.name)
        .bind(&record.street)
        .bind(record.number)
        .bind(&record.zipcode)
        .bind(&record.city)
        .bind(record.active)
        .bind(record.reward_points)
        .execute(&self.pool)
        .await
        .map_err(RepositoryError::storage)?;

        metrics::counter!("repository_writes", "entity" => "customer", "operation" => "create")
            .increment(1);
        Ok(())
    }

    #[tracing::instrument(skip_all, fields(customer_id = %entity.id()))]
    async fn update(&self, entity: &Customer) -> Result<()> {
        let record = CustomerRecord::from_entity(entity);
        let result = sqlx::query(
            r#"
            UPDATE customers
            SET name = ?, street = ?, number = ?, zipcode = ?, city = ?, active = ?, reward_points = ?
            WHERE id = ?
            "#,
        )
        .bind(&record.name)
        .bind(&record.street)
        .bind(record.number)
        .bind(&record.zipcode)
        .bind(&record.city)
        .bind(record.active)
        .bind(record.reward_points)
        .bind(&record.id)
        .execute(&self.pool)
        .await
        .map_err(RepositoryError::storage)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(Customer::entity_name()));
        }
        metrics::counter!("repository_writes", "entity" => "customer", "operation" => "update")
            .increment(1);
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn find(&self, id: &CustomerId) -> Result<Customer> {
        let record = sqlx::query_as::<_, CustomerRecord>(&format!("{SELECT_CUSTOMER} WHERE id = ?"))
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(RepositoryError::storage)?
            .ok_or(RepositoryError::NotFound(Customer::entity_name()))?;

        Ok(record.into_entity()?)
    }

    #[tracing::instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<Customer>> {
        let records =
            sqlx::query_as::<_, CustomerRecord>(&format!("{SELECT_CUSTOMER} ORDER BY rowid"))
                .fetch_all(&self.pool)
                .await
                .map_err(RepositoryError::storage)?;

        records
            .into_iter()
            .map(|r| r.into_entity().map_err(RepositoryError::from))
            .collect()
    }
}

impl CustomerRepository for SqliteCustomerRepository {}
