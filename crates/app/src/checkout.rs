//! Checkout use cases.

use common::{CustomerId, OrderId, OrderItemId, ProductId};
use domain::{
    Address, Customer, CustomerAddressChangedEvent, CustomerCreatedEvent, CustomerFactory,
    CustomerRepository, DomainError, Entity, EventDispatcher, Money, Order, OrderItem,
    OrderRepository, OrderService, Product, ProductCreatedEvent, ProductFactory,
    ProductRepository, Repository,
};

use crate::error::Result;

/// One requested line of an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub quantity: u32,
}

impl OrderLine {
    pub fn new(product_id: impl Into<ProductId>, quantity: u32) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
        }
    }
}

/// Application service coordinating repositories and domain events.
///
/// Events are published only after the change they describe has been
/// stored.
pub struct CheckoutApp<C, P, O> {
    customers: C,
    products: P,
    orders: O,
    dispatcher: EventDispatcher,
}

impl<C, P, O> CheckoutApp<C, P, O>
where
    C: CustomerRepository,
    P: ProductRepository,
    O: OrderRepository,
{
    pub fn new(customers: C, products: P, orders: O, dispatcher: EventDispatcher) -> Self {
        Self {
            customers,
            products,
            orders,
            dispatcher,
        }
    }

    pub fn dispatcher(&self) -> &EventDispatcher {
        &self.dispatcher
    }

    /// Gives access to the dispatcher for registering extra handlers.
    pub fn dispatcher_mut(&mut self) -> &mut EventDispatcher {
        &mut self.dispatcher
    }

    /// Registers a new customer and publishes `CustomerCreatedEvent`.
    #[tracing::instrument(skip(self, address))]
    pub async fn register_customer(
        &self,
        name: &str,
        address: Option<Address>,
    ) -> Result<Customer> {
        let customer = match address {
            Some(address) => CustomerFactory::create_with_address(name, address),
            None => CustomerFactory::create(name),
        }
        .map_err(DomainError::from)?;

        self.customers.create(&customer).await?;
        self.dispatcher
            .notify(&CustomerCreatedEvent::new(&customer));

        tracing::info!(customer_id = %customer.id(), "customer registered");
        Ok(customer)
    }

    /// Moves a customer to `address` and publishes
    /// `CustomerAddressChangedEvent`.
    #[tracing::instrument(skip(self, address))]
    pub async fn change_customer_address(
        &self,
        customer_id: &CustomerId,
        address: Address,
    ) -> Result<Customer> {
        let mut customer = self.customers.find(customer_id).await?;
        customer.change_address(address.clone());
        self.customers.update(&customer).await?;

        self.dispatcher
            .notify(&CustomerAddressChangedEvent::new(&customer, address));
        Ok(customer)
    }

    /// Adds a product to the catalog and publishes `ProductCreatedEvent`.
    #[tracing::instrument(skip(self))]
    pub async fn add_product(&self, name: &str, price: Money) -> Result<Product> {
        let product = ProductFactory::create(name, price).map_err(DomainError::from)?;

        self.products.create(&product).await?;
        self.dispatcher.notify(&ProductCreatedEvent::new(&product));

        tracing::info!(product_id = %product.id(), price = %product.price(), "product added");
        Ok(product)
    }

    /// Places an order for an existing customer.
    ///
    /// Each line is priced from the current catalog. The customer's earned
    /// reward points are stored together with the order.
    #[tracing::instrument(skip(self, lines), fields(lines = lines.len()))]
    pub async fn place_order(&self, customer_id: &CustomerId, lines: &[OrderLine]) -> Result<Order> {
        let mut customer = self.customers.find(customer_id).await?;

        let mut items = Vec::with_capacity(lines.len());
        for line in lines {
            let product = self.products.find(&line.product_id).await?;
            let item = OrderItem::new(
                OrderItemId::generate(),
                product.name(),
                product.price(),
                product.id().clone(),
                line.quantity,
            )
            .map_err(DomainError::from)?;
            items.push(item);
        }

        let order = OrderService::place_order(&mut customer, items).map_err(DomainError::from)?;
        self.orders.create(&order).await?;
        self.customers.update(&customer).await?;

        tracing::info!(
            order_id = %order.id(),
            total = %order.total(),
            reward_points = customer.reward_points(),
            "order placed"
        );
        Ok(order)
    }

    /// Changes the quantity of one item of a stored order.
    #[tracing::instrument(skip(self))]
    pub async fn change_item_quantity(
        &self,
        order_id: &OrderId,
        item_id: &OrderItemId,
        quantity: u32,
    ) -> Result<Order> {
        let mut order = self.orders.find(order_id).await?;
        order
            .change_item_quantity(item_id, quantity)
            .map_err(DomainError::from)?;
        self.orders.update(&order).await?;
        Ok(order)
    }

    pub async fn customer(&self, id: &CustomerId) -> Result<Customer> {
        Ok(self.customers.find(id).await?)
    }

    pub async fn customers(&self) -> Result<Vec<Customer>> {
        Ok(self.customers.find_all().await?)
    }

    pub async fn products(&self) -> Result<Vec<Product>> {
        Ok(self.products.find_all().await?)
    }

    pub async fn order(&self, id: &OrderId) -> Result<Order> {
        Ok(self.orders.find(id).await?)
    }

    pub async fn orders(&self) -> Result<Vec<Order>> {
        Ok(self.orders.find_all().await?)
    }
}
