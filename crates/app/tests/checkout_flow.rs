//! End-to-end checkout flows over an in-memory SQLite database.

use std::sync::{Arc, Mutex};

use app::{OrderLine, SqliteCheckoutApp};
use domain::{
    Address, CustomerAddressChangedEvent, CustomerCreatedEvent, CustomerId, DomainEvent, Entity,
    EventHandler, Money, OrderId, OrderItemId, ProductCreatedEvent,
};

/// Records the type of every event it receives, plus the new address of
/// address-change events.
#[derive(Default)]
struct Recorder {
    events: Mutex<Vec<String>>,
}

impl EventHandler for Recorder {
    fn handle(&self, event: &dyn DomainEvent) {
        let entry = match event.downcast_ref::<CustomerAddressChangedEvent>() {
            Some(changed) => format!("{}: {}", event.event_type(), changed.address),
            None => event.event_type().to_string(),
        };
        self.events.lock().unwrap().push(entry);
    }
}

impl Recorder {
    fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

async fn setup() -> (SqliteCheckoutApp, Arc<Recorder>) {
    let pool = infrastructure::connect_in_memory().await.unwrap();
    let recorder = Arc::new(Recorder::default());

    let mut dispatcher = app::default_dispatcher();
    for event_type in [
        CustomerCreatedEvent::EVENT_TYPE,
        CustomerAddressChangedEvent::EVENT_TYPE,
        ProductCreatedEvent::EVENT_TYPE,
    ] {
        dispatcher.register(event_type, recorder.clone());
    }

    (app::sqlite_app(pool, dispatcher), recorder)
}

fn address() -> Address {
    Address::new("Street 1", 123, "13330-250", "São Paulo").unwrap()
}

mod customers {
    use super::*;

    #[tokio::test]
    async fn register_customer_persists_and_publishes() {
        let (app, recorder) = setup().await;

        let customer = app.register_customer("Customer 1", Some(address())).await.unwrap();

        let stored = app.customer(customer.id()).await.unwrap();
        assert_eq!(stored, customer);
        assert_eq!(stored.address(), Some(&address()));
        assert_eq!(recorder.events(), vec!["CustomerCreatedEvent"]);
    }

    #[tokio::test]
    async fn invalid_customer_is_neither_stored_nor_published() {
        let (app, recorder) = setup().await;

        let err = app.register_customer("", None).await.unwrap_err();

        assert_eq!(err.to_string(), "Name is required");
        assert!(app.customers().await.unwrap().is_empty());
        assert!(recorder.events().is_empty());
    }

    #[tokio::test]
    async fn change_address_persists_and_publishes_new_address() {
        let (app, recorder) = setup().await;
        let customer = app.register_customer("Customer 1", None).await.unwrap();

        let moved = Address::new("Street 2", 7, "12345", "Lisbon").unwrap();
        app.change_customer_address(customer.id(), moved.clone())
            .await
            .unwrap();

        let stored = app.customer(customer.id()).await.unwrap();
        assert_eq!(stored.address(), Some(&moved));
        assert_eq!(
            recorder.events(),
            vec![
                "CustomerCreatedEvent".to_string(),
                "CustomerAddressChangedEvent: Street 2, 7, 12345 Lisbon".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn change_address_of_missing_customer_fails() {
        let (app, recorder) = setup().await;

        let err = app
            .change_customer_address(&CustomerId::new("ghost"), address())
            .await
            .unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Customer not found");
        assert!(recorder.events().is_empty());
    }
}

mod products {
    use super::*;

    #[tokio::test]
    async fn add_product_persists_and_publishes() {
        let (app, recorder) = setup().await;

        let product = app
            .add_product("Product 1", Money::from_cents(2500))
            .await
            .unwrap();

        assert_eq!(app.products().await.unwrap(), vec![product]);
        assert_eq!(recorder.events(), vec!["ProductCreatedEvent"]);
    }

    #[tokio::test]
    async fn product_without_price_is_rejected() {
        let (app, recorder) = setup().await;

        let err = app
            .add_product("Product 1", Money::zero())
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Price must be greater than zero");
        assert!(app.products().await.unwrap().is_empty());
        assert!(recorder.events().is_empty());
    }
}

mod orders {
    use super::*;

    #[tokio::test]
    async fn place_order_prices_lines_and_rewards_customer() {
        let (app, _) = setup().await;
        let customer = app.register_customer("Customer 1", Some(address())).await.unwrap();
        let p1 = app.add_product("Product 1", Money::from_cents(1000)).await.unwrap();
        let p2 = app.add_product("Product 2", Money::from_cents(250)).await.unwrap();

        let order = app
            .place_order(
                customer.id(),
                &[
                    OrderLine::new(p1.id().clone(), 2),
                    OrderLine::new(p2.id().clone(), 4),
                ],
            )
            .await
            .unwrap();

        assert_eq!(order.total(), Money::from_cents(3000));
        assert_eq!(order.customer_id(), customer.id());
        assert_eq!(order.items()[0].name(), "Product 1");
        assert_eq!(order.items()[1].price(), Money::from_cents(250));

        assert_eq!(app.order(order.id()).await.unwrap(), order);
        assert_eq!(app.customer(customer.id()).await.unwrap().reward_points(), 1500);
    }

    #[tokio::test]
    async fn place_order_with_unknown_product_stores_nothing() {
        let (app, _) = setup().await;
        let customer = app.register_customer("Customer 1", None).await.unwrap();

        let err = app
            .place_order(customer.id(), &[OrderLine::new("missing", 1)])
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Product not found");
        assert!(app.orders().await.unwrap().is_empty());
        assert_eq!(app.customer(customer.id()).await.unwrap().reward_points(), 0);
    }

    #[tokio::test]
    async fn place_order_without_lines_fails() {
        let (app, _) = setup().await;
        let customer = app.register_customer("Customer 1", None).await.unwrap();

        let err = app.place_order(customer.id(), &[]).await.unwrap_err();

        assert_eq!(err.to_string(), "Order must have at least one item");
    }

    #[tokio::test]
    async fn change_item_quantity_updates_stored_order() {
        let (app, _) = setup().await;
        let customer = app.register_customer("Customer 1", None).await.unwrap();
        let product = app.add_product("Product 1", Money::from_cents(100)).await.unwrap();
        let order = app
            .place_order(customer.id(), &[OrderLine::new(product.id().clone(), 1)])
            .await
            .unwrap();
        let item_id = order.items()[0].id().clone();

        let updated = app
            .change_item_quantity(order.id(), &item_id, 5)
            .await
            .unwrap();

        assert_eq!(updated.total(), Money::from_cents(500));
        assert_eq!(app.order(order.id()).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn invalid_quantity_change_leaves_order_untouched() {
        let (app, _) = setup().await;
        let customer = app.register_customer("Customer 1", None).await.unwrap();
        let product = app.add_product("Product 1", Money::from_cents(100)).await.unwrap();
        let order = app
            .place_order(customer.id(), &[OrderLine::new(product.id().clone(), 2)])
            .await
            .unwrap();
        let item_id = order.items()[0].id().clone();

        let err = app
            .change_item_quantity(order.id(), &item_id, 0)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Quantity must be greater than 0");

        let err = app
            .change_item_quantity(order.id(), &OrderItemId::new("nope"), 3)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Item not found: nope");

        assert_eq!(app.order(order.id()).await.unwrap(), order);
    }

    #[tokio::test]
    async fn missing_order_is_not_found() {
        let (app, _) = setup().await;

        let err = app.order(&OrderId::new("ghost")).await.unwrap_err();

        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn orders_are_listed_in_placement_order() {
        let (app, _) = setup().await;
        let customer = app.register_customer("Customer 1", None).await.unwrap();
        let product = app.add_product("Product 1", Money::from_cents(100)).await.unwrap();

        let first = app
            .place_order(customer.id(), &[OrderLine::new(product.id().clone(), 1)])
            .await
            .unwrap();
        let second = app
            .place_order(customer.id(), &[OrderLine::new(product.id().clone(), 3)])
            .await
            .unwrap();

        assert_eq!(app.orders().await.unwrap(), vec![first, second]);
        assert_eq!(app.customer(customer.id()).await.unwrap().reward_points(), 200);
    }
}
