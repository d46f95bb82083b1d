use std::sync::Arc;

use criterion::{Criterion, criterion_group, criterion_main};
use domain::{
    CustomerCreatedEvent, CustomerFactory, DomainEvent, EventDispatcher, EventHandler, Money,
    Order, OrderItem,
};

struct NoopHandler;

impl EventHandler for NoopHandler {
    fn handle(&self, event: &dyn DomainEvent) {
        std::hint::black_box(event.event_type());
    }
}

fn bench_notify(c: &mut Criterion) {
    let mut dispatcher = EventDispatcher::new();
    for _ in 0..8 {
        dispatcher.register(CustomerCreatedEvent::EVENT_TYPE, Arc::new(NoopHandler));
    }
    let customer = CustomerFactory::create("Bench Customer").unwrap();
    let event = CustomerCreatedEvent::new(&customer);

    c.bench_function("dispatcher/notify_8_handlers", |b| {
        b.iter(|| dispatcher.notify(std::hint::black_box(&event)));
    });
}

fn bench_notify_unregistered(c: &mut Criterion) {
    let dispatcher = EventDispatcher::new();
    let customer = CustomerFactory::create("Bench Customer").unwrap();
    let event = CustomerCreatedEvent::new(&customer);

    c.bench_function("dispatcher/notify_no_handlers", |b| {
        b.iter(|| dispatcher.notify(std::hint::black_box(&event)));
    });
}

fn bench_order_total(c: &mut Criterion) {
    let items: Vec<OrderItem> = (0..100)
        .map(|i| {
            OrderItem::new(
                format!("item-{i}"),
                "Widget",
                Money::from_cents(100 + i),
                "SKU-BENCH",
                2,
            )
            .unwrap()
        })
        .collect();
    let order = Order::new("bench-order", "bench-customer", items).unwrap();

    c.bench_function("domain/order_total_100_items", |b| {
        b.iter(|| std::hint::black_box(&order).total());
    });
}

criterion_group!(
    benches,
    bench_notify,
    bench_notify_unregistered,
    bench_order_total
);
criterion_main!(benches);
