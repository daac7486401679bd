use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use std::rc::Rc;

use retail_catalog::{BasePosition, DeliveryMethod, DiscountedPosition, Product, SharedSellable};
use retail_orders::Order;

/// Order with `positions` entries, every other one discounted through a chain of `depth` layers.
fn build_order(product: &Product, positions: usize, depth: usize) -> Order {
    let mut order = Order::new();
    order.set_delivery(DeliveryMethod::pickup_at(5.0)).unwrap();

    let base: SharedSellable = Rc::new(BasePosition::new(product.clone()));
    let mut chain = base.clone();
    for layer in 0..depth {
        let percent = (layer as i32 * 7) % 100;
        let next: SharedSellable = Rc::new(DiscountedPosition::new(chain, percent).unwrap());
        chain = next;
    }

    for i in 0..positions {
        let position = if i % 2 == 0 { base.clone() } else { chain.clone() };
        order.add_position(position).unwrap();
    }
    order
}

fn bench_total_price(c: &mut Criterion) {
    let mut group = c.benchmark_group("order_total_price");

    for &positions in &[10usize, 100, 1_000] {
        let product = Product::new("Bench item", 12.5);
        let order = build_order(&product, positions, 4);

        group.throughput(Throughput::Elements(positions as u64));
        group.bench_with_input(BenchmarkId::from_parameter(positions), &order, |b, order| {
            b.iter(|| black_box(order.total_price()))
        });
    }

    group.finish();
}

fn bench_price_change_then_total(c: &mut Criterion) {
    let product = Product::new("Bench item", 12.5);
    let order = build_order(&product, 100, 8);
    let mut price = 12.5;

    c.bench_function("price_change_then_total", |b| {
        b.iter(|| {
            price += 0.01;
            product.set_price(price);
            black_box(order.total_price())
        })
    });
}

fn bench_remove_all_discounted(c: &mut Criterion) {
    let product = Product::new("Bench item", 12.5);
    let order = build_order(&product, 1_000, 2);

    c.bench_function("remove_all_discounted_1000", |b| {
        b.iter_batched(
            || order.clone(),
            |mut order| black_box(order.remove_all_discounted()),
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_total_price,
    bench_price_change_then_total,
    bench_remove_all_discounted
);
criterion_main!(benches);
