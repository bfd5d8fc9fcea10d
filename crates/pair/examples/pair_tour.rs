//! Pair Tour - The Canonical Product Type
//!
//! Run with: cargo run --example pair_tour
//! Set `RUST_LOG=product_pair=trace` to watch capability probing.
//!
//! This example demonstrates:
//! - Building pairs and projecting their slots
//! - The class operations on statically-typed pairs
//! - The same operations on dynamic pairs, where missing capabilities
//!   surface as errors instead of compile failures

use product_pair::dynamic::{DynPair, Value};
use product_pair::{laws, Orderable, Pair, Semigroup, Setoid, Show};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Pair Tour ===\n");

    // -------------------------------------------------------------------------
    // Construction
    // -------------------------------------------------------------------------
    println!("1. Construction");
    println!("---------------");

    let p = Pair::of(String::from("abc"))(vec![1, 2, 3]);
    println!("Pair:      {}", p);
    println!("fst:       {}", p.fst().show());
    println!("snd:       {}", p.snd().show());
    println!("swapped:   {}", p.clone().swap());
    println!();

    // -------------------------------------------------------------------------
    // Setoid, Ord, Semigroup
    // -------------------------------------------------------------------------
    println!("2. Comparing and Combining");
    println!("--------------------------");

    let q = Pair::new(String::from("xyz"), vec![4, 5, 6]);
    println!("{} equals {}: {}", p, q, p.equals(&q));
    println!("{} lte {}: {}", p, q, p.lte(&q));
    println!("concat:    {}", p.clone().concat(q));
    println!();

    // -------------------------------------------------------------------------
    // Functor family
    // -------------------------------------------------------------------------
    println!("3. Mapping and Chaining");
    println!("-----------------------");

    let n = Pair::new(String::from("abc"), 256.0_f64);
    println!("map sqrt:  {}", n.clone().map(f64::sqrt));
    println!(
        "bimap:     {}",
        n.clone().bimap(|s| s.to_uppercase(), f64::sqrt)
    );
    println!(
        "ap:        {}",
        Pair::new(String::from("xyz"), 256.0_f64).ap(Pair::new(String::from("abc"), f64::sqrt))
    );
    println!(
        "chain:     {}",
        n.clone().chain(|x| Pair::new(x.show(), x.sqrt()))
    );
    println!();

    // -------------------------------------------------------------------------
    // Foldable, Traversable, Comonad
    // -------------------------------------------------------------------------
    println!("4. Folding and Traversing");
    println!("-------------------------");

    let words = Pair::new(123, "foo bar baz").traverse(|s| {
        s.split_whitespace().map(String::from).collect::<Vec<_>>()
    });
    println!("traverse:  {}", words.show());
    println!("extract:   {}", n.clone().extract().show());
    println!(
        "extend:    {}",
        Pair::new("abc", 99).extend(|w| w.reduce(|acc: i32, x| acc + x, 1))
    );
    println!();

    // -------------------------------------------------------------------------
    // Laws
    // -------------------------------------------------------------------------
    println!("5. Checking Laws");
    println!("----------------");

    match laws::functor_composition(&n, f64::sqrt, |x: f64| x + 1.0) {
        Ok(()) => println!("functor composition holds for {}", n),
        Err(e) => println!("Error: {}", e),
    }
    match laws::comonad_left_identity(&p) {
        Ok(()) => println!("comonad left identity holds for {}", p),
        Err(e) => println!("Error: {}", e),
    }
    println!();

    // -------------------------------------------------------------------------
    // Dynamic pairs
    // -------------------------------------------------------------------------
    println!("6. Dynamic Pairs");
    println!("----------------");

    let comparable = DynPair::new(Value::from("abc"), Value::from(vec![1, 2, 3]));
    let opaque = DynPair::new(Value::from("abc"), Value::function(|v| v));
    println!("{} has {}", comparable, comparable.capabilities());
    println!("{} has {}", opaque, opaque.capabilities());

    match opaque.equals(&opaque) {
        Ok(eq) => println!("equals: {}", eq),
        Err(e) => println!("Error: {}", e),
    }
    match DynPair::new(Value::from(1), Value::from(2)).chain(|v| DynPair::new(Value::from(0), v)) {
        Ok(p) => println!("chain: {}", p),
        Err(e) => println!("Error: {}", e),
    }

    println!("\n=== Tour Complete ===");
}
