//! Schema and Batch Import Example
//!
//! Creates a `Pizza` class, imports a few objects in one batch, reads one
//! back and finally removes the matching objects with a filtered delete.
//!
//! Expects a Weaviate instance at WEAVIATE_HOST (default localhost:8080).
//!
//! Run with: cargo run --example schema_and_batch

use weaviate_core::query::{WhereFilter, WhereOperator};
use weaviate_core::{data_type, DeleteOutput, Property, WeaviateClass, WeaviateObject};
use weaviate_rs::{Client, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    println!("Weaviate schema and batch example\n");

    let client = Client::connect(Config::from_env()).await?;

    if !client.misc().ready_checker().run().await? {
        anyhow::bail!("Weaviate is not ready");
    }

    // Start from a clean class
    if client
        .schema()
        .class_getter()
        .with_class_name("Pizza")
        .run()
        .await?
        .is_some()
    {
        client
            .schema()
            .class_deleter()
            .with_class_name("Pizza")
            .run()
            .await?;
    }

    let class = WeaviateClass::new("Pizza")
        .description("A delicious religion like food and arguably the best export of Italy.")
        .vectorizer("none")
        .property(Property::new("name", data_type::TEXT))
        .property(Property::new("description", data_type::TEXT))
        .property(Property::new("price", data_type::NUMBER));
    client.schema().class_creator().with_class(class).run().await?;
    println!("Created class Pizza");

    let pizzas = [
        ("Margherita", "Tomato, mozzarella and basil.", 7.5, [0.9, 0.1, 0.1]),
        ("Hawaii", "Ham and pineapple, of all things.", 8.9, [0.2, 0.8, 0.3]),
        ("Quattro Formaggi", "Four kinds of cheese.", 9.9, [0.7, 0.2, 0.6]),
    ];
    let objects = pizzas.iter().map(|(name, description, price, vector)| {
        WeaviateObject::new("Pizza")
            .property("name", *name)
            .property("description", *description)
            .property("price", *price)
            .vector(vector.to_vec())
    });

    let results = client
        .batch()
        .objects_batcher()
        .with_objects(objects)
        .run()
        .await?;
    for result in &results {
        let errors = result.errors();
        if errors.is_empty() {
            println!("  imported {}", result.id.as_deref().unwrap_or("?"));
        } else {
            println!("  failed: {}", errors.join("; "));
        }
    }

    if let Some(id) = results.first().and_then(|r| r.id.clone()) {
        let found = client
            .data()
            .getter()
            .with_class_name("Pizza")
            .with_id(&id)
            .with_vector()
            .run()
            .await?;
        if let Some(object) = found.first() {
            println!("\nRead back {}: {:?}", id, object.properties.get("name"));
        }
    }

    let deleted = client
        .batch()
        .objects_batch_deleter()
        .with_class_name("Pizza")
        .with_where(
            WhereFilter::new()
                .path(["price"])
                .operator(WhereOperator::GreaterThan)
                .value_number(8.0),
        )
        .with_output(DeleteOutput::Verbose)
        .run()
        .await?;
    println!(
        "\nDeleted {} of {} matching objects",
        deleted.results.successful, deleted.results.matches
    );

    Ok(())
}
