//! GraphQL Query Example
//!
//! Runs Get, Aggregate and Explore queries against the `Pizza` class
//! created by the schema_and_batch example.
//!
//! Run with: cargo run --example graphql_queries

use weaviate_core::query::{
    ExploreField, Field, Group, GroupType, Move, NearText, NearVector, Sort, SortOrder,
    WhereFilter, WhereOperator,
};
use weaviate_rs::{Client, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let client = Client::connect(Config::from_env()).await?;

    // Plain Get with a filter and sorting
    let get = client
        .graphql()
        .get()
        .with_class_name("Pizza")
        .with_fields(vec![
            Field::new("name"),
            Field::new("price"),
            Field::additional(["id"]),
        ])
        .with_where(
            WhereFilter::new()
                .path(["price"])
                .operator(WhereOperator::LessThan)
                .value_number(9.0),
        )
        .with_sort(Sort::new(["price"]).order(SortOrder::Desc))
        .with_limit(10);
    println!("Query: {}", get.build()?);

    let response = get.run().await?;
    if let Some(errors) = &response.errors {
        for error in errors {
            println!("  GraphQL error: {}", error.message);
        }
    }
    for pizza in response.objects("Get", "Pizza").into_iter().flatten() {
        println!("  {} ({})", pizza["name"], pizza["price"]);
    }

    // Vector search with grouping
    let response = client
        .graphql()
        .get()
        .with_class_name("Pizza")
        .with_fields(vec![Field::new("name"), Field::additional(["distance"])])
        .with_near_vector(NearVector::new(vec![0.8, 0.2, 0.3]).distance(0.5))
        .with_group(Group::new(GroupType::Merge).force(0.1))
        .run()
        .await?;
    println!("\nnearVector: {}", serde_json::to_string(&response.data)?);

    // Aggregate counts grouped by name
    let response = client
        .graphql()
        .aggregate()
        .with_class_name("Pizza")
        .with_group_by(["name"])
        .with_fields(vec![
            Field::new("groupedBy").fields(["value"]),
            Field::new("meta").fields(["count"]),
        ])
        .run()
        .await?;
    println!("\nAggregate: {}", serde_json::to_string(&response.data)?);

    // Explore needs a text2vec module on the server
    let explore = client
        .graphql()
        .explore()
        .with_fields([ExploreField::ClassName, ExploreField::Beacon, ExploreField::Distance])
        .with_near_text(
            NearText::new(["cheese"]).move_away_from(Move::new().concepts(["fruit"]).force(0.5)),
        )
        .with_limit(5);
    match explore.run().await {
        Ok(response) => println!("\nExplore: {:?}", response.explore()),
        Err(e) => println!("\nExplore failed: {}", e),
    }

    Ok(())
}
