//! Construction of the GraphQL schema and the HTTP app serving it.
use crate::{queries::Query, settings::Settings};
use async_graphql::{
    EmptyMutation, EmptySubscription, Schema, extensions::Tracing, http::GraphiQLSource,
};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Router, extract::State, response::Html, routing::post};
use bookshelf::{BookStore, IdPolicy, Resolver};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// The schema served by the app.
pub(crate) type BookSchema = Schema<Query, EmptyMutation, EmptySubscription>;

/// Build the schema over `store`. The store is only ever read.
pub(crate) fn build_schema(store: BookStore, policy: IdPolicy) -> BookSchema {
    let query = Query {
        resolver: Resolver::new(store).with_policy(policy),
    };
    Schema::build(query, EmptyMutation, EmptySubscription)
        .extension(Tracing)
        .finish()
}

/// The handler. It's the function that's run when there's a GraphQL request.
async fn handler(
    State(schema): State<BookSchema>,
    graphql_request: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(graphql_request.into_inner()).await.into()
}

/// Builder function for the Router app.
pub(crate) fn build_app(store: BookStore, settings: &Settings) -> Router {
    let graphql = &settings.graphql;
    let schema = build_schema(store, graphql.id_policy());

    let mut route = post(handler);
    if graphql.playground {
        let page = Html(GraphiQLSource::build().endpoint(&graphql.path).finish());
        route = route.get(move || {
            let page = page.clone();
            async move { page }
        });
    }

    Router::new()
        .route(&graphql.path, route)
        .with_state(schema)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
