//! HTTP surface for the recipe routes.
//!
//! `tiny_http` accepts requests on a blocking thread; each request is driven
//! to completion on the tokio runtime through a [`Handle`]. Requests are
//! served one at a time, so the single database connection is never shared
//! across concurrent writers.

mod query;
mod routes;

use std::io::{Cursor, Read};
use std::sync::Arc;

use anyhow::Context;
use serde::Serialize;
use serde_json::Value;
use tiny_http::{Header, Method, Response};
use tokio::runtime::Handle;
use tracing::{debug, error, info, warn};

use crate::boundary::{self, MalformedInput};
use crate::commands::shared::parse::parse_sort;
use crate::commands::shared::submission::parse_submission;
use crate::context::AppContext;

pub use query::ListParams;
pub use routes::{Route, RouteError};

/// Status plus optional JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: u16,
    pub body: Option<Value>,
}

impl Reply {
    fn json<T: Serialize>(status: u16, body: &T) -> anyhow::Result<Self> {
        Ok(Self {
            status,
            body: Some(serde_json::to_value(body)?),
        })
    }

    const fn empty(status: u16) -> Self {
        Self { status, body: None }
    }

    fn into_response(self) -> Response<Cursor<Vec<u8>>> {
        let Some(body) = self.body else {
            return Response::from_data(Vec::new()).with_status_code(self.status);
        };
        let response = Response::from_string(body.to_string()).with_status_code(self.status);
        match Header::from_bytes("Content-Type", "application/json") {
            Ok(header) => response.with_header(header),
            Err(()) => response,
        }
    }
}

/// Bind `bind` and serve until Ctrl-C.
pub async fn run(bind: &str, ctx: AppContext) -> anyhow::Result<()> {
    let server = tiny_http::Server::http(bind)
        .map_err(|e| anyhow::anyhow!("failed to bind recipe server on {bind}: {e}"))?;
    let server = Arc::new(server);
    info!(%bind, "recipe server listening");

    let stopper = Arc::clone(&server);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("shutting down recipe server");
            stopper.unblock();
        }
    });

    let ctx = Arc::new(ctx);
    let runtime = Handle::current();
    tokio::task::spawn_blocking(move || {
        for request in server.incoming_requests() {
            serve_one(&runtime, &ctx, request);
        }
    })
    .await
    .context("recipe server loop failed")?;

    Ok(())
}

fn serve_one(runtime: &Handle, ctx: &AppContext, mut request: tiny_http::Request) {
    let mut body = String::new();
    let reply = match request.as_reader().read_to_string(&mut body) {
        Ok(_) => runtime.block_on(handle(ctx, request.method(), request.url(), &body)),
        Err(e) => reject(&MalformedInput(format!("unreadable request body: {e}")).into()),
    };
    debug!(
        method = %request.method(),
        url = request.url(),
        status = reply.status,
        "request served"
    );

    if let Err(e) = request.respond(reply.into_response()) {
        warn!(error = %e, "failed to write response");
    }
}

/// Route and execute one request. Never fails: every error becomes a reply.
pub async fn handle(ctx: &AppContext, method: &Method, url: &str, body: &str) -> Reply {
    let (path, query) = url.split_once('?').unwrap_or((url, ""));
    let route = match Route::resolve(method, path) {
        Ok(route) => route,
        Err(err) => {
            debug!(%method, path, error = %err, "no matching route");
            return Reply {
                status: err.status(),
                body: serde_json::to_value(err.to_error_info()).ok(),
            };
        }
    };

    match execute(ctx, route, query, body).await {
        Ok(reply) => reply,
        Err(err) => reject(&err),
    }
}

async fn execute(ctx: &AppContext, route: Route, query: &str, body: &str) -> anyhow::Result<Reply> {
    match route {
        Route::ListRecipes => {
            let params = ListParams::parse(query)?;
            let page = ctx.page_request(params.page, params.size, parse_sort(&params.sort)?);
            let response = ctx.service.list_recipes(&params.query, &page).await?;
            Reply::json(200, &response)
        }
        Route::CreateRecipe => {
            let submission = parse_submission(body, &ctx.schemas)?;
            let recipe = ctx.service.create_recipe(&submission).await?;
            Reply::json(201, &recipe)
        }
        Route::GetRecipe(id) => Reply::json(200, &ctx.service.get_recipe(id).await?),
        Route::UpdateRecipe(id) => {
            let submission = parse_submission(body, &ctx.schemas)?;
            let recipe = ctx.service.update_recipe(id, &submission).await?;
            Reply::json(200, &recipe)
        }
        Route::DeleteRecipe(id) => {
            ctx.service.delete_recipe(id).await?;
            Ok(Reply::empty(200))
        }
    }
}

fn reject(err: &anyhow::Error) -> Reply {
    let rejection = boundary::rejection(err).unwrap_or_else(|| boundary::internal(err));
    if rejection.is_client_error() {
        warn!(code = %rejection.info.code, error = %err, "request rejected");
    } else {
        error!(error = %format!("{err:#}"), "request failed");
    }
    Reply {
        status: rejection.status.http,
        body: serde_json::to_value(&rejection.info).ok(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};
    use tiny_http::Method;

    use super::{Reply, handle};
    use crate::boundary::FAILED_VALIDATION;
    use crate::context::AppContext;
    use crate::context::test_support::memory_context;

    fn spaghetti() -> String {
        json!({
            "name": "Spaghetti",
            "instructions": "Boil the pasta in salted water",
            "servingsNumber": 4,
            "ingredients": [
                {"ingredientId": 1, "measurementUnitId": 1, "quantity": 250.0},
                {"ingredientId": 2, "measurementUnitId": 4, "quantity": 2.0},
                {"ingredientId": 3, "measurementUnitId": 7, "quantity": 1.0}
            ]
        })
        .to_string()
    }

    fn body(reply: &Reply) -> &Value {
        reply.body.as_ref().expect("reply should carry a body")
    }

    async fn create(ctx: &AppContext) -> i64 {
        let reply = handle(ctx, &Method::Post, "/recipe", &spaghetti()).await;
        assert_eq!(reply.status, 201);
        body(&reply)["id"].as_i64().expect("id")
    }

    #[tokio::test]
    async fn create_returns_201_with_derived_fields() {
        let ctx = memory_context().await;
        let reply = handle(&ctx, &Method::Post, "/recipe", &spaghetti()).await;

        assert_eq!(reply.status, 201);
        let recipe = body(&reply);
        assert_eq!(recipe["recipeType"], "VEGETARIAN");
        assert_eq!(recipe["servingsNumber"], 4);
        assert_eq!(recipe["creationDate"], recipe["updatedDate"]);
        assert!(recipe["ingredients"][0].get("ingredientName").is_none());
    }

    #[tokio::test]
    async fn get_includes_ingredient_names() {
        let ctx = memory_context().await;
        let id = create(&ctx).await;

        let reply = handle(&ctx, &Method::Get, &format!("/recipe/{id}"), "").await;
        assert_eq!(reply.status, 200);
        assert_eq!(body(&reply)["ingredients"][0]["ingredientName"], "Pasta");
    }

    #[tokio::test]
    async fn unknown_recipe_is_404_with_error_info() {
        let ctx = memory_context().await;
        let reply = handle(&ctx, &Method::Get, "/recipe/100", "").await;

        assert_eq!(reply.status, 404);
        assert_eq!(
            body(&reply),
            &json!({"code": "001", "additionalData": {"message": "Recipe 100 - not found"}})
        );
    }

    #[tokio::test]
    async fn unknown_ingredient_is_404() {
        let ctx = memory_context().await;
        let submission = json!({
            "name": "Mystery",
            "instructions": "Stir",
            "servingsNumber": 1,
            "ingredients": [{"ingredientId": 999, "measurementUnitId": 1, "quantity": 1.0}]
        });
        let reply = handle(&ctx, &Method::Post, "/recipe", &submission.to_string()).await;

        assert_eq!(reply.status, 404);
        assert_eq!(body(&reply)["code"], "002");
    }

    #[tokio::test]
    async fn business_validation_is_400_with_code_004() {
        let ctx = memory_context().await;
        let submission = json!({"name": "Empty", "instructions": "Nothing", "servingsNumber": 1});
        let reply = handle(&ctx, &Method::Post, "/recipe", &submission.to_string()).await;

        assert_eq!(reply.status, 400);
        assert_eq!(body(&reply)["code"], "004");
        assert_eq!(
            body(&reply)["additionalData"]["message"],
            "Recipe should have at least one ingredient"
        );
    }

    #[tokio::test]
    async fn malformed_body_is_failed_validation() {
        let ctx = memory_context().await;
        let reply = handle(&ctx, &Method::Post, "/recipe", "{not json").await;

        assert_eq!(reply.status, 400);
        assert_eq!(body(&reply)["code"], FAILED_VALIDATION);
    }

    #[tokio::test]
    async fn update_then_delete() {
        let ctx = memory_context().await;
        let id = create(&ctx).await;
        let path = format!("/recipe/{id}");

        let beef = json!({
            "name": "Beef pasta",
            "instructions": "Brown the beef",
            "servingsNumber": 2,
            "ingredients": [
                {"ingredientId": 1, "measurementUnitId": 1, "quantity": 200.0},
                {"ingredientId": 4, "measurementUnitId": 1, "quantity": 300.0}
            ]
        });
        let reply = handle(&ctx, &Method::Put, &path, &beef.to_string()).await;
        assert_eq!(reply.status, 200);
        assert_eq!(body(&reply)["recipeType"], "NON_VEGETARIAN");

        let reply = handle(&ctx, &Method::Delete, &path, "").await;
        assert_eq!(reply, Reply { status: 200, body: None });

        let reply = handle(&ctx, &Method::Delete, &path, "").await;
        assert_eq!(reply.status, 404);
    }

    #[tokio::test]
    async fn list_applies_query_filters() {
        let ctx = memory_context().await;
        create(&ctx).await;

        let url = "/recipe?includedIngredients=pasta&size=5";
        let reply = handle(&ctx, &Method::Get, url, "").await;
        assert_eq!(reply.status, 200);
        let page = body(&reply);
        assert_eq!(page["totalElements"], 1);
        assert_eq!(page["pageSize"], 5);
        assert_eq!(page["last"], true);
        assert_eq!(page["content"][0]["ingredients"], json!([]));

        let reply = handle(&ctx, &Method::Get, "/recipe?isVegetarian=false", "").await;
        assert_eq!(body(&reply)["totalElements"], 0);
    }

    #[tokio::test]
    async fn bad_list_parameters_are_400() {
        let ctx = memory_context().await;

        let reply = handle(&ctx, &Method::Get, "/recipe?servings=many", "").await;
        assert_eq!(reply.status, 400);
        assert_eq!(body(&reply)["code"], FAILED_VALIDATION);

        let reply = handle(&ctx, &Method::Get, "/recipe?sort=calories", "").await;
        assert_eq!(reply.status, 400);
        assert_eq!(body(&reply)["code"], "004");
    }

    #[tokio::test]
    async fn unrouted_requests_are_404_and_405() {
        let ctx = memory_context().await;
        assert_eq!(handle(&ctx, &Method::Get, "/menu", "").await.status, 404);
        assert_eq!(handle(&ctx, &Method::Patch, "/recipe/1", "").await.status, 405);
    }
}
