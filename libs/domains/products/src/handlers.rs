//! HTTP handlers for Products API

use axum::{
    extract::{Path, State},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};
use axum_helpers::{
    errors::responses::{
        BadRequestValidationResponse, ForbiddenResponse, InternalServerErrorResponse,
        NotFoundResponse, UnauthorizedResponse,
    },
    require_api_key, QueryParams, ValidatedJson, API_KEY_HEADER,
};
use core_config::auth::ApiKeyConfig;
use serde::Serialize;
use std::sync::Arc;
use utoipa::{
    openapi::security::{ApiKey, ApiKeyValue, SecurityScheme},
    Modify, OpenApi, ToSchema,
};

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product, ProductQuery, UpdateProduct};
use crate::pagination::Page;
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// Registers the `x-api-key` header scheme used by mutating endpoints
pub struct ApiKeySecurity;

impl Modify for ApiKeySecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_key",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(API_KEY_HEADER))),
        );
    }
}

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        get_product,
        update_product,
        delete_product,
    ),
    components(
        schemas(
            Product, CreateProduct, UpdateProduct,
            ProductListResponse, ProductResponse, ProductMessageResponse
        ),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            UnauthorizedResponse,
            ForbiddenResponse,
            InternalServerErrorResponse
        )
    ),
    modifiers(&ApiKeySecurity),
    tags(
        (name = "Products", description = "Product management endpoints")
    )
)]
pub struct ApiDoc;

/// Envelope for a page of products
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductListResponse {
    pub success: bool,
    /// Items in this page
    pub count: usize,
    /// Matching items before pagination
    pub total: usize,
    pub page: usize,
    pub total_pages: usize,
    pub data: Vec<Product>,
}

impl From<Page<Product>> for ProductListResponse {
    fn from(page: Page<Product>) -> Self {
        Self {
            success: true,
            count: page.count,
            total: page.total,
            page: page.page,
            total_pages: page.total_pages,
            data: page.items,
        }
    }
}

/// Envelope for a single product
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductResponse {
    pub success: bool,
    pub data: Product,
}

/// Envelope for a single product after a mutation
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductMessageResponse {
    pub success: bool,
    pub message: String,
    pub data: Product,
}

impl ProductMessageResponse {
    fn new(message: &str, data: Product) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            data,
        }
    }
}

/// Create the products router with all HTTP endpoints
///
/// Reads are public. Create, update and delete sit behind the API key
/// gate, which runs before the body is parsed or validated.
pub fn router<R: ProductRepository + 'static>(
    service: ProductService<R>,
    api_key: ApiKeyConfig,
) -> Router {
    let shared_service = Arc::new(service);

    let public = Router::new()
        .route("/", get(list_products::<R>))
        .route("/{id}", get(get_product::<R>));

    let protected = Router::new()
        .route("/", post(create_product::<R>))
        .route(
            "/{id}",
            put(update_product::<R>).delete(delete_product::<R>),
        )
        .route_layer(middleware::from_fn_with_state(api_key, require_api_key));

    public.merge(protected).with_state(shared_service)
}

/// List products with optional filters and pagination
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    params(ProductQuery),
    responses(
        (status = 200, description = "Page of matching products", body = ProductListResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    QueryParams(query): QueryParams<ProductQuery>,
) -> ProductResult<Json<ProductListResponse>> {
    let page = service.list_products(query).await?;
    Ok(Json(page.into()))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = CreateProduct,
    security(("api_key" = [])),
    responses(
        (status = 201, description = "Product created successfully", body = ProductMessageResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateProduct>,
) -> ProductResult<impl IntoResponse> {
    let product = service.create_product(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(ProductMessageResponse::new(
            "Product created successfully",
            product,
        )),
    ))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = ProductResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
) -> ProductResult<Json<ProductResponse>> {
    let product = service.get_product(&id).await?;
    Ok(Json(ProductResponse {
        success: true,
        data: product,
    }))
}

/// Update a product; absent fields keep their value
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    request_body = UpdateProduct,
    security(("api_key" = [])),
    responses(
        (status = 200, description = "Product updated successfully", body = ProductMessageResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
    ValidatedJson(input): ValidatedJson<UpdateProduct>,
) -> ProductResult<Json<ProductMessageResponse>> {
    let product = service.update_product(&id, input).await?;
    Ok(Json(ProductMessageResponse::new(
        "Product updated successfully",
        product,
    )))
}

/// Delete a product, returning the removed record
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    security(("api_key" = [])),
    responses(
        (status = 200, description = "Product deleted successfully", body = ProductMessageResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
) -> ProductResult<Json<ProductMessageResponse>> {
    let product = service.delete_product(&id).await?;
    Ok(Json(ProductMessageResponse::new(
        "Product deleted successfully",
        product,
    )))
}
