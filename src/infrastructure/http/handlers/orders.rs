//! Order HTTP Handlers

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::application::{CreateOrder, DeleteOrder, GetOrder, ListOrders, UpdateOrder};
use crate::infrastructure::http::dto::{
    CreateOrderRequest, ListOrdersParams, MessageResponse, OrderDto, OrderListResponse,
    OrderResponse, UpdateOrderRequest,
};
use crate::infrastructure::http::error::{ApiError, ApiJson};
use crate::infrastructure::http::state::OrderState;

fn parse_order_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>()
        .map_err(|_| ApiError::BadRequest(format!("invalid order id: {}", raw)))
}

/// GET /orders
pub async fn list_orders(
    State(state): State<Arc<OrderState>>,
    Query(params): Query<ListOrdersParams>,
) -> Result<Json<OrderListResponse>, ApiError> {
    let orders = state
        .list_orders_handler
        .handle(ListOrders {
            user_id: params.user_id,
            status: params.status,
        })
        .await?;

    let orders: Vec<OrderDto> = orders.into_iter().map(OrderDto::from).collect();

    Ok(Json(OrderListResponse {
        success: true,
        count: orders.len(),
        orders,
    }))
}

/// GET /orders/:id
pub async fn get_order(
    State(state): State<Arc<OrderState>>,
    Path(id): Path<String>,
) -> Result<Json<OrderResponse>, ApiError> {
    let id = parse_order_id(&id)?;
    let order = state.get_order_handler.handle(GetOrder { id }).await?;

    Ok(Json(OrderResponse {
        success: true,
        order: order.into(),
    }))
}

/// POST /orders
pub async fn create_order(
    State(state): State<Arc<OrderState>>,
    ApiJson(body): ApiJson<CreateOrderRequest>,
) -> Result<(StatusCode, Json<OrderResponse>), ApiError> {
    let (user_id, items, total) = match (body.user_id, body.items, body.total) {
        (Some(user_id), Some(items), Some(total)) => (user_id, items, total),
        (user_id, items, total) => {
            let mut missing = Vec::new();
            if user_id.is_none() {
                missing.push("user_id");
            }
            if items.is_none() {
                missing.push("items");
            }
            if total.is_none() {
                missing.push("total");
            }
            return Err(ApiError::BadRequest(format!(
                "missing required fields: {}",
                missing.join(", ")
            )));
        }
    };

    let order = state
        .create_order_handler
        .handle(CreateOrder {
            user_id,
            items,
            total,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(OrderResponse {
            success: true,
            order: order.into(),
        }),
    ))
}

/// PUT /orders/:id
pub async fn update_order(
    State(state): State<Arc<OrderState>>,
    Path(id): Path<String>,
    ApiJson(body): ApiJson<UpdateOrderRequest>,
) -> Result<Json<OrderResponse>, ApiError> {
    let id = parse_order_id(&id)?;

    let order = state
        .update_order_handler
        .handle(UpdateOrder {
            id,
            status: body.status,
            items: body.items,
            total: body.total,
        })
        .await?;

    Ok(Json(OrderResponse {
        success: true,
        order: order.into(),
    }))
}

/// DELETE /orders/:id
pub async fn delete_order(
    State(state): State<Arc<OrderState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_order_id(&id)?;
    state.delete_order_handler.handle(DeleteOrder { id }).await?;

    Ok(Json(MessageResponse::new("Order deleted successfully")))
}
