//! Foods API Client
//!
//! HTTP bindings to the remote foods collection.

use gloo_net::http::Request;

use crate::models::FoodPlate;

/// Base URL of the foods API
const API_BASE: &str = "http://localhost:3333";

fn endpoint(path: &str) -> String {
    format!("{}{}", API_BASE, path)
}

fn status_error(status: u16) -> String {
    format!("foods API returned status {}", status)
}

pub async fn list_foods() -> Result<Vec<FoodPlate>, String> {
    let response = Request::get(&endpoint("/foods"))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(status_error(response.status()));
    }
    response.json().await.map_err(|e| e.to_string())
}

pub async fn create_food(food: &FoodPlate) -> Result<FoodPlate, String> {
    let response = Request::post(&endpoint("/foods"))
        .json(food)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(status_error(response.status()));
    }
    response.json().await.map_err(|e| e.to_string())
}

pub async fn update_food(food: &FoodPlate) -> Result<FoodPlate, String> {
    let response = Request::put(&endpoint(&format!("/foods/{}", food.id)))
        .json(food)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(status_error(response.status()));
    }
    response.json().await.map_err(|e| e.to_string())
}

pub async fn delete_food(id: u32) -> Result<(), String> {
    let response = Request::delete(&endpoint(&format!("/foods/{}", id)))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(status_error(response.status()));
    }
    Ok(())
}
