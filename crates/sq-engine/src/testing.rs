//! Shared test fixtures for the engine crates

use crate::results::QueryItem;
use chrono::{TimeZone, Utc};
use sq_cloud::{FilterParams, InMemoryCloud};
use sq_models::{Server, ServerStatus, User};

/// A server fixture with deterministic id `s-<name>`
pub(crate) fn server(name: &str, status: ServerStatus, flavor: &str) -> Server {
    Server {
        id: format!("s-{}", name),
        name: name.to_string(),
        status,
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        updated_at: None,
        flavor_id: flavor.to_string(),
        image_id: None,
        user_id: "u-1".to_string(),
        project_id: "p-1".to_string(),
        addresses: vec![],
        description: None,
    }
}

pub(crate) fn server_owned(name: &str, user_id: &str) -> Server {
    Server {
        user_id: user_id.to_string(),
        ..server(name, ServerStatus::Active, "m1.small")
    }
}

pub(crate) fn servers_to_items(servers: Vec<Server>) -> Vec<QueryItem<Server>> {
    servers.into_iter().map(QueryItem::new).collect()
}

pub(crate) fn server_id(server: &Server) -> String {
    server.id.clone()
}

/// Evaluate native filter parameters the way the remote would
pub(crate) fn server_matches(server: &Server, params: &FilterParams) -> bool {
    let field = |key: &str| -> Option<&str> {
        match key {
            "name" => Some(server.name.as_str()),
            "status" => Some(server.status.as_str()),
            "user_id" => Some(server.user_id.as_str()),
            "project_id" => Some(server.project_id.as_str()),
            "flavor" => Some(server.flavor_id.as_str()),
            _ => None,
        }
    };
    params.iter().all(|(key, value)| match key {
        // Scope widening flag, not a per-resource condition
        "all_tenants" => true,
        _ => field(key).is_some_and(|actual| value.as_str() == Some(actual)),
    })
}

pub(crate) fn cloud(servers: Vec<Server>) -> InMemoryCloud<Server> {
    InMemoryCloud::new(servers, server_id, server_matches)
}

pub(crate) fn user(id: &str, name: &str) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: None,
        domain_id: "default".to_string(),
        enabled: true,
        description: None,
    }
}

pub(crate) fn user_cloud(users: Vec<User>) -> InMemoryCloud<User> {
    InMemoryCloud::new(
        users,
        |u: &User| u.id.clone(),
        |u: &User, params: &FilterParams| {
            params.iter().all(|(key, value)| match key {
                "all_tenants" => true,
                "name" => value.as_str() == Some(u.name.as_str()),
                "domain_id" => value.as_str() == Some(u.domain_id.as_str()),
                _ => false,
            })
        },
    )
}
