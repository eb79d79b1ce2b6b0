use actix_web::{web, HttpResponse, Responder};
use bson::{doc, Document};
use futures::TryStreamExt;
use log::error;
use mongodb::{options::FindOptions, Client, Collection};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::models::agent::{Agent, AgentFilter, AgentType};
use crate::routes::LIST_LIMIT;
use crate::services::package_catalog::AGENTS_COLLECTION;

#[derive(serde::Deserialize)]
pub struct AgentQuery {
    agent_type: Option<AgentFilter>,
}

/// Mongo filter for the agent listing. `sponsored` matches subscribed agents
/// of either type.
pub fn agent_filter(agent_type: Option<AgentFilter>) -> Document {
    let mut filter = doc! { "is_active": true };
    match agent_type {
        Some(AgentFilter::Travel) => {
            filter.insert("type", AgentType::Travel.as_str());
        }
        Some(AgentFilter::Transport) => {
            filter.insert("type", AgentType::Transport.as_str());
        }
        Some(AgentFilter::Sponsored) => {
            filter.insert("is_subscribed", true);
        }
        None => {}
    }
    filter
}

/*
    /api/agents?agent_type=travel|transport|sponsored
*/
pub async fn get_agents(
    data: web::Data<Arc<Client>>,
    config: web::Data<AppConfig>,
    params: web::Query<AgentQuery>,
) -> impl Responder {
    let collection: Collection<Agent> =
        data.database(&config.db_name).collection(AGENTS_COLLECTION);

    let options = FindOptions::builder().limit(LIST_LIMIT).build();
    match collection
        .find(agent_filter(params.agent_type))
        .with_options(options)
        .await
    {
        Ok(cursor) => match cursor.try_collect::<Vec<Agent>>().await {
            Ok(agents) => HttpResponse::Ok().json(agents),
            Err(err) => {
                error!("Failed to collect agents: {:?}", err);
                HttpResponse::InternalServerError().body("Failed to collect agents.")
            }
        },
        Err(err) => {
            error!("Failed to find agents: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to find agents.")
        }
    }
}

/*
    /api/agents/{id}
*/
pub async fn get_agent(
    data: web::Data<Arc<Client>>,
    config: web::Data<AppConfig>,
    path: web::Path<String>,
) -> impl Responder {
    let collection: Collection<Agent> =
        data.database(&config.db_name).collection(AGENTS_COLLECTION);
    let id = path.into_inner();

    match collection.find_one(doc! { "id": &id }).await {
        Ok(Some(agent)) => HttpResponse::Ok().json(agent),
        Ok(None) => HttpResponse::NotFound().body("Agent not found"),
        Err(err) => {
            error!("Failed to fetch agent {}: {:?}", id, err);
            HttpResponse::InternalServerError().body("Failed to fetch agent.")
        }
    }
}
