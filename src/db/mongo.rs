use log::{info, warn};
use mongodb::{
    bson::doc,
    options::{ClientOptions, ServerApi, ServerApiVersion},
    Client,
};
use std::sync::Arc;
use std::time::Duration;

/// Build a pooled client and ping `db_name`. A failed ping is logged but not
/// fatal, so the service can come up before the database does.
pub async fn create_mongo_client(uri: &str, db_name: &str) -> mongodb::error::Result<Arc<Client>> {
    let mut client_options = ClientOptions::parse(uri).await?;

    client_options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
    client_options.connect_timeout = Some(Duration::from_secs(10));
    client_options.server_selection_timeout = Some(Duration::from_secs(10));
    client_options.max_pool_size = Some(10);
    client_options.min_pool_size = Some(1);
    client_options.server_api = Some(ServerApi::builder().version(ServerApiVersion::V1).build());

    let client = Client::with_options(client_options)?;

    match client.database(db_name).run_command(doc! {"ping": 1}).await {
        Ok(_) => info!("Connected to MongoDB database '{}'", db_name),
        Err(e) => warn!(
            "MongoDB ping failed for '{}', continuing without a verified connection: {}",
            db_name, e
        ),
    }

    Ok(Arc::new(client))
}
