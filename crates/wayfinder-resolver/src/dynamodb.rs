use crate::error::{ResolverError, Result};
use crate::registry::ResolverFactory;
use crate::resolver::Resolver;
use async_trait::async_trait;
use aws_sdk_dynamodb::config::{BehaviorVersion, Credentials, Region};
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use std::sync::Arc;
use tracing::trace;
use url::Url;
use wayfinder_core::RecordId;

/// Item attribute holding the owning repository's name.
const REPO_FIELD: &str = "repo_name";

/// DynamoDB resolver.
///
/// Configured from a URI of the form
///
/// `awsdynamodb://{table}?region=us-west-2&endpoint=http://localhost:8000&credentials=static:KEY:SECRET&partition_key=id`
///
/// The table name comes from the URI host, the partition-key attribute
/// name from the `partition_key` query parameter. Lookups are `GetItem`
/// point reads keyed by the numeric identifier.
#[derive(Debug, Clone)]
pub struct DynamoDbResolver {
    client: Client,
    table: String,
    partition_key: String,
}

impl DynamoDbResolver {
    /// Creates a resolver from an already-configured client.
    pub fn new(client: Client, table: impl Into<String>, partition_key: impl Into<String>) -> Self {
        Self {
            client,
            table: table.into(),
            partition_key: partition_key.into(),
        }
    }

    /// Creates a resolver by building a client from a configuration URI.
    pub fn from_uri(uri: &Url) -> Result<Self> {
        let config = DynamoDbConfig::from_uri(uri)?;

        let mut builder = aws_sdk_dynamodb::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(config.region));

        if let Some(endpoint) = config.endpoint {
            builder = builder.endpoint_url(endpoint);
        }

        if let Some(credentials) = config.credentials {
            builder = builder.credentials_provider(credentials);
        }

        let client = Client::from_conf(builder.build());
        Ok(Self::new(client, config.table, config.partition_key))
    }
}

#[async_trait]
impl Resolver for DynamoDbResolver {
    async fn get_repo(&self, id: RecordId) -> Result<String> {
        trace!(id = %id, table = %self.table, "dynamodb lookup");

        let output = self
            .client
            .get_item()
            .table_name(&self.table)
            .key(&self.partition_key, AttributeValue::N(id.to_string()))
            .send()
            .await
            .map_err(|e| ResolverError::Backend(format!("{}", DisplayErrorContext(e))))?;

        let item = output.item().ok_or(ResolverError::NotFound(id))?;

        match item.get(REPO_FIELD) {
            Some(AttributeValue::S(repo)) => Ok(repo.clone()),
            Some(_) => Err(ResolverError::Backend(format!(
                "attribute '{REPO_FIELD}' is not a string in item for {id}"
            ))),
            None => Err(ResolverError::Backend(format!(
                "item for {id} has no '{REPO_FIELD}' attribute"
            ))),
        }
    }
}

/// Connection settings carried in an `awsdynamodb://` URI.
#[derive(Debug)]
struct DynamoDbConfig {
    table: String,
    partition_key: String,
    region: String,
    endpoint: Option<String>,
    credentials: Option<Credentials>,
}

impl DynamoDbConfig {
    fn from_uri(uri: &Url) -> Result<Self> {
        let table = uri
            .host_str()
            .unwrap_or_else(|| uri.path().trim_start_matches('/'))
            .to_string();

        if table.is_empty() {
            return Err(ResolverError::Configuration(
                "dynamodb URI names no table".to_string(),
            ));
        }

        let mut partition_key = None;
        let mut region = None;
        let mut endpoint = None;
        let mut credentials = None;

        for (key, value) in uri.query_pairs() {
            match key.as_ref() {
                "partition_key" => partition_key = Some(value.into_owned()),
                "region" => region = Some(value.into_owned()),
                "endpoint" => endpoint = Some(value.into_owned()),
                "credentials" => credentials = Some(parse_static_credentials(&value)?),
                _ => {}
            }
        }

        let partition_key = partition_key.ok_or_else(|| {
            ResolverError::Configuration("missing 'partition_key' query parameter".to_string())
        })?;

        let region = region.ok_or_else(|| {
            ResolverError::Configuration("missing 'region' query parameter".to_string())
        })?;

        Ok(Self {
            table,
            partition_key,
            region,
            endpoint,
            credentials,
        })
    }
}

/// Parses a `static:{key}:{secret}[:{token}]` credentials string.
///
/// No other credentials scheme is understood; leaving the parameter out
/// defers to whatever the SDK does without a provider.
fn parse_static_credentials(value: &str) -> Result<Credentials> {
    let mut parts = value.splitn(4, ':');

    let scheme = parts.next().unwrap_or_default();
    if scheme != "static" {
        return Err(ResolverError::Configuration(format!(
            "unsupported credentials scheme '{scheme}'"
        )));
    }

    let (Some(access_key), Some(secret_key)) = (parts.next(), parts.next()) else {
        return Err(ResolverError::Configuration(
            "static credentials need an access key and a secret".to_string(),
        ));
    };

    let session_token = parts.next().filter(|t| !t.is_empty()).map(str::to_string);

    Ok(Credentials::new(
        access_key,
        secret_key,
        session_token,
        None,
        "wayfinder-static",
    ))
}

/// Factory for `awsdynamodb://` resolvers.
pub struct DynamoDbFactory;

#[async_trait]
impl ResolverFactory for DynamoDbFactory {
    async fn build(&self, uri: &Url) -> Result<Arc<dyn Resolver>> {
        Ok(Arc::new(DynamoDbResolver::from_uri(uri)?))
    }
}
