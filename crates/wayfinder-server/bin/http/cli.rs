use clap::Parser;
use std::net::SocketAddr;

pub const LISTEN_ADDR_ENV: &str = "WAYFINDER_LISTEN_ADDR";
pub const RESOLVER_URI_ENV: &str = "WAYFINDER_RESOLVER_URI";
pub const DATA_URI_TEMPLATE_ENV: &str = "WAYFINDER_DATA_URI_TEMPLATE";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_RESOLVER_URI: &str = "mem://";
pub const DEFAULT_DATA_URI_TEMPLATE: &str =
    "https://raw.githubusercontent.com/sfomuseum-data/{repo}/main/data";

#[derive(Debug, Parser)]
#[command(name = "wayfinder")]
pub struct CLI {
    /// Address the HTTP server binds to.
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    /// Configuration URI selecting the resolver backend; the scheme
    /// picks the backend, query parameters carry its settings.
    #[arg(long, env = RESOLVER_URI_ENV, default_value = DEFAULT_RESOLVER_URI)]
    pub resolver_uri: String,

    /// URI template locating a repository's data directory; must carry
    /// a single {repo} placeholder.
    #[arg(
        long,
        env = DATA_URI_TEMPLATE_ENV,
        default_value = DEFAULT_DATA_URI_TEMPLATE,
    )]
    pub data_uri_template: String,
}
