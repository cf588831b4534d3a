// Service exports
pub mod form_client;
pub mod relay;

pub use form_client::ContactFormClient;
pub use relay::{AccessKeySource, EnvAccessKey, FormRelayClient, RelayError, StaticAccessKey, UpstreamReply};
