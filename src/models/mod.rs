pub mod requests;
pub mod responses;

pub use requests::IncomingMessage;
pub use responses::{ChannelMessage, HealthResponse, MessageResponse};
