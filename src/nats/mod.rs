pub mod client;
pub mod media;
pub mod subjects;

pub use client::NatsClient;
pub use media::NatsMediaSession;
