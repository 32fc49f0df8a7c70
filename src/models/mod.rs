pub mod channel;
pub mod snapshot;

pub use channel::ChannelRecord;
pub use snapshot::StatsSnapshot;
